//! Request validation shared by the domain services

use crate::contract::{PageRequest, ServiceError};

/// Largest page size a SQL `LIMIT` can carry
pub const MAX_PAGE_SIZE: u64 = i64::MAX as u64;

/// Reject pages that cannot slice anything.
///
/// Page numbers are unbounded: a page past the end is valid and simply empty.
pub fn validate_page(page: PageRequest) -> Result<(), ServiceError> {
    if page.page_size == 0 {
        return Err(ServiceError::validation("pageSize must be greater than 0"));
    }
    if page.page_size > MAX_PAGE_SIZE {
        return Err(ServiceError::validation(format!(
            "pageSize must not exceed {}",
            MAX_PAGE_SIZE
        )));
    }
    Ok(())
}

/// Unwrap a required field or report it by its wire name
pub fn require<T>(value: Option<T>, field: &str) -> Result<T, ServiceError> {
    value.ok_or_else(|| ServiceError::validation(format!("{} is required", field)))
}
