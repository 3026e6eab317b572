//! Contract models for employee service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

/// Employee record as persisted by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Store-assigned identifier, immutable once assigned
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: i32,
    /// Owning company, if any
    pub company_id: Option<i32>,
}

/// Employee to be inserted; the store assigns the identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: i32,
    pub company_id: Option<i32>,
}

/// Partial employee update.
///
/// Carries everything a client may send, but only `age` and `salary` are
/// merged into the stored record. The remaining fields are accepted and
/// ignored so that an update can never null out attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub salary: Option<i32>,
    pub company_id: Option<i32>,
}

/// Company with its derived employee list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    /// Store-assigned identifier
    pub id: i32,
    pub company_name: String,
    /// Employees referencing this company (not stored on the company row)
    pub employees: Vec<Employee>,
}

/// Company to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub company_name: String,
}

/// Partial company update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyPatch {
    pub company_name: Option<String>,
}

/// Zero-indexed, fixed-size slice of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }

    /// Number of rows to skip, or `None` when it does not fit a SQL `BIGINT`.
    ///
    /// A page whose offset overflows lies past the end of any table.
    pub fn offset(&self) -> Option<u64> {
        self.page
            .checked_mul(self.page_size)
            .filter(|offset| *offset <= i64::MAX as u64)
    }
}
