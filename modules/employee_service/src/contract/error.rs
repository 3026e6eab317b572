//! Contract error types for employee service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;

/// Employee service domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Employee or company identifier does not resolve
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (employee, company)
        resource: String,
        /// Resource identifier
        id: i32,
    },

    /// Request is well-formed but cannot be applied
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Store failure; details are logged where the error is raised
    #[error("Internal error")]
    Internal,
}

impl ServiceError {
    pub fn employee_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "employee".to_string(),
            id,
        }
    }

    pub fn company_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "company".to_string(),
            id,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Logs a store failure and collapses it to [`ServiceError::Internal`]
pub(crate) fn internal(operation: &'static str) -> impl FnOnce(anyhow::Error) -> ServiceError {
    move |error| {
        tracing::error!(operation, error = ?error, "Repository call failed");
        ServiceError::Internal
    }
}
