//! HTTP error mapping
//!
//! `NotFound` becomes a bare 404; everything else is rendered as RFC-9457
//! Problem Details.

use crate::contract::ServiceError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Error returned by every handler
#[derive(Debug)]
pub enum ApiError {
    /// 404 with an empty body
    NotFound,
    Problem(Problem),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Problem(problem) => problem.into_response(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        map_domain_error(error)
    }
}

/// Map domain errors to HTTP responses
pub fn map_domain_error(error: ServiceError) -> ApiError {
    match error {
        ServiceError::NotFound { resource, id } => {
            tracing::debug!(%resource, id, "Resource not found");
            ApiError::NotFound
        }

        ServiceError::Validation { message } => ApiError::Problem(
            Problem::new(StatusCode::BAD_REQUEST, "Validation Error").with_detail(message),
        ),

        ServiceError::Internal => ApiError::Problem(
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .with_detail("An unexpected error occurred"),
        ),
    }
}
