//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Employee DTOs =====

/// Employee response DTO; salary is never exposed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Lisa")]
    pub name: String,

    #[schema(example = 21)]
    pub age: i32,

    #[schema(example = "female")]
    pub gender: String,
}

/// Employee create/update request
///
/// POST requires name, age, gender and salary. PUT accepts any subset but
/// only age and salary are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[schema(example = "Lisa")]
    pub name: Option<String>,

    #[schema(example = 21)]
    pub age: Option<i32>,

    #[schema(example = "female")]
    pub gender: Option<String>,

    #[schema(example = 2000)]
    pub salary: Option<i32>,

    /// Owning company identifier
    pub company_id: Option<i32>,
}

// ===== Company DTOs =====

/// Company response DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "ABC")]
    pub company_name: String,

    /// Employees referencing this company
    pub employee_list: Vec<EmployeeResponse>,
}

/// Company create/update request
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRequest {
    #[schema(example = "ABC")]
    pub company_name: Option<String>,
}

// Note: Conversion implementations live in mapper.rs
