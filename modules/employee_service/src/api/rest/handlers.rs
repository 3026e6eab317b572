//! HTTP request handlers - thin layer that delegates to domain services

use super::{dto::*, error::ApiError};
use crate::contract::{NewCompany, NewEmployee, PageRequest};
use crate::domain::{CompanyService, EmployeeService};
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters accepted by the list endpoints
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Filter by exact gender (employees only)
    pub gender: Option<String>,
    /// Zero-indexed page number
    pub page: Option<u64>,
    /// Page size; only used together with `page`
    pub page_size: Option<u64>,
}

impl ListQuery {
    /// A page is requested only when both `page` and `pageSize` are present
    fn page_request(&self) -> Option<PageRequest> {
        match (self.page, self.page_size) {
            (Some(page), Some(page_size)) => Some(PageRequest::new(page, page_size)),
            _ => None,
        }
    }
}

// ===== Employee Handlers =====

/// List employees: paginated, filtered by gender, or all
pub async fn list_employees(
    service: Arc<EmployeeService>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let employees = if let Some(page) = query.page_request() {
        service.find_by_page(page).await?
    } else if let Some(gender) = query.gender.as_deref() {
        service.find_by_gender(gender).await?
    } else {
        service.find_all().await?
    };

    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// Get a specific employee
pub async fn get_employee(
    service: Arc<EmployeeService>,
    Path(id): Path<i32>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = service.find_by_id(id).await?;

    Ok(Json(employee.into()))
}

/// Create an employee
pub async fn create_employee(
    service: Arc<EmployeeService>,
    Json(req): Json<EmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), ApiError> {
    let employee = service.create(NewEmployee::try_from(req)?).await?;

    Ok((StatusCode::CREATED, Json(employee.into())))
}

/// Merge age and salary into an existing employee
pub async fn update_employee(
    service: Arc<EmployeeService>,
    Path(id): Path<i32>,
    Json(req): Json<EmployeeRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = service.update(id, req.into()).await?;

    Ok(Json(employee.into()))
}

/// Delete an employee
pub async fn delete_employee(
    service: Arc<EmployeeService>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ===== Company Handlers =====

/// List companies: paginated or all
pub async fn list_companies(
    service: Arc<CompanyService>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<CompanyResponse>>, ApiError> {
    let companies = match query.page_request() {
        Some(page) => service.find_by_page(page).await?,
        None => service.find_all().await?,
    };

    Ok(Json(companies.into_iter().map(Into::into).collect()))
}

/// Get a specific company
pub async fn get_company(
    service: Arc<CompanyService>,
    Path(id): Path<i32>,
) -> Result<Json<CompanyResponse>, ApiError> {
    let company = service.find_by_id(id).await?;

    Ok(Json(company.into()))
}

/// List the employees of a company
pub async fn get_company_employees(
    service: Arc<CompanyService>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let employees = service.find_employees_by_id(id).await?;

    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// Create a company
pub async fn create_company(
    service: Arc<CompanyService>,
    Json(req): Json<CompanyRequest>,
) -> Result<(StatusCode, Json<CompanyResponse>), ApiError> {
    let company = service.create(NewCompany::try_from(req)?).await?;

    Ok((StatusCode::CREATED, Json(company.into())))
}

/// Rename a company
pub async fn update_company(
    service: Arc<CompanyService>,
    Path(id): Path<i32>,
    Json(req): Json<CompanyRequest>,
) -> Result<Json<CompanyResponse>, ApiError> {
    let company = service.update(id, req.into()).await?;

    Ok(Json(company.into()))
}

/// Delete a company
pub async fn delete_company(
    service: Arc<CompanyService>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
