//! Route registration

use super::{dto::*, error::ApiError, handlers, openapi::ApiDoc};
use crate::domain::{CompanyService, EmployeeService};
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// Register all REST routes
pub fn register_routes(
    router: Router,
    employees: Arc<EmployeeService>,
    companies: Arc<CompanyService>,
) -> anyhow::Result<Router> {
    let router = router
        // Employee endpoints
        .route(
            "/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/employees/{id}",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        // Company endpoints
        .route(
            "/companies",
            get(list_companies_handler).post(create_company_handler),
        )
        .route(
            "/companies/{id}",
            get(get_company_handler)
                .put(update_company_handler)
                .delete(delete_company_handler),
        )
        .route("/companies/{id}/employees", get(get_company_employees_handler))
        // Service endpoints
        .route("/openapi.json", get(openapi_handler))
        .route("/health", get(health_handler))
        // Add services as extensions for handlers
        .layer(Extension(employees))
        .layer(Extension(companies));

    Ok(router)
}

// ===== Handler wrappers that extract services from Extension =====

async fn list_employees_handler(
    Extension(service): Extension<Arc<EmployeeService>>,
    query: Query<handlers::ListQuery>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    handlers::list_employees(service, query).await
}

async fn get_employee_handler(
    Extension(service): Extension<Arc<EmployeeService>>,
    path: Path<i32>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    handlers::get_employee(service, path).await
}

async fn create_employee_handler(
    Extension(service): Extension<Arc<EmployeeService>>,
    json: Json<EmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), ApiError> {
    handlers::create_employee(service, json).await
}

async fn update_employee_handler(
    Extension(service): Extension<Arc<EmployeeService>>,
    path: Path<i32>,
    json: Json<EmployeeRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    handlers::update_employee(service, path, json).await
}

async fn delete_employee_handler(
    Extension(service): Extension<Arc<EmployeeService>>,
    path: Path<i32>,
) -> Result<StatusCode, ApiError> {
    handlers::delete_employee(service, path).await
}

async fn list_companies_handler(
    Extension(service): Extension<Arc<CompanyService>>,
    query: Query<handlers::ListQuery>,
) -> Result<Json<Vec<CompanyResponse>>, ApiError> {
    handlers::list_companies(service, query).await
}

async fn get_company_handler(
    Extension(service): Extension<Arc<CompanyService>>,
    path: Path<i32>,
) -> Result<Json<CompanyResponse>, ApiError> {
    handlers::get_company(service, path).await
}

async fn get_company_employees_handler(
    Extension(service): Extension<Arc<CompanyService>>,
    path: Path<i32>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    handlers::get_company_employees(service, path).await
}

async fn create_company_handler(
    Extension(service): Extension<Arc<CompanyService>>,
    json: Json<CompanyRequest>,
) -> Result<(StatusCode, Json<CompanyResponse>), ApiError> {
    handlers::create_company(service, json).await
}

async fn update_company_handler(
    Extension(service): Extension<Arc<CompanyService>>,
    path: Path<i32>,
    json: Json<CompanyRequest>,
) -> Result<Json<CompanyResponse>, ApiError> {
    handlers::update_company(service, path, json).await
}

async fn delete_company_handler(
    Extension(service): Extension<Arc<CompanyService>>,
    path: Path<i32>,
) -> Result<StatusCode, ApiError> {
    handlers::delete_company(service, path).await
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
