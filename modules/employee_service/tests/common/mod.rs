//! Common test utilities and shared fixtures
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use axum::{body::Body, http::Request, response::Response, Router};
use employee_service::infra::storage::db;
use employee_service::{DatabaseConfig, EmployeeServiceModule, NewCompany, NewEmployee};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Fresh in-memory SQLite database with the schema applied
pub async fn inmem_db() -> Arc<DatabaseConnection> {
    let conn = db::connect_and_migrate(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open in-memory database");
    Arc::new(conn)
}

/// Module wired to a fresh in-memory database
pub async fn inmem_module() -> EmployeeServiceModule {
    EmployeeServiceModule::new(inmem_db().await)
}

/// REST router over a fresh in-memory database
pub async fn test_router() -> (Router, EmployeeServiceModule) {
    let module = inmem_module().await;
    let router = module
        .register_rest(Router::new())
        .expect("Failed to register routes");
    (router, module)
}

pub fn new_employee(name: &str, age: i32, gender: &str, salary: i32) -> NewEmployee {
    NewEmployee {
        name: name.to_string(),
        age,
        gender: gender.to_string(),
        salary,
        company_id: None,
    }
}

pub fn sally(company_id: Option<i32>) -> NewEmployee {
    NewEmployee {
        company_id,
        ..new_employee("Sally", 22, "Female", 10000)
    }
}

pub fn lily(company_id: Option<i32>) -> NewEmployee {
    NewEmployee {
        company_id,
        ..new_employee("Lily", 26, "Female", 5000)
    }
}

pub fn tom(company_id: Option<i32>) -> NewEmployee {
    NewEmployee {
        company_id,
        ..new_employee("Tom", 22, "Male", 8000)
    }
}

pub fn new_company(name: &str) -> NewCompany {
    NewCompany {
        company_name: name.to_string(),
    }
}

// ===== HTTP helpers =====

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn with_json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}
