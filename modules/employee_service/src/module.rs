//! Module wiring: store handle -> repositories -> services -> REST/native APIs

use crate::api::native::NativeClient;
use crate::config::DatabaseConfig;
use crate::domain::{CompanyService, EmployeeService};
use crate::infra::storage::{db, SeaOrmCompanyRepository, SeaOrmEmployeeRepository};
use anyhow::Result;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Employee service module
#[derive(Clone)]
pub struct EmployeeServiceModule {
    employees: Arc<EmployeeService>,
    companies: Arc<CompanyService>,
}

impl EmployeeServiceModule {
    /// Build the module on top of an open, migrated connection
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        let employee_repo = Arc::new(SeaOrmEmployeeRepository::new(conn.clone()));
        let company_repo = Arc::new(SeaOrmCompanyRepository::new(conn));

        let employees = Arc::new(EmployeeService::new(employee_repo, company_repo.clone()));
        let companies = Arc::new(CompanyService::new(company_repo));

        Self {
            employees,
            companies,
        }
    }

    /// Connect to the configured database, run migrations and build the module
    pub async fn init(cfg: &DatabaseConfig) -> Result<Self> {
        let conn = db::connect_and_migrate(cfg).await?;
        tracing::info!("Employee service initialized");
        Ok(Self::new(Arc::new(conn)))
    }

    pub fn employees(&self) -> Arc<EmployeeService> {
        self.employees.clone()
    }

    pub fn companies(&self) -> Arc<CompanyService> {
        self.companies.clone()
    }

    /// In-process client for other modules
    pub fn client(&self) -> NativeClient {
        NativeClient::new(self.employees.clone(), self.companies.clone())
    }

    /// Mount the REST API onto `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        tracing::info!("Registering employee service REST routes");
        crate::api::rest::register_routes(router, self.employees(), self.companies())
    }
}
