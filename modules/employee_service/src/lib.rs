//! Employee Service Module
//!
//! CRUD over employees and the companies they belong to, persisted through
//! SeaORM and exposed over REST and an in-process client.

// Public exports
pub mod contract;
pub use contract::{
    Company, CompanyApi, CompanyPatch, Employee, EmployeeApi, EmployeePatch, NewCompany,
    NewEmployee, PageRequest, ServiceError,
};

pub mod module;
pub use module::EmployeeServiceModule;

pub mod config;
pub use config::DatabaseConfig;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
