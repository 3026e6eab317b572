//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client traits.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::{CompanyApi, EmployeeApi};
pub use error::ServiceError;
pub use model::{
    Company, CompanyPatch, Employee, EmployeePatch, NewCompany, NewEmployee, PageRequest,
};
