//! Native client traits for inter-module communication
//!
//! These traits define the API that other modules use to interact with the
//! employee service. NO HTTP - direct function calls.

use super::{
    error::ServiceError,
    model::{Company, CompanyPatch, Employee, EmployeePatch, NewCompany, NewEmployee, PageRequest},
};
use async_trait::async_trait;

/// Employee operations
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// List every employee
    async fn list_employees(&self) -> Result<Vec<Employee>, ServiceError>;

    /// List employees whose gender matches exactly
    async fn list_employees_by_gender(&self, gender: &str) -> Result<Vec<Employee>, ServiceError>;

    /// List one page of employees
    async fn list_employees_page(&self, page: PageRequest) -> Result<Vec<Employee>, ServiceError>;

    /// Get an employee by identifier
    async fn get_employee(&self, id: i32) -> Result<Employee, ServiceError>;

    /// Create an employee
    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, ServiceError>;

    /// Merge age and salary into an existing employee
    async fn update_employee(&self, id: i32, patch: EmployeePatch) -> Result<Employee, ServiceError>;

    /// Delete an employee
    async fn delete_employee(&self, id: i32) -> Result<(), ServiceError>;
}

/// Company operations
#[async_trait]
pub trait CompanyApi: Send + Sync {
    /// List every company with its employees
    async fn list_companies(&self) -> Result<Vec<Company>, ServiceError>;

    /// List one page of companies
    async fn list_companies_page(&self, page: PageRequest) -> Result<Vec<Company>, ServiceError>;

    /// Get a company by identifier
    async fn get_company(&self, id: i32) -> Result<Company, ServiceError>;

    /// List the employees of a company
    async fn get_company_employees(&self, id: i32) -> Result<Vec<Employee>, ServiceError>;

    /// Create a company
    async fn create_company(&self, company: NewCompany) -> Result<Company, ServiceError>;

    /// Rename a company
    async fn update_company(&self, id: i32, patch: CompanyPatch) -> Result<Company, ServiceError>;

    /// Delete a company
    async fn delete_company(&self, id: i32) -> Result<(), ServiceError>;
}
