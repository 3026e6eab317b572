//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Company, Employee, NewCompany, NewEmployee, PageRequest};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for employees
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// List all employees ordered by identifier
    async fn find_all(&self) -> Result<Vec<Employee>>;

    /// Find an employee by identifier
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>>;

    /// Fetch one zero-indexed page; out-of-range pages are empty
    async fn find_by_page(&self, page: PageRequest) -> Result<Vec<Employee>>;

    /// Find all employees with exactly this gender
    async fn find_all_by_gender(&self, gender: &str) -> Result<Vec<Employee>>;

    /// Insert a new employee and return it with its assigned identifier
    async fn create(&self, employee: &NewEmployee) -> Result<Employee>;

    /// Insert or update by identifier
    async fn save(&self, employee: &Employee) -> Result<Employee>;

    /// Delete by identifier; returns whether a row was removed
    async fn delete_by_id(&self, id: i32) -> Result<bool>;

    /// Check if an employee exists
    async fn exists_by_id(&self, id: i32) -> Result<bool>;
}

/// Repository for companies
///
/// Every returned [`Company`] carries its employee list.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// List all companies ordered by identifier
    async fn find_all(&self) -> Result<Vec<Company>>;

    /// Find a company by identifier
    async fn find_by_id(&self, id: i32) -> Result<Option<Company>>;

    /// Fetch one zero-indexed page; out-of-range pages are empty
    async fn find_by_page(&self, page: PageRequest) -> Result<Vec<Company>>;

    /// Insert a new company
    async fn create(&self, company: &NewCompany) -> Result<Company>;

    /// Insert or update by identifier; the employee list is not written
    async fn save(&self, company: &Company) -> Result<Company>;

    /// Delete by identifier, detaching its employees first
    async fn delete_by_id(&self, id: i32) -> Result<bool>;

    /// Check if a company exists
    async fn exists_by_id(&self, id: i32) -> Result<bool>;
}
