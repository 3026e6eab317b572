//! Native client implementation - wraps domain services for in-process calls

use crate::contract::{
    Company, CompanyApi, CompanyPatch, Employee, EmployeeApi, EmployeePatch, NewCompany,
    NewEmployee, PageRequest, ServiceError,
};
use crate::domain::{CompanyService, EmployeeService};
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain services
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    employees: Arc<EmployeeService>,
    companies: Arc<CompanyService>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(employees: Arc<EmployeeService>, companies: Arc<CompanyService>) -> Self {
        Self {
            employees,
            companies,
        }
    }
}

#[async_trait]
impl EmployeeApi for NativeClient {
    async fn list_employees(&self) -> Result<Vec<Employee>, ServiceError> {
        self.employees.find_all().await
    }

    async fn list_employees_by_gender(&self, gender: &str) -> Result<Vec<Employee>, ServiceError> {
        self.employees.find_by_gender(gender).await
    }

    async fn list_employees_page(&self, page: PageRequest) -> Result<Vec<Employee>, ServiceError> {
        self.employees.find_by_page(page).await
    }

    async fn get_employee(&self, id: i32) -> Result<Employee, ServiceError> {
        self.employees.find_by_id(id).await
    }

    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, ServiceError> {
        self.employees.create(employee).await
    }

    async fn update_employee(&self, id: i32, patch: EmployeePatch) -> Result<Employee, ServiceError> {
        self.employees.update(id, patch).await
    }

    async fn delete_employee(&self, id: i32) -> Result<(), ServiceError> {
        self.employees.delete(id).await
    }
}

#[async_trait]
impl CompanyApi for NativeClient {
    async fn list_companies(&self) -> Result<Vec<Company>, ServiceError> {
        self.companies.find_all().await
    }

    async fn list_companies_page(&self, page: PageRequest) -> Result<Vec<Company>, ServiceError> {
        self.companies.find_by_page(page).await
    }

    async fn get_company(&self, id: i32) -> Result<Company, ServiceError> {
        self.companies.find_by_id(id).await
    }

    async fn get_company_employees(&self, id: i32) -> Result<Vec<Employee>, ServiceError> {
        self.companies.find_employees_by_id(id).await
    }

    async fn create_company(&self, company: NewCompany) -> Result<Company, ServiceError> {
        self.companies.create(company).await
    }

    async fn update_company(&self, id: i32, patch: CompanyPatch) -> Result<Company, ServiceError> {
        self.companies.update(id, patch).await
    }

    async fn delete_company(&self, id: i32) -> Result<(), ServiceError> {
        self.companies.delete(id).await
    }
}
