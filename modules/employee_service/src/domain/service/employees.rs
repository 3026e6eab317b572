//! Employee service - business logic orchestration for employees

use crate::contract::error::internal;
use crate::contract::{Employee, EmployeePatch, NewEmployee, PageRequest, ServiceError};
use crate::domain::repository::{CompanyRepository, EmployeeRepository};
use crate::domain::validation::validate_page;
use std::sync::Arc;

/// Domain service for employees
pub struct EmployeeService {
    employee_repo: Arc<dyn EmployeeRepository>,
    company_repo: Arc<dyn CompanyRepository>,
}

impl EmployeeService {
    /// Create a new service instance
    pub fn new(
        employee_repo: Arc<dyn EmployeeRepository>,
        company_repo: Arc<dyn CompanyRepository>,
    ) -> Self {
        Self {
            employee_repo,
            company_repo,
        }
    }

    /// List all employees
    pub async fn find_all(&self) -> Result<Vec<Employee>, ServiceError> {
        self.employee_repo
            .find_all()
            .await
            .map_err(internal("employee.find_all"))
    }

    /// Get an employee by identifier
    pub async fn find_by_id(&self, id: i32) -> Result<Employee, ServiceError> {
        self.employee_repo
            .find_by_id(id)
            .await
            .map_err(internal("employee.find_by_id"))?
            .ok_or_else(|| ServiceError::employee_not_found(id))
    }

    /// List employees with exactly this gender (case-sensitive)
    pub async fn find_by_gender(&self, gender: &str) -> Result<Vec<Employee>, ServiceError> {
        self.employee_repo
            .find_all_by_gender(gender)
            .await
            .map_err(internal("employee.find_all_by_gender"))
    }

    /// List one page of employees
    pub async fn find_by_page(&self, page: PageRequest) -> Result<Vec<Employee>, ServiceError> {
        validate_page(page)?;

        self.employee_repo
            .find_by_page(page)
            .await
            .map_err(internal("employee.find_by_page"))
    }

    /// Create an employee, checking its company reference first
    pub async fn create(&self, employee: NewEmployee) -> Result<Employee, ServiceError> {
        if let Some(company_id) = employee.company_id {
            let exists = self
                .company_repo
                .exists_by_id(company_id)
                .await
                .map_err(internal("company.exists_by_id"))?;
            if !exists {
                return Err(ServiceError::validation(format!(
                    "company {} does not exist",
                    company_id
                )));
            }
        }

        let created = self
            .employee_repo
            .create(&employee)
            .await
            .map_err(internal("employee.create"))?;

        tracing::debug!(employee_id = created.id, "Employee created");
        Ok(created)
    }

    /// Merge age and salary from `patch` into the stored employee.
    ///
    /// Name, gender and company reference are never touched, whatever the
    /// patch carries.
    pub async fn update(&self, id: i32, patch: EmployeePatch) -> Result<Employee, ServiceError> {
        let mut employee = self.find_by_id(id).await?;

        if let Some(age) = patch.age {
            employee.age = age;
        }
        if let Some(salary) = patch.salary {
            employee.salary = salary;
        }

        let saved = self
            .employee_repo
            .save(&employee)
            .await
            .map_err(internal("employee.save"))?;

        tracing::debug!(employee_id = id, "Employee updated");
        Ok(saved)
    }

    /// Delete an employee; fails with `NotFound` when it does not exist
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let exists = self
            .employee_repo
            .exists_by_id(id)
            .await
            .map_err(internal("employee.exists_by_id"))?;
        if !exists {
            return Err(ServiceError::employee_not_found(id));
        }

        self.employee_repo
            .delete_by_id(id)
            .await
            .map_err(internal("employee.delete_by_id"))?;

        tracing::debug!(employee_id = id, "Employee deleted");
        Ok(())
    }
}
