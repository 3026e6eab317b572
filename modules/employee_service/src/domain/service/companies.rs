//! Company service - business logic orchestration for companies

use crate::contract::error::internal;
use crate::contract::{Company, CompanyPatch, Employee, NewCompany, PageRequest, ServiceError};
use crate::domain::repository::CompanyRepository;
use crate::domain::validation::validate_page;
use std::sync::Arc;

/// Domain service for companies
pub struct CompanyService {
    company_repo: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    /// Create a new service instance
    pub fn new(company_repo: Arc<dyn CompanyRepository>) -> Self {
        Self { company_repo }
    }

    /// List all companies with their employees
    pub async fn find_all(&self) -> Result<Vec<Company>, ServiceError> {
        self.company_repo
            .find_all()
            .await
            .map_err(internal("company.find_all"))
    }

    /// Get a company by identifier
    pub async fn find_by_id(&self, id: i32) -> Result<Company, ServiceError> {
        self.company_repo
            .find_by_id(id)
            .await
            .map_err(internal("company.find_by_id"))?
            .ok_or_else(|| ServiceError::company_not_found(id))
    }

    /// List one page of companies
    pub async fn find_by_page(&self, page: PageRequest) -> Result<Vec<Company>, ServiceError> {
        validate_page(page)?;

        self.company_repo
            .find_by_page(page)
            .await
            .map_err(internal("company.find_by_page"))
    }

    /// Create a company
    pub async fn create(&self, company: NewCompany) -> Result<Company, ServiceError> {
        let created = self
            .company_repo
            .create(&company)
            .await
            .map_err(internal("company.create"))?;

        tracing::debug!(company_id = created.id, "Company created");
        Ok(created)
    }

    /// Merge the company name from `patch` and persist the merged company
    pub async fn update(&self, id: i32, patch: CompanyPatch) -> Result<Company, ServiceError> {
        let mut company = self.find_by_id(id).await?;

        if let Some(company_name) = patch.company_name {
            company.company_name = company_name;
        }

        let saved = self
            .company_repo
            .save(&company)
            .await
            .map_err(internal("company.save"))?;

        tracing::debug!(company_id = id, "Company updated");
        Ok(saved)
    }

    /// Delete a company; its employees stay but lose the company reference
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let exists = self
            .company_repo
            .exists_by_id(id)
            .await
            .map_err(internal("company.exists_by_id"))?;
        if !exists {
            return Err(ServiceError::company_not_found(id));
        }

        self.company_repo
            .delete_by_id(id)
            .await
            .map_err(internal("company.delete_by_id"))?;

        tracing::debug!(company_id = id, "Company deleted");
        Ok(())
    }

    /// List the employees of a company
    pub async fn find_employees_by_id(&self, id: i32) -> Result<Vec<Employee>, ServiceError> {
        Ok(self.find_by_id(id).await?.employees)
    }
}
