//! SeaORM repository implementations

use crate::contract::{Company, Employee, NewCompany, NewEmployee, PageRequest};
use crate::domain::repository::{CompanyRepository, EmployeeRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    prelude::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait, Value,
};
use std::sync::Arc;

use super::entity::{company, employee};
use super::mapper::company_from_parts;

// ===== Employee Repository =====

pub struct SeaOrmEmployeeRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>> {
        let results = employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>> {
        let result = employee::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(Into::into))
    }

    async fn find_by_page(&self, page: PageRequest) -> Result<Vec<Employee>> {
        if page.offset().is_none() {
            return Ok(Vec::new());
        }

        let results = employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .paginate(&*self.db, page.page_size)
            .fetch_page(page.page)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn find_all_by_gender(&self, gender: &str) -> Result<Vec<Employee>> {
        let results = employee::Entity::find()
            .filter(employee::Column::Gender.eq(gender))
            .order_by_asc(employee::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn create(&self, employee: &NewEmployee) -> Result<Employee> {
        let active: employee::ActiveModel = employee.into();
        let result = active.insert(&*self.db).await?;

        Ok(result.into())
    }

    async fn save(&self, employee: &Employee) -> Result<Employee> {
        let existing = employee::Entity::find_by_id(employee.id)
            .one(&*self.db)
            .await?;

        let active: employee::ActiveModel = employee.into();
        let result = if existing.is_some() {
            active.update(&*self.db).await?
        } else {
            active.insert(&*self.db).await?
        };

        Ok(result.into())
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        let result = employee::Entity::delete_by_id(id).exec(&*self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool> {
        let count = employee::Entity::find_by_id(id).count(&*self.db).await?;

        Ok(count > 0)
    }
}

// ===== Company Repository =====

pub struct SeaOrmCompanyRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCompanyRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Load the employee lists for a batch of companies in one query
    async fn with_employees(&self, companies: Vec<company::Model>) -> Result<Vec<Company>> {
        let employees = companies.load_many(employee::Entity, &*self.db).await?;

        Ok(companies
            .into_iter()
            .zip(employees)
            .map(|(company, employees)| company_from_parts(company, employees))
            .collect())
    }
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn find_all(&self) -> Result<Vec<Company>> {
        let results = company::Entity::find()
            .order_by_asc(company::Column::Id)
            .all(&*self.db)
            .await?;

        self.with_employees(results).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Company>> {
        let Some(result) = company::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_employees(vec![result]).await?.pop())
    }

    async fn find_by_page(&self, page: PageRequest) -> Result<Vec<Company>> {
        if page.offset().is_none() {
            return Ok(Vec::new());
        }

        let results = company::Entity::find()
            .order_by_asc(company::Column::Id)
            .paginate(&*self.db, page.page_size)
            .fetch_page(page.page)
            .await?;

        self.with_employees(results).await
    }

    async fn create(&self, company: &NewCompany) -> Result<Company> {
        let active: company::ActiveModel = company.into();
        let result = active.insert(&*self.db).await?;

        Ok(company_from_parts(result, Vec::new()))
    }

    async fn save(&self, company: &Company) -> Result<Company> {
        let existing = company::Entity::find_by_id(company.id)
            .one(&*self.db)
            .await?;

        let active: company::ActiveModel = company.into();
        let result = if existing.is_some() {
            active.update(&*self.db).await?
        } else {
            active.insert(&*self.db).await?
        };

        self.with_employees(vec![result])
            .await?
            .pop()
            .ok_or_else(|| anyhow::anyhow!("company {} vanished after save", company.id))
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        let txn = self.db.begin().await?;

        // Detach employees explicitly; not every backend enforces ON DELETE SET NULL.
        employee::Entity::update_many()
            .col_expr(employee::Column::CompanyId, Expr::value(Value::Int(None)))
            .filter(employee::Column::CompanyId.eq(id))
            .exec(&txn)
            .await?;

        let result = company::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool> {
        let count = company::Entity::find_by_id(id).count(&*self.db).await?;

        Ok(count > 0)
    }
}
