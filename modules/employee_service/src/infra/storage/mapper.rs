//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{company, employee};
use crate::contract::{Company, Employee, NewCompany, NewEmployee};
use sea_orm::ActiveValue::{NotSet, Set};

// ===== Employee Conversions =====

impl From<employee::Model> for Employee {
    fn from(entity: employee::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age,
            gender: entity.gender,
            salary: entity.salary,
            company_id: entity.company_id,
        }
    }
}

impl From<&Employee> for employee::ActiveModel {
    fn from(model: &Employee) -> Self {
        Self {
            id: Set(model.id),
            name: Set(model.name.clone()),
            age: Set(model.age),
            gender: Set(model.gender.clone()),
            salary: Set(model.salary),
            company_id: Set(model.company_id),
        }
    }
}

impl From<&NewEmployee> for employee::ActiveModel {
    fn from(model: &NewEmployee) -> Self {
        Self {
            id: NotSet,
            name: Set(model.name.clone()),
            age: Set(model.age),
            gender: Set(model.gender.clone()),
            salary: Set(model.salary),
            company_id: Set(model.company_id),
        }
    }
}

// ===== Company Conversions =====

/// Assemble a company from its row and the rows referencing it
pub fn company_from_parts(entity: company::Model, employees: Vec<employee::Model>) -> Company {
    Company {
        id: entity.id,
        company_name: entity.company_name,
        employees: employees.into_iter().map(Into::into).collect(),
    }
}

impl From<&Company> for company::ActiveModel {
    fn from(model: &Company) -> Self {
        Self {
            id: Set(model.id),
            company_name: Set(model.company_name.clone()),
        }
    }
}

impl From<&NewCompany> for company::ActiveModel {
    fn from(model: &NewCompany) -> Self {
        Self {
            id: NotSet,
            company_name: Set(model.company_name.clone()),
        }
    }
}
