//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract::{
    self, CompanyPatch, EmployeePatch, NewCompany, NewEmployee, ServiceError,
};
use crate::domain::validation::require;

// ===== Employee conversions =====

impl From<contract::Employee> for EmployeeResponse {
    fn from(employee: contract::Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            age: employee.age,
            gender: employee.gender,
        }
    }
}

impl TryFrom<EmployeeRequest> for NewEmployee {
    type Error = ServiceError;

    fn try_from(req: EmployeeRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require(req.name, "name")?,
            age: require(req.age, "age")?,
            gender: require(req.gender, "gender")?,
            salary: require(req.salary, "salary")?,
            company_id: req.company_id,
        })
    }
}

impl From<EmployeeRequest> for EmployeePatch {
    fn from(req: EmployeeRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
            gender: req.gender,
            salary: req.salary,
            company_id: req.company_id,
        }
    }
}

// ===== Company conversions =====

impl From<contract::Company> for CompanyResponse {
    fn from(company: contract::Company) -> Self {
        Self {
            id: company.id,
            company_name: company.company_name,
            employee_list: company.employees.into_iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<CompanyRequest> for NewCompany {
    type Error = ServiceError;

    fn try_from(req: CompanyRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            company_name: require(req.company_name, "companyName")?,
        })
    }
}

impl From<CompanyRequest> for CompanyPatch {
    fn from(req: CompanyRequest) -> Self {
        Self {
            company_name: req.company_name,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::contract::{Company, Employee};

    fn sally() -> Employee {
        Employee {
            id: 1,
            name: "Sally".to_string(),
            age: 22,
            gender: "Female".to_string(),
            salary: 10000,
            company_id: Some(7),
        }
    }

    #[test]
    fn employee_response_omits_salary() {
        let json = serde_json::to_value(EmployeeResponse::from(sally())).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Sally", "age": 22, "gender": "Female"})
        );
    }

    #[test]
    fn company_response_nests_employees_without_salary() {
        let company = Company {
            id: 7,
            company_name: "ABC".to_string(),
            employees: vec![sally()],
        };

        let json = serde_json::to_value(CompanyResponse::from(company)).unwrap();

        assert_eq!(json["companyName"], "ABC");
        assert_eq!(json["employeeList"][0]["name"], "Sally");
        assert!(json["employeeList"][0].get("salary").is_none());
    }

    #[test]
    fn create_request_requires_all_fields() {
        let req: EmployeeRequest =
            serde_json::from_str(r#"{"name":"Lisa","age":21,"gender":"female"}"#).unwrap();

        let err = NewEmployee::try_from(req).unwrap_err();
        assert_eq!(err, ServiceError::validation("salary is required"));
    }

    #[test]
    fn create_request_reads_camel_case_company_id() {
        let req: EmployeeRequest = serde_json::from_str(
            r#"{"name":"Lisa","age":21,"gender":"female","salary":2000,"companyId":3}"#,
        )
        .unwrap();

        let new = NewEmployee::try_from(req).unwrap();
        assert_eq!(new.company_id, Some(3));
        assert_eq!(new.salary, 2000);
    }

    #[test]
    fn company_request_ignores_unknown_id() {
        let req: CompanyRequest =
            serde_json::from_str(r#"{"id": null, "companyName": "ABC"}"#).unwrap();

        assert_eq!(NewCompany::try_from(req).unwrap().company_name, "ABC");
    }
}
