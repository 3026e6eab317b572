//! OpenAPI document for the REST DTOs

use super::dto::{CompanyRequest, CompanyResponse, EmployeeRequest, EmployeeResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Service",
        description = "Employees and companies CRUD API"
    ),
    components(schemas(EmployeeRequest, EmployeeResponse, CompanyRequest, CompanyResponse)),
    tags(
        (name = "employees", description = "Employee management"),
        (name = "companies", description = "Company management")
    )
)]
pub struct ApiDoc;
