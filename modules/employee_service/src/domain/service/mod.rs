//! Domain services

mod companies;
mod employees;

pub use companies::CompanyService;
pub use employees::EmployeeService;
