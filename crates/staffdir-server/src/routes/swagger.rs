//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CreateEmployeeRequest, EmployeePageResponse, EmployeeResponse, UpdateEmployeeRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        super::employee::list_employees,
        super::employee::create_employee,
        super::employee::get_employee,
        super::employee::update_employee,
        super::employee::delete_employee,
        super::employee::search_employees,
        super::employee::filter_employees,
        super::employee::list_departments,
        super::employee::list_roles,
    ),
    info(
        title = "Staffdir API",
        version = "0.1.0",
        description = "Employee directory backed by an in-memory store.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Employee", description = "Employee records, search, filter and options"),
    ),
    components(
        schemas(
            CreateEmployeeRequest,
            UpdateEmployeeRequest,
            EmployeeResponse,
            EmployeePageResponse,
        )
    ),
)]
pub struct ApiDoc;
