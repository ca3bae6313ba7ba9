//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations on top of the repository port.

mod employee_service;

pub use employee_service::{EmployeeService, ListOptions};
