//! Repository Ports
//!
//! Abstract interfaces for employee data access.

mod employee_repository;

pub use employee_repository::*;
