//! Staffdir Data Models
//!
//! Request/response DTOs for the HTTP API.

mod employee;

pub use employee::*;
