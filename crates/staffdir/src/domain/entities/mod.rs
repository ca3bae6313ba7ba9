//! Domain Entities
//!
//! - Employee: the single directory record
//! - NewEmployee / EmployeePatch: create and partial-update inputs
//! - FilterCriteria: optional constraints for the filter query

mod employee;
mod filter;

pub use employee::*;
pub use filter::*;
