//! Staffdir Domain Library
//!
//! Core domain types and the in-memory employee store.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Employee and its input shapes (NewEmployee, EmployeePatch)
//!   - `value_objects/`: EmployeeId, SortField, SortOrder, PageSize
//!   - `services/`: Field validation and pagination
//!   - `errors/`: Domain-specific error types
//!
//! - **Store** (`store/`): `EmployeeStore`, the exclusive owner of the
//!   employee collection, plus the seed dataset
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust
//! use staffdir::{EmployeeStore, FilterCriteria};
//!
//! let store = EmployeeStore::seeded();
//! let engineers = store.filter(&FilterCriteria {
//!     department: Some("Engineering".to_string()),
//!     ..Default::default()
//! });
//! assert_eq!(engineers.len(), 4);
//! ```

pub mod domain;
pub mod ports;
pub mod store;

// Re-export commonly used types
pub use domain::{
    page_window, paginate, validate_new, validate_patch, DomainError, Employee, EmployeeId,
    EmployeePatch, FieldError, FilterCriteria, NewEmployee, Page, PageSize, SortField, SortOrder,
    ValidationErrors,
};
pub use ports::EmployeeRepository;
pub use store::{seed_employees, EmployeeStore};
