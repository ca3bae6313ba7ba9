//! In-memory adapters backed by `EmployeeStore`

mod employee_repository;

pub use employee_repository::InMemoryEmployeeRepository;
