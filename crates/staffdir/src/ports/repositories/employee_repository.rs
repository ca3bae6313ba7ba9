//! Employee Repository Port
//!
//! Abstract interface over an employee collection shared between concurrent
//! callers. Implementations must apply `create`, `update` and `delete` one at
//! a time so ids stay unique and increasing.

use async_trait::async_trait;

use crate::domain::{
    errors::DomainError, Employee, EmployeeId, EmployeePatch, FilterCriteria, NewEmployee,
};

/// Repository interface for Employee entities
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Every employee, in insertion order
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError>;

    /// Find an employee by ID
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, DomainError>;

    /// Insert a new employee; the repository assigns the id
    async fn insert(&self, fields: NewEmployee) -> Result<Employee, DomainError>;

    /// Apply a partial update; `None` when the id does not exist
    async fn update(
        &self,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> Result<Option<Employee>, DomainError>;

    /// Delete an employee by ID, reporting whether one was removed
    async fn delete(&self, id: EmployeeId) -> Result<bool, DomainError>;

    /// Case-insensitive match on first name, last name or email
    async fn search(&self, query: &str) -> Result<Vec<Employee>, DomainError>;

    /// Employees satisfying every active constraint
    async fn filter(&self, criteria: &FilterCriteria) -> Result<Vec<Employee>, DomainError>;

    /// Unique departments in first-seen order
    async fn departments(&self) -> Result<Vec<String>, DomainError>;

    /// Unique roles in first-seen order
    async fn roles(&self) -> Result<Vec<String>, DomainError>;
}
