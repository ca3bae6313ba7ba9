//! In-memory implementation of EmployeeRepository
//!
//! Mutations hold the write lock for their whole duration, so concurrent
//! requests create, update and delete one at a time. Reads share the read
//! lock and see a consistent snapshot.

use async_trait::async_trait;
use tokio::sync::RwLock;

use staffdir::{
    DomainError, Employee, EmployeeId, EmployeePatch, EmployeeRepository, EmployeeStore,
    FilterCriteria, NewEmployee,
};

/// EmployeeRepository over a lock-guarded `EmployeeStore`
pub struct InMemoryEmployeeRepository {
    store: RwLock<EmployeeStore>,
}

impl InMemoryEmployeeRepository {
    pub fn new(store: EmployeeStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Repository holding the built-in dataset
    pub fn seeded() -> Self {
        Self::new(EmployeeStore::seeded())
    }
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self::new(EmployeeStore::new())
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        Ok(self.store.read().await.list_all())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, DomainError> {
        Ok(self.store.read().await.get_by_id(id))
    }

    async fn insert(&self, fields: NewEmployee) -> Result<Employee, DomainError> {
        self.store.write().await.create(fields)
    }

    async fn update(
        &self,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> Result<Option<Employee>, DomainError> {
        Ok(self.store.write().await.update(id, patch))
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, DomainError> {
        Ok(self.store.write().await.delete(id))
    }

    async fn search(&self, query: &str) -> Result<Vec<Employee>, DomainError> {
        Ok(self.store.read().await.search(query))
    }

    async fn filter(&self, criteria: &FilterCriteria) -> Result<Vec<Employee>, DomainError> {
        Ok(self.store.read().await.filter(criteria))
    }

    async fn departments(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.store.read().await.distinct_departments())
    }

    async fn roles(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.store.read().await.distinct_roles())
    }
}
