//! Employee Application Service (Use Case)
//!
//! Backs both surfaces of the directory: listing/browsing (list, search,
//! filter, sort, paginate, distinct options) and create/edit (get, create,
//! update with field validation). Search and filter stay separate queries.

use std::sync::Arc;

use staffdir::{
    paginate, validate_new, validate_patch, DomainError, Employee, EmployeeId, EmployeePatch,
    EmployeeRepository, EmployeeStore, FilterCriteria, NewEmployee, Page, PageSize, SortField,
    SortOrder,
};

/// Sorting and paging applied to a result list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub sort: SortField,
    pub order: SortOrder,
    /// 1-based page number
    pub page: usize,
    pub page_size: PageSize,
}

/// Application service for Employee operations
pub struct EmployeeService<R: EmployeeRepository> {
    repo: Arc<R>,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    fn arrange(records: Vec<Employee>, options: ListOptions) -> Page<Employee> {
        let sorted = EmployeeStore::sort(&records, options.sort, options.order);
        paginate(sorted, options.page, options.page_size)
    }

    /// One page of all employees
    pub async fn list(&self, options: ListOptions) -> Result<Page<Employee>, DomainError> {
        let employees = self.repo.find_all().await?;
        Ok(Self::arrange(employees, options))
    }

    /// One page of employees matching a free-text query
    pub async fn search(
        &self,
        query: &str,
        options: ListOptions,
    ) -> Result<Page<Employee>, DomainError> {
        let employees = self.repo.search(query.trim()).await?;
        tracing::debug!("Search {:?} matched {} employees", query, employees.len());
        Ok(Self::arrange(employees, options))
    }

    /// One page of employees satisfying the filter criteria
    pub async fn filter(
        &self,
        criteria: &FilterCriteria,
        options: ListOptions,
    ) -> Result<Page<Employee>, DomainError> {
        let employees = self.repo.filter(criteria).await?;
        tracing::debug!("Filter {:?} matched {} employees", criteria, employees.len());
        Ok(Self::arrange(employees, options))
    }

    /// Get an employee by ID
    pub async fn get_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Validate and create a new employee
    pub async fn create(&self, fields: NewEmployee) -> Result<Employee, DomainError> {
        let fields = fields.trimmed();
        validate_new(&fields)?;

        let created = self.repo.insert(fields).await?;

        tracing::info!(
            "Created Employee: {} ({}) - {}",
            created.full_name(),
            created.id,
            created.department
        );

        Ok(created)
    }

    /// Validate and apply a partial update
    pub async fn update(
        &self,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> Result<Employee, DomainError> {
        let patch = patch.trimmed();
        validate_patch(&patch)?;

        let updated = self
            .repo
            .update(id, patch)
            .await?
            .ok_or_else(|| DomainError::not_found("Employee", id))?;

        tracing::info!("Updated Employee: {} ({})", updated.full_name(), updated.id);

        Ok(updated)
    }

    /// Delete an employee
    pub async fn delete(&self, id: EmployeeId) -> Result<bool, DomainError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted Employee: {}", id);
        }
        Ok(deleted)
    }

    /// Department options for the filter surface
    pub async fn departments(&self) -> Result<Vec<String>, DomainError> {
        self.repo.departments().await
    }

    /// Role options for the filter surface
    pub async fn roles(&self) -> Result<Vec<String>, DomainError> {
        self.repo.roles().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryEmployeeRepository;

    fn service() -> EmployeeService<InMemoryEmployeeRepository> {
        EmployeeService::new(Arc::new(InMemoryEmployeeRepository::seeded()))
    }

    fn options(sort: SortField, order: SortOrder) -> ListOptions {
        ListOptions {
            sort,
            order,
            page: 1,
            page_size: PageSize::Ten,
        }
    }

    #[tokio::test]
    async fn test_list_sorts_and_pages() {
        let service = service();
        let page = service
            .list(ListOptions {
                page: 2,
                ..options(SortField::Id, SortOrder::Asc)
            })
            .await
            .unwrap();

        assert_eq!(page.total_items, 12);
        assert_eq!(page.total_pages, 2);
        let ids: Vec<u64> = page.items.iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![11, 12]);
    }

    #[tokio::test]
    async fn test_default_options_sort_by_first_name() {
        let page = service()
            .list(ListOptions {
                page: 1,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.items[0].first_name, "Amanda");
        assert_eq!(page.items.len(), 10);
    }

    #[tokio::test]
    async fn test_search_trims_query() {
        let page = service()
            .search("  doe ", options(SortField::Id, SortOrder::Asc))
            .await
            .unwrap();
        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].email, "john.doe@ajackus.com");
    }

    #[tokio::test]
    async fn test_filter_sorted_descending() {
        let criteria = FilterCriteria {
            department: Some("Engineering".to_string()),
            ..Default::default()
        };
        let page = service()
            .filter(&criteria, options(SortField::FirstName, SortOrder::Desc))
            .await
            .unwrap();
        let names: Vec<&str> = page.items.iter().map(|e| e.first_name.as_str()).collect();
        assert_eq!(names, vec!["Sarah", "Robert", "John", "Amanda"]);
    }

    #[tokio::test]
    async fn test_create_validates_and_trims() {
        let service = service();

        let invalid = NewEmployee {
            first_name: "A".to_string(),
            last_name: "Bell".to_string(),
            email: "not-an-email".to_string(),
            department: "Design".to_string(),
            role: "Designer".to_string(),
        };
        let err = service.create(invalid).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(service.list(ListOptions::default()).await.unwrap().total_items, 12);

        let created = service
            .create(NewEmployee {
                first_name: "  Ava ".to_string(),
                last_name: "Bell".to_string(),
                email: "ava.bell@ajackus.com".to_string(),
                department: "Design".to_string(),
                role: "Designer".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, EmployeeId::new(13));
        assert_eq!(created.first_name, "Ava");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let err = service()
            .update(
                EmployeeId::new(77),
                EmployeePatch {
                    role: Some("Lead".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("Employee", 77));
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_patch() {
        let service = service();
        let err = service
            .update(
                EmployeeId::new(1),
                EmployeePatch {
                    last_name: Some("D".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let john = service.get_by_id(EmployeeId::new(1)).await.unwrap().unwrap();
        assert_eq!(john.last_name, "Doe");
    }
}
