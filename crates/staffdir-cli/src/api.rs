//! Staffdir API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use staffdir::{
    Employee, EmployeeId, EmployeePatch, FilterCriteria, NewEmployee, PageSize, SortField,
    SortOrder,
};

/// API Client for Staffdir
pub struct DirectoryClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePage {
    pub items: Vec<Employee>,
    pub page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub first_item: usize,
    pub last_item: usize,
    pub page_links: Vec<usize>,
}

/// Sorting and paging sent with list, search and filter calls
#[derive(Debug, Clone, Copy, Default)]
pub struct ListParams {
    pub sort: SortField,
    pub order: SortOrder,
    pub page: usize,
    pub page_size: PageSize,
}

impl ListParams {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("sort", self.sort.to_string()),
            ("order", self.order.to_string()),
            ("page", self.page.max(1).to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }
}

impl DirectoryClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        request
            .send()
            .await
            .with_context(|| format!("Failed to connect to Staffdir API at {}", self.base_url))
    }

    async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T> {
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let resp = self.send(self.client.get(self.url("/health"))).await?;
        Ok(resp.status().is_success())
    }

    /// One page of all employees
    pub async fn list(&self, params: ListParams) -> Result<EmployeePage> {
        let request = self
            .client
            .get(self.url("/directory/employees"))
            .query(&params.pairs());
        Self::parse(self.send(request).await?).await
    }

    /// Get a specific employee; `None` when it does not exist
    pub async fn get(&self, id: EmployeeId) -> Result<Option<Employee>> {
        let request = self
            .client
            .get(self.url(&format!("/directory/employees/{}", id)));
        let resp = self.send(request).await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::parse(resp).await.map(Some)
    }

    /// Create an employee
    pub async fn create(&self, fields: &NewEmployee) -> Result<Employee> {
        let request = self
            .client
            .post(self.url("/directory/employees"))
            .json(fields);
        Self::parse(self.send(request).await?).await
    }

    /// Update an employee; `None` when it does not exist
    pub async fn update(&self, id: EmployeeId, patch: &EmployeePatch) -> Result<Option<Employee>> {
        let request = self
            .client
            .put(self.url(&format!("/directory/employees/{}", id)))
            .json(patch);
        let resp = self.send(request).await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::parse(resp).await.map(Some)
    }

    /// Delete an employee, reporting whether it existed
    pub async fn delete(&self, id: EmployeeId) -> Result<bool> {
        let request = self
            .client
            .delete(self.url(&format!("/directory/employees/{}", id)));
        let resp = self.send(request).await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        Self::parse::<serde_json::Value>(resp).await?;
        Ok(true)
    }

    /// Search by name or email
    pub async fn search(&self, query: &str, params: ListParams) -> Result<EmployeePage> {
        let mut pairs = params.pairs();
        pairs.push(("q", query.to_string()));

        let request = self
            .client
            .get(self.url("/directory/employees/search"))
            .query(&pairs);
        Self::parse(self.send(request).await?).await
    }

    /// Filter by first name, department and role
    pub async fn filter(&self, criteria: &FilterCriteria, params: ListParams) -> Result<EmployeePage> {
        let mut pairs = params.pairs();
        if let Some(v) = &criteria.first_name {
            pairs.push(("firstName", v.clone()));
        }
        if let Some(v) = &criteria.department {
            pairs.push(("department", v.clone()));
        }
        if let Some(v) = &criteria.role {
            pairs.push(("role", v.clone()));
        }

        let request = self
            .client
            .get(self.url("/directory/employees/filter"))
            .query(&pairs);
        Self::parse(self.send(request).await?).await
    }

    /// Distinct departments
    pub async fn departments(&self) -> Result<Vec<String>> {
        let request = self.client.get(self.url("/directory/departments"));
        Self::parse(self.send(request).await?).await
    }

    /// Distinct roles
    pub async fn roles(&self) -> Result<Vec<String>> {
        let request = self.client.get(self.url("/directory/roles"));
        Self::parse(self.send(request).await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_pairs() {
        let params = ListParams {
            sort: SortField::LastName,
            order: SortOrder::Desc,
            page: 0,
            page_size: PageSize::TwentyFive,
        };
        assert_eq!(
            params.pairs(),
            vec![
                ("sort", "lastName".to_string()),
                ("order", "desc".to_string()),
                ("page", "1".to_string()),
                ("pageSize", "25".to_string()),
            ]
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = DirectoryClient::new("http://localhost:8000/");
        assert_eq!(client.url("/health"), "http://localhost:8000/health");
    }

    #[test]
    fn test_page_parses_server_shape() {
        let page: EmployeePage = serde_json::from_value(serde_json::json!({
            "items": [{
                "id": 1,
                "firstName": "John",
                "lastName": "Doe",
                "email": "john.doe@ajackus.com",
                "department": "Engineering",
                "role": "Senior Developer"
            }],
            "page": 1,
            "pageSize": 10,
            "totalItems": 1,
            "totalPages": 1,
            "firstItem": 1,
            "lastItem": 1,
            "pageLinks": [1]
        }))
        .unwrap();
        assert_eq!(page.items[0].id, EmployeeId::new(1));
        assert_eq!(page.total_items, 1);
    }
}
