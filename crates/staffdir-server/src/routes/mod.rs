//! Staffdir API Routes
//!
//! - /directory/employees - Employee CRUD and listing
//! - /directory/employees/search - Free-text search
//! - /directory/employees/filter - Criteria filter
//! - /directory/departments, /directory/roles - Filter options

pub mod employee;
pub mod swagger;

use axum::http::StatusCode;

use staffdir::{DomainError, EmployeeId, PageSize, SortField, SortOrder};

use crate::application::ListOptions;
use crate::models::ListQuery;

/// Map a domain error to an HTTP status and message
pub fn error_response(e: DomainError) -> (StatusCode, String) {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::InvalidId(_) => StatusCode::BAD_REQUEST,
        DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, e.to_string())
}

/// Parse a path id into the canonical id type
pub fn parse_id(raw: &str) -> Result<EmployeeId, (StatusCode, String)> {
    raw.parse().map_err(error_response)
}

/// Parse sorting and paging parameters, rejecting unknown values
pub fn list_options(query: &ListQuery) -> Result<ListOptions, (StatusCode, String)> {
    let bad_request = |e: String| (StatusCode::BAD_REQUEST, e);

    let sort = query
        .sort
        .as_deref()
        .map(|s| s.parse::<SortField>())
        .transpose()
        .map_err(bad_request)?
        .unwrap_or_default();

    let order = query
        .order
        .as_deref()
        .map(|s| s.parse::<SortOrder>())
        .transpose()
        .map_err(bad_request)?
        .unwrap_or_default();

    let page_size = query
        .page_size
        .map(PageSize::try_from)
        .transpose()
        .map_err(|e| bad_request(e.to_string()))?
        .unwrap_or_default();

    Ok(ListOptions {
        sort,
        order,
        page: query.page.unwrap_or(1),
        page_size,
    })
}
