//! Employee DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use staffdir::{Employee, EmployeePatch, FilterCriteria, NewEmployee, Page};

/// Create Employee request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateEmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(req: CreateEmployeeRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            department: req.department,
            role: req.role,
        }
    }
}

/// Update Employee request. Omitted fields keep their current value;
/// unknown fields (including `id`) are rejected.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateEmployeeRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
}

impl From<UpdateEmployeeRequest> for EmployeePatch {
    fn from(req: UpdateEmployeeRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            department: req.department,
            role: req.role,
        }
    }
}

/// Employee response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id.value(),
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            department: employee.department,
            role: employee.role,
        }
    }
}

/// One page of employees
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePageResponse {
    pub items: Vec<EmployeeResponse>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// 1-based ordinal of the first item shown (0 when empty)
    pub first_item: usize,
    /// 1-based ordinal of the last item shown (0 when empty)
    pub last_item: usize,
    /// Page numbers to offer as navigation links
    pub page_links: Vec<usize>,
}

impl From<Page<Employee>> for EmployeePageResponse {
    fn from(page: Page<Employee>) -> Self {
        let page = page.map(EmployeeResponse::from);
        Self {
            page_links: staffdir::page_window(page.page, page.total_pages),
            page: page.page,
            page_size: page.page_size.get(),
            total_items: page.total_items,
            total_pages: page.total_pages,
            first_item: page.first_item,
            last_item: page.last_item,
            items: page.items,
        }
    }
}

/// Sorting and paging query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Field to sort by: id, firstName, lastName, email, department, role
    pub sort: Option<String>,
    /// asc or desc
    pub order: Option<String>,
    /// 1-based page number (default 1)
    pub page: Option<usize>,
    /// 10, 25, 50 or 100 (default 10)
    pub page_size: Option<usize>,
}

/// Free-text search query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Matched case-insensitively against first name, last name and email
    #[serde(default)]
    pub q: String,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// Filter query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FilterQuery {
    /// Case-insensitive substring of the first name
    pub first_name: Option<String>,
    /// Exact department
    pub department: Option<String>,
    /// Exact role
    pub role: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl FilterQuery {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            first_name: self.first_name.clone(),
            department: self.department.clone(),
            role: self.role.clone(),
        }
    }

    pub fn list_query(&self) -> ListQuery {
        ListQuery {
            sort: self.sort.clone(),
            order: self.order.clone(),
            page: self.page,
            page_size: self.page_size,
        }
    }
}

impl SearchQuery {
    pub fn list_query(&self) -> ListQuery {
        ListQuery {
            sort: self.sort.clone(),
            order: self.order.clone(),
            page: self.page,
            page_size: self.page_size,
        }
    }
}
