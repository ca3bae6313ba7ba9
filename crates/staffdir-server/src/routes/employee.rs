//! Employee Routes - Directory management
//!
//! HTTP handlers that delegate to EmployeeService for business logic.
//! Search and filter are separate endpoints and never combined.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::{error_response, list_options, parse_id};
use crate::models::{
    CreateEmployeeRequest, EmployeePageResponse, EmployeeResponse, FilterQuery, ListQuery,
    SearchQuery, UpdateEmployeeRequest,
};
use crate::AppState;

/// List employees
#[utoipa::path(
    get,
    path = "/directory/employees",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of employees", body = EmployeePageResponse),
        (status = 400, description = "Invalid sort or paging parameters")
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<EmployeePageResponse>, (StatusCode, String)> {
    let options = list_options(&query)?;
    let page = state
        .employee_service
        .list(options)
        .await
        .map_err(error_response)?;

    Ok(Json(page.into()))
}

/// Create new employee
#[utoipa::path(
    post,
    path = "/directory/employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 422, description = "Field validation failed")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), (StatusCode, String)> {
    let employee = state
        .employee_service
        .create(payload.into())
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(employee.into())))
}

/// Get employee by ID
#[utoipa::path(
    get,
    path = "/directory/employees/{id}",
    params(("id" = u64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeResponse>, (StatusCode, String)> {
    let id = parse_id(&id)?;
    let employee = state
        .employee_service
        .get_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or((StatusCode::NOT_FOUND, "Employee not found".to_string()))?;

    Ok(Json(employee.into()))
}

/// Update employee
#[utoipa::path(
    put,
    path = "/directory/employees/{id}",
    params(("id" = u64, Path, description = "Employee ID")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Employee not found"),
        (status = 422, description = "Field validation failed or unknown field")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> Result<Json<EmployeeResponse>, (StatusCode, String)> {
    let id = parse_id(&id)?;
    let employee = state
        .employee_service
        .update(id, payload.into())
        .await
        .map_err(error_response)?;

    Ok(Json(employee.into()))
}

/// Delete employee
#[utoipa::path(
    delete,
    path = "/directory/employees/{id}",
    params(("id" = u64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee deleted"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    let id = parse_id(&id)?;
    let deleted = state
        .employee_service
        .delete(id)
        .await
        .map_err(error_response)?;

    if !deleted {
        return Err((StatusCode::NOT_FOUND, "Employee not found".to_string()));
    }

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Employee deleted"
    })))
}

/// Search employees by name or email
#[utoipa::path(
    get,
    path = "/directory/employees/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching employees", body = EmployeePageResponse),
        (status = 400, description = "Invalid sort or paging parameters")
    ),
    tag = "Employee"
)]
pub async fn search_employees(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<EmployeePageResponse>, (StatusCode, String)> {
    let options = list_options(&query.list_query())?;
    let page = state
        .employee_service
        .search(&query.q, options)
        .await
        .map_err(error_response)?;

    Ok(Json(page.into()))
}

/// Filter employees by first name, department and role
#[utoipa::path(
    get,
    path = "/directory/employees/filter",
    params(FilterQuery),
    responses(
        (status = 200, description = "Matching employees", body = EmployeePageResponse),
        (status = 400, description = "Invalid sort or paging parameters")
    ),
    tag = "Employee"
)]
pub async fn filter_employees(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<EmployeePageResponse>, (StatusCode, String)> {
    let options = list_options(&query.list_query())?;
    let page = state
        .employee_service
        .filter(&query.criteria(), options)
        .await
        .map_err(error_response)?;

    Ok(Json(page.into()))
}

/// Distinct departments
#[utoipa::path(
    get,
    path = "/directory/departments",
    responses(
        (status = 200, description = "Departments in first-seen order", body = Vec<String>)
    ),
    tag = "Employee"
)]
pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, (StatusCode, String)> {
    let departments = state
        .employee_service
        .departments()
        .await
        .map_err(error_response)?;

    Ok(Json(departments))
}

/// Distinct roles
#[utoipa::path(
    get,
    path = "/directory/roles",
    responses(
        (status = 200, description = "Roles in first-seen order", body = Vec<String>)
    ),
    tag = "Employee"
)]
pub async fn list_roles(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, (StatusCode, String)> {
    let roles = state
        .employee_service
        .roles()
        .await
        .map_err(error_response)?;

    Ok(Json(roles))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/directory/employees",
            get(list_employees).post(create_employee),
        )
        .route("/directory/employees/search", get(search_employees))
        .route("/directory/employees/filter", get(filter_employees))
        .route(
            "/directory/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/directory/departments", get(list_departments))
        .route("/directory/roles", get(list_roles))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use staffdir::{Employee, EmployeeId, EmployeeStore, NewEmployee};
    use tower::ServiceExt;

    use crate::adapters::InMemoryEmployeeRepository;
    use crate::{app, AppState};

    fn test_app() -> axum::Router {
        app(AppState::new(InMemoryEmployeeRepository::seeded()))
    }

    async fn send(
        app: &axum::Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    fn json_body(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    fn ids(page: &Value) -> Vec<u64> {
        page["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["id"].as_u64().unwrap())
            .collect()
    }

    fn new_hire() -> Value {
        json!({
            "firstName": "Nina",
            "lastName": "Patel",
            "email": "nina.patel@ajackus.com",
            "department": "Sales",
            "role": "Account Manager"
        })
    }

    #[tokio::test]
    async fn test_list_default_page() {
        let app = test_app();
        let (status, body) = send(&app, "GET", "/directory/employees?sort=id", None).await;
        assert_eq!(status, StatusCode::OK);

        let page = json_body(&body);
        assert_eq!(page["totalItems"], 12);
        assert_eq!(page["totalPages"], 2);
        assert_eq!(page["pageSize"], 10);
        assert_eq!(ids(&page), (1..=10).collect::<Vec<_>>());
        assert_eq!(page["pageLinks"], json!([1, 2]));
    }

    #[tokio::test]
    async fn test_list_rejects_bad_parameters() {
        let app = test_app();
        let (status, _) = send(&app, "GET", "/directory/employees?sort=salary", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "GET", "/directory/employees?pageSize=7", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_employee() {
        let app = test_app();
        let (status, body) = send(&app, "GET", "/directory/employees/1", None).await;
        assert_eq!(status, StatusCode::OK);
        let john = json_body(&body);
        assert_eq!(john["firstName"], "John");
        assert_eq!(john["email"], "john.doe@ajackus.com");

        let (status, _) = send(&app, "GET", "/directory/employees/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_ids_rejected() {
        let app = test_app();
        for uri in [
            "/directory/employees/abc",
            "/directory/employees/1.5",
            "/directory/employees/-3",
            "/directory/employees/+3",
        ] {
            let (status, _) = send(&app, "GET", uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "uri {}", uri);
        }

        let (status, _) = send(&app, "DELETE", "/directory/employees/x1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_then_create_gets_fresh_id() {
        let app = test_app();
        let (status, _) = send(&app, "DELETE", "/directory/employees/5", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, "DELETE", "/directory/employees/5", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, "POST", "/directory/employees", Some(new_hire())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json_body(&body)["id"], 13);
    }

    #[tokio::test]
    async fn test_create_validation_error() {
        let app = test_app();
        let mut invalid = new_hire();
        invalid["email"] = json!("nina.patel");
        invalid["firstName"] = json!("N");

        let (status, body) = send(&app, "POST", "/directory/employees", Some(invalid)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let message = String::from_utf8(body).unwrap();
        assert!(message.contains("firstName: Minimum 2 characters required"));
        assert!(message.contains("email: Please enter a valid email address"));
    }

    #[tokio::test]
    async fn test_create_after_last_id_is_server_error() {
        let seed = vec![Employee::new(
            EmployeeId::new(u64::MAX - 1),
            NewEmployee {
                first_name: "Amy".to_string(),
                last_name: "Lee".to_string(),
                email: "amy.lee@ajackus.com".to_string(),
                department: "Design".to_string(),
                role: "Lead".to_string(),
            },
        )];
        let store = EmployeeStore::with_employees(seed).unwrap();
        let app = app(AppState::new(InMemoryEmployeeRepository::new(store)));

        let (status, body) = send(&app, "POST", "/directory/employees", Some(new_hire())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json_body(&body)["id"].as_u64(), Some(u64::MAX));

        let (status, _) = send(&app, "POST", "/directory/employees", Some(new_hire())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (_, body) = send(&app, "GET", "/directory/employees", None).await;
        assert_eq!(json_body(&body)["totalItems"], 2);
    }

    #[tokio::test]
    async fn test_update_partial() {
        let app = test_app();
        let (status, body) = send(
            &app,
            "PUT",
            "/directory/employees/3",
            Some(json!({ "role": "Head of Marketing" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let mike = json_body(&body);
        assert_eq!(mike["role"], "Head of Marketing");
        assert_eq!(mike["firstName"], "Mike");
        assert_eq!(mike["department"], "Marketing");
    }

    #[tokio::test]
    async fn test_update_rejects_unknown_fields_and_id() {
        let app = test_app();
        for body in [json!({ "salary": 1 }), json!({ "id": 40, "role": "Lead" })] {
            let (status, _) = send(&app, "PUT", "/directory/employees/3", Some(body)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        }

        let (_, body) = send(&app, "GET", "/directory/employees/3", None).await;
        assert_eq!(json_body(&body)["role"], "Marketing Manager");
    }

    #[tokio::test]
    async fn test_update_missing_employee() {
        let app = test_app();
        let (status, _) = send(
            &app,
            "PUT",
            "/directory/employees/404",
            Some(json!({ "role": "Lead" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_search_endpoint() {
        let app = test_app();
        let (status, body) = send(&app, "GET", "/directory/employees/search?q=doe", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&json_body(&body)), vec![1]);

        let (_, body) = send(&app, "GET", "/directory/employees/search?q=", None).await;
        assert_eq!(json_body(&body)["totalItems"], 12);
    }

    #[tokio::test]
    async fn test_filter_endpoint() {
        let app = test_app();
        let (status, body) = send(
            &app,
            "GET",
            "/directory/employees/filter?department=Engineering&sort=id",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&json_body(&body)), vec![1, 4, 7, 10]);

        let (_, body) = send(
            &app,
            "GET",
            "/directory/employees/filter?department=Design&role=Graphic%20Designer",
            None,
        )
        .await;
        assert_eq!(ids(&json_body(&body)), vec![8]);
    }

    #[tokio::test]
    async fn test_options_endpoints() {
        let app = test_app();
        let (_, body) = send(&app, "GET", "/directory/departments", None).await;
        assert_eq!(
            json_body(&body),
            json!(["Engineering", "Design", "Marketing", "Sales", "HR", "Finance"])
        );

        let (_, body) = send(&app, "GET", "/directory/roles", None).await;
        assert_eq!(json_body(&body).as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app();
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body)["status"], "ok");
    }
}
