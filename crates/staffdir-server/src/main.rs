use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::InMemoryEmployeeRepository;
use application::EmployeeService;
use config::ServerConfig;

/// Application service with the concrete repository implementation
pub type AppEmployeeService = EmployeeService<InMemoryEmployeeRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<AppEmployeeService>,
}

impl AppState {
    pub fn new(repo: InMemoryEmployeeRepository) -> Self {
        Self {
            employee_service: Arc::new(EmployeeService::new(Arc::new(repo))),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Server is up")),
    tag = "Health"
)]
async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Staffdir API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router with shared state
pub fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::employee::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("staffdir_server=info,tower_http=info")),
        )
        .init();

    tracing::info!("🗂️ Staffdir API initializing...");

    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    let repo = if config.seed {
        tracing::info!("🌱 Seeding employee store with the initial dataset");
        InMemoryEmployeeRepository::seeded()
    } else {
        tracing::info!("📭 Starting with an empty employee store");
        InMemoryEmployeeRepository::default()
    };

    let router = app(AppState::new(repo));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Staffdir API listening on {}", config.addr);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
