//! HTTP Surface
//!
//! ## Routes
//!
//! - `GET /recipe`: every recipe, in source order
//! - `GET /recipe/{name}`: one recipe, 404 when unknown
//! - `GET /recipe/{name}/instructions`: generated steps (503 on provider
//!   failure, 504 on provider timeout)
//! - `GET /health`: recipe count plus provider reachability
//! - `GET /api-docs/openapi.json`: OpenAPI document for the routes above

mod handlers;

pub use handlers::{ErrorResponse, HealthResponse, ProviderHealth};

use axum::{Json, Router, routing::get};
use tokio::net::TcpListener;
use tracing::info;
use utoipa::OpenApi;

use crate::config::ServerConfig;
use crate::service::SharedRecipeService;
use crate::types::{Recipe, Result, SousError};

/// State shared by all handlers
pub type AppState = SharedRecipeService;

/// Path of the served OpenAPI document
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "SousChef", description = "Recipes with generated cooking instructions"),
    paths(
        handlers::list_recipes,
        handlers::get_recipe,
        handlers::get_instructions,
        handlers::health,
    ),
    components(schemas(Recipe, ErrorResponse, HealthResponse, ProviderHealth))
)]
pub struct ApiDoc;

pub fn router(service: AppState) -> Router {
    Router::new()
        .route("/recipe", get(handlers::list_recipes))
        .route("/recipe/{name}", get(handlers::get_recipe))
        .route("/recipe/{name}/instructions", get(handlers::get_instructions))
        .route("/health", get(handlers::health))
        .route(OPENAPI_PATH, get(openapi_json))
        .with_state(service)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Bind the configured address and serve until Ctrl-C
pub async fn serve(config: &ServerConfig, service: AppState) -> Result<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(address.as_str())
        .await
        .map_err(|e| SousError::Server(format!("Failed to bind {}: {}", address, e)))?;

    serve_on(listener, service, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve_on<F>(listener: TcpListener, service: AppState, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let local = listener.local_addr()?;
    info!(
        "Serving {} recipes on http://{} (provider: {})",
        service.recipes().len(),
        local,
        service.provider_name()
    );

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| SousError::Server(e.to_string()))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
