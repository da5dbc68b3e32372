use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use super::AppState;
use crate::types::{Recipe, SousError};

/// Error body shared by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the provider fails its health check
    pub status: String,
    pub recipes: usize,
    pub provider: ProviderHealth,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProviderHealth {
    pub name: String,
    pub model: String,
    pub available: bool,
}

fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

/// HTTP status for a failed request
fn status_for(err: &SousError) -> StatusCode {
    match err {
        SousError::RecipeNotFound(_) => StatusCode::NOT_FOUND,
        SousError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        SousError::Llm(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[utoipa::path(
    get,
    path = "/recipe",
    tag = "recipes",
    summary = "Get all recipes",
    responses(
        (status = 200, description = "All recipes in source order", body = Vec<Recipe>)
    )
)]
pub async fn list_recipes(State(service): State<AppState>) -> impl IntoResponse {
    Json(service.recipes().to_vec())
}

#[utoipa::path(
    get,
    path = "/recipe/{name}",
    tag = "recipes",
    summary = "Get recipe by name",
    params(
        ("name" = String, Path, description = "Recipe title (case-insensitive)")
    ),
    responses(
        (status = 200, description = "The recipe", body = Recipe),
        (status = 404, description = "No recipe with that title", body = ErrorResponse)
    )
)]
pub async fn get_recipe(State(service): State<AppState>, Path(name): Path<String>) -> Response {
    match service.recipe(&name) {
        Some(recipe) => (StatusCode::OK, Json(recipe.clone())).into_response(),
        None => {
            let err = SousError::RecipeNotFound(name);
            error_response(status_for(&err), err.to_string())
        }
    }
}

#[utoipa::path(
    get,
    path = "/recipe/{name}/instructions",
    tag = "recipes",
    summary = "Get recipe instructions by name",
    params(
        ("name" = String, Path, description = "Recipe title (case-insensitive)")
    ),
    responses(
        (status = 200, description = "Generated steps in order; empty for an unknown recipe or unusable model output", body = Vec<String>),
        (status = 503, description = "Generation provider failed", body = ErrorResponse),
        (status = 504, description = "Generation provider timed out", body = ErrorResponse)
    )
)]
pub async fn get_instructions(
    State(service): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    info!("Instruction request for {:?}", name);

    match service.instructions(&name).await {
        Ok(steps) => (StatusCode::OK, Json(steps)).into_response(),
        Err(e) => {
            warn!("Instruction generation failed for {:?}: {}", name, e);
            let message = if e.is_generation_failure() {
                format!("Instruction service error: {}", e)
            } else {
                "Internal error".to_string()
            };
            error_response(status_for(&e), message)
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Service and provider health",
    responses(
        (status = 200, description = "Recipe count and provider reachability", body = HealthResponse)
    )
)]
pub async fn health(State(service): State<AppState>) -> impl IntoResponse {
    let available = service.provider_available().await;

    Json(HealthResponse {
        status: if available { "ok" } else { "degraded" }.to_string(),
        recipes: service.recipes().len(),
        provider: ProviderHealth {
            name: service.provider_name().to_string(),
            model: service.provider_model().to_string(),
            available,
        },
    })
}
