use crate::dtos::health::HealthResponse;
use axum::{Json, http::StatusCode};

/// Liveness check; never touches the database
#[utoipa::path(
    get,
    path = "/health/",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse::healthy()))
}
