use crate::{
    dtos::{
        admin::{AdminListResponse, AdminQueryParams},
        error::ErrorResponse,
    },
    error::ApiError,
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use database::{admin::RESERVATION_ADMIN, services::admin::AdminService};

/// Operator listing of all reservations, newest first
#[utoipa::path(
    get,
    path = "/admin/reservations/",
    params(AdminQueryParams),
    responses(
        (status = 200, description = "Reservations matching the filters", body = AdminListResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn list_admin_reservations(
    State(state): State<AppState>,
    params: Result<Query<AdminQueryParams>, QueryRejection>,
) -> Result<Json<AdminListResponse>, ApiError> {
    let Query(params) = params?;
    let listing = AdminService::list(&state.db, &RESERVATION_ADMIN, &params.into()).await?;
    Ok(Json(listing.into()))
}
