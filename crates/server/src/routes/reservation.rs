use crate::{
    dtos::{
        error::ErrorResponse,
        reservation::{ReservationRequest, ReservationResponse},
    },
    error::ApiError,
    state::AppState,
};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use database::services::reservation::ReservationService;
use models::reservation::{NewReservation, ReservationPayload};

type ReservationBody = Result<Json<ReservationRequest>, JsonRejection>;
type ReservationId = Result<Path<i32>, PathRejection>;

/// List all reservations
#[utoipa::path(
    get,
    path = "/api/reservations/",
    responses(
        (status = 200, description = "All reservations", body = Vec<ReservationResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    let reservations = ReservationService::list(&state.db).await?;
    Ok(Json(reservations.into_iter().map(Into::into).collect()))
}

/// Create a reservation
#[utoipa::path(
    post,
    path = "/api/reservations/",
    request_body = ReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ReservationResponse),
        (status = 400, description = "Validation failed; maps each field to its error messages"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    body: ReservationBody,
) -> Result<(StatusCode, Json<ReservationResponse>), ApiError> {
    let Json(request) = body?;
    let reservation = ReservationPayload::from(request).validate()?;

    let created = ReservationService::create(&state.db, reservation).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Get a reservation by ID
#[utoipa::path(
    get,
    path = "/api/reservations/{id}/",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation found", body = ReservationResponse),
        (status = 404, description = "Reservation not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    id: ReservationId,
) -> Result<Json<ReservationResponse>, ApiError> {
    let Path(id) = id?;
    let reservation = ReservationService::get(&state.db, id).await?;
    Ok(Json(reservation.into()))
}

/// Replace every field of a reservation
#[utoipa::path(
    put,
    path = "/api/reservations/{id}/",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = ReservationRequest,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationResponse),
        (status = 400, description = "Validation failed; maps each field to its error messages"),
        (status = 404, description = "Reservation not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    id: ReservationId,
    body: ReservationBody,
) -> Result<Json<ReservationResponse>, ApiError> {
    let Path(id) = id?;
    let existing = ReservationService::get(&state.db, id).await?;

    let Json(request) = body?;
    let reservation = ReservationPayload::from(request).validate()?;

    let updated = ReservationService::save(&state.db, existing, reservation).await?;
    Ok(Json(updated.into()))
}

/// Update only the fields present in the request body
#[utoipa::path(
    patch,
    path = "/api/reservations/{id}/",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = ReservationRequest,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationResponse),
        (status = 400, description = "Validation failed; maps each field to its error messages"),
        (status = 404, description = "Reservation not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn partial_update_reservation(
    State(state): State<AppState>,
    id: ReservationId,
    body: ReservationBody,
) -> Result<Json<ReservationResponse>, ApiError> {
    let Path(id) = id?;
    let existing = ReservationService::get(&state.db, id).await?;

    let Json(request) = body?;
    let reservation = ReservationPayload::from(request)
        .merge_onto(NewReservation::from(existing.clone()))
        .validate()?;

    let updated = ReservationService::save(&state.db, existing, reservation).await?;
    Ok(Json(updated.into()))
}

/// Delete a reservation
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}/",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 404, description = "Reservation not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    id: ReservationId,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    ReservationService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
