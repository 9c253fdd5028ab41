use chrono::{NaiveDate, NaiveTime};
use database::entities::reservation;
use models::{
    reservation::{Field, ReservationPayload},
    serde_helpers::double_option,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservationResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub message: String,
}

impl From<reservation::Model> for ReservationResponse {
    fn from(model: reservation::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            date: model.date,
            time: model.time,
            message: model.message,
        }
    }
}

/// Reservation fields as submitted by a client.
///
/// All fields are required on create and full update; a partial update
/// may send any subset. An explicit `null` counts as a missing value,
/// never as "keep the stored one".
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ReservationRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>, example = "John Doe", max_length = 100)]
    pub name: Field,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>, example = "john@example.com")]
    pub email: Field,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>, example = "1234567890", max_length = 100)]
    pub phone: Field,
    /// `YYYY-MM-DD`
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>, example = "2025-06-01")]
    pub date: Field,
    /// `hh:mm[:ss[.uuuuuu]]`
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>, example = "19:30:00")]
    pub time: Field,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>, example = "Window seat, please")]
    pub message: Field,
}

impl From<ReservationRequest> for ReservationPayload {
    fn from(request: ReservationRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone,
            date: request.date,
            time: request.time,
            message: request.message,
        }
    }
}
