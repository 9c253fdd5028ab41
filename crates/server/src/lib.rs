pub mod config;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{Router, routing::get};
use doc::ApiDoc;
use routes::{admin, health, reservation};
use state::AppState;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router with every route and middleware layer
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health/", get(health::health))
        .route("/api/health/", get(health::health))
        .route(
            "/api/reservations/",
            get(reservation::list_reservations).post(reservation::create_reservation),
        )
        .route(
            "/api/reservations/{id}/",
            get(reservation::get_reservation)
                .put(reservation::update_reservation)
                .patch(reservation::partial_update_reservation)
                .delete(reservation::delete_reservation),
        )
        .route("/admin/reservations/", get(admin::list_admin_reservations))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                // The browser frontend is served from a different origin
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
