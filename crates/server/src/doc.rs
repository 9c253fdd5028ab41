use crate::routes::{admin, health, reservation};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        reservation::list_reservations,
        reservation::create_reservation,
        reservation::get_reservation,
        reservation::update_reservation,
        reservation::partial_update_reservation,
        reservation::delete_reservation,
        admin::list_admin_reservations
    ),
    tags(
        (name = "Health", description = "Liveness check, also served at /api/health/"),
        (name = "Reservations", description = "Reservation related endpoints"),
        (name = "Admin", description = "Operator views over the reservation table"),
    ),
    info(
        title = "Reservation API",
        version = "1.0.0",
        description = "Reservation booking backend",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().map(String::as_str).collect();

        assert!(paths.contains(&"/health/"));
        assert!(paths.contains(&"/api/reservations/"));
        assert!(paths.contains(&"/api/reservations/{id}/"));
        assert!(paths.contains(&"/admin/reservations/"));
    }
}
