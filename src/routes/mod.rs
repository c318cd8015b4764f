use actix_web::web;
use mongodb::bson::oid::ObjectId;

use crate::error::AppError;

pub mod auth;
pub mod bookings;
pub mod health;
pub mod services;

/// Configure application routes.
///
/// Registration order matters: the booking routes end with a method-guarded
/// scope and must come last so the catalog and auth resources are matched
/// first.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(auth::configure_routes)
        .configure(services::configure_routes)
        .configure(bookings::configure_routes);
}

/// Parse a path segment as a MongoDB ObjectId.
pub(crate) fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw)
        .map_err(|_| AppError::bad_request(format!("invalid document id: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::parse_object_id;
    use crate::error::AppError;

    #[test]
    fn test_parse_valid_object_id() {
        let id = parse_object_id("65a1f0c2b3d4e5f6a7b8c9d0").unwrap();
        assert_eq!(id.to_hex(), "65a1f0c2b3d4e5f6a7b8c9d0");
    }

    #[test]
    fn test_parse_malformed_object_id() {
        match parse_object_id("not-an-id") {
            Err(AppError::BadRequest { .. }) => {}
            other => panic!("expected bad-request error, got {other:?}"),
        }
    }
}
