use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::claims::Claims;
use crate::error::AppError;

/// Authenticated identity for the current request, read from the claims that
/// the token gate stored in request extensions. Scoped to one request, never
/// persisted.
#[derive(Debug, Clone)]
pub struct Identity {
    pub claims: Claims,
}

impl Identity {
    pub fn email(&self) -> &str {
        &self.claims.email
    }
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Absent claims means the gate never ran for this route.
        let claims = req
            .extensions()
            .get::<Claims>()
            .cloned()
            .ok_or_else(AppError::unauthenticated);

        ready(claims.map(|claims| Identity { claims }))
    }
}
