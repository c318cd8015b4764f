//! Token verification middleware
//!
//! Extracts the `token` cookie from the incoming request, verifies signature
//! and expiry, and stores the decoded claims in request extensions. Requests
//! without a cookie are rejected before any business logic runs; requests
//! with a bad or expired credential are rejected after verification. The gate
//! has no other side effects.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Name of the cookie carrying the credential.
pub const TOKEN_COOKIE: &str = "token";

pub struct TokenGate;

impl<S, B> Transform<S, ServiceRequest> for TokenGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TokenGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenGateMiddleware { service }))
    }
}

pub struct TokenGateMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TokenGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // No cookie at all: the request never reaches business logic.
        let token = match req.cookie(TOKEN_COOKIE) {
            Some(cookie) if !cookie.value().is_empty() => cookie.value().to_string(),
            _ => {
                return Box::pin(async { Err(AppError::unauthenticated().into()) });
            }
        };

        let app_state = match req.app_data::<web::Data<AppState>>().cloned() {
            Some(state) => state,
            None => {
                return Box::pin(async {
                    Err(AppError::internal("AppState not available".to_string()).into())
                });
            }
        };

        match verify_access_token(&token, &app_state.security) {
            Ok(claims) => {
                // Store claims in request extensions BEFORE calling the service
                req.extensions_mut().insert(claims);

                let fut = self.service.call(req);
                Box::pin(fut)
            }
            Err(e) => Box::pin(async move { Err(e.into()) }),
        }
    }
}
