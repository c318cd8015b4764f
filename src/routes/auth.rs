use std::time::SystemTime;

use actix_web::cookie::Cookie;
use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::auth::claims::IdentityPayload;
use crate::auth::jwt::mint_access_token;
use crate::error::AppError;
use crate::middleware::token_gate::TOKEN_COOKIE;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct IssueTokenResponse {
    pub success: bool,
}

/// Sign the posted identity payload into a one-hour credential and set it as
/// an HTTP-only cookie. The payload is not validated; any payload is signable.
async fn issue_token(
    payload: web::Json<IdentityPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let token = mint_access_token(payload.into_inner(), SystemTime::now(), &app_state.security)?;

    // Not Secure: the original deployment serves the dev frontend over http.
    let cookie = Cookie::build(TOKEN_COOKIE, token)
        .http_only(true)
        .secure(false)
        .path("/")
        .finish();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(IssueTokenResponse { success: true }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/jwt").route(web::post().to(issue_token)));
}
