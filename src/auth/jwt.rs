use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::{Claims, IdentityPayload};
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Credential lifetime: one hour.
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Mint a HS256 JWT access token for the given identity payload.
pub fn mint_access_token(
    payload: IdentityPayload,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
        .as_secs() as i64;

    let exp = iat + TOKEN_TTL_SECS;

    // Reserved claims come from the server clock, never from the caller.
    let mut extra = payload.extra;
    extra.remove("iat");
    extra.remove("exp");
    extra.remove("email");

    let claims = Claims {
        email: payload.email,
        iat,
        exp,
        extra,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify a JWT and return its claims.
///
/// Errors:
/// - Expired token → `AppError::unauthorized_expired_token()`
/// - Invalid signature or any other decode error →
///   `AppError::unauthorized_invalid_token()`
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    // Default Validation already checks exp; pin algorithm to configured algorithm.
    let validation = Validation::new(security.algorithm);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::unauthorized_expired_token()
        }
        _ => AppError::unauthorized_invalid_token(),
    })
}
