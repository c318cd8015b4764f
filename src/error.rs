use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

/// Small JSON body returned for every error response.
#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    /// No credential was presented at all.
    #[error("Unauthenticated")]
    Unauthenticated,
    #[error("UnauthorizedInvalidToken")]
    UnauthorizedInvalidToken,
    #[error("UnauthorizedExpiredToken")]
    UnauthorizedExpiredToken,
    #[error("Forbidden")]
    Forbidden,
    #[error("Bad request: {detail}")]
    BadRequest { detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedInvalidToken => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedExpiredToken => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Db { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-visible message carried in the JSON error body.
    pub fn message(&self) -> String {
        match self {
            AppError::Unauthenticated => "Not Authorized!".to_string(),
            AppError::UnauthorizedInvalidToken | AppError::UnauthorizedExpiredToken => {
                "Unauthorized Access!".to_string()
            }
            AppError::Forbidden => "Forbidden Access!".to_string(),
            AppError::BadRequest { detail } => detail.clone(),
            AppError::Db { detail } => detail.clone(),
            AppError::Internal { detail } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
        }
    }

    pub fn unauthenticated() -> Self {
        Self::Unauthenticated
    }

    pub fn unauthorized_invalid_token() -> Self {
        Self::UnauthorizedInvalidToken
    }

    pub fn unauthorized_expired_token() -> Self {
        Self::UnauthorizedExpiredToken
    }

    pub fn forbidden() -> Self {
        Self::Forbidden
    }

    pub fn bad_request(detail: String) -> Self {
        Self::BadRequest { detail }
    }

    pub fn db(detail: String) -> Self {
        Self::Db { detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::db(format!("db error: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status()).json(ErrorBody {
            message: self.message(),
        })
    }
}
