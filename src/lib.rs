#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod state;

// Re-exports for public API
pub use auth::claims::{Claims, IdentityPayload};
pub use auth::jwt::{mint_access_token, verify_access_token, TOKEN_TTL_SECS};
pub use config::db::mongo_uri;
pub use error::AppError;
pub use extractors::identity::Identity;
pub use infra::db::{connect_db, require_db};
pub use middleware::cors::cors_middleware;
pub use middleware::request_log::RequestLog;
pub use middleware::token_gate::TokenGate;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;
