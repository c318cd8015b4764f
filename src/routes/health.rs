use actix_web::{web, HttpResponse};
use mongodb::bson::doc;
use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::infra::db::require_db;
use crate::state::app_state::AppState;

pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("Car Doctor is running"))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    app_version: String,
    db: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    time: String,
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let app_version = env!("CARGO_PKG_VERSION").to_string();

    let now = OffsetDateTime::now_utc();
    let time = now
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    // Ping the database to verify the connection is still live
    let (db_status, db_error) = match require_db(&app_state) {
        Ok(db) => match db.run_command(doc! { "ping": 1 }).await {
            Ok(_) => ("ok".to_string(), None),
            Err(e) => ("error".to_string(), Some(format!("DB ping failed: {e}"))),
        },
        Err(e) => ("error".to_string(), Some(format!("DB unavailable: {e}"))),
    };

    let response = HealthResponse {
        status: "ok".to_string(),
        app_version,
        db: db_status,
        db_error,
        time,
    };

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health));
}
