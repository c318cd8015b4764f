use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::infra::db::require_db;
use crate::repos::services;
use crate::routes::parse_object_id;
use crate::state::app_state::AppState;

async fn list_services(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let services = services::find_all(db).await?;
    Ok(HttpResponse::Ok().json(services))
}

/// One service, projected to the booking-relevant fields. An unknown id
/// yields JSON `null`, not a 404.
async fn get_service(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&path)?;
    let db = require_db(&app_state)?;
    let service = services::find_by_id(db, id).await?;
    Ok(HttpResponse::Ok().json(service))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/services").route(web::get().to(list_services)))
        .service(web::resource("/services/{id}").route(web::get().to(get_service)));
}
