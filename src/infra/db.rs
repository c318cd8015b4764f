use mongodb::bson::doc;
use mongodb::{Client, Database};
use tracing::info;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Name of the application database.
pub const DB_NAME: &str = "carDoctorDB";

/// Connect to MongoDB and verify the connection with a ping.
pub async fn connect_db(uri: &str) -> Result<Database, AppError> {
    let client = Client::with_uri_str(uri)
        .await
        .map_err(|e| AppError::db(format!("failed to build MongoDB client: {e}")))?;

    let db = client.database(DB_NAME);

    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| AppError::db(format!("MongoDB ping failed: {e}")))?;

    info!(database = DB_NAME, "connected to MongoDB");
    Ok(db)
}

/// Get the database handle from application state, or fail with a config
/// error when running without one.
pub fn require_db(state: &AppState) -> Result<&Database, AppError> {
    state
        .db
        .as_ref()
        .ok_or_else(|| AppError::config("database handle not available".to_string()))
}
