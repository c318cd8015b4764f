use mongodb::Database;

use super::security_config::SecurityConfig;

/// Application state containing shared resources. The database handle is
/// opened once at startup and lives for the whole process.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database handle (optional so gate tests can run without a live server)
    pub db: Option<Database>,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
}

impl AppState {
    /// Create a new AppState with the given database handle and security config
    pub fn new(db: Database, security: SecurityConfig) -> Self {
        Self {
            db: Some(db),
            security,
        }
    }

    /// Create a new AppState without a database handle (for testing)
    pub fn without_db(security: SecurityConfig) -> Self {
        Self { db: None, security }
    }
}
