//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared resources handed to every handler through Axum's state extraction.
///
/// Both fields are cheap to clone; `DatabaseConnection` clones share one pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Name of the trusted header carrying the requesting username.
    pub user_header: String,
}

impl AppState {
    pub fn new(db: DatabaseConnection, user_header: String) -> Self {
        Self { db, user_header }
    }
}
