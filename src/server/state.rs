//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

use crate::server::service::storage::UploadStorage;

/// Application state containing shared resources.
///
/// Cloned for each request via Axum's state extraction; both fields are cheap to clone
/// (`DatabaseConnection` is a pool handle and `UploadStorage` shares its root path).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Upload directory used by the write endpoint and served under `/storage`.
    pub storage: UploadStorage,
}

impl AppState {
    pub fn new(db: DatabaseConnection, storage: UploadStorage) -> Self {
        Self { db, storage }
    }
}
