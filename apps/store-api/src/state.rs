//! Shared application state passed to the request handlers.

use mongodb::{Client, Database};

/// Cloned per handler (inexpensive, the client shares one connection pool).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client
    pub mongo_client: Client,
    /// Handle on the store database holding every resource collection
    pub db: Database,
}
