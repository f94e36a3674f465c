use std::sync::Arc;

use swapi_db::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Storage backend: PostgreSQL in production, in-memory in tests or when
    /// no `DATABASE_URL` is configured.
    pub store: Arc<dyn Store>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
