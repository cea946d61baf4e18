//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::PostService;
use blog_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::{DatabaseConnections, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    /// The PostgreSQL store, kept for health probes. It owns the pool.
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<PostgresPostRepository>>,
}

impl AppState {
    /// Build the application state with the configured store.
    ///
    /// A configured database that cannot be reached is a startup error;
    /// the in-memory store is only used when no database is configured.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> std::io::Result<Self> {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => {
                let connections = DatabaseConnections::init(config).await.map_err(|e| {
                    tracing::error!("Failed to connect to database: {}", e);
                    std::io::Error::other(format!("database unavailable: {e}"))
                })?;
                let repo = Arc::new(PostgresPostRepository::new(connections.main));
                Self {
                    posts: PostService::new(repo.clone()),
                    db: Some(repo),
                }
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if db_config.is_some() {
                tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
            }
            tracing::info!("Running without postgres feature - using in-memory store");
            Self::in_memory()
        };

        tracing::info!(store = state.store_name(), "Application state initialized");
        Ok(state)
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self {
            posts: PostService::new(Arc::new(InMemoryPostRepository::new())),
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// Which store backs the post service.
    pub fn store_name(&self) -> &'static str {
        #[cfg(feature = "postgres")]
        if self.db.is_some() {
            return "postgres";
        }
        "memory"
    }

    /// Whether the backing store answers. The in-memory store always does.
    pub async fn store_reachable(&self) -> bool {
        #[cfg(feature = "postgres")]
        if let Some(repo) = &self.db {
            return match repo.ping().await {
                Ok(()) => true,
                Err(e) => {
                    tracing::error!("Database ping failed: {}", e);
                    false
                }
            };
        }
        true
    }
}
