use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

/// Configuration for the post database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
}

/// Connection pool to the post database.
///
/// The pool is handed to the repository by value; `DatabaseConnection`
/// is not `Clone` when SeaORM's `mock` feature is enabled.
///
/// # Example
/// ```ignore
/// let db = DatabaseConnections::init(&config).await?;
/// let repo = PostgresPostRepository::new(db.main);
/// ```
#[cfg(feature = "postgres")]
pub struct DatabaseConnections {
    pub main: DbConn,
}

#[cfg(feature = "postgres")]
impl DatabaseConnections {
    /// Connect and make sure the `posts` table exists.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(DatabaseConfig::CONNECT_TIMEOUT)
            .idle_timeout(DatabaseConfig::IDLE_TIMEOUT)
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!(
            "Database connected (pool: {}..{})",
            config.min_connections,
            config.max_connections
        );

        let connections = Self { main };
        connections.ensure_schema().await?;
        Ok(connections)
    }

    /// Create the `posts` table from the entity definition if it is missing.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        use super::entity::post;

        let backend = self.main.get_database_backend();
        let schema = Schema::new(backend);
        let mut stmt = schema.create_table_from_entity(post::Entity);
        stmt.if_not_exists();

        self.main.execute(backend.build(&stmt)).await?;
        tracing::debug!("Schema for `posts` is in place");
        Ok(())
    }
}
