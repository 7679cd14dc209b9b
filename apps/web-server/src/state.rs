//! Application state - shared across all handlers.

use std::sync::Arc;

use vellum_core::ports::{CommentRepository, PostRepository, UserRepository};
use vellum_infra::database::{
    self, DatabaseConfig, DbConn, SqlCommentRepository, SqlPostRepository, SqlUserRepository,
};

use migration::{Migrator, MigratorTrait};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

impl AppState {
    /// Connect to the store, bootstrap the schema, and build the repositories.
    pub async fn new(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let conn = database::connect(config).await?;

        // Idempotent bootstrap: tables are created only when absent.
        Migrator::up(&conn, None).await?;

        Ok(Self::from_connection(conn))
    }

    /// Build the repositories over an existing connection.
    pub fn from_connection(conn: DbConn) -> Self {
        let conn = Arc::new(conn);
        Self {
            users: Arc::new(SqlUserRepository::from_shared(conn.clone())),
            posts: Arc::new(SqlPostRepository::from_shared(conn.clone())),
            comments: Arc::new(SqlCommentRepository::from_shared(conn)),
        }
    }
}
