use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostFields};
use crate::error::RepoError;

/// Generic repository trait shared by every entity store.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Returns whether anything was removed.
    async fn delete(&self, id: ID) -> Result<bool, RepoError>;
}

/// Post store.
///
/// Implementations assign `id` and `created_at` on create and must never
/// change them afterwards.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Insert a new post.
    async fn create(&self, fields: PostFields) -> Result<Post, RepoError>;

    /// All posts, oldest first.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Replace title, content and category of an existing post.
    /// Returns `None` without inserting anything when `id` is unknown.
    async fn update(&self, id: Uuid, fields: PostFields) -> Result<Option<Post>, RepoError>;
}
