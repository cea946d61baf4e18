//! In-memory post store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{Post, PostFields};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

/// Post store kept in a `Vec` behind an async RwLock.
///
/// Insertion order is preserved, so `list` returns posts oldest first.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let mut posts = self.posts.write().await;
        let Some(index) = posts.iter().position(|p| p.id == id) else {
            tracing::debug!(post_id = %id, "Delete skipped, post not found");
            return Ok(false);
        };

        // `list` order must survive deletes
        posts.remove(index);
        tracing::debug!(post_id = %id, "Post deleted");
        Ok(true)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, fields: PostFields) -> Result<Post, RepoError> {
        let post = Post::new(fields);
        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        tracing::debug!(post_id = %post.id, total = posts.len(), "Post created");
        Ok(post)
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.clone())
    }

    async fn update(&self, id: Uuid, fields: PostFields) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        post.apply(fields);
        tracing::debug!(post_id = %id, "Post updated");
        Ok(Some(post.clone()))
    }
}
