//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, NotSet, QueryOrder, Set, Unchanged};
use uuid::Uuid;

use blog_core::domain::{Post, PostFields};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, repo_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, fields: PostFields) -> Result<Post, RepoError> {
        let active: post::ActiveModel = Post::new(fields).into();
        let model = active.insert(&self.db).await.map_err(repo_error)?;

        tracing::debug!(post_id = %model.id, "Post inserted");
        Ok(model.into())
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        tracing::debug!(count = result.len(), "Posts listed");
        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Uuid, fields: PostFields) -> Result<Option<Post>, RepoError> {
        // created_at stays NotSet so it is never part of the UPDATE
        let active = post::ActiveModel {
            id: Unchanged(id),
            title: Set(fields.title().to_owned()),
            content: Set(fields.content().to_owned()),
            category: Set(fields.category().to_owned()),
            created_at: NotSet,
        };

        match active.update(&self.db).await {
            Ok(model) => {
                tracing::debug!(post_id = %id, "Post updated");
                Ok(Some(model.into()))
            }
            Err(DbErr::RecordNotUpdated) => {
                tracing::debug!(post_id = %id, "Update matched no post");
                Ok(None)
            }
            Err(e) => Err(repo_error(e)),
        }
    }
}
