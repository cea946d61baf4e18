//! Post service - the CRUD operations exposed over HTTP.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Post, PostDraft};
use crate::error::DomainError;
use crate::ports::PostRepository;

const ENTITY: &str = "Post";

/// Stateless CRUD service over a [`PostRepository`].
///
/// Cheap to clone; all clones share the same store.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Validate the draft and store it as a new post.
    ///
    /// No deduplication: identical drafts produce distinct posts.
    pub async fn create(&self, draft: PostDraft) -> Result<Post, DomainError> {
        let fields = draft.validate()?;
        Ok(self.repo.create(fields).await?)
    }

    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.list().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            })
    }

    /// Replace the editable fields of an existing post.
    ///
    /// Validation runs before the store is touched, so an invalid draft
    /// for an unknown id reports the validation failure.
    pub async fn update(&self, id: Uuid, draft: PostDraft) -> Result<Post, DomainError> {
        let fields = draft.validate()?;
        self.repo
            .update(id, fields)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            })
    }

    /// Delete a post. Deleting an unknown id is not an error; the returned
    /// flag tells whether a post was actually removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.repo.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::PostFields;
    use crate::error::RepoError;
    use crate::ports::BaseRepository;

    #[derive(Default)]
    struct VecRepo {
        posts: Mutex<Vec<Post>>,
    }

    #[async_trait]
    impl BaseRepository<Post, Uuid> for VecRepo {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
            let posts = self.posts.lock().unwrap();
            Ok(posts.iter().find(|p| p.id == id).cloned())
        }

        async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
            let mut posts = self.posts.lock().unwrap();
            let before = posts.len();
            posts.retain(|p| p.id != id);
            Ok(posts.len() != before)
        }
    }

    #[async_trait]
    impl PostRepository for VecRepo {
        async fn create(&self, fields: PostFields) -> Result<Post, RepoError> {
            let post = Post::new(fields);
            self.posts.lock().unwrap().push(post.clone());
            Ok(post)
        }

        async fn list(&self) -> Result<Vec<Post>, RepoError> {
            Ok(self.posts.lock().unwrap().clone())
        }

        async fn update(&self, id: Uuid, fields: PostFields) -> Result<Option<Post>, RepoError> {
            let mut posts = self.posts.lock().unwrap();
            Ok(posts.iter_mut().find(|p| p.id == id).map(|post| {
                post.apply(fields);
                post.clone()
            }))
        }
    }

    /// Store whose every operation fails as if the database were down.
    struct BrokenRepo;

    #[async_trait]
    impl BaseRepository<Post, Uuid> for BrokenRepo {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Post>, RepoError> {
            Err(RepoError::Connection("refused".into()))
        }

        async fn delete(&self, _id: Uuid) -> Result<bool, RepoError> {
            Err(RepoError::Connection("refused".into()))
        }
    }

    #[async_trait]
    impl PostRepository for BrokenRepo {
        async fn create(&self, _fields: PostFields) -> Result<Post, RepoError> {
            Err(RepoError::Connection("refused".into()))
        }

        async fn list(&self) -> Result<Vec<Post>, RepoError> {
            Err(RepoError::Connection("refused".into()))
        }

        async fn update(&self, _id: Uuid, _fields: PostFields) -> Result<Option<Post>, RepoError> {
            Err(RepoError::Connection("refused".into()))
        }
    }

    fn service() -> PostService {
        PostService::new(Arc::new(VecRepo::default()))
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields_without_storing() {
        let service = service();

        let err = service
            .create(PostDraft::new("Hello", "", "general"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let id = Uuid::new_v4();
        let err = service().get(id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { id: missing, .. } if missing == id));
    }

    #[tokio::test]
    async fn test_update_unknown_id_does_not_insert() {
        let service = service();

        let err = service
            .update(Uuid::new_v4(), PostDraft::new("a", "b", "c"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let err = service()
            .update(Uuid::new_v4(), PostDraft::default())
            .await
            .unwrap_err();

        match err {
            DomainError::Validation(errors) => assert_eq!(errors.len(), 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_an_error() {
        let service = service();
        let post = service
            .create(PostDraft::new("Hello", "World", "general"))
            .await
            .unwrap();

        assert!(service.delete(post.id).await.unwrap());
        assert!(!service.delete(post.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_store_failures_surface_as_repository_errors() {
        let service = PostService::new(Arc::new(BrokenRepo));

        let err = service.list().await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Repository(RepoError::Connection(_))
        ));

        let err = service
            .create(PostDraft::new("a", "b", "c"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Repository(_)));
    }
}
