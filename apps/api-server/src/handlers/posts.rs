//! Post handlers - create, list, fetch, update and delete.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::{Post, PostDraft};
use blog_shared::{DeleteResponse, PostRequest, PostResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn draft(req: PostRequest) -> PostDraft {
    PostDraft::new(req.title, req.content, req.category)
}

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        category: post.category,
        created_at: post.created_at,
    }
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(draft(body.into_inner())).await?;
    tracing::info!(post_id = %post.id, category = %post.category, "Post created");

    Ok(HttpResponse::Created().json(post_response(post)))
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    tracing::debug!(count = posts.len(), "Posts listed");

    let body: Vec<PostResponse> = posts.into_iter().map(post_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.posts.update(id, draft(body.into_inner())).await?;
    tracing::info!(post_id = %id, "Post updated");

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// DELETE /api/posts/{id}
///
/// Answers the same confirmation whether or not the post existed.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if state.posts.delete(id).await? {
        tracing::info!(post_id = %id, "Post deleted");
    } else {
        tracing::debug!(post_id = %id, "Delete requested for unknown post");
    }

    Ok(HttpResponse::Ok().json(DeleteResponse::deleted()))
}
