//! Command dispatch. Each command returns the text to print.

use anyhow::{Context, Result};

use blog_shared::{PostRequest, PostResponse};

use crate::cli::Command;
use crate::client::PostsClient;
use crate::views;

pub async fn run(client: &PostsClient, command: Command) -> Result<String> {
    match command {
        Command::List => home(client).await,

        Command::Show { id } => {
            let post = client
                .get(id)
                .await
                .with_context(|| format!("failed to load post {id}"))?;
            Ok(views::render_detail(&post))
        }

        Command::Create {
            title,
            content,
            category,
        } => {
            let body = PostRequest {
                title,
                content,
                category,
            };
            let post = client
                .create(&body)
                .await
                .context("failed to create post")?;
            after_mutation(client, views::render_notice("Created", &post)).await
        }

        Command::Edit {
            id,
            title,
            content,
            category,
        } => {
            let current = client
                .get(id)
                .await
                .with_context(|| format!("failed to load post {id}"))?;
            let body = edit_request(&current, title, content, category);
            let post = client
                .update(id, &body)
                .await
                .with_context(|| format!("failed to update post {id}"))?;
            after_mutation(client, views::render_notice("Updated", &post)).await
        }

        Command::Delete { id } => {
            let confirmation = client
                .delete(id)
                .await
                .with_context(|| format!("failed to delete post {id}"))?;
            after_mutation(client, confirmation.message).await
        }
    }
}

async fn home(client: &PostsClient) -> Result<String> {
    let posts = client.list().await.context("failed to list posts")?;
    Ok(views::render_list(&posts))
}

/// Mutations land back on the freshly fetched list.
async fn after_mutation(client: &PostsClient, notice: String) -> Result<String> {
    let list = home(client).await?;
    Ok(format!("{notice}\n\n{list}"))
}

/// Full replacement body for an edit, prefilled from the current post.
fn edit_request(
    current: &PostResponse,
    title: Option<String>,
    content: Option<String>,
    category: Option<String>,
) -> PostRequest {
    PostRequest {
        title: title.unwrap_or_else(|| current.title.clone()),
        content: content.unwrap_or_else(|| current.content.clone()),
        category: category.unwrap_or_else(|| current.category.clone()),
    }
}
