//! Text views: the post list, a single post, and mutation notices.

use std::fmt::Write;

use blog_shared::PostResponse;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// First block of the id; enough to tell posts apart on screen.
fn short_id(post: &PostResponse) -> String {
    post.id.simple().to_string()[..8].to_string()
}

/// The home view: every post, one per line.
pub fn render_list(posts: &[PostResponse]) -> String {
    if posts.is_empty() {
        return "No posts yet. Create one with `blog create`.".to_string();
    }

    // `{:<width$}` pads by chars
    let category_width = posts
        .iter()
        .map(|p| p.category.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = match posts.len() {
        1 => "1 post\n".to_string(),
        n => format!("{n} posts\n"),
    };

    for post in posts {
        let _ = writeln!(
            out,
            "  {}  {:<width$}  {}  ({})",
            short_id(post),
            post.category,
            post.title,
            post.created_at.format(DATE_FORMAT),
            width = category_width,
        );
    }

    out.truncate(out.trim_end().len());
    out
}

/// The detail view of a single post.
pub fn render_detail(post: &PostResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", post.title);
    let _ = writeln!(out, "{}", "=".repeat(post.title.chars().count()));
    let _ = writeln!(out, "Category: {}", post.category);
    let _ = writeln!(out, "Posted:   {}", post.created_at.format(DATE_FORMAT));
    let _ = writeln!(out, "Id:       {}", post.id);
    let _ = writeln!(out);
    out.push_str(post.content.trim_end());
    out
}

/// A one-line confirmation shown above the refreshed list.
pub fn render_notice(action: &str, post: &PostResponse) -> String {
    format!("{action} \"{}\" ({})", post.title, short_id(post))
}
