use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Post entity - a single blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a generated ID and the current time.
    pub fn new(fields: PostFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            content: fields.content,
            category: fields.category,
            created_at: Utc::now(),
        }
    }

    /// Replace the editable fields, keeping `id` and `created_at`.
    pub fn apply(&mut self, fields: PostFields) {
        self.title = fields.title;
        self.content = fields.content;
        self.category = fields.category;
    }
}

/// Unvalidated post input, as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub category: String,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: category.into(),
        }
    }

    /// Check that every required field is present.
    ///
    /// All missing fields are reported together, in declaration order.
    /// Whitespace-only values count as missing.
    pub fn validate(self) -> Result<PostFields, DomainError> {
        let missing: Vec<String> = [
            ("title", &self.title),
            ("content", &self.content),
            ("category", &self.category),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| format!("{name} is required"))
        .collect();

        if !missing.is_empty() {
            return Err(DomainError::Validation(missing));
        }

        Ok(PostFields {
            title: self.title,
            content: self.content,
            category: self.category,
        })
    }
}

/// Validated post fields. Only obtainable through [`PostDraft::validate`],
/// so every store write carries non-empty values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    title: String,
    content: String,
    category: String,
}

impl PostFields {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}
