//! Problem documents (RFC 7807) for failed post requests.
//!
//! The server renders every error through [`ErrorResponse`]; the CLI decodes
//! the same type to show `title` and `detail` to the user.

use serde::{Deserialize, Serialize};

/// Body of every non-2xx response from `/api`.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `about:blank`; the status and title identify the problem.
    #[serde(rename = "type")]
    pub error_type: String,

    pub title: String,

    pub status: u16,

    /// What went wrong with this request, e.g. which post id was not found.
    /// Absent on 500s so store errors never reach the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// One `"<field> is required"` entry per missing post field.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            detail: None,
            errors: Vec::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    /// Malformed JSON body.
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "Bad Request").with_detail(detail)
    }

    /// Unknown post id, or a path segment that is not a UUID.
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "Not Found").with_detail(detail)
    }

    /// A create or update missing required fields. `detail` joins them for
    /// clients that only show one line.
    pub fn validation_failed(errors: Vec<String>) -> Self {
        Self::new(422, "Validation Failed")
            .with_detail(errors.join(", "))
            .with_errors(errors)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}
