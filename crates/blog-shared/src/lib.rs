//! # Blog Shared
//!
//! Wire types shared between the API server and its clients.
//! Depends on nothing from the backend, so any client can compile it.

pub mod dto;
pub mod response;

pub use dto::{DeleteResponse, PostRequest, PostResponse};
pub use response::ErrorResponse;
