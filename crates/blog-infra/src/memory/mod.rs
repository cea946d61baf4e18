//! In-memory store - used when no database is configured, and in tests.

mod post_repo;

pub use post_repo::InMemoryPostRepository;
