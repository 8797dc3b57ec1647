//! Shared application state for the Blog API server.
//!
//! [`AppState`] carries the post repository into every handler. It is
//! constructed once at startup and shared via [`Arc`]; nothing in it is
//! mutated afterwards.

use std::sync::Arc;

use crate::repository::{InMemoryPostRepository, PostRepository, RepositoryError};

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The read-only post store.
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Create application state over any repository implementation.
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Create application state backed by the compiled-in seed posts.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateSlug`] if the seed data is
    /// inconsistent.
    pub fn seeded() -> Result<Self, RepositoryError> {
        Ok(Self::new(Arc::new(InMemoryPostRepository::seeded()?)))
    }
}
