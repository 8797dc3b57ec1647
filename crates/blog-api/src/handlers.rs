//! REST API endpoint handlers.
//!
//! All handlers read from the [`PostRepository`](crate::repository::PostRepository)
//! held in the shared [`AppState`]. None of them write anything.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Status message |
//! | `GET` | `/api/posts` | List all posts in store order |
//! | `GET` | `/api/posts/{slug}` | Get a single post by slug |

use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use blog_types::Post;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// Message returned by the status endpoint.
pub const STATUS_MESSAGE: &str = "Blog API is running";

/// Body of the `GET /` status response.
#[derive(Debug, Clone, serde::Serialize)]
pub struct StatusResponse {
    /// Always [`STATUS_MESSAGE`].
    pub message: String,
}

// ---------------------------------------------------------------------------
// GET / -- status
// ---------------------------------------------------------------------------

/// Report that the server is up.
pub async fn index() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: String::from(STATUS_MESSAGE),
    })
}

// ---------------------------------------------------------------------------
// GET /api/posts -- list posts
// ---------------------------------------------------------------------------

/// List every post in store order. Query parameters are ignored.
pub async fn list_posts(State(state): State<Arc<AppState>>) -> Json<Vec<Post>> {
    Json(state.posts.list_all())
}

// ---------------------------------------------------------------------------
// GET /api/posts/{slug} -- single post
// ---------------------------------------------------------------------------

/// Return the post with the given slug, or 404 `{"detail": "Post not found"}`.
///
/// A slug segment that cannot be decoded (e.g. `%FF`) can never name a
/// stored post, so it gets the same 404 as any other miss.
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    slug: Result<Path<String>, PathRejection>,
) -> Result<Json<Post>, ApiError> {
    let Path(slug) = slug.map_err(|rejection| {
        debug!(error = %rejection, "undecodable slug");
        ApiError::post_not_found()
    })?;

    state.posts.find_by_slug(&slug).map(Json).ok_or_else(|| {
        warn!(slug = %slug, "post not found");
        ApiError::post_not_found()
    })
}
