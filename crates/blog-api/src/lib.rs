//! Read-only HTTP API for the blog.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Status endpoint** (`GET /`) returning a constant liveness message
//! - **Post endpoints** (`GET /api/posts`, `GET /api/posts/{slug}`) serving
//!   the post collection as JSON
//! - **CORS policy** restricted to an explicit allow-list of browser origins
//!
//! # Architecture
//!
//! Posts live behind the [`PostRepository`] trait. The default
//! implementation, [`InMemoryPostRepository`], is built once at startup
//! from the [`seed`] data and never mutated afterwards, so handlers read it
//! concurrently without any locking. The repository is injected into the
//! router through [`AppState`]; nothing is held in globals.

pub mod error;
pub mod handlers;
pub mod repository;
pub mod router;
pub mod seed;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use repository::{InMemoryPostRepository, PostRepository, RepositoryError};
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
