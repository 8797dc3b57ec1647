//! Shared type definitions for the Blog API.
//!
//! Types defined here are served by `blog-api` and flow downstream to
//! `TypeScript` via `ts-rs` for the Next.js frontend.
//!
//! # Modules
//!
//! - [`post`] -- The immutable [`Post`] record

pub mod post;

pub use post::Post;
