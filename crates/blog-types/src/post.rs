//! The blog post record.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single blog entry.
///
/// Posts are immutable once loaded. The `slug` is the lookup key and
/// must be unique within a store. Field order here is the field order
/// of the JSON object on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Post {
    /// URL-safe unique identifier (e.g. `first-post`).
    pub slug: String,
    /// Human-readable title.
    pub title: String,
    /// Free text body.
    pub content: String,
    /// Author display name.
    pub author: String,
    /// Publication date, free-form and returned verbatim (e.g. `2.07.2025`).
    pub date: String,
    /// Category label used by the frontend filter.
    pub category: String,
}

impl Post {
    /// Build a post from borrowed string fields.
    pub fn new(
        slug: &str,
        title: &str,
        content: &str,
        author: &str,
        date: &str,
        category: &str,
    ) -> Self {
        Self {
            slug: slug.to_owned(),
            title: title.to_owned(),
            content: content.to_owned(),
            author: author.to_owned(),
            date: date.to_owned(),
            category: category.to_owned(),
        }
    }
}
