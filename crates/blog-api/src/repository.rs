//! Read-only post storage.
//!
//! [`PostRepository`] is the seam between the HTTP layer and wherever posts
//! actually live. Handlers only ever see the trait, so a persistent backend
//! can replace [`InMemoryPostRepository`] without touching them.

use std::collections::HashSet;

use blog_types::Post;
use tracing::debug;

use crate::seed;

/// Errors that can occur while building a repository.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// Two posts share the same slug, which would make lookups ambiguous.
    #[error("duplicate slug: {0}")]
    DuplicateSlug(String),
}

/// Read-only access to the post collection.
pub trait PostRepository: Send + Sync {
    /// Return every post in store order.
    fn list_all(&self) -> Vec<Post>;

    /// Return the post whose slug equals `slug` exactly (case-sensitive).
    ///
    /// Absence is `None`, never an error.
    fn find_by_slug(&self, slug: &str) -> Option<Post>;
}

/// A fixed, ordered collection of posts held in memory.
///
/// Built once and never mutated, so it is safe to share between any number
/// of request tasks behind an [`Arc`](std::sync::Arc).
#[derive(Debug, Clone)]
pub struct InMemoryPostRepository {
    posts: Vec<Post>,
}

impl InMemoryPostRepository {
    /// Build a repository from `posts`, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateSlug`] naming the first slug that
    /// appears more than once.
    pub fn new(posts: Vec<Post>) -> Result<Self, RepositoryError> {
        let mut seen = HashSet::with_capacity(posts.len());
        for post in &posts {
            if !seen.insert(post.slug.as_str()) {
                return Err(RepositoryError::DuplicateSlug(post.slug.clone()));
            }
        }
        Ok(Self { posts })
    }

    /// Build a repository holding the compiled-in [`seed`] posts.
    pub fn seeded() -> Result<Self, RepositoryError> {
        Self::new(seed::seed_posts())
    }

    /// Number of posts in the store.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the store holds no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl PostRepository for InMemoryPostRepository {
    fn list_all(&self) -> Vec<Post> {
        self.posts.clone()
    }

    fn find_by_slug(&self, slug: &str) -> Option<Post> {
        let found = self.posts.iter().find(|post| post.slug == slug).cloned();
        debug!(slug, found = found.is_some(), "post lookup");
        found
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn post(slug: &str) -> Post {
        Post::new(slug, "Title", "Body", "Author", "1.01.2025", "misc")
    }

    #[test]
    fn list_all_preserves_order() {
        let repo = InMemoryPostRepository::new(vec![post("b"), post("a"), post("c")]).unwrap();
        let slugs: Vec<String> = repo.list_all().into_iter().map(|p| p.slug).collect();
        assert_eq!(slugs, ["b", "a", "c"]);
    }

    #[test]
    fn find_by_slug_is_exact_and_case_sensitive() {
        let repo = InMemoryPostRepository::new(vec![post("first-post")]).unwrap();
        assert!(repo.find_by_slug("first-post").is_some());
        assert!(repo.find_by_slug("First-Post").is_none());
        assert!(repo.find_by_slug("first").is_none());
        assert!(repo.find_by_slug("first-post ").is_none());
    }

    #[test]
    fn duplicate_slug_is_rejected() {
        let err = InMemoryPostRepository::new(vec![post("a"), post("b"), post("a")]).unwrap_err();
        assert_eq!(err, RepositoryError::DuplicateSlug(String::from("a")));
    }

    #[test]
    fn slugs_differing_only_in_case_are_distinct() {
        let repo = InMemoryPostRepository::new(vec![post("a"), post("A")]).unwrap();
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn empty_repository_is_allowed() {
        let repo = InMemoryPostRepository::new(Vec::new()).unwrap();
        assert!(repo.is_empty());
        assert!(repo.list_all().is_empty());
        assert!(repo.find_by_slug("anything").is_none());
    }

    #[test]
    fn seeded_repository_holds_three_posts() {
        let repo = InMemoryPostRepository::seeded().unwrap();
        assert_eq!(repo.len(), 3);
    }
}
