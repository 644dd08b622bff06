//! Domain DTOs for the post API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently;
//! integration tests catch any drift between the two crates. Ids are the
//! backend's autoincrementing integers and are never assigned locally —
//! the view refetches after create rather than inventing an id.

use serde::{Deserialize, Serialize};

/// Backend-assigned post identifier. Opaque to the client beyond equality.
pub type PostId = i64;

/// A single post returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
}

/// Request payload for creating a new post. Both fields are required by
/// the server; the view enforces non-empty values before submitting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
}

/// Request payload for updating an existing post. The server replaces
/// both fields wholesale; there is no partial update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePost {
    pub title: String,
    pub content: String,
}
