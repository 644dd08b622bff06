//! Error types for the post API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently
//! distinguish "the post does not exist" from "the server returned an
//! unexpected status." All other non-2xx responses land in `Status` with
//! the raw status code and body for debugging. `Transport` covers
//! everything the host's HTTP stack raises before a status line exists
//! (refused connections, DNS failures, broken reads).

use thiserror::Error;

/// Errors returned by `PostClient` parse methods and by transport hosts.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: connection, DNS or read failure.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server returned 404 — the requested post does not exist.
    #[error("post not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}
