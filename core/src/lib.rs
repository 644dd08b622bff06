//! Synchronous client core for the post service.
//!
//! # Overview
//! Resolves the backend address from a host-only configuration value,
//! builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and tracks the local view
//! state (post list, compose fields, edit mode). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `Config` is constructed once at startup and injected; no module-level
//!   base URL.
//! - `PostClient` is stateless — it holds only `base_url`. Each CRUD
//!   operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - `Session` applies local mutations only after the caller has a
//!   confirmed server response, so no rollback logic exists anywhere.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod types;

pub use client::PostClient;
pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use session::{Draft, EditMode, Session};
pub use types::{CreatePost, Post, PostId, UpdatePost};
