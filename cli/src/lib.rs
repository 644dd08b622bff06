//! Terminal front end for the post service.
//!
//! The deterministic core (`post-core`) builds requests and parses
//! responses; this crate supplies the two pieces the core deliberately
//! leaves out: a ureq-based executor for the HTTP round-trips
//! (`transport`) and an interactive view loop over the session state
//! (`ui`).

pub mod transport;
pub mod ui;
