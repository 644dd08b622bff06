//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and interprets `HttpResponse` values without ever touching the
//! network — whoever embeds the core (the CLI, a test harness) executes
//! the round-trip. This keeps every contract in the core checkable without
//! a server and leaves the choice of HTTP stack to the host.
//!
//! All fields use owned types (`String`, `Vec`) so values can be handed
//! across threads or stored without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `PostClient::build_*` methods. The host executes it against
/// the network and feeds the resulting `HttpResponse` back to the matching
/// `parse_*` method.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the host after executing an `HttpRequest`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// The backend signals success with any 2xx status; exact codes vary
    /// by deployment (200 from the production backend, 201/204 from
    /// stricter servers), so callers must not match on a single value.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
