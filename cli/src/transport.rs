//! Execute core-built `HttpRequest` values over real HTTP with ureq.

use post_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};
use ureq::Agent;

/// Agent with status-as-error disabled so 4xx/5xx responses come back as
/// data rather than `Err`, letting the core client interpret the status.
/// No timeouts are configured, matching the backend contract's behavior.
pub fn agent() -> Agent {
    Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

/// Perform one round-trip. Transport-level failures (refused connection,
/// DNS, interrupted reads) map to `ApiError::Transport`; any response
/// with a status line is returned as data.
pub fn execute(agent: &Agent, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let result = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    };

    let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}
