use serde_json::Value;
use thiserror::Error;

use crate::state::AppState;

/// Error bodies are relayed to the user; cap what we echo back.
const BODY_PREVIEW_LIMIT: usize = 500;

/// Upstream lookup failures. Rendered verbatim (truncated) into the
/// user-facing reply, never retried, never fatal to the service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("[HTTP {status}] {body}")]
    Status { status: u16, body: String },
    #[error("Invalid JSON from upstream API.")]
    Decode,
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// One GET against the lookup API. The body comes back as an opaque
/// document for the resolution core; nothing here inspects it.
pub async fn fetch_player(
    state: &AppState,
    uid: &str,
    server: &str,
) -> Result<Value, UpstreamError> {
    let response = state
        .http
        .get(&state.config.upstream_base)
        .query(&[("server", server), ("uid", uid)])
        .send()
        .await?;

    let status = response.status().as_u16();
    if status != 200 {
        let body = response.text().await.unwrap_or_default();
        return Err(UpstreamError::Status {
            status,
            body: truncate_chars(&body, BODY_PREVIEW_LIMIT),
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|_| UpstreamError::Decode)
}

fn truncate_chars(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        s.to_string()
    } else {
        s.chars().take(limit).collect()
    }
}
