//! Shared HTTP client for all remote service calls.

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;

static HTTP_CLIENT: OnceCell<reqwest::Client> = OnceCell::new();

/// Get the process-wide `reqwest::Client` (connection pooling across calls).
///
/// Per-request timeouts are set at the call sites, since transcription uploads
/// and chat completions tolerate very different latencies.
pub fn get_http_client() -> Result<&'static reqwest::Client> {
    HTTP_CLIENT.get_or_try_init(|| {
        reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")
    })
}
