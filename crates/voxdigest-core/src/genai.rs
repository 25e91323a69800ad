//! Shared plumbing for the Google Generative Language REST API.
//!
//! All Gemini-backed calls (transcription, summarization, the decorative
//! image and quote fetches) go through `generateContent` with the same
//! request envelope and response shape, so the request/response handling
//! lives here and the callers only build bodies and pick parts out.

use anyhow::{Context, Result};
use serde::Deserialize;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default model for text generation (transcription, summary, quote)
pub(crate) const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";

/// Model used for the decorative image fetch
pub(crate) const DEFAULT_IMAGE_MODEL: &str = "gemini-2.0-flash-preview-image-generation";

/// Response structure for `generateContent`
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
    #[serde(default, rename = "inlineData")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

impl GenerateContentResponse {
    /// First text part of the first candidate, if any
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.text.as_deref())
    }

    /// First inline-data part of the first candidate, if any
    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.inline_data.as_ref())
    }
}

/// Call `generateContent` on the given model.
///
/// The body must be a complete request envelope (`contents`, optional
/// `generationConfig`). API errors surface the status and response body.
pub(crate) async fn generate_content(
    client: &reqwest::Client,
    api_key: &str,
    model: &str,
    body: serde_json::Value,
    timeout_secs: u64,
) -> Result<GenerateContentResponse> {
    let url = format!("{GEMINI_BASE_URL}/{model}:generateContent");

    let response = client
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(&body)
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .send()
        .await
        .context("Failed to send request")?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        anyhow::bail!("Gemini API error ({status}): {error_text}");
    }

    let text = response.text().await.context("Failed to get response text")?;
    serde_json::from_str(&text).context("Failed to parse Gemini response")
}
