//! OpenAI Whisper transcription provider.
//!
//! Uses the OpenAI audio transcriptions API format:
//! - Multipart form upload with `model` and `file` fields
//! - Authorization via `Bearer` token
//! - JSON response with `text` field

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::{DEFAULT_TIMEOUT_SECS, TranscriptionBackend, TranscriptionRequest, TranscriptionResult};

const OPENAI_TRANSCRIBE_URL: &str = "https://api.openai.com/v1/audio/transcriptions";
const DEFAULT_MODEL: &str = "whisper-1";

#[derive(Deserialize)]
struct OpenAiTranscriptionResponse {
    text: String,
}

/// OpenAI Whisper API transcription provider
#[derive(Debug, Default, Clone)]
pub struct OpenAiTranscriber;

#[async_trait]
impl TranscriptionBackend for OpenAiTranscriber {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn display_name(&self) -> &'static str {
        "OpenAI"
    }

    async fn transcribe(
        &self,
        client: &reqwest::Client,
        api_key: &str,
        request: TranscriptionRequest,
    ) -> Result<TranscriptionResult> {
        let mut form = reqwest::multipart::Form::new()
            .text("model", DEFAULT_MODEL.to_string())
            .part(
                "file",
                reqwest::multipart::Part::bytes(request.audio_data.clone())
                    .file_name(request.filename.clone())
                    .mime_str(&request.mime_type)?,
            );

        if let Some(lang) = request.language.clone() {
            form = form.text("language", lang);
        }

        crate::verbose!(
            "Uploading {} ({:.1} KB) to OpenAI for transcription",
            request.filename,
            request.audio_data.len() as f64 / 1024.0
        );

        let response = client
            .post(OPENAI_TRANSCRIBE_URL)
            .header("Authorization", format!("Bearer {api_key}"))
            .multipart(form)
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("OpenAI API error ({status}): {error_text}");
        }

        let text = response
            .text()
            .await
            .context("Failed to get response text")?;
        let resp: OpenAiTranscriptionResponse =
            serde_json::from_str(&text).context("Failed to parse API response")?;

        Ok(TranscriptionResult { text: resp.text })
    }
}
