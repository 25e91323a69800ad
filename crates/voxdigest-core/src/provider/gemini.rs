//! Gemini transcription provider.
//!
//! Sends the audio as an inline blob (mime type + base64 data travel
//! together) to `generateContent` alongside a transcription instruction,
//! and reads the transcript back as plain text.

use anyhow::Result;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use super::{DEFAULT_TIMEOUT_SECS, TranscriptionBackend, TranscriptionRequest, TranscriptionResult};
use crate::genai;

const TRANSCRIBE_PROMPT: &str = "Transcribe the spoken audio verbatim. \
Output only the transcript text, with no commentary or speaker labels.";

/// Gemini `generateContent` transcription provider
#[derive(Debug, Default, Clone)]
pub struct GeminiTranscriber;

#[async_trait]
impl TranscriptionBackend for GeminiTranscriber {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Gemini"
    }

    async fn transcribe(
        &self,
        client: &reqwest::Client,
        api_key: &str,
        request: TranscriptionRequest,
    ) -> Result<TranscriptionResult> {
        let mut instruction = TRANSCRIBE_PROMPT.to_string();
        if let Some(lang) = &request.language {
            instruction.push_str(&format!(" The audio is in {lang}."));
        }

        let body = serde_json::json!({
            "contents": [{
                "parts": [
                    {
                        "inlineData": {
                            "mimeType": request.mime_type,
                            "data": BASE64.encode(&request.audio_data),
                        }
                    },
                    { "text": instruction },
                ]
            }]
        });

        crate::verbose!(
            "Uploading {} ({:.1} KB) to Gemini for transcription",
            request.filename,
            request.audio_data.len() as f64 / 1024.0
        );

        let response = genai::generate_content(
            client,
            api_key,
            genai::DEFAULT_TEXT_MODEL,
            body,
            DEFAULT_TIMEOUT_SECS,
        )
        .await?;

        let text = response
            .first_text()
            .ok_or_else(|| anyhow::anyhow!("Gemini returned no transcript text"))?;

        Ok(TranscriptionResult {
            text: text.trim().to_string(),
        })
    }
}
