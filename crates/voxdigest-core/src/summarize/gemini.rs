//! Gemini summarization backend.
//!
//! Uses `generateContent` with a JSON response mime type and an explicit
//! response schema, so the model reply is guaranteed to be a bare JSON
//! object with the five summary fields.

use anyhow::Result;
use async_trait::async_trait;

use super::{DEFAULT_TIMEOUT_SECS, SUMMARIZE_PROMPT, SummarizationBackend, SummaryResult, parse_summary};
use crate::genai;

/// Gemini `generateContent` summarization backend
#[derive(Debug, Default, Clone)]
pub struct GeminiSummarizer;

fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "keyConcepts": { "type": "STRING" },
            "quotes": { "type": "STRING" },
            "facts": { "type": "STRING" },
            "latestInformation": { "type": "STRING" },
            "tldrSummary": { "type": "STRING" },
        },
        "required": ["keyConcepts", "quotes", "facts", "latestInformation", "tldrSummary"],
    })
}

#[async_trait]
impl SummarizationBackend for GeminiSummarizer {
    async fn summarize(
        &self,
        client: &reqwest::Client,
        api_key: &str,
        transcription: &str,
    ) -> Result<SummaryResult> {
        let body = serde_json::json!({
            "contents": [{
                "parts": [
                    { "text": format!("{SUMMARIZE_PROMPT}\n\nTranscription: {transcription}") },
                ]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            },
        });

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
            .ok_or_else(|| anyhow::anyhow!("Gemini returned no summary text"))?;

        parse_summary(text)
    }
}
