//! LLM-based transcript summarization.
//!
//! A successful transcription is sent to a hosted language model which
//! returns five labeled sections as a JSON object. Both backends request
//! JSON output from the model and parse it into [`SummaryResult`], so a
//! malformed model reply surfaces as a summarization failure rather than
//! a half-filled summary.

mod gemini;
mod openai;

pub use gemini::GeminiSummarizer;
pub use openai::OpenAiSummarizer;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Provider;

/// Timeout for summarization calls
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Instruction sent to the summarization model.
pub const SUMMARIZE_PROMPT: &str = "Summarize the following audio transcription. \
Extract key concepts, important quotes, and key facts.\n\n\
After this, identify the main subject or topics discussed in the transcription. \
Based on your knowledge up to your last update, provide a brief overview of any \
recent developments, current discussions, or relevant context pertaining to these \
main subjects. Present this under a section titled \"Latest on this Matter\".\n\n\
Then, provide a student-friendly summary designed to help someone study or review \
the material. Make it clear, concise, and easy to understand, specially on how \
important points connect.\n\n\
Finally, provide a TL;DR summary that incorporates the essence of the transcription \
and any significant points from the \"Latest on this Matter\" section.";

/// The five labeled sections produced by summarization.
///
/// Wire format is camelCase, matching the JSON schema both backends request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub key_concepts: String,
    pub quotes: String,
    pub facts: String,
    pub latest_information: String,
    pub tldr_summary: String,
}

/// A remote summarization service.
///
/// Called only with a non-empty transcript; each call is attempted exactly once.
#[async_trait]
pub trait SummarizationBackend: Send + Sync {
    async fn summarize(
        &self,
        client: &reqwest::Client,
        api_key: &str,
        transcription: &str,
    ) -> Result<SummaryResult>;
}

/// Get the summarization backend for a provider
pub fn summarization_backend(provider: &Provider) -> Box<dyn SummarizationBackend> {
    match provider {
        Provider::Gemini => Box::new(GeminiSummarizer),
        Provider::OpenAI => Box::new(OpenAiSummarizer),
    }
}

/// Parse a model's JSON reply into a [`SummaryResult`].
///
/// All five fields are required; a reply missing any of them is an error.
pub(crate) fn parse_summary(json_text: &str) -> Result<SummaryResult> {
    serde_json::from_str(json_text).context("Summarization reply was not a valid summary object")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary_camel_case() {
        let json = r#"{
            "keyConcepts": "ownership and borrowing",
            "quotes": "\"fearless concurrency\"",
            "facts": "Rust 1.0 shipped in 2015",
            "latestInformation": "recent releases focus on async",
            "tldrSummary": "a talk about Rust"
        }"#;
        let summary = parse_summary(json).unwrap();
        assert_eq!(summary.key_concepts, "ownership and borrowing");
        assert_eq!(summary.latest_information, "recent releases focus on async");
        assert_eq!(summary.tldr_summary, "a talk about Rust");
    }

    #[test]
    fn test_parse_summary_rejects_missing_fields() {
        let json = r#"{"keyConcepts": "a", "quotes": "b"}"#;
        assert!(parse_summary(json).is_err());
    }

    #[test]
    fn test_parse_summary_rejects_non_object() {
        assert!(parse_summary("just some prose").is_err());
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = SummaryResult {
            key_concepts: "a".into(),
            quotes: "b".into(),
            facts: "c".into(),
            latest_information: "d".into(),
            tldr_summary: "e".into(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("keyConcepts").is_some());
        assert!(json.get("tldrSummary").is_some());
        assert!(json.get("key_concepts").is_none());
    }
}
