//! Transcription service backends.
//!
//! Each provider implements [`TranscriptionBackend`]; the pipeline talks to
//! the trait only, which is also what makes the orchestration testable with
//! in-process fakes.

mod gemini;
mod openai;

pub use gemini::GeminiTranscriber;
pub use openai::OpenAiTranscriber;

use async_trait::async_trait;

use crate::config::Provider;

/// Timeout for transcription uploads (large payloads, slow models)
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// A transcription request: the audio payload plus its self-describing metadata
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub audio_data: Vec<u8>,
    pub mime_type: String,
    pub filename: String,
    pub language: Option<String>,
}

/// Result of a transcription call
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionResult {
    pub text: String,
}

/// A remote speech-to-text service.
///
/// Each call is attempted exactly once; retry policy belongs to callers.
#[async_trait]
pub trait TranscriptionBackend: Send + Sync {
    fn name(&self) -> &'static str;

    fn display_name(&self) -> &'static str;

    async fn transcribe(
        &self,
        client: &reqwest::Client,
        api_key: &str,
        request: TranscriptionRequest,
    ) -> anyhow::Result<TranscriptionResult>;
}

/// Get the transcription backend for a provider
pub fn transcription_backend(provider: &Provider) -> Box<dyn TranscriptionBackend> {
    match provider {
        Provider::Gemini => Box::new(GeminiTranscriber),
        Provider::OpenAI => Box::new(OpenAiTranscriber),
    }
}
