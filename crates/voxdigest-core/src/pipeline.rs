//! Pipeline orchestrator.
//!
//! Coordinates one run at a time: stage an MP3, transcribe it, feed the
//! transcript to the summarizer, and expose both results for display and
//! export. Transcription and summarization each get their own error
//! boundary, because a summarization failure must retain the already
//! produced transcript (partial success stays visible).
//!
//! State lives behind a `std::sync::Mutex` that is only held across
//! transitions, never across an await.

use std::sync::Mutex;

use crate::audio::AudioSubmission;
use crate::error::PipelineError;
use crate::http::get_http_client;
use crate::provider::{TranscriptionBackend, TranscriptionRequest, TranscriptionResult};
use crate::summarize::{SummarizationBackend, SummaryResult};

/// State of the current pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    AwaitingInput,
    Transcribing,
    Summarizing,
    Complete,
    Failed,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::AwaitingInput => "awaiting-input",
            RunState::Transcribing => "transcribing",
            RunState::Summarizing => "summarizing",
            RunState::Complete => "complete",
            RunState::Failed => "failed",
        }
    }

    /// Whether a run is currently in flight
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Transcribing | RunState::Summarizing)
    }
}

/// The single "current run" result slot. Mutated only by the orchestrator;
/// readers get clones through the accessors.
#[derive(Debug)]
struct RunSlot {
    state: RunState,
    staged: Option<AudioSubmission>,
    transcription: Option<TranscriptionResult>,
    summary: Option<SummaryResult>,
}

impl RunSlot {
    fn new() -> Self {
        Self {
            state: RunState::Idle,
            staged: None,
            transcription: None,
            summary: None,
        }
    }
}

/// Orchestrates file ingestion, the two remote calls, and result exposure.
pub struct Pipeline {
    transcriber: Box<dyn TranscriptionBackend>,
    summarizer: Box<dyn SummarizationBackend>,
    api_key: String,
    language: Option<String>,
    slot: Mutex<RunSlot>,
}

impl Pipeline {
    pub fn new(
        transcriber: Box<dyn TranscriptionBackend>,
        summarizer: Box<dyn SummarizationBackend>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            transcriber,
            summarizer,
            api_key: api_key.into(),
            language: None,
            slot: Mutex::new(RunSlot::new()),
        }
    }

    /// Optional language hint passed to the transcription service
    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    /// Stage an audio file for the next run.
    ///
    /// Only `audio/mpeg` is accepted. On mismatch any previously staged file
    /// is cleared and nothing else changes; no remote call is made. On
    /// success the submission is staged, prior results are cleared, and the
    /// state moves to `AwaitingInput`.
    pub fn submit_audio(&self, file: AudioSubmission) -> Result<(), PipelineError> {
        let mut slot = self.slot.lock().unwrap();

        if slot.state.is_running() {
            return Err(PipelineError::Busy);
        }

        if !file.is_accepted() {
            slot.staged = None;
            return Err(PipelineError::InvalidInput {
                media_type: file.media_type,
            });
        }

        crate::verbose!("Staged {} for processing", file.file_name);
        slot.staged = Some(file);
        slot.transcription = None;
        slot.summary = None;
        slot.state = RunState::AwaitingInput;
        Ok(())
    }

    /// Run the full pipeline on the staged submission.
    ///
    /// Rejected with `Busy` while a run is in flight (calls are not queued).
    /// Each remote call is attempted exactly once; after any terminal state
    /// (`Complete` or `Failed`) the caller may run again to retry.
    pub async fn run_pipeline(&self) -> Result<(), PipelineError> {
        // Entry check and transition under one lock; prior results are
        // discarded the moment a new run starts.
        let staged = {
            let mut slot = self.slot.lock().unwrap();
            if slot.state.is_running() {
                return Err(PipelineError::Busy);
            }
            let Some(staged) = slot.staged.clone() else {
                return Err(PipelineError::NoAudioStaged);
            };
            slot.transcription = None;
            slot.summary = None;
            slot.state = RunState::Transcribing;
            staged
        };

        let client = match get_http_client() {
            Ok(client) => client,
            Err(e) => {
                self.set_state(RunState::Failed);
                return Err(PipelineError::Transcription { source: e });
            }
        };

        let request = TranscriptionRequest {
            audio_data: staged.data,
            mime_type: staged.media_type,
            filename: staged.file_name,
            language: self.language.clone(),
        };

        let transcription = match self
            .transcriber
            .transcribe(client, &self.api_key, request)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                self.set_state(RunState::Failed);
                return Err(PipelineError::Transcription { source: e });
            }
        };

        let text = transcription.text.clone();
        {
            let mut slot = self.slot.lock().unwrap();
            slot.transcription = Some(transcription);
        }

        // Summarization must never run on an empty transcript.
        if text.trim().is_empty() {
            self.set_state(RunState::Failed);
            return Err(PipelineError::EmptyTranscript);
        }

        self.set_state(RunState::Summarizing);

        let summary = match self.summarizer.summarize(client, &self.api_key, &text).await {
            Ok(result) => result,
            Err(e) => {
                // The transcript stays in the slot: partial success is preserved.
                self.set_state(RunState::Failed);
                return Err(PipelineError::Summarization { source: e });
            }
        };

        let mut slot = self.slot.lock().unwrap();
        slot.summary = Some(summary);
        slot.state = RunState::Complete;
        Ok(())
    }

    /// Current run state
    pub fn state(&self) -> RunState {
        self.slot.lock().unwrap().state
    }

    /// Transcription result of the current run, if any
    pub fn transcription(&self) -> Option<TranscriptionResult> {
        self.slot.lock().unwrap().transcription.clone()
    }

    /// Summary result of the current run, if any
    pub fn summary(&self) -> Option<SummaryResult> {
        self.slot.lock().unwrap().summary.clone()
    }

    /// Name of the staged audio file, if one is staged
    pub fn staged_file_name(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap()
            .staged
            .as_ref()
            .map(|s| s.file_name.clone())
    }

    fn set_state(&self, state: RunState) {
        self.slot.lock().unwrap().state = state;
    }
}
