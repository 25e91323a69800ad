//! Error types for the transcription/summarization pipeline and the exporter.

use thiserror::Error;

/// Errors surfaced by [`crate::Pipeline`].
///
/// Every variant leaves the pipeline in a well-defined state: `InvalidInput`,
/// `Busy` and `NoAudioStaged` mutate nothing beyond what their docs say, and
/// the remote-call variants leave the run in `Failed`, from which the caller
/// may retry the whole run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The submitted file is not MP3 audio. Any previously staged file has
    /// been cleared; no remote call was made.
    #[error("Invalid file type '{media_type}': only audio/mpeg (.mp3) is accepted")]
    InvalidInput { media_type: String },

    /// A run is already in flight; the call was rejected, not queued.
    #[error("A pipeline run is already in progress")]
    Busy,

    /// `run_pipeline` was called before any audio was staged.
    #[error("No audio file staged; submit an .mp3 file first")]
    NoAudioStaged,

    /// The transcription service call failed. Summarization was not attempted.
    #[error("Transcription failed: {source}")]
    Transcription {
        #[source]
        source: anyhow::Error,
    },

    /// Transcription succeeded but yielded no usable text. Summarization was
    /// not attempted.
    #[error("Transcription produced no usable text")]
    EmptyTranscript,

    /// The summarization service call failed. The transcription result from
    /// this run is retained and stays visible.
    #[error("Summarization failed: {source}")]
    Summarization {
        #[source]
        source: anyhow::Error,
    },
}

/// Errors surfaced by [`crate::export_markdown`].
#[derive(Debug, Error)]
pub enum ExportError {
    /// Export requires both a transcription and a summary; no file was written.
    #[error("Nothing to export: both transcription and summary are required")]
    NothingToExport,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
