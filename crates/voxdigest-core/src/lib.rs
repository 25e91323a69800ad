pub mod audio;
pub mod config;
pub mod error;
pub mod export;
mod genai;
pub mod http;
pub mod pipeline;
pub mod provider;
pub mod settings;
pub mod sidebar;
pub mod summarize;
pub mod verbose;

pub use audio::{ACCEPTED_MEDIA_TYPE, AudioSubmission};
pub use config::Provider;
pub use error::{ExportError, PipelineError};
pub use export::{EXPORT_FILE_NAME, export_markdown, render_markdown};
pub use http::get_http_client;
pub use pipeline::{Pipeline, RunState};
pub use provider::{
    TranscriptionBackend, TranscriptionRequest, TranscriptionResult, transcription_backend,
};
pub use settings::Settings;
pub use sidebar::{SidebarContent, fetch_sidebar};
pub use summarize::{SummarizationBackend, SummaryResult, summarization_backend};
pub use verbose::set_verbose;
