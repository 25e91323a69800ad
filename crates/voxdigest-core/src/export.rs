//! Markdown export of a completed run.
//!
//! Rendering is a pure function; file delivery is a separate infrastructure
//! concern and has no effect on pipeline state.

use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::provider::TranscriptionResult;
use crate::summarize::SummaryResult;

/// Fixed output filename
pub const EXPORT_FILE_NAME: &str = "voxdigest_ai_output.md";

/// Render the transcript and summary as a single markdown document.
///
/// The layout is fixed: the transcript fenced verbatim under a title, then
/// the five summary sections. The whole document is trimmed.
pub fn render_markdown(transcription: &TranscriptionResult, summary: &SummaryResult) -> String {
    format!(
        "# VoxDigest Audio Transcription\n\
         \n\
         ```\n\
         {}\n\
         ```\n\
         \n\
         # AI Summary\n\
         \n\
         ## Key Concepts\n\
         {}\n\
         \n\
         ## Quotes\n\
         {}\n\
         \n\
         ## Facts\n\
         {}\n\
         \n\
         ## Latest on this Matter\n\
         {}\n\
         \n\
         ## TL;DR\n\
         {}",
        transcription.text,
        summary.key_concepts,
        summary.quotes,
        summary.facts,
        summary.latest_information,
        summary.tldr_summary,
    )
    .trim()
    .to_string()
}

/// Write the markdown document to `voxdigest_ai_output.md` in `dir`.
///
/// Both results must be present; otherwise fails with `NothingToExport`
/// and performs no file operation. Returns the path of the written file.
pub fn export_markdown(
    transcription: Option<&TranscriptionResult>,
    summary: Option<&SummaryResult>,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let (Some(transcription), Some(summary)) = (transcription, summary) else {
        return Err(ExportError::NothingToExport);
    };

    let document = render_markdown(transcription, summary);
    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, document)?;

    crate::verbose!("Exported markdown to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcription(text: &str) -> TranscriptionResult {
        TranscriptionResult {
            text: text.to_string(),
        }
    }

    fn na_summary() -> SummaryResult {
        SummaryResult {
            key_concepts: "N/A".into(),
            quotes: "N/A".into(),
            facts: "N/A".into(),
            latest_information: "N/A".into(),
            tldr_summary: "N/A".into(),
        }
    }

    #[test]
    fn test_render_layout() {
        let doc = render_markdown(&transcription("Hello world"), &na_summary());

        assert!(doc.starts_with("# VoxDigest Audio Transcription\n"));
        assert!(doc.contains("```\nHello world\n```"));
        assert!(doc.contains("# AI Summary\n"));
        assert!(doc.contains("## Key Concepts\nN/A"));
        assert!(doc.contains("## Quotes\nN/A"));
        assert!(doc.contains("## Facts\nN/A"));
        assert!(doc.contains("## Latest on this Matter\nN/A"));
        assert!(doc.contains("## TL;DR\nN/A"));
        // The document as a whole is trimmed.
        assert_eq!(doc, doc.trim());
        assert!(doc.ends_with("## TL;DR\nN/A"));
    }

    #[test]
    fn test_render_section_order() {
        let doc = render_markdown(&transcription("t"), &na_summary());
        let concepts = doc.find("## Key Concepts").unwrap();
        let quotes = doc.find("## Quotes").unwrap();
        let facts = doc.find("## Facts").unwrap();
        let latest = doc.find("## Latest on this Matter").unwrap();
        let tldr = doc.find("## TL;DR").unwrap();
        assert!(concepts < quotes && quotes < facts && facts < latest && latest < tldr);
    }

    #[test]
    fn test_export_requires_both_results() {
        let dir = tempfile::tempdir().unwrap();

        let err = export_markdown(None, Some(&na_summary()), dir.path()).unwrap_err();
        assert!(matches!(err, ExportError::NothingToExport));

        let t = transcription("Hello");
        let err = export_markdown(Some(&t), None, dir.path()).unwrap_err();
        assert!(matches!(err, ExportError::NothingToExport));

        let err = export_markdown(None, None, dir.path()).unwrap_err();
        assert!(matches!(err, ExportError::NothingToExport));

        // No file was produced.
        assert!(!dir.path().join(EXPORT_FILE_NAME).exists());
    }

    #[test]
    fn test_export_writes_fixed_filename() {
        let dir = tempfile::tempdir().unwrap();
        let t = transcription("Hello world");
        let s = na_summary();

        let path = export_markdown(Some(&t), Some(&s), dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, render_markdown(&t, &s));
    }
}
