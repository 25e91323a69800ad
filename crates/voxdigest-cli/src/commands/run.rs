//! The `run` command: stage a file, run the pipeline, print and export.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use voxdigest_core::{
    AudioSubmission, Pipeline, Provider, SidebarContent, export_markdown, fetch_sidebar,
    get_http_client, summarization_backend, transcription_backend,
};

use crate::app;

#[derive(Args)]
pub struct RunArgs {
    /// Path to the .mp3 file to process
    pub file: PathBuf,

    /// Directory to write voxdigest_ai_output.md into (defaults to the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// AI provider to use (gemini, openai)
    #[arg(long)]
    pub provider: Option<Provider>,

    /// Skip the decorative sidebar image and quote
    #[arg(long)]
    pub no_sidebar: bool,
}

pub async fn execute(args: RunArgs) -> Result<()> {
    let config = app::load_pipeline_config(args.provider)?;

    let submission = AudioSubmission::from_path(&args.file)?;
    let pipeline = Pipeline::new(
        transcription_backend(&config.provider),
        summarization_backend(&config.provider),
        config.api_key.clone(),
    )
    .with_language(config.language.clone());

    pipeline.submit_audio(submission)?;

    println!(
        "Processing {} with {}...",
        args.file.display(),
        config.provider.display_name()
    );

    // The decorative fetches run alongside the pipeline; their latency and
    // failures never gate it.
    let (run_result, sidebar) = if args.no_sidebar {
        (pipeline.run_pipeline().await, None)
    } else {
        let client = get_http_client()?;
        let (run_result, sidebar) =
            tokio::join!(pipeline.run_pipeline(), fetch_sidebar(client, &config.api_key));
        (run_result, Some(sidebar))
    };

    if let Some(sidebar) = &sidebar {
        print_sidebar(sidebar);
    }

    // A failed summarization still leaves a transcript worth showing.
    if let Some(transcription) = pipeline.transcription() {
        println!("\n{}", style("Transcription").bold().cyan());
        println!("{}", transcription.text);
    }

    run_result?;

    if let Some(summary) = pipeline.summary() {
        println!("\n{}", style("AI Summary").bold().cyan());
        print_section("Key Concepts", &summary.key_concepts);
        print_section("Quotes", &summary.quotes);
        print_section("Facts", &summary.facts);
        print_section("Latest on this Matter", &summary.latest_information);
        print_section("TL;DR", &summary.tldr_summary);
    }

    let out_dir = match args.output {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };
    let transcription = pipeline.transcription();
    let summary = pipeline.summary();
    let path = export_markdown(transcription.as_ref(), summary.as_ref(), &out_dir)?;
    println!("\nSaved {}", style(path.display()).green());

    Ok(())
}

fn print_sidebar(sidebar: &SidebarContent) {
    println!("\n{}", style(&sidebar.quote).italic());
    if sidebar.image.starts_with("data:") {
        println!(
            "{}",
            style(format!(
                "(decorative image generated, {} KB)",
                sidebar.image.len() / 1024
            ))
            .dim()
        );
    } else {
        println!("{}", style(format!("(placeholder image: {})", sidebar.image)).dim());
    }
}

fn print_section(title: &str, body: &str) {
    println!("\n{}", style(title).bold());
    println!("{body}");
}
