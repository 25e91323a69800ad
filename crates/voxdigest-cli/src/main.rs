mod app;
mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "voxdigest",
    version,
    about = "Transcribe and summarize audio files with hosted AI models"
)]
struct Cli {
    /// Print verbose progress information
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transcribe an .mp3 file, summarize it, and export markdown
    Run(commands::run::RunArgs),
    /// Show or update configuration
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up API keys from a local .env during development
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    voxdigest_core::set_verbose(cli.verbose);

    match cli.command {
        Command::Run(args) => commands::run::execute(args).await,
        Command::Config(args) => commands::config::execute(args),
    }
}
