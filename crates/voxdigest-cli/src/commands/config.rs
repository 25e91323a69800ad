//! The `config` command: persist API keys and the default provider.

use anyhow::Result;
use clap::Args;

use voxdigest_core::{Provider, Settings};

#[derive(Args)]
pub struct ConfigArgs {
    /// Set the Gemini API key
    #[arg(long, value_name = "KEY")]
    pub gemini_api_key: Option<String>,

    /// Set the OpenAI API key
    #[arg(long, value_name = "KEY")]
    pub openai_api_key: Option<String>,

    /// Set the default provider (gemini, openai)
    #[arg(long)]
    pub provider: Option<Provider>,

    /// Set the transcription language hint (e.g. "en"); pass an empty string to clear
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Show the current configuration
    #[arg(long)]
    pub show: bool,
}

pub fn execute(args: ConfigArgs) -> Result<()> {
    let mut settings = Settings::load();
    let mut changed = false;

    if let Some(key) = args.gemini_api_key {
        settings.set_api_key(&Provider::Gemini, key);
        changed = true;
    }
    if let Some(key) = args.openai_api_key {
        settings.set_api_key(&Provider::OpenAI, key);
        changed = true;
    }
    if let Some(provider) = args.provider {
        settings.provider = provider;
        changed = true;
    }
    if let Some(language) = args.language {
        settings.language = if language.is_empty() { None } else { Some(language) };
        changed = true;
    }

    if changed {
        settings.save()?;
        println!("Settings saved.");
    }

    if args.show || !changed {
        println!("Provider: {}", settings.provider);
        for provider in Provider::all() {
            let status = if settings.api_key_for(provider).is_some() {
                "configured"
            } else {
                "not set"
            };
            println!("{} API key: {}", provider.display_name(), status);
        }
        if let Some(language) = &settings.language {
            println!("Language hint: {language}");
        }
        if let Some(path) = Settings::config_path() {
            println!("Settings file: {}", path.display());
        }
    }

    Ok(())
}
