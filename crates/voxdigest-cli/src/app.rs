use anyhow::Result;
use voxdigest_core::{Provider, Settings};

/// Resolved configuration for a pipeline run
pub struct PipelineConfig {
    pub provider: Provider,
    pub api_key: String,
    pub language: Option<String>,
}

/// Load provider and API key from settings, with a CLI override for the
/// provider. Exits with setup instructions when no key is configured.
pub fn load_pipeline_config(provider_override: Option<Provider>) -> Result<PipelineConfig> {
    let settings = Settings::load();
    let provider = provider_override.unwrap_or_else(|| settings.provider.clone());
    let language = settings.language.clone();

    let api_key = match settings.api_key_for(&provider) {
        Some(key) => key,
        None => {
            eprintln!("Error: No {} API key configured.", provider.display_name());
            eprintln!("\nSet your key with:");
            eprintln!("  voxdigest config --{}-api-key YOUR_KEY\n", provider.as_str());
            eprintln!(
                "Or set the {} environment variable.",
                provider.api_key_env_var()
            );
            std::process::exit(1);
        }
    };

    Ok(PipelineConfig {
        provider,
        api_key,
        language,
    })
}
