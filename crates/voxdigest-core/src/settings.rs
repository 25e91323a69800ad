//! Persistent user settings.
//!
//! Stored as JSON under the platform config directory
//! (`~/.config/voxdigest/settings.json` on Linux). Loading never fails:
//! a missing or unreadable file yields defaults. API keys fall back to the
//! provider's environment variable when not present in the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::Provider;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Default provider for transcription and summarization
    #[serde(default)]
    pub provider: Provider,

    /// API keys by provider identifier ("gemini", "openai")
    #[serde(default)]
    pub api_keys: HashMap<String, String>,

    /// Optional language hint for transcription
    #[serde(default)]
    pub language: Option<String>,
}

impl Settings {
    /// Path of the settings file, if a config directory exists on this platform
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("voxdigest").join("settings.json"))
    }

    /// Load settings, falling back to defaults if the file is missing or invalid
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                crate::warn!("Ignoring malformed settings file {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Persist settings to the config directory
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().context("No config directory available")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// API key for a provider: settings file first, then environment variable
    pub fn api_key_for(&self, provider: &Provider) -> Option<String> {
        if let Some(key) = self.api_keys.get(provider.as_str()) {
            if !key.is_empty() {
                return Some(key.clone());
            }
        }
        std::env::var(provider.api_key_env_var())
            .ok()
            .filter(|key| !key.is_empty())
    }

    /// Store an API key for a provider
    pub fn set_api_key(&mut self, provider: &Provider, key: impl Into<String>) {
        self.api_keys.insert(provider.as_str().to_string(), key.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_from_settings() {
        let mut settings = Settings::default();
        settings.set_api_key(&Provider::Gemini, "g-key");
        assert_eq!(settings.api_key_for(&Provider::Gemini).as_deref(), Some("g-key"));
    }

    #[test]
    fn test_empty_key_is_treated_as_unset() {
        let mut settings = Settings::default();
        settings.set_api_key(&Provider::OpenAI, "");
        // Empty string in the file must not shadow the env fallback path;
        // with no env var set either, there is no key.
        std::env::remove_var("OPENAI_API_KEY");
        assert_eq!(settings.api_key_for(&Provider::OpenAI), None);
    }

    #[test]
    fn test_round_trip_serialization() {
        let mut settings = Settings {
            provider: Provider::OpenAI,
            ..Default::default()
        };
        settings.set_api_key(&Provider::OpenAI, "sk-test");
        settings.language = Some("en".to_string());

        let json = serde_json::to_string(&settings).unwrap();
        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.provider, Provider::OpenAI);
        assert_eq!(parsed.api_key_for(&Provider::OpenAI).as_deref(), Some("sk-test"));
        assert_eq!(parsed.language.as_deref(), Some("en"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.provider, Provider::Gemini);
        assert!(parsed.api_keys.is_empty());
    }
}
