use serde::{Deserialize, Serialize};
use std::fmt;

/// Available remote AI providers
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Gemini,
    OpenAI,
}

impl Provider {
    /// Get the string identifier for this provider
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::OpenAI => "openai",
        }
    }

    /// Get the environment variable name for this provider's API key
    pub fn api_key_env_var(&self) -> &'static str {
        match self {
            Provider::Gemini => "GEMINI_API_KEY",
            Provider::OpenAI => "OPENAI_API_KEY",
        }
    }

    /// List all available providers
    pub fn all() -> &'static [Provider] {
        &[Provider::Gemini, Provider::OpenAI]
    }

    /// Human-readable display name for this provider
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Gemini => "Gemini",
            Provider::OpenAI => "OpenAI",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" | "google" => Ok(Provider::Gemini),
            "openai" => Ok(Provider::OpenAI),
            _ => Err(format!(
                "Unknown provider: {}. Available: gemini, openai",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trip() {
        for provider in Provider::all() {
            let parsed: Provider = provider.as_str().parse().unwrap();
            assert_eq!(&parsed, provider);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("anthropic".parse::<Provider>().is_err());
    }

    #[test]
    fn test_default_is_gemini() {
        assert_eq!(Provider::default(), Provider::Gemini);
    }
}
