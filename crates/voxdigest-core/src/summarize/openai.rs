//! OpenAI summarization backend via the chat completions API.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;

use super::{DEFAULT_TIMEOUT_SECS, SUMMARIZE_PROMPT, SummarizationBackend, SummaryResult, parse_summary};

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Appended to the system prompt so JSON mode produces exactly our schema.
const JSON_FIELDS_INSTRUCTION: &str = "Respond with a JSON object containing exactly \
these string fields: keyConcepts, quotes, facts, latestInformation, tldrSummary.";

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: String,
}

/// OpenAI chat-completions summarization backend
#[derive(Debug, Default, Clone)]
pub struct OpenAiSummarizer;

#[async_trait]
impl SummarizationBackend for OpenAiSummarizer {
    async fn summarize(
        &self,
        client: &reqwest::Client,
        api_key: &str,
        transcription: &str,
    ) -> Result<SummaryResult> {
        let system_prompt = format!("{SUMMARIZE_PROMPT}\n\n{JSON_FIELDS_INSTRUCTION}");

        let response = client
            .post(OPENAI_CHAT_URL)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&serde_json::json!({
                "model": DEFAULT_MODEL,
                "response_format": { "type": "json_object" },
                "messages": [
                    {"role": "system", "content": system_prompt},
                    {"role": "user", "content": transcription}
                ]
            }))
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(anyhow!("OpenAI summarization failed: {}", error_text));
        }

        let chat_response: ChatResponse = response.json().await?;
        let content = chat_response
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| anyhow!("No response from OpenAI"))?;

        parse_summary(content)
    }
}
