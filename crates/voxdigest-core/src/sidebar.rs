//! Decorative sidebar content: an AI-generated image and a one-line quote.
//!
//! These fetches are best-effort and independent of the transcription
//! pipeline: they are dispatched together, awaited independently, and on
//! failure substitute fixed fallbacks with a non-fatal warning. They never
//! affect pipeline state and are not part of the export contract.

use anyhow::Result;

use crate::genai;

/// Timeout for the image fetch (image generation is slow)
const IMAGE_TIMEOUT_SECS: u64 = 120;

/// Timeout for the quote fetch
const QUOTE_TIMEOUT_SECS: u64 = 30;

/// Fixed prompt for the decorative image
pub const IMAGE_PROMPT: &str = "ethereal female warrior, blindfolded, short white hair, \
sleek monochrome outfit, futuristic setting, abstract digital art style";

/// Fixed prompt for the one-line quote
pub const QUOTE_PROMPT: &str = "Generate a short, poignant, and thought-provoking quote. \
It could touch on themes of existence, duty, or fleeting moments. Keep it under 25 words. \
The tone should be reflective, perhaps with a hint of stoicism or melancholy.";

/// Shown when image generation fails
pub const FALLBACK_IMAGE_URL: &str = "https://placehold.co/600x400.png";

/// Shown when quote generation fails
pub const FALLBACK_QUOTE: &str = "Failed to generate a thought. Try again?";

/// Decorative content for the sidebar. `image` is either a `data:` URI with
/// the generated image or the fallback placeholder URL.
#[derive(Debug, Clone)]
pub struct SidebarContent {
    pub image: String,
    pub quote: String,
}

impl SidebarContent {
    /// The fixed content used when both fetches fail (or are skipped)
    pub fn fallback() -> Self {
        Self {
            image: FALLBACK_IMAGE_URL.to_string(),
            quote: FALLBACK_QUOTE.to_string(),
        }
    }
}

/// Fetch the decorative image and quote concurrently.
///
/// Never fails: each leg falls back to its fixed placeholder on error.
pub async fn fetch_sidebar(client: &reqwest::Client, api_key: &str) -> SidebarContent {
    let (image, quote) = tokio::join!(
        fetch_image(client, api_key),
        fetch_quote(client, api_key),
    );

    SidebarContent {
        image: image.unwrap_or_else(|e| {
            crate::warn!("Image generation failed, showing placeholder: {e}");
            FALLBACK_IMAGE_URL.to_string()
        }),
        quote: quote.unwrap_or_else(|e| {
            crate::warn!("Quote generation failed: {e}");
            FALLBACK_QUOTE.to_string()
        }),
    }
}

async fn fetch_image(client: &reqwest::Client, api_key: &str) -> Result<String> {
    let body = serde_json::json!({
        "contents": [{
            "parts": [{ "text": IMAGE_PROMPT }]
        }],
        "generationConfig": {
            "responseModalities": ["TEXT", "IMAGE"],
        },
    });

    let response = genai::generate_content(
        client,
        api_key,
        genai::DEFAULT_IMAGE_MODEL,
        body,
        IMAGE_TIMEOUT_SECS,
    )
    .await?;

    let inline = response
        .first_inline_data()
        .ok_or_else(|| anyhow::anyhow!("Image generation returned no image data"))?;

    Ok(to_data_uri(&inline.mime_type, &inline.data))
}

async fn fetch_quote(client: &reqwest::Client, api_key: &str) -> Result<String> {
    let body = serde_json::json!({
        "contents": [{
            "parts": [{ "text": QUOTE_PROMPT }]
        }]
    });

    let response = genai::generate_content(
        client,
        api_key,
        genai::DEFAULT_TEXT_MODEL,
        body,
        QUOTE_TIMEOUT_SECS,
    )
    .await?;

    let quote = response
        .first_text()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| anyhow::anyhow!("Quote generation failed to produce text"))?;

    Ok(quote.to_string())
}

fn to_data_uri(mime_type: &str, base64_data: &str) -> String {
    format!("data:{mime_type};base64,{base64_data}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_data_uri() {
        assert_eq!(
            to_data_uri("image/png", "aGVsbG8="),
            "data:image/png;base64,aGVsbG8="
        );
    }

    #[test]
    fn test_fallback_content() {
        let fallback = SidebarContent::fallback();
        assert_eq!(fallback.image, FALLBACK_IMAGE_URL);
        assert_eq!(fallback.quote, FALLBACK_QUOTE);
    }
}
