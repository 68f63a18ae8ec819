use anyhow::{Context, Result, bail};
use serde_json::{Value, json};

use crate::http_client::http_client;

pub const GENERATION_FAILED: &str = "[Failed to generate summary.]";

const DEFAULT_GENERATOR_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Client for the external text generator. Any failure, transport or shape,
/// degrades to the fixed placeholder so the rest of the pipeline (annotation,
/// sending) still runs.
pub struct Generator {
    api_key: String,
    url: String,
}

impl Generator {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            url: DEFAULT_GENERATOR_URL.to_string(),
        }
    }

    pub fn generate(&self, prompt: &str) -> String {
        match self.request(prompt) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("text generation failed: {err:#}");
                GENERATION_FAILED.to_string()
            }
        }
    }

    fn request(&self, prompt: &str) -> Result<String> {
        let body = json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        });
        let response = http_client()?
            .post(&self.url)
            .header("Content-Type", "application/json")
            .header("X-Goog-Api-Key", &self.api_key)
            .json(&body)
            .send()
            .context("generator request failed")?;
        let status = response.status();
        let raw = response.text().context("generator body unreadable")?;
        if !status.is_success() {
            bail!("generator returned {status}: {raw}");
        }
        parse_generator_response(&raw)
    }
}

/// Pull the generated text out of a `generateContent`-style response.
pub fn parse_generator_response(raw: &str) -> Result<String> {
    let root: Value = serde_json::from_str(raw).context("invalid generator json")?;
    root.get("candidates")
        .and_then(|v| v.get(0))
        .and_then(|v| v.get("content"))
        .and_then(|v| v.get("parts"))
        .and_then(|v| v.get(0))
        .and_then(|v| v.get("text"))
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .context("generator response missing candidate text")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_candidate_text() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"What a match!"}]}}]}"#;
        assert_eq!(parse_generator_response(raw).unwrap(), "What a match!");
    }

    #[test]
    fn missing_candidates_is_an_error() {
        assert!(parse_generator_response(r#"{"error":{"code":500}}"#).is_err());
        assert!(parse_generator_response("not json").is_err());
    }
}
