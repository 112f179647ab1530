// src/chat/gemini_client.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::config_manager::ChatConfig;
use crate::core::ServiceClient;

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

pub struct GeminiClient {
    client: ServiceClient,
    api_key: String,
    url: String,
}

impl GeminiClient {
    /// `None` when no API key is configured.
    pub fn from_config(config: &ChatConfig, client: ServiceClient) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        let url = format!(
            "{}/models/{}:generateContent",
            config.api_url.trim_end_matches('/'),
            config.model
        );

        Some(Self {
            client,
            api_key,
            url,
        })
    }

    /// Send `message` as a single user turn and return the first candidate's text.
    pub async fn generate(&self, message: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: message }],
            }],
        };

        info!("Sending chat message to generative-language API");

        let response: GenerateContentResponse = self
            .client
            .post_json(&self.url, &[("x-goog-api-key", self.api_key.as_str())], &request)
            .await
            .context("Generative-language API request failed")?;

        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            anyhow::bail!("Generative-language API returned no text");
        }

        Ok(text)
    }
}
