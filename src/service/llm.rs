//! Generative model collaborator
//!
//! The chat service depends on the `GenerativeModel` capability rather than a
//! concrete provider, so handlers and services can be tested with a canned
//! implementation. The production implementation calls the Gemini
//! `generateContent` REST API.

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const ENV_GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
const ENV_GEMINI_MODEL: &str = "GEMINI_MODEL";
const DEFAULT_MODEL: &str = "gemini-pro";

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Model API returned status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Model response contained no text")]
    EmptyResponse,
}

/// Text-in/text-out generation capability
///
/// A call either fully succeeds with the model's reply or fails; there are no
/// partial results and no retries at this layer.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}

/// Client for the Gemini `generateContent` API
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

// Request and response models - only the fields we need
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiClient {
    /// Create a new Gemini client with the provided API key
    ///
    /// The model is resolved from `GEMINI_MODEL` (default: gemini-pro) and
    /// the base URL from `GEMINI_BASE_URL` (default: the public endpoint).
    pub fn new(api_key: &str) -> Self {
        let model = env::var(ENV_GEMINI_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            env::var(ENV_GEMINI_BASE_URL).unwrap_or_else(|_| GEMINI_API_BASE_URL.to_string());

        tracing::info!(model = %model, "Gemini client initialized");

        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model,
            base_url,
        }
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(
            model = %self.model,
            prompt_length = prompt.len(),
            "Requesting generation from Gemini"
        );

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::ApiError { status, body });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        extract_text(parsed)
    }
}

/// Pull the reply text out of a generation response
fn extract_text(response: GenerateContentResponse) -> Result<String, ModelError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .map(|candidate| {
            candidate
                .content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .filter(|text| !text.is_empty())
        .ok_or(ModelError::EmptyResponse)?;

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_from_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {
                        "content": {
                            "parts": [
                                {"text": "You deserve "},
                                {"text": "to feel safe."}
                            ],
                            "role": "model"
                        },
                        "finishReason": "STOP"
                    }
                ]
            }"#,
        )
        .unwrap();

        let text = extract_text(response).unwrap();
        assert_eq!(text, "You deserve to feel safe.");
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(matches!(
            extract_text(response),
            Err(ModelError::EmptyResponse)
        ));
    }

    #[test]
    fn candidate_without_text_parts_is_an_error() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": []}}]}"#).unwrap();
        assert!(matches!(
            extract_text(response),
            Err(ModelError::EmptyResponse)
        ));
    }
}
