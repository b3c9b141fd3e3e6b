//! Gemini API client implementation
//!
//! Implements the GenerativeClient trait against the Google Generative
//! Language API's generateContent endpoint. One-shot generation and chat
//! use the same request shape; chat simply replays the full history.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::{GenerativeClient, LlmError, Message};
use crate::config::LlmConfig;

/// Maximum number of retries for transient errors
const MAX_RETRIES: u32 = 3;

/// Initial backoff delay for retries
const INITIAL_BACKOFF_MS: u64 = 1000;

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 500 | 502 | 503 | 504)
}

/// Google Generative Language API client
pub struct GeminiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    max_output_tokens: u32,
}

impl GeminiClient {
    /// Create a new client from configuration
    ///
    /// Reads the API key from the environment variable named in config.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let api_key = config
            .get_api_key()
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
            max_output_tokens: config.max_output_tokens,
        })
    }

    /// Build the request body for the generateContent endpoint
    fn build_request_body(&self, contents: &[Message]) -> serde_json::Value {
        serde_json::json!({
            "contents": contents
                .iter()
                .map(|m| serde_json::json!({
                    "role": m.role,
                    "parts": [{ "text": m.text }],
                }))
                .collect::<Vec<_>>(),
            "generationConfig": {
                "maxOutputTokens": self.max_output_tokens,
            },
        })
    }

    /// Send one request, retrying transient failures with backoff
    async fn request(&self, contents: &[Message]) -> Result<String, LlmError> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model);
        let body = self.build_request_body(contents);

        let mut last_error = None;
        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                let backoff = INITIAL_BACKOFF_MS * 2u64.pow(attempt - 1);
                warn!(attempt, backoff_ms = backoff, "request: retrying after transient error");
                tokio::time::sleep(Duration::from_millis(backoff)).await;
            }

            let response = match self
                .http
                .post(url.clone())
                .header("x-goog-api-key", self.api_key.clone())
                .header("content-type", "application/json")
                .json(&body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    debug!(attempt, error = %e, "request: network error");
                    last_error = Some(LlmError::Network(e));
                    continue;
                }
            };

            let status = response.status().as_u16();

            if status == 429 {
                debug!("request: rate limited (429)");
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(60);

                return Err(LlmError::RateLimited {
                    retry_after: Duration::from_secs(retry_after),
                });
            }

            if is_retryable_status(status) && attempt < MAX_RETRIES {
                let text = response.text().await.unwrap_or_default();
                debug!(attempt, status, "request: retryable error");
                last_error = Some(LlmError::ApiError { status, message: text });
                continue;
            }

            if !response.status().is_success() {
                debug!(%status, "request: API error");
                let text = response.text().await.unwrap_or_default();
                return Err(LlmError::ApiError { status, message: text });
            }

            let api_response: GenerateContentResponse =
                response.json().await.map_err(LlmError::Network)?;
            return parse_response(api_response);
        }

        Err(last_error.unwrap_or_else(|| LlmError::InvalidResponse("Retries exhausted".to_string())))
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        debug!(model = %self.model, prompt_len = prompt.len(), "generate: called");
        self.request(&[Message::user(prompt)]).await
    }

    async fn chat(&self, history: &[Message]) -> Result<String, LlmError> {
        debug!(model = %self.model, history_len = history.len(), "chat: called");
        self.request(history).await
    }
}

/// Concatenate the text parts of the first candidate
fn parse_response(response: GenerateContentResponse) -> Result<String, LlmError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("No candidates in response".to_string()))?;

    let text: String = candidate
        .content
        .map(|c| {
            c.parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(LlmError::InvalidResponse(format!(
            "Empty candidate (finish reason: {})",
            candidate.finish_reason.unwrap_or_else(|| "unknown".to_string())
        )));
    }

    Ok(text)
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Role;

    #[test]
    fn test_parse_response_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "Day 1" }, { "text": " (5 hours):" }],
                },
                "finishReason": "STOP",
            }],
        }))
        .unwrap();

        assert_eq!(parse_response(response).unwrap(), "Day 1 (5 hours):");
    }

    #[test]
    fn test_parse_response_no_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();

        assert!(matches!(
            parse_response(response),
            Err(LlmError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_parse_response_empty_candidate_reports_finish_reason() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{ "finishReason": "SAFETY" }],
        }))
        .unwrap();

        let err = parse_response(response).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_request_body_shape() {
        let client = GeminiClient {
            model: "gemini-1.5-pro".to_string(),
            api_key: "test-key".to_string(),
            base_url: "https://example.com".to_string(),
            http: Client::new(),
            max_output_tokens: 256,
        };

        let body = client.build_request_body(&[
            Message::user("hello"),
            Message {
                role: Role::Model,
                text: "hi".to_string(),
            },
        ]);

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["contents"][1]["role"], "model");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 256);
    }

    #[test]
    fn test_is_retryable_status() {
        assert!(is_retryable_status(500));
        assert!(is_retryable_status(503));
        assert!(is_retryable_status(408));
        assert!(!is_retryable_status(400));
        assert!(!is_retryable_status(404));
    }
}
