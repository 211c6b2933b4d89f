//! Generative text clients
//!
//! [`GenerativeClient`] is the seam the session layer talks to.
//! [`OllamaClient`] implements it against Ollama's `/api/generate`
//! with streaming disabled.

use crate::config::LlmConfig;
use crate::error::LlmError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One prompt in, one completed text out
#[async_trait]
pub trait GenerativeClient: Send + Sync + std::fmt::Debug {
    /// Generate a completion for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Model name, shown in user-facing failure messages
    fn model(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for a local Ollama service
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    config: LlmConfig,
}

impl OllamaClient {
    /// Create a client; fails only if the TLS backend cannot initialize
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &LlmConfig {
        &self.config
    }
}

#[async_trait]
impl GenerativeClient for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.config.temperature,
                top_p: self.config.top_p,
            },
        };
        tracing::debug!(
            endpoint = %self.config.endpoint,
            model = %self.config.model,
            prompt_chars = prompt.len(),
            "generate request"
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, endpoint = %self.config.endpoint, "generative service unreachable");
                LlmError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown status").to_string());
            tracing::warn!(status = status.as_u16(), %message, "generative service returned error status");
            return Err(LlmError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Malformed(e.to_string()))?;
        if let Some(error) = body.error {
            tracing::warn!(%error, "generative service reported error");
            return Err(LlmError::Service(error));
        }
        let text = body
            .response
            .ok_or_else(|| LlmError::Malformed("missing `response` field".to_string()))?;
        tracing::debug!(response_chars = text.len(), "generate completed");
        Ok(text)
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_shape_matches_generate_api() {
        let request = GenerateRequest {
            model: "mistral:instruct",
            prompt: "hi",
            stream: false,
            options: GenerateOptions {
                temperature: 0.5,
                top_p: 0.25,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "mistral:instruct");
        assert_eq!(json["stream"], false);
        assert_eq!(json["options"]["temperature"], 0.5);
        assert_eq!(json["options"]["top_p"], 0.25);
    }

    #[test]
    fn client_exposes_model() {
        let client = OllamaClient::new(LlmConfig::default().with_model("llama3")).unwrap();
        assert_eq!(client.model(), "llama3");
        assert_eq!(client.config().endpoint, crate::DEFAULT_ENDPOINT);
    }
}
