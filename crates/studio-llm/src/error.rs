//! Error types for the generative client

/// Failure of one generation request
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Transport failure: connection refused, timeout, body read
    #[error("request to generative service failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx answer; `message` is the service's `error` field or the status reason
    #[error("Ollama API error: {message}")]
    Status { status: u16, message: String },

    /// 2xx answer carrying an `error` field
    #[error("Ollama API error: {0}")]
    Service(String),

    /// 2xx answer without generated text
    #[error("malformed generative response: {0}")]
    Malformed(String),
}

impl LlmError {
    /// Worth trying again later without changing the request
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            LlmError::Http(e) => e.is_connect() || e.is_timeout(),
            LlmError::Status { status, .. } => *status >= 500,
            LlmError::Service(_) | LlmError::Malformed(_) => false,
        }
    }

    /// Status code of the failed answer, if the service answered
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::Status { status, .. } => Some(*status),
            LlmError::Http(e) => e.status().map(|s| s.as_u16()),
            LlmError::Service(_) | LlmError::Malformed(_) => None,
        }
    }
}
