//! Studio LLM - Generative text mediation
//!
//! Sends a prompt to a local generative service and returns the
//! completed text. Prompt content and response parsing live elsewhere;
//! this crate only moves strings over HTTP.
//!
//! Errors are propagated to the caller. Fallback texts are a session
//! concern.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod client;
pub mod config;
pub mod error;

pub use client::{GenerativeClient, OllamaClient};
pub use config::{LlmConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TOP_P};
pub use error::LlmError;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for generative clients
    pub use crate::{GenerativeClient, LlmConfig, LlmError, OllamaClient};
}
