//! Studio Session - Workshop orchestration over a generative service
//!
//! Drives the non-presentational side of the refinement, storyboard and
//! elevator pitch phases:
//! - Welcome turn, chat commands and card change acknowledgement
//! - Suggested cards applied to the current idea
//! - Storyboard and pitch generation with fallbacks
//! - Compare-and-set application of every response
//! - [`StudioConfig`] loading from TOML and environment
//!
//! # Example
//!
//! ```rust,no_run
//! use parking_lot::Mutex;
//! use std::sync::Arc;
//! use studio_core::{EvaluationStore, WorkshopStore};
//! use studio_llm::{LlmConfig, OllamaClient};
//! use studio_session::StudioSession;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let session = StudioSession::new(
//!     Arc::new(Mutex::new(WorkshopStore::in_memory())),
//!     Arc::new(Mutex::new(EvaluationStore::in_memory())),
//!     Arc::new(OllamaClient::new(LlmConfig::default())?),
//! );
//! let storyboard = session.generate_storyboard().await?;
//! assert_eq!(storyboard.len(), 8);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod artifacts;
pub mod chat;
pub mod config;
pub mod error;
pub mod session;

pub use chat::{chat_failure_message, CARD_CHANGE_NOTICE};
pub use config::{StudioConfig, DEFAULT_DATA_DIR, ENV_DATA_DIR, ENV_LLM_ENDPOINT, ENV_LLM_MODEL};
pub use error::{ConfigError, GenerationKind, SessionError};
pub use session::{PendingGeneration, StudioSession};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for session consumers
    pub use crate::{SessionError, StudioConfig, StudioSession};
}
