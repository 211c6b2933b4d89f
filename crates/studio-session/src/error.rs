//! Error types for session orchestration and configuration

use std::fmt;
use std::path::PathBuf;
use studio_cards::CatalogError;
use studio_core::IdeaId;
use studio_llm::LlmError;
use studio_prompt::Command;

/// What a generation request was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    Welcome,
    Chat(Command),
    CardChange,
    Storyboard,
    ElevatorPitch,
}

impl fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationKind::Welcome => f.write_str("welcome"),
            GenerationKind::Chat(command) => write!(f, "chat ({})", command.as_str()),
            GenerationKind::CardChange => f.write_str("card change"),
            GenerationKind::Storyboard => f.write_str("storyboard"),
            GenerationKind::ElevatorPitch => f.write_str("elevator pitch"),
        }
    }
}

/// Session operation errors
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Operation needs a selected idea
    #[error("no current idea selected")]
    NoCurrentIdea,

    /// Blank chat input
    #[error("message is empty")]
    EmptyMessage,

    /// The current idea changed while the request was in flight
    #[error("{kind} response discarded: idea {idea_id} is no longer current")]
    Superseded { kind: GenerationKind, idea_id: IdeaId },

    /// The generative service failed; any fallback has already been applied
    #[error("{kind} generation failed: {source}")]
    Generation {
        kind: GenerationKind,
        model: String,
        #[source]
        source: LlmError,
    },

    /// Unknown card id
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl SessionError {
    /// Text suitable for showing to workshop participants
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SessionError::Generation {
                kind: GenerationKind::Storyboard,
                model,
                ..
            } => format!(
                "Failed to generate storyboard. Please ensure Ollama is running and the {model} model is installed."
            ),
            SessionError::Generation { model, .. } => format!(
                "Failed to generate AI response. Please ensure Ollama is running and the {model} model is installed."
            ),
            other => other.to_string(),
        }
    }

    /// Retrying the same operation later may succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            SessionError::Generation { source, .. } => source.is_retryable(),
            SessionError::Superseded { .. } => true,
            _ => false,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
