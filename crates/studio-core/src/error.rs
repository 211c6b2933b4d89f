//! Error types for the workshop state model
//!
//! Covers:
//! - Store precondition violations
//! - Durable storage failures (logged by the stores, never propagated from mutations)
//! - Card combination save gating
//! - Manual storyboard editing

use crate::phase::Phase;
use studio_cards::CatalogError;

/// Workshop/Idea store errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Ideas can only be created inside the current workshop
    #[error("cannot create idea without a current workshop")]
    NoCurrentWorkshop,

    /// Idea-bound phase entered with no idea selected
    #[error("phase '{phase}' requires a current idea")]
    PhaseRequiresIdea { phase: Phase },
}

/// Key-value storage errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing a key failed
    #[error("storage I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Storage directory could not be prepared
    #[error("cannot open storage directory {path}: {source}")]
    Directory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Collection could not be encoded or decoded
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Card combination builder errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombinationError {
    /// Catalog lookup or custom card authoring failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("select at least one card")]
    NoCardsSelected,

    #[error("describe the idea before saving")]
    EmptyDescription,

    /// Edit mode save with an identical combination
    #[error("card combination is unchanged")]
    Unchanged,

    #[error("no custom card is being authored")]
    NoPendingCustomCard,

    #[error("no selected custom card with id {0}")]
    UnknownCustomCard(String),
}

impl CombinationError {
    /// Whether the user can resolve this by editing the selection
    #[inline]
    #[must_use]
    pub fn is_gating(&self) -> bool {
        matches!(
            self,
            CombinationError::NoCardsSelected
                | CombinationError::EmptyDescription
                | CombinationError::Unchanged
        )
    }
}

/// Manual storyboard editing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoryboardError {
    #[error("no storyboard step with id {0}")]
    UnknownStep(String),

    #[error("step position {position} out of range (storyboard has {len} steps)")]
    OutOfRange { position: usize, len: usize },

    /// Removing the only step needs an explicit confirmation
    #[error("removing the last storyboard step requires confirmation")]
    ConfirmationRequired,
}
