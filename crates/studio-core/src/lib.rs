//! Studio Core - Workshop state model
//!
//! The single source of truth for an ideation workshop:
//! - Workshops and their ideas, with current-selection pointers
//! - Caller-driven phase machine (ideation to elevator pitch)
//! - Per-idea criteria selection and responses
//! - Card combination building with save gating
//! - Storyboard editing and workshop summaries
//! - Best-effort persistence through a [`KeyValueStore`]
//!
//! Stores are plain values handed to whoever needs them; there is no
//! global instance.
//!
//! # Example
//!
//! ```rust
//! use studio_core::prelude::*;
//!
//! let mut store = WorkshopStore::in_memory();
//! let workshop = store.create_workshop(WorkshopDraft::new("Demo"));
//! store.set_current_workshop(Some(workshop.id.clone()));
//!
//! let idea = store.create_idea(IdeaDraft::new().with_description("test")).unwrap();
//! assert_eq!(idea.workshop_id, workshop.id);
//! assert_eq!(idea.title, "New Idea");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod combination;
pub mod error;
pub mod evaluation;
pub mod model;
pub mod phase;
pub mod storage;
pub mod store;
pub mod storyboard;
pub mod summary;

pub use combination::{CombinationBuilder, Selection};
pub use error::{CombinationError, StorageError, StoreError, StoryboardError};
pub use evaluation::{CriteriaToggle, EvaluationStore, MAX_SELECTED_CRITERIA};
pub use model::{
    new_id, CardCombination, CardSuggestion, ChatMessage, Evaluation, EvaluationCriteria, Idea,
    IdeaDraft, IdeaId, IdeaPatch, MessageAction, MessageType, Refinement, RefinementType,
    Storyboard, StoryboardStep, Workshop, WorkshopDraft, WorkshopId, WorkshopPatch,
};
pub use phase::Phase;
pub use storage::{keys, FileStore, KeyValueStore, MemoryStore};
pub use store::{WorkshopStore, DEFAULT_IDEA_TITLE};
pub use storyboard::STORYBOARD_STEPS;
pub use summary::{CardUsage, IdeaProgress, WorkshopSummary};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the workshop model
    pub use crate::{
        CardCombination, ChatMessage, CombinationBuilder, EvaluationStore, Idea, IdeaDraft,
        IdeaId, IdeaPatch, Phase, Storyboard, Workshop, WorkshopDraft, WorkshopId,
        WorkshopStore,
    };
}
