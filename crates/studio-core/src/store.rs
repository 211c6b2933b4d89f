//! Workshop/Idea store
//!
//! Single owner of every workshop and idea. The current workshop and idea
//! are id pointers resolved against the live collections, so any update is
//! visible through them immediately. Each mutation persists the affected
//! collection before returning.

use crate::error::StoreError;
use crate::model::{Idea, IdeaDraft, IdeaId, IdeaPatch, Workshop, WorkshopDraft, WorkshopId, WorkshopPatch};
use crate::phase::Phase;
use crate::storage::{keys, load_collection, persist_collection, KeyValueStore, MemoryStore};
use chrono::Utc;
use std::sync::Arc;

/// Default title of an idea created without one
pub const DEFAULT_IDEA_TITLE: &str = "New Idea";

/// Source of truth for workshops, ideas and the selection pointers
#[derive(Debug)]
pub struct WorkshopStore {
    storage: Arc<dyn KeyValueStore>,
    workshops: Vec<Workshop>,
    ideas: Vec<Idea>,
    current_workshop: Option<WorkshopId>,
    current_idea: Option<IdeaId>,
    current_phase: Phase,
}

impl WorkshopStore {
    /// Open a store over `storage`, loading persisted collections
    #[must_use]
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Self {
        let workshops: Vec<Workshop> = load_collection(storage.as_ref(), keys::WORKSHOPS);
        let ideas: Vec<Idea> = load_collection(storage.as_ref(), keys::IDEAS);
        tracing::debug!(
            workshops = workshops.len(),
            ideas = ideas.len(),
            "workshop store loaded"
        );
        Self {
            storage,
            workshops,
            ideas,
            current_workshop: None,
            current_idea: None,
            current_phase: Phase::default(),
        }
    }

    /// Store backed by a fresh [`MemoryStore`]
    #[must_use]
    pub fn in_memory() -> Self {
        Self::open(Arc::new(MemoryStore::new()))
    }

    /// Backing storage
    #[must_use]
    pub fn storage(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.storage)
    }

    // ---- workshops ----

    /// Create a workshop from a draft and persist it
    pub fn create_workshop(&mut self, draft: WorkshopDraft) -> Workshop {
        let now = Utc::now();
        let workshop = Workshop {
            id: WorkshopId::new(),
            name: draft.name,
            date: draft.date,
            facilitator_name: draft.facilitator_name,
            description: draft.description,
            mission: draft.mission,
            persona: draft.persona,
            scenario: draft.scenario,
            created_at: now,
            updated_at: now,
        };
        tracing::info!(workshop_id = %workshop.id, name = %workshop.name, "workshop created");
        self.workshops.push(workshop.clone());
        self.persist_workshops();
        workshop
    }

    /// Merge `patch` into a workshop; unknown ids are ignored
    pub fn update_workshop(&mut self, id: &WorkshopId, patch: WorkshopPatch) {
        let Some(workshop) = self.workshops.iter_mut().find(|w| &w.id == id) else {
            tracing::debug!(workshop_id = %id, "update of unknown workshop ignored");
            return;
        };
        patch.apply(workshop);
        workshop.updated_at = Utc::now();
        self.persist_workshops();
    }

    /// Delete a workshop and every idea belonging to it
    pub fn delete_workshop(&mut self, id: &WorkshopId) {
        let before = self.workshops.len();
        self.workshops.retain(|w| &w.id != id);
        if self.workshops.len() == before {
            tracing::debug!(workshop_id = %id, "delete of unknown workshop ignored");
            return;
        }

        let cascaded: Vec<IdeaId> = self
            .ideas
            .iter()
            .filter(|idea| &idea.workshop_id == id)
            .map(|idea| idea.id.clone())
            .collect();
        self.ideas.retain(|idea| &idea.workshop_id != id);

        if self.current_workshop.as_ref() == Some(id) {
            self.current_workshop = None;
        }
        if self
            .current_idea
            .as_ref()
            .is_some_and(|current| cascaded.contains(current))
        {
            self.current_idea = None;
        }

        tracing::info!(workshop_id = %id, ideas_removed = cascaded.len(), "workshop deleted");
        self.persist_workshops();
        self.persist_ideas();
    }

    /// Point at a workshop; existence is the caller's concern
    pub fn set_current_workshop(&mut self, id: Option<WorkshopId>) {
        self.current_workshop = id;
    }

    /// All workshops in creation order
    #[must_use]
    pub fn workshops(&self) -> &[Workshop] {
        &self.workshops
    }

    /// Workshop by id
    #[must_use]
    pub fn workshop(&self, id: &WorkshopId) -> Option<&Workshop> {
        self.workshops.iter().find(|w| &w.id == id)
    }

    /// Current workshop, `None` when unset or dangling
    #[must_use]
    pub fn current_workshop(&self) -> Option<&Workshop> {
        self.current_workshop
            .as_ref()
            .and_then(|id| self.workshop(id))
    }

    /// Id of the current workshop pointer
    #[must_use]
    pub fn current_workshop_id(&self) -> Option<&WorkshopId> {
        self.current_workshop.as_ref()
    }

    // ---- ideas ----

    /// Create an idea in the current workshop
    pub fn create_idea(&mut self, draft: IdeaDraft) -> Result<Idea, StoreError> {
        let workshop_id = self
            .current_workshop
            .clone()
            .ok_or(StoreError::NoCurrentWorkshop)?;

        let now = Utc::now();
        let idea = Idea {
            id: IdeaId::new(),
            workshop_id,
            title: draft
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_IDEA_TITLE.to_string()),
            description: draft.description,
            card_combination: draft.card_combination,
            refinements: draft.refinements,
            chat_history: Vec::new(),
            storyboard: draft.storyboard,
            evaluation: draft.evaluation,
            elevator_pitch: draft.elevator_pitch,
            cards_updated: false,
            created_at: now,
            updated_at: now,
        };
        tracing::info!(idea_id = %idea.id, workshop_id = %idea.workshop_id, "idea created");
        self.ideas.push(idea.clone());
        self.persist_ideas();
        Ok(idea)
    }

    /// Merge `patch` into an idea; unknown ids are ignored
    pub fn update_idea(&mut self, id: &IdeaId, patch: IdeaPatch) {
        self.modify_idea(id, |idea| patch.apply(idea));
    }

    /// Mutate an idea in place; returns `false` for unknown ids
    pub fn modify_idea<F>(&mut self, id: &IdeaId, f: F) -> bool
    where
        F: FnOnce(&mut Idea),
    {
        let Some(idea) = self.ideas.iter_mut().find(|i| &i.id == id) else {
            tracing::debug!(idea_id = %id, "update of unknown idea ignored");
            return false;
        };
        f(idea);
        idea.updated_at = Utc::now();
        self.persist_ideas();
        true
    }

    /// Delete an idea; unknown ids are ignored
    pub fn delete_idea(&mut self, id: &IdeaId) {
        let before = self.ideas.len();
        self.ideas.retain(|idea| &idea.id != id);
        if self.ideas.len() == before {
            tracing::debug!(idea_id = %id, "delete of unknown idea ignored");
            return;
        }
        if self.current_idea.as_ref() == Some(id) {
            self.current_idea = None;
        }
        tracing::info!(idea_id = %id, "idea deleted");
        self.persist_ideas();
    }

    /// Point at an idea; existence is the caller's concern
    pub fn set_current_idea(&mut self, id: Option<IdeaId>) {
        self.current_idea = id;
    }

    /// All ideas in creation order
    #[must_use]
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    /// Ideas belonging to a workshop
    #[must_use]
    pub fn ideas_for_workshop(&self, workshop_id: &WorkshopId) -> Vec<&Idea> {
        self.ideas
            .iter()
            .filter(|idea| &idea.workshop_id == workshop_id)
            .collect()
    }

    /// Idea by id
    #[must_use]
    pub fn idea(&self, id: &IdeaId) -> Option<&Idea> {
        self.ideas.iter().find(|i| &i.id == id)
    }

    /// Current idea, `None` when unset or dangling
    #[must_use]
    pub fn current_idea(&self) -> Option<&Idea> {
        self.current_idea.as_ref().and_then(|id| self.idea(id))
    }

    /// Id of the current idea pointer
    #[must_use]
    pub fn current_idea_id(&self) -> Option<&IdeaId> {
        self.current_idea.as_ref()
    }

    // ---- phase ----

    /// Record the active phase; no transition table applies
    pub fn set_current_phase(&mut self, phase: Phase) {
        tracing::debug!(from = %self.current_phase, to = %phase, "phase changed");
        self.current_phase = phase;
    }

    /// Active phase
    #[must_use]
    pub fn current_phase(&self) -> Phase {
        self.current_phase
    }

    fn persist_workshops(&self) {
        persist_collection(self.storage.as_ref(), keys::WORKSHOPS, &self.workshops);
    }

    fn persist_ideas(&self) {
        persist_collection(self.storage.as_ref(), keys::IDEAS, &self.ideas);
    }
}
