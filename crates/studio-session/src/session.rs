//! Studio session
//!
//! Every generation runs in three steps:
//! 1. *prepare*: read the current idea, capture its id and build the prompt
//! 2. *generate*: await the generative client with no lock held
//! 3. *apply*: write the result only if the captured idea is still current
//!
//! A response whose idea was deselected in the meantime is dropped with
//! [`SessionError::Superseded`].

use crate::error::{GenerationKind, SessionError};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use studio_core::{CardCombination, ChatMessage, EvaluationStore, IdeaId, WorkshopStore};
use studio_llm::{GenerativeClient, LlmError};
use studio_prompt::PromptBuilder;

/// A prompt waiting to be sent, bound to the idea it was built for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGeneration {
    pub kind: GenerationKind,
    pub idea_id: IdeaId,
    /// Raw user input that triggered the request, empty when none
    pub input: String,
    pub prompt: String,
}

/// Decrements the in-flight counter when a request finishes or is dropped
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Orchestrates the refinement chat, storyboard and pitch generation
///
/// Stores are shared with the caller, who may keep editing them between
/// awaits. No lock is held while a request is in flight.
#[derive(Debug, Clone)]
pub struct StudioSession {
    store: Arc<Mutex<WorkshopStore>>,
    evaluations: Arc<Mutex<EvaluationStore>>,
    client: Arc<dyn GenerativeClient>,
    in_flight: Arc<AtomicUsize>,
}

impl StudioSession {
    /// Create new session
    pub fn new(
        store: Arc<Mutex<WorkshopStore>>,
        evaluations: Arc<Mutex<EvaluationStore>>,
        client: Arc<dyn GenerativeClient>,
    ) -> Self {
        Self {
            store,
            evaluations,
            client,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared workshop store
    #[must_use]
    pub fn store(&self) -> &Arc<Mutex<WorkshopStore>> {
        &self.store
    }

    /// Shared evaluation store
    #[must_use]
    pub fn evaluations(&self) -> &Arc<Mutex<EvaluationStore>> {
        &self.evaluations
    }

    #[must_use]
    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// True while any generation request is outstanding
    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Id of the current idea
    pub fn current_idea_id(&self) -> Result<IdeaId, SessionError> {
        self.store
            .lock()
            .current_idea()
            .map(|idea| idea.id.clone())
            .ok_or(SessionError::NoCurrentIdea)
    }

    /// Delete an idea together with its criteria selection and evaluation
    pub fn delete_idea(&self, idea_id: &IdeaId) {
        self.store.lock().delete_idea(idea_id);
        self.evaluations.lock().remove_idea(idea_id);
    }

    /// Replace the current idea's combination from the edit view
    ///
    /// Returns the change lines and flags the idea so the next
    /// [`StudioSession::notify_card_change`] acknowledges them. Any
    /// difference is stored; an identical combination changes nothing.
    pub fn update_combination(&self, combination: CardCombination) -> Result<Vec<String>, SessionError> {
        let mut store = self.store.lock();
        let idea = store.current_idea().ok_or(SessionError::NoCurrentIdea)?;
        if idea.card_combination == combination {
            return Ok(Vec::new());
        }
        let changes = studio_prompt::describe_combination_change(&idea.card_combination, &combination);
        let idea_id = idea.id.clone();
        let flag = !changes.is_empty();
        store.modify_idea(&idea_id, |idea| {
            idea.card_combination = combination;
            idea.cards_updated |= flag;
        });
        tracing::info!(idea_id = %idea_id, changes = changes.len(), "card combination updated");
        Ok(changes)
    }

    /// Step 1: capture the current idea and build its prompt
    pub(crate) fn prepare<F>(
        &self,
        kind: GenerationKind,
        input: &str,
        build: F,
    ) -> Result<PendingGeneration, SessionError>
    where
        F: FnOnce(PromptBuilder<'_>, &EvaluationStore) -> String,
    {
        let store = self.store.lock();
        let idea = store.current_idea().ok_or(SessionError::NoCurrentIdea)?;
        let workshop = store.workshop(&idea.workshop_id);
        let evaluations = self.evaluations.lock();
        let prompt = build(PromptBuilder::new(idea).with_workshop(workshop), &evaluations);
        Ok(PendingGeneration {
            kind,
            idea_id: idea.id.clone(),
            input: input.to_string(),
            prompt,
        })
    }

    /// Step 2: send the prompt
    pub(crate) async fn generate(&self, pending: &PendingGeneration) -> Result<String, LlmError> {
        let _in_flight = InFlight::enter(&self.in_flight);
        tracing::debug!(kind = %pending.kind, idea_id = %pending.idea_id, "generation started");
        let result = self.client.generate(&pending.prompt).await;
        if let Err(e) = &result {
            tracing::error!(kind = %pending.kind, idea_id = %pending.idea_id, error = %e, "generation failed");
        }
        result
    }

    /// Step 3: run `apply` against the store if the captured idea is still current
    pub(crate) fn apply_to_current<R, F>(&self, pending: &PendingGeneration, apply: F) -> Result<R, SessionError>
    where
        F: FnOnce(&mut WorkshopStore) -> R,
    {
        let mut store = self.store.lock();
        if store.current_idea_id() != Some(&pending.idea_id) {
            tracing::warn!(
                kind = %pending.kind,
                idea_id = %pending.idea_id,
                "response discarded, current idea changed"
            );
            return Err(SessionError::Superseded {
                kind: pending.kind,
                idea_id: pending.idea_id.clone(),
            });
        }
        if store.idea(&pending.idea_id).is_none() {
            return Err(SessionError::NoCurrentIdea);
        }
        Ok(apply(&mut store))
    }

    /// Step 3 after a failed generation: record `apply` if the idea is
    /// still current, then report the generation error
    ///
    /// A superseded idea is left untouched; the caller still gets the
    /// generation error.
    pub(crate) fn fail_generation<F>(&self, pending: &PendingGeneration, source: LlmError, apply: F) -> SessionError
    where
        F: FnOnce(&mut WorkshopStore),
    {
        if let Err(e) = self.apply_to_current(pending, apply) {
            tracing::debug!(kind = %pending.kind, error = %e, "failure state not recorded");
        }
        self.generation_error(pending.kind, source)
    }

    pub(crate) fn generation_error(&self, kind: GenerationKind, source: LlmError) -> SessionError {
        SessionError::Generation {
            kind,
            model: self.client.model().to_string(),
            source,
        }
    }

    /// Append a turn to an idea's chat
    pub(crate) fn push_message(store: &mut WorkshopStore, idea_id: &IdeaId, message: ChatMessage) {
        store.modify_idea(idea_id, |idea| idea.chat_history.push(message));
    }
}
