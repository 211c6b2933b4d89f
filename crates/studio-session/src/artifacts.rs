//! Storyboard and elevator pitch generation

use crate::error::{GenerationKind, SessionError};
use crate::session::{PendingGeneration, StudioSession};
use studio_core::{IdeaId, Storyboard, WorkshopStore};
use studio_llm::LlmError;
use studio_prompt::{default_elevator_pitch, default_storyboard_steps, parse_storyboard};

/// Replace the steps of an idea's storyboard, creating it if needed
fn store_steps(store: &mut WorkshopStore, idea_id: &IdeaId, steps: Vec<String>) -> Option<Storyboard> {
    store.modify_idea(idea_id, |idea| match idea.storyboard.as_mut() {
        Some(storyboard) => storyboard.replace_steps(steps),
        None => idea.storyboard = Some(Storyboard::from_descriptions(idea.id.clone(), steps)),
    });
    store.idea(idea_id).and_then(|idea| idea.storyboard.clone())
}

impl StudioSession {
    /// Generate an 8-step storyboard for the current idea
    ///
    /// The response is normalized to exactly eight steps. On failure an idea
    /// without a storyboard gets placeholder steps; an existing one is kept.
    /// The error is returned either way.
    pub async fn generate_storyboard(&self) -> Result<Storyboard, SessionError> {
        let pending = self.prepare(GenerationKind::Storyboard, "", |builder, _| builder.storyboard())?;
        let result = self.generate(&pending).await;
        self.apply_storyboard(&pending, result)
    }

    pub(crate) fn apply_storyboard(
        &self,
        pending: &PendingGeneration,
        result: Result<String, LlmError>,
    ) -> Result<Storyboard, SessionError> {
        match result {
            Ok(text) => {
                let steps = parse_storyboard(&text);
                let storyboard = self
                    .apply_to_current(pending, |store| store_steps(store, &pending.idea_id, steps))?
                    .ok_or(SessionError::NoCurrentIdea)?;
                tracing::info!(idea_id = %pending.idea_id, steps = storyboard.len(), "storyboard generated");
                Ok(storyboard)
            }
            Err(source) => Err(self.fail_generation(pending, source, |store| {
                let has_storyboard = store
                    .idea(&pending.idea_id)
                    .is_some_and(|idea| idea.storyboard.as_ref().is_some_and(|s| !s.is_empty()));
                if !has_storyboard {
                    tracing::warn!(idea_id = %pending.idea_id, "default storyboard used");
                    store_steps(store, &pending.idea_id, default_storyboard_steps());
                }
            })),
        }
    }

    /// Generate an elevator pitch for the current idea
    ///
    /// The prompt includes the storyboard and the answered criteria of the
    /// idea's selection. The reply is stored as returned. On failure an idea without a pitch gets one built
    /// from its cards; an existing pitch is kept.
    pub async fn generate_elevator_pitch(&self) -> Result<String, SessionError> {
        let pending = self.prepare(GenerationKind::ElevatorPitch, "", |builder, evaluations| {
            let criteria = evaluations.responses_for_selection(&builder.idea().id);
            builder.elevator_pitch(&criteria)
        })?;
        let result = self.generate(&pending).await;
        self.apply_elevator_pitch(&pending, result)
    }

    pub(crate) fn apply_elevator_pitch(
        &self,
        pending: &PendingGeneration,
        result: Result<String, LlmError>,
    ) -> Result<String, SessionError> {
        match result {
            Ok(text) => {
                let pitch = text;
                self.apply_to_current(pending, |store| {
                    store.modify_idea(&pending.idea_id, |idea| {
                        idea.elevator_pitch = Some(pitch.clone());
                    });
                })?;
                tracing::info!(idea_id = %pending.idea_id, chars = pitch.len(), "elevator pitch generated");
                Ok(pitch)
            }
            Err(source) => Err(self.fail_generation(pending, source, |store| {
                store.modify_idea(&pending.idea_id, |idea| {
                    if !idea.has_pitch() {
                        tracing::warn!(idea_id = %idea.id, "default elevator pitch used");
                        idea.elevator_pitch = Some(default_elevator_pitch(idea));
                    }
                });
            })),
        }
    }
}
