//! Evaluation store
//!
//! Keeps, per idea and separately from the idea entity:
//! - the selected criteria ids (at most three through [`EvaluationStore::toggle_criteria`])
//! - the evaluation record holding criteria responses and authored criteria
//!
//! Persisted under the `evaluations` and `selected_criteria` keys.

use crate::model::{Evaluation, EvaluationCriteria, IdeaId};
use crate::storage::{keys, load_collection, persist_collection, KeyValueStore, MemoryStore};
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use studio_cards::{Catalog, CatalogError, CriteriaCard, CustomCardDraft};

/// Selection cap applied by the toggle policy
pub const MAX_SELECTED_CRITERIA: usize = 3;

/// Outcome of toggling a criteria card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriteriaToggle {
    Selected,
    Deselected,
    /// Cap reached; selection unchanged
    Rejected,
}

/// Per-idea criteria selection and responses
#[derive(Debug)]
pub struct EvaluationStore {
    storage: Arc<dyn KeyValueStore>,
    evaluations: Vec<Evaluation>,
    selected: BTreeMap<IdeaId, Vec<String>>,
    last_custom_stamp: HashMap<IdeaId, i64>,
}

impl EvaluationStore {
    /// Open a store over `storage`, loading persisted collections
    #[must_use]
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Self {
        let evaluations: Vec<Evaluation> = load_collection(storage.as_ref(), keys::EVALUATIONS);
        let selected: BTreeMap<IdeaId, Vec<String>> =
            load_collection(storage.as_ref(), keys::SELECTED_CRITERIA);
        Self {
            storage,
            evaluations,
            selected,
            last_custom_stamp: HashMap::new(),
        }
    }

    /// Store backed by a fresh [`MemoryStore`]
    #[must_use]
    pub fn in_memory() -> Self {
        Self::open(Arc::new(MemoryStore::new()))
    }

    #[must_use]
    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    #[must_use]
    pub fn evaluation(&self, idea_id: &IdeaId) -> Option<&Evaluation> {
        self.evaluations.iter().find(|e| &e.idea_id == idea_id)
    }

    /// Selected criteria ids of an idea, in selection order
    #[must_use]
    pub fn selected_criteria(&self, idea_id: &IdeaId) -> &[String] {
        self.selected.get(idea_id).map_or(&[], Vec::as_slice)
    }

    /// Replace the selection verbatim; the cap is the caller's concern
    pub fn update_selected_criteria(&mut self, idea_id: &IdeaId, ids: Vec<String>) {
        self.selected.insert(idea_id.clone(), ids);
        persist_collection(self.storage.as_ref(), keys::SELECTED_CRITERIA, &self.selected);
    }

    /// Select or deselect a criteria id, rejecting a fourth selection
    pub fn toggle_criteria(&mut self, idea_id: &IdeaId, criteria_id: &str) -> CriteriaToggle {
        let mut ids = self.selected_criteria(idea_id).to_vec();
        let outcome = if let Some(pos) = ids.iter().position(|id| id == criteria_id) {
            ids.remove(pos);
            CriteriaToggle::Deselected
        } else if ids.len() < MAX_SELECTED_CRITERIA {
            ids.push(criteria_id.to_string());
            CriteriaToggle::Selected
        } else {
            tracing::debug!(idea_id = %idea_id, criteria_id, "criteria selection cap reached");
            return CriteriaToggle::Rejected;
        };
        self.update_selected_criteria(idea_id, ids);
        outcome
    }

    /// Replace the responses of an idea's evaluation
    ///
    /// The evaluation id, creation time and authored criteria survive.
    pub fn update_criteria_responses(
        &mut self,
        idea_id: &IdeaId,
        responses: Vec<EvaluationCriteria>,
    ) -> Evaluation {
        let now = Utc::now();
        let evaluation = match self.evaluations.iter_mut().find(|e| &e.idea_id == idea_id) {
            Some(existing) => {
                existing.criteria = responses;
                existing.updated_at = now;
                existing.clone()
            }
            None => {
                let created = Evaluation {
                    id: crate::model::new_id(),
                    idea_id: idea_id.clone(),
                    criteria: responses,
                    custom_criteria: Vec::new(),
                    created_at: now,
                    updated_at: now,
                };
                self.evaluations.push(created.clone());
                created
            }
        };
        self.persist_evaluations();
        evaluation
    }

    /// Set the response to one criterion, keeping the others
    ///
    /// Returns `false` when the id resolves to no criteria card.
    pub fn set_response(&mut self, idea_id: &IdeaId, criteria_id: &str, response: &str) -> bool {
        let Some(card) = self.criteria_card(idea_id, criteria_id) else {
            return false;
        };
        let mut responses = self
            .evaluation(idea_id)
            .map(|e| e.criteria.clone())
            .unwrap_or_default();
        match responses
            .iter_mut()
            .find(|c| c.criteria_card.id == criteria_id)
        {
            Some(existing) => existing.response = response.to_string(),
            None => responses.push(EvaluationCriteria::new(card, response)),
        }
        self.update_criteria_responses(idea_id, responses);
        true
    }

    /// Next id for a criteria card authored for `idea_id`
    pub fn custom_criteria_id(&mut self, idea_id: &IdeaId) -> String {
        let now = Utc::now().timestamp_millis();
        let stamp = match self.last_custom_stamp.get(idea_id) {
            Some(last) if now <= *last => last + 1,
            _ => now,
        };
        self.last_custom_stamp.insert(idea_id.clone(), stamp);
        format!("custom-{idea_id}-{stamp}")
    }

    /// Author a criteria card scoped to one idea
    pub fn create_custom_criteria(
        &mut self,
        idea_id: &IdeaId,
        name: &str,
        description: &str,
        question: &str,
    ) -> Result<CriteriaCard, CatalogError> {
        CustomCardDraft::new(name, description).validate()?;
        let card = CriteriaCard {
            id: self.custom_criteria_id(idea_id),
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            question: question.trim().to_string(),
        };

        let now = Utc::now();
        match self.evaluations.iter_mut().find(|e| &e.idea_id == idea_id) {
            Some(existing) => {
                existing.custom_criteria.push(card.clone());
                existing.updated_at = now;
            }
            None => self.evaluations.push(Evaluation {
                id: crate::model::new_id(),
                idea_id: idea_id.clone(),
                criteria: Vec::new(),
                custom_criteria: vec![card.clone()],
                created_at: now,
                updated_at: now,
            }),
        }
        tracing::info!(idea_id = %idea_id, criteria_id = %card.id, "custom criteria created");
        self.persist_evaluations();
        Ok(card)
    }

    /// Criteria authored for `idea_id`
    #[must_use]
    pub fn custom_criteria(&self, idea_id: &IdeaId) -> Vec<CriteriaCard> {
        let prefix = format!("custom-{idea_id}-");
        self.evaluations
            .iter()
            .flat_map(|e| e.custom_criteria.iter())
            .filter(|card| card.id.starts_with(&prefix))
            .cloned()
            .collect()
    }

    /// Resolve a catalog or authored criteria id for an idea
    #[must_use]
    pub fn criteria_card(&self, idea_id: &IdeaId, criteria_id: &str) -> Option<CriteriaCard> {
        Catalog::criteria_card(criteria_id).or_else(|| {
            self.custom_criteria(idea_id)
                .into_iter()
                .find(|card| card.id == criteria_id)
        })
    }

    /// Selected criteria with their current responses, in selection order
    #[must_use]
    pub fn responses_for_selection(&self, idea_id: &IdeaId) -> Vec<EvaluationCriteria> {
        let recorded = self.evaluation(idea_id);
        self.selected_criteria(idea_id)
            .iter()
            .filter_map(|id| {
                let card = self.criteria_card(idea_id, id)?;
                let response = recorded
                    .and_then(|e| e.criteria.iter().find(|c| &c.criteria_card.id == id))
                    .map(|c| c.response.clone())
                    .unwrap_or_default();
                Some(EvaluationCriteria::new(card, response))
            })
            .collect()
    }

    /// Drop everything recorded for an idea
    pub fn remove_idea(&mut self, idea_id: &IdeaId) {
        let had_selection = self.selected.remove(idea_id).is_some();
        let before = self.evaluations.len();
        self.evaluations.retain(|e| &e.idea_id != idea_id);
        if had_selection {
            persist_collection(self.storage.as_ref(), keys::SELECTED_CRITERIA, &self.selected);
        }
        if self.evaluations.len() != before {
            self.persist_evaluations();
        }
    }

    fn persist_evaluations(&self) {
        persist_collection(self.storage.as_ref(), keys::EVALUATIONS, &self.evaluations);
    }
}
