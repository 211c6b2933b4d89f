//! Card combination builder
//!
//! Accumulates the ideation-phase selection:
//! - toggling catalog cards per category
//! - authoring custom cards behind reserved placeholder ids
//! - save gating (cards, description, and a real change in edit mode)
//!
//! [`CombinationBuilder::build`] normalizes the selection into a
//! [`CardCombination`] with both slot and list filled.

use crate::error::CombinationError;
use crate::model::{CardCombination, Idea};
use studio_cards::{Card, CardCategory, Catalog, CustomCardDraft, CustomCardFactory};

/// Result of selecting a card id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Added(Card),
    Removed(Card),
    /// A placeholder was picked; complete or cancel the authoring flow
    AuthoringStarted(CardCategory),
}

/// Ideation-phase selection state
#[derive(Debug, Default)]
pub struct CombinationBuilder {
    selected: [Vec<Card>; 5],
    description: String,
    original: Option<CardCombination>,
    pending_custom: Option<CardCategory>,
    factory: CustomCardFactory,
}

impl CombinationBuilder {
    /// Empty builder for a new idea
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder in edit mode, seeded from an existing idea
    #[must_use]
    pub fn for_idea(idea: &Idea) -> Self {
        let mut builder = Self::from_combination(&idea.card_combination);
        builder.description = idea.description.clone();
        builder.original = Some(idea.card_combination.clone());
        builder
    }

    fn from_combination(combination: &CardCombination) -> Self {
        let mut builder = Self::new();
        for category in CardCategory::ALL {
            builder.selected[category.index()] = combination
                .resolved(category)
                .into_iter()
                .cloned()
                .collect();
        }
        builder
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.original.is_some()
    }

    /// Toggle a catalog card by id
    pub fn toggle(&mut self, card_id: &str) -> Result<Selection, CombinationError> {
        let card = Catalog::require_card(card_id)?;
        if Catalog::is_custom_placeholder(card_id) {
            self.pending_custom = Some(card.category);
            return Ok(Selection::AuthoringStarted(card.category));
        }
        Ok(self.toggle_card(card))
    }

    /// Toggle an already materialized card (catalog or custom)
    pub fn toggle_card(&mut self, card: Card) -> Selection {
        let list = &mut self.selected[card.category.index()];
        if let Some(pos) = list.iter().position(|c| c.id == card.id) {
            Selection::Removed(list.remove(pos))
        } else {
            list.push(card.clone());
            Selection::Added(card)
        }
    }

    /// Category whose custom card is being authored
    #[must_use]
    pub fn pending_custom(&self) -> Option<CardCategory> {
        self.pending_custom
    }

    /// Finish authoring; the new card joins its category
    pub fn complete_custom(&mut self, draft: &CustomCardDraft) -> Result<Card, CombinationError> {
        let category = self
            .pending_custom
            .ok_or(CombinationError::NoPendingCustomCard)?;
        let card = self.factory.card(category, draft)?;
        self.pending_custom = None;
        self.selected[category.index()].push(card.clone());
        tracing::debug!(card_id = %card.id, "custom card authored");
        Ok(card)
    }

    /// Rename or redescribe a selected custom card; its id is kept
    pub fn edit_custom(&mut self, card_id: &str, draft: &CustomCardDraft) -> Result<Card, CombinationError> {
        draft.validate()?;
        let card = self
            .selected
            .iter_mut()
            .flatten()
            .find(|card| card.is_custom() && card.id == card_id)
            .ok_or_else(|| CombinationError::UnknownCustomCard(card_id.to_string()))?;
        card.name = draft.name.trim().to_string();
        card.description = draft.description.trim().to_string();
        Ok(card.clone())
    }

    /// Abandon authoring; the selection is untouched
    pub fn cancel_custom(&mut self) {
        self.pending_custom = None;
    }

    /// Selected cards of a category
    #[must_use]
    pub fn selected(&self, category: CardCategory) -> &[Card] {
        &self.selected[category.index()]
    }

    #[must_use]
    pub fn total_selected(&self) -> usize {
        self.selected.iter().map(Vec::len).sum()
    }

    /// Whether the selection differs from the idea being edited
    ///
    /// Compares id sets per category, plus name and description of custom
    /// cards present on both sides. A new idea always counts as changed.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        let Some(original) = &self.original else {
            return true;
        };
        CardCategory::ALL.iter().any(|category| {
            let before = original.resolved(*category);
            let after = self.selected(*category);
            let before_ids: std::collections::BTreeSet<&str> =
                before.iter().map(|c| c.id.as_str()).collect();
            let after_ids: std::collections::BTreeSet<&str> =
                after.iter().map(|c| c.id.as_str()).collect();
            if before_ids != after_ids {
                return true;
            }
            after.iter().filter(|c| c.is_custom()).any(|card| {
                before
                    .iter()
                    .find(|c| c.id == card.id)
                    .is_some_and(|old| old.name != card.name || old.description != card.description)
            })
        })
    }

    /// Check the save gates without building
    pub fn validate(&self) -> Result<(), CombinationError> {
        if self.total_selected() == 0 {
            return Err(CombinationError::NoCardsSelected);
        }
        if self.description.trim().is_empty() {
            return Err(CombinationError::EmptyDescription);
        }
        if !self.has_changes() {
            return Err(CombinationError::Unchanged);
        }
        Ok(())
    }

    #[must_use]
    pub fn can_save(&self) -> bool {
        self.validate().is_ok()
    }

    /// Normalize the selection into a combination
    pub fn build(&self) -> Result<CardCombination, CombinationError> {
        self.validate()?;
        let mut combination = CardCombination::new();
        for category in CardCategory::ALL {
            combination.set_category(category, self.selected(category).to_vec());
        }
        Ok(combination)
    }

    /// Title proposed for a new idea
    ///
    /// `existing_ideas` is the number of ideas already in the workshop.
    #[must_use]
    pub fn suggested_title(&self, existing_ideas: usize) -> String {
        let thing = self.selected(CardCategory::Thing).first();
        let sensor = self.selected(CardCategory::Sensor).first();
        match (thing, sensor) {
            (Some(thing), Some(sensor)) => format!("{} with {}", thing.name, sensor.name),
            (Some(thing), None) => thing.name.clone(),
            (None, Some(sensor)) => sensor.name.clone(),
            (None, None) => format!("New Idea {}", existing_ideas + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IdeaId;
    use chrono::Utc;

    fn idea_with(combination: CardCombination) -> Idea {
        let now = Utc::now();
        Idea {
            id: IdeaId::new(),
            workshop_id: "w".into(),
            title: "Idea".to_string(),
            description: "test".to_string(),
            card_combination: combination,
            refinements: Vec::new(),
            chat_history: Vec::new(),
            storyboard: None,
            evaluation: None,
            elevator_pitch: None,
            cards_updated: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn save_gating() {
        let mut builder = CombinationBuilder::new().with_description("test");
        assert_eq!(builder.validate(), Err(CombinationError::NoCardsSelected));

        builder.toggle("t1").unwrap();
        builder.set_description("   ");
        assert_eq!(builder.validate(), Err(CombinationError::EmptyDescription));

        builder.set_description("test");
        assert!(builder.can_save());
    }

    #[test]
    fn toggling_twice_deselects() {
        let mut builder = CombinationBuilder::new();
        assert!(matches!(builder.toggle("s7").unwrap(), Selection::Added(_)));
        assert!(matches!(builder.toggle("s7").unwrap(), Selection::Removed(_)));
        assert_eq!(builder.total_selected(), 0);
    }

    #[test]
    fn build_fills_slot_and_list() {
        let mut builder = CombinationBuilder::new().with_description("test");
        builder.toggle("t1").unwrap();
        builder.toggle("t2").unwrap();
        builder.toggle("s7").unwrap();
        let combination = builder.build().unwrap();

        assert_eq!(combination.thing.as_ref().unwrap().name, "Clothing");
        assert_eq!(combination.thing_cards.len(), 2);
        assert_eq!(combination.sensor.as_ref().unwrap().name, "Motion");
        assert!(combination.action.is_none());
    }

    #[test]
    fn placeholder_opens_authoring() {
        let mut builder = CombinationBuilder::new().with_description("test");
        builder.toggle("t1").unwrap();
        assert_eq!(
            builder.toggle("t9").unwrap(),
            Selection::AuthoringStarted(CardCategory::Thing)
        );
        builder.cancel_custom();
        assert_eq!(builder.selected(CardCategory::Thing).len(), 1);
        assert_eq!(
            builder.complete_custom(&CustomCardDraft::new("Kite", "Flies")),
            Err(CombinationError::NoPendingCustomCard)
        );

        builder.toggle("t9").unwrap();
        let card = builder
            .complete_custom(&CustomCardDraft::new("Kite", "Flies"))
            .unwrap();
        assert!(card.id.starts_with("custom-thing-"));
        assert_eq!(builder.selected(CardCategory::Thing).len(), 2);
        assert!(builder.pending_custom().is_none());
    }

    #[test]
    fn incomplete_custom_card_keeps_authoring_open() {
        let mut builder = CombinationBuilder::new();
        builder.toggle("s12").unwrap();
        assert!(builder
            .complete_custom(&CustomCardDraft::new("Smell", ""))
            .is_err());
        assert_eq!(builder.pending_custom(), Some(CardCategory::Sensor));
        assert_eq!(builder.total_selected(), 0);
    }

    #[test]
    fn edit_without_change_is_blocked() {
        let mut seed = CombinationBuilder::new().with_description("test");
        seed.toggle("t1").unwrap();
        seed.toggle("s7").unwrap();
        let idea = idea_with(seed.build().unwrap());

        let mut builder = CombinationBuilder::for_idea(&idea);
        assert!(builder.is_editing());
        assert_eq!(builder.validate(), Err(CombinationError::Unchanged));

        builder.toggle("a1").unwrap();
        assert!(builder.can_save());
        builder.toggle("a1").unwrap();
        assert!(!builder.has_changes());
    }

    #[test]
    fn edited_custom_card_counts_as_change() {
        let mut seed = CombinationBuilder::new().with_description("test");
        seed.toggle("t9").unwrap();
        let custom = seed
            .complete_custom(&CustomCardDraft::new("Kite", "Flies"))
            .unwrap();
        let idea = idea_with(seed.build().unwrap());

        let mut builder = CombinationBuilder::for_idea(&idea);
        assert!(!builder.has_changes());
        let renamed = builder
            .edit_custom(&custom.id, &CustomCardDraft::new(" Balloon ", "Floats"))
            .unwrap();
        assert_eq!(renamed.id, custom.id);
        assert_eq!(renamed.name, "Balloon");
        assert!(builder.has_changes());
        assert_eq!(builder.build().unwrap().thing_cards[0].name, "Balloon");

        assert_eq!(
            builder.edit_custom("t1", &CustomCardDraft::new("X", "Y")),
            Err(CombinationError::UnknownCustomCard("t1".to_string()))
        );
    }

    #[test]
    fn suggested_titles() {
        let mut builder = CombinationBuilder::new();
        assert_eq!(builder.suggested_title(2), "New Idea 3");
        builder.toggle("s7").unwrap();
        assert_eq!(builder.suggested_title(0), "Motion");
        builder.toggle("t1").unwrap();
        assert_eq!(builder.suggested_title(0), "Clothing with Motion");
    }
}
