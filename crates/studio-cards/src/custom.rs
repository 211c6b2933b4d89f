//! Custom card authoring
//!
//! Selecting a reserved placeholder id opens an authoring flow. The
//! participant supplies a name and a description; the factory turns the
//! draft into a card with id `custom-<kind>-<millis>`.
//!
//! Ids stay unique within a factory even when two cards are authored in
//! the same millisecond: the timestamp is bumped past the last one issued
//! for that kind.

use crate::catalog::{Card, CardCategory, MissionCard, PersonaCard, ScenarioCard};
use crate::error::CatalogError;
use chrono::Utc;
use std::collections::HashMap;
use std::fmt;

/// What a custom card is authored as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomKind {
    /// One of the five idea decks
    Card(CardCategory),
    Mission,
    Persona,
    Scenario,
}

impl CustomKind {
    /// Kind opened by a reserved placeholder id
    ///
    /// The criteria placeholder (`c10`) is not listed here: custom criteria
    /// are scoped to an idea and get their ids from the evaluation store.
    #[must_use]
    pub fn for_placeholder(id: &str) -> Option<Self> {
        match id {
            "t9" => Some(CustomKind::Card(CardCategory::Thing)),
            "s12" => Some(CustomKind::Card(CardCategory::Sensor)),
            "a9" => Some(CustomKind::Card(CardCategory::Action)),
            "m14" => Some(CustomKind::Mission),
            "p9" => Some(CustomKind::Persona),
            "sc18" => Some(CustomKind::Scenario),
            _ => None,
        }
    }

    /// Key used inside generated ids
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomKind::Card(category) => category.as_str(),
            CustomKind::Mission => "mission",
            CustomKind::Persona => "persona",
            CustomKind::Scenario => "scenario",
        }
    }
}

impl fmt::Display for CustomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name and description entered in the authoring flow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomCardDraft {
    pub name: String,
    pub description: String,
}

impl CustomCardDraft {
    /// Create new draft
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Set name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Both fields must be non-blank
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::IncompleteCustomCard { field: "name" });
        }
        if self.description.trim().is_empty() {
            return Err(CatalogError::IncompleteCustomCard {
                field: "description",
            });
        }
        Ok(())
    }

    fn trimmed(&self) -> (String, String) {
        (
            self.name.trim().to_string(),
            self.description.trim().to_string(),
        )
    }
}

/// Issues custom cards with unique ids
#[derive(Debug, Default)]
pub struct CustomCardFactory {
    last_issued: HashMap<CustomKind, i64>,
}

impl CustomCardFactory {
    /// Create new factory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id for `kind` using the wall clock
    pub fn next_id(&mut self, kind: CustomKind) -> String {
        self.next_id_at(kind, Utc::now().timestamp_millis())
    }

    /// Next id for `kind` at the given millisecond timestamp
    pub fn next_id_at(&mut self, kind: CustomKind, millis: i64) -> String {
        let stamp = match self.last_issued.get(&kind) {
            Some(last) if millis <= *last => last + 1,
            _ => millis,
        };
        self.last_issued.insert(kind, stamp);
        format!("custom-{kind}-{stamp}")
    }

    /// Author an idea card
    pub fn card(
        &mut self,
        category: CardCategory,
        draft: &CustomCardDraft,
    ) -> Result<Card, CatalogError> {
        draft.validate()?;
        let (name, description) = draft.trimmed();
        let id = self.next_id(CustomKind::Card(category));
        Ok(Card::new(id, category, name, description))
    }

    /// Author a mission; the description becomes the goal
    pub fn mission(&mut self, draft: &CustomCardDraft) -> Result<MissionCard, CatalogError> {
        draft.validate()?;
        let (name, goal) = draft.trimmed();
        Ok(MissionCard {
            id: self.next_id(CustomKind::Mission),
            name,
            goal,
            example: String::new(),
        })
    }

    /// Author a persona
    pub fn persona(&mut self, draft: &CustomCardDraft) -> Result<PersonaCard, CatalogError> {
        draft.validate()?;
        let (name, description) = draft.trimmed();
        Ok(PersonaCard {
            id: self.next_id(CustomKind::Persona),
            name,
            description,
        })
    }

    /// Author a scenario
    pub fn scenario(&mut self, draft: &CustomCardDraft) -> Result<ScenarioCard, CatalogError> {
        draft.validate()?;
        let (name, description) = draft.trimmed();
        Ok(ScenarioCard {
            id: self.next_id(CustomKind::Scenario),
            name,
            description,
        })
    }
}
