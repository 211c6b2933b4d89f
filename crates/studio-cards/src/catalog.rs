//! Card catalog access
//!
//! Provides typed, owned views over the static decks:
//! - [`CardCategory`] as the single key for the five idea decks
//! - [`Card`] and the auxiliary card records
//! - [`Catalog`] lookups by id, category and name

use crate::decks;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog ids that open the custom-authoring flow instead of being selected
pub const CUSTOM_PLACEHOLDER_IDS: &[&str] = &["t9", "s12", "a9", "m14", "p9", "sc18", "c10"];

/// The five idea categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardCategory {
    /// Everyday object
    Thing,
    /// Sensing capability
    Sensor,
    /// Human action
    Action,
    /// Feedback channel
    Feedback,
    /// Connected service
    Service,
}

impl CardCategory {
    /// All categories in workshop order
    pub const ALL: [CardCategory; 5] = [
        CardCategory::Thing,
        CardCategory::Sensor,
        CardCategory::Action,
        CardCategory::Feedback,
        CardCategory::Service,
    ];

    /// Stable lowercase key
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CardCategory::Thing => "thing",
            CardCategory::Sensor => "sensor",
            CardCategory::Action => "action",
            CardCategory::Feedback => "feedback",
            CardCategory::Service => "service",
        }
    }

    /// Human-readable label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CardCategory::Thing => "Thing",
            CardCategory::Sensor => "Sensor",
            CardCategory::Action => "Action",
            CardCategory::Feedback => "Feedback",
            CardCategory::Service => "Service",
        }
    }

    /// Position in [`CardCategory::ALL`]
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            CardCategory::Thing => 0,
            CardCategory::Sensor => 1,
            CardCategory::Action => 2,
            CardCategory::Feedback => 3,
            CardCategory::Service => 4,
        }
    }

    /// Reserved placeholder id of this deck, if it has one
    #[inline]
    #[must_use]
    pub fn custom_placeholder(&self) -> Option<&'static str> {
        match self {
            CardCategory::Thing => Some("t9"),
            CardCategory::Sensor => Some("s12"),
            CardCategory::Action => Some("a9"),
            CardCategory::Feedback | CardCategory::Service => None,
        }
    }

    fn deck(self) -> &'static [CardDef] {
        match self {
            CardCategory::Thing => decks::THINGS,
            CardCategory::Sensor => decks::SENSORS,
            CardCategory::Action => decks::ACTIONS,
            CardCategory::Feedback => decks::FEEDBACK,
            CardCategory::Service => decks::SERVICES,
        }
    }
}

impl fmt::Display for CardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "thing" | "things" => Ok(CardCategory::Thing),
            "sensor" | "sensors" => Ok(CardCategory::Sensor),
            "action" | "actions" => Ok(CardCategory::Action),
            "feedback" => Ok(CardCategory::Feedback),
            "service" | "services" => Ok(CardCategory::Service),
            other => Err(CatalogError::UnknownCategory(other.to_string())),
        }
    }
}

/// An idea card (catalog entry or custom-authored)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub category: CardCategory,
    pub name: String,
    pub description: String,
}

impl Card {
    /// Create new card
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        category: CardCategory,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Whether this card was authored at runtime
    #[inline]
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.id.starts_with("custom-")
    }
}

/// Mission framing a workshop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionCard {
    pub id: String,
    pub name: String,
    pub goal: String,
    pub example: String,
}

/// Target user group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaCard {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Scenario (challenge context)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioCard {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Evaluation criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub question: String,
}

/// Static deck entry (id, name, description)
#[derive(Debug, Clone, Copy)]
pub(crate) struct CardDef {
    id: &'static str,
    name: &'static str,
    description: &'static str,
}

impl CardDef {
    pub(crate) const fn new(id: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            id,
            name,
            description,
        }
    }

    fn to_card(self, category: CardCategory) -> Card {
        Card::new(self.id, category, self.name, self.description)
    }
}

/// Static mission entry
#[derive(Debug, Clone, Copy)]
pub(crate) struct MissionDef {
    id: &'static str,
    name: &'static str,
    goal: &'static str,
    example: &'static str,
}

impl MissionDef {
    pub(crate) const fn new(
        id: &'static str,
        name: &'static str,
        goal: &'static str,
        example: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            goal,
            example,
        }
    }

    fn to_card(self) -> MissionCard {
        MissionCard {
            id: self.id.to_string(),
            name: self.name.to_string(),
            goal: self.goal.to_string(),
            example: self.example.to_string(),
        }
    }
}

/// Static criteria entry
#[derive(Debug, Clone, Copy)]
pub(crate) struct CriteriaDef {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    question: &'static str,
}

impl CriteriaDef {
    pub(crate) const fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        question: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            description,
            question,
        }
    }

    fn to_card(self) -> CriteriaCard {
        CriteriaCard {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            question: self.question.to_string(),
        }
    }
}

/// Read-only access to the static decks
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    /// All cards of a category, placeholders included
    #[must_use]
    pub fn cards(category: CardCategory) -> Vec<Card> {
        category
            .deck()
            .iter()
            .map(|def| def.to_card(category))
            .collect()
    }

    /// Look up an idea card by id across the five decks
    #[must_use]
    pub fn card(id: &str) -> Option<Card> {
        CardCategory::ALL.iter().find_map(|category| {
            category
                .deck()
                .iter()
                .find(|def| def.id == id)
                .map(|def| def.to_card(*category))
        })
    }

    /// Look up an idea card, failing on unknown ids
    pub fn require_card(id: &str) -> Result<Card, CatalogError> {
        Self::card(id).ok_or_else(|| CatalogError::UnknownCard(id.to_string()))
    }

    /// Case-insensitive lookup by display name within a category
    #[must_use]
    pub fn find_by_name(category: CardCategory, name: &str) -> Option<Card> {
        let wanted = name.trim().to_lowercase();
        category
            .deck()
            .iter()
            .find(|def| def.name.to_lowercase() == wanted)
            .map(|def| def.to_card(category))
    }

    /// Whether selecting this id opens the authoring flow
    #[inline]
    #[must_use]
    pub fn is_custom_placeholder(id: &str) -> bool {
        CUSTOM_PLACEHOLDER_IDS.contains(&id)
    }

    /// Mission deck
    #[must_use]
    pub fn missions() -> Vec<MissionCard> {
        decks::MISSIONS.iter().map(|def| def.to_card()).collect()
    }

    /// Mission by id
    #[must_use]
    pub fn mission(id: &str) -> Option<MissionCard> {
        decks::MISSIONS
            .iter()
            .find(|def| def.id == id)
            .map(|def| def.to_card())
    }

    /// Persona deck
    #[must_use]
    pub fn personas() -> Vec<PersonaCard> {
        decks::PERSONAS
            .iter()
            .map(|def| PersonaCard {
                id: def.id.to_string(),
                name: def.name.to_string(),
                description: def.description.to_string(),
            })
            .collect()
    }

    /// Persona by id
    #[must_use]
    pub fn persona(id: &str) -> Option<PersonaCard> {
        Self::personas().into_iter().find(|p| p.id == id)
    }

    /// Scenario deck
    #[must_use]
    pub fn scenarios() -> Vec<ScenarioCard> {
        decks::SCENARIOS
            .iter()
            .map(|def| ScenarioCard {
                id: def.id.to_string(),
                name: def.name.to_string(),
                description: def.description.to_string(),
            })
            .collect()
    }

    /// Scenario by id
    #[must_use]
    pub fn scenario(id: &str) -> Option<ScenarioCard> {
        Self::scenarios().into_iter().find(|s| s.id == id)
    }

    /// Criteria deck, placeholder included
    #[must_use]
    pub fn criteria() -> Vec<CriteriaCard> {
        decks::CRITERIA.iter().map(|def| def.to_card()).collect()
    }

    /// Criteria card by id
    #[must_use]
    pub fn criteria_card(id: &str) -> Option<CriteriaCard> {
        decks::CRITERIA
            .iter()
            .find(|def| def.id == id)
            .map(|def| def.to_card())
    }
}
