//! Core data model
//!
//! Defines the entities owned by the stores:
//! - Workshops and the ideas grouped under them
//! - The fixed-record card combination of an idea
//! - Chat history, refinements, storyboards and evaluations
//!
//! Every entity serializes as camelCase JSON with RFC 3339 timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use studio_cards::{Card, CardCategory, CriteriaCard, MissionCard, PersonaCard, ScenarioCard};
use uuid::Uuid;

/// Fresh random id for entities without a dedicated id type
#[inline]
#[must_use]
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Unique workshop identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkshopId(String);

impl WorkshopId {
    /// Generate new workshop ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(new_id())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WorkshopId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WorkshopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkshopId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WorkshopId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Unique idea identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdeaId(String);

impl IdeaId {
    /// Generate new idea ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(new_id())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for IdeaId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IdeaId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for IdeaId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A facilitated session grouping ideas
///
/// Mission, persona and scenario are owned snapshots of the catalog entries
/// chosen at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workshop {
    pub id: WorkshopId,
    pub name: String,
    pub date: String,
    pub facilitator_name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission: Option<MissionCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<PersonaCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<ScenarioCard>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a workshop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkshopDraft {
    pub name: String,
    pub date: String,
    pub facilitator_name: String,
    pub description: String,
    pub mission: Option<MissionCard>,
    pub persona: Option<PersonaCard>,
    pub scenario: Option<ScenarioCard>,
}

impl WorkshopDraft {
    /// Create new draft with a name
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_facilitator(mut self, facilitator: impl Into<String>) -> Self {
        self.facilitator_name = facilitator.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_mission(mut self, mission: MissionCard) -> Self {
        self.mission = Some(mission);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_persona(mut self, persona: PersonaCard) -> Self {
        self.persona = Some(persona);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_scenario(mut self, scenario: ScenarioCard) -> Self {
        self.scenario = Some(scenario);
        self
    }
}

/// Partial workshop update; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkshopPatch {
    pub name: Option<String>,
    pub date: Option<String>,
    pub facilitator_name: Option<String>,
    pub description: Option<String>,
    pub mission: Option<MissionCard>,
    pub persona: Option<PersonaCard>,
    pub scenario: Option<ScenarioCard>,
}

impl WorkshopPatch {
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_mission(mut self, mission: MissionCard) -> Self {
        self.mission = Some(mission);
        self
    }

    pub(crate) fn apply(self, workshop: &mut Workshop) {
        if let Some(name) = self.name {
            workshop.name = name;
        }
        if let Some(date) = self.date {
            workshop.date = date;
        }
        if let Some(facilitator) = self.facilitator_name {
            workshop.facilitator_name = facilitator;
        }
        if let Some(description) = self.description {
            workshop.description = description;
        }
        if self.mission.is_some() {
            workshop.mission = self.mission;
        }
        if self.persona.is_some() {
            workshop.persona = self.persona;
        }
        if self.scenario.is_some() {
            workshop.scenario = self.scenario;
        }
    }
}

/// Cards chosen for an idea
///
/// Each category has a legacy single-card slot and a full ordered list.
/// Saving through the builder keeps the slot equal to the list head; older
/// data may carry a slot card that is missing from the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardCombination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thing: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Card>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub thing_cards: Vec<Card>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sensor_cards: Vec<Card>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action_cards: Vec<Card>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feedback_cards: Vec<Card>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_cards: Vec<Card>,
}

impl CardCombination {
    /// Create empty combination
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Legacy single-card slot
    #[must_use]
    pub fn primary(&self, category: CardCategory) -> Option<&Card> {
        match category {
            CardCategory::Thing => self.thing.as_ref(),
            CardCategory::Sensor => self.sensor.as_ref(),
            CardCategory::Action => self.action.as_ref(),
            CardCategory::Feedback => self.feedback.as_ref(),
            CardCategory::Service => self.service.as_ref(),
        }
    }

    fn primary_slot(&mut self, category: CardCategory) -> &mut Option<Card> {
        match category {
            CardCategory::Thing => &mut self.thing,
            CardCategory::Sensor => &mut self.sensor,
            CardCategory::Action => &mut self.action,
            CardCategory::Feedback => &mut self.feedback,
            CardCategory::Service => &mut self.service,
        }
    }

    /// Multi-card list
    #[must_use]
    pub fn list(&self, category: CardCategory) -> &[Card] {
        match category {
            CardCategory::Thing => &self.thing_cards,
            CardCategory::Sensor => &self.sensor_cards,
            CardCategory::Action => &self.action_cards,
            CardCategory::Feedback => &self.feedback_cards,
            CardCategory::Service => &self.service_cards,
        }
    }

    fn list_mut(&mut self, category: CardCategory) -> &mut Vec<Card> {
        match category {
            CardCategory::Thing => &mut self.thing_cards,
            CardCategory::Sensor => &mut self.sensor_cards,
            CardCategory::Action => &mut self.action_cards,
            CardCategory::Feedback => &mut self.feedback_cards,
            CardCategory::Service => &mut self.service_cards,
        }
    }

    /// Replace a category: the list becomes `cards`, the slot its head
    pub fn set_category(&mut self, category: CardCategory, cards: Vec<Card>) {
        *self.primary_slot(category) = cards.first().cloned();
        *self.list_mut(category) = cards;
    }

    /// Put `card` into the slot of its category and append it to the list
    ///
    /// Returns `false` when the card was already the slot card.
    pub fn insert(&mut self, card: Card) -> bool {
        let category = card.category;
        if self.primary(category).is_some_and(|c| c.id == card.id) {
            return false;
        }
        let list = self.list_mut(category);
        if !list.iter().any(|c| c.id == card.id) {
            list.push(card.clone());
        }
        *self.primary_slot(category) = Some(card);
        true
    }

    /// Cards of a category with the slot de-duplicated against the list
    #[must_use]
    pub fn resolved(&self, category: CardCategory) -> Vec<&Card> {
        let list = self.list(category);
        let mut cards: Vec<&Card> = Vec::with_capacity(list.len() + 1);
        if let Some(primary) = self.primary(category) {
            if !list.iter().any(|c| c.id == primary.id) {
                cards.push(primary);
            }
        }
        cards.extend(list.iter());
        cards
    }

    /// All resolved cards in category order
    #[must_use]
    pub fn resolved_all(&self) -> Vec<&Card> {
        CardCategory::ALL
            .iter()
            .flat_map(|category| self.resolved(*category))
            .collect()
    }

    /// Resolved card ids of a category
    #[must_use]
    pub fn ids(&self, category: CardCategory) -> BTreeSet<&str> {
        self.resolved(category)
            .into_iter()
            .map(|c| c.id.as_str())
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        CardCategory::ALL
            .iter()
            .all(|category| self.resolved(*category).is_empty())
    }

    /// Slot card names joined as "Clothing + Motion"
    #[must_use]
    pub fn summary_line(&self) -> String {
        CardCategory::ALL
            .iter()
            .filter_map(|category| self.primary(*category))
            .map(|card| card.name.as_str())
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

/// Author of a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    User,
    Ai,
    System,
}

/// Command or purpose a chat turn answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageAction {
    Reflect,
    Creative,
    Provoke,
    Info,
    Suggestion,
}

impl MessageAction {
    /// Refinement kind recorded for this action, if any
    #[must_use]
    pub fn refinement_type(self) -> Option<RefinementType> {
        match self {
            MessageAction::Reflect => Some(RefinementType::Reflect),
            MessageAction::Creative => Some(RefinementType::Creative),
            MessageAction::Provoke => Some(RefinementType::Provoke),
            MessageAction::Info | MessageAction::Suggestion => None,
        }
    }
}

/// Catalog cards suggested in an AI turn, grouped by category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSuggestion {
    pub category: CardCategory,
    pub cards: Vec<Card>,
}

/// One turn of the refinement chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MessageType,
    /// Markdown text
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<MessageAction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub card_suggestions: Vec<CardSuggestion>,
}

impl ChatMessage {
    /// Create new message stamped now
    #[must_use]
    pub fn new(kind: MessageType, content: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            kind,
            content: content.into(),
            timestamp: Utc::now(),
            action: None,
            card_suggestions: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageType::User, content)
    }

    #[inline]
    #[must_use]
    pub fn ai(content: impl Into<String>) -> Self {
        Self::new(MessageType::Ai, content)
    }

    #[inline]
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageType::System, content)
    }

    #[inline]
    #[must_use]
    pub fn with_action(mut self, action: MessageAction) -> Self {
        self.action = Some(action);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_card_suggestions(mut self, suggestions: Vec<CardSuggestion>) -> Self {
        self.card_suggestions = suggestions;
        self
    }
}

/// Kind of recorded AI guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefinementType {
    Reflect,
    Creative,
    Provoke,
}

/// A recorded reflect/creative/provoke exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refinement {
    pub id: String,
    pub idea_id: IdeaId,
    #[serde(rename = "type")]
    pub kind: RefinementType,
    pub question: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

impl Refinement {
    #[must_use]
    pub fn new(
        idea_id: IdeaId,
        kind: RefinementType,
        question: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            idea_id,
            kind,
            question: question.into(),
            response: response.into(),
            created_at: Utc::now(),
        }
    }
}

/// One storyboard frame; `order` is 1-based and contiguous
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryboardStep {
    pub id: String,
    pub order: u32,
    pub description: String,
}

/// Ordered user journey for an idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storyboard {
    pub id: String,
    pub idea_id: IdeaId,
    pub steps: Vec<StoryboardStep>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A criteria card with the participant's answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationCriteria {
    pub criteria_card: CriteriaCard,
    pub response: String,
}

impl EvaluationCriteria {
    #[inline]
    #[must_use]
    pub fn new(criteria_card: CriteriaCard, response: impl Into<String>) -> Self {
        Self {
            criteria_card,
            response: response.into(),
        }
    }
}

/// Criteria responses recorded for one idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub id: String,
    pub idea_id: IdeaId,
    pub criteria: Vec<EvaluationCriteria>,
    /// Criteria cards authored for this idea
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_criteria: Vec<CriteriaCard>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Evaluation {
    /// Responses that carry text
    pub fn answered(&self) -> impl Iterator<Item = &EvaluationCriteria> {
        self.criteria.iter().filter(|c| !c.response.trim().is_empty())
    }
}

/// A product idea built from a card combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: IdeaId,
    pub workshop_id: WorkshopId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub card_combination: CardCombination,
    #[serde(default)]
    pub refinements: Vec<Refinement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chat_history: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storyboard: Option<Storyboard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<Evaluation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevator_pitch: Option<String>,
    /// Combination edited since the refinement chat last acknowledged it
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub cards_updated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Idea {
    /// Storyboard step descriptions in order
    #[must_use]
    pub fn storyboard_steps(&self) -> Vec<&str> {
        self.storyboard
            .as_ref()
            .map(|s| s.steps.iter().map(|step| step.description.as_str()).collect())
            .unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub fn has_pitch(&self) -> bool {
        self.elevator_pitch
            .as_deref()
            .is_some_and(|p| !p.trim().is_empty())
    }
}

/// Fields supplied when creating an idea
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaDraft {
    /// Defaults to "New Idea"
    pub title: Option<String>,
    pub description: String,
    pub card_combination: CardCombination,
    pub refinements: Vec<Refinement>,
    pub storyboard: Option<Storyboard>,
    pub evaluation: Option<Evaluation>,
    pub elevator_pitch: Option<String>,
}

impl IdeaDraft {
    /// Create new draft
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_combination(mut self, combination: CardCombination) -> Self {
        self.card_combination = combination;
        self
    }
}

/// Partial idea update; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub card_combination: Option<CardCombination>,
    pub refinements: Option<Vec<Refinement>>,
    pub chat_history: Option<Vec<ChatMessage>>,
    pub storyboard: Option<Storyboard>,
    pub evaluation: Option<Evaluation>,
    pub elevator_pitch: Option<String>,
    pub cards_updated: Option<bool>,
}

impl IdeaPatch {
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_combination(mut self, combination: CardCombination) -> Self {
        self.card_combination = Some(combination);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_chat_history(mut self, history: Vec<ChatMessage>) -> Self {
        self.chat_history = Some(history);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_storyboard(mut self, storyboard: Storyboard) -> Self {
        self.storyboard = Some(storyboard);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_elevator_pitch(mut self, pitch: impl Into<String>) -> Self {
        self.elevator_pitch = Some(pitch.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_cards_updated(mut self, updated: bool) -> Self {
        self.cards_updated = Some(updated);
        self
    }

    pub(crate) fn apply(self, idea: &mut Idea) {
        if let Some(title) = self.title {
            idea.title = title;
        }
        if let Some(description) = self.description {
            idea.description = description;
        }
        if let Some(combination) = self.card_combination {
            idea.card_combination = combination;
        }
        if let Some(refinements) = self.refinements {
            idea.refinements = refinements;
        }
        if let Some(history) = self.chat_history {
            idea.chat_history = history;
        }
        if self.storyboard.is_some() {
            idea.storyboard = self.storyboard;
        }
        if self.evaluation.is_some() {
            idea.evaluation = self.evaluation;
        }
        if self.elevator_pitch.is_some() {
            idea.elevator_pitch = self.elevator_pitch;
        }
        if let Some(updated) = self.cards_updated {
            idea.cards_updated = updated;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_cards::Catalog;

    fn card(id: &str) -> Card {
        Catalog::card(id).unwrap()
    }

    #[test]
    fn set_category_fills_slot_and_list() {
        let mut combination = CardCombination::new();
        combination.set_category(CardCategory::Thing, vec![card("t1"), card("t2")]);

        assert_eq!(combination.thing.as_ref().unwrap().id, "t1");
        assert_eq!(combination.thing_cards.len(), 2);
        assert_eq!(combination.resolved(CardCategory::Thing).len(), 2);
    }

    #[test]
    fn resolved_deduplicates_primary() {
        let mut combination = CardCombination::new();
        combination.sensor = Some(card("s7"));
        combination.sensor_cards = vec![card("s7"), card("s1")];
        assert_eq!(combination.resolved(CardCategory::Sensor).len(), 2);

        combination.sensor = Some(card("s2"));
        let ids: Vec<&str> = combination
            .resolved(CardCategory::Sensor)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["s2", "s7", "s1"]);
    }

    #[test]
    fn insert_replaces_slot_and_appends() {
        let mut combination = CardCombination::new();
        combination.set_category(CardCategory::Thing, vec![card("t1")]);

        assert!(combination.insert(card("t3")));
        assert_eq!(combination.thing.as_ref().unwrap().id, "t3");
        assert_eq!(combination.thing_cards.len(), 2);
        assert!(!combination.insert(card("t3")));
    }

    #[test]
    fn summary_line_uses_slots() {
        let mut combination = CardCombination::new();
        assert!(combination.is_empty());
        combination.set_category(CardCategory::Thing, vec![card("t1")]);
        combination.set_category(CardCategory::Sensor, vec![card("s7")]);
        assert_eq!(combination.summary_line(), "Clothing + Motion");
        assert!(!combination.is_empty());
    }

    #[test]
    fn combination_json_shape() {
        let mut combination = CardCombination::new();
        combination.set_category(CardCategory::Thing, vec![card("t1")]);
        let json = serde_json::to_value(&combination).unwrap();

        assert_eq!(json["thing"]["name"], "Clothing");
        assert_eq!(json["thingCards"][0]["id"], "t1");
        assert!(json.get("sensorCards").is_none());
    }

    #[test]
    fn chat_message_json_uses_type_field() {
        let message = ChatMessage::ai("hello").with_action(MessageAction::Reflect);
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["type"], "ai");
        assert_eq!(json["action"], "reflect");
    }

    #[test]
    fn action_maps_to_refinement() {
        assert_eq!(
            MessageAction::Provoke.refinement_type(),
            Some(RefinementType::Provoke)
        );
        assert_eq!(MessageAction::Suggestion.refinement_type(), None);
    }

    #[test]
    fn workshop_patch_merges() {
        let now = Utc::now();
        let mut workshop = Workshop {
            id: WorkshopId::new(),
            name: "Demo".to_string(),
            date: "2024-05-01".to_string(),
            facilitator_name: "Ana".to_string(),
            description: String::new(),
            mission: None,
            persona: None,
            scenario: None,
            created_at: now,
            updated_at: now,
        };
        WorkshopPatch::default()
            .with_description("Smart campus")
            .apply(&mut workshop);

        assert_eq!(workshop.name, "Demo");
        assert_eq!(workshop.description, "Smart campus");
    }
}
