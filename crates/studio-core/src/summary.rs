//! Workshop summary
//!
//! Per-idea progress and card usage across all ideas of a workshop.

use crate::evaluation::EvaluationStore;
use crate::model::{Idea, IdeaId, WorkshopId};
use crate::store::WorkshopStore;
use serde::Serialize;
use std::collections::HashMap;
use studio_cards::CardCategory;

/// Progress of one idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaProgress {
    pub idea_id: IdeaId,
    pub title: String,
    /// "Clothing + Motion"
    pub combination: String,
    pub storyboard_steps: usize,
    pub selected_criteria: usize,
    pub has_pitch: bool,
    pub refinements: usize,
}

/// How often a card name was used in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardUsage {
    pub name: String,
    pub count: usize,
}

/// Summary of a workshop
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopSummary {
    pub workshop_id: WorkshopId,
    pub name: String,
    pub ideas: Vec<IdeaProgress>,
    /// Indexed by [`CardCategory::index`]
    pub card_usage: [Vec<CardUsage>; 5],
}

impl WorkshopSummary {
    /// Summarize a workshop; `None` for unknown ids
    #[must_use]
    pub fn build(
        store: &WorkshopStore,
        evaluations: &EvaluationStore,
        workshop_id: &WorkshopId,
    ) -> Option<Self> {
        let workshop = store.workshop(workshop_id)?;
        let ideas = store.ideas_for_workshop(workshop_id);

        let progress = ideas
            .iter()
            .map(|idea| IdeaProgress {
                idea_id: idea.id.clone(),
                title: idea.title.clone(),
                combination: idea.card_combination.summary_line(),
                storyboard_steps: idea.storyboard.as_ref().map_or(0, |s| s.steps.len()),
                selected_criteria: evaluations.selected_criteria(&idea.id).len(),
                has_pitch: idea.has_pitch(),
                refinements: idea.refinements.len(),
            })
            .collect();

        let card_usage = CardCategory::ALL.map(|category| card_usage(&ideas, category));

        Some(Self {
            workshop_id: workshop.id.clone(),
            name: workshop.name.clone(),
            ideas: progress,
            card_usage,
        })
    }

    /// Usage list of one category, most used first
    #[must_use]
    pub fn usage(&self, category: CardCategory) -> &[CardUsage] {
        &self.card_usage[category.index()]
    }
}

/// Count card names per category; ties are ordered by name
fn card_usage(ideas: &[&Idea], category: CardCategory) -> Vec<CardUsage> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for idea in ideas {
        for card in idea.card_combination.resolved(category) {
            *counts.entry(card.name.as_str()).or_default() += 1;
        }
    }
    let mut usage: Vec<CardUsage> = counts
        .into_iter()
        .map(|(name, count)| CardUsage {
            name: name.to_string(),
            count,
        })
        .collect();
    usage.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    usage
}
