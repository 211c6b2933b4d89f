//! Card suggestions mined from AI text

use studio_cards::{CardCategory, Catalog};
use studio_core::CardSuggestion;

/// Categories scanned for suggestions
pub const SUGGESTED_CATEGORIES: [CardCategory; 3] =
    [CardCategory::Thing, CardCategory::Sensor, CardCategory::Action];

/// Most cards suggested per category
pub const MAX_SUGGESTIONS_PER_CATEGORY: usize = 2;

/// Catalog cards whose name appears in `text`
///
/// Matching is a case-insensitive substring test in catalog order;
/// custom placeholders never match. Categories without a hit are left
/// out, so text naming no card yields an empty list.
#[must_use]
pub fn suggest_cards(text: &str) -> Vec<CardSuggestion> {
    let haystack = text.to_lowercase();
    SUGGESTED_CATEGORIES
        .iter()
        .filter_map(|category| {
            let cards: Vec<_> = Catalog::cards(*category)
                .into_iter()
                .filter(|card| !Catalog::is_custom_placeholder(&card.id))
                .filter(|card| haystack.contains(&card.name.to_lowercase()))
                .take(MAX_SUGGESTIONS_PER_CATEGORY)
                .collect();
            (!cards.is_empty()).then(|| CardSuggestion {
                category: *category,
                cards,
            })
        })
        .collect()
}
