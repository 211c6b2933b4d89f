//! Elevator pitch fallback

use studio_cards::CardCategory;
use studio_core::Idea;

/// Pitch written from the idea's own cards when generation fails
#[must_use]
pub fn default_elevator_pitch(idea: &Idea) -> String {
    let first = |category: CardCategory| {
        idea.card_combination
            .resolved(category)
            .first()
            .map(|card| card.name.to_lowercase())
    };
    let thing = first(CardCategory::Thing).unwrap_or_else(|| "solution".to_string());
    let sensor = first(CardCategory::Sensor).unwrap_or_else(|| "sensor".to_string());
    let title = if idea.title.trim().is_empty() {
        "Our product"
    } else {
        idea.title.as_str()
    };
    format!(
        "{title} is a {thing}-based solution that uses {sensor} technology to address user needs efficiently and effectively. It provides a seamless experience while solving a critical problem in a novel way."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use studio_cards::Catalog;
    use studio_core::{CardCombination, IdeaId, WorkshopId};

    fn idea(title: &str, combination: CardCombination) -> Idea {
        Idea {
            id: IdeaId::new(),
            workshop_id: WorkshopId::new(),
            title: title.to_string(),
            description: String::new(),
            card_combination: combination,
            refinements: Vec::new(),
            chat_history: Vec::new(),
            storyboard: None,
            evaluation: None,
            elevator_pitch: None,
            cards_updated: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn uses_first_thing_and_sensor() {
        let mut combination = CardCombination::new();
        combination.insert(Catalog::card("t13").unwrap());
        combination.insert(Catalog::card("s5").unwrap());
        let pitch = default_elevator_pitch(&idea("RainGuard", combination));
        assert!(pitch.starts_with("RainGuard is a umbrella-based solution that uses humidity technology"));
    }

    #[test]
    fn defaults_without_cards() {
        let pitch = default_elevator_pitch(&idea("", CardCombination::new()));
        assert!(pitch.starts_with("Our product is a solution-based solution that uses sensor technology"));
    }
}
