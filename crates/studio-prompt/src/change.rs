//! Card combination change descriptions

use studio_cards::{Card, CardCategory};
use studio_core::CardCombination;

/// Human-readable lines for the difference between two combinations
///
/// Categories are compared on their resolved cards. A category where
/// exactly one card was swapped for another reads
/// `Changed thing: from A to B`; otherwise every added and removed card
/// gets its own `Added ...`/`Removed ...` line. A card kept under the same
/// id but renamed reads as a change too; one with only a new description
/// reads `Edited thing: A`.
#[must_use]
pub fn describe_combination_change(before: &CardCombination, after: &CardCombination) -> Vec<String> {
    let mut lines = Vec::new();
    for category in CardCategory::ALL {
        let old = before.resolved(category);
        let new = after.resolved(category);
        let removed: Vec<&Card> = old
            .iter()
            .filter(|card| !new.iter().any(|c| c.id == card.id))
            .copied()
            .collect();
        let added: Vec<&Card> = new
            .iter()
            .filter(|card| !old.iter().any(|c| c.id == card.id))
            .copied()
            .collect();

        let kind = category.as_str();
        for card in &new {
            let Some(old_card) = old.iter().find(|c| c.id == card.id) else {
                continue;
            };
            if old_card.name != card.name {
                lines.push(format!("Changed {kind}: from {} to {}", old_card.name, card.name));
            } else if old_card.description != card.description {
                lines.push(format!("Edited {kind}: {}", card.name));
            }
        }
        if let ([from], [to]) = (removed.as_slice(), added.as_slice()) {
            lines.push(format!("Changed {kind}: from {} to {}", from.name, to.name));
            continue;
        }
        lines.extend(added.iter().map(|card| format!("Added {kind}: {}", card.name)));
        lines.extend(removed.iter().map(|card| format!("Removed {kind}: {}", card.name)));
    }
    lines
}
