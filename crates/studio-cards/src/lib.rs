//! Studio Cards - Workshop card decks
//!
//! The building blocks participants combine into product ideas:
//! - Five idea categories (Thing, Sensor, Action, Feedback, Service)
//! - Auxiliary decks framing a workshop (Mission, Persona, Scenario)
//! - Evaluation criteria
//! - Runtime-authored custom cards
//!
//! Catalog entries are static; a reserved id per deck stands for
//! "author your own card" instead of a selectable card.
//!
//! # Example
//!
//! ```rust
//! use studio_cards::{CardCategory, Catalog};
//!
//! let clothing = Catalog::card("t1").unwrap();
//! assert_eq!(clothing.name, "Clothing");
//! assert_eq!(clothing.category, CardCategory::Thing);
//! assert!(Catalog::is_custom_placeholder("s12"));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod catalog;
pub mod custom;
mod decks;
pub mod error;

pub use catalog::{
    Card, CardCategory, Catalog, CriteriaCard, MissionCard, PersonaCard, ScenarioCard,
    CUSTOM_PLACEHOLDER_IDS,
};
pub use custom::{CustomCardDraft, CustomCardFactory, CustomKind};
pub use error::CatalogError;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with card decks
    pub use crate::{Card, CardCategory, Catalog, CriteriaCard, CustomCardDraft, CustomCardFactory};
}
