//! Studio Prompt - Prompts in, structured results out
//!
//! Text-only glue between the workshop model and a generative service:
//! - Chat command parsing (`/reflect`, `/creative`, `/provoke`, `/help`)
//! - Prompt construction with workshop and card context
//! - Storyboard normalization to exactly eight steps
//! - Staged parsing of creative alternatives
//! - Card suggestions, change descriptions and fallback texts
//!
//! Nothing here performs I/O.
//!
//! # Example
//!
//! ```rust
//! use studio_prompt::prelude::*;
//!
//! let steps = parse_storyboard("1. Wake up\n2. Get dressed");
//! assert_eq!(steps.len(), 8);
//! assert_eq!(steps[1], "Get dressed");
//! assert_eq!(Command::parse("/creative"), Command::Creative);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod builder;
pub mod change;
pub mod command;
pub mod parse;
pub mod pitch;
pub mod suggest;

pub use builder::{card_change_notice, welcome_fallback, PromptBuilder, HELP_TEXT};
pub use change::describe_combination_change;
pub use command::Command;
pub use parse::{
    default_storyboard_steps, parse_creative, parse_storyboard, parse_strict_alternatives,
    placeholder_step, reformat_loose_alternatives, variation_blocks, Alternative, CreativeParse,
    ParseStage, NOT_SPECIFIED,
};
pub use pitch::default_elevator_pitch;
pub use suggest::{suggest_cards, MAX_SUGGESTIONS_PER_CATEGORY, SUGGESTED_CATEGORIES};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building prompts and parsing responses
    pub use crate::{
        parse_creative, parse_storyboard, suggest_cards, Command, CreativeParse, ParseStage,
        PromptBuilder,
    };
}
