//! Workshop phases
//!
//! The phase machine is caller-driven: the store records whatever phase it
//! is given. The helpers here encode the navigation rules views apply.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stage of work on the current idea
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Card combination and idea overview
    #[default]
    Ideation,
    /// Chat-based refinement
    Refinement,
    Storyboard,
    Evaluation,
    /// Elevator pitch
    Elevator,
}

impl Phase {
    /// All phases in workshop order
    pub const ALL: [Phase; 5] = [
        Phase::Ideation,
        Phase::Refinement,
        Phase::Storyboard,
        Phase::Evaluation,
        Phase::Elevator,
    ];

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Ideation => "ideation",
            Phase::Refinement => "refinement",
            Phase::Storyboard => "storyboard",
            Phase::Evaluation => "evaluation",
            Phase::Elevator => "elevator",
        }
    }

    /// Whether this phase works on a single selected idea
    #[inline]
    #[must_use]
    pub fn requires_idea(&self) -> bool {
        !matches!(self, Phase::Ideation)
    }

    /// Reject entering an idea-bound phase without a current idea
    pub fn entry_guard(self, has_current_idea: bool) -> Result<(), StoreError> {
        if self.requires_idea() && !has_current_idea {
            return Err(StoreError::PhaseRequiresIdea { phase: self });
        }
        Ok(())
    }

    /// Phase to move to once an idea was created or its edit completed
    #[inline]
    #[must_use]
    pub fn after_idea_saved(self) -> Self {
        match self {
            Phase::Ideation => Phase::Refinement,
            other => other,
        }
    }

    /// Next phase in workshop order
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Phase::ALL.get(self.position() + 1).copied()
    }

    /// Previous phase in workshop order
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.position().checked_sub(1).map(|i| Phase::ALL[i])
    }

    fn position(self) -> usize {
        match self {
            Phase::Ideation => 0,
            Phase::Refinement => 1,
            Phase::Storyboard => 2,
            Phase::Evaluation => 3,
            Phase::Elevator => 4,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|phase| phase.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown phase: '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_phase_is_ideation() {
        assert_eq!(Phase::default(), Phase::Ideation);
    }

    #[test]
    fn idea_bound_phases_are_guarded() {
        assert!(Phase::Ideation.entry_guard(false).is_ok());
        for phase in &Phase::ALL[1..] {
            assert_eq!(
                phase.entry_guard(false),
                Err(StoreError::PhaseRequiresIdea { phase: *phase })
            );
            assert!(phase.entry_guard(true).is_ok());
        }
    }

    #[test]
    fn saving_an_idea_moves_to_refinement() {
        assert_eq!(Phase::Ideation.after_idea_saved(), Phase::Refinement);
        assert_eq!(Phase::Evaluation.after_idea_saved(), Phase::Evaluation);
    }

    #[test]
    fn navigation_order() {
        assert_eq!(Phase::Ideation.next(), Some(Phase::Refinement));
        assert_eq!(Phase::Elevator.next(), None);
        assert_eq!(Phase::Ideation.previous(), None);
        assert_eq!(Phase::Elevator.previous(), Some(Phase::Evaluation));
    }

    #[test]
    fn parse_phase() {
        assert_eq!("Storyboard".parse::<Phase>(), Ok(Phase::Storyboard));
        assert!("pitch".parse::<Phase>().is_err());
    }
}
