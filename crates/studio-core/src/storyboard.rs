//! Storyboard construction and manual editing
//!
//! Step orders are renumbered to `1..=n` after every edit.

use crate::error::StoryboardError;
use crate::model::{new_id, IdeaId, Storyboard, StoryboardStep};
use chrono::Utc;

/// Step count of a generated storyboard
pub const STORYBOARD_STEPS: usize = 8;

impl Storyboard {
    /// Empty storyboard for an idea
    #[must_use]
    pub fn empty(idea_id: IdeaId) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            idea_id,
            steps: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Storyboard with one step per description, in order
    #[must_use]
    pub fn from_descriptions<I, S>(idea_id: IdeaId, descriptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut storyboard = Self::empty(idea_id);
        storyboard.steps = descriptions
            .into_iter()
            .map(|description| StoryboardStep {
                id: new_id(),
                order: 0,
                description: description.into(),
            })
            .collect();
        storyboard.renumber();
        storyboard
    }

    /// Replace all steps, keeping the storyboard id and creation time
    pub fn replace_steps<I, S>(&mut self, descriptions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fresh = Self::from_descriptions(self.idea_id.clone(), descriptions);
        self.steps = fresh.steps;
        self.touch();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Append an empty step
    pub fn add_step(&mut self) -> &StoryboardStep {
        self.steps.push(StoryboardStep {
            id: new_id(),
            order: 0,
            description: String::new(),
        });
        self.renumber();
        self.touch();
        let last = self.steps.len() - 1;
        &self.steps[last]
    }

    /// Change the text of a step
    pub fn edit_step(&mut self, step_id: &str, description: impl Into<String>) -> Result<(), StoryboardError> {
        let step = self
            .steps
            .iter_mut()
            .find(|s| s.id == step_id)
            .ok_or_else(|| StoryboardError::UnknownStep(step_id.to_string()))?;
        step.description = description.into();
        self.touch();
        Ok(())
    }

    /// Remove a step; the last remaining one needs `confirmed`
    pub fn remove_step(&mut self, step_id: &str, confirmed: bool) -> Result<StoryboardStep, StoryboardError> {
        let pos = self
            .steps
            .iter()
            .position(|s| s.id == step_id)
            .ok_or_else(|| StoryboardError::UnknownStep(step_id.to_string()))?;
        if self.steps.len() == 1 && !confirmed {
            return Err(StoryboardError::ConfirmationRequired);
        }
        let removed = self.steps.remove(pos);
        self.renumber();
        self.touch();
        Ok(removed)
    }

    /// Move a step to a 0-based position
    pub fn move_step(&mut self, step_id: &str, to: usize) -> Result<(), StoryboardError> {
        let from = self
            .steps
            .iter()
            .position(|s| s.id == step_id)
            .ok_or_else(|| StoryboardError::UnknownStep(step_id.to_string()))?;
        if to >= self.steps.len() {
            return Err(StoryboardError::OutOfRange {
                position: to,
                len: self.steps.len(),
            });
        }
        if from != to {
            let step = self.steps.remove(from);
            self.steps.insert(to, step);
            self.renumber();
            self.touch();
        }
        Ok(())
    }

    fn renumber(&mut self) {
        for (i, step) in self.steps.iter_mut().enumerate() {
            step.order = u32::try_from(i + 1).unwrap_or(u32::MAX);
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders(storyboard: &Storyboard) -> Vec<u32> {
        storyboard.steps.iter().map(|s| s.order).collect()
    }

    fn board(n: usize) -> Storyboard {
        Storyboard::from_descriptions(IdeaId::from("i"), (1..=n).map(|i| format!("step {i}")))
    }

    #[test]
    fn from_descriptions_numbers_steps() {
        let storyboard = board(3);
        assert_eq!(orders(&storyboard), vec![1, 2, 3]);
        assert_eq!(storyboard.steps[2].description, "step 3");
    }

    #[test]
    fn add_and_remove_renumber() {
        let mut storyboard = board(3);
        let added = storyboard.add_step().id.clone();
        assert_eq!(orders(&storyboard), vec![1, 2, 3, 4]);

        let first = storyboard.steps[0].id.clone();
        storyboard.remove_step(&first, false).unwrap();
        assert_eq!(orders(&storyboard), vec![1, 2, 3]);
        assert_eq!(storyboard.steps[2].id, added);
    }

    #[test]
    fn removing_last_step_needs_confirmation() {
        let mut storyboard = board(1);
        let only = storyboard.steps[0].id.clone();
        assert_eq!(
            storyboard.remove_step(&only, false),
            Err(StoryboardError::ConfirmationRequired)
        );
        storyboard.remove_step(&only, true).unwrap();
        assert!(storyboard.is_empty());
    }

    #[test]
    fn move_step_reorders() {
        let mut storyboard = board(4);
        let moved = storyboard.steps[3].id.clone();
        storyboard.move_step(&moved, 0).unwrap();
        assert_eq!(storyboard.steps[0].id, moved);
        assert_eq!(storyboard.steps[0].description, "step 4");
        assert_eq!(orders(&storyboard), vec![1, 2, 3, 4]);

        assert_eq!(
            storyboard.move_step(&moved, 9),
            Err(StoryboardError::OutOfRange { position: 9, len: 4 })
        );
        assert!(storyboard.edit_step("missing", "x").is_err());
    }

    #[test]
    fn replace_steps_keeps_identity() {
        let mut storyboard = board(2);
        let id = storyboard.id.clone();
        storyboard.replace_steps(vec!["a", "b", "c"]);
        assert_eq!(storyboard.id, id);
        assert_eq!(storyboard.len(), 3);
    }
}
