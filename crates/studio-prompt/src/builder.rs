//! Prompt construction
//!
//! Every prompt opens with the same context block: the workshop (when
//! known), the resolved cards of the idea, and its title and description.

use crate::command::Command;
use std::fmt::Write as _;
use studio_cards::CardCategory;
use studio_core::{EvaluationCriteria, Idea, Workshop};

/// Reply to `/help`, served locally
pub const HELP_TEXT: &str = "**Available Commands:**

- **/reflect** - Get reflective questions to improve feasibility and value
- **/creative** - Receive suggestions for alternative cards and approach variations
- **/provoke** - Identify potential weaknesses and edge cases
- **/help** - Display this help message

You can also just chat normally without using commands.";

/// Welcome turn used when generation fails
#[must_use]
pub fn welcome_fallback(title: &str) -> String {
    format!(
        "Welcome to the Idea Refinement chat! I'll help you refine your idea \"{title}\" through interactive feedback.

Try these commands:
- Type **/reflect** for reflective questions
- Type **/creative** for alternative approaches
- Type **/provoke** to challenge assumptions
- Type **/help** for more information"
    )
}

/// Builds prompts for one idea
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder<'a> {
    idea: &'a Idea,
    workshop: Option<&'a Workshop>,
}

impl<'a> PromptBuilder<'a> {
    /// Create new builder
    #[inline]
    #[must_use]
    pub fn new(idea: &'a Idea) -> Self {
        Self {
            idea,
            workshop: None,
        }
    }

    /// Add workshop context
    #[inline]
    #[must_use]
    pub fn with_workshop(mut self, workshop: Option<&'a Workshop>) -> Self {
        self.workshop = workshop;
        self
    }

    /// Idea the prompts are built for
    #[inline]
    #[must_use]
    pub fn idea(&self) -> &'a Idea {
        self.idea
    }

    /// Prompt for a chat command; `None` for commands answered locally
    #[must_use]
    pub fn command(&self, command: Command, input: &str) -> Option<String> {
        let task = match command {
            Command::Help => return None,
            Command::Reflect => REFLECT_TASK.to_string(),
            Command::Creative => CREATIVE_TASK.to_string(),
            Command::Provoke => PROVOKE_TASK.to_string(),
            Command::Chat => chat_task(input),
        };
        Some(self.finish(command.as_str(), &task))
    }

    /// Prompt acknowledging a card combination edit
    ///
    /// `changes` holds lines from [`crate::describe_combination_change`];
    /// empty when the exact change is unknown.
    #[must_use]
    pub fn card_change(&self, changes: &[String]) -> String {
        self.finish("card-change", &chat_task(&card_change_notice(changes)))
    }

    /// Prompt for the first assistant turn of the refinement chat
    #[must_use]
    pub fn welcome(&self) -> String {
        self.finish("welcome", WELCOME_TASK)
    }

    /// Prompt for an 8-step storyboard
    #[must_use]
    pub fn storyboard(&self) -> String {
        self.finish("storyboard", STORYBOARD_TASK)
    }

    /// Prompt for an elevator pitch
    ///
    /// Storyboard steps and answered criteria are included when present.
    #[must_use]
    pub fn elevator_pitch(&self, criteria: &[EvaluationCriteria]) -> String {
        let mut task = String::new();
        let steps = self.idea.storyboard_steps();
        if !steps.is_empty() {
            task.push_str("The user journey of the idea, as a storyboard:\n");
            for (i, step) in steps.iter().enumerate() {
                let _ = writeln!(task, "{}. {step}", i + 1);
            }
            task.push('\n');
        }

        let answered: Vec<&EvaluationCriteria> = criteria
            .iter()
            .filter(|c| !c.response.trim().is_empty())
            .collect();
        if !answered.is_empty() {
            task.push_str("The participants evaluated the idea as follows:\n");
            for c in answered {
                let _ = writeln!(task, "- {}: {}", c.criteria_card.name, c.response.trim());
            }
            task.push('\n');
        }

        task.push_str(PITCH_TASK);
        self.finish("elevator-pitch", &task)
    }

    fn finish(&self, kind: &str, task: &str) -> String {
        let mut prompt = self.context();
        prompt.push('\n');
        prompt.push_str(task);
        tracing::debug!(kind, chars = prompt.len(), idea_id = %self.idea.id, "prompt built");
        prompt
    }

    fn context(&self) -> String {
        let mut out = String::from(
            "You are an AI assistant helping with a design thinking workshop.\n\n",
        );

        if let Some(workshop) = self.workshop {
            let _ = writeln!(out, "Workshop: \"{}\"", workshop.name);
            if !workshop.description.trim().is_empty() {
                let _ = writeln!(out, "Workshop description: {}", workshop.description.trim());
            }
            if let Some(mission) = &workshop.mission {
                let _ = writeln!(out, "Mission goal: {}", mission.goal);
            }
            if let Some(persona) = &workshop.persona {
                let _ = writeln!(out, "Target persona: {}", persona.description);
            }
            if let Some(scenario) = &workshop.scenario {
                let _ = writeln!(out, "Scenario: {}", scenario.description);
            }
            out.push('\n');
        }

        out.push_str("The participants have created an idea combining these cards:\n");
        let mut any = false;
        for category in CardCategory::ALL {
            for card in self.idea.card_combination.resolved(category) {
                any = true;
                let _ = writeln!(out, "- {}: {} ({})", category.label(), card.name, card.description);
            }
        }
        if !any {
            out.push_str("- No cards selected yet\n");
        }

        let _ = write!(
            out,
            "\nThe idea title is: \"{}\"\nDescription: \"{}\"\n",
            self.idea.title, self.idea.description
        );
        out
    }
}

/// Notification text sent as the chat message of a card-change prompt
#[must_use]
pub fn card_change_notice(changes: &[String]) -> String {
    if changes.is_empty() {
        "The idea's card combination has been updated. Please provide feedback on the new combination."
            .to_string()
    } else {
        format!(
            "The idea's card combination has been updated: {}",
            changes.join(", ")
        )
    }
}

fn chat_task(message: &str) -> String {
    format!(
        "The user has sent this message: \"{message}\"

Please respond to their message, keeping your response focused on their idea. Be helpful, encouraging, and constructive. If appropriate, remind them they can use commands like /reflect, /creative, or /provoke for specific types of feedback."
    )
}

const REFLECT_TASK: &str = "Please provide 5-6 reflective questions that will help them think more deeply about their idea. Focus on feasibility, user benefits, implementation challenges, and potential improvements. Make your questions specific to their idea components.";

const CREATIVE_TASK: &str = "Please suggest alternative approaches to their idea. Specifically:
1. Suggest 2 alternative \"things\" they could use
2. Suggest 2 alternative \"sensors\" they could incorporate
3. Suggest 1-2 ways to combine these alternatives to expand or enhance their original idea

Present each alternative in exactly this format:

### Alternative 1: <short name>
**Thing**: <thing>
**Sensor**: <sensor>
**Action**: <action>
**Feedback**: <feedback>
**Service**: <service>

Be specific and creative in your suggestions, explaining how they could enhance the core concept.";

const PROVOKE_TASK: &str = "Please challenge their thinking by raising 5-6 provocative questions about:
- Potential privacy or ethical concerns
- Technical limitations or failures
- Unintended consequences
- User confusion or misuse
- Edge cases or accessibility issues

Make your questions specific to their idea components and help them identify blind spots.";

const WELCOME_TASK: &str = "Write a short, friendly welcome message that opens the idea refinement chat. Summarize the idea in one sentence, point out one promising aspect of the card combination, and tell the participants they can type /reflect, /creative, /provoke or /help to get specific kinds of feedback.";

const STORYBOARD_TASK: &str = "Please create a coherent 8-step storyboard that outlines the user journey for this idea. Each step should be a concise single sentence describing what happens at that point in the user experience.

The storyboard should follow a logical flow:
1. Introduction to the user/context
2. Initial interaction with the product/service
3. How the sensor/detection works
4. The action taken by the user or system
5. How the feedback is provided
6. How the service component works
7. Resolution or outcome
8. Benefits realized by the user

Format your response as 8 separate steps, one per line, with no numbering or bullet points.";

const PITCH_TASK: &str = "Write a compelling elevator pitch for this idea in 3-4 sentences. State the problem it solves, who it is for, how the card combination solves it, and why it matters. Respond with the pitch text only.";

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use studio_cards::Catalog;
    use studio_core::{CardCombination, IdeaId, Storyboard, WorkshopId};

    fn idea() -> Idea {
        let now = Utc::now();
        let mut combination = CardCombination::new();
        combination.set_category(CardCategory::Thing, vec![Catalog::card("t1").unwrap()]);
        combination.set_category(
            CardCategory::Sensor,
            vec![Catalog::card("s7").unwrap(), Catalog::card("s1").unwrap()],
        );
        Idea {
            id: IdeaId::from("i1"),
            workshop_id: WorkshopId::from("w1"),
            title: "Clothing with Motion".to_string(),
            description: "test".to_string(),
            card_combination: combination,
            refinements: Vec::new(),
            chat_history: Vec::new(),
            storyboard: None,
            evaluation: None,
            elevator_pitch: None,
            cards_updated: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn workshop() -> Workshop {
        let now = Utc::now();
        Workshop {
            id: WorkshopId::from("w1"),
            name: "Demo".to_string(),
            date: String::new(),
            facilitator_name: String::new(),
            description: "Campus mobility".to_string(),
            mission: Catalog::mission("m1"),
            persona: Catalog::persona("p1"),
            scenario: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn help_is_local() {
        let idea = idea();
        assert!(PromptBuilder::new(&idea).command(Command::Help, "/help").is_none());
    }

    #[test]
    fn prompts_embed_idea_and_cards() {
        let idea = idea();
        let prompt = PromptBuilder::new(&idea)
            .command(Command::Reflect, "/reflect")
            .unwrap();
        assert!(prompt.contains("\"Clothing with Motion\""));
        assert!(prompt.contains("- Thing: Clothing"));
        assert!(prompt.contains("- Sensor: Motion"));
        assert!(prompt.contains("reflective questions"));
        assert!(!prompt.contains("Workshop:"));
    }

    #[test]
    fn primary_card_listed_once() {
        let idea = idea();
        let prompt = PromptBuilder::new(&idea).storyboard();
        assert_eq!(prompt.matches("- Thing: Clothing").count(), 1);
    }

    #[test]
    fn workshop_context_included() {
        let idea = idea();
        let workshop = workshop();
        let prompt = PromptBuilder::new(&idea)
            .with_workshop(Some(&workshop))
            .command(Command::Chat, "Is this useful?")
            .unwrap();
        assert!(prompt.contains("Workshop: \"Demo\""));
        assert!(prompt.contains("Campus mobility"));
        assert!(prompt.contains(&workshop.mission.as_ref().unwrap().goal));
        assert!(prompt.contains(&workshop.persona.as_ref().unwrap().description));
        assert!(prompt.contains("\"Is this useful?\""));
    }

    #[test]
    fn pitch_includes_storyboard_and_answered_criteria() {
        let mut idea = idea();
        idea.storyboard = Some(Storyboard::from_descriptions(idea.id.clone(), ["Wake up", "Walk"]));
        let criteria = vec![
            EvaluationCriteria::new(Catalog::criteria_card("c1").unwrap(), "Easy to use"),
            EvaluationCriteria::new(Catalog::criteria_card("c2").unwrap(), "  "),
        ];
        let prompt = PromptBuilder::new(&idea).elevator_pitch(&criteria);
        assert!(prompt.contains("1. Wake up"));
        assert!(prompt.contains("2. Walk"));
        assert!(prompt.contains("Easy to use"));
        let c2 = Catalog::criteria_card("c2").unwrap().name;
        assert!(!prompt.contains(&format!("- {c2}:")));
    }

    #[test]
    fn card_change_notice_variants() {
        assert!(card_change_notice(&[]).ends_with("feedback on the new combination."));
        let notice = card_change_notice(&["Added thing: Luggage".to_string()]);
        assert_eq!(
            notice,
            "The idea's card combination has been updated: Added thing: Luggage"
        );
    }

    #[test]
    fn fallback_welcome_names_idea() {
        let text = welcome_fallback("Smart Shirt");
        assert!(text.starts_with("Welcome to the Idea Refinement chat!"));
        assert!(text.contains("\"Smart Shirt\""));
        assert!(text.contains("**/provoke**"));
    }
}
