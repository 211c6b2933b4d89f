//! Refinement chat

use crate::error::{GenerationKind, SessionError};
use crate::session::{PendingGeneration, StudioSession};
use studio_cards::Catalog;
use studio_core::{ChatMessage, MessageAction, Refinement};
use studio_llm::LlmError;
use studio_prompt::{parse_creative, suggest_cards, welcome_fallback, Command, ParseStage, HELP_TEXT};

/// System turn logged when a saved edit changed the cards
pub const CARD_CHANGE_NOTICE: &str =
    "Card combination has been updated. The AI will consider these changes.";

/// System turn appended when a chat generation fails
#[must_use]
pub fn chat_failure_message(model: &str) -> String {
    format!(
        "Sorry, I had trouble connecting to the AI model. Please ensure Ollama is running with the {model} model installed."
    )
}

/// Chat content of a creative answer
///
/// Strict answers are kept as written. Otherwise the normalized blocks are
/// appended below a rule so the card alternatives always render.
fn creative_content(text: &str) -> String {
    let parsed = parse_creative(text);
    match parsed.stage {
        ParseStage::Strict => text.to_string(),
        ParseStage::Reformatted | ParseStage::Variations => {
            format!("{text}\n\n---\n\n{}", parsed.to_markdown())
        }
    }
}

impl StudioSession {
    /// Open the chat of the current idea with a welcome turn
    ///
    /// Does nothing when the chat already has turns. A failed generation
    /// falls back to a fixed welcome text.
    pub async fn ensure_welcome(&self) -> Result<Option<ChatMessage>, SessionError> {
        {
            let store = self.store().lock();
            let idea = store.current_idea().ok_or(SessionError::NoCurrentIdea)?;
            if !idea.chat_history.is_empty() {
                return Ok(None);
            }
        }
        let pending = self.prepare(GenerationKind::Welcome, "", |builder, _| builder.welcome())?;
        let result = self.generate(&pending).await;
        self.apply_welcome(&pending, result).map(Some)
    }

    pub(crate) fn apply_welcome(
        &self,
        pending: &PendingGeneration,
        result: Result<String, LlmError>,
    ) -> Result<ChatMessage, SessionError> {
        self.apply_to_current(pending, |store| {
            let message = match result {
                Ok(text) => ChatMessage::ai(text),
                Err(_) => {
                    let title = store
                        .idea(&pending.idea_id)
                        .map(|idea| idea.title.clone())
                        .unwrap_or_default();
                    tracing::warn!(idea_id = %pending.idea_id, "welcome fallback used");
                    ChatMessage::ai(welcome_fallback(&title)).with_action(MessageAction::Info)
                }
            };
            Self::push_message(store, &pending.idea_id, message.clone());
            message
        })
    }

    /// Send a chat turn for the current idea and return the reply
    ///
    /// `/help` is answered locally. Reflect, creative and provoke replies are
    /// also recorded as refinements. On failure a system turn is appended
    /// and the error returned.
    pub async fn send_message(&self, input: &str) -> Result<ChatMessage, SessionError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SessionError::EmptyMessage);
        }
        let command = Command::parse(input);
        {
            let mut store = self.store().lock();
            let idea_id = store
                .current_idea()
                .map(|idea| idea.id.clone())
                .ok_or(SessionError::NoCurrentIdea)?;
            Self::push_message(&mut store, &idea_id, ChatMessage::user(input));
            if command.is_local() {
                let reply = ChatMessage::ai(HELP_TEXT).with_action(command.action());
                Self::push_message(&mut store, &idea_id, reply.clone());
                return Ok(reply);
            }
        }

        let pending = self.prepare(GenerationKind::Chat(command), input, |builder, _| {
            builder
                .command(command, input)
                .unwrap_or_else(|| builder.command(Command::Chat, input).unwrap_or_default())
        })?;
        let result = self.generate(&pending).await;
        self.apply_chat(&pending, command, result)
    }

    pub(crate) fn apply_chat(
        &self,
        pending: &PendingGeneration,
        command: Command,
        result: Result<String, LlmError>,
    ) -> Result<ChatMessage, SessionError> {
        let text = match result {
            Ok(text) => text,
            Err(source) => {
                let notice = ChatMessage::system(chat_failure_message(self.model()));
                return Err(self.fail_generation(pending, source, |store| {
                    Self::push_message(store, &pending.idea_id, notice);
                }));
            }
        };

        let (content, suggestions) = if command == Command::Creative {
            (creative_content(&text), suggest_cards(&text))
        } else {
            (text, Vec::new())
        };
        let message = ChatMessage::ai(content)
            .with_action(command.action())
            .with_card_suggestions(suggestions);

        self.apply_to_current(pending, |store| {
            store.modify_idea(&pending.idea_id, |idea| {
                if let Some(kind) = command.action().refinement_type() {
                    idea.refinements.push(Refinement::new(
                        idea.id.clone(),
                        kind,
                        pending.input.clone(),
                        message.content.clone(),
                    ));
                }
                idea.chat_history.push(message.clone());
            });
        })?;
        tracing::debug!(
            idea_id = %pending.idea_id,
            command = command.as_str(),
            suggestions = message.card_suggestions.len(),
            "chat reply applied"
        );
        Ok(message)
    }

    /// Acknowledge a pending card combination edit in the chat
    ///
    /// Runs only when the current idea is flagged as updated. Appends the
    /// system notice, clears the flag, then asks for feedback on `changes`
    /// (lines from [`studio_prompt::describe_combination_change`]).
    pub async fn notify_card_change(&self, changes: &[String]) -> Result<Option<ChatMessage>, SessionError> {
        {
            let mut store = self.store().lock();
            let idea = store.current_idea().ok_or(SessionError::NoCurrentIdea)?;
            if !idea.cards_updated {
                return Ok(None);
            }
            let idea_id = idea.id.clone();
            store.modify_idea(&idea_id, |idea| {
                idea.cards_updated = false;
                idea.chat_history
                    .push(ChatMessage::system(CARD_CHANGE_NOTICE).with_action(MessageAction::Info));
            });
        }

        let pending = self.prepare(GenerationKind::CardChange, "", |builder, _| {
            builder.card_change(changes)
        })?;
        let result = self.generate(&pending).await;
        match result {
            Ok(text) => {
                let message = ChatMessage::ai(text).with_action(MessageAction::Suggestion);
                self.apply_to_current(&pending, |store| {
                    Self::push_message(store, &pending.idea_id, message.clone());
                })?;
                Ok(Some(message))
            }
            Err(source) => {
                let notice = ChatMessage::system(chat_failure_message(self.model()));
                Err(self.fail_generation(&pending, source, |store| {
                    Self::push_message(store, &pending.idea_id, notice);
                }))
            }
        }
    }

    /// Put a suggested catalog card into the current idea
    ///
    /// The card takes its category's slot and joins the list. Returns the
    /// confirmation turn, or `None` when the card already held the slot.
    pub fn apply_card_suggestion(&self, card_id: &str) -> Result<Option<ChatMessage>, SessionError> {
        let card = Catalog::require_card(card_id)?;
        let mut store = self.store().lock();
        let idea_id = store
            .current_idea()
            .map(|idea| idea.id.clone())
            .ok_or(SessionError::NoCurrentIdea)?;

        let message = ChatMessage::system(format!(
            "Added {} as a new {} for your idea. The card combination has been updated.",
            card.name,
            card.category.as_str()
        ))
        .with_action(MessageAction::Info);

        let mut inserted = false;
        store.modify_idea(&idea_id, |idea| {
            inserted = idea.card_combination.insert(card);
            if inserted {
                idea.chat_history.push(message.clone());
            }
        });
        if inserted {
            tracing::info!(idea_id = %idea_id, card_id, "suggested card applied");
            Ok(Some(message))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use studio_cards::CustomCardDraft;
    use studio_core::{CombinationBuilder, EvaluationStore, IdeaDraft, MessageType};
    use studio_test_utils::{setup_demo_idea, ScriptedClient};

    fn session(client: ScriptedClient) -> (StudioSession, Arc<ScriptedClient>) {
        let (store, _, _) = setup_demo_idea();
        let client = Arc::new(client);
        let session = StudioSession::new(
            Arc::new(Mutex::new(store)),
            Arc::new(Mutex::new(EvaluationStore::in_memory())),
            client.clone(),
        );
        (session, client)
    }

    #[test]
    fn creative_content_keeps_strict_answers() {
        let strict = "### Alternative 1: A\n**Thing**: Watch";
        assert_eq!(creative_content(strict), strict);
        let loose = creative_content("Thing: Watch");
        assert!(loose.starts_with("Thing: Watch\n\n---\n\n### Variation 1\n**Thing**: Watch"));
    }

    #[tokio::test]
    async fn welcome_only_on_empty_chat() {
        let (session, client) = session(ScriptedClient::new().with_reply("Hello there"));
        let first = session.ensure_welcome().await.unwrap().unwrap();
        assert_eq!(first.content, "Hello there");
        assert!(session.ensure_welcome().await.unwrap().is_none());
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn welcome_falls_back() {
        let (session, _) = session(ScriptedClient::new().with_failure("down"));
        let message = session.ensure_welcome().await.unwrap().unwrap();
        assert!(message.content.starts_with("Welcome to the Idea Refinement chat!"));
        assert!(message.content.contains("\"Smart Shirt\""));
        assert_eq!(message.action, Some(MessageAction::Info));
    }

    #[tokio::test]
    async fn help_is_local() {
        let (session, client) = session(ScriptedClient::new());
        let reply = session.send_message("/help").await.unwrap();
        assert_eq!(reply.content, HELP_TEXT);
        assert_eq!(client.calls(), 0);
        let store = session.store().lock();
        assert_eq!(store.current_idea().unwrap().chat_history.len(), 2);
    }

    #[tokio::test]
    async fn reflect_records_refinement() {
        let (session, client) = session(ScriptedClient::new().with_reply("1. Who wears it?"));
        let reply = session.send_message("/reflect").await.unwrap();
        assert_eq!(reply.action, Some(MessageAction::Reflect));
        assert!(client.prompts()[0].contains("reflective questions"));

        let store = session.store().lock();
        let idea = store.current_idea().unwrap();
        assert_eq!(idea.refinements.len(), 1);
        assert_eq!(idea.refinements[0].question, "/reflect");
        assert_eq!(idea.refinements[0].response, "1. Who wears it?");
        assert_eq!(idea.chat_history[0].kind, MessageType::User);
        assert_eq!(idea.chat_history[1].kind, MessageType::Ai);
    }

    #[tokio::test]
    async fn plain_chat_is_not_a_refinement() {
        let (session, _) = session(ScriptedClient::new().with_reply("Sounds good"));
        let reply = session.send_message("What about kids?").await.unwrap();
        assert_eq!(reply.action, Some(MessageAction::Suggestion));
        assert!(session.store().lock().current_idea().unwrap().refinements.is_empty());
    }

    #[tokio::test]
    async fn creative_reply_carries_suggestions() {
        let reply_text = "### Alternative 1: Commuter\n**Thing**: Watch\n**Sensor**: Location";
        let (session, _) = session(ScriptedClient::new().with_reply(reply_text));
        let reply = session.send_message("/creative").await.unwrap();
        assert_eq!(reply.card_suggestions.len(), 2);
        assert_eq!(reply.card_suggestions[0].cards[0].name, "Watch");
    }

    #[tokio::test]
    async fn failed_chat_appends_system_turn() {
        let (session, _) = session(ScriptedClient::new().with_failure("down"));
        let err = session.send_message("/provoke").await.unwrap_err();
        assert!(matches!(err, SessionError::Generation { .. }));

        let store = session.store().lock();
        let last = store.current_idea().unwrap().chat_history.last().unwrap().clone();
        assert_eq!(last.kind, MessageType::System);
        assert!(last.content.starts_with("Sorry, I had trouble connecting"));
        assert!(store.current_idea().unwrap().refinements.is_empty());
    }

    #[tokio::test]
    async fn empty_input_is_rejected() {
        let (session, _) = session(ScriptedClient::new());
        assert!(matches!(session.send_message("   ").await, Err(SessionError::EmptyMessage)));
    }

    #[tokio::test]
    async fn card_change_is_acknowledged_once() {
        let (session, client) = session(ScriptedClient::new().with_reply("Nice swap"));
        let edited = studio_test_utils::combination(&["t2", "s7"]);
        let changes = session.update_combination(edited).unwrap();
        assert_eq!(changes, vec!["Changed thing: from Clothing to Luggage"]);

        let reply = session.notify_card_change(&changes).await.unwrap().unwrap();
        assert_eq!(reply.content, "Nice swap");
        assert!(client.prompts()[0].contains("Changed thing: from Clothing to Luggage"));
        assert!(session.notify_card_change(&changes).await.unwrap().is_none());

        let store = session.store().lock();
        let idea = store.current_idea().unwrap();
        assert!(!idea.cards_updated);
        assert_eq!(idea.chat_history[0].content, CARD_CHANGE_NOTICE);
    }

    #[test]
    fn renamed_custom_card_is_stored() {
        let (session, _) = session(ScriptedClient::new());
        let current = || session.store().lock().current_idea().unwrap().clone();

        let mut builder = CombinationBuilder::for_idea(&current());
        builder.toggle("t9").unwrap();
        let kite = builder.complete_custom(&CustomCardDraft::new("Kite", "Flies")).unwrap();
        let changes = session.update_combination(builder.build().unwrap()).unwrap();
        assert_eq!(changes, vec!["Added thing: Kite"]);

        let mut builder = CombinationBuilder::for_idea(&current());
        builder.edit_custom(&kite.id, &CustomCardDraft::new("Balloon", "Flies")).unwrap();
        assert!(builder.can_save());
        let edited = builder.build().unwrap();
        let changes = session.update_combination(edited.clone()).unwrap();
        assert_eq!(changes, vec!["Changed thing: from Kite to Balloon"]);

        let idea = current();
        assert!(idea.cards_updated);
        let names: Vec<&str> = idea.card_combination.thing_cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Clothing", "Balloon"]);
        assert!(session.update_combination(edited).unwrap().is_empty());
    }

    #[test]
    fn suggestion_sets_slot_once() {
        let (session, _) = session(ScriptedClient::new());
        let message = session.apply_card_suggestion("t13").unwrap().unwrap();
        assert_eq!(
            message.content,
            "Added Umbrella as a new thing for your idea. The card combination has been updated."
        );
        assert!(session.apply_card_suggestion("t13").unwrap().is_none());
        assert!(matches!(
            session.apply_card_suggestion("zz"),
            Err(SessionError::Catalog(_))
        ));

        let store = session.store().lock();
        let combination = &store.current_idea().unwrap().card_combination;
        assert_eq!(combination.thing.as_ref().unwrap().name, "Umbrella");
        assert_eq!(combination.thing_cards.len(), 2);
    }

    #[tokio::test]
    async fn response_for_deselected_idea_is_discarded() {
        let (session, _) = session(ScriptedClient::new());
        let pending = session
            .prepare(GenerationKind::Chat(Command::Reflect), "/reflect", |b, _| {
                b.command(Command::Reflect, "/reflect").unwrap_or_default()
            })
            .unwrap();

        let other = {
            let mut store = session.store().lock();
            let other = store.create_idea(IdeaDraft::new().with_title("Other")).unwrap();
            store.set_current_idea(Some(other.id.clone()));
            other.id
        };

        let err = session
            .apply_chat(&pending, Command::Reflect, Ok("late answer".to_string()))
            .unwrap_err();
        assert!(matches!(err, SessionError::Superseded { .. }));

        let store = session.store().lock();
        assert!(store.idea(&pending.idea_id).unwrap().refinements.is_empty());
        assert!(store.idea(&other).unwrap().chat_history.is_empty());
    }

    #[tokio::test]
    async fn failure_for_deselected_idea_still_reports_generation_error() {
        let (session, _) = session(ScriptedClient::new());
        let pending = session
            .prepare(GenerationKind::Chat(Command::Provoke), "/provoke", |b, _| {
                b.command(Command::Provoke, "/provoke").unwrap_or_default()
            })
            .unwrap();
        let other = {
            let mut store = session.store().lock();
            let other = store.create_idea(IdeaDraft::new().with_title("Other")).unwrap();
            store.set_current_idea(Some(other.id.clone()));
            other.id
        };

        let source = LlmError::Status { status: 500, message: "down".to_string() };
        let err = session.apply_chat(&pending, Command::Provoke, Err(source)).unwrap_err();
        assert!(matches!(err, SessionError::Generation { .. }));
        assert!(err.user_message().contains("Ollama"));

        let store = session.store().lock();
        assert!(store.idea(&pending.idea_id).unwrap().chat_history.is_empty());
        assert!(store.idea(&other).unwrap().chat_history.is_empty());
    }
}
