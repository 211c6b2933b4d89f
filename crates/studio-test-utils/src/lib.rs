//! Testing utilities for the ideation studio workspace
//!
//! Shared fixtures and a scripted generative client.

#![allow(missing_docs)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use studio_cards::{CardCategory, Catalog};
use studio_core::{CardCombination, Idea, IdeaDraft, Workshop, WorkshopDraft, WorkshopStore};
use studio_llm::{GenerativeClient, LlmError, DEFAULT_MODEL};

/// Combination of catalog cards by id; unknown ids are skipped
pub fn combination(ids: &[&str]) -> CardCombination {
    let mut combination = CardCombination::new();
    for category in CardCategory::ALL {
        let cards = ids
            .iter()
            .filter_map(|id| Catalog::card(id))
            .filter(|card| card.category == category)
            .collect();
        combination.set_category(category, cards);
    }
    combination
}

/// In-memory store with a current "Demo" workshop (mission m1, persona p3)
pub fn setup_demo_workshop() -> (WorkshopStore, Workshop) {
    let mut store = WorkshopStore::in_memory();
    let workshop = store.create_workshop(
        WorkshopDraft::new("Demo")
            .with_mission(Catalog::mission("m1").unwrap())
            .with_persona(Catalog::persona("p3").unwrap()),
    );
    store.set_current_workshop(Some(workshop.id.clone()));
    (store, workshop)
}

/// Demo workshop plus a current idea built from Clothing + Motion
pub fn setup_demo_idea() -> (WorkshopStore, Workshop, Idea) {
    let (mut store, workshop) = setup_demo_workshop();
    let idea = store
        .create_idea(
            IdeaDraft::new()
                .with_title("Smart Shirt")
                .with_description("test")
                .with_combination(combination(&["t1", "s7"])),
        )
        .unwrap();
    store.set_current_idea(Some(idea.id.clone()));
    (store, workshop, idea)
}

#[derive(Debug)]
enum Scripted {
    Reply(String),
    Failure(String),
}

/// Generative client answering from a queue and recording prompts
///
/// An exhausted queue answers with a failure.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    script: Mutex<VecDeque<Scripted>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.push_reply(text);
        self
    }

    #[must_use]
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.push_failure(message);
        self
    }

    pub fn push_reply(&self, text: impl Into<String>) {
        self.script.lock().push_back(Scripted::Reply(text.into()));
    }

    pub fn push_failure(&self, message: impl Into<String>) {
        self.script.lock().push_back(Scripted::Failure(message.into()));
    }

    /// Prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().len()
    }
}

#[async_trait]
impl GenerativeClient for ScriptedClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().push(prompt.to_string());
        match self.script.lock().pop_front() {
            Some(Scripted::Reply(text)) => Ok(text),
            Some(Scripted::Failure(message)) => Err(LlmError::Status {
                status: 500,
                message,
            }),
            None => Err(LlmError::Service("no scripted reply left".to_string())),
        }
    }

    fn model(&self) -> &str {
        DEFAULT_MODEL
    }
}
