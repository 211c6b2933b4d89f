//! End-to-end workshop flow with a scripted generative client

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use studio_cards::Catalog;
use studio_core::{
    CombinationBuilder, EvaluationStore, FileStore, IdeaDraft, KeyValueStore, Phase, WorkshopDraft,
    WorkshopStore,
};
use studio_session::prelude::*;
use studio_test_utils::ScriptedClient;

#[tokio::test]
async fn demo_workshop_storyboard_has_eight_steps() {
    let mut store = WorkshopStore::in_memory();
    let workshop = store.create_workshop(
        WorkshopDraft::new("Demo")
            .with_persona(Catalog::persona("p3").unwrap())
            .with_mission(Catalog::mission("m1").unwrap()),
    );
    store.set_current_workshop(Some(workshop.id.clone()));

    let mut builder = CombinationBuilder::new().with_description("test");
    builder.toggle("t1").unwrap();
    builder.toggle("s7").unwrap();
    let idea = store
        .create_idea(IdeaDraft::new().with_description("test").with_combination(builder.build().unwrap()))
        .unwrap();
    assert_eq!(idea.card_combination.thing.as_ref().unwrap().name, "Clothing");
    assert_eq!(idea.workshop_id, workshop.id);
    store.set_current_idea(Some(idea.id.clone()));

    let client = Arc::new(
        ScriptedClient::new().with_reply("1. Alex puts on the shirt\n2. Alex goes running\n3. The shirt vibrates"),
    );
    let session = StudioSession::new(
        Arc::new(Mutex::new(store)),
        Arc::new(Mutex::new(EvaluationStore::in_memory())),
        client.clone(),
    );

    let storyboard = session.generate_storyboard().await.unwrap();
    let steps: Vec<&str> = storyboard.steps.iter().map(|s| s.description.as_str()).collect();
    assert_eq!(steps.len(), 8);
    assert_eq!(&steps[..3], &["Alex puts on the shirt", "Alex goes running", "The shirt vibrates"]);
    for (i, step) in steps.iter().enumerate().skip(3) {
        assert_eq!(*step, format!("Step {}: Continue the journey.", i + 1));
    }
    let orders: Vec<u32> = storyboard.steps.iter().map(|s| s.order).collect();
    assert_eq!(orders, (1..=8).collect::<Vec<u32>>());

    let prompts = client.prompts();
    assert!(prompts[0].contains("Workshop: \"Demo\""));
    assert!(prompts[0].contains("- Thing: Clothing"));
    assert!(prompts[0].contains("- Sensor: Motion"));
}

#[tokio::test]
async fn session_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(dir.path()).unwrap());

    let (workshop_id, idea_id) = {
        let mut store = WorkshopStore::open(storage.clone());
        let workshop = store.create_workshop(WorkshopDraft::new("Persisted"));
        store.set_current_workshop(Some(workshop.id.clone()));
        let idea = store.create_idea(IdeaDraft::new().with_title("Lamp")).unwrap();
        store.set_current_idea(Some(idea.id.clone()));
        store.set_current_phase(Phase::Refinement);

        let session = StudioSession::new(
            Arc::new(Mutex::new(store)),
            Arc::new(Mutex::new(EvaluationStore::open(storage.clone()))),
            Arc::new(ScriptedClient::new().with_reply("Welcome!").with_reply("Think about night use.")),
        );
        session.ensure_welcome().await.unwrap();
        session.send_message("/reflect").await.unwrap();
        (workshop.id, idea.id)
    };

    let reopened = WorkshopStore::open(storage);
    let idea = reopened.idea(&idea_id).unwrap();
    assert_eq!(idea.workshop_id, workshop_id);
    assert_eq!(idea.chat_history.len(), 3);
    assert_eq!(idea.chat_history[0].content, "Welcome!");
    assert_eq!(idea.refinements.len(), 1);
}

#[tokio::test]
async fn deleting_idea_drops_its_criteria() {
    let (store, _, idea) = studio_test_utils::setup_demo_idea();
    let session = StudioSession::new(
        Arc::new(Mutex::new(store)),
        Arc::new(Mutex::new(EvaluationStore::in_memory())),
        Arc::new(ScriptedClient::new()),
    );
    session.evaluations().lock().toggle_criteria(&idea.id, "c2");
    session.delete_idea(&idea.id);

    assert!(session.store().lock().idea(&idea.id).is_none());
    assert!(session.evaluations().lock().selected_criteria(&idea.id).is_empty());
    assert!(matches!(session.generate_storyboard().await, Err(SessionError::NoCurrentIdea)));
}
