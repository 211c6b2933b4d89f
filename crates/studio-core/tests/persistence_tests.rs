//! Round-trip persistence through both storage backends

use pretty_assertions::assert_eq;
use std::sync::Arc;
use studio_cards::{CardCategory, Catalog};
use studio_core::prelude::*;
use studio_core::{keys, EvaluationCriteria, FileStore, KeyValueStore, MemoryStore};

fn populate(store: &mut WorkshopStore, evaluations: &mut EvaluationStore) -> IdeaId {
    let workshop = store.create_workshop(
        WorkshopDraft::new("Demo")
            .with_date("2024-05-01")
            .with_facilitator("Ana")
            .with_mission(Catalog::mission("m1").unwrap())
            .with_persona(Catalog::persona("p1").unwrap()),
    );
    store.set_current_workshop(Some(workshop.id.clone()));

    let mut combination = CardCombination::new();
    combination.set_category(CardCategory::Thing, vec![Catalog::card("t1").unwrap()]);
    combination.set_category(CardCategory::Sensor, vec![Catalog::card("s7").unwrap()]);
    let idea = store
        .create_idea(
            IdeaDraft::new()
                .with_title("Clothing with Motion")
                .with_description("test")
                .with_combination(combination),
        )
        .unwrap();

    store.update_idea(
        &idea.id,
        IdeaPatch::default()
            .with_chat_history(vec![ChatMessage::user("hi"), ChatMessage::ai("hello")])
            .with_storyboard(Storyboard::from_descriptions(idea.id.clone(), ["a", "b", "c"])),
    );

    evaluations.toggle_criteria(&idea.id, "c1");
    evaluations.update_criteria_responses(
        &idea.id,
        vec![EvaluationCriteria::new(Catalog::criteria_card("c1").unwrap(), "fine")],
    );
    evaluations
        .create_custom_criteria(&idea.id, "Repairability", "Can it be fixed?", "How?")
        .unwrap();
    idea.id
}

fn assert_reloaded(
    storage: Arc<dyn KeyValueStore>,
    original: &WorkshopStore,
    evaluations: &EvaluationStore,
    idea_id: &IdeaId,
) {
    let reloaded = WorkshopStore::open(Arc::clone(&storage));
    let reloaded_evaluations = EvaluationStore::open(storage);

    assert_eq!(reloaded.workshops(), original.workshops());
    assert_eq!(reloaded.ideas(), original.ideas());
    assert_eq!(reloaded_evaluations.evaluations(), evaluations.evaluations());
    assert_eq!(
        reloaded_evaluations.selected_criteria(idea_id),
        evaluations.selected_criteria(idea_id)
    );
    assert_eq!(reloaded_evaluations.custom_criteria(idea_id).len(), 1);

    let idea = reloaded.idea(idea_id).unwrap();
    let steps: Vec<&str> = idea.storyboard_steps();
    assert_eq!(steps, vec!["a", "b", "c"]);
    assert_eq!(idea.chat_history[1].content, "hello");
}

#[test]
fn memory_store_round_trip() {
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let mut store = WorkshopStore::open(Arc::clone(&storage));
    let mut evaluations = EvaluationStore::open(Arc::clone(&storage));
    let idea_id = populate(&mut store, &mut evaluations);

    assert_reloaded(storage, &store, &evaluations, &idea_id);
}

#[test]
fn file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(dir.path()).unwrap());
    let mut store = WorkshopStore::open(Arc::clone(&storage));
    let mut evaluations = EvaluationStore::open(Arc::clone(&storage));
    let idea_id = populate(&mut store, &mut evaluations);

    for key in [keys::WORKSHOPS, keys::IDEAS, keys::EVALUATIONS, keys::SELECTED_CRITERIA] {
        assert!(dir.path().join(format!("{key}.json")).exists(), "missing {key}");
    }
    assert_reloaded(storage, &store, &evaluations, &idea_id);
}

#[test]
fn persisted_json_is_camel_case() {
    let storage = Arc::new(MemoryStore::new());
    let mut store = WorkshopStore::open(storage.clone());
    let mut evaluations = EvaluationStore::open(storage.clone());
    populate(&mut store, &mut evaluations);

    let raw = storage.get(keys::IDEAS).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let idea = &json[0];
    assert!(idea.get("workshopId").is_some());
    assert!(idea.get("cardCombination").is_some());
    assert_eq!(idea["cardCombination"]["thing"]["name"], "Clothing");
    assert!(idea["createdAt"].as_str().unwrap().contains('T'));
}

#[test]
fn malformed_storage_starts_empty() {
    let storage = Arc::new(
        MemoryStore::new()
            .with_entry(keys::WORKSHOPS, "[{\"broken\":")
            .with_entry(keys::SELECTED_CRITERIA, "42"),
    );
    let store = WorkshopStore::open(storage.clone());
    let evaluations = EvaluationStore::open(storage);
    assert!(store.workshops().is_empty());
    assert!(evaluations.selected_criteria(&IdeaId::from("x")).is_empty());
}
