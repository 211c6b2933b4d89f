//! Subcommand handlers

use anyhow::{anyhow, bail, Context};
use clap::ArgMatches;
use parking_lot::Mutex;
use std::sync::Arc;
use studio_cards::{CardCategory, Catalog};
use studio_core::{
    CombinationBuilder, EvaluationStore, FileStore, IdeaDraft, IdeaId, KeyValueStore, WorkshopDraft,
    WorkshopId, WorkshopStore, WorkshopSummary,
};
use studio_llm::OllamaClient;
use studio_session::{StudioConfig, StudioSession};

pub(crate) struct App {
    session: StudioSession,
}

fn required<'a>(args: &'a ArgMatches, name: &str) -> anyhow::Result<&'a str> {
    args.get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing --{name}"))
}

impl App {
    pub(crate) fn open(config: &StudioConfig) -> anyhow::Result<Self> {
        let storage: Arc<dyn KeyValueStore> = Arc::new(
            FileStore::open(&config.data_dir)
                .with_context(|| format!("opening data dir {}", config.data_dir.display()))?,
        );
        let client = OllamaClient::new(config.llm.clone())?;
        let session = StudioSession::new(
            Arc::new(Mutex::new(WorkshopStore::open(storage.clone()))),
            Arc::new(Mutex::new(EvaluationStore::open(storage))),
            Arc::new(client),
        );
        Ok(Self { session })
    }

    /// Point the session at an idea and its workshop
    fn select_idea(&self, args: &ArgMatches) -> anyhow::Result<IdeaId> {
        let id = IdeaId::from(required(args, "idea")?);
        let mut store = self.session.store().lock();
        let workshop_id = store
            .idea(&id)
            .map(|idea| idea.workshop_id.clone())
            .ok_or_else(|| anyhow!("unknown idea {id}"))?;
        store.set_current_workshop(Some(workshop_id));
        store.set_current_idea(Some(id.clone()));
        Ok(id)
    }

    pub(crate) fn workshop(&self, args: &ArgMatches) -> anyhow::Result<()> {
        let mut store = self.session.store().lock();
        match args.subcommand() {
            Some(("create", args)) => {
                let mut draft = WorkshopDraft::new(required(args, "name")?);
                if let Some(description) = args.get_one::<String>("description") {
                    draft = draft.with_description(description);
                }
                if let Some(facilitator) = args.get_one::<String>("facilitator") {
                    draft = draft.with_facilitator(facilitator);
                }
                if let Some(date) = args.get_one::<String>("date") {
                    draft = draft.with_date(date);
                }
                if let Some(id) = args.get_one::<String>("mission") {
                    draft = draft.with_mission(Catalog::mission(id).ok_or_else(|| anyhow!("unknown mission {id}"))?);
                }
                if let Some(id) = args.get_one::<String>("persona") {
                    draft = draft.with_persona(Catalog::persona(id).ok_or_else(|| anyhow!("unknown persona {id}"))?);
                }
                if let Some(id) = args.get_one::<String>("scenario") {
                    draft = draft.with_scenario(Catalog::scenario(id).ok_or_else(|| anyhow!("unknown scenario {id}"))?);
                }
                let workshop = store.create_workshop(draft);
                println!("{}", workshop.id);
            }
            Some(("list", _)) => {
                for workshop in store.workshops() {
                    let ideas = store.ideas_for_workshop(&workshop.id).len();
                    println!("{}  {}  ({ideas} ideas)", workshop.id, workshop.name);
                }
            }
            Some(("show", args)) => {
                let id = WorkshopId::from(required(args, "id")?);
                let workshop = store.workshop(&id).ok_or_else(|| anyhow!("unknown workshop {id}"))?;
                println!("{}", workshop.name);
                if !workshop.description.is_empty() {
                    println!("{}", workshop.description);
                }
                if let Some(mission) = &workshop.mission {
                    println!("Mission: {} ({})", mission.name, mission.goal);
                }
                if let Some(persona) = &workshop.persona {
                    println!("Persona: {}", persona.name);
                }
                if let Some(scenario) = &workshop.scenario {
                    println!("Scenario: {}", scenario.name);
                }
                println!();
                for idea in store.ideas_for_workshop(&id) {
                    println!("{}  {}  [{}]", idea.id, idea.title, idea.card_combination.summary_line());
                }
            }
            Some(("delete", args)) => {
                let id = WorkshopId::from(required(args, "id")?);
                let idea_ids: Vec<IdeaId> = store
                    .ideas_for_workshop(&id)
                    .iter()
                    .map(|idea| idea.id.clone())
                    .collect();
                store.delete_workshop(&id);
                let mut evaluations = self.session.evaluations().lock();
                for idea_id in &idea_ids {
                    evaluations.remove_idea(idea_id);
                }
            }
            _ => {}
        }
        Ok(())
    }

    pub(crate) fn idea(&self, args: &ArgMatches) -> anyhow::Result<()> {
        match args.subcommand() {
            Some(("create", args)) => {
                let workshop_id = WorkshopId::from(required(args, "workshop")?);
                let mut builder = CombinationBuilder::new().with_description(required(args, "description")?);
                for card_id in args.get_many::<String>("cards").into_iter().flatten() {
                    builder.toggle(card_id.trim())?;
                }
                let combination = builder.build()?;

                let mut store = self.session.store().lock();
                if store.workshop(&workshop_id).is_none() {
                    bail!("unknown workshop {workshop_id}");
                }
                let title = match args.get_one::<String>("title") {
                    Some(title) => title.clone(),
                    None => builder.suggested_title(store.ideas_for_workshop(&workshop_id).len()),
                };
                store.set_current_workshop(Some(workshop_id));
                let idea = store.create_idea(
                    IdeaDraft::new()
                        .with_title(title)
                        .with_description(builder.description())
                        .with_combination(combination),
                )?;
                println!("{}", idea.id);
            }
            Some(("list", args)) => {
                let workshop_id = WorkshopId::from(required(args, "workshop")?);
                let store = self.session.store().lock();
                for idea in store.ideas_for_workshop(&workshop_id) {
                    println!("{}  {}  [{}]", idea.id, idea.title, idea.card_combination.summary_line());
                }
            }
            Some(("delete", args)) => {
                self.session.delete_idea(&IdeaId::from(required(args, "id")?));
            }
            _ => {}
        }
        Ok(())
    }

    pub(crate) async fn chat(&self, args: &ArgMatches) -> anyhow::Result<()> {
        self.select_idea(args)?;
        if let Some(welcome) = self.session.ensure_welcome().await? {
            println!("{}\n", welcome.content);
        }
        let message = required(args, "message")?;
        match self.session.send_message(message).await {
            Ok(reply) => {
                println!("{}", reply.content);
                for suggestion in &reply.card_suggestions {
                    let names: Vec<String> = suggestion
                        .cards
                        .iter()
                        .map(|card| format!("{} ({})", card.name, card.id))
                        .collect();
                    println!("Suggested {}: {}", suggestion.category.label(), names.join(", "));
                }
                Ok(())
            }
            Err(e) => bail!(e.user_message()),
        }
    }

    pub(crate) async fn storyboard(&self, args: &ArgMatches) -> anyhow::Result<()> {
        self.select_idea(args)?;
        match self.session.generate_storyboard().await {
            Ok(storyboard) => {
                for step in &storyboard.steps {
                    println!("{}. {}", step.order, step.description);
                }
                Ok(())
            }
            Err(e) => bail!(e.user_message()),
        }
    }

    pub(crate) async fn pitch(&self, args: &ArgMatches) -> anyhow::Result<()> {
        self.select_idea(args)?;
        match self.session.generate_elevator_pitch().await {
            Ok(pitch) => {
                println!("{}", pitch.trim_end());
                Ok(())
            }
            Err(e) => bail!(e.user_message()),
        }
    }

    pub(crate) fn criteria(&self, args: &ArgMatches) -> anyhow::Result<()> {
        let idea_id = self.select_idea(args)?;
        let mut evaluations = self.session.evaluations().lock();
        for criteria_id in args.get_many::<String>("toggle").into_iter().flatten() {
            let outcome = evaluations.toggle_criteria(&idea_id, criteria_id);
            tracing::info!(criteria_id = %criteria_id, ?outcome, "criteria toggled");
        }
        for answer in args.get_many::<String>("answer").into_iter().flatten() {
            let (criteria_id, text) = answer
                .split_once('=')
                .ok_or_else(|| anyhow!("answer must look like c1=text, got {answer}"))?;
            if !evaluations.set_response(&idea_id, criteria_id.trim(), text.trim()) {
                bail!("unknown criteria {criteria_id}");
            }
        }
        for criteria in evaluations.responses_for_selection(&idea_id) {
            println!("{}: {}", criteria.criteria_card.name, criteria.criteria_card.question);
            if !criteria.response.is_empty() {
                println!("  > {}", criteria.response);
            }
        }
        Ok(())
    }

    pub(crate) fn summary(&self, args: &ArgMatches) -> anyhow::Result<()> {
        let workshop_id = WorkshopId::from(required(args, "workshop")?);
        let store = self.session.store().lock();
        let evaluations = self.session.evaluations().lock();
        let summary = WorkshopSummary::build(&store, &evaluations, &workshop_id)
            .ok_or_else(|| anyhow!("unknown workshop {workshop_id}"))?;

        if args.get_flag("json") {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }
        println!("{} ({} ideas)\n", summary.name, summary.ideas.len());
        for idea in &summary.ideas {
            println!(
                "{}  [{}]  storyboard {}/8, criteria {}, refinements {}, pitch {}",
                idea.title,
                idea.combination,
                idea.storyboard_steps,
                idea.selected_criteria,
                idea.refinements,
                if idea.has_pitch { "yes" } else { "no" }
            );
        }
        for category in CardCategory::ALL {
            let usage = summary.usage(category);
            if usage.is_empty() {
                continue;
            }
            let line: Vec<String> = usage.iter().map(|u| format!("{} x{}", u.name, u.count)).collect();
            println!("{}: {}", category.label(), line.join(", "));
        }
        Ok(())
    }
}
