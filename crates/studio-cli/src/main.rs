use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use studio_session::StudioConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

fn cli() -> Command {
    let idea_arg = Arg::new("idea")
        .long("idea")
        .required(true)
        .help("Idea id");
    let workshop_arg = Arg::new("workshop")
        .long("workshop")
        .required(true)
        .help("Workshop id");

    Command::new("studio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Card-based ideation workshops with a local language model")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding workshop data"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand(
            Command::new("workshop")
                .about("Manage workshops")
                .subcommand_required(true)
                .subcommand(
                    Command::new("create")
                        .about("Create a workshop")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("facilitator").long("facilitator"))
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("mission").long("mission").help("Mission card id, e.g. m1"))
                        .arg(Arg::new("persona").long("persona").help("Persona card id, e.g. p3"))
                        .arg(Arg::new("scenario").long("scenario").help("Scenario card id, e.g. sc1")),
                )
                .subcommand(Command::new("list").about("List workshops"))
                .subcommand(
                    Command::new("show")
                        .about("Show a workshop and its ideas")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete a workshop and its ideas")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("idea")
                .about("Manage ideas")
                .subcommand_required(true)
                .subcommand(
                    Command::new("create")
                        .about("Create an idea from catalog cards")
                        .arg(workshop_arg.clone())
                        .arg(
                            Arg::new("cards")
                                .long("cards")
                                .required(true)
                                .value_delimiter(',')
                                .help("Card ids, e.g. t1,s7"),
                        )
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("title").long("title")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List ideas of a workshop")
                        .arg(workshop_arg.clone()),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete an idea")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("chat")
                .about("Send a refinement chat message (/reflect, /creative, /provoke, /help)")
                .arg(idea_arg.clone())
                .arg(Arg::new("message").required(true)),
        )
        .subcommand(
            Command::new("storyboard")
                .about("Generate an 8-step storyboard")
                .arg(idea_arg.clone()),
        )
        .subcommand(
            Command::new("pitch")
                .about("Generate an elevator pitch")
                .arg(idea_arg.clone()),
        )
        .subcommand(
            Command::new("criteria")
                .about("Select evaluation criteria and record answers")
                .arg(idea_arg)
                .arg(
                    Arg::new("toggle")
                        .long("toggle")
                        .action(ArgAction::Append)
                        .help("Select or deselect a criteria card, e.g. c1"),
                )
                .arg(
                    Arg::new("answer")
                        .long("answer")
                        .action(ArgAction::Append)
                        .help("Record an answer as <criteria-id>=<text>"),
                ),
        )
        .subcommand(
            Command::new("summary")
                .about("Summarize a workshop")
                .arg(workshop_arg)
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<StudioConfig> {
    let path = matches.get_one::<PathBuf>("config");
    let mut config = StudioConfig::load(path.map(PathBuf::as_path))
        .with_context(|| "loading configuration")?;
    if let Some(dir) = matches.get_one::<PathBuf>("data-dir") {
        config.data_dir.clone_from(dir);
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-json"));

    let config = load_config(&matches)?;
    tracing::debug!(data_dir = %config.data_dir.display(), model = %config.llm.model, "configuration loaded");
    let app = commands::App::open(&config)?;

    match matches.subcommand() {
        Some(("workshop", args)) => app.workshop(args),
        Some(("idea", args)) => app.idea(args),
        Some(("chat", args)) => app.chat(args).await,
        Some(("storyboard", args)) => app.storyboard(args).await,
        Some(("pitch", args)) => app.pitch(args).await,
        Some(("criteria", args)) => app.criteria(args),
        Some(("summary", args)) => app.summary(args),
        _ => Ok(()),
    }
}
