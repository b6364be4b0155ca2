//! Binary entrypoint for the questfolio CLI.
//!
//! Commands:
//! - `play` - run the interactive adventure in the terminal
//! - `init` - create a starter `config.toml`
//! - `inspect [--json]` - validate the story graph and print a summary
//!
//! See the library crate docs for module-level details: `questfolio::`.
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use questfolio::config::Config;
use questfolio::story::{portfolio_story, Story};
use questfolio::ui;

#[derive(Parser)]
#[command(name = "questfolio")]
#[command(about = "A personal portfolio presented as a text adventure")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the adventure
    Play,
    /// Initialize a new configuration file
    Init,
    /// Validate the story graph and print a summary
    Inspect {
        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Init = cli.command {
        Config::create_default(&cli.config).await?;
        println!("Wrote default configuration to {}", cli.config);
        return Ok(());
    }

    // A missing config file is fine; defaults cover everything.
    let config = Config::load(&cli.config).await.unwrap_or_default();
    init_logging(&config, cli.verbose);

    let story = portfolio_story()?;
    story.validate()?;

    match cli.command {
        Commands::Play => {
            info!("Starting questfolio v{}", env!("CARGO_PKG_VERSION"));
            ui::app::run(&config, Arc::new(story)).await?;
        }
        Commands::Inspect { json } => {
            inspect(&story, json)?;
        }
        Commands::Init => unreachable!("handled above"),
    }

    Ok(())
}

fn init_logging(config: &Config, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    let level = match verbosity {
        0 => config
            .logging
            .level
            .parse()
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);

    // Route logs to the configured file so they never interleave with the
    // story transcript on stdout.
    if let Some(ref path) = config.logging.file {
        match std::fs::OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => {
                eprintln!("Could not open log file {}: {} (logging to stderr)", path, e);
            }
        }
    }

    let _ = builder.try_init();
}

fn inspect(story: &Story, json: bool) -> Result<()> {
    if json {
        let scenes: Vec<_> = story
            .registry()
            .ids()
            .filter_map(|id| story.registry().get(id))
            .map(|scene| {
                serde_json::json!({
                    "id": scene.id,
                    "title": scene.title,
                    "choices": scene.choices.len(),
                    "has_on_enter": scene.on_enter.is_some(),
                })
            })
            .collect();
        let summary = serde_json::json!({
            "start_scene": story.start_scene(),
            "scene_count": story.registry().len(),
            "item_count": story.items().len(),
            "unlock_rules": story.unlock_rules(),
            "scenes": scenes,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Story graph OK");
    println!("  start scene: {}", story.start_scene());
    println!("  scenes:      {}", story.registry().len());
    println!("  items:       {}", story.items().len());
    for rule in story.unlock_rules() {
        println!("  unlock:      {} items -> {}", rule.threshold, rule.unlocks);
    }
    for id in story.registry().ids() {
        if let Some(scene) = story.registry().get(id) {
            println!("    {:<16} {} choice(s)", scene.id, scene.choices.len());
        }
    }
    Ok(())
}
