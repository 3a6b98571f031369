//! Bloom stories - replays widget stories from TOML files.
//!
//! Loads widget defaults from `widgets.toml`, replays every story given on
//! the command line and prints its transcript (or JSON with `--json`).

use std::path::PathBuf;

use bloom_core::WidgetConfig;
use bloom_stories::{replay, Outcome, Story, StoryError};
use clap::Parser;

/// Replay scripted widget interactions
#[derive(Parser, Debug)]
#[command(name = "bloom-stories")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Story files to replay
    #[arg(required = true)]
    stories: Vec<PathBuf>,

    /// Print outcomes as JSON
    #[arg(long)]
    json: bool,

    /// Widget config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<(), StoryError> {
    let config = match &cli.config {
        Some(path) => WidgetConfig::load_from(path)?,
        None => WidgetConfig::load()?,
    };

    let mut outcomes: Vec<Outcome> = Vec::with_capacity(cli.stories.len());
    for path in &cli.stories {
        let story = Story::load(path)?;
        outcomes.push(replay(&story, &config));
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        for outcome in &outcomes {
            println!("{}\n", outcome.transcript_text());
        }
    }

    Ok(())
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        tracing::error!("Story replay failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
