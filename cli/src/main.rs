use anyhow::Result;
use clap::Parser;
use mood_provider::{MoodCard, MoodProvider};
use tracing::debug;

mod cli;
mod config;
mod logging;
mod output;

use crate::cli::Args;
use crate::output::{loading_spinner, print_mood_card, print_mood_json};

/// Main function - fetches today's mood and prints the card
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let config = config::resolve(&args)?;
    debug!(
        model = config.model_name(),
        has_key = config.api_key.is_some(),
        "Configuration resolved"
    );

    let provider = MoodProvider::from_config(&config);
    let mut card = MoodCard::new();

    // Keep the terminal quiet when output is scripted
    let spinner = (!args.json).then(loading_spinner);
    let mood = card.activate(&provider).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if args.json {
        print_mood_json(&mood)?;
    } else {
        print_mood_card(&mood);
    }

    Ok(())
}
