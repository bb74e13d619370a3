use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use mood_provider::MoodPayload;
use std::time::Duration;

/// Spinner shown while the card is loading
pub fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.yellow} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Curating your day...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Print the mood card to the terminal
pub fn print_mood_card(mood: &MoodPayload) {
    println!();
    println!("  {}", "TODAY'S MOOD".dimmed());
    println!("  {}", mood.title.blue().bold());
    println!("  {}", mood.subtitle.green().italic());
    println!();
    println!("  {}", mood.description);
    println!();
}

pub fn print_mood_json(mood: &MoodPayload) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(mood)?);
    Ok(())
}
