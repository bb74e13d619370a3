use clap::Parser;
use std::path::PathBuf;

/// Show today's mood card
#[derive(Parser, Debug)]
#[command(name = "daily-mood", author, version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file (defaults to ~/.config/daily-mood/config.toml)
    #[arg(short, long, env = "DAILY_MOOD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Gemini model to ask for the mood
    #[arg(short, long, env = "DAILY_MOOD_MODEL")]
    pub model: Option<String>,

    /// Sampling temperature for generation
    #[arg(short, long)]
    pub temperature: Option<f32>,

    /// Print the mood as JSON instead of a card
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "DAILY_MOOD_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}
