use anyhow::{Context, Result};
use mood_core::config::{MoodConfig, get_default_config_file};
use std::path::PathBuf;

use crate::cli::Args;

pub const APP_NAME: &str = "daily-mood";

/// Builds the effective config: file, then command-line flags, then the
/// environment for a still-missing API key.
pub fn resolve(args: &Args) -> Result<MoodConfig> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => default_path()?,
    };

    let file_config = MoodConfig::load_from_file(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    let overrides = MoodConfig {
        model_name: args.model.clone(),
        temperature: args.temperature,
        ..Default::default()
    };

    Ok(file_config.merge(&overrides).with_env_overrides())
}

fn default_path() -> Result<PathBuf> {
    get_default_config_file(APP_NAME).context("Failed to determine default config path")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api_key = \"file-key\"\nmodel_name = \"gemini-2.0-flash\"\ntemperature = 0.9"
        )
        .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let args =
            Args::try_parse_from(["daily-mood", "--config", path.as_str(), "--model", "gemini-2.5-pro"])
                .unwrap();

        let config = resolve(&args).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("file-key"));
        assert_eq!(config.model_name(), "gemini-2.5-pro");
        assert_eq!(config.temperature(), 0.9);
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "model_name = [").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let args = Args::try_parse_from(["daily-mood", "--config", path.as_str()]).unwrap();

        assert!(resolve(&args).is_err());
    }
}
