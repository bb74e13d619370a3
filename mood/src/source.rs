use async_trait::async_trait;
use mood_core::{GeminiClient, GeminiError, MoodConfig};
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::payload::MoodPayload;

pub const DEFAULT_MOOD_PROMPT: &str = "Generate a sophisticated, 'Old Money aesthetic' daily mood card content for a user in a city like Paris or New York. It is currently a pleasant afternoon.";

/// Failure to obtain raw mood text from a source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoodSourceError {
    #[error("Missing or rejected credentials: {0}")]
    MissingCredentials(String),

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Empty response: {0}")]
    EmptyResponse(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<GeminiError> for MoodSourceError {
    fn from(err: GeminiError) -> Self {
        if err.is_credential_error() {
            return MoodSourceError::MissingCredentials(err.to_string());
        }
        match err {
            GeminiError::HttpError {
                status_code,
                message,
            } => MoodSourceError::Http {
                status: status_code,
                message,
            },
            GeminiError::ResponseError(msg) => MoodSourceError::EmptyResponse(msg),
            GeminiError::ParsingError(msg) => MoodSourceError::MalformedResponse(msg),
            other => MoodSourceError::Transport(other.to_string()),
        }
    }
}

/// Anything that can produce the raw text of a daily mood
#[async_trait]
pub trait MoodSource: Send + Sync + Debug {
    /// Fetch the model's raw text. Parsing is the caller's job.
    async fn fetch_raw(&self) -> Result<String, MoodSourceError>;

    /// Get the source name (for logging/debugging)
    fn name(&self) -> &'static str;
}

/// Type alias for Arc-wrapped MoodSource trait objects
pub type MoodSourceRef = Arc<dyn MoodSource>;

/// Mood source backed by Gemini structured output
#[derive(Debug, Clone)]
pub struct GeminiMoodSource {
    client: GeminiClient,
    prompt: String,
    temperature: f32,
}

impl GeminiMoodSource {
    pub fn new(config: &MoodConfig) -> Result<Self, MoodSourceError> {
        let client = GeminiClient::new(config)?;

        Ok(Self {
            client,
            prompt: config
                .prompt
                .clone()
                .unwrap_or_else(|| DEFAULT_MOOD_PROMPT.to_string()),
            temperature: config.temperature(),
        })
    }
}

#[async_trait]
impl MoodSource for GeminiMoodSource {
    async fn fetch_raw(&self) -> Result<String, MoodSourceError> {
        debug!(model = self.client.model_name(), "Requesting daily mood");
        let text = self
            .client
            .generate_structured(&self.prompt, MoodPayload::response_schema(), self.temperature)
            .await?;
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

/// Stands in when the real source could not be built; every fetch repeats the construction error.
#[derive(Debug, Clone)]
pub struct UnavailableSource {
    reason: MoodSourceError,
}

impl UnavailableSource {
    pub fn new(reason: MoodSourceError) -> Self {
        Self { reason }
    }
}

#[async_trait]
impl MoodSource for UnavailableSource {
    async fn fetch_raw(&self) -> Result<String, MoodSourceError> {
        Err(self.reason.clone())
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}
