use mood_core::MoodConfig;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::payload::{MoodParseError, MoodPayload};
use crate::source::{GeminiMoodSource, MoodSourceError, MoodSourceRef, UnavailableSource};

/// Which path produced a mood
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodOutcome {
    Live(MoodPayload),
    Fallback(FallbackReason),
}

/// Internal diagnostic for a fallback; never shown to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    #[error(transparent)]
    Source(MoodSourceError),

    #[error(transparent)]
    Parse(MoodParseError),
}

impl FallbackReason {
    /// Short label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            FallbackReason::Source(MoodSourceError::MissingCredentials(_)) => "credentials",
            FallbackReason::Source(MoodSourceError::Transport(_)) => "transport",
            FallbackReason::Source(MoodSourceError::Http { .. }) => "http",
            FallbackReason::Source(MoodSourceError::EmptyResponse(_)) => "empty_response",
            FallbackReason::Source(MoodSourceError::MalformedResponse(_)) => "malformed",
            FallbackReason::Parse(MoodParseError::Malformed(_)) => "malformed",
            FallbackReason::Parse(MoodParseError::MissingField(_)) => "missing_field",
        }
    }
}

impl MoodOutcome {
    pub fn is_live(&self) -> bool {
        matches!(self, MoodOutcome::Live(_))
    }

    /// Collapses either path into something renderable.
    pub fn into_payload(self) -> MoodPayload {
        match self {
            MoodOutcome::Live(mood) => mood,
            MoodOutcome::Fallback(_) => MoodPayload::fallback(),
        }
    }
}

/// Produces the daily mood; never fails
#[derive(Debug, Clone)]
pub struct MoodProvider {
    source: MoodSourceRef,
}

impl MoodProvider {
    pub fn new(source: MoodSourceRef) -> Self {
        Self { source }
    }

    /// Builds a Gemini-backed provider. A source that cannot be built (for
    /// example, no API key) is replaced by one that always fails.
    pub fn from_config(config: &MoodConfig) -> Self {
        let source: MoodSourceRef = match GeminiMoodSource::new(config) {
            Ok(source) => Arc::new(source),
            Err(e) => {
                debug!("Gemini mood source unavailable: {}", e);
                Arc::new(UnavailableSource::new(e))
            }
        };
        Self::new(source)
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// One best-effort fetch, reporting which path was taken.
    pub async fn fetch_outcome(&self) -> MoodOutcome {
        let result = match self.source.fetch_raw().await {
            Ok(text) => MoodPayload::parse(&text).map_err(FallbackReason::Parse),
            Err(e) => Err(FallbackReason::Source(e)),
        };

        match result {
            Ok(mood) => {
                debug!(source = self.source.name(), "Using live daily mood");
                MoodOutcome::Live(mood)
            }
            Err(reason) => {
                warn!(
                    source = self.source.name(),
                    kind = reason.kind(),
                    "Daily mood generation failed, using fallback: {}",
                    reason
                );
                MoodOutcome::Fallback(reason)
            }
        }
    }

    pub async fn fetch_daily_mood(&self) -> MoodPayload {
        self.fetch_outcome().await.into_payload()
    }
}
