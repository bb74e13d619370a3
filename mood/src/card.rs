use chrono::{DateTime, Utc};

use crate::payload::MoodPayload;
use crate::provider::MoodProvider;

/// Display state of the home screen's mood card. There is no error state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodCardState {
    Loading,
    Loaded {
        mood: MoodPayload,
        loaded_at: DateTime<Utc>,
    },
}

/// View-local holder for one screen visit
#[derive(Debug, Clone)]
pub struct MoodCard {
    state: MoodCardState,
}

impl Default for MoodCard {
    fn default() -> Self {
        Self::new()
    }
}

impl MoodCard {
    /// Cards start out loading.
    pub fn new() -> Self {
        Self {
            state: MoodCardState::Loading,
        }
    }

    pub fn state(&self) -> &MoodCardState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, MoodCardState::Loading)
    }

    pub fn mood(&self) -> Option<&MoodPayload> {
        match &self.state {
            MoodCardState::Loaded { mood, .. } => Some(mood),
            MoodCardState::Loading => None,
        }
    }

    /// Runs one activation: enter `Loading`, fetch, settle in `Loaded`.
    ///
    /// Dropping the returned future mid-flight leaves the card loading and
    /// discards whatever the provider would have produced.
    pub async fn activate(&mut self, provider: &MoodProvider) -> MoodPayload {
        self.state = MoodCardState::Loading;
        let mood = provider.fetch_daily_mood().await;
        self.state = MoodCardState::Loaded {
            mood: mood.clone(),
            loaded_at: Utc::now(),
        };
        mood
    }
}
