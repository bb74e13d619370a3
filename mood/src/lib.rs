//! Daily mood generation with a guaranteed fallback.
//!
//! [`MoodProvider`] asks a [`MoodSource`] (normally Gemini) for a mood card
//! and always hands back something renderable: either the live payload or
//! the fixed fallback from [`MoodPayload::fallback`].

pub mod card;
pub mod payload;
pub mod provider;
pub mod source;

pub use card::{MoodCard, MoodCardState};
pub use payload::{MoodParseError, MoodPayload};
pub use provider::{FallbackReason, MoodOutcome, MoodProvider};
pub use source::{
    GeminiMoodSource, MoodSource, MoodSourceError, MoodSourceRef, UnavailableSource,
    DEFAULT_MOOD_PROMPT,
};
