use mood_core::Schema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const FALLBACK_TITLE: &str = "Serene Afternoon";
pub const FALLBACK_SUBTITLE: &str = "Quiet Luxury & History";
pub const FALLBACK_DESCRIPTION: &str =
    "Immerse yourself in the timeless architecture of the old quarter followed by a private tasting.";

/// A day's curated theme, as shown on the mood card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodPayload {
    /// Short poetic phrase, e.g. "Gentle Tuesday"
    pub title: String,
    /// Two-word theme, e.g. "Architecture & Artisan"
    pub subtitle: String,
    /// One sentence describing the flow of the day
    pub description: String,
}

/// Why model output could not be turned into a `MoodPayload`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoodParseError {
    #[error("Malformed mood JSON: {0}")]
    Malformed(String),

    #[error("Mood field `{0}` is missing or empty")]
    MissingField(&'static str),
}

// Every field optional so a missing one is reported by name rather than as a serde error.
#[derive(Deserialize)]
struct RawMood {
    title: Option<String>,
    subtitle: Option<String>,
    description: Option<String>,
}

impl MoodPayload {
    /// The fixed payload shown whenever live generation fails.
    pub fn fallback() -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            subtitle: FALLBACK_SUBTITLE.to_string(),
            description: FALLBACK_DESCRIPTION.to_string(),
        }
    }

    /// Parses model output. Field values are kept verbatim.
    pub fn parse(text: &str) -> Result<Self, MoodParseError> {
        if text.trim().is_empty() {
            return Err(MoodParseError::Malformed("empty response text".to_string()));
        }

        let raw: RawMood =
            serde_json::from_str(text).map_err(|e| MoodParseError::Malformed(e.to_string()))?;

        Ok(Self {
            title: required("title", raw.title)?,
            subtitle: required("subtitle", raw.subtitle)?,
            description: required("description", raw.description)?,
        })
    }

    /// The `responseSchema` sent with every mood request
    pub fn response_schema() -> Schema {
        Schema::object()
            .required_property(
                "title",
                Schema::string("A poetic, short title for the day's vibe (e.g., 'Gentle Tuesday')"),
            )
            .required_property(
                "subtitle",
                Schema::string("A two-word theme (e.g., 'Architecture & Artisan')"),
            )
            .required_property(
                "description",
                Schema::string(
                    "A single, elegant sentence describing the suggested flow of the day.",
                ),
            )
    }
}

fn required(name: &'static str, value: Option<String>) -> Result<String, MoodParseError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(MoodParseError::MissingField(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_fields_verbatim() {
        let text = r#"{"title":"  Gentle Tuesday","subtitle":"Architecture & Artisan","description":"Wander the galleries, then linger over espresso."}"#;
        let mood = MoodPayload::parse(text).unwrap();

        assert_eq!(mood.title, "  Gentle Tuesday");
        assert_eq!(mood.subtitle, "Architecture & Artisan");
        assert_eq!(
            mood.description,
            "Wander the galleries, then linger over espresso."
        );
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let text = r#"{"title":"a","subtitle":"b","description":"c","mood_score":9}"#;
        assert!(MoodPayload::parse(text).is_ok());
    }

    #[test]
    fn test_parse_rejects_missing_and_empty_fields() {
        assert_eq!(
            MoodPayload::parse(r#"{"title":"a","description":"c"}"#),
            Err(MoodParseError::MissingField("subtitle"))
        );
        assert_eq!(
            MoodPayload::parse(r#"{"title":"a","subtitle":"b","description":"   "}"#),
            Err(MoodParseError::MissingField("description"))
        );
        assert_eq!(
            MoodPayload::parse(r#"{"title":null,"subtitle":"b","description":"c"}"#),
            Err(MoodParseError::MissingField("title"))
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(
            MoodPayload::parse(""),
            Err(MoodParseError::Malformed(_))
        ));
        assert!(matches!(
            MoodPayload::parse("Here is your mood: Serene"),
            Err(MoodParseError::Malformed(_))
        ));
        assert!(matches!(
            MoodPayload::parse(r#"["title","subtitle"]"#),
            Err(MoodParseError::Malformed(_))
        ));
        assert!(matches!(
            MoodPayload::parse(r#"{"title":1,"subtitle":"b","description":"c"}"#),
            Err(MoodParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_fallback_literal() {
        let fallback = MoodPayload::fallback();
        assert_eq!(fallback.title, "Serene Afternoon");
        assert_eq!(fallback.subtitle, "Quiet Luxury & History");
        assert_eq!(
            fallback.description,
            "Immerse yourself in the timeless architecture of the old quarter followed by a private tasting."
        );
    }

    #[test]
    fn test_schema_requires_all_fields() {
        let schema = MoodPayload::response_schema();
        assert_eq!(schema.required, vec!["title", "subtitle", "description"]);
        assert_eq!(schema.properties.len(), 3);
    }
}
