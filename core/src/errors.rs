use thiserror::Error;

/// Gemini API errors
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Request Error: {0}")]
    RequestError(String),

    #[error("Response Error: {0}")]
    ResponseError(String),

    #[error("Parsing Error: {0}")]
    ParsingError(String),

    #[error("HTTP Error: {status_code} - {message}")]
    HttpError { status_code: u16, message: String },

    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
}

impl GeminiError {
    /// True when the failure came from missing or rejected credentials.
    pub fn is_credential_error(&self) -> bool {
        match self {
            GeminiError::ConfigError(_) => true,
            GeminiError::HttpError {
                status_code: 401 | 403,
                ..
            } => true,
            GeminiError::HttpError {
                status_code: 400,
                message,
            } => {
                let lower = message.to_lowercase();
                lower.contains("api key") || lower.contains("api_key_invalid")
            }
            _ => false,
        }
    }
}

/// Result type for Gemini operations
pub type GeminiResult<T> = Result<T, GeminiError>;
