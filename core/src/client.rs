use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::config::MoodConfig;
use crate::errors::{GeminiError, GeminiResult};
use crate::types::*;

pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for interacting with the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model_name: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini API client
    pub fn new(config: &MoodConfig) -> GeminiResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                GeminiError::ConfigError(
                    "API key is required to initialize the Gemini client".to_string(),
                )
            })?
            .to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model_name: config.model_name().to_string(),
            base_url: config.api_base_url().to_string(),
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    // The key travels in a header so it never shows up in URLs or error text.
    fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model_name)
    }

    /// Generate content using the Gemini API
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        debug!(model = %self.model_name, "Sending generateContent request");

        let response = self
            .client
            .post(self.generate_content_url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                GeminiError::RequestError(format!("Failed to send request: {}", e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.map_err(|e| {
                GeminiError::ResponseError(format!(
                    "Failed to read error response: {}",
                    e.without_url()
                ))
            })?;

            return Err(GeminiError::HttpError {
                status_code: status.as_u16(),
                message: format!("API request failed: {}", error_body),
            });
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| {
                GeminiError::ParsingError(format!("Failed to parse response: {}", e.without_url()))
            })
    }

    /// Extracts the text of the first candidate's first part
    pub fn extract_text_from_response(response: &GenerateContentResponse) -> GeminiResult<String> {
        let candidate = response
            .candidates
            .first()
            .ok_or_else(|| GeminiError::ResponseError("No candidates in response".to_string()))?;

        let content = candidate
            .content
            .as_ref()
            .ok_or_else(|| GeminiError::ResponseError("No content in candidate".to_string()))?;

        let part = content
            .parts
            .first()
            .ok_or_else(|| GeminiError::ResponseError("No parts in content".to_string()))?;

        part.text
            .clone()
            .ok_or_else(|| GeminiError::ResponseError("No text in part".to_string()))
    }

    /// Sends a single-turn prompt constrained to JSON matching `schema` and
    /// returns the raw text the model produced.
    pub async fn generate_structured(
        &self,
        prompt: &str,
        schema: Schema,
        temperature: f32,
    ) -> GeminiResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(prompt)],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                temperature: Some(temperature),
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema),
                ..Default::default()
            }),
        };

        let response = self.generate_content(&request).await?;
        Self::extract_text_from_response(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_requires_api_key() {
        let result = GeminiClient::new(&MoodConfig::default());
        assert!(matches!(result, Err(GeminiError::ConfigError(_))));

        let blank = MoodConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            GeminiClient::new(&blank),
            Err(GeminiError::ConfigError(_))
        ));
    }

    #[test]
    fn test_url_uses_configured_base() {
        let config = MoodConfig {
            api_key: Some("k".to_string()),
            api_base_url: Some("http://127.0.0.1:8080/v1beta/".to_string()),
            ..Default::default()
        };
        let client = GeminiClient::new(&config).unwrap();
        assert_eq!(
            client.generate_content_url(),
            "http://127.0.0.1:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_extract_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"a\":1}" }], "role": "model" }
            }]
        }))
        .unwrap();
        assert_eq!(
            GeminiClient::extract_text_from_response(&response).unwrap(),
            "{\"a\":1}"
        );

        let empty: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert!(matches!(
            GeminiClient::extract_text_from_response(&empty),
            Err(GeminiError::ResponseError(_))
        ));

        let no_text: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{}] } }]
        }))
        .unwrap();
        assert!(matches!(
            GeminiClient::extract_text_from_response(&no_text),
            Err(GeminiError::ResponseError(_))
        ));
    }
}
