use async_trait::async_trait;
use blogmentor_common::{BlogMentorError, Result};
use reqwest::Client;
use tracing::{debug, info};

use crate::generator::TextGenerator;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// Gemini REST API client
///
/// One network round trip per call: no retry, and no local timeout (a
/// submission is bounded only by provider/transport defaults).
#[derive(Debug, Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: Client,
}

impl GeminiClient {
    /// Create new Gemini client
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let model = model.into();
        let api_key = api_key.into();

        if model.is_empty() {
            return Err(BlogMentorError::config("Gemini model name cannot be empty"));
        }
        if api_key.is_empty() {
            return Err(BlogMentorError::config("Gemini API key cannot be empty"));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| BlogMentorError::internal(format!("Failed to create HTTP client: {}", e)))?;

        info!("Gemini client initialized: {} (model: {})", base_url, model);
        Ok(Self {
            base_url,
            model,
            api_key,
            client,
        })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Generate text with Gemini (single attempt)
    pub async fn generate(&self, request: GenerateContentRequest) -> Result<String> {
        let url = self.generate_url();

        debug!(
            "Sending generate request to Gemini - Model: {}, Prompt length: {}",
            self.model,
            request.prompt_len()
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| BlogMentorError::network(format!("Failed to send request: {}", e)))?
            .error_for_status()
            .map_err(|e| BlogMentorError::generation(format!("Gemini API error: {}", e)))?;

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| BlogMentorError::generation(format!("Failed to parse response: {}", e)))?;

        match result.first_text() {
            Some(text) => {
                debug!("Received response from Gemini - Length: {}", text.len());
                Ok(text)
            }
            None => Err(BlogMentorError::generation("Empty response from Gemini")),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        self.generate(GenerateContentRequest::from_prompt(prompt)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GeminiClient::new(
            "https://generativelanguage.googleapis.com",
            "gemini-2.5-pro",
            "test-key",
        );
        assert!(client.is_ok());
    }

    #[test]
    fn test_rejects_missing_credential_parts() {
        assert!(GeminiClient::new("https://example.com", "", "key").is_err());
        assert!(GeminiClient::new("https://example.com", "gemini-2.5-pro", "").is_err());
    }

    #[test]
    fn test_generate_url() {
        let client = GeminiClient::new(
            "https://generativelanguage.googleapis.com/",
            "gemini-2.5-pro",
            "test-key",
        )
        .unwrap();
        assert_eq!(
            client.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-pro:generateContent"
        );
    }
}
