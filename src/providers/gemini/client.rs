use super::types::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};
use crate::provider::TextProvider;
use crate::Error;
use reqwest::Client;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

// Bounds every outbound call; expiry surfaces as an upstream failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Google Gemini provider implementation.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    pub fn new(api_key: String, model: String) -> Result<Self, Error> {
        Self::new_with_base_url(api_key, model, DEFAULT_BASE_URL.to_string())
    }

    /// Create a new Gemini provider with a custom base URL.
    pub fn new_with_base_url(
        api_key: String,
        model: String,
        base_url: String,
    ) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| Error::config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            api_key,
            model,
            base_url,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait::async_trait]
impl TextProvider for GeminiProvider {
    async fn generate_content(&self, prompt: &str) -> Result<String, Error> {
        let request = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await?;
            // The API wraps errors in {"error":{"message":...}}; fall back to
            // the raw body when the envelope is missing.
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            return Err(Error::upstream(message));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| Error::upstream(format!("malformed provider response: {err}")))?;

        match body.text() {
            Some(text) => Ok(text),
            None => {
                // No candidates usually means the prompt was blocked.
                let message = body
                    .prompt_feedback
                    .and_then(|feedback| feedback.block_reason)
                    .map(|reason| format!("prompt blocked by provider: {reason}"))
                    .unwrap_or_else(|| "provider returned no content".to_string());
                Err(Error::upstream(message))
            }
        }
    }
}
