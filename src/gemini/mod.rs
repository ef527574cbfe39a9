pub mod dto;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::GeminiConfig;
use crate::error::AppError;

/// A generative model that turns a prompt into free-form text.
#[async_trait]
pub trait CourseModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;

    fn name(&self) -> &'static str;
}

pub struct GeminiHttpClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiHttpClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

#[async_trait]
impl CourseModel for GeminiHttpClient {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let request_body = dto::GenerateContentRequest::from_prompt(prompt);

        let response = self.client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Model(format!("request to Gemini failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Model(format!("Gemini API error {}: {}", status, body)));
        }

        let body_text = response
            .text()
            .await
            .map_err(|e| AppError::Model(format!("failed to read Gemini response: {}", e)))?;

        let parsed: dto::GenerateContentResponse = serde_json::from_str(&body_text)
            .map_err(|e| {
                tracing::error!("Failed to parse Gemini envelope: {}", e);
                AppError::Model(format!("unexpected Gemini response shape: {}", e))
            })?;

        if let Some(text) = parsed.first_text() {
            return Ok(text);
        }

        let reason = parsed
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .or_else(|| parsed.candidates.first().and_then(|c| c.finish_reason.clone()))
            .unwrap_or_else(|| "no candidates".to_string());
        Err(AppError::Model(format!("Gemini returned no text ({})", reason)))
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

/// Stands in for the model when no API key is configured.
pub struct UnavailableModel;

#[async_trait]
impl CourseModel for UnavailableModel {
    async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
        Err(AppError::Model("no model is configured".to_string()))
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}
