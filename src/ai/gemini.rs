//! Gemini HTTP client for reflections and daily quotes.
//!
//! This module provides a small client for the Gemini generateContent API.
//! The credential is optional: a client without one fails every call with
//! `AiError::CredentialMissing`, which the engine and CLI surface as the
//! AI-disabled state (detected at first use, not at startup).

use super::prompts::{DAILY_QUOTE_INSTRUCTION, DAILY_QUOTE_REQUEST, REFLECTION_INSTRUCTION};
use super::ReflectionGenerator;
use crate::config::Config;
use crate::constants::{DAILY_QUOTE_TEMPERATURE, GEMINI_MODEL};
use crate::errors::AiError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A block of text parts in a generateContent request or response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    text: String,
}

impl Content {
    fn from_text(text: impl Into<String>) -> Self {
        Content {
            parts: vec![Part { text: text.into() }],
        }
    }

    fn into_text(self) -> String {
        self.parts
            .into_iter()
            .map(|part| part.text)
            .collect::<Vec<_>>()
            .join("")
    }
}

/// Request body for generateContent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

/// Response from generateContent.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Client for the Gemini generateContent API.
#[derive(Clone)]
pub struct GeminiClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the API (no trailing slash)
    /// * `api_key` - Credential; `None` disables generation
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            model: GEMINI_MODEL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Creates a client from the application configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone(), config.api_key.clone())
    }

    /// Whether a credential is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends one generateContent request and extracts the response text.
    async fn generate(
        &self,
        system_instruction: &str,
        user_text: &str,
        temperature: Option<f32>,
    ) -> Result<String, AiError> {
        let api_key = self.api_key.as_deref().ok_or(AiError::CredentialMissing)?;

        debug!("Sending generateContent request with model: {}", self.model);

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let request = GenerateRequest {
            system_instruction: Content::from_text(system_instruction),
            contents: vec![Content::from_text(user_text)],
            generation_config: temperature.map(|temperature| GenerationConfig { temperature }),
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(AiError::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AiError::InvalidResponse(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AiError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(Content::into_text)
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            return Err(AiError::EmptyResponse);
        }

        debug!("Received generated text ({} chars)", text.len());
        Ok(text.to_string())
    }
}

impl ReflectionGenerator for GeminiClient {
    async fn generate_reflection(&self, entry_text: &str) -> Result<String, AiError> {
        self.generate(REFLECTION_INSTRUCTION, entry_text, None).await
    }

    async fn daily_quote(&self) -> Result<String, AiError> {
        let quote = self
            .generate(
                DAILY_QUOTE_INSTRUCTION,
                DAILY_QUOTE_REQUEST,
                Some(DAILY_QUOTE_TEMPERATURE),
            )
            .await?;
        Ok(strip_wrapping_quotes(&quote).to_string())
    }
}

/// Removes one leading and one trailing quote character, if present.
fn strip_wrapping_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}
