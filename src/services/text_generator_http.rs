//! Text-generation client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{ApiConfig, AppError, api_key_from_env};
use crate::ports::TextGenerator;

/// Blocking HTTP client for an OpenAI-style chat-completions endpoint.
#[derive(Clone)]
pub struct HttpTextGenerator {
    api_key: String,
    api_url: Url,
    model: String,
    client: Client,
}

impl std::fmt::Debug for HttpTextGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTextGenerator")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpTextGenerator {
    /// Create a new client with the given API key and configuration.
    pub fn new(api_key: String, config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Request(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, api_url: config.api_url.clone(), model: config.model.clone(), client })
    }

    /// Create from the environment with the given configuration.
    pub fn from_env_with_config(config: &ApiConfig) -> Result<Self, AppError> {
        Self::new(api_key_from_env()?, config)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

impl TextGenerator for HttpTextGenerator {
    /// One request, no retry: the caller either gets the response text or the
    /// error. The content itself is surfaced without validation.
    fn generate(&self, instruction: &str) -> Result<String, AppError> {
        let request = ChatRequest {
            model: self.model.clone(),
            temperature: 0.7,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: instruction.to_string(),
            }],
        };

        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| AppError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Api { status: status.as_u16(), details: error_detail(&body) });
        }

        let completion: ChatResponse =
            response.json().map_err(|e| AppError::MalformedResponse(e.to_string()))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::MalformedResponse("no choices in completion".to_string()))?;

        Ok(choice.message.content)
    }
}

/// Pull the service's message out of a JSON error body, falling back to the
/// raw text.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
