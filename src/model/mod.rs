use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use reqwest::Client;
use serde_json::{json, Value};
use std::env;

use crate::web::models::ChatMessage;

// Model used when the request does not name one.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const DEFAULT_API_URL: &str = "https://api.openai.com/v1";

// Chat capability resolved once at startup. Handlers never observe a missing
// credential directly; the Unconfigured variant routes them to the local
// fallback text instead.
pub enum CompletionProvider {
    Configured(CompletionClient),
    Unconfigured,
}

impl CompletionProvider {
    pub fn from_env() -> Self {
        match env::var("LLM_API_KEY") {
            Ok(key) if !key.trim().is_empty() => {
                info!("Completion provider configured");
                Self::Configured(CompletionClient::new(key))
            }
            _ => {
                warn!("LLM_API_KEY is not set, chat degrades to echo fallback");
                Self::Unconfigured
            }
        }
    }
}

// A wrapper for the OpenAI-compatible chat completion API
pub struct CompletionClient {
    api_url: String,
    api_key: String,
    client: Client,
}

impl CompletionClient {
    pub fn new(api_key: String) -> Self {
        // Get API URL from environment or use default
        let api_url = env::var("LLM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        info!("Using completion API at: {}", api_url);
        Self::with_api_url(api_url, api_key)
    }

    pub fn with_api_url(api_url: String, api_key: String) -> Self {
        Self {
            api_url,
            api_key,
            client: Client::new(),
        }
    }

    // Single attempt, no retry; callers decide what a failure degrades to.
    pub async fn complete(&self, messages: &[ChatMessage], model: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.api_url.trim_end_matches('/'));

        let payload = json!({
            "model": model,
            "messages": messages,
        });

        info!("Dispatching {} messages to model {}", messages.len(), model);
        debug!("Payload: {}", payload);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow!("API request failed: {} - {}", status, error_text));
        }

        // Parse the response
        let response_json: Value = response.json().await?;
        debug!("Response JSON: {}", response_json);

        // Extract the generated text from the response
        let content = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| anyhow!("Failed to extract content from response"))?;

        Ok(content.trim().to_string())
    }
}
