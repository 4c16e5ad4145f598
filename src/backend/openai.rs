//! OpenAI-compatible chat completion backend.
//!
//! Talks to any endpoint implementing the `/chat/completions` surface. The
//! API key is only ever read from the environment so it cannot leak into
//! config files, while the base URL and model come from config with
//! environment and CLI overrides layered on top.

use std::env;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Result, WhittleError};
use crate::prompt::ChatMessage;

use super::Backend;

/// Environment variable holding the API key. Required for live calls.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the configured API base URL.
pub const API_BASE_ENV: &str = "OPENAI_BASE_URL";

/// Blocking client for an OpenAI-compatible chat completion service.
#[derive(Debug)]
pub struct OpenAiBackend {
    api_key: String,
    api_base: String,
    model: String,
    http: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OpenAiBackend {
    /// Build a backend from the environment and config.
    ///
    /// Fails if `OPENAI_API_KEY` is unset or empty. The base URL prefers
    /// `OPENAI_BASE_URL` over the config value; the model prefers the CLI
    /// override over the config value.
    pub fn from_env(config: &Config, model_override: Option<&str>) -> Result<Self> {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                WhittleError::Config(format!(
                    "{} is not set; an API key is required to call the generation service",
                    API_KEY_ENV
                ))
            })?;

        let api_base = env::var(API_BASE_ENV)
            .ok()
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| config.api_base.clone());

        let model = model_override
            .map(str::to_string)
            .unwrap_or_else(|| config.model.clone());

        let http = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|err| {
                WhittleError::Config(format!("failed to initialize HTTP client: {}", err))
            })?;

        Ok(Self {
            api_key,
            api_base,
            model,
            http,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

impl Backend for OpenAiBackend {
    fn generate(&self, messages: &[ChatMessage]) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages,
        };

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|err| WhittleError::Backend(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(WhittleError::Backend(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body.trim()
            )));
        }

        let parsed: ChatResponse = response.json().map_err(|err| {
            WhittleError::Backend(format!("cannot decode response body: {}", err))
        })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| WhittleError::Backend("response contains no choices".to_string()))?;

        Ok(choice.message.content)
    }
}
