use std::env;
use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Failures surfaced by the hosted model; any of them sends the message down the keyword path.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("network: {0}")]
    Network(String),
    #[error("provider status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

/// A hosted language model: one system instruction, one user turn, text back.
pub trait ModelClient: Send + Sync {
    fn complete(
        &self,
        system: &str,
        user: &str,
    ) -> impl Future<Output = Result<String, ModelError>> + Send;

    fn model_name(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct OpenAiRuntimeConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl OpenAiRuntimeConfig {
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("ECO_OPENAI_API_KEY")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())?;
        let model =
            env::var("ECO_OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string());
        let base_url = env::var("ECO_OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let max_output_tokens = env::var("ECO_MODEL_MAX_OUTPUT_TOKENS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(1000);
        let temperature = env::var("ECO_MODEL_TEMPERATURE")
            .ok()
            .and_then(|value| value.parse::<f32>().ok())
            .unwrap_or(0.7);

        Some(Self {
            api_key,
            model,
            base_url,
            max_output_tokens,
            temperature,
        })
    }
}

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: Client,
    runtime: OpenAiRuntimeConfig,
}

impl OpenAiClient {
    pub fn new(runtime: OpenAiRuntimeConfig) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(6))
            .timeout(Duration::from_secs(20))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { http, runtime })
    }
}

impl ModelClient for OpenAiClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ModelError> {
        let payload = serde_json::json!({
            "model": self.runtime.model,
            "max_output_tokens": self.runtime.max_output_tokens,
            "temperature": self.runtime.temperature,
            "input": [
                {
                    "role": "system",
                    "content": [
                        { "type": "input_text", "text": system }
                    ]
                },
                {
                    "role": "user",
                    "content": [
                        { "type": "input_text", "text": user }
                    ]
                }
            ]
        });

        let response = self
            .http
            .post(format!("{}/responses", self.runtime.base_url))
            .bearer_auth(self.runtime.api_key.as_str())
            .json(&payload)
            .send()
            .await
            .map_err(|err| ModelError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| ModelError::InvalidResponse(err.to_string()))?;

        if let Some(usage) = body.get("usage") {
            info!(
                model = %self.runtime.model,
                input_tokens = usage.get("input_tokens").and_then(serde_json::Value::as_u64).unwrap_or(0),
                output_tokens = usage.get("output_tokens").and_then(serde_json::Value::as_u64).unwrap_or(0),
                "model tokens used"
            );
        }

        extract_output_text(&body)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ModelError::InvalidResponse("output text missing".to_string()))
    }

    fn model_name(&self) -> &str {
        &self.runtime.model
    }
}

fn extract_output_text(payload: &Value) -> Option<String> {
    if let Some(value) = payload.get("output_text").and_then(Value::as_str) {
        return Some(value.to_string());
    }
    let output = payload.get("output")?.as_array()?;
    let mut chunks = Vec::new();
    for item in output {
        let Some(content) = item.get("content").and_then(Value::as_array) else {
            continue;
        };
        for content_item in content {
            let is_text = content_item
                .get("type")
                .and_then(Value::as_str)
                .map(|kind| kind == "output_text")
                .unwrap_or(false);
            if let Some(text) = content_item
                .get("text")
                .and_then(Value::as_str)
                .filter(|_| is_text)
            {
                chunks.push(text.to_string());
            }
        }
    }
    if chunks.is_empty() {
        None
    } else {
        Some(chunks.join("\n\n"))
    }
}
