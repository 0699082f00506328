mod config;
mod model;
mod prompt;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use eco_core::{
    format_outcome, parse_model_reply, resolve_tool_call, route_keywords, route_tool,
    ModelDecision, Route, ToolCall, ToolCallError, ToolOutcome,
};
use eco_observability::AppMetrics;
use tracing::{info, instrument, warn};

pub use config::{AgentConfig, RouterStrategy};
pub use model::{ModelClient, ModelError, OpenAiClient, OpenAiRuntimeConfig};
pub use prompt::{system_prompt, user_turn};

/// Stateless chat façade: route, run the tool, format the result.
pub struct EcoAgent<M = OpenAiClient> {
    model: Option<M>,
    metrics: Arc<AppMetrics>,
}

impl EcoAgent<OpenAiClient> {
    pub fn keyword_only(metrics: Arc<AppMetrics>) -> Self {
        Self {
            model: None,
            metrics,
        }
    }

    pub fn from_config(config: &AgentConfig, metrics: Arc<AppMetrics>) -> Result<Self> {
        match (config.strategy, config.openai.as_ref()) {
            (RouterStrategy::Model, Some(runtime)) => Ok(Self::with_model(
                OpenAiClient::new(runtime.clone())?,
                metrics,
            )),
            (RouterStrategy::Model, None) => {
                warn!("model routing requested without ECO_OPENAI_API_KEY, using keywords");
                Ok(Self::keyword_only(metrics))
            }
            (RouterStrategy::Keyword, _) => Ok(Self::keyword_only(metrics)),
        }
    }
}

impl<M: ModelClient> EcoAgent<M> {
    pub fn with_model(model: M, metrics: Arc<AppMetrics>) -> Self {
        Self {
            model: Some(model),
            metrics,
        }
    }

    pub fn strategy(&self) -> RouterStrategy {
        if self.model.is_some() {
            RouterStrategy::Model
        } else {
            RouterStrategy::Keyword
        }
    }

    #[instrument(skip(self, message), fields(strategy = self.strategy().as_str()))]
    pub async fn chat(&self, message: &str) -> Result<String> {
        let started = Instant::now();
        self.metrics.inc_request();

        let reply = match self.model.as_ref() {
            Some(model) => self.chat_with_model(model, message).await?,
            None => self.chat_with_keywords(message)?,
        };

        self.metrics.observe_latency(started.elapsed());
        info!(
            latency_ms = started.elapsed().as_millis() as u64,
            reply_len = reply.len(),
            "chat handled"
        );

        Ok(reply)
    }

    pub fn chat_with_keywords(&self, message: &str) -> Result<String> {
        let route = route_keywords(message);
        let reply = match route {
            Route::Tool(call) => format_outcome(&self.invoke(&call))?,
            other => other.canned_reply().unwrap_or_default().to_string(),
        };
        Ok(reply)
    }

    async fn chat_with_model(&self, model: &M, message: &str) -> Result<String> {
        self.metrics.inc_model_call();
        let raw = match model.complete(&system_prompt(), &user_turn(message)).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    model = model.model_name(),
                    error = %err,
                    "model call failed, falling back to keywords"
                );
                return self.fall_back_to_keywords(message);
            }
        };

        let (tool, params) = match parse_model_reply(&raw) {
            ModelDecision::Tool { tool, params } => (tool, params),
            ModelDecision::Prose(text) => return Ok(text),
        };

        let outcome = match resolve_tool_call(&tool, &params) {
            Ok(call) => self.invoke(&call),
            Err(err @ ToolCallError::UnknownTool(_)) => {
                return Ok(format_outcome(&ToolOutcome::error(err.to_string()))?);
            }
            Err(err) => {
                warn!(tool = %tool, error = %err, "model requested an unusable tool call");
                return self.fall_back_to_keywords(message);
            }
        };

        if let ToolOutcome::Error { error } = &outcome {
            warn!(tool = %tool, error = %error, "model-selected tool failed");
            return self.fall_back_to_keywords(message);
        }

        Ok(format_outcome(&outcome)?)
    }

    fn fall_back_to_keywords(&self, message: &str) -> Result<String> {
        self.metrics.inc_keyword_fallback();
        self.chat_with_keywords(message)
    }

    fn invoke(&self, call: &ToolCall) -> ToolOutcome {
        self.metrics.inc_tool_call();
        let outcome = route_tool(call);
        info!(tool = call.name().as_str(), error = outcome.is_error(), "tool invoked");
        outcome
    }
}
