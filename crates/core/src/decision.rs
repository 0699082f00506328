use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{ToolCall, ToolName};
use crate::tables::DEFAULT_MODE;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolCallError {
    #[error("Tool {0} not found")]
    UnknownTool(String),
    #[error("missing parameter `{0}`")]
    MissingParameter(&'static str),
}

/// How the model answered: a structured tool request or free prose.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelDecision {
    Tool {
        tool: String,
        params: Map<String, Value>,
    },
    Prose(String),
}

/// Anything that is not a JSON object carrying both `tool` and `params` is prose.
pub fn parse_model_reply(reply: &str) -> ModelDecision {
    let candidate = strip_code_fence(reply.trim());

    let Ok(Value::Object(mut object)) = serde_json::from_str::<Value>(candidate) else {
        return ModelDecision::Prose(reply.to_string());
    };

    match (object.remove("tool"), object.remove("params")) {
        (Some(Value::String(tool)), Some(Value::Object(params))) => {
            ModelDecision::Tool { tool, params }
        }
        _ => ModelDecision::Prose(reply.to_string()),
    }
}

pub fn resolve_tool_call(
    tool: &str,
    params: &Map<String, Value>,
) -> Result<ToolCall, ToolCallError> {
    let name =
        ToolName::parse(tool).ok_or_else(|| ToolCallError::UnknownTool(tool.to_string()))?;

    let call = match name {
        ToolName::AirQuality => ToolCall::AirQuality {
            city: required(params, "city")?,
        },
        ToolName::TripEmissions => ToolCall::TripEmissions {
            origin: required(params, "origin")?,
            destination: required(params, "destination")?,
            mode: params
                .get("mode")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_MODE.as_code())
                .to_string(),
        },
        ToolName::WildfireAlerts => ToolCall::WildfireAlerts {
            region: required(params, "region")?,
        },
    };

    Ok(call)
}

fn required(params: &Map<String, Value>, key: &'static str) -> Result<String, ToolCallError> {
    params
        .get(key)
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .ok_or(ToolCallError::MissingParameter(key))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
