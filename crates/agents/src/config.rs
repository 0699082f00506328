use std::env;

use crate::model::OpenAiRuntimeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterStrategy {
    Keyword,
    Model,
}

impl RouterStrategy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "keyword" | "keywords" | "rules" => Some(Self::Keyword),
            "model" | "llm" => Some(Self::Model),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Model => "model",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub strategy: RouterStrategy,
    pub openai: Option<OpenAiRuntimeConfig>,
}

impl AgentConfig {
    pub fn from_env() -> Self {
        let openai = OpenAiRuntimeConfig::from_env();
        let strategy = env::var("ECO_ROUTER")
            .ok()
            .and_then(|value| RouterStrategy::parse(&value))
            .unwrap_or(if openai.is_some() {
                RouterStrategy::Model
            } else {
                RouterStrategy::Keyword
            });

        Self { strategy, openai }
    }

    pub fn keyword_only() -> Self {
        Self {
            strategy: RouterStrategy::Keyword,
            openai: None,
        }
    }

    pub fn with_strategy(mut self, strategy: RouterStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
