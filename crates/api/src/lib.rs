use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use eco_agents::{AgentConfig, EcoAgent};
use eco_core::{tool_catalog, ToolSpec};
use eco_observability::{AppMetrics, MetricsSnapshot};
use serde::{Deserialize, Serialize};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

const MAX_MESSAGE_LEN: usize = 4_000;
const AGENT_NAME: &str = "EcoAgents";

#[derive(Clone)]
pub struct ApiState {
    pub agent: Arc<EcoAgent>,
    pub metrics: Arc<AppMetrics>,
}

impl ApiState {
    pub fn new(agent: EcoAgent, metrics: Arc<AppMetrics>) -> Self {
        Self {
            agent: Arc::new(agent),
            metrics,
        }
    }
}

#[derive(Debug, Serialize)]
struct RootResponse {
    message: &'static str,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    agent: &'static str,
    strategy: &'static str,
    timestamp_utc: String,
    metrics: MetricsSnapshot,
}

#[derive(Debug, Serialize)]
struct ToolsResponse {
    tools: Vec<ToolSpec>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatRequest {
    message: String,
}

#[derive(Debug, Clone, Serialize)]
struct ChatResponse {
    response: String,
}

pub fn build_app() -> Result<Router> {
    let metrics = AppMetrics::shared();
    let config = AgentConfig::from_env();
    let agent = EcoAgent::from_config(&config, metrics.clone())?;

    tracing::info!(strategy = agent.strategy().as_str(), "chat agent ready");

    Ok(build_router(ApiState::new(agent, metrics)))
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/tools", get(list_tools))
        .route("/chat", post(chat))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(RequestBodyLimitLayer::new(64 * 1024))
        .with_state(state)
}

async fn root() -> impl IntoResponse {
    Json(RootResponse {
        message: "EcoAgents - Environmental AI Assistant",
        status: "running",
    })
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let payload = HealthResponse {
        status: "healthy",
        agent: AGENT_NAME,
        strategy: state.agent.strategy().as_str(),
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        metrics: state.metrics.snapshot(),
    };
    (StatusCode::OK, Json(payload))
}

async fn list_tools() -> impl IntoResponse {
    Json(ToolsResponse {
        tools: tool_catalog(),
    })
}

async fn chat(State(state): State<ApiState>, Json(request): Json<ChatRequest>) -> Response {
    if request.message.chars().count() > MAX_MESSAGE_LEN {
        return detail_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            &format!("message exceeds {MAX_MESSAGE_LEN} characters"),
        );
    }

    match state.agent.chat(&request.message).await {
        Ok(response) => (StatusCode::OK, Json(ChatResponse { response })).into_response(),
        Err(err) => {
            error!(error = %err, "chat failed");
            detail_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}

fn detail_response(status: StatusCode, detail: &str) -> Response {
    (status, Json(serde_json::json!({ "detail": detail }))).into_response()
}
