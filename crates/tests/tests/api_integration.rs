use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use eco_agents::EcoAgent;
use eco_api::{build_router, ApiState};
use eco_observability::AppMetrics;
use serde_json::{json, Value};
use tower::ServiceExt;

fn keyword_app() -> Router {
    let metrics = AppMetrics::shared();
    build_router(ApiState::new(
        EcoAgent::keyword_only(metrics.clone()),
        metrics,
    ))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_chat(app: Router, body: Body) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn chat_reply(app: Router, message: &str) -> String {
    let (status, body) =
        post_chat(app, Body::from(json!({ "message": message }).to_string())).await;
    assert_eq!(status, StatusCode::OK);
    let parsed: Value = serde_json::from_slice(&body).unwrap();
    parsed["response"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn root_reports_running() {
    let (status, body) = get_json(keyword_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "EcoAgents - Environmental AI Assistant", "status": "running" })
    );
}

#[tokio::test]
async fn health_reports_agent_and_strategy() {
    let (status, body) = get_json(keyword_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["agent"], "EcoAgents");
    assert_eq!(body["strategy"], "keyword");
    assert!(body["metrics"]["requests_total"].is_u64());
}

#[tokio::test]
async fn tools_lists_static_catalog() {
    let (status, body) = get_json(keyword_app(), "/tools").await;
    assert_eq!(status, StatusCode::OK);

    let tools = body["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 3);
    assert_eq!(tools[0]["name"], "get_air_quality");
    assert_eq!(tools[0]["parameters"], json!({ "city": "string" }));
    assert_eq!(
        tools[1]["parameters"],
        json!({ "origin": "string", "destination": "string", "mode": "string" })
    );
    assert_eq!(tools[2]["description"], "Get wildfire alerts for regions");
}

#[tokio::test]
async fn chat_answers_reference_questions() {
    let app = keyword_app();

    let reply = chat_reply(app.clone(), "What is the air quality in Toronto?").await;
    assert!(reply.contains("Air quality in Toronto: AQI 42, PM2.5: 7.1 μg/m³"));

    let reply = chat_reply(
        app.clone(),
        "How much CO2 for a trip from Toronto to Vancouver?",
    )
    .await;
    assert_eq!(
        reply,
        "Trip from Toronto to Vancouver: 3361.6 km, 574831.4 g CO2"
    );

    let reply = chat_reply(app.clone(), "Are there any wildfire alerts in BC?").await;
    assert_eq!(reply, "Wildfire alerts for BC: 2 active fires.");

    let reply = chat_reply(app, "Hello, how are you?").await;
    assert_eq!(reply, eco_core::router::GREETING);
}

#[tokio::test]
async fn chat_counts_requests_in_health() {
    let metrics = AppMetrics::shared();
    let app = build_router(ApiState::new(
        EcoAgent::keyword_only(metrics.clone()),
        metrics,
    ));

    chat_reply(app.clone(), "aqi in Montreal").await;
    chat_reply(app.clone(), "hi").await;

    let (_, body) = get_json(app, "/health").await;
    assert_eq!(body["metrics"]["requests_total"], 2);
    assert_eq!(body["metrics"]["tool_calls_total"], 1);
    assert_eq!(body["metrics"]["completed_total"], 2);
}

#[tokio::test]
async fn blank_message_gets_greeting() {
    assert_eq!(chat_reply(keyword_app(), "").await, eco_core::router::GREETING);
    assert_eq!(chat_reply(keyword_app(), "   ").await, eco_core::router::GREETING);
}

#[tokio::test]
async fn chat_rejects_malformed_body() {
    let (status, _) = post_chat(keyword_app(), Body::from(r#"{"text": "hello"}"#)).await;
    assert!(status.is_client_error());
}
