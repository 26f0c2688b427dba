use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use minutes_gateway::gateway::{Gateway, PromptState};
use minutes_gateway::llm::prompts::{AGENDA_TEMPLATE, DEFAULT_MINUTES_TEMPLATE};
use minutes_gateway::llm::LlmProvider;
use minutes_gateway::server::router;

#[derive(Clone, Default)]
struct MockProvider {
    calls: Arc<Mutex<Vec<String>>>,
    fail_with: Option<String>,
    /// Number of calls that succeed before `fail_with` applies
    succeed_first: usize,
}

impl MockProvider {
    fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }

    fn failing_after(successes: usize, msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            succeed_first: successes,
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        let call_count = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(prompt.to_string());
            calls.len()
        };
        if let Some(ref msg) = self.fail_with {
            if call_count > self.succeed_first {
                return Err(anyhow::anyhow!("{}", msg));
            }
        }
        Ok("generated summary".to_string())
    }
}

fn app(provider: &MockProvider) -> Router {
    router(Gateway::new(
        Arc::new(provider.clone()),
        PromptState::default(),
    ))
}

async fn post(app: &Router, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method("POST").uri(path);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn minutes_body() -> Value {
    json!({"minutes": "m", "title": "t", "creator_name": "c", "date": "d"})
}

#[tokio::test]
async fn summarize_returns_model_reply() {
    let provider = MockProvider::default();
    let app = app(&provider);

    let (status, body) = post(&app, "/summarize", Some(minutes_body())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"summary": "generated summary"}));
    assert_eq!(
        provider.calls(),
        vec![format!(
            "{DEFAULT_MINUTES_TEMPLATE}\n\nTitle: t\nCreator: c\nDate: d\n\nMinutes:\nm"
        )]
    );
}

#[tokio::test]
async fn customize_prompt_then_summarize_uses_new_template() {
    let provider = MockProvider::default();
    let app = app(&provider);

    let (status, body) = post(&app, "/customize-prompt", Some(json!({"custom_prompt": "X"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Custom prompt updated successfully."}));

    let (status, _) = post(&app, "/summarize", Some(minutes_body())).await;
    assert_eq!(status, StatusCode::OK);

    let calls = provider.calls();
    assert!(calls[0].starts_with("X\n\nTitle: t\nCreator: c\nDate: d\n\nMinutes:\nm"));
}

#[tokio::test]
async fn agenda_uses_fixed_template_after_customization() {
    let provider = MockProvider::default();
    let app = app(&provider);

    post(&app, "/customize-prompt", Some(json!({"custom_prompt": "X"}))).await;
    let (status, body) = post(
        &app,
        "/summarize-agenda",
        Some(json!({"agenda": "1. Budget", "title": "Board"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "generated summary");
    assert_eq!(
        provider.calls(),
        vec![format!("{AGENDA_TEMPLATE}\n\nTitle: Board\nAgenda:\n1. Budget")]
    );
}

#[tokio::test]
async fn agenda_accepts_legacy_minutes_field() {
    let provider = MockProvider::default();
    let app = app(&provider);

    let (status, _) = post(
        &app,
        "/summarize-agenda",
        Some(json!({"minutes": "1. Budget", "title": "Board"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(provider.calls()[0].ends_with("Agenda:\n1. Budget"));
}

#[tokio::test]
async fn retry_on_fresh_process_is_a_client_error() {
    let provider = MockProvider::default();
    let app = app(&provider);

    let (status, body) = post(&app, "/retry-summary", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "No previous prompt to retry."}));
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn retry_after_summary_resends_prompt() {
    let provider = MockProvider::default();
    let app = app(&provider);

    post(&app, "/summarize", Some(minutes_body())).await;
    let (status, body) = post(&app, "/retry-summary", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"summary": "generated summary"}));

    let calls = provider.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}

#[tokio::test]
async fn upstream_failure_becomes_service_error() {
    let provider = MockProvider::failing("API error: 401 Unauthorized - bad key");
    let app = app(&provider);

    let (status, body) = post(&app, "/summarize", Some(minutes_body())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"detail": "Error while generating summary: API error: 401 Unauthorized - bad key"})
    );

    let (status, body) = post(
        &app,
        "/summarize-agenda",
        Some(json!({"agenda": "a", "title": "t"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Error while generating summary: "));
}

#[tokio::test]
async fn retry_upstream_failure_becomes_service_error() {
    let provider = MockProvider::failing_after(1, "upstream timed out");
    let app = app(&provider);

    let (status, _) = post(&app, "/summarize", Some(minutes_body())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post(&app, "/retry-summary", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"detail": "Error while retrying summary: upstream timed out"})
    );
    assert_eq!(provider.calls().len(), 2);
}

#[tokio::test]
async fn failed_summary_leaves_nothing_to_retry() {
    let provider = MockProvider::failing("connection refused");
    let app = app(&provider);

    post(&app, "/summarize", Some(minutes_body())).await;
    let (status, _) = post(&app, "/retry-summary", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_field_is_rejected_with_detail() {
    let provider = MockProvider::default();
    let app = app(&provider);

    let (status, body) = post(
        &app,
        "/summarize",
        Some(json!({"minutes": "m", "title": "t", "date": "d"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("creator_name"));
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn empty_strings_are_accepted() {
    let provider = MockProvider::default();
    let app = app(&provider);

    let (status, _) = post(
        &app,
        "/summarize",
        Some(json!({"minutes": "", "title": "", "creator_name": "", "date": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}
