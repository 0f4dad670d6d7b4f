use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use shop_chatbot_backend::error::RelayError;
use shop_chatbot_backend::message::ChatResponse;
use shop_chatbot_backend::routes::create_router;
use shop_chatbot_backend::services::catalog::Catalog;
use shop_chatbot_backend::services::provider::CompletionProvider;
use shop_chatbot_backend::services::relay::FALLBACK_REPLY;
use shop_chatbot_backend::state::AppState;

struct StubProvider {
    reply: &'static str,
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, RelayError> {
        Ok(self.reply.to_string())
    }
}

struct DownProvider;

#[async_trait]
impl CompletionProvider for DownProvider {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, RelayError> {
        Err(RelayError::Provider(reqwest::StatusCode::TOO_MANY_REQUESTS))
    }
}

fn app_with(provider: impl CompletionProvider + 'static) -> axum::Router {
    let state = Arc::new(AppState::new(Catalog::builtin(), Arc::new(provider)));
    create_router().with_state(state)
}

fn chat_request(message: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(format!(r#"{{"message": "{}"}}"#, message)))
        .unwrap()
}

#[tokio::test]
async fn test_chat_endpoint_returns_products() {
    let app = app_with(StubProvider {
        reply: "The cap comes in black and white.\nPRODUCT_IDS: [2]",
    });

    let response = app.oneshot(chat_request("what colors does the cap come in?"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let chat_resp: ChatResponse = serde_json::from_slice(&body_bytes).unwrap();

    assert_eq!(chat_resp.response, "The cap comes in black and white.");
    assert_eq!(chat_resp.products.len(), 1);
    assert_eq!(chat_resp.products[0].id, 2);
    assert_eq!(chat_resp.products[0].name, "TikTok Cap");
}

#[tokio::test]
async fn test_provider_failure_still_returns_200() {
    let app = app_with(DownProvider);

    let response = app.oneshot(chat_request("hello")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let chat_resp: ChatResponse = serde_json::from_slice(&body_bytes).unwrap();

    assert_eq!(chat_resp.response, FALLBACK_REPLY);
    assert!(chat_resp.products.is_empty());
}

#[tokio::test]
async fn test_empty_message_is_accepted() {
    let app = app_with(StubProvider {
        reply: "Sorry, I couldn't find anything matching your request. PRODUCT_IDS: []",
    });

    let response = app.oneshot(chat_request("")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let chat_resp: ChatResponse = serde_json::from_slice(&body_bytes).unwrap();
    assert!(chat_resp.products.is_empty());
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app_with(StubProvider { reply: "unused" });

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
