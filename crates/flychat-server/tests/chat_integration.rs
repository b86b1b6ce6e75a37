//! Integration tests: build the router in-process and drive it with requests.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use flychat_engine::{ChatReply, ErrorBody};
use flychat_server::{Agent, AppState, KnowledgeBase, Lead, LeadBook};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> axum::Router {
    let Value::Object(facts) = json!({"address": "12 Runway Road"}) else {
        unreachable!()
    };
    let leads: Vec<Lead> = serde_json::from_value(json!([{"name": "Asha Rao"}])).unwrap();
    let agent = Agent::new(KnowledgeBase::new(facts), LeadBook::new(leads));
    flychat_server::router(AppState::new(agent))
}

fn post_chat(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body")
        .to_vec()
}

#[tokio::test]
async fn chat_returns_reply() {
    let resp = app()
        .oneshot(post_chat(r#"{"message": "where is your address?"}"#))
        .await
        .expect("request");

    assert_eq!(resp.status(), StatusCode::OK);
    let reply: ChatReply = serde_json::from_slice(&body_bytes(resp).await).expect("parse JSON");
    assert_eq!(reply.reply, "address: 12 Runway Road");
}

#[tokio::test]
async fn chat_routes_to_leads() {
    let resp = app()
        .oneshot(post_chat(r#"{"message": "show lead asha rao"}"#))
        .await
        .expect("request");

    let reply: ChatReply = serde_json::from_slice(&body_bytes(resp).await).expect("parse JSON");
    assert_eq!(reply.reply, r#"{"name":"Asha Rao"}"#);
}

#[tokio::test]
async fn missing_message_is_bad_request() {
    let resp = app().oneshot(post_chat("{}")).await.expect("request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = serde_json::from_slice(&body_bytes(resp).await).expect("parse JSON");
    assert_eq!(body.error, "validation_error");
    assert!(body.message.contains("message"));
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let resp = app().oneshot(post_chat("{not json")).await.expect("request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = serde_json::from_slice(&body_bytes(resp).await).expect("parse JSON");
    assert_eq!(body.error, "validation_error");
}

#[tokio::test]
async fn home_reports_running() {
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app().oneshot(req).await.expect("request");

    assert_eq!(resp.status(), StatusCode::OK);
    let text = String::from_utf8(body_bytes(resp).await).unwrap();
    assert_eq!(text, "Fly Your Tech Chatbot Backend is Running");
}
