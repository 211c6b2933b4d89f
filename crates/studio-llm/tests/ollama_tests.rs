//! OllamaClient against an in-process fake service

use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use studio_llm::prelude::*;
use warp::http::StatusCode;
use warp::Filter;

type Seen = Arc<Mutex<Vec<Value>>>;

/// Serve `reply` with `status` on `/api/generate`, recording request bodies
fn spawn_fake(status: StatusCode, reply: Value) -> (SocketAddr, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = seen.clone();
    let route = warp::post()
        .and(warp::path!("api" / "generate"))
        .and(warp::body::json())
        .map(move |body: Value| {
            recorder.lock().unwrap().push(body);
            warp::reply::with_status(warp::reply::json(&reply), status)
        });
    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    (addr, seen)
}

fn client_for(addr: SocketAddr) -> OllamaClient {
    let config = LlmConfig::default().with_endpoint(format!("http://{addr}/api/generate"));
    OllamaClient::new(config).unwrap()
}

#[tokio::test]
async fn returns_response_text() {
    let (addr, seen) = spawn_fake(
        StatusCode::OK,
        json!({"model": "mistral:instruct", "response": "1. Wake up", "done": true}),
    );
    let text = client_for(addr).generate("Create a storyboard").await.unwrap();
    assert_eq!(text, "1. Wake up");

    let requests = seen.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["model"], "mistral:instruct");
    assert_eq!(requests[0]["prompt"], "Create a storyboard");
    assert_eq!(requests[0]["stream"], false);
    assert!(requests[0]["options"]["temperature"].is_number());
}

#[tokio::test]
async fn error_status_carries_service_message() {
    let (addr, _) = spawn_fake(
        StatusCode::NOT_FOUND,
        json!({"error": "model 'mistral:instruct' not found"}),
    );
    let err = client_for(addr).generate("hi").await.unwrap_err();
    assert!(matches!(err, LlmError::Status { status: 404, .. }));
    assert_eq!(err.to_string(), "Ollama API error: model 'mistral:instruct' not found");
}

#[tokio::test]
async fn error_status_without_body_uses_reason() {
    let (addr, _) = spawn_fake(StatusCode::INTERNAL_SERVER_ERROR, json!({}));
    let err = client_for(addr).generate("hi").await.unwrap_err();
    assert_eq!(err.to_string(), "Ollama API error: Internal Server Error");
    assert!(err.is_retryable());
}

#[tokio::test]
async fn ok_with_error_field_is_service_error() {
    let (addr, _) = spawn_fake(StatusCode::OK, json!({"error": "out of memory"}));
    let err = client_for(addr).generate("hi").await.unwrap_err();
    assert!(matches!(err, LlmError::Service(ref m) if m == "out of memory"));
}

#[tokio::test]
async fn missing_response_is_malformed() {
    let (addr, _) = spawn_fake(StatusCode::OK, json!({"done": true}));
    let err = client_for(addr).generate("hi").await.unwrap_err();
    assert!(matches!(err, LlmError::Malformed(_)));
}

#[tokio::test]
async fn unreachable_service_is_http_error() {
    // Bind then drop to get a port nothing listens on
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let config = LlmConfig::default().with_endpoint(format!("http://127.0.0.1:{port}/api/generate"));
    let err = OllamaClient::new(config).unwrap().generate("hi").await.unwrap_err();
    assert!(matches!(err, LlmError::Http(_)));
    assert!(err.is_retryable());
}
