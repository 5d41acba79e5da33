//! Router fixtures and a stub chat-completion upstream for route tests.

use std::sync::{Arc, Mutex};

use axum::{
    body::to_bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::Response,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use pathforge_runtime_config::{PathforgeConfig, UpstreamSettings};

use crate::{build_router, AppState};

type SeenRequests = Arc<Mutex<Vec<(Option<String>, Value)>>>;

/// A local chat-completion endpoint that answers every request the same way
/// and remembers what it was sent.
pub struct StubUpstream {
    base_url: String,
    seen: SeenRequests,
}

impl StubUpstream {
    /// Answer with one choice whose content is `content`.
    pub async fn replying(content: &str) -> Self {
        let body = json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        });
        Self::start(StatusCode::OK, body).await
    }

    /// Answer with `status` and an upstream-style error body.
    pub async fn failing(status: StatusCode, message: &str) -> Self {
        Self::start(status, json!({ "error": { "message": message } })).await
    }

    async fn start(status: StatusCode, body: Value) -> Self {
        let seen = SeenRequests::default();
        let app = Router::new()
            .route(
                "/v1/chat/completions",
                post(
                    move |State(seen): State<SeenRequests>,
                          headers: HeaderMap,
                          Json(request): Json<Value>| {
                        let body = body.clone();
                        async move {
                            let auth = headers
                                .get(header::AUTHORIZATION)
                                .and_then(|v| v.to_str().ok())
                                .map(str::to_string);
                            seen.lock().expect("lock").push((auth, request));
                            (status, Json(body))
                        }
                    },
                ),
            )
            .with_state(seen.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub upstream");
        let addr = listener.local_addr().expect("stub upstream addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{addr}/v1"),
            seen,
        }
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().expect("lock").len()
    }

    /// Authorization header and JSON body of the latest request.
    pub fn last_request(&self) -> Option<(Option<String>, Value)> {
        self.seen.lock().expect("lock").last().cloned()
    }
}

/// Router whose upstream points at `stub`.
pub fn router_with_upstream(stub: &StubUpstream) -> Router {
    let config = PathforgeConfig {
        upstream: UpstreamSettings {
            base_url: stub.base_url.clone(),
            ..UpstreamSettings::default()
        },
        ..PathforgeConfig::default()
    };
    build_router(AppState::new(config))
}

/// Router with default settings, for routes that never reach the upstream.
pub fn test_router() -> Router {
    build_router(AppState::new(PathforgeConfig::default()))
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

pub fn set_cookie_headers(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect()
}
