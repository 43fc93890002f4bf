#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body, Bytes};
use axum::extract::{Path, RawQuery, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{post, put};
use axum::{Json, Router};
use ed25519_dalek::{Signer, SigningKey};
use lastpay::config::CallbackPolicy;
use lastpay::http::HttpBuilder;
use lastpay::interactions_endpoint::{Verifier, SIGNATURE_HEADER, TIMESTAMP_HEADER};
use lastpay::model::id::ApplicationId;
use lastpay::server::AppState;
use lastpay::utils::Clock;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower::ServiceExt;
use url::Url;

pub const APPLICATION_ID: u64 = 1295276532704362496;
pub const BOT_TOKEN: &str = "MTI5NTI3NjUzMjcwNDM2MjQ5Ng.token";
pub const TIMESTAMP: &str = "1728868140";

pub fn signing_key() -> SigningKey {
    SigningKey::from_bytes(&[7; 32])
}

pub fn sign(timestamp: &str, body: &str) -> String {
    let signature = signing_key().sign(&[timestamp.as_bytes(), body.as_bytes()].concat());
    signature.to_bytes().iter().map(|b| format!("{b:02x}")).collect()
}

/// State whose outbound requests go to `api`.
pub fn state(api: &Url, policy: CallbackPolicy, clock: Clock) -> AppState {
    let verifier = Verifier::try_new(signing_key().verifying_key().to_bytes()).unwrap();
    let http = HttpBuilder::new(BOT_TOKEN).proxy(api.clone()).build().unwrap();

    AppState {
        verifier: Arc::new(verifier),
        http: Arc::new(http),
        application_id: ApplicationId::new(APPLICATION_ID),
        callback_policy: policy,
        clock,
    }
}

/// A `POST /` carrying `body`, signed with the test key.
pub fn signed_request(body: &str) -> Request<Body> {
    Request::post("/")
        .header(SIGNATURE_HEADER, sign(TIMESTAMP, body))
        .header(TIMESTAMP_HEADER, TIMESTAMP)
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl Reply {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub async fn send(router: Router, request: Request<Body>) -> Reply {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    Reply {
        status,
        headers,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}

/// A request received by the fake Discord API.
#[derive(Clone, Debug)]
pub struct Captured {
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct FakeState {
    status: StatusCode,
    callback_reply: Option<Value>,
    captured: Arc<Mutex<Vec<Captured>>>,
}

/// An in-process stand-in for the Discord API, answering every request with `status`.
pub struct FakeApi {
    pub url: Url,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl FakeApi {
    pub async fn spawn(status: StatusCode) -> Self {
        Self::start(status, None).await
    }

    /// Like [`FakeApi::spawn`], but a successful callback is answered with `reply`.
    pub async fn with_callback_reply(status: StatusCode, reply: Value) -> Self {
        Self::start(status, Some(reply)).await
    }

    async fn start(status: StatusCode, callback_reply: Option<Value>) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            status,
            callback_reply,
            captured: Arc::clone(&captured),
        };

        let router = Router::new()
            .route("/api/v10/interactions/:id/:token/callback", post(callback))
            .route("/api/v10/applications/:id/commands", put(commands))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = Url::parse(&format!("http://{}/", listener.local_addr().unwrap())).unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            url,
            captured,
        }
    }

    pub async fn captured(&self) -> Vec<Captured> {
        self.captured.lock().await.clone()
    }
}

/// A base url nothing listens on.
pub async fn unreachable_api() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = Url::parse(&format!("http://{}/", listener.local_addr().unwrap())).unwrap();
    drop(listener);
    url
}

async fn capture(
    state: &FakeState,
    path: String,
    query: Option<String>,
    headers: &HeaderMap,
    body: &Bytes,
) {
    state.captured.lock().await.push(Captured {
        path,
        query,
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string),
        body: serde_json::from_slice(body).unwrap_or(Value::Null),
    });
}

async fn callback(
    State(state): State<FakeState>,
    Path((id, token)): Path<(String, String)>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = format!("/api/v10/interactions/{id}/{token}/callback");
    capture(&state, path, query, &headers, &body).await;

    if !state.status.is_success() {
        return (state.status, Json(json!({"message": "Unknown interaction", "code": 10062})))
            .into_response();
    }

    if let Some(reply) = state.callback_reply {
        return (state.status, Json(reply)).into_response();
    }

    Json(json!({
        "interaction": {"id": id, "type": 2, "response_message_id": "555"},
        "resource": {"type": 4, "message": {"id": "555", "channel_id": "777"}},
    }))
    .into_response()
}

async fn commands(
    State(state): State<FakeState>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = format!("/api/v10/applications/{id}/commands");
    capture(&state, path, query, &headers, &body).await;

    if !state.status.is_success() {
        return state.status.into_response();
    }

    let sent: Vec<Value> = serde_json::from_slice(&body).unwrap_or_default();
    let created: Vec<Value> = sent
        .into_iter()
        .enumerate()
        .map(|(i, mut command)| {
            command["id"] = json!((i + 1).to_string());
            command["application_id"] = json!(id);
            command
        })
        .collect();

    Json(created).into_response()
}
