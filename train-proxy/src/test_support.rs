//! In-process stand-in for the upstream auth and train-list endpoints.
//!
//! Serves configurable responses from a real axum server on an ephemeral
//! localhost port, so the reqwest clients are exercised end to end.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;

use crate::auth::{AuthClient, AuthConfig, Credentials};
use crate::domain::{DepartureTime, FareClasses, Train};
use crate::feed::{FeedConfig, TrainFeedClient};

type Reply = (StatusCode, String);

struct MockState {
    auth_reply: Mutex<Reply>,
    trains_reply: Mutex<Reply>,
    auth_calls: AtomicUsize,
    train_calls: AtomicUsize,
    last_auth_body: Mutex<Option<serde_json::Value>>,
    last_authorization: Mutex<Option<String>>,
}

/// A running mock upstream.
pub(crate) struct MockUpstream {
    addr: SocketAddr,
    state: Arc<MockState>,
    http: reqwest::Client,
}

impl MockUpstream {
    /// Start a mock that issues `test-token` (valid for an hour) and serves `[]`.
    pub(crate) async fn start() -> Self {
        let state = Arc::new(MockState {
            auth_reply: Mutex::new(token_reply("test-token", Utc::now().timestamp() + 3600)),
            trains_reply: Mutex::new((StatusCode::OK, "[]".to_string())),
            auth_calls: AtomicUsize::new(0),
            train_calls: AtomicUsize::new(0),
            last_auth_body: Mutex::new(None),
            last_authorization: Mutex::new(None),
        });

        let app = Router::new()
            .route("/auth", post(auth))
            .route("/trains", get(trains))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            http: reqwest::Client::new(),
        }
    }

    pub(crate) fn auth_url(&self) -> String {
        format!("http://{}/auth", self.addr)
    }

    pub(crate) fn train_url(&self) -> String {
        format!("http://{}/trains", self.addr)
    }

    pub(crate) fn credentials() -> Credentials {
        Credentials {
            company_name: "Test Co".into(),
            client_id: "test-client".into(),
            client_secret: "test-secret".into(),
            owner_name: "Test Owner".into(),
            owner_email: "owner@example.com".into(),
            roll_no: "1".into(),
        }
    }

    pub(crate) fn auth_client(&self) -> AuthClient {
        AuthClient::new(
            self.http.clone(),
            AuthConfig::new(self.auth_url(), Self::credentials()),
        )
    }

    pub(crate) fn feed_client(&self) -> TrainFeedClient {
        TrainFeedClient::new(self.http.clone(), FeedConfig::new(self.train_url()))
    }

    pub(crate) fn issue_token(&self, token: &str, expires_at: i64) {
        *self.state.auth_reply.lock().unwrap() = token_reply(token, expires_at);
    }

    pub(crate) fn reply_auth(&self, status: StatusCode, body: impl Into<String>) {
        *self.state.auth_reply.lock().unwrap() = (status, body.into());
    }

    pub(crate) fn serve_trains(&self, trains: &[Train]) {
        let body = serde_json::to_string(trains).unwrap();
        self.reply_trains(StatusCode::OK, body);
    }

    pub(crate) fn reply_trains(&self, status: StatusCode, body: impl Into<String>) {
        *self.state.trains_reply.lock().unwrap() = (status, body.into());
    }

    pub(crate) fn auth_calls(&self) -> usize {
        self.state.auth_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn train_calls(&self) -> usize {
        self.state.train_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_auth_body(&self) -> Option<serde_json::Value> {
        self.state.last_auth_body.lock().unwrap().clone()
    }

    pub(crate) fn last_authorization(&self) -> Option<String> {
        self.state.last_authorization.lock().unwrap().clone()
    }
}

fn token_reply(token: &str, expires_at: i64) -> Reply {
    let body = serde_json::json!({ "access_token": token, "expires_in": expires_at });
    (StatusCode::OK, body.to_string())
}

async fn auth(
    State(state): State<Arc<MockState>>,
    Json(body): Json<serde_json::Value>,
) -> Reply {
    state.auth_calls.fetch_add(1, Ordering::SeqCst);
    *state.last_auth_body.lock().unwrap() = Some(body);
    state.auth_reply.lock().unwrap().clone()
}

async fn trains(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Reply {
    state.train_calls.fetch_add(1, Ordering::SeqCst);
    *state.last_authorization.lock().unwrap() = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.trains_reply.lock().unwrap().clone()
}

/// A URL on a localhost port nothing is listening on.
pub(crate) async fn closed_port_url(path: &str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}{path}")
}

/// Build a train with the given sleeper price and seats. AC figures are
/// derived so they never influence ordering.
pub(crate) fn train(
    name: &str,
    sleeper_price: i64,
    sleeper_seats: i64,
    departure: DepartureTime,
    delay_mins: i64,
) -> Train {
    Train {
        name: name.to_string(),
        number: name.to_string(),
        departure,
        seats: FareClasses::new(sleeper_seats, sleeper_seats),
        price: FareClasses::new(sleeper_price, sleeper_price * 2),
        delay_mins,
    }
}
