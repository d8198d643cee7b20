use axum::{extract::State, http::StatusCode, http::Uri, routing::post, Json, Router};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::client::BookingApiClient;
use crate::config::ClientConfig;

// Behaviour of the fake backend
struct BackendState {
    status: StatusCode,
    delay: Duration,
    seen: Arc<Mutex<Vec<(String, Value)>>>,
}

/// Requests received by the fake backend as (path, body).
pub type SeenRequests = Arc<Mutex<Vec<(String, Value)>>>;

async fn record_request(
    State(state): State<Arc<BackendState>>,
    uri: Uri,
    Json(body): Json<Value>,
) -> StatusCode {
    state.seen.lock().unwrap().push((uri.path().to_string(), body));
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    state.status
}

/// Serve `/api/bookings` and `/api/register` on an ephemeral local port.
pub async fn spawn_backend(status: StatusCode, delay: Duration) -> (String, SeenRequests) {
    let seen: SeenRequests = Arc::new(Mutex::new(Vec::new()));
    let state = Arc::new(BackendState {
        status,
        delay,
        seen: Arc::clone(&seen),
    });

    let app = Router::new()
        .route("/api/bookings", post(record_request))
        .route("/api/register", post(record_request))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), seen)
}

pub fn client_for(base_url: &str, timeout: Duration) -> BookingApiClient {
    BookingApiClient::new(&ClientConfig {
        base_url: base_url.to_string(),
        timeout,
    })
    .unwrap()
}
