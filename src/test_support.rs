//! Stub elevation service and app builders shared by handler tests.

use axum::{
    extract::{Query, State},
    http::header,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value as JsonValue};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use crate::config::{Config, CredentialMode};
use crate::routes;
use crate::state::AppState;

/// The only key the stub accepts
pub const VALID_KEY: &str = "valid-test-key";

/// A running stub upstream and the number of requests it has served
pub struct StubUpstream {
    pub addr: String,
    hits: Arc<AtomicUsize>,
}

impl StubUpstream {
    /// Endpoint answering like the real elevation service
    pub fn elevation_url(&self) -> String {
        format!("http://{}/maps/api/elevation/json", self.addr)
    }

    /// Endpoint answering 200 with a body that is not JSON
    pub fn garbage_url(&self) -> String {
        format!("http://{}/garbage", self.addr)
    }

    /// Endpoint returning documents whose keys are not in alphabetical order
    pub fn unordered_url(&self) -> String {
        format!("http://{}/unordered", self.addr)
    }

    /// Endpoint answering with the JSON literal `null`
    pub fn null_url(&self) -> String {
        format!("http://{}/null", self.addr)
    }

    /// Endpoint that waits far longer than any test timeout
    pub fn slow_url(&self) -> String {
        format!("http://{}/slow", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Mimics the elevation service.
///
/// Wrong key gives REQUEST_DENIED, `path=zero` gives ZERO_RESULTS, anything
/// else is read as `lat,lng[|lat,lng...]` and echoed back as one sample per
/// point so responses can be matched to requests.
async fn stub_elevation(
    State(hits): State<Arc<AtomicUsize>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<JsonValue> {
    hits.fetch_add(1, Ordering::SeqCst);

    let key = params.get("key").map(String::as_str).unwrap_or_default();
    if key != VALID_KEY {
        return Json(json!({
            "error_message": "The provided API key is invalid.",
            "results": [],
            "status": "REQUEST_DENIED"
        }));
    }

    let path = params.get("path").map(String::as_str).unwrap_or_default();
    if path == "zero" {
        return Json(json!({ "results": [], "status": "ZERO_RESULTS" }));
    }

    let results: Vec<JsonValue> = path
        .split('|')
        .filter_map(|point| {
            let (lat, lng) = point.split_once(',')?;
            let lat: f64 = lat.parse().ok()?;
            let lng: f64 = lng.parse().ok()?;
            Some(json!({
                "elevation": lat + lng,
                "location": { "lat": lat, "lng": lng },
                "resolution": 4.5
            }))
        })
        .collect();

    Json(json!({ "results": results, "status": "OK" }))
}

async fn stub_garbage(State(hits): State<Arc<AtomicUsize>>) -> &'static str {
    hits.fetch_add(1, Ordering::SeqCst);
    "<html>definitely not json</html>"
}

pub const UNORDERED_OK_BODY: &str = r#"{"status":"OK","results":[{"location":{"lng":2,"lat":1},"resolution":4.5,"elevation":5}]}"#;
pub const UNORDERED_ZERO_BODY: &str = r#"{"status":"ZERO_RESULTS","results":[]}"#;

/// Raw bodies so the exact key order on the wire is known. `path=zero` gives ZERO_RESULTS.
async fn stub_unordered(
    State(hits): State<Arc<AtomicUsize>>,
    Query(params): Query<HashMap<String, String>>,
) -> ([(header::HeaderName, &'static str); 1], &'static str) {
    hits.fetch_add(1, Ordering::SeqCst);
    let body = if params.get("path").map(String::as_str) == Some("zero") {
        UNORDERED_ZERO_BODY
    } else {
        UNORDERED_OK_BODY
    };
    ([(header::CONTENT_TYPE, "application/json")], body)
}

async fn stub_null(
    State(hits): State<Arc<AtomicUsize>>,
) -> ([(header::HeaderName, &'static str); 1], &'static str) {
    hits.fetch_add(1, Ordering::SeqCst);
    ([(header::CONTENT_TYPE, "application/json")], "null")
}

async fn stub_slow(State(hits): State<Arc<AtomicUsize>>) -> Json<JsonValue> {
    hits.fetch_add(1, Ordering::SeqCst);
    tokio::time::sleep(Duration::from_secs(30)).await;
    Json(json!({ "results": [], "status": "OK" }))
}

pub async fn spawn_stub_upstream() -> StubUpstream {
    let hits = Arc::new(AtomicUsize::new(0));

    let app = Router::new()
        .route("/maps/api/elevation/json", get(stub_elevation))
        .route("/garbage", get(stub_garbage))
        .route("/unordered", get(stub_unordered))
        .route("/null", get(stub_null))
        .route("/slow", get(stub_slow))
        .with_state(hits.clone());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub upstream");
    let addr = listener.local_addr().unwrap().to_string();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubUpstream { addr, hits }
}

/// URL of a port nothing is listening on
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/maps/api/elevation/json", port)
}

pub fn server_config(elevation_api_url: &str, google_api_key: Option<&str>) -> Config {
    Config {
        credential_mode: CredentialMode::Server,
        google_api_key: google_api_key.map(str::to_string),
        elevation_api_url: elevation_api_url.to_string(),
        upstream_timeout: Duration::from_secs(5),
        service_port: 3000,
        service_host: "0.0.0.0".to_string(),
    }
}

pub fn caller_config(elevation_api_url: &str) -> Config {
    Config {
        credential_mode: CredentialMode::Caller,
        google_api_key: None,
        ..server_config(elevation_api_url, None)
    }
}

pub fn test_app(config: Config) -> Router {
    let state = AppState::from_config(config).expect("Failed to build app state");
    routes::router(state)
}
