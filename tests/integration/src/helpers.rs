//! Test helpers for integration tests
//!
//! Provides a fake backend, a server runner and response assertions.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode as AxumStatus},
    response::{IntoResponse, Response as AxumResponse},
    routing::get,
    Router,
};
use card_common::AppConfig;
use card_web::{create_app, create_app_state};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Directory holding the site's static assets
pub const ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets");

// ============================================================================
// Fake Backend
// ============================================================================

/// Data and request log of the fake backend
#[derive(Default)]
pub struct BackendState {
    members: HashMap<String, Value>,
    notices: Value,
    broken: bool,
    requests: AtomicUsize,
    last_query: Mutex<Option<HashMap<String, String>>>,
}

/// Builder for a fake spreadsheet backend
#[derive(Default)]
pub struct FakeBackendBuilder {
    state: BackendState,
}

impl FakeBackendBuilder {
    /// Add a member reachable by `token`
    pub fn member(mut self, token: &str, member: Value) -> Self {
        self.state.members.insert(token.to_string(), member);
        self
    }

    /// Set the `notices` value returned by the backend
    pub fn notices(mut self, notices: Value) -> Self {
        self.state.notices = notices;
        self
    }

    /// Answer every request with HTTP 500
    pub fn broken(mut self) -> Self {
        self.state.broken = true;
        self
    }

    /// Start serving on an ephemeral port
    pub async fn spawn(self) -> Result<FakeBackend> {
        let state = Arc::new(self.state);
        let app = Router::new()
            .route("/exec", get(backend_exec))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(FakeBackend {
            addr,
            state,
            _handle: handle,
        })
    }
}

/// Running fake backend
pub struct FakeBackend {
    pub addr: SocketAddr,
    state: Arc<BackendState>,
    _handle: JoinHandle<()>,
}

impl FakeBackend {
    pub fn builder() -> FakeBackendBuilder {
        FakeBackendBuilder::default()
    }

    /// URL to configure as `BACKEND_API_BASE`
    pub fn api_base(&self) -> String {
        format!("http://{}/exec", self.addr)
    }

    /// Number of requests received so far
    pub fn requests(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }

    /// Query parameters of the most recent request
    pub fn last_query(&self) -> Option<HashMap<String, String>> {
        self.state.last_query.lock().ok().and_then(|q| q.clone())
    }
}

async fn backend_exec(
    State(state): State<Arc<BackendState>>,
    Query(params): Query<HashMap<String, String>>,
) -> AxumResponse {
    state.requests.fetch_add(1, Ordering::SeqCst);
    if let Ok(mut last) = state.last_query.lock() {
        *last = Some(params.clone());
    }

    if state.broken {
        return (AxumStatus::INTERNAL_SERVER_ERROR, "backend exploded").into_response();
    }

    match params.get("type").map(String::as_str) {
        Some("member") => {
            let member = params
                .get("token")
                .and_then(|t| state.members.get(t))
                .cloned()
                .unwrap_or(Value::Null);
            axum::Json(json!({ "member": member })).into_response()
        }
        Some("notices") => {
            let body = json!({ "notices": state.notices });
            match params.get("callback") {
                Some(callback) => (
                    [(header::CONTENT_TYPE, "text/javascript")],
                    format!("{callback}({body});"),
                )
                    .into_response(),
                None => axum::Json(body).into_response(),
            }
        }
        _ => (AxumStatus::BAD_REQUEST, "unknown type").into_response(),
    }
}

// ============================================================================
// Test Server
// ============================================================================

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server talking to `backend`
    pub async fn start(backend: &FakeBackend) -> Result<Self> {
        Self::start_with(backend, &[]).await
    }

    /// Start a server with extra configuration variables
    pub async fn start_with(backend: &FakeBackend, vars: &[(&str, &str)]) -> Result<Self> {
        let config = test_config(&backend.api_base(), vars)?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state)?;

        // Bind to an ephemeral port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with query parameters
    pub async fn get_query(&self, path: &str, query: &[(&str, &str)]) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).query(query).send().await?)
    }
}

/// Create a test configuration pointing at `api_base`
pub fn test_config(api_base: &str, vars: &[(&str, &str)]) -> Result<AppConfig> {
    let mut map: HashMap<String, String> = HashMap::from([
        ("WEB_PORT".to_string(), "0".to_string()),
        ("BACKEND_API_BASE".to_string(), api_base.to_string()),
        ("BACKEND_TIMEOUT_SECS".to_string(), "5".to_string()),
        ("STATIC_DIR".to_string(), ASSETS_DIR.to_string()),
        ("RATE_LIMIT_BURST".to_string(), "1000".to_string()),
    ]);
    for (key, value) in vars {
        map.insert((*key).to_string(), (*value).to_string());
    }

    let config = AppConfig::from_lookup(|key| map.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

// ============================================================================
// Assertions
// ============================================================================

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status and return the body text
pub async fn assert_html(response: Response, expected_status: StatusCode) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected_status {
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(body)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
