//! In-process stand-in for a Vikunja instance.
//!
//! Every request is recorded and answered with the same canned status and body.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::Query;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::vikunja::VikunjaClient;

pub const TEST_TOKEN: &str = "tk_test_token";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<serde_json::Value>,
}

pub struct MockVikunja {
    url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl MockVikunja {
    pub async fn respond_with(status: StatusCode, body: impl Into<String>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&requests);
        let body: String = body.into();

        let app = Router::new().fallback(
            move |method: Method,
                  uri: Uri,
                  Query(query): Query<Vec<(String, String)>>,
                  headers: HeaderMap,
                  payload: Bytes| {
                let recorder = Arc::clone(&recorder);
                let body = body.clone();
                async move {
                    let header_value = |name: header::HeaderName| {
                        headers
                            .get(name)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string)
                    };
                    recorder.lock().unwrap().push(RecordedRequest {
                        method: method.to_string(),
                        path: uri.path().to_string(),
                        query,
                        authorization: header_value(header::AUTHORIZATION),
                        content_type: header_value(header::CONTENT_TYPE),
                        body: serde_json::from_slice(&payload).ok(),
                    });
                    (status, [(header::CONTENT_TYPE, "application/json")], body)
                }
            },
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}", addr),
            requests,
            handle,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn config(&self) -> Config {
        Config::new(self.url.clone(), TEST_TOKEN)
    }

    pub fn client(&self) -> VikunjaClient {
        VikunjaClient::new(&self.config(), http_client())
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockVikunja {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Shared transport for tests, bypassing any proxy configured in the environment.
pub fn http_client() -> reqwest::Client {
    let _ = rustls::crypto::ring::default_provider().install_default();
    reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

/// Argument object for a tool call.
pub fn arguments(value: serde_json::Value) -> rmcp::model::JsonObject {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("tool arguments must be an object, got {other}"),
    }
}

/// Text of a single-content tool result.
pub fn result_text(result: &rmcp::model::CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => text.text.as_str(),
        _ => panic!("Expected text content"),
    }
}

pub fn is_error(result: &rmcp::model::CallToolResult) -> bool {
    result.is_error == Some(true)
}

/// A source with neither VIKUNJA_URL nor VIKUNJA_TOKEN set.
#[derive(Clone)]
pub struct Unconfigured;

impl crate::config::ConfigSource for Unconfigured {
    fn resolve(&self) -> crate::config::ConfigResult<Config> {
        Config::from_lookup(|_| None)
    }
}
