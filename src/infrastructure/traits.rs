//! I/O boundary traits for testability
//!
//! The HTTP transport is abstracted so the query service and the dispatcher
//! can be tested against canned responses.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::infrastructure::{InfraError, InfraResult};

/// Status code and raw body of one HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// HTTP transport abstraction.
pub trait HttpClient: Send + Sync {
    /// Send a GET to `url` with the given query parameters.
    ///
    /// A non-2xx status is not an error here; only failures to get any
    /// response at all are.
    fn get(&self, url: &str, query: &[(&str, &str)]) -> InfraResult<HttpResponse>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::blocking::Client,
}

impl ReqwestHttpClient {
    /// Build a client; `timeout` of `None` keeps reqwest's default.
    pub fn new(timeout: Option<Duration>) -> InfraResult<Self> {
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| InfraError::Client {
            message: e.to_string(),
        })?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> InfraResult<HttpResponse> {
        debug!("GET {} {:?}", url, query);
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| InfraError::http(format!("GET {}", url), e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| InfraError::http(format!("read body of {}", url), e))?;
        debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}
