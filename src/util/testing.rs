use std::collections::HashMap;
use std::sync::{Mutex, Once};

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::config::{Endpoints, Settings};
use crate::infrastructure::traits::{HttpClient, HttpResponse};
use crate::infrastructure::{InfraError, InfraResult};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    let env_filter = EnvFilter::try_from_env("MBTA_LOG").unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Settings pointing at the stub endpoints below.
pub fn stub_settings() -> Settings {
    Settings {
        endpoints: Endpoints {
            list_lines_url: STUB_LINES_URL.to_string(),
            list_stops_url: STUB_STOPS_URL.to_string(),
        },
        timeout_secs: None,
    }
}

pub const STUB_LINES_URL: &str = "https://stub.test/routes";
pub const STUB_STOPS_URL: &str = "https://stub.test/stops";

/// One recorded GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

/// In-memory HTTP transport.
///
/// Responses are keyed by URL plus an optional `filter[route]` value.
/// Unknown URLs answer 404, like the real service does for a mangled path.
#[derive(Debug, Default)]
pub struct StubHttpClient {
    responses: HashMap<(String, Option<String>), HttpResponse>,
    unreachable: bool,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub preloaded with a small subway network.
    pub fn with_subway() -> Self {
        let mut stub = Self::new()
            .route(STUB_LINES_URL, None, 200, lines_body(SUBWAY_LINES))
            .route(STUB_STOPS_URL, None, 200, stops_body(&[]));
        for (line_id, stops) in SUBWAY_STOPS {
            stub = stub.route(STUB_STOPS_URL, Some(*line_id), 200, stops_body(stops));
        }
        stub
    }

    /// Every request fails before a response arrives.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn route(
        mut self,
        url: &str,
        line_id: Option<&str>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        self.responses.insert(
            (url.to_string(), line_id.map(str::to_string)),
            HttpResponse::new(status, body),
        );
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl HttpClient for StubHttpClient {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> InfraResult<HttpResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                url: url.to_string(),
                query: query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            });
        }
        if self.unreachable {
            return Err(InfraError::Client {
                message: format!("connection refused: {}", url),
            });
        }

        let route = query
            .iter()
            .find(|(k, _)| *k == "filter[route]")
            .map(|(_, v)| v.to_string());
        let response = self
            .responses
            .get(&(url.to_string(), route))
            .or_else(|| self.responses.get(&(url.to_string(), None)))
            .cloned()
            .unwrap_or_else(|| HttpResponse::new(404, r#"{"errors":[{"status":"404"}]}"#));
        Ok(response)
    }
}

pub const SUBWAY_LINES: &[(&str, &str)] = &[
    ("Blue", "Blue Line"),
    ("Green-B", "Green Line B"),
    ("Green-C", "Green Line C"),
    ("Green-D", "Green Line D"),
    ("Mattapan", "Mattapan Trolley"),
    ("Orange", "Orange Line"),
    ("Red", "Red Line"),
];

pub const SUBWAY_STOPS: &[(&str, &[&str])] = &[
    ("Blue", &["Wonderland", "Revere Beach", "Beachmont", "Bowdoin"]),
    ("Green-B", &["Boston College", "South Street", "Kenmore", "Government Center"]),
    ("Green-C", &["Cleveland Circle", "Englewood Avenue", "Kenmore"]),
    ("Green-D", &["Riverside", "Woodland", "Kenmore", "Union Square"]),
    ("Mattapan", &["Ashmont", "Cedar Grove", "Mattapan"]),
    ("Orange", &["Oak Grove", "Malden Center", "Forest Hills"]),
    ("Red", &["Alewife", "Davis", "Porter", "Harvard", "Braintree"]),
];

/// JSON:API body for a list of routes.
pub fn lines_body(lines: &[(&str, &str)]) -> String {
    let data: Vec<serde_json::Value> = lines
        .iter()
        .map(|(id, long_name)| {
            serde_json::json!({
                "type": "route",
                "id": id,
                "attributes": { "long_name": long_name },
            })
        })
        .collect();
    serde_json::json!({ "data": data, "jsonapi": { "version": "1.0" } }).to_string()
}

/// JSON:API body for a list of stops.
pub fn stops_body(names: &[&str]) -> String {
    let data: Vec<serde_json::Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            serde_json::json!({
                "type": "stop",
                "id": format!("place-{}", i),
                "attributes": { "name": name },
            })
        })
        .collect();
    serde_json::json!({ "data": data, "jsonapi": { "version": "1.0" } }).to_string()
}

// test
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_setup() {
        init_test_setup();
    }

    #[test]
    fn given_unknown_url_when_stub_get_then_404() {
        let stub = StubHttpClient::with_subway();
        let response = stub.get("https://stub.test/routesfoo", &[]).unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(stub.requests().len(), 1);
    }
}
