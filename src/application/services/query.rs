//! Transit query service
//!
//! Runs one of the two supported queries against the MBTA v3 API and
//! reduces the JSON:API response to domain entities.

use std::io::Write;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::domain::{Line, Outcome, Stop};
use crate::infrastructure::traits::HttpClient;

/// Query selecting subway (light rail + heavy rail) routes sorted by id.
pub const LINES_QUERY: [(&str, &str); 3] = [
    ("filter[type]", "0,1"),
    ("fields[route]", "long_name,id"),
    ("sort", "id"),
];

const ROUTE_FILTER: &str = "filter[route]";
const STOP_FIELDS: (&str, &str) = ("fields[stop]", "name");

/// Top-level JSON:API document.
#[derive(Debug, Deserialize)]
struct Document<A> {
    data: Vec<Resource<A>>,
}

#[derive(Debug, Deserialize)]
struct Resource<A> {
    #[serde(default)]
    id: String,
    attributes: A,
}

#[derive(Debug, Deserialize)]
struct RouteAttributes {
    long_name: String,
}

#[derive(Debug, Deserialize)]
struct StopAttributes {
    name: String,
}

/// Service issuing transit queries.
pub struct QueryService {
    http: Arc<dyn HttpClient>,
}

impl QueryService {
    /// Create a new query service.
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// List all subway lines, writing `ID: {id}, NAME: {long_name}` per line to `out`.
    #[instrument(skip(self, out))]
    pub fn list_lines(&self, url: &str, out: &mut dyn Write) -> Outcome<Line> {
        let Some(document) = self.fetch::<RouteAttributes>(url, &LINES_QUERY) else {
            return Outcome::TransportFailure;
        };

        let lines: Vec<Line> = document
            .data
            .into_iter()
            .map(|resource| Line {
                id: resource.id,
                long_name: resource.attributes.long_name,
            })
            .collect();
        debug!("list_lines: {} lines", lines.len());

        for line in &lines {
            emit(out, format_args!("ID: {}, NAME: {}", line.id, line.long_name));
        }
        Outcome::from_items(lines)
    }

    /// List the stops of `line_id` in travel order, writing one stop name per line to `out`.
    ///
    /// The identifier is sent verbatim; ids are case-sensitive and an
    /// unknown id yields `EmptySuccess`.
    #[instrument(skip(self, out))]
    pub fn list_stops(&self, url: &str, line_id: &str, out: &mut dyn Write) -> Outcome<Stop> {
        let query = [(ROUTE_FILTER, line_id), STOP_FIELDS];
        let Some(document) = self.fetch::<StopAttributes>(url, &query) else {
            return Outcome::TransportFailure;
        };

        let stops: Vec<Stop> = document
            .data
            .into_iter()
            .map(|resource| Stop {
                name: resource.attributes.name,
            })
            .collect();
        debug!("list_stops: {} stops for {}", stops.len(), line_id);

        for stop in &stops {
            emit(out, format_args!("{}", stop.name));
        }
        Outcome::from_items(stops)
    }

    /// Send the request and decode the document.
    ///
    /// `None` for every way the exchange can fail: no response, non-2xx
    /// status, or an undecodable body.
    fn fetch<A: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Option<Document<A>> {
        let response = match self.http.get(url, query) {
            Ok(response) => response,
            Err(e) => {
                warn!("request failed: {}", e);
                return None;
            }
        };

        if !response.is_success() {
            warn!("GET {} returned status {}", url, response.status);
            return None;
        }

        match response.json::<Document<A>>() {
            Ok(document) => Some(document),
            Err(e) => {
                warn!("cannot decode response from {}: {}", url, e);
                None
            }
        }
    }
}

fn emit(out: &mut dyn Write, line: std::fmt::Arguments<'_>) {
    if let Err(e) = writeln!(out, "{}", line) {
        warn!("cannot write output: {}", e);
    }
}
