//! Tests for QueryService against a stubbed transport

use std::io;
use std::sync::Arc;

use rstest::rstest;

use mbta::application::services::{QueryService, LINES_QUERY};
use mbta::domain::{Line, Outcome, Stop};
use mbta::util::testing::{
    init_test_setup, lines_body, StubHttpClient, STUB_LINES_URL, STUB_STOPS_URL,
    SUBWAY_LINES, SUBWAY_STOPS,
};

fn service(stub: StubHttpClient) -> (QueryService, Arc<StubHttpClient>) {
    init_test_setup();
    let stub = Arc::new(stub);
    (QueryService::new(stub.clone()), stub)
}

fn printed(buf: Vec<u8>) -> Vec<String> {
    String::from_utf8(buf)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

// ============================================================
// list_lines
// ============================================================

#[test]
fn given_subway_routes_when_listing_lines_then_prints_id_and_name_in_server_order() {
    let (service, _) = service(StubHttpClient::with_subway());
    let mut out: Vec<u8> = Vec::new();

    let outcome = service.list_lines(STUB_LINES_URL, &mut out);

    let lines = outcome.items().expect("lines");
    assert_eq!(lines.len(), SUBWAY_LINES.len());
    assert_eq!(
        lines[0],
        Line {
            id: "Blue".into(),
            long_name: "Blue Line".into()
        }
    );
    let printed = printed(out);
    assert_eq!(printed.len(), lines.len());
    assert_eq!(printed[0], "ID: Blue, NAME: Blue Line");
    assert_eq!(printed[6], "ID: Red, NAME: Red Line");
}

#[test]
fn given_unsorted_response_when_listing_lines_then_order_is_not_changed() {
    let stub = StubHttpClient::new().route(
        STUB_LINES_URL,
        None,
        200,
        lines_body(&[("Red", "Red Line"), ("Blue", "Blue Line")]),
    );
    let (service, _) = service(stub);
    let mut out: Vec<u8> = Vec::new();

    service.list_lines(STUB_LINES_URL, &mut out);

    assert_eq!(
        printed(out),
        vec!["ID: Red, NAME: Red Line", "ID: Blue, NAME: Blue Line"]
    );
}

#[test]
fn given_lines_request_then_sends_subway_filter_fields_and_sort() {
    let (service, stub) = service(StubHttpClient::with_subway());

    service.list_lines(STUB_LINES_URL, &mut io::sink());

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, STUB_LINES_URL);
    let expected: Vec<(String, String)> = LINES_QUERY
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(requests[0].query, expected);
    assert!(requests[0]
        .query
        .contains(&("filter[type]".to_string(), "0,1".to_string())));
}

#[test]
fn given_empty_data_when_listing_lines_then_empty_success_and_no_output() {
    let stub = StubHttpClient::new().route(STUB_LINES_URL, None, 200, lines_body(&[]));
    let (service, _) = service(stub);
    let mut out: Vec<u8> = Vec::new();

    let outcome = service.list_lines(STUB_LINES_URL, &mut out);

    assert_eq!(outcome, Outcome::EmptySuccess);
    assert!(out.is_empty());
}

#[test]
fn given_garbage_suffixed_url_when_listing_lines_then_transport_failure() {
    let (service, _) = service(StubHttpClient::with_subway());
    let url = format!("{}foo", STUB_LINES_URL);
    let mut out: Vec<u8> = Vec::new();

    let outcome = service.list_lines(&url, &mut out);

    assert_eq!(outcome, Outcome::TransportFailure);
    assert!(out.is_empty());
}

#[rstest]
#[case(500, r#"{"errors":[]}"#)]
#[case(403, "forbidden")]
#[case(200, "<html>not json</html>")]
#[case(200, r#"{"meta": {}}"#)]
fn given_bad_response_when_listing_lines_then_transport_failure(
    #[case] status: u16,
    #[case] body: &str,
) {
    let stub = StubHttpClient::new().route(STUB_LINES_URL, None, status, body);
    let (service, _) = service(stub);

    let outcome = service.list_lines(STUB_LINES_URL, &mut io::sink());

    assert_eq!(outcome, Outcome::TransportFailure);
}

#[test]
fn given_unreachable_service_when_listing_lines_then_transport_failure() {
    let (service, stub) = service(StubHttpClient::unreachable());

    let outcome = service.list_lines(STUB_LINES_URL, &mut io::sink());

    assert_eq!(outcome, Outcome::TransportFailure);
    assert_eq!(stub.requests().len(), 1);
}

// ============================================================
// list_stops
// ============================================================

#[test]
fn given_every_known_line_when_listing_stops_then_success_and_one_printed_line_per_stop() {
    let (service, _) = service(StubHttpClient::with_subway());

    for (line_id, names) in SUBWAY_STOPS {
        let mut out: Vec<u8> = Vec::new();
        let outcome = service.list_stops(STUB_STOPS_URL, line_id, &mut out);

        let stops = outcome.items().expect("stops");
        assert_eq!(stops.len(), names.len(), "line {}", line_id);
        assert_eq!(printed(out).len(), stops.len(), "line {}", line_id);
    }
}

#[test]
fn given_red_line_when_listing_stops_then_keeps_travel_order() {
    let (service, _) = service(StubHttpClient::with_subway());
    let mut out: Vec<u8> = Vec::new();

    let outcome = service.list_stops(STUB_STOPS_URL, "Red", &mut out);

    assert_eq!(
        outcome.items().unwrap()[0],
        Stop {
            name: "Alewife".into()
        }
    );
    assert_eq!(
        printed(out),
        vec!["Alewife", "Davis", "Porter", "Harvard", "Braintree"]
    );
}

#[test]
fn given_line_id_when_listing_stops_then_sent_verbatim_with_name_field() {
    let (service, stub) = service(StubHttpClient::with_subway());

    service.list_stops(STUB_STOPS_URL, "Green-B", &mut io::sink());

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].query,
        vec![
            ("filter[route]".to_string(), "Green-B".to_string()),
            ("fields[stop]".to_string(), "name".to_string()),
        ]
    );
}

#[rstest]
#[case("red")]
#[case("GREEN-B")]
#[case("Purple")]
fn given_unmatched_line_id_when_listing_stops_then_empty_success(#[case] line_id: &str) {
    let (service, _) = service(StubHttpClient::with_subway());
    let mut out: Vec<u8> = Vec::new();

    let outcome = service.list_stops(STUB_STOPS_URL, line_id, &mut out);

    assert_eq!(outcome, Outcome::EmptySuccess);
    assert!(out.is_empty());
}

#[test]
fn given_garbage_suffixed_url_when_listing_stops_then_transport_failure() {
    let (service, _) = service(StubHttpClient::with_subway());
    let url = format!("{}foo", STUB_STOPS_URL);

    let outcome = service.list_stops(&url, "Red", &mut io::sink());

    assert_eq!(outcome, Outcome::TransportFailure);
}

#[test]
fn given_stop_without_name_when_listing_stops_then_transport_failure() {
    let body = r#"{"data":[{"id":"place-alfcl","attributes":{}}]}"#;
    let stub = StubHttpClient::new().route(STUB_STOPS_URL, Some("Red"), 200, body);
    let (service, _) = service(stub);

    let outcome = service.list_stops(STUB_STOPS_URL, "Red", &mut io::sink());

    assert_eq!(outcome, Outcome::TransportFailure);
}

#[test]
fn given_same_query_twice_then_identical_outcome_and_output() {
    let (service, _) = service(StubHttpClient::with_subway());
    let mut first: Vec<u8> = Vec::new();
    let mut second: Vec<u8> = Vec::new();

    let a = service.list_stops(STUB_STOPS_URL, "Orange", &mut first);
    let b = service.list_stops(STUB_STOPS_URL, "Orange", &mut second);

    assert_eq!(a, b);
    assert_eq!(first, second);
}
