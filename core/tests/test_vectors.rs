//! Verify request building and response parsing against `test-vectors/`.
//!
//! Each case names a call-site, its inputs, the request it must produce, a
//! simulated response, and the expected parse result or error. Bodies are
//! compared as parsed JSON so field order does not matter.

use dashboard_core::{
    ApiError, DashboardClient, Endpoint, HttpMethod, HttpRequest, HttpResponse, SortQuery,
};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8000/api";

fn client() -> DashboardClient {
    DashboardClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

/// Build the request a case describes, the way its call-site would.
fn build(c: &DashboardClient, case: &Value) -> HttpRequest {
    let name = case["endpoint"].as_str().unwrap();
    let endpoint = Endpoint::from_name(name).unwrap_or_else(|| panic!("unknown endpoint: {name}"));

    if endpoint == Endpoint::ApplicationIssue {
        let question = case["question"].as_str().unwrap();
        let timestamp = case["timestamp"].as_i64().unwrap();
        return c.build_application_issue(question, timestamp).unwrap();
    }
    match case.get("sort") {
        Some(sort) => {
            let sort = SortQuery::new(
                sort["sortBy"].as_str().unwrap(),
                sort["sortDirection"].as_str().unwrap(),
            );
            c.build_sorted_call(endpoint, &sort).unwrap()
        }
        None => c.build_call(endpoint).unwrap(),
    }
}

#[test]
fn endpoint_test_vectors() {
    let raw = include_str!("../../test-vectors/endpoints.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = build(&c, case);
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert_eq!(req.header("content-type"), Some("application/json"), "{name}: content type");

        match &expected_req["body"] {
            Value::Null => assert!(req.body.is_none(), "{name}: body should be None"),
            expected => {
                let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
                assert_eq!(&body, expected, "{name}: body");
            }
        }

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        };
        let result = c.parse_response(response);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "Request" => {
                    let status = case["expected_status"].as_u64().unwrap() as u16;
                    assert!(
                        matches!(err, ApiError::Request { status: s } if s == status),
                        "{name}: expected Request({status}), got {err:?}"
                    );
                }
                "Parse" => assert!(matches!(err, ApiError::Parse(_)), "{name}: expected Parse"),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            assert_eq!(result.unwrap(), case["expected_result"], "{name}: parsed result");
        }
    }
}

#[test]
fn vectors_cover_every_endpoint() {
    let raw = include_str!("../../test-vectors/endpoints.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let covered: Vec<&str> = vectors["cases"]
        .as_array()
        .unwrap()
        .iter()
        .map(|case| case["endpoint"].as_str().unwrap())
        .collect();

    for endpoint in Endpoint::ALL {
        assert!(covered.contains(&endpoint.name()), "no vector for {}", endpoint.name());
    }
}
