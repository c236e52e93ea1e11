//! Stateless HTTP request builder and response parser for the dashboard API.
//!
//! # Design
//! `DashboardClient` holds only a `base_url` and carries no mutable state
//! between calls. Building a request and interpreting its response are
//! separate steps, so the whole request helper is testable without a
//! network; `DashboardApi` glues the two together around a `Transport`.

use serde_json::Value;

use crate::endpoint::{BodyTemplate, Endpoint, SortQuery};
use crate::error::{ApiError, ParseError};
use crate::http::{merge_headers, HttpRequest, HttpResponse};
use crate::types::{capture_timestamp, ApplicationIssueRequest, RequestOptions};

/// Synchronous, stateless client for the dashboard API.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    base_url: String,
}

impl DashboardClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for `<base-url><endpoint>`.
    ///
    /// The JSON content type is always sent; a caller header with the same
    /// name replaces it.
    pub fn build_request(&self, endpoint: &str, options: &RequestOptions) -> HttpRequest {
        HttpRequest {
            method: options.method(),
            path: format!("{}{endpoint}", self.base_url),
            headers: merge_headers(&options.headers),
            body: options.body.clone(),
        }
    }

    /// Interpret a response: non-2xx fails with the status, anything else
    /// must be a JSON document.
    pub fn parse_response(&self, response: HttpResponse) -> Result<Value, ApiError> {
        if !response.is_success() {
            return Err(ApiError::Request {
                status: response.status,
            });
        }
        serde_json::from_str(&response.body)
            .map_err(|e| ParseError::InvalidJson(e.to_string()).into())
    }

    /// Build a request for `endpoint` with its route's default body.
    pub fn build_call(&self, endpoint: Endpoint) -> Result<HttpRequest, ApiError> {
        let options = default_options(endpoint)?;
        Ok(self.build_request(endpoint.path(), &options))
    }

    /// Build a request for a sorted variant.
    pub fn build_sorted_call(
        &self,
        endpoint: Endpoint,
        sort: &SortQuery<'_>,
    ) -> Result<HttpRequest, ApiError> {
        let options = default_options(endpoint)?;
        Ok(self.build_request(&endpoint.target(Some(sort)), &options))
    }

    /// Build the chat request, stamped with `timestamp`.
    pub fn build_application_issue(
        &self,
        question: &str,
        timestamp: i64,
    ) -> Result<HttpRequest, ApiError> {
        let options =
            RequestOptions::post().with_json(&ApplicationIssueRequest::new(question, timestamp))?;
        Ok(self.build_request(Endpoint::ApplicationIssue.path(), &options))
    }
}

/// Options derived from a route's method and body template.
fn default_options(endpoint: Endpoint) -> Result<RequestOptions, ParseError> {
    let route = endpoint.route();
    let options = RequestOptions {
        method: Some(route.method),
        ..RequestOptions::default()
    };
    match route.body {
        BodyTemplate::None => Ok(options),
        BodyTemplate::EmptyObject => Ok(options.with_body("{}")),
        BodyTemplate::AgentQuestion => {
            options.with_json(&ApplicationIssueRequest::new("", capture_timestamp()))
        }
    }
}
