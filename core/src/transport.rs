//! Network execution of `HttpRequest` values.
//!
//! # Design
//! `Transport` is the only seam that performs I/O. `ReqwestTransport` is the
//! production implementation; tests substitute in-memory transports. One
//! `execute` call issues exactly one request: no retry, no local timeout.

use async_trait::async_trait;

use crate::error::{ApiError, ParseError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the round-trip. Non-2xx statuses are data, not errors.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `reqwest`-backed transport sharing one connection pool.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };
        let mut builder = self.http.request(method, &request.path);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();

        // Failed statuses are reported without reading the body.
        let body = if status.is_success() {
            response.text().await.map_err(transport_error)?
        } else {
            String::new()
        };

        Ok(HttpResponse {
            status: status.as_u16(),
            headers,
            body,
        })
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    ParseError::Transport(err.to_string()).into()
}
