//! Request payloads and per-call options.

use std::sync::atomic::{AtomicI64, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::http::HttpMethod;

/// Agent label attached to every chat question.
pub const APPLICATION_ISSUES_AGENT: &str = "Application Issues";

/// Optional knobs for a single helper call. A missing method means GET.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Option<HttpMethod>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn post() -> Self {
        Self {
            method: Some(HttpMethod::Post),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `payload` as the body.
    pub fn with_json<T: Serialize>(self, payload: &T) -> Result<Self, ParseError> {
        let body = serde_json::to_string(payload).map_err(|e| ParseError::Encode(e.to_string()))?;
        Ok(self.with_body(body))
    }

    pub fn method(&self) -> HttpMethod {
        self.method.unwrap_or_default()
    }
}

/// Chat question sent to `ApplicationIssue/getApplicationIssue/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationIssueRequest {
    pub agent: String,
    pub question: String,
    pub timestamp: i64,
}

impl ApplicationIssueRequest {
    pub fn new(question: &str, timestamp: i64) -> Self {
        Self {
            agent: APPLICATION_ISSUES_AGENT.to_string(),
            question: question.to_string(),
            timestamp,
        }
    }
}

static LAST_TIMESTAMP: AtomicI64 = AtomicI64::new(0);

/// Capture time in Unix milliseconds.
///
/// Strictly increasing within the process: two captures in the same
/// millisecond are one apart.
pub fn capture_timestamp() -> i64 {
    let now = chrono::Utc::now().timestamp_millis();
    let mut last = LAST_TIMESTAMP.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_TIMESTAMP.compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed)
        {
            Ok(_) => return next,
            Err(current) => last = current,
        }
    }
}
