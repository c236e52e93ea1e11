//! Error types for the dashboard API client.
//!
//! # Design
//! Two kinds only. `Request` means the backend answered with a non-2xx
//! status; the body is never inspected in that case. `Parse` covers every
//! other way a call can fail to produce a JSON value, including the network
//! call itself never completing.

use thiserror::Error;

/// Errors returned by the request helper and every call-site.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend returned a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Request { status: u16 },

    /// No JSON value could be produced from the exchange.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ApiError {
    /// Status code for `Request` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status } => Some(*status),
            ApiError::Parse(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    /// The response body is not valid JSON.
    #[error("invalid JSON in response body: {0}")]
    InvalidJson(String),

    /// The request payload could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(String),

    /// The request never produced a response (DNS, connect, read).
    #[error("network request failed: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_reports_status() {
        let err = ApiError::Request { status: 404 };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn parse_errors_display_their_cause() {
        let err = ApiError::from(ParseError::Transport("connection refused".into()));
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "network request failed: connection refused");
    }
}
