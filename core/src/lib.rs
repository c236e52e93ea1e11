//! Async API client for the store operations dashboard backend.
//!
//! # Overview
//! Every backend operation is a row in the `Endpoint` table. Requests are
//! built and responses parsed by the stateless `DashboardClient`
//! (host-does-IO pattern); `DashboardApi` executes them through a
//! `Transport` and exposes one method per operation.
//!
//! # Design
//! - `DashboardClient` holds only the base URL, fixed at construction.
//! - Failures are `ApiError::Request` (non-2xx status) or `ApiError::Parse`
//!   (no JSON value could be produced). Each is logged once through
//!   `tracing` and returned unchanged.
//! - No retries, caching, or timeouts at this layer.

pub mod api;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::DashboardApi;
pub use client::DashboardClient;
pub use config::ClientConfig;
pub use endpoint::{BodyTemplate, Endpoint, Route, SortQuery};
pub use error::{ApiError, ParseError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
pub use types::{capture_timestamp, ApplicationIssueRequest, RequestOptions};
