//! Async call-sites for every dashboard backend operation.
//!
//! # Design
//! `DashboardApi` pairs the stateless `DashboardClient` with a `Transport`.
//! Every call-site is a one-line lookup in the `Endpoint` table followed by
//! a single dispatch. A failed dispatch is logged once with the endpoint and
//! handed back unchanged; nothing is retried or replaced.

use serde_json::Value;
use tracing::{debug, error};

use crate::client::DashboardClient;
use crate::config::ClientConfig;
use crate::endpoint::{Endpoint, SortQuery};
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{capture_timestamp, RequestOptions};

/// Dashboard backend API over a pluggable transport.
///
/// Calls share no mutable state and may run concurrently.
#[derive(Debug, Clone)]
pub struct DashboardApi<T = ReqwestTransport> {
    client: DashboardClient,
    transport: T,
}

impl DashboardApi<ReqwestTransport> {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            DashboardClient::new(&config.base_url),
            ReqwestTransport::default(),
        )
    }
}

impl<T: Transport> DashboardApi<T> {
    pub fn new(client: DashboardClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &DashboardClient {
        &self.client
    }

    /// Request `<base-url><endpoint>` and return the parsed JSON body.
    pub async fn api_fetch(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let request = self.client.build_request(endpoint, &options);
        self.dispatch(endpoint, Ok(request)).await
    }

    /// Dispatch `endpoint` with its default body.
    pub async fn call(&self, endpoint: Endpoint) -> Result<Value, ApiError> {
        self.dispatch(endpoint.path(), self.client.build_call(endpoint))
            .await
    }

    /// Dispatch a sorted variant.
    pub async fn call_sorted(&self, endpoint: Endpoint, sort: &SortQuery<'_>) -> Result<Value, ApiError> {
        let target = endpoint.target(Some(sort));
        self.dispatch(&target, self.client.build_sorted_call(endpoint, sort))
            .await
    }

    async fn dispatch(
        &self,
        endpoint: &str,
        request: Result<HttpRequest, ApiError>,
    ) -> Result<Value, ApiError> {
        let result = match request {
            Ok(request) => self.exchange(endpoint, request).await,
            Err(err) => Err(err),
        };
        if let Err(err) = &result {
            error!(endpoint, error = %err, "API error");
        }
        result
    }

    async fn exchange(&self, endpoint: &str, request: HttpRequest) -> Result<Value, ApiError> {
        debug!(endpoint, method = request.method.as_str(), "sending request");
        let response = self.transport.execute(request).await?;
        self.client.parse_response(response)
    }

    pub async fn fetch_sales_data(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::StoreSales).await
    }

    pub async fn fetch_sales_sorted(&self, sort_by: &str, sort_direction: &str) -> Result<Value, ApiError> {
        self.call_sorted(Endpoint::StoreSalesSorted, &SortQuery::new(sort_by, sort_direction))
            .await
    }

    pub async fn fetch_deliveries_data(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::StoreDeliveries).await
    }

    pub async fn fetch_deliveries_sorted(&self, sort_by: &str, sort_direction: &str) -> Result<Value, ApiError> {
        self.call_sorted(Endpoint::StoreDeliveriesSorted, &SortQuery::new(sort_by, sort_direction))
            .await
    }

    pub async fn fetch_critical_issues_data(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::CriticalIssues).await
    }

    pub async fn fetch_critical_issues_sorted(&self, sort_by: &str, sort_direction: &str) -> Result<Value, ApiError> {
        self.call_sorted(Endpoint::CriticalIssuesSorted, &SortQuery::new(sort_by, sort_direction))
            .await
    }

    pub async fn fetch_pos_issues_data(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::PosIssues).await
    }

    pub async fn fetch_pos_issues_sorted(&self, sort_by: &str, sort_direction: &str) -> Result<Value, ApiError> {
        self.call_sorted(Endpoint::PosIssuesSorted, &SortQuery::new(sort_by, sort_direction))
            .await
    }

    pub async fn fetch_promotions_data(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::Promotions).await
    }

    pub async fn fetch_promotions_sorted(&self, sort_by: &str, sort_direction: &str) -> Result<Value, ApiError> {
        self.call_sorted(Endpoint::PromotionsSorted, &SortQuery::new(sort_by, sort_direction))
            .await
    }

    pub async fn fetch_performance_data(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::StorePerformance).await
    }

    pub async fn fetch_performance_sorted(&self, sort_by: &str, sort_direction: &str) -> Result<Value, ApiError> {
        self.call_sorted(Endpoint::StorePerformanceSorted, &SortQuery::new(sort_by, sort_direction))
            .await
    }

    pub async fn fetch_response_time_data(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::ResponseTimes).await
    }

    pub async fn fetch_response_time_sorted(&self, sort_by: &str, sort_direction: &str) -> Result<Value, ApiError> {
        self.call_sorted(Endpoint::ResponseTimesSorted, &SortQuery::new(sort_by, sort_direction))
            .await
    }

    pub async fn fetch_weekly_events_data(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::WeeklyEvents).await
    }

    /// Ask the chat agent a question, stamped with the capture time.
    pub async fn fetch_application_issue(&self, question: &str) -> Result<Value, ApiError> {
        let request = self
            .client
            .build_application_issue(question, capture_timestamp());
        self.dispatch(Endpoint::ApplicationIssue.path(), request)
            .await
    }

    pub async fn fetch_all_application_issues(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::AllApplicationIssues).await
    }

    pub async fn fetch_ticket_status(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::TicketStatus).await
    }

    pub async fn fetch_all_ticket_status(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::AllTicketStatus).await
    }

    pub async fn fetch_feedback_data(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::PositiveFeedback).await
    }

    pub async fn fetch_feedback_sorted(&self, sort_by: &str, sort_direction: &str) -> Result<Value, ApiError> {
        self.call_sorted(Endpoint::PositiveFeedbackSorted, &SortQuery::new(sort_by, sort_direction))
            .await
    }

    pub async fn fetch_configuration(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::Configuration).await
    }

    pub async fn fetch_all_configuration(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::AllConfiguration).await
    }

    pub async fn fetch_calendar_data(&self) -> Result<Value, ApiError> {
        self.call(Endpoint::CalendarData).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::error::ParseError;
    use crate::http::{HttpMethod, HttpResponse};

    const BASE_URL: &str = "http://backend.test/api";

    /// Records every request and answers each with the same canned response.
    struct CannedTransport {
        status: u16,
        body: String,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.to_string(),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.lock().unwrap().push(request);
            Ok(HttpResponse {
                status: self.status,
                headers: Vec::new(),
                body: self.body.clone(),
            })
        }
    }

    struct UnreachableTransport;

    #[async_trait]
    impl Transport for UnreachableTransport {
        async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
            Err(ParseError::Transport("connection refused".to_string()).into())
        }
    }

    fn api(status: u16, body: &str) -> DashboardApi<CannedTransport> {
        DashboardApi::new(DashboardClient::new(BASE_URL), CannedTransport::new(status, body))
    }

    #[tokio::test]
    async fn every_call_site_issues_one_request_per_route() {
        let api = api(200, "{}");
        api.fetch_sales_data().await.unwrap();
        api.fetch_sales_sorted("name", "asc").await.unwrap();
        api.fetch_deliveries_data().await.unwrap();
        api.fetch_deliveries_sorted("name", "asc").await.unwrap();
        api.fetch_critical_issues_data().await.unwrap();
        api.fetch_critical_issues_sorted("name", "asc").await.unwrap();
        api.fetch_pos_issues_data().await.unwrap();
        api.fetch_pos_issues_sorted("name", "asc").await.unwrap();
        api.fetch_promotions_data().await.unwrap();
        api.fetch_promotions_sorted("name", "asc").await.unwrap();
        api.fetch_performance_data().await.unwrap();
        api.fetch_performance_sorted("name", "asc").await.unwrap();
        api.fetch_response_time_data().await.unwrap();
        api.fetch_response_time_sorted("name", "asc").await.unwrap();
        api.fetch_weekly_events_data().await.unwrap();
        api.fetch_application_issue("hello").await.unwrap();
        api.fetch_all_application_issues().await.unwrap();
        api.fetch_ticket_status().await.unwrap();
        api.fetch_all_ticket_status().await.unwrap();
        api.fetch_feedback_data().await.unwrap();
        api.fetch_feedback_sorted("name", "asc").await.unwrap();
        api.fetch_configuration().await.unwrap();
        api.fetch_all_configuration().await.unwrap();
        api.fetch_calendar_data().await.unwrap();

        let requests = api.transport.requests();
        assert_eq!(requests.len(), Endpoint::ALL.len());
        for (request, endpoint) in requests.iter().zip(Endpoint::ALL) {
            let sort = SortQuery::new("name", "asc");
            let target = endpoint.target(endpoint.is_sorted().then_some(&sort));
            assert_eq!(request.path, format!("{BASE_URL}{target}"), "{}", endpoint.name());
            assert_eq!(request.method, endpoint.method(), "{}", endpoint.name());
            assert_eq!(request.header("content-type"), Some("application/json"));
        }
    }

    #[tokio::test]
    async fn ok_response_resolves_to_json() {
        let api = api(200, r#"{"a":1}"#);
        assert_eq!(api.fetch_calendar_data().await.unwrap(), json!({"a": 1}));
    }

    #[tokio::test]
    async fn not_found_rejects_with_status() {
        let api = api(404, "not-json-either");
        let err = api.fetch_weekly_events_data().await.unwrap_err();
        assert!(matches!(err, ApiError::Request { status: 404 }));
        assert_eq!(api.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn malformed_body_rejects_with_parse_error() {
        let api = api(200, "not-json");
        let err = api.fetch_sales_data().await.unwrap_err();
        assert!(matches!(err, ApiError::Parse(ParseError::InvalidJson(_))));
    }

    #[tokio::test]
    async fn transport_failure_propagates_unchanged() {
        let api = DashboardApi::new(DashboardClient::new(BASE_URL), UnreachableTransport);
        let err = api.fetch_ticket_status().await.unwrap_err();
        match err {
            ApiError::Parse(ParseError::Transport(msg)) => assert_eq!(msg, "connection refused"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn application_issue_body_is_tagged_and_timestamped() {
        let api = api(200, r#"{"response":"ok"}"#);
        api.fetch_application_issue("why slow?").await.unwrap();
        api.fetch_application_issue("why slow?").await.unwrap();

        let bodies: Vec<serde_json::Value> = api
            .transport
            .requests()
            .iter()
            .map(|r| serde_json::from_str(r.body.as_deref().unwrap()).unwrap())
            .collect();
        for body in &bodies {
            assert_eq!(body["agent"], "Application Issues");
            assert_eq!(body["question"], "why slow?");
        }
        let first = bodies[0]["timestamp"].as_i64().unwrap();
        let second = bodies[1]["timestamp"].as_i64().unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn api_fetch_defaults_to_get_and_merges_headers() {
        let api = api(200, "[]");
        let options = RequestOptions::default()
            .with_header("Content-Type", "application/vnd.dashboard+json")
            .with_header("x-trace", "abc");
        api.api_fetch("/calendar/getCalendarData/", options).await.unwrap();

        let request = &api.transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.header("content-type"), Some("application/vnd.dashboard+json"));
        assert_eq!(request.header("x-trace"), Some("abc"));
        assert_eq!(request.headers.len(), 2);
    }

    #[tokio::test]
    async fn api_fetch_sends_caller_body_with_post() {
        let api = api(200, "{}");
        let options = RequestOptions::post().with_body(r#"{"storeId":3}"#);
        api.api_fetch("/TicketStatus/getTicketStatus/", options).await.unwrap();

        let request = &api.transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body.as_deref(), Some(r#"{"storeId":3}"#));
    }

    #[tokio::test]
    async fn concurrent_calls_are_independent() {
        let api = api(200, r#"{"ok":true}"#);
        let (sales, deliveries, calendar) = tokio::join!(
            api.fetch_sales_data(),
            api.fetch_deliveries_data(),
            api.fetch_calendar_data()
        );
        assert!(sales.is_ok() && deliveries.is_ok() && calendar.is_ok());
        assert_eq!(api.transport.requests().len(), 3);
    }
}
