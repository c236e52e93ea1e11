//! In-process stand-in for the dashboard backend.
//!
//! Serves canned fixtures on every route under `/api` and records each
//! request it receives so tests can assert on exactly what a client sent.

pub mod fixtures;

use std::{cmp::Ordering, sync::Arc};

use axum::{
    body::Body,
    extract::{Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// Prefix every backend route is mounted under.
pub const API_PREFIX: &str = "/api";

/// One request as seen by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<String>,
}

pub type RequestLog = Arc<RwLock<Vec<RecordedRequest>>>;

#[derive(Deserialize)]
pub struct SortParams {
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortDirection")]
    pub sort_direction: Option<String>,
}

#[derive(Deserialize)]
pub struct ChatQuestion {
    #[serde(default)]
    pub question: String,
}

/// A sortable document: the array under `key` is what gets ordered.
#[derive(Clone, Copy)]
struct Collection {
    document: fn() -> Value,
    key: &'static str,
    default_sort: &'static str,
}

impl Collection {
    fn sorted(&self, params: SortParams) -> Value {
        let sort_by = params.sort_by.as_deref().unwrap_or(self.default_sort);
        let descending = params
            .sort_direction
            .as_deref()
            .is_some_and(|direction| direction.eq_ignore_ascii_case("desc"));
        sort_collection((self.document)(), self.key, sort_by, descending)
    }
}

const SALES: Collection = Collection {
    document: fixtures::sales,
    key: "stores",
    default_sort: "storeName",
};
const DELIVERIES: Collection = Collection {
    document: fixtures::deliveries,
    key: "deliveries",
    default_sort: "orderId",
};
const CRITICAL_ISSUES: Collection = Collection {
    document: fixtures::critical_issues,
    key: "issues",
    default_sort: "id",
};
const POS_ISSUES: Collection = Collection {
    document: fixtures::pos_issues,
    key: "issues",
    default_sort: "id",
};
const PROMOTIONS: Collection = Collection {
    document: fixtures::promotions,
    key: "promotions",
    default_sort: "id",
};
const PERFORMANCE: Collection = Collection {
    document: fixtures::performance,
    key: "stores",
    default_sort: "storeName",
};
const RESPONSE_TIMES: Collection = Collection {
    document: fixtures::response_times,
    key: "responses",
    default_sort: "id",
};
const FEEDBACK: Collection = Collection {
    document: fixtures::feedback,
    key: "feedback",
    default_sort: "id",
};

pub fn app() -> Router {
    app_with_log(RequestLog::default())
}

/// Build the router, recording every request into `log`.
pub fn app_with_log(log: RequestLog) -> Router {
    let api = Router::new();
    let api = collection(api, "/sales/getStoreSales/", "/sales/getStoreSalesSorted/", SALES);
    let api = collection(
        api,
        "/deliveries/getStoreDeliveries/",
        "/deliveries/getStoreDeliveriesSorted/",
        DELIVERIES,
    );
    let api = collection(
        api,
        "/criticalissues/getCriticalIssues/",
        "/criticalissues/getCriticalIssuesSorted/",
        CRITICAL_ISSUES,
    );
    let api = collection(api, "/posissues/getPosIssues/", "/posissues/getPosIssuesSorted/", POS_ISSUES);
    let api = collection(
        api,
        "/activepromotions/getPromotions/",
        "/activepromotions/getPromotionsSorted/",
        PROMOTIONS,
    );
    let api = collection(
        api,
        "/performance/getStorePerformance/",
        "/performance/getStorePerformanceSorted/",
        PERFORMANCE,
    );
    let api = collection(
        api,
        "/responsetime/getResponseTimes/",
        "/responsetime/getResponseTimesSorted/",
        RESPONSE_TIMES,
    );
    let api = collection(
        api,
        "/positiveFeedback/getPositiveFeedback/",
        "/positiveFeedback/getPositiveFeedbackSorted/",
        FEEDBACK,
    );

    let api = api
        .route("/weeklyevents/getWeeklyEvents/", get(|| async { Json(fixtures::weekly_events()) }))
        .route("/ApplicationIssue/getApplicationIssue/", post(application_issue))
        .route(
            "/ApplicationIssue/getAllApplicationIssues/",
            get(|| async { Json(fixtures::application_issues()) }),
        )
        .route("/TicketStatus/getTicketStatus/", post(ticket_status))
        .route(
            "/TicketStatus/getAllTicketStatus/",
            get(|| async { Json(fixtures::ticket_statuses()) }),
        )
        .route("/Configuration/getConfiguration/", post(configuration))
        .route(
            "/Configuration/getAllConfiguration/",
            get(|| async { Json(fixtures::configuration()) }),
        )
        .route("/calendar/getCalendarData/", get(|| async { Json(fixtures::calendar()) }));

    Router::new()
        .nest(API_PREFIX, api)
        .layer(middleware::from_fn_with_state(log, record))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_log(listener: TcpListener, log: RequestLog) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_log(log)).await
}

fn collection(router: Router, list: &str, sorted: &str, collection: Collection) -> Router {
    router
        .route(list, get(move || async move { Json((collection.document)()) }))
        .route(
            sorted,
            get(move |Query(params): Query<SortParams>| async move {
                Json(collection.sorted(params))
            }),
        )
}

async fn record(
    State(log): State<RequestLog>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?;

    let entry = RecordedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        content_type: parts
            .headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body: (!bytes.is_empty()).then(|| String::from_utf8_lossy(&bytes).into_owned()),
    };
    tracing::debug!(method = %entry.method, path = %entry.path, "recorded request");
    log.write().await.push(entry);

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

async fn application_issue(Json(input): Json<ChatQuestion>) -> Json<Value> {
    let issues = fixtures::application_issues();
    let answer = issues["issues"]
        .as_array()
        .filter(|list| !list.is_empty())
        .map(|list| list[input.question.len() % list.len()]["response"].clone())
        .unwrap_or_else(|| {
            json!("I apologize, but I could not process your request at this time.")
        });
    Json(json!({ "response": answer }))
}

async fn ticket_status() -> Json<Value> {
    Json(first_entry(
        fixtures::ticket_statuses(),
        "ticketStatuses",
        json!({"status": "No status available"}),
    ))
}

async fn configuration() -> Json<Value> {
    Json(first_entry(
        fixtures::configuration(),
        "configuration",
        json!({"config": "No configuration available"}),
    ))
}

fn first_entry(document: Value, key: &str, fallback: Value) -> Value {
    document[key].get(0).cloned().unwrap_or(fallback)
}

/// Sort the array under `key`: numbers numerically, anything else as
/// lowercase text. Missing fields sort first.
pub fn sort_collection(mut document: Value, key: &str, sort_by: &str, descending: bool) -> Value {
    if let Some(items) = document.get_mut(key).and_then(Value::as_array_mut) {
        items.sort_by(|a, b| compare_field(a.get(sort_by), b.get(sort_by)));
        if descending {
            items.reverse();
        }
    }
    document
}

fn compare_field(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a.and_then(Value::as_f64), b.and_then(Value::as_f64)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => sort_text(a).cmp(&sort_text(b)),
    }
}

fn sort_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.to_lowercase(),
        Some(other) => other.to_string().to_lowercase(),
        None => String::new(),
    }
}
