//! Route table for the dashboard backend.
//!
//! # Design
//! Every call-site maps to one `Endpoint` variant, and every variant maps to
//! a fixed `Route` (path, method, default body). Call-sites never spell out a
//! path themselves; they look the route up here and substitute parameters.

use crate::http::HttpMethod;

/// Body a route sends when the caller supplies none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyTemplate {
    /// No body (plain retrieval).
    None,
    /// A literal `{}`.
    EmptyObject,
    /// `{"agent", "question", "timestamp"}` chat payload.
    AgentQuestion,
}

/// Fixed description of one backend operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub method: HttpMethod,
    pub body: BodyTemplate,
}

impl Route {
    const fn get(path: &'static str) -> Self {
        Self {
            path,
            method: HttpMethod::Get,
            body: BodyTemplate::None,
        }
    }

    const fn post(path: &'static str, body: BodyTemplate) -> Self {
        Self {
            path,
            method: HttpMethod::Post,
            body,
        }
    }
}

/// One backend operation per call-site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    StoreSales,
    StoreSalesSorted,
    StoreDeliveries,
    StoreDeliveriesSorted,
    CriticalIssues,
    CriticalIssuesSorted,
    PosIssues,
    PosIssuesSorted,
    Promotions,
    PromotionsSorted,
    StorePerformance,
    StorePerformanceSorted,
    ResponseTimes,
    ResponseTimesSorted,
    WeeklyEvents,
    ApplicationIssue,
    AllApplicationIssues,
    TicketStatus,
    AllTicketStatus,
    PositiveFeedback,
    PositiveFeedbackSorted,
    Configuration,
    AllConfiguration,
    CalendarData,
}

impl Endpoint {
    pub const ALL: [Endpoint; 24] = [
        Endpoint::StoreSales,
        Endpoint::StoreSalesSorted,
        Endpoint::StoreDeliveries,
        Endpoint::StoreDeliveriesSorted,
        Endpoint::CriticalIssues,
        Endpoint::CriticalIssuesSorted,
        Endpoint::PosIssues,
        Endpoint::PosIssuesSorted,
        Endpoint::Promotions,
        Endpoint::PromotionsSorted,
        Endpoint::StorePerformance,
        Endpoint::StorePerformanceSorted,
        Endpoint::ResponseTimes,
        Endpoint::ResponseTimesSorted,
        Endpoint::WeeklyEvents,
        Endpoint::ApplicationIssue,
        Endpoint::AllApplicationIssues,
        Endpoint::TicketStatus,
        Endpoint::AllTicketStatus,
        Endpoint::PositiveFeedback,
        Endpoint::PositiveFeedbackSorted,
        Endpoint::Configuration,
        Endpoint::AllConfiguration,
        Endpoint::CalendarData,
    ];

    pub const fn route(self) -> Route {
        use BodyTemplate::{AgentQuestion, EmptyObject};
        match self {
            Endpoint::StoreSales => Route::get("/sales/getStoreSales/"),
            Endpoint::StoreSalesSorted => Route::get("/sales/getStoreSalesSorted/"),
            Endpoint::StoreDeliveries => Route::get("/deliveries/getStoreDeliveries/"),
            Endpoint::StoreDeliveriesSorted => Route::get("/deliveries/getStoreDeliveriesSorted/"),
            Endpoint::CriticalIssues => Route::get("/criticalissues/getCriticalIssues/"),
            Endpoint::CriticalIssuesSorted => Route::get("/criticalissues/getCriticalIssuesSorted/"),
            Endpoint::PosIssues => Route::get("/posissues/getPosIssues/"),
            Endpoint::PosIssuesSorted => Route::get("/posissues/getPosIssuesSorted/"),
            Endpoint::Promotions => Route::get("/activepromotions/getPromotions/"),
            Endpoint::PromotionsSorted => Route::get("/activepromotions/getPromotionsSorted/"),
            Endpoint::StorePerformance => Route::get("/performance/getStorePerformance/"),
            Endpoint::StorePerformanceSorted => Route::get("/performance/getStorePerformanceSorted/"),
            Endpoint::ResponseTimes => Route::get("/responsetime/getResponseTimes/"),
            Endpoint::ResponseTimesSorted => Route::get("/responsetime/getResponseTimesSorted/"),
            Endpoint::WeeklyEvents => Route::get("/weeklyevents/getWeeklyEvents/"),
            Endpoint::ApplicationIssue => {
                Route::post("/ApplicationIssue/getApplicationIssue/", AgentQuestion)
            }
            Endpoint::AllApplicationIssues => Route::get("/ApplicationIssue/getAllApplicationIssues/"),
            Endpoint::TicketStatus => Route::post("/TicketStatus/getTicketStatus/", EmptyObject),
            Endpoint::AllTicketStatus => Route::get("/TicketStatus/getAllTicketStatus/"),
            Endpoint::PositiveFeedback => Route::get("/positiveFeedback/getPositiveFeedback/"),
            Endpoint::PositiveFeedbackSorted => {
                Route::get("/positiveFeedback/getPositiveFeedbackSorted/")
            }
            Endpoint::Configuration => Route::post("/Configuration/getConfiguration/", EmptyObject),
            Endpoint::AllConfiguration => Route::get("/Configuration/getAllConfiguration/"),
            Endpoint::CalendarData => Route::get("/calendar/getCalendarData/"),
        }
    }

    pub const fn path(self) -> &'static str {
        self.route().path
    }

    pub const fn method(self) -> HttpMethod {
        self.route().method
    }

    /// Whether the route expects `sortBy` / `sortDirection`.
    pub const fn is_sorted(self) -> bool {
        matches!(
            self,
            Endpoint::StoreSalesSorted
                | Endpoint::StoreDeliveriesSorted
                | Endpoint::CriticalIssuesSorted
                | Endpoint::PosIssuesSorted
                | Endpoint::PromotionsSorted
                | Endpoint::StorePerformanceSorted
                | Endpoint::ResponseTimesSorted
                | Endpoint::PositiveFeedbackSorted
        )
    }

    /// Name of the call-site that dispatches this endpoint.
    pub const fn name(self) -> &'static str {
        match self {
            Endpoint::StoreSales => "fetchSalesData",
            Endpoint::StoreSalesSorted => "fetchSalesSorted",
            Endpoint::StoreDeliveries => "fetchDeliveriesData",
            Endpoint::StoreDeliveriesSorted => "fetchDeliveriesSorted",
            Endpoint::CriticalIssues => "fetchCriticalIssuesData",
            Endpoint::CriticalIssuesSorted => "fetchCriticalIssuesSorted",
            Endpoint::PosIssues => "fetchPosIssuesData",
            Endpoint::PosIssuesSorted => "fetchPosIssuesSorted",
            Endpoint::Promotions => "fetchPromotionsData",
            Endpoint::PromotionsSorted => "fetchPromotionsSorted",
            Endpoint::StorePerformance => "fetchPerformanceData",
            Endpoint::StorePerformanceSorted => "fetchPerformanceSorted",
            Endpoint::ResponseTimes => "fetchResponseTimeData",
            Endpoint::ResponseTimesSorted => "fetchResponseTimeSorted",
            Endpoint::WeeklyEvents => "fetchWeeklyEventsData",
            Endpoint::ApplicationIssue => "fetchApplicationIssue",
            Endpoint::AllApplicationIssues => "fetchAllApplicationIssues",
            Endpoint::TicketStatus => "fetchTicketStatus",
            Endpoint::AllTicketStatus => "fetchAllTicketStatus",
            Endpoint::PositiveFeedback => "fetchFeedbackData",
            Endpoint::PositiveFeedbackSorted => "fetchFeedbackSorted",
            Endpoint::Configuration => "fetchConfiguration",
            Endpoint::AllConfiguration => "fetchAllConfiguration",
            Endpoint::CalendarData => "fetchCalendarData",
        }
    }

    /// Look an endpoint up by call-site name.
    pub fn from_name(name: &str) -> Option<Endpoint> {
        Endpoint::ALL.into_iter().find(|endpoint| endpoint.name() == name)
    }

    /// Relative endpoint string: the route path plus an optional sort query.
    pub fn target(self, sort: Option<&SortQuery<'_>>) -> String {
        match sort {
            Some(sort) => format!("{}{}", self.path(), sort.to_query_string()),
            None => self.path().to_string(),
        }
    }
}

/// `sortBy` / `sortDirection` pair for sorted variants.
///
/// Values are interpolated verbatim; the backend owns validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortQuery<'a> {
    pub sort_by: &'a str,
    pub sort_direction: &'a str,
}

impl<'a> SortQuery<'a> {
    pub fn new(sort_by: &'a str, sort_direction: &'a str) -> Self {
        Self {
            sort_by,
            sort_direction,
        }
    }

    pub fn to_query_string(&self) -> String {
        format!(
            "?sortBy={}&sortDirection={}",
            self.sort_by, self.sort_direction
        )
    }
}
