//! Canned backend documents, shaped like the dashboard's data files.

use serde_json::{json, Value};

pub fn sales() -> Value {
    json!({
        "stores": [
            {"storeName": "Riverside", "currentSales": 18250.5, "previousYearSales": 17100.0, "percentageChange": 6.7, "transactions": 412},
            {"storeName": "airport", "currentSales": 9320.0, "previousYearSales": 11050.25, "percentageChange": -15.7, "transactions": 198},
            {"storeName": "Downtown", "currentSales": 24410.75, "previousYearSales": 22980.0, "percentageChange": 6.2, "transactions": 655}
        ]
    })
}

pub fn deliveries() -> Value {
    json!({
        "deliveries": [
            {"orderId": 1003, "storeName": "Downtown", "status": "In Transit", "deliveryTime": 42, "distance": 6.1, "cost": 8.5},
            {"orderId": 1001, "storeName": "Riverside", "status": "Delivered", "deliveryTime": 28, "distance": 3.4, "cost": 5.0},
            {"orderId": 1002, "storeName": "airport", "status": "Delayed", "deliveryTime": 65, "distance": 12.8, "cost": 14.25}
        ]
    })
}

pub fn critical_issues() -> Value {
    json!({
        "issues": [
            {"id": 2, "title": "Freezer offline", "rating": 5, "affectedUsers": 3},
            {"id": 1, "title": "Card reader timeout", "rating": 4, "affectedUsers": 120},
            {"id": 3, "title": "Alarm fault", "rating": 3, "affectedUsers": 1}
        ]
    })
}

pub fn pos_issues() -> Value {
    json!({
        "issues": [
            {"id": 11, "title": "Receipt printer jam", "rating": 2, "affectedUsers": 4},
            {"id": 10, "title": "Scanner not pairing", "rating": 3, "affectedUsers": 9}
        ]
    })
}

pub fn promotions() -> Value {
    json!({
        "promotions": [
            {"id": 7, "name": "Weekend Bundle", "discount": 15, "startDate": 20240601, "endDate": 20240602},
            {"id": 5, "name": "back to school", "discount": 10, "startDate": 20240815, "endDate": 20240905}
        ]
    })
}

pub fn performance() -> Value {
    json!({
        "stores": [
            {"storeName": "Riverside", "averageResponseTime": 210, "uptime": 99.2, "errorRate": 0.8},
            {"storeName": "Downtown", "averageResponseTime": 185, "uptime": 99.9, "errorRate": 0.1}
        ]
    })
}

pub fn response_times() -> Value {
    json!({
        "responses": [
            {"id": 2, "service": "Checkout", "responseTime": 320, "averageTime": 290},
            {"id": 1, "service": "Inventory", "responseTime": 140, "averageTime": 155}
        ]
    })
}

pub fn weekly_events() -> Value {
    json!({
        "events": [
            {"day": "Monday", "title": "Stock take"},
            {"day": "Thursday", "title": "Promo launch"}
        ]
    })
}

pub fn application_issues() -> Value {
    json!({
        "issues": [
            {"id": 1, "response": "The POS service restarted overnight; response times should recover within the hour."},
            {"id": 2, "response": "A database index rebuild is running. Expect slower searches until it completes."},
            {"id": 3, "response": "No incidents are open for your store right now."}
        ]
    })
}

pub fn ticket_statuses() -> Value {
    json!({
        "ticketStatuses": [
            {"ticketId": "INC-2041", "status": "Open", "priority": "High"},
            {"ticketId": "INC-2038", "status": "Resolved", "priority": "Low"}
        ]
    })
}

pub fn feedback() -> Value {
    json!({
        "feedback": [
            {"id": 4, "comment": "Quick checkout", "rating": 5, "date": 20240610},
            {"id": 2, "comment": "friendly staff", "rating": 4, "date": 20240608}
        ]
    })
}

pub fn configuration() -> Value {
    json!({
        "configuration": [
            {"key": "refreshInterval", "value": 30},
            {"key": "theme", "value": "light"}
        ]
    })
}

pub fn calendar() -> Value {
    json!({
        "days": [
            {"date": "2024-06-10", "events": ["Stock take"]},
            {"date": "2024-06-13", "events": ["Promo launch"]}
        ]
    })
}
