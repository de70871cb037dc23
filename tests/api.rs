use std::sync::Arc;

use serde_json::{json, Value};
use voltbill::{
    handlers::AppState,
    services::{AnalyticsService, DocumentStore, MemoryStore, RecordService},
};

/// Serves the production router over a fresh in-memory store on an
/// ephemeral port and returns the base URL.
async fn spawn_app() -> String {
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
    let records = Arc::new(RecordService::new(store.clone()));
    let analytics = Arc::new(AnalyticsService::new(store));

    let app = voltbill::router(AppState { records, analytics });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn payment_body(service_number: &str, units: i64) -> Value {
    json!({
        "serviceNumber": service_number,
        "consumerName": "Asha Kumar",
        "email": "asha@example.com",
        "phone": "9876543210",
        "units": units,
    })
}

#[tokio::test]
async fn health_reports_success() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{}/api/health", base)).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "success");
    assert!(body["message"].as_str().unwrap().len() > 0);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn payment_submission_round_trip() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/payments", base))
        .json(&payment_body("SVC-1001", 250))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Payment recorded successfully");
    assert!(!body["data"]["transactionId"].as_str().unwrap().is_empty());
    // amount omitted in the request -> computed from the slab schedule
    assert_eq!(body["data"]["amount"], 450.0);
    assert_eq!(body["data"]["serviceNumber"], "SVC-1001");
    assert_eq!(body["data"]["consumerName"], "Asha Kumar");
    assert_eq!(body["data"]["units"], 250);
    assert!(body["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn payment_missing_fields_is_400() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/payments", base))
        .json(&json!({ "email": "asha@example.com" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Missing required fields");
}

#[tokio::test]
async fn payment_negative_units_is_400() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/payments", base))
        .json(&payment_body("SVC-1001", -5))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Units consumed cannot be negative");
}

#[tokio::test]
async fn payment_listing_caps_at_ten_newest_first() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    for i in 1..=12 {
        let response = client
            .post(format!("{}/api/payments", base))
            .json(&payment_body(&format!("SVC-{}", i), 100 + i))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 201);
    }

    let response = client
        .get(format!("{}/api/payments", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 10);
    assert_eq!(data[0]["serviceNumber"], "SVC-12");
    assert_eq!(data[9]["serviceNumber"], "SVC-3");
    assert_eq!(data[0]["status"], "completed");
}

#[tokio::test]
async fn contact_round_trip() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/contact", base))
        .json(&json!({
            "name": "Asha Kumar",
            "email": "asha@example.com",
            "message": "How do I download my receipt?",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Message sent successfully");
    assert!(!body["data"]["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn contact_missing_fields_is_400() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/contact", base))
        .json(&json!({ "name": "Asha Kumar" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "All fields are required");
}

#[tokio::test]
async fn analytics_summary_starts_at_zero() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{}/api/analytics/summary", base))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);

    let overview = &body["data"]["overview"];
    assert_eq!(overview["totalConsumers"], 0);
    assert_eq!(overview["totalPayments"], 0);
    assert_eq!(overview["totalRevenue"], 0.0);
    assert_eq!(overview["averageUnits"], 0.0);
}

#[tokio::test]
async fn analytics_summary_aggregates_payments() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    // Two consumers, three payments; amounts computed by the tariff.
    for (svc, units) in [("SVC-1", 100), ("SVC-1", 200), ("SVC-2", 300)] {
        client
            .post(format!("{}/api/payments", base))
            .json(&payment_body(svc, units))
            .send()
            .await
            .unwrap();
    }

    let response = reqwest::get(format!("{}/api/analytics/summary", base))
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();

    let overview = &body["data"]["overview"];
    assert_eq!(overview["totalConsumers"], 2);
    assert_eq!(overview["totalPayments"], 3);
    // 0 + 225 + 675 for 100, 200 and 300 units
    assert_eq!(overview["totalRevenue"], 900.0);
    assert_eq!(overview["averageUnits"], 200.0);
}
