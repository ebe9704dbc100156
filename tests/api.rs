//! Integration tests for the receipt API
//!
//! Each test drives the router in-process through axum-test.

use axum_test::TestServer;
use receipt_processor::receipt::{PointsResponse, ProcessResponse};
use receipt_processor::store::ReceiptStore;
use receipt_processor::{create_router, AppState};
use serde_json::{json, Value};
use std::sync::Arc;

fn create_test_server() -> TestServer {
    let state = AppState::new(Arc::new(ReceiptStore::new()));
    TestServer::new(create_router(state)).unwrap()
}

fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
            { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
            { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
            { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
            { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
        ],
        "total": "35.35"
    })
}

fn corner_market_receipt() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" }
        ],
        "total": "9.00"
    })
}

async fn process(server: &TestServer, receipt: &Value) -> String {
    let response = server.post("/receipts/process").json(receipt).await;
    response.assert_status_ok();
    response.json::<ProcessResponse>().id
}

async fn points(server: &TestServer, id: &str) -> u64 {
    let response = server.get(&format!("/receipts/{}/points", id)).await;
    response.assert_status_ok();
    response.json::<PointsResponse>().points
}

// ============ Process + Points ============

#[tokio::test]
async fn test_target_receipt_scores_28() {
    let server = create_test_server();
    let id = process(&server, &target_receipt()).await;
    assert_eq!(points(&server, &id).await, 28);
}

#[tokio::test]
async fn test_corner_market_receipt_scores_109() {
    let server = create_test_server();
    let id = process(&server, &corner_market_receipt()).await;
    assert_eq!(points(&server, &id).await, 109);
}

#[tokio::test]
async fn test_process_returns_uuid() {
    let server = create_test_server();
    let response = server.post("/receipts/process").json(&target_receipt()).await;

    response.assert_status_ok();
    let body: Value = response.json();
    let id = body["id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
    assert_eq!(body.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_points_response_shape() {
    let server = create_test_server();
    let id = process(&server, &target_receipt()).await;

    let response = server.get(&format!("/receipts/{}/points", id)).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({ "points": 28 }));
}

#[tokio::test]
async fn test_same_receipt_gets_distinct_ids() {
    let server = create_test_server();
    let first = process(&server, &target_receipt()).await;
    let second = process(&server, &target_receipt()).await;

    assert_ne!(first, second);
    assert_eq!(points(&server, &first).await, 28);
    assert_eq!(points(&server, &second).await, 28);
}

#[tokio::test]
async fn test_receipts_kept_apart() {
    let server = create_test_server();
    let target = process(&server, &target_receipt()).await;
    let market = process(&server, &corner_market_receipt()).await;

    assert_eq!(points(&server, &market).await, 109);
    assert_eq!(points(&server, &target).await, 28);
}

#[tokio::test]
async fn test_content_type_not_required() {
    let server = create_test_server();
    let response = server
        .post("/receipts/process")
        .text(target_receipt().to_string())
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_client_points_ignored() {
    let server = create_test_server();
    let mut receipt = target_receipt();
    receipt["points"] = json!(1000);
    receipt["id"] = json!("chosen-by-client");

    let id = process(&server, &receipt).await;
    assert_ne!(id, "chosen-by-client");
    assert_eq!(points(&server, &id).await, 28);
}

// ============ Not Found ============

#[tokio::test]
async fn test_unknown_id_not_found() {
    let server = create_test_server();
    let response = server
        .get(&format!("/receipts/{}/points", uuid::Uuid::new_v4()))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "Receipt not found");
}

#[tokio::test]
async fn test_non_uuid_id_not_found() {
    let server = create_test_server();
    process(&server, &target_receipt()).await;

    let response = server.get("/receipts/not-a-real-id/points").await;
    response.assert_status_not_found();
}

// ============ Bad Requests ============

#[tokio::test]
async fn test_malformed_json() {
    let server = create_test_server();
    let response = server
        .post("/receipts/process")
        .text("{ \"retailer\": ")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "Invalid JSON format. Please verify input.");
}

#[tokio::test]
async fn test_wrong_json_type() {
    let server = create_test_server();
    let mut receipt = target_receipt();
    receipt["items"] = json!("not a list");

    let response = server.post("/receipts/process").json(&receipt).await;
    response.assert_status_bad_request();
    assert_eq!(response.text(), "Invalid JSON format. Please verify input.");
}

#[tokio::test]
async fn test_missing_retailer() {
    let server = create_test_server();
    let mut receipt = target_receipt();
    receipt.as_object_mut().unwrap().remove("retailer");

    let response = server.post("/receipts/process").json(&receipt).await;
    response.assert_status_bad_request();
    assert_eq!(response.text(), "missing required field: retailer");
}

#[tokio::test]
async fn test_null_retailer_is_missing() {
    let server = create_test_server();
    let mut receipt = target_receipt();
    receipt["retailer"] = Value::Null;

    let response = server.post("/receipts/process").json(&receipt).await;
    response.assert_status_bad_request();
    assert_eq!(response.text(), "missing required field: retailer");
}

#[tokio::test]
async fn test_null_items_is_missing() {
    let server = create_test_server();
    let mut receipt = target_receipt();
    receipt["items"] = Value::Null;

    let response = server.post("/receipts/process").json(&receipt).await;
    response.assert_status_bad_request();
    assert_eq!(response.text(), "missing required field: items");
}

#[tokio::test]
async fn test_empty_items() {
    let server = create_test_server();
    let mut receipt = target_receipt();
    receipt["items"] = json!([]);

    let response = server.post("/receipts/process").json(&receipt).await;
    response.assert_status_bad_request();
    assert_eq!(response.text(), "missing required field: items");
}

#[tokio::test]
async fn test_invalid_date() {
    let server = create_test_server();
    let mut receipt = target_receipt();
    receipt["purchaseDate"] = json!("2022-02-30");

    let response = server.post("/receipts/process").json(&receipt).await;
    response.assert_status_bad_request();
    assert_eq!(
        response.text(),
        "invalid format for field purchaseDate: \"2022-02-30\""
    );
}

#[tokio::test]
async fn test_invalid_item_price() {
    let server = create_test_server();
    let mut receipt = target_receipt();
    receipt["items"][3]["price"] = json!("3.5");

    let response = server.post("/receipts/process").json(&receipt).await;
    response.assert_status_bad_request();
    assert_eq!(
        response.text(),
        "invalid format for field items[3].price: \"3.5\""
    );
}

#[tokio::test]
async fn test_rejected_receipt_not_stored() {
    let store = Arc::new(ReceiptStore::new());
    let server = TestServer::new(create_router(AppState::new(Arc::clone(&store)))).unwrap();

    let mut receipt = target_receipt();
    receipt["total"] = json!("35");
    server
        .post("/receipts/process")
        .json(&receipt)
        .await
        .assert_status_bad_request();

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_stored_receipt_has_id_and_points() {
    let store = Arc::new(ReceiptStore::new());
    let server = TestServer::new(create_router(AppState::new(Arc::clone(&store)))).unwrap();

    let id = process(&server, &target_receipt()).await;

    let stored = store.get(&id).unwrap();
    assert_eq!(stored.id.as_deref(), Some(id.as_str()));
    assert_eq!(stored.points, Some(28));
    assert_eq!(stored.items.len(), 5);
}
