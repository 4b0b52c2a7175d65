//! HTTP-level integration tests for the `/debts` endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_bytes, body_json, build_empty_app, build_test_app, delete, get, post_json, post_raw,
    put_json,
};
use serde_json::json;

fn new_debt(client_name: &str, amount: f64) -> serde_json::Value {
    json!({
        "client_name": client_name,
        "amount": amount,
        "due_date": "2025-08-01",
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_debt_returns_201_with_pending_status() {
    let app = build_test_app();
    let response = post_json(app, "/api/v1/debts", new_debt("Ana Ruiz", 50.0)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["client_name"], "Ana Ruiz");
    assert_eq!(json["amount"], 50.0);
    assert_eq!(json["due_date"], "2025-08-01");
    assert_eq!(json["status"], "Pendiente");
    assert!(json["description"].is_null());
    assert!(json["id"].is_string());
    assert!(json["created_at"].is_string());
}

#[tokio::test]
async fn create_debt_ignores_supplied_status() {
    let app = build_test_app();
    let mut body = new_debt("Ana Ruiz", 10.0);
    body["status"] = json!("Pagada");
    let response = post_json(app, "/api/v1/debts", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["status"], "Pendiente");
}

#[tokio::test]
async fn create_debt_with_zero_amount_returns_422() {
    let app = build_test_app();
    let response = post_json(app, "/api/v1/debts", new_debt("Ana Ruiz", 0.0)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("amount"));
}

#[tokio::test]
async fn create_debt_with_negative_amount_returns_422() {
    let app = build_test_app();
    let response = post_json(app, "/api/v1/debts", new_debt("Ana Ruiz", -5.0)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_debt_with_empty_client_name_returns_422() {
    let app = build_test_app();
    let response = post_json(app, "/api/v1/debts", new_debt("", 5.0)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("client_name"));
}

#[tokio::test]
async fn create_debt_with_malformed_date_returns_json_422() {
    let app = build_test_app();
    for due_date in ["01/08/2025", "2025-13-01"] {
        let response = post_json(
            app.clone(),
            "/api/v1/debts",
            json!({"client_name": "Ana", "amount": 5, "due_date": due_date}),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(json["error"].as_str().unwrap().contains("due_date"));
    }
}

#[tokio::test]
async fn create_debt_missing_client_name_returns_json_422() {
    let app = build_test_app();
    let response = post_json(
        app.clone(),
        "/api/v1/debts",
        json!({"amount": 5, "due_date": "2025-01-01"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("client_name"));

    let listed = body_json(get(app, "/api/v1/debts").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn create_debt_with_invalid_json_returns_400() {
    let app = build_test_app();
    let response = post_raw(app, "/api/v1/debts", "application/json", "{\"amount\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn create_debt_without_json_content_type_returns_400() {
    let app = build_test_app();
    let body = new_debt("Ana", 5.0).to_string();
    let response = post_raw(app, "/api/v1/debts", "text/plain", &body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_debts_returns_seed_rows_in_order() {
    let app = build_test_app();
    let response = get(app, "/api/v1/debts").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let ids: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["debt-1", "debt-2", "debt-3"]);
}

#[tokio::test]
async fn list_debts_filters_by_status() {
    let app = build_test_app();
    let created = body_json(post_json(app.clone(), "/api/v1/debts", new_debt("Ana", 1.0)).await).await;

    let json = body_json(get(app.clone(), "/api/v1/debts?status=Pendiente").await).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["id"], "debt-1");
    assert_eq!(arr[1]["id"], created["id"]);
    assert!(arr.iter().all(|d| d["status"] == "Pendiente"));

    let json = body_json(get(app, "/api/v1/debts?status=Atrasada").await).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["id"], "debt-2");
}

#[tokio::test]
async fn list_debts_with_no_matches_returns_empty_array() {
    let app = build_empty_app();
    let response = get(app, "/api/v1/debts?status=Pagada").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn list_debts_with_unknown_status_returns_json_400() {
    let app = build_test_app();
    for uri in ["/api/v1/debts?status=Unknown", "/api/v1/debts?status="] {
        let response = get(app.clone(), uri).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
    }
}

// ---------------------------------------------------------------------------
// Get / update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_nonexistent_debt_returns_404() {
    let app = build_test_app();
    let response = get(app, "/api/v1/debts/does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Deuda no encontrada: does-not-exist");
}

#[tokio::test]
async fn update_debt_changes_only_supplied_fields() {
    let app = build_test_app();
    let response = put_json(
        app.clone(),
        "/api/v1/debts/debt-1",
        json!({"status": "Pagada", "description": "Pagado en efectivo"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, "/api/v1/debts/debt-1").await).await;
    assert_eq!(json["status"], "Pagada");
    assert_eq!(json["description"], "Pagado en efectivo");
    assert_eq!(json["client_name"], "Juan Pérez");
    assert_eq!(json["amount"], 150.0);
    assert_eq!(json["due_date"], "2025-07-15");
}

#[tokio::test]
async fn update_nonexistent_debt_returns_404() {
    let app = build_test_app();
    let response = put_json(app.clone(), "/api/v1/debts/missing", json!({"amount": 10})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json(app, "/api/v1/debts/missing", json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_debt_with_invalid_amount_returns_422() {
    let app = build_test_app();
    let response = put_json(app.clone(), "/api/v1/debts/debt-2", json!({"amount": 0})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(get(app, "/api/v1/debts/debt-2").await).await;
    assert_eq!(json["amount"], 200.5);
}

#[tokio::test]
async fn update_debt_with_empty_client_name_returns_422() {
    let app = build_test_app();
    let response = put_json(app.clone(), "/api/v1/debts/debt-1", json!({"client_name": ""})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("client_name"));

    let json = body_json(get(app, "/api/v1/debts/debt-1").await).await;
    assert_eq!(json["client_name"], "Juan Pérez");
}

#[tokio::test]
async fn delete_debt_twice_returns_204_then_404() {
    let app = build_test_app();

    let response = delete(app.clone(), "/api/v1/debts/debt-3").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = delete(app.clone(), "/api/v1/debts/debt-3").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app, "/api/v1/debts/debt-3").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
