//! Router tests driving a budgeting session end to end.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use orcamento_api::{AppState, create_router};
use orcamento_shared::AppConfig;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    create_router(AppState::new(AppConfig::default()))
}

async fn send_raw(app: &Router, method: &str, uri: &str, body: Option<Value>) -> axum::response::Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let response = send_raw(app, method, uri, body).await;
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn open_session(app: &Router) -> String {
    let (status, body) = send(app, "POST", "/api/v1/sessions", None).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn add_item(app: &Router, id: &str, name: &str, time: &str, complexity: &str, cost: &str) {
    let (status, _) = send(
        app,
        "PUT",
        &format!("/api/v1/sessions/{id}/draft"),
        Some(json!({ "name": name, "time": time, "complexity": complexity, "cost": cost })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(app, "POST", &format!("/api/v1/sessions/{id}/items"), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["added"], true);
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send(&app, "GET", "/api/v1/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_new_session_is_empty() {
    let app = app();
    let id = open_session(&app).await;

    let (status, body) = send(&app, "GET", &format!("/api/v1/sessions/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["items"], json!([]));
    assert_eq!(body["summary"], Value::Null);
    assert_eq!(body["editing"], false);
    assert_eq!(body["draft"]["name"], "");
    assert_eq!(body["draft"]["time"], "0");
}

#[tokio::test]
async fn test_average_override_share_export() {
    let app = app();
    let id = open_session(&app).await;
    add_item(&app, &id, "Design", "4", "2", "800").await;
    add_item(&app, &id, "Build", "6", "4", "1200").await;

    let (status, body) = send(&app, "POST", &format!("/api/v1/sessions/{id}/summary"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "computed");
    assert_eq!(body["editing"], false);
    assert_eq!(body["summary"]["time"], "5.0");
    assert_eq!(body["summary"]["complexity"], "3.0");
    assert_eq!(body["summary"]["cost"], "1000.00");
    assert_eq!(body["summary"]["origin"]["kind"], "averaged");
    assert_eq!(body["summary"]["origin"]["item_count"], 2);

    let (status, body) = send(&app, "GET", &format!("/api/v1/sessions/{id}/share"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["text"],
        "Resumo do Orçamento:\nTempo médio: 5.0\nComplexidade média: 3.0\nCusto médio: R$ 1000.00"
    );
    assert!(
        body["links"]["whatsapp"]
            .as_str()
            .unwrap()
            .starts_with("https://wa.me/?text=Resumo%20do%20Or%C3%A7amento")
    );
    assert_eq!(body["links"]["instagram"], "https://www.instagram.com/");

    let (status, body) = send(&app, "POST", &format!("/api/v1/sessions/{id}/editing"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["editing"], true);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/sessions/{id}/summary/time"),
        Some(json!({ "value": "7" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["time"], "7");
    assert_eq!(body["summary"]["complexity"], "8");
    assert_eq!(body["summary"]["cost"], "500");
    assert_eq!(body["summary"]["origin"]["kind"], "overridden");
    assert_eq!(body["summary"]["origin"]["field"], "time");

    let response = send_raw(&app, "GET", &format!("/api/v1/sessions/{id}/export"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"orcamento.pdf\""
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.starts_with(b"%PDF-1.4"));
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("(Tempo m\\351dio: 7) Tj"));
}

#[tokio::test]
async fn test_add_item_without_name_is_ignored() {
    let app = app();
    let id = open_session(&app).await;

    send(
        &app,
        "PUT",
        &format!("/api/v1/sessions/{id}/draft"),
        Some(json!({ "time": "3" })),
    )
    .await;
    let (status, body) = send(&app, "POST", &format!("/api/v1/sessions/{id}/items"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["added"], false);
    assert_eq!(body["count"], 0);
    assert_eq!(body["draft"]["time"], "3");

    let (_, body) = send(&app, "GET", &format!("/api/v1/sessions/{id}/items"), None).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_added_item_resets_draft() {
    let app = app();
    let id = open_session(&app).await;
    add_item(&app, &id, "Design", "4", "2", "800").await;

    let (_, body) = send(&app, "GET", &format!("/api/v1/sessions/{id}"), None).await;
    assert_eq!(body["draft"]["name"], "");
    assert_eq!(body["items"][0]["name"], "Design");
    assert_eq!(body["items"][0]["cost"], "800");
}

#[tokio::test]
async fn test_compute_on_empty_ledger_is_noop() {
    let app = app();
    let id = open_session(&app).await;

    let (status, body) = send(&app, "POST", &format!("/api/v1/sessions/{id}/summary"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "empty_ledger");
    assert_eq!(body["summary"], Value::Null);
}

#[tokio::test]
async fn test_invalid_number_is_rejected() {
    let app = app();
    let id = open_session(&app).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/sessions/{id}/draft"),
        Some(json!({ "name": "Design", "cost": "lots" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "Invalid cost: 'lots' is not a number");
}

#[tokio::test]
async fn test_override_rules_enforced() {
    let app = app();
    let id = open_session(&app).await;
    let uri = format!("/api/v1/sessions/{id}/summary/cost");

    let (status, _) = send(&app, "PUT", &uri, Some(json!({ "value": "2000" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    add_item(&app, &id, "Design", "4", "2", "800").await;
    send(&app, "POST", &format!("/api/v1/sessions/{id}/summary"), None).await;

    let (status, body) = send(&app, "PUT", &uri, Some(json!({ "value": "2000" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "BUSINESS_RULE_VIOLATION");

    send(&app, "POST", &format!("/api/v1/sessions/{id}/editing"), None).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/sessions/{id}/summary/price"),
        Some(json!({ "value": "2000" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");

    let (status, body) = send(&app, "PUT", &uri, Some(json!({ "value": "2000" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["time"], "10");
    assert_eq!(body["summary"]["complexity"], "8");
    assert_eq!(body["summary"]["cost"], "2000");
}

#[tokio::test]
async fn test_export_requires_summary() {
    let app = app();
    let id = open_session(&app).await;

    let (status, body) = send(&app, "GET", &format!("/api/v1/sessions/{id}/export"), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "BUSINESS_RULE_VIOLATION");

    let (status, _) = send(&app, "GET", &format!("/api/v1/sessions/{id}/share"), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_closed_session_is_gone() {
    let app = app();
    let id = open_session(&app).await;

    let (status, _) = send(&app, "DELETE", &format!("/api/v1/sessions/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &format!("/api/v1/sessions/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");

    let (status, _) = send(&app, "DELETE", &format!("/api/v1/sessions/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_numbers_accepted_as_json_numbers() {
    let app = app();
    let id = open_session(&app).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/sessions/{id}/draft"),
        Some(json!({ "name": "Design", "time": 4, "complexity": 2.5, "cost": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["time"], "4");
    assert_eq!(body["complexity"], "2.5");
    assert_eq!(body["cost"], "0");

    send(&app, "POST", &format!("/api/v1/sessions/{id}/items"), None).await;
    send(&app, "POST", &format!("/api/v1/sessions/{id}/summary"), None).await;
    send(&app, "POST", &format!("/api/v1/sessions/{id}/editing"), None).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/sessions/{id}/summary/time"),
        Some(json!({ "value": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["time"], "7");
    assert_eq!(body["summary"]["complexity"], "8");
    assert_eq!(body["summary"]["cost"], "500");
}

#[tokio::test]
async fn test_malformed_body_is_json_validation_error() {
    let app = app();
    let id = open_session(&app).await;
    let uri = format!("/api/v1/sessions/{id}/draft");

    let request = Request::builder()
        .method("PUT")
        .uri(&uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "VALIDATION_ERROR");

    let (status, body) = send(&app, "PUT", &uri, Some(json!({ "time": true }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_session_id_is_json_not_found() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api/v1/sessions/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");

    let (status, body) = send(
        &app,
        "PUT",
        "/api/v1/sessions/not-a-uuid/summary/time",
        Some(json!({ "value": "7" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_edit_is_not_an_overridable_field() {
    let app = app();
    let id = open_session(&app).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/sessions/{id}/summary/edit"),
        Some(json!({ "value": "7" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}
