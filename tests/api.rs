mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use schedulai_server::store::EventStore;

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn create(app: &Router, body: Value) -> Value {
    let (status, event) = send_json(app, Method::POST, "/events", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    event
}

#[tokio::test]
async fn test_root_reports_liveness() {
    let app = common::app();
    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), "SchedulAI Backend is running!");
}

#[tokio::test]
async fn test_health_check_envelope() {
    let app = common::app();
    let (status, body) = send_json(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["status"], json!("ok"));
}

#[tokio::test]
async fn test_list_starts_empty() {
    let app = common::app();
    let (status, body) = send_json(&app, Method::GET, "/events", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_returns_categorized_event() {
    let app = common::app();
    let event = create(
        &app,
        json!({
            "title": "Sprint planning",
            "date": "2025-07-22",
            "time": "10:00",
            "notes": "Bring the backlog"
        }),
    )
    .await;

    assert_eq!(
        event,
        json!({
            "id": 1,
            "title": "Sprint planning",
            "date": "2025-07-22",
            "time": "10:00",
            "notes": "Bring the backlog",
            "category": "Work",
            "archived": false
        })
    );
}

#[tokio::test]
async fn test_caller_cannot_supply_category_or_archived() {
    let app = common::app();
    let event = create(
        &app,
        json!({
            "title": "Buy groceries",
            "date": "2025-07-22",
            "time": "18:00",
            "category": "Work",
            "archived": true
        }),
    )
    .await;

    assert_eq!(event["category"], json!("Other"));
    assert_eq!(event["archived"], json!(false));
}

#[tokio::test]
async fn test_create_missing_date_is_rejected() {
    let app = common::app();
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/events",
        Some(json!({ "title": "Gym", "time": "07:00" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Title, date, and time are required."));
    assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));

    let (_, events) = send_json(&app, Method::GET, "/events", None).await;
    assert_eq!(events, json!([]));

    let next = create(&app, json!({ "title": "Gym", "date": "2025-07-22", "time": "07:00" })).await;
    assert_eq!(next["id"], json!(1));
}

#[tokio::test]
async fn test_create_with_empty_title_is_rejected() {
    let app = common::app();
    let (status, _) = send_json(
        &app,
        Method::POST,
        "/events",
        Some(json!({ "title": "", "date": "2025-07-22", "time": "07:00" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_body_is_a_validation_error() {
    let app = common::app();
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/events",
        Some(json!({ "title": 5, "date": "2025-07-22", "time": "07:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));

    let (status, _) = send(&app, Method::POST, "/events", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_is_sorted_by_date_and_time() {
    let app = common::app();
    for (title, date, time) in [
        ("party", "2025-07-26", "19:00"),
        ("kickoff", "2025-07-22", "10:00"),
        ("insurance", "2025-07-24", "14:30"),
    ] {
        create(&app, json!({ "title": title, "date": date, "time": time })).await;
    }

    let (_, events) = send_json(&app, Method::GET, "/events", None).await;
    let order: Vec<(String, String)> = events
        .as_array()
        .unwrap()
        .iter()
        .map(|e| {
            (
                e["date"].as_str().unwrap().to_string(),
                e["time"].as_str().unwrap().to_string(),
            )
        })
        .collect();

    assert_eq!(
        order,
        vec![
            ("2025-07-22".to_string(), "10:00".to_string()),
            ("2025-07-24".to_string(), "14:30".to_string()),
            ("2025-07-26".to_string(), "19:00".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_toggle_archive_flips_and_flips_back() {
    let app = common::app();
    let event = create(&app, json!({ "title": "a", "date": "2025-07-22", "time": "10:00" })).await;
    let uri = format!("/events/{}", event["id"]);

    let (status, first) = send_json(&app, Method::PUT, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["archived"], json!(true));

    let (_, second) = send_json(&app, Method::PUT, &uri, None).await;
    assert_eq!(second["archived"], json!(false));
    assert_eq!(second["category"], event["category"]);
}

#[tokio::test]
async fn test_toggle_unknown_id_is_not_found() {
    let app = common::app();
    let (status, body) = send_json(&app, Method::PUT, "/events/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Event not found."));
    assert_eq!(body["error"]["code"], json!("NOT_FOUND"));
}

#[tokio::test]
async fn test_non_numeric_id_is_not_found() {
    let app = common::app();
    let (status, _) = send(&app, Method::DELETE, "/events/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_id_with_trailing_text_uses_leading_digits() {
    let app = common::app();
    let event = create(&app, json!({ "title": "a", "date": "2025-07-22", "time": "10:00" })).await;

    let (status, toggled) = send_json(&app, Method::PUT, "/events/1abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["id"], event["id"]);
    assert_eq!(toggled["archived"], json!(true));
}

#[tokio::test]
async fn test_delete_removes_event() {
    let app = common::app();
    let event = create(&app, json!({ "title": "a", "date": "2025-07-22", "time": "10:00" })).await;
    let uri = format!("/events/{}", event["id"]);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::PUT, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_id_keeps_collection() {
    let app = common::app_with(EventStore::with_sample_events());
    let (status, _) = send(&app, Method::DELETE, "/events/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, events) = send_json(&app, Method::GET, "/events", None).await;
    assert_eq!(events.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_ids_keep_increasing_after_delete() {
    let app = common::app_with(EventStore::with_sample_events());
    let (status, _) = send(&app, Method::DELETE, "/events/6", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let event = create(&app, json!({ "title": "a", "date": "2025-07-22", "time": "10:00" })).await;
    assert_eq!(event["id"], json!(7));
}

#[tokio::test]
async fn test_responses_allow_any_origin() {
    let app = common::app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/events")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
}
