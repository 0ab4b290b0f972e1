//! End-to-end tests for the report API: submission with and without a photo,
//! format rejection, listing, the health check, and single-flight connection
//! establishment under a concurrent cold start.

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::setup_test_app;
use serde_json::Value;

// Minimal JPEG magic bytes; the validator only looks at name/type/size.
fn fake_jpeg() -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0];
    data.extend(std::iter::repeat(0u8).take(256));
    data
}

#[tokio::test]
async fn health_check_returns_ok() {
    let app = setup_test_app().await;

    let response = app.server.get("/").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "Backend running");
}

#[tokio::test]
async fn submit_report_without_image() {
    let app = setup_test_app().await;

    let form = MultipartForm::new()
        .add_text("lat", "12.9716")
        .add_text("long", "77.5946")
        .add_text("comment", "Flooding near the bridge");

    let response = app.server.post("/api/reports").multipart(form).await;
    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    assert_eq!(body["message"], "Report submitted successfully");

    let listed: Vec<Value> = app.server.get("/api/reports").await.json();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["lat"], 12.9716);
    assert_eq!(listed[0]["long"], 77.5946);
    assert_eq!(listed[0]["comment"], "Flooding near the bridge");
    assert!(listed[0]["imageUrl"].is_null());
    assert!(listed[0]["id"].is_string());
    assert!(listed[0]["timestamp"].is_string());
}

#[tokio::test]
async fn submit_report_with_jpeg_image() {
    let app = setup_test_app().await;

    let form = MultipartForm::new()
        .add_text("lat", "12.9716")
        .add_text("long", "77.5946")
        .add_text("comment", "Road washed out")
        .add_part(
            "image",
            Part::bytes(fake_jpeg())
                .file_name("photo.jpg")
                .mime_type("image/jpeg"),
        );

    let response = app.server.post("/api/reports").multipart(form).await;
    assert_eq!(response.status_code(), 201);

    let listed: Vec<Value> = app.server.get("/api/reports").await.json();
    assert_eq!(listed.len(), 1);

    let image_url = listed[0]["imageUrl"].as_str().expect("imageUrl set");
    assert!(image_url.starts_with("http://localhost:4000/media/disaster-reports/"));
    assert!(image_url.ends_with(".jpg"));
    // Stored name is a generated id, not the client's filename.
    assert!(!image_url.contains("photo.jpg"));
}

#[tokio::test]
async fn submit_report_rejects_gif() {
    let app = setup_test_app().await;

    let form = MultipartForm::new()
        .add_text("comment", "animated disaster")
        .add_part(
            "image",
            Part::bytes(vec![0x47, 0x49, 0x46, 0x38])
                .file_name("animation.gif")
                .mime_type("image/gif"),
        );

    let response = app.server.post("/api/reports").multipart(form).await;
    assert_eq!(response.status_code(), 500);

    let body: Value = response.json();
    assert_eq!(body["message"], "Server error");

    // Nothing was persisted.
    let listed: Vec<Value> = app.server.get("/api/reports").await.json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn submit_report_oversized_body_gets_generic_server_error() {
    let app = setup_test_app().await;

    // Past the request body cap (image limit plus multipart overhead), so the
    // limit layer rejects before the handler runs.
    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(vec![0u8; 12 * 1024 * 1024])
            .file_name("huge.jpg")
            .mime_type("image/jpeg"),
    );

    let response = app.server.post("/api/reports").multipart(form).await;
    assert_eq!(response.status_code(), 500);

    let body: Value = response.json();
    assert_eq!(body["message"], "Server error");
}

#[tokio::test]
async fn submit_report_rejects_unparseable_coordinate() {
    let app = setup_test_app().await;

    let form = MultipartForm::new()
        .add_text("lat", "north-ish")
        .add_text("comment", "bad coords");

    let response = app.server.post("/api/reports").multipart(form).await;
    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body["message"], "Server error");
}

#[tokio::test]
async fn submit_report_with_blank_fields_persists_nulls() {
    let app = setup_test_app().await;

    let form = MultipartForm::new()
        .add_text("lat", "")
        .add_text("long", "  ")
        .add_text("comment", "");

    let response = app.server.post("/api/reports").multipart(form).await;
    assert_eq!(response.status_code(), 201);

    let listed: Vec<Value> = app.server.get("/api/reports").await.json();
    assert_eq!(listed.len(), 1);
    assert!(listed[0]["lat"].is_null());
    assert!(listed[0]["long"].is_null());
    assert!(listed[0]["comment"].is_null());
}

#[tokio::test]
async fn list_reports_empty() {
    let app = setup_test_app().await;

    let response = app.server.get("/api/reports").await;
    response.assert_status_ok();

    let listed: Vec<Value> = response.json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn list_reports_returns_all() {
    let app = setup_test_app().await;

    for i in 0..3 {
        let form = MultipartForm::new()
            .add_text("lat", format!("{}.0", i))
            .add_text("long", format!("{}.5", i))
            .add_text("comment", format!("report {i}"));
        let response = app.server.post("/api/reports").multipart(form).await;
        assert_eq!(response.status_code(), 201);
    }

    let listed: Vec<Value> = app.server.get("/api/reports").await.json();
    assert_eq!(listed.len(), 3);
}

#[tokio::test]
async fn concurrent_cold_start_connects_once() {
    let app = setup_test_app().await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let db = app.reports.database().clone();
        handles.push(tokio::spawn(async move {
            db.pool().await.map(|_| ()).map_err(|e| e.to_string())
        }));
    }

    for handle in handles {
        handle
            .await
            .expect("task panicked")
            .expect("pool init failed");
    }

    assert_eq!(app.reports.database().connect_attempts(), 1);
}
