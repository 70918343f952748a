use std::time::Duration;

use atlas_api::{build_app, ApiConfig};
use atlas_core::VALIDATION_NOTICE;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

fn app() -> Router {
    build_app(&ApiConfig::default()).expect("app should build")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_post(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/estimate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(parsed["status"], "ok");
    assert_eq!(parsed["metrics"]["plans_total"], 0);
}

#[tokio::test]
async fn index_serves_empty_planner() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("content-security-policy").is_some());
    let html = body_text(response).await;
    assert!(html.contains("id=\"planner-form\""));
    assert!(html.contains("name=\"start-date\""));
    assert!(html.contains(" min=\""));
    assert!(html.contains("<div id=\"results\" hidden>"));
}

#[tokio::test]
async fn plan_submission_renders_results() {
    let response = app()
        .oneshot(form_post(
            "/plan",
            "city=++new+york+&days=2&budget=600&style=balanced&start-date=2026-11-02",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Trip to New York"));
    assert!(html.contains("Mon, Nov 2 – Tue, Nov 3"));
    assert_eq!(html.matches("class=\"day-block\"").count(), 2);
    assert_eq!(html.matches("class=\"slot\"").count(), 6);
    assert!(html.contains("This plan is about $188 above your budget."));
    assert!(html.contains("class=\"city-hero city-hero--visible\""));
}

#[tokio::test]
async fn invalid_submission_shows_notice_only() {
    let response = app()
        .oneshot(form_post("/plan", "city=&days=3"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains(VALIDATION_NOTICE));
    assert!(html.contains("<div id=\"results\" hidden>"));
    assert!(!html.contains("class=\"day-block\""));
}

#[tokio::test]
async fn template_runs_preset() {
    let response = app()
        .oneshot(form_post("/templates", "id=tokyo-premium&start-date="))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Trip to Tokyo"));
    assert!(html.contains("Premium travel style"));
    assert_eq!(html.matches("class=\"day-block\"").count(), 7);
}

#[tokio::test]
async fn unknown_template_is_not_found() {
    let response = app()
        .oneshot(form_post("/templates", "id=atlantis"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn estimate_returns_structured_plan() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/estimate")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "city": "atlantis", "days": "1", "budget": "360" }).to_string(),
        ))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let parsed: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(parsed["request"]["city"], "Atlantis");
    assert_eq!(parsed["cost"]["total"], 353);
    assert_eq!(parsed["cost"]["gap"], 7.0);
    assert_eq!(parsed["itinerary"].as_array().unwrap().len(), 1);
    assert_eq!(
        parsed["itinerary"][0]["label"],
        "Arrival & first impressions"
    );
}

#[tokio::test]
async fn estimate_rejects_missing_days() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/estimate")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "city": "Rome" }).to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let parsed: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(parsed["error"], "invalid_trip");
    assert_eq!(parsed["message"], VALIDATION_NOTICE);
}

#[tokio::test]
async fn overlong_trips_are_rejected() {
    let response = app()
        .oneshot(form_post("/plan", "city=Rome&days=4294967295"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains(VALIDATION_NOTICE));
    assert!(!html.contains("class=\"day-block\""));

    let response = app()
        .oneshot(json_post(json!({ "city": "Rome", "days": "366" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let parsed: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(parsed["error"], "invalid_trip");
}

#[tokio::test]
async fn estimate_accepts_numeric_fields() {
    let response = app()
        .oneshot(json_post(json!({ "city": "atlantis", "days": 1, "budget": 360 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let parsed: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(parsed["cost"]["total"], 353);
    assert_eq!(parsed["cost"]["gap"], 7.0);

    let response = app()
        .oneshot(json_post(json!({ "city": "Rome", "days": 0 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let parsed: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(parsed["error"], "invalid_trip");
}

#[tokio::test]
async fn form_endpoints_are_rate_limited() {
    let config = ApiConfig {
        rate_limit_window: Duration::from_secs(60),
        rate_limit_max: 1,
        ..ApiConfig::default()
    };
    let app = build_app(&config).unwrap();

    let first = app
        .clone()
        .oneshot(form_post("/plan", "city=Rome&days=1"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(form_post("/plan", "city=Rome&days=1"))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
}
