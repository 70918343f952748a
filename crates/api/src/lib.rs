mod page;
mod rate_limit;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use atlas_core::{PlannerError, TripForm};
use atlas_observability::AppMetrics;
use atlas_planner::{PlannerPage, TripPlanner};
use axum::body::Body;
use axum::extract::{Form, Json, State};
use axum::http::{header, HeaderValue, Method, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use page::render_document;
pub use rate_limit::ClientRateLimiter;

const MAX_BODY_BYTES: usize = 16 * 1024;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind: String,
    pub rate_limit_window: Duration,
    pub rate_limit_max: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
            rate_limit_window: Duration::from_secs(60),
            rate_limit_max: 120,
        }
    }
}

#[derive(Clone)]
pub struct ApiState {
    pub planner: Arc<TripPlanner>,
    pub metrics: Arc<AppMetrics>,
    pub limiter: ClientRateLimiter,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    metrics: atlas_observability::MetricsSnapshot,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
    detail: String,
}

#[derive(Debug, Deserialize)]
struct TemplateSelection {
    id: String,
    #[serde(default, alias = "start-date")]
    start_date: String,
}

pub fn build_app(config: &ApiConfig) -> Result<Router> {
    let metrics = AppMetrics::shared();
    let planner = Arc::new(TripPlanner::new(metrics.clone()));

    let state = ApiState {
        planner,
        metrics,
        limiter: ClientRateLimiter::new(config.rate_limit_window, config.rate_limit_max),
    };

    Ok(build_router(state))
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(index))
        .route("/plan", post(plan_submit))
        .route("/templates", post(template_submit))
        .route("/v1/estimate", post(estimate))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .with_state(state)
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let payload = HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        metrics: state.metrics.snapshot(),
    };
    (StatusCode::OK, Json(payload))
}

fn fresh_page(state: &ApiState) -> PlannerPage {
    let mut page = PlannerPage::new();
    state
        .planner
        .initialize(&mut page, chrono::Utc::now().date_naive());
    page
}

fn page_response(state: &ApiState, status: StatusCode, page: &PlannerPage) -> Response {
    (
        status,
        Html(render_document(page, state.planner.templates())),
    )
        .into_response()
}

async fn index(State(state): State<ApiState>) -> Response {
    let page = fresh_page(&state);
    page_response(&state, StatusCode::OK, &page)
}

async fn plan_submit(State(state): State<ApiState>, Form(form): Form<TripForm>) -> Response {
    let mut page = fresh_page(&state);
    page.form = form;

    let status = match state.planner.submit(&mut page) {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    page_response(&state, status, &page)
}

async fn template_submit(
    State(state): State<ApiState>,
    Form(selection): Form<TemplateSelection>,
) -> Response {
    let mut page = fresh_page(&state);
    page.form.start_date = selection.start_date;

    let status = match state.planner.apply_template(&mut page, &selection.id) {
        Ok(_) => StatusCode::OK,
        Err(PlannerError::UnknownTemplate(_)) => StatusCode::NOT_FOUND,
        Err(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    page_response(&state, status, &page)
}

async fn estimate(State(state): State<ApiState>, Json(form): Json<TripForm>) -> Response {
    match state.planner.plan(&form) {
        Ok(plan) => {
            info!(city = %plan.request.city, days = plan.request.days, "estimate served");
            (StatusCode::OK, Json(plan)).into_response()
        }
        Err(err) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: "invalid_trip",
                message: err.notice(),
                detail: err.to_string(),
            }),
        )
            .into_response(),
    }
}

fn is_public_endpoint(path: &str) -> bool {
    matches!(path, "/health" | "/")
}

async fn rate_limit_middleware(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS || is_public_endpoint(request.uri().path()) {
        return next.run(request).await;
    }

    let ip = request_ip(&request);
    if !state.limiter.allow(&ip) {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(serde_json::json!({
                "error": "rate_limited",
                "message": "rate limit exceeded for this IP"
            })),
        )
            .into_response();
    }

    next.run(request).await
}

fn request_ip(request: &Request<Body>) -> String {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "local".to_string())
}

async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(
            "default-src 'none'; img-src https://source.unsplash.com https://images.unsplash.com; \
             style-src 'unsafe-inline'; form-action 'self'; frame-ancestors 'none'; base-uri 'none'",
        ),
    );

    response
}
