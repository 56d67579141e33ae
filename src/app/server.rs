use crate::adapters::LocalValidator;
use crate::config::AppConfig;
use crate::core::intake::parse_body;
use crate::core::ScheduleValidator;
use crate::utils::error::{Result, ScheduleError};
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tracing::Instrument;

const INDEX_HTML: &str = include_str!("../../static/index.html");
const SCRIPT_JS: &str = include_str!("../../static/script.js");

#[derive(Clone)]
pub struct AppState {
    validator: Arc<dyn ScheduleValidator>,
}

impl AppState {
    pub fn new(validator: Arc<dyn ScheduleValidator>) -> Self {
        Self { validator }
    }
}

pub fn router(config: &AppConfig, state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/script.js", get(script))
        .route("/health", get(health))
        .route("/validate", post(validate_schedule))
        .layer(DefaultBodyLimit::max(config.server.max_body_bytes))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(config: AppConfig) -> Result<()> {
    let address = config.bind_address()?;
    let listener = TcpListener::bind(address).await?;
    serve_with_listener(listener, config, shutdown_signal()).await
}

pub async fn serve_with_listener<F>(
    listener: TcpListener,
    config: AppConfig,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = AppState::new(Arc::new(LocalValidator::new()));
    let app = router(&config, state);

    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let span = tracing::info_span!("request", %method, %path);
    let response = next.run(request).instrument(span).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "handled request"
    );
    response
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn validate_schedule(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };

    let courses = match parse_body(&body) {
        Ok(courses) => courses,
        Err(e) => return error_response(e),
    };

    match state.validator.validate(&courses).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => error_response(e),
    }
}

// 超過 max_body_bytes 時 axum 回傳純文字，這裡改成 JSON
fn rejection_response(rejection: BytesRejection) -> Response {
    let status = rejection.status();
    let message = rejection.body_text();
    tracing::warn!("Rejected request body ({}): {}", status, message);
    (status, Json(json!({ "error": message }))).into_response()
}

fn error_response(error: ScheduleError) -> Response {
    // MalformedRequest 的訊息固定為 "Invalid input"
    let (status, message) = if error.is_client_error() {
        tracing::warn!("Rejected schedule: {}", error);
        (StatusCode::BAD_REQUEST, error.to_string())
    } else {
        tracing::error!("Validation failed: {}", error);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    };

    (status, Json(json!({ "error": message }))).into_response()
}
