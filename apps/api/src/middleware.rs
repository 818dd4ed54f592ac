//! Request logging and the panic catch-all.

use std::any::Any;
use std::time::Instant;

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, info};

/// Longest request log line, in characters, including the trailing ellipsis.
const MAX_LOG_LINE: usize = 80;

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}

/// Builds `METHOD PATH STATUS in Nms[ :: body]`, cut to `MAX_LOG_LINE` chars.
pub fn format_log_line(
    method: &str,
    path: &str,
    status: u16,
    duration_ms: u128,
    body: Option<&str>,
) -> String {
    let mut line = format!("{method} {path} {status} in {duration_ms}ms");
    if let Some(body) = body {
        line.push_str(" :: ");
        line.push_str(body);
    }

    if line.chars().count() > MAX_LOG_LINE {
        let mut truncated: String = line.chars().take(MAX_LOG_LINE - 1).collect();
        truncated.push('…');
        return truncated;
    }
    line
}

/// Logs timing and a short summary of the JSON response for `/api` paths.
/// Other paths, and non-JSON bodies such as file downloads, pass through
/// untouched.
pub async fn api_log_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    if !path.starts_with("/api") {
        return response;
    }

    let (response, summary) = if is_json(response.headers()) {
        let (parts, body) = response.into_parts();
        match to_bytes(body, usize::MAX).await {
            Ok(bytes) => {
                let summary = String::from_utf8_lossy(&bytes).into_owned();
                (Response::from_parts(parts, Body::from(bytes)), Some(summary))
            }
            Err(e) => {
                error!("Failed to buffer response body for {path}: {e}");
                let fallback = (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                );
                (fallback.into_response(), None)
            }
        }
    } else {
        (response, None)
    };

    info!(
        "{}",
        format_log_line(
            method.as_str(),
            &path,
            response.status().as_u16(),
            start.elapsed().as_millis(),
            summary.as_deref(),
        )
    );

    response
}

/// Panic handler for `CatchPanicLayer`: the panic payload is logged, the
/// caller gets a generic 500.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!("Handler panicked: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "Internal Server Error" })),
    )
        .into_response()
}
