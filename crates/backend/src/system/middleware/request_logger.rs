use axum::body::to_bytes;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use std::time::Duration;

use crate::shared::format::format_number;

/// Logs one line per HTTP request: duration, response size, status, method and path.
///
/// Non-2xx responses are logged at `warn`.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Buffer the body to report its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{}",
                format_request_line(&method, &path, parts.status, start.elapsed(), None)
            );
            tracing::warn!("Failed to read response body for {}: {}", path, e);
            return Response::from_parts(parts, Body::default());
        }
    };

    let line = format_request_line(
        &method,
        &path,
        parts.status,
        start.elapsed(),
        Some(bytes.len()),
    );
    if parts.status.is_success() {
        tracing::info!("{}", line);
    } else {
        tracing::warn!("{}", line);
    }

    Response::from_parts(parts, Body::from(bytes))
}

fn format_request_line(
    method: &Method,
    path: &str,
    status: StatusCode,
    duration: Duration,
    size: Option<usize>,
) -> String {
    let size = size.map(format_number).unwrap_or_else(|| "error".to_string());
    format!(
        "{:>5}ms | {:>12} | {} {:>6} {}",
        duration.as_millis(),
        size,
        status.as_u16(),
        method.as_str(),
        path
    )
}
