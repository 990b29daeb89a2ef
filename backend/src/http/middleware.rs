//! Cross-cutting request middleware.
//!
//! Applied to every route in a fixed order: request logging, security
//! headers, CORS (configured in the router), and the store readiness gate.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::error::AppError;
use super::state::AppState;

/// Reject every request with 503 until the store connection has been
/// established. Runs before route matching, so unmatched routes and the
/// liveness probe are gated too.
pub async fn readiness_gate(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if !state.is_ready() {
        return AppError::ServiceUnavailable.into_response();
    }
    next.run(req).await
}

/// Log method, path, status, and duration for every request.
pub async fn request_logging(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    tracing::debug!(method = %method, path = %path, "incoming request");

    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = %response.status().as_u16(),
        duration_ms = start.elapsed().as_millis(),
        "request completed"
    );

    response
}

/// Add standard security headers to every response.
///
/// Covers clickjacking (X-Frame-Options), MIME sniffing
/// (X-Content-Type-Options), script injection (Content-Security-Policy,
/// X-XSS-Protection), and referrer leakage (Referrer-Policy).
pub async fn security_headers(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'self'; script-src 'none'; object-src 'none';"),
    );
    headers.insert(
        header::X_XSS_PROTECTION,
        HeaderValue::from_static("1; mode=block"),
    );
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    response
}
