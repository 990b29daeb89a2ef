//! Router configuration for the HTTP API.
//!
//! This module sets up all routes and the middleware stack (tracing, request
//! logging, security headers, CORS, readiness gate) and creates the axum
//! router ready for serving.

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::middleware;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Fully permissive CORS, matching the deployment being replaced.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/users", get(handlers::list_users))
        .route("/users", post(handlers::create_user))
        .route("/users/{name}", get(handlers::get_user_by_name));

    Router::new()
        .route("/", get(handlers::service_status))
        .nest("/api", api)
        .fallback(handlers::not_found)
        // Order matters: requests pass trace -> logging -> headers -> cors ->
        // readiness gate -> route, so a 503 from the gate still gets logged
        // and carries the security headers.
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(from_fn(middleware::request_logging))
                .layer(from_fn(middleware::security_headers))
                .layer(cors)
                .layer(from_fn_with_state(
                    state.clone(),
                    middleware::readiness_gate,
                ))
                .into_inner(),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use std::sync::Arc;

    #[test]
    fn test_router_creation_ready() {
        let repo = Arc::new(LocalRepository::new()) as Arc<dyn crate::db::UserRepository>;
        let state = AppState::ready(repo);
        let _router = create_router(state);
    }

    #[test]
    fn test_router_creation_uninitialized() {
        let _router = create_router(AppState::uninitialized());
    }
}
