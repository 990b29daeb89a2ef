//! Full-router tests driving requests through the middleware stack, covering
//! the readiness gate on every route and the end-to-end request flow.
#![cfg(feature = "http-server")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use users_api::db::repositories::LocalRepository;
use users_api::db::UserRepository;
use users_api::http::{create_router, AppState};

const UNREADY_BODY: &str = "Base de datos no conectada. Intenta nuevamente en unos instantes.";

fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn ready_router() -> axum::Router {
    let repo = Arc::new(LocalRepository::new()) as Arc<dyn UserRepository>;
    create_router(AppState::ready(repo))
}

// ==================== Readiness gate ====================

#[tokio::test]
async fn test_gate_rejects_every_route_when_uninitialized() {
    // Includes the liveness probe and an unmatched path: the gate runs
    // before route matching.
    for path in ["/", "/api/users", "/api/users/Ana", "/no-such-route"] {
        let router = create_router(AppState::uninitialized());
        let response = router.oneshot(get(path)).await.unwrap();

        assert_eq!(
            response.status(),
            StatusCode::SERVICE_UNAVAILABLE,
            "path {path}"
        );
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": UNREADY_BODY}),
            "path {path}"
        );
    }
}

#[tokio::test]
async fn test_gate_response_carries_security_headers() {
    let router = create_router(AppState::uninitialized());
    let response = router.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");
}

// ==================== Ready flow ====================

#[tokio::test]
async fn test_ready_router_serves_liveness_probe() {
    let response = ready_router().oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(
        body_json(response).await,
        serde_json::json!([{"message": "on"}])
    );
}

#[tokio::test]
async fn test_ready_router_unmatched_route_is_404() {
    let response = ready_router().oneshot(get("/no-such-route")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "Recurso no encontrado"})
    );
}

#[tokio::test]
async fn test_ready_router_create_then_list_then_lookup() {
    let router = ready_router();

    let post = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"id":1,"nombre":"Ana","apellido":"Li","telefono":"555"}"#,
        ))
        .unwrap();
    let response = router.clone().oneshot(post).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({
            "message": "Usuario añadido exitosamente.",
            "user": {"id": 1, "nombre": "Ana", "apellido": "Li", "telefono": "555"}
        })
    );

    let response = router.clone().oneshot(get("/api/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!([{"id": 1, "nombre": "Ana", "apellido": "Li", "telefono": "555"}])
    );

    // Lookup filters on `name`, which created records never carry.
    let response = router.oneshot(get("/api/users/Ana")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "Usuario no encontrado"})
    );
}
