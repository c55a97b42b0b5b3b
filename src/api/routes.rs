//! HTTP API route definitions.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{add, divide, health, multiply, openapi, prometheus, subtract, AppState};
use crate::calculator::Operation;

/// Largest accepted request body, in bytes.
pub const MAX_BODY_BYTES: usize = 100 * 1024;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Calculator endpoints
        .route(Operation::Add.path(), post(add))
        .route(Operation::Subtract.path(), post(subtract))
        .route(Operation::Multiply.path(), post(multiply))
        .route(Operation::Divide.path(), post(divide))
        // Health endpoint
        .route("/health", get(health))
        // Observability and docs
        .route("/metrics", get(prometheus))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let app = create_router(AppState::detached());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn add_endpoint_returns_ok() {
        let app = create_router(AppState::detached());

        let response = app
            .oneshot(post_json("/api/add", r#"{"a":2,"b":3}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn divide_by_zero_returns_400() {
        let app = create_router(AppState::detached());

        let response = app
            .oneshot(post_json("/api/divide", r#"{"a":10,"b":0}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_on_operation_is_not_allowed() {
        let app = create_router(AppState::detached());

        let response = app
            .oneshot(Request::builder().uri("/api/add").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn unknown_path_returns_404() {
        let app = create_router(AppState::detached());

        let response = app
            .oneshot(post_json("/api/modulo", r#"{"a":1,"b":2}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let app = create_router(AppState::detached());
        let padding = " ".repeat(MAX_BODY_BYTES + 1);
        let body = format!(r#"{{"a":1,"b":2}}{padding}"#);

        let response = app.oneshot(post_json("/api/add", &body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn metrics_and_docs_are_served() {
        let app = create_router(AppState::detached());

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
