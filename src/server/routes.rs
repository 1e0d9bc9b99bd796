//! Application routing
//!
//! This module defines all HTTP routes for the application. The route
//! table is exact-path only; anything unmatched falls through to Axum's
//! default 404 response.

use axum::{middleware, routing::get, Router};

use crate::api::{greeting, health};
use crate::middleware::logging::log_request;
use crate::server::state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    // Health check routes (monitoring only, not part of the greeting surface)
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/liveness", get(health::liveness));

    // Greeting routes; /app is a deployment variant controlled by config
    let mut greeting_routes = Router::new().route("/", get(greeting::root));
    if state.settings.enable_app_route {
        greeting_routes = greeting_routes.route("/app", get(greeting::app));
    }

    greeting_routes
        .merge(health_routes)
        // Request logging with trace IDs
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn router_with(settings: Settings) -> Router {
        create_router(AppState::new(settings))
    }

    async fn get_body(router: Router, path: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn root_route_returns_greeting() {
        let router = router_with(Settings::default());
        let (status, body) = get_body(router, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Welcome to Expressapp");
    }

    #[tokio::test]
    async fn app_route_returns_new_greeting() {
        let router = router_with(Settings::default());
        let (status, body) = get_body(router, "/app").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Welcome to New Expressapp");
    }

    #[tokio::test]
    async fn app_route_absent_when_disabled() {
        let settings = Settings {
            enable_app_route: false,
            ..Settings::default()
        };
        let (status, _) = get_body(router_with(settings), "/app").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_path_returns_404() {
        let router = router_with(Settings::default());
        let (status, _) = get_body(router, "/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn post_to_root_is_not_matched() {
        let router = router_with(Settings::default());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn health_route_is_registered() {
        let router = router_with(Settings::default());
        let (status, body) = get_body(router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn responses_carry_a_trace_id() {
        let router = router_with(Settings::default());
        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.headers().contains_key("x-trace-id"));
    }
}
