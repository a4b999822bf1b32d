use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use tutorboard::api::{ReloadStats, router};
use tutorboard::models::Lesson;
use tutorboard::services::{AuthConfig, AuthService, CatalogService};
use tutorboard::source::{MockLessonSource, demo_lessons};
use tutorboard::state::AppState;

/// Router over a catalog that was never loaded, as after a failed startup
/// fetch.
fn unloaded_app() -> Router {
    let source = Arc::new(MockLessonSource::new(
        demo_lessons(),
        Duration::ZERO,
        Duration::ZERO,
    ));
    let catalog = Arc::new(CatalogService::new(source));
    let auth = Arc::new(AuthService::new(AuthConfig::default()).with_login_delay(Duration::ZERO));

    router(AppState { catalog, auth })
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

#[tokio::test]
async fn reads_are_blocked_until_the_catalog_loads() {
    let app = unloaded_app();

    let response = app
        .clone()
        .oneshot(get("/lessons"))
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = app
        .oneshot(get("/dashboard"))
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn manual_reload_recovers_the_error_state() {
    let app = unloaded_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/lessons/reload")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let stats: ReloadStats = serde_json::from_slice(&bytes).expect("failed to parse body");
    assert_eq!(stats.loaded, 5);

    let response = app.oneshot(get("/lessons")).await.expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let lessons: Vec<Lesson> = serde_json::from_slice(&bytes).expect("failed to parse body");
    assert_eq!(lessons.len(), 5);
}
