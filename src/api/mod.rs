use axum::Json;
use axum::extract::{Path, Query};
use axum::http::{HeaderMap, header};
use axum::routing::post;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};

use crate::dashboard::DashboardView;
use crate::error::AppError;
use crate::models::{Lesson, LessonFilters, Session, User};
use crate::state::AppState;

#[derive(Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadStats {
    pub loaded: usize,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
        .route("/lessons", get(list_lessons))
        .route("/lessons/reload", post(reload_lessons))
        .route("/lessons/{id}/accept", post(accept_lesson))
        .route("/dashboard", get(dashboard))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Session>, AppError> {
    let session = state.auth.login(&req.email, &req.password).await?;
    Ok(Json(session))
}

async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Result<StatusCode, AppError> {
    let token = bearer_token(&headers)?;
    state.auth.logout(token).await;
    Ok(StatusCode::NO_CONTENT)
}

async fn me(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<User>, AppError> {
    let token = bearer_token(&headers)?;
    let user = state.auth.session(token).await.ok_or(AppError::Unauthorized)?;
    Ok(Json(user))
}

async fn list_lessons(State(state): State<AppState>) -> Result<Json<Vec<Lesson>>, AppError> {
    let lessons = state.catalog.lessons().await?;
    Ok(Json(lessons))
}

/// Manual reload action for the blocking error state after a failed fetch.
async fn reload_lessons(State(state): State<AppState>) -> Result<Json<ReloadStats>, AppError> {
    let loaded = state.catalog.load().await?;
    Ok(Json(ReloadStats { loaded }))
}

async fn accept_lesson(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Lesson>, AppError> {
    let lesson = state.catalog.accept(&id).await?;
    Ok(Json(lesson))
}

async fn dashboard(
    State(state): State<AppState>,
    Query(filters): Query<LessonFilters>,
) -> Result<Json<DashboardView>, AppError> {
    let view = state.catalog.dashboard(&filters).await?;
    Ok(Json(view))
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AppError::Unauthorized)
}
