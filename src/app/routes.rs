use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::app::AppState;
use crate::breadcrumbs::{generate_breadcrumbs, request_path};
use crate::navigation::{build_course_sidebar, build_day_navigation};
use crate::progress::{ProgressPolicy, calculate_progress_with, parse_day_list};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok\n" }))
        .route("/api/phases", get(list_phases))
        .route("/api/phases/:day", get(phase_for_day))
        .route("/api/days/:day/nav", get(day_navigation))
        .route("/api/breadcrumbs", get(breadcrumbs))
        .route("/api/progress", get(progress))
        .route("/api/sidebar", get(sidebar))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn list_phases(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.phases().to_vec())
}

async fn phase_for_day(
    State(state): State<AppState>,
    Path(day): Path<u32>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let phase = state.catalog.phase_for_day(day).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            format!("no phase owns day {day}"),
        )
    })?;
    Ok(Json(phase.clone()))
}

async fn day_navigation(Path(day): Path<u32>) -> impl IntoResponse {
    Json(build_day_navigation(day))
}

#[derive(Debug, Deserialize)]
struct BreadcrumbsQuery {
    #[serde(default)]
    path: String,
}

async fn breadcrumbs(
    State(state): State<AppState>,
    Query(q): Query<BreadcrumbsQuery>,
) -> impl IntoResponse {
    let path = request_path(&q.path);
    Json(generate_breadcrumbs(&state.catalog, &path))
}

#[derive(Debug, Deserialize)]
struct CompletedQuery {
    #[serde(default)]
    completed: String,
    #[serde(default)]
    policy: ProgressPolicy,
}

async fn progress(
    State(state): State<AppState>,
    Query(q): Query<CompletedQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let completed = parse_day_list(&q.completed).map_err(bad_request)?;
    Ok(Json(calculate_progress_with(
        &state.catalog,
        &completed,
        q.policy,
    )))
}

async fn sidebar(
    State(state): State<AppState>,
    Query(q): Query<CompletedQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let completed = parse_day_list(&q.completed).map_err(bad_request)?;
    Ok(Json(build_course_sidebar(&state.catalog, &completed)))
}

fn bad_request(err: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, format!("{err:#}"))
}
