//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the activity API endpoints and the static signup page
//! under a single Axum router. The API lives at `/activities`; the frontend
//! is served as static files at `/static`, with `/` redirecting there.

pub mod activities;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Resolve the path to the static frontend directory.
fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"))
}

/// Full application router: API routes plus the static signup page.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(redirect_to_static_index))
        .route("/activities", get(activities::list_activities))
        .route("/activities/{activity_name}/signup", post(activities::signup))
        .route("/activities/{activity_name}/unregister", delete(activities::unregister))
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new(static_dir()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn redirect_to_static_index() -> Redirect {
    Redirect::temporary("/static/index.html")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
