pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::catalog::handlers as catalog;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Skill catalog
        .route("/job-categories", get(catalog::handle_job_categories))
        .route("/job-roles", get(catalog::handle_job_roles))
        .route("/job-skills", get(catalog::handle_job_skills))
        // Analysis
        .route("/analyze-resume", post(analysis::handle_analyze_resume))
        .route(
            "/analyze-resume/upload",
            post(analysis::handle_analyze_upload).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/store-analysis", post(analysis::handle_store_analysis))
        // History
        .route(
            "/user-analyses/:user_id",
            get(analysis::handle_user_analyses),
        )
        .route("/analyses/:id", get(analysis::handle_get_analysis))
        .with_state(state)
}
