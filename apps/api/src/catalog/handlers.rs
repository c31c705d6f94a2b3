//! Axum route handlers for the read-only skill catalog.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RolesQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryRolesResponse {
    pub category: String,
    pub roles: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SkillsQuery {
    pub category: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub category: String,
    pub role: String,
    pub skills: Vec<String>,
}

/// GET /job-categories
pub async fn handle_job_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state
            .catalog
            .categories()
            .into_iter()
            .map(String::from)
            .collect(),
    })
}

/// GET /job-roles
///
/// Without `category`: the whole nested catalog. With it: that category's role names
/// (empty for an unknown category).
pub async fn handle_job_roles(
    State(state): State<AppState>,
    Query(params): Query<RolesQuery>,
) -> Response {
    match params.category.filter(|c| !c.trim().is_empty()) {
        None => Json(state.catalog.as_ref()).into_response(),
        Some(category) => {
            let roles = state
                .catalog
                .roles(&category)
                .unwrap_or_default()
                .into_iter()
                .map(String::from)
                .collect();
            Json(CategoryRolesResponse { category, roles }).into_response()
        }
    }
}

/// GET /job-skills?category=&role=
pub async fn handle_job_skills(
    State(state): State<AppState>,
    Query(params): Query<SkillsQuery>,
) -> Result<Json<SkillsResponse>, AppError> {
    let (category, role) = match (params.category, params.role) {
        (Some(c), Some(r)) if !c.trim().is_empty() && !r.trim().is_empty() => (c, r),
        _ => {
            return Err(AppError::Validation(
                "Category and role are required".to_string(),
            ))
        }
    };

    let skills = state
        .catalog
        .required_skills(&category, &role)
        .ok_or_else(|| AppError::NotFound("Category or role not found".to_string()))?
        .to_vec();

    Ok(Json(SkillsResponse {
        category,
        role,
        skills,
    }))
}
