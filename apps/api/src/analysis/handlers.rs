//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::Field, Multipart, Path, State},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::extract::extract_text;
use crate::analysis::sample::{SAMPLE_RESUME, SAMPLE_RESUME_NAME};
use crate::analysis::service::{analyze_and_store, non_blank, AnalyzeCommand};
use crate::errors::AppError;
use crate::models::analysis::{AnalysisRecord, AnalysisType, DEFAULT_USER_ID};
use crate::scoring::AnalysisResult;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeResumeRequest {
    pub job_category: Option<String>,
    pub job_role: Option<String>,
    #[serde(alias = "text")]
    pub resume_text: Option<String>,
    pub user_id: Option<String>,
    pub resume_name: Option<String>,
    pub custom_job_description: Option<String>,
}

/// The engine's report with the stored record's id and timestamp alongside.
#[derive(Debug, Serialize)]
pub struct AnalyzeResumeResponse {
    pub analysis_id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
}

impl From<AnalysisRecord> for AnalyzeResumeResponse {
    fn from(record: AnalysisRecord) -> Self {
        Self {
            analysis_id: record.id,
            created_at: record.created_at,
            analysis: record.analysis_result,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserAnalysesResponse {
    pub analyses: Vec<AnalysisRecord>,
}

#[derive(Debug, Deserialize)]
pub struct StoreAnalysisRequest {
    pub user_id: Option<String>,
    pub resume_name: Option<String>,
    pub job_category: String,
    pub job_role: String,
    #[serde(default)]
    pub analysis_type: AnalysisType,
    pub analysis_result: AnalysisResult,
    pub file_name: Option<String>,
    pub file_mime: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StoreAnalysisResponse {
    pub id: Uuid,
    pub message: String,
}

#[derive(Debug, Default)]
struct UploadForm {
    job_category: Option<String>,
    job_role: Option<String>,
    text: Option<String>,
    user_id: Option<String>,
    resume_name: Option<String>,
    custom_job_description: Option<String>,
    file: Option<UploadedFile>,
}

#[derive(Debug)]
struct UploadedFile {
    file_name: Option<String>,
    content_type: Option<String>,
    data: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze-resume
///
/// Scores already-extracted resume text against the selected role. Without
/// text the request is rejected, unless the sample-resume fallback is enabled.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeResumeRequest>,
) -> Result<Json<AnalyzeResumeResponse>, AppError> {
    let (resume_text, resume_name) = match request.resume_text {
        Some(text) => (text, request.resume_name),
        None if state.config.sample_resume_fallback => {
            debug!("No resume text supplied, scoring the sample resume");
            (
                SAMPLE_RESUME.to_string(),
                Some(SAMPLE_RESUME_NAME.to_string()),
            )
        }
        None => {
            return Err(AppError::Validation(
                "resume_text is required".to_string(),
            ))
        }
    };

    let record = analyze_and_store(
        &state,
        AnalyzeCommand {
            user_id: request.user_id,
            job_category: request.job_category.unwrap_or_default(),
            job_role: request.job_role.unwrap_or_default(),
            resume_text,
            job_description: request.custom_job_description,
            resume_name,
            file_name: None,
            file_mime: None,
        },
    )
    .await?;

    Ok(Json(record.into()))
}

/// POST /analyze-resume/upload
///
/// Multipart form: `file` (or `resume`), `job_category`, `job_role`, and optional
/// `text`, `user_id`, `resume_name`, `custom_job_description`. Non-blank `text`
/// wins over the file.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResumeResponse>, AppError> {
    let form = read_upload_form(multipart).await?;

    let (resume_text, file_name, file_mime) = match (non_blank(form.text), form.file) {
        (Some(text), file) => {
            let (name, mime) = file
                .map(|f| (f.file_name, f.content_type))
                .unwrap_or_default();
            (text, name, mime)
        }
        (None, Some(file)) => {
            let name = file.file_name.clone();
            let mime = file.content_type.clone();
            let text = tokio::task::spawn_blocking(move || {
                extract_text(
                    file.file_name.as_deref(),
                    file.content_type.as_deref(),
                    &file.data,
                )
            })
            .await
            .map_err(|e| {
                AppError::UnprocessableEntity(format!("Could not read uploaded file: {e}"))
            })?
            .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;
            debug!("Extracted {} characters from upload", text.len());
            (text, name, mime)
        }
        (None, None) => {
            return Err(AppError::Validation(
                "Provide either a file or text".to_string(),
            ))
        }
    };

    let record = analyze_and_store(
        &state,
        AnalyzeCommand {
            user_id: form.user_id,
            job_category: form.job_category.unwrap_or_default(),
            job_role: form.job_role.unwrap_or_default(),
            resume_text,
            job_description: form.custom_job_description,
            resume_name: form.resume_name,
            file_name,
            file_mime,
        },
    )
    .await?;

    Ok(Json(record.into()))
}

/// GET /user-analyses/:user_id
///
/// All stored analyses for a user, newest first.
pub async fn handle_user_analyses(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserAnalysesResponse>, AppError> {
    let analyses = state.store.list_by_user(&user_id).await?;
    debug!("Found {} analyses for user {user_id}", analyses.len());
    Ok(Json(UserAnalysesResponse { analyses }))
}

/// GET /analyses/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisRecord>, AppError> {
    let record = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))?;
    Ok(Json(record))
}

/// POST /store-analysis
///
/// Persists a report produced elsewhere (e.g. by a model-backed analyzer).
pub async fn handle_store_analysis(
    State(state): State<AppState>,
    Json(request): Json<StoreAnalysisRequest>,
) -> Result<Json<StoreAnalysisResponse>, AppError> {
    if request.job_category.trim().is_empty() || request.job_role.trim().is_empty() {
        return Err(AppError::Validation(
            "Job category and role are required".to_string(),
        ));
    }
    if let Some((field, score)) = request.analysis_result.score_out_of_range() {
        return Err(AppError::Validation(format!(
            "{field} must be between 0 and 100, got {score}"
        )));
    }

    let record = AnalysisRecord {
        id: Uuid::new_v4(),
        user_id: non_blank(request.user_id).unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
        resume_name: non_blank(request.resume_name)
            .unwrap_or_else(|| "Custom Resume".to_string()),
        job_category: request.job_category,
        job_role: request.job_role,
        analysis_type: request.analysis_type,
        analysis_result: request.analysis_result,
        created_at: Utc::now(),
        file_name: request.file_name,
        file_mime: request.file_mime,
    };
    let id = record.id;

    state.store.save(record).await?;
    info!(analysis_id = %id, "External analysis stored");

    Ok(Json(StoreAnalysisResponse {
        id,
        message: "Analysis stored successfully".to_string(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Multipart helpers
// ────────────────────────────────────────────────────────────────────────────

async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" | "resume" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid file: {e}")))?;
                form.file = Some(UploadedFile {
                    file_name,
                    content_type,
                    data,
                });
            }
            "job_category" => form.job_category = Some(read_text(field).await?),
            "job_role" => form.job_role = Some(read_text(field).await?),
            "text" | "resume_text" => form.text = Some(read_text(field).await?),
            "user_id" => form.user_id = Some(read_text(field).await?),
            "resume_name" => form.resume_name = Some(read_text(field).await?),
            "custom_job_description" => {
                form.custom_job_description = Some(read_text(field).await?)
            }
            _ => debug!("Ignoring multipart field '{name}'"),
        }
    }

    Ok(form)
}

async fn read_text(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid form field: {e}")))
}
