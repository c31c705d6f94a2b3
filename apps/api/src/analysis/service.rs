//! Analysis pipeline: catalog lookup → scoring → persist.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::{AnalysisRecord, AnalysisType, DEFAULT_USER_ID};
use crate::scoring::AnalysisInput;
use crate::state::AppState;

/// One analysis request, already reduced to plain text.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeCommand {
    pub user_id: Option<String>,
    pub job_category: String,
    pub job_role: String,
    pub resume_text: String,
    pub job_description: Option<String>,
    pub resume_name: Option<String>,
    pub file_name: Option<String>,
    pub file_mime: Option<String>,
}

/// Scores the resume against the role's skills and stores the record.
///
/// An unknown category/role is not an error: the engine gets an empty skill
/// list and the keyword score degrades to 0.
pub async fn analyze_and_store(
    state: &AppState,
    command: AnalyzeCommand,
) -> Result<AnalysisRecord, AppError> {
    let job_category = command.job_category.trim().to_string();
    let job_role = command.job_role.trim().to_string();
    if job_category.is_empty() || job_role.is_empty() {
        return Err(AppError::Validation(
            "Job category and role are required".to_string(),
        ));
    }

    let required_skills: &[String] =
        match state.catalog.required_skills(&job_category, &job_role) {
            Some(skills) => skills,
            None => {
                warn!(
                    category = %job_category,
                    role = %job_role,
                    "Unknown job role, scoring without required skills"
                );
                &[]
            }
        };

    let input = AnalysisInput::new(&command.resume_text, required_skills)
        .with_job_description(command.job_description.as_deref());
    let analysis_result = state.scorer.analyze(&input);

    let record = AnalysisRecord {
        id: Uuid::new_v4(),
        user_id: non_blank(command.user_id).unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
        resume_name: non_blank(command.resume_name)
            .or_else(|| command.file_name.clone())
            .unwrap_or_else(|| "Custom Resume".to_string()),
        job_category,
        job_role,
        analysis_type: AnalysisType::Standard,
        analysis_result,
        created_at: Utc::now(),
        file_name: command.file_name,
        file_mime: command.file_mime,
    };

    state.store.save(record.clone()).await?;

    info!(
        analysis_id = %record.id,
        user_id = %record.user_id,
        ats_score = record.analysis_result.ats_score,
        keyword_score = record.analysis_result.keyword_match_score(),
        scorer = state.scorer.backend(),
        "Analysis stored"
    );

    Ok(record)
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
