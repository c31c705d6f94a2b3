use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::AnalysisResult;

pub const DEFAULT_USER_ID: &str = "default_user";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    /// Rule-based scoring engine.
    #[default]
    Standard,
    /// Produced elsewhere (model-backed) and stored via `/store-analysis`.
    Ai,
}

/// A persisted analysis: the engine's report plus caller-side metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub user_id: String,
    pub resume_name: String,
    pub job_category: String,
    pub job_role: String,
    pub analysis_type: AnalysisType,
    pub analysis_result: AnalysisResult,
    pub created_at: DateTime<Utc>,
    pub file_name: Option<String>,
    pub file_mime: Option<String>,
}
