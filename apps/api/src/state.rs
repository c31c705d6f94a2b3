use std::sync::Arc;

use crate::catalog::SkillCatalog;
use crate::config::Config;
use crate::scoring::ResumeScorer;
use crate::storage::AnalysisStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<SkillCatalog>,
    /// Pluggable scorer. Default: the rule-based `ScoringEngine`.
    pub scorer: Arc<dyn ResumeScorer>,
    pub store: Arc<dyn AnalysisStore>,
}

/// Built-in catalog and engine over a JSON store in a fresh temp dir.
/// Keep the `TempDir` alive for as long as the state is used.
#[cfg(test)]
pub async fn test_state() -> (AppState, tempfile::TempDir) {
    use crate::scoring::ScoringEngine;
    use crate::storage::JsonFileStore;

    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        analyses_path: dir.path().join("analyses.json"),
        ..Config::default()
    };
    let store = JsonFileStore::open(&config.analyses_path).await.unwrap();

    let state = AppState {
        config,
        catalog: Arc::new(SkillCatalog::builtin()),
        scorer: Arc::new(ScoringEngine::default()),
        store: Arc::new(store),
    };
    (state, dir)
}
