// Resume scoring engine.
// Implements: skill matching, section and format scoring, contact detection,
// word metrics, the weighted ATS composite and suggestion generation.
// Everything here is pure: no I/O and no async.

pub mod contact;
pub mod engine;
pub mod format;
pub mod jd_match;
pub mod keywords;
pub mod metrics;
pub mod models;
pub mod sections;
pub mod suggestions;
pub mod synonyms;
pub mod weights;

// Re-export the public API consumed by handlers and startup code.
pub use engine::{ResumeScorer, ScoringEngine};
pub use models::{AnalysisInput, AnalysisResult};
pub use synonyms::SynonymTable;
pub use weights::{ScoringConfig, ScoringProfile, SectionSet};
