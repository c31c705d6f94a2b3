//! Scoring engine: combines the sub-scores into one `AnalysisResult`.
//!
//! Pure and synchronous with no I/O or shared mutable state. The same
//! input always yields the same report, so one engine can sit behind an `Arc`
//! and serve every request.
//!
//! `AppState` holds an `Arc<dyn ResumeScorer>`; `ScoringEngine` is the
//! rule-based implementation.

use tracing::debug;

use crate::scoring::contact::detect_contact_info;
use crate::scoring::format::score_format;
use crate::scoring::jd_match::score_description_match;
use crate::scoring::keywords::match_skills;
use crate::scoring::metrics::compute_metrics;
use crate::scoring::models::{AnalysisInput, AnalysisResult, KeywordMatch};
use crate::scoring::sections::score_sections;
use crate::scoring::suggestions::{generate_suggestions, SuggestionInputs};
use crate::scoring::synonyms::SynonymTable;
use crate::scoring::weights::{ScoringConfig, ScoringWeights};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Anything that can turn resume text plus a skill list into a report.
/// Never fails: garbage in degrades to low scores and a long suggestion list.
pub trait ResumeScorer: Send + Sync {
    fn analyze(&self, input: &AnalysisInput<'_>) -> AnalysisResult;

    /// Short label for logs, e.g. "rule_based".
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// ScoringEngine
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
    synonyms: SynonymTable,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig, synonyms: SynonymTable) -> Self {
        Self { config, synonyms }
    }

    pub fn analyze(&self, input: &AnalysisInput<'_>) -> AnalysisResult {
        let text = input.resume_text;

        let skill_match = match_skills(text, input.required_skills, &self.synonyms);
        let section_score = score_sections(text, self.config.sections);
        let format_score = score_format(text, &self.config.format);
        let contact = detect_contact_info(text);
        let metrics = compute_metrics(text);
        let jd_match_score = input
            .job_description
            .and_then(|jd| score_description_match(text, jd));

        let ats_score = compute_ats_score(
            skill_match.score,
            section_score,
            format_score,
            &self.config.weights,
        );

        debug!(
            ats_score,
            keyword = skill_match.score,
            section = section_score,
            format = format_score,
            words = metrics.word_count,
            "Resume scored"
        );

        let suggestions = generate_suggestions(
            &SuggestionInputs {
                missing_skills: &skill_match.missing,
                keyword_match_score: skill_match.score,
                section_score,
                format_score,
                word_count: metrics.word_count,
                contact,
                jd_match_score,
            },
            &self.config.thresholds,
        );

        AnalysisResult {
            ats_score,
            keyword_match: KeywordMatch {
                score: skill_match.score,
                matched_skills: skill_match.matched,
            },
            missing_skills: skill_match.missing,
            format_score,
            section_score,
            suggestions,
            jd_match_score,
            contact,
            metrics,
        }
    }
}

/// Built-in synonyms with the balanced configuration.
impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default(), SynonymTable::builtin())
    }
}

impl ResumeScorer for ScoringEngine {
    fn analyze(&self, input: &AnalysisInput<'_>) -> AnalysisResult {
        ScoringEngine::analyze(self, input)
    }

    fn backend(&self) -> &'static str {
        "rule_based"
    }
}

/// Weighted composite: `round(wk*keyword + ws*section + wf*format)`, clamped to 0–100.
pub fn compute_ats_score(
    keyword_match_score: u8,
    section_score: u8,
    format_score: u8,
    weights: &ScoringWeights,
) -> u8 {
    (weights.keyword * f64::from(keyword_match_score)
        + weights.section * f64::from(section_score)
        + weights.format * f64::from(format_score))
    .round()
    .clamp(0.0, 100.0) as u8
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::weights::{ScoringProfile, SectionSet};

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn filler(n: usize) -> String {
        vec!["filler"; n].join(" ")
    }

    const SAMPLE_RESUME: &str = r#"
        Jane Smith
        jane.smith@email.com | 555-123-4567 | linkedin.com/in/janesmith

        SUMMARY
        Frontend engineer focused on accessibility and responsive design.

        TECHNICAL SKILLS
        • JavaScript, TypeScript, React, Next.js, Redux
        • HTML, CSS, Tailwind, Webpack, Vite, Git

        PROFESSIONAL EXPERIENCE
        • Built a design system used by 40 product teams
        • Cut bundle size by 35% with code splitting

        EDUCATION
        B.S. Computer Science, State University
    "#;

    #[test]
    fn test_scenario_empty_resume() {
        let engine = ScoringEngine::default();
        let required = skills(&["javascript", "react", "css"]);
        let result = engine.analyze(&AnalysisInput::new("", &required));

        assert_eq!(result.keyword_match_score(), 0);
        assert_eq!(result.missing_skills, required);
        assert!(result.keyword_match.matched_skills.is_empty());
        // 100 - 25 (short) - 15 (no bullets) - 10 (no email) - 10 (no experience)
        assert_eq!(result.format_score, 40);
        assert_eq!(result.section_score, 0);
        // round(0.4*0 + 0.3*0 + 0.3*40) = 12
        assert_eq!(result.ats_score, 12);
        assert_eq!(
            result.suggestions[0],
            "Consider adding these relevant skills: javascript, react, css"
        );
        assert_eq!(result.suggestions.len(), 8);
        assert_eq!(result.metrics.word_count, 0);
        assert_eq!(result.metrics.reading_time_minutes, 1);
        assert_eq!(result.jd_match_score, None);
    }

    #[test]
    fn test_scenario_synonym_and_direct_matches() {
        let engine = ScoringEngine::default();
        let required = skills(&["javascript", "react", "css"]);
        let text = format!(
            "I use JS and React daily, with CSS for styling, • bullet, email: a@b.com, {}",
            filler(250)
        );
        let result = engine.analyze(&AnalysisInput::new(&text, &required));

        assert_eq!(result.keyword_match_score(), 100);
        assert_eq!(result.keyword_match.matched_skills, required);
        assert!(result.missing_skills.is_empty());
        assert!(!result
            .suggestions
            .iter()
            .any(|s| s.starts_with("Consider adding these relevant skills")));
        assert!(result.contact.has_email);
    }

    #[test]
    fn test_scenario_empty_skill_list() {
        let engine = ScoringEngine::default();
        let result = engine.analyze(&AnalysisInput::new(SAMPLE_RESUME, &[]));

        assert_eq!(result.keyword_match_score(), 0);
        assert!(result.missing_skills.is_empty());
        assert!(result.suggestions[0].starts_with("Add more role-specific keywords"));
    }

    #[test]
    fn test_scenario_contact_detection() {
        let engine = ScoringEngine::default();
        let result = engine.analyze(&AnalysisInput::new(
            "Reach me at jane@x.org or 555-123-4567",
            &[],
        ));
        assert!(result.contact.has_email);
        assert!(result.contact.has_phone);
    }

    #[test]
    fn test_sample_resume_scores_well() {
        let engine = ScoringEngine::default();
        let required = skills(&[
            "javascript",
            "typescript",
            "react",
            "next.js",
            "html",
            "css",
            "tailwind",
            "redux",
            "testing-library",
            "cypress",
            "webpack",
            "vite",
            "accessibility",
            "responsive design",
            "git",
        ]);
        let result = engine.analyze(&AnalysisInput::new(SAMPLE_RESUME, &required));

        assert_eq!(result.missing_skills, ["testing-library", "cypress"]);
        // 13 / 15 = 86.7
        assert_eq!(result.keyword_match_score(), 87);
        assert_eq!(result.section_score, 100);
        // short (-25), and "experience" only appears upper-cased (-10)
        assert_eq!(result.format_score, 65);
        assert_eq!(
            result.ats_score,
            compute_ats_score(87, 100, 65, &ScoringWeights::default())
        );
        assert!(result.contact.has_linkedin);
        assert!(!result.contact.has_github);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let engine = ScoringEngine::default();
        let required = skills(&["python", "sql", "docker"]);
        let input = AnalysisInput::new(SAMPLE_RESUME, &required)
            .with_job_description(Some("Python and SQL for analytics"));

        let first = serde_json::to_string(&engine.analyze(&input)).unwrap();
        let second = serde_json::to_string(&engine.analyze(&input)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ats_formula_holds_for_all_sub_scores() {
        let w = ScoringWeights::default();
        for k in (0..=100u8).step_by(7) {
            for s in (0..=100u8).step_by(25) {
                for f in (0..=100u8).step_by(5) {
                    let expected = (0.4 * f64::from(k) + 0.3 * f64::from(s) + 0.3 * f64::from(f))
                        .round() as u8;
                    assert_eq!(compute_ats_score(k, s, f, &w), expected);
                }
            }
        }
        assert_eq!(compute_ats_score(100, 100, 100, &w), 100);
        assert_eq!(compute_ats_score(0, 0, 0, &w), 0);
    }

    #[test]
    fn test_keyword_heavy_profile_changes_composite() {
        let config = ScoringConfig::for_profile(ScoringProfile::KeywordHeavy, SectionSet::Standard);
        let engine = ScoringEngine::new(config, SynonymTable::builtin());
        let required = skills(&["javascript", "react", "css"]);
        let result = engine.analyze(&AnalysisInput::new("", &required));
        // round(0.5*0 + 0.25*0 + 0.25*40) = 10
        assert_eq!(result.ats_score, 10);
    }

    #[test]
    fn test_job_description_adds_match_score_and_suggestion() {
        let engine = ScoringEngine::default();
        let input = AnalysisInput::new(SAMPLE_RESUME, &[])
            .with_job_description(Some("Kotlin Android Jetpack Compose Gradle"));
        let result = engine.analyze(&input);

        assert_eq!(result.jd_match_score, Some(0));
        assert_eq!(
            result.suggestions.last().map(String::as_str),
            Some("Mirror the language of the job description where appropriate.")
        );
    }

    #[test]
    fn test_blank_job_description_is_ignored() {
        let input = AnalysisInput::new("text", &[]).with_job_description(Some("   "));
        assert!(input.job_description.is_none());
    }

    #[test]
    fn test_trait_object_dispatch() {
        let scorer: Box<dyn ResumeScorer> = Box::new(ScoringEngine::default());
        assert_eq!(scorer.backend(), "rule_based");
        let result = scorer.analyze(&AnalysisInput::new("", &[]));
        assert_eq!(result.keyword_match_score(), 0);
    }

    #[test]
    fn test_default_engine_uses_builtin_synonyms() {
        let skills = vec!["kubernetes".to_string(), "python".to_string()];
        let input = AnalysisInput::new("Ran k8s clusters, wrote py scripts", &skills);
        let result = ScoringEngine::default().analyze(&input);
        assert_eq!(result.keyword_match.matched_skills, ["kubernetes", "python"]);
        assert!(result.missing_skills.is_empty());
    }
}
