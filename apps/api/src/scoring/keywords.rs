//! Skill matching: direct substring first, then synonym forms.
//!
//! Matching is plain substring containment on lower-cased text, so "java" is
//! found inside "javascript". Tightening this would change every stored score.

use crate::scoring::synonyms::SynonymTable;

/// Partition of the required skills into found / not found, plus the 0–100 score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub score: u8,
}

/// Matches `required_skills` (in catalog order) against the resume text.
///
/// An empty skill list scores 0 rather than dividing by zero.
pub fn match_skills(
    resume_text: &str,
    required_skills: &[String],
    synonyms: &SynonymTable,
) -> SkillMatch {
    let resume_lower = resume_text.to_lowercase();

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in required_skills {
        let skill_lower = skill.trim().to_lowercase();
        if skill_is_present(&resume_lower, &skill_lower, synonyms) {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }

    SkillMatch {
        score: percentage(matched.len(), required_skills.len()),
        matched,
        missing,
    }
}

fn skill_is_present(resume_lower: &str, skill_lower: &str, synonyms: &SynonymTable) -> bool {
    if skill_lower.is_empty() {
        return false;
    }
    if resume_lower.contains(skill_lower) {
        return true;
    }
    synonyms
        .forms(skill_lower)
        .map(|forms| forms.iter().any(|form| resume_lower.contains(form.as_str())))
        .unwrap_or(false)
}

/// `round(100 * part / whole)`, 0 when `whole` is 0.
pub(crate) fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round().clamp(0.0, 100.0) as u8
}
