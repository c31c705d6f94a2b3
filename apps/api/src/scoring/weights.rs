//! Scoring configuration: composite weights, format penalties and suggestion cut-offs.
//!
//! Every number that changes an observable score lives here so a profile can be
//! chosen at startup and locked down in tests.

use serde::{Deserialize, Serialize};

/// Weights for the composite ATS score. Should sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub keyword: f64,
    pub section: f64,
    pub format: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword: 0.4,
            section: 0.3,
            format: 0.3,
        }
    }
}

impl ScoringWeights {
    /// Keyword-heavy alternate: 0.5 / 0.25 / 0.25.
    pub fn keyword_heavy() -> Self {
        Self {
            keyword: 0.5,
            section: 0.25,
            format: 0.25,
        }
    }
}

/// Named weight presets selectable via `SCORING_PROFILE`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringProfile {
    #[default]
    Balanced,
    KeywordHeavy,
}

impl ScoringProfile {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "balanced" => Some(Self::Balanced),
            "keyword_heavy" | "keyword-heavy" => Some(Self::KeywordHeavy),
            _ => None,
        }
    }

    pub fn weights(self) -> ScoringWeights {
        match self {
            Self::Balanced => ScoringWeights::default(),
            Self::KeywordHeavy => ScoringWeights::keyword_heavy(),
        }
    }
}

/// Which section categories count toward the section score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionSet {
    /// Summary, Experience, Education, Skills.
    #[default]
    Standard,
    /// Standard plus a Contact category.
    WithContact,
}

impl SectionSet {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "with_contact" | "with-contact" => Some(Self::WithContact),
            _ => None,
        }
    }
}

/// Penalty table for `score_format`. Base score is 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRules {
    pub short_word_limit: u32,
    pub short_penalty: u8,
    pub long_word_limit: u32,
    pub long_penalty: u8,
    /// Applied on top of `long_penalty` past this many words.
    pub very_long_word_limit: u32,
    pub very_long_extra_penalty: u8,
    pub no_bullets_penalty: u8,
    pub no_email_penalty: u8,
    pub no_experience_penalty: u8,
}

impl Default for FormatRules {
    fn default() -> Self {
        Self {
            short_word_limit: 200,
            short_penalty: 25,
            long_word_limit: 2000,
            long_penalty: 20,
            very_long_word_limit: 3000,
            very_long_extra_penalty: 10,
            no_bullets_penalty: 15,
            no_email_penalty: 10,
            no_experience_penalty: 10,
        }
    }
}

/// Strict (`<` / `>`) cut-offs used by `generate_suggestions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionThresholds {
    pub max_listed_missing: usize,
    pub keyword_low: u8,
    pub keyword_moderate: u8,
    pub section_low: u8,
    pub format_low: u8,
    pub short_word_count: u32,
    pub long_word_count: u32,
    pub jd_match_low: u8,
}

impl Default for SuggestionThresholds {
    fn default() -> Self {
        Self {
            max_listed_missing: 5,
            keyword_low: 60,
            keyword_moderate: 80,
            section_low: 60,
            format_low: 70,
            short_word_count: 250,
            long_word_count: 2000,
            jd_match_low: 50,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub sections: SectionSet,
    pub format: FormatRules,
    pub thresholds: SuggestionThresholds,
}

impl ScoringConfig {
    pub fn for_profile(profile: ScoringProfile, sections: SectionSet) -> Self {
        Self {
            weights: profile.weights(),
            sections,
            ..Self::default()
        }
    }
}
