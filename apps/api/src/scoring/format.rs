//! Format heuristics: length banding plus three structural checks.
//!
//! The structural checks (`•`/`-`/`*`, `@`/`email`, `experience`/`work`) look
//! at the raw text, case-sensitive.

use crate::scoring::metrics::count_words;
use crate::scoring::weights::FormatRules;

const BULLET_MARKERS: &[&str] = &["•", "-", "*"];

pub fn score_format(resume_text: &str, rules: &FormatRules) -> u8 {
    let word_count = count_words(resume_text);
    let mut score: i32 = 100;

    if word_count < rules.short_word_limit {
        score -= i32::from(rules.short_penalty);
    } else if word_count > rules.long_word_limit {
        score -= i32::from(rules.long_penalty);
        if word_count > rules.very_long_word_limit {
            score -= i32::from(rules.very_long_extra_penalty);
        }
    }

    if !BULLET_MARKERS.iter().any(|m| resume_text.contains(m)) {
        score -= i32::from(rules.no_bullets_penalty);
    }
    if !resume_text.contains('@') && !resume_text.contains("email") {
        score -= i32::from(rules.no_email_penalty);
    }
    if !resume_text.contains("experience") && !resume_text.contains("work") {
        score -= i32::from(rules.no_experience_penalty);
    }

    score.clamp(0, 100) as u8
}
