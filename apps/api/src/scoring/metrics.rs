use crate::scoring::models::ResumeMetrics;

const WORDS_PER_MINUTE: f64 = 200.0;

/// Non-empty whitespace-separated tokens.
pub fn count_words(text: &str) -> u32 {
    u32::try_from(text.split_whitespace().count()).unwrap_or(u32::MAX)
}

pub fn compute_metrics(resume_text: &str) -> ResumeMetrics {
    let word_count = count_words(resume_text);
    let reading_time_minutes = ((f64::from(word_count) / WORDS_PER_MINUTE).round() as u32).max(1);
    ResumeMetrics {
        word_count,
        reading_time_minutes,
    }
}
