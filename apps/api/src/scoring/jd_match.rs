//! Lightweight job-description overlap: share of distinct JD terms that also
//! appear in the resume.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::scoring::keywords::percentage;

const TOKEN_PATTERN: &str = r"[a-z][a-z0-9+.#-]+";

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOKEN_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));

const STOP_WORDS: &[&str] = &[
    "and", "or", "the", "a", "an", "to", "for", "with", "of", "in", "on", "by", "at", "from", "as",
    "is", "are", "be", "this", "that", "these", "those", "you", "we", "they", "it", "your", "our",
];

fn tokenize(text: &str) -> BTreeSet<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| t.len() > 2 && !STOP_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// `None` when the description has no usable terms.
pub fn score_description_match(resume_text: &str, job_description: &str) -> Option<u8> {
    let jd_tokens = tokenize(job_description);
    if jd_tokens.is_empty() {
        return None;
    }
    let resume_tokens = tokenize(resume_text);
    let overlap = jd_tokens.intersection(&resume_tokens).count();
    Some(percentage(overlap, jd_tokens.len()))
}
