use serde::{Deserialize, Serialize};

/// Everything the engine needs for one analysis. Borrowed from the caller.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisInput<'a> {
    pub resume_text: &'a str,
    pub required_skills: &'a [String],
    /// Optional free-text job description to compare against.
    pub job_description: Option<&'a str>,
}

impl<'a> AnalysisInput<'a> {
    pub fn new(resume_text: &'a str, required_skills: &'a [String]) -> Self {
        Self {
            resume_text,
            required_skills,
            job_description: None,
        }
    }

    pub fn with_job_description(mut self, job_description: Option<&'a str>) -> Self {
        self.job_description = job_description.filter(|jd| !jd.trim().is_empty());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub score: u8,
    #[serde(default)]
    pub matched_skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub has_email: bool,
    pub has_phone: bool,
    pub has_linkedin: bool,
    pub has_github: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeMetrics {
    pub word_count: u32,
    /// Always at least 1.
    pub reading_time_minutes: u32,
}

/// Full report for one resume. Built once per call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub ats_score: u8,
    pub keyword_match: KeywordMatch,
    /// Required skills not found, in catalog order.
    pub missing_skills: Vec<String>,
    pub format_score: u8,
    pub section_score: u8,
    /// Priority-ordered improvement hints.
    pub suggestions: Vec<String>,
    pub jd_match_score: Option<u8>,
    pub contact: ContactInfo,
    pub metrics: ResumeMetrics,
}

impl AnalysisResult {
    pub fn keyword_match_score(&self) -> u8 {
        self.keyword_match.score
    }

    /// First score above 100, as `(field, value)`. Reports built by the engine
    /// never have one; reports supplied from outside might.
    pub fn score_out_of_range(&self) -> Option<(&'static str, u8)> {
        [
            ("ats_score", Some(self.ats_score)),
            ("keyword_match.score", Some(self.keyword_match.score)),
            ("format_score", Some(self.format_score)),
            ("section_score", Some(self.section_score)),
            ("jd_match_score", self.jd_match_score),
        ]
        .into_iter()
        .find_map(|(field, score)| score.filter(|s| *s > 100).map(|s| (field, s)))
    }
}
