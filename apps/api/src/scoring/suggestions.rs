//! Suggestion generation: deterministic, priority-ordered hints built from
//! the sub-scores.
//!
//! Order: missing skills, keyword coverage, sections, format, length, contact
//! info, then job-description wording when a description was supplied.

use crate::scoring::models::ContactInfo;
use crate::scoring::weights::SuggestionThresholds;

/// The sub-results suggestions are derived from.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionInputs<'a> {
    pub missing_skills: &'a [String],
    pub keyword_match_score: u8,
    pub section_score: u8,
    pub format_score: u8,
    pub word_count: u32,
    pub contact: ContactInfo,
    pub jd_match_score: Option<u8>,
}

pub fn generate_suggestions(
    inputs: &SuggestionInputs<'_>,
    thresholds: &SuggestionThresholds,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !inputs.missing_skills.is_empty() {
        let top_missing: Vec<&str> = inputs
            .missing_skills
            .iter()
            .take(thresholds.max_listed_missing)
            .map(String::as_str)
            .collect();
        suggestions.push(format!(
            "Consider adding these relevant skills: {}",
            top_missing.join(", ")
        ));
    }

    if inputs.keyword_match_score < thresholds.keyword_low {
        suggestions.push(
            "Add more role-specific keywords throughout your resume, especially in the Skills and Experience sections."
                .to_string(),
        );
    } else if inputs.keyword_match_score < thresholds.keyword_moderate {
        suggestions.push(
            "Good keyword coverage! Consider adding a few more relevant technical terms."
                .to_string(),
        );
    }

    if inputs.section_score < thresholds.section_low {
        suggestions.push(
            "Ensure you have clearly labeled sections for Summary, Skills, Experience, and Education."
                .to_string(),
        );
    }

    if inputs.format_score < thresholds.format_low {
        suggestions.push(
            "Improve formatting by using bullet points, consistent spacing, and ensuring all text is selectable."
                .to_string(),
        );
    }

    if inputs.word_count < thresholds.short_word_count {
        suggestions.push(
            "Consider adding more detail to your experience and projects to reach 300-500 words."
                .to_string(),
        );
    } else if inputs.word_count > thresholds.long_word_count {
        suggestions.push(
            "Your resume might be too long. Consider condensing to 1-2 pages for better ATS performance."
                .to_string(),
        );
    }

    if !inputs.contact.has_email {
        suggestions.push("Add a professional email address in your contact information.".to_string());
    }
    if !inputs.contact.has_phone {
        suggestions.push("Include a phone number for better contact options.".to_string());
    }
    if !inputs.contact.has_linkedin && !inputs.contact.has_github {
        suggestions.push("Consider adding LinkedIn or GitHub profile links.".to_string());
    }

    if let Some(score) = inputs.jd_match_score {
        if score < thresholds.jd_match_low {
            suggestions
                .push("Mirror the language of the job description where appropriate.".to_string());
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_contact() -> ContactInfo {
        ContactInfo {
            has_email: true,
            has_phone: true,
            has_linkedin: true,
            has_github: false,
        }
    }

    fn strong_inputs(missing: &[String]) -> SuggestionInputs<'_> {
        SuggestionInputs {
            missing_skills: missing,
            keyword_match_score: 100,
            section_score: 100,
            format_score: 100,
            word_count: 500,
            contact: complete_contact(),
            jd_match_score: None,
        }
    }

    #[test]
    fn test_strong_resume_gets_no_suggestions() {
        let out = generate_suggestions(&strong_inputs(&[]), &SuggestionThresholds::default());
        assert!(out.is_empty(), "unexpected: {out:?}");
    }

    #[test]
    fn test_missing_skills_lists_first_five() {
        let missing: Vec<String> = ["a", "b", "c", "d", "e", "f", "g"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let out = generate_suggestions(&strong_inputs(&missing), &SuggestionThresholds::default());
        assert_eq!(out[0], "Consider adding these relevant skills: a, b, c, d, e");
    }

    #[test]
    fn test_keyword_thresholds_are_strict() {
        let t = SuggestionThresholds::default();
        let mut inputs = strong_inputs(&[]);

        inputs.keyword_match_score = 59;
        assert!(generate_suggestions(&inputs, &t)[0].starts_with("Add more role-specific"));

        inputs.keyword_match_score = 60;
        assert!(generate_suggestions(&inputs, &t)[0].starts_with("Good keyword coverage"));

        inputs.keyword_match_score = 79;
        assert!(generate_suggestions(&inputs, &t)[0].starts_with("Good keyword coverage"));

        inputs.keyword_match_score = 80;
        assert!(generate_suggestions(&inputs, &t).is_empty());
    }

    #[test]
    fn test_section_and_format_thresholds_are_strict() {
        let t = SuggestionThresholds::default();
        let mut inputs = strong_inputs(&[]);

        inputs.section_score = 60;
        inputs.format_score = 70;
        assert!(generate_suggestions(&inputs, &t).is_empty());

        inputs.section_score = 59;
        inputs.format_score = 69;
        let out = generate_suggestions(&inputs, &t);
        assert_eq!(out.len(), 2);
        assert!(out[0].starts_with("Ensure you have clearly labeled sections"));
        assert!(out[1].starts_with("Improve formatting"));
    }

    #[test]
    fn test_word_count_suggestions() {
        let t = SuggestionThresholds::default();
        let mut inputs = strong_inputs(&[]);

        inputs.word_count = 249;
        assert!(generate_suggestions(&inputs, &t)[0].contains("300-500 words"));

        inputs.word_count = 250;
        assert!(generate_suggestions(&inputs, &t).is_empty());

        inputs.word_count = 2000;
        assert!(generate_suggestions(&inputs, &t).is_empty());

        inputs.word_count = 2001;
        assert!(generate_suggestions(&inputs, &t)[0].contains("too long"));
    }

    #[test]
    fn test_contact_suggestions() {
        let t = SuggestionThresholds::default();
        let mut inputs = strong_inputs(&[]);
        inputs.contact = ContactInfo::default();

        let out = generate_suggestions(&inputs, &t);
        assert_eq!(
            out,
            [
                "Add a professional email address in your contact information.",
                "Include a phone number for better contact options.",
                "Consider adding LinkedIn or GitHub profile links.",
            ]
        );

        inputs.contact.has_github = true;
        assert_eq!(generate_suggestions(&inputs, &t).len(), 2);
    }

    #[test]
    fn test_priority_order() {
        let missing = vec!["rust".to_string()];
        let inputs = SuggestionInputs {
            missing_skills: &missing,
            keyword_match_score: 10,
            section_score: 10,
            format_score: 10,
            word_count: 10,
            contact: ContactInfo::default(),
            jd_match_score: Some(10),
        };
        let out = generate_suggestions(&inputs, &SuggestionThresholds::default());
        let prefixes = [
            "Consider adding these relevant skills",
            "Add more role-specific keywords",
            "Ensure you have clearly labeled sections",
            "Improve formatting",
            "Consider adding more detail",
            "Add a professional email",
            "Include a phone number",
            "Consider adding LinkedIn or GitHub",
            "Mirror the language",
        ];
        assert_eq!(out.len(), prefixes.len());
        for (suggestion, prefix) in out.iter().zip(prefixes) {
            assert!(suggestion.starts_with(prefix), "{suggestion} !~ {prefix}");
        }
    }

    #[test]
    fn test_jd_match_suggestion_only_below_threshold() {
        let t = SuggestionThresholds::default();
        let mut inputs = strong_inputs(&[]);
        inputs.jd_match_score = Some(50);
        assert!(generate_suggestions(&inputs, &t).is_empty());
        inputs.jd_match_score = Some(49);
        assert_eq!(generate_suggestions(&inputs, &t).len(), 1);
    }
}
