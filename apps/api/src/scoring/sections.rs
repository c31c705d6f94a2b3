use crate::scoring::keywords::percentage;
use crate::scoring::weights::SectionSet;

/// A resume section and the header words that count as evidence for it.
#[derive(Debug, Clone, Copy)]
pub struct SectionCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

const STANDARD_SECTIONS: &[SectionCategory] = &[
    SectionCategory {
        name: "summary",
        keywords: &["summary", "objective", "profile", "about"],
    },
    SectionCategory {
        name: "experience",
        keywords: &["experience", "work", "employment", "career"],
    },
    SectionCategory {
        name: "education",
        keywords: &["education", "degree", "university", "college"],
    },
    SectionCategory {
        name: "skills",
        keywords: &["skills", "technical", "technologies", "tools"],
    },
];

const CONTACT_SECTION: SectionCategory = SectionCategory {
    name: "contact",
    keywords: &["contact", "email", "phone"],
};

pub fn section_categories(set: SectionSet) -> Vec<SectionCategory> {
    let mut categories = STANDARD_SECTIONS.to_vec();
    if set == SectionSet::WithContact {
        categories.push(CONTACT_SECTION);
    }
    categories
}

/// Names of the categories with at least one keyword present (case-insensitive).
pub fn found_sections(resume_text: &str, set: SectionSet) -> Vec<&'static str> {
    let lower = resume_text.to_lowercase();
    section_categories(set)
        .into_iter()
        .filter(|c| c.keywords.iter().any(|k| lower.contains(k)))
        .map(|c| c.name)
        .collect()
}

/// `round(100 * found / total)` over the configured categories.
pub fn score_sections(resume_text: &str, set: SectionSet) -> u8 {
    let total = section_categories(set).len();
    percentage(found_sections(resume_text, set).len(), total)
}
