//! Skill catalog: job category → role → required skills.
//!
//! Loaded once at startup (built in, or from `ROLES_PATH`) and shared read-only.
//! Skill strings are trimmed and lower-cased at load so matching never has to
//! re-normalize them.

pub mod handlers;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub description: String,
    pub required_skills: Vec<String>,
}

/// A role entry as it appears on disk: either the detailed object or a bare skill list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RoleEntry {
    Detailed {
        #[serde(default)]
        description: String,
        required_skills: Vec<String>,
    },
    Skills(Vec<String>),
}

impl From<RoleEntry> for RoleProfile {
    fn from(entry: RoleEntry) -> Self {
        let (description, skills) = match entry {
            RoleEntry::Detailed {
                description,
                required_skills,
            } => (description, required_skills),
            RoleEntry::Skills(skills) => (String::new(), skills),
        };
        RoleProfile {
            description,
            required_skills: normalize_skills(skills),
        }
    }
}

fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    skills
        .into_iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillCatalog {
    categories: BTreeMap<String, BTreeMap<String, RoleProfile>>,
}

const BUILTIN_ROLES: &[(&str, &str, &str, &[&str])] = &[
    (
        "Technology",
        "Frontend Developer",
        "Develop user-facing web applications and interfaces",
        &[
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
        ],
    ),
    (
        "Technology",
        "Backend Developer",
        "Build server-side applications and APIs",
        &[
            "node.js",
            "express",
            "python",
            "fastapi",
            "java",
            "spring",
            "rest",
            "graphql",
            "sql",
            "postgresql",
            "mysql",
            "nosql",
            "mongodb",
            "docker",
            "kubernetes",
            "aws",
            "auth",
            "jwt",
            "caching",
            "redis",
            "message queues",
            "git",
            "testing",
        ],
    ),
    (
        "Technology",
        "Software Engineer",
        "Design and develop software applications and systems",
        &[
            "data structures",
            "algorithms",
            "python",
            "java",
            "javascript",
            "git",
            "sql",
            "rest",
            "system design",
            "docker",
            "cloud",
            "aws",
            "testing",
            "ci/cd",
            "design patterns",
            "linux",
        ],
    ),
    (
        "Technology",
        "Data Scientist",
        "Analyze complex data to extract insights and build models",
        &[
            "python",
            "pandas",
            "numpy",
            "scikit-learn",
            "machine learning",
            "statistics",
            "sql",
            "matplotlib",
            "seaborn",
            "feature engineering",
            "model evaluation",
            "notebooks",
            "deployment",
            "mlflow",
            "tensorflow",
            "pytorch",
            "data visualization",
        ],
    ),
];

impl SkillCatalog {
    pub fn builtin() -> Self {
        let mut categories: BTreeMap<String, BTreeMap<String, RoleProfile>> = BTreeMap::new();
        for (category, role, description, skills) in BUILTIN_ROLES {
            categories.entry(category.to_string()).or_default().insert(
                role.to_string(),
                RoleProfile {
                    description: description.to_string(),
                    required_skills: normalize_skills(
                        skills.iter().map(|s| s.to_string()).collect(),
                    ),
                },
            );
        }
        Self { categories }
    }

    /// Parses `{ "<category>": { "<role>": <entry> } }`.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let parsed: BTreeMap<String, BTreeMap<String, RoleEntry>> = serde_json::from_str(raw)?;
        let categories = parsed
            .into_iter()
            .map(|(category, roles)| {
                let roles = roles
                    .into_iter()
                    .map(|(role, entry)| (role, RoleProfile::from(entry)))
                    .collect();
                (category, roles)
            })
            .collect();
        Ok(Self { categories })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Category names, sorted.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// Role names within a category, sorted. `None` for an unknown category.
    pub fn roles(&self, category: &str) -> Option<Vec<&str>> {
        self.categories
            .get(category)
            .map(|roles| roles.keys().map(String::as_str).collect())
    }

    pub fn role(&self, category: &str, role: &str) -> Option<&RoleProfile> {
        self.categories.get(category)?.get(role)
    }

    pub fn required_skills(&self, category: &str, role: &str) -> Option<&[String]> {
        self.role(category, role)
            .map(|profile| profile.required_skills.as_slice())
    }

    pub fn role_count(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }
}
