//! Synonym table: alternate surface forms for canonical skills.
//!
//! Consulted only when the canonical skill itself is not a substring of the
//! resume. Forms are tried in order and the first hit wins.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    ("javascript", &["js", "nodejs", "node.js", "ecmascript"]),
    ("typescript", &["ts"]),
    ("python", &["py"]),
    ("react", &["reactjs", "react.js"]),
    ("node.js", &["nodejs", "node"]),
    ("sql", &["postgresql", "mysql", "database"]),
    ("docker", &["containerization"]),
    ("kubernetes", &["k8s"]),
    ("aws", &["amazon web services", "cloud"]),
    ("git", &["version control", "github", "gitlab"]),
    (
        "testing",
        &["unit testing", "integration testing", "test automation"],
    ),
    (
        "ci/cd",
        &["continuous integration", "continuous deployment", "devops"],
    ),
    ("rest", &["restful", "api"]),
    ("machine learning", &["ml", "ai", "artificial intelligence"]),
    ("data science", &["data analysis", "analytics"]),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_SYNONYMS.iter().map(|(skill, forms)| {
            (
                skill.to_string(),
                forms.iter().map(|f| f.to_string()).collect(),
            )
        }))
    }

    /// Builds a table, lower-casing keys and forms and dropping blanks.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let entries = entries
            .into_iter()
            .filter_map(|(skill, forms)| {
                let skill = skill.trim().to_lowercase();
                if skill.is_empty() {
                    return None;
                }
                let forms: Vec<String> = forms
                    .into_iter()
                    .map(|f| f.trim().to_lowercase())
                    .filter(|f| !f.is_empty())
                    .collect();
                Some((skill, forms))
            })
            .collect();
        Self { entries }
    }

    /// Loads `{ "<skill>": ["form", ...] }` from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read synonym file '{}'", path.display()))?;
        let parsed: BTreeMap<String, Vec<String>> = serde_json::from_str(&raw)
            .with_context(|| format!("Synonym file '{}' is not valid JSON", path.display()))?;
        Ok(Self::from_entries(parsed))
    }

    /// Alternate forms for a lower-cased canonical skill, if any.
    pub fn forms(&self, skill: &str) -> Option<&[String]> {
        self.entries.get(skill).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
