use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::scoring::{ScoringProfile, SectionSet};

pub const DEFAULT_ANALYSES_PATH: &str = "storage/analyses.json";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Origins the CORS layer accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AllowedOrigins {
    #[default]
    Any,
    List(Vec<String>),
}

impl AllowedOrigins {
    /// `*` (or nothing) means any origin; otherwise a comma-separated list.
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(origins)
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub analyses_path: PathBuf,
    /// JSON catalog replacing the built-in roles.
    pub roles_path: Option<PathBuf>,
    /// JSON synonym table replacing the built-in one.
    pub synonyms_path: Option<PathBuf>,
    pub scoring_profile: ScoringProfile,
    pub section_set: SectionSet,
    pub allowed_origins: AllowedOrigins,
    pub max_upload_bytes: usize,
    /// Score a built-in sample resume when `/analyze-resume` gets no text.
    pub sample_resume_fallback: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            analyses_path: PathBuf::from(DEFAULT_ANALYSES_PATH),
            roles_path: None,
            synonyms_path: None,
            scoring_profile: ScoringProfile::default(),
            section_set: SectionSet::default(),
            allowed_origins: AllowedOrigins::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            sample_resume_fallback: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => defaults.port,
        };

        let scoring_profile = match var("SCORING_PROFILE") {
            Some(raw) => ScoringProfile::from_name(&raw).with_context(|| {
                format!("SCORING_PROFILE '{raw}' must be 'balanced' or 'keyword_heavy'")
            })?,
            None => defaults.scoring_profile,
        };

        let section_set = match var("SECTION_SET") {
            Some(raw) => SectionSet::from_name(&raw).with_context(|| {
                format!("SECTION_SET '{raw}' must be 'standard' or 'with_contact'")
            })?,
            None => defaults.section_set,
        };

        let max_upload_bytes = match var("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            None => defaults.max_upload_bytes,
        };

        let sample_resume_fallback = match var("SAMPLE_RESUME_FALLBACK") {
            Some(raw) => parse_flag(&raw).with_context(|| {
                format!("SAMPLE_RESUME_FALLBACK '{raw}' must be true or false")
            })?,
            None => defaults.sample_resume_fallback,
        };

        Ok(Config {
            port,
            rust_log: var("RUST_LOG").unwrap_or(defaults.rust_log),
            analyses_path: var("ANALYSES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.analyses_path),
            roles_path: var("ROLES_PATH").map(PathBuf::from),
            synonyms_path: var("SYNONYMS_PATH").map(PathBuf::from),
            scoring_profile,
            section_set,
            allowed_origins: var("BACKEND_ALLOWED_ORIGINS")
                .map(|raw| AllowedOrigins::parse(&raw))
                .unwrap_or_default(),
            max_upload_bytes,
            sample_resume_fallback,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.analyses_path, PathBuf::from(DEFAULT_ANALYSES_PATH));
        assert_eq!(config.scoring_profile, ScoringProfile::Balanced);
        assert_eq!(config.section_set, SectionSet::Standard);
        assert_eq!(config.allowed_origins, AllowedOrigins::Any);
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert!(config.roles_path.is_none());
        assert!(!config.sample_resume_fallback);
    }

    #[test]
    fn test_values_are_read() {
        let config = load(&[
            ("PORT", "9000"),
            ("ANALYSES_PATH", "/tmp/a.json"),
            ("ROLES_PATH", "roles.json"),
            ("SCORING_PROFILE", "keyword_heavy"),
            ("SECTION_SET", "with_contact"),
            ("BACKEND_ALLOWED_ORIGINS", "http://localhost:3000, https://app.example.com"),
            ("MAX_UPLOAD_BYTES", "1024"),
            ("SAMPLE_RESUME_FALLBACK", "true"),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.analyses_path, PathBuf::from("/tmp/a.json"));
        assert_eq!(config.roles_path, Some(PathBuf::from("roles.json")));
        assert_eq!(config.scoring_profile, ScoringProfile::KeywordHeavy);
        assert_eq!(config.section_set, SectionSet::WithContact);
        assert_eq!(
            config.allowed_origins,
            AllowedOrigins::List(vec![
                "http://localhost:3000".to_string(),
                "https://app.example.com".to_string()
            ])
        );
        assert_eq!(config.max_upload_bytes, 1024);
        assert!(config.sample_resume_fallback);
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(load(&[("PORT", "eighty")]).is_err());
        assert!(load(&[("SCORING_PROFILE", "random")]).is_err());
        assert!(load(&[("SECTION_SET", "all")]).is_err());
        assert!(load(&[("MAX_UPLOAD_BYTES", "-1")]).is_err());
        assert!(load(&[("SAMPLE_RESUME_FALLBACK", "maybe")]).is_err());
    }

    #[test]
    fn test_wildcard_origin_is_any() {
        assert_eq!(AllowedOrigins::parse("*"), AllowedOrigins::Any);
        assert_eq!(AllowedOrigins::parse("http://a, *"), AllowedOrigins::Any);
        assert_eq!(AllowedOrigins::parse(" , "), AllowedOrigins::Any);
    }
}
