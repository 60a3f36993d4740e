use anyhow::{bail, Context, Result};

use crate::search_client::DEFAULT_SEARCH_API_URL;
use crate::skills::SkillSet;
use crate::view::state::ResponseOrdering;

pub const DEFAULT_QUERY: &str = "Machine Learning Engineer";

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup only fails on values that do not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub search_api_url: String,
    pub default_query: String,
    pub skills: SkillSet,
    pub response_ordering: ResponseOrdering,
    /// Serve built-in sample postings instead of calling the search API.
    pub local_testing: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (the process env in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let skills = match lookup("SKILLS") {
            Some(raw) => {
                let skills = SkillSet::parse(&raw);
                if skills.is_empty() {
                    bail!("SKILLS is set but lists no skills");
                }
                skills
            }
            None => SkillSet::default(),
        };

        let response_ordering = if parse_flag(&lookup, "SEARCH_DISCARD_STALE")? {
            ResponseOrdering::DiscardStale
        } else {
            ResponseOrdering::LastWriteWins
        };

        Ok(Config {
            search_api_url: lookup("SEARCH_API_URL")
                .unwrap_or_else(|| DEFAULT_SEARCH_API_URL.to_string()),
            default_query: lookup("DEFAULT_QUERY").unwrap_or_else(|| DEFAULT_QUERY.to_string()),
            skills,
            response_ordering,
            local_testing: parse_flag(&lookup, "ENABLE_LOCAL_TESTING")?,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Unset means false.
fn parse_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<bool> {
    match lookup(key).map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(false),
        Some(v) => match v.as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" | "" => Ok(false),
            other => bail!("{key} must be true or false, got '{other}'"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.search_api_url, "http://127.0.0.1:8000/api/search");
        assert_eq!(config.default_query, "Machine Learning Engineer");
        assert_eq!(config.skills, SkillSet::default());
        assert_eq!(config.response_ordering, ResponseOrdering::LastWriteWins);
        assert!(!config.local_testing);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SEARCH_API_URL", "http://search.internal/api/search"),
            ("DEFAULT_QUERY", "Rust Engineer"),
            ("SKILLS", "Rust, Tokio"),
            ("SEARCH_DISCARD_STALE", "TRUE"),
            ("ENABLE_LOCAL_TESTING", "1"),
            ("PORT", "3000"),
        ])
        .unwrap();

        assert_eq!(config.search_api_url, "http://search.internal/api/search");
        assert_eq!(config.default_query, "Rust Engineer");
        assert_eq!(config.skills, SkillSet::new(["Rust", "Tokio"]));
        assert_eq!(config.response_ordering, ResponseOrdering::DiscardStale);
        assert!(config.local_testing);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_bad_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_bad_flag_is_rejected() {
        let err = config_from(&[("SEARCH_DISCARD_STALE", "maybe")]).unwrap_err();
        assert!(err.to_string().contains("SEARCH_DISCARD_STALE"));
    }

    #[test]
    fn test_empty_skill_list_is_rejected() {
        assert!(config_from(&[("SKILLS", " , ")]).is_err());
    }
}
