use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Seed keywords used when no keywords file is configured.
pub const DEFAULT_SEED_KEYWORDS: &[&str] = &[
    "gmail automation",
    "google sheets",
    "slack integration",
    "whatsapp reminders",
    "twilio sms",
    "airtable sync",
    "shopify orders",
    "pdf parsing",
    "webhook",
    "jira automation",
];

/// Regions each keyword is sampled for when none are configured.
pub const DEFAULT_REGIONS: &[&str] = &["US", "IN"];

fn default_regions() -> Vec<String> {
    DEFAULT_REGIONS.iter().map(|r| (*r).to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordsFile {
    pub keywords: Vec<String>,
    #[serde(default = "default_regions")]
    pub regions: Vec<String>,
}

impl Default for KeywordsFile {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_SEED_KEYWORDS
                .iter()
                .map(|k| (*k).to_string())
                .collect(),
            regions: default_regions(),
        }
    }
}

/// Load and validate the seed-keyword configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_keywords(path: &Path) -> Result<KeywordsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::KeywordsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let keywords_file: KeywordsFile = serde_yaml::from_str(&content)?;

    validate_keywords(&keywords_file)?;

    Ok(keywords_file)
}

fn validate_keywords(keywords_file: &KeywordsFile) -> Result<(), ConfigError> {
    if keywords_file.keywords.is_empty() {
        return Err(ConfigError::Validation(
            "at least one keyword is required".to_string(),
        ));
    }

    if keywords_file.regions.iter().all(|r| r.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "at least one non-empty region is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for keyword in &keywords_file.keywords {
        if keyword.trim().is_empty() {
            return Err(ConfigError::Validation(
                "keyword must be non-empty".to_string(),
            ));
        }

        if !seen.insert(keyword.trim().to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate keyword: '{keyword}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "keywords_test.rs"]
mod tests;
