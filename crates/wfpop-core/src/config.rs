use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("WFPOP_ENV", "development"))?;
    let log_level = or_default("WFPOP_LOG_LEVEL", "info");

    let input_path = PathBuf::from(or_default("WFPOP_INPUT_PATH", "data/sample_workflows.json"));
    let output_path = PathBuf::from(or_default(
        "WFPOP_OUTPUT_PATH",
        "data/sample_workflows_scored.json",
    ));
    let keywords_path = lookup("WFPOP_KEYWORDS_PATH")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from);

    if input_path == output_path {
        return Err(ConfigError::InvalidEnvVar {
            var: "WFPOP_OUTPUT_PATH".to_string(),
            reason: "output path must differ from input path".to_string(),
        });
    }

    let mock_videos_per_keyword = parse_usize("WFPOP_MOCK_VIDEOS_PER_KEYWORD", "2")?;
    let mock_topics_per_keyword = parse_usize("WFPOP_MOCK_TOPICS_PER_KEYWORD", "3")?;

    Ok(AppConfig {
        env,
        log_level,
        input_path,
        output_path,
        keywords_path,
        mock_videos_per_keyword,
        mock_topics_per_keyword,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "WFPOP_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
