use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-level settings for the batch commands.
///
/// Paths here are defaults; the CLI lets each invocation override them.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Raw dataset written by the collectors.
    pub input_path: PathBuf,
    /// Scored dataset written by `score` and read by `list`.
    pub output_path: PathBuf,
    /// Optional seed-keyword YAML used by mock generation.
    pub keywords_path: Option<PathBuf>,
    pub mock_videos_per_keyword: usize,
    pub mock_topics_per_keyword: usize,
}
