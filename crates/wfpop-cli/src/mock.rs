use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use wfpop_core::{load_keywords, AppConfig, KeywordsFile};
use wfpop_scoring::{mock_records, write_records, MockOptions};

#[derive(Debug)]
pub(crate) struct MockArgs {
    pub output: Option<PathBuf>,
    pub keywords: Option<PathBuf>,
    pub videos_per_keyword: Option<usize>,
    pub topics_per_keyword: Option<usize>,
}

/// Generate a mock raw dataset and write it where `score` will read it.
///
/// # Errors
///
/// Returns an error if a configured keywords file is unreadable or invalid,
/// or the dataset cannot be written.
pub(crate) fn run_mock(config: &AppConfig, args: &MockArgs) -> anyhow::Result<()> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.input_path.clone());

    let seeds = match args.keywords.as_ref().or(config.keywords_path.as_ref()) {
        Some(path) => load_keywords(path)
            .with_context(|| format!("failed to load keywords from {}", path.display()))?,
        None => KeywordsFile::default(),
    };

    let options = MockOptions {
        videos_per_keyword: args
            .videos_per_keyword
            .unwrap_or(config.mock_videos_per_keyword),
        topics_per_keyword: args
            .topics_per_keyword
            .unwrap_or(config.mock_topics_per_keyword),
        ..MockOptions::default()
    };

    let records = mock_records(&seeds, &options, Utc::now());
    write_records(&output, &records)?;

    tracing::info!(
        output = %output.display(),
        keywords = seeds.keywords.len(),
        records = records.len(),
        "wrote mock dataset"
    );
    println!("wrote {} mock records to {}", records.len(), output.display());
    Ok(())
}
