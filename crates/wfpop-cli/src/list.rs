use std::path::PathBuf;

use anyhow::Context;
use wfpop_core::AppConfig;
use wfpop_scoring::{load_records, query_records, resolve_dataset_path, QueryFilter};

#[derive(Debug)]
pub(crate) struct ListArgs {
    pub platform: Option<String>,
    pub country: Option<String>,
    pub limit: usize,
    pub raw: bool,
    pub dataset: Option<PathBuf>,
}

/// Print a filtered slice of a dataset as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or the filter is invalid.
pub(crate) fn run_list(config: &AppConfig, args: &ListArgs) -> anyhow::Result<()> {
    let path = match (&args.dataset, args.raw) {
        (Some(path), _) => path.as_path(),
        (None, true) => config.input_path.as_path(),
        (None, false) => resolve_dataset_path(&config.output_path, &config.input_path),
    };

    let records = load_records(path)?;
    let filter = QueryFilter {
        platform: args.platform.clone(),
        country: args.country.clone(),
        limit: args.limit,
    };
    let selected = query_records(records, &filter)?;
    tracing::debug!(
        dataset = %path.display(),
        selected = selected.len(),
        "listing records"
    );

    let json = serde_json::to_string_pretty(&selected).context("failed to encode records")?;
    println!("{json}");
    Ok(())
}
