use std::path::PathBuf;

use wfpop_core::AppConfig;

/// Run the scoring engine over one raw dataset.
///
/// CLI paths win over the configured defaults. On failure nothing is
/// written and the error is logged before being returned.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, or the output
/// cannot be written.
pub(crate) fn run_score(
    config: &AppConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let input = input.unwrap_or_else(|| config.input_path.clone());
    let output = output.unwrap_or_else(|| config.output_path.clone());

    match wfpop_scoring::run_scoring(&input, &output) {
        Ok(summary) => {
            println!(
                "wrote {} scored records to {} ({} duplicates merged)",
                summary.output_records,
                output.display(),
                summary.merged_duplicates
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(input = %input.display(), error = %e, "scoring aborted");
            Err(e.into())
        }
    }
}
