//! JSON document boundary around the pure pipeline.

use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use wfpop_core::WorkflowRecord;

use crate::error::ScoringError;
use crate::pipeline::{score_records, ScoringSummary};

/// Reads a JSON array of records.
///
/// # Errors
///
/// Returns [`ScoringError::ReadInput`] if the file cannot be read and
/// [`ScoringError::ParseInput`] if it is not a JSON array of records.
pub fn load_records(path: &Path) -> Result<Vec<WorkflowRecord>, ScoringError> {
    let content = std::fs::read_to_string(path).map_err(|source| ScoringError::ReadInput {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ScoringError::ParseInput {
        path: path.display().to_string(),
        source,
    })
}

/// Writes records as a pretty-printed JSON array, replacing any existing file.
///
/// The document goes to a temporary file in the destination directory and is
/// renamed over `path`, so readers see either the old or the new document.
///
/// # Errors
///
/// Returns [`ScoringError::WriteOutput`] on filesystem failures and
/// [`ScoringError::Serialize`] if the records cannot be encoded.
pub fn write_records(path: &Path, records: &[WorkflowRecord]) -> Result<(), ScoringError> {
    let write_err = |source: std::io::Error| ScoringError::WriteOutput {
        path: path.display().to_string(),
        source,
    };

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(write_err)?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, records).map_err(ScoringError::Serialize)?;
        writer.write_all(b"\n").map_err(write_err)?;
        writer.flush().map_err(write_err)?;
    }
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

/// Loads `input`, scores it, and writes the ranked result to `output`.
///
/// Nothing is written unless the input was read and parsed successfully.
///
/// # Errors
///
/// Returns [`ScoringError::OutputIsInput`] when both paths name the same
/// file after canonicalization, or any error from [`load_records`] /
/// [`write_records`].
pub fn run_scoring(input: &Path, output: &Path) -> Result<ScoringSummary, ScoringError> {
    if same_file(input, output) {
        return Err(ScoringError::OutputIsInput {
            path: output.display().to_string(),
        });
    }

    let records = load_records(input)?;
    tracing::info!(
        input = %input.display(),
        records = records.len(),
        "loaded raw records"
    );

    let outcome = score_records(records);
    write_records(output, &outcome.records)?;

    let summary = outcome.summary;
    tracing::info!(
        output = %output.display(),
        records = summary.output_records,
        merged = summary.merged_duplicates,
        platforms = ?summary.platform_counts,
        "wrote scored records"
    );

    Ok(summary)
}

/// Whether `output` resolves to the existing `input` file.
///
/// The output need not exist yet, so its parent directory is canonicalized
/// and the file name joined back on.
fn same_file(input: &Path, output: &Path) -> bool {
    if input == output {
        return true;
    }
    let Ok(input) = input.canonicalize() else {
        return false;
    };
    let Some(name) = output.file_name() else {
        return false;
    };
    let parent = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    parent
        .canonicalize()
        .is_ok_and(|dir| dir.join(name) == input)
}
