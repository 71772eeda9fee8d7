//! Read-only filtering over a scored (or raw) dataset document.

use std::path::Path;

use wfpop_core::WorkflowRecord;

use crate::error::ScoringError;

pub const DEFAULT_QUERY_LIMIT: usize = 100;
pub const MAX_QUERY_LIMIT: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFilter {
    /// Platform tag, compared case-insensitively. Empty means no filter.
    pub platform: Option<String>,
    /// Country code, compared case-insensitively. Empty means no filter.
    pub country: Option<String>,
    /// Maximum number of records returned, `1..=1000`.
    pub limit: usize,
}

impl Default for QueryFilter {
    fn default() -> Self {
        Self {
            platform: None,
            country: None,
            limit: DEFAULT_QUERY_LIMIT,
        }
    }
}

/// Applies `filter` to `records`, keeping their order.
///
/// # Errors
///
/// Returns [`ScoringError::InvalidQuery`] if `limit` is outside `1..=1000`.
pub fn query_records(
    records: Vec<WorkflowRecord>,
    filter: &QueryFilter,
) -> Result<Vec<WorkflowRecord>, ScoringError> {
    if !(1..=MAX_QUERY_LIMIT).contains(&filter.limit) {
        return Err(ScoringError::InvalidQuery(format!(
            "limit must be between 1 and {MAX_QUERY_LIMIT}, got {}",
            filter.limit
        )));
    }

    let platform = active(filter.platform.as_deref());
    let country = active(filter.country.as_deref());

    Ok(records
        .into_iter()
        .filter(|r| platform.as_ref().is_none_or(|p| r.platform.as_str().to_lowercase() == *p))
        .filter(|r| {
            country.as_ref().is_none_or(|c| {
                r.country.as_deref().unwrap_or_default().to_lowercase() == *c
            })
        })
        .take(filter.limit)
        .collect())
}

/// Picks the scored document when it exists, otherwise the raw one.
#[must_use]
pub fn resolve_dataset_path<'a>(scored: &'a Path, raw: &'a Path) -> &'a Path {
    if scored.exists() {
        scored
    } else {
        raw
    }
}

fn active(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_lowercase)
}
