use std::cmp::Ordering;

use wfpop_core::WorkflowRecord;

/// Sorts records by `score`, highest first.
///
/// The sort is stable: equal scores keep their incoming order, which is the
/// grouping order of first-seen canonical keys. A missing score sorts as `0.0`.
#[must_use]
pub fn rank(mut records: Vec<WorkflowRecord>) -> Vec<WorkflowRecord> {
    records.sort_by(|a, b| {
        let a = a.score.unwrap_or(0.0);
        let b = b.score.unwrap_or(0.0);
        b.partial_cmp(&a).unwrap_or(Ordering::Equal)
    });
    records
}
