//! Two-phase scoring pipeline.
//!
//! Phase 1 groups the input and raw-scores each representative, producing an
//! immutable sequence of [`ScoredCandidate`]s. Phase 2 needs the min and max
//! over that whole sequence, so it runs only once phase 1 is complete: it
//! rescales every raw score into `[0, 100]` and ranks the result.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use wfpop_core::WorkflowRecord;

use crate::group::{group_records, Group};
use crate::range::normalize_scores;
use crate::rank::rank;
use crate::scorer::raw_score;

/// A group representative carried from phase 1 into phase 2.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub key: String,
    pub record: WorkflowRecord,
    pub raw_score: f64,
}

/// Counters describing one scoring run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringSummary {
    pub input_records: usize,
    pub output_records: usize,
    /// Input records dropped because another record won their group.
    pub merged_duplicates: usize,
    /// Input records with neither a usable title nor a usable source URL.
    pub unidentified_records: usize,
    /// Output records per platform tag.
    pub platform_counts: BTreeMap<String, usize>,
    pub raw_min: Option<f64>,
    pub raw_max: Option<f64>,
}

/// Ranked output of [`score_records`] together with its run summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringOutcome {
    pub records: Vec<WorkflowRecord>,
    pub summary: ScoringSummary,
}

/// Deduplicates, scores and ranks a batch of records.
///
/// Every output record carries a `score` in `[0, 100]`, there is exactly one
/// output record per canonical key, and the output is sorted by score,
/// highest first. An empty input produces an empty output.
#[must_use]
pub fn score_records(records: Vec<WorkflowRecord>) -> ScoringOutcome {
    let input_records = records.len();
    let groups = group_records(records);

    let unidentified_records = groups.get("").map_or(0, |g| g.size);
    if unidentified_records > 0 {
        tracing::debug!(
            records = unidentified_records,
            "records without title or source_url merged under the empty key"
        );
    }

    let candidates = raw_score_groups(groups);
    let raw_min = candidates.iter().map(|c| c.raw_score).reduce(f64::min);
    let raw_max = candidates.iter().map(|c| c.raw_score).reduce(f64::max);

    let records = rescale(candidates);

    let mut platform_counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in &records {
        *platform_counts
            .entry(record.platform.as_str().to_string())
            .or_default() += 1;
    }

    let summary = ScoringSummary {
        input_records,
        output_records: records.len(),
        merged_duplicates: input_records - records.len(),
        unidentified_records,
        platform_counts,
        raw_min,
        raw_max,
    };

    ScoringOutcome { records, summary }
}

/// Phase 1: one raw-scored candidate per group, in first-seen key order.
fn raw_score_groups(groups: IndexMap<String, Group>) -> Vec<ScoredCandidate> {
    groups
        .into_iter()
        .map(|(key, group)| {
            let mut record = group.representative;
            let raw_score = raw_score(&mut record);
            ScoredCandidate {
                key,
                record,
                raw_score,
            }
        })
        .collect()
}

/// Phase 2: rescale over the complete candidate set, attach scores, rank.
fn rescale(candidates: Vec<ScoredCandidate>) -> Vec<WorkflowRecord> {
    let raw_scores: Vec<f64> = candidates.iter().map(|c| c.raw_score).collect();
    let scores = normalize_scores(&raw_scores);

    let scored = candidates
        .into_iter()
        .zip(scores)
        .map(|(candidate, score)| WorkflowRecord {
            score: Some(score),
            ..candidate.record
        })
        .collect();

    rank(scored)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wfpop_core::Platform;

    use super::*;

    fn youtube(title: &str, views: u64, likes: u64) -> WorkflowRecord {
        let serde_json::Value::Object(metrics) = json!({"views": views, "likes": likes}) else {
            unreachable!()
        };
        WorkflowRecord {
            title: Some(title.to_string()),
            platform: Platform::YouTube,
            metrics,
            source_url: Some(format!("https://www.youtube.com/watch?v={title}")),
            ..WorkflowRecord::default()
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let outcome = score_records(Vec::new());
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.summary.input_records, 0);
        assert!(outcome.summary.raw_min.is_none());
    }

    #[test]
    fn single_record_scores_zero() {
        let outcome = score_records(vec![youtube("webhook", 1000, 50)]);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].score, Some(0.0));
    }

    #[test]
    fn duplicates_are_merged_and_counted() {
        let outcome = score_records(vec![
            youtube("Gmail Automation", 100, 1),
            youtube("gmail automation!!", 900, 1),
            youtube("webhook", 10, 1),
        ]);
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.summary.merged_duplicates, 1);
        assert_eq!(outcome.summary.platform_counts.get("YouTube"), Some(&2));
        let gmail = outcome
            .records
            .iter()
            .find(|r| r.title.as_deref() == Some("gmail automation!!"))
            .expect("winner kept");
        assert_eq!(gmail.metric("views"), 900.0);
    }

    #[test]
    fn scores_span_zero_to_hundred_and_are_ranked() {
        let outcome = score_records(vec![
            youtube("low", 0, 0),
            youtube("high", 1_000_000, 50_000),
            youtube("mid", 1000, 10),
        ]);
        let scores: Vec<f64> = outcome.records.iter().filter_map(|r| r.score).collect();
        assert_eq!(scores.first(), Some(&100.0));
        assert_eq!(scores.last(), Some(&0.0));
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(outcome.records[0].title.as_deref(), Some("high"));
    }

    #[test]
    fn unidentified_records_are_reported() {
        let anonymous = WorkflowRecord::default();
        let outcome = score_records(vec![anonymous.clone(), anonymous, youtube("webhook", 5, 0)]);
        assert_eq!(outcome.summary.unidentified_records, 2);
        assert_eq!(outcome.records.len(), 2);
    }
}
