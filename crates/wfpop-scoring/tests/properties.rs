//! Property-based tests for the scoring engine.
//!
//! These hold for every batch, not just the fixtures in `pipeline.rs`:
//!
//! - **Idempotent keys:** normalizing a normalized title changes nothing.
//! - **Total dedup:** exactly one output record per distinct canonical key.
//! - **Bounded scores:** every score is finite and within `[0, 100]`.
//! - **Ranking:** scores never increase down the output, and the lowest
//!   raw score maps to `0.0`.

use std::collections::HashSet;

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use wfpop_core::WorkflowRecord;
use wfpop_scoring::{canonical_key, normalize_title, score_records};

const METRIC_NAMES: [&str; 5] = ["views", "likes", "comments", "replies", "contributors"];

/// Finite metric values: mostly realistic counts, plus any normal float of
/// either sign so overflow paths get exercised.
fn metric_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        3 => (0u32..100_000).prop_map(f64::from),
        1 => prop::num::f64::NORMAL | prop::num::f64::ZERO,
    ]
}

fn metrics_strategy() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::vec(prop::option::of(metric_value()), METRIC_NAMES.len()).prop_map(
        |values| {
            METRIC_NAMES
                .iter()
                .zip(values)
                .filter_map(|(name, value)| value.map(|v| ((*name).to_string(), json!(v))))
                .collect()
        },
    )
}

/// Records drawn from a small title alphabet so duplicates are common.
fn record_strategy() -> impl Strategy<Value = WorkflowRecord> {
    (
        prop::option::of("[abAB &!-]{0,4}"),
        prop::sample::select(vec!["YouTube", "Discourse", "GoogleTrends", "Reddit"]),
        metrics_strategy(),
        prop::option::of("https://ex\\.com/[a-c]{1,2}"),
    )
        .prop_map(|(title, platform, metrics, source_url)| {
            serde_json::from_value(json!({
                "workflow": title,
                "platform": platform,
                "popularity_metrics": metrics,
                "source_url": source_url,
            }))
            .expect("generated record is well-formed")
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn normalize_title_is_idempotent(title in any::<String>()) {
        let once = normalize_title(Some(&title));
        prop_assert_eq!(normalize_title(Some(once.as_str())), once);
    }

    #[test]
    fn normalized_titles_use_the_key_charset(title in "\\PC{0,24}") {
        let key = normalize_title(Some(&title));
        prop_assert!(key.chars().all(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, ' ' | '-' | '&' | '>')
        }), "key contains unexpected characters: {:?}", key);
        prop_assert!(!key.contains("  "));
        prop_assert_eq!(key.trim(), key.as_str());
    }

    #[test]
    fn output_has_exactly_one_record_per_key(
        records in prop::collection::vec(record_strategy(), 0..24)
    ) {
        let expected: HashSet<String> = records.iter().map(canonical_key).collect();

        let outcome = score_records(records);
        let keys: Vec<String> = outcome.records.iter().map(canonical_key).collect();

        prop_assert_eq!(keys.len(), expected.len());
        prop_assert_eq!(keys.into_iter().collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn scores_are_finite_bounded_and_descending(
        records in prop::collection::vec(record_strategy(), 1..24)
    ) {
        let outcome = score_records(records);
        let scores: Vec<f64> = outcome
            .records
            .iter()
            .map(|r| r.score.unwrap_or(f64::NAN))
            .collect();

        prop_assert!(
            scores.iter().all(|s| s.is_finite() && (0.0..=100.0).contains(s)),
            "{scores:?}"
        );
        prop_assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{scores:?}");
        prop_assert_eq!(scores.last().copied(), Some(0.0));
        let top = scores[0];
        prop_assert!(top == 100.0 || scores.iter().all(|s| *s == 0.0), "{scores:?}");
    }
}
