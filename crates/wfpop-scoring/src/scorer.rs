//! Platform-specific raw popularity scores.
//!
//! Raw scores are unbounded and only comparable after the run-wide rescale
//! in [`crate::range`]. Every formula smooths with `+1` inside logarithms and
//! (for forum-style records) ratio denominators, so no input can produce a
//! division by zero or a logarithm of a non-positive number. Huge finite
//! counts can still overflow a term, so every raw score is saturated to a
//! finite value before it leaves this module.

use wfpop_core::{Platform, WorkflowRecord};

use crate::range::round_to;

const YOUTUBE_VIEW_WEIGHT: f64 = 0.6;
const YOUTUBE_LIKE_WEIGHT: f64 = 0.25;
const YOUTUBE_COMMENT_WEIGHT: f64 = 0.15;

const FORUM_VIEW_WEIGHT: f64 = 0.5;
const FORUM_LIKE_WEIGHT: f64 = 0.3;
const FORUM_REPLY_WEIGHT: f64 = 0.2;
const FORUM_CONTRIBUTOR_WEIGHT: f64 = 0.1;

/// Decimal places kept for the derived ratio metrics.
const RATIO_PRECISION: i32 = 6;

pub const LIKE_TO_VIEW_RATIO: &str = "like_to_view_ratio";
pub const COMMENT_TO_VIEW_RATIO: &str = "comment_to_view_ratio";

/// Computes the raw score for a representative record.
///
/// YouTube records also get `like_to_view_ratio` and `comment_to_view_ratio`
/// written back into their metrics. Every other platform, including unknown
/// tags, uses the forum formula.
pub fn raw_score(record: &mut WorkflowRecord) -> f64 {
    let raw = match record.platform {
        Platform::YouTube => youtube_raw(record),
        Platform::Discourse | Platform::GoogleTrends | Platform::Other(_) => forum_raw(record),
    };
    saturate(raw)
}

/// Maps overflowed terms back onto the finite line: `±inf` to `±f64::MAX`,
/// `NaN` (opposing infinities) to `0.0`.
fn saturate(raw: f64) -> f64 {
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(-f64::MAX, f64::MAX)
    }
}

fn youtube_raw(record: &mut WorkflowRecord) -> f64 {
    let views = clamped(record, "views");
    let likes = record.metric("likes");
    let comments = record.metric("comments");

    let like_ratio = if views > 0.0 { likes / views } else { 0.0 };
    let comment_ratio = if views > 0.0 { comments / views } else { 0.0 };

    record.set_metric(LIKE_TO_VIEW_RATIO, round_to(like_ratio, RATIO_PRECISION));
    record.set_metric(
        COMMENT_TO_VIEW_RATIO,
        round_to(comment_ratio, RATIO_PRECISION),
    );

    YOUTUBE_VIEW_WEIGHT * (views + 1.0).log10()
        + YOUTUBE_LIKE_WEIGHT * (like_ratio * 100.0)
        + YOUTUBE_COMMENT_WEIGHT * (comment_ratio * 100.0)
}

fn forum_raw(record: &WorkflowRecord) -> f64 {
    let replies = record.metric("replies");
    let views = clamped(record, "views");
    let likes = record.metric("likes");
    let contributors = clamped(record, "contributors");

    let reply_ratio = replies / (views + 1.0);
    let like_ratio = likes / (views + 1.0);
    let contrib_term = (contributors + 1.0).log10();

    FORUM_VIEW_WEIGHT * (views + 1.0).log10()
        + FORUM_LIKE_WEIGHT * (like_ratio * 100.0)
        + FORUM_REPLY_WEIGHT * (reply_ratio * 100.0)
        + FORUM_CONTRIBUTOR_WEIGHT * contrib_term
}

/// Reads a metric that feeds a `log10(x + 1)` or `(x + 1)` divisor. Negative
/// values would leave those undefined, so they count as missing.
fn clamped(record: &WorkflowRecord, name: &str) -> f64 {
    record.metric(name).max(0.0)
}
