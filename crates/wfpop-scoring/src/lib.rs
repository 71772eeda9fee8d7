//! Normalization, deduplication and scoring of workflow popularity records.
//!
//! Records arrive from several platforms with different metric schemas. The
//! engine groups them by a canonical title key, keeps one representative per
//! group, computes a platform-specific raw score, rescales every raw score
//! into `[0, 100]` relative to the whole run, and ranks the result.
//!
//! File I/O lives in [`io`]; everything else is pure.

pub mod error;
pub mod group;
pub mod io;
pub mod mock;
pub mod normalize;
pub mod pipeline;
pub mod query;
pub mod range;
pub mod rank;
pub mod scorer;

pub use error::ScoringError;
pub use group::{canonical_key, group_records, Group};
pub use io::{load_records, run_scoring, write_records};
pub use mock::{mock_records, MockOptions};
pub use normalize::normalize_title;
pub use pipeline::{score_records, ScoredCandidate, ScoringOutcome, ScoringSummary};
pub use query::{query_records, resolve_dataset_path, QueryFilter};
pub use range::normalize_scores;
pub use rank::rank;
pub use scorer::raw_score;
