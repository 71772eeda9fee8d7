//! Deterministic mock datasets for running the engine without collectors.
//!
//! Metrics are derived from a SHA-256 hash of each title, so the same
//! keywords always produce the same document apart from `collected_at`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};
use sha2::{Digest, Sha256};
use wfpop_core::{KeywordsFile, Platform, WorkflowRecord};

use crate::range::round_to;

pub const DEFAULT_FORUM_BASE_URL: &str = "https://forum.n8n.io";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockOptions {
    pub videos_per_keyword: usize,
    pub topics_per_keyword: usize,
    pub forum_base_url: String,
}

impl Default for MockOptions {
    fn default() -> Self {
        Self {
            videos_per_keyword: 2,
            topics_per_keyword: 3,
            forum_base_url: DEFAULT_FORUM_BASE_URL.to_string(),
        }
    }
}

/// Builds a raw dataset: YouTube records per keyword and region, then
/// Discourse records per keyword.
#[must_use]
pub fn mock_records(
    seeds: &KeywordsFile,
    options: &MockOptions,
    collected_at: DateTime<Utc>,
) -> Vec<WorkflowRecord> {
    let stamp = collected_at.to_rfc3339_opts(SecondsFormat::Secs, true);
    let forum_base = options.forum_base_url.trim_end_matches('/');
    let mut records = Vec::new();

    for keyword in &seeds.keywords {
        let keyword = keyword.trim();
        let slug = keyword.replace(' ', "_");

        for region in seeds.regions.iter().filter(|r| !r.trim().is_empty()) {
            for i in 0..options.videos_per_keyword {
                let title = format!("{keyword} - demo video {}", i + 1);
                let url = format!("https://www.youtube.com/watch?v=mock_{slug}_{region}_{i}");
                records.push(mock_video(&title, url, region, &stamp));
            }
        }

        for i in 0..options.topics_per_keyword {
            let title = format!("{keyword} discussion {}", i + 1);
            let url = format!("{forum_base}/t/mock_{slug}_{i}");
            records.push(mock_topic(&title, url, &stamp));
        }
    }

    tracing::debug!(records = records.len(), "generated mock records");
    records
}

fn mock_video(title: &str, source_url: String, region: &str, stamp: &str) -> WorkflowRecord {
    let h = title_hash(title);
    let views = 1000 + h;
    let likes = (views / 20 + h % 50).max(1);
    let comments = views / 200 + h % 10;

    #[allow(clippy::cast_precision_loss)]
    let (like_ratio, comment_ratio) = (
        round_to(likes as f64 / views as f64, 5),
        round_to(comments as f64 / views as f64, 5),
    );

    WorkflowRecord {
        title: Some(title.to_string()),
        platform: Platform::YouTube,
        metrics: object(json!({
            "views": views,
            "likes": likes,
            "comments": comments,
            "like_to_view_ratio": like_ratio,
            "comment_to_view_ratio": comment_ratio,
        })),
        country: Some(region.to_string()),
        source_url: Some(source_url),
        collected_at: Some(stamp.to_string()),
        score: None,
    }
}

fn mock_topic(title: &str, source_url: String, stamp: &str) -> WorkflowRecord {
    let h = title_hash(title);
    WorkflowRecord {
        title: Some(title.to_string()),
        platform: Platform::Discourse,
        metrics: object(json!({
            "replies": 5 + h % 80,
            "likes": 1 + h % 50,
            "contributors": 1 + h % 10,
            "views": 100 + h % 5000,
        })),
        country: None,
        source_url: Some(source_url),
        collected_at: Some(stamp.to_string()),
        score: None,
    }
}

/// Stable hash in `0..10_000`: the first eight bytes of SHA-256, big-endian.
fn title_hash(title: &str) -> u64 {
    let digest = Sha256::digest(title.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix) % 10_000
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
