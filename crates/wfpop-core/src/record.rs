//! The popularity record shared by the collectors, the scoring engine and
//! the read-only serving layer.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Source platform of a record.
///
/// Known tags are matched case-insensitively; anything else is carried
/// verbatim in [`Platform::Other`] and scored with the generic formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Platform {
    YouTube,
    Discourse,
    GoogleTrends,
    Other(String),
}

impl Platform {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::Discourse => "Discourse",
            Platform::GoogleTrends => "GoogleTrends",
            Platform::Other(tag) => tag.as_str(),
        }
    }

    #[must_use]
    pub fn is_youtube(&self) -> bool {
        matches!(self, Platform::YouTube)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::Other(String::new())
    }
}

impl From<&str> for Platform {
    fn from(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "youtube" => Platform::YouTube,
            "discourse" => Platform::Discourse,
            "googletrends" => Platform::GoogleTrends,
            _ => Platform::Other(tag.to_string()),
        }
    }
}

impl From<Option<String>> for Platform {
    fn from(tag: Option<String>) -> Self {
        tag.as_deref().map(Platform::from).unwrap_or_default()
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One popularity observation for a workflow topic on one platform.
///
/// The wire names follow the collectors' JSON documents (`workflow`,
/// `popularity_metrics`); `title` and `metrics` are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRecord {
    #[serde(rename = "workflow", alias = "title", default)]
    pub title: Option<String>,
    #[serde(default)]
    pub platform: Platform,
    /// Platform-specific metric bag. Values may be numbers, numeric strings,
    /// or junk; read them through [`WorkflowRecord::metric`].
    #[serde(
        rename = "popularity_metrics",
        alias = "metrics",
        default,
        deserialize_with = "null_as_empty_map"
    )]
    pub metrics: Map<String, Value>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub collected_at: Option<String>,
    /// Normalized score in `[0, 100]`, written by the scoring engine.
    #[serde(default)]
    pub score: Option<f64>,
}

impl WorkflowRecord {
    /// Reads a metric through [`safe_float`]; absent or non-numeric values are `0.0`.
    #[must_use]
    pub fn metric(&self, name: &str) -> f64 {
        safe_float(self.metrics.get(name))
    }

    /// Stores a numeric metric. Non-finite values are stored as `null`.
    pub fn set_metric(&mut self, name: &str, value: f64) {
        let value = Number::from_f64(value).map_or(Value::Null, Value::Number);
        self.metrics.insert(name.to_string(), value);
    }
}

/// Coerces a loosely-typed JSON value into an `f64`.
///
/// Numbers pass through, strings are parsed after trimming, booleans map to
/// `1.0`/`0.0`. Anything else, including non-finite results, yields `0.0`.
#[must_use]
pub fn safe_float(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn null_as_empty_map<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}
