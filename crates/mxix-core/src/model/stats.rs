// ── Statistics types ──
//
// `NetworkStats` and `GlobalFabricStats` are editable singletons held by
// the content store. `NetworkStat` is a display metric from the static
// catalog or a per-location projection of it; those are never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Headline numbers shown in the home-page hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStats {
    pub global_latency: Latency,
    pub active_nodes: u64,
    /// Aggregate throughput in Tbps.
    pub throughput: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Latency {
    pub value: f64,
    pub unit: String,
}

/// Pre-formatted labels for the global fabric panel. No numeric meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalFabricStats {
    pub total_capacity: String,
    pub active_routes: String,
    pub avg_latency: String,
    pub global_coverage: String,
}

/// A single display metric (e.g. "Total Traffic: 124.5 Tbps").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStat {
    pub id: String,
    pub label: String,
    pub value: StatValue,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<StatFormat>,
    pub category: StatCategory,
}

/// A metric value: numeric, or a pre-formatted label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl StatValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StatFormat {
    Number,
    Decimal,
    Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StatCategory {
    Traffic,
    Network,
    Performance,
    Geographic,
}

/// One sample of the hourly traffic chart, in Tbps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficDataPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Statistics projected onto a single location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationStats {
    pub location_id: String,
    pub location_name: String,
    pub location_code: String,
    pub stats: Vec<NetworkStat>,
    pub traffic_data: Vec<TrafficDataPoint>,
}

impl LocationStats {
    /// Look up a projected stat by its catalog id (e.g. `"total_peers"`).
    pub fn stat(&self, id: &str) -> Option<&NetworkStat> {
        self.stats.iter().find(|s| s.id == id)
    }
}
