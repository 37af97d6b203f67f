// ── Service catalog types ──

use serde::{Deserialize, Serialize};

/// A service category shown on the services page (e.g. "Peering").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub category: String,
    pub tagline: String,
    pub description: String,
    /// Hero image path or URL.
    pub image: String,
    #[serde(default)]
    pub items: Vec<ServiceItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub name: String,
    /// Icon reference resolved by the renderer (e.g. `"network"`).
    #[serde(default)]
    pub icon: String,
    pub description: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<ServiceStat>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStat {
    pub label: String,
    pub value: String,
    pub period: String,
}
