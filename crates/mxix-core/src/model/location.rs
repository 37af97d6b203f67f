// ── Location domain types ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A point-of-presence city on the exchange fabric.
///
/// `id` is a stable slug (`"ams"`, `"nyc"`) and is expected to be unique
/// within the collection, though nothing below the store enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,
    /// Short fabric code (e.g. `"AMS_IX"`).
    pub code: String,
    /// Free-form region label. See [`Region`] for the known values.
    pub region: String,
    /// Display count of connected ASNs (not derived from `asn_list`).
    pub asns: u32,
    /// Display count of data-center sites (not derived from `enabled_sites`).
    pub sites: u32,
    #[serde(default)]
    pub asn_list: Vec<Asn>,
    #[serde(default)]
    pub enabled_sites: Vec<EnabledSite>,
}

impl Location {
    /// Parse `region` into a known [`Region`], if it is one.
    pub fn known_region(&self) -> Option<Region> {
        self.region.parse().ok()
    }

    pub fn active_asns(&self) -> impl Iterator<Item = &Asn> {
        self.asn_list
            .iter()
            .filter(|a| a.status == AsnStatus::Active)
    }

    pub fn available_sites(&self) -> impl Iterator<Item = &EnabledSite> {
        self.enabled_sites
            .iter()
            .filter(|s| s.status == SiteStatus::Available)
    }
}

/// `[longitude, latitude]` in degrees; serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates(pub f64, pub f64);

impl Coordinates {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self(longitude, latitude)
    }

    pub fn longitude(&self) -> f64 {
        self.0
    }

    pub fn latitude(&self) -> f64 {
        self.1
    }

    /// Longitude in [-180, 180] and latitude in [-90, 90].
    pub fn is_valid(&self) -> bool {
        (-180.0..=180.0).contains(&self.0) && (-90.0..=90.0).contains(&self.1)
    }
}

/// Regions the site groups locations under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Region {
    #[strum(serialize = "AMERICAS")]
    Americas,
    #[strum(serialize = "EUROPE")]
    Europe,
    #[strum(serialize = "ASIA")]
    Asia,
    #[strum(serialize = "OCEANIA")]
    Oceania,
    #[strum(serialize = "AFRICA")]
    Africa,
    #[strum(serialize = "MIDDLE EAST")]
    MiddleEast,
}

/// A network peering at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asn {
    pub asn_number: u32,
    pub name: String,
    /// AS-SET macro, usually empty.
    #[serde(rename = "macro", default)]
    pub macro_name: String,
    pub peering_policy: PeeringPolicy,
    pub status: AsnStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum PeeringPolicy {
    Open,
    Selective,
    Restrictive,
    #[serde(rename = "No Policy")]
    #[strum(serialize = "No Policy")]
    NoPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum AsnStatus {
    Active,
    Connecting,
    Inactive,
}

/// A data-center facility where the fabric can be reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnabledSite {
    /// Unique within the owning location (e.g. `"ams-3"`).
    pub id: String,
    pub name: String,
    pub provider: String,
    pub address: String,
    pub status: SiteStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SiteStatus {
    Available,
    ComingSoon,
}
