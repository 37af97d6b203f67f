// ── Content domain model ──
//
// Every type in this module is a plain, serializable record. Field names
// serialize in camelCase so persisted slots keep the site's storage format.

pub mod location;
pub mod service;
pub mod stats;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use mxix_core::model::*` gives you everything.

pub use location::{
    Asn, AsnStatus, Coordinates, EnabledSite, Location, PeeringPolicy, Region, SiteStatus,
};
pub use service::{Service, ServiceItem, ServiceStat};
pub use stats::{
    GlobalFabricStats, Latency, LocationStats, NetworkStat, NetworkStats, StatCategory,
    StatFormat, StatValue, TrafficDataPoint, Trend,
};

/// An entity stored in a keyed collection slot.
///
/// Keys are not enforced unique by the type system; the store decides
/// what to do with duplicates (see [`KeyPolicy`](crate::KeyPolicy)).
pub trait Keyed {
    /// Human-readable collection name, used in errors and logs.
    const COLLECTION: &'static str;

    fn key(&self) -> &str;
}

impl Keyed for Location {
    const COLLECTION: &'static str = "location";

    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Service {
    const COLLECTION: &'static str = "service";

    fn key(&self) -> &str {
        &self.id
    }
}
