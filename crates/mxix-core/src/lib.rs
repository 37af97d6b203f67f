//! Content store and statistics for the MX-IX site.
//!
//! The site's editable content (locations, services, and two sets of
//! headline statistics) lives in a [`ContentStore`] that keeps an
//! authoritative in-memory copy of each slot and mirrors every mutation to
//! a [`SlotStorage`] backend:
//!
//! - **[`ContentStore`]**: loads each slot once (falling back to the
//!   built-in [`defaults`]), exposes `Arc` snapshots, and persists on every
//!   mutation. Persistence failures are logged, never returned.
//!
//! - **[`SlotStorage`]**: the persistence adapter. [`FileStorage`] keeps
//!   one JSON file per slot; [`MemoryStorage`] is process-local.
//!
//! - **[`SlotStream<T>`]**: subscription handle for one slot, with
//!   `current()` / `latest()` / `changed()` and a `Stream` adapter.
//!
//! - **Statistics**: the global [`catalog`], its per-city projection in
//!   [`derive`] ([`get_city_stats`]), display [`format`]ting, and the
//!   simulated [`CapacityFeed`].
//!
//! - **[`AdminGate`]**: password check and session flag for editors.

pub mod admin;
pub mod capacity;
pub mod catalog;
pub mod config;
pub mod defaults;
pub mod derive;
pub mod error;
pub mod format;
pub mod model;
pub mod storage;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use admin::{AdminGate, DEFAULT_ADMIN_PASSWORD};
pub use capacity::CapacityFeed;
pub use config::{KeyPolicy, StoreOptions};
pub use derive::{CityMultiplier, derive_location_stats, get_city_stats, multiplier_for};
pub use error::{CoreError, StorageError};
pub use format::format_stat_value;
pub use storage::{FileStorage, MemoryStorage, Slot, SlotStorage};
pub use store::ContentStore;
pub use stream::SlotStream;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Asn, AsnStatus, Coordinates, EnabledSite, GlobalFabricStats, Keyed, Latency, Location,
    LocationStats, NetworkStat, NetworkStats, PeeringPolicy, Region, Service, ServiceItem,
    ServiceStat, SiteStatus, StatCategory, StatFormat, StatValue, TrafficDataPoint, Trend,
};
