// ── Central content store ──
//
// Owns the four content slots. Each slot loads once at `open`, and every
// mutation writes the slot's new value through to the persistence adapter
// before returning.

use std::sync::Arc;

use tracing::{debug, info};

use super::collection;
use super::slot::SlotCell;
use crate::config::{KeyPolicy, StoreOptions};
use crate::defaults;
use crate::error::CoreError;
use crate::model::{GlobalFabricStats, Location, NetworkStats, Service};
use crate::storage::{Slot, SlotStorage};
use crate::stream::SlotStream;

/// Persisted, mutable store for the site's editable content.
///
/// Construct one per process with [`open`](Self::open) and pass it to
/// whatever renders the content. Reads are cheap `Arc` snapshots and always
/// reflect the last committed mutation.
///
/// Persistence is best-effort: if the adapter fails, the mutation still
/// commits in memory and the failure is logged. The only mutation errors
/// are key collisions under [`KeyPolicy::Unique`].
pub struct ContentStore {
    storage: Arc<dyn SlotStorage>,
    key_policy: KeyPolicy,
    network_stats: SlotCell<NetworkStats>,
    global_fabric_stats: SlotCell<GlobalFabricStats>,
    services: SlotCell<Vec<Service>>,
    locations: SlotCell<Vec<Location>>,
}

impl ContentStore {
    /// Load every slot from `storage`, seeding defaults for slots that are
    /// absent or corrupt.
    pub fn open(storage: Arc<dyn SlotStorage>, options: StoreOptions) -> Self {
        let s = storage.as_ref();
        let store = Self {
            network_stats: SlotCell::load(Slot::NetworkStats, s, defaults::network_stats),
            global_fabric_stats: SlotCell::load(
                Slot::GlobalFabricStats,
                s,
                defaults::global_fabric_stats,
            ),
            services: SlotCell::load(Slot::Services, s, defaults::services),
            locations: SlotCell::load(Slot::Locations, s, defaults::locations),
            key_policy: options.key_policy,
            storage,
        };
        debug!(
            key_policy = %store.key_policy,
            locations = store.locations.get().len(),
            services = store.services.get().len(),
            "content store opened"
        );
        store
    }

    pub fn key_policy(&self) -> KeyPolicy {
        self.key_policy
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn network_stats(&self) -> Arc<NetworkStats> {
        self.network_stats.get()
    }

    pub fn global_fabric_stats(&self) -> Arc<GlobalFabricStats> {
        self.global_fabric_stats.get()
    }

    pub fn services(&self) -> Arc<Vec<Service>> {
        self.services.get()
    }

    pub fn locations(&self) -> Arc<Vec<Location>> {
        self.locations.get()
    }

    // ── Single-entity lookups ────────────────────────────────────────

    /// The last service with this id, if any.
    pub fn service(&self, id: &str) -> Option<Service> {
        collection::find(&self.services.get(), id).cloned()
    }

    /// The last location with this id, if any.
    pub fn location(&self, id: &str) -> Option<Location> {
        collection::find(&self.locations.get(), id).cloned()
    }

    // ── Singleton mutators ───────────────────────────────────────────

    pub fn update_network_stats(&self, stats: NetworkStats) {
        self.network_stats.replace(self.storage.as_ref(), stats);
    }

    pub fn update_global_fabric_stats(&self, stats: GlobalFabricStats) {
        self.global_fabric_stats
            .replace(self.storage.as_ref(), stats);
    }

    // ── Services ─────────────────────────────────────────────────────

    /// Replace the whole services collection. Ids are not validated.
    pub fn update_services(&self, services: Vec<Service>) {
        self.services.replace(self.storage.as_ref(), services);
    }

    pub fn add_service(&self, service: Service) -> Result<(), CoreError> {
        let policy = self.key_policy;
        self.services.mutate(self.storage.as_ref(), |items| {
            debug!(id = %service.id, "adding service");
            collection::add(items, service, policy)
        })
    }

    /// Remove every service with this id. A miss is a no-op.
    pub fn remove_service(&self, id: &str) {
        let removed = self.services.mutate(self.storage.as_ref(), |items| {
            Ok(collection::remove(items, id))
        });
        debug!(id, removed = removed.unwrap_or(0), "removed service");
    }

    /// Replace every service with this id. A miss is a no-op.
    pub fn update_service(&self, id: &str, service: Service) -> Result<(), CoreError> {
        let policy = self.key_policy;
        let replaced = self.services.mutate(self.storage.as_ref(), |items| {
            collection::update(items, id, &service, policy)
        })?;
        debug!(id, replaced, "updated service");
        Ok(())
    }

    // ── Locations ────────────────────────────────────────────────────

    /// Replace the whole locations collection. Ids are not validated.
    pub fn update_locations(&self, locations: Vec<Location>) {
        self.locations.replace(self.storage.as_ref(), locations);
    }

    pub fn add_location(&self, location: Location) -> Result<(), CoreError> {
        let policy = self.key_policy;
        self.locations.mutate(self.storage.as_ref(), |items| {
            debug!(id = %location.id, "adding location");
            collection::add(items, location, policy)
        })
    }

    /// Remove every location with this id. A miss is a no-op.
    pub fn remove_location(&self, id: &str) {
        let removed = self.locations.mutate(self.storage.as_ref(), |items| {
            Ok(collection::remove(items, id))
        });
        debug!(id, removed = removed.unwrap_or(0), "removed location");
    }

    /// Replace every location with this id. A miss is a no-op.
    pub fn update_location(&self, id: &str, location: Location) -> Result<(), CoreError> {
        let policy = self.key_policy;
        let replaced = self.locations.mutate(self.storage.as_ref(), |items| {
            collection::update(items, id, &location, policy)
        })?;
        debug!(id, replaced, "updated location");
        Ok(())
    }

    // ── Reset ────────────────────────────────────────────────────────

    /// Restore every content slot to its built-in default and delete the
    /// persisted copies. Defaults are not re-persisted.
    pub fn reset_to_defaults(&self) {
        let s = self.storage.as_ref();
        self.network_stats.reset(s, defaults::network_stats());
        self.global_fabric_stats
            .reset(s, defaults::global_fabric_stats());
        self.services.reset(s, defaults::services());
        self.locations.reset(s, defaults::locations());
        info!("content reset to defaults");
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_network_stats(&self) -> SlotStream<NetworkStats> {
        SlotStream::new(self.network_stats.subscribe())
    }

    pub fn subscribe_global_fabric_stats(&self) -> SlotStream<GlobalFabricStats> {
        SlotStream::new(self.global_fabric_stats.subscribe())
    }

    pub fn subscribe_services(&self) -> SlotStream<Vec<Service>> {
        SlotStream::new(self.services.subscribe())
    }

    pub fn subscribe_locations(&self) -> SlotStream<Vec<Location>> {
        SlotStream::new(self.locations.subscribe())
    }
}
