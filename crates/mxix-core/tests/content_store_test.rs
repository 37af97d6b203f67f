#![allow(clippy::unwrap_used, clippy::float_cmp)]
// Integration tests for `ContentStore` over real persistence backends.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{TimeDelta, Utc};
use futures_util::StreamExt;
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use mxix_core::{
    AdminGate, ContentStore, Coordinates, CoreError, FileStorage, KeyPolicy, Location,
    MemoryStorage, Slot, SlotStorage, StorageError, StoreOptions, defaults, derive_location_stats,
    multiplier_for,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn open_file_store(dir: &TempDir) -> (Arc<FileStorage>, ContentStore) {
    let storage = Arc::new(FileStorage::new(dir.path()));
    let store = ContentStore::open(storage.clone(), StoreOptions::default());
    (storage, store)
}

fn test_city() -> Location {
    Location {
        id: "tst".into(),
        name: "Test City".into(),
        coordinates: Coordinates::new(0.0, 0.0),
        code: "TST".into(),
        region: "EUROPE".into(),
        asns: 0,
        sites: 0,
        asn_list: Vec::new(),
        enabled_sites: Vec::new(),
    }
}

/// Backend whose writes always fail. Reads see nothing.
#[derive(Default)]
struct BrokenStorage {
    writes: AtomicUsize,
}

impl SlotStorage for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Unavailable {
            reason: "quota exceeded".into(),
        })
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable {
            reason: "read-only".into(),
        })
    }
}

/// Backend that cannot be read. Writes and removals succeed.
struct UnreadableStorage;

impl SlotStorage for UnreadableStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Io {
            key: key.into(),
            source: std::io::Error::other("permission denied"),
        })
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

// ── Persistence ─────────────────────────────────────────────────────

#[test]
fn test_locations_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let (_, store) = open_file_store(&dir);

    let mut locations = defaults::locations();
    locations.truncate(3);
    locations[1].name = "Renamed".into();
    locations.push(test_city());
    store.update_locations(locations.clone());
    drop(store);

    let (_, reopened) = open_file_store(&dir);
    assert_eq!(reopened.locations().as_slice(), locations.as_slice());
}

#[test]
fn test_empty_storage_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let (_, store) = open_file_store(&dir);

    assert_eq!(*store.network_stats(), defaults::network_stats());
    assert_eq!(
        *store.global_fabric_stats(),
        defaults::global_fabric_stats()
    );
    assert_eq!(*store.services(), defaults::services());
    assert_eq!(*store.locations(), defaults::locations());
}

#[test]
fn test_unreadable_storage_yields_defaults() {
    let storage = Arc::new(UnreadableStorage);
    let store = ContentStore::open(storage.clone(), StoreOptions::default());

    assert_eq!(*store.network_stats(), defaults::network_stats());
    assert_eq!(
        *store.global_fabric_stats(),
        defaults::global_fabric_stats()
    );
    assert_eq!(*store.services(), defaults::services());
    assert_eq!(*store.locations(), defaults::locations());

    // The store stays usable on top of a backend it cannot read.
    store.add_location(test_city()).unwrap();
    assert_eq!(store.location("tst"), Some(test_city()));
}

#[test]
fn test_unreadable_storage_reports_no_session() {
    let gate = AdminGate::with_default_password(Arc::new(UnreadableStorage));
    assert!(!gate.is_authenticated());

    gate.login(mxix_core::DEFAULT_ADMIN_PASSWORD).unwrap();
    assert!(!gate.is_authenticated());
}

#[test]
fn test_corrupt_slot_falls_back_to_default() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(Slot::Locations.key(), "{not json").unwrap();
    storage.set(Slot::Services.key(), "[]").unwrap();

    let store = ContentStore::open(storage, StoreOptions::default());
    assert_eq!(*store.locations(), defaults::locations());
    assert!(store.services().is_empty());
}

#[test]
fn test_null_count_discards_whole_locations_slot() {
    let storage = Arc::new(MemoryStorage::new());
    let mut edited = serde_json::to_value(defaults::locations()).unwrap();
    edited[0]["name"] = "Renamed".into();
    edited[1]["asns"] = serde_json::Value::Null;
    storage.set(Slot::Locations.key(), &edited.to_string()).unwrap();

    let store = ContentStore::open(storage, StoreOptions::default());
    assert_eq!(*store.locations(), defaults::locations());
}

#[test]
fn test_reset_is_idempotent_and_clears_slots() {
    let dir = TempDir::new().unwrap();
    let (storage, store) = open_file_store(&dir);

    store.add_location(test_city()).unwrap();
    let mut stats = (*store.network_stats()).clone();
    stats.throughput = 200;
    store.update_network_stats(stats);
    store.update_services(Vec::new());
    store.update_global_fabric_stats(defaults::global_fabric_stats());
    for slot in Slot::CONTENT {
        assert!(storage.slot_path(slot.key()).exists(), "{slot} not written");
    }

    store.reset_to_defaults();
    let once = (store.locations(), store.network_stats());
    store.reset_to_defaults();

    assert_eq!(*store.locations(), *once.0);
    assert_eq!(*store.network_stats(), *once.1);
    assert_eq!(*store.locations(), defaults::locations());
    for slot in Slot::CONTENT {
        assert_eq!(storage.get(slot.key()).unwrap(), None);
    }
}

#[test]
fn test_reset_leaves_admin_session() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(Slot::AdminAuth.key(), "true").unwrap();
    let store = ContentStore::open(storage.clone(), StoreOptions::default());

    store.reset_to_defaults();
    assert!(storage.contains(Slot::AdminAuth.key()));
}

#[test]
fn test_failing_writes_never_fail_mutations() {
    let storage = Arc::new(BrokenStorage::default());
    let store = ContentStore::open(storage.clone(), StoreOptions::default());

    store.add_location(test_city()).unwrap();
    assert_eq!(store.location("tst"), Some(test_city()));
    store.remove_location("nyc");
    assert!(store.location("nyc").is_none());
    store.reset_to_defaults();
    assert_eq!(*store.locations(), defaults::locations());

    assert_eq!(storage.writes.load(Ordering::SeqCst), 2);
}

// ── CRUD ────────────────────────────────────────────────────────────

#[test]
fn test_add_then_remove_restores_collection() {
    let store = ContentStore::open(Arc::new(MemoryStorage::new()), StoreOptions::default());
    let before = store.locations();

    store.add_location(test_city()).unwrap();
    store.remove_location("tst");

    assert_eq!(*store.locations(), *before);
}

#[test]
fn test_update_and_remove_miss_are_noops() {
    let storage = Arc::new(MemoryStorage::new());
    let store = ContentStore::open(storage.clone(), StoreOptions::default());
    let before = store.locations();

    store.update_location("nonexistent-id", test_city()).unwrap();
    store.remove_location("nonexistent-id");

    assert_eq!(*store.locations(), *before);
}

#[test]
fn test_update_replaces_every_match() {
    let store = ContentStore::open(Arc::new(MemoryStorage::new()), StoreOptions::default());
    store.add_location(test_city()).unwrap();
    store.add_location(test_city()).unwrap();

    let mut renamed = test_city();
    renamed.name = "Renamed City".into();
    store.update_location("tst", renamed).unwrap();

    let names: Vec<_> = store
        .locations()
        .iter()
        .filter(|l| l.id == "tst")
        .map(|l| l.name.clone())
        .collect();
    assert_eq!(names, ["Renamed City", "Renamed City"]);
}

#[test]
fn test_unique_policy() {
    let store = ContentStore::open(
        Arc::new(MemoryStorage::new()),
        StoreOptions::default().with_key_policy(KeyPolicy::Unique),
    );
    store.add_location(test_city()).unwrap();

    let err = store.add_location(test_city()).unwrap_err();
    let CoreError::DuplicateKey { collection, id } = &err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!((collection.as_str(), id.as_str()), ("location", "tst"));

    // Renaming onto another entry's id collides; keeping the id does not.
    let mut onto_ams = test_city();
    onto_ams.id = "ams".into();
    assert!(store.update_location("tst", onto_ams).is_err());
    assert!(store.update_location("tst", test_city()).is_ok());

    assert_eq!(store.locations().len(), defaults::locations().len() + 1);
}

// ── Subscriptions ───────────────────────────────────────────────────

#[tokio::test]
async fn test_subscribers_see_mutations() {
    let store = ContentStore::open(Arc::new(MemoryStorage::new()), StoreOptions::default());
    let mut sub = store.subscribe_locations();
    assert_eq!(sub.current().len(), 10);

    store.add_location(test_city()).unwrap();
    assert!(sub.has_changed());
    let next = sub.changed().await.unwrap();
    assert_eq!(next.len(), 11);
    assert_eq!(sub.current().len(), 11);

    store.reset_to_defaults();
    assert_eq!(sub.changed().await.unwrap().len(), 10);
}

#[tokio::test]
async fn test_rejected_mutation_does_not_notify() {
    let store = ContentStore::open(
        Arc::new(MemoryStorage::new()),
        StoreOptions::default().with_key_policy(KeyPolicy::Unique),
    );
    let sub = store.subscribe_locations();

    assert!(store.add_location(defaults::locations()[0].clone()).is_err());
    assert!(!sub.has_changed());
}

#[tokio::test]
async fn test_slot_stream_yields_current_then_updates() {
    let store = ContentStore::open(Arc::new(MemoryStorage::new()), StoreOptions::default());
    let mut stream = store.subscribe_network_stats().into_stream();

    assert_eq!(stream.next().await.unwrap().active_nodes, 4921);

    let mut stats = (*store.network_stats()).clone();
    stats.active_nodes = 5000;
    store.update_network_stats(stats);
    assert_eq!(stream.next().await.unwrap().active_nodes, 5000);
}

// ── Derived statistics ──────────────────────────────────────────────

#[test]
fn test_derived_scaling_per_location() {
    let now = Utc::now();
    let mut rng = StdRng::seed_from_u64(99);

    for location in defaults::locations() {
        let m = multiplier_for(&location.id);
        let stats = derive_location_stats(
            &location.id,
            &location.name,
            &location.code,
            now,
            &mut rng,
        );

        let traffic = stats.stat("total_traffic").unwrap().value.as_f64().unwrap();
        let peers = stats.stat("total_peers").unwrap().value.as_f64().unwrap();
        let expected_traffic = (124.5 * m.traffic * 10.0).round() / 10.0;
        assert_eq!(traffic, expected_traffic, "{}", location.id);
        assert_eq!(peers, (4921.0 * m.peers).floor(), "{}", location.id);

        assert_eq!(stats.traffic_data.len(), 24);
        for pair in stats.traffic_data.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, TimeDelta::hours(1));
        }
        assert!(stats.traffic_data.iter().all(|p| p.value >= 80.0 * m.traffic));
    }
}

// ── End-to-end ──────────────────────────────────────────────────────

#[test]
fn test_add_persist_remove_scenario() {
    let dir = TempDir::new().unwrap();
    let (storage, store) = open_file_store(&dir);

    store.add_location(test_city()).unwrap();

    let mut expected = defaults::locations();
    expected.push(test_city());
    assert_eq!(*store.locations(), expected);

    let raw = storage.get(Slot::Locations.key()).unwrap().unwrap();
    let persisted: Vec<Location> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, expected);
    assert_eq!(persisted.iter().filter(|l| l.id == "tst").count(), 1);

    store.remove_location("tst");
    assert_eq!(*store.locations(), defaults::locations());
}
