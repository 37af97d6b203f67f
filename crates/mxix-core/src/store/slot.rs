// ── Single persisted slot ──
//
// Holds the authoritative in-memory value of one slot in a `watch`
// channel. Every write happens inside the channel's write section, so
// the persisted copy always matches the last committed value.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::storage::{Slot, SlotStorage};

pub(crate) struct SlotCell<T> {
    slot: Slot,
    value: watch::Sender<Arc<T>>,
}

impl<T> SlotCell<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Restore the slot from `storage`, falling back to `default` when the
    /// stored value is absent, unreadable, or corrupt.
    pub(crate) fn load(slot: Slot, storage: &dyn SlotStorage, default: impl FnOnce() -> T) -> Self {
        let value = match storage.get(slot.key()) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(v) => {
                    debug!(%slot, "restored slot from storage");
                    v
                }
                Err(e) => {
                    warn!(%slot, error = %e, "stored value is corrupt, using default");
                    default()
                }
            },
            Ok(None) => {
                debug!(%slot, "slot not persisted, using default");
                default()
            }
            Err(e) => {
                warn!(%slot, error = %e, "reading slot failed, using default");
                default()
            }
        };

        let (tx, _) = watch::channel(Arc::new(value));
        Self { slot, value: tx }
    }

    pub(crate) fn get(&self) -> Arc<T> {
        self.value.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<T>> {
        self.value.subscribe()
    }

    /// Overwrite the whole value and persist it.
    pub(crate) fn replace(&self, storage: &dyn SlotStorage, value: T) {
        self.value.send_modify(|current| {
            persist(storage, self.slot, &value);
            *current = Arc::new(value);
        });
    }

    /// Run `f` against a working copy. On `Ok` the copy is committed,
    /// persisted, and broadcast; on `Err` nothing changes.
    pub(crate) fn mutate<R>(
        &self,
        storage: &dyn SlotStorage,
        f: impl FnOnce(&mut T) -> Result<R, CoreError>,
    ) -> Result<R, CoreError> {
        let mut outcome = None;
        self.value.send_if_modified(|current| {
            let mut next = T::clone(&**current);
            match f(&mut next) {
                Ok(r) => {
                    persist(storage, self.slot, &next);
                    *current = Arc::new(next);
                    outcome = Some(Ok(r));
                    true
                }
                Err(e) => {
                    outcome = Some(Err(e));
                    false
                }
            }
        });
        outcome.expect("send_if_modified runs the closure exactly once")
    }

    /// Restore `default` and delete the persisted copy.
    pub(crate) fn reset(&self, storage: &dyn SlotStorage, default: T) {
        self.value.send_modify(|current| {
            if let Err(e) = storage.remove(self.slot.key()) {
                warn!(slot = %self.slot, error = %e, "removing persisted slot failed");
            }
            *current = Arc::new(default);
        });
    }
}

/// Best-effort write. Failures are logged; the in-memory value stays
/// authoritative for the rest of the process.
fn persist<T: Serialize>(storage: &dyn SlotStorage, slot: Slot, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(%slot, error = %e, "serializing slot failed, not persisted");
            return;
        }
    };
    if let Err(e) = storage.set(slot.key(), &raw) {
        warn!(%slot, error = %e, "persisting slot failed, keeping in-memory value");
    }
}
