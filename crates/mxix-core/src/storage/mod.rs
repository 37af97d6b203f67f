// ── Persistence adapter ──
//
// Durable key/value storage for content slots. Values are JSON strings.
// The store treats any read failure or corrupt value as "absent" and any
// write failure as best-effort.

mod file;
mod memory;

use strum::{Display, IntoStaticStr};

use crate::error::StorageError;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Backend contract for slot persistence.
///
/// Implementations must be safe to share across threads; the store calls
/// them from inside a slot's write section.
pub trait SlotStorage: Send + Sync {
    /// Read the raw value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Named persistence slots. The key strings are a compatibility contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum Slot {
    #[strum(serialize = "mx-ix-network-stats")]
    NetworkStats,
    #[strum(serialize = "mx-ix-global-fabric-stats")]
    GlobalFabricStats,
    #[strum(serialize = "mx-ix-services")]
    Services,
    #[strum(serialize = "mx-ix-locations")]
    Locations,
    /// Admin session flag. Not content: untouched by a reset.
    #[strum(serialize = "mx-ix-admin-auth")]
    AdminAuth,
}

impl Slot {
    /// The four content slots owned by the store, in load order.
    pub const CONTENT: [Slot; 4] = [
        Slot::NetworkStats,
        Slot::GlobalFabricStats,
        Slot::Services,
        Slot::Locations,
    ];

    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// Keys become file names for [`FileStorage`]; keep them to a safe alphabet.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(StorageError::InvalidKey { key: key.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_keys_match_site_storage() {
        assert_eq!(Slot::NetworkStats.key(), "mx-ix-network-stats");
        assert_eq!(Slot::GlobalFabricStats.key(), "mx-ix-global-fabric-stats");
        assert_eq!(Slot::Services.key(), "mx-ix-services");
        assert_eq!(Slot::Locations.key(), "mx-ix-locations");
        assert_eq!(Slot::AdminAuth.to_string(), "mx-ix-admin-auth");
    }

    #[test]
    fn content_slots_exclude_admin_session() {
        assert!(!Slot::CONTENT.contains(&Slot::AdminAuth));
    }

    #[test]
    fn key_validation() {
        assert!(validate_key("mx-ix-locations").is_ok());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("").is_err());
    }
}
