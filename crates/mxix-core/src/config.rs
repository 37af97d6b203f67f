// ── Runtime store configuration ──
//
// These types describe *how* the content store behaves. They never touch
// disk; `mxix-config` builds them from the config file and hands them in.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// What `add_*` / `update_*` do when an id collides with an existing entry.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum KeyPolicy {
    /// Accept duplicates. Lookups by id resolve to the last matching entry.
    #[default]
    Permissive,
    /// Reject a mutation that would leave two entries sharing an id.
    Unique,
}

/// Options for [`ContentStore::open`](crate::ContentStore::open).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreOptions {
    pub key_policy: KeyPolicy,
}

impl StoreOptions {
    pub fn with_key_policy(mut self, key_policy: KeyPolicy) -> Self {
        self.key_policy = key_policy;
        self
    }
}
