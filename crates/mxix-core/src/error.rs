// ── Core error types ──
//
// Persistence failures never surface from store mutations: the store
// logs them and keeps the in-memory copy authoritative. `StorageError`
// is what adapters report to the store.

use thiserror::Error;

/// Failure reported by a [`SlotStorage`](crate::storage::SlotStorage) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed for slot '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid slot key '{key}'")]
    InvalidKey { key: String },

    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Content errors ───────────────────────────────────────────────
    #[error("{collection} '{id}' already exists")]
    DuplicateKey { collection: String, id: String },

    // ── Admin gate ───────────────────────────────────────────────────
    #[error("invalid admin password")]
    InvalidPassword,
}
