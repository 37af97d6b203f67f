// ── Content store ──
//
// Authoritative in-memory content, mirrored to a persistence adapter.

mod collection;
mod content_store;
mod slot;

pub use content_store::ContentStore;
