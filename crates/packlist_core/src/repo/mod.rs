//! Persistence gateway for the packing list snapshot.
//!
//! # Responsibility
//! - Define the key-value blob contract consumed by the item store.
//! - Keep SQLite details and JSON encoding out of the service layer.
//!
//! # Invariants
//! - Snapshots are addressed by a single fixed key.
//! - Decoding rejects structurally incompatible blobs instead of repairing them.

pub mod snapshot_codec;
pub mod snapshot_store;
