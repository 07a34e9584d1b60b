//! Core domain logic for the packing list.
//! This crate is the single source of truth for list invariants.
//!
//! A [`PackingService`] owns the item collection, loads it once from a
//! [`SnapshotStore`] and saves it after every change. [`derive_view`] and
//! [`compute_stats`] are pure functions over that collection.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod stats;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::item::{Item, ItemId, ItemValidationError, QUANTITY_MAX, QUANTITY_MIN};
pub use model::view::{FilterMode, ParseModeError, SortMode, ViewParams};
pub use repo::snapshot_codec::{decode_snapshot, encode_snapshot, SnapshotError};
pub use repo::snapshot_store::{
    MemorySnapshotStore, SnapshotStore, SqliteSnapshotStore, StoreError, StoreResult,
    SNAPSHOT_KEY,
};
pub use service::packing_service::{seed_items, PackingService, DEFAULT_SEED};
pub use stats::{compute_stats, PackingStats};
pub use view::derive::{derive_view, locale_compare};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
