//! Domain model for the packing list.
//!
//! # Responsibility
//! - Define the item record and the ephemeral view parameters.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`.
//! - View parameters never leak into persisted snapshots.

pub mod item;
pub mod view;
