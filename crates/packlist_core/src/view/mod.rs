//! Derived views over the item collection.
//!
//! # Responsibility
//! - Compute the visible list from items plus view parameters.
//! - Never mutate the canonical collection.

pub mod derive;
