//! Core use-case services.
//!
//! # Responsibility
//! - Own the canonical item collection and its mutation contract.
//! - Keep presentation layers decoupled from storage details.

pub mod packing_service;
