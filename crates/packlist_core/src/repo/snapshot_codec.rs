//! JSON encoding of the item collection.
//!
//! Wire shape: an array of `{ "id", "description", "quantity", "packed" }`
//! objects in collection order. There is no version field.

use crate::model::item::{Item, ItemId, ItemValidationError};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reasons a stored blob cannot be used as a collection.
#[derive(Debug)]
pub enum SnapshotError {
    Malformed(serde_json::Error),
    InvalidItem {
        index: usize,
        source: ItemValidationError,
    },
    DuplicateId(ItemId),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "malformed snapshot: {err}"),
            Self::InvalidItem { index, source } => {
                write!(f, "invalid snapshot item at index {index}: {source}")
            }
            Self::DuplicateId(id) => write!(f, "duplicate item id in snapshot: {id}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            Self::InvalidItem { source, .. } => Some(source),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

/// Serializes the collection in order.
pub fn encode_snapshot(items: &[Item]) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(items)?)
}

/// Parses and validates a stored collection.
///
/// # Errors
/// - `Malformed` for invalid JSON or a shape other than an item array.
/// - `InvalidItem` when an entry breaks an item invariant.
/// - `DuplicateId` when two entries share an id.
pub fn decode_snapshot(blob: &str) -> Result<Vec<Item>, SnapshotError> {
    let items: Vec<Item> = serde_json::from_str(blob)?;
    let mut seen = HashSet::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        item.validate()
            .map_err(|source| SnapshotError::InvalidItem { index, source })?;
        if !seen.insert(item.id) {
            return Err(SnapshotError::DuplicateId(item.id));
        }
    }

    Ok(items)
}
