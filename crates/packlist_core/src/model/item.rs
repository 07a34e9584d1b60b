//! Packing item domain model.
//!
//! # Responsibility
//! - Define the canonical record stored in the packing list.
//! - Enforce add-time invariants (trimmed description, bounded quantity).
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `description` is trimmed and never empty.
//! - `quantity` stays within `QUANTITY_MIN..=QUANTITY_MAX`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a packing item.
pub type ItemId = Uuid;

/// Smallest quantity the add form offers.
pub const QUANTITY_MIN: u8 = 1;
/// Largest quantity the add form offers.
pub const QUANTITY_MAX: u8 = 10;

/// Validation failures for item construction and decoded snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    NilId,
    EmptyDescription,
    QuantityOutOfRange(u8),
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "item id must not be nil"),
            Self::EmptyDescription => write!(f, "item description must not be blank"),
            Self::QuantityOutOfRange(value) => write!(
                f,
                "item quantity {value} is outside {QUANTITY_MIN}..={QUANTITY_MAX}"
            ),
        }
    }
}

impl Error for ItemValidationError {}

/// Single packing-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: u8,
    pub packed: bool,
}

impl Item {
    /// Creates an unpacked item with a freshly generated id.
    ///
    /// The description is trimmed before validation.
    pub fn new(description: &str, quantity: u8) -> Result<Self, ItemValidationError> {
        Self::with_id(Uuid::new_v4(), description, quantity)
    }

    /// Creates an unpacked item with a caller-provided id.
    pub fn with_id(
        id: ItemId,
        description: &str,
        quantity: u8,
    ) -> Result<Self, ItemValidationError> {
        let item = Self {
            id,
            description: description.trim().to_string(),
            quantity,
            packed: false,
        };
        item.validate()?;
        Ok(item)
    }

    /// Checks the item invariants.
    ///
    /// Used on every decoded snapshot entry; persisted state that breaks an
    /// invariant is rejected rather than repaired.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.id.is_nil() {
            return Err(ItemValidationError::NilId);
        }
        if self.description.trim().is_empty() {
            return Err(ItemValidationError::EmptyDescription);
        }
        if !(QUANTITY_MIN..=QUANTITY_MAX).contains(&self.quantity) {
            return Err(ItemValidationError::QuantityOutOfRange(self.quantity));
        }
        Ok(())
    }

    /// Returns a copy of this item with the given packed flag.
    pub fn with_packed(&self, packed: bool) -> Self {
        Self {
            packed,
            ..self.clone()
        }
    }

    /// Returns a copy of this item with the packed flag flipped.
    pub fn toggled(&self) -> Self {
        self.with_packed(!self.packed)
    }
}
