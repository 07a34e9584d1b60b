//! Packing list use-case service.
//!
//! # Responsibility
//! - Own the canonical item collection and the view parameters.
//! - Load the snapshot once at construction and save after every change.
//!
//! # Invariants
//! - Every mutation builds a new collection and swaps it in whole.
//! - Invalid input and unknown ids are silent no-ops.
//! - Save failures are logged and never reach the caller.
//! - Absent or unusable snapshots fall back to the default seed.

use crate::model::item::{Item, ItemId};
use crate::model::view::{FilterMode, SortMode, ViewParams};
use crate::repo::snapshot_codec::{decode_snapshot, encode_snapshot};
use crate::repo::snapshot_store::{SnapshotStore, SNAPSHOT_KEY};
use crate::stats::{compute_stats, PackingStats};
use crate::view::derive::derive_view;
use log::{debug, info, warn};
use std::time::Instant;
use uuid::Uuid;

/// Items a fresh list starts with: `(description, quantity)`.
pub const DEFAULT_SEED: &[(&str, u8)] = &[("Shirt", 5), ("Pants", 2)];

/// Builds the default seed collection with fresh ids.
pub fn seed_items() -> Vec<Item> {
    DEFAULT_SEED
        .iter()
        .map(|(description, quantity)| Item {
            id: Uuid::new_v4(),
            description: (*description).to_string(),
            quantity: *quantity,
            packed: false,
        })
        .collect()
}

/// Item store: canonical collection plus ephemeral view settings.
pub struct PackingService<S: SnapshotStore> {
    store: S,
    items: Vec<Item>,
    params: ViewParams,
}

impl<S: SnapshotStore> PackingService<S> {
    /// Opens the list, loading the stored snapshot exactly once.
    ///
    /// Never fails: load and decode errors are logged and replaced by the
    /// default seed, which is not written back until the first mutation.
    pub fn open(store: S) -> Self {
        let items = load_or_seed(&store);
        Self {
            store,
            items,
            params: ViewParams::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Canonical collection in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn view_params(&self) -> &ViewParams {
        &self.params
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.params.search = search.into();
    }

    pub fn set_filter(&mut self, filter: FilterMode) {
        self.params.filter = filter;
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.params.sort = sort;
    }

    /// Visible list for the current view parameters.
    pub fn visible_items(&self) -> Vec<Item> {
        derive_view(&self.items, &self.params)
    }

    pub fn stats(&self) -> PackingStats {
        compute_stats(&self.items)
    }

    /// Whether the list is non-empty and every item is packed.
    ///
    /// Decides between "Pack All" and "Unpack All".
    pub fn all_packed(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.packed)
    }

    /// Appends an unpacked item and returns its id.
    ///
    /// Returns `None` without touching the list when the trimmed description
    /// is empty or the quantity is outside the offered range.
    pub fn add(&mut self, description: &str, quantity: u8) -> Option<ItemId> {
        let item = match Item::new(description, quantity) {
            Ok(item) => item,
            Err(err) => {
                debug!("event=item_add module=service status=rejected reason=\"{err}\"");
                return None;
            }
        };

        let id = item.id;
        let mut next = self.items.clone();
        next.push(item);
        self.commit(next, "item_add");
        Some(id)
    }

    /// Removes the item with `id`; returns whether anything was removed.
    pub fn delete(&mut self, id: ItemId) -> bool {
        if self.find(id).is_none() {
            debug!("event=item_delete module=service status=noop item_id={id}");
            return false;
        }

        let next = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        self.commit(next, "item_delete");
        true
    }

    /// Flips the packed flag of the item with `id`; returns whether it existed.
    pub fn toggle_packed(&mut self, id: ItemId) -> bool {
        if self.find(id).is_none() {
            debug!("event=item_toggle module=service status=noop item_id={id}");
            return false;
        }

        let next = self
            .items
            .iter()
            .map(|item| if item.id == id { item.toggled() } else { item.clone() })
            .collect();
        self.commit(next, "item_toggle");
        true
    }

    /// Packs everything unless everything is already packed, in which case
    /// unpacks everything. Does nothing on an empty list.
    pub fn toggle_all_packed(&mut self) {
        if self.items.is_empty() {
            debug!("event=items_toggle_all module=service status=noop");
            return;
        }

        let packed = !self.all_packed();
        let next = self
            .items
            .iter()
            .map(|item| item.with_packed(packed))
            .collect();
        self.commit(next, "items_toggle_all");
    }

    /// Removes every packed item and returns how many were removed.
    pub fn clear_packed(&mut self) -> usize {
        let next = self
            .items
            .iter()
            .filter(|item| !item.packed)
            .cloned()
            .collect::<Vec<_>>();
        let removed = self.items.len() - next.len();

        if removed == 0 {
            debug!("event=items_clear_packed module=service status=noop");
            return 0;
        }

        self.commit(next, "items_clear_packed");
        removed
    }

    /// Empties the list and restores default view parameters.
    ///
    /// Always saves, so a never-persisted seed is replaced by an empty list.
    pub fn reset(&mut self) {
        self.params = ViewParams::default();
        self.commit(Vec::new(), "items_reset");
    }

    fn commit(&mut self, next: Vec<Item>, event: &'static str) {
        self.items = next;
        info!(
            "event={event} module=service status=ok item_count={}",
            self.items.len()
        );
        self.persist();
    }

    fn persist(&self) {
        let started_at = Instant::now();

        let blob = match encode_snapshot(&self.items) {
            Ok(blob) => blob,
            Err(err) => {
                warn!(
                    "event=snapshot_save module=service status=error error_code=encode_failed error={err}"
                );
                return;
            }
        };

        match self.store.save(SNAPSHOT_KEY, &blob) {
            Ok(()) => debug!(
                "event=snapshot_save module=service status=ok bytes={} duration_ms={}",
                blob.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "event=snapshot_save module=service status=error error_code=save_failed duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }
    }
}

fn load_or_seed<S: SnapshotStore>(store: &S) -> Vec<Item> {
    let blob = match store.load(SNAPSHOT_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            info!("event=snapshot_load module=service status=absent fallback=seed");
            return seed_items();
        }
        Err(err) => {
            warn!(
                "event=snapshot_load module=service status=error error_code=load_failed fallback=seed error={err}"
            );
            return seed_items();
        }
    };

    match decode_snapshot(&blob) {
        Ok(items) => {
            info!(
                "event=snapshot_load module=service status=ok item_count={}",
                items.len()
            );
            items
        }
        Err(err) => {
            warn!(
                "event=snapshot_load module=service status=error error_code=decode_failed fallback=seed error={err}"
            );
            seed_items()
        }
    }
}
