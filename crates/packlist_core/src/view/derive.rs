//! Search, filter and sort pipeline for the visible list.
//!
//! # Invariants
//! - Stages run in order: search, filter, sort.
//! - Output is a fresh vector; the input slice is never reordered.
//! - Sorting is stable, so equal keys keep their collection order.
//! - Identical inputs always produce identical output.

use crate::model::item::Item;
use crate::model::view::{SortMode, ViewParams};
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use log::warn;
use once_cell::sync::Lazy;
use std::cmp::Ordering;

/// Computes the visible ordered subset of `items`.
pub fn derive_view(items: &[Item], params: &ViewParams) -> Vec<Item> {
    let needle = search_needle(&params.search);

    let mut visible = items
        .iter()
        .filter(|item| matches_search(item, needle.as_deref()))
        .filter(|item| params.filter.accepts(item))
        .cloned()
        .collect::<Vec<_>>();

    sort_items(&mut visible, params.sort);
    visible
}

/// Root-locale collator at default (tertiary) strength.
///
/// `None` only when the compiled collation data fails to load.
static ROOT_COLLATOR: Lazy<Option<CollatorBorrowed<'static>>> = Lazy::new(|| {
    match Collator::try_new(Default::default(), CollatorOptions::default()) {
        Ok(collator) => Some(collator),
        Err(err) => {
            warn!("event=collator_init module=view status=error fallback=code_point error={err}");
            None
        }
    }
});

/// Compares two descriptions with the root-locale collation order.
///
/// Accented letters sort next to their base letter and lowercase precedes
/// uppercase on a case-only tie. Strings the collator deems equal fall back
/// to code point order so sorting stays deterministic.
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    let collated = match ROOT_COLLATOR.as_ref() {
        Some(collator) => collator.compare(left, right),
        None => Ordering::Equal,
    };
    collated.then_with(|| left.cmp(right))
}

/// Blank queries disable the search stage. Non-blank queries match as typed,
/// surrounding whitespace included.
fn search_needle(search: &str) -> Option<String> {
    if search.trim().is_empty() {
        None
    } else {
        Some(search.to_lowercase())
    }
}

fn matches_search(item: &Item, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => item.description.to_lowercase().contains(needle),
        None => true,
    }
}

fn sort_items(items: &mut [Item], sort: SortMode) {
    match sort {
        SortMode::Az => items.sort_by(|a, b| locale_compare(&a.description, &b.description)),
        SortMode::Za => items.sort_by(|a, b| locale_compare(&b.description, &a.description)),
        SortMode::QtyHigh => items.sort_by(|a, b| b.quantity.cmp(&a.quantity)),
        SortMode::QtyLow => items.sort_by_key(|item| item.quantity),
        SortMode::PackedFirst => items.sort_by_key(|item| !item.packed),
    }
}

#[cfg(test)]
mod tests {
    use super::{locale_compare, search_needle};
    use std::cmp::Ordering;

    #[test]
    fn locale_compare_ignores_case_before_tiebreak() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zebra", "apple"), Ordering::Greater);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("sock", "sock"), Ordering::Equal);
    }

    #[test]
    fn locale_compare_places_accented_letters_beside_base_letter() {
        assert_eq!(locale_compare("Écharpe", "Fleece"), Ordering::Less);
        assert_eq!(locale_compare("Écharpe", "Earplugs"), Ordering::Greater);
        assert_eq!(locale_compare("Echarpe", "Écharpe"), Ordering::Less);
        assert_eq!(locale_compare("Zucchini", "Écharpe"), Ordering::Greater);
    }

    #[test]
    fn locale_compare_orders_prefix_first() {
        assert_eq!(locale_compare("Sock", "Socks"), Ordering::Less);
    }

    #[test]
    fn blank_search_disables_stage() {
        assert_eq!(search_needle(""), None);
        assert_eq!(search_needle("   "), None);
        assert_eq!(search_needle("SoCk").as_deref(), Some("sock"));
    }
}
