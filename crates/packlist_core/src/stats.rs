//! Packing progress summary.
//!
//! `percentage` rounds half up: `12.5%` becomes `13%`. For non-negative
//! ratios this is the same as rounding half away from zero.

use crate::model::item::Item;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Packed count, total and rounded percentage of a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PackingStats {
    pub packed_count: usize,
    pub total: usize,
    /// Always within `0..=100`; `0` for an empty collection.
    pub percentage: u8,
}

impl Display for PackingStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You packed {}/{} items ({}%).",
            self.packed_count, self.total, self.percentage
        )
    }
}

/// Computes progress over the full collection, independent of any view.
pub fn compute_stats(items: &[Item]) -> PackingStats {
    let total = items.len();
    let packed_count = items.iter().filter(|item| item.packed).count();

    PackingStats {
        packed_count,
        total,
        percentage: percentage_half_up(packed_count, total),
    }
}

fn percentage_half_up(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    // round(part * 100 / whole) == floor((part * 200 + whole) / (whole * 2))
    let rounded = (part * 200 + whole) / (whole * 2);
    rounded.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::{compute_stats, percentage_half_up, PackingStats};
    use crate::model::item::Item;

    fn items(packed: &[bool]) -> Vec<Item> {
        packed
            .iter()
            .enumerate()
            .map(|(index, packed)| {
                Item::new(&format!("item {index}"), 1)
                    .unwrap()
                    .with_packed(*packed)
            })
            .collect()
    }

    #[test]
    fn empty_collection_is_all_zero() {
        assert_eq!(
            compute_stats(&[]),
            PackingStats {
                packed_count: 0,
                total: 0,
                percentage: 0,
            }
        );
    }

    #[test]
    fn single_packed_item_is_complete() {
        let stats = compute_stats(&items(&[true]));
        assert_eq!((stats.packed_count, stats.total, stats.percentage), (1, 1, 100));
    }

    #[test]
    fn one_of_three_rounds_down_to_33() {
        let stats = compute_stats(&items(&[false, true, false]));
        assert_eq!(stats.percentage, 33);
        assert_eq!(compute_stats(&items(&[true, true, false])).percentage, 67);
    }

    #[test]
    fn half_boundary_rounds_up() {
        assert_eq!(percentage_half_up(1, 8), 13);
        assert_eq!(percentage_half_up(3, 8), 38);
        assert_eq!(percentage_half_up(1, 200), 1);
        assert_eq!(percentage_half_up(1, 400), 0);
    }

    #[test]
    fn display_matches_footer_text() {
        let stats = compute_stats(&items(&[true, false]));
        assert_eq!(stats.to_string(), "You packed 1/2 items (50%).");
    }
}
