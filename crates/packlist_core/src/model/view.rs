//! View parameters controlling the derived list.
//!
//! These settings are ephemeral: they live next to the item collection but
//! are never part of the persisted snapshot.

use crate::model::item::Item;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Which items survive the filter stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    #[default]
    All,
    Packed,
    Unpacked,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [Self::All, Self::Packed, Self::Unpacked];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Packed => "packed",
            Self::Unpacked => "unpacked",
        }
    }

    /// Returns whether `item` is kept under this filter.
    pub fn accepts(self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Packed => item.packed,
            Self::Unpacked => !item.packed,
        }
    }
}

/// Ordering applied by the sort stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Description ascending.
    #[default]
    Az,
    /// Description descending.
    Za,
    /// Quantity descending.
    QtyHigh,
    /// Quantity ascending.
    QtyLow,
    /// Packed items before unpacked ones.
    PackedFirst,
}

impl SortMode {
    pub const ALL: [SortMode; 5] = [
        Self::Az,
        Self::Za,
        Self::QtyHigh,
        Self::QtyLow,
        Self::PackedFirst,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Az => "az",
            Self::Za => "za",
            Self::QtyHigh => "qty-high",
            Self::QtyLow => "qty-low",
            Self::PackedFirst => "packed-first",
        }
    }
}

/// Unknown filter or sort name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError {
    kind: &'static str,
    value: String,
    expected: String,
}

impl Display for ParseModeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported {} mode `{}`; expected {}",
            self.kind, self.value, self.expected
        )
    }
}

impl Error for ParseModeError {}

impl FromStr for FilterMode {
    type Err = ParseModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| ParseModeError {
                kind: "filter",
                value: value.to_string(),
                expected: Self::ALL.map(Self::as_str).join("|"),
            })
    }
}

impl FromStr for SortMode {
    type Err = ParseModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| ParseModeError {
                kind: "sort",
                value: value.to_string(),
                expected: Self::ALL.map(Self::as_str).join("|"),
            })
    }
}

impl Display for FilterMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search, filter and sort settings for the visible list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewParams {
    /// Raw search text as typed; may be empty.
    pub search: String,
    pub filter: FilterMode,
    pub sort: SortMode,
}

#[cfg(test)]
mod tests {
    use super::{FilterMode, SortMode, ViewParams};

    #[test]
    fn defaults_match_fresh_session() {
        let params = ViewParams::default();
        assert_eq!(params.search, "");
        assert_eq!(params.filter, FilterMode::All);
        assert_eq!(params.sort, SortMode::Az);
    }

    #[test]
    fn modes_parse_from_their_wire_names() {
        for mode in SortMode::ALL {
            assert_eq!(mode.as_str().parse::<SortMode>().unwrap(), mode);
        }
        for mode in FilterMode::ALL {
            assert_eq!(mode.as_str().parse::<FilterMode>().unwrap(), mode);
        }
        assert_eq!(" QTY-HIGH ".parse::<SortMode>().unwrap(), SortMode::QtyHigh);
    }

    #[test]
    fn unknown_mode_lists_expected_values() {
        let err = "newest".parse::<SortMode>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("newest"));
        assert!(message.contains("packed-first"));
    }

    #[test]
    fn serde_uses_kebab_case_names() {
        assert_eq!(
            serde_json::to_value(SortMode::PackedFirst).unwrap(),
            "packed-first"
        );
        assert_eq!(
            serde_json::to_value(FilterMode::Unpacked).unwrap(),
            "unpacked"
        );
    }
}
