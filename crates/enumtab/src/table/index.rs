//! Lookup indexes for tables too large for a linear scan.

use rustc_hash::FxHashMap;

use super::LINEAR_SCAN_LIMIT;
use crate::EnumEntry;

/// Maps a discriminant to its position in the entry list.
#[derive(Debug)]
pub(super) enum ValueIndex {
    /// Scan the entries in order.
    Linear,
    /// Discriminants are packed closely enough for a direct slot array.
    /// `slots[value - base]` holds the entry position.
    Dense {
        base: i64,
        slots: Box<[Option<usize>]>,
    },
    /// Sparse discriminants: `(value, position)` sorted by value.
    Sorted(Box<[(i64, usize)]>),
}

impl ValueIndex {
    /// Pick an index shape for `entries`.
    ///
    /// Values must already be unique.
    pub(super) fn build(entries: &[EnumEntry]) -> Self {
        if entries.len() <= LINEAR_SCAN_LIMIT {
            return ValueIndex::Linear;
        }

        let (Some(min), Some(max)) = (
            entries.iter().map(|e| e.value).min(),
            entries.iter().map(|e| e.value).max(),
        ) else {
            return ValueIndex::Linear;
        };

        let span = i128::from(max) - i128::from(min) + 1;
        let dense_limit = i128::try_from(entries.len())
            .unwrap_or(i128::MAX)
            .saturating_mul(2);

        match usize::try_from(span) {
            Ok(len) if span <= dense_limit => {
                let mut slots = vec![None; len];
                for (pos, entry) in entries.iter().enumerate() {
                    if let Some(slot) = offset(min, entry.value).and_then(|i| slots.get_mut(i)) {
                        *slot = Some(pos);
                    }
                }
                ValueIndex::Dense {
                    base: min,
                    slots: slots.into_boxed_slice(),
                }
            }
            _ => {
                let mut pairs: Vec<(i64, usize)> = entries
                    .iter()
                    .enumerate()
                    .map(|(pos, entry)| (entry.value, pos))
                    .collect();
                pairs.sort_unstable_by_key(|&(value, _)| value);
                ValueIndex::Sorted(pairs.into_boxed_slice())
            }
        }
    }

    pub(super) fn position(&self, entries: &[EnumEntry], value: i64) -> Option<usize> {
        match self {
            ValueIndex::Linear => entries.iter().position(|e| e.value == value),
            ValueIndex::Dense { base, slots } => {
                offset(*base, value).and_then(|i| slots.get(i).copied().flatten())
            }
            ValueIndex::Sorted(pairs) => pairs
                .binary_search_by_key(&value, |&(v, _)| v)
                .ok()
                .map(|i| pairs[i].1),
        }
    }

    pub(super) fn kind(&self) -> &'static str {
        match self {
            ValueIndex::Linear => "linear",
            ValueIndex::Dense { .. } => "dense",
            ValueIndex::Sorted(_) => "sorted",
        }
    }
}

/// Slot offset of `value` from `base`, if it is non-negative and addressable.
fn offset(base: i64, value: i64) -> Option<usize> {
    usize::try_from(i128::from(value) - i128::from(base)).ok()
}

/// Name index, built only past [`LINEAR_SCAN_LIMIT`].
pub(super) fn build_name_index(entries: &[EnumEntry]) -> Option<FxHashMap<&'static str, usize>> {
    if entries.len() <= LINEAR_SCAN_LIMIT {
        return None;
    }
    Some(
        entries
            .iter()
            .enumerate()
            .map(|(pos, entry)| (entry.name, pos))
            .collect(),
    )
}
