//! Typed access to an enum's name table.
//!
//! [`Reflect`] is normally implemented with `#[derive(Reflect)]`. The derive
//! supplies the associated constants and `table()`; everything else is
//! provided here in terms of them.

use crate::{EnumEntry, EnumTable};

/// A fieldless enum with a name table.
///
/// `VARIANTS` and `ENTRIES` are parallel: `ENTRIES[i]` describes
/// `VARIANTS[i]`, both in declaration order.
pub trait Reflect: Copy + 'static {
    /// The enum's identifier, used in diagnostics.
    const TYPE_NAME: &'static str;

    /// Every enumerator in declaration order.
    const VARIANTS: &'static [Self];

    /// The (discriminant, name) pair for each enumerator.
    const ENTRIES: &'static [EnumEntry];

    /// Number of enumerators.
    const COUNT: usize = Self::VARIANTS.len();

    /// The process-wide table for this enum, built on first use.
    fn table() -> &'static EnumTable;

    /// Declaration position of `self`.
    fn index(self) -> usize;

    /// The canonical name of this enumerator.
    fn name(self) -> &'static str {
        Self::ENTRIES[self.index()].name
    }

    /// The discriminant, widened to `i64`.
    fn discriminant(self) -> i64 {
        Self::ENTRIES[self.index()].value
    }

    /// Parse a canonical name. Case-sensitive.
    fn from_name(name: &str) -> Option<Self> {
        Self::table()
            .position_of_name(name)
            .and_then(Self::from_index)
    }

    /// Parse a name ignoring ASCII case. The first declared match wins.
    fn from_name_ignore_case(name: &str) -> Option<Self> {
        Self::table()
            .value_of_ignore_case(name)
            .and_then(Self::from_discriminant)
    }

    /// The enumerator with discriminant `value`, if any.
    ///
    /// This is the checked counterpart of an `as` cast from an integer.
    fn from_discriminant(value: i64) -> Option<Self> {
        Self::table().index_of(value).and_then(Self::from_index)
    }

    fn from_index(index: usize) -> Option<Self> {
        Self::VARIANTS.get(index).copied()
    }
}
