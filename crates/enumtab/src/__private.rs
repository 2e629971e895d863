//! Support code for `#[derive(Reflect)]` output. Not public API.

use crate::{EnumEntry, EnumTable};

/// Fail constant evaluation if two entries share a name or a value, or if
/// any name is empty.
///
/// Derived impls call this from a `const _: () = ...;` item, so a bad table
/// stops the build instead of surfacing at first use.
pub const fn assert_unique(entries: &[EnumEntry]) {
    let mut i = 0;
    while i < entries.len() {
        if entries[i].name.is_empty() {
            panic!("empty name in reflected enum");
        }
        let mut j = i + 1;
        while j < entries.len() {
            if entries[i].value == entries[j].value {
                panic!("duplicate discriminant in reflected enum");
            }
            if str_eq(entries[i].name, entries[j].name) {
                panic!("duplicate name in reflected enum");
            }
            j += 1;
        }
        i += 1;
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Build the table for a derived enum. Entries passed [`assert_unique`].
pub fn checked_table(type_name: &'static str, entries: &'static [EnumEntry]) -> EnumTable {
    EnumTable::from_checked(type_name, entries)
}
