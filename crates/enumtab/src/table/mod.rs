//! The bidirectional name table.
//!
//! An [`EnumTable`] owns (or borrows, for `'static` data) the entries of one
//! enum in declaration order. Construction checks that names and values are
//! unique; after that the table is never mutated.
//!
//! Small tables answer lookups with a linear scan. Past [`LINEAR_SCAN_LIMIT`]
//! entries, construction also builds a name hash index and a value index
//! (dense slot array or sorted pairs, depending on how packed the
//! discriminants are).

mod index;

use std::borrow::Cow;
use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{Conflict, EnumEntry, TableError};
use index::{build_name_index, ValueIndex};

/// Tables with at most this many entries use a linear scan.
pub const LINEAR_SCAN_LIMIT: usize = 16;

#[derive(Debug)]
pub struct EnumTable {
    type_name: &'static str,
    entries: Cow<'static, [EnumEntry]>,
    names: Option<FxHashMap<&'static str, usize>>,
    values: ValueIndex,
}

impl EnumTable {
    /// Build a table, rejecting duplicate names or values.
    ///
    /// The first duplicate in declaration order is reported. A name clash is
    /// reported before a value clash on the same entry.
    ///
    /// # Panics
    ///
    /// Panics if any entry has an empty name. Names are source identifiers,
    /// so an empty one is a bug in the code that built `entries`.
    pub fn new(
        type_name: &'static str,
        entries: impl Into<Cow<'static, [EnumEntry]>>,
    ) -> Result<Self, TableError> {
        let entries = entries.into();

        if let Some(conflict) = find_conflict(&entries) {
            tracing::warn!(type_name, %conflict, "rejected enum table");
            return Err(TableError::DuplicateDefinition {
                type_name,
                conflict,
            });
        }

        Ok(Self::assemble(type_name, entries))
    }

    /// Build a table whose entries were already checked for uniqueness.
    ///
    /// Derived tables use this: their uniqueness is asserted while the crate
    /// is compiled.
    pub(crate) fn from_checked(type_name: &'static str, entries: &'static [EnumEntry]) -> Self {
        Self::assemble(type_name, Cow::Borrowed(entries))
    }

    fn assemble(type_name: &'static str, entries: Cow<'static, [EnumEntry]>) -> Self {
        assert!(
            entries.iter().all(|e| !e.name.is_empty()),
            "enum `{type_name}` has an empty enumerator name"
        );

        let names = build_name_index(&entries);
        let values = ValueIndex::build(&entries);

        tracing::debug!(
            type_name,
            entries = entries.len(),
            value_index = values.kind(),
            name_index = names.is_some(),
            "built enum table"
        );

        EnumTable {
            type_name,
            entries,
            names,
            values,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[EnumEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.iter().map(|e| e.value)
    }

    /// The canonical name of `value`.
    ///
    /// Fails with [`TableError::NotFound`] if no enumerator has that
    /// discriminant, e.g. for a value produced by an unchecked cast.
    pub fn name_of(&self, value: i64) -> Result<&'static str, TableError> {
        self.index_of(value)
            .map(|pos| self.entries[pos].name)
            .ok_or(TableError::NotFound {
                type_name: self.type_name,
                value,
            })
    }

    /// The discriminant named `name`. Case-sensitive, no trimming.
    pub fn value_of(&self, name: &str) -> Option<i64> {
        self.position_of_name(name).map(|pos| self.entries[pos].value)
    }

    /// Like [`value_of`](Self::value_of) but ignoring ASCII case.
    ///
    /// If several names differ only by case, the first declared one wins.
    pub fn value_of_ignore_case(&self, name: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .map(|e| e.value)
    }

    pub fn contains_value(&self, value: i64) -> bool {
        self.index_of(value).is_some()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.position_of_name(name).is_some()
    }

    /// Declaration position of the enumerator with discriminant `value`.
    pub fn index_of(&self, value: i64) -> Option<usize> {
        self.values.position(&self.entries, value)
    }

    pub fn entry_at(&self, index: usize) -> Option<&EnumEntry> {
        self.entries.get(index)
    }

    pub(crate) fn position_of_name(&self, name: &str) -> Option<usize> {
        match &self.names {
            Some(names) => names.get(name).copied(),
            None => self.entries.iter().position(|e| e.name == name),
        }
    }

    /// Display adapter for a raw discriminant.
    ///
    /// Prints the canonical name, or `<unknown N>` when `value` is unmapped.
    pub fn display(&self, value: i64) -> DisplayName<'_> {
        DisplayName { table: self, value }
    }
}

/// See [`EnumTable::display`].
#[derive(Copy, Clone, Debug)]
pub struct DisplayName<'a> {
    table: &'a EnumTable,
    value: i64,
}

impl fmt::Display for DisplayName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.table.name_of(self.value) {
            Ok(name) => f.write_str(name),
            Err(_) => write!(f, "<unknown {}>", self.value),
        }
    }
}

fn find_conflict(entries: &[EnumEntry]) -> Option<Conflict> {
    let mut names = FxHashSet::default();
    let mut values = FxHashSet::default();
    for entry in entries {
        if !names.insert(entry.name) {
            return Some(Conflict::Name(entry.name));
        }
        if !values.insert(entry.value) {
            return Some(Conflict::Value(entry.value));
        }
    }
    None
}
