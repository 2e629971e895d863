//! Hand-written tables built on first use.

use std::sync::OnceLock;

use crate::{EnumEntry, EnumTable, TableError};

/// A `static`-friendly [`EnumTable`] that is built the first time it is read.
///
/// The outcome of construction is cached, so a table with duplicates never
/// becomes readable: every call to [`get`](Self::get) reports the same
/// [`TableError::DuplicateDefinition`].
pub struct LazyTable {
    type_name: &'static str,
    entries: &'static [EnumEntry],
    cell: OnceLock<Result<EnumTable, TableError>>,
}

impl LazyTable {
    pub const fn new(type_name: &'static str, entries: &'static [EnumEntry]) -> Self {
        LazyTable {
            type_name,
            entries,
            cell: OnceLock::new(),
        }
    }

    /// The table, built on the first call.
    ///
    /// # Panics
    ///
    /// Panics like [`EnumTable::new`] if an entry has an empty name.
    pub fn get(&self) -> Result<&EnumTable, TableError> {
        self.cell
            .get_or_init(|| EnumTable::new(self.type_name, self.entries))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Whether construction has already run (successfully or not).
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}
