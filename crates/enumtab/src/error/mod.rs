//! Errors raised while building or querying an [`EnumTable`](crate::EnumTable).
//!
//! There are two kinds:
//!
//! - [`TableError::DuplicateDefinition`]: two enumerators share a name or a
//!   value. Raised at construction, before the table is usable. It means the
//!   enum declaration itself is wrong.
//! - [`TableError::NotFound`]: a discriminant matched no enumerator. The caller
//!   decides whether that is fatal.
//!
//! Name lookups report a miss as `None` instead of an error.

use std::fmt;

/// What collided in a [`TableError::DuplicateDefinition`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Conflict {
    /// Two entries share this name.
    Name(&'static str),
    /// Two entries share this discriminant.
    Value(i64),
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::Name(name) => write!(f, "name `{name}`"),
            Conflict::Value(value) => write!(f, "value {value}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("duplicate {conflict} in enum `{type_name}`")]
    DuplicateDefinition {
        type_name: &'static str,
        conflict: Conflict,
    },

    #[error("no enumerator of `{type_name}` has value {value}")]
    NotFound { type_name: &'static str, value: i64 },
}

impl TableError {
    /// The enum the error refers to.
    pub fn type_name(&self) -> &'static str {
        match self {
            TableError::DuplicateDefinition { type_name, .. }
            | TableError::NotFound { type_name, .. } => type_name,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TableError::NotFound { .. })
    }
}
