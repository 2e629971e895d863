//! A single (discriminant, name) pair.

use std::fmt;

/// One enumerator of a reflected enum: its discriminant and canonical name.
///
/// Entries are plain data and can be built in `const` context, which is how
/// derived and hand-written tables declare them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumEntry {
    /// The enumerator's discriminant, widened to `i64`.
    pub value: i64,
    /// The canonical name. Compared case-sensitively.
    pub name: &'static str,
}

impl EnumEntry {
    pub const fn new(value: i64, name: &'static str) -> Self {
        EnumEntry { value, name }
    }
}

impl fmt::Display for EnumEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}
