//! Static name tables for fieldless enums.
//!
//! An [`EnumTable`] maps each enumerator's discriminant to its canonical name
//! and back. Tables are immutable once built and are shared read-only for the
//! lifetime of the process, so lookups need no locking.
//!
//! # Deriving a table
//!
//! With the default `derive` feature, `#[derive(Reflect)]` generates the table
//! from the enum declaration:
//!
//! ```
//! use enumtab::Reflect;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
//! enum Color {
//!     Red,
//!     Green,
//!     Blue,
//! }
//!
//! assert_eq!(Color::Green.name(), "Green");
//! assert_eq!(Color::from_name("Red"), Some(Color::Red));
//! assert_eq!(Color::from_name("red"), None);
//!
//! let table = Color::table();
//! assert_eq!(table.name_of(2), Ok("Blue"));
//! assert!(table.name_of(99).is_err());
//! ```
//!
//! # Hand-written tables
//!
//! Tables can also be declared explicitly. A [`LazyTable`] builds on first use
//! and validates uniqueness before the table becomes visible:
//!
//! ```
//! use enumtab::{EnumEntry, LazyTable};
//!
//! static LEVELS: LazyTable = LazyTable::new(
//!     "Level",
//!     &[EnumEntry::new(10, "Low"), EnumEntry::new(20, "High")],
//! );
//!
//! let table = LEVELS.get().unwrap();
//! assert_eq!(table.value_of("High"), Some(20));
//! ```

// Lets derive output (which names `::enumtab`) compile inside this crate's tests.
#[allow(unused_extern_crates)]
extern crate self as enumtab;

mod entry;
mod error;
mod lazy;
mod reflect;
mod table;

#[doc(hidden)]
pub mod __private;

pub use entry::EnumEntry;
pub use error::{Conflict, TableError};
pub use lazy::LazyTable;
pub use reflect::Reflect;
pub use table::{DisplayName, EnumTable, LINEAR_SCAN_LIMIT};

/// Derive [`Reflect`] for a fieldless enum.
///
/// Supported attributes:
///
/// - `#[reflect(rename_all = "...")]` on the enum: one of `lowercase`,
///   `UPPERCASE`, `snake_case`, `SCREAMING_SNAKE_CASE`, `kebab-case`,
///   `camelCase`, `PascalCase`.
/// - `#[reflect(rename = "...")]` on a variant.
///
/// ```
/// use enumtab::Reflect;
///
/// #[derive(Clone, Copy, Reflect)]
/// #[reflect(rename_all = "snake_case")]
/// enum Mode {
///     ReadOnly,
///     #[reflect(rename = "rw")]
///     ReadWrite = 4,
/// }
///
/// assert_eq!(Mode::ReadOnly.name(), "read_only");
/// assert_eq!(Mode::table().value_of("rw"), Some(4));
/// ```
///
/// Two variants resolving to the same name are rejected at compile time:
///
/// ```compile_fail
/// use enumtab::Reflect;
///
/// #[derive(Clone, Copy, Reflect)]
/// enum Clash {
///     First,
///     #[reflect(rename = "First")]
///     Second,
/// }
/// ```
///
/// Data-carrying variants are rejected:
///
/// ```compile_fail
/// use enumtab::Reflect;
///
/// #[derive(Clone, Copy, Reflect)]
/// enum Shape {
///     Circle(u32),
///     Square,
/// }
/// ```
///
/// So are structs:
///
/// ```compile_fail
/// use enumtab::Reflect;
///
/// #[derive(Clone, Copy, Reflect)]
/// struct NotAnEnum;
/// ```
///
/// And unknown case conventions:
///
/// ```compile_fail
/// use enumtab::Reflect;
///
/// #[derive(Clone, Copy, Reflect)]
/// #[reflect(rename_all = "Title Case")]
/// enum Bad {
///     One,
/// }
/// ```
#[cfg(feature = "derive")]
pub use enumtab_macros::Reflect;
