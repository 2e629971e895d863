//! Procedural macros for `enumtab`.
//!
//! # Reflect Derive
//!
//! `#[derive(Reflect)]` generates an `enumtab::Reflect` implementation for a
//! fieldless enum, so the name table is written next to the declaration
//! instead of being maintained by hand:
//!
//! ```text
//! #[derive(Clone, Copy, Reflect)]
//! #[reflect(rename_all = "snake_case")]
//! pub enum Level {
//!     Trace,
//!     Debug,
//!     #[reflect(rename = "warning")]
//!     Warn = 30,
//! }
//! ```
//!
//! Use it through the `enumtab` crate, which re-exports it. The generated code
//! refers to `::enumtab`.

mod case;
mod reflect;

use proc_macro::TokenStream;

/// Derive macro for enum name tables.
///
/// Names default to the variant identifier with any `r#` prefix removed.
///
/// # Attributes
///
/// ## Enum-level
/// - `#[reflect(rename_all = "...")]` - Case convention applied to every
///   variant name: `lowercase`, `UPPERCASE`, `snake_case`,
///   `SCREAMING_SNAKE_CASE`, `kebab-case`, `camelCase`, `PascalCase`.
///
/// ## Variant-level
/// - `#[reflect(rename = "name")]` - Use this exact name. Overrides `rename_all`.
///
/// # Errors
///
/// Fails to compile on structs and unions, generic enums, variants with
/// fields, empty or duplicate names, and unknown attribute keys.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    reflect::derive_reflect(input)
}
