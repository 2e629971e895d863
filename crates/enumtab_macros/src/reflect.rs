//! Reflect derive macro implementation.
//!
//! Generates an `enumtab::Reflect` impl plus a `const` uniqueness check.
//!
//! # Note
//!
//! The generated code names `::enumtab` by absolute path, so the deriving
//! crate must depend on `enumtab` under that name.

use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Attribute, Data, DataEnum, DeriveInput, Fields, Ident, LitStr};

use crate::case::RenameRule;

/// Main entry point for the Reflect derive macro.
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_reflect_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// A variant and the name it reflects as.
struct ReflectedVariant<'a> {
    ident: &'a Ident,
    name: String,
}

fn derive_reflect_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let data = validate_fieldless_enum(input)?;
    let rename_all = parse_enum_attributes(&input.attrs)?;
    let variants = collect_variants(data, rename_all)?;

    let name = &input.ident;
    let type_name = name.unraw().to_string();
    let idents: Vec<_> = variants.iter().map(|v| v.ident).collect();
    let names: Vec<_> = variants.iter().map(|v| v.name.as_str()).collect();
    let indices: Vec<_> = (0..variants.len()).map(Literal::usize_unsuffixed).collect();

    Ok(quote! {
        #[automatically_derived]
        #[allow(clippy::cast_lossless, clippy::cast_possible_wrap)]
        impl ::enumtab::Reflect for #name {
            const TYPE_NAME: &'static str = #type_name;

            const VARIANTS: &'static [Self] = &[#(Self::#idents),*];

            const ENTRIES: &'static [::enumtab::EnumEntry] = &[
                #(::enumtab::EnumEntry::new(Self::#idents as i64, #names)),*
            ];

            fn table() -> &'static ::enumtab::EnumTable {
                static TABLE: ::std::sync::OnceLock<::enumtab::EnumTable> =
                    ::std::sync::OnceLock::new();
                TABLE.get_or_init(|| {
                    ::enumtab::__private::checked_table(
                        <Self as ::enumtab::Reflect>::TYPE_NAME,
                        <Self as ::enumtab::Reflect>::ENTRIES,
                    )
                })
            }

            fn index(self) -> usize {
                match self {
                    #(Self::#idents => #indices,)*
                }
            }
        }

        const _: () = ::enumtab::__private::assert_unique(
            <#name as ::enumtab::Reflect>::ENTRIES
        );
    })
}

/// Accept only non-generic enums whose variants are all unit variants.
fn validate_fieldless_enum(input: &DeriveInput) -> syn::Result<&DataEnum> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Reflect derive only supports enums",
        ));
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Reflect derive does not support generic enums",
        ));
    }

    let mut errors: Option<syn::Error> = None;
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            let err = syn::Error::new_spanned(
                variant,
                "Reflect derive only supports variants without fields",
            );
            combine(&mut errors, err);
        }
    }

    match errors {
        Some(err) => Err(err),
        None => Ok(data),
    }
}

/// Parse `#[reflect(rename_all = "...")]` on the enum.
fn parse_enum_attributes(attrs: &[Attribute]) -> syn::Result<Option<RenameRule>> {
    let mut rename_all = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident("reflect")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let lit: LitStr = meta.value()?.parse()?;
                let Some(rule) = RenameRule::from_name(&lit.value()) else {
                    return Err(syn::Error::new_spanned(
                        &lit,
                        format!(
                            "unknown rename_all convention, expected one of {}",
                            RenameRule::expected()
                        ),
                    ));
                };
                rename_all = Some(rule);
                Ok(())
            } else {
                Err(meta.error("unknown reflect attribute, expected `rename_all`"))
            }
        })?;
    }

    Ok(rename_all)
}

/// Parse `#[reflect(rename = "...")]` on a variant.
fn parse_variant_rename(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut rename = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident("reflect")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(syn::Error::new_spanned(&lit, "reflected name cannot be empty"));
                }
                rename = Some(lit);
                Ok(())
            } else {
                Err(meta.error("unknown reflect attribute, expected `rename`"))
            }
        })?;
    }

    Ok(rename)
}

/// Resolve every variant's name and reject duplicates.
fn collect_variants(
    data: &DataEnum,
    rename_all: Option<RenameRule>,
) -> syn::Result<Vec<ReflectedVariant<'_>>> {
    let mut variants: Vec<ReflectedVariant<'_>> = Vec::with_capacity(data.variants.len());
    let mut errors: Option<syn::Error> = None;

    for variant in &data.variants {
        let rename = match parse_variant_rename(&variant.attrs) {
            Ok(rename) => rename,
            Err(err) => {
                combine(&mut errors, err);
                continue;
            }
        };

        let ident = &variant.ident;
        let name = match (&rename, rename_all) {
            (Some(lit), _) => lit.value(),
            (None, Some(rule)) => rule.apply(&ident.unraw().to_string()),
            (None, None) => ident.unraw().to_string(),
        };

        // `rename_all` can erase an identifier made only of underscores.
        if name.is_empty() {
            combine(
                &mut errors,
                syn::Error::new_spanned(ident, "reflected name cannot be empty"),
            );
            continue;
        }

        if let Some(first) = variants.iter().find(|v| v.name == name) {
            let err = syn::Error::new_spanned(
                ident,
                format!(
                    "duplicate reflected name `{name}` (already used by `{}`)",
                    first.ident
                ),
            );
            combine(&mut errors, err);
            continue;
        }

        variants.push(ReflectedVariant { ident, name });
    }

    match errors {
        Some(err) => Err(err),
        None => Ok(variants),
    }
}

fn combine(errors: &mut Option<syn::Error>, err: syn::Error) {
    match errors {
        Some(existing) => existing.combine(err),
        None => *errors = Some(err),
    }
}

#[cfg(test)]
mod tests;
