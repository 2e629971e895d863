#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;
use syn::parse_quote;

/// Expanded tokens with all whitespace removed.
fn expand(input: &DeriveInput) -> String {
    compact(
        &derive_reflect_impl(input)
            .expect("derive should succeed")
            .to_string(),
    )
}

fn compact(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn error(input: &DeriveInput) -> String {
    match derive_reflect_impl(input) {
        Ok(tokens) => panic!("expected an error, got {tokens}"),
        Err(err) => err
            .into_iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[test]
fn test_expands_names_in_declaration_order() {
    let input: DeriveInput = parse_quote! {
        enum Color { Red, Green, Blue }
    };
    let out = expand(&input);
    assert!(out.contains(&compact("impl ::enumtab::Reflect for Color")));
    assert!(out.contains(&compact("const TYPE_NAME: &'static str = \"Color\"")));
    let red = out.find("\"Red\"").unwrap();
    let green = out.find("\"Green\"").unwrap();
    let blue = out.find("\"Blue\"").unwrap();
    assert!(red < green && green < blue);
    assert!(out.contains("assert_unique"));
}

#[test]
fn test_rename_overrides_rename_all() {
    let data: DeriveInput = parse_quote! {
        #[reflect(rename_all = "kebab-case")]
        enum Mode {
            ReadOnly,
            #[reflect(rename = "rw")]
            ReadWrite,
        }
    };
    let Data::Enum(body) = &data.data else {
        panic!("not an enum");
    };
    let rule = parse_enum_attributes(&data.attrs).unwrap();
    let names: Vec<_> = collect_variants(body, rule)
        .unwrap()
        .into_iter()
        .map(|v| v.name)
        .collect();
    assert_eq!(names, ["read-only", "rw"]);
}

#[test]
fn test_empty_enum_expands() {
    let input: DeriveInput = parse_quote! {
        enum Never {}
    };
    let out = expand(&input);
    assert!(out.contains(&compact("const VARIANTS: &'static [Self] = &[];")));
    assert!(out.contains(&compact("match self {}")));
}

#[test]
fn test_rejects_struct() {
    let input: DeriveInput = parse_quote! {
        struct Point { x: i32 }
    };
    assert_eq!(error(&input), "Reflect derive only supports enums");
}

#[test]
fn test_rejects_generics() {
    let input: DeriveInput = parse_quote! {
        enum Wrapper<T> { A, B }
    };
    assert_eq!(error(&input), "Reflect derive does not support generic enums");
}

#[test]
fn test_rejects_every_field_variant() {
    let input: DeriveInput = parse_quote! {
        enum Shape { Circle(u32), Square, Rect { w: u32, h: u32 } }
    };
    let msg = error(&input);
    assert_eq!(msg.matches("without fields").count(), 2);
}

#[test]
fn test_rejects_duplicate_names() {
    let input: DeriveInput = parse_quote! {
        enum Clash {
            First,
            #[reflect(rename = "First")]
            Second,
        }
    };
    assert_eq!(
        error(&input),
        "duplicate reflected name `First` (already used by `First`)"
    );
}

#[test]
fn test_rejects_collision_after_rename_all() {
    let input: DeriveInput = parse_quote! {
        #[reflect(rename_all = "lowercase")]
        enum Clash { ReadOnly, Readonly }
    };
    assert_eq!(
        error(&input),
        "duplicate reflected name `readonly` (already used by `ReadOnly`)"
    );
}

#[test]
fn test_rejects_empty_rename() {
    let input: DeriveInput = parse_quote! {
        enum Blank {
            #[reflect(rename = "")]
            Nothing,
        }
    };
    assert_eq!(error(&input), "reflected name cannot be empty");
}

#[test]
fn test_rejects_unknown_convention() {
    let input: DeriveInput = parse_quote! {
        #[reflect(rename_all = "Title Case")]
        enum Bad { One }
    };
    assert!(error(&input).starts_with("unknown rename_all convention"));
}

#[test]
fn test_rejects_unknown_keys() {
    let on_enum: DeriveInput = parse_quote! {
        #[reflect(skip)]
        enum Bad { One }
    };
    assert_eq!(
        error(&on_enum),
        "unknown reflect attribute, expected `rename_all`"
    );

    let on_variant: DeriveInput = parse_quote! {
        enum Bad {
            #[reflect(rename_all = "lowercase")]
            One,
        }
    };
    assert_eq!(
        error(&on_variant),
        "unknown reflect attribute, expected `rename`"
    );
}

#[test]
fn test_rejects_name_emptied_by_rename_all() {
    let input: DeriveInput = parse_quote! {
        #[reflect(rename_all = "snake_case")]
        enum Under { __, A }
    };
    assert_eq!(error(&input), "reflected name cannot be empty");
}

#[test]
fn test_raw_identifiers_reflect_without_prefix() {
    let input: DeriveInput = parse_quote! {
        enum r#Keyword { r#type, r#match }
    };
    let out = expand(&input);
    assert!(out.contains(&compact("const TYPE_NAME: &'static str = \"Keyword\"")));
    assert!(out.contains("\"type\""));
    assert!(out.contains("\"match\""));
    assert!(!out.contains("\"r#type\""));
    // The paths themselves keep the raw form.
    assert!(out.contains("Self::r#type"));
}

#[test]
fn test_rename_all_sees_unprefixed_identifier() {
    let data: DeriveInput = parse_quote! {
        #[reflect(rename_all = "UPPERCASE")]
        enum Keyword { r#loop, Plain }
    };
    let Data::Enum(body) = &data.data else {
        panic!("not an enum");
    };
    let rule = parse_enum_attributes(&data.attrs).unwrap();
    let names: Vec<_> = collect_variants(body, rule)
        .unwrap()
        .into_iter()
        .map(|v| v.name)
        .collect();
    assert_eq!(names, ["LOOP", "PLAIN"]);
}
