//! `#[derive(Reflect)]` as seen from a downstream crate.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use enumtab::{Conflict, EnumEntry, EnumTable, Reflect, TableError};
use pretty_assertions::assert_eq;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
#[repr(i16)]
enum Offset {
    Back = -2,
    Stay = 0,
    Skip = 7,
    After,
}

const BASE: u8 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
#[repr(u8)]
enum Computed {
    First = BASE,
    Second = BASE + 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
#[reflect(rename_all = "SCREAMING_SNAKE_CASE")]
enum Status {
    NotStarted,
    InProgress,
    #[reflect(rename = "done")]
    Finished,
}

#[derive(Clone, Copy, Debug, Reflect)]
enum Never {}

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
enum Keyword {
    r#type,
    r#match,
}

#[test]
fn color_scenario() {
    let table = Color::table();
    assert_eq!(table.name_of(1), Ok("Green"));
    assert_eq!(table.value_of("Red"), Some(0));
    assert_eq!(table.value_of("red"), None);
    assert_eq!(
        table.name_of(99),
        Err(TableError::NotFound {
            type_name: "Color",
            value: 99,
        })
    );
}

#[test]
fn color_metadata() {
    assert_eq!(Color::TYPE_NAME, "Color");
    assert_eq!(Color::COUNT, 3);
    assert_eq!(
        Color::ENTRIES,
        &[
            EnumEntry::new(0, "Red"),
            EnumEntry::new(1, "Green"),
            EnumEntry::new(2, "Blue"),
        ]
    );
    assert_eq!(Color::Blue.index(), 2);
}

#[test]
fn explicit_and_implicit_discriminants() {
    assert_eq!(Offset::Back.discriminant(), -2);
    assert_eq!(Offset::After.discriminant(), 8);
    assert_eq!(Offset::from_discriminant(-2), Some(Offset::Back));
    assert_eq!(Offset::from_discriminant(1), None);
    assert_eq!(Offset::table().name_of(8), Ok("After"));
    assert_eq!(Offset::table().display(3).to_string(), "<unknown 3>");
}

#[test]
fn const_expression_discriminants() {
    assert_eq!(Computed::Second.discriminant(), 42);
    assert_eq!(Computed::table().value_of("First"), Some(40));
}

#[test]
fn renamed_variants() {
    assert_eq!(Status::NotStarted.name(), "NOT_STARTED");
    assert_eq!(Status::InProgress.name(), "IN_PROGRESS");
    assert_eq!(Status::Finished.name(), "done");
    assert_eq!(Status::from_name("done"), Some(Status::Finished));
    assert_eq!(Status::from_name("Finished"), None);
    assert_eq!(
        Status::from_name_ignore_case("in_progress"),
        Some(Status::InProgress)
    );
}

#[test]
fn raw_identifiers_reflect_as_plain_words() {
    assert_eq!(Keyword::r#type.name(), "type");
    assert_eq!(Keyword::r#match.name(), "match");
    assert_eq!(Keyword::from_name("type"), Some(Keyword::r#type));
    assert_eq!(Keyword::from_name("r#type"), None);
    assert_eq!(Keyword::table().names().collect::<Vec<_>>(), ["type", "match"]);
}

#[test]
fn empty_enum() {
    assert_eq!(Never::COUNT, 0);
    assert!(Never::table().is_empty());
    assert!(Never::from_name("anything").is_none());
}

#[test]
fn round_trips_for_every_variant() {
    fn check<T: Reflect + PartialEq + std::fmt::Debug>() {
        let table = T::table();
        for &variant in T::VARIANTS {
            let value = variant.discriminant();
            let name = table.name_of(value).unwrap();
            assert_eq!(name, variant.name());
            assert_eq!(table.value_of(name), Some(value));
            assert_eq!(T::from_name(name), Some(variant));
        }
    }

    check::<Color>();
    check::<Offset>();
    check::<Computed>();
    check::<Status>();
    check::<Keyword>();
}

#[test]
fn derived_table_is_built_once() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| std::ptr::from_ref(Color::table()) as usize))
        .collect();
    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.iter().all(|&a| a == addrs[0]));
}

#[test]
fn hand_built_table_with_duplicate_fails() {
    let err = EnumTable::new(
        "Color",
        vec![EnumEntry::new(0, "Red"), EnumEntry::new(0, "Crimson")],
    )
    .unwrap_err();
    assert_eq!(
        err,
        TableError::DuplicateDefinition {
            type_name: "Color",
            conflict: Conflict::Value(0),
        }
    );
}
