//! Command handlers for the demo CLI.
//!
//! Each handler prints to stdout and exits non-zero on bad input. The
//! `format_*` helpers build the output text and are what the tests check.

use enumtab::Reflect;

use crate::Color;

/// Print the fixed demo: one name lookup, then one parse.
pub fn run_demo() {
    for line in demo_lines() {
        println!("{line}");
    }
}

pub fn demo_lines() -> Vec<String> {
    let mut lines = vec![format!("Color: {}", Color::Green.name())];
    if let Some(line) = format_parsed("Red", false) {
        lines.push(line);
    }
    lines
}

/// The `name` command: print the name for a discriminant.
pub fn show_name(arg: &str) {
    let Ok(value) = arg.parse::<i64>() else {
        eprintln!("error: `{arg}` is not an integer");
        std::process::exit(1);
    };
    println!("{}", format_name(value));
}

/// `Color: <name>`, or `Color: <unknown N>` for an unmapped value.
pub fn format_name(value: i64) -> String {
    let table = Color::table();
    if !table.contains_value(value) {
        tracing::debug!(value, "no Color enumerator for value");
    }
    format!("{}: {}", table.type_name(), table.display(value))
}

/// The `parse` command: print the discriminant for a name.
pub fn parse_name(arg: &str, ignore_case: bool) {
    let Some(line) = format_parsed(arg, ignore_case) else {
        eprintln!("error: unknown {} name `{arg}`", Color::TYPE_NAME);
        std::process::exit(1);
    };
    println!("{line}");
}

pub fn format_parsed(name: &str, ignore_case: bool) -> Option<String> {
    let parsed = if ignore_case {
        Color::from_name_ignore_case(name)
    } else {
        Color::from_name(name)
    };
    tracing::debug!(name, ignore_case, found = parsed.is_some(), "parsed Color name");
    parsed.map(|color| format!("Parsed enum: {}", color.discriminant()))
}

/// The `list` command: one `value<TAB>name` line per enumerator.
pub fn list_colors() {
    for line in list_lines() {
        println!("{line}");
    }
}

pub fn list_lines() -> Vec<String> {
    Color::table()
        .entries()
        .iter()
        .map(|entry| format!("{}\t{}", entry.value, entry.name))
        .collect()
}
