//! enumtab demo CLI
//!
//! Prints and parses `Color` values through its reflected name table.

use enumtab_demo::commands::{list_colors, parse_name, run_demo, show_name};
use enumtab_demo::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        run_demo();
        return;
    };

    match command.as_str() {
        "name" => {
            let Some(value) = args.get(2) else {
                eprintln!("Usage: enumtab-demo name <value>");
                std::process::exit(1);
            };
            show_name(value);
        }
        "parse" => {
            let mut ignore_case = false;
            let mut name = None;

            for arg in args.iter().skip(2) {
                if arg == "--ignore-case" || arg == "-i" {
                    ignore_case = true;
                } else if name.is_none() {
                    name = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument `{arg}`");
                    eprintln!("Usage: enumtab-demo parse <name> [--ignore-case]");
                    std::process::exit(1);
                }
            }

            let Some(name) = name else {
                eprintln!("error: missing name");
                eprintln!("Usage: enumtab-demo parse <name> [--ignore-case]");
                std::process::exit(1);
            };
            parse_name(name, ignore_case);
        }
        "list" => list_colors(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("enumtab-demo - enum name table demo");
    println!();
    println!("Usage: enumtab-demo [command] [args]");
    println!();
    println!("With no command, prints `Color: Green` and `Parsed enum: 0`.");
    println!();
    println!("Commands:");
    println!("  name <value>                  Print the Color name for a discriminant");
    println!("  parse <name> [--ignore-case]  Print the discriminant for a Color name");
    println!("  list                          List every Color enumerator");
    println!("  help                          Show this message");
    println!();
    println!("Set RUST_LOG=enumtab=debug to trace table construction.");
}
