//! Command-line interface for fsmatch
//! This binary parses HTTP-style dates (RFC 1123, RFC 850, asctime) through
//! the table-driven matching engine.
//!
//! Usage:
//!   fsmatch parse `<date>` [--format `<format>`]  - Parse a date given as an argument
//!   fsmatch parse [--format `<format>`]           - Parse one line read from stdin
//!   fsmatch formats                             - List the supported date formats
//!
//! Exit status: 0 on success, 1 when the date matches no format, 2 when the
//! input cannot be read.

use clap::{Arg, Command};
use std::io::{self, BufRead};
use std::process;

use fsmatch::httpdate::{parse_http_date, DateFormat, ParsedDate};

fn main() {
    let matches = Command::new("fsmatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A table-driven finite-state matcher for HTTP dates")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse an HTTP-style date")
                .arg(
                    Arg::new("date")
                        .help("The date to parse; read from stdin when omitted")
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('pretty', 'asctime', 'json')")
                        .default_value("pretty"),
                ),
        )
        .subcommand(Command::new("formats").about("List the supported date formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let date = parse_matches.get_one::<String>("date").cloned();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(date, format);
        }
        Some(("formats", _)) => {
            handle_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the parse command
fn handle_parse_command(date: Option<String>, format: &str) {
    let input = match date {
        Some(date) => date,
        None => read_line_from_stdin().unwrap_or_else(|e| {
            eprintln!("Error reading input: {}", e);
            process::exit(2);
        }),
    };

    let parsed = parse_http_date(input.trim_end()).unwrap_or_else(|e| {
        eprintln!("Not an HTTP date: {}", e);
        process::exit(1);
    });

    print!("{}", render(&parsed, format));
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Supported date formats:\n");
    for format in [DateFormat::Rfc1123, DateFormat::Rfc850, DateFormat::Asctime] {
        println!("  {:<8} e.g. {}", format.name(), format.example());
    }
}

fn read_line_from_stdin() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn render(parsed: &ParsedDate, format: &str) -> String {
    match format {
        "asctime" => format!("{}\n", parsed.date.to_asctime()),
        "json" => {
            let json = serde_json::to_string_pretty(parsed).unwrap_or_else(|e| {
                eprintln!("Error serializing result: {}", e);
                process::exit(2);
            });
            format!("{}\n", json)
        }
        _ => format!(
            "{} ({} bytes, {})\n",
            parsed.date.to_asctime(),
            parsed.consumed,
            parsed.format.name()
        ),
    }
}
