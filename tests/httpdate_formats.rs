//! End-to-end tests for the HTTP date grammar
//!
//! Exercises the three date formats through both the convenience entry point
//! and the raw combined table, including the deliberate 2-digit/4-digit year
//! asymmetry inherited from the protocol parsers.

use fsmatch::httpdate::{
    grammar::{self, parse_http_date},
    DateFormat, HttpDate, Month, Weekday,
};
use fsmatch::machine::{run, Cursor};
use rstest::rstest;

#[test]
fn rfc1123_date_fills_every_field() {
    let parsed = parse_http_date("Sun, 06 Nov 1994 08:49:37 GMT").unwrap();
    assert_eq!(parsed.format, DateFormat::Rfc1123);
    assert_eq!(parsed.consumed, 29);
    assert_eq!(
        parsed.date,
        HttpDate {
            weekday: Some(Weekday::Sunday),
            day: 6,
            month: Some(Month::November),
            // 4-digit parse stores the tm_year offset.
            year: 94,
            hour: 8,
            minute: 49,
            second: 37,
        }
    );
}

#[test]
fn rfc850_date_keeps_the_raw_two_digit_year() {
    let parsed = parse_http_date("Sunday, 06-Nov-94 08:49:37 GMT").unwrap();
    assert_eq!(parsed.format, DateFormat::Rfc850);
    assert_eq!(parsed.consumed, 30);
    // Same fields as the RFC 1123 form, but the year comes from the 2-digit
    // parser: the literal value 94, no century adjustment.
    assert_eq!(parsed.date.year, 94);
    assert_eq!(parsed.date.weekday, Some(Weekday::Sunday));
    assert_eq!(parsed.date.day, 6);
    assert_eq!(parsed.date.month, Some(Month::November));
    assert_eq!(parsed.date.hour, 8);
    assert_eq!(parsed.date.minute, 49);
    assert_eq!(parsed.date.second, 37);
}

#[test]
fn asctime_date_accepts_space_padded_day() {
    let parsed = parse_http_date("Sun Nov  6 08:49:37 1994").unwrap();
    assert_eq!(parsed.format, DateFormat::Asctime);
    assert_eq!(parsed.consumed, 24);
    assert_eq!(parsed.date.day, 6);
    assert_eq!(parsed.date.weekday, Some(Weekday::Sunday));
    assert_eq!(parsed.date.month, Some(Month::November));
    assert_eq!(parsed.date.year, 94);
    assert_eq!(parsed.date.hour, 8);
    assert_eq!(parsed.date.minute, 49);
    assert_eq!(parsed.date.second, 37);
}

#[test]
fn asctime_date_accepts_two_digit_day() {
    let parsed = parse_http_date("Sun Nov 16 08:49:37 1994").unwrap();
    assert_eq!(parsed.format, DateFormat::Asctime);
    assert_eq!(parsed.date.day, 16);
}

#[rstest]
#[case::monday("Mon, 01 Jan 2010 12:34:56 GMT", Weekday::Monday, Month::January, 1, 110)]
#[case::wednesday("Wed, 25 Dec 2024 23:59:59 GMT", Weekday::Wednesday, Month::December, 25, 124)]
#[case::friday("Fri, 09 Jul 2010 12:20:02 GMT", Weekday::Friday, Month::July, 9, 110)]
fn rfc1123_matrix(
    #[case] input: &str,
    #[case] weekday: Weekday,
    #[case] month: Month,
    #[case] day: u32,
    #[case] year: i32,
) {
    let parsed = parse_http_date(input).unwrap();
    assert_eq!(parsed.format, DateFormat::Rfc1123);
    assert_eq!(parsed.date.weekday, Some(weekday));
    assert_eq!(parsed.date.month, Some(month));
    assert_eq!(parsed.date.day, day);
    assert_eq!(parsed.date.year, year);
}

#[rstest]
#[case::rfc1123("Sun, 06 Nov 1994 08:49:37 GMT")]
#[case::rfc850("Sunday, 06-Nov-94 08:49:37 GMT")]
#[case::asctime("Sun Nov  6 08:49:37 1994")]
fn every_format_renders_the_same_asctime(#[case] input: &str) {
    let parsed = parse_http_date(input).unwrap();
    assert_eq!(parsed.date.to_asctime(), "Sun Nov  6 08:49:37 1994");
}

#[test]
fn trailing_input_is_left_unconsumed() {
    let parsed = parse_http_date("Sun, 06 Nov 1994 08:49:37 GMT and more").unwrap();
    assert_eq!(parsed.consumed, 29);
}

#[test]
fn not_a_date_fails_every_alternative() {
    assert!(parse_http_date("Not a date").is_err());

    // The raw combined table fails too; no alternative commits a success.
    let mut date = HttpDate::default();
    let mut cursor = Cursor::new("Not a date");
    assert!(run(&grammar::http_date(), &mut cursor, &mut date).is_err());
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn combined_table_uses_outer_ordered_choice() {
    let mut date = HttpDate::default();
    let mut cursor = Cursor::new("Sun, 06 Nov 1994 08:49:37 GMT");
    assert_eq!(run(&grammar::http_date(), &mut cursor, &mut date), Ok(29));
    assert_eq!(date.weekday, Some(Weekday::Sunday));
    assert_eq!(date.day, 6);
}

#[test]
fn repeated_parses_are_bit_identical() {
    let input = "Sunday, 06-Nov-94 08:49:37 GMT";
    let first = parse_http_date(input).unwrap();
    let second = parse_http_date(input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn shared_table_fragments_are_reusable_on_their_own() {
    let mut date = HttpDate::default();
    let mut cursor = Cursor::new("Dec");
    assert_eq!(run(&grammar::month_abbrev(), &mut cursor, &mut date), Ok(3));
    assert_eq!(date.month, Some(Month::December));

    let mut date = HttpDate::default();
    let mut cursor = Cursor::new("23:59:59");
    assert_eq!(run(&grammar::clock(), &mut cursor, &mut date), Ok(8));
    assert_eq!((date.hour, date.minute, date.second), (23, 59, 59));
}

#[test]
fn incomplete_clock_fails_the_whole_parse() {
    assert!(parse_http_date("Sun, 06 Nov 1994 08:49 GMT").is_err());
}

#[test]
fn lowercase_month_is_rejected() {
    assert!(parse_http_date("Sun, 06 nov 1994 08:49:37 GMT").is_err());
}
