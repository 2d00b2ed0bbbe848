//! HTTP date transition tables
//!
//! The grammar, row by row. Shared fragments (weekday abbreviations, month
//! abbreviations, the `HH:MM:SS` clock) are standalone tables reused by the
//! three format tables through `Table` matchers; the year fields use custom
//! match functions because a fixed-width number assembled digit by digit
//! over a private accumulator reads better as a function than as alternation.
//!
//! Ordering notes baked into the rows:
//! - Format selection is plain ordered choice: RFC 1123, then RFC 850, then
//!   asctime, exactly like every other decision point in the engine.
//! - The asctime day-of-month state tries a digit before a space, so both
//!   `"16"` and `" 6"` parse and the padding space never reaches the digit
//!   actions.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::sync::Arc;

use crate::machine::{run, Action, Cursor, Matcher, RunError, TransitionTable};

use super::date::{HttpDate, Month, Weekday};

const DIGITS: &str = "0123456789";

type Table = Arc<TransitionTable<HttpDate>>;

// ============================================================================
// ACTIONS
// ============================================================================

/// Numeric value of the first byte of a matched digit slice. Only ever
/// called on slices produced by a `one_of(DIGITS)` match.
fn digit_value(text: &str) -> u32 {
    text.bytes().next().map(|b| u32::from(b - b'0')).unwrap_or(0)
}

fn set_weekday(weekday: Weekday) -> Action<HttpDate> {
    Arc::new(move |_text, date: &mut HttpDate| date.weekday = Some(weekday))
}

fn set_month(month: Month) -> Action<HttpDate> {
    Arc::new(move |_text, date: &mut HttpDate| date.month = Some(month))
}

fn day_tens() -> Action<HttpDate> {
    Arc::new(|text, date: &mut HttpDate| date.day = 10 * digit_value(text))
}

fn day_ones() -> Action<HttpDate> {
    Arc::new(|text, date: &mut HttpDate| date.day += digit_value(text))
}

#[derive(Clone, Copy)]
enum ClockField {
    Hour,
    Minute,
    Second,
}

fn clock_tens(field: ClockField) -> Action<HttpDate> {
    Arc::new(move |text, date: &mut HttpDate| {
        *clock_slot(date, field) = 10 * digit_value(text);
    })
}

fn clock_ones(field: ClockField) -> Action<HttpDate> {
    Arc::new(move |text, date: &mut HttpDate| {
        *clock_slot(date, field) += digit_value(text);
    })
}

fn clock_slot(date: &mut HttpDate, field: ClockField) -> &mut u32 {
    match field {
        ClockField::Hour => &mut date.hour,
        ClockField::Minute => &mut date.minute,
        ClockField::Second => &mut date.second,
    }
}

// ============================================================================
// YEAR FIELDS
// ============================================================================
//
// Both year parsers run a private table over a local i32 accumulator, one
// digit-weight action per position, then commit the finished number into
// the date. The two deliberately differ: the 4-digit parser stores the
// tm_year offset (year - 1900), the 2-digit parser stores the literal
// two-digit value untouched. See `HttpDate::year`.

fn year_digit(weight: i32) -> Action<i32> {
    Arc::new(move |text, year: &mut i32| *year += digit_value(text) as i32 * weight)
}

static YEAR4: Lazy<Arc<TransitionTable<i32>>> = Lazy::new(|| {
    Arc::new(
        TransitionTable::builder("year4")
            .transition_with(0, Matcher::one_of(DIGITS), 1, year_digit(1000))
            .transition_with(1, Matcher::one_of(DIGITS), 2, year_digit(100))
            .transition_with(2, Matcher::one_of(DIGITS), 3, year_digit(10))
            .accept_with(3, Matcher::one_of(DIGITS), year_digit(1))
            .build()
            .expect("year4 table is well-formed"),
    )
});

static YEAR2: Lazy<Arc<TransitionTable<i32>>> = Lazy::new(|| {
    Arc::new(
        TransitionTable::builder("year2")
            .transition_with(0, Matcher::one_of(DIGITS), 1, year_digit(10))
            .accept_with(1, Matcher::one_of(DIGITS), year_digit(1))
            .build()
            .expect("year2 table is well-formed"),
    )
});

fn parse_year4(cursor: &mut Cursor<'_>, date: &mut HttpDate) -> Option<usize> {
    let mut year = 0i32;
    let consumed = run(&YEAR4, cursor, &mut year).ok()?;
    date.year = year - 1900;
    Some(consumed)
}

fn parse_year2(cursor: &mut Cursor<'_>, date: &mut HttpDate) -> Option<usize> {
    let mut year = 0i32;
    let consumed = run(&YEAR2, cursor, &mut year).ok()?;
    date.year = year;
    Some(consumed)
}

// ============================================================================
// SHARED FRAGMENTS
// ============================================================================

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

static WEEKDAY_ABBREV: Lazy<Table> = Lazy::new(|| {
    let mut builder = TransitionTable::builder("wkday");
    for weekday in WEEKDAYS {
        builder = builder.accept_with(
            0,
            Matcher::literal(weekday.abbrev()),
            set_weekday(weekday),
        );
    }
    Arc::new(builder.build().expect("wkday table is well-formed"))
});

static MONTH_ABBREV: Lazy<Table> = Lazy::new(|| {
    let mut builder = TransitionTable::builder("month");
    for month in MONTHS {
        builder = builder.accept_with(0, Matcher::literal(month.abbrev()), set_month(month));
    }
    Arc::new(builder.build().expect("month table is well-formed"))
});

/// `2DIGIT ":" 2DIGIT ":" 2DIGIT`, 00:00:00 through 23:59:59 by shape
/// (digit ranges are not narrowed per field).
static CLOCK: Lazy<Table> = Lazy::new(|| {
    Arc::new(
        TransitionTable::builder("clock")
            .transition_with(0, Matcher::one_of(DIGITS), 1, clock_tens(ClockField::Hour))
            .transition_with(1, Matcher::one_of(DIGITS), 2, clock_ones(ClockField::Hour))
            .transition(2, Matcher::literal(":"), 3)
            .transition_with(3, Matcher::one_of(DIGITS), 4, clock_tens(ClockField::Minute))
            .transition_with(4, Matcher::one_of(DIGITS), 5, clock_ones(ClockField::Minute))
            .transition(5, Matcher::literal(":"), 6)
            .transition_with(6, Matcher::one_of(DIGITS), 7, clock_tens(ClockField::Second))
            .accept_with(7, Matcher::one_of(DIGITS), clock_ones(ClockField::Second))
            .build()
            .expect("clock table is well-formed"),
    )
});

// ============================================================================
// FORMAT TABLES
// ============================================================================

/// `Sun, 06 Nov 1994 08:49:37 GMT`
static RFC1123: Lazy<Table> = Lazy::new(|| {
    Arc::new(
        TransitionTable::builder("rfc1123")
            .transition(0, Matcher::table(weekday_abbrev()), 1)
            .transition(1, Matcher::literal(", "), 2)
            .transition_with(2, Matcher::one_of(DIGITS), 3, day_tens())
            .transition_with(3, Matcher::one_of(DIGITS), 4, day_ones())
            .transition(4, Matcher::literal(" "), 5)
            .transition(5, Matcher::table(month_abbrev()), 6)
            .transition(6, Matcher::literal(" "), 7)
            .transition(7, Matcher::func(parse_year4), 8)
            .transition(8, Matcher::literal(" "), 9)
            .transition(9, Matcher::table(clock()), 10)
            .accept(10, Matcher::literal(" GMT"))
            .build()
            .expect("rfc1123 table is well-formed"),
    )
});

/// `Sunday, 06-Nov-94 08:49:37 GMT`
static RFC850: Lazy<Table> = Lazy::new(|| {
    let mut builder = TransitionTable::builder("rfc850");
    for weekday in WEEKDAYS {
        builder = builder.transition_with(
            0,
            Matcher::literal(weekday.name()),
            1,
            set_weekday(weekday),
        );
    }
    Arc::new(
        builder
            .transition(1, Matcher::literal(", "), 2)
            .transition_with(2, Matcher::one_of(DIGITS), 3, day_tens())
            .transition_with(3, Matcher::one_of(DIGITS), 4, day_ones())
            .transition(4, Matcher::literal("-"), 5)
            .transition(5, Matcher::table(month_abbrev()), 6)
            .transition(6, Matcher::literal("-"), 7)
            .transition(7, Matcher::func(parse_year2), 8)
            .transition(8, Matcher::literal(" "), 9)
            .transition(9, Matcher::table(clock()), 10)
            .accept(10, Matcher::literal(" GMT"))
            .build()
            .expect("rfc850 table is well-formed"),
    )
});

/// `Sun Nov  6 08:49:37 1994`
static ASCTIME: Lazy<Table> = Lazy::new(|| {
    Arc::new(
        TransitionTable::builder("asctime")
            .transition(0, Matcher::table(weekday_abbrev()), 1)
            .labeled("weekday")
            .transition(1, Matcher::literal(" "), 2)
            .transition(2, Matcher::table(month_abbrev()), 3)
            .transition(3, Matcher::literal(" "), 4)
            // Single-digit days are space-padded; digit first, space second.
            .transition_with(4, Matcher::one_of(DIGITS), 5, day_tens())
            .transition(4, Matcher::literal(" "), 5)
            .transition_with(5, Matcher::one_of(DIGITS), 6, day_ones())
            .transition(6, Matcher::literal(" "), 7)
            .transition(7, Matcher::table(clock()), 8)
            .transition(8, Matcher::literal(" "), 9)
            .accept(9, Matcher::func(parse_year4))
            .build()
            .expect("asctime table is well-formed"),
    )
});

/// The outer 3-way ordered choice over one shared accumulator.
static HTTP_DATE: Lazy<Table> = Lazy::new(|| {
    Arc::new(
        TransitionTable::builder("http_date")
            .accept(0, Matcher::table(rfc1123()))
            .labeled("rfc1123")
            .accept(0, Matcher::table(rfc850()))
            .labeled("rfc850")
            .accept(0, Matcher::table(asctime()))
            .labeled("asctime")
            .build()
            .expect("http_date table is well-formed"),
    )
});

/// The weekday-abbreviation table (`"Mon"` ... `"Sun"`).
pub fn weekday_abbrev() -> Table {
    Arc::clone(&WEEKDAY_ABBREV)
}

/// The month-abbreviation table (`"Jan"` ... `"Dec"`).
pub fn month_abbrev() -> Table {
    Arc::clone(&MONTH_ABBREV)
}

/// The `HH:MM:SS` clock table.
pub fn clock() -> Table {
    Arc::clone(&CLOCK)
}

/// The RFC 1123 date table.
pub fn rfc1123() -> Table {
    Arc::clone(&RFC1123)
}

/// The RFC 850 date table.
pub fn rfc850() -> Table {
    Arc::clone(&RFC850)
}

/// The asctime date table.
pub fn asctime() -> Table {
    Arc::clone(&ASCTIME)
}

/// The combined HTTP-date table: RFC 1123, else RFC 850, else asctime.
///
/// All three alternatives write into the same accumulator; a failed
/// alternative's partial writes stay visible to the next one (the engine is
/// not transactional). [`parse_http_date`] avoids that by giving each
/// alternative a fresh accumulator.
pub fn http_date() -> Table {
    Arc::clone(&HTTP_DATE)
}

// ============================================================================
// CONVENIENCE ENTRY POINT
// ============================================================================

/// Which of the three formats a date matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    Rfc1123,
    Rfc850,
    Asctime,
}

impl DateFormat {
    /// Human-readable format name.
    pub fn name(self) -> &'static str {
        match self {
            DateFormat::Rfc1123 => "rfc1123",
            DateFormat::Rfc850 => "rfc850",
            DateFormat::Asctime => "asctime",
        }
    }

    /// A canonical example of the format.
    pub fn example(self) -> &'static str {
        match self {
            DateFormat::Rfc1123 => "Sun, 06 Nov 1994 08:49:37 GMT",
            DateFormat::Rfc850 => "Sunday, 06-Nov-94 08:49:37 GMT",
            DateFormat::Asctime => "Sun Nov  6 08:49:37 1994",
        }
    }
}

/// A successfully parsed HTTP date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDate {
    pub format: DateFormat,
    /// Bytes of input consumed by the accepted parse.
    pub consumed: usize,
    pub date: HttpDate,
}

/// Parse `input` as an HTTP date, trying RFC 1123, RFC 850 and asctime in
/// that order.
///
/// Each alternative gets a fresh accumulator, so partial writes from a
/// failed attempt cannot bleed into the next one. The returned error is the
/// one from the last alternative tried.
pub fn parse_http_date(input: &str) -> Result<ParsedDate, RunError> {
    let attempts = [
        (DateFormat::Rfc1123, rfc1123()),
        (DateFormat::Rfc850, rfc850()),
        (DateFormat::Asctime, asctime()),
    ];

    let mut last_err = None;
    for (format, table) in attempts {
        let mut date = HttpDate::default();
        let mut cursor = Cursor::new(input);
        match run(&table, &mut cursor, &mut date) {
            Ok(consumed) => {
                return Ok(ParsedDate {
                    format,
                    consumed,
                    date,
                })
            }
            Err(err) => last_err = Some(err),
        }
    }

    Err(last_err.unwrap_or_else(|| RunError::NoMatch {
        table: "http_date".to_string(),
        state: 0,
        label: None,
    }))
}
