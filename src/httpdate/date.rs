//! Parsed date accumulator
//!
//! `HttpDate` is the global accumulator the date grammars write into. Its
//! field conventions mirror the C `struct tm` the original protocol parsers
//! used, most visibly in the year field (see [`HttpDate::year`]).

use serde::Serialize;

/// Day of the week, Sunday first (matches `tm_wday` numbering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// The 3-letter abbreviation used by all three HTTP date formats.
    pub fn abbrev(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }

    /// The full name used by the RFC 850 format.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

/// Month of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// The 3-letter abbreviation used by all three HTTP date formats.
    pub fn abbrev(self) -> &'static str {
        match self {
            Month::January => "Jan",
            Month::February => "Feb",
            Month::March => "Mar",
            Month::April => "Apr",
            Month::May => "May",
            Month::June => "Jun",
            Month::July => "Jul",
            Month::August => "Aug",
            Month::September => "Sep",
            Month::October => "Oct",
            Month::November => "Nov",
            Month::December => "Dec",
        }
    }
}

/// The parsed fields of an HTTP date.
///
/// Starts zeroed/empty and is filled in field by field as the grammar
/// matches. A failed parse can leave it partially filled; callers should
/// only read it after a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HttpDate {
    pub weekday: Option<Weekday>,
    /// Day of month, 1-31.
    pub day: u32,
    pub month: Option<Month>,
    /// Year in `tm_year` convention. The 4-digit parsers (RFC 1123, asctime)
    /// store `year - 1900`; the 2-digit parser (RFC 850) stores the literal
    /// two-digit value with no century adjustment. The two behave the same
    /// for 19xx years only; century disambiguation of a 2-digit year is the
    /// caller's responsibility.
    pub year: i32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl HttpDate {
    /// The year as `1900 + self.year`, the `struct tm` reading of the field.
    pub fn full_year(&self) -> i32 {
        1900 + self.year
    }

    /// Render in asctime layout: `"Sun Nov  6 08:49:37 1994"`.
    ///
    /// Missing weekday or month render as `"???"`.
    pub fn to_asctime(&self) -> String {
        format!(
            "{} {} {:>2} {:02}:{:02}:{:02} {}",
            self.weekday.map(Weekday::abbrev).unwrap_or("???"),
            self.month.map(Month::abbrev).unwrap_or("???"),
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.full_year()
        )
    }
}
