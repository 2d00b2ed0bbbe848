//! HTTP Date Grammar - Sample Grammar Library
//!
//! A complete grammar built on the [`crate::machine`] engine, parsing the
//! three date formats HTTP allows (RFC 2616 section 3.1.1):
//!
//! ```text
//! HTTP-date    = rfc1123-date | rfc850-date | asctime-date
//! rfc1123-date = wkday "," SP date1 SP time SP "GMT"
//! rfc850-date  = weekday "," SP date2 SP time SP "GMT"
//! asctime-date = wkday SP date3 SP time SP 4DIGIT
//! ```
//!
//! The grammar is data, not code: every format is a transition table, and
//! the shared pieces (weekday names, month names, the clock) are tables of
//! their own that the format tables delegate to.

pub mod date;
pub mod grammar;

pub use date::{HttpDate, Month, Weekday};
pub use grammar::{parse_http_date, DateFormat, ParsedDate};
