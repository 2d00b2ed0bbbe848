//! Matchers
//!
//! A matcher is the recognizer attached to a transition. The set is closed:
//! exact literal text, one character from a set, delegation to another
//! transition table, or delegation to a custom function. Matching is
//! all-or-nothing per transition; there is no partial match reporting.

use std::fmt;
use std::sync::Arc;

use super::cursor::Cursor;
use super::engine;
use super::table::TransitionTable;

/// A custom match function: consumes input from the cursor, may write into
/// the accumulator directly, and reports the number of bytes it consumed, or
/// `None` on failure.
///
/// This is the escape hatch for sub-grammars whose natural expression is
/// iterative rather than alternation-based (e.g. a fixed-width numeric field
/// assembled digit by digit). It integrates through the same
/// consumed-length-or-failure contract as every other matcher.
pub type MatchFn<G> =
    Arc<dyn for<'a> Fn(&mut Cursor<'a>, &mut G) -> Option<usize> + Send + Sync>;

/// The recognizer attached to a transition.
pub enum Matcher<G> {
    /// Exactly one input character, drawn from the given set.
    OneOf(String),
    /// An exact, case-sensitive character sequence.
    Literal(String),
    /// A full nested run of another table over the same remaining input and
    /// the same accumulator.
    Table(Arc<TransitionTable<G>>),
    /// A custom match function.
    Func(MatchFn<G>),
}

impl<G> Matcher<G> {
    /// Matcher for one character out of `set`.
    pub fn one_of(set: impl Into<String>) -> Self {
        Matcher::OneOf(set.into())
    }

    /// Matcher for the exact text `literal`.
    pub fn literal(literal: impl Into<String>) -> Self {
        Matcher::Literal(literal.into())
    }

    /// Matcher delegating to a nested table.
    pub fn table(table: Arc<TransitionTable<G>>) -> Self {
        Matcher::Table(table)
    }

    /// Matcher delegating to a custom function.
    pub fn func<F>(f: F) -> Self
    where
        F: for<'a> Fn(&mut Cursor<'a>, &mut G) -> Option<usize> + Send + Sync + 'static,
    {
        Matcher::Func(Arc::new(f))
    }

    /// Evaluate this matcher at the cursor's position.
    ///
    /// Evaluation probes: the shared cursor is never moved. `Table` and
    /// `Func` matchers run on a copy of the position, so a failing candidate
    /// leaves the cursor where it was and the engine can try the next
    /// alternative from the same spot. Accumulator writes made by a failing
    /// nested run are not rolled back; the parse is not transactional.
    pub(crate) fn try_match(&self, cursor: &Cursor<'_>, acc: &mut G) -> Option<usize> {
        match self {
            Matcher::OneOf(set) => {
                let c = cursor.peek()?;
                if set.contains(c) {
                    Some(c.len_utf8())
                } else {
                    None
                }
            }
            Matcher::Literal(text) => {
                if cursor.starts_with(text) {
                    Some(text.len())
                } else {
                    None
                }
            }
            Matcher::Table(table) => {
                let mut probe = *cursor;
                // A nested failure propagates flat: to the parent it is just
                // a candidate that did not match.
                engine::run(table, &mut probe, acc).ok()
            }
            Matcher::Func(f) => {
                let mut probe = *cursor;
                f(&mut probe, acc)
            }
        }
    }
}

impl<G> fmt::Debug for Matcher<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::OneOf(set) => f.debug_tuple("OneOf").field(set).finish(),
            Matcher::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Matcher::Table(table) => f.debug_tuple("Table").field(&table.name()).finish(),
            Matcher::Func(_) => f.write_str("Func(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_of_matches_single_character() {
        let matcher: Matcher<()> = Matcher::one_of("0123456789");
        let cursor = Cursor::new("42");
        assert_eq!(matcher.try_match(&cursor, &mut ()), Some(1));
    }

    #[test]
    fn one_of_fails_on_empty_input() {
        let matcher: Matcher<()> = Matcher::one_of("0123456789");
        let cursor = Cursor::new("");
        assert_eq!(matcher.try_match(&cursor, &mut ()), None);
    }

    #[test]
    fn literal_is_case_sensitive() {
        let matcher: Matcher<()> = Matcher::literal("GMT");
        assert_eq!(matcher.try_match(&Cursor::new("GMT"), &mut ()), Some(3));
        assert_eq!(matcher.try_match(&Cursor::new("gmt"), &mut ()), None);
    }

    #[test]
    fn literal_fails_on_short_input() {
        let matcher: Matcher<()> = Matcher::literal("GMT");
        assert_eq!(matcher.try_match(&Cursor::new("GM"), &mut ()), None);
    }

    #[test]
    fn func_sees_accumulator() {
        let matcher = Matcher::func(|cursor: &mut Cursor<'_>, acc: &mut u32| {
            *acc += 1;
            cursor.advance(1);
            Some(1)
        });
        let mut acc = 0u32;
        assert_eq!(matcher.try_match(&Cursor::new("x"), &mut acc), Some(1));
        assert_eq!(acc, 1);
    }
}
