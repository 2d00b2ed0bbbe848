//! Run loop
//!
//! The interpreter that walks a cursor through a transition table:
//! 1. Collect the current state's candidates in declared order
//! 2. Probe each candidate's matcher at the current position
//! 3. First success commits: fire the action, advance the cursor
//! 4. Accept returns the total consumed; Normal moves to the target state
//! 5. No candidate matching fails the run immediately
//!
//! Once a transition commits it is never undone. There is no retry of a
//! sibling candidate after a later state fails and no fallback to an earlier
//! state; accumulator writes made along the way stay visible to the caller
//! whether the run succeeds or fails.

use super::cursor::Cursor;
use super::error::RunError;
use super::table::{StateId, TransitionKind, TransitionTable, START_STATE};

/// Run `table` from its start state.
///
/// On success the cursor has advanced by exactly the returned length and the
/// accumulator reflects every action fired along the accepted path, in
/// firing order. On failure the cursor sits wherever matching stopped;
/// accumulator writes are not rolled back.
pub fn run<G>(
    table: &TransitionTable<G>,
    cursor: &mut Cursor<'_>,
    acc: &mut G,
) -> Result<usize, RunError> {
    run_from(table, cursor, acc, START_STATE)
}

/// Run `table` from an explicit initial state.
pub fn run_from<G>(
    table: &TransitionTable<G>,
    cursor: &mut Cursor<'_>,
    acc: &mut G,
    initial_state: StateId,
) -> Result<usize, RunError> {
    let mut state = initial_state;
    let mut total_consumed = 0usize;
    let mut last_label: Option<&str> = None;
    // Transitions taken since the last byte was consumed. A zero-length
    // match is legal (empty literal, zero-length custom function), but a
    // cycle of them would loop forever; more such steps than the table has
    // transitions means no further progress is possible.
    let mut steps_without_progress = 0usize;

    'table: loop {
        for transition in table.candidates(state) {
            let Some(consumed) = transition.matcher.try_match(cursor, acc) else {
                continue;
            };

            let matched = cursor.advance(consumed);
            if let Some(action) = transition.action.as_ref() {
                action(matched, acc);
            }
            total_consumed += consumed;

            if consumed == 0 {
                steps_without_progress += 1;
                if steps_without_progress > table.len() {
                    return Err(RunError::Stalled {
                        table: table.name().to_string(),
                        state,
                    });
                }
            } else {
                steps_without_progress = 0;
            }

            match transition.kind {
                TransitionKind::Accept => return Ok(total_consumed),
                TransitionKind::Normal => {
                    last_label = transition.label().or(last_label);
                    state = transition.to;
                    continue 'table;
                }
            }
        }

        return Err(RunError::NoMatch {
            table: table.name().to_string(),
            state,
            label: last_label.map(str::to_string),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::matcher::Matcher;
    use std::sync::Arc;

    fn literal_accept(text: &str) -> TransitionTable<()> {
        TransitionTable::builder("literal")
            .accept(0, Matcher::literal(text))
            .build()
            .unwrap()
    }

    #[test]
    fn literal_accept_consumes_exact_length() {
        let table = literal_accept("Sun");
        let mut cursor = Cursor::new("Sunday");
        assert_eq!(run(&table, &mut cursor, &mut ()), Ok(3));
        assert_eq!(cursor.rest(), "day");
    }

    #[test]
    fn failure_reports_table_and_state() {
        let table = literal_accept("Sun");
        let mut cursor = Cursor::new("Mon");
        let err = run(&table, &mut cursor, &mut ()).unwrap_err();
        assert_eq!(
            err,
            RunError::NoMatch {
                table: "literal".to_string(),
                state: 0,
                label: None,
            }
        );
    }

    #[test]
    fn failure_carries_last_taken_label() {
        let table: TransitionTable<()> = TransitionTable::builder("labeled")
            .transition(0, Matcher::literal("a"), 1)
            .labeled("first a")
            .accept(1, Matcher::literal("b"))
            .build()
            .unwrap();
        let mut cursor = Cursor::new("ax");
        let err = run(&table, &mut cursor, &mut ()).unwrap_err();
        assert_eq!(
            err,
            RunError::NoMatch {
                table: "labeled".to_string(),
                state: 1,
                label: Some("first a".to_string()),
            }
        );
    }

    #[test]
    fn actions_fire_with_matched_slice() {
        let table: TransitionTable<Vec<String>> = TransitionTable::builder("collect")
            .transition_with(
                0,
                Matcher::one_of("0123456789"),
                1,
                Arc::new(|text, acc: &mut Vec<String>| acc.push(text.to_string())),
            )
            .accept_with(
                1,
                Matcher::literal("!"),
                Arc::new(|text, acc: &mut Vec<String>| acc.push(text.to_string())),
            )
            .build()
            .unwrap();
        let mut acc = Vec::new();
        let mut cursor = Cursor::new("7!");
        assert_eq!(run(&table, &mut cursor, &mut acc), Ok(2));
        assert_eq!(acc, vec!["7".to_string(), "!".to_string()]);
    }

    #[test]
    fn run_from_starts_at_given_state() {
        let table: TransitionTable<()> = TransitionTable::builder("staged")
            .transition(0, Matcher::literal("a"), 1)
            .accept(1, Matcher::literal("b"))
            .build()
            .unwrap();
        let mut cursor = Cursor::new("b");
        assert_eq!(run_from(&table, &mut cursor, &mut (), 1), Ok(1));
    }

    #[test]
    fn stalled_run_is_cut_off() {
        // A zero-length custom match looping back into its own state must
        // not hang the engine.
        let table: TransitionTable<u32> = TransitionTable::builder("stall")
            .transition_with(
                0,
                Matcher::func(|_cursor: &mut Cursor<'_>, _acc: &mut u32| Some(0)),
                0,
                Arc::new(|_text, acc: &mut u32| *acc += 1),
            )
            .build()
            .unwrap();
        let mut acc = 0u32;
        let mut cursor = Cursor::new("anything");
        let err = run(&table, &mut cursor, &mut acc).unwrap_err();
        assert_eq!(
            err,
            RunError::Stalled {
                table: "stall".to_string(),
                state: 0,
            }
        );
        // The guard tripped after a bounded number of steps.
        assert_eq!(acc, 2);
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn zero_length_accept_is_legal() {
        let table: TransitionTable<()> = TransitionTable::builder("epsilon")
            .accept(0, Matcher::literal(""))
            .build()
            .unwrap();
        let mut cursor = Cursor::new("untouched");
        assert_eq!(run(&table, &mut cursor, &mut ()), Ok(0));
        assert_eq!(cursor.rest(), "untouched");
    }
}
