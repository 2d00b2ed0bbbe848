//! Engine errors
//!
//! Failures are returned values, never panics. A run failure is flat: a
//! nested table that fails surfaces in its parent as a plain candidate miss,
//! not as a wrapped error chain.

use std::error::Error;
use std::fmt;

use super::table::StateId;

/// A table failed validation at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The table has no transitions.
    Empty { table: String },
    /// A normal transition targets a state with no outgoing transitions.
    DanglingTarget { table: String, state: StateId },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Empty { table } => write!(f, "table '{}' has no transitions", table),
            TableError::DanglingTarget { table, state } => write!(
                f,
                "table '{}' has a transition into state {} which has no outgoing transitions",
                table, state
            ),
        }
    }
}

impl Error for TableError {}

/// A table run failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// No transition from the current state matched the remaining input.
    /// `label` is the diagnostic label of the last transition taken, if any.
    NoMatch {
        table: String,
        state: StateId,
        label: Option<String>,
    },
    /// The run kept taking transitions without consuming input. This guards
    /// against zero-length matches cycling through the same states forever;
    /// the engine caps transitions-without-progress at the table's size.
    Stalled { table: String, state: StateId },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::NoMatch {
                table,
                state,
                label,
            } => match label {
                Some(label) => write!(
                    f,
                    "no match in table '{}' at state {} (after '{}')",
                    table, state, label
                ),
                None => write!(f, "no match in table '{}' at state {}", table, state),
            },
            RunError::Stalled { table, state } => write!(
                f,
                "table '{}' stalled at state {}: transitions kept firing without consuming input",
                table, state
            ),
        }
    }
}

impl Error for RunError {}
