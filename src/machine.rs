//! Matching Engine - Table Interpreter Core
//!
//! This module implements the reusable core of the crate:
//! 1. A cursor over shared input (position only, nothing is copied)
//! 2. Matchers: literal text, one-of character set, nested table, custom function
//! 3. Transition tables built through a fluent, validating builder
//! 4. The run loop: ordered-choice state walking with action callbacks
//!
//! The engine is an ordered-choice, single-path interpreter. When several
//! transitions share a source state they are tried in declared order and the
//! first match commits; a committed transition is never undone, even if a
//! later state fails. Grammars are authored so the first matching alternative
//! is the structurally correct one. This is deliberate: no backtracking means
//! cost bounded by states visited times alternatives per state.

pub mod cursor;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod table;

pub use cursor::Cursor;
pub use engine::{run, run_from};
pub use error::{RunError, TableError};
pub use matcher::{MatchFn, Matcher};
pub use table::{
    Action, StateId, TableBuilder, Transition, TransitionKind, TransitionTable, START_STATE,
};
