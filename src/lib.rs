//! # fsmatch
//!
//! A table-driven finite-state text matching engine.
//!
//! Grammars are declarative transition tables, not hand-written descent code:
//! each table row binds a source state to a matcher, a target state, and an
//! optional action over a shared accumulator. The [`machine`] module is the
//! interpreter that walks a cursor through such tables; [`httpdate`] is a
//! complete grammar built on top of it, parsing the three HTTP date formats
//! (RFC 1123, RFC 850, asctime).

pub mod httpdate;
pub mod machine;
