//! Transition tables
//!
//! A transition table is an ordered sequence of rows, each binding a source
//! state to a matcher, a target state, a terminal classification and an
//! optional action. Tables are immutable once built; they carry no run-time
//! position of their own (that lives in the engine's transient state).
//!
//! Tables are constructed through [`TableBuilder`], which replaces the
//! sentinel-terminated arrays of classic C state tables with an ordinary
//! validating builder.

use std::fmt;
use std::sync::Arc;

use super::error::TableError;
use super::matcher::Matcher;

/// Identifier of a state within one table.
pub type StateId = usize;

/// Every table is implicitly rooted at state 0.
pub const START_STATE: StateId = 0;

/// An action fired when its transition matches. It receives the matched
/// slice and the shared accumulator; the per-transition local payload of
/// the table row lives in the closure's captures. Actions are infallible
/// side effects and must not fail.
pub type Action<G> = Arc<dyn Fn(&str, &mut G) + Send + Sync>;

/// Terminal classification of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Continue interpreting at the target state.
    Normal,
    /// Stop interpreting this table and report success. The target state is
    /// meaningless for accepting transitions.
    Accept,
}

/// One candidate step of a table.
pub struct Transition<G> {
    pub(crate) from: StateId,
    pub(crate) matcher: Matcher<G>,
    pub(crate) to: StateId,
    pub(crate) kind: TransitionKind,
    pub(crate) action: Option<Action<G>>,
    pub(crate) label: Option<String>,
}

impl<G> Transition<G> {
    /// Source state of this transition.
    pub fn from(&self) -> StateId {
        self.from
    }

    /// Diagnostic label, if one was attached.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl<G> fmt::Debug for Transition<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("matcher", &self.matcher)
            .field("to", &self.to)
            .field("kind", &self.kind)
            .field("has_action", &self.action.is_some())
            .field("label", &self.label)
            .finish()
    }
}

/// An ordered, immutable set of transitions forming one grammar fragment.
///
/// Multiple transitions may share a source state; the engine tries them in
/// declared order and takes the first match (ordered choice).
pub struct TransitionTable<G> {
    name: String,
    transitions: Vec<Transition<G>>,
}

impl<G> TransitionTable<G> {
    /// Start building a table. The name shows up in run failures.
    pub fn builder(name: impl Into<String>) -> TableBuilder<G> {
        TableBuilder {
            name: name.into(),
            transitions: Vec::new(),
        }
    }

    /// The table's diagnostic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of transitions in the table.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// True for a table with no transitions. Built tables are never empty;
    /// this exists for completeness of the container surface.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// All transitions whose source is `state`, in declared order.
    pub(crate) fn candidates(&self, state: StateId) -> impl Iterator<Item = &Transition<G>> {
        self.transitions.iter().filter(move |t| t.from == state)
    }
}

impl<G> fmt::Debug for TransitionTable<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTable")
            .field("name", &self.name)
            .field("transitions", &self.transitions)
            .finish()
    }
}

/// Fluent builder for [`TransitionTable`].
///
/// Rows are appended in the order they will be tried. `build` validates the
/// finished table and hands back an immutable value, typically wrapped in an
/// `Arc` so other tables can delegate to it.
pub struct TableBuilder<G> {
    name: String,
    transitions: Vec<Transition<G>>,
}

impl<G> TableBuilder<G> {
    /// Add a normal transition: on match, continue at `to`.
    pub fn transition(self, from: StateId, matcher: Matcher<G>, to: StateId) -> Self {
        self.push(from, matcher, to, TransitionKind::Normal, None)
    }

    /// Add a normal transition that fires `action` on match.
    pub fn transition_with(
        self,
        from: StateId,
        matcher: Matcher<G>,
        to: StateId,
        action: Action<G>,
    ) -> Self {
        self.push(from, matcher, to, TransitionKind::Normal, Some(action))
    }

    /// Add an accepting transition: on match, the table's run succeeds.
    pub fn accept(self, from: StateId, matcher: Matcher<G>) -> Self {
        self.push(from, matcher, from, TransitionKind::Accept, None)
    }

    /// Add an accepting transition that fires `action` on match.
    pub fn accept_with(self, from: StateId, matcher: Matcher<G>, action: Action<G>) -> Self {
        self.push(from, matcher, from, TransitionKind::Accept, Some(action))
    }

    /// Attach a diagnostic label to the most recently added transition.
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        if let Some(last) = self.transitions.last_mut() {
            last.label = Some(label.into());
        }
        self
    }

    /// Validate and freeze the table.
    ///
    /// Rejects empty tables and normal transitions whose target state has no
    /// outgoing transitions (such a state could never do anything but fail).
    pub fn build(self) -> Result<TransitionTable<G>, TableError> {
        if self.transitions.is_empty() {
            return Err(TableError::Empty { table: self.name });
        }
        for t in &self.transitions {
            if t.kind == TransitionKind::Normal
                && !self.transitions.iter().any(|other| other.from == t.to)
            {
                return Err(TableError::DanglingTarget {
                    table: self.name.clone(),
                    state: t.to,
                });
            }
        }
        Ok(TransitionTable {
            name: self.name,
            transitions: self.transitions,
        })
    }

    fn push(
        mut self,
        from: StateId,
        matcher: Matcher<G>,
        to: StateId,
        kind: TransitionKind,
        action: Option<Action<G>>,
    ) -> Self {
        self.transitions.push(Transition {
            from,
            matcher,
            to,
            kind,
            action,
            label: None,
        });
        self
    }
}
