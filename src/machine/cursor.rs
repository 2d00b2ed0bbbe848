//! Input cursor
//!
//! A `Cursor` is a byte position into a shared input string. The whole call
//! tree of a run (including nested table runs and custom match functions)
//! advances the same logical position; copying a cursor copies the position
//! only, never the input, which is what makes candidate probing cheap.

/// A position into a borrowed input string.
///
/// The engine consumes input strictly left to right; a cursor never moves
/// backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset from the start of the input.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The full input this cursor walks over.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// The not-yet-consumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// True when no input remains.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// True if the remaining input starts with `prefix` (byte-exact).
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Consume `n` bytes and return the consumed slice.
    ///
    /// `n` must lie on a character boundary of the remaining input; matchers
    /// only ever report lengths they actually measured, so this holds by
    /// construction.
    pub fn advance(&mut self, n: usize) -> &'a str {
        let consumed = &self.input[self.pos..self.pos + n];
        self.pos += n;
        consumed
    }
}
