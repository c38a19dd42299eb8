//! Text position type.
//!
//! All coordinates are **0-indexed**. Row 0 is the first line, column 0 is the
//! first byte of the line. Columns count **bytes**, not chars or grapheme
//! clusters: the buffer is a contiguous UTF-8 byte sequence and every cursor
//! column must land on a code-point boundary (the start byte of a character,
//! or one past the last byte of the line).
//!
//! For the line `"café"`, column 3 is the start of `'é'` and column 5 is the
//! end-of-line position used in insert mode — column 4 would sit inside the
//! two-byte encoding of `'é'` and is never a valid cursor column.

use std::fmt;

/// A position in a text buffer: (row, column), both 0-indexed.
///
/// `col` is the byte offset from the start of the row's line.
///
/// # Ordering
///
/// Positions are ordered lexicographically: row first, then column. This
/// means `Position { row: 0, col: 5 }` < `Position { row: 1, col: 0 }` —
/// exactly the order of their linear byte offsets in the buffer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// The origin — row 0, column 0.
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

// Natural ordering: row first, then column.
impl Ord for Position {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for Position {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}:{})", self.row, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
