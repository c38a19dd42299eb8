//! Modal editing states.
//!
//! The editor is always in exactly one [`Mode`]. Each mode changes how input
//! is interpreted and where the cursor may sit:
//!
//! | Mode        | Cursor limit       | Purpose                     |
//! |-------------|--------------------|-----------------------------|
//! | Normal      | `0..=line_len`     | Navigation, commands        |
//! | Insert      | `0..=line_len`     | Typing text                 |
//! | Visual      | `0..=line_len`     | Character-wise selection    |
//! | Visual line | `0..=line_len`     | Line-wise selection         |
//! | Replace     | `0..=line_len`     | Overwriting text            |
//!
//! The host polls [`Mode::display_name`] after every keystroke; the returned
//! identifiers (`NORMAL`, `INSERT`, `VISUAL`, `VISUAL_LINE`, `REPLACE`) are
//! a stable wire format.

use std::fmt;

/// The sub-mode of visual selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualKind {
    /// `v` — character-wise selection.
    Char,
    /// `V` — line-wise selection (always selects full lines).
    Line,
}

/// The current editing mode.
///
/// This is a pure data type — it holds what mode we're in, not the logic for
/// handling keys. Key dispatch and mode transitions live in [`crate::editor`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Default mode. Keys are commands, not text input.
    #[default]
    Normal,
    /// Text entry mode. Keys produce characters in the buffer.
    Insert,
    /// Selection mode. Movement extends the selection from a fixed anchor.
    Visual(VisualKind),
    /// Continuous overwrite until Escape (`R`). Single-character replace
    /// (`r`) is a pending operator in the key layer, not a mode.
    Replace,
}

impl Mode {
    /// Stable identifier for the host.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Visual(VisualKind::Char) => "VISUAL",
            Self::Visual(VisualKind::Line) => "VISUAL_LINE",
            Self::Replace => "REPLACE",
        }
    }

    /// True if we're in any visual sub-mode.
    #[inline]
    #[must_use]
    pub const fn is_visual(self) -> bool {
        matches!(self, Self::Visual(_))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
