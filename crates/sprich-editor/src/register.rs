//! The unnamed register — storage for yanked and deleted text.
//!
//! Every yank (`y`, `yy`) and delete (`d`, `x`, `dd`, visual `d`/`c`) copies
//! text here; paste (`p`, `P`) reads it back. There is exactly one register
//! and it lives inside the engine — host clipboard integration is the host's
//! business.
//!
//! Whether a paste is character-wise or line-wise is not tracked separately:
//! content ending in `\n` *is* a line register, anything else a character
//! register. Line operations always capture the trailing separator, so the
//! distinction falls out of the content itself.

/// How register content will paste — determined by its trailing byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterKind {
    /// Paste inserts inline at the cursor position.
    Char,
    /// Paste inserts a whole new line above or below the cursor line.
    Line,
}

/// The single unnamed register.
#[derive(Debug, Clone, Default)]
pub struct Register {
    content: String,
}

impl Register {
    /// Create an empty register.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    /// Store text, replacing any previous content.
    pub fn store(&mut self, text: String) {
        self.content = text;
    }

    /// The stored text. Empty if nothing has been yanked.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// True if the register has no content (paste is a no-op).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Character-wise or line-wise, read off the trailing byte.
    #[must_use]
    pub fn kind(&self) -> RegisterKind {
        if self.content.ends_with('\n') {
            RegisterKind::Line
        } else {
            RegisterKind::Char
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty_char_register() {
        let reg = Register::new();
        assert!(reg.is_empty());
        assert_eq!(reg.content(), "");
        assert_eq!(reg.kind(), RegisterKind::Char);
    }

    #[test]
    fn store_replaces_content() {
        let mut reg = Register::new();
        reg.store("first".into());
        reg.store("second".into());
        assert_eq!(reg.content(), "second");
    }

    #[test]
    fn trailing_newline_makes_line_register() {
        let mut reg = Register::new();
        reg.store("a line\n".into());
        assert_eq!(reg.kind(), RegisterKind::Line);
    }

    #[test]
    fn interior_newline_stays_char_register() {
        let mut reg = Register::new();
        reg.store("two\nlines".into());
        assert_eq!(reg.kind(), RegisterKind::Char);
    }

    #[test]
    fn unicode_content_round_trips() {
        let mut reg = Register::new();
        reg.store("größe".into());
        assert_eq!(reg.content(), "größe");
        assert_eq!(reg.kind(), RegisterKind::Char);
    }
}
