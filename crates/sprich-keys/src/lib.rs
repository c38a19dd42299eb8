// SPDX-License-Identifier: MIT
//
// Key decoder.
//
// Two stateless mappings from a host key event (key code + modifier mask)
// into things the trainer understands:
//
// - `map_to_german`: Alt-chords that compose Germanic characters
//   (Alt+a → ä, Alt+Shift+O → Ö, Alt+s → ß).
// - `check_shortcut`: Ctrl-chords that trigger editor-wide actions
//   (bold, italic, undo/redo, select-all, word deletion).
//
// Both are pure functions of their arguments and total: anything
// unrecognized decodes to "nothing". Key codes are the host's native
// values — ASCII letters arrive as their character codes (case varies by
// toolkit, so letters match case-insensitively), and a few raw keysym
// codes from the host toolkit are honored alongside them.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier flags.
    ///
    /// The bit layout is part of the host contract: bit 0 Alt, bit 1
    /// Shift, bit 2 Ctrl.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Modifiers: u8 {
        const ALT   = 0b0000_0001;
        const SHIFT = 0b0000_0010;
        const CTRL  = 0b0000_0100;
    }
}

// ─── Actions ────────────────────────────────────────────────────────────────

/// Editor-wide actions triggered by Ctrl shortcuts.
///
/// The discriminants are a stable public contract — host code stores and
/// compares the raw numbers.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// No action — the event is not a recognized shortcut.
    None = 0,
    /// Ctrl+B — toggle bold.
    Bold = 1,
    /// Ctrl+I — toggle italic.
    Italic = 2,
    /// Ctrl+U — toggle underline.
    Underline = 3,
    /// Ctrl+Z — undo.
    Undo = 4,
    /// Ctrl+Y or Ctrl+Shift+Z — redo.
    Redo = 5,
    /// Ctrl+A — select all.
    SelectAll = 6,
    /// Ctrl+D / Ctrl+Delete — delete the word after the cursor.
    DeleteWord = 7,
    /// Ctrl+BackSpace — delete the word before the cursor.
    DeleteWordBack = 8,
}

impl Action {
    /// The stable wire value.
    #[inline]
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

// ─── German character composition ───────────────────────────────────────────

/// Map an Alt-chord to a composed Germanic character.
///
/// Requires Alt; Shift selects the upper-case umlaut. Eszett has no
/// upper-case form here — Alt+s yields ß with or without Shift. Everything
/// else decodes to `None`.
///
/// | key  | Shift off | Shift on |
/// |------|-----------|----------|
/// | a/A  | ä         | Ä        |
/// | o/O  | ö         | Ö        |
/// | u/U  | ü         | Ü        |
/// | s/S  | ß         | ß        |
#[must_use]
pub fn map_to_german(key_code: i32, modifiers: Modifiers) -> Option<char> {
    if !modifiers.contains(Modifiers::ALT) {
        return None;
    }
    let shift = modifiers.contains(Modifiers::SHIFT);
    let byte = u8::try_from(key_code).ok()?;
    match byte.to_ascii_lowercase() {
        b'a' => Some(if shift { 'Ä' } else { 'ä' }),
        b'o' => Some(if shift { 'Ö' } else { 'ö' }),
        b'u' => Some(if shift { 'Ü' } else { 'ü' }),
        b's' => Some('ß'),
        _ => None,
    }
}

// ─── Shortcut decoding ──────────────────────────────────────────────────────

/// Map a Ctrl-chord to an editor [`Action`].
///
/// Without Ctrl the answer is always [`Action::None`]. Letters match
/// case-insensitively; the raw codes cover the host toolkit's Delete
/// keysym (65535, also seen as 119) and its BackSpace codes (8 and 22).
#[must_use]
pub fn check_shortcut(key_code: i32, modifiers: Modifiers) -> Action {
    if !modifiers.contains(Modifiers::CTRL) {
        return Action::None;
    }
    let shift = modifiers.contains(Modifiers::SHIFT);

    match key_code {
        8 | 22 => return Action::DeleteWordBack,
        119 | 65535 => return Action::DeleteWord,
        _ => {}
    }

    let Ok(byte) = u8::try_from(key_code) else {
        return Action::None;
    };
    match byte.to_ascii_lowercase() {
        b'b' => Action::Bold,
        b'i' => Action::Italic,
        b'u' => Action::Underline,
        b'z' => {
            if shift {
                Action::Redo
            } else {
                Action::Undo
            }
        }
        b'y' => Action::Redo,
        b'a' => Action::SelectAll,
        b'd' => Action::DeleteWord,
        _ => Action::None,
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
