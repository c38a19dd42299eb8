// SPDX-License-Identifier: MIT
//
// sprich — the text engine of a pronunciation-training desktop aid.
//
// This crate wires the engine's components into the surface the GUI host
// embeds:
//
//   sprich-editor   → modal editor state machine over a UTF-8 buffer
//   sprich-complete → frequency-ranked prefix completion index
//   sprich-keys     → Alt-umlaut composition and Ctrl-shortcut decoding
//
// Each keypress in the practice field flows through:
//
//   host key event → TextEngine::handle_key → mode dispatch → buffer/cursor
//   host polls     ← text / mode / cursor / anchor
//
// while the suggestion popup asks the completion index for ranked matches
// of the word being typed. The engine performs no I/O and owns no threads;
// the host serializes all calls.

use sprich_complete::CompletionIndex;
use sprich_editor::editor::Editor;
use sprich_editor::position::Position;

pub use sprich_complete::trie;
pub use sprich_editor::{buffer, editor, history, mode, position, register, word};
pub use sprich_keys::{check_shortcut, map_to_german, Action, Modifiers};

// ─── TextEngine ─────────────────────────────────────────────────────────────

/// The bundled engine: one editor plus one completion index.
///
/// Hosts that want the pieces individually can use the re-exported crates
/// directly; this struct exists for the common case of a single practice
/// field with a suggestion popup.
#[derive(Debug, Default)]
pub struct TextEngine {
    editor: Editor,
    completions: CompletionIndex,
}

impl TextEngine {
    /// A fresh engine: empty buffer, normal mode, empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            editor: Editor::new(),
            completions: CompletionIndex::new(),
        }
    }

    // ── Editor surface ──────────────────────────────────────────────────

    /// Feed one key event into the editor.
    ///
    /// `modifiers` is the raw host mask (bit 0 Alt, bit 1 Shift, bit 2
    /// Ctrl); unknown bits are ignored.
    pub fn handle_key(&mut self, key: &str, modifiers: u8) {
        self.editor.handle_key(
            key,
            sprich_editor::editor::Modifiers::from_bits_truncate(modifiers),
        );
    }

    /// The buffer contents.
    #[must_use]
    pub fn text(&self) -> &str {
        self.editor.text()
    }

    /// Replace the buffer contents; cursor and anchor are clamped.
    pub fn set_text(&mut self, text: &str) {
        self.editor.set_text(text);
    }

    /// The current mode identifier (`NORMAL`, `INSERT`, `VISUAL`,
    /// `VISUAL_LINE`, `REPLACE`).
    #[must_use]
    pub fn mode(&self) -> &'static str {
        self.editor.mode().display_name()
    }

    /// Cursor as (row, byte column).
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        let Position { row, col } = self.editor.cursor();
        (row, col)
    }

    /// Selection anchor as (row, byte column).
    #[must_use]
    pub fn anchor(&self) -> (usize, usize) {
        let Position { row, col } = self.editor.anchor();
        (row, col)
    }

    /// Swap the non-whitespace word under the cursor for `replacement`
    /// (the suggestion popup's accept action).
    pub fn replace_current_word(&mut self, replacement: &str) {
        self.editor.replace_current_word(replacement);
    }

    // ── Completion surface ──────────────────────────────────────────────

    /// Add a dictionary word with its usage frequency.
    pub fn insert_word(&mut self, word: &str, frequency: f32) {
        self.completions.insert(word, frequency);
    }

    /// The up-to-`k` most frequent dictionary words starting with `prefix`.
    #[must_use]
    pub fn search_ranked(&self, prefix: &str, k: usize) -> Vec<String> {
        self.completions.top_k(prefix, k)
    }

    /// Drop the dictionary (e.g. before loading a different language).
    pub fn reset_dictionary(&mut self) {
        self.completions.reset();
    }

    // ── Key decoding ────────────────────────────────────────────────────

    /// Compose a Germanic character from an Alt-chord, building the mask
    /// from the host's booleans.
    #[must_use]
    pub fn german_char(key_code: i32, alt: bool, shift: bool) -> Option<char> {
        let mut mods = Modifiers::empty();
        mods.set(Modifiers::ALT, alt);
        mods.set(Modifiers::SHIFT, shift);
        map_to_german(key_code, mods)
    }

    /// Decode a Ctrl-chord into an editor-wide [`Action`].
    #[must_use]
    pub fn action_for(key_code: i32, ctrl: bool, shift: bool) -> Action {
        let mut mods = Modifiers::empty();
        mods.set(Modifiers::CTRL, ctrl);
        mods.set(Modifiers::SHIFT, shift);
        check_shortcut(key_code, mods)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
