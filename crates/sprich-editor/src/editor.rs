//! The modal editor state machine.
//!
//! An [`Editor`] consumes host key events via [`handle_key`](Editor::handle_key)
//! and mutates its buffer, cursor, anchor, mode, register, and history. The
//! host polls the observable state (text, mode, cursor, anchor) after every
//! event; nothing is pushed back.
//!
//! # Key event contract
//!
//! `key` is either a single printable code point (`"a"`, `"ä"`) or a named
//! label (`Escape`, `Return`, `BackSpace`, `Tab`, `dollar`, `asciitilde`).
//! Unknown labels are a no-op in every mode. `modifiers` carries Alt/Shift/
//! Ctrl; only Ctrl is consulted here (for redo).
//!
//! # Command grammar (normal mode)
//!
//! ```text
//! [count] operator [count] motion      d2w, 2d3w (counts multiply)
//! [count] operator operator            3dd, yy, cc
//! [count] r char                       5rx
//! [count] command                      4x, 2p, 3J
//! ```
//!
//! Operators compose with motions over linear byte offsets: the range acted
//! on is `[min(before, after), max(before, after))` of the cursor offset
//! around the motion, applied `pending_count` times where the motion itself
//! already repeats `count` times.

use bitflags::bitflags;
use tracing::trace;

use crate::buffer::TextBuffer;
use crate::history::{History, DEFAULT_DEPTH};
use crate::mode::{Mode, VisualKind};
use crate::position::Position;
use crate::register::{Register, RegisterKind};
use crate::word;

bitflags! {
    /// Keyboard modifier mask, as delivered by the host.
    ///
    /// This mirrors the decoder crate's `Modifiers` (bit 0 Alt, bit 1 Shift,
    /// bit 2 Ctrl) so the editor core stays decoupled from the key-decoding
    /// crate. The host converts with `from_bits_truncate`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Modifiers: u8 {
        const ALT   = 0b0000_0001;
        const SHIFT = 0b0000_0010;
        const CTRL  = 0b0000_0100;
    }
}

// ---------------------------------------------------------------------------
// Operators and motions
// ---------------------------------------------------------------------------

/// An operator awaiting a motion or a same-key repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    /// `d` — delete the range into the register.
    Delete,
    /// `c` — delete the range, then enter insert mode.
    Change,
    /// `y` — copy the range into the register.
    Yank,
    /// `r` — the next keystroke replaces the character under the cursor.
    Replace,
}

impl Operator {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "d" => Some(Self::Delete),
            "c" => Some(Self::Change),
            "y" => Some(Self::Yank),
            "r" => Some(Self::Replace),
            _ => None,
        }
    }
}

/// A cursor motion — a pure function of buffer and cursor.
///
/// Counted motions (`h j k l w b e`) repeat `count` times; the absolute ones
/// (`0 $ G gg`) ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Motion {
    Left,
    Down,
    Up,
    Right,
    WordForward,
    WordBackward,
    WordEnd,
    LineStart,
    LineEnd,
    FirstLine,
    LastLine,
}

// ---------------------------------------------------------------------------
// Editor
// ---------------------------------------------------------------------------

/// A single-buffer modal editor.
#[derive(Debug)]
pub struct Editor {
    buffer: TextBuffer,
    cursor: Position,
    /// Fixed end of the selection while a visual mode is active; stale
    /// otherwise.
    anchor: Position,
    mode: Mode,

    /// Operator waiting for its motion (or replacement character).
    pending_op: Option<Operator>,
    /// Count captured when the pending operator was typed.
    pending_count: usize,
    /// Digit accumulator for the count being typed.
    count_str: String,

    /// The key from the invocation before the current one (`jj`, `gg`).
    last_key: String,
    /// The key from the current invocation, promoted to `last_key` on the
    /// next one.
    prev_key: String,

    register: Register,
    history: History,
}

impl Editor {
    /// Create an editor with an empty buffer, in normal mode.
    #[must_use]
    pub fn new() -> Self {
        Self::with_undo_depth(DEFAULT_DEPTH)
    }

    /// Create an editor whose history keeps at most `depth` snapshots.
    #[must_use]
    pub fn with_undo_depth(depth: usize) -> Self {
        Self {
            buffer: TextBuffer::new(),
            cursor: Position::ZERO,
            anchor: Position::ZERO,
            mode: Mode::Normal,
            pending_op: None,
            pending_count: 1,
            count_str: String::new(),
            last_key: String::new(),
            prev_key: String::new(),
            register: Register::new(),
            history: History::with_depth(depth),
        }
    }

    // -- Observable state ---------------------------------------------------

    /// The buffer contents.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// The current mode.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The cursor position (row, byte column).
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Position {
        self.cursor
    }

    /// The selection anchor. Meaningful only while a visual mode is active.
    #[inline]
    #[must_use]
    pub const fn anchor(&self) -> Position {
        self.anchor
    }

    /// The unnamed register.
    #[inline]
    #[must_use]
    pub const fn register(&self) -> &Register {
        &self.register
    }

    /// Replace the buffer wholesale. Clamps cursor and anchor; does not
    /// touch the undo history.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.update_cursor_bounds();
        self.clamp_anchor();
    }

    // -- Key dispatch -------------------------------------------------------

    /// Apply one key event. Total: unknown keys are a no-op.
    pub fn handle_key(&mut self, key: &str, modifiers: Modifiers) {
        if key.is_empty() {
            return;
        }
        self.last_key = std::mem::replace(&mut self.prev_key, key.to_string());
        trace!(key, mode = %self.mode, "handle_key");

        match self.mode {
            Mode::Normal => self.handle_normal(key, modifiers),
            Mode::Insert => self.handle_insert(key),
            Mode::Visual(kind) => self.handle_visual(key, kind),
            Mode::Replace => self.handle_replace(key),
        }
    }

    // -- Normal mode --------------------------------------------------------

    fn handle_normal(&mut self, key: &str, modifiers: Modifiers) {
        // Count accumulation. A leading 0 is the line-start motion, not a
        // count digit.
        let first = key.as_bytes()[0];
        if first.is_ascii_digit() && (first != b'0' || !self.count_str.is_empty()) {
            self.count_str.push_str(key);
            return;
        }
        let count = self.take_count();

        // A pending `r` consumes this key as the replacement character.
        if self.pending_op == Some(Operator::Replace) {
            self.replace_pending(key);
            return;
        }

        // Operators: same key twice is the linewise form, otherwise the
        // operator waits for a motion.
        if let Some(op) = Operator::from_key(key).filter(|&op| op != Operator::Replace) {
            if self.pending_op == Some(op) {
                for _ in 0..self.pending_count.saturating_mul(count) {
                    self.line_operation(op);
                }
                self.clear_pending();
            } else {
                self.pending_op = Some(op);
                self.pending_count = count;
            }
            return;
        }

        // Motions — direct, or composed with the pending operator.
        // The host's tilde keysym doubles as line-start in normal mode only.
        let motion = if key == "asciitilde" {
            Some(Motion::LineStart)
        } else {
            self.resolve_motion(key)
        };
        if let Some(motion) = motion {
            if let Some(op) = self.pending_op {
                self.save_undo();
                let start = self.cursor_offset();
                for _ in 0..self.pending_count {
                    self.apply_motion(motion, count);
                }
                let end = self.cursor_offset();
                match op {
                    Operator::Yank => {
                        self.yank_range(start, end);
                        self.cursor = self.buffer.position_at(start);
                    }
                    Operator::Delete => self.delete_range(start, end),
                    Operator::Change => {
                        self.delete_range(start, end);
                        self.mode = Mode::Insert;
                    }
                    Operator::Replace => {}
                }
                self.clear_pending();
            } else {
                self.apply_motion(motion, count);
            }
            return;
        }

        // Immediate commands. A pending operator's count still multiplies in
        // (the original engine's behavior: `2d` then `3x` deletes 6 chars).
        let reps = self.pending_count.saturating_mul(count);
        match key {
            "x" => {
                self.save_undo();
                for _ in 0..reps {
                    self.delete_char_at_cursor();
                }
            }
            "X" => {
                self.save_undo();
                for _ in 0..reps {
                    self.delete_char_before_cursor();
                }
            }
            "r" if !modifiers.contains(Modifiers::CTRL) => {
                self.pending_op = Some(Operator::Replace);
                self.pending_count = count;
            }
            "p" => {
                self.save_undo();
                for _ in 0..reps {
                    self.paste_after();
                }
            }
            "P" => {
                self.save_undo();
                for _ in 0..reps {
                    self.paste_before();
                }
            }
            "J" => {
                self.save_undo();
                for _ in 0..reps {
                    self.join_lines();
                }
            }
            "D" => {
                self.save_undo();
                self.delete_to_line_end();
            }
            "s" => {
                self.save_undo();
                self.delete_char_at_cursor();
                self.mode = Mode::Insert;
            }
            "i" => {
                self.mode = Mode::Insert;
                self.save_undo();
            }
            "I" => {
                self.cursor.col = 0;
                self.mode = Mode::Insert;
                self.save_undo();
            }
            "a" => {
                self.mode = Mode::Insert;
                self.move_horizontal(1);
                self.save_undo();
            }
            "A" => {
                self.cursor.col = self.buffer.line_length(self.cursor.row);
                self.mode = Mode::Insert;
                self.save_undo();
            }
            "o" => self.open_line(true),
            "O" => self.open_line(false),
            "v" => {
                self.mode = Mode::Visual(VisualKind::Char);
                self.anchor = self.cursor;
            }
            "V" => {
                self.mode = Mode::Visual(VisualKind::Line);
                self.anchor = Position::new(self.cursor.row, 0);
            }
            "R" => {
                self.mode = Mode::Replace;
                self.save_undo();
            }
            "u" => self.perform_undo(),
            "r" => self.perform_redo(),
            _ => {}
        }

        if self.pending_op.is_none() {
            self.pending_count = 1;
        }
        // A pending operator survives only operator keys (including `r`,
        // whose pending state must outlive this dispatch); anything else
        // cancels it.
        if self.pending_op.is_some() && Operator::from_key(key).is_none() {
            self.clear_pending();
        }
    }

    /// Consume the accumulated count (default 1).
    fn take_count(&mut self) -> usize {
        if self.count_str.is_empty() {
            return 1;
        }
        let n = self.count_str.parse().unwrap_or(1);
        self.count_str.clear();
        n
    }

    fn clear_pending(&mut self) {
        self.pending_op = None;
        self.pending_count = 1;
    }

    /// The pending `r`: replace the code point under the cursor
    /// `pending_count` times, advancing between repetitions.
    fn replace_pending(&mut self, key: &str) {
        if key.chars().count() == 1 {
            self.save_undo();
            let reps = self.pending_count;
            for i in 0..reps {
                let pos = self.cursor_offset();
                let at_newline = self.buffer.text().as_bytes().get(pos) == Some(&b'\n');
                if pos < self.buffer.len() && !at_newline {
                    let end = (pos + self.buffer.char_len_at(pos)).min(self.buffer.len());
                    self.buffer.remove(pos, end);
                    self.buffer.insert(pos, key);
                    if i + 1 < reps {
                        self.move_horizontal(1);
                    }
                }
            }
        }
        self.clear_pending();
        self.update_cursor_bounds();
    }

    // -- Insert mode --------------------------------------------------------

    fn handle_insert(&mut self, key: &str) {
        if key == "Escape" || (key == "j" && self.last_key == "j") {
            if key == "j" {
                // The first j of the escape chord is already in the buffer;
                // take it back out.
                let pos = self.cursor_offset();
                if pos > 0 && self.buffer.text().as_bytes()[pos - 1] == b'j' {
                    self.buffer.remove(pos - 1, pos);
                    self.cursor.col = self.cursor.col.saturating_sub(1);
                }
            } else if self.cursor_offset() > 0 {
                self.move_horizontal(-1);
            }
            self.mode = Mode::Normal;
            self.save_undo();
            return;
        }

        match key {
            "Return" => {
                let off = self.cursor_offset();
                self.buffer.insert(off, "\n");
                self.cursor = Position::new(self.cursor.row + 1, 0);
            }
            "BackSpace" => self.backspace(),
            _ => {
                // Printable input is a single byte or a multi-byte UTF-8
                // sequence; named control labels (Tab, ...) are multi-byte
                // ASCII and fall through untouched.
                let bytes = key.as_bytes();
                if bytes.len() == 1 || bytes[0] > 127 {
                    let off = self.cursor_offset();
                    self.buffer.insert(off, key);
                    self.cursor.col += key.len();
                }
            }
        }
    }

    /// Delete the code point before the cursor, joining lines over `\n`.
    fn backspace(&mut self) {
        let pos = self.cursor_offset();
        if pos == 0 {
            return;
        }
        let prev = self.buffer.prev_boundary(pos);
        self.buffer.remove(prev, pos);
        self.cursor = self.buffer.position_at(prev);
    }

    // -- Replace mode -------------------------------------------------------

    fn handle_replace(&mut self, key: &str) {
        if key == "Escape" {
            self.mode = Mode::Normal;
            self.save_undo();
            return;
        }
        if key.chars().count() != 1 {
            return;
        }
        let pos = self.cursor_offset();
        let at_newline = self.buffer.text().as_bytes().get(pos) == Some(&b'\n');
        if pos < self.buffer.len() && !at_newline {
            let end = (pos + self.buffer.char_len_at(pos)).min(self.buffer.len());
            self.buffer.remove(pos, end);
        }
        self.buffer.insert(pos, key);
        self.cursor.col += key.len();
    }

    // -- Visual modes -------------------------------------------------------

    fn handle_visual(&mut self, key: &str, kind: VisualKind) {
        match key {
            "Escape" => self.mode = Mode::Normal,
            "d" | "x" => {
                self.yank_selection(kind);
                self.delete_selection(kind);
                self.mode = Mode::Normal;
            }
            "c" => {
                self.yank_selection(kind);
                self.delete_selection(kind);
                self.mode = Mode::Insert;
            }
            "y" => {
                self.yank_selection(kind);
                self.mode = Mode::Normal;
            }
            _ => {
                if let Some(motion) = self.resolve_motion(key) {
                    self.apply_motion(motion, 1);
                }
            }
        }
    }

    /// The linear byte range covered by the selection.
    ///
    /// Character-wise: `[min, max]` of anchor and cursor offsets, extended
    /// to the end of the code point at the far end. Line-wise: from the
    /// start of the first selected row to the start of the row after the
    /// last, clipped to the buffer.
    fn selection_range(&self, kind: VisualKind) -> (usize, usize) {
        match kind {
            VisualKind::Line => {
                let r1 = self.anchor.row.min(self.cursor.row);
                let r2 = self.anchor.row.max(self.cursor.row);
                (self.buffer.line_start(r1), self.buffer.line_start(r2 + 1))
            }
            VisualKind::Char => {
                let a = self.buffer.offset_at(self.anchor);
                let c = self.cursor_offset();
                let (lo, hi) = if a <= c { (a, c) } else { (c, a) };
                let end = (hi + self.buffer.char_len_at(hi)).min(self.buffer.len());
                (lo, end)
            }
        }
    }

    fn yank_selection(&mut self, kind: VisualKind) {
        let (start, end) = self.selection_range(kind);
        if start < self.buffer.len() {
            self.register
                .store(self.buffer.slice(start, end).to_string());
        } else {
            self.register.store(String::new());
        }
    }

    fn delete_selection(&mut self, kind: VisualKind) {
        self.save_undo();
        let (start, end) = self.selection_range(kind);
        if start < self.buffer.len() {
            self.buffer.remove(start, end);
        }
        self.cursor = self.buffer.position_at(start);
        self.update_cursor_bounds();
    }

    // -- Motions ------------------------------------------------------------

    fn resolve_motion(&self, key: &str) -> Option<Motion> {
        match key {
            "h" => Some(Motion::Left),
            "j" => Some(Motion::Down),
            "k" => Some(Motion::Up),
            "l" => Some(Motion::Right),
            "w" => Some(Motion::WordForward),
            "b" => Some(Motion::WordBackward),
            "e" => Some(Motion::WordEnd),
            "0" => Some(Motion::LineStart),
            "dollar" | "$" => Some(Motion::LineEnd),
            "G" => Some(Motion::LastLine),
            "g" if self.last_key == "g" => Some(Motion::FirstLine),
            _ => None,
        }
    }

    fn apply_motion(&mut self, motion: Motion, count: usize) {
        match motion {
            Motion::Left => {
                for _ in 0..count {
                    self.move_horizontal(-1);
                }
            }
            Motion::Right => {
                for _ in 0..count {
                    self.move_horizontal(1);
                }
            }
            Motion::Down => {
                for _ in 0..count {
                    self.move_vertical(1);
                }
            }
            Motion::Up => {
                for _ in 0..count {
                    self.move_vertical(-1);
                }
            }
            Motion::WordForward => {
                for _ in 0..count {
                    let off = word::word_forward(&self.buffer, self.cursor_offset());
                    self.cursor = self.buffer.position_at(off);
                }
            }
            Motion::WordBackward => {
                for _ in 0..count {
                    let off = word::word_backward(&self.buffer, self.cursor_offset());
                    self.cursor = self.buffer.position_at(off);
                }
            }
            Motion::WordEnd => {
                for _ in 0..count {
                    let off = word::word_end_forward(&self.buffer, self.cursor_offset());
                    self.cursor = self.buffer.position_at(off);
                }
            }
            Motion::LineStart => self.cursor.col = 0,
            Motion::LineEnd => {
                let len = self.buffer.line_length(self.cursor.row);
                self.cursor.col = if self.mode.is_visual() {
                    // Visual $ selects through the end of the line.
                    len
                } else if len > 0 {
                    let start = self.buffer.line_start(self.cursor.row);
                    self.buffer.prev_boundary(start + len) - start
                } else {
                    0
                };
            }
            Motion::FirstLine => self.cursor = Position::ZERO,
            Motion::LastLine => {
                self.cursor = Position::new(self.buffer.line_count() - 1, 0);
            }
        }
    }

    /// One code-point step left or right, bounded by the current line.
    fn move_horizontal(&mut self, dir: isize) {
        let start = self.buffer.line_start(self.cursor.row);
        let end = start + self.buffer.line_length(self.cursor.row);
        let mut off = (start + self.cursor.col).min(end);
        if dir > 0 {
            if off < end {
                off += self.buffer.char_len_at(off);
            }
        } else if off > start {
            off = self.buffer.prev_boundary(off).max(start);
        }
        self.cursor.col = off.min(end) - start;
    }

    /// One row up or down; the column re-clamps and re-snaps on the new line.
    fn move_vertical(&mut self, dir: isize) {
        let last = self.buffer.line_count() - 1;
        let row = if dir < 0 {
            self.cursor.row.saturating_sub(1)
        } else {
            (self.cursor.row + 1).min(last)
        };
        self.cursor.row = row;
        self.cursor.col = self.buffer.snap_col(row, self.cursor.col);
    }

    // -- Range operations (operator + motion) -------------------------------

    /// Copy `[min, max)` of the two offsets into the register; empty ranges
    /// leave the register untouched.
    fn yank_range(&mut self, a: usize, b: usize) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if lo < hi {
            self.register.store(self.buffer.slice(lo, hi).to_string());
        }
    }

    /// Delete `[min, max)` of the two offsets into the register; the cursor
    /// is recomputed from the surviving start offset.
    fn delete_range(&mut self, a: usize, b: usize) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let removed = self.buffer.remove(lo, hi);
        self.register.store(removed);
        self.cursor = self.buffer.position_at(lo);
    }

    // -- Immediate commands -------------------------------------------------

    /// `x` / `s`: yank and delete the code point under the cursor.
    fn delete_char_at_cursor(&mut self) {
        let pos = self.cursor_offset();
        if pos < self.buffer.len() {
            let end = (pos + self.buffer.char_len_at(pos)).min(self.buffer.len());
            let removed = self.buffer.remove(pos, end);
            self.register.store(removed);
            self.update_cursor_bounds();
        }
    }

    /// `X`: yank and delete the code point before the cursor; the cursor
    /// follows the deleted character's start, wrapping over a removed `\n`.
    fn delete_char_before_cursor(&mut self) {
        let pos = self.cursor_offset();
        if pos > 0 {
            let prev = self.buffer.prev_boundary(pos);
            let removed = self.buffer.remove(prev, pos);
            self.register.store(removed);
            self.cursor = self.buffer.position_at(prev);
        }
    }

    /// `p` — paste after. Line registers open a new line below the cursor
    /// row; character registers insert one column to the right.
    fn paste_after(&mut self) {
        if self.register.is_empty() {
            return;
        }
        match self.register.kind() {
            RegisterKind::Line => {
                let content = self.register.content();
                let line = content[..content.len() - 1].to_string();
                let row = self.cursor.row;
                if row + 1 < self.buffer.line_count() {
                    let off = self.buffer.line_start(row + 1);
                    self.buffer.insert(off, &format!("{line}\n"));
                } else {
                    let end = self.buffer.len();
                    self.buffer.insert(end, &format!("\n{line}"));
                }
                self.cursor = Position::new(row + 1, 0);
            }
            RegisterKind::Char => {
                self.move_horizontal(1);
                let off = self.cursor_offset();
                self.buffer.insert(off, self.register.content());
            }
        }
    }

    /// `P` — paste before. Line registers open a new line above the cursor
    /// row; character registers insert at the cursor.
    fn paste_before(&mut self) {
        if self.register.is_empty() {
            return;
        }
        match self.register.kind() {
            RegisterKind::Line => {
                let content = self.register.content();
                let line = content[..content.len() - 1].to_string();
                let off = self.buffer.line_start(self.cursor.row);
                self.buffer.insert(off, &format!("{line}\n"));
                self.cursor.col = 0;
            }
            RegisterKind::Char => {
                let off = self.cursor_offset();
                self.buffer.insert(off, self.register.content());
            }
        }
    }

    /// `J`: replace the `\n` ending the cursor row with a single space.
    fn join_lines(&mut self) {
        let row = self.cursor.row;
        if row + 1 < self.buffer.line_count() {
            let nl = self.buffer.line_end(row);
            self.buffer.remove(nl, nl + 1);
            self.buffer.insert(nl, " ");
            self.update_cursor_bounds();
        }
    }

    /// `D`: delete from the cursor to the end of the line into the register.
    fn delete_to_line_end(&mut self) {
        let start = self.cursor_offset();
        let end = self.buffer.line_end(self.cursor.row);
        let removed = self.buffer.remove(start, end);
        self.register.store(removed);
        self.update_cursor_bounds();
    }

    /// `o` / `O`: open a line below/above and enter insert mode at column 0.
    fn open_line(&mut self, below: bool) {
        self.save_undo();
        if below {
            let end = self.buffer.line_end(self.cursor.row);
            self.buffer.insert(end, "\n");
            self.cursor.row += 1;
        } else {
            let start = self.buffer.line_start(self.cursor.row);
            self.buffer.insert(start, "\n");
        }
        self.cursor.col = 0;
        self.mode = Mode::Insert;
    }

    /// `dd` / `cc` / `yy`: the linewise operator forms.
    fn line_operation(&mut self, op: Operator) {
        self.save_undo();
        let row = self.cursor.row;
        if row >= self.buffer.line_count() {
            return;
        }
        let start = self.buffer.line_start(row);
        let len = self.buffer.line_length(row);
        let line = self.buffer.slice(start, start + len).to_string();
        self.register.store(format!("{line}\n"));
        if op == Operator::Yank {
            return;
        }
        if row + 1 < self.buffer.line_count() {
            self.buffer.remove(start, start + len + 1);
        } else if row > 0 {
            self.buffer.remove(start - 1, start + len);
        } else {
            self.buffer.remove(start, start + len);
        }
        self.update_cursor_bounds();
        if op == Operator::Change {
            self.mode = Mode::Insert;
        }
    }

    // -- Undo / redo --------------------------------------------------------

    fn save_undo(&mut self) {
        self.history.save(self.buffer.text());
    }

    fn perform_undo(&mut self) {
        if let Some(restored) = self.history.undo(self.buffer.text()) {
            self.buffer.set_text(&restored);
            self.update_cursor_bounds();
        }
    }

    fn perform_redo(&mut self) {
        if let Some(restored) = self.history.redo(self.buffer.text()) {
            self.buffer.set_text(&restored);
            self.update_cursor_bounds();
        }
    }

    // -- Word replacement ---------------------------------------------------

    /// Replace the maximal non-whitespace run containing the cursor with
    /// `replacement`; the cursor lands just past the inserted text.
    ///
    /// Used by the host's suggestion UI to swap the word being corrected.
    pub fn replace_current_word(&mut self, replacement: &str) {
        self.save_undo();
        let pos = self.cursor_offset();
        let (start, end) = {
            let bytes = self.buffer.text().as_bytes();
            let mut start = pos;
            while start > 0 && !bytes[start - 1].is_ascii_whitespace() {
                start -= 1;
            }
            let mut end = pos;
            while end < bytes.len() && !bytes[end].is_ascii_whitespace() {
                end += 1;
            }
            (start, end)
        };
        self.buffer.remove(start, end);
        self.buffer.insert(start, replacement);
        let line_start = self.buffer.line_start(self.cursor.row);
        self.cursor.col = (start - line_start) + replacement.len();
        self.update_cursor_bounds();
    }

    // -- Cursor maintenance -------------------------------------------------

    #[inline]
    fn cursor_offset(&self) -> usize {
        self.buffer.offset_at(self.cursor)
    }

    /// Re-clamp the cursor into the buffer and snap its column onto a
    /// code-point boundary.
    fn update_cursor_bounds(&mut self) {
        let last = self.buffer.line_count() - 1;
        self.cursor.row = self.cursor.row.min(last);
        self.cursor.col = self.buffer.snap_col(self.cursor.row, self.cursor.col);
    }

    fn clamp_anchor(&mut self) {
        let last = self.buffer.line_count() - 1;
        self.anchor.row = self.anchor.row.min(last);
        self.anchor.col = self.buffer.snap_col(self.anchor.row, self.anchor.col);
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
