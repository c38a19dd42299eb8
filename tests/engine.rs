// SPDX-License-Identifier: MIT
//
// End-to-end keystroke scenarios against the bundled engine: every event
// enters through the public surface exactly as the GUI host would send it,
// and only polled state is asserted.

use sprich::editor::{Editor, Modifiers};
use sprich::position::Position;
use sprich::{Action, TextEngine};

fn feed(engine: &mut TextEngine, keys: &[&str]) {
    for key in keys {
        engine.handle_key(key, 0);
    }
}

// ─── Editor scenarios ───────────────────────────────────────────────────────

#[test]
fn typing_hello_then_escape() {
    let mut engine = TextEngine::new();
    feed(&mut engine, &["i", "h", "e", "l", "l", "o", "Escape"]);
    assert_eq!(engine.text(), "hello");
    assert_eq!(engine.mode(), "NORMAL");
    assert_eq!(engine.cursor(), (0, 4));
}

#[test]
fn delete_word_from_line_start() {
    // Editor used directly so the register is observable.
    let mut ed = Editor::new();
    for key in ["i", "h", "e", "l", "l", "o", "Escape", "0", "d", "w"] {
        ed.handle_key(key, Modifiers::empty());
    }
    assert_eq!(ed.text(), "");
    assert_eq!(ed.cursor(), Position::new(0, 0));
    assert_eq!(ed.register().content(), "hello");
}

#[test]
fn two_lines_then_gg() {
    let mut engine = TextEngine::new();
    feed(&mut engine, &["i", "a", "Return", "b", "Escape", "g", "g"]);
    assert_eq!(engine.text(), "a\nb");
    assert_eq!(engine.cursor(), (0, 0));
}

#[test]
fn visual_yank_then_paste_at_line_end() {
    let mut engine = TextEngine::new();
    feed(
        &mut engine,
        &[
            "i", "a", "b", "c", "Escape", "0", "v", "l", "l", "y", "$", "p",
        ],
    );
    assert_eq!(engine.text(), "abcabc");
    assert_eq!(engine.mode(), "NORMAL");
}

// ─── Boundary behaviors ─────────────────────────────────────────────────────

#[test]
fn backspace_at_origin_is_noop() {
    let mut engine = TextEngine::new();
    feed(&mut engine, &["i", "BackSpace"]);
    assert_eq!(engine.text(), "");
    assert_eq!(engine.cursor(), (0, 0));
}

#[test]
fn lone_j_in_insert_is_literal() {
    let mut engine = TextEngine::new();
    feed(&mut engine, &["i", "j"]);
    assert_eq!(engine.text(), "j");
    assert_eq!(engine.mode(), "INSERT");
}

#[test]
fn h_steps_back_two_bytes_over_umlaut() {
    let mut engine = TextEngine::new();
    feed(&mut engine, &["i", "a", "ä", "ä", "Escape"]);
    // Escape parks the cursor on the second ä.
    let (_, col_on_second) = engine.cursor();
    assert_eq!(col_on_second, 3);
    feed(&mut engine, &["h"]);
    let (_, col_on_first) = engine.cursor();
    assert_eq!(col_on_second - col_on_first, 2);
}

#[test]
fn big_g_on_empty_buffer_stays_at_origin() {
    let mut engine = TextEngine::new();
    feed(&mut engine, &["G"]);
    assert_eq!(engine.cursor(), (0, 0));
}

#[test]
fn dd_on_only_line_leaves_one_empty_line() {
    let mut engine = TextEngine::new();
    feed(&mut engine, &["i", "x", "Escape", "d", "d"]);
    assert_eq!(engine.text(), "");
    assert_eq!(engine.cursor(), (0, 0));
}

// ─── Undo laws ──────────────────────────────────────────────────────────────

#[test]
fn undo_reverts_single_mutation_and_redo_reapplies() {
    let mut engine = TextEngine::new();
    engine.set_text("abc");
    feed(&mut engine, &["x"]);
    assert_eq!(engine.text(), "bc");
    feed(&mut engine, &["u"]);
    assert_eq!(engine.text(), "abc");
    engine.handle_key("r", 0x4);
    assert_eq!(engine.text(), "bc");
}

#[test]
fn n_inserts_then_n_undos_restore_original() {
    let mut engine = TextEngine::new();
    engine.set_text("Guten Tag");
    for _ in 0..4 {
        feed(&mut engine, &["A", "!", "Escape"]);
    }
    assert_eq!(engine.text(), "Guten Tag!!!!");
    for _ in 0..4 {
        feed(&mut engine, &["u"]);
    }
    assert_eq!(engine.text(), "Guten Tag");
}

// ─── Suggestion flow ────────────────────────────────────────────────────────

#[test]
fn ranked_suggestions_by_frequency() {
    let mut engine = TextEngine::new();
    engine.insert_word("apple", 0.9);
    engine.insert_word("apricot", 0.5);
    engine.insert_word("banana", 0.7);
    assert_eq!(engine.search_ranked("a", 10), vec!["apple", "apricot"]);
}

#[test]
fn accepting_a_suggestion_replaces_the_word() {
    let mut engine = TextEngine::new();
    engine.insert_word("spreche", 0.9);
    feed(&mut engine, &["i", "s", "h", "p", "r", "Escape"]);
    let suggestion = engine.search_ranked("s", 1);
    assert_eq!(suggestion, vec!["spreche"]);
    engine.replace_current_word(&suggestion[0]);
    assert_eq!(engine.text(), "spreche");
    assert_eq!(engine.cursor(), (0, 7));
}

#[test]
fn reset_dictionary_clears_suggestions() {
    let mut engine = TextEngine::new();
    engine.insert_word("wort", 0.5);
    engine.reset_dictionary();
    assert!(engine.search_ranked("w", 10).is_empty());
}

// ─── Key decoding ───────────────────────────────────────────────────────────

#[test]
fn umlaut_composition_scenarios() {
    assert_eq!(
        sprich::map_to_german('a' as i32, sprich::Modifiers::from_bits_truncate(0x1)),
        Some('\u{00E4}')
    );
    assert_eq!(
        sprich::map_to_german('A' as i32, sprich::Modifiers::from_bits_truncate(0x3)),
        Some('\u{00C4}')
    );
}

#[test]
fn shortcut_scenarios() {
    assert_eq!(
        sprich::check_shortcut('Z' as i32, sprich::Modifiers::from_bits_truncate(0x6)),
        Action::Redo
    );
    assert_eq!(
        sprich::check_shortcut('Z' as i32, sprich::Modifiers::from_bits_truncate(0x4)),
        Action::Undo
    );
}

#[test]
fn composed_umlaut_types_into_the_buffer() {
    // The host decodes Alt+a, then feeds the composed character back in as
    // a plain keypress — exactly the original binding's flow.
    let mut engine = TextEngine::new();
    feed(&mut engine, &["i"]);
    if let Some(ch) = TextEngine::german_char('a' as i32, true, false) {
        engine.handle_key(&ch.to_string(), 0);
    }
    feed(&mut engine, &["Escape"]);
    assert_eq!(engine.text(), "ä");
}
