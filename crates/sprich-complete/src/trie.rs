//! Frequency-ranked prefix trie.
//!
//! The index maps lower-cased words to their usage frequencies and answers
//! "the k most frequent words starting with this prefix" without visiting
//! the whole subtree. Two per-node annotations make that possible:
//!
//! - `frequency` — the word's own score when the node ends a word
//!   (−1.0 otherwise, a sentinel below every real score),
//! - `max_subtree_freq` — the highest word score anywhere at or below the
//!   node, maintained along the insertion path.
//!
//! A ranked depth-first walk keeps the best `k` hits sorted and skips any
//! subtree whose `max_subtree_freq` cannot beat the current k-th score.
//! With a dictionary-shaped frequency distribution, that prunes almost
//! everything outside the hot branches.
//!
//! # Byte-level keys
//!
//! Children are keyed by byte, lower-casing ASCII only: `"Wörter"` and
//! `"wörter"` share a path because `W` folds to `w` while the `ö` bytes
//! pass through unchanged. Invalid UTF-8 never panics — unknown bytes are
//! just edges. The ordered child map yields ascending byte order during the
//! walk, which fixes the result order among equal scores.

use std::collections::BTreeMap;

use tracing::{debug, trace};

/// Score sentinel for "no word here" / "list not full yet".
const NO_SCORE: f32 = -1.0;

/// One trie node. Owns its children; the tree is strictly shaped (no
/// sharing, no back-references).
#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<u8, TrieNode>,
    is_end: bool,
    /// The word as first inserted, original casing preserved.
    word: Option<String>,
    frequency: f32,
    max_subtree_freq: f32,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            is_end: false,
            word: None,
            frequency: NO_SCORE,
            max_subtree_freq: NO_SCORE,
        }
    }
}

/// The completion index: a lazily created trie over the dictionary.
///
/// All operations are total; `top_k` before any insert (or after
/// [`reset`](Self::reset)) is simply empty.
#[derive(Debug, Default)]
pub struct CompletionIndex {
    root: Option<TrieNode>,
}

impl CompletionIndex {
    /// Create an empty index. No nodes are allocated until the first insert.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Insert `word` with the given frequency.
    ///
    /// Re-inserting keeps the maximum of the old and new frequencies, and
    /// the casing recorded on first insertion wins.
    pub fn insert(&mut self, word: &str, frequency: f32) {
        let mut node = self.root.get_or_insert_with(TrieNode::new);
        if frequency > node.max_subtree_freq {
            node.max_subtree_freq = frequency;
        }
        for byte in word.bytes().map(|b| b.to_ascii_lowercase()) {
            node = node.children.entry(byte).or_insert_with(TrieNode::new);
            if frequency > node.max_subtree_freq {
                node.max_subtree_freq = frequency;
            }
        }
        node.is_end = true;
        if node.word.is_none() {
            node.word = Some(word.to_string());
        }
        if frequency > node.frequency {
            node.frequency = frequency;
        }
    }

    /// The up-to-`k` highest-frequency words starting with `prefix`, best
    /// first. Equal scores keep the walk's ascending-byte order. The empty
    /// prefix matches nothing.
    #[must_use]
    pub fn top_k(&self, prefix: &str, k: usize) -> Vec<String> {
        if k == 0 || prefix.is_empty() {
            return Vec::new();
        }
        let Some(mut node) = self.root.as_ref() else {
            return Vec::new();
        };
        for byte in prefix.bytes().map(|b| b.to_ascii_lowercase()) {
            match node.children.get(&byte) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }
        let mut top = TopList::new(k);
        collect_ranked(node, &mut top);
        trace!(prefix, k, hits = top.entries.len(), "top_k");
        top.into_words()
    }

    /// Drop the entire trie. The next insert rebuilds from scratch.
    pub fn reset(&mut self) {
        self.root = None;
        debug!("completion index reset");
    }
}

// ---------------------------------------------------------------------------
// Ranked collection
// ---------------------------------------------------------------------------

/// The best-`k` list kept sorted by score descending during the walk.
struct TopList<'a> {
    entries: Vec<(&'a str, f32)>,
    cap: usize,
}

impl<'a> TopList<'a> {
    fn new(cap: usize) -> Self {
        Self {
            entries: Vec::with_capacity(cap),
            cap,
        }
    }

    /// The pruning floor: the k-th score when full, the sentinel otherwise.
    fn floor(&self) -> f32 {
        if self.entries.len() == self.cap {
            self.entries[self.cap - 1].1
        } else {
            NO_SCORE
        }
    }

    /// Insert a candidate at its rank. Equal scores go after existing
    /// entries, so earlier insertions win ties.
    fn offer(&mut self, word: &'a str, score: f32) {
        match self.entries.iter().position(|&(_, s)| score > s) {
            Some(pos) => {
                if self.entries.len() == self.cap {
                    self.entries.pop();
                }
                self.entries.insert(pos, (word, score));
            }
            None => {
                if self.entries.len() < self.cap {
                    self.entries.push((word, score));
                }
            }
        }
    }

    fn into_words(self) -> Vec<String> {
        self.entries
            .into_iter()
            .map(|(word, _)| word.to_string())
            .collect()
    }
}

/// Depth-first ranked walk with monotone pruning.
///
/// The floor is re-read before every decision: once a child fills the list
/// or raises the k-th score, its later siblings are pruned against the new
/// bound.
fn collect_ranked<'a>(node: &'a TrieNode, top: &mut TopList<'a>) {
    if node.max_subtree_freq <= top.floor() {
        return;
    }
    if node.is_end && node.frequency > top.floor() {
        if let Some(word) = &node.word {
            top.offer(word, node.frequency);
        }
    }
    for child in node.children.values() {
        if child.max_subtree_freq > top.floor() {
            collect_ranked(child, top);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
