//! # sprich-complete — ranked prefix completion for the sprich text engine
//!
//! A single-purpose crate: the [`trie::CompletionIndex`] that backs the
//! trainer's word suggestions. The host loads its dictionary with
//! `insert(word, frequency)` and asks for the `k` most frequent completions
//! of whatever the user has typed so far.
//!
//! The index is a byte-keyed trie with a cached per-subtree maximum
//! frequency, so `top_k` prunes entire branches that cannot crack the
//! current result list — see the [`trie`] module for the details.

pub mod trie;

pub use trie::CompletionIndex;
