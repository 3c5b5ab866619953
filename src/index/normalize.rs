//! Text normalization and symbol encoding
//!
//! Flattens the record texts into one symbol stream: each text is folded to
//! lowercase per code point, encoded through a dense alphabet, and
//! terminated by a sentinel. Record start positions are collected for the
//! position-to-record map.

use super::types::{Symbol, TextPosition, SENTINEL};
use std::collections::BTreeSet;

/// The encoded corpus
pub(crate) struct SymbolStream {
    /// Encoded texts with a sentinel after each record
    pub symbols: Vec<Symbol>,
    /// Distinct folded characters, sorted; symbol = rank + 1
    pub alphabet: Vec<char>,
    /// Start position of each record's text in `symbols`
    pub starts: Vec<TextPosition>,
}

/// Per-code-point lowercase fold shared by encoding and queries.
///
/// Takes the first code point of the lowercase mapping so the fold stays
/// 1:1; multi-code-point expansions and grapheme clusters are folded
/// independently.
#[inline]
pub(crate) fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Encode `texts` into a single sentinel-separated symbol stream.
///
/// Symbols are dense ranks in sorted folded-code-point order, so symbol
/// order coincides with folded character order and the radix alphabet is
/// bounded by the number of distinct characters rather than the code-point
/// space.
pub(crate) fn encode<S: AsRef<str>>(texts: &[S]) -> SymbolStream {
    let mut distinct = BTreeSet::new();
    for text in texts {
        for c in text.as_ref().chars() {
            distinct.insert(fold(c));
        }
    }
    let alphabet: Vec<char> = distinct.into_iter().collect();

    let total: usize = texts.iter().map(|t| t.as_ref().chars().count() + 1).sum();
    let mut symbols = Vec::with_capacity(total);
    let mut starts = Vec::with_capacity(texts.len());
    for text in texts {
        starts.push(symbols.len() as TextPosition);
        for c in text.as_ref().chars() {
            // Present by construction: the first pass saw this folded char
            let rank = alphabet.binary_search(&fold(c)).unwrap();
            symbols.push(rank as Symbol + 1);
        }
        symbols.push(SENTINEL);
    }

    SymbolStream {
        symbols,
        alphabet,
        starts,
    }
}
