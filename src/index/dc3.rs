//! DC3 suffix array construction
//!
//! Builds the suffix array of the symbol stream in linear time with the
//! difference-cover-modulo-3 ("skew") algorithm:
//!
//! 1. Sort the suffixes starting at positions `i mod 3 ∈ {1, 2}` by radix
//!    sorting their leading symbol triples; if triples collide, recurse on
//!    the rank-compressed stream.
//! 2. Sort the mod-0 suffixes by `(first symbol, rank of successor)`.
//! 3. Merge both sorted sequences; the sample ranks settle every
//!    comparison after at most two symbols.

use super::radix::radix_pass;
use super::types::{Symbol, TextPosition};

/// Build the suffix array of `symbols`.
///
/// `alphabet_size` is an exclusive upper bound on the symbol values.
/// Interior sentinels (zeros) are permitted: the symbols are shifted up by
/// one while copying into the padded working buffer, so the value `0` is
/// reserved for the three pad entries past the end. The recursion requires
/// that every in-text value is nonzero; without the shift, a sentinel next
/// to the end of the stream could tie with the padding and come back
/// mis-ordered.
pub fn suffix_array(symbols: &[Symbol], alphabet_size: usize) -> Vec<TextPosition> {
    let n = symbols.len();
    match n {
        0 => Vec::new(),
        1 => vec![0],
        _ => {
            let mut s: Vec<Symbol> = Vec::with_capacity(n + 3);
            s.extend(symbols.iter().map(|&c| c + 1));
            s.extend_from_slice(&[0, 0, 0]);
            let mut sa: Vec<TextPosition> = vec![0; n];
            skew(&s, &mut sa, alphabet_size + 1);
            sa
        }
    }
}

/// Recursive worker. `s` holds the `sa.len()` symbols plus three zero pad
/// entries; every in-text symbol is nonzero and below `buckets`.
fn skew(s: &[Symbol], sa: &mut [TextPosition], buckets: usize) {
    let n = sa.len();
    debug_assert!(n >= 2);
    debug_assert_eq!(s.len(), n + 3);

    let n0 = (n + 2) / 3;
    let n1 = (n + 1) / 3;
    let n2 = n / 3;
    let n02 = n0 + n2;

    // Sample positions i mod 3 ∈ {1, 2}. When n mod 3 == 1, a dummy mod-1
    // position at n keeps the mod-1 count equal to the mod-0 count; the
    // dummy suffix is all padding, sorts first, and is skipped in the merge.
    let mut s12: Vec<u32> = Vec::with_capacity(n02 + 3);
    for i in 0..n + (n0 - n1) {
        if i % 3 != 0 {
            s12.push(i as u32);
        }
    }
    s12.resize(n02 + 3, 0);
    let mut sa12: Vec<u32> = vec![0; n02 + 3];

    // Step A: stable LSD radix sort of the samples by their symbol triples
    radix_pass(&s12[..n02], &mut sa12[..n02], |i| s[i as usize + 2], buckets);
    radix_pass(&sa12[..n02], &mut s12[..n02], |i| s[i as usize + 1], buckets);
    radix_pass(&s12[..n02], &mut sa12[..n02], |i| s[i as usize], buckets);

    // Rank the triples in sorted order; equal triples share a rank. Ranks
    // are written over s12 with the mod-1 samples in the first half and the
    // mod-2 samples in the second, forming the recursion stream.
    let mut name: u32 = 0;
    let mut prev: Option<(Symbol, Symbol, Symbol)> = None;
    for t in 0..n02 {
        let p = sa12[t] as usize;
        let triple = (s[p], s[p + 1], s[p + 2]);
        if prev != Some(triple) {
            name += 1;
            prev = Some(triple);
        }
        if p % 3 == 1 {
            s12[p / 3] = name;
        } else {
            s12[p / 3 + n0] = name;
        }
    }

    if (name as usize) < n02 {
        // Colliding triples: recurse on the rank stream to finish sorting
        // the sample, then read off each sample's now-unique rank.
        skew(&s12, &mut sa12[..n02], name as usize + 1);
        for t in 0..n02 {
            s12[sa12[t] as usize] = t as u32 + 1;
        }
    } else {
        // All ranks distinct: the rank stream is its own sorted order
        for i in 0..n02 {
            sa12[s12[i] as usize - 1] = i as u32;
        }
    }

    // Step B: sort the mod-0 suffixes by (first symbol, rank of successor).
    // Walking sa12 enumerates the successors in rank order, which supplies
    // the second key; one stable pass on the first symbol finishes the
    // pair sort.
    let mut s0: Vec<u32> = Vec::with_capacity(n0);
    for t in 0..n02 {
        if (sa12[t] as usize) < n0 {
            s0.push(3 * sa12[t]);
        }
    }
    let mut sa0: Vec<u32> = vec![0; n0];
    radix_pass(&s0, &mut sa0, |i| s[i as usize], buckets);

    // Step C: merge. Rank of any sample position, 0 at or past the end
    // (those slots of s12 hold the pad zeros).
    let rank = |pos: usize| -> u32 {
        if pos % 3 == 1 {
            s12[pos / 3]
        } else {
            s12[pos / 3 + n0]
        }
    };
    // Text position of the sample at sa12[t]
    let pos12 = |t: usize| -> usize {
        let d = sa12[t] as usize;
        if d < n0 {
            3 * d + 1
        } else {
            3 * (d - n0) + 2
        }
    };

    let mut p = 0; // cursor into sa0
    let mut t = n0 - n1; // cursor into sa12, past the dummy sample if any
    let mut out = 0;
    while p < n0 && t < n02 {
        let i = pos12(t);
        let j = sa0[p] as usize;
        // A mod-1 sample resolves against mod-0 through the rank of the
        // successor; a mod-2 sample needs one more symbol first.
        let sample_first = if (sa12[t] as usize) < n0 {
            (s[i], rank(i + 1)) <= (s[j], rank(j + 1))
        } else {
            (s[i], s[i + 1], rank(i + 2)) <= (s[j], s[j + 1], rank(j + 2))
        };
        if sample_first {
            sa[out] = i as TextPosition;
            t += 1;
        } else {
            sa[out] = j as TextPosition;
            p += 1;
        }
        out += 1;
    }
    while t < n02 {
        sa[out] = pos12(t) as TextPosition;
        t += 1;
        out += 1;
    }
    while p < n0 {
        sa[out] = sa0[p] as TextPosition;
        p += 1;
        out += 1;
    }
    debug_assert_eq!(out, n);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn sa_of_bytes(text: &[u8]) -> Vec<TextPosition> {
        let symbols: Vec<Symbol> = text.iter().map(|&b| b as Symbol).collect();
        suffix_array(&symbols, 256)
    }

    /// Strictly increasing suffixes over a permutation of [0, n)
    fn is_suffix_array_of(sa: &[TextPosition], s: &[Symbol]) -> bool {
        sa.len() == s.len()
            && sa.iter().all(|&p| (p as usize) < s.len())
            && sa
                .windows(2)
                .all(|w| s[w[0] as usize..] < s[w[1] as usize..])
    }

    #[test]
    fn empty_stream() {
        assert_eq!(suffix_array(&[], 1), Vec::<TextPosition>::new());
    }

    #[test]
    fn single_symbol() {
        assert_eq!(suffix_array(&[0], 1), vec![0]);
    }

    #[test]
    fn adjacent_sentinels() {
        // Shorter suffix of a sentinel run sorts first
        assert_eq!(suffix_array(&[0, 0], 1), vec![1, 0]);
        assert_eq!(suffix_array(&[0, 0, 0], 1), vec![2, 1, 0]);
    }

    #[test]
    fn banana() {
        // Suffix array for "banana\0":
        // 6: \0
        // 5: a\0
        // 3: ana\0
        // 1: anana\0
        // 0: banana\0
        // 4: na\0
        // 2: nana\0
        assert_eq!(sa_of_bytes(b"banana\x00"), vec![6, 5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn abracadabra() {
        assert_eq!(
            sa_of_bytes(b"abracadabra$"),
            vec![11, 10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]
        );
    }

    #[test]
    fn mmiissiissiippii() {
        assert_eq!(
            sa_of_bytes(b"mmiissiissiippii$"),
            vec![16, 15, 14, 10, 6, 2, 11, 7, 3, 1, 0, 13, 12, 9, 5, 8, 4]
        );
    }

    #[test]
    fn sentinel_run_next_to_stream_end() {
        // Interior sentinel runs close to the end once mis-sorted when the
        // in-text values were allowed to equal the padding
        let symbols = [1, 2, 3, 0, 0, 0, 0, 2, 0];
        let sa = suffix_array(&symbols, 4);
        assert!(is_suffix_array_of(&sa, &symbols), "sa = {sa:?}");
    }

    #[test]
    fn long_identical_run_recurses() {
        // 600 equal symbols force rank collisions down many levels
        let mut symbols = vec![1u32; 600];
        symbols.push(0);
        let sa = suffix_array(&symbols, 2);
        let expected: Vec<TextPosition> = (0..601).rev().collect();
        assert_eq!(sa, expected);
    }

    #[test]
    fn permutation_over_mixed_stream() {
        let symbols = [3, 1, 0, 2, 2, 1, 0, 3, 1, 0];
        let sa = suffix_array(&symbols, 4);
        let mut seen = sa.clone();
        seen.sort_unstable();
        let all: Vec<TextPosition> = (0..symbols.len() as TextPosition).collect();
        assert_eq!(seen, all);
        assert!(is_suffix_array_of(&sa, &symbols));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn sorts_unary_streams(mut s in vec(1u32..2, 1..200)) {
            s.push(0);
            let sa = suffix_array(&s, 2);
            prop_assert!(is_suffix_array_of(&sa, &s));
        }

        #[test]
        fn sorts_binary_streams(mut s in vec(1u32..3, 1..200)) {
            s.push(0);
            let sa = suffix_array(&s, 3);
            prop_assert!(is_suffix_array_of(&sa, &s));
        }

        #[test]
        fn sorts_streams_with_interior_sentinels(s in vec(0u32..5, 0..300)) {
            let sa = suffix_array(&s, 5);
            prop_assert!(is_suffix_array_of(&sa, &s));
        }

        #[test]
        fn sorts_byte_streams(s in vec(0u32..256, 0..300)) {
            let sa = suffix_array(&s, 256);
            prop_assert!(is_suffix_array_of(&sa, &s));
        }
    }
}
