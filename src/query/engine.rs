//! Range location and result materialization for [`SuffixIndex`].

use crate::index::normalize;
use crate::index::types::{Hit, RecordId, Symbol};
use crate::index::SuffixIndex;
use roaring::RoaringBitmap;

impl SuffixIndex {
    /// Encode a query with the index's fold and alphabet.
    ///
    /// `None` means some folded character never occurs in the corpus, so
    /// no suffix can match.
    fn encode_query(&self, query: &str) -> Option<Vec<Symbol>> {
        query
            .chars()
            .map(|c| {
                self.alphabet
                    .binary_search(&normalize::fold(c))
                    .ok()
                    .map(|rank| rank as Symbol + 1)
            })
            .collect()
    }

    /// Locate the half-open range of suffix-array slots whose suffixes
    /// start with `query`. The empty query matches every suffix.
    pub fn match_range(&self, query: &str) -> (usize, usize) {
        let Some(pattern) = self.encode_query(query) else {
            return (0, 0);
        };
        if pattern.is_empty() {
            return (0, self.sa.len());
        }
        let lo = self.lower_bound(&pattern);
        let hi = self.upper_bound(&pattern, lo);
        (lo, hi)
    }

    /// First slot whose suffix sorts at or above the pattern
    fn lower_bound(&self, pattern: &[Symbol]) -> usize {
        let mut lo = 0;
        let mut hi = self.sa.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let suffix = &self.symbols[self.sa[mid] as usize..];

            // Compare only up to the pattern length; a shorter suffix that
            // ties on its whole length still sorts below the pattern
            let len = pattern.len().min(suffix.len());
            if &suffix[..len] < pattern {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    /// First slot at or past `start` whose suffix does not start with the
    /// pattern
    fn upper_bound(&self, pattern: &[Symbol], start: usize) -> usize {
        let mut lo = start;
        let mut hi = self.sa.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let suffix = &self.symbols[self.sa[mid] as usize..];

            let matches =
                suffix.len() >= pattern.len() && &suffix[..pattern.len()] == pattern;
            if matches {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    /// Records whose text contains `query`, deduplicated, in order of
    /// first appearance in the suffix array.
    pub fn matching_records(&self, query: &str) -> Vec<RecordId> {
        let (lo, hi) = self.match_range(query);

        let mut seen = RoaringBitmap::new();
        let mut out = Vec::new();
        for slot in lo..hi {
            let owner = self.suffix_owners[slot];
            if seen.insert(owner) {
                out.push(owner);
            }
        }
        out
    }

    /// Up to `limit` matches with per-record offsets, in suffix order
    pub fn hits(&self, query: &str, limit: usize) -> Vec<Hit> {
        let (lo, hi) = self.match_range(query);
        let hi = hi.min(lo.saturating_add(limit));

        let mut out = Vec::with_capacity(hi - lo);
        for slot in lo..hi {
            let position = self.sa[slot];
            let record = self.suffix_owners[slot];
            let offset = (position - self.starts[record as usize]) as usize;
            out.push(Hit {
                record,
                offset,
                position,
            });
        }
        out
    }

    /// Number of suffixes prefixed by `query` (occurrences, not records)
    pub fn count_matches(&self, query: &str) -> usize {
        let (lo, hi) = self.match_range(query);
        hi - lo
    }

    /// Whether `query` occurs anywhere in the corpus
    pub fn contains(&self, query: &str) -> bool {
        let (lo, hi) = self.match_range(query);
        lo < hi
    }
}

#[cfg(test)]
mod tests {
    use crate::index::SuffixIndex;

    fn setup() -> SuffixIndex {
        SuffixIndex::build(&["hello world", "world hello", "foo bar baz"])
    }

    #[test]
    fn finds_records_containing_the_query() {
        let index = setup();
        let found = index.matching_records("hello");
        assert!(found.contains(&0));
        assert!(found.contains(&1));
        assert!(!found.contains(&2));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let index = setup();
        let found = index.matching_records("HELLO");
        assert!(found.contains(&0));
        assert!(found.contains(&1));
    }

    #[test]
    fn no_match_yields_nothing() {
        let index = setup();
        assert!(index.matching_records("notfound").is_empty());
        assert_eq!(index.match_range("notfound"), (0, 0));
    }

    #[test]
    fn character_outside_the_corpus_short_circuits() {
        let index = setup();
        assert_eq!(index.match_range("héllo"), (0, 0));
    }

    #[test]
    fn empty_query_spans_the_whole_suffix_array() {
        let index = setup();
        let (lo, hi) = index.match_range("");
        assert_eq!((lo, hi), (0, 3 * 12));
        let found = index.matching_records("");
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn repeated_occurrences_dedup_to_one_record() {
        let index = SuffixIndex::build(&["banana"]);
        assert_eq!(index.matching_records("an"), vec![0]);
        assert_eq!(index.count_matches("an"), 2);
    }

    #[test]
    fn hits_carry_record_offsets() {
        let index = setup();
        let hits = index.hits("hello", 100);
        assert_eq!(hits.len(), 2);

        let in_first = hits.iter().find(|h| h.record == 0).unwrap();
        assert_eq!(in_first.offset, 0); // "hello" opens record 0

        let in_second = hits.iter().find(|h| h.record == 1).unwrap();
        assert_eq!(in_second.offset, 6); // after "world "
    }

    #[test]
    fn hits_honor_the_limit() {
        let index = SuffixIndex::build(&["aaaaaa"]);
        assert_eq!(index.hits("a", 3).len(), 3);
        assert_eq!(index.hits("a", 100).len(), 6);
    }

    #[test]
    fn contains_and_count() {
        let index = setup();
        assert!(index.contains("o w"));
        assert!(!index.contains("ow"));
        assert_eq!(index.count_matches("o"), 6);
        assert_eq!(index.count_matches("zzz"), 0);
    }

    #[test]
    fn empty_index_answers_without_panicking() {
        let index = SuffixIndex::build::<&str>(&[]);
        assert_eq!(index.match_range(""), (0, 0));
        assert!(index.matching_records("a").is_empty());
        assert!(!index.contains(""));
    }
}
