//! Query engine: substring range location over the suffix array.
//!
//! Implements the two binary searches that find the contiguous slice of
//! suffixes prefixed by a query, plus result materialization with
//! per-record deduplication.

mod engine;
