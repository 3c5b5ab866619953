//! # sufx - substring search over JSON-shaped records
//!
//! sufx answers "which records contain this text?" with an in-memory
//! generalized suffix array: every record's text is folded to lowercase,
//! flattened into one sentinel-separated symbol stream, and indexed with
//! the DC3 (skew) construction in linear time. A query is two binary
//! searches over the suffix array, so lookups cost O(|q| log n) no matter
//! where the match sits inside a record.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`record`] - JSON-shaped records (opaque payload + required `"string"` text)
//! - [`index`] - Symbol encoding, DC3 suffix array construction, owner maps
//! - [`query`] - Range location by binary search, result materialization
//! - [`model`] - Immutable `build` / `search` / `insert` / `remove` façade
//!
//! ## Quick Start
//!
//! ```
//! # fn main() -> anyhow::Result<()> {
//! use sufx::{Model, Record};
//!
//! let model = Model::build(vec![
//!     Record::new("test").with_field("id", 2),
//!     Record::new("complete").with_field("id", 5),
//! ])?;
//!
//! // Case-insensitive substring match anywhere in the text
//! let found = model.search("ES");
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].text(), Some("test"));
//!
//! // Mutation derives a fresh model; the original is untouched
//! let larger = model.insert([Record::new("suffix")])?;
//! assert_eq!(larger.len(), 3);
//! assert_eq!(model.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Model Lifecycle
//!
//! A [`Model`] is fully constructed from its record list and immutable
//! afterwards, so concurrent readers need no synchronization. `insert`
//! and `remove` rebuild the index over a derived record list and hand
//! back a fresh model; either instance can be dropped independently.

pub mod index;
pub mod model;
pub mod query;
pub mod record;

// Re-exports for the public API
pub use index::types::{Hit, IndexStats, RecordId};
pub use index::SuffixIndex;
pub use model::{Model, RemoveCriteria};
pub use record::Record;
