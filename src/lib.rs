//! # Decsort
//!
//! `decsort` is a generic **decorate-sort-undecorate** (Schwartzian
//! transform) sorting library: it reorders a sequence by a caller-supplied
//! key while computing the key for each element **exactly once**, no matter
//! how many comparisons the sort performs.
//!
//! Comparator-based sorting recomputes the key on every comparison, turning
//! `O(n log n)` comparisons into `O(n log n)` key evaluations. When the key
//! is expensive relative to a comparison — derived geometric quantities,
//! hashes, parsed fields — that is the dominant cost. `decsort` pays `n`
//! evaluations, then sorts cheap precomputed pairs.
//!
//! ## Key Features
//!
//! - **One key evaluation per element**: guaranteed by construction, for
//!   any input size and any comparison count.
//! - **Caller-supplied orderings**: every entry point has a `_by` variant
//!   taking a strict weak ordering over keys, for key types without a
//!   usable natural order (floats, periodic angles).
//! - **Stable and deterministic**: elements with equivalent keys keep their
//!   original relative order; sorting a sorted sequence is the identity.
//! - **Fallible extraction**: the `try_` variants propagate extractor
//!   errors and leave the sequence untouched on failure.
//! - **Index or in-place**: [`decsort`] computes the sorted order of any
//!   [`KeySource`] without touching it; [`decsort_mut`] permutes a slice in
//!   place with swaps only (no `Clone` bound on elements).
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! For slices and `Vec`s, [`decsort_mut`] sorts in place:
//!
//! ```rust
//! use decsort::decsort_mut;
//!
//! let mut data = vec!["-6", "2", "15", "-1", "0"];
//!
//! // parse() runs once per element, not once per comparison
//! decsort_mut(&mut data, |s| s.parse::<i32>().unwrap());
//!
//! assert_eq!(data, vec!["-6", "-1", "0", "2", "15"]);
//! ```
//!
//! ### Custom Orderings
//!
//! Keys without a natural total order take a predicate:
//!
//! ```rust
//! use decsort::decsort_mut_by;
//!
//! let mut readings = vec![(3, 0.5f64), (1, 2.25), (2, -1.0)];
//! decsort_mut_by(&mut readings, |r| r.1, |a, b| a < b);
//!
//! assert_eq!(readings, vec![(2, -1.0), (3, 0.5), (1, 2.25)]);
//! ```
//!
//! ### Custom Collections
//!
//! To compute the sorted order of a collection that is not a slice —
//! columnar storage, `VecDeque`, anything with `O(1)` positional access —
//! implement the [`KeySource`] trait.
//!
//! ```rust
//! use decsort::{decsort, KeySource};
//!
//! struct Track {
//!     duration_ms: u32,
//! }
//!
//! // Wrapper struct to avoid orphan rule violation (impl foreign trait on foreign type).
//! struct Playlist(Vec<Track>);
//!
//! impl KeySource for Playlist {
//!     type Item = Track;
//!
//!     fn item(&self, index: usize) -> &Track {
//!         &self.0[index]
//!     }
//!
//!     fn len(&self) -> usize {
//!         self.0.len()
//!     }
//! }
//!
//! let playlist = Playlist(vec![
//!     Track { duration_ms: 210_000 },
//!     Track { duration_ms: 185_000 },
//! ]);
//!
//! // Returns indices: [1, 0] (shortest first)
//! let order = decsort(&playlist, |t| t.duration_ms);
//! assert_eq!(order, vec![1, 0]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Key evaluations**: exactly `n`, always.
//! - **Comparisons**: `O(n log n)` over precomputed keys only.
//! - **Memory Overhead**: one temporary vector of `(key, index)` pairs plus
//!   the index vector, `O(n)` total; discarded before the call returns.
//!
//! The facility holds no state between calls. It assumes exclusive access
//! to the sequence for the duration of a call; with the `rayon` feature,
//! `par_` entry points parallelize key extraction while keeping the sort
//! and writeback sequential.

pub mod algo;
pub mod core;
pub use algo::{
    decsort, decsort_by, decsort_mut, decsort_mut_by, try_decsort, try_decsort_by,
    try_decsort_mut, try_decsort_mut_by,
};
#[cfg(feature = "rayon")]
pub use algo::{par_decsort_mut, par_decsort_mut_by};
pub use core::KeySource;

pub mod prelude {
    pub use crate::algo::{
        decsort, decsort_by, decsort_mut, decsort_mut_by, try_decsort, try_decsort_by,
        try_decsort_mut, try_decsort_mut_by,
    };
    #[cfg(feature = "rayon")]
    pub use crate::algo::{par_decsort_mut, par_decsort_mut_by};
    pub use crate::core::KeySource;
}
