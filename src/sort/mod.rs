//! Sort Module
//!
//! In-place, comparator-driven ordering of a `DynamicArray`.
//!
//! ## Algorithm
//! Lomuto-partition quicksort, pivot = last element of the active range.
//! Not stable. Worst case O(n²) on already-ordered input, which is fine for
//! the record counts this crate targets.
//!
//! ## Domain Orderings
//! `SortKey` maps each of the five employee orderings to a comparator.
//! Attendance days sort descending; every other key sorts ascending.

mod order;
mod quicksort;

pub use order::SortKey;
pub use quicksort::{quick_sort, quick_sort_slice};
