//! Multi-select state for lists of visible records.
//!
//! This module provides a copy-on-write selection set whose "select all"
//! operations are always relative to the list the caller currently shows.

pub mod selection_set;

pub use selection_set::{AllSelectedCheck, SelectionSet, SelectionSnapshot};
