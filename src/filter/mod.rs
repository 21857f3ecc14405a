//! Deriving the visible application list.
//!
//! The selection layer works against "visible items": whatever survives the
//! status filter and search box. This module computes that list.

pub mod application_filter;

pub use application_filter::{name_similarity, normalize_name, ApplicationFilter};
