//! Data models for hire portal records.
//!
//! These mirror the shapes served by the portal API. Only the fields the core
//! needs are modelled; unknown fields are ignored on deserialization.

pub mod application;
pub mod status;

pub use application::Application;
pub use status::{StatusOption, EXCLUDED_STATUS_IDS};
