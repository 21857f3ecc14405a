//! Validation and normalization of free-text input.
//!
//! Every function here is pure and total: malformed or missing input yields
//! `false` or `None`, never a panic. Inputs are taken as
//! `impl Into<Option<&str>>` so callers can pass either a `&str` or an
//! optional value straight from a form field.

pub mod email;
pub mod hash;
pub mod phone;
pub mod text;

pub use email::is_valid_email;
pub use hash::{bucket_for, hash_to_u32};
pub use phone::{
    are_phone_numbers_equivalent, is_valid_philippine_phone_number, normalize_phone_number,
    CANONICAL_PHONE_PREFIX,
};
pub use text::default_if_blank;
