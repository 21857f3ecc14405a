//! Domain value objects and types.
//!
//! Type-safe wrappers for application identifiers, email addresses and
//! phone numbers. Each validates at construction time, so an invalid value
//! cannot be represented once it crosses into the rest of the portal.

pub mod application_id;
pub mod email;
pub mod errors;
pub mod phone;

pub use application_id::ApplicationId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
