//! Hire Portal Core - selection state and input validation for the employer portal.
//!
//! This library holds the side-effect-free logic behind the portal's
//! application lists and input forms. Every operation is synchronous and
//! total: validation reports `false`/`None` rather than failing, and selection
//! updates never error.
//!
//! # Architecture
//!
//! - **selection**: copy-on-write multi-select over visible items
//! - **validation**: email and Philippine phone checks, phone normalization,
//!   blank defaulting, stable string hashing
//! - **domain**: validated value objects (ids, emails, phone numbers)
//! - **models**: application and status records served by the portal API
//! - **filter**: derives the visible application list from filters
//! - **menu**: status action menus as tagged entries
//! - **progress**: explicitly owned loading state
//! - **config** / **error**: environment configuration and its errors

pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod menu;
pub mod models;
pub mod progress;
pub mod selection;
pub mod validation;

pub use config::Config;
pub use domain::{ApplicationId, EmailAddress, PhoneNumber, ValidationError};
pub use error::{ConfigError, ConfigResult};
pub use filter::ApplicationFilter;
pub use menu::{build_status_menu, MenuEntry, StatusAction};
pub use models::{Application, StatusOption};
pub use progress::{LoadingState, LoadingTicket};
pub use selection::{AllSelectedCheck, SelectionSet, SelectionSnapshot};
