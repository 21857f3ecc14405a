//! Action menu construction.
//!
//! Menus are built once from status data into [`MenuEntry`] values, so the
//! presentation layer matches on the entry kind instead of probing fields.

pub mod status_menu;

pub use status_menu::{build_status_menu, MenuEntry, StatusAction, STATUS_MENU_HEADING};
