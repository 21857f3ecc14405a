//! Explicitly scoped loading state.
//!
//! Views that show a progress indicator own a [`LoadingState`] and pass it by
//! reference to whatever starts or finishes work, instead of looking it up
//! from ambient shared state.

pub mod loading_state;

pub use loading_state::{LoadingState, LoadingTicket};
