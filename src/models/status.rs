//! Application status options.

use serde::{Deserialize, Serialize};

/// Status ids never offered as user-facing actions.
pub const EXCLUDED_STATUS_IDS: [u32; 2] = [0, 7];

/// An application status as served by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusOption {
    /// Status identifier
    pub id: u32,

    /// Human-readable status name
    pub name: String,
}

impl StatusOption {
    /// Create a new status option.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Whether this status may be offered as an action.
    pub fn is_actionable(&self) -> bool {
        !EXCLUDED_STATUS_IDS.contains(&self.id)
    }
}
