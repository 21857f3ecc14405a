//! Status action menu for applications.

use crate::models::StatusOption;
use serde::Serialize;

/// Heading shown above the status actions.
pub const STATUS_MENU_HEADING: &str = "Move to";

/// Changing an application to a given status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusAction {
    /// Status the action moves the application to
    pub status_id: u32,

    /// Label shown to the user
    pub label: String,

    /// Whether the application already has this status
    pub is_current: bool,
}

/// One row of an action menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEntry {
    /// Non-interactive heading
    Heading { text: String },

    /// Selectable action
    Action(StatusAction),

    /// Visual divider
    Separator,
}

impl MenuEntry {
    /// The action carried by this entry, if any.
    pub fn as_action(&self) -> Option<&StatusAction> {
        match self {
            Self::Action(action) => Some(action),
            _ => None,
        }
    }

    /// Whether the entry can be chosen.
    pub fn is_selectable(&self) -> bool {
        matches!(self, Self::Action(action) if !action.is_current)
    }
}

/// Build the status menu for an application.
///
/// Produces a heading followed by one action per actionable status, in the
/// order given. Statuses in [`crate::models::EXCLUDED_STATUS_IDS`] are
/// skipped. A blank status name falls back to `Status <id>`.
pub fn build_status_menu(
    statuses: &[StatusOption],
    current_status: Option<u32>,
) -> Vec<MenuEntry> {
    let mut entries = vec![MenuEntry::Heading {
        text: STATUS_MENU_HEADING.to_string(),
    }];

    entries.extend(
        statuses
            .iter()
            .filter(|status| status.is_actionable())
            .map(|status| {
                let label = match status.name.trim() {
                    "" => format!("Status {}", status.id),
                    name => name.to_string(),
                };
                MenuEntry::Action(StatusAction {
                    status_id: status.id,
                    label,
                    is_current: current_status == Some(status.id),
                })
            }),
    );

    entries
}
