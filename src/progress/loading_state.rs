//! Counting loading tracker with an explicit lifecycle.

use std::collections::BTreeMap;

/// Handle for one unit of in-flight work.
///
/// Tickets are not `Clone`, so a ticket can be finished at most once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a ticket that is never finished keeps the state loading"]
pub struct LoadingTicket {
    id: u64,
}

impl LoadingTicket {
    /// Numeric id of this ticket, unique within its state.
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Tracks in-flight work for one view.
///
/// The view is loading while any ticket is open.
#[derive(Debug, Default)]
pub struct LoadingState {
    next_id: u64,
    active: BTreeMap<u64, String>,
}

impl LoadingState {
    /// Create an idle loading state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a unit of work.
    pub fn begin(&mut self, label: impl Into<String>) -> LoadingTicket {
        let id = self.next_id;
        self.next_id += 1;

        let label = label.into();
        tracing::debug!(ticket = id, label = %label, "Loading started");
        self.active.insert(id, label);

        LoadingTicket { id }
    }

    /// Finish a unit of work.
    ///
    /// Returns `false` if the ticket does not belong to this state.
    pub fn finish(&mut self, ticket: LoadingTicket) -> bool {
        match self.active.remove(&ticket.id) {
            Some(label) => {
                tracing::debug!(ticket = ticket.id, label = %label, "Loading finished");
                true
            }
            None => {
                tracing::warn!(ticket = ticket.id, "Finished unknown loading ticket");
                false
            }
        }
    }

    /// Whether any work is in flight.
    pub fn is_loading(&self) -> bool {
        !self.active.is_empty()
    }

    /// Number of open tickets.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Labels of open tickets, oldest first.
    pub fn active_labels(&self) -> Vec<&str> {
        self.active.values().map(String::as_str).collect()
    }

    /// Tear down the state, returning the labels of work never finished.
    pub fn dispose(self) -> Vec<String> {
        if !self.active.is_empty() {
            tracing::warn!(open = self.active.len(), "Loading state disposed with open tickets");
        }
        self.active.into_values().collect()
    }
}
