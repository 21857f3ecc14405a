//! Copy-on-write selection set.
//!
//! Every mutation installs a fresh set behind a new `Arc`, so a snapshot
//! handed out before a mutation keeps describing the selection as it was.
//! The owning view can compare the previous and next snapshots across renders
//! without locking.

use crate::config::Config;
use crate::domain::ApplicationId;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use std::sync::Arc;

/// Shared, immutable view of a selection at one point in time.
pub type SelectionSnapshot<K> = Arc<HashSet<K>>;

/// How [`SelectionSet::is_all_selected`] decides that every visible item is
/// selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AllSelectedCheck {
    /// Compare the number of selected ids with the number of visible items.
    ///
    /// Cheap, but stale ids left over from an earlier, larger list can make
    /// an incomplete selection look complete. Call
    /// [`SelectionSet::retain_visible`] when the visible list shrinks.
    #[default]
    Cardinality,

    /// Require the selection to equal the set of visible ids.
    Exact,
}

impl FromStr for AllSelectedCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cardinality" => Ok(Self::Cardinality),
            "exact" => Ok(Self::Exact),
            other => Err(format!(
                "Must be one of 'cardinality' or 'exact', got: {}",
                other
            )),
        }
    }
}

impl fmt::Display for AllSelectedCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cardinality => write!(f, "cardinality"),
            Self::Exact => write!(f, "exact"),
        }
    }
}

/// Set of selected identifiers for a list of visible records.
///
/// # Example
///
/// ```
/// use hire_portal_core::SelectionSet;
///
/// let visible = ["a", "b", "c"];
/// let mut selection: SelectionSet<&str> = SelectionSet::new();
///
/// selection.toggle_select_all(&visible);
/// assert_eq!(selection.len(), 3);
///
/// selection.toggle_select_all(&visible);
/// assert!(selection.is_empty());
/// ```
#[derive(Clone)]
pub struct SelectionSet<K = ApplicationId>
where
    K: Eq + Hash + Clone,
{
    selected: SelectionSnapshot<K>,
    check: AllSelectedCheck,
}

impl<K> SelectionSet<K>
where
    K: Eq + Hash + Clone,
{
    /// Create an empty selection using the cardinality check.
    pub fn new() -> Self {
        Self::with_check(AllSelectedCheck::default())
    }

    /// Create an empty selection using the given all-selected check.
    pub fn with_check(check: AllSelectedCheck) -> Self {
        Self {
            selected: Arc::new(HashSet::new()),
            check,
        }
    }

    /// Create an empty selection using the configured all-selected check.
    pub fn from_config(config: &Config) -> Self {
        Self::with_check(config.select_all_check)
    }

    /// Set membership of `id`.
    ///
    /// With `Some(true)` the id is added, with `Some(false)` it is removed,
    /// and with `None` its membership is flipped. Removing an id that is not
    /// selected leaves the selection unchanged.
    pub fn toggle_select(&mut self, id: K, explicit: Option<bool>) {
        let currently = self.selected.contains(&id);
        let wanted = explicit.unwrap_or(!currently);

        if wanted == currently {
            return;
        }

        let mut next = HashSet::clone(&self.selected);
        if wanted {
            next.insert(id);
        } else {
            next.remove(&id);
        }

        tracing::trace!(selected = wanted, size = next.len(), "Selection toggled");
        self.selected = Arc::new(next);
    }

    /// Replace the selection with exactly the ids in `visible`.
    ///
    /// Previously selected ids that are not visible are dropped.
    pub fn select_all<'a, I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        let next: HashSet<K> = visible.into_iter().cloned().collect();
        tracing::debug!(size = next.len(), "Selected all visible items");
        self.selected = Arc::new(next);
    }

    /// Clear the selection.
    pub fn unselect_all(&mut self) {
        tracing::debug!(previous = self.selected.len(), "Cleared selection");
        self.selected = Arc::new(HashSet::new());
    }

    /// Clear the selection if every visible item is selected, otherwise
    /// select exactly the visible items.
    pub fn toggle_select_all(&mut self, visible: &[K]) {
        if self.is_all_selected(visible) {
            self.unselect_all();
        } else {
            self.select_all(visible);
        }
    }

    /// Whether every visible item counts as selected under the configured
    /// [`AllSelectedCheck`].
    ///
    /// Duplicates in `visible` count towards its length under
    /// `Cardinality`, matching the list as rendered.
    pub fn is_all_selected(&self, visible: &[K]) -> bool {
        match self.check {
            AllSelectedCheck::Cardinality => self.selected.len() == visible.len(),
            AllSelectedCheck::Exact => {
                let visible: HashSet<&K> = visible.iter().collect();
                visible.len() == self.selected.len()
                    && visible.iter().all(|id| self.selected.contains(*id))
            }
        }
    }

    /// Drop selected ids that are not in `visible`.
    ///
    /// Returns the number of ids removed. The selection is left untouched
    /// (no new snapshot) when nothing is stale.
    pub fn retain_visible(&mut self, visible: &[K]) -> usize {
        let visible: HashSet<&K> = visible.iter().collect();
        let stale = self
            .selected
            .iter()
            .filter(|id| !visible.contains(id))
            .count();

        if stale > 0 {
            let next: HashSet<K> = self
                .selected
                .iter()
                .filter(|id| visible.contains(id))
                .cloned()
                .collect();
            tracing::debug!(removed = stale, size = next.len(), "Dropped stale selections");
            self.selected = Arc::new(next);
        }

        stale
    }

    /// Whether `id` is selected.
    pub fn is_selected<Q>(&self, id: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.selected.contains(id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The all-selected check in use.
    pub fn check(&self) -> AllSelectedCheck {
        self.check
    }

    /// Current selection. Later mutations never alter a returned snapshot.
    pub fn snapshot(&self) -> SelectionSnapshot<K> {
        Arc::clone(&self.selected)
    }
}

impl<K> Default for SelectionSet<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for SelectionSet<K>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionSet")
            .field("check", &self.check)
            .field("selected", &self.selected)
            .finish()
    }
}
