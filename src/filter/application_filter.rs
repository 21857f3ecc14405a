//! Status and text filtering for applications.
//!
//! Text queries match against the applicant's name (substring or
//! Levenshtein similarity), email (case-insensitive substring) or phone
//! (canonical equivalence).

use crate::domain::{ApplicationId, EmailAddress, PhoneNumber};
use crate::models::Application;

/// Minimum name similarity (0.0-1.0) for a fuzzy name match.
const MIN_NAME_SIMILARITY: f64 = 0.5;

/// Filter over a list of applications.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationFilter {
    /// Only keep applications with this status
    pub status_id: Option<u32>,

    /// Free-text search query
    pub query: Option<String>,
}

impl ApplicationFilter {
    /// Create a filter that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one status.
    pub fn with_status(mut self, status_id: u32) -> Self {
        self.status_id = Some(status_id);
        self
    }

    /// Set the search query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Whether `application` passes the filter.
    pub fn matches(&self, application: &Application) -> bool {
        if let Some(status_id) = self.status_id {
            if application.status_id != status_id {
                return false;
            }
        }

        match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => Self::matches_query(query, application),
        }
    }

    /// Ids of the applications that pass the filter, in input order.
    pub fn visible_ids(&self, applications: &[Application]) -> Vec<ApplicationId> {
        let visible: Vec<ApplicationId> = applications
            .iter()
            .filter(|a| self.matches(a))
            .map(|a| a.id.clone())
            .collect();

        tracing::debug!(
            total = applications.len(),
            visible = visible.len(),
            status_id = ?self.status_id,
            "Filtered applications"
        );

        visible
    }

    fn matches_query(query: &str, application: &Application) -> bool {
        // A query that is itself an all-digit phone number only matches phones
        if let Some(phone) = Self::phone_query(query) {
            return application
                .applicant_phone
                .as_deref()
                .and_then(|p| PhoneNumber::new(p).ok())
                .is_some_and(|p| p == phone);
        }

        // Malformed stored addresses never match
        let email = application
            .applicant_email
            .as_deref()
            .and_then(|e| EmailAddress::new(e).ok());
        if let Some(email) = email {
            if email.as_str().to_lowercase().contains(&query.to_lowercase()) {
                return true;
            }
        }

        match &application.applicant_name {
            Some(name) => name_similarity(query, name) >= MIN_NAME_SIMILARITY,
            None => false,
        }
    }

    /// Normalization keeps any characters after the prefix, so a name like
    /// "9lives Cruz" would otherwise be taken for a phone number.
    fn phone_query(query: &str) -> Option<PhoneNumber> {
        PhoneNumber::new(query)
            .ok()
            .filter(|p| p.national_number().bytes().all(|b| b.is_ascii_digit()))
    }
}

/// Similarity between a query and a name, from 0.0 to 1.0.
///
/// Exact and substring matches score 1.0; otherwise the score is one minus
/// the Levenshtein distance relative to the longer string.
pub fn name_similarity(query: &str, name: &str) -> f64 {
    let query = normalize_name(query);
    let name = normalize_name(name);

    if query.is_empty() || name.is_empty() {
        return 0.0;
    }

    if name.contains(&query) {
        return 1.0;
    }

    let distance = levenshtein_distance(&query, &name);
    let max_len = query.chars().count().max(name.chars().count());
    1.0 - (distance as f64 / max_len as f64)
}

/// Normalize a name for matching.
///
/// Converts to lowercase and collapses whitespace.
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Calculate Levenshtein distance between two strings.
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    // Single rolling row
    let mut row: Vec<usize> = (0..=s2_chars.len()).collect();

    for (i, c1) in s1_chars.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = row[j + 1];
            row[j + 1] = next;
        }
    }

    row[s2_chars.len()]
}
