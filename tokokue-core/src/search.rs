//! Client-side menu search.
//!
//! Matching is a case-insensitive substring test of the trimmed query against
//! each card title. There is no index; the menu is small.

use crate::notice::Notice;
use std::collections::BTreeSet;

/// Lower-case and trim a raw query.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Whether a card title matches an already-normalized query.
#[must_use]
pub fn title_matches(title: &str, normalized_query: &str) -> bool {
    title.to_lowercase().contains(normalized_query)
}

/// Result of applying a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty query; every card is visible again.
    Reset,
    /// At least one card matched; the page should scroll to the menu and
    /// collapse the search box.
    Matched { count: usize },
    /// Nothing matched. Every card is hidden until the caller restores them
    /// after [`crate::constants::SEARCH_RESTORE_MS`].
    NoResults { notice: Notice },
}

/// Which cards are currently hidden by the search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    hidden: BTreeSet<String>,
}

impl SearchFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a raw query against the card titles.
    pub fn apply<'a>(
        &mut self,
        raw_query: &str,
        titles: impl IntoIterator<Item = &'a str>,
    ) -> SearchOutcome {
        let query = normalize_query(raw_query);
        if query.is_empty() {
            self.reset();
            return SearchOutcome::Reset;
        }

        self.hidden.clear();
        let mut count = 0;
        for title in titles {
            if title_matches(title, &query) {
                count += 1;
            } else {
                self.hidden.insert(title.to_string());
            }
        }

        if count == 0 {
            SearchOutcome::NoResults {
                notice: Notice::NoResults,
            }
        } else {
            SearchOutcome::Matched { count }
        }
    }

    /// Show every card again.
    pub fn reset(&mut self) {
        self.hidden.clear();
    }

    #[must_use]
    pub fn is_hidden(&self, title: &str) -> bool {
        self.hidden.contains(title)
    }

    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.hidden.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLES: [&str; 4] = ["Red Velvet", "Black Forest", "Cheesecake", "Red Bean Bun"];

    #[test]
    fn query_is_trimmed_and_lowercased() {
        assert_eq!(normalize_query("  ReD  "), "red");
    }

    #[test]
    fn matching_hides_the_rest() {
        let mut filter = SearchFilter::new();
        let outcome = filter.apply(" RED ", TITLES);
        assert_eq!(outcome, SearchOutcome::Matched { count: 2 });
        assert!(filter.is_hidden("Black Forest"));
        assert!(filter.is_hidden("Cheesecake"));
        assert!(!filter.is_hidden("Red Velvet"));
    }

    #[test]
    fn empty_query_clears_previous_filter() {
        let mut filter = SearchFilter::new();
        filter.apply("cheese", TITLES);
        assert_eq!(filter.hidden_count(), 3);
        assert_eq!(filter.apply("   ", TITLES), SearchOutcome::Reset);
        assert_eq!(filter.hidden_count(), 0);
    }

    #[test]
    fn zero_matches_hides_everything_until_reset() {
        let mut filter = SearchFilter::new();
        let outcome = filter.apply("croissant", TITLES);
        assert_eq!(
            outcome,
            SearchOutcome::NoResults {
                notice: Notice::NoResults
            }
        );
        assert_eq!(filter.hidden_count(), TITLES.len());
        filter.reset();
        assert!(TITLES.iter().all(|t| !filter.is_hidden(t)));
    }
}
