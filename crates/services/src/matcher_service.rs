use pawmatch_core::matcher::{MatchReport, find_matches};
use pawmatch_core::model::{Breed, BreedBook, Preference, ResponseSummary};

use crate::error::MatcherServiceError;

/// Minimum candidate count the relaxation loop aims for, matching the
/// shipped CLI default.
pub const DEFAULT_MIN_MATCHES: usize = 5;

const BREED_BOOK_JSON: &str = include_str!("data/breeds.json");

/// Ranks breeds from the built-in breed book against trait preferences.
#[derive(Debug, Clone)]
pub struct MatcherService {
    book: BreedBook,
    min_matches: usize,
}

impl MatcherService {
    /// Build a matcher over the built-in breed book.
    ///
    /// # Errors
    ///
    /// Returns `MatcherServiceError` if the embedded book data is invalid.
    pub fn new() -> Result<Self, MatcherServiceError> {
        let breeds: Vec<Breed> = serde_json::from_str(BREED_BOOK_JSON)?;
        Ok(Self {
            book: BreedBook::new(breeds)?,
            min_matches: DEFAULT_MIN_MATCHES,
        })
    }

    /// Build a matcher over a caller-supplied book.
    #[must_use]
    pub fn with_book(book: BreedBook) -> Self {
        Self {
            book,
            min_matches: DEFAULT_MIN_MATCHES,
        }
    }

    #[must_use]
    pub fn with_min_matches(mut self, min_matches: usize) -> Self {
        self.min_matches = min_matches;
        self
    }

    #[must_use]
    pub fn book(&self) -> &BreedBook {
        &self.book
    }

    #[must_use]
    pub fn min_matches(&self) -> usize {
        self.min_matches
    }

    /// Rank breeds against the given preferences.
    ///
    /// # Errors
    ///
    /// Returns `MatcherServiceError` if the configured minimum is invalid.
    pub fn match_preferences(
        &self,
        preferences: &[Preference],
    ) -> Result<MatchReport, MatcherServiceError> {
        let report = find_matches(&self.book, preferences, self.min_matches)?;
        if !report.dropped_traits.is_empty() {
            tracing::debug!(
                dropped = ?report.dropped_traits,
                candidates = report.ranked.len(),
                "relaxed preferences to reach the minimum match count"
            );
        }
        Ok(report)
    }

    /// Rank breeds against a completed questionnaire run.
    ///
    /// # Errors
    ///
    /// Returns `MatcherServiceError` if the configured minimum is invalid.
    pub fn match_summary(
        &self,
        summary: &ResponseSummary,
    ) -> Result<MatchReport, MatcherServiceError> {
        self.match_preferences(&summary.preferences())
    }
}
