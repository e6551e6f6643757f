//! Breed matching: conjunctive trait queries with importance-ordered
//! relaxation and a scored ranking over the full preference list.

use serde::Serialize;
use thiserror::Error;

use crate::model::{BreedBook, Preference, TraitKey};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatchError {
    #[error("min_matches must be at least 1")]
    MinMatchesZero,
}

/// One ranked candidate with its score against the full preference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchEntry {
    pub breed: String,
    pub score: u32,
    pub matched_count: usize,
    pub matched_traits: Vec<TraitKey>,
}

/// Outcome of a matching run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    /// Candidates that survived the (possibly relaxed) query, best first.
    pub ranked: Vec<MatchEntry>,
    /// Traits still enforced by the final query.
    pub used_traits: Vec<TraitKey>,
    /// Traits dropped during relaxation, in drop order.
    pub dropped_traits: Vec<TraitKey>,
}

impl MatchReport {
    /// Ranked breed names, best first.
    #[must_use]
    pub fn breeds(&self) -> Vec<&str> {
        self.ranked.iter().map(|entry| entry.breed.as_str()).collect()
    }
}

/// Find at least `min_matches` candidate breeds for the given preferences.
///
/// The query starts as the conjunction of every preference's trait. While it
/// yields fewer than `min_matches` candidates and preferences remain, the
/// first preference with the lowest importance is dropped and the query runs
/// again. Candidates are then scored against the FULL original preference
/// list (dropped preferences still earn points), and ranked by score, then
/// matched-trait count, then breed name.
///
/// # Errors
///
/// Returns `MatchError::MinMatchesZero` if `min_matches` is zero.
pub fn find_matches(
    book: &BreedBook,
    preferences: &[Preference],
    min_matches: usize,
) -> Result<MatchReport, MatchError> {
    if min_matches == 0 {
        return Err(MatchError::MinMatchesZero);
    }

    let mut active: Vec<Preference> = preferences.to_vec();
    let mut dropped: Vec<Preference> = Vec::new();

    let mut candidates = query_candidates(book, &active);
    while candidates.len() < min_matches && !active.is_empty() {
        let lowest = active
            .iter()
            .map(|pref| pref.importance())
            .min()
            .unwrap_or_default();
        let drop_index = active
            .iter()
            .position(|pref| pref.importance() == lowest)
            .unwrap_or(0);
        dropped.push(active.remove(drop_index));
        candidates = query_candidates(book, &active);
    }

    let mut ranked: Vec<MatchEntry> = candidates
        .into_iter()
        .map(|name| score_candidate(book, &name, preferences))
        .collect();
    ranked.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(b.matched_count.cmp(&a.matched_count))
            .then_with(|| a.breed.cmp(&b.breed))
    });

    Ok(MatchReport {
        ranked,
        used_traits: active.iter().map(Preference::trait_key).collect(),
        dropped_traits: dropped.iter().map(Preference::trait_key).collect(),
    })
}

/// Breeds satisfying every active preference, in book order. With no active
/// preferences every breed qualifies.
fn query_candidates(book: &BreedBook, active: &[Preference]) -> Vec<String> {
    book.iter()
        .filter(|breed| active.iter().all(|pref| breed.has_trait(pref.trait_key())))
        .map(|breed| breed.name().to_string())
        .collect()
}

fn score_candidate(book: &BreedBook, name: &str, preferences: &[Preference]) -> MatchEntry {
    let breed = book.iter().find(|breed| breed.name() == name);
    let mut score = 0_u32;
    let mut matched_traits = Vec::new();

    for pref in preferences {
        if breed.is_some_and(|breed| breed.has_trait(pref.trait_key())) {
            score += u32::from(pref.importance().value());
            matched_traits.push(pref.trait_key());
        }
    }

    MatchEntry {
        breed: name.to_string(),
        score,
        matched_count: matched_traits.len(),
        matched_traits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Breed, Rating};

    fn pref(key: TraitKey, importance: u8) -> Preference {
        Preference::new(key, Rating::from_u8(importance).unwrap())
    }

    fn small_book() -> BreedBook {
        BreedBook::new(vec![
            Breed::new(
                "Basenji",
                [TraitKey::Shedding, TraitKey::BarkingLevel, TraitKey::Size],
            ),
            Breed::new(
                "Beagle",
                [
                    TraitKey::Energy,
                    TraitKey::Size,
                    TraitKey::GoodWithChildren,
                    TraitKey::GoodWithOtherDogs,
                ],
            ),
            Breed::new(
                "Border Collie",
                [TraitKey::Energy, TraitKey::Trainability],
            ),
            Breed::new(
                "Bichon Frise",
                [
                    TraitKey::Shedding,
                    TraitKey::Size,
                    TraitKey::GoodWithChildren,
                    TraitKey::GoodWithOtherDogs,
                    TraitKey::Demeanor,
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn zero_min_matches_is_rejected() {
        let err = find_matches(&small_book(), &[], 0).unwrap_err();
        assert_eq!(err, MatchError::MinMatchesZero);
    }

    #[test]
    fn no_preferences_returns_the_whole_book() {
        let report = find_matches(&small_book(), &[], 1).unwrap();
        assert_eq!(report.ranked.len(), 4);
        assert!(report.used_traits.is_empty());
        assert!(report.dropped_traits.is_empty());
        // All scores are zero, so the ranking falls back to name order.
        assert_eq!(report.breeds()[0], "Basenji");
    }

    #[test]
    fn conjunction_keeps_only_breeds_with_every_trait() {
        let prefs = [pref(TraitKey::Size, 4), pref(TraitKey::GoodWithChildren, 5)];
        let report = find_matches(&small_book(), &prefs, 1).unwrap();

        assert_eq!(report.breeds(), vec!["Beagle", "Bichon Frise"]);
        assert!(report.dropped_traits.is_empty());
    }

    #[test]
    fn relaxation_drops_the_lowest_importance_first() {
        // No breed has all three; barking_level (importance 2) must go first.
        let prefs = [
            pref(TraitKey::Energy, 5),
            pref(TraitKey::BarkingLevel, 2),
            pref(TraitKey::Trainability, 4),
        ];
        let report = find_matches(&small_book(), &prefs, 1).unwrap();

        assert_eq!(report.dropped_traits, vec![TraitKey::BarkingLevel]);
        assert_eq!(
            report.used_traits,
            vec![TraitKey::Energy, TraitKey::Trainability]
        );
        assert_eq!(report.breeds(), vec!["Border Collie"]);
    }

    #[test]
    fn relaxation_drops_the_first_of_equal_importance() {
        // Nothing satisfies shedding+energy together; both rated 3, so the
        // earlier preference (shedding) is dropped first.
        let prefs = [pref(TraitKey::Shedding, 3), pref(TraitKey::Energy, 3)];
        let report = find_matches(&small_book(), &prefs, 2).unwrap();

        assert_eq!(report.dropped_traits, vec![TraitKey::Shedding]);
        assert_eq!(report.breeds(), vec!["Beagle", "Border Collie"]);
    }

    #[test]
    fn scoring_counts_dropped_preferences_too() {
        // Only two breeds satisfy size+shedding, so reaching three matches
        // drops size first (lower importance), then shedding. Dropped
        // preferences still score: the shedding breeds outrank Beagle.
        let prefs = [pref(TraitKey::Size, 3), pref(TraitKey::Shedding, 5)];
        let report = find_matches(&small_book(), &prefs, 3).unwrap();

        assert_eq!(
            report.dropped_traits,
            vec![TraitKey::Size, TraitKey::Shedding]
        );
        assert!(report.used_traits.is_empty());

        // Basenji and Bichon Frise both score 3+5=8; the tie breaks by name.
        assert_eq!(
            report.breeds(),
            vec!["Basenji", "Bichon Frise", "Beagle", "Border Collie"]
        );
        let beagle = report
            .ranked
            .iter()
            .find(|entry| entry.breed == "Beagle")
            .unwrap();
        assert_eq!(beagle.score, 3);
    }

    #[test]
    fn ties_break_by_matched_count_then_name() {
        let book = BreedBook::new(vec![
            Breed::new("Zeta", [TraitKey::Energy]),
            Breed::new("Alpha", [TraitKey::Energy]),
            Breed::new("Mid", [TraitKey::Shedding, TraitKey::Grooming]),
        ])
        .unwrap();
        // Mid matches two traits worth 2+2; Alpha/Zeta match one worth 4.
        let prefs = [
            pref(TraitKey::Energy, 4),
            pref(TraitKey::Shedding, 2),
            pref(TraitKey::Grooming, 2),
        ];
        let report = find_matches(&book, &prefs, 3).unwrap();

        assert_eq!(report.breeds(), vec!["Mid", "Alpha", "Zeta"]);
    }

    #[test]
    fn entry_serializes_with_the_original_report_shape() {
        let entry = MatchEntry {
            breed: "Beagle".to_string(),
            score: 9,
            matched_count: 2,
            matched_traits: vec![TraitKey::Energy, TraitKey::Size],
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"breed":"Beagle","score":9,"matched_count":2,"matched_traits":["energy","size"]}"#
        );
    }
}
