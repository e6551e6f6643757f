use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── TRAIT KEY ─────────────────────────────────────────────────────────────────
//

/// The ten dog traits the shipped questionnaire asks about.
///
/// Keys serialize as `snake_case` and parse loosely from the spellings found
/// in hand-written preference files ("Good With Children", "barking-level").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitKey {
    Shedding,
    Grooming,
    Energy,
    Trainability,
    Demeanor,
    Size,
    GoodWithChildren,
    GoodWithOtherDogs,
    Protectivity,
    BarkingLevel,
}

impl TraitKey {
    /// All known traits, in questionnaire order.
    pub const ALL: [TraitKey; 10] = [
        TraitKey::Shedding,
        TraitKey::Grooming,
        TraitKey::Energy,
        TraitKey::Trainability,
        TraitKey::Demeanor,
        TraitKey::Size,
        TraitKey::GoodWithChildren,
        TraitKey::GoodWithOtherDogs,
        TraitKey::Protectivity,
        TraitKey::BarkingLevel,
    ];

    /// The canonical `snake_case` key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TraitKey::Shedding => "shedding",
            TraitKey::Grooming => "grooming",
            TraitKey::Energy => "energy",
            TraitKey::Trainability => "trainability",
            TraitKey::Demeanor => "demeanor",
            TraitKey::Size => "size",
            TraitKey::GoodWithChildren => "good_with_children",
            TraitKey::GoodWithOtherDogs => "good_with_other_dogs",
            TraitKey::Protectivity => "protectivity",
            TraitKey::BarkingLevel => "barking_level",
        }
    }

    /// Parses a loosely spelled trait name.
    ///
    /// The name is lowercased and every run of non-alphanumeric characters
    /// collapses to a single underscore before matching, so "Good With
    /// Children" and "good-with-children" both resolve.
    #[must_use]
    pub fn parse_loose(raw: &str) -> Option<Self> {
        let normalized = normalize_trait_name(raw);
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
    }
}

impl fmt::Display for TraitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize_trait_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_separator = false;
    for ch in raw.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_separator = true;
        }
    }
    out
}

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

/// One questionnaire prompt, tied to the trait it rates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    trait_key: TraitKey,
    prompt: String,
}

impl Question {
    #[must_use]
    pub fn new(trait_key: TraitKey, prompt: impl Into<String>) -> Self {
        Self {
            trait_key,
            prompt: prompt.into(),
        }
    }

    #[must_use]
    pub fn trait_key(&self) -> TraitKey {
        self.trait_key
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// Errors that can occur when building a question set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionSetError {
    #[error("a question set must contain at least one question")]
    Empty,
}

/// Ordered, fixed-length sequence of questions.
///
/// Immutable for the lifetime of a session; only the answer slots of the
/// session change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// # Errors
    ///
    /// Returns `QuestionSetError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        if questions.is_empty() {
            return Err(QuestionSetError::Empty);
        }
        Ok(Self { questions })
    }

    /// The shipped ten-question configuration, one question per trait.
    #[must_use]
    pub fn standard() -> Self {
        let questions = vec![
            Question::new(
                TraitKey::Shedding,
                "How important is it that your dog sheds very little?",
            ),
            Question::new(
                TraitKey::Grooming,
                "How important is an easy, low-maintenance grooming routine?",
            ),
            Question::new(
                TraitKey::Energy,
                "How important is a high-energy dog that loves exercise?",
            ),
            Question::new(
                TraitKey::Trainability,
                "How important is it that your dog picks up training quickly?",
            ),
            Question::new(
                TraitKey::Demeanor,
                "How important is a friendly, open demeanor toward strangers?",
            ),
            Question::new(
                TraitKey::Size,
                "How important is it that your dog stays small?",
            ),
            Question::new(
                TraitKey::GoodWithChildren,
                "How important is it that your dog is patient with young children?",
            ),
            Question::new(
                TraitKey::GoodWithOtherDogs,
                "How important is it that your dog gets along with other dogs?",
            ),
            Question::new(
                TraitKey::Protectivity,
                "How important is a watchful dog that looks out for its home?",
            ),
            Question::new(
                TraitKey::BarkingLevel,
                "How important is it that your dog rarely barks?",
            ),
        ];
        Self { questions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
