use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when building a rating.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RatingError {
    #[error("invalid importance value: {0}, expected 1-5")]
    OutOfRange(u8),
}

/// Five-level importance scale used for every questionnaire answer.
///
/// Values map onto the 1-5 scale shown on the rating buttons:
/// - `NotImportant`: the trait does not matter at all
/// - `NiceToHave`: pleasant but never decisive
/// - `Moderate`: worth weighing against other traits
/// - `Important`: a strong preference
/// - `MustHave`: a hard requirement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rating {
    NotImportant,
    NiceToHave,
    #[default]
    Moderate,
    Important,
    MustHave,
}

impl Rating {
    /// All ratings in ascending scale order, for rendering the five controls.
    pub const ALL: [Rating; 5] = [
        Rating::NotImportant,
        Rating::NiceToHave,
        Rating::Moderate,
        Rating::Important,
        Rating::MustHave,
    ];

    /// Converts a numeric value on the 1-5 scale to a `Rating`.
    ///
    /// # Errors
    ///
    /// Returns `RatingError::OutOfRange` if the value is not in 1-5.
    pub fn from_u8(value: u8) -> Result<Self, RatingError> {
        match value {
            1 => Ok(Self::NotImportant),
            2 => Ok(Self::NiceToHave),
            3 => Ok(Self::Moderate),
            4 => Ok(Self::Important),
            5 => Ok(Self::MustHave),
            _ => Err(RatingError::OutOfRange(value)),
        }
    }

    /// The numeric value on the 1-5 scale.
    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            Rating::NotImportant => 1,
            Rating::NiceToHave => 2,
            Rating::Moderate => 3,
            Rating::Important => 4,
            Rating::MustHave => 5,
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
