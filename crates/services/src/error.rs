//! Shared error types for the services crate.

use thiserror::Error;

use pawmatch_core::matcher::MatchError;
use pawmatch_core::model::{BreedBookError, RatingError, SessionError, SummaryError};

/// Errors emitted by `QuestionnaireService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlowError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

/// Errors emitted by `MatcherService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MatcherServiceError {
    #[error("built-in breed book does not parse: {0}")]
    Data(#[from] serde_json::Error),
    #[error(transparent)]
    Book(#[from] BreedBookError),
    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Errors emitted while loading or exporting preference files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PreferenceError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("preferences file does not parse: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown trait '{raw}', known traits: {known}")]
    UnknownTrait { raw: String, known: String },
    #[error(transparent)]
    Importance(#[from] RatingError),
}
