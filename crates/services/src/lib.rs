#![forbid(unsafe_code)]

pub mod error;
pub mod matcher_service;
pub mod preferences;
pub mod questionnaire;

pub use pawmatch_core::Clock;

pub use error::{FlowError, MatcherServiceError, PreferenceError};
pub use matcher_service::{DEFAULT_MIN_MATCHES, MatcherService};
pub use preferences::{
    export_preferences, load_preferences_from_file, load_preferences_from_str,
};
pub use questionnaire::{AnswerResult, QuestionnaireService};
