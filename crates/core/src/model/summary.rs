use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{Preference, Rating, Session, TraitKey};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("the session has not reached the summary screen")]
    NotComplete,

    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("question {index} has no recorded answer")]
    Unanswered { index: usize },
}

/// One answered question in summary form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub trait_key: TraitKey,
    pub prompt: String,
    pub rating: Rating,
}

/// Immutable aggregate of a completed questionnaire run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSummary {
    responses: Vec<Response>,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl ResponseSummary {
    /// Build a summary from a completed session.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::NotComplete` unless the session reached the
    /// summary screen, `SummaryError::Unanswered` if any slot is missing a
    /// rating, and `SummaryError::InvalidTimeRange` if the completion time
    /// precedes the start time.
    pub fn from_session(session: &Session) -> Result<Self, SummaryError> {
        let Some(completed_at) = session.completed_at() else {
            return Err(SummaryError::NotComplete);
        };
        if !session.is_complete() {
            return Err(SummaryError::NotComplete);
        }
        let started_at = session.started_at();
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }

        let mut responses = Vec::with_capacity(session.total_questions());
        for (index, question) in session.questions().iter().enumerate() {
            let rating = session
                .answer_at(index)
                .ok_or(SummaryError::Unanswered { index })?;
            responses.push(Response {
                trait_key: question.trait_key(),
                prompt: question.prompt().to_string(),
                rating,
            });
        }

        Ok(Self {
            responses,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// The ordered numeric dump shown on the summary screen: one value in
    /// 1-5 per question, in question order.
    #[must_use]
    pub fn ratings(&self) -> Vec<u8> {
        self.responses
            .iter()
            .map(|response| response.rating.value())
            .collect()
    }

    /// The matcher input this run produced: one preference per question.
    #[must_use]
    pub fn preferences(&self) -> Vec<Preference> {
        self.responses
            .iter()
            .map(|response| Preference::new(response.trait_key, response.rating))
            .collect()
    }
}
