use pawmatch_core::Clock;
use pawmatch_core::model::{
    AnswerOutcome, QuestionSet, Rating, ResponseSummary, Session,
};

use crate::error::FlowError;

/// Result of answering the currently displayed question.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerResult {
    pub outcome: AnswerOutcome,
    /// Present exactly when the answer completed the questionnaire.
    pub summary: Option<ResponseSummary>,
}

/// Orchestrates questionnaire runs with clock-stamped lifecycle times.
#[derive(Debug, Clone)]
pub struct QuestionnaireService {
    clock: Clock,
}

impl QuestionnaireService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// A fresh session over the shipped question set, showing the intro
    /// screen.
    #[must_use]
    pub fn new_session(&self) -> Session {
        Session::new(QuestionSet::standard(), self.clock.now())
    }

    /// Dismiss the intro screen.
    ///
    /// # Errors
    ///
    /// Returns `FlowError` if the session is already past the intro.
    pub fn start(&self, session: &mut Session) -> Result<(), FlowError> {
        session.start()?;
        Ok(())
    }

    /// Answer the current question; builds the response summary when the
    /// last answer lands.
    ///
    /// # Errors
    ///
    /// Returns `FlowError` for transitions the view never offers.
    pub fn answer(
        &self,
        session: &mut Session,
        rating: Rating,
    ) -> Result<AnswerResult, FlowError> {
        let outcome = session.answer(rating, self.clock.now())?;

        let summary = match outcome {
            AnswerOutcome::Completed => {
                let summary = ResponseSummary::from_session(session)?;
                tracing::info!(
                    answered = summary.responses().len(),
                    "questionnaire completed"
                );
                Some(summary)
            }
            AnswerOutcome::Advanced { .. } => None,
        };

        Ok(AnswerResult { outcome, summary })
    }

    /// Reset the session to its initial form with a fresh start time.
    pub fn restart(&self, session: &mut Session) {
        session.restart(self.clock.now());
    }
}
