use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{Question, QuestionSet, Rating};

//
// ─── SCREEN ────────────────────────────────────────────────────────────────────
//

/// The one screen a session is showing at any instant.
///
/// The screen IS the session state: there is no boolean pair that could drift
/// into a meaningless combination, and "finished but not started" cannot be
/// expressed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Asking { index: usize },
    Summary,
}

/// What an accepted answer did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Advanced { next_index: usize },
    Completed,
}

/// Errors emitted by session transitions the view never offers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("the questionnaire has not been started")]
    NotStarted,

    #[error("the questionnaire is already running")]
    AlreadyStarted,

    #[error("the questionnaire is already complete")]
    Completed,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// The mutable state of one questionnaire run.
///
/// Steps through the question set one prompt at a time, recording one rating
/// per question, and is discarded wholesale on restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    questions: QuestionSet,
    screen: Screen,
    answers: Vec<Option<Rating>>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl Session {
    /// Create a fresh session on the intro screen with every slot unanswered.
    ///
    /// `now` should come from the services layer clock to keep time
    /// deterministic.
    #[must_use]
    pub fn new(questions: QuestionSet, now: DateTime<Utc>) -> Self {
        let slots = questions.len();
        Self {
            questions,
            screen: Screen::Intro,
            answers: vec![None; slots],
            started_at: now,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Index of the question currently displayed, if any.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.screen {
            Screen::Asking { index } => Some(index),
            Screen::Intro | Screen::Summary => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|index| self.questions.get(index))
    }

    /// The rating stored for the question at `index`, if one was recorded.
    #[must_use]
    pub fn answer_at(&self, index: usize) -> Option<Rating> {
        self.answers.get(index).copied().flatten()
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total_questions().saturating_sub(self.answered_count())
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.screen, Screen::Summary)
    }

    /// Dismiss the intro screen and show the first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyStarted` unless the intro screen is
    /// showing.
    pub fn start(&mut self) -> Result<(), SessionError> {
        match self.screen {
            Screen::Intro => {
                self.screen = Screen::Asking { index: 0 };
                Ok(())
            }
            Screen::Asking { .. } | Screen::Summary => Err(SessionError::AlreadyStarted),
        }
    }

    /// Record a rating for the currently displayed question without
    /// advancing. Recording again before the advance overwrites.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` on the intro screen and
    /// `SessionError::Completed` on the summary screen.
    pub fn record(&mut self, rating: Rating) -> Result<(), SessionError> {
        match self.screen {
            Screen::Intro => Err(SessionError::NotStarted),
            Screen::Summary => Err(SessionError::Completed),
            Screen::Asking { index } => {
                self.answers[index] = Some(rating);
                Ok(())
            }
        }
    }

    /// Record a rating for the currently displayed question and advance:
    /// to the next question, or to the summary screen after the last one.
    ///
    /// `answered_at` should come from the services layer clock; it becomes
    /// the completion time when the last question is answered.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` on the intro screen and
    /// `SessionError::Completed` on the summary screen.
    pub fn answer(
        &mut self,
        rating: Rating,
        answered_at: DateTime<Utc>,
    ) -> Result<AnswerOutcome, SessionError> {
        let index = match self.screen {
            Screen::Intro => return Err(SessionError::NotStarted),
            Screen::Summary => return Err(SessionError::Completed),
            Screen::Asking { index } => index,
        };

        self.answers[index] = Some(rating);

        if index + 1 == self.questions.len() {
            self.screen = Screen::Summary;
            self.completed_at = Some(answered_at);
            Ok(AnswerOutcome::Completed)
        } else {
            let next_index = index + 1;
            self.screen = Screen::Asking { index: next_index };
            Ok(AnswerOutcome::Advanced { next_index })
        }
    }

    /// Reset to the initial state wholesale. Valid from any screen.
    pub fn restart(&mut self, now: DateTime<Utc>) {
        let slots = self.questions.len();
        self.screen = Screen::Intro;
        self.answers = vec![None; slots];
        self.started_at = now;
        self.completed_at = None;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn fresh_session() -> Session {
        Session::new(QuestionSet::standard(), fixed_now())
    }

    #[test]
    fn fresh_session_shows_intro_with_all_slots_unanswered() {
        let session = fresh_session();
        assert_eq!(session.screen(), Screen::Intro);
        assert_eq!(session.total_questions(), 10);
        assert_eq!(session.answered_count(), 0);
        for index in 0..10 {
            assert_eq!(session.answer_at(index), None);
        }
    }

    #[test]
    fn start_moves_to_the_first_question_exactly_once() {
        let mut session = fresh_session();
        session.start().unwrap();
        assert_eq!(session.screen(), Screen::Asking { index: 0 });
        assert_eq!(session.start().unwrap_err(), SessionError::AlreadyStarted);
    }

    #[test]
    fn answering_records_and_advances_through_every_question() {
        let mut session = fresh_session();
        session.start().unwrap();

        for index in 0..9 {
            let rating = Rating::from_u8(u8::try_from(index % 5).unwrap() + 1).unwrap();
            let outcome = session.answer(rating, fixed_now()).unwrap();
            assert_eq!(outcome, AnswerOutcome::Advanced { next_index: index + 1 });
            assert_eq!(session.answer_at(index), Some(rating));
            assert!(!session.is_complete());
        }

        let outcome = session.answer(Rating::MustHave, fixed_now()).unwrap();
        assert_eq!(outcome, AnswerOutcome::Completed);
        assert_eq!(session.answer_at(9), Some(Rating::MustHave));
        assert_eq!(session.screen(), Screen::Summary);
        assert_eq!(session.completed_at(), Some(fixed_now()));
    }

    #[test]
    fn answering_outside_the_question_screen_is_rejected() {
        let mut session = fresh_session();
        assert_eq!(
            session.answer(Rating::Moderate, fixed_now()).unwrap_err(),
            SessionError::NotStarted
        );

        session.start().unwrap();
        for _ in 0..10 {
            session.answer(Rating::Moderate, fixed_now()).unwrap();
        }
        assert_eq!(
            session.answer(Rating::Moderate, fixed_now()).unwrap_err(),
            SessionError::Completed
        );
    }

    #[test]
    fn recording_before_the_advance_overwrites() {
        let mut session = fresh_session();
        session.start().unwrap();

        session.record(Rating::NotImportant).unwrap();
        assert_eq!(session.answer_at(0), Some(Rating::NotImportant));
        session.record(Rating::MustHave).unwrap();
        assert_eq!(session.answer_at(0), Some(Rating::MustHave));

        // The advance keeps the last recorded value.
        session.answer(Rating::Important, fixed_now()).unwrap();
        assert_eq!(session.answer_at(0), Some(Rating::Important));
        assert_eq!(session.screen(), Screen::Asking { index: 1 });
    }

    #[test]
    fn advancing_leaves_the_next_slot_unanswered() {
        let mut session = fresh_session();
        session.start().unwrap();
        session.answer(Rating::MustHave, fixed_now()).unwrap();
        assert_eq!(session.current_index(), Some(1));
        assert_eq!(session.answer_at(1), None);
    }

    #[test]
    fn restart_yields_the_exact_initial_state_regardless_of_history() {
        let initial = fresh_session();

        let mut session = fresh_session();
        session.start().unwrap();
        for value in [3, 1, 5, 2, 4, 3, 1, 5, 2, 4] {
            session
                .answer(Rating::from_u8(value).unwrap(), fixed_now())
                .unwrap();
        }
        assert!(session.is_complete());

        session.restart(fixed_now());
        assert_eq!(session, initial);

        // Restart is logically safe from any state, not just the summary.
        let mut midway = fresh_session();
        midway.start().unwrap();
        midway.answer(Rating::Moderate, fixed_now()).unwrap();
        midway.restart(fixed_now());
        assert_eq!(midway, initial);
    }

    #[test]
    fn progress_tracks_answered_and_remaining() {
        let mut session = fresh_session();
        session.start().unwrap();
        session.answer(Rating::Moderate, fixed_now()).unwrap();
        session.answer(Rating::Moderate, fixed_now()).unwrap();

        let progress = session.progress();
        assert_eq!(progress.total, 10);
        assert_eq!(progress.answered, 2);
        assert_eq!(progress.remaining, 8);
        assert!(!progress.is_complete);
    }
}
