use std::sync::Arc;

use pawmatch_core::model::{Rating, Screen, Session};
use services::{MatcherService, QuestionnaireService};

use crate::vm::{SummaryVm, map_summary};

/// User actions the questionnaire view can dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionnaireIntent {
    Start,
    Rate(Rating),
    Restart,
}

/// View model for the questionnaire flow: wraps the core session and turns
/// completion into display data for the summary screen.
pub struct QuestionnaireVm {
    questionnaire: Arc<QuestionnaireService>,
    matcher: Arc<MatcherService>,
    session: Session,
    summary: Option<SummaryVm>,
    error: Option<String>,
}

impl QuestionnaireVm {
    #[must_use]
    pub fn new(questionnaire: Arc<QuestionnaireService>, matcher: Arc<MatcherService>) -> Self {
        let session = questionnaire.new_session();
        Self {
            questionnaire,
            matcher,
            session,
            summary: None,
            error: None,
        }
    }

    /// Apply a user intent. Intents the current screen does not offer are
    /// ignored, matching the view that only renders valid controls.
    pub fn apply(&mut self, intent: QuestionnaireIntent) {
        match intent {
            QuestionnaireIntent::Start => self.start(),
            QuestionnaireIntent::Rate(rating) => self.rate(rating),
            QuestionnaireIntent::Restart => self.restart(),
        }
    }

    fn start(&mut self) {
        if self.questionnaire.start(&mut self.session).is_ok() {
            self.error = None;
        }
    }

    fn rate(&mut self, rating: Rating) {
        let Ok(result) = self.questionnaire.answer(&mut self.session, rating) else {
            return;
        };
        self.error = None;

        if let Some(summary) = result.summary {
            match self.matcher.match_summary(&summary) {
                Ok(report) => self.summary = Some(map_summary(&summary, &report)),
                Err(err) => self.error = Some(err.to_string()),
            }
        }
    }

    fn restart(&mut self) {
        self.questionnaire.restart(&mut self.session);
        self.summary = None;
        self.error = None;
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    /// Progress text for the question screen, e.g. "Question 3 of 10".
    #[must_use]
    pub fn progress_label(&self) -> Option<String> {
        self.session.current_index().map(|index| {
            format!("Question {} of {}", index + 1, self.session.total_questions())
        })
    }

    #[must_use]
    pub fn prompt(&self) -> Option<String> {
        self.session
            .current_question()
            .map(|question| question.prompt().to_string())
    }

    /// The rating already stored for the displayed question, if any, so the
    /// matching control renders as selected.
    #[must_use]
    pub fn selected_rating(&self) -> Option<Rating> {
        self.session
            .current_index()
            .and_then(|index| self.session.answer_at(index))
    }

    #[must_use]
    pub fn summary(&self) -> Option<&SummaryVm> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
