use std::sync::Arc;

use services::{MatcherService, QuestionnaireService};

/// UI-facing surface of the composition root (see `crates/app`).
pub trait UiApp: Send + Sync {
    fn questionnaire(&self) -> Arc<QuestionnaireService>;
    fn matcher(&self) -> Arc<MatcherService>;
}

#[derive(Clone)]
pub struct AppContext {
    questionnaire: Arc<QuestionnaireService>,
    matcher: Arc<MatcherService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            questionnaire: app.questionnaire(),
            matcher: app.matcher(),
        }
    }

    #[must_use]
    pub fn questionnaire(&self) -> Arc<QuestionnaireService> {
        Arc::clone(&self.questionnaire)
    }

    #[must_use]
    pub fn matcher(&self) -> Arc<MatcherService> {
        Arc::clone(&self.matcher)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
