use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use pawmatch_core::time::fixed_now;
use services::{Clock, MatcherService, QuestionnaireService};

use crate::context::{UiApp, build_app_context};
use crate::views::QuestionnaireView;
use crate::views::questionnaire::QuestionnaireTestHandles;

#[derive(Clone)]
struct TestApp {
    questionnaire: Arc<QuestionnaireService>,
    matcher: Arc<MatcherService>,
}

impl UiApp for TestApp {
    fn questionnaire(&self) -> Arc<QuestionnaireService> {
        Arc::clone(&self.questionnaire)
    }

    fn matcher(&self) -> Arc<MatcherService> {
        Arc::clone(&self.matcher)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuestionnaireTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { QuestionnaireView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuestionnaireTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness() -> ViewHarness {
    let clock = Clock::fixed(fixed_now());
    let questionnaire = Arc::new(QuestionnaireService::new(clock));
    let matcher = Arc::new(MatcherService::new().expect("built-in breed book"));
    let handles = QuestionnaireTestHandles::default();

    let app = Arc::new(TestApp {
        questionnaire,
        matcher,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
