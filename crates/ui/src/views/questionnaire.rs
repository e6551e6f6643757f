use dioxus::prelude::*;
use keyboard_types::Key;

use pawmatch_core::model::{Rating, Screen};

use crate::context::AppContext;
use crate::vm::{QuestionnaireIntent, QuestionnaireVm, SummaryVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuestionnaireView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(move || QuestionnaireVm::new(ctx.questionnaire(), ctx.matcher()));

    let dispatch_intent = use_callback(move |intent: QuestionnaireIntent| {
        let mut vm = vm;
        vm.write().apply(intent);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuestionnaireTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if evt.data.key() == Key::Escape {
            // Restart is logically safe from any screen.
            evt.prevent_default();
            dispatch_intent.call(QuestionnaireIntent::Restart);
            return;
        }

        if let Key::Character(value) = evt.data.key() {
            let rating = value.parse::<u8>().ok().and_then(|n| Rating::from_u8(n).ok());
            if let Some(rating) = rating {
                evt.prevent_default();
                dispatch_intent.call(QuestionnaireIntent::Rate(rating));
            }
        }
    });

    let vm_guard = vm.read();
    let screen = vm_guard.screen();
    let progress_label = vm_guard.progress_label();
    let prompt = vm_guard.prompt();
    let selected_rating = vm_guard.selected_rating();
    let summary = vm_guard.summary().cloned();
    let error_message = vm_guard.error_message().map(str::to_string);
    drop(vm_guard);

    rsx! {
        div { class: "page questionnaire-page", id: "questionnaire-root", tabindex: "0", onkeydown: on_key,
            if let Some(message) = error_message {
                p { class: "questionnaire-error", "{message}" }
            }
            match screen {
                Screen::Intro => rsx! {
                    IntroPanel { on_intent: dispatch_intent }
                },
                Screen::Asking { .. } => rsx! {
                    section { class: "questionnaire-question",
                        if let Some(label) = progress_label {
                            p { class: "questionnaire-progress", "{label}" }
                        }
                        if let Some(prompt) = prompt {
                            h2 { class: "questionnaire-prompt", "{prompt}" }
                        }
                        p { class: "questionnaire-scale-hint",
                            "1 = not important, 5 = must-have"
                        }
                        div { class: "rating-scale",
                            for rating in Rating::ALL {
                                RatingButton {
                                    rating,
                                    selected: selected_rating == Some(rating),
                                    on_intent: dispatch_intent,
                                }
                            }
                        }
                    }
                },
                Screen::Summary => rsx! {
                    if let Some(summary) = summary {
                        SummaryPanel { summary, on_intent: dispatch_intent }
                    }
                },
            }
        }
    }
}

#[component]
fn IntroPanel(on_intent: EventHandler<QuestionnaireIntent>) -> Element {
    rsx! {
        section { class: "questionnaire-intro",
            h2 { "Which dog fits you?" }
            p {
                "Rate how much each trait matters to you, one question at a "
                "time, and we will rank the breeds that suit you best."
            }
            button {
                class: "btn btn-primary",
                id: "questionnaire-start",
                r#type: "button",
                onclick: move |_| on_intent.call(QuestionnaireIntent::Start),
                "Start"
            }
        }
    }
}

#[component]
fn RatingButton(
    rating: Rating,
    selected: bool,
    on_intent: EventHandler<QuestionnaireIntent>,
) -> Element {
    let value = rating.value();
    let class = if selected {
        "rating-btn rating-btn--selected"
    } else {
        "rating-btn"
    };
    rsx! {
        button {
            class: "{class}",
            id: "rating-{value}",
            r#type: "button",
            onclick: move |_| on_intent.call(QuestionnaireIntent::Rate(rating)),
            "{value}"
        }
    }
}

#[component]
fn SummaryPanel(summary: SummaryVm, on_intent: EventHandler<QuestionnaireIntent>) -> Element {
    rsx! {
        section { class: "questionnaire-summary",
            h2 { "All done" }
            p { class: "questionnaire-summary__dump",
                "Your ratings in question order: {summary.ratings_dump}"
            }
            ol { class: "questionnaire-summary__answers",
                for line in summary.answer_lines.iter() {
                    li { "{line}" }
                }
            }
            h3 { "Best matched breeds" }
            ol { class: "questionnaire-summary__matches",
                for line in summary.match_lines.iter() {
                    li { "{line}" }
                }
            }
            button {
                class: "btn btn-primary",
                id: "questionnaire-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuestionnaireIntent::Restart),
                "Start Over"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuestionnaireTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuestionnaireIntent>>>>,
    vm: Rc<RefCell<Option<Signal<QuestionnaireVm>>>>,
}

#[cfg(test)]
impl QuestionnaireTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuestionnaireIntent>,
        vm: Signal<QuestionnaireVm>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuestionnaireIntent> {
        (*self.dispatch.borrow()).expect("questionnaire dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuestionnaireVm> {
        (*self.vm.borrow()).expect("questionnaire vm registered")
    }
}
