use pawmatch_core::model::{Rating, Screen};

use super::test_harness::{drive_dom, setup_view_harness};
use crate::vm::QuestionnaireIntent;

#[test]
fn intro_screen_renders_title_and_start_control() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Which dog fits you?"), "missing intro title in {html}");
    assert!(html.contains("questionnaire-start"), "missing start control in {html}");
    assert!(!html.contains("Question 1 of 10"), "question screen leaked into {html}");
}

#[test]
fn starting_shows_the_first_question_with_five_controls() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    harness.handles.dispatch().call(QuestionnaireIntent::Start);
    drive_dom(&mut harness.dom);
    let html = harness.render();

    assert!(html.contains("Question 1 of 10"), "missing progress in {html}");
    assert!(html.contains("sheds very little"), "missing first prompt in {html}");
    for value in 1..=5 {
        let id = format!("rating-{value}");
        assert!(html.contains(&id), "missing {id} in {html}");
    }
    assert!(!html.contains("questionnaire-start"), "intro leaked into {html}");
}

#[test]
fn a_fresh_question_has_no_preselected_control() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let dispatch = harness.handles.dispatch();

    dispatch.call(QuestionnaireIntent::Start);
    drive_dom(&mut harness.dom);
    dispatch.call(QuestionnaireIntent::Rate(Rating::MustHave));
    drive_dom(&mut harness.dom);
    let html = harness.render();

    assert!(html.contains("Question 2 of 10"), "missing second question in {html}");
    assert!(
        !html.contains("rating-btn--selected"),
        "second question pre-selected a value in {html}"
    );
}

#[test]
fn completing_the_run_shows_the_dump_matches_and_restart() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let dispatch = harness.handles.dispatch();

    dispatch.call(QuestionnaireIntent::Start);
    drive_dom(&mut harness.dom);
    for value in [3, 1, 5, 2, 4, 3, 1, 5, 2, 4] {
        dispatch.call(QuestionnaireIntent::Rate(Rating::from_u8(value).unwrap()));
        drive_dom(&mut harness.dom);
    }
    let html = harness.render();

    assert!(html.contains("All done"), "missing summary title in {html}");
    assert!(
        html.contains("[3, 1, 5, 2, 4, 3, 1, 5, 2, 4]"),
        "missing ratings dump in {html}"
    );
    assert!(html.contains("Best matched breeds"), "missing matches in {html}");
    assert!(html.contains("questionnaire-restart"), "missing restart control in {html}");
}

#[test]
fn restart_returns_to_the_intro_screen() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let dispatch = harness.handles.dispatch();

    dispatch.call(QuestionnaireIntent::Start);
    drive_dom(&mut harness.dom);
    for _ in 0..10 {
        dispatch.call(QuestionnaireIntent::Rate(Rating::Moderate));
        drive_dom(&mut harness.dom);
    }
    dispatch.call(QuestionnaireIntent::Restart);
    drive_dom(&mut harness.dom);
    let html = harness.render();

    assert!(html.contains("questionnaire-start"), "missing start control in {html}");
    assert!(!html.contains("All done"), "summary leaked into {html}");
    assert_eq!(harness.handles.vm().read().screen(), Screen::Intro);
}
