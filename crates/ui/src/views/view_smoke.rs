use std::sync::Arc;

use quiz_core::model::QuizOptions;

use super::test_harness::{
    BrokenQuestions, FakeQuestions, FastTicker, GatedQuestions, setup_shell_harness,
    setup_shell_harness_with,
};

#[tokio::test(flavor = "current_thread")]
async fn shell_opens_on_settings() {
    let mut harness = setup_shell_harness(Arc::new(FakeQuestions::with_batch(8)), false);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Quiz settings"), "missing heading in {html}");
    assert!(html.contains("Start quiz"), "missing start button in {html}");
    assert!(html.contains("Sample quiz"), "missing sample button in {html}");
    assert!(html.contains("Science: Computers"), "missing category choice in {html}");
    assert!(html.contains("Tell me a joke"), "missing joke button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sample_launch_shows_first_question() {
    let mut harness = setup_shell_harness(Arc::new(FakeQuestions::with_batch(8)), true);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Question 0"), "missing question text in {html}");
    assert!(
        html.contains("Q1 / 5 - Science: Computers . EASY"),
        "missing meta line in {html}"
    );
    assert!(html.contains("25s"), "missing timer in {html}");
    assert!(html.contains("width: 20%"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_load_returns_to_settings_with_notice() {
    let mut harness = setup_shell_harness(Arc::new(BrokenQuestions), true);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Could not load questions"), "missing notice in {html}");
    assert!(html.contains("Start quiz"), "missing settings form in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn expired_countdowns_walk_every_question_to_result() {
    let mut harness = setup_shell_harness_with(
        Arc::new(FakeQuestions::with_batch(8)),
        true,
        Arc::new(FastTicker),
        1,
    );
    harness.rebuild();
    let html = harness.drive_until("result--").await;
    assert!(html.contains("result--practice"), "missing result screen in {html}");
    assert!(html.contains("0 / 5"), "missing score in {html}");
    assert!(html.contains("Answered 0 of 5"), "missing answered count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn back_to_settings_while_loading_drops_the_late_batch() {
    let questions = Arc::new(GatedQuestions::with_batch(8));
    let mut harness = setup_shell_harness(questions.clone(), false);
    harness.rebuild();

    harness.act(|shell| shell.start.call(QuizOptions::sample()));
    let html = harness.drive_until("Loading questions...").await;
    assert!(html.contains("Loading questions..."), "missing loading state in {html}");

    harness.act(|shell| shell.back_to_settings.call(()));
    questions.release();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Start quiz"), "missing settings form in {html}");
    assert!(!html.contains("Question 0"), "late batch was applied: {html}");
    assert!(!html.contains("Could not load"), "late batch raised a notice: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn navigation_and_restart_reuse_the_same_options() {
    let questions = Arc::new(FakeQuestions::with_batch(8));
    let mut harness = setup_shell_harness(questions.clone(), true);
    harness.rebuild();
    harness.drive_until("Q1 / 5").await;

    harness.act(|shell| shell.choose.call(1));
    let html = harness.render();
    assert!(html.contains("answer correct"), "missing answer mark in {html}");

    harness.act(|shell| shell.next.call(()));
    assert!(harness.render().contains("Q2 / 5"));
    harness.act(|shell| shell.prev.call(()));
    let html = harness.render();
    assert!(html.contains("Q1 / 5"), "prev did not return: {html}");
    assert!(html.contains("answer correct"), "answer not restored in {html}");

    for _ in 0..5 {
        harness.act(|shell| shell.next.call(()));
    }
    let html = harness.render();
    assert!(html.contains("result--"), "missing result screen in {html}");
    assert!(html.contains("1 / 5"), "missing score in {html}");
    assert!(html.contains("Restart"), "missing restart button in {html}");

    harness.act(|shell| shell.restart.call(()));
    let html = harness.drive_until("Q1 / 5").await;
    assert!(html.contains("Q1 / 5"), "restart did not show a new quiz: {html}");
    assert!(!html.contains("answer correct"), "restart kept old answers: {html}");
    assert_eq!(questions.calls(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn joke_box_clears_on_the_next_question() {
    let mut harness = setup_shell_harness(Arc::new(FakeQuestions::with_batch(8)), true);
    harness.rebuild();
    harness.drive_until("Q1 / 5").await;

    harness.fetch_joke();
    let html = harness.drive_until("dark mode").await;
    assert!(html.contains("Because light attracts bugs."), "missing joke in {html}");

    harness.act(|shell| shell.next.call(()));
    let html = harness.drive_until("Q2 / 5").await;
    assert!(!html.contains("dark mode"), "joke survived the next question: {html}");
}
