use dioxus::prelude::ReadableExt;
use metric_core::model::{DatasetField, TutorialSection};
use services::GamePhase;

use super::test_harness::{ViewKind, drive_dom, setup_view_harness};
use crate::vm::{GameIntent, TutorialIntent};

#[tokio::test(flavor = "current_thread")]
async fn landing_view_smoke_renders_both_cards() {
    let mut harness = setup_view_harness(ViewKind::Landing);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("MetricLab"), "missing brand in {html}");
    assert!(html.contains("Regression"), "missing regression card in {html}");
    assert!(html.contains("Classification"), "missing classification card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn regression_view_smoke_lists_rmse_and_stubs() {
    let mut harness = setup_view_harness(ViewKind::Regression);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Dive into Regression Metrics"), "missing title in {html}");
    assert!(html.contains("RMSE"), "missing active metric in {html}");
    assert!(html.contains("Explore more"), "missing active status in {html}");
    assert!(html.contains("Coming soon"), "missing stub status in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn classification_view_smoke_is_a_stub() {
    let mut harness = setup_view_harness(ViewKind::Classification);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Coming Soon"), "missing stub heading in {html}");
    assert!(html.contains("F1 Score"), "missing metric list in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_walks_from_welcome_to_results() {
    let mut harness = setup_view_harness(ViewKind::Game);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("How to Play"), "missing welcome in {html}");
    assert!(html.contains("Start Game"), "missing start button in {html}");

    let handles = harness.game_handles.clone().expect("game handles");
    handles.dispatch().call(GameIntent::Start);
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("Round: 1/5"), "missing round label in {html}");
    assert!(html.contains("Time Left: 10s"), "missing timer in {html}");
    assert!(html.contains("How many dots did you see?"), "missing prompt in {html}");

    // The rendered dot count always matches the round's ground truth.
    let vm = handles.vm();
    let truth_dots = vm.read().dots().len();
    assert_eq!(html.matches("class=\"dot ").count(), truth_dots);

    // Five submits with an empty input coerce to zero guesses and finish.
    for _ in 0..5 {
        handles.dispatch().call(GameIntent::Submit);
        drive_dom(&mut harness.dom);
    }
    assert_eq!(vm.read().phase(), GamePhase::Results);

    let html = harness.render();
    assert!(html.contains("Your Results"), "missing results in {html}");
    assert!(html.contains("Your RMSE:"), "missing verdict in {html}");
    assert!(html.contains("Play Again"), "missing restart in {html}");

    // Restart puts the view straight back into a fresh first round.
    handles.dispatch().call(GameIntent::Restart);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("Round: 1/5"), "missing fresh round in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tutorial_view_reveals_sections_and_celebrates() {
    let mut harness = setup_view_harness(ViewKind::Tutorial);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("RMSE guide"), "missing intro in {html}");
    assert!(!html.contains("RMSE Formula"), "formula revealed early in {html}");

    let handles = harness.tutorial_handles.clone().expect("tutorial handles");
    handles.dispatch().call(TutorialIntent::Advance);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("RMSE Formula"), "missing formula in {html}");
    // Earlier sections stay on screen.
    assert!(html.contains("RMSE guide"), "intro hidden in {html}");

    // Walk to the last section; the celebration waits on its delay.
    for _ in 0..4 {
        handles.dispatch().call(TutorialIntent::Advance);
        drive_dom(&mut harness.dom);
    }
    // Poll once so the pending celebration task registers its timer.
    harness.drive_async().await;
    let vm = handles.vm();
    assert_eq!(vm.read().current_section(), TutorialSection::Score);
    let html = harness.render();
    assert!(html.contains("Your RMSE is"), "missing score in {html}");
    assert!(!html.contains("Congratulations"), "celebration fired early in {html}");

    // Seed dataset score renders to three decimals.
    assert!(html.contains("0.316"), "missing seed rmse in {html}");

    // After the delay elapses the banner appears exactly once.
    tokio::time::sleep(std::time::Duration::from_millis(900)).await;
    harness.drive_async().await;
    let html = harness.render();
    assert_eq!(html.matches("Congratulations").count(), 1, "in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tutorial_view_edits_recompute_the_breakdown() {
    let mut harness = setup_view_harness(ViewKind::Tutorial);
    harness.rebuild();

    let handles = harness.tutorial_handles.clone().expect("tutorial handles");
    // Reveal through the breakdown table.
    for _ in 0..3 {
        handles.dispatch().call(TutorialIntent::Advance);
        drive_dom(&mut harness.dom);
    }

    handles.dispatch().call(TutorialIntent::AddRow);
    drive_dom(&mut harness.dom);
    handles.dispatch().call(TutorialIntent::Edit {
        row: 3,
        field: DatasetField::Predicted,
        raw: "2".to_string(),
    });
    drive_dom(&mut harness.dom);

    let vm = handles.vm();
    assert_eq!(vm.read().rows().len(), 4);
    let html = harness.render();
    // New row: actual 0, predicted 2 -> error 2.00, squared 4.00.
    assert!(html.contains("4.00"), "missing recomputed squared error in {html}");
}
