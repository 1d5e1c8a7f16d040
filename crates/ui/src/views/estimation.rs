use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use services::{DOT_COLOR_COUNT, GameError, GamePhase, RoundOutcome, TickOutcome};

use crate::context::AppContext;
use crate::routes::Route;
use crate::timer::TimerHandle;
use crate::vm::{GameIntent, GameVm, format_rmse2};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// CSS classes for the dot palette; indexed by `DotMarker::color_index`.
const DOT_COLORS: [&str; DOT_COLOR_COUNT] = [
    "dot--cyan", "dot--pink", "dot--green", "dot--amber", "dot--purple", "dot--blue", "dot--red",
];

/// Drives the per-round countdown: one second per tick until the engine
/// reports the round is over. The engine resets its own clock on round
/// change, so a single loop covers auto-submitted rounds too.
async fn tick_loop(mut vm: Signal<GameVm>, mut guess: Signal<String>) {
    loop {
        tokio::time::sleep(Duration::from_secs(1)).await;
        let has_pending_input = !guess.peek().trim().is_empty();
        match vm.write().tick(has_pending_input) {
            TickOutcome::Counted | TickOutcome::AwaitingInput => {}
            TickOutcome::AutoSubmitted(RoundOutcome::NextRound) => guess.set(String::new()),
            TickOutcome::AutoSubmitted(RoundOutcome::Finished) | TickOutcome::Ignored => break,
        }
    }
}

#[component]
pub fn EstimationStationView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let vm = use_signal(|| GameVm::new(ctx.services().new_game()));
    let guess = use_signal(String::new);
    let timer = use_signal(TimerHandle::default);

    let dispatch = use_callback(move |intent: GameIntent| {
        let mut vm = vm;
        let mut guess = guess;
        let mut timer = timer;

        match intent {
            GameIntent::Start | GameIntent::Restart => {
                vm.write().start();
                guess.set(String::new());
                timer.write().replace(spawn(tick_loop(vm, guess)));
            }
            GameIntent::Submit => {
                let raw = guess.peek().clone();
                let outcome = vm.write().submit(&raw);
                guess.set(String::new());
                match outcome {
                    Ok(RoundOutcome::NextRound) => {
                        // A manual submit invalidates the running countdown;
                        // the next round gets a fresh one.
                        timer.write().replace(spawn(tick_loop(vm, guess)));
                    }
                    Ok(RoundOutcome::Finished) | Err(GameError::NotPlaying) => {
                        timer.write().cancel();
                    }
                }
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<GameTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let vm_guard = vm.read();
    let phase = vm_guard.phase();
    let total_rounds = vm_guard.total_rounds();
    let round_seconds = vm_guard.round_seconds();

    rsx! {
        div { class: "page game-page",
            h1 { "Estimation Station" }
            h2 { class: "game-page__subtitle", "Learn about RMSE by guessing quantities!" }

            match phase {
                GamePhase::Welcome => rsx! {
                    div { class: "game-welcome",
                        h3 { "How to Play" }
                        p { "You'll be shown fields of random dots for {round_seconds} seconds each." }
                        p { "Estimate how many dots you see, then enter your guess." }
                        p { "After {total_rounds} rounds, we'll calculate your RMSE (Root Mean Square Error)." }
                        p { class: "game-welcome__hint", "Lower RMSE = Better accuracy!" }
                        button {
                            class: "btn btn-primary",
                            id: "game-start",
                            onclick: move |_| dispatch.call(GameIntent::Start),
                            "Start Game"
                        }
                    }
                },
                GamePhase::Playing => rsx! {
                    div { class: "game-status",
                        span { class: "game-status__round",
                            "Round: {vm_guard.current_round()}/{total_rounds}"
                        }
                        span { class: "game-status__time", "Time Left: {vm_guard.time_left()}s" }
                    }
                    div { class: "dot-canvas",
                        for (index, marker) in vm_guard.dots().iter().enumerate() {
                            div {
                                key: "{index}",
                                class: "dot {DOT_COLORS[marker.color_index]}",
                                style: "left: {marker.x}px; top: {marker.y}px; width: {marker.size}px; height: {marker.size}px;",
                            }
                        }
                    }
                    div { class: "game-guess",
                        label { r#for: "game-guess-input", "How many dots did you see?" }
                        div { class: "game-guess__controls",
                            input {
                                id: "game-guess-input",
                                r#type: "number",
                                placeholder: "Enter your guess...",
                                value: "{guess}",
                                oninput: move |evt| {
                                    let mut guess = guess;
                                    guess.set(evt.value());
                                },
                            }
                            button {
                                class: "btn btn-primary",
                                id: "game-submit",
                                onclick: move |_| dispatch.call(GameIntent::Submit),
                                "Submit"
                            }
                        }
                    }
                },
                GamePhase::Results => rsx! {
                    if let Some(results) = vm_guard.results() {
                        div { class: "game-results",
                            h3 { "Your Results" }
                            table { class: "results-table",
                                thead {
                                    tr {
                                        th { "Round" }
                                        th { "Your Guess" }
                                        th { "Actual Count" }
                                        th { "Error" }
                                        th { "Squared Error" }
                                    }
                                }
                                tbody {
                                    for row in results.rows.iter() {
                                        tr { key: "{row.round}",
                                            td { "{row.round}" }
                                            td { "{row.guess}" }
                                            td { "{row.actual}" }
                                            td { "{row.error}" }
                                            td { "{row.squared_error}" }
                                        }
                                    }
                                }
                            }
                            div { class: "game-results__summary",
                                h4 { "RMSE Calculation" }
                                p { "1. Mean of Squared Errors: {format_rmse2(results.mean_squared_error)}" }
                                p { "2. Root Mean Squared Error: {format_rmse2(results.rmse)}" }
                                p { class: "game-results__verdict",
                                    "Your RMSE: {format_rmse2(results.rmse)} - {results.rating.label()}"
                                }
                            }
                        }
                        div { class: "game-results__actions",
                            button {
                                class: "btn btn-primary",
                                id: "game-restart",
                                onclick: move |_| dispatch.call(GameIntent::Restart),
                                "Play Again"
                            }
                            button {
                                class: "btn btn-secondary",
                                id: "game-continue",
                                onclick: move |_| {
                                    let _ = navigator.push(Route::RmseTutorial {});
                                },
                                "Continue to Learn RMSE 📘"
                            }
                        }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct GameTestHandles {
    dispatch: Rc<RefCell<Option<Callback<GameIntent>>>>,
    vm: Rc<RefCell<Option<Signal<GameVm>>>>,
}

#[cfg(test)]
impl GameTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<GameIntent>, vm: Signal<GameVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<GameIntent> {
        (*self.dispatch.borrow()).expect("game dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<GameVm> {
        (*self.vm.borrow()).expect("game vm registered")
    }
}
