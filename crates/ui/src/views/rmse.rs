use std::time::Duration;

use dioxus::prelude::*;

use metric_core::model::{DatasetField, TutorialSection};
use services::CELEBRATION_DELAY_MS;

use crate::context::AppContext;
use crate::timer::TimerHandle;
use crate::vm::{TutorialIntent, TutorialVm, format_rmse3, format_signed};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn RmseTutorialView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(|| TutorialVm::new(ctx.services().new_tutorial()));
    let timer = use_signal(TimerHandle::default);

    let dispatch = use_callback(move |intent: TutorialIntent| {
        let mut vm = vm;
        let mut timer = timer;

        match intent {
            TutorialIntent::Advance => {
                let outcome = vm.write().advance();
                if outcome.schedule_celebration {
                    // One pending celebration at most; replacing cancels any
                    // stale delay from a previous arrival.
                    timer.write().replace(spawn(async move {
                        tokio::time::sleep(Duration::from_millis(CELEBRATION_DELAY_MS)).await;
                        vm.write().celebrate();
                    }));
                }
            }
            TutorialIntent::AddRow => vm.write().add_row(),
            TutorialIntent::Edit { row, field, raw } => vm.write().edit(row, field, &raw),
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<TutorialTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let vm_guard = vm.read();
    let current = vm_guard.current_section();
    let rating = vm_guard.rating();

    rsx! {
        div { class: "page tutorial-page",
            // Progress dots pinned above the walkthrough.
            div { class: "progress-dots",
                for section in TutorialSection::ALL {
                    div {
                        key: "{section.index()}",
                        class: if section == current {
                            "progress-dot progress-dot--current"
                        } else if section.index() < current.index() {
                            "progress-dot progress-dot--done"
                        } else {
                            "progress-dot"
                        },
                    }
                }
            }

            if vm_guard.is_revealed(TutorialSection::Intro) {
                section { class: "tutorial-section",
                    h1 { "👾 Meet Regie, your RMSE guide!" }
                    p { "RMSE tells us how far our guesses are from the truth!" }
                    p { class: "tutorial-section__hint",
                        "RMSE (Root Mean Squared Error) helps you see how off your predictions are."
                    }
                    button {
                        class: "btn btn-primary",
                        id: "tutorial-begin",
                        onclick: move |_| dispatch.call(TutorialIntent::Advance),
                        "👉 Let's Begin"
                    }
                }
            }

            if vm_guard.is_revealed(TutorialSection::Formula) {
                section { class: "tutorial-section",
                    h2 { "🧮 RMSE Formula" }
                    p { class: "tutorial-formula", "RMSE = √(Σ(predicted - actual)² / n)" }
                    ul { class: "tutorial-steps-list",
                        li { "Subtract prediction from actual" }
                        li { "Square the difference" }
                        li { "Find the average of all squared differences" }
                        li { "Take the square root of that average" }
                    }
                    button {
                        class: "btn btn-primary",
                        id: "tutorial-formula-next",
                        onclick: move |_| dispatch.call(TutorialIntent::Advance),
                        "✅ Got it"
                    }
                }
            }

            if vm_guard.is_revealed(TutorialSection::Interactive) {
                section { class: "tutorial-section",
                    h2 { "🎮 Try It Yourself" }
                    div { class: "dataset-cards",
                        for (index, row) in vm_guard.rows().iter().enumerate() {
                            div { key: "{index}", class: "dataset-card",
                                label { "Actual" }
                                input {
                                    r#type: "number",
                                    value: "{row.actual}",
                                    oninput: move |evt| dispatch.call(TutorialIntent::Edit {
                                        row: index,
                                        field: DatasetField::Actual,
                                        raw: evt.value(),
                                    }),
                                }
                                label { "Predicted" }
                                input {
                                    r#type: "number",
                                    value: "{row.predicted}",
                                    oninput: move |evt| dispatch.call(TutorialIntent::Edit {
                                        row: index,
                                        field: DatasetField::Predicted,
                                        raw: evt.value(),
                                    }),
                                }
                            }
                        }
                    }
                    button {
                        class: "btn btn-secondary",
                        id: "tutorial-add-row",
                        onclick: move |_| dispatch.call(TutorialIntent::AddRow),
                        "➕ Add Row"
                    }
                    button {
                        class: "btn btn-primary",
                        id: "tutorial-interactive-next",
                        onclick: move |_| dispatch.call(TutorialIntent::Advance),
                        "Next ➡️"
                    }
                }
            }

            if vm_guard.is_revealed(TutorialSection::Steps) {
                section { class: "tutorial-section",
                    h2 { "🔍 Breakdown" }
                    table { class: "results-table",
                        thead {
                            tr {
                                th { "Actual" }
                                th { "Predicted" }
                                th { "Error" }
                                th { "Squared Error" }
                            }
                        }
                        tbody {
                            for (index, row) in vm_guard.breakdown().iter().enumerate() {
                                tr { key: "{index}",
                                    td { "{row.actual}" }
                                    td { "{row.predicted}" }
                                    td { "{format_signed(row.error)}" }
                                    td { "{format_signed(row.squared_error)}" }
                                }
                            }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        id: "tutorial-steps-next",
                        onclick: move |_| dispatch.call(TutorialIntent::Advance),
                        "Continue ➡️"
                    }
                }
            }

            if vm_guard.is_revealed(TutorialSection::Chart) {
                section { class: "tutorial-section",
                    h2 { "📊 Visualize Error" }
                    div { class: "error-chart",
                        for (index, bar) in vm_guard.chart_bars().iter().enumerate() {
                            div { key: "{index}", class: "error-chart__column",
                                div {
                                    class: "error-chart__bar",
                                    style: "height: {bar.height_percent}%;",
                                    title: "{format_signed(bar.value)}",
                                }
                                span { class: "error-chart__label", "{bar.label}" }
                            }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        id: "tutorial-chart-next",
                        onclick: move |_| dispatch.call(TutorialIntent::Advance),
                        "See My Score 🏁"
                    }
                }
            }

            if vm_guard.is_revealed(TutorialSection::Score) {
                section { class: "tutorial-section",
                    h2 {
                        "Your RMSE is "
                        span { class: "tutorial-score", "{format_rmse3(vm_guard.rmse())}" }
                    }
                    p { "That's how far off your predictions are, on average." }
                    p { class: "tutorial-rating", "{rating.label()}: {rating.reason()}" }
                }
            }

            if vm_guard.celebration_shown() {
                div { class: "celebration", id: "tutorial-celebration",
                    div { class: "celebration__title", "🎉 Congratulations! 🎉" }
                    p {
                        "You've completed the RMSE walkthrough. You now understand how to evaluate prediction errors like a pro! 🎓"
                    }
                }
            }

            footer { class: "page-footer",
                p { "© 2025 MetricLab — Learn Regression Visually" }
                p { class: "page-footer__small", "You're doing great — one step at a time 🚀" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct TutorialTestHandles {
    dispatch: Rc<RefCell<Option<Callback<TutorialIntent>>>>,
    vm: Rc<RefCell<Option<Signal<TutorialVm>>>>,
}

#[cfg(test)]
impl TutorialTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<TutorialIntent>, vm: Signal<TutorialVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<TutorialIntent> {
        (*self.dispatch.borrow()).expect("tutorial dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<TutorialVm> {
        (*self.vm.borrow()).expect("tutorial vm registered")
    }
}
