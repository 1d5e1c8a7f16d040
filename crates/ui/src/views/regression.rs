use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;
use super::components::MetricRow;

#[component]
pub fn RegressionView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page menu-page",
            h1 { "Dive into Regression Metrics" }
            p { class: "menu-page__lead",
                "Visualize and explore key regression metrics like RMSE, MAE, and R² in an intuitive and interactive way."
            }
            div { class: "metric-rows",
                MetricRow {
                    name: "RMSE",
                    description: "Root Mean Squared Error — penalizes large errors.",
                    active: true,
                    on_select: move |()| {
                        let _ = navigator.push(Route::EstimationStation {});
                    },
                }
                MetricRow {
                    name: "MAE",
                    description: "Mean Absolute Error — average of all errors.",
                    active: false,
                    on_select: move |()| {},
                }
                MetricRow {
                    name: "R² Score",
                    description: "Explains variance captured by the model.",
                    active: false,
                    on_select: move |()| {},
                }
            }
            footer { class: "page-footer",
                p { "© 2025 MetricLab — Regression Visualized." }
                p { class: "page-footer__small", "Built for clarity and experimentation. Try RMSE now." }
            }
        }
    }
}
