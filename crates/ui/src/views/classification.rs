use dioxus::prelude::*;

use super::components::MetricRow;

const STUB_METRICS: [(&str, &str); 4] = [
    ("Accuracy", "How often the model is right overall."),
    ("Precision", "Of the positive calls, how many were correct."),
    ("Recall", "Of the real positives, how many were found."),
    ("F1 Score", "Balance between precision and recall."),
];

#[component]
pub fn ClassificationView() -> Element {
    rsx! {
        div { class: "page menu-page",
            h1 { "Classification Metrics Coming Soon" }
            p { class: "menu-page__lead",
                "We are preparing interactive visualizations for classification metrics like Accuracy, Precision, Recall, and F1 Score. Stay tuned!"
            }
            div { class: "metric-rows",
                for (name, description) in STUB_METRICS {
                    MetricRow {
                        name,
                        description,
                        active: false,
                        on_select: move |()| {},
                    }
                }
            }
            footer { class: "page-footer",
                p { "© 2025 MetricLab — Classification Coming Soon." }
            }
        }
    }
}
