use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;
use super::components::MetricCard;

#[component]
pub fn LandingView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page landing-page",
            header { class: "landing-hero",
                h1 {
                    "Master Machine Learning Metrics with "
                    span { class: "landing-hero__brand", "MetricLab" }
                }
                p { "Dive into interactive visualizations and explore core evaluation metrics in Supervised Learning." }
                p { class: "landing-hero__subtitle",
                    "Learn through play, track your metrics, and make ML concepts unforgettable."
                }
            }
            div { class: "landing-cards",
                MetricCard {
                    title: "Regression",
                    description: "Explore RMSE, MAE, R² Score and more.",
                    card_class: "metric-card--regression",
                    badge: "Regression Master",
                    on_select: move |()| {
                        let _ = navigator.push(Route::Regression {});
                    },
                }
                MetricCard {
                    title: "Classification",
                    description: "Understand Accuracy, F1 Score, Recall, and beyond.",
                    card_class: "metric-card--classification",
                    badge: "Classification Expert",
                    on_select: move |()| {
                        let _ = navigator.push(Route::Classification {});
                    },
                }
            }
            footer { class: "page-footer",
                p { "© 2025 MetricLab. Learn, Visualize, Master." }
                p { class: "page-footer__small",
                    "Designed to guide your journey through the core of machine learning evaluation."
                }
            }
        }
    }
}
