use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{
    ClassificationView, EstimationStationView, LandingView, RegressionView, RmseTutorialView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LandingView)] Landing {},
        #[route("/classification", ClassificationView)] Classification {},
        #[route("/regression", RegressionView)] Regression {},
        #[route("/regression/estimation-station", EstimationStationView)] EstimationStation {},
        #[route("/regression/rmse", RmseTutorialView)] RmseTutorial {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
            Navbar {}
        }
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            h1 { class: "navbar__brand", "MetricLab" }
            ul {
                li { Link { to: Route::Landing {}, "Home" } }
                li { Link { to: Route::Regression {}, "Regression" } }
                li { Link { to: Route::Classification {}, "Classification" } }
            }
        }
    }
}
