use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use metric_core::time::fixed_clock;
use services::{AppServices, GameConfig};

use crate::context::{UiApp, build_app_context};
use crate::views::estimation::GameTestHandles;
use crate::views::rmse::TutorialTestHandles;
use crate::views::{
    ClassificationView, EstimationStationView, LandingView, RegressionView, RmseTutorialView,
};

#[derive(Clone)]
struct TestApp {
    services: Arc<AppServices>,
}

impl UiApp for TestApp {
    fn services(&self) -> Arc<AppServices> {
        Arc::clone(&self.services)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Landing,
    Classification,
    Regression,
    Game,
    Tutorial,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    game_handles: Option<GameTestHandles>,
    tutorial_handles: Option<TutorialTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.game_handles.clone() {
        use_context_provider(|| handles);
    }
    if let Some(handles) = props.tutorial_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Landing => rsx! { LandingView {} },
        ViewKind::Classification => rsx! { ClassificationView {} },
        ViewKind::Regression => rsx! { RegressionView {} },
        ViewKind::Game => rsx! { EstimationStationView {} },
        ViewKind::Tutorial => rsx! { RmseTutorialView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub game_handles: Option<GameTestHandles>,
    pub tutorial_handles: Option<TutorialTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let services = Arc::new(AppServices::new(fixed_clock(), GameConfig::default()));
    let app = Arc::new(TestApp { services });

    let game_handles = match view {
        ViewKind::Game => Some(GameTestHandles::default()),
        _ => None,
    };
    let tutorial_handles = match view {
        ViewKind::Tutorial => Some(TutorialTestHandles::default()),
        _ => None,
    };

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            game_handles: game_handles.clone(),
            tutorial_handles: tutorial_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        game_handles,
        tutorial_handles,
    }
}
