use std::sync::Arc;

use services::AppServices;

/// What the composition root (the desktop binary, or a test harness) hands
/// to the UI.
pub trait UiApp: Send + Sync {
    fn services(&self) -> Arc<AppServices>;
}

#[derive(Clone)]
pub struct AppContext {
    services: Arc<AppServices>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            services: app.services(),
        }
    }

    #[must_use]
    pub fn services(&self) -> Arc<AppServices> {
        Arc::clone(&self.services)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
