use dioxus::core::Task;

/// Owns at most one pending timer task for a view.
///
/// Every state transition that invalidates the countdown (round change,
/// restart, leaving the screen) goes through `replace` or `cancel`, so a
/// superseded timer can never fire into a session it no longer belongs to.
#[derive(Default)]
pub struct TimerHandle {
    task: Option<Task>,
}

impl TimerHandle {
    /// Cancels whatever was pending and takes ownership of `task`.
    pub fn replace(&mut self, task: Task) {
        self.cancel();
        self.task = Some(task);
    }

    /// Cancels the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
