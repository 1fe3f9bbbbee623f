//! Transition lifecycle handlers.

use crate::scene::Scene;

/// Called with the target slug when a transition starts.
pub type StartHandler = Box<dyn FnMut(&str)>;
/// Called with the target slug and the user-facing message on failure.
pub type ErrorHandler = Box<dyn FnMut(&str, &str)>;
/// Called with the newly displayed scene.
pub type CompleteHandler = Box<dyn FnMut(&Scene)>;

/// Registered handlers, fired in registration order.
#[derive(Default)]
pub(crate) struct TransitionHandlers {
    start: Vec<StartHandler>,
    error: Vec<ErrorHandler>,
    complete: Vec<CompleteHandler>,
}

impl TransitionHandlers {
    pub(crate) fn add_start(&mut self, handler: StartHandler) {
        self.start.push(handler);
    }

    pub(crate) fn add_error(&mut self, handler: ErrorHandler) {
        self.error.push(handler);
    }

    pub(crate) fn add_complete(&mut self, handler: CompleteHandler) {
        self.complete.push(handler);
    }

    pub(crate) fn started(&mut self, slug: &str) {
        for handler in &mut self.start {
            handler(slug);
        }
    }

    pub(crate) fn failed(&mut self, slug: &str, message: &str) {
        for handler in &mut self.error {
            handler(slug, message);
        }
    }

    pub(crate) fn completed(&mut self, scene: &Scene) {
        for handler in &mut self.complete {
            handler(scene);
        }
    }
}
