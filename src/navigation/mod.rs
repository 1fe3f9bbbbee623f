//! Scene-to-scene navigation.
//!
//! [`NavigationController`] owns the displayed scene and every piece of
//! transient tour state. Transitions are strictly sequential: a request
//! made while another transition is in flight is dropped, and a fetch
//! result only commits if it belongs to the current transition.

mod controller;
mod events;
/// Toast notifications raised by the controller.
pub mod notify;

pub use controller::{NavigationController, FEATURED_TRANSITION};
pub use events::{CompleteHandler, ErrorHandler, StartHandler};
pub use notify::{Notification, NotificationId, NotificationQueue, Severity};

/// Coarse controller state for views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationStatus {
    /// Showing a scene (or nothing yet); ready for input.
    Idle,
    /// A scene fetch is in flight.
    Transitioning,
    /// The last transition failed; the previous scene is still displayed.
    Error,
}

/// Ticket for an in-flight transition, returned by
/// [`NavigationController::begin_load`] and redeemed by
/// [`NavigationController::finish_load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransition {
    slug: String,
    generation: u64,
}

impl PendingTransition {
    /// Slug of the scene being fetched.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Monotonic transition number.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
