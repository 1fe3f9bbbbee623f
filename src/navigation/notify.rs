//! Non-blocking toast notifications.
//!
//! Transition failures and info hotspots surface here instead of in modal
//! dialogs. Success and info toasts expire on their own; errors stay until
//! dismissed. Repeating a message that is already up refreshes it instead
//! of stacking a copy, and the overflow queue is bounded.

use std::collections::VecDeque;

use web_time::{Duration, Instant};

/// Maximum number of notifications shown at once.
const MAX_VISIBLE: usize = 3;
/// Maximum number of notifications waiting for a slot; the oldest is
/// dropped beyond this.
const MAX_QUEUED: usize = 16;

/// Identifier of a notification, unique within one queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

/// Severity determines display duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed (3 s).
    #[default]
    Success,
    /// Informational message (3 s).
    Info,
    /// Something was skipped or degraded (5 s).
    Warning,
    /// Needs attention; manual dismiss.
    Error,
}

impl Severity {
    /// Auto-dismiss delay, or `None` when the user must dismiss.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Self::Success | Self::Info => Some(Duration::from_secs(3)),
            Self::Warning => Some(Duration::from_secs(5)),
            Self::Error => None,
        }
    }
}

/// One toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    created_at: Instant,
}

impl Notification {
    /// Identifier for [`NotificationQueue::dismiss`].
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Text shown to the visitor.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the toast has outlived its severity's display time at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|d| now.saturating_duration_since(self.created_at) >= d)
    }
}

/// Visible toasts plus an overflow queue.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    /// Empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, or queue it when [`MAX_VISIBLE`] toasts are up.
    ///
    /// A toast with the same severity and message that is already shown or
    /// queued is refreshed and its id returned. When the queue is full the
    /// oldest queued toast is dropped.
    pub fn push(
        &mut self,
        severity: Severity,
        message: impl Into<String>,
    ) -> NotificationId {
        let message = message.into();
        let now = Instant::now();
        if let Some(existing) = self
            .visible
            .iter_mut()
            .chain(self.queue.iter_mut())
            .find(|n| n.severity == severity && n.message == message)
        {
            existing.created_at = now;
            return existing.id;
        }

        let id = NotificationId(self.next_id);
        self.next_id += 1;
        let notification = Notification {
            id,
            severity,
            message,
            created_at: now,
        };
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            if self.queue.len() >= MAX_QUEUED {
                if let Some(dropped) = self.queue.pop_front() {
                    log::debug!("notification queue full, dropping '{}'", dropped.message);
                }
            }
            self.queue.push_back(notification);
        }
        id
    }

    /// Remove a toast. Returns `true` if it was found.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id == id) {
            let _ = self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id == id) {
            let _ = self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drop visible toasts that expired by `now`.
    pub fn prune(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired(now))
            .map(Notification::id)
            .collect();
        for id in expired {
            let _ = self.dismiss(id);
        }
    }

    /// Visible toasts, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Toasts waiting for a free slot.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is shown or queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.queue.is_empty()
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(n) => self.visible.push_front(n),
                None => break,
            }
        }
    }
}
