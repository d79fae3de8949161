use crate::application::ports::notifier::{Notification, Notifier};
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

/// Buffers notifications until a presentation layer drains them.
#[derive(Debug, Default)]
pub struct QueuedNotifier {
    queue: Mutex<VecDeque<Notification>>,
}

impl QueuedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every pending notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for QueuedNotifier {
    fn notify(&self, notification: Notification) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(notification);
    }
}
