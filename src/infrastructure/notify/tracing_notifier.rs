use crate::application::ports::notifier::{Notification, NotificationVariant, Notifier};
use tracing::{error, info, warn};

/// Emits notifications as log events, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let description = notification.description.as_deref().unwrap_or_default();
        match notification.variant {
            NotificationVariant::Destructive => {
                error!(title = %notification.title, description, "notification")
            }
            NotificationVariant::Warning => {
                warn!(title = %notification.title, description, "notification")
            }
            NotificationVariant::Default | NotificationVariant::Success => {
                info!(title = %notification.title, description, "notification")
            }
        }
    }
}
