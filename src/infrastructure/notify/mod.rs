pub mod queued_notifier;
pub mod tracing_notifier;

pub use queued_notifier::QueuedNotifier;
pub use tracing_notifier::TracingNotifier;
