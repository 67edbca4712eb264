use log::info;

/// Process-wide observability sink. The factory reports through one of
/// these instead of the global log facade; tests inject a capturing
/// implementation.
pub trait EventSink: Send + Sync {
    fn info(&self, message: String);
}

/// Forwards to the `log` facade.
pub struct LogSink;

impl EventSink for LogSink {
    fn info(&self, message: String) {
        info!("{}", message);
    }
}
