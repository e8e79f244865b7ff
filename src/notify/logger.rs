use tracing::{debug, error};

/// Sink for raw error text.
pub trait ErrorLogger: Send + Sync {
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}

/// Forwards to the `tracing` macros under the `errnotify` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ErrorLogger for TracingLogger {
    fn error(&self, message: &str) {
        error!(target: "errnotify", "{message}");
    }

    fn debug(&self, message: &str) {
        debug!(target: "errnotify", "{message}");
    }
}
