use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by `tracing`; the subscriber is installed by the binary.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "giftai", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "giftai", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "giftai", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "giftai", "{}", message);
    }
}
