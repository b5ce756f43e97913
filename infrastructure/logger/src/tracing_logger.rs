use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// [`Logger`] adapter emitting `tracing` events tagged with the component that logged them.
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("catalog")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(component = self.component, "{}", message);
    }
}
