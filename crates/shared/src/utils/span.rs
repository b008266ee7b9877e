use crate::utils::metrics::{Method, Metrics, Status};
use std::time::Instant;
use tracing::{Span, error, info, info_span};

/// A span plus a start instant for one service operation. Completing it logs
/// the outcome and records it in the service's metrics.
pub struct TracingContext {
    pub span: Span,
    pub start_time: Instant,
}

impl TracingContext {
    pub fn start(operation_name: &'static str) -> Self {
        let span = info_span!("operation", name = operation_name);

        info!(parent: &span, "Starting operation: {operation_name}");

        Self {
            span,
            start_time: Instant::now(),
        }
    }

    pub fn complete_success(&self, metrics: &Metrics, method: Method, message: &str) {
        self.complete(metrics, method, true, message);
    }

    pub fn complete_error(&self, metrics: &Metrics, method: Method, error_message: &str) {
        self.complete(metrics, method, false, error_message);
    }

    fn complete(&self, metrics: &Metrics, method: Method, is_success: bool, message: &str) {
        let elapsed = self.start_time.elapsed().as_secs_f64();

        let status = if is_success {
            info!(parent: &self.span, duration_secs = elapsed, "✅ Operation completed successfully: {message}");
            Status::Success
        } else {
            error!(parent: &self.span, duration_secs = elapsed, "❌ Operation failed: {message}");
            Status::Error
        };

        metrics.record(method, status, elapsed);
    }
}
