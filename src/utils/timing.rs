//! Request timing for access logs.

use log::{info, warn};
use std::time::{Duration, Instant};

/// Measures one request from arrival to response.
#[derive(Debug)]
pub struct Timer {
    start_time: Instant,
    operation_name: String,
}

impl Timer {
    pub fn start(operation_name: &str) -> Self {
        Self {
            start_time: Instant::now(),
            operation_name: operation_name.to_string(),
        }
    }

    /// Logs the elapsed time together with the response status.
    pub fn finish(self, status: u16) -> Duration {
        let elapsed = self.start_time.elapsed();
        if status >= 500 {
            warn!(
                "Endpoint {} answered {} in {:.4}s",
                self.operation_name,
                status,
                elapsed.as_secs_f64()
            );
        } else {
            info!(
                "Endpoint {} answered {} in {:.4}s",
                self.operation_name,
                status,
                elapsed.as_secs_f64()
            );
        }
        elapsed
    }
}
