//! Fixed inter-request delay
//!
//! Autocomplete and feed endpoints rate-limit aggressively, so consecutive
//! requests to the same endpoint are spaced at least `min_interval` apart.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Enforces a minimum delay between consecutive requests
#[derive(Debug)]
pub struct RequestPacer {
    /// When the next request may go out; `None` before the first request
    next_available: Mutex<Option<Instant>>,
    min_interval: Duration,
    /// Name for logging purposes
    name: String,
    total_requests: AtomicU64,
}

impl RequestPacer {
    pub fn new(min_interval: Duration, name: &str) -> Self {
        Self {
            next_available: Mutex::new(None),
            min_interval,
            name: name.to_string(),
            total_requests: AtomicU64::new(0),
        }
    }

    /// Wait until the next request may be sent, then reserve the following slot
    pub async fn acquire(&self) {
        let request_num = self.total_requests.fetch_add(1, Ordering::Relaxed) + 1;

        let wait_until = {
            let mut next_available = self.next_available.lock().await;
            let now = Instant::now();
            let slot = match *next_available {
                Some(next) if next > now => next,
                _ => now,
            };
            *next_available = Some(slot + self.min_interval);
            (slot > now).then_some(slot)
        };

        if let Some(slot) = wait_until {
            debug!(
                "[PACER:{}] #{} waiting {:?}",
                self.name,
                request_num,
                slot.saturating_duration_since(Instant::now())
            );
            tokio::time::sleep_until(slot).await;
        }
    }
}
