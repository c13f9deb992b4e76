//! Background expiry sweeper.
//!
//! An owned, cancellable periodic task tied to the engine lifecycle:
//! spawned by the builder, stopped by [`Optimizer::shutdown`](crate::Optimizer::shutdown)
//! (and aborted on drop, so no ambient timer outlives the engine). It
//! reclaims memory from fully expired entries; correctness never
//! depends on it, since lookups re-check expiry themselves.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use super::response::ResponseCache;

/// Handle to the periodic expiry sweep task.
pub(crate) struct Sweeper {
    handle: JoinHandle<()>,
}

impl Sweeper {
    /// Spawn the sweep loop on the current tokio runtime.
    pub(crate) fn spawn(cache: Arc<ResponseCache>, interval: Duration) -> Self {
        // Anchor the ticker at spawn time, one full interval out, so the
        // first sweep happens one full interval after startup even if the
        // task is first polled late.
        let start = tokio::time::Instant::now() + interval;
        let mut ticker = tokio::time::interval_at(start, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let handle = tokio::spawn(async move {
            loop {
                ticker.tick().await;
                let removed = cache.remove_expired().await;
                if removed > 0 {
                    debug!(removed, "swept expired cache entries");
                }
            }
        });
        Self { handle }
    }

    /// Stop the sweep task.
    pub(crate) fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for Sweeper {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
