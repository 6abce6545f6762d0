//! Simulated live viewer count.

use std::time::Duration;

use rand::Rng;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Starting viewer count.
const START: u32 = 24;
/// Lower clamp.
const MIN: u32 = 8;
/// Upper clamp.
const MAX: u32 = 42;

/// A fluctuating viewer count published on a fixed interval.
///
/// Every tick the count moves by a uniform step in `-2..=2`, clamped
/// to `8..=42`. The background task is aborted when the handle drops.
#[derive(Debug)]
pub struct LiveViewers {
    rx: watch::Receiver<u32>,
    task: JoinHandle<()>,
}

impl LiveViewers {
    /// Spawn the feed on the current Tokio runtime.
    pub fn spawn(interval: Duration) -> Self {
        let (tx, rx) = watch::channel(START);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately.
            ticker.tick().await;
            let mut count = START as i32;
            loop {
                ticker.tick().await;
                let step = rand::thread_rng().gen_range(-2..=2);
                count = (count + step).clamp(MIN as i32, MAX as i32);
                if tx.send(count as u32).is_err() {
                    break;
                }
            }
        });
        tracing::debug!("live viewer feed started");
        Self { rx, task }
    }

    /// The current viewer count.
    pub fn count(&self) -> u32 {
        *self.rx.borrow()
    }

    /// Subscribe to count updates.
    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.rx.clone()
    }

    /// Stop the feed. Equivalent to dropping the handle.
    pub fn shutdown(self) {}
}

impl Drop for LiveViewers {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("live viewer feed stopped");
    }
}
