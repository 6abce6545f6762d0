//! Rotating activity ticker.

use std::time::Duration;

use rand::seq::SliceRandom;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// The canned activity messages.
const MESSAGES: [&str; 8] = [
    "Someone from Mumbai just ordered Wireless Headphones",
    "Ravi from Pune added Smart Watch to cart",
    "Priya from Bangalore is viewing Fashion deals",
    "A new customer signed up - welcome!",
    "Flash sale: 3 more items sold in last 5 min",
    "Customer reviewed Organic Face Serum - 5 stars!",
    "Order delivered successfully to Chennai",
    "New arrival: Best Sellers collection updated",
];
/// Messages shown at a time.
const VISIBLE: usize = 5;

/// A rotating selection of activity messages published on a fixed
/// interval.
///
/// Every tick publishes a shuffled sample of [`VISIBLE`] messages from
/// the pool. The background task is aborted when the handle drops.
#[derive(Debug)]
pub struct ActivityFeed {
    rx: watch::Receiver<Vec<String>>,
    task: JoinHandle<()>,
}

impl ActivityFeed {
    /// Spawn the feed on the current Tokio runtime.
    pub fn spawn(interval: Duration) -> Self {
        let initial: Vec<String> = MESSAGES[..VISIBLE].iter().map(|s| s.to_string()).collect();
        let (tx, rx) = watch::channel(initial);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let mut pool = MESSAGES;
                pool.shuffle(&mut rand::thread_rng());
                let sample = pool[..VISIBLE].iter().map(|s| s.to_string()).collect();
                if tx.send(sample).is_err() {
                    break;
                }
            }
        });
        tracing::debug!("activity feed started");
        Self { rx, task }
    }

    /// The currently displayed messages.
    pub fn messages(&self) -> Vec<String> {
        self.rx.borrow().clone()
    }

    /// Subscribe to message updates.
    pub fn subscribe(&self) -> watch::Receiver<Vec<String>> {
        self.rx.clone()
    }

    /// Stop the feed. Equivalent to dropping the handle.
    pub fn shutdown(self) {}
}

impl Drop for ActivityFeed {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("activity feed stopped");
    }
}
