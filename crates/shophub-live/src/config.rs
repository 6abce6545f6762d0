//! Feed timing configuration.

use std::time::Duration;

/// Tick intervals for the simulated feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveConfig {
    /// How often the viewer count fluctuates.
    pub viewers_interval: Duration,
    /// How often the activity feed rotates.
    pub activity_interval: Duration,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            viewers_interval: Duration::from_secs(4),
            activity_interval: Duration::from_secs(8),
        }
    }
}
