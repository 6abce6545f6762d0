//! Prints a few live-feed updates, then tears the feeds down.

use std::time::Duration;

use shophub_live::{ActivityFeed, LiveViewers};

#[tokio::main]
async fn main() {
    // Short intervals so the demo finishes quickly; the storefront uses
    // LiveConfig::default().
    let viewers = LiveViewers::spawn(Duration::from_millis(400));
    let activity = ActivityFeed::spawn(Duration::from_millis(800));

    for _ in 0..5 {
        tokio::time::sleep(Duration::from_millis(800)).await;
        println!("{} people are viewing", viewers.count());
        for message in activity.messages() {
            println!("  - {message}");
        }
    }

    viewers.shutdown();
    activity.shutdown();
}
