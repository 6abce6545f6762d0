//! Simulated real-time feeds for the ShopHub storefront.
//!
//! The live viewer count and the activity ticker are cosmetic: they
//! carry no business state and never touch the cart, catalog, or
//! orders. Each feed is a periodic background task scoped to its
//! handle: dropping the handle cancels the task, so no timers leak
//! past their owning scope.
//!
//! # Example
//!
//! ```rust,ignore
//! use shophub_live::{ActivityFeed, LiveConfig, LiveViewers};
//!
//! let config = LiveConfig::default();
//! let viewers = LiveViewers::spawn(config.viewers_interval);
//! let activity = ActivityFeed::spawn(config.activity_interval);
//!
//! println!("{} people are viewing", viewers.count());
//!
//! // Feeds stop when the handles drop.
//! drop(viewers);
//! drop(activity);
//! ```

mod activity;
mod config;
mod viewers;

pub use activity::ActivityFeed;
pub use config::LiveConfig;
pub use viewers::LiveViewers;
