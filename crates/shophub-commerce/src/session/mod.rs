//! The per-session state engine.

mod engine;
mod recent;
mod wishlist;

pub use engine::{SessionEngine, Shopper};
pub use recent::{RecentlyViewed, MAX_RECENTLY_VIEWED, RECENTLY_VIEWED_KEY};
pub use wishlist::Wishlist;
