//! Checkout delivery options and order snapshots.

mod order;
mod shipping;

pub use order::{generate_tracking_number, Order, OrderStatus};
pub use shipping::DeliveryOption;
