//! Order snapshots.

use crate::cart::CartItem;
use crate::ids::OrderId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, being prepared. The initial state of every order.
    #[default]
    Processing,
    /// Order handed to the carrier.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "processing" => Some(OrderStatus::Processing),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if the order can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Processing)
    }
}

/// A placed order: an immutable snapshot of the cart at checkout time.
///
/// The total and line items are captured at creation and never
/// recomputed; there is deliberately no stock re-validation when an
/// order is placed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Unix timestamp when the order was placed.
    pub placed_at: i64,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Carrier tracking number, once assigned.
    pub tracking_number: Option<String>,
    total: Money,
    items: Vec<CartItem>,
}

impl Order {
    /// Create an order with a caller-supplied id.
    ///
    /// Id and tracking-number generation belong to the checkout flow;
    /// any unique string is acceptable.
    pub fn new(id: OrderId, items: Vec<CartItem>, total: Money) -> Self {
        Self {
            id,
            placed_at: current_timestamp(),
            status: OrderStatus::Processing,
            tracking_number: None,
            total,
            items,
        }
    }

    /// Create an order with a generated `ORD-…` id.
    pub fn place(items: Vec<CartItem>, total: Money) -> Self {
        Self::new(generate_order_id(), items, total)
    }

    /// Attach a tracking number.
    pub fn with_tracking(mut self, tracking_number: impl Into<String>) -> Self {
        self.tracking_number = Some(tracking_number.into());
        self
    }

    /// Rehydrate a known order (e.g., persisted history) verbatim.
    pub fn restore(
        id: OrderId,
        placed_at: i64,
        status: OrderStatus,
        items: Vec<CartItem>,
        total: Money,
        tracking_number: Option<String>,
    ) -> Self {
        Self {
            id,
            placed_at,
            status,
            tracking_number,
            total,
            items,
        }
    }

    /// Grand total charged, captured at creation.
    pub fn total(&self) -> Money {
        self.total
    }

    /// The purchased lines, snapshotted at checkout.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Total unit count across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Update the lifecycle status.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Cancel the order, if it has not shipped yet.
    pub fn cancel(&mut self) -> bool {
        if !self.status.can_cancel() {
            return false;
        }
        self.status = OrderStatus::Cancelled;
        true
    }
}

/// Generate an order id from the placement time, disambiguated by a
/// process-wide counter.
pub fn generate_order_id() -> OrderId {
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    OrderId::new(format!("ORD-{millis}-{counter}"))
}

/// Generate a tracking number: `TRK` followed by 9 uppercase
/// alphanumerics.
pub fn generate_tracking_number() -> String {
    use rand::distributions::Alphanumeric;
    use rand::Rng;

    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|b| (b as char).to_ascii_uppercase())
        .collect();
    format!("TRK{suffix}")
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
