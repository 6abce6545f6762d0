//! Recently-viewed products, persisted across sessions.

use crate::catalog::Product;
use shophub_cache::LocalStore;

/// Storage key for the persisted list.
pub const RECENTLY_VIEWED_KEY: &str = "shop_recently_viewed";
/// Maximum number of entries kept.
pub const MAX_RECENTLY_VIEWED: usize = 6;

/// Bounded, deduplicated, most-recent-first list of viewed products.
///
/// Entries are display-only snapshots and are never re-validated
/// against the current catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecentlyViewed {
    items: Vec<Product>,
}

impl RecentlyViewed {
    /// Load the persisted list. Absent or malformed data yields an
    /// empty list; this never fails.
    pub fn load(store: &LocalStore) -> Self {
        let items = match store.get::<Vec<Product>>(RECENTLY_VIEWED_KEY) {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::debug!(%err, "discarding unreadable recently-viewed list");
                Vec::new()
            }
        };
        let mut list = Self { items };
        list.items.truncate(MAX_RECENTLY_VIEWED);
        list
    }

    /// Record a view: drop any prior entry for the product, prepend it,
    /// truncate to [`MAX_RECENTLY_VIEWED`], and persist.
    ///
    /// Write failures are logged and swallowed; the in-memory list
    /// stays correct for the session.
    pub fn record(&mut self, product: Product, store: &LocalStore) {
        self.items.retain(|p| p.id != product.id);
        self.items.insert(0, product);
        self.items.truncate(MAX_RECENTLY_VIEWED);

        if let Err(err) = store.set(RECENTLY_VIEWED_KEY, &self.items) {
            tracing::warn!(%err, "failed to persist recently-viewed list");
        }
    }

    /// The list, most recent first.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
