use super::cache::FulfilledOrderCache;
use crate::domain::catalog::Catalog;
use crate::domain::credentials;
use crate::domain::order::{Order, OrderStatus, OrderView};
use crate::domain::ports::OrderStoreBox;
use crate::error::{PaymentError, Result};
use rand::Rng;
use std::time::Duration;

/// How long a fulfilled order stays visible to the buyer after the record
/// itself has been deleted.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(15 * 60);

/// The main entry point for the order/payment lifecycle.
///
/// `PaymentEngine` drives each order through `pending → success`. It owns
/// the catalog, the storage backend, and the fulfilled-order cache, and it
/// awaits every store operation so callers observe a consistent record.
pub struct PaymentEngine {
    catalog: Catalog,
    orders: OrderStoreBox,
    fulfilled: FulfilledOrderCache,
}

/// Clamps a requested quantity to [1, 20]. Missing or malformed input
/// defaults to 1; numeric input outside the range is clamped.
pub fn clamp_quantity(requested: Option<i64>) -> u32 {
    match requested {
        Some(q) if q >= 1 => q.min(20) as u32,
        _ => 1,
    }
}

fn new_order_id() -> String {
    format!("proxy_{}", rand::thread_rng().gen_range(10_000..=99_999))
}

impl PaymentEngine {
    /// Creates a new `PaymentEngine` with the default cache TTL.
    pub fn new(catalog: Catalog, orders: OrderStoreBox) -> Self {
        Self::with_cache_ttl(catalog, orders, DEFAULT_CACHE_TTL)
    }

    pub fn with_cache_ttl(catalog: Catalog, orders: OrderStoreBox, cache_ttl: Duration) -> Self {
        Self {
            catalog,
            orders,
            fulfilled: FulfilledOrderCache::new(cache_ttl),
        }
    }

    /// Creates a pending order for a catalog selection.
    ///
    /// The amount is priced here, once, from the catalog entry in effect
    /// right now. Store failures (including an order-id collision) propagate
    /// to the caller as distinct errors rather than a generic redirect.
    pub async fn create_order(
        &self,
        region_id: &str,
        country_id: &str,
        requested_quantity: Option<i64>,
    ) -> Result<Order> {
        let listing = self.catalog.resolve(region_id, country_id).ok_or_else(|| {
            PaymentError::InvalidSelection {
                region_id: region_id.to_string(),
                country_id: country_id.to_string(),
            }
        })?;

        let quantity = clamp_quantity(requested_quantity);
        let order = Order::new(new_order_id(), region_id, country_id, listing.price, quantity);
        self.orders.insert(order.clone()).await?;

        tracing::info!(
            order_id = %order.order_id,
            amount = order.amount,
            quantity,
            "order created"
        );
        Ok(order)
    }

    /// Returns the buyer-facing view of an order.
    ///
    /// `Ok(None)` means no such order exists and nothing is cached for it
    /// (the not-yet-created case). Fulfilled views are cached on the way out
    /// so they survive a later administrative delete for the cache TTL.
    pub async fn query_order(&self, order_id: &str) -> Result<Option<OrderView>> {
        match self.orders.get(order_id).await? {
            Some(order) => {
                let view = OrderView::from(&order);
                if order.is_fulfilled() {
                    self.fulfilled.put(order_id, view.clone()).await;
                }
                Ok(Some(view))
            }
            None => Ok(self.fulfilled.get(order_id).await),
        }
    }

    /// Administrative confirmation: marks the order paid and attaches
    /// exactly `quantity` freshly generated credentials.
    ///
    /// Idempotent: confirming an already fulfilled order returns the stored
    /// record unchanged instead of reissuing credentials.
    pub async fn confirm(&self, order_id: &str) -> Result<Order> {
        let mut order = self
            .orders
            .get(order_id)
            .await?
            .ok_or_else(|| PaymentError::NotFound(order_id.to_string()))?;

        if order.is_fulfilled() {
            tracing::debug!(order_id, "order already confirmed");
            return Ok(order);
        }

        let credentials = credentials::generate(order.quantity);
        self.orders
            .update_status_and_credentials(order_id, OrderStatus::Success, credentials.clone())
            .await?;
        order.status = OrderStatus::Success;
        order.credentials = credentials;

        tracing::info!(order_id, quantity = order.quantity, "order confirmed");
        Ok(order)
    }

    /// Administrative delete. Idempotent; reports success whether or not the
    /// order existed.
    pub async fn delete_order(&self, order_id: &str) -> Result<()> {
        self.orders.delete(order_id).await?;
        tracing::info!(order_id, "order deleted");
        Ok(())
    }

    /// All orders for the administrative listing, newest first.
    pub async fn list_orders(&self) -> Result<Vec<Order>> {
        self.orders.list_all().await
    }
}
