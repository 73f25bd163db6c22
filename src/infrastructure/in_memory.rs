use crate::domain::credentials::Credential;
use crate::domain::order::{Order, OrderStatus};
use crate::domain::ports::OrderStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory order store.
///
/// Uses `Arc<RwLock<HashMap<String, Order>>>` to allow shared concurrent
/// access. Ideal for tests and single-run usage where persistence is not
/// required.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<String, Order>>>,
}

impl InMemoryOrderStore {
    /// Creates a new, empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, order: Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.order_id) {
            return Err(PaymentError::DuplicateKey(order.order_id));
        }
        orders.insert(order.order_id.clone(), order);
        Ok(())
    }

    async fn get(&self, order_id: &str) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.get(order_id).cloned())
    }

    async fn update_status_and_credentials(
        &self,
        order_id: &str,
        status: OrderStatus,
        credentials: Vec<Credential>,
    ) -> Result<()> {
        let mut orders = self.orders.write().await;
        match orders.get_mut(order_id) {
            Some(order) => {
                order.status = status;
                order.credentials = credentials;
                Ok(())
            }
            None => Err(PaymentError::NotFound(order_id.to_string())),
        }
    }

    async fn delete(&self, order_id: &str) -> Result<()> {
        let mut orders = self.orders.write().await;
        orders.remove(order_id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        let mut all: Vec<Order> = orders.values().cloned().collect();
        all.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.order_id.cmp(&a.order_id))
        });
        Ok(all)
    }
}
