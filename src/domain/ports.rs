use super::credentials::Credential;
use super::order::{Order, OrderStatus};
use crate::error::Result;
use async_trait::async_trait;

/// Persisted table of orders keyed by order identifier.
///
/// Implementations must be safe under overlapping callers: concurrent writes
/// to the same identifier are serialized, and every operation is durable
/// before it returns.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists a new order. Fails with `DuplicateKey` if the identifier
    /// already exists; an existing record is never overwritten.
    async fn insert(&self, order: Order) -> Result<()>;

    async fn get(&self, order_id: &str) -> Result<Option<Order>>;

    /// Atomically updates status and credentials of one order. Fails with
    /// `NotFound` if the identifier does not exist.
    async fn update_status_and_credentials(
        &self,
        order_id: &str,
        status: OrderStatus,
        credentials: Vec<Credential>,
    ) -> Result<()>;

    /// Removes an order. Idempotent: deleting a missing identifier is Ok.
    async fn delete(&self, order_id: &str) -> Result<()>;

    /// All orders, most recently created first.
    async fn list_all(&self) -> Result<Vec<Order>>;
}

pub type OrderStoreBox = Box<dyn OrderStore>;
