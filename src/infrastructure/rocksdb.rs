use crate::domain::credentials::Credential;
use crate::domain::order::{Order, OrderStatus};
use crate::domain::ports::OrderStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, IteratorMode, Options};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Column Family for storing order records.
pub const CF_ORDERS: &str = "orders";

/// A persistent order store backed by RocksDB.
///
/// Orders live in a dedicated column family as serde_json values keyed by
/// `order_id`. Read-modify-write operations take the write mutex so two
/// overlapping confirm/delete calls on the same identifier can never produce
/// a half-updated record.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbOrderStore {
    db: Arc<DB>,
    write_lock: Arc<Mutex<()>>,
}

impl RocksDbOrderStore {
    /// Opens or creates a RocksDB instance at the specified path, ensuring
    /// the "orders" column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_orders = ColumnFamilyDescriptor::new(CF_ORDERS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_orders])?;

        tracing::debug!("order store opened");
        Ok(Self {
            db: Arc::new(db),
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    fn cf(&self) -> Result<&ColumnFamily> {
        self.db.cf_handle(CF_ORDERS).ok_or_else(|| {
            PaymentError::Io(std::io::Error::other("orders column family not found"))
        })
    }

    fn get_sync(&self, order_id: &str) -> Result<Option<Order>> {
        let cf = self.cf()?;
        match self.db.get_cf(cf, order_id.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn put_sync(&self, order: &Order) -> Result<()> {
        let cf = self.cf()?;
        let value = serde_json::to_vec(order)?;
        self.db.put_cf(cf, order.order_id.as_bytes(), value)?;
        Ok(())
    }
}

#[async_trait]
impl OrderStore for RocksDbOrderStore {
    async fn insert(&self, order: Order) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let cf = self.cf()?;
        if self.db.get_pinned_cf(cf, order.order_id.as_bytes())?.is_some() {
            return Err(PaymentError::DuplicateKey(order.order_id));
        }
        self.put_sync(&order)
    }

    async fn get(&self, order_id: &str) -> Result<Option<Order>> {
        self.get_sync(order_id)
    }

    async fn update_status_and_credentials(
        &self,
        order_id: &str,
        status: OrderStatus,
        credentials: Vec<Credential>,
    ) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut order = self
            .get_sync(order_id)?
            .ok_or_else(|| PaymentError::NotFound(order_id.to_string()))?;
        order.status = status;
        order.credentials = credentials;
        self.put_sync(&order)
    }

    async fn delete(&self, order_id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let cf = self.cf()?;
        self.db.delete_cf(cf, order_id.as_bytes())?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Order>> {
        let cf = self.cf()?;
        let mut orders = Vec::new();
        for item in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (_key, value) = item?;
            let order: Order = serde_json::from_slice(&value)?;
            orders.push(order);
        }
        orders.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.order_id.cmp(&a.order_id))
        });
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn order(order_id: &str) -> Order {
        Order::new(order_id.to_string(), "europe", "greece", 199, 2)
    }

    #[tokio::test]
    async fn test_open_creates_orders_cf() {
        let dir = tempdir().unwrap();
        let store = RocksDbOrderStore::open(dir.path()).expect("Failed to open RocksDB");
        assert!(store.db.cf_handle(CF_ORDERS).is_some());
    }

    #[tokio::test]
    async fn test_insert_get_roundtrip() {
        let dir = tempdir().unwrap();
        let store = RocksDbOrderStore::open(dir.path()).unwrap();

        let order = order("proxy_10001");
        store.insert(order.clone()).await.unwrap();

        let retrieved = store.get("proxy_10001").await.unwrap().unwrap();
        assert_eq!(retrieved, order);
        assert!(store.get("proxy_20002").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_duplicate_fails() {
        let dir = tempdir().unwrap();
        let store = RocksDbOrderStore::open(dir.path()).unwrap();

        store.insert(order("proxy_10001")).await.unwrap();
        let err = store.insert(order("proxy_10001")).await.unwrap_err();
        assert!(matches!(err, PaymentError::DuplicateKey(_)));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let dir = tempdir().unwrap();
        let store = RocksDbOrderStore::open(dir.path()).unwrap();

        store.insert(order("proxy_10001")).await.unwrap();
        let credentials = crate::domain::credentials::generate(2);
        store
            .update_status_and_credentials("proxy_10001", OrderStatus::Success, credentials.clone())
            .await
            .unwrap();

        let updated = store.get("proxy_10001").await.unwrap().unwrap();
        assert_eq!(updated.status, OrderStatus::Success);
        assert_eq!(updated.credentials, credentials);

        store.delete("proxy_10001").await.unwrap();
        assert!(store.get("proxy_10001").await.unwrap().is_none());
        // Idempotent
        store.delete("proxy_10001").await.unwrap();
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let store = RocksDbOrderStore::open(dir.path()).unwrap();

        let err = store
            .update_status_and_credentials("proxy_00000", OrderStatus::Success, Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let dir = tempdir().unwrap();
        let store = RocksDbOrderStore::open(dir.path()).unwrap();

        let mut first = order("proxy_10001");
        first.created_at = first.created_at - chrono::Duration::seconds(30);
        let mut second = order("proxy_10002");
        second.created_at = second.created_at - chrono::Duration::seconds(10);

        store.insert(first).await.unwrap();
        store.insert(second).await.unwrap();

        let all = store.list_all().await.unwrap();
        let ids: Vec<&str> = all.iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(ids, ["proxy_10002", "proxy_10001"]);
    }
}
