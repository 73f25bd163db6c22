use mintproxy::application::engine::PaymentEngine;
use mintproxy::domain::catalog::Catalog;
use mintproxy::domain::order::{OrderStatus, OrderView};
use mintproxy::domain::ports::OrderStore;
use mintproxy::infrastructure::in_memory::InMemoryOrderStore;

/// Full purchase walkthrough: create at unit price 199 × 5, confirm, delete.
#[tokio::test]
async fn test_full_order_lifecycle() {
    let store = InMemoryOrderStore::new();
    let engine = PaymentEngine::new(Catalog::builtin(), Box::new(store.clone()));

    // Create: pending, amount priced once
    let order = engine
        .create_order("europe", "greece", Some(5))
        .await
        .unwrap();
    assert_eq!(order.amount, 995);
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.credentials.is_empty());

    // Buyer polls: still pending, no credentials visible
    match engine.query_order(&order.order_id).await.unwrap().unwrap() {
        OrderView::Pending { amount, quantity, .. } => {
            assert_eq!(amount, 995);
            assert_eq!(quantity, 5);
        }
        other => panic!("expected pending view, got {other:?}"),
    }

    // Admin confirms: exactly 5 credentials, each well-formed
    let confirmed = engine.confirm(&order.order_id).await.unwrap();
    assert_eq!(confirmed.status, OrderStatus::Success);
    assert_eq!(confirmed.credentials.len(), 5);
    for credential in &confirmed.credentials {
        assert!((1000..=9999).contains(&credential.port));
        let octets: Vec<&str> = credential.address.split('.').collect();
        assert_eq!(octets.len(), 4);
        for octet in octets {
            octet.parse::<u8>().expect("octet out of range");
        }
    }

    // Buyer's next poll observes success and receives the credentials
    match engine.query_order(&order.order_id).await.unwrap().unwrap() {
        OrderView::Success { credentials, .. } => {
            assert_eq!(credentials, confirmed.credentials)
        }
        other => panic!("expected fulfilled view, got {other:?}"),
    }

    // Admin deletes: the record is gone from the store
    engine.delete_order(&order.order_id).await.unwrap();
    assert!(store.get(&order.order_id).await.unwrap().is_none());

    // ...but the fulfilled view is still served from the cache
    match engine.query_order(&order.order_id).await.unwrap().unwrap() {
        OrderView::Success { credentials, .. } => {
            assert_eq!(credentials, confirmed.credentials)
        }
        other => panic!("expected cached fulfilled view, got {other:?}"),
    }
}

#[tokio::test]
async fn test_listing_after_n_creates() {
    let engine = PaymentEngine::new(
        Catalog::builtin(),
        Box::new(InMemoryOrderStore::new()),
    );

    let mut created = Vec::new();
    for _ in 0..5 {
        created.push(
            engine
                .create_order("america", "usa", Some(1))
                .await
                .unwrap(),
        );
    }

    let listed = engine.list_orders().await.unwrap();
    assert_eq!(listed.len(), 5);
    for pair in listed.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}
