use super::credentials::Credential;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Success,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Success => "success",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A purchase record tracked through `pending → success`.
///
/// The amount is priced once at creation from the catalog and never changes
/// afterwards. Credentials stay empty until an administrator confirms the
/// payment.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Order {
    pub order_id: String,
    pub region_id: String,
    pub country_id: String,
    pub amount: i64,
    pub quantity: u32,
    pub status: OrderStatus,
    #[serde(default)]
    pub credentials: Vec<Credential>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        order_id: String,
        region_id: &str,
        country_id: &str,
        unit_price: i64,
        quantity: u32,
    ) -> Self {
        Self {
            order_id,
            region_id: region_id.to_string(),
            country_id: country_id.to_string(),
            amount: unit_price * i64::from(quantity),
            quantity,
            status: OrderStatus::Pending,
            credentials: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn is_fulfilled(&self) -> bool {
        self.status == OrderStatus::Success
    }
}

/// What a buyer polling their order gets to see.
///
/// Credentials appear only once the order has been confirmed.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum OrderView {
    Pending {
        order_id: String,
        amount: i64,
        quantity: u32,
    },
    Success {
        order_id: String,
        amount: i64,
        quantity: u32,
        credentials: Vec<Credential>,
    },
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        match order.status {
            OrderStatus::Pending => OrderView::Pending {
                order_id: order.order_id.clone(),
                amount: order.amount,
                quantity: order.quantity,
            },
            OrderStatus::Success => OrderView::Success {
                order_id: order.order_id.clone(),
                amount: order.amount,
                quantity: order.quantity,
                credentials: order.credentials.clone(),
            },
        }
    }
}
