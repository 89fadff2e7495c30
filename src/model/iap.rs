use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InAppPurchaseProduct {
    pub product_id: String,
    pub title: String,
    pub price_cents: u64,
    pub currency: String,
}

/// Lifecycle of a submitted purchase order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InAppPurchaseOrder {
    pub order_id: i64,
    pub product_id: String,
    pub status: OrderStatus,
}
