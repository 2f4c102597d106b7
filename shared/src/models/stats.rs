//! Dashboard statistics

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate projection computed server-side, consumed read-only
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardStats {
    pub total_orders: i64,
    pub new_orders: i64,
    pub in_progress_orders: i64,
    pub ready_orders: i64,
    pub delivered_orders: i64,
    pub orders_today: i64,
    pub revenue_today: Decimal,
    pub revenue_month: Decimal,
    pub total_clients: i64,
    pub low_stock_items: i64,
}
