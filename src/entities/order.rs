//! Purchase orders between retailers and suppliers

use super::day;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

status_enum!(OrderStatus {
    Pending => "pending",
    Processing => "processing",
    Shipped => "shipped",
    Delivered => "delivered",
    Cancelled => "cancelled",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Human-facing order number, e.g. "ORD-1042"
    pub number: String,
    pub customer: String,
    pub status: OrderStatus,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

crate::impl_list_item!(
    Order,
    "order",
    search: ["number", "customer"],
    sort: ["number", "customer", "status", "total", "createdAt"],
    {
        "number" => number,
        "customer" => customer,
        "status" => status,
        "total" => total,
        "createdAt" => created_at,
    }
);

fn order(
    id: &str,
    number: &str,
    customer: &str,
    status: OrderStatus,
    total: f64,
    created_at: DateTime<Utc>,
) -> Order {
    Order {
        id: id.to_string(),
        number: number.to_string(),
        customer: customer.to_string(),
        status,
        total,
        created_at,
    }
}

/// Seed orders
pub fn sample_orders() -> Vec<Order> {
    vec![
        order(
            "ord-001",
            "ORD-1001",
            "FreshMart Grocers",
            OrderStatus::Delivered,
            1249.50,
            day(2024, 5, 3),
        ),
        order(
            "ord-002",
            "ORD-1002",
            "Urban Basket",
            OrderStatus::Shipped,
            386.20,
            day(2024, 5, 19),
        ),
        order(
            "ord-003",
            "ORD-1003",
            "Cornerstone Pantry",
            OrderStatus::Processing,
            742.00,
            day(2024, 6, 2),
        ),
        order(
            "ord-004",
            "ORD-1004",
            "FreshMart Grocers",
            OrderStatus::Pending,
            98.75,
            day(2024, 6, 14),
        ),
        order(
            "ord-005",
            "ORD-1005",
            "Harbor Market",
            OrderStatus::Cancelled,
            2210.00,
            day(2024, 6, 21),
        ),
        order(
            "ord-006",
            "ORD-1006",
            "Urban Basket",
            OrderStatus::Delivered,
            515.40,
            day(2024, 7, 8),
        ),
    ]
}
