//! Orders and their line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{OrderId, OrderStatus, ProductId, ShopId, UserId};

/// An order, created via `POST /orders` and never mutated client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub shop_id: ShopId,
    #[serde(default)]
    pub status: OrderStatus,
    pub total_amount: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub shipping_address: Option<String>,
    /// Present on `POST /orders` and `GET /orders/:id`; the list endpoint
    /// returns bare rows without items.
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_currency() -> String {
    "USD".to_owned()
}

/// A line item within an order, joined with product name and image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_rows_without_items_deserialize_to_empty_vec() {
        let json = serde_json::json!({
            "id": 31,
            "user_id": 4,
            "shop_id": 9,
            "status": "pending",
            "total_amount": 18.00,
            "currency": "USD",
            "payment_method": "cash_on_delivery",
            "created_at": "2025-03-10 11:00:00"
        });
        let order: Order = serde_json::from_value(json).expect("deserialize");
        assert!(order.items.is_empty());
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn detail_rows_carry_joined_items() {
        let json = serde_json::json!({
            "id": 31,
            "user_id": 4,
            "shop_id": 9,
            "total_amount": 13.00,
            "items": [
                {
                    "id": 1,
                    "order_id": 31,
                    "product_id": 5,
                    "quantity": 2,
                    "unit_price": 6.50,
                    "subtotal": 13.00,
                    "name": "Sourdough Loaf"
                }
            ]
        });
        let order: Order = serde_json::from_value(json).expect("deserialize");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].subtotal, order.total_amount);
    }
}
