//! Product listing as returned by the products endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ProductId, ShopId};

/// A product belonging to a shop.
///
/// `price` and `stock_quantity` are authoritative on the backend; the client
/// renders what it received and refetches after any mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub shop_id: ShopId,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub original_price: Option<Decimal>,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default = "default_one")]
    pub min_order_quantity: i64,
    #[serde(default)]
    pub max_order_quantity: Option<i64>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews_count: i64,
    #[serde(default)]
    pub views_count: i64,
    #[serde(default)]
    pub sales_count: i64,
    #[serde(default = "default_true", deserialize_with = "super::wire::lenient_bool")]
    pub is_available: bool,
    #[serde(default = "default_true", deserialize_with = "super::wire::lenient_bool")]
    pub is_in_stock: bool,
    #[serde(default, deserialize_with = "super::wire::lenient_bool")]
    pub is_featured: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

const fn default_true() -> bool {
    true
}

const fn default_one() -> i64 {
    1
}

impl Product {
    /// Effective discount as the backend computes it: present only when an
    /// `original_price` above the selling price exists.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_price_from_json_number() {
        let json = serde_json::json!({
            "id": 5,
            "shop_id": 9,
            "name": "Sourdough Loaf",
            "price": 6.50,
            "original_price": 8.00,
            "discount_percentage": 18.75,
            "stock_quantity": 24,
            "is_available": 1,
            "is_in_stock": 1,
            "is_featured": 0
        });
        let product: Product = serde_json::from_value(json).expect("deserialize");
        assert_eq!(product.price.to_string(), "6.5");
        assert!(product.has_discount());
        assert_eq!(product.min_order_quantity, 1);
    }

    #[test]
    fn no_discount_when_original_price_missing() {
        let json = serde_json::json!({
            "id": 6,
            "shop_id": 9,
            "name": "Rye Loaf",
            "price": 5
        });
        let product: Product = serde_json::from_value(json).expect("deserialize");
        assert!(!product.has_discount());
    }
}
