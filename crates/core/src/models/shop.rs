//! Shop listing as returned by the shops endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ShopId, UserId};

/// A shop on the marketplace.
///
/// Derived counts (`rating`, `reviews_count`, `followers_count`,
/// `product_count`, `total_sales`) are maintained by the backend and must
/// never be mutated client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    pub id: ShopId,
    pub owner_id: UserId,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub cover_photo_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub business_hours: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews_count: i64,
    #[serde(default)]
    pub followers_count: i64,
    #[serde(default)]
    pub product_count: i64,
    #[serde(default)]
    pub total_sales: Decimal,
    #[serde(default, deserialize_with = "super::wire::lenient_bool")]
    pub is_verified: bool,
    #[serde(default = "default_true", deserialize_with = "super::wire::lenient_bool")]
    pub is_online_selling: bool,
    #[serde(default, deserialize_with = "super::wire::lenient_bool")]
    pub is_offline_selling: bool,
    #[serde(default = "default_true", deserialize_with = "super::wire::lenient_bool")]
    pub accepts_online_payment: bool,
    #[serde(default = "default_true", deserialize_with = "super::wire::lenient_bool")]
    pub accepts_cash: bool,
    #[serde(default = "default_true", deserialize_with = "super::wire::lenient_bool")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

const fn default_true() -> bool {
    true
}

/// A follower row from `GET /followers/shop/:id/followers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopFollower {
    pub id: UserId,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sqlite_flavored_row() {
        let json = serde_json::json!({
            "id": 9,
            "owner_id": 3,
            "name": "Corner Bakery",
            "slug": "corner-bakery",
            "category": "food",
            "rating": 4.5,
            "followers_count": 12,
            "is_online_selling": 1,
            "is_offline_selling": 0,
            "is_active": 1,
            "total_sales": 1204.50
        });
        let shop: Shop = serde_json::from_value(json).expect("deserialize");
        assert_eq!(shop.id, ShopId::new(9));
        assert!(shop.is_online_selling);
        assert!(!shop.is_offline_selling);
        assert_eq!(shop.product_count, 0);
        assert_eq!(shop.business_hours, None);
    }
}
