//! Cart rows and the checkout arithmetic over them.
//!
//! The cart exists only as backend-returned rows joined with product and shop
//! details; there is no client-side persistence. The grouping and total
//! functions here are pure so checkout can be exercised without HTTP.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CartItemId, ProductId, ShopId, UserId};

/// A cart row from `GET /cart`, denormalized with product and shop details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub product_id: ProductId,
    pub quantity: i64,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub image_url: Option<String>,
    pub shop_id: ShopId,
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl CartItem {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Group cart items per shop, ordered by shop id.
///
/// Checkout issues one order per distinct shop; the ordering is deterministic
/// so repeated checkouts of the same cart produce the same request sequence.
#[must_use]
pub fn group_by_shop(items: &[CartItem]) -> BTreeMap<ShopId, Vec<&CartItem>> {
    let mut grouped: BTreeMap<ShopId, Vec<&CartItem>> = BTreeMap::new();
    for item in items {
        grouped.entry(item.shop_id).or_default().push(item);
    }
    grouped
}

/// Sum of line totals for a set of items (one shop's subtotal).
#[must_use]
pub fn subtotal<'a, I>(items: I) -> Decimal
where
    I: IntoIterator<Item = &'a CartItem>,
{
    items
        .into_iter()
        .fold(Decimal::ZERO, |total, item| total + item.line_total())
}

/// Grand total across the whole cart.
#[must_use]
pub fn grand_total(items: &[CartItem]) -> Decimal {
    subtotal(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, product_id: i64, shop_id: i64, price: &str, quantity: i64) -> CartItem {
        CartItem {
            id: CartItemId::new(id),
            user_id: None,
            product_id: ProductId::new(product_id),
            quantity,
            name: format!("product-{product_id}"),
            price: price.parse().expect("decimal"),
            image_url: None,
            shop_id: ShopId::new(shop_id),
            shop_name: None,
            created_at: None,
        }
    }

    #[test]
    fn groups_items_per_shop_in_id_order() {
        let items = vec![
            item(1, 10, 7, "2.00", 1),
            item(2, 11, 3, "5.00", 2),
            item(3, 12, 7, "1.50", 4),
        ];
        let grouped = group_by_shop(&items);
        let shops: Vec<ShopId> = grouped.keys().copied().collect();
        assert_eq!(shops, vec![ShopId::new(3), ShopId::new(7)]);
        assert_eq!(grouped[&ShopId::new(7)].len(), 2);
    }

    #[test]
    fn totals_use_decimal_arithmetic() {
        // 0.1 + 0.2 style inputs that would drift under f64
        let items = vec![item(1, 10, 7, "0.10", 3), item(2, 11, 7, "0.20", 1)];
        assert_eq!(grand_total(&items).to_string(), "0.50");
    }

    #[test]
    fn shop_subtotals_sum_to_grand_total() {
        let items = vec![
            item(1, 10, 7, "2.00", 1),
            item(2, 11, 3, "5.00", 2),
            item(3, 12, 7, "1.50", 4),
        ];
        let grouped = group_by_shop(&items);
        let per_shop: Decimal = grouped
            .values()
            .map(|items| subtotal(items.iter().copied()))
            .sum();
        assert_eq!(per_shop, grand_total(&items));
        assert_eq!(grand_total(&items).to_string(), "18.00");
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(grand_total(&[]), Decimal::ZERO);
        assert!(group_by_shop(&[]).is_empty());
    }
}
