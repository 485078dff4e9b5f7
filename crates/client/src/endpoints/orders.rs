//! Order endpoints and the multi-shop checkout flow.

use serde::Serialize;
use tracing::{instrument, warn};

use shoplink_core::{
    CartItem, Order, OrderId, OrderStatus, PaymentMethod, ProductId, ShopId, group_by_shop,
};

use crate::client::ShopLinkClient;
use crate::error::ApiError;
use crate::query::QueryBuilder;

/// One line of an order creation request.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItemInput {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Body of `POST /orders`. One order covers one shop; checkout splits a
/// multi-shop cart into several of these.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    pub shop_id: ShopId,
    pub items: Vec<OrderItemInput>,
    pub payment_method: PaymentMethod,
    pub shipping_address: String,
}

#[derive(Serialize)]
struct StatusUpdate {
    status: OrderStatus,
}

/// Shipping address collected at checkout.
///
/// The backend stores the address as one text blob; `Display` renders the
/// block format it expects.
#[derive(Debug, Clone)]
pub struct ShippingAddress {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub phone: String,
}

impl std::fmt::Display for ShippingAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}\n{}, {} {}\n{}\nPhone: {}",
            self.full_name, self.address, self.city, self.state, self.zip_code, self.country,
            self.phone
        )
    }
}

/// Result of a [`ShopLinkClient::place_order`] run.
///
/// Order creation is not transactional across shops: orders already created
/// stay created when a later one fails, and the cart is only cleared once
/// every shop succeeded.
#[derive(Debug, Default)]
pub struct CheckoutOutcome {
    /// Orders created, one per shop that succeeded.
    pub orders: Vec<Order>,
    /// Shops whose order creation failed, with the error.
    pub failed: Vec<(ShopId, ApiError)>,
    /// Whether the cart was cleared (all shops succeeded and the clear call
    /// went through).
    pub cart_cleared: bool,
    /// Error from the final clear call, when everything else succeeded but
    /// the cart could not be cleared.
    pub clear_error: Option<ApiError>,
}

impl CheckoutOutcome {
    /// Whether every shop's order was created.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty() && !self.orders.is_empty()
    }
}

/// Split a cart into one order request per distinct shop, in shop-id order.
#[must_use]
pub fn order_requests(
    items: &[CartItem],
    payment_method: PaymentMethod,
    shipping_address: &ShippingAddress,
) -> Vec<NewOrder> {
    group_by_shop(items)
        .into_iter()
        .map(|(shop_id, shop_items)| NewOrder {
            shop_id,
            items: shop_items
                .into_iter()
                .map(|item| OrderItemInput {
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
            payment_method,
            shipping_address: shipping_address.to_string(),
        })
        .collect()
}

impl ShopLinkClient {
    /// Create a single order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` for unavailable products or insufficient
    /// stock.
    #[instrument(skip(self, order), fields(shop_id = %order.shop_id, lines = order.items.len()))]
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError> {
        self.post::<Order, _>("/orders", order).await?.into_data()
    }

    /// List orders: the caller's own purchases, or a shop's incoming orders
    /// when `shop_id` is given (owner only).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` when `shop_id` names a shop owned by
    /// another user.
    #[instrument(skip(self))]
    pub async fn orders(&self, shop_id: Option<ShopId>) -> Result<Vec<Order>, ApiError> {
        let query = QueryBuilder::new().push_opt("shop_id", shop_id).finish();
        let path = format!("/orders{query}");
        self.get::<Vec<Order>>(&path).await?.into_data()
    }

    /// Fetch one order with its line items.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for unknown orders.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, ApiError> {
        let path = format!("/orders/{id}");
        self.get::<Order>(&path).await?.into_data()
    }

    /// Update the status of an order on a shop the logged-in user owns.
    /// Returns the backend's confirmation message.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` when the order's shop belongs to
    /// another user.
    #[instrument(skip(self), fields(order_id = %id, status = %status))]
    pub async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<String, ApiError> {
        let path = format!("/orders/{id}/status");
        let envelope = self
            .put::<serde_json::Value, _>(&path, &StatusUpdate { status })
            .await?;
        Ok(envelope.message)
    }

    /// Check out the whole cart.
    ///
    /// Fetches the cart, issues exactly one order per distinct shop (in
    /// shop-id order), and clears the cart only after every order creation
    /// succeeded. An empty cart returns an empty outcome without issuing any
    /// requests.
    ///
    /// # Errors
    ///
    /// Returns an error only when the initial cart fetch fails; per-shop
    /// failures are reported in [`CheckoutOutcome::failed`].
    #[instrument(skip(self, shipping_address))]
    pub async fn place_order(
        &self,
        payment_method: PaymentMethod,
        shipping_address: &ShippingAddress,
    ) -> Result<CheckoutOutcome, ApiError> {
        let items = self.cart().await?;
        let mut outcome = CheckoutOutcome::default();
        if items.is_empty() {
            return Ok(outcome);
        }

        for request in order_requests(&items, payment_method, shipping_address) {
            let shop_id = request.shop_id;
            match self.create_order(&request).await {
                Ok(order) => outcome.orders.push(order),
                Err(error) => {
                    warn!(%shop_id, %error, "order creation failed");
                    outcome.failed.push((shop_id, error));
                }
            }
        }

        if outcome.all_succeeded() {
            match self.clear_cart().await {
                Ok(_) => outcome.cart_cleared = true,
                Err(error) => outcome.clear_error = Some(error),
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use shoplink_core::{CartItemId, ProductId};

    use super::*;

    fn address() -> ShippingAddress {
        ShippingAddress {
            full_name: "Ada Lovelace".to_owned(),
            address: "12 Analytical Row".to_owned(),
            city: "London".to_owned(),
            state: "LDN".to_owned(),
            country: "UK".to_owned(),
            zip_code: "N1 7AA".to_owned(),
            phone: "555-0100".to_owned(),
        }
    }

    fn item(id: i64, product_id: i64, shop_id: i64, quantity: i64) -> CartItem {
        CartItem {
            id: CartItemId::new(id),
            user_id: None,
            product_id: ProductId::new(product_id),
            quantity,
            name: format!("product-{product_id}"),
            price: "2.50".parse().expect("decimal"),
            image_url: None,
            shop_id: ShopId::new(shop_id),
            shop_name: None,
            created_at: None,
        }
    }

    #[test]
    fn two_shop_cart_yields_exactly_two_order_requests() {
        let items = vec![item(1, 10, 7, 1), item(2, 11, 3, 2), item(3, 12, 7, 4)];
        let requests = order_requests(&items, PaymentMethod::CashOnDelivery, &address());

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].shop_id, ShopId::new(3));
        assert_eq!(requests[0].items.len(), 1);
        assert_eq!(requests[1].shop_id, ShopId::new(7));
        assert_eq!(requests[1].items.len(), 2);
    }

    #[test]
    fn order_request_carries_product_and_quantity() {
        let items = vec![item(1, 5, 9, 2)];
        let requests = order_requests(&items, PaymentMethod::Card, &address());
        let json = serde_json::to_value(&requests[0]).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "shop_id": 9,
                "items": [{"product_id": 5, "quantity": 2}],
                "payment_method": "card",
                "shipping_address": "Ada Lovelace\n12 Analytical Row\nLondon, LDN N1 7AA\nUK\nPhone: 555-0100"
            })
        );
    }

    #[test]
    fn shipping_address_renders_the_backend_block_format() {
        let rendered = address().to_string();
        assert_eq!(rendered.lines().count(), 5);
        assert!(rendered.ends_with("Phone: 555-0100"));
    }

    #[test]
    fn empty_outcome_reports_nothing_succeeded() {
        let outcome = CheckoutOutcome::default();
        assert!(!outcome.all_succeeded());
        assert!(!outcome.cart_cleared);
    }
}
