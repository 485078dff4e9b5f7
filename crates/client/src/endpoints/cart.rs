//! Cart endpoints.
//!
//! The cart lives entirely on the backend; every method here refetches or
//! mutates the canonical rows. Two rapid quantity updates are not serialized
//! against each other - the backend applies them in arrival order.

use serde::Serialize;
use tracing::instrument;

use shoplink_core::{CartItem, ProductId};

use crate::client::ShopLinkClient;
use crate::error::ApiError;

#[derive(Serialize)]
struct AddToCart {
    product_id: ProductId,
    quantity: i64,
}

#[derive(Serialize)]
struct UpdateQuantity {
    quantity: i64,
}

impl ShopLinkClient {
    /// Fetch the logged-in user's cart, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid token.
    #[instrument(skip(self))]
    pub async fn cart(&self) -> Result<Vec<CartItem>, ApiError> {
        self.get::<Vec<CartItem>>("/cart").await?.into_data()
    }

    /// Add a product to the cart; quantities accumulate when the product is
    /// already present. Returns the backend's confirmation message.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` for unavailable products or insufficient
    /// stock.
    #[instrument(skip(self), fields(product_id = %product_id, quantity))]
    pub async fn add_to_cart(
        &self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<String, ApiError> {
        let envelope = self
            .post::<serde_json::Value, _>(
                "/cart",
                &AddToCart {
                    product_id,
                    quantity,
                },
            )
            .await?;
        Ok(envelope.message)
    }

    /// Set the quantity of a cart row. Returns the backend's confirmation
    /// message.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` for quantities below 1 or above stock, and
    /// `ApiError::NotFound` when the product is not in the cart.
    #[instrument(skip(self), fields(product_id = %product_id, quantity))]
    pub async fn update_cart_item(
        &self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<String, ApiError> {
        let path = format!("/cart/{product_id}");
        let envelope = self
            .put::<serde_json::Value, _>(&path, &UpdateQuantity { quantity })
            .await?;
        Ok(envelope.message)
    }

    /// Remove a product from the cart. Returns the backend's confirmation
    /// message.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` when the product is not in the cart.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn remove_from_cart(&self, product_id: ProductId) -> Result<String, ApiError> {
        let path = format!("/cart/{product_id}");
        let envelope = self.delete::<serde_json::Value>(&path).await?;
        Ok(envelope.message)
    }

    /// Remove every row from the cart. Returns the backend's confirmation
    /// message.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid token.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<String, ApiError> {
        let envelope = self.delete::<serde_json::Value>("/cart/clear").await?;
        Ok(envelope.message)
    }
}
