//! Shop and product review endpoints.

use serde::Serialize;
use tracing::instrument;

use shoplink_core::{ProductId, Review, ShopId};

use crate::client::ShopLinkClient;
use crate::error::ApiError;

/// Body of review creation. `rating` is 1-5; everything else is optional.
#[derive(Debug, Clone, Serialize)]
pub struct NewReview {
    pub rating: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl NewReview {
    /// A bare star rating with no text.
    #[must_use]
    pub const fn rating(rating: i64) -> Self {
        Self {
            rating,
            title: None,
            body: None,
        }
    }
}

impl ShopLinkClient {
    /// Review a shop. One review per user per shop; returns the backend's
    /// confirmation message.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` for out-of-range ratings or duplicate
    /// reviews.
    #[instrument(skip(self, review), fields(shop_id = %shop_id, rating = review.rating))]
    pub async fn create_shop_review(
        &self,
        shop_id: ShopId,
        review: &NewReview,
    ) -> Result<String, ApiError> {
        let path = format!("/reviews/shop/{shop_id}");
        let envelope = self.post::<serde_json::Value, _>(&path, review).await?;
        Ok(envelope.message)
    }

    /// Reviews of a shop, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(shop_id = %shop_id))]
    pub async fn shop_reviews(&self, shop_id: ShopId) -> Result<Vec<Review>, ApiError> {
        let path = format!("/reviews/shop/{shop_id}");
        self.get::<Vec<Review>>(&path).await?.into_data()
    }

    /// Review a product. One review per user per product; returns the
    /// backend's confirmation message.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` for out-of-range ratings or duplicate
    /// reviews.
    #[instrument(skip(self, review), fields(product_id = %product_id, rating = review.rating))]
    pub async fn create_product_review(
        &self,
        product_id: ProductId,
        review: &NewReview,
    ) -> Result<String, ApiError> {
        let path = format!("/reviews/product/{product_id}");
        let envelope = self.post::<serde_json::Value, _>(&path, review).await?;
        Ok(envelope.message)
    }

    /// Reviews of a product, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn product_reviews(&self, product_id: ProductId) -> Result<Vec<Review>, ApiError> {
        let path = format!("/reviews/product/{product_id}");
        self.get::<Vec<Review>>(&path).await?.into_data()
    }
}
