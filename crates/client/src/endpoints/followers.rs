//! Shop follower endpoints.

use serde::Deserialize;
use tracing::instrument;

use shoplink_core::{ShopFollower, ShopId};

use crate::client::ShopLinkClient;
use crate::error::ApiError;

#[derive(Deserialize)]
struct FollowStatus {
    is_following: bool,
}

impl ShopLinkClient {
    /// Follow a shop. Returns the backend's confirmation message.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` when already following.
    #[instrument(skip(self), fields(shop_id = %shop_id))]
    pub async fn follow_shop(&self, shop_id: ShopId) -> Result<String, ApiError> {
        let path = format!("/followers/shop/{shop_id}");
        let envelope = self.post_empty::<serde_json::Value>(&path).await?;
        Ok(envelope.message)
    }

    /// Unfollow a shop. Returns the backend's confirmation message.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` when not following.
    #[instrument(skip(self), fields(shop_id = %shop_id))]
    pub async fn unfollow_shop(&self, shop_id: ShopId) -> Result<String, ApiError> {
        let path = format!("/followers/shop/{shop_id}");
        let envelope = self.delete::<serde_json::Value>(&path).await?;
        Ok(envelope.message)
    }

    /// Whether the logged-in user follows the shop.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid token.
    #[instrument(skip(self), fields(shop_id = %shop_id))]
    pub async fn follow_status(&self, shop_id: ShopId) -> Result<bool, ApiError> {
        let path = format!("/followers/shop/{shop_id}/check");
        let payload: FollowStatus = self.get(&path).await?.into_data()?;
        Ok(payload.is_following)
    }

    /// Followers of a shop, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(shop_id = %shop_id))]
    pub async fn shop_followers(&self, shop_id: ShopId) -> Result<Vec<ShopFollower>, ApiError> {
        let path = format!("/followers/shop/{shop_id}/followers");
        self.get::<Vec<ShopFollower>>(&path).await?.into_data()
    }
}
