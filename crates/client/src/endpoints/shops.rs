//! Shop endpoints: browsing, CRUD, and image uploads.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use shoplink_core::{Product, Shop, ShopId};

use crate::client::ShopLinkClient;
use crate::error::ApiError;
use crate::query::QueryBuilder;

/// Optional filters for `GET /shops`.
#[derive(Debug, Clone, Default)]
pub struct ShopFilter {
    pub category: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ShopFilter {
    fn to_query(&self) -> String {
        QueryBuilder::new()
            .push_opt("category", self.category.as_deref())
            .push_opt("limit", self.limit)
            .push_opt("offset", self.offset)
            .finish()
    }
}

/// Body of `POST /shops`. Only `name` is required.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewShop {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_online_selling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_offline_selling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepts_online_payment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepts_cash: Option<bool>,
}

/// Body of `PUT /shops/:id`. Every field is optional; unset fields are left
/// untouched by the backend.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShopUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_online_selling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_offline_selling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepts_online_payment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepts_cash: Option<bool>,
}

#[derive(Deserialize)]
struct LogoUploaded {
    logo_url: String,
}

#[derive(Deserialize)]
struct CoverUploaded {
    cover_photo_url: String,
}

impl ShopLinkClient {
    /// List active shops, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, filter))]
    pub async fn list_shops(&self, filter: &ShopFilter) -> Result<Vec<Shop>, ApiError> {
        let path = format!("/shops{}", filter.to_query());
        self.get::<Vec<Shop>>(&path).await?.into_data()
    }

    /// Fetch a single shop.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for unknown or inactive shops.
    #[instrument(skip(self), fields(shop_id = %id))]
    pub async fn get_shop(&self, id: ShopId) -> Result<Shop, ApiError> {
        let path = format!("/shops/{id}");
        self.get::<Shop>(&path).await?.into_data()
    }

    /// Create a shop owned by the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid token.
    #[instrument(skip(self, shop), fields(name = %shop.name))]
    pub async fn create_shop(&self, shop: &NewShop) -> Result<Shop, ApiError> {
        self.post::<Shop, _>("/shops", shop).await?.into_data()
    }

    /// Update an owned shop, returning the refreshed record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` when the shop belongs to another
    /// user.
    #[instrument(skip(self, update), fields(shop_id = %id))]
    pub async fn update_shop(&self, id: ShopId, update: &ShopUpdate) -> Result<Shop, ApiError> {
        let path = format!("/shops/{id}");
        self.put::<Shop, _>(&path, update).await?.into_data()
    }

    /// Upload a shop logo, returning the served URL.
    ///
    /// Sends `multipart/form-data`; see `multipart_request`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` for unsupported file types.
    #[instrument(skip(self, bytes), fields(shop_id = %id, file_name = %file_name))]
    pub async fn upload_shop_logo(
        &self,
        id: ShopId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        let path = format!("/shops/{id}/upload-logo");
        let payload: LogoUploaded = self.upload(&path, file_name, bytes).await?.into_data()?;
        Ok(payload.logo_url)
    }

    /// Upload a shop cover photo, returning the served URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` for unsupported file types.
    #[instrument(skip(self, bytes), fields(shop_id = %id, file_name = %file_name))]
    pub async fn upload_shop_cover(
        &self,
        id: ShopId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        let path = format!("/shops/{id}/upload-cover");
        let payload: CoverUploaded = self.upload(&path, file_name, bytes).await?.into_data()?;
        Ok(payload.cover_photo_url)
    }

    /// Available products of a shop, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(shop_id = %id))]
    pub async fn shop_products(&self, id: ShopId) -> Result<Vec<Product>, ApiError> {
        let path = format!("/shops/{id}/products");
        self.get::<Vec<Product>>(&path).await?.into_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_builds_a_bare_path() {
        assert_eq!(ShopFilter::default().to_query(), "");
    }

    #[test]
    fn set_filters_appear_url_encoded() {
        let filter = ShopFilter {
            category: Some("arts & crafts".to_owned()),
            limit: Some(20),
            offset: None,
        };
        assert_eq!(filter.to_query(), "?category=arts+%26+crafts&limit=20");
    }

    #[test]
    fn new_shop_serializes_only_set_fields() {
        let shop = NewShop {
            name: "Corner Bakery".to_owned(),
            category: Some("food".to_owned()),
            ..NewShop::default()
        };
        let json = serde_json::to_value(&shop).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"name": "Corner Bakery", "category": "food"})
        );
    }
}
