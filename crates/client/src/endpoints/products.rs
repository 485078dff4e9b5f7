//! Product endpoints: CRUD and image upload.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use shoplink_core::{Product, ProductId, ShopId};

use crate::client::ShopLinkClient;
use crate::error::ApiError;

/// Body of `POST /products`. `shop_id`, `name`, and `price` are required;
/// the backend derives `discount_percentage` and `is_in_stock` itself.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub shop_id: ShopId,
    pub name: String,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_order_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_order_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

impl NewProduct {
    /// Minimal product with everything else left to backend defaults.
    #[must_use]
    pub const fn new(shop_id: ShopId, name: String, price: Decimal) -> Self {
        Self {
            shop_id,
            name,
            price,
            description: None,
            original_price: None,
            stock_quantity: None,
            min_order_quantity: None,
            max_order_quantity: None,
            sku: None,
            barcode: None,
            weight: None,
            dimensions: None,
            category: None,
            tags: None,
            is_available: None,
            is_featured: None,
        }
    }
}

/// Body of `PUT /products/:id`. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

#[derive(Deserialize)]
struct ImageUploaded {
    image_url: String,
}

impl ShopLinkClient {
    /// Create a product in a shop owned by the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` when the shop belongs to another
    /// user.
    #[instrument(skip(self, product), fields(shop_id = %product.shop_id, name = %product.name))]
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        self.post::<Product, _>("/products", product)
            .await?
            .into_data()
    }

    /// Fetch a single available product.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for unknown or unavailable products.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        let path = format!("/products/{id}");
        self.get::<Product>(&path).await?.into_data()
    }

    /// Update an owned product, returning the refreshed record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` when the product's shop belongs to
    /// another user.
    #[instrument(skip(self, update), fields(product_id = %id))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: &ProductUpdate,
    ) -> Result<Product, ApiError> {
        let path = format!("/products/{id}");
        self.put::<Product, _>(&path, update).await?.into_data()
    }

    /// Delete an owned product. Returns the backend's confirmation message.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` when the product's shop belongs to
    /// another user.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: ProductId) -> Result<String, ApiError> {
        let path = format!("/products/{id}");
        let envelope = self.delete::<serde_json::Value>(&path).await?;
        Ok(envelope.message)
    }

    /// Upload a product image, returning the served URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` for unsupported file types.
    #[instrument(skip(self, bytes), fields(product_id = %id, file_name = %file_name))]
    pub async fn upload_product_image(
        &self,
        id: ProductId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        let path = format!("/products/{id}/upload-image");
        let payload: ImageUploaded = self.upload(&path, file_name, bytes).await?.into_data()?;
        Ok(payload.image_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_product_serializes_required_fields_only() {
        let product = NewProduct::new(
            ShopId::new(9),
            "Sourdough Loaf".to_owned(),
            "6.50".parse().expect("decimal"),
        );
        let json = serde_json::to_value(&product).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"shop_id": 9, "name": "Sourdough Loaf", "price": 6.5})
        );
    }
}
