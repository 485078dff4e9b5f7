//! Profile endpoints for the logged-in user.

use serde::Serialize;
use tracing::instrument;

use shoplink_core::{Event, Shop, User};

use crate::client::ShopLinkClient;
use crate::error::ApiError;

/// Fields accepted by `PUT /users/profile`. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl ShopLinkClient {
    /// Fetch the logged-in user's profile.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid token.
    #[instrument(skip(self))]
    pub async fn profile(&self) -> Result<User, ApiError> {
        self.get::<User>("/users/profile").await?.into_data()
    }

    /// Update profile fields, returning the refreshed profile.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` when no updatable field is set.
    #[instrument(skip(self, update))]
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.put::<User, _>("/users/profile", update)
            .await?
            .into_data()
    }

    /// Shops owned by the logged-in user, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid token.
    #[instrument(skip(self))]
    pub async fn my_shops(&self) -> Result<Vec<Shop>, ApiError> {
        self.get::<Vec<Shop>>("/users/shops").await?.into_data()
    }

    /// Events organized by the logged-in user, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid token.
    #[instrument(skip(self))]
    pub async fn my_events(&self) -> Result<Vec<Event>, ApiError> {
        self.get::<Vec<Event>>("/users/events").await?.into_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_profile_fields_are_not_serialized() {
        let update = ProfileUpdate {
            bio: Some("baker".to_owned()),
            ..ProfileUpdate::default()
        };
        let json = serde_json::to_value(&update).expect("serialize");
        assert_eq!(json, serde_json::json!({"bio": "baker"}));
    }
}
