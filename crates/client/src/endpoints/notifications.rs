//! Notification endpoints.

use tracing::instrument;

use shoplink_core::{Notification, NotificationId, UnreadCount};

use crate::client::ShopLinkClient;
use crate::error::ApiError;
use crate::query::QueryBuilder;

impl ShopLinkClient {
    /// Latest notifications for the logged-in user (50 most recent),
    /// optionally filtered by read state.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid token.
    #[instrument(skip(self))]
    pub async fn notifications(&self, is_read: Option<bool>) -> Result<Vec<Notification>, ApiError> {
        let query = QueryBuilder::new().push_opt_flag("is_read", is_read).finish();
        let path = format!("/notifications{query}");
        self.get::<Vec<Notification>>(&path).await?.into_data()
    }

    /// Mark one notification as read. Returns the backend's confirmation
    /// message.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for another user's notification.
    #[instrument(skip(self), fields(notification_id = %id))]
    pub async fn mark_notification_read(&self, id: NotificationId) -> Result<String, ApiError> {
        let path = format!("/notifications/{id}/read");
        let envelope = self.put_empty::<serde_json::Value>(&path).await?;
        Ok(envelope.message)
    }

    /// Mark every unread notification as read. Returns the backend's
    /// confirmation message.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid token.
    #[instrument(skip(self))]
    pub async fn mark_all_notifications_read(&self) -> Result<String, ApiError> {
        let envelope = self
            .put_empty::<serde_json::Value>("/notifications/read-all")
            .await?;
        Ok(envelope.message)
    }

    /// Count of unread notifications.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid token.
    #[instrument(skip(self))]
    pub async fn unread_count(&self) -> Result<i64, ApiError> {
        let payload: UnreadCount = self
            .get("/notifications/unread-count")
            .await?
            .into_data()?;
        Ok(payload.count)
    }
}
