//! User notifications.

use serde::{Deserialize, Serialize};

use crate::types::{NotificationId, UserId};

/// A notification row from `GET /notifications`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    /// Backend-defined kind discriminator (`order`, `follower`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    #[serde(default, deserialize_with = "super::wire::lenient_bool")]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload of `GET /notifications/unread-count`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnreadCount {
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_from_reserved_word_field() {
        let json = serde_json::json!({
            "id": 1,
            "user_id": 4,
            "type": "order",
            "message": "Your order has shipped",
            "is_read": 0
        });
        let notification: Notification = serde_json::from_value(json).expect("deserialize");
        assert_eq!(notification.kind, "order");
        assert!(!notification.is_read);
    }
}
