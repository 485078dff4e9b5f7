//! User account as returned by the auth and profile endpoints.
//!
//! The backend never returns the password hash; everything else on the users
//! row comes back verbatim.

use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// A ShopLink user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "super::wire::lenient_bool")]
    pub is_verified: bool,
    #[serde(default = "default_true", deserialize_with = "super::wire::lenient_bool")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_row_with_integer_flags() {
        let json = serde_json::json!({
            "id": 3,
            "email": "owner@example.com",
            "full_name": "Shop Owner",
            "phone": "555-0100",
            "is_verified": 0,
            "is_active": 1,
            "created_at": "2025-01-15 09:30:00"
        });
        let user: User = serde_json::from_value(json).expect("deserialize");
        assert_eq!(user.id, UserId::new(3));
        assert!(!user.is_verified);
        assert!(user.is_active);
        assert_eq!(user.bio, None);
    }
}
