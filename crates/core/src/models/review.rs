//! Shop and product reviews.

use serde::{Deserialize, Serialize};

use crate::types::{ReviewId, UserId};

/// A review row, joined with the reviewer's display name.
///
/// Shop and product reviews share one shape; only the parent resource in the
/// URL differs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    /// 1-5, enforced by the backend.
    pub rating: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "super::wire::lenient_bool")]
    pub is_verified_purchase: bool,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
