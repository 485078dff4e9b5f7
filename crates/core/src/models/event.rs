//! Event listing and registrations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{EventId, EventStatus, RegistrationId, ShopId, UserId};

/// A community or shop event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub organizer_id: UserId,
    #[serde(default)]
    pub shop_id: Option<ShopId>,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub venue_name: Option<String>,
    #[serde(default)]
    pub venue_address: Option<String>,
    #[serde(default)]
    pub venue_city: Option<String>,
    #[serde(default)]
    pub venue_state: Option<String>,
    #[serde(default)]
    pub venue_country: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub meeting_url: Option<String>,
    #[serde(default)]
    pub max_attendees: Option<i64>,
    #[serde(default)]
    pub ticket_price: Decimal,
    #[serde(default = "default_true", deserialize_with = "super::wire::lenient_bool")]
    pub is_free: bool,
    #[serde(default, deserialize_with = "super::wire::lenient_bool")]
    pub is_published: bool,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub views_count: i64,
    #[serde(default)]
    pub registrations_count: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

const fn default_true() -> bool {
    true
}

impl Event {
    /// Whether the event has reached its attendee cap.
    ///
    /// Capacity is unlimited when `max_attendees` is absent, matching the
    /// backend's registration check.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.max_attendees
            .is_some_and(|max| self.registrations_count >= max)
    }
}

/// A registration row from `GET /events/:id/registrations`.
///
/// Joined with the registrant's contact details for the organizer view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRegistration {
    pub id: RegistrationId,
    pub event_id: EventId,
    pub user_id: UserId,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_check_matches_backend_semantics() {
        let json = serde_json::json!({
            "id": 2,
            "organizer_id": 3,
            "title": "Weekend Market",
            "start_date": "2025-06-01 10:00:00",
            "max_attendees": 50,
            "registrations_count": 50,
            "ticket_price": 0,
            "is_free": 1,
            "is_published": 1,
            "status": "published"
        });
        let event: Event = serde_json::from_value(json).expect("deserialize");
        assert!(event.is_full());
        assert_eq!(event.status, EventStatus::Published);
    }

    #[test]
    fn unlimited_capacity_when_max_attendees_absent() {
        let json = serde_json::json!({
            "id": 4,
            "organizer_id": 3,
            "title": "Open House",
            "start_date": "2025-07-01 10:00:00",
            "registrations_count": 900
        });
        let event: Event = serde_json::from_value(json).expect("deserialize");
        assert!(!event.is_full());
    }
}
