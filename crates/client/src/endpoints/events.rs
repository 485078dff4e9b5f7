//! Event endpoints: browsing, CRUD, and registration.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use shoplink_core::{Event, EventId, EventRegistration, EventStatus, ShopId};

use crate::client::ShopLinkClient;
use crate::error::ApiError;
use crate::query::QueryBuilder;

/// Optional filters for `GET /events`.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub status: Option<EventStatus>,
    pub is_published: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl EventFilter {
    fn to_query(&self) -> String {
        QueryBuilder::new()
            .push_opt("status", self.status.map(EventStatus::as_str))
            // The list endpoint expects true/false here, unlike the 1/0
            // flags elsewhere.
            .push_opt("is_published", self.is_published)
            .push_opt("limit", self.limit)
            .push_opt("offset", self.offset)
            .finish()
    }
}

/// Body of `POST /events`. `title` and `start_date` are required.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewEvent {
    pub title: String,
    /// Backend-format timestamp, e.g. `2025-06-01 10:00:00`.
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<ShopId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
}

/// Body of `PUT /events/:id`. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
}

impl ShopLinkClient {
    /// List events, soonest first.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, filter))]
    pub async fn list_events(&self, filter: &EventFilter) -> Result<Vec<Event>, ApiError> {
        let path = format!("/events{}", filter.to_query());
        self.get::<Vec<Event>>(&path).await?.into_data()
    }

    /// Fetch a single event.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for unknown events.
    #[instrument(skip(self), fields(event_id = %id))]
    pub async fn get_event(&self, id: EventId) -> Result<Event, ApiError> {
        let path = format!("/events/{id}");
        self.get::<Event>(&path).await?.into_data()
    }

    /// Create an event organized by the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` when `shop_id` names a shop owned by
    /// another user.
    #[instrument(skip(self, event), fields(title = %event.title))]
    pub async fn create_event(&self, event: &NewEvent) -> Result<Event, ApiError> {
        self.post::<Event, _>("/events", event).await?.into_data()
    }

    /// Update an organized event, returning the refreshed record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` when the event belongs to another
    /// organizer.
    #[instrument(skip(self, update), fields(event_id = %id))]
    pub async fn update_event(&self, id: EventId, update: &EventUpdate) -> Result<Event, ApiError> {
        let path = format!("/events/{id}");
        self.put::<Event, _>(&path, update).await?.into_data()
    }

    /// Register the logged-in user for an event.
    ///
    /// Returns the backend's confirmation message.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` when the event is full or the user is already
    /// registered.
    #[instrument(skip(self), fields(event_id = %id))]
    pub async fn register_for_event(&self, id: EventId) -> Result<String, ApiError> {
        let path = format!("/events/{id}/register");
        let envelope = self.post_empty::<serde_json::Value>(&path).await?;
        Ok(envelope.message)
    }

    /// Registrations for an event the logged-in user organizes.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` for events organized by someone else.
    #[instrument(skip(self), fields(event_id = %id))]
    pub async fn event_registrations(
        &self,
        id: EventId,
    ) -> Result<Vec<EventRegistration>, ApiError> {
        let path = format!("/events/{id}/registrations");
        self.get::<Vec<EventRegistration>>(&path).await?.into_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_flag_serializes_as_true_false() {
        let filter = EventFilter {
            is_published: Some(true),
            ..EventFilter::default()
        };
        assert_eq!(filter.to_query(), "?is_published=true");
    }

    #[test]
    fn status_filter_uses_wire_value() {
        let filter = EventFilter {
            status: Some(EventStatus::Published),
            limit: Some(5),
            ..EventFilter::default()
        };
        assert_eq!(filter.to_query(), "?status=published&limit=5");
    }
}
