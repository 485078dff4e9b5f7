//! The backend's standard response envelope.
//!
//! Every endpoint wraps its payload as
//! `{ "status": "success" | "error", "message": ..., "data": ..., "timestamp": ... }`.
//! This module is the single place where that wrapper is peeled off; the
//! payload inside `data` is returned to callers shape-unmodified.

use serde::Deserialize;

use crate::error::ApiError;

/// Discriminator carried in every backend response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// The backend's response wrapper, typed per endpoint payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub status: ResponseStatus,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl<T> Envelope<T> {
    /// Extract the payload of a success envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingData`] when the backend reported success
    /// without a payload where one is expected.
    pub fn into_data(self) -> Result<T, ApiError> {
        self.data.ok_or(ApiError::MissingData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_returns_payload_unmodified() {
        let body = serde_json::json!({
            "status": "success",
            "message": "Shops retrieved",
            "data": [{"nested": {"deep": [1, 2, 3]}, "name": "unchanged"}],
            "timestamp": "2025-03-10T11:00:00"
        });
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_value(body.clone()).expect("deserialize");
        assert_eq!(envelope.status, ResponseStatus::Success);
        // The payload round-trips with no field renamed or dropped.
        assert_eq!(envelope.into_data().expect("data"), body["data"]);
    }

    #[test]
    fn error_envelope_without_data_deserializes() {
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(
            r#"{"status": "error", "message": "Shop not found", "data": null}"#,
        )
        .expect("deserialize");
        assert_eq!(envelope.status, ResponseStatus::Error);
        assert_eq!(envelope.message, "Shop not found");
        assert!(matches!(
            envelope.into_data(),
            Err(ApiError::MissingData)
        ));
    }

    #[test]
    fn missing_message_defaults_to_empty() {
        let envelope: Envelope<i64> =
            serde_json::from_str(r#"{"status": "success", "data": 7}"#).expect("deserialize");
        assert_eq!(envelope.message, "");
        assert_eq!(envelope.into_data().expect("data"), 7);
    }
}
