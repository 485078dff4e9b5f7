//! Seller analytics endpoints.
//!
//! All aggregates are computed server-side over the shops the logged-in user
//! owns; the client only types and forwards them.

use chrono::NaiveDate;
use tracing::instrument;

use shoplink_core::{ActivityReport, Alert, EventReport, SalesReport};

use crate::client::ShopLinkClient;
use crate::error::ApiError;
use crate::query::QueryBuilder;

/// Optional date window for the sales and event reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    fn to_query(self) -> String {
        QueryBuilder::new()
            .push_opt("start_date", self.start_date.map(|d| d.format("%Y-%m-%d")))
            .push_opt("end_date", self.end_date.map(|d| d.format("%Y-%m-%d")))
            .finish()
    }
}

impl ShopLinkClient {
    /// Sales totals, monthly buckets, top products, and revenue trend.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid token.
    #[instrument(skip(self))]
    pub async fn sales_analytics(&self, range: DateRange) -> Result<SalesReport, ApiError> {
        let path = format!("/analytics/sales{}", range.to_query());
        self.get::<SalesReport>(&path).await?.into_data()
    }

    /// Event counts, per-event performance, and monthly event revenue.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid token.
    #[instrument(skip(self))]
    pub async fn event_analytics(&self, range: DateRange) -> Result<EventReport, ApiError> {
        let path = format!("/analytics/events{}", range.to_query());
        self.get::<EventReport>(&path).await?.into_data()
    }

    /// Views, reviews, and engagement across the user's shops.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid token.
    #[instrument(skip(self))]
    pub async fn activity_analytics(&self) -> Result<ActivityReport, ApiError> {
        self.get::<ActivityReport>("/analytics/activity")
            .await?
            .into_data()
    }

    /// Actionable alerts (low stock, pending orders) for the user's shops.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid token.
    #[instrument(skip(self))]
    pub async fn alerts(&self) -> Result<Vec<Alert>, ApiError> {
        self.get::<Vec<Alert>>("/analytics/alerts").await?.into_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_format_as_iso_days() {
        let range = DateRange {
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 31),
        };
        assert_eq!(range.to_query(), "?start_date=2025-01-01&end_date=2025-03-31");
    }

    #[test]
    fn open_ended_ranges_omit_the_missing_bound() {
        let range = DateRange {
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: None,
        };
        assert_eq!(range.to_query(), "?start_date=2025-01-01");
    }
}
