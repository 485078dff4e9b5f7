//! Seller analytics payloads.
//!
//! All aggregates are computed server-side; the client renders them as-is.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ProductId, ShopId};

/// Payload of `GET /analytics/sales`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesReport {
    #[serde(default)]
    pub total_sales: i64,
    #[serde(default)]
    pub total_revenue: Decimal,
    #[serde(default)]
    pub monthly_sales: Vec<MonthlySales>,
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
    #[serde(default)]
    pub revenue_trend: Vec<RevenuePoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySales {
    pub month: String,
    pub order_count: i64,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopProduct {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub total_sold: i64,
    pub total_revenue: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub date: String,
    pub revenue: Decimal,
}

/// Payload of `GET /analytics/events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventReport {
    #[serde(default)]
    pub upcoming_events: i64,
    #[serde(default)]
    pub completed_events: i64,
    #[serde(default)]
    pub total_registrations: i64,
    #[serde(default)]
    pub event_performance: Vec<EventPerformance>,
    #[serde(default)]
    pub event_revenue: Vec<EventRevenue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPerformance {
    pub id: i64,
    pub title: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub registrations_count: i64,
    #[serde(default)]
    pub views_count: i64,
    #[serde(default)]
    pub ticket_price: Decimal,
    #[serde(default, deserialize_with = "super::wire::lenient_bool")]
    pub is_free: bool,
    #[serde(default)]
    pub revenue: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRevenue {
    pub month: String,
    pub event_count: i64,
    #[serde(default)]
    pub revenue: Option<Decimal>,
}

/// Payload of `GET /analytics/activity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityReport {
    #[serde(default)]
    pub shop_views: i64,
    #[serde(default)]
    pub product_views: i64,
    #[serde(default)]
    pub total_reviews: i64,
    #[serde(default)]
    pub engagement_rate: f64,
    #[serde(default)]
    pub recent_interactions: i64,
}

/// A seller alert from `GET /analytics/alerts`.
///
/// The reference fields vary by `kind`: `low_stock` carries the product and
/// shop, `upcoming_event` the event and its start, `high_sales` the day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    #[serde(default)]
    pub shop_id: Option<ShopId>,
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub event_id: Option<i64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_deserializes_with_zero_defaults() {
        let report: SalesReport = serde_json::from_value(serde_json::json!({
            "total_sales": 0,
            "total_revenue": 0,
            "monthly_sales": [],
            "top_products": [],
            "revenue_trend": []
        }))
        .expect("deserialize");
        assert_eq!(report.total_sales, 0);
        assert!(report.top_products.is_empty());
    }
}
