//! Seller analytics commands.

use chrono::NaiveDate;
use shoplink_client::ShopLinkClient;
use shoplink_client::endpoints::analytics::DateRange;

use super::CliError;

#[allow(clippy::print_stdout)]
pub async fn sales(
    client: &ShopLinkClient,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), CliError> {
    let report = client
        .sales_analytics(DateRange {
            start_date: start,
            end_date: end,
        })
        .await?;

    println!(
        "{} completed orders, {} revenue",
        report.total_sales, report.total_revenue
    );
    if !report.monthly_sales.is_empty() {
        println!("by month:");
        for month in &report.monthly_sales {
            println!(
                "  {}: {} orders, {} revenue",
                month.month, month.order_count, month.revenue
            );
        }
    }
    if !report.top_products.is_empty() {
        println!("top products:");
        for product in &report.top_products {
            println!(
                "  {} - {} sold, {} revenue",
                product.name, product.total_sold, product.total_revenue
            );
        }
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn events(
    client: &ShopLinkClient,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), CliError> {
    let report = client
        .event_analytics(DateRange {
            start_date: start,
            end_date: end,
        })
        .await?;

    println!(
        "{} upcoming, {} completed, {} registrations total",
        report.upcoming_events, report.completed_events, report.total_registrations
    );
    for event in &report.event_performance {
        println!(
            "  {} - {} registered, {} revenue",
            event.title, event.registrations_count, event.revenue
        );
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn activity(client: &ShopLinkClient) -> Result<(), CliError> {
    let report = client.activity_analytics().await?;
    println!("shop views: {}", report.shop_views);
    println!("product views: {}", report.product_views);
    println!("reviews: {}", report.total_reviews);
    println!("engagement rate: {:.2}%", report.engagement_rate);
    println!("interactions (30d): {}", report.recent_interactions);
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn alerts(client: &ShopLinkClient) -> Result<(), CliError> {
    let alerts = client.alerts().await?;
    if alerts.is_empty() {
        println!("No alerts");
        return Ok(());
    }
    for alert in &alerts {
        println!("[{}] {}", alert.kind, alert.message);
    }
    Ok(())
}
