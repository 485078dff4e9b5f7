//! Notification commands.

use shoplink_client::ShopLinkClient;
use shoplink_core::NotificationId;

use super::CliError;

#[allow(clippy::print_stdout)]
pub async fn list(client: &ShopLinkClient, unread_only: bool) -> Result<(), CliError> {
    let is_read = unread_only.then_some(false);
    let notifications = client.notifications(is_read).await?;
    if notifications.is_empty() {
        println!("No notifications");
        return Ok(());
    }
    for notification in &notifications {
        let marker = if notification.is_read { " " } else { "*" };
        println!(
            "{marker} #{:<5} [{}] {}",
            notification.id, notification.kind, notification.message
        );
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn mark_read(client: &ShopLinkClient, id: NotificationId) -> Result<(), CliError> {
    let message = client.mark_notification_read(id).await?;
    println!("{message}");
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn mark_all_read(client: &ShopLinkClient) -> Result<(), CliError> {
    let message = client.mark_all_notifications_read().await?;
    println!("{message}");
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn count(client: &ShopLinkClient) -> Result<(), CliError> {
    let count = client.unread_count().await?;
    println!("{count} unread");
    Ok(())
}
