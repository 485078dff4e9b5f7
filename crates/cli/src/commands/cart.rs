//! Cart commands.

use shoplink_client::ShopLinkClient;
use shoplink_core::{ProductId, grand_total, group_by_shop, subtotal};

use super::CliError;

#[allow(clippy::print_stdout)]
pub async fn show(client: &ShopLinkClient) -> Result<(), CliError> {
    let items = match client.cart().await {
        Ok(items) => items,
        Err(e) if e.is_auth_failure() => {
            println!("{}", CliError::LOGIN_HINT);
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    if items.is_empty() {
        println!("Your cart is empty");
        return Ok(());
    }

    for (shop_id, shop_items) in group_by_shop(&items) {
        let shop_name = shop_items
            .first()
            .and_then(|item| item.shop_name.as_deref())
            .unwrap_or("unknown shop");
        println!("{shop_name} (#{shop_id})");
        for item in &shop_items {
            println!(
                "  {} x{} @ {} = {}",
                item.name,
                item.quantity,
                item.price,
                item.line_total()
            );
        }
        println!("  subtotal: {}", subtotal(shop_items.iter().copied()));
    }
    println!("total: {}", grand_total(&items));
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn add(
    client: &ShopLinkClient,
    product_id: ProductId,
    quantity: i64,
) -> Result<(), CliError> {
    let message = client.add_to_cart(product_id, quantity).await?;
    println!("{message}");
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn update(
    client: &ShopLinkClient,
    product_id: ProductId,
    quantity: i64,
) -> Result<(), CliError> {
    let message = client.update_cart_item(product_id, quantity).await?;
    println!("{message}");
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn remove(client: &ShopLinkClient, product_id: ProductId) -> Result<(), CliError> {
    let message = client.remove_from_cart(product_id).await?;
    println!("{message}");
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn clear(client: &ShopLinkClient) -> Result<(), CliError> {
    let message = client.clear_cart().await?;
    println!("{message}");
    Ok(())
}
