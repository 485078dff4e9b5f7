//! Order listing and the checkout command.

use shoplink_client::ShopLinkClient;
use shoplink_client::endpoints::orders::ShippingAddress;
use shoplink_core::{OrderId, PaymentMethod, ShopId};

use super::CliError;

#[allow(clippy::print_stdout)]
pub async fn list(client: &ShopLinkClient, shop_id: Option<ShopId>) -> Result<(), CliError> {
    let orders = client.orders(shop_id).await?;
    if orders.is_empty() {
        println!("No orders");
        return Ok(());
    }
    for order in &orders {
        println!(
            "#{:<5} shop {:<5} {:<10} {} {}",
            order.id,
            order.shop_id,
            order.status,
            order.total_amount,
            order.created_at.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn show(client: &ShopLinkClient, id: OrderId) -> Result<(), CliError> {
    let order = client.get_order(id).await?;
    println!(
        "Order #{} - {} - total {} {}",
        order.id, order.status, order.total_amount, order.currency
    );
    if let Some(address) = &order.shipping_address {
        println!("ship to:\n{address}");
    }
    for item in &order.items {
        println!(
            "  {} x{} @ {} = {}",
            item.name.as_deref().unwrap_or("item"),
            item.quantity,
            item.unit_price,
            item.subtotal
        );
    }
    Ok(())
}

/// Place one order per shop in the cart; the cart is cleared only when every
/// shop succeeded.
#[allow(clippy::print_stdout, clippy::too_many_arguments)]
pub async fn checkout(
    client: &ShopLinkClient,
    name: &str,
    address: &str,
    city: &str,
    state: &str,
    country: &str,
    zip: &str,
    phone: &str,
    payment: &str,
) -> Result<(), CliError> {
    let payment_method: PaymentMethod = payment
        .parse()
        .map_err(CliError::InvalidArgument)?;

    let shipping_address = ShippingAddress {
        full_name: name.to_owned(),
        address: address.to_owned(),
        city: city.to_owned(),
        state: state.to_owned(),
        country: country.to_owned(),
        zip_code: zip.to_owned(),
        phone: phone.to_owned(),
    };

    let outcome = client.place_order(payment_method, &shipping_address).await?;

    if outcome.orders.is_empty() && outcome.failed.is_empty() {
        println!("Your cart is empty; nothing to order");
        return Ok(());
    }

    for order in &outcome.orders {
        println!(
            "Created order #{} for shop {} - total {}",
            order.id, order.shop_id, order.total_amount
        );
    }
    for (shop_id, error) in &outcome.failed {
        println!("Order for shop {shop_id} failed: {error}");
    }

    if outcome.cart_cleared {
        println!("Cart cleared");
    } else if let Some(error) = &outcome.clear_error {
        println!("Orders placed, but clearing the cart failed: {error}");
    } else if !outcome.failed.is_empty() {
        println!("Cart left untouched; fix the failures and retry");
    }
    Ok(())
}
