//! Shop browsing and management commands.

use std::path::Path;

use shoplink_client::ShopLinkClient;
use shoplink_client::endpoints::reviews::NewReview;
use shoplink_client::endpoints::shops::ShopFilter;
use shoplink_core::{Shop, ShopId};

use super::CliError;

#[allow(clippy::print_stdout)]
fn print_shop_line(shop: &Shop) {
    println!(
        "#{:<5} {:<30} {:<15} {:.1}★ {} followers",
        shop.id,
        shop.name,
        shop.category.as_deref().unwrap_or("-"),
        shop.rating,
        shop.followers_count,
    );
}

#[allow(clippy::print_stdout)]
pub async fn list(
    client: &ShopLinkClient,
    category: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> Result<(), CliError> {
    let filter = ShopFilter {
        category,
        limit,
        offset,
    };
    let shops = client.list_shops(&filter).await?;
    if shops.is_empty() {
        println!("No shops found");
        return Ok(());
    }
    for shop in &shops {
        print_shop_line(shop);
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn show(client: &ShopLinkClient, id: ShopId) -> Result<(), CliError> {
    let shop = client.get_shop(id).await?;
    println!("{} (#{})", shop.name, shop.id);
    if let Some(description) = &shop.description {
        println!("{description}");
    }
    if let Some(category) = &shop.category {
        println!("category: {category}");
    }
    if let Some(location) = &shop.location {
        println!("location: {location}");
    }
    if let Some(hours) = &shop.business_hours {
        println!("hours: {hours}");
    }
    println!(
        "rating: {:.1} ({} reviews), {} followers, {} products",
        shop.rating, shop.reviews_count, shop.followers_count, shop.product_count
    );
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn mine(client: &ShopLinkClient) -> Result<(), CliError> {
    let shops = client.my_shops().await?;
    if shops.is_empty() {
        println!("You own no shops yet");
        return Ok(());
    }
    for shop in &shops {
        print_shop_line(shop);
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn products(client: &ShopLinkClient, id: ShopId) -> Result<(), CliError> {
    let products = client.shop_products(id).await?;
    if products.is_empty() {
        println!("No products in this shop");
        return Ok(());
    }
    for product in &products {
        println!(
            "#{:<5} {:<30} {:>8} ({} in stock)",
            product.id, product.name, product.price, product.stock_quantity
        );
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn follow(client: &ShopLinkClient, id: ShopId) -> Result<(), CliError> {
    let message = client.follow_shop(id).await?;
    println!("{message}");
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn unfollow(client: &ShopLinkClient, id: ShopId) -> Result<(), CliError> {
    let message = client.unfollow_shop(id).await?;
    println!("{message}");
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn reviews(client: &ShopLinkClient, id: ShopId) -> Result<(), CliError> {
    let reviews = client.shop_reviews(id).await?;
    if reviews.is_empty() {
        println!("No reviews yet");
        return Ok(());
    }
    for review in &reviews {
        println!(
            "{}★ {} - {}",
            review.rating,
            review.full_name.as_deref().unwrap_or("anonymous"),
            review.title.as_deref().unwrap_or(""),
        );
        if let Some(body) = &review.body {
            println!("  {body}");
        }
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn review(
    client: &ShopLinkClient,
    id: ShopId,
    rating: i64,
    title: Option<String>,
    body: Option<String>,
) -> Result<(), CliError> {
    let review = NewReview {
        rating,
        title,
        body,
    };
    let message = client.create_shop_review(id, &review).await?;
    println!("{message}");
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn upload_logo(
    client: &ShopLinkClient,
    id: ShopId,
    file: &Path,
) -> Result<(), CliError> {
    let bytes = tokio::fs::read(file).await.map_err(|source| CliError::FileRead {
        path: file.to_path_buf(),
        source,
    })?;
    let file_name = file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("logo.png");
    let logo_url = client.upload_shop_logo(id, file_name, bytes).await?;
    println!("Logo uploaded: {logo_url}");
    Ok(())
}
