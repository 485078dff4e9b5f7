//! Product commands.

use std::path::Path;

use rust_decimal::Decimal;
use shoplink_client::ShopLinkClient;
use shoplink_client::endpoints::products::NewProduct;
use shoplink_core::{ProductId, ShopId};

use super::CliError;

#[allow(clippy::print_stdout)]
pub async fn show(client: &ShopLinkClient, id: ProductId) -> Result<(), CliError> {
    let product = client.get_product(id).await?;
    println!("{} (#{})", product.name, product.id);
    if let Some(description) = &product.description {
        println!("{description}");
    }
    match product.original_price {
        Some(original) if product.has_discount() => {
            println!("price: {} (was {original})", product.price);
        }
        _ => println!("price: {}", product.price),
    }
    println!(
        "stock: {}, rating: {:.1} ({} reviews)",
        product.stock_quantity, product.rating, product.reviews_count
    );
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn create(
    client: &ShopLinkClient,
    shop_id: ShopId,
    name: String,
    price: &str,
    description: Option<String>,
    stock: Option<i64>,
) -> Result<(), CliError> {
    let price: Decimal = price
        .parse()
        .map_err(|_| CliError::InvalidArgument(format!("invalid price: {price}")))?;

    let mut product = NewProduct::new(shop_id, name, price);
    product.description = description;
    product.stock_quantity = stock;

    let created = client.create_product(&product).await?;
    println!("Created product #{}: {}", created.id, created.name);
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn delete(client: &ShopLinkClient, id: ProductId) -> Result<(), CliError> {
    let message = client.delete_product(id).await?;
    println!("{message}");
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn upload_image(
    client: &ShopLinkClient,
    id: ProductId,
    file: &Path,
) -> Result<(), CliError> {
    let bytes = tokio::fs::read(file).await.map_err(|source| CliError::FileRead {
        path: file.to_path_buf(),
        source,
    })?;
    let file_name = file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image.png");
    let image_url = client.upload_product_image(id, file_name, bytes).await?;
    println!("Image uploaded: {image_url}");
    Ok(())
}
