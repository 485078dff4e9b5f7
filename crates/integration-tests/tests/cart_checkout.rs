//! Cart and multi-shop checkout against a live backend.
//!
//! Run with: `cargo test -p shoplink-integration-tests -- --ignored`

use rust_decimal::Decimal;
use shoplink_client::ShopLinkClient;
use shoplink_client::endpoints::orders::ShippingAddress;
use shoplink_client::endpoints::products::NewProduct;
use shoplink_client::endpoints::shops::NewShop;
use shoplink_core::{PaymentMethod, Product, ProductId};
use shoplink_integration_tests::TestContext;

fn test_address() -> ShippingAddress {
    ShippingAddress {
        full_name: "Integration Test".to_owned(),
        address: "1 Test Lane".to_owned(),
        city: "Testville".to_owned(),
        state: "TS".to_owned(),
        country: "Testland".to_owned(),
        zip_code: "00001".to_owned(),
        phone: "555-0100".to_owned(),
    }
}

/// Create a shop with one in-stock product and return the product.
async fn seed_shop_with_product(client: &ShopLinkClient, shop_name: &str) -> Product {
    let shop = client
        .create_shop(&NewShop {
            name: shop_name.to_owned(),
            category: Some("test".to_owned()),
            ..NewShop::default()
        })
        .await
        .expect("create shop");

    let mut product = NewProduct::new(
        shop.id,
        format!("{shop_name} product"),
        Decimal::new(250, 2), // 2.50
    );
    product.stock_quantity = Some(100);
    client.create_product(&product).await.expect("create product")
}

#[tokio::test]
#[ignore = "requires a running ShopLink backend"]
async fn added_item_shows_up_in_the_cart() {
    let ctx = TestContext::new();
    ctx.signup_throwaway().await.expect("signup");

    let product = seed_shop_with_product(&ctx.client, "Cart Test Shop").await;

    ctx.client
        .add_to_cart(product.id, 2)
        .await
        .expect("add to cart");

    let cart = ctx.client.cart().await.expect("get cart");
    let row = cart
        .iter()
        .find(|item| item.product_id == product.id)
        .expect("added product present in cart");
    assert_eq!(row.quantity, 2);
    assert_eq!(row.price, product.price);
}

#[tokio::test]
#[ignore = "requires a running ShopLink backend"]
async fn checkout_issues_one_order_per_shop_then_clears_the_cart() {
    let ctx = TestContext::new();
    ctx.signup_throwaway().await.expect("signup");

    let first = seed_shop_with_product(&ctx.client, "Checkout Shop A").await;
    let second = seed_shop_with_product(&ctx.client, "Checkout Shop B").await;
    assert_ne!(first.shop_id, second.shop_id);

    ctx.client.add_to_cart(first.id, 1).await.expect("add first");
    ctx.client.add_to_cart(second.id, 3).await.expect("add second");

    let outcome = ctx
        .client
        .place_order(PaymentMethod::CashOnDelivery, &test_address())
        .await
        .expect("place order");

    // Exactly one order per distinct shop, and the cart is cleared only
    // after both succeeded.
    assert_eq!(outcome.orders.len(), 2);
    assert!(outcome.failed.is_empty());
    assert!(outcome.cart_cleared);

    let shop_ids: Vec<_> = outcome.orders.iter().map(|order| order.shop_id).collect();
    assert!(shop_ids.contains(&first.shop_id));
    assert!(shop_ids.contains(&second.shop_id));

    let cart = ctx.client.cart().await.expect("get cart");
    assert!(cart.is_empty());

    let orders = ctx.client.orders(None).await.expect("list orders");
    assert!(orders.len() >= 2);
}

#[tokio::test]
#[ignore = "requires a running ShopLink backend"]
async fn rapid_quantity_updates_end_with_the_last_write() {
    let ctx = TestContext::new();
    ctx.signup_throwaway().await.expect("signup");

    let product = seed_shop_with_product(&ctx.client, "Quantity Race Shop").await;
    ctx.client.add_to_cart(product.id, 1).await.expect("add");

    // Updates are not serialized client-side; the backend applies them in
    // arrival order and the last one wins.
    for quantity in [2, 5, 3] {
        ctx.client
            .update_cart_item(product.id, quantity)
            .await
            .expect("update");
    }

    let cart = ctx.client.cart().await.expect("get cart");
    let row = cart
        .iter()
        .find(|item| item.product_id == product.id)
        .expect("row present");
    assert_eq!(row.quantity, 3);
}

#[tokio::test]
#[ignore = "requires a running ShopLink backend"]
async fn removing_an_absent_product_is_a_typed_error() {
    let ctx = TestContext::new();
    ctx.signup_throwaway().await.expect("signup");

    let result = ctx.client.remove_from_cart(ProductId::new(999_999_999)).await;
    assert!(result.is_err());
}
