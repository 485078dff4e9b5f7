//! ShopLink CLI - browse the marketplace, manage a shop, cart, and checkout.
//!
//! # Usage
//!
//! ```bash
//! # Log in (token is persisted for later invocations)
//! shoplink login -e user@example.com -p 'hunter2!'
//!
//! # Browse
//! shoplink shops list --category food
//! shoplink shops show 9
//!
//! # Cart and checkout
//! shoplink cart add 5 --quantity 2
//! shoplink checkout --name "Ada Lovelace" --address "12 Analytical Row" \
//!     --city London --state LDN --country UK --zip "N1 7AA" --phone 555-0100
//! ```
//!
//! # Environment Variables
//!
//! - `SHOPLINK_API_URL` - Backend base URL (default: `http://localhost:5000/api`)
//! - `SHOPLINK_CREDENTIALS` - Token file override
//! - `RUST_LOG` - Log filter for diagnostics

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use shoplink_client::{AuthSession, ClientConfig, ShopLinkClient};
use shoplink_core::{EventId, EventStatus, NotificationId, OrderId, ProductId, ShopId};

mod commands;
mod credentials;

use commands::CliError;
use credentials::CredentialsFile;

#[derive(Parser)]
#[command(name = "shoplink")]
#[command(author, version, about = "ShopLink marketplace CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the access token
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Create an account and log in
    Signup {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password (min 6 characters)
        #[arg(short, long)]
        password: String,

        /// Display name
        #[arg(long)]
        full_name: Option<String>,

        /// Contact phone
        #[arg(long)]
        phone: Option<String>,
    },
    /// Forget the stored token
    Logout,
    /// Show the account behind the stored token
    Whoami,
    /// Browse and manage shops
    Shops {
        #[command(subcommand)]
        action: ShopsAction,
    },
    /// Inspect and manage products
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Browse and register for events
    Events {
        #[command(subcommand)]
        action: EventsAction,
    },
    /// Inspect and mutate the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place one order per shop in the cart, then clear it
    Checkout {
        /// Recipient full name
        #[arg(long)]
        name: String,

        /// Street address
        #[arg(long)]
        address: String,

        #[arg(long)]
        city: String,

        #[arg(long)]
        state: String,

        #[arg(long)]
        country: String,

        /// ZIP / postal code
        #[arg(long)]
        zip: String,

        /// Contact phone
        #[arg(long)]
        phone: String,

        /// Payment method: cash_on_delivery, card, or paypal
        #[arg(long, default_value = "cash_on_delivery")]
        payment: String,
    },
    /// List and inspect orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Notifications
    Notifications {
        #[command(subcommand)]
        action: NotificationsAction,
    },
    /// Seller analytics
    Analytics {
        #[command(subcommand)]
        action: AnalyticsAction,
    },
}

#[derive(Subcommand)]
enum ShopsAction {
    /// List shops
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        limit: Option<u32>,

        #[arg(short, long)]
        offset: Option<u32>,
    },
    /// Show one shop
    Show { id: i64 },
    /// Shops owned by the logged-in user
    Mine,
    /// Products of a shop
    Products { id: i64 },
    /// Follow a shop
    Follow { id: i64 },
    /// Unfollow a shop
    Unfollow { id: i64 },
    /// Reviews of a shop
    Reviews { id: i64 },
    /// Review a shop
    Review {
        id: i64,

        /// Star rating, 1-5
        #[arg(short, long)]
        rating: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        body: Option<String>,
    },
    /// Upload a shop logo
    UploadLogo {
        id: i64,

        /// Image file (png, jpg, jpeg, gif, webp)
        file: std::path::PathBuf,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// Show one product
    Show { id: i64 },
    /// Create a product in an owned shop
    Create {
        /// Shop to create the product in
        #[arg(long)]
        shop_id: i64,

        #[arg(long)]
        name: String,

        /// Price, e.g. 6.50
        #[arg(long)]
        price: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        stock: Option<i64>,
    },
    /// Delete an owned product
    Delete { id: i64 },
    /// Upload a product image
    UploadImage {
        id: i64,

        /// Image file (png, jpg, jpeg, gif, webp)
        file: std::path::PathBuf,
    },
}

#[derive(Subcommand)]
enum EventsAction {
    /// List events
    List {
        /// Filter by status: draft, published, completed, cancelled
        #[arg(short, long)]
        status: Option<String>,

        /// Only published (or only unpublished) events
        #[arg(long)]
        published: Option<bool>,

        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Show one event
    Show { id: i64 },
    /// Register for an event
    Register { id: i64 },
    /// Events organized by the logged-in user
    Mine,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart with per-shop subtotals
    Show,
    /// Add a product
    Add {
        product_id: i64,

        #[arg(short, long, default_value_t = 1)]
        quantity: i64,
    },
    /// Set a row's quantity
    Update { product_id: i64, quantity: i64 },
    /// Remove a product
    Remove { product_id: i64 },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum OrdersAction {
    /// Own purchases, or a shop's incoming orders with --shop-id
    List {
        #[arg(long)]
        shop_id: Option<i64>,
    },
    /// Show one order with line items
    Show { id: i64 },
}

#[derive(Subcommand)]
enum NotificationsAction {
    /// Latest notifications
    List {
        /// Only unread ones
        #[arg(short, long)]
        unread: bool,
    },
    /// Mark one notification as read
    Read { id: i64 },
    /// Mark everything as read
    ReadAll,
    /// Count unread notifications
    Count,
}

#[derive(Subcommand)]
enum AnalyticsAction {
    /// Sales totals and trends
    Sales {
        /// Window start, YYYY-MM-DD
        #[arg(long)]
        start: Option<chrono::NaiveDate>,

        /// Window end, YYYY-MM-DD
        #[arg(long)]
        end: Option<chrono::NaiveDate>,
    },
    /// Event performance
    Events {
        #[arg(long)]
        start: Option<chrono::NaiveDate>,

        #[arg(long)]
        end: Option<chrono::NaiveDate>,
    },
    /// Views, reviews, and engagement
    Activity,
    /// Low-stock and pending-order alerts
    Alerts,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ClientConfig::from_env()?;
    let credentials = CredentialsFile::from_env()?;

    let session = match credentials.load()? {
        Some(token) => AuthSession::with_token(token),
        None => AuthSession::new(),
    };
    let client = ShopLinkClient::new(&config, session)?;

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&client, &credentials, &email, password).await?;
        }
        Commands::Signup {
            email,
            password,
            full_name,
            phone,
        } => {
            commands::auth::signup(
                &client,
                &credentials,
                &email,
                password,
                full_name.as_deref(),
                phone.as_deref(),
            )
            .await?;
        }
        Commands::Logout => commands::auth::logout(&client, &credentials).await?,
        Commands::Whoami => commands::auth::whoami(&client).await?,
        Commands::Shops { action } => match action {
            ShopsAction::List {
                category,
                limit,
                offset,
            } => commands::shops::list(&client, category, limit, offset).await?,
            ShopsAction::Show { id } => commands::shops::show(&client, ShopId::new(id)).await?,
            ShopsAction::Mine => commands::shops::mine(&client).await?,
            ShopsAction::Products { id } => {
                commands::shops::products(&client, ShopId::new(id)).await?;
            }
            ShopsAction::Follow { id } => {
                commands::shops::follow(&client, ShopId::new(id)).await?;
            }
            ShopsAction::Unfollow { id } => {
                commands::shops::unfollow(&client, ShopId::new(id)).await?;
            }
            ShopsAction::Reviews { id } => {
                commands::shops::reviews(&client, ShopId::new(id)).await?;
            }
            ShopsAction::Review {
                id,
                rating,
                title,
                body,
            } => commands::shops::review(&client, ShopId::new(id), rating, title, body).await?,
            ShopsAction::UploadLogo { id, file } => {
                commands::shops::upload_logo(&client, ShopId::new(id), &file).await?;
            }
        },
        Commands::Products { action } => match action {
            ProductsAction::Show { id } => {
                commands::products::show(&client, ProductId::new(id)).await?;
            }
            ProductsAction::Create {
                shop_id,
                name,
                price,
                description,
                stock,
            } => {
                commands::products::create(
                    &client,
                    ShopId::new(shop_id),
                    name,
                    &price,
                    description,
                    stock,
                )
                .await?;
            }
            ProductsAction::Delete { id } => {
                commands::products::delete(&client, ProductId::new(id)).await?;
            }
            ProductsAction::UploadImage { id, file } => {
                commands::products::upload_image(&client, ProductId::new(id), &file).await?;
            }
        },
        Commands::Events { action } => match action {
            EventsAction::List {
                status,
                published,
                limit,
            } => {
                let status = status
                    .map(|raw| raw.parse::<EventStatus>())
                    .transpose()
                    .map_err(CliError::InvalidArgument)?;
                commands::events::list(&client, status, published, limit).await?;
            }
            EventsAction::Show { id } => commands::events::show(&client, EventId::new(id)).await?,
            EventsAction::Register { id } => {
                commands::events::register(&client, EventId::new(id)).await?;
            }
            EventsAction::Mine => commands::events::mine(&client).await?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&client).await?,
            CartAction::Add {
                product_id,
                quantity,
            } => commands::cart::add(&client, ProductId::new(product_id), quantity).await?,
            CartAction::Update {
                product_id,
                quantity,
            } => commands::cart::update(&client, ProductId::new(product_id), quantity).await?,
            CartAction::Remove { product_id } => {
                commands::cart::remove(&client, ProductId::new(product_id)).await?;
            }
            CartAction::Clear => commands::cart::clear(&client).await?,
        },
        Commands::Checkout {
            name,
            address,
            city,
            state,
            country,
            zip,
            phone,
            payment,
        } => {
            commands::orders::checkout(
                &client, &name, &address, &city, &state, &country, &zip, &phone, &payment,
            )
            .await?;
        }
        Commands::Orders { action } => match action {
            OrdersAction::List { shop_id } => {
                commands::orders::list(&client, shop_id.map(ShopId::new)).await?;
            }
            OrdersAction::Show { id } => {
                commands::orders::show(&client, OrderId::new(id)).await?;
            }
        },
        Commands::Notifications { action } => match action {
            NotificationsAction::List { unread } => {
                commands::notifications::list(&client, unread).await?;
            }
            NotificationsAction::Read { id } => {
                commands::notifications::mark_read(&client, NotificationId::new(id)).await?;
            }
            NotificationsAction::ReadAll => commands::notifications::mark_all_read(&client).await?,
            NotificationsAction::Count => commands::notifications::count(&client).await?,
        },
        Commands::Analytics { action } => match action {
            AnalyticsAction::Sales { start, end } => {
                commands::analytics::sales(&client, start, end).await?;
            }
            AnalyticsAction::Events { start, end } => {
                commands::analytics::events(&client, start, end).await?;
            }
            AnalyticsAction::Activity => commands::analytics::activity(&client).await?,
            AnalyticsAction::Alerts => commands::analytics::alerts(&client).await?,
        },
    }

    Ok(())
}
