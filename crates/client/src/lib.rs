//! Typed API client for the ShopLink marketplace backend.
//!
//! Every page of the ShopLink applications talks to the backend through this
//! one client: it attaches the bearer token, serializes JSON bodies, builds
//! query strings, sends multipart uploads, and normalizes the backend's
//! response envelope into `Result` values.
//!
//! # Architecture
//!
//! - [`ShopLinkClient`] - cheap-to-clone handle over one HTTP connection pool
//! - [`AuthSession`] - injected token store, read fresh on every call
//! - [`Envelope`] - the backend's `status`/`message`/`data` wire wrapper
//! - One module per backend resource under `endpoints/`
//!
//! Each call is a single best-effort attempt: no retries, no backoff, no
//! caching, no deduplication of concurrent identical requests.
//!
//! # Example
//!
//! ```rust,no_run
//! use secrecy::SecretString;
//! use shoplink_client::{AuthSession, ClientConfig, ShopLinkClient};
//! use shoplink_client::endpoints::shops::ShopFilter;
//!
//! # async fn run() -> Result<(), shoplink_client::ApiError> {
//! let session = AuthSession::new();
//! let client = ShopLinkClient::new(&ClientConfig::default(), session)?;
//!
//! client
//!     .login("user@example.com", &SecretString::from("hunter2!"))
//!     .await?;
//! let shops = client.list_shops(&ShopFilter::default()).await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
mod config;
pub mod endpoints;
mod envelope;
mod error;
mod query;
mod session;

pub use client::ShopLinkClient;
pub use config::{ClientConfig, ConfigError, DEFAULT_BASE_URL};
pub use envelope::{Envelope, ResponseStatus};
pub use error::ApiError;
pub use query::QueryBuilder;
pub use session::AuthSession;
