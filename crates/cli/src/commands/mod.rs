//! CLI command implementations, one module per resource family.

pub mod analytics;
pub mod auth;
pub mod cart;
pub mod events;
pub mod notifications;
pub mod orders;
pub mod products;
pub mod shops;

use thiserror::Error;

use crate::credentials::CredentialsError;

/// Errors a CLI command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] shoplink_client::ConfigError),

    #[error(transparent)]
    Api(#[from] shoplink_client::ApiError),

    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Hint shown when a command fails for lack of a valid login.
    pub(crate) const LOGIN_HINT: &'static str = "Not logged in or token expired; run: shoplink login -e <email> -p <password>";
}
