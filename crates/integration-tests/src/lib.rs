//! End-to-end tests for the ShopLink client.
//!
//! These tests exercise the real request path against a live backend and are
//! `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the backend, then:
//! SHOPLINK_API_URL=http://localhost:5000/api \
//!     cargo test -p shoplink-integration-tests -- --ignored
//! ```
//!
//! Each test signs up a throwaway account (unique email per run) so tests do
//! not interfere with each other or with existing data.

#![cfg_attr(not(test), forbid(unsafe_code))]

use secrecy::SecretString;
use shoplink_client::{ApiError, AuthSession, ClientConfig, ShopLinkClient};
use shoplink_core::User;

/// Password used for throwaway test accounts.
pub const TEST_PASSWORD: &str = "integration-pass-1";

/// A fresh client plus the session it was built with.
pub struct TestContext {
    pub client: ShopLinkClient,
    pub session: AuthSession,
}

impl TestContext {
    /// Build a client from `SHOPLINK_API_URL` (default: local dev server).
    ///
    /// # Panics
    ///
    /// Panics on invalid configuration; tests cannot proceed without a
    /// client.
    #[must_use]
    pub fn new() -> Self {
        let config = ClientConfig::from_env().expect("invalid SHOPLINK_API_URL");
        let session = AuthSession::new();
        let client = ShopLinkClient::new(&config, session.clone()).expect("client");
        Self { client, session }
    }

    /// Sign up a throwaway account and leave its token in the session.
    ///
    /// # Errors
    ///
    /// Returns the API error when signup fails.
    pub async fn signup_throwaway(&self) -> Result<User, ApiError> {
        let email = unique_email();
        self.client
            .signup(
                &email,
                &SecretString::from(TEST_PASSWORD),
                Some("Integration Test"),
                None,
            )
            .await
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// An email address no previous run has used.
#[must_use]
pub fn unique_email() -> String {
    format!("it-{}@shoplink-tests.example", uuid::Uuid::new_v4().simple())
}
