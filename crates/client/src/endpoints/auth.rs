//! Authentication endpoints.
//!
//! `login` and `signup` store the returned access token in the injected
//! [`crate::AuthSession`]; `logout` clears it. There is no refresh flow - an
//! expired token surfaces as [`ApiError::Unauthorized`] on the next call.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use shoplink_core::User;

use crate::client::ShopLinkClient;
use crate::error::ApiError;

#[derive(Serialize)]
struct SignupRequest<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    full_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<&'a str>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Payload of `/auth/signup` and `/auth/login`.
#[derive(Deserialize)]
struct AuthPayload {
    user: User,
    access_token: String,
}

impl ShopLinkClient {
    /// Create an account and log in as it.
    ///
    /// On success the returned token is stored in the session so subsequent
    /// calls are authenticated.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` when the email is taken or fails validation.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn signup(
        &self,
        email: &str,
        password: &SecretString,
        full_name: Option<&str>,
        phone: Option<&str>,
    ) -> Result<User, ApiError> {
        let payload: AuthPayload = self
            .post(
                "/auth/signup",
                &SignupRequest {
                    email,
                    password: password.expose_secret(),
                    full_name,
                    phone,
                },
            )
            .await?
            .into_data()?;

        self.session().set(payload.access_token).await;
        Ok(payload.user)
    }

    /// Log in with email and password.
    ///
    /// On success the returned token is stored in the session so subsequent
    /// calls are authenticated.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` for bad credentials or a deactivated
    /// account.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<User, ApiError> {
        let payload: AuthPayload = self
            .post(
                "/auth/login",
                &LoginRequest {
                    email,
                    password: password.expose_secret(),
                },
            )
            .await?
            .into_data()?;

        self.session().set(payload.access_token).await;
        Ok(payload.user)
    }

    /// Fetch the account behind the current token.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid token.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get::<User>("/auth/me").await?.into_data()
    }

    /// Forget the stored token. Purely client-side; the backend keeps no
    /// session state.
    #[instrument(skip(self))]
    pub async fn logout(&self) {
        self.session().clear().await;
    }
}
