//! Authentication session injected into the client.
//!
//! Centralizes the bearer-token lifecycle: `login`/`signup` store the token
//! here, `logout` clears it, and the client reads it fresh on every call, so
//! a login or logout during the process lifetime is reflected by the next
//! request. There is no refresh flow; an expired token surfaces as
//! [`crate::ApiError::Unauthorized`] on the next call.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::RwLock;

/// Shared, clone-able token store.
#[derive(Clone, Default)]
pub struct AuthSession {
    token: Arc<RwLock<Option<SecretString>>>,
}

impl AuthSession {
    /// Create an unauthenticated session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session holding an existing token (for loading from storage).
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(SecretString::from(token.into())))),
        }
    }

    /// Store a token, replacing any previous one.
    pub async fn set(&self, token: impl Into<String>) {
        *self.token.write().await = Some(SecretString::from(token.into()));
    }

    /// Clear the stored token.
    pub async fn clear(&self) {
        *self.token.write().await = None;
    }

    /// Whether a token is currently stored.
    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// The `Authorization` header value for the current token, if any.
    pub(crate) async fn bearer(&self) -> Option<String> {
        self.token
            .read()
            .await
            .as_ref()
            .map(|token| format!("Bearer {}", token.expose_secret()))
    }

    /// Expose the raw token for persistence (credentials file).
    ///
    /// Callers own keeping the exposed value out of logs.
    pub async fn expose_token(&self) -> Option<String> {
        self.token
            .read()
            .await
            .as_ref()
            .map(|token| token.expose_secret().to_owned())
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_and_clear_are_visible_to_readers() {
        let session = AuthSession::new();
        assert!(!session.is_authenticated().await);
        assert_eq!(session.bearer().await, None);

        session.set("tok-123").await;
        assert!(session.is_authenticated().await);
        assert_eq!(session.bearer().await.as_deref(), Some("Bearer tok-123"));

        session.clear().await;
        assert_eq!(session.bearer().await, None);
    }

    #[tokio::test]
    async fn clones_share_one_token_store() {
        let session = AuthSession::new();
        let clone = session.clone();
        session.set("shared").await;
        assert_eq!(clone.expose_token().await.as_deref(), Some("shared"));
    }

    #[test]
    fn debug_never_prints_the_token() {
        let session = AuthSession::with_token("sekrit");
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("sekrit"));
    }
}
