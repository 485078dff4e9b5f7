//! The ShopLink API client.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, StatusCode, header, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::envelope::{Envelope, ResponseStatus};
use crate::error::ApiError;
use crate::session::AuthSession;

/// Single point of contact with the ShopLink backend.
///
/// Cheap to clone; all clones share one connection pool and one
/// [`AuthSession`]. The session is read fresh on every call, so a login or
/// logout elsewhere in the process is reflected by the next request.
///
/// # Failure semantics
///
/// Every failure is converted to [`ApiError`]; nothing is fatal, nothing is
/// retried, and there is no backoff or circuit breaking. Each call is a
/// single best-effort attempt.
#[derive(Clone)]
pub struct ShopLinkClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: reqwest::Client,
    base_url: String,
    session: AuthSession,
}

impl ShopLinkClient {
    /// Create a client with the given configuration and session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying HTTP client fails to
    /// build.
    pub fn new(config: &ClientConfig, session: AuthSession) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url: config.base_url.trim_end_matches('/').to_owned(),
                session,
            }),
        })
    }

    /// The session this client was constructed with.
    #[must_use]
    pub fn session(&self) -> &AuthSession {
        &self.inner.session
    }

    /// Base URL every endpoint path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    // =========================================================================
    // Request construction
    // =========================================================================

    /// Start a request for `path`, attaching the bearer token when one is
    /// stored. Token presence is checked per call, not cached.
    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.inner.base_url);
        let mut builder = self.inner.http.request(method, &url);
        if let Some(bearer) = self.inner.session.bearer().await {
            builder = builder.header(header::AUTHORIZATION, bearer);
        }
        builder
    }

    /// Start a multipart upload for `path` with a single `file` part.
    ///
    /// Bypasses the JSON body path entirely; no JSON content-type is set.
    pub(crate) async fn multipart_request(
        &self,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> RequestBuilder {
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_owned());
        let form = multipart::Form::new().part("file", part);
        self.request(Method::POST, path).await.multipart(form)
    }

    // =========================================================================
    // Verb helpers
    // =========================================================================

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Envelope<T>, ApiError> {
        let builder = self.request(Method::GET, path).await;
        self.execute(builder).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, ApiError> {
        let builder = self.request(Method::POST, path).await.json(body);
        self.execute(builder).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Envelope<T>, ApiError> {
        let builder = self.request(Method::POST, path).await;
        self.execute(builder).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, ApiError> {
        let builder = self.request(Method::PUT, path).await.json(body);
        self.execute(builder).await
    }

    pub(crate) async fn put_empty<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Envelope<T>, ApiError> {
        let builder = self.request(Method::PUT, path).await;
        self.execute(builder).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Envelope<T>, ApiError> {
        let builder = self.request(Method::DELETE, path).await;
        self.execute(builder).await
    }

    pub(crate) async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Envelope<T>, ApiError> {
        let builder = self.multipart_request(path, file_name, bytes).await;
        self.execute(builder).await
    }

    // =========================================================================
    // Normalization
    // =========================================================================

    /// Send a request and normalize the response.
    ///
    /// This is the only path from wire bytes to a typed result: non-2xx
    /// statuses map through [`Self::map_error`], 2xx bodies must parse as a
    /// success [`Envelope`].
    async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Envelope<T>, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::map_error(status, &body));
        }

        let envelope: Envelope<T> = serde_json::from_str(&body)
            .map_err(|e| ApiError::Parse(format!("unexpected response body: {e}")))?;

        if envelope.status == ResponseStatus::Error {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: envelope.message,
            });
        }

        Ok(envelope)
    }

    /// Map a non-2xx response to a typed error.
    ///
    /// The message is taken from the body envelope when present, falling back
    /// to the raw body text.
    fn map_error(status: StatusCode, body: &str) -> ApiError {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return ApiError::Unauthorized;
        }

        let message = serde_json::from_str::<Envelope<serde_json::Value>>(body)
            .ok()
            .map(|envelope| envelope.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| {
                let raw = body.trim();
                if raw.is_empty() {
                    "Unknown error".to_owned()
                } else {
                    raw.to_owned()
                }
            });

        if status == StatusCode::NOT_FOUND {
            return ApiError::NotFound(message);
        }

        ApiError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

impl std::fmt::Debug for ShopLinkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopLinkClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_session(session: AuthSession) -> ShopLinkClient {
        let config = ClientConfig::with_base_url("http://backend.test/api").expect("config");
        ShopLinkClient::new(&config, session).expect("client")
    }

    #[tokio::test]
    async fn no_token_means_no_authorization_header() {
        let client = client_with_session(AuthSession::new());
        let request = client
            .request(Method::GET, "/cart")
            .await
            .build()
            .expect("build");
        assert!(!request.headers().contains_key(header::AUTHORIZATION));
        assert_eq!(request.url().as_str(), "http://backend.test/api/cart");
    }

    #[tokio::test]
    async fn stored_token_is_sent_verbatim_as_bearer() {
        let client = client_with_session(AuthSession::with_token("tok-abc123"));
        let request = client
            .request(Method::GET, "/auth/me")
            .await
            .build()
            .expect("build");
        let authorization = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        assert_eq!(authorization, Some("Bearer tok-abc123"));
    }

    #[tokio::test]
    async fn login_and_logout_are_reflected_on_the_next_request() {
        let client = client_with_session(AuthSession::new());

        client.session().set("fresh-token").await;
        let request = client
            .request(Method::GET, "/cart")
            .await
            .build()
            .expect("build");
        assert!(request.headers().contains_key(header::AUTHORIZATION));

        client.session().clear().await;
        let request = client
            .request(Method::GET, "/cart")
            .await
            .build()
            .expect("build");
        assert!(!request.headers().contains_key(header::AUTHORIZATION));
    }

    #[tokio::test]
    async fn json_bodies_carry_the_json_content_type() {
        let client = client_with_session(AuthSession::new());
        let request = client
            .request(Method::POST, "/cart")
            .await
            .json(&serde_json::json!({"product_id": 5, "quantity": 2}))
            .build()
            .expect("build");
        let content_type = request
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        assert_eq!(content_type, Some("application/json"));
    }

    #[tokio::test]
    async fn uploads_use_multipart_and_skip_the_json_path() {
        let client = client_with_session(AuthSession::with_token("tok"));
        let request = client
            .multipart_request("/shops/9/upload-logo", "logo.png", vec![0x89, 0x50])
            .await
            .build()
            .expect("build");
        let content_type = request
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("multipart/form-data"));
        assert!(request.headers().contains_key(header::AUTHORIZATION));
    }

    #[test]
    fn unauthorized_statuses_map_to_the_auth_variant() {
        for code in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            let error = ShopLinkClient::map_error(code, r#"{"status":"error","message":"nope"}"#);
            assert!(matches!(error, ApiError::Unauthorized), "{code}");
        }
    }

    #[test]
    fn not_found_takes_the_message_from_the_envelope() {
        let error = ShopLinkClient::map_error(
            StatusCode::NOT_FOUND,
            r#"{"status":"error","message":"Shop not found","data":null}"#,
        );
        match error {
            ApiError::NotFound(message) => assert_eq!(message, "Shop not found"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unparseable_bodies_fall_back_to_raw_text() {
        let error = ShopLinkClient::map_error(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        match error {
            ApiError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_error_bodies_get_a_placeholder_message() {
        let error = ShopLinkClient::map_error(StatusCode::BAD_GATEWAY, "");
        match error {
            ApiError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Unknown error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
