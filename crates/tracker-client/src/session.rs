//! Auth session - the persisted tokens and what can be read from them.

use std::sync::Arc;

use chrono::Utc;

use tracker_core::ports::{LocalStore, StorageError, TokenClaims, TokenDecoder};

/// Storage key of the access token.
pub const TOKEN_KEY: &str = "boston_startup_tracker_auth_token";

/// Storage key of the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "boston_startup_tracker_refresh_token";

/// Access to the tokens kept in local storage.
///
/// Nothing is cached: every call reads the store, so a token written by a
/// login elsewhere is picked up by the next request.
#[derive(Clone)]
pub struct AuthSession {
    store: Arc<dyn LocalStore>,
    decoder: Arc<dyn TokenDecoder>,
}

impl AuthSession {
    pub fn new(store: Arc<dyn LocalStore>, decoder: Arc<dyn TokenDecoder>) -> Self {
        Self { store, decoder }
    }

    pub async fn set_auth_token(&self, token: &str) -> Result<(), StorageError> {
        self.store.set_item(TOKEN_KEY, token).await
    }

    pub async fn get_auth_token(&self) -> Result<Option<String>, StorageError> {
        self.store.get_item(TOKEN_KEY).await
    }

    pub async fn remove_auth_token(&self) -> Result<(), StorageError> {
        self.store.remove_item(TOKEN_KEY).await
    }

    pub async fn set_refresh_token(&self, token: &str) -> Result<(), StorageError> {
        self.store.set_item(REFRESH_TOKEN_KEY, token).await
    }

    pub async fn get_refresh_token(&self) -> Result<Option<String>, StorageError> {
        self.store.get_item(REFRESH_TOKEN_KEY).await
    }

    /// Remove both tokens.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store.remove_item(TOKEN_KEY).await?;
        self.store.remove_item(REFRESH_TOKEN_KEY).await
    }

    /// True iff a non-empty access token is stored.
    ///
    /// A storage failure counts as not authenticated.
    pub async fn is_authenticated(&self) -> bool {
        match self.get_auth_token().await {
            Ok(token) => token.is_some_and(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read auth token");
                false
            }
        }
    }

    /// Decoded payload of the stored access token.
    ///
    /// `None` when no token is stored or it cannot be decoded.
    pub async fn decode_token(&self) -> Option<TokenClaims> {
        let token = match self.get_auth_token().await {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read auth token");
                return None;
            }
        };

        match self.decoder.decode(&token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                tracing::warn!(error = %e, "Error decoding token");
                None
            }
        }
    }

    /// User id carried by the stored access token.
    pub async fn user_id(&self) -> Option<String> {
        self.decode_token().await?.user_id()
    }

    /// Whether the stored token's `exp` has passed. `false` without a
    /// decodable token.
    pub async fn is_token_expired(&self) -> bool {
        self.decode_token()
            .await
            .map(|claims| claims.is_expired(Utc::now()))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::memory_session;
    use chrono::TimeDelta;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::{Value, json};
    use tracker_infra::{InMemoryStore, JwtTokenDecoder};

    fn mint(claims: Value) -> String {
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_set_and_get_token() {
        let session = memory_session();

        session.set_auth_token("test-token").await.unwrap();

        assert_eq!(
            session.get_auth_token().await.unwrap(),
            Some("test-token".to_string())
        );
    }

    #[tokio::test]
    async fn test_token_uses_fixed_key() {
        let store = Arc::new(InMemoryStore::new());
        let session = AuthSession::new(store.clone(), Arc::new(JwtTokenDecoder::new()));

        session.set_auth_token("test-token").await.unwrap();

        assert_eq!(
            store.get_item("boston_startup_tracker_auth_token").await.unwrap(),
            Some("test-token".to_string())
        );
        assert_eq!(store.get_item("authToken").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_token() {
        let session = memory_session();
        session.set_auth_token("test-token").await.unwrap();

        session.remove_auth_token().await.unwrap();

        assert_eq!(session.get_auth_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_is_authenticated() {
        let session = memory_session();
        assert!(!session.is_authenticated().await);

        session.set_auth_token("").await.unwrap();
        assert!(!session.is_authenticated().await);

        session.set_auth_token("valid-token").await.unwrap();
        assert!(session.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_decode_token() {
        let session = memory_session();
        session
            .set_auth_token(&mint(json!({"sub": "123", "name": "John Doe"})))
            .await
            .unwrap();

        let claims = session.decode_token().await.unwrap();

        assert_eq!(claims.get("name"), Some(&json!("John Doe")));
        assert_eq!(session.user_id().await, Some("123".to_string()));
    }

    #[tokio::test]
    async fn test_decode_malformed_token_is_none() {
        let session = memory_session();
        session.set_auth_token("not-a-jwt").await.unwrap();

        assert!(session.decode_token().await.is_none());
        assert!(session.user_id().await.is_none());
        // Presence is all authentication checks.
        assert!(session.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_decode_without_token_is_none() {
        let session = memory_session();
        assert!(session.decode_token().await.is_none());
        assert!(!session.is_token_expired().await);
    }

    #[tokio::test]
    async fn test_expired_token() {
        let session = memory_session();
        let exp = (Utc::now() - TimeDelta::minutes(5)).timestamp();
        session
            .set_auth_token(&mint(json!({"sub": "1", "exp": exp})))
            .await
            .unwrap();

        assert!(session.is_token_expired().await);
        assert!(session.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_clear_removes_both_tokens() {
        let session = memory_session();
        session.set_auth_token("access").await.unwrap();
        session.set_refresh_token("refresh").await.unwrap();

        session.clear().await.unwrap();

        assert_eq!(session.get_auth_token().await.unwrap(), None);
        assert_eq!(session.get_refresh_token().await.unwrap(), None);
    }
}
