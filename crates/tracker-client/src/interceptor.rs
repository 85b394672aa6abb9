//! Interceptors for auth, request tagging and error handling.

use async_trait::async_trait;
use uuid::Uuid;

use tracker_core::ApiError;
use tracker_core::ports::{HttpRequest, RequestInterceptor, ResponseInterceptor};

use crate::session::AuthSession;

/// Header name for the request id.
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Attaches `Authorization: Bearer <token>` when a token is stored.
///
/// The token is read from the session on every request. A request that
/// already carries an `Authorization` header is left alone.
pub struct BearerAuth {
    session: AuthSession,
}

impl BearerAuth {
    pub fn new(session: AuthSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl RequestInterceptor for BearerAuth {
    async fn on_request(&self, request: &mut HttpRequest) -> Result<(), ApiError> {
        if request.header(AUTHORIZATION_HEADER).is_some() {
            return Ok(());
        }

        let token = self.session.get_auth_token().await?;
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            request.set_header(AUTHORIZATION_HEADER, format!("Bearer {}", token));
        }

        Ok(())
    }
}

/// Tags each request with a fresh `X-Request-ID` unless one is set.
pub struct RequestIdHeader;

#[async_trait]
impl RequestInterceptor for RequestIdHeader {
    async fn on_request(&self, request: &mut HttpRequest) -> Result<(), ApiError> {
        if request.header(REQUEST_ID_HEADER).is_none() {
            request.set_header(REQUEST_ID_HEADER, Uuid::new_v4().to_string());
        }
        Ok(())
    }
}

/// Session invalidation: drops the stored tokens when the API answers 401 to
/// a request that carried the stored access token.
///
/// A 401 from the login endpoint means bad credentials and leaves the session
/// alone, as does a 401 for a request sent with some other bearer token.
///
/// The error still reaches the caller.
pub struct ClearSessionOnUnauthorized {
    session: AuthSession,
}

impl ClearSessionOnUnauthorized {
    pub fn new(session: AuthSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl ResponseInterceptor for ClearSessionOnUnauthorized {
    async fn on_error(&self, request: &HttpRequest, error: &ApiError) {
        if !error.is_unauthorized() || is_credential_endpoint(&request.endpoint) {
            return;
        }

        let sent = request
            .header(AUTHORIZATION_HEADER)
            .and_then(|value| value.strip_prefix("Bearer "));
        let stored = match self.session.get_auth_token().await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored token after a 401");
                return;
            }
        };

        // Only a rejection of the stored token says the session is dead.
        if sent.is_none() || sent != stored.as_deref() {
            tracing::debug!(
                endpoint = %request.endpoint,
                "401 for a request without the stored token, keeping session"
            );
            return;
        }

        tracing::warn!(
            endpoint = %request.endpoint,
            reason = error.error_message().unwrap_or("unauthorized"),
            "Session rejected by API, clearing stored tokens"
        );

        if let Err(e) = self.session.clear().await {
            tracing::error!(error = %e, "Failed to clear stored tokens");
        }
    }
}

/// Endpoints that answer 401 for bad credentials rather than a bad session.
const CREDENTIAL_ENDPOINTS: &[&str] = &["/auth/login"];

fn is_credential_endpoint(endpoint: &str) -> bool {
    let endpoint = endpoint.trim_end_matches('/');
    CREDENTIAL_ENDPOINTS.contains(&endpoint)
}

/// Logs failed calls. 404s are routine and logged at debug.
pub struct ErrorLogger;

#[async_trait]
impl ResponseInterceptor for ErrorLogger {
    async fn on_error(&self, request: &HttpRequest, error: &ApiError) {
        let request_id = request.header(REQUEST_ID_HEADER).unwrap_or("-");

        match error {
            ApiError::Status { status: 404, .. } => {
                tracing::debug!(
                    method = %request.method,
                    endpoint = %request.endpoint,
                    request_id,
                    "Resource not found"
                );
            }
            ApiError::Status { status, .. } => {
                tracing::warn!(
                    method = %request.method,
                    endpoint = %request.endpoint,
                    request_id,
                    status,
                    message = error.error_message().unwrap_or(""),
                    "API returned an error status"
                );
            }
            ApiError::Transport(e) => {
                tracing::error!(
                    method = %request.method,
                    endpoint = %request.endpoint,
                    request_id,
                    error = %e,
                    "Request failed"
                );
            }
            other => {
                tracing::warn!(endpoint = %request.endpoint, error = %other, "Request failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracker_core::ports::Method;

    use crate::client::ApiClient;
    use crate::testing::{RecordingTransport, memory_session};

    #[tokio::test]
    async fn test_bearer_auth_keeps_explicit_header() {
        let session = memory_session();
        session.set_auth_token("access").await.unwrap();
        let interceptor = BearerAuth::new(session);

        let mut request = HttpRequest::new(Method::Post, "/auth/refresh");
        request.set_header("authorization", "Bearer refresh");
        interceptor.on_request(&mut request).await.unwrap();

        assert_eq!(request.header("Authorization"), Some("Bearer refresh"));
    }

    #[tokio::test]
    async fn test_bearer_auth_skips_empty_token() {
        let session = memory_session();
        session.set_auth_token("").await.unwrap();
        let interceptor = BearerAuth::new(session);

        let mut request = HttpRequest::new(Method::Get, "/test");
        interceptor.on_request(&mut request).await.unwrap();

        assert!(request.headers.is_empty());
    }

    #[tokio::test]
    async fn test_request_id_is_unique_and_preserved() {
        let mut first = HttpRequest::new(Method::Get, "/a");
        let mut second = HttpRequest::new(Method::Get, "/b");
        let mut preset = HttpRequest::new(Method::Get, "/c");
        preset.set_header("x-request-id", "caller-id");

        RequestIdHeader.on_request(&mut first).await.unwrap();
        RequestIdHeader.on_request(&mut second).await.unwrap();
        RequestIdHeader.on_request(&mut preset).await.unwrap();

        let a = first.header(REQUEST_ID_HEADER).unwrap();
        let b = second.header(REQUEST_ID_HEADER).unwrap();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a).is_ok());
        assert_eq!(preset.header(REQUEST_ID_HEADER), Some("caller-id"));
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session() {
        let transport = RecordingTransport::new();
        transport.respond(401, json!({"msg": "Token has expired"}));
        let session = memory_session();
        session.set_auth_token("stale").await.unwrap();
        session.set_refresh_token("refresh").await.unwrap();

        let client = ApiClient::builder(transport.clone())
            .request_interceptor(BearerAuth::new(session.clone()))
            .response_interceptor(ClearSessionOnUnauthorized::new(session.clone()))
            .build();

        let err = client.get("/users/1", None).await.unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(
            transport.last_request().header("Authorization"),
            Some("Bearer stale")
        );
        assert!(!session.is_authenticated().await);
        assert_eq!(session.get_refresh_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_failed_login_keeps_session() {
        let transport = RecordingTransport::new();
        transport.respond(401, json!({"error": "Invalid email or password"}));
        let session = memory_session();
        session.set_auth_token("valid").await.unwrap();

        let client = ApiClient::builder(transport.clone())
            .request_interceptor(BearerAuth::new(session.clone()))
            .response_interceptor(ClearSessionOnUnauthorized::new(session.clone()))
            .build();

        let err = client
            .post("/auth/login", &json!({"email": "jane@example.com", "password": "typo"}))
            .await
            .unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(
            session.get_auth_token().await.unwrap(),
            Some("valid".to_string())
        );
    }

    #[tokio::test]
    async fn test_rejected_foreign_token_keeps_session() {
        let transport = RecordingTransport::new();
        transport.respond(401, json!({"msg": "Token has expired"}));
        let session = memory_session();
        session.set_auth_token("access").await.unwrap();
        session.set_refresh_token("refresh").await.unwrap();

        let client = ApiClient::builder(transport.clone())
            .request_interceptor(BearerAuth::new(session.clone()))
            .response_interceptor(ClearSessionOnUnauthorized::new(session.clone()))
            .build();

        let mut request = HttpRequest::new(Method::Post, "/auth/refresh");
        request.set_header(AUTHORIZATION_HEADER, "Bearer refresh");
        client.execute(request).await.unwrap_err();

        assert!(session.is_authenticated().await);
        assert_eq!(
            session.get_refresh_token().await.unwrap(),
            Some("refresh".to_string())
        );
    }

    #[tokio::test]
    async fn test_unauthorized_without_token_is_noop() {
        let transport = RecordingTransport::new();
        transport.respond(401, json!({"msg": "Missing Authorization Header"}));
        let session = memory_session();
        session.set_refresh_token("refresh").await.unwrap();

        let client = ApiClient::builder(transport.clone())
            .request_interceptor(BearerAuth::new(session.clone()))
            .response_interceptor(ClearSessionOnUnauthorized::new(session.clone()))
            .build();

        client.get("/users/", None).await.unwrap_err();

        assert_eq!(
            session.get_refresh_token().await.unwrap(),
            Some("refresh".to_string())
        );
    }

    #[test]
    fn test_credential_endpoint_matching() {
        assert!(is_credential_endpoint("/auth/login"));
        assert!(is_credential_endpoint("/auth/login/"));
        assert!(!is_credential_endpoint("/auth/logout"));
    }

    #[tokio::test]
    async fn test_other_errors_keep_session() {
        let transport = RecordingTransport::new();
        transport.respond(403, json!({"error": "Forbidden"}));
        transport.respond(404, json!({"error": "User not found"}));
        let session = memory_session();
        session.set_auth_token("valid").await.unwrap();

        let client = ApiClient::builder(transport.clone())
            .response_interceptor(ClearSessionOnUnauthorized::new(session.clone()))
            .response_interceptor(ErrorLogger)
            .build();

        assert_eq!(client.get("/admin", None).await.unwrap_err().status(), Some(403));
        assert_eq!(client.get("/users/9", None).await.unwrap_err().status(), Some(404));
        assert!(session.is_authenticated().await);
    }
}
