//! Interceptor ports - cross-cutting hooks around every API call.

use async_trait::async_trait;

use super::transport::{HttpRequest, HttpResponse};
use crate::error::ApiError;

/// Modifies an outgoing request before it reaches the transport.
///
/// Returning an error aborts the call; the error reaches the caller.
#[async_trait]
pub trait RequestInterceptor: Send + Sync {
    async fn on_request(&self, request: &mut HttpRequest) -> Result<(), ApiError>;
}

/// Observes a completed call before the result reaches the caller.
///
/// Response interceptors cannot alter or swallow the outcome.
#[async_trait]
pub trait ResponseInterceptor: Send + Sync {
    /// Called for successful (2xx) responses.
    async fn on_response(&self, _request: &HttpRequest, _response: &HttpResponse) {}

    /// Called for transport failures and error statuses.
    async fn on_error(&self, request: &HttpRequest, error: &ApiError);
}
