//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod interceptor;
mod storage;
mod transport;

pub use auth::{AuthError, TokenClaims, TokenDecoder};
pub use interceptor::{RequestInterceptor, ResponseInterceptor};
pub use storage::{LocalStore, StorageError};
pub use transport::{
    HttpRequest, HttpResponse, HttpTransport, Method, QueryParams, QueryValue, TransportError,
};
