//! # Tracker Client
//!
//! Token-authenticated client for the Boston Startup Tracker API.
//!
//! [`ApiClient`] is a thin pass-through over an [`HttpTransport`]: request
//! interceptors run in registration order before every call, response
//! interceptors observe every outcome, and all failures reach the caller.
//! [`AuthSession`] owns the persisted tokens and [`TrackerApi`] layers typed
//! resources on top.
//!
//! [`HttpTransport`]: tracker_core::ports::HttpTransport

pub mod api;
pub mod client;
pub mod interceptor;
pub mod session;

#[cfg(test)]
mod testing;

pub use api::{ListQuery, Resource, TrackerApi};
pub use client::{ApiClient, ApiClientBuilder};
pub use interceptor::{BearerAuth, ClearSessionOnUnauthorized, ErrorLogger, RequestIdHeader};
pub use session::{AuthSession, REFRESH_TOKEN_KEY, TOKEN_KEY};
