//! Application state - the wired-up API for one invocation.

use std::sync::Arc;

use anyhow::Context;
use tracker_client::{
    ApiClient, AuthSession, BearerAuth, ClearSessionOnUnauthorized, ErrorLogger, RequestIdHeader,
    TrackerApi,
};
use tracker_core::ports::{HttpTransport, LocalStore, TokenDecoder};
use tracker_infra::{FileStore, JwtTokenDecoder, ReqwestTransport};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub api: TrackerApi,
}

impl AppState {
    /// Build the state from configuration: file-backed token storage and a
    /// reqwest transport.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let store: Arc<dyn LocalStore> = Arc::new(FileStore::new(&config.storage_path));
        let transport: Arc<dyn HttpTransport> = Arc::new(
            ReqwestTransport::new(config.http.clone()).context("Failed to build HTTP client")?,
        );

        tracing::debug!(
            base_url = %config.http.base_url,
            storage = %config.storage_path.display(),
            "Application state initialized"
        );

        Ok(Self::with_parts(transport, store))
    }

    /// Wire the API over any transport and store.
    pub fn with_parts(transport: Arc<dyn HttpTransport>, store: Arc<dyn LocalStore>) -> Self {
        let decoder: Arc<dyn TokenDecoder> = Arc::new(JwtTokenDecoder::new());
        let session = AuthSession::new(store, decoder);

        let client = ApiClient::builder(transport)
            .request_interceptor(BearerAuth::new(session.clone()))
            .request_interceptor(RequestIdHeader)
            .response_interceptor(ClearSessionOnUnauthorized::new(session.clone()))
            .response_interceptor(ErrorLogger)
            .build();

        Self {
            api: TrackerApi::new(client, session),
        }
    }
}
