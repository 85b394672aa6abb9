//! HTTP transport implementations.

mod reqwest_transport;

pub use reqwest_transport::{DEFAULT_BASE_URL, ReqwestConfig, ReqwestTransport, join_url};
