//! # Tracker Infrastructure
//!
//! Concrete implementations of the ports defined in `tracker-core`:
//! local storage, JWT decoding and the HTTP transport.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, storage only
//! - `jwt` - JWT payload decoding via jsonwebtoken
//! - `http` - HTTP transport via reqwest

pub mod storage;

#[cfg(feature = "jwt")]
pub mod auth;

#[cfg(feature = "http")]
pub mod http;

// Re-exports - Storage
pub use storage::{FileStore, InMemoryStore};

#[cfg(feature = "jwt")]
pub use auth::JwtTokenDecoder;

#[cfg(feature = "http")]
pub use http::{ReqwestConfig, ReqwestTransport};
