//! # Tracker Core
//!
//! The domain layer of the Boston Startup Tracker client.
//! This crate holds the API's resource types and the ports the client is
//! written against, with zero transport or storage dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{ApiError, DomainError};
