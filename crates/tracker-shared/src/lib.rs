//! # Tracker Shared
//!
//! Types and helpers shared by every consumer of the tracker API: request and
//! response DTOs, the list envelope, constants and display formatting.

pub mod constants;
pub mod dto;
pub mod format;
pub mod response;

pub use response::{ErrorBody, MessageResponse, Page};
