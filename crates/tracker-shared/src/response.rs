//! Response envelopes the API wraps around its payloads.

use serde::{Deserialize, Serialize};

/// One page of a listing.
///
/// The API names the item array after the resource (`startups`, `investors`,
/// `jobs`, `articles`, `users`); all of them land in `items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(
        alias = "startups",
        alias = "investors",
        alias = "jobs",
        alias = "articles",
        alias = "users"
    )]
    pub items: Vec<T>,
    pub total: u64,
    pub pages: u64,
    pub page: u64,
    pub per_page: u64,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Confirmation body returned by deletes, logout and password changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body the API returns with 4xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
