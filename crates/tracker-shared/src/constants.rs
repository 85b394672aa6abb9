//! Application-wide constants.

/// Largest page size the API serves.
pub const MAX_RESULTS_PER_PAGE: u32 = 50;

/// Page size used when the caller does not choose one.
pub const DEFAULT_RESULTS_PER_PAGE: u32 = 20;

/// Standard date format (`chrono` strftime syntax).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default currency for financial amounts.
pub const CURRENCY: &str = "USD";

/// Access token lifetime issued by the API, in seconds.
pub const TOKEN_EXPIRATION_SECS: i64 = 3600;
