//! Token decoding port.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Claims decoded from a JWT payload.
///
/// The client never verifies signatures; the payload is only read for display
/// and for picking out the user id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenClaims {
    payload: Map<String, Value>,
}

impl TokenClaims {
    pub fn new(payload: Map<String, Value>) -> Self {
        Self { payload }
    }

    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    pub fn into_payload(self) -> Map<String, Value> {
        self.payload
    }

    pub fn get(&self, claim: &str) -> Option<&Value> {
        self.payload.get(claim)
    }

    /// User id from the `userId` claim, falling back to the standard `sub`.
    pub fn user_id(&self) -> Option<String> {
        ["userId", "sub"]
            .iter()
            .find_map(|claim| self.payload.get(*claim).and_then(claim_as_string))
    }

    /// Expiry from the `exp` claim (seconds since the epoch).
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let exp = self.payload.get("exp")?;
        let secs = exp.as_i64().or_else(|| exp.as_f64().map(|f| f as i64))?;
        DateTime::from_timestamp(secs, 0)
    }

    /// A token without `exp` never expires.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().map(|exp| now >= exp).unwrap_or(false)
    }
}

fn claim_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Token decoder trait for reading JWT payloads.
pub trait TokenDecoder: Send + Sync {
    /// Decode the payload of `token` without verifying its signature.
    fn decode(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),
}
