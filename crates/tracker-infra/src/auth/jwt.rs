//! JWT payload decoding.
//!
//! The client holds no signing secret, so tokens are decoded without
//! signature or expiry checks. Only the API can tell whether a token is good.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde_json::{Map, Value};

use tracker_core::ports::{AuthError, TokenClaims, TokenDecoder};

/// JWT-based token decoder.
pub struct JwtTokenDecoder {
    key: DecodingKey,
    validation: Validation,
}

impl JwtTokenDecoder {
    pub fn new() -> Self {
        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            key: DecodingKey::from_secret(&[]),
            validation,
        }
    }
}

impl Default for JwtTokenDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenDecoder for JwtTokenDecoder {
    fn decode(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let data = decode::<Map<String, Value>>(token, &self.key, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(TokenClaims::new(data.claims))
    }
}
