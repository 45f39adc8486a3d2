// crates/auction-contract/src/principal.rs
// ============================================================================
// Module: Principal Encoding
// Description: Authenticated identity attached to auction API requests.
// Purpose: Encode and decode the base64 JSON payload of the auth header.
// Dependencies: base64, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The auction API authenticates writes through a header carrying a
//! base64-encoded JSON payload identifying the caller. Sellers create
//! auctions; buyers place bids. Reads are unauthenticated. Header values are
//! untrusted and decoding fails closed on malformed input.

// ============================================================================
// SECTION: Imports
// ============================================================================

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Header carrying the encoded principal payload on authenticated requests.
pub const JWT_PAYLOAD_HEADER: &str = "x-jwt-payload";

// ============================================================================
// SECTION: Principal Types
// ============================================================================

/// Authenticated identity attached to a creation or bid request.
///
/// The wire form is the base64 encoding of the JSON payload, for example
/// `{"sub": "a1", "name": "Test", "u_typ": "0"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Subject identifier assigned by the identity provider.
    pub sub: String,
    /// Display name of the caller.
    pub name: String,
    /// User type discriminator; `"0"` marks a buyer-or-seller account.
    #[serde(rename = "u_typ")]
    pub user_type: String,
}

/// Errors produced while encoding or decoding principal payloads.
#[derive(Debug, Error)]
pub enum PrincipalError {
    /// The header value was not valid base64.
    #[error("principal payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The decoded payload was not the expected JSON shape.
    #[error("principal payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Principal {
    /// Creates a buyer-or-seller principal with the default user type.
    #[must_use]
    pub fn new(sub: &str, name: &str) -> Self {
        Self {
            sub: sub.to_string(),
            name: name.to_string(),
            user_type: "0".to_string(),
        }
    }

    /// Encodes the principal into a header value.
    ///
    /// # Errors
    ///
    /// Returns an error when JSON serialization fails.
    pub fn header_value(&self) -> Result<String, PrincipalError> {
        let json = serde_json::to_vec(self)?;
        Ok(BASE64.encode(json))
    }

    /// Decodes a header value back into a principal.
    ///
    /// # Errors
    ///
    /// Returns an error when the value is not base64 or the decoded payload is
    /// not a principal JSON object.
    pub fn from_header_value(value: &str) -> Result<Self, PrincipalError> {
        let bytes = BASE64.decode(value.trim())?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
