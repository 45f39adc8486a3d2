// crates/auction-client/src/error.rs
// ============================================================================
// Module: Client Errors
// Description: Error types for auction API calls.
// Purpose: Separate construction, transport, and decode failures.
// Dependencies: reqwest, thiserror
// ============================================================================

use thiserror::Error;

/// Errors produced by [`crate::AuctionClient`].
///
/// `Transport` means the server never produced a usable response; everything
/// the server does answer, including rejections, comes back as an
/// [`crate::ApiResponse`] instead of an error.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL was rejected at construction time.
    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl {
        /// The offending URL string.
        url: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// The underlying HTTP client could not be built.
    #[error("failed to build http client: {0}")]
    Build(reqwest::Error),
    /// Network-level failure: connection refused, timeout, or a broken
    /// response stream.
    #[error("transport failure: {0}")]
    Transport(reqwest::Error),
    /// A response body did not decode as the expected shape.
    #[error("failed to decode {context}: {reason}")]
    Decode {
        /// What was being decoded.
        context: String,
        /// Decoder diagnostic.
        reason: String,
    },
}
