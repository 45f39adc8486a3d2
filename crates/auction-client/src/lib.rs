// crates/auction-client/src/lib.rs
// ============================================================================
// Module: Auction Client Library
// Description: HTTP client for the external auction API.
// Purpose: Issue the four auction requests with transcript capture.
// Dependencies: auction-contract, reqwest, serde, thiserror, url
// ============================================================================

//! ## Overview
//! A thin reqwest wrapper over the auction endpoints. Every call is a single
//! request/response cycle: no retries, no shared state between invocations
//! beyond an in-memory transcript of completed exchanges. Transport failures
//! are surfaced as-is so callers can tell an unreachable server apart from a
//! contract violation.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod client;
mod error;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use client::ApiResponse;
pub use client::AuctionClient;
pub use client::TranscriptEntry;
pub use error::ClientError;
