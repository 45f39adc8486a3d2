// crates/auction-contract/src/types.rs
// ============================================================================
// Module: Contract Types
// Description: Request and response shapes for the auction HTTP API.
// Purpose: Provide canonical serde models for creation, bidding, and reads.
// Dependencies: serde, serde_json, time
// ============================================================================

//! ## Overview
//! Typed payloads for the four auction endpoints: `POST /auctions`,
//! `POST /auctions/:id/bids`, `GET /auctions/:id`, and `GET /auctions`.
//! Field names are camelCase on the wire and timestamps are RFC 3339.
//! Rejection bodies are bare JSON strings naming the failure (for example
//! `"AuctionAlreadyExists 17"`); see [`decode_error_text`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;

// ============================================================================
// SECTION: Request Types
// ============================================================================

/// Creation payload for `POST /auctions`.
///
/// The caller chooses the auction id; the server rejects reuse of an id with
/// `"AuctionAlreadyExists <id>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionRequest {
    /// Client-chosen auction identifier.
    pub id: i64,
    /// Instant at which bidding opens.
    #[serde(with = "time::serde::rfc3339")]
    pub starts_at: OffsetDateTime,
    /// Instant at which bidding closes.
    #[serde(with = "time::serde::rfc3339")]
    pub ends_at: OffsetDateTime,
    /// Human-readable auction title.
    pub title: String,
    /// Currency code for the auction, e.g. `VAC`.
    pub currency: String,
}

/// Bid payload for `POST /auctions/:id/bids`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidRequest {
    /// Bid amount in the auction currency.
    pub amount: i64,
}

// ============================================================================
// SECTION: Command Events
// ============================================================================

/// Success body returned by the two write endpoints, tagged by `$type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum CommandEvent {
    /// An auction was registered.
    AuctionAdded {
        /// Server timestamp for the event.
        #[serde(with = "time::serde::rfc3339")]
        at: OffsetDateTime,
        /// Snapshot of the registered auction.
        auction: AuctionSnapshot,
    },
    /// A bid was accepted.
    BidAccepted {
        /// Server timestamp for the event.
        #[serde(with = "time::serde::rfc3339")]
        at: OffsetDateTime,
        /// Snapshot of the accepted bid.
        bid: BidSnapshot,
    },
}

/// Auction representation embedded in an `AuctionAdded` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionSnapshot {
    /// Auction identifier.
    pub id: i64,
    /// Instant at which bidding opens.
    #[serde(with = "time::serde::rfc3339")]
    pub starts_at: OffsetDateTime,
    /// Human-readable auction title.
    pub title: String,
    /// Instant at which bidding closes.
    #[serde(with = "time::serde::rfc3339")]
    pub expiry: OffsetDateTime,
    /// Rendered seller identity, e.g. `BuyerOrSeller|a1|Test`.
    pub user: String,
    /// Rendered auction type, e.g. `English|0|0|0`.
    #[serde(rename = "type")]
    pub auction_type: String,
    /// Currency code for the auction.
    pub currency: String,
}

/// Bid representation embedded in a `BidAccepted` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidSnapshot {
    /// Identifier of the auction the bid targets.
    pub auction: i64,
    /// Rendered bidder identity.
    pub user: String,
    /// Bid amount in the auction currency.
    pub amount: i64,
    /// Server timestamp for the bid.
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

// ============================================================================
// SECTION: Read Types
// ============================================================================

/// Full auction representation returned by `GET /auctions/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionDetail {
    /// Auction identifier.
    pub id: i64,
    /// Instant at which bidding opens.
    #[serde(with = "time::serde::rfc3339")]
    pub starts_at: OffsetDateTime,
    /// Human-readable auction title.
    pub title: String,
    /// Instant at which bidding closes.
    #[serde(with = "time::serde::rfc3339")]
    pub expiry: OffsetDateTime,
    /// Currency code for the auction.
    pub currency: String,
    /// Bids recorded so far, oldest first.
    #[serde(default)]
    pub bids: Vec<BidView>,
    /// Rendered winner identity once the auction resolves.
    #[serde(default)]
    pub winner: Option<String>,
    /// Winning price once the auction resolves; representation varies by
    /// auction type, so it stays an opaque JSON value.
    #[serde(default)]
    pub winner_price: Option<Value>,
}

/// Single bid entry inside an [`AuctionDetail`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidView {
    /// Bid amount in the auction currency.
    pub amount: i64,
    /// Rendered bidder identity.
    pub bidder: String,
}

/// Listing entry returned by `GET /auctions`.
///
/// The listing shape carries at least these fields; extra server-side fields
/// are ignored so the contract stays tolerant of additive changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionSummary {
    /// Auction identifier.
    pub id: i64,
    /// Human-readable auction title.
    pub title: String,
    /// Currency code for the auction.
    pub currency: String,
}

// ============================================================================
// SECTION: Error Bodies
// ============================================================================

/// Decodes a rejection body, which the API returns as a bare JSON string.
///
/// Returns `None` when the body is not a JSON string, which a conformance
/// check treats as a contract violation in its own right.
#[must_use]
pub fn decode_error_text(body: &str) -> Option<String> {
    serde_json::from_str::<String>(body).ok()
}
