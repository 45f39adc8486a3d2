// crates/auction-contract/src/schemas.rs
// ============================================================================
// Module: Response Schemas
// Description: JSON Schemas for auction API response bodies.
// Purpose: Let the conformance suite validate payload shape independent of serde.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Draft 2020-12 schemas for each response shape. The conformance suite
//! validates raw response bodies against these before decoding into the typed
//! models, so a shape drift is reported as a schema violation rather than an
//! opaque serde error. Schemas require the contract fields and tolerate
//! additive server-side properties.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Event Schemas
// ============================================================================

/// Schema for the `AuctionAdded` event returned by `POST /auctions`.
#[must_use]
pub fn auction_added_schema() -> Value {
    json!({
        "type": "object",
        "required": ["$type", "at", "auction"],
        "properties": {
            "$type": { "const": "AuctionAdded" },
            "at": timestamp_schema(),
            "auction": {
                "type": "object",
                "required": ["id", "startsAt", "title", "expiry", "user", "type", "currency"],
                "properties": {
                    "id": { "type": "integer" },
                    "startsAt": timestamp_schema(),
                    "title": { "type": "string" },
                    "expiry": timestamp_schema(),
                    "user": { "type": "string" },
                    "type": { "type": "string" },
                    "currency": { "type": "string" }
                }
            }
        }
    })
}

/// Schema for the `BidAccepted` event returned by `POST /auctions/:id/bids`.
#[must_use]
pub fn bid_accepted_schema() -> Value {
    json!({
        "type": "object",
        "required": ["$type", "at", "bid"],
        "properties": {
            "$type": { "const": "BidAccepted" },
            "at": timestamp_schema(),
            "bid": {
                "type": "object",
                "required": ["auction", "user", "amount", "at"],
                "properties": {
                    "auction": { "type": "integer" },
                    "user": { "type": "string" },
                    "amount": { "type": "integer" },
                    "at": timestamp_schema()
                }
            }
        }
    })
}

// ============================================================================
// SECTION: Read Schemas
// ============================================================================

/// Schema for the auction representation returned by `GET /auctions/:id`.
#[must_use]
pub fn auction_detail_schema() -> Value {
    json!({
        "type": "object",
        "required": ["id", "startsAt", "title", "expiry", "currency", "bids", "winner", "winnerPrice"],
        "properties": {
            "id": { "type": "integer" },
            "startsAt": timestamp_schema(),
            "title": { "type": "string" },
            "expiry": timestamp_schema(),
            "currency": { "type": "string" },
            "bids": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["amount", "bidder"],
                    "properties": {
                        "amount": { "type": "integer" },
                        "bidder": { "type": "string" }
                    }
                }
            },
            "winner": { "type": ["string", "null"] },
            "winnerPrice": {}
        }
    })
}

/// Schema for the collection returned by `GET /auctions`.
#[must_use]
pub fn auction_list_schema() -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "required": ["id", "title", "currency"],
            "properties": {
                "id": { "type": "integer" },
                "title": { "type": "string" },
                "currency": { "type": "string" }
            }
        }
    })
}

// ============================================================================
// SECTION: Error Schemas
// ============================================================================

/// Schema for rejection bodies, which are bare JSON strings.
#[must_use]
pub fn error_body_schema() -> Value {
    json!({ "type": "string", "minLength": 1 })
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Schema fragment for RFC 3339 timestamps.
fn timestamp_schema() -> Value {
    json!({ "type": "string", "format": "date-time" })
}
