// system-tests/tests/suites/auction_state.rs
// ============================================================================
// Module: Auction State Tests
// Description: Conformance coverage for the bidding-window lifecycle.
// Purpose: Verify bids are accepted or rejected according to the auction's
//          start and end instants.
// Dependencies: system-tests helpers, auction-contract, time
// ============================================================================

//! Bidding-window lifecycle conformance tests.
//!
//! These cases anchor auction windows to the current wall clock, so the
//! margins are deliberately generous (seconds, not milliseconds) to stay
//! clear of request latency.

use std::error::Error;

use auction_contract::types::BidRequest;
use helpers::fixtures::suite_context;
use helpers::fixtures::timed_auction_request;
use helpers::fixtures::unique_auction_id;
use helpers::readiness::wait_for_api_ready;
use reqwest::StatusCode;
use time::OffsetDateTime;

use crate::helpers;

/// How long to wait for the target server before declaring it unreachable.
const READY_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

#[tokio::test(flavor = "multi_thread")]
async fn bid_accepted_just_after_start() -> Result<(), Box<dyn Error>> {
    let ctx = suite_context()?;
    wait_for_api_ready(&ctx.client, READY_TIMEOUT).await?;
    let auction_id = unique_auction_id();
    let now = OffsetDateTime::now_utc();
    let request = timed_auction_request(
        auction_id,
        now - time::Duration::seconds(2),
        now + time::Duration::hours(1),
    );

    let created = ctx.client.create_auction(&request, &ctx.seller).await?;
    if created.status() != StatusCode::OK {
        return Err(format!("create returned {}", created.status()).into());
    }

    let bid = BidRequest {
        amount: 10,
    };
    let response = ctx.client.place_bid(auction_id, &bid, &ctx.buyer).await?;
    if response.status() != StatusCode::OK {
        return Err(format!(
            "bid just after start returned {} (body: {})",
            response.status(),
            response.body()
        )
        .into());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn bid_accepted_just_before_end() -> Result<(), Box<dyn Error>> {
    let ctx = suite_context()?;
    wait_for_api_ready(&ctx.client, READY_TIMEOUT).await?;
    let auction_id = unique_auction_id();
    let now = OffsetDateTime::now_utc();
    // Five seconds leaves room for the create round-trip before the window closes.
    let request = timed_auction_request(
        auction_id,
        now - time::Duration::hours(1),
        now + time::Duration::seconds(5),
    );

    let created = ctx.client.create_auction(&request, &ctx.seller).await?;
    if created.status() != StatusCode::OK {
        return Err(format!("create returned {}", created.status()).into());
    }

    let bid = BidRequest {
        amount: 10,
    };
    let response = ctx.client.place_bid(auction_id, &bid, &ctx.buyer).await?;
    if response.status() != StatusCode::OK {
        return Err(format!(
            "bid just before end returned {} (body: {})",
            response.status(),
            response.body()
        )
        .into());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn unstarted_auction_is_not_reported_ended() -> Result<(), Box<dyn Error>> {
    let ctx = suite_context()?;
    wait_for_api_ready(&ctx.client, READY_TIMEOUT).await?;
    let auction_id = unique_auction_id();
    let now = OffsetDateTime::now_utc();
    let request = timed_auction_request(
        auction_id,
        now + time::Duration::seconds(5),
        now + time::Duration::hours(1),
    );

    let created = ctx.client.create_auction(&request, &ctx.seller).await?;
    if created.status() != StatusCode::OK {
        return Err(format!("create returned {}", created.status()).into());
    }

    let bid = BidRequest {
        amount: 10,
    };
    let response = ctx.client.place_bid(auction_id, &bid, &ctx.buyer).await?;
    // A rejection is fine here (the window has not opened); what must not
    // happen is the server claiming the auction has already ended.
    if response.status() != StatusCode::OK && response.body().contains("AuctionHasEnded") {
        return Err(format!(
            "unstarted auction reported as ended (status {}, body: {})",
            response.status(),
            response.body()
        )
        .into());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn bid_rejected_after_end() -> Result<(), Box<dyn Error>> {
    let ctx = suite_context()?;
    wait_for_api_ready(&ctx.client, READY_TIMEOUT).await?;
    let auction_id = unique_auction_id();
    let now = OffsetDateTime::now_utc();
    let request = timed_auction_request(
        auction_id,
        now - time::Duration::hours(1),
        now - time::Duration::seconds(2),
    );

    let created = ctx.client.create_auction(&request, &ctx.seller).await?;
    if created.status() != StatusCode::OK {
        return Err(format!("create returned {}", created.status()).into());
    }

    let bid = BidRequest {
        amount: 10,
    };
    let response = ctx.client.place_bid(auction_id, &bid, &ctx.buyer).await?;
    if response.status() != StatusCode::BAD_REQUEST {
        return Err(format!(
            "bid after end returned {} (body: {})",
            response.status(),
            response.body()
        )
        .into());
    }
    if !response.body().contains("AuctionHasEnded") {
        return Err(format!("unexpected rejection body: {}", response.body()).into());
    }
    Ok(())
}
