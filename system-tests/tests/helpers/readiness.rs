// system-tests/tests/helpers/readiness.rs
// ============================================================================
// Module: Readiness Helpers
// Description: Readiness probe for the target auction API.
// Purpose: Surface an unreachable server as an infrastructure error, not an
//          assertion failure.
// Dependencies: auction-client, tokio
// ============================================================================

use std::time::Duration;
use std::time::Instant;

use auction_client::AuctionClient;
use tokio::time::sleep;

/// Polls the listing endpoint until the server responds or timeout expires.
pub async fn wait_for_api_ready(
    client: &AuctionClient,
    timeout: Duration,
) -> Result<(), String> {
    let start = Instant::now();
    let mut attempts = 0u32;
    loop {
        attempts = attempts.saturating_add(1);
        match client.list_auctions().await {
            Ok(_) => return Ok(()),
            Err(err) => {
                if start.elapsed() > timeout {
                    return Err(format!(
                        "auction api at {} unreachable after {attempts} attempts: {err}",
                        client.base_url()
                    ));
                }
                sleep(Duration::from_millis(50)).await;
            }
        }
    }
}
