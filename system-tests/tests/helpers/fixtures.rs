// system-tests/tests/helpers/fixtures.rs
// ============================================================================
// Module: Suite Fixtures
// Description: Configured clients and request builders for the suites.
// Purpose: Keep per-test setup small and collision-free.
// Dependencies: system-tests, auction-client, auction-contract, time
// ============================================================================

use std::sync::OnceLock;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::time::Duration;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use auction_client::AuctionClient;
use auction_contract::types::AuctionRequest;
use system_tests::config::SystemTestConfig;
use time::OffsetDateTime;
use time::macros::datetime;

use super::timeouts;

/// Default per-request timeout when no override is configured.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-test context: a configured client plus the two principals.
pub struct SuiteContext {
    /// Client for the target API.
    pub client: AuctionClient,
    /// Seller principal header value.
    pub seller: String,
    /// Buyer principal header value.
    pub buyer: String,
}

/// Builds a fresh context from the environment configuration.
pub fn suite_context() -> Result<SuiteContext, String> {
    let config = SystemTestConfig::load()?;
    let timeout = timeouts::resolve_timeout(DEFAULT_TIMEOUT, config.timeout);
    let client = AuctionClient::new(&config.base_url, timeout).map_err(|err| err.to_string())?;
    Ok(SuiteContext {
        client,
        seller: config.seller,
        buyer: config.buyer,
    })
}

/// Returns a process-unique auction id.
///
/// Ids are seeded from wall-clock millis so repeated suite runs against a
/// persistent server do not collide; the server offers no cleanup.
pub fn unique_auction_id() -> i64 {
    static COUNTER: OnceLock<AtomicI64> = OnceLock::new();
    let counter = COUNTER.get_or_init(|| {
        let millis =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        AtomicI64::new(i64::try_from(millis % 1_000_000).unwrap_or(0))
    });
    counter.fetch_add(1, Ordering::Relaxed)
}

/// Builds the canonical creation payload with a fixed 2018–2019 window.
pub fn sample_auction_request(id: i64) -> AuctionRequest {
    AuctionRequest {
        id,
        starts_at: datetime!(2018-01-01 10:00 UTC),
        ends_at: datetime!(2019-01-01 10:00 UTC),
        title: "First auction".to_string(),
        currency: "VAC".to_string(),
    }
}

/// Builds a creation payload with an explicit bidding window.
pub fn timed_auction_request(
    id: i64,
    starts_at: OffsetDateTime,
    ends_at: OffsetDateTime,
) -> AuctionRequest {
    AuctionRequest {
        id,
        starts_at,
        ends_at,
        title: "Time test auction".to_string(),
        currency: "VAC".to_string(),
    }
}
