// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for conformance tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std, url
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid
//! silent misconfiguration. Invalid UTF-8, empty values, and unparseable
//! URLs or timeouts fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use url::Url;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for conformance test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Base URL of the auction API under test.
    BaseUrl,
    /// Seller principal header value for creation requests.
    Seller,
    /// Buyer principal header value for bid requests.
    Buyer,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
}

impl SystemTestEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "URL",
            Self::Seller => "SELLER",
            Self::Buyer => "BUYER",
            Self::TimeoutSeconds => "AUCTION_SYSTEM_TEST_TIMEOUT_SEC",
        }
    }
}

/// API base used when `URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
/// Development seller payload (`{"sub":"a1","name":"Test","u_typ":"0"}`);
/// an illustrative identity, overridden via `SELLER` for real targets.
pub const DEFAULT_SELLER: &str = "eyJzdWIiOiJhMSIsICJuYW1lIjoiVGVzdCIsICJ1X3R5cCI6IjAifQo=";
/// Development buyer payload (`{"sub":"a2","name":"Buyer","u_typ":"0"}`);
/// overridden via `BUYER`.
pub const DEFAULT_BUYER: &str = "eyJzdWIiOiJhMiIsICJuYW1lIjoiQnV5ZXIiLCAidV90eXAiOiIwIn0K";

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed conformance test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemTestConfig {
    /// Base URL of the target API, with any trailing slash removed.
    pub base_url: String,
    /// Seller principal header value.
    pub seller: String,
    /// Buyer principal header value.
    pub buyer: String,
    /// Optional timeout override.
    pub timeout: Option<Duration>,
}

impl Default for SystemTestConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            seller: DEFAULT_SELLER.to_string(),
            buyer: DEFAULT_BUYER.to_string(),
            timeout: None,
        }
    }
}

impl SystemTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is
    /// empty, or fails validation (an unparseable base URL or an invalid
    /// timeout).
    pub fn load() -> Result<Self, String> {
        let base_url = read_env_nonempty(SystemTestEnv::BaseUrl.as_str())?
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url).map_err(|err| {
            format!("{} must be a valid URL: {err}", SystemTestEnv::BaseUrl.as_str())
        })?;
        let seller = read_env_nonempty(SystemTestEnv::Seller.as_str())?
            .unwrap_or_else(|| DEFAULT_SELLER.to_string());
        let buyer = read_env_nonempty(SystemTestEnv::Buyer.as_str())?
            .unwrap_or_else(|| DEFAULT_BUYER.to_string());
        let timeout = read_env_nonempty(SystemTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SystemTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            seller,
            buyer,
            timeout,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
