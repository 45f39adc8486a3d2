// crates/auction-client/src/client.rs
// ============================================================================
// Module: Auction HTTP Client
// Description: Request builders for the four auction endpoints.
// Purpose: Issue authenticated writes and unauthenticated reads with transcripts.
// Dependencies: auction-contract, reqwest, serde
// ============================================================================

//! ## Overview
//! The client owns a configured reqwest client and a base URL. Writes attach
//! the caller-supplied principal header; reads send none. Each completed
//! exchange is appended to a transcript that tests can snapshot when
//! reporting a failure.

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use auction_contract::JWT_PAYLOAD_HEADER;
use auction_contract::types::AuctionRequest;
use auction_contract::types::BidRequest;
use auction_contract::types::decode_error_text;
use reqwest::Client;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::ClientError;

/// One completed request/response exchange.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    /// Position of the exchange in the transcript, starting at 1.
    pub sequence: u64,
    /// HTTP method of the request.
    pub method: String,
    /// Request path relative to the base URL.
    pub path: String,
    /// Response status code, when a response arrived.
    pub status: Option<u16>,
    /// Raw response body, or the transport error text.
    pub body: String,
}

/// Completed HTTP exchange with the raw body retained.
///
/// Rejections are responses too: callers inspect [`Self::status`] and decode
/// the body instead of matching on an error.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status returned by the server.
    status: StatusCode,
    /// Raw response body text.
    body: String,
}

impl ApiResponse {
    /// Returns the HTTP status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the body as arbitrary JSON.
    ///
    /// # Errors
    ///
    /// Returns an error when the body is not valid JSON.
    pub fn json(&self) -> Result<Value, ClientError> {
        serde_json::from_str(&self.body).map_err(|err| ClientError::Decode {
            context: "response body".to_string(),
            reason: err.to_string(),
        })
    }

    /// Decodes the body into a typed contract shape.
    ///
    /// # Errors
    ///
    /// Returns an error when the body does not match the target shape.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_str(&self.body).map_err(|err| ClientError::Decode {
            context: std::any::type_name::<T>().to_string(),
            reason: err.to_string(),
        })
    }

    /// Returns the rejection text when the body is a bare JSON string.
    #[must_use]
    pub fn error_text(&self) -> Option<String> {
        decode_error_text(&self.body)
    }
}

/// HTTP client for the auction API with transcript capture.
#[derive(Debug, Clone)]
pub struct AuctionClient {
    /// Base URL with any trailing slash removed.
    base_url: String,
    /// Configured reqwest client.
    http: Client,
    /// Completed exchanges, shared across clones.
    transcript: Arc<Mutex<Vec<TranscriptEntry>>>,
}

impl AuctionClient {
    /// Creates a client for the given base URL with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL does not parse or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        Url::parse(base_url).map_err(|err| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })?;
        let http = Client::builder().timeout(timeout).build().map_err(ClientError::Build)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            transcript: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a snapshot of the transcript entries.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    /// Creates an auction as the given seller principal.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure; server rejections come back as
    /// an [`ApiResponse`].
    pub async fn create_auction(
        &self,
        request: &AuctionRequest,
        principal: &str,
    ) -> Result<ApiResponse, ClientError> {
        self.post("/auctions", request, principal).await
    }

    /// Places a bid on an auction as the given buyer principal.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn place_bid(
        &self,
        auction_id: i64,
        request: &BidRequest,
        principal: &str,
    ) -> Result<ApiResponse, ClientError> {
        self.post(&format!("/auctions/{auction_id}/bids"), request, principal).await
    }

    /// Fetches a single auction; no authentication is sent.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn get_auction(&self, auction_id: i64) -> Result<ApiResponse, ClientError> {
        self.get(&format!("/auctions/{auction_id}")).await
    }

    /// Fetches the auction listing; no authentication is sent.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn list_auctions(&self) -> Result<ApiResponse, ClientError> {
        self.get("/auctions").await
    }

    /// Issues an authenticated JSON POST.
    async fn post<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        principal: &str,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .http
            .post(format!("{}{path}", self.base_url))
            .header(JWT_PAYLOAD_HEADER, principal)
            .json(body);
        self.execute("POST", path, request).await
    }

    /// Issues an unauthenticated GET.
    async fn get(&self, path: &str) -> Result<ApiResponse, ClientError> {
        let request = self.http.get(format!("{}{path}", self.base_url));
        self.execute("GET", path, request).await
    }

    /// Sends one request and records the exchange. No retries: a transport
    /// failure is reported as-is.
    async fn execute(
        &self,
        method: &str,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse, ClientError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                self.record(method, path, None, &err.to_string());
                return Err(ClientError::Transport(err));
            }
        };
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                self.record(method, path, Some(status.as_u16()), &err.to_string());
                return Err(ClientError::Transport(err));
            }
        };
        self.record(method, path, Some(status.as_u16()), &body);
        Ok(ApiResponse {
            status,
            body,
        })
    }

    /// Appends one transcript entry; a poisoned lock drops the entry rather
    /// than failing the call.
    fn record(&self, method: &str, path: &str, status: Option<u16>, body: &str) {
        let Ok(mut guard) = self.transcript.lock() else {
            return;
        };
        let sequence = u64::try_from(guard.len()).unwrap_or(u64::MAX).saturating_add(1);
        guard.push(TranscriptEntry {
            sequence,
            method: method.to_string(),
            path: path.to_string(),
            status,
            body: body.to_string(),
        });
    }
}
