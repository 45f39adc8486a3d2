// crates/auction-contract/src/lib.rs
// ============================================================================
// Module: Auction Contract Library
// Description: Wire-level contract for the external auction HTTP API.
// Purpose: Provide typed payload shapes, principal encoding, and response schemas.
// Dependencies: base64, serde, serde_json, thiserror, time
// ============================================================================

//! ## Overview
//! This crate is the single source of truth for the auction API wire contract
//! consumed by the CLI and the conformance suites. The server owns every
//! resource; these types only describe what crosses the wire. Responses are
//! treated as untrusted input and decoded fallibly.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod principal;
pub mod schemas;
pub mod types;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use principal::JWT_PAYLOAD_HEADER;
pub use principal::Principal;
pub use principal::PrincipalError;
