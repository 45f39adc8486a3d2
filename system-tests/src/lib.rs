// system-tests/src/lib.rs
// ============================================================================
// Module: Auction System Tests Library
// Description: Shared configuration for auction conformance scenarios.
// Purpose: Provide common utilities for the conformance test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts the environment-backed configuration used by the auction
//! conformance suites in `system-tests/tests`. The suites exercise an
//! external, already-running auction API; responses are untrusted input.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
