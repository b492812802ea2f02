//! Error types for rate acquisition and conversion.

use thiserror::Error;

/// Failure of a single fetch attempt against the rate service.
///
/// Transport failures are retryable; a malformed body is terminal.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network, timeout, HTTP status or body-read failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response arrived but did not contain a usable rate mapping.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Terminal errors surfaced by rate acquisition and conversion.
#[derive(Debug, Error)]
pub enum RateError {
    /// Every fetch attempt failed at the transport level.
    #[error("Exchange rates unavailable for {base} after {attempts} attempts: {last_error}")]
    RatesUnavailable {
        base: String,
        attempts: u32,
        last_error: String,
    },

    /// The service answered but the body was unusable.
    #[error("Malformed rates response for {base}: {reason}")]
    MalformedResponse { base: String, reason: String },

    /// Requested target currency has no rate in the resolved mapping.
    #[error("Unknown target currency: {target} (no rate in {base} table)")]
    UnknownTarget { base: String, target: String },
}
