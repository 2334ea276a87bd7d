//! Error types.
//!
//! The core's own failure paths are all non-fatal (a claim without a span is
//! dropped, a malformed bucket decodes empty). The one fatal case is a
//! backend payload that is not an analysis report at all.

use thiserror::Error;

/// Failure to decode a backend payload
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid analysis payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}
