//! Top-level analysis result from the verification backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::claim::Claim;
use crate::error::ReportError;

/// Document-level risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// The complete result of one analysis run.
///
/// This is the only type in the crate that is decoded fallibly: a payload
/// that does not parse as a report at all is the upstream failure case and
/// surfaces as [`ReportError`]. Everything beneath this level degrades
/// silently (unknown enum values, malformed evidence buckets).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overall_risk: RiskLevel,

    /// Aggregate hallucination score in [0, 1]
    pub hallucination_score: f64,

    /// Opaque counters (verdict tallies, flag counts); rendered verbatim
    #[serde(default)]
    pub summary: BTreeMap<String, serde_json::Value>,

    #[serde(default)]
    pub claims: Vec<Claim>,
}

impl AnalysisReport {
    /// Decode a raw backend payload
    pub fn from_json(payload: &str) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_str(payload)?;
        Ok(report)
    }

    /// Look up a claim by its ID
    pub fn claim(&self, claim_id: &str) -> Option<&Claim> {
        self.claims.iter().find(|c| c.claim_id == claim_id)
    }
}
