//! Claim and verification wire types.
//!
//! These mirror the JSON emitted by the upstream analysis service. The
//! service is the source of truth: claims are produced once per run and
//! read-only afterwards. Open-ended string taxonomies decode unknown values
//! into an `Unknown` variant instead of failing the whole document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::evidence_buckets::EvidenceBuckets;

/// Category of assertion the extractor assigned to a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimType {
    /// Dated or date-bearing assertion
    Temporal,
    /// Subject-predicate-object relation between entities
    Relation,
    /// Attribute of a single entity
    FactualAttribute,
    /// Bare existence assertion
    Existential,
    /// Reported speech, not asserted by the author
    MetaReported,
    /// Any type string this client does not know about
    #[serde(other)]
    Unknown,
}

/// How the author commits to a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EpistemicStatus {
    /// Stated as fact
    Asserted,
    /// Hedged, quoted, or otherwise not asserted
    NonAssertive,
    /// Explicitly disputed in the source text
    Contested,
    #[serde(other)]
    Unknown,
}

/// Coarse verification outcome for a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Supported,
    SupportedWeak,
    PartiallySupported,
    Refuted,
    InsufficientEvidence,
    Uncertain,
    #[serde(other)]
    Unknown,
}

/// How far evidence retrieval got for a claim.
///
/// Distinguishes "nothing was found" from "something was found but did not
/// settle the verdict" from "evidence confirms".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvidenceSufficiency {
    /// No evidence retrieved from any source
    #[serde(rename = "ES_ABSENT")]
    Absent,
    /// Evidence found but insufficient for a verdict
    #[serde(rename = "ES_EVALUATED")]
    Evaluated,
    /// Textual evidence contributed to the verdict
    #[serde(rename = "ES_CORROBORATED")]
    Corroborated,
    /// Structured evidence directly supports the claim
    #[serde(rename = "ES_VERIFIED")]
    Verified,
}

/// Support state of a single facet (e.g. inception date, headquarters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FacetState {
    Supported,
    Contradicted,
    Unknown,
}

/// Verification result attached to a claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verification {
    /// Coarse verdict
    pub verdict: Verdict,

    /// Verifier confidence in [0, 1]
    #[serde(default)]
    pub confidence: f64,

    /// Free-text reasoning from the verifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,

    /// IDs of evidence records that contributed to the verdict
    #[serde(default)]
    pub used_evidence_ids: Vec<String>,

    /// IDs of evidence records that conflict with the claim
    #[serde(default)]
    pub contradicted_by: Vec<String>,

    /// How far evidence retrieval got
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_sufficiency: Option<EvidenceSufficiency>,

    /// Per-facet support breakdown beneath the coarse verdict
    #[serde(default)]
    pub facet_status: BTreeMap<String, FacetState>,
}

impl Default for Verification {
    fn default() -> Self {
        Self {
            verdict: Verdict::Uncertain,
            confidence: 0.0,
            reasoning: None,
            used_evidence_ids: Vec::new(),
            contradicted_by: Vec::new(),
            evidence_sufficiency: None,
            facet_status: BTreeMap::new(),
        }
    }
}

/// Attribution code for a hallucination flag (H1..H6 taxonomy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HallucinationCode {
    /// Unsupported assertion
    H1,
    /// Numeric fabrication
    H2,
    /// Overconfidence
    H3,
    /// Illicit inference
    H4,
    /// Internal contradiction
    H5,
    /// Ungrounded opinion
    H6,
    #[serde(other)]
    Unknown,
}

/// Severity of a hallucination flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A single hallucination flag raised against a claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hallucination {
    /// Taxonomy code
    pub hallucination_type: HallucinationCode,

    /// Short machine-generated reason
    #[serde(default)]
    pub reason: String,

    /// Longer human-readable explanation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    /// Signal names that triggered the flag
    #[serde(default)]
    pub supporting_signals: Vec<String>,
}

/// A single extracted claim with its verification state and raw evidence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique within one analysis result
    pub claim_id: String,

    /// The asserted text as extracted
    pub claim_text: String,

    pub claim_type: ClaimType,

    pub epistemic_status: EpistemicStatus,

    /// Authoritative character offset into the source text, if the service
    /// located the claim itself. Never recomputed client-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_char: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_char: Option<usize>,

    #[serde(default)]
    pub verification: Verification,

    #[serde(default)]
    pub hallucinations: Vec<Hallucination>,

    /// Raw per-source evidence buckets
    #[serde(default)]
    pub evidence: EvidenceBuckets,
}

impl Claim {
    /// Authoritative character span, if both endpoints are present
    pub fn declared_span(&self) -> Option<(usize, usize)> {
        match (self.start_char, self.end_char) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}
