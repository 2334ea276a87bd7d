//! Normalized evidence types for the inspection panel.
//!
//! An [`EvidenceItem`] is derived fresh from a claim's raw buckets each time
//! evidence is requested for display; it is never persisted or mutated.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Which bucket a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceSource {
    PrimaryDocument,
    Wikidata,
    Wikipedia,
    Grokipedia,
}

impl EvidenceSource {
    /// Wire/badge name, identical to the bucket key
    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceSource::PrimaryDocument => "primary_document",
            EvidenceSource::Wikidata => "wikidata",
            EvidenceSource::Wikipedia => "wikipedia",
            EvidenceSource::Grokipedia => "grokipedia",
        }
    }
}

/// How a record relates to the claim's verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceRole {
    /// Listed in `contradicted_by`
    Contradicting,
    /// Listed in `used_evidence_ids`
    Supporting,
    /// Retrieved but not cited either way
    Related,
}

/// One display-ready evidence record
#[derive(Debug, Clone, Serialize)]
pub struct EvidenceItem {
    /// Deterministic render key, stable across re-derivations
    pub display_key: String,

    /// Upstream ID, if the source assigns one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_id: Option<String>,

    /// Source-specific heading, e.g. "Wikidata inception"
    pub title: String,

    /// Narrative text, with a fixed placeholder when the record has none
    pub snippet: String,

    /// Verdict-aware one-liner describing why the record is shown
    pub explanation: String,

    pub role: EvidenceRole,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    pub source: EvidenceSource,

    /// Retrieval relevance score, 0.0 when the source reports none
    pub score: f64,

    /// Structured value for Wikidata-style records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Short machine-readable tags: bucket name, alignment flags, score
    pub badges: Vec<String>,
}

/// Deterministic display key for one record.
///
/// Hashes claim ID, bucket name, and the record's own ID when it has one,
/// its bucket index otherwise. Same inputs always produce the same key, so
/// re-deriving the list never reshuffles render identity.
pub fn display_key(
    claim_id: &str,
    source: EvidenceSource,
    bucket_index: usize,
    evidence_id: Option<&str>,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(claim_id.as_bytes());
    hasher.update(source.as_str().as_bytes());
    // Discriminator keeps the id branch and the index branch in separate
    // key spaces: evidence_id "1" must not collide with bucket index 1
    match evidence_id {
        Some(id) => {
            hasher.update(b"id:");
            hasher.update(id.as_bytes());
        }
        None => {
            hasher.update(b"idx:");
            hasher.update(bucket_index.to_string().as_bytes());
        }
    }

    let digest = hasher.finalize();
    hex::encode(&digest[..8])
}
