//! Raw evidence buckets as returned by the retrieval layer.
//!
//! Four independent source buckets, each with its own loosely-specified
//! record shape. A bucket that is missing, null, or not an array decodes as
//! empty; a malformed bucket is never an error.

use serde::{Deserialize, Deserializer, Serialize};

/// Boolean structural-alignment flags attached to structured evidence
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlignmentFlags {
    #[serde(default)]
    pub subject_match: bool,

    #[serde(default)]
    pub predicate_match: bool,

    #[serde(default)]
    pub object_match: bool,

    /// Tri-state: None when the claim carries no temporal facet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporal_match: Option<bool>,
}

impl AlignmentFlags {
    /// True when at least one structural flag is set
    pub fn any(&self) -> bool {
        self.subject_match
            || self.predicate_match
            || self.object_match
            || self.temporal_match == Some(true)
    }
}

/// One raw evidence record from any source bucket.
///
/// Every field is optional; each source populates a different subset
/// (Wikidata fills `property`/`value`, Wikipedia fills `sentence`, and so
/// on). The normalizer resolves the differences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEvidence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_id: Option<String>,

    /// Wikidata property ID, e.g. "P571"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,

    /// Structured value, e.g. a date or entity label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Retrieval relevance score in [0, 1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<AlignmentFlags>,
}

/// The four per-source evidence buckets attached to a claim
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvidenceBuckets {
    #[serde(default, deserialize_with = "lenient_records")]
    pub primary_document: Vec<RawEvidence>,

    #[serde(default, deserialize_with = "lenient_records")]
    pub wikidata: Vec<RawEvidence>,

    #[serde(default, deserialize_with = "lenient_records")]
    pub wikipedia: Vec<RawEvidence>,

    #[serde(default, deserialize_with = "lenient_records")]
    pub grokipedia: Vec<RawEvidence>,
}

impl EvidenceBuckets {
    /// True when every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.primary_document.is_empty()
            && self.wikidata.is_empty()
            && self.wikipedia.is_empty()
            && self.grokipedia.is_empty()
    }

    /// Total record count across all buckets
    pub fn len(&self) -> usize {
        self.primary_document.len()
            + self.wikidata.len()
            + self.wikipedia.len()
            + self.grokipedia.len()
    }
}

/// Decode a bucket, degrading to empty on any shape mismatch.
///
/// Individual records that fail to decode are dropped rather than poisoning
/// the rest of the bucket.
fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<RawEvidence>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}
