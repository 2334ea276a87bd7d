//! Evidence normalization for the inspection panel.
//!
//! Four heterogeneous source buckets come in; one flat, deduplicated,
//! verdict-ranked list of display items comes out. Pure derivation: raw
//! buckets are never mutated, and the same claim always yields the same
//! list in the same order.

pub mod normalizer;
pub mod properties;
pub mod types;

pub use normalizer::normalize_evidence;
pub use properties::property_label;
pub use types::{display_key, EvidenceItem, EvidenceRole, EvidenceSource};
