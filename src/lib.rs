//! claimlens - client core for a claim-verification review tool
//!
//! The surrounding application lets a user paste text, send it to an
//! analysis backend, and inspect the extracted claims with their verdicts
//! and supporting evidence. This crate is the part that does data shaping
//! rather than presentation:
//!
//! - `spans`: locate each claim in the source text (declared offsets, exact
//!   substring, token-proximity fallback) and arbitrate overlaps into a
//!   plain/marked segment sequence that reconstructs the text exactly.
//! - `evidence`: flatten the four per-source evidence buckets into one
//!   deduplicated, verdict-ranked, explainable list.
//! - `verdict`: reconcile the coarse verdict with per-facet support into
//!   the verdict actually rendered.
//! - `domain`: the backend's JSON contract.
//!
//! Everything is synchronous and pure: no I/O, no shared state, and the
//! same inputs always produce bit-identical outputs. Failure to place or
//! decode an individual record degrades to omitting it from the derived
//! view, never to an error; the only fallible call is decoding the
//! top-level backend payload.

pub mod domain;
pub mod error;
pub mod evidence;
pub mod spans;
pub mod verdict;

// Re-export main types at crate root for convenience
pub use domain::{AnalysisReport, Claim, Verdict, Verification};
pub use error::ReportError;
pub use evidence::{normalize_evidence, EvidenceItem, EvidenceRole, EvidenceSource};
pub use spans::{arbitrate, candidate_spans, locate_claim, Segment, SpanCandidate};
pub use verdict::{project_verdict, DisplayVerdict};
