//! Wire-contract data model for the analysis backend.
//!
//! The backend computes claim extraction, verification, and hallucination
//! attribution; this client only consumes the result. Types here map the
//! JSON contract one-to-one and are read-only after decoding.

pub mod claim;
pub mod evidence_buckets;
pub mod report;

pub use claim::{
    Claim, ClaimType, EpistemicStatus, EvidenceSufficiency, FacetState, Hallucination,
    HallucinationCode, Severity, Verdict, Verification,
};
pub use evidence_buckets::{AlignmentFlags, EvidenceBuckets, RawEvidence};
pub use report::{AnalysisReport, RiskLevel};
