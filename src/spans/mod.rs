//! Locating claims in source text and slicing it for rendering.
//!
//! Two pure stages, re-run from scratch on every data change:
//!
//! - [`resolver`]: per-claim tiered matching (declared offsets, exact
//!   substring, token proximity) producing unsorted span candidates.
//! - [`arbiter`]: stable sort plus first-start-wins overlap resolution,
//!   emitting the plain/marked segment sequence the renderer consumes.
//!
//! Invariants: concatenating the emitted segments reproduces the source
//! byte-for-byte; marked segments never overlap and arrive sorted by start;
//! a claim contributes at most one segment.

pub mod arbiter;
pub mod resolver;

pub use arbiter::{arbitrate, Segment};
pub use resolver::{candidate_spans, locate_claim, ResolutionMethod, SpanCandidate};
