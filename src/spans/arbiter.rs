//! Overlap arbitration: turn span candidates into renderable segments.
//!
//! Candidates are sorted by start (stable, so resolver order breaks ties)
//! and walked left to right. A candidate starting inside previously accepted
//! territory is discarded whole; earlier start wins. The emitted segment
//! sequence reconstructs the source text exactly.

use serde::Serialize;
use tracing::debug;

use super::resolver::SpanCandidate;

/// One slice of the annotated source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Unhighlighted text between claims
    Plain { text: String },
    /// Text covered by exactly one claim's span
    Marked {
        text: String,
        claim_id: String,
        /// Byte range into the source, for the inspection panel
        start: usize,
        end: usize,
    },
}

impl Segment {
    /// The raw text of this segment
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain { text } => text,
            Segment::Marked { text, .. } => text,
        }
    }

    pub fn is_marked(&self) -> bool {
        matches!(self, Segment::Marked { .. })
    }
}

/// Arbitrate overlaps and slice the source into segments.
///
/// Accepts unsorted candidates straight from the resolver. Candidates whose
/// span is empty, reaches past the source, or lands off a char boundary are
/// discarded; the resolver does not produce such spans but the walk must not
/// panic on them either.
pub fn arbitrate(source: &str, mut candidates: Vec<SpanCandidate>) -> Vec<Segment> {
    candidates.sort_by_key(|c| c.start);

    let mut segments = Vec::new();
    let mut last_index = 0usize;

    for candidate in candidates {
        if candidate.start >= candidate.end
            || candidate.end > source.len()
            || !source.is_char_boundary(candidate.start)
            || !source.is_char_boundary(candidate.end)
        {
            debug!(claim_id = %candidate.claim_id, "malformed span discarded");
            continue;
        }
        if candidate.start < last_index {
            debug!(
                claim_id = %candidate.claim_id,
                start = candidate.start,
                "overlapping span discarded, earlier start wins"
            );
            continue;
        }

        if candidate.start > last_index {
            segments.push(Segment::Plain {
                text: source[last_index..candidate.start].to_string(),
            });
        }
        segments.push(Segment::Marked {
            text: source[candidate.start..candidate.end].to_string(),
            claim_id: candidate.claim_id,
            start: candidate.start,
            end: candidate.end,
        });
        last_index = candidate.end;
    }

    if last_index < source.len() {
        segments.push(Segment::Plain {
            text: source[last_index..].to_string(),
        });
    }

    segments
}
