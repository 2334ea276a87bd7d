//! Span resolution: locate each claim in the source text.
//!
//! Three tiers, in order of trust:
//!
//! 1. **Declared offsets**: character offsets supplied by the backend are
//!    authoritative and used verbatim after bounds validation.
//! 2. **Exact substring**: first literal occurrence of the claim text.
//! 3. **Token proximity**: a case-insensitive regex requiring the claim's
//!    significant word tokens in order, each pair separated by at most 50
//!    characters of arbitrary content.
//!
//! A claim no tier can place contributes no span. That is expected, not an
//! error: offsets come from an externally generated pipeline and matching is
//! best-effort. Upstream offsets are character indices; all spans returned
//! here are UTF-8 byte offsets into the original source string.

use regex::RegexBuilder;
use tracing::debug;

use crate::domain::{Claim, ClaimType, EpistemicStatus};

/// Maximum characters of arbitrary content allowed between two claim tokens
/// in the proximity tier.
const TOKEN_GAP_CHARS: usize = 50;

/// Compiled-pattern ceiling for the proximity tier. Oversized patterns fail
/// the build and resolve as no-span.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Which tier produced a span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionMethod {
    /// Backend-declared character offsets
    Declared,
    /// First literal occurrence of the claim text
    Exact,
    /// Token-proximity regex match
    TokenProximity,
}

/// A located claim: byte span into the source plus how it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanCandidate {
    pub claim_id: String,
    /// UTF-8 byte offset, inclusive
    pub start: usize,
    /// UTF-8 byte offset, exclusive
    pub end: usize,
    pub method: ResolutionMethod,
}

/// Resolve spans for every claim that belongs in the ambient overlay.
///
/// Claims failing the eligibility filter or all three tiers are dropped
/// silently. Output order follows input order; sorting and overlap conflicts
/// are the arbiter's job.
pub fn candidate_spans(source: &str, claims: &[Claim]) -> Vec<SpanCandidate> {
    claims
        .iter()
        .filter(|claim| eligible_for_overlay(claim))
        .filter_map(|claim| locate_claim(source, claim))
        .collect()
}

/// Resolve a single claim, bypassing the eligibility filter.
///
/// Used when a claim is explicitly selected for focused inspection: even
/// claim types excluded from the ambient overlay should be locatable on
/// direct request.
pub fn locate_claim(source: &str, claim: &Claim) -> Option<SpanCandidate> {
    if let Some((start_char, end_char)) = claim.declared_span() {
        return match char_range_to_bytes(source, start_char, end_char) {
            Some((start, end)) => Some(SpanCandidate {
                claim_id: claim.claim_id.clone(),
                start,
                end,
                method: ResolutionMethod::Declared,
            }),
            None => {
                // Declared offsets are never second-guessed: invalid offsets
                // reject the claim rather than falling through to matching.
                debug!(
                    claim_id = %claim.claim_id,
                    start_char,
                    end_char,
                    "declared offsets out of bounds, claim gets no span"
                );
                None
            }
        };
    }

    if !claim.claim_text.is_empty() {
        if let Some(start) = source.find(&claim.claim_text) {
            return Some(SpanCandidate {
                claim_id: claim.claim_id.clone(),
                start,
                end: start + claim.claim_text.len(),
                method: ResolutionMethod::Exact,
            });
        }
    }

    match token_proximity_span(source, &claim.claim_text) {
        Some((start, end)) => Some(SpanCandidate {
            claim_id: claim.claim_id.clone(),
            start,
            end,
            method: ResolutionMethod::TokenProximity,
        }),
        None => {
            debug!(claim_id = %claim.claim_id, "no tier matched, claim gets no span");
            None
        }
    }
}

/// Ambient-overlay eligibility filter.
///
/// Only verifiable claim types are highlighted by default, and meta/hedged
/// assertions are excluded. Contested claims are always shown regardless of
/// type.
fn eligible_for_overlay(claim: &Claim) -> bool {
    if claim.epistemic_status == EpistemicStatus::Contested {
        return true;
    }
    if claim.epistemic_status == EpistemicStatus::NonAssertive {
        return false;
    }
    matches!(
        claim.claim_type,
        ClaimType::Temporal | ClaimType::Relation | ClaimType::FactualAttribute
    )
}

/// Convert a character range to a byte range.
///
/// Returns `None` when the range is inverted, empty, or outside the text.
fn char_range_to_bytes(source: &str, start_char: usize, end_char: usize) -> Option<(usize, usize)> {
    if start_char >= end_char {
        return None;
    }

    let mut byte_start = None;
    let mut char_count = 0;
    for (chars_seen, (byte_idx, _)) in source.char_indices().enumerate() {
        if chars_seen == start_char {
            byte_start = Some(byte_idx);
        }
        if chars_seen == end_char {
            return Some((byte_start?, byte_idx));
        }
        char_count = chars_seen + 1;
    }

    // end_char may point one past the last character
    if end_char == char_count {
        return Some((byte_start?, source.len()));
    }
    None
}

/// Tier 3: match the claim's significant tokens in order.
///
/// Tokens are alphabetic runs longer than two characters from the lowercased
/// claim text; digits and punctuation act as separators since their surface
/// form varies too much between claim and source ("$20B" vs "$20 B"). Each
/// adjacent token pair may be separated by up to [`TOKEN_GAP_CHARS`]
/// characters of anything, and matching against the original text is
/// case-insensitive so the returned span indexes the original string.
fn token_proximity_span(source: &str, claim_text: &str) -> Option<(usize, usize)> {
    let normalized: String = claim_text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphabetic() { c } else { ' ' })
        .collect();

    let tokens: Vec<String> = normalized
        .split_whitespace()
        .filter(|token| token.chars().count() > 2)
        .map(regex::escape)
        .collect();

    if tokens.is_empty() {
        return None;
    }

    let pattern = tokens.join(&format!(r"[\s\S]{{0,{TOKEN_GAP_CHARS}}}"));
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
        .ok()?;

    re.find(source).map(|m| (m.start(), m.end()))
}
