//! Flatten, deduplicate, and rank a claim's raw evidence buckets.
//!
//! Bucket order is fixed (primary document, Wikidata, Wikipedia,
//! Grokipedia); every downstream tie-break preserves it because dedup keeps
//! first occurrences and the ranking sort is stable.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::{Claim, RawEvidence, Verdict, Verification};

use super::properties::property_label;
use super::types::{display_key, EvidenceItem, EvidenceRole, EvidenceSource};

/// Shown when a record carries no narrative text in any of its fields
const NO_SNIPPET_PLACEHOLDER: &str = "No narrative snippet found for this record.";

/// Build the display-ready evidence list for one claim.
///
/// Missing or malformed buckets were already decoded as empty, so the worst
/// case here is an empty result, never an error. The caller renders an empty
/// list as an explicit no-evidence state, using `evidence_sufficiency` to
/// distinguish "not searched" from "searched but insufficient".
pub fn normalize_evidence(claim: &Claim) -> Vec<EvidenceItem> {
    let buckets = [
        (EvidenceSource::PrimaryDocument, &claim.evidence.primary_document),
        (EvidenceSource::Wikidata, &claim.evidence.wikidata),
        (EvidenceSource::Wikipedia, &claim.evidence.wikipedia),
        (EvidenceSource::Grokipedia, &claim.evidence.grokipedia),
    ];

    let mut items = Vec::with_capacity(claim.evidence.len());
    for (source, bucket) in buckets {
        for (index, raw) in bucket.iter().enumerate() {
            items.push(build_item(claim, source, index, raw));
        }
    }

    dedup_by_id(&mut items);
    rank(&mut items, claim.verification.verdict);
    items
}

fn build_item(
    claim: &Claim,
    source: EvidenceSource,
    bucket_index: usize,
    raw: &RawEvidence,
) -> EvidenceItem {
    let role = classify_role(&claim.verification, raw.evidence_id.as_deref());

    EvidenceItem {
        display_key: display_key(
            &claim.claim_id,
            source,
            bucket_index,
            raw.evidence_id.as_deref(),
        ),
        evidence_id: raw.evidence_id.clone(),
        title: title_for(source, raw),
        snippet: snippet_for(source, raw),
        explanation: explanation_for(role),
        role,
        url: raw.url.clone(),
        source,
        score: raw.score.unwrap_or(0.0),
        value: raw.value.clone(),
        badges: badges_for(source, raw),
    }
}

/// A record is contradicting or supporting only if the verifier cited its ID
fn classify_role(verification: &Verification, evidence_id: Option<&str>) -> EvidenceRole {
    let Some(id) = evidence_id else {
        return EvidenceRole::Related;
    };

    if verification.contradicted_by.iter().any(|c| c == id) {
        EvidenceRole::Contradicting
    } else if verification.used_evidence_ids.iter().any(|u| u == id) {
        EvidenceRole::Supporting
    } else {
        EvidenceRole::Related
    }
}

fn explanation_for(role: EvidenceRole) -> String {
    match role {
        EvidenceRole::Contradicting => {
            "This record conflicts with the claim and contributed to its refutation.".to_string()
        }
        EvidenceRole::Supporting => {
            "This record was cited in support of the claim's verdict.".to_string()
        }
        EvidenceRole::Related => {
            "This record is related to the claim but did not decide the verdict.".to_string()
        }
    }
}

fn title_for(source: EvidenceSource, raw: &RawEvidence) -> String {
    match source {
        EvidenceSource::PrimaryDocument => "Primary document".to_string(),
        EvidenceSource::Wikidata => match raw.property.as_deref() {
            // Unknown property codes pass through verbatim
            Some(pid) => format!("Wikidata {}", property_label(pid).unwrap_or(pid)),
            None => "Wikidata statement".to_string(),
        },
        EvidenceSource::Wikipedia => "Wikipedia passage".to_string(),
        EvidenceSource::Grokipedia => "Grokipedia excerpt".to_string(),
    }
}

/// Source-specific fallback chain for narrative text
fn snippet_for(source: EvidenceSource, raw: &RawEvidence) -> String {
    let chain: [&Option<String>; 4] = match source {
        EvidenceSource::PrimaryDocument => [&raw.snippet, &raw.text, &raw.sentence, &raw.value],
        EvidenceSource::Wikidata => [&raw.snippet, &raw.sentence, &raw.text, &raw.value],
        EvidenceSource::Wikipedia => [&raw.snippet, &raw.sentence, &raw.text, &raw.value],
        EvidenceSource::Grokipedia => [&raw.text, &raw.snippet, &raw.sentence, &raw.value],
    };

    chain
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| NO_SNIPPET_PLACEHOLDER.to_string())
}

fn badges_for(source: EvidenceSource, raw: &RawEvidence) -> Vec<String> {
    let mut badges = vec![source.as_str().to_string()];

    if let Some(alignment) = &raw.alignment {
        if alignment.subject_match {
            badges.push("subject_match".to_string());
        }
        if alignment.predicate_match {
            badges.push("predicate_match".to_string());
        }
        if alignment.object_match {
            badges.push("object_match".to_string());
        }
        if alignment.temporal_match == Some(true) {
            badges.push("temporal_match".to_string());
        }
    }

    if let Some(score) = raw.score {
        badges.push(format!("score:{score:.2}"));
    }

    badges
}

/// Drop repeated IDs, keeping the first occurrence. Records without an ID
/// have no stable identity to compare and always pass through.
fn dedup_by_id(items: &mut Vec<EvidenceItem>) {
    let mut seen: HashSet<String> = HashSet::new();
    items.retain(|item| match &item.evidence_id {
        Some(id) if !id.is_empty() => seen.insert(id.clone()),
        _ => true,
    });
}

/// Verdict-dependent ranking (stable, so bucket-then-index order breaks
/// ties):
///
/// - REFUTED: contradicting records first, then by descending score.
/// - SUPPORTED / SUPPORTED_WEAK: supporting records first, then by
///   descending score.
/// - anything else: descending score only.
fn rank(items: &mut [EvidenceItem], verdict: Verdict) {
    match verdict {
        Verdict::Refuted => items.sort_by(|a, b| {
            role_tier(a, EvidenceRole::Contradicting)
                .cmp(&role_tier(b, EvidenceRole::Contradicting))
                .then_with(|| by_score_desc(a, b))
        }),
        Verdict::Supported | Verdict::SupportedWeak => items.sort_by(|a, b| {
            role_tier(a, EvidenceRole::Supporting)
                .cmp(&role_tier(b, EvidenceRole::Supporting))
                .then_with(|| by_score_desc(a, b))
        }),
        _ => items.sort_by(by_score_desc),
    }
}

fn role_tier(item: &EvidenceItem, first: EvidenceRole) -> u8 {
    if item.role == first {
        0
    } else {
        1
    }
}

fn by_score_desc(a: &EvidenceItem, b: &EvidenceItem) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}
