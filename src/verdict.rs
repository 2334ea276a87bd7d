//! Display-verdict projection.
//!
//! Reconciles the verifier's coarse verdict with the per-facet support map
//! so the rendered verdict is never more confident than the facet evidence.
//! Pure classification; the downgrade case is logged but nothing is mutated.

use serde::Serialize;
use tracing::debug;

use crate::domain::{FacetState, Verdict, Verification};

/// Verdict as rendered, after facet reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayVerdict {
    Supported,
    PartiallySupported,
    Refuted,
    Uncertain,
}

/// Project a verification result onto its display verdict.
///
/// Rule table, first match wins:
/// - REFUTED and PARTIALLY_SUPPORTED render as themselves.
/// - SUPPORTED with at least one supported facet and at least one unknown
///   facet downgrades to PARTIALLY_SUPPORTED: a claim is not fully supported
///   while part of it is unverified.
/// - SUPPORTED otherwise renders as SUPPORTED.
/// - everything else (weak, insufficient, uncertain, unknown) renders as
///   UNCERTAIN.
pub fn project_verdict(verification: &Verification) -> DisplayVerdict {
    match verification.verdict {
        Verdict::Refuted => DisplayVerdict::Refuted,
        Verdict::PartiallySupported => DisplayVerdict::PartiallySupported,
        Verdict::Supported => {
            let facets = &verification.facet_status;
            let has_supported = facets.values().any(|f| *f == FacetState::Supported);
            let has_unknown = facets.values().any(|f| *f == FacetState::Unknown);

            if has_supported && has_unknown {
                debug!(
                    facet_count = facets.len(),
                    "downgrading SUPPORTED to PARTIALLY_SUPPORTED, unverified facets remain"
                );
                DisplayVerdict::PartiallySupported
            } else {
                DisplayVerdict::Supported
            }
        }
        Verdict::SupportedWeak
        | Verdict::InsufficientEvidence
        | Verdict::Uncertain
        | Verdict::Unknown => DisplayVerdict::Uncertain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn verification(verdict: Verdict, facets: &[(&str, FacetState)]) -> Verification {
        Verification {
            verdict,
            facet_status: facets
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>(),
            ..Default::default()
        }
    }

    #[test]
    fn test_refuted_and_partial_pass_through() {
        let refuted = verification(Verdict::Refuted, &[("A", FacetState::Supported)]);
        assert_eq!(project_verdict(&refuted), DisplayVerdict::Refuted);

        let partial = verification(Verdict::PartiallySupported, &[]);
        assert_eq!(project_verdict(&partial), DisplayVerdict::PartiallySupported);
    }

    #[test]
    fn test_supported_with_unknown_facet_downgrades() {
        let v = verification(
            Verdict::Supported,
            &[("inception", FacetState::Supported), ("hq", FacetState::Unknown)],
        );
        assert_eq!(project_verdict(&v), DisplayVerdict::PartiallySupported);
    }

    #[test]
    fn test_supported_with_all_facets_supported_stays_supported() {
        let v = verification(Verdict::Supported, &[("inception", FacetState::Supported)]);
        assert_eq!(project_verdict(&v), DisplayVerdict::Supported);
    }

    #[test]
    fn test_supported_with_no_facets_stays_supported() {
        let v = verification(Verdict::Supported, &[]);
        assert_eq!(project_verdict(&v), DisplayVerdict::Supported);
    }

    #[test]
    fn test_unknown_facets_alone_do_not_downgrade() {
        // Downgrade requires at least one supported facet as well
        let v = verification(Verdict::Supported, &[("hq", FacetState::Unknown)]);
        assert_eq!(project_verdict(&v), DisplayVerdict::Supported);
    }

    #[test]
    fn test_everything_else_is_uncertain() {
        for verdict in [
            Verdict::SupportedWeak,
            Verdict::InsufficientEvidence,
            Verdict::Uncertain,
            Verdict::Unknown,
        ] {
            let v = verification(verdict, &[("A", FacetState::Supported)]);
            assert_eq!(project_verdict(&v), DisplayVerdict::Uncertain);
        }
    }

    #[test]
    fn test_projection_does_not_mutate_input() {
        let v = verification(
            Verdict::Supported,
            &[("a", FacetState::Supported), ("b", FacetState::Unknown)],
        );
        let before = v.facet_status.clone();
        let _ = project_verdict(&v);
        assert_eq!(v.facet_status, before);
        assert_eq!(v.verdict, Verdict::Supported);
    }
}
