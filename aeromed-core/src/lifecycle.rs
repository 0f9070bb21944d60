//! Manifest lifecycle rules: create validation and status derivation.
//!
//! Both functions are pure and stateless; callers apply them before
//! handing a document to the store.

use crate::error::{ManifestError, Result};
use crate::manifest::{DestinationResult, ManifestStatus, TransportManifest};

/// Validate a document for creation.
///
/// The only requirement is a non-empty `id`; everything else may be filled
/// in later, so a draft saved straight from a blank form is accepted.
pub fn validate_for_create(doc: &TransportManifest) -> Result<()> {
    if doc.id.is_empty() {
        return Err(ManifestError::Validation("missing id".into()));
    }
    Ok(())
}

/// Compute the status to persist for an updated document.
///
/// The checks run in a fixed order and each later match overwrites the
/// earlier result:
///
/// 1. both pre-flight signatures signed → `PreFlightSigned`
/// 2. destination result `Complete` → `Completed`
/// 3. destination result `Rejected` → `Rejected`
///
/// When none match, the caller-supplied status stands; `InTransit` and
/// `Delivered` are only ever carried through this way. Nothing demotes a
/// status and no transition is rejected, so a document resubmitted with
/// stale signature flags and no destination result will re-derive
/// `PreFlightSigned` even from `Completed`.
pub fn derive_status(doc: &TransportManifest) -> ManifestStatus {
    let mut status = doc.status;

    if doc.pre_flight.signatures.sender.signed && doc.pre_flight.signatures.pilot.signed {
        status = ManifestStatus::PreFlightSigned;
    }
    if doc.destination.result == Some(DestinationResult::Complete) {
        status = ManifestStatus::Completed;
    }
    if doc.destination.result == Some(DestinationResult::Rejected) {
        status = ManifestStatus::Rejected;
    }

    status
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_doc() -> TransportManifest {
        let mut doc = TransportManifest::default();
        doc.id = "MAN-100".into();
        doc.pre_flight.signatures.sender.signed = true;
        doc.pre_flight.signatures.pilot.signed = true;
        doc
    }

    #[test]
    fn missing_id_is_rejected() {
        let doc = TransportManifest::default();
        let err = validate_for_create(&doc).unwrap_err();
        assert_eq!(err.to_string(), "validation error: missing id");
    }

    #[test]
    fn non_empty_id_is_accepted() {
        let mut doc = TransportManifest::default();
        doc.id = "MAN-001".into();
        assert!(validate_for_create(&doc).is_ok());
    }

    #[test]
    fn both_signatures_derive_pre_flight_signed() {
        assert_eq!(derive_status(&signed_doc()), ManifestStatus::PreFlightSigned);
    }

    #[test]
    fn one_signature_is_not_enough() {
        let mut doc = signed_doc();
        doc.pre_flight.signatures.pilot.signed = false;
        assert_eq!(derive_status(&doc), ManifestStatus::Draft);
    }

    #[test]
    fn complete_destination_overrides_signatures() {
        let mut doc = signed_doc();
        doc.destination.result = Some(DestinationResult::Complete);
        assert_eq!(derive_status(&doc), ManifestStatus::Completed);
    }

    #[test]
    fn rejected_destination_wins_over_everything() {
        let mut doc = signed_doc();
        doc.destination.result = Some(DestinationResult::Rejected);
        assert_eq!(derive_status(&doc), ManifestStatus::Rejected);
    }

    #[test]
    fn with_remarks_result_derives_nothing() {
        let mut doc = TransportManifest::default();
        doc.status = ManifestStatus::Delivered;
        doc.destination.result = Some(DestinationResult::WithRemarks);
        assert_eq!(derive_status(&doc), ManifestStatus::Delivered);
    }

    #[test]
    fn unmatched_documents_pass_the_caller_status_through() {
        let mut doc = TransportManifest::default();
        doc.status = ManifestStatus::InTransit;
        assert_eq!(derive_status(&doc), ManifestStatus::InTransit);
    }

    #[test]
    fn stale_signatures_re_derive_over_completed() {
        // Documented forward-biased weakness: no rule demotes or guards,
        // so a completed manifest resubmitted without a destination result
        // falls back to what its signature flags say.
        let mut doc = signed_doc();
        doc.status = ManifestStatus::Completed;
        doc.destination.result = None;
        assert_eq!(derive_status(&doc), ManifestStatus::PreFlightSigned);
    }
}
