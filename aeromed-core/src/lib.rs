//! AeroMed Core - transport manifest domain library
//!
//! This crate provides the data model and lifecycle rules for drone
//! medical-cargo transport manifests:
//!
//! - The [`TransportManifest`] document and its nested blocks
//! - [`ManifestStatus`] and the pure status-derivation rule
//! - Minimal create-time validation
//!
//! Everything here is pure and side-effect free; persistence and the HTTP
//! surface live in `aeromed-server`.
//!
//! # Example
//!
//! ```
//! use aeromed_core::{derive_status, DestinationResult, ManifestStatus, TransportManifest};
//!
//! let mut doc = TransportManifest::default();
//! doc.id = "MAN-2026-0042".into();
//! doc.status = ManifestStatus::InTransit;
//!
//! // Nothing signed, no destination result: the caller's status stands.
//! assert_eq!(derive_status(&doc), ManifestStatus::InTransit);
//!
//! // A rejected destination overrides everything else.
//! doc.destination.result = Some(DestinationResult::Rejected);
//! assert_eq!(derive_status(&doc), ManifestStatus::Rejected);
//! ```

pub mod error;
pub mod lifecycle;
pub mod manifest;

// Re-export main types for convenience
pub use error::{ManifestError, Result};
pub use lifecycle::{derive_status, validate_for_create};
pub use manifest::{
    CargoItem, CargoSummary, CargoType, ContactParty, ControllerSignature, Destination,
    DestinationResult, FlightMode, HandoverEntry, ManifestStatus, Mission, PreFlight,
    PreFlightChecklist, PreFlightSignatures, ReceiverSignature, RiskType, SignatureSlot,
    TempControl, TempLogConfig, TempLogEntry, TempRange, TransportManifest,
};
