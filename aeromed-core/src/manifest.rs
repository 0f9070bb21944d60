//! Transport manifest document model.
//!
//! A [`TransportManifest`] is the full record describing one drone medical
//! cargo shipment: sender/receiver contacts, flight mission parameters,
//! cargo summary, pre-flight checklist and signatures, the cargo item list,
//! custody handovers, temperature checkpoints, and the destination
//! certification.
//!
//! Documents are exchanged as camelCase JSON and stored verbatim as a
//! single serialized unit. Every block tolerates absence: deserializing a
//! partial document fills defaults instead of failing, so consumers never
//! crash on a form that was saved half-finished.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a manifest.
///
/// `InTransit` and `Delivered` are only ever set directly by a dispatch
/// action and carried through; the derivation rules in
/// [`crate::lifecycle::derive_status`] never produce them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManifestStatus {
    #[default]
    Draft,
    PreFlightSigned,
    InTransit,
    Delivered,
    Completed,
    Rejected,
}

impl ManifestStatus {
    /// Canonical string form, identical to the serialized JSON value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::PreFlightSigned => "PreFlightSigned",
            Self::InTransit => "InTransit",
            Self::Delivered => "Delivered",
            Self::Completed => "Completed",
            Self::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for ManifestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UAV flight mode for the mission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightMode {
    #[default]
    #[serde(rename = "VLOS")]
    Vlos,
    #[serde(rename = "EVLOS")]
    Evlos,
    #[serde(rename = "BVLOS")]
    Bvlos,
    Auto,
    Manual,
}

/// Category of medical cargo carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CargoType {
    Medicine,
    Vaccine,
    MedicalSupplies,
    Blood,
    LabSpecimen,
    Organ,
    Other,
}

/// Required temperature band for temperature-controlled cargo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TempRange {
    #[default]
    Room,
    #[serde(rename = "2-8C")]
    Cold2To8,
    #[serde(rename = "-20C")]
    Frozen20,
    #[serde(rename = "-80C")]
    Frozen80,
    Other,
}

/// Risk classification of the cargo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskType {
    #[default]
    None,
    Biologic,
    Infectious,
    Sharp,
    Other,
}

/// Receiving result recorded at the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DestinationResult {
    Complete,
    WithRemarks,
    Rejected,
}

/// Contact block for the sending or receiving party.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactParty {
    pub unit_name: String,
    pub address: String,
    pub name: String,
    pub position: String,
    pub phone: String,
    /// Email or other contact channel.
    pub contact: String,
}

/// Flight mission parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mission {
    pub code: String,
    pub date: String,
    pub time_range: String,
    pub provider: String,
    pub pilot: String,
    pub controller: String,
    pub uav_model: String,
    pub uav_serial: String,
    pub battery_set: String,
    pub takeoff_point: String,
    pub landing_point: String,
    pub distance_km: f64,
    pub altitude_m: f64,
    pub weather: String,
    pub special_conditions: String,
    pub flight_mode: FlightMode,
}

/// Temperature-control sub-block of the cargo summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TempControl {
    pub range: TempRange,
    /// Free-form band when `range` is `Other`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_range: Option<String>,
    pub container_type: String,
    pub logger_id: String,
    pub seal_number: String,
}

/// Cargo summary block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CargoSummary {
    pub types: Vec<CargoType>,
    pub description: String,
    pub package_count: u32,
    pub urgency: String,
    pub weight_kg: f64,
    pub temp_control: TempControl,
    pub risk: RiskType,
}

/// The fixed 12-item pre-flight checklist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreFlightChecklist {
    pub identity_confirmed: bool,
    pub area_safe: bool,
    pub cargo_checked: bool,
    pub emergency_plan: bool,
    pub start_temp_recorded: bool,
    pub signal_tested: bool,
    pub labeling_checked: bool,
    pub weight_checked: bool,
    pub weather_checked: bool,
    pub docs_checked: bool,
    pub system_checked: bool,
    pub eta_notified: bool,
}

/// One named signature slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignatureSlot {
    pub name: String,
    pub signed: bool,
    pub time: String,
}

/// Pre-flight signature slots. The supervisor slot is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreFlightSignatures {
    pub sender: SignatureSlot,
    pub pilot: SignatureSlot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<SignatureSlot>,
}

/// Pre-flight validation block: checklist plus signatures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreFlight {
    pub checklist: PreFlightChecklist,
    pub signatures: PreFlightSignatures,
}

/// One cargo line entry. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CargoItem {
    pub id: String,
    pub description: String,
    pub qty: f64,
    pub unit: String,
    pub lot_no: String,
    pub expiry_date: String,
    pub temp_range: String,
    pub remarks: String,
}

/// One custody-transfer event in the handover log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HandoverEntry {
    pub id: String,
    pub date_time: String,
    pub from_name: String,
    pub to_name: String,
    pub id_card: String,
    pub signed: bool,
}

/// One temperature checkpoint reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TempLogEntry {
    pub id: String,
    pub checkpoint: String,
    pub date_time: String,
    pub temp: f64,
    pub recorder_name: String,
    pub remarks: String,
}

/// Temperature logger configuration for the shipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TempLogConfig {
    pub logger_id: String,
    pub target_range: String,
}

/// Receiver signature at the destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiverSignature {
    pub name: String,
    pub position: String,
    pub signed: bool,
    pub date: String,
    pub time: String,
}

/// Controller counter-signature at the destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControllerSignature {
    pub name: String,
    pub signed: bool,
    pub date: String,
    pub time: String,
}

/// Destination certification block.
///
/// `result` stays `None` until the receiving party records an outcome;
/// the lifecycle derivation keys off `Complete` and `Rejected`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Destination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<DestinationResult>,
    pub remarks: String,
    pub receiver_sign: ReceiverSignature,
    pub controller_sign: ControllerSignature,
}

/// The full transport manifest document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransportManifest {
    /// Caller-supplied identifier, immutable once stored.
    pub id: String,
    pub status: ManifestStatus,

    // === Header ===
    pub unit_name: String,
    pub doc_number: String,
    pub project_name: String,
    pub version: String,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:mm
    pub time: String,

    // === Section 1: Points ===
    pub sender: ContactParty,
    pub receiver: ContactParty,

    // === Section 2: Mission ===
    pub mission: Mission,

    // === Section 3: Cargo summary ===
    pub cargo: CargoSummary,

    // === Section 4: Pre-flight validation ===
    pub pre_flight: PreFlight,

    // === Section 5: Items ===
    pub items: Vec<CargoItem>,

    // === Section 6: Handover log ===
    pub handovers: Vec<HandoverEntry>,

    // === Section 7: Temperature log ===
    pub temp_logs: Vec<TempLogEntry>,
    pub temp_log_config: TempLogConfig,

    // === Section 8: Anomalies ===
    pub anomalies: String,

    // === Section 9: Destination certification ===
    pub destination: Destination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_deserializes_to_defaults() {
        let doc: TransportManifest = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, TransportManifest::default());
        assert!(doc.id.is_empty());
        assert_eq!(doc.status, ManifestStatus::Draft);
        assert!(doc.pre_flight.signatures.supervisor.is_none());
        assert!(doc.destination.result.is_none());
    }

    #[test]
    fn partial_nested_blocks_are_tolerated() {
        // A half-finished form: signatures present but no checklist,
        // destination block with only a receiver name.
        let doc: TransportManifest = serde_json::from_str(
            r#"{
                "id": "MAN-001",
                "preFlight": {
                    "signatures": { "sender": { "name": "A. Field", "signed": true } }
                },
                "destination": { "receiverSign": { "name": "B. Clinic" } }
            }"#,
        )
        .unwrap();

        assert_eq!(doc.id, "MAN-001");
        assert!(doc.pre_flight.signatures.sender.signed);
        assert!(doc.pre_flight.signatures.sender.time.is_empty());
        assert!(!doc.pre_flight.signatures.pilot.signed);
        assert!(!doc.pre_flight.checklist.identity_confirmed);
        assert_eq!(doc.destination.receiver_sign.name, "B. Clinic");
        assert!(doc.destination.result.is_none());
    }

    #[test]
    fn field_names_round_trip_as_camel_case() {
        let mut doc = TransportManifest::default();
        doc.id = "MAN-002".into();
        doc.doc_number = "DOC-7".into();
        doc.cargo.temp_control.range = TempRange::Cold2To8;
        doc.cargo.types = vec![CargoType::Vaccine, CargoType::LabSpecimen];
        doc.mission.flight_mode = FlightMode::Bvlos;

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["docNumber"], "DOC-7");
        assert_eq!(json["cargo"]["tempControl"]["range"], "2-8C");
        assert_eq!(json["cargo"]["types"][1], "LabSpecimen");
        assert_eq!(json["mission"]["flightMode"], "BVLOS");

        let back: TransportManifest = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn sequences_preserve_insertion_order() {
        let mut doc = TransportManifest::default();
        for n in 0..5 {
            doc.items.push(CargoItem {
                id: format!("item-{n}"),
                description: format!("vial batch {n}"),
                qty: 10.0,
                unit: "box".into(),
                ..Default::default()
            });
            doc.temp_logs.push(TempLogEntry {
                id: format!("log-{n}"),
                checkpoint: format!("CP{n}"),
                temp: 4.0 + n as f64 * 0.1,
                ..Default::default()
            });
        }

        let json = serde_json::to_string(&doc).unwrap();
        let back: TransportManifest = serde_json::from_str(&json).unwrap();

        let ids: Vec<_> = back.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["item-0", "item-1", "item-2", "item-3", "item-4"]);
        let cps: Vec<_> = back.temp_logs.iter().map(|l| l.checkpoint.as_str()).collect();
        assert_eq!(cps, ["CP0", "CP1", "CP2", "CP3", "CP4"]);
    }

    #[test]
    fn status_string_forms_match_serialization() {
        for status in [
            ManifestStatus::Draft,
            ManifestStatus::PreFlightSigned,
            ManifestStatus::InTransit,
            ManifestStatus::Delivered,
            ManifestStatus::Completed,
            ManifestStatus::Rejected,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn temp_range_uses_band_labels() {
        assert_eq!(
            serde_json::to_string(&TempRange::Frozen80).unwrap(),
            "\"-80C\""
        );
        let parsed: TempRange = serde_json::from_str("\"-20C\"").unwrap();
        assert_eq!(parsed, TempRange::Frozen20);
    }
}
