use serde::Serialize;

use crate::records::enums::{ArpRate, HwEnum};
use crate::schema::{DecodeError, Record, Value, decode};

use super::layout;
use super::parser::Sequencer;

/// Which on-disk sequencer shape the marker bytes announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SequencerFormat {
    /// Neither marker matched: the buffer carries no readable sequencer
    /// data. Terminal; callers treat the sequencer as absent, not an error.
    Undetermined,
    /// Firmware 1.x "SEQD" shape.
    Legacy,
    /// Firmware 2.x "SQ" shape.
    Canonical,
}

/// Gate time synthesized when normalizing a legacy record (75%).
pub const LEGACY_ARP_GATE_TIME: u8 = 55;
/// Rate synthesized when normalizing a legacy record ("1/16").
pub const LEGACY_ARP_RATE: ArpRate = ArpRate::Sixteenth;

/// Inspect the marker bytes once and classify the sequencer shape.
pub fn detect_format(buf: &[u8]) -> SequencerFormat {
    if let Some(marker) = buf.get(layout::MARKER_OFFSET..layout::MARKER_OFFSET + 4) {
        if marker == layout::LEGACY_MARKER {
            return SequencerFormat::Legacy;
        }
    }
    if let Some(marker) = buf.get(layout::MARKER_OFFSET..layout::MARKER_OFFSET + 2) {
        if marker == layout::CANONICAL_MARKER {
            return SequencerFormat::Canonical;
        }
    }
    SequencerFormat::Undetermined
}

/// Decode the sequencer region of a patch buffer, whichever shape it uses,
/// into the canonical representation.
///
/// A legacy decode is converted by a total Legacy -> Canonical function: the
/// step/motion payload is carried over verbatim, all 16 active step flags
/// are set (the legacy format had no such concept), and the arpeggiator
/// fields take their documented defaults. `Ok(None)` means no sequencer
/// marker was present.
pub fn resolve(buf: &[u8]) -> Result<Option<Sequencer>, DecodeError> {
    match detect_format(buf) {
        SequencerFormat::Undetermined => Ok(None),
        SequencerFormat::Canonical => {
            let record = decode(buf, &layout::CANONICAL_SEQUENCER)?;
            Ok(Some(Sequencer::from_canonical(record)))
        }
        SequencerFormat::Legacy => {
            let record = decode(buf, &layout::LEGACY_SEQUENCER)?;
            Ok(Some(Sequencer::from_legacy(record)))
        }
    }
}

impl Sequencer {
    fn take_payload(record: &mut Record) -> Record {
        match record.remove("sequencer_data") {
            Some(Value::Record(payload)) => payload,
            _ => panic!("sequencer schema is missing its payload record"),
        }
    }

    pub(super) fn from_canonical(mut record: Record) -> Self {
        let mut active_steps = [false; layout::STEP_COUNT];
        for (step, active) in active_steps.iter_mut().enumerate() {
            *active = record.flag(&format!("step{}_active", step + 1));
        }
        let code = record.enum_code("arp_rate");
        let arp_rate = match ArpRate::from_code(code) {
            Some(rate) => rate,
            // The decode step already rejected unmapped codes.
            None => panic!("arp_rate code {code} outside the enum table"),
        };
        Self {
            format: SequencerFormat::Canonical,
            active_steps,
            arp_gate_time: record.uint("arp_gate_time") as u8,
            arp_rate,
            payload: Self::take_payload(&mut record),
        }
    }

    pub(super) fn from_legacy(mut record: Record) -> Self {
        Self {
            format: SequencerFormat::Legacy,
            active_steps: [true; layout::STEP_COUNT],
            arp_gate_time: LEGACY_ARP_GATE_TIME,
            arp_rate: LEGACY_ARP_RATE,
            payload: Self::take_payload(&mut record),
        }
    }
}
