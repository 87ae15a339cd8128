use crate::records::enums::{ArpRate, HwEnum, MotionParameterId};
use crate::schema::Record;

use super::layout;
use super::version::SequencerFormat;

/// The canonical decoded sequencer.
///
/// Always carries active step flags and arpeggiator fields, regardless of
/// which on-disk shape the buffer used: a legacy decode is normalized by
/// `version::resolve` before it gets here. `format` records the shape the
/// data was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequencer {
    pub(super) format: SequencerFormat,
    pub(super) active_steps: [bool; layout::STEP_COUNT],
    pub(super) arp_gate_time: u8,
    pub(super) arp_rate: ArpRate,
    pub(super) payload: Record,
}

/// Motion configuration of one of the four slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionSlot {
    pub motion_on: bool,
    pub smooth_on: bool,
    pub parameter: MotionParameterId,
}

impl Sequencer {
    /// On-disk shape this sequencer was resolved from.
    pub fn format(&self) -> SequencerFormat {
        self.format
    }

    pub fn active_steps(&self) -> &[bool; layout::STEP_COUNT] {
        &self.active_steps
    }

    pub fn active_step(&self, step: usize) -> bool {
        self.active_steps[step]
    }

    /// 1~73, front panel 0%~100%.
    pub fn arp_gate_time(&self) -> u8 {
        self.arp_gate_time
    }

    pub fn arp_rate(&self) -> ArpRate {
        self.arp_rate
    }

    /// The shared payload record (tempo, step flags, step events).
    pub fn payload(&self) -> &Record {
        &self.payload
    }

    /// Raw tempo, 100~3000 for 10.0~300.0 BPM.
    pub fn bpm(&self) -> u16 {
        self.payload.uint("bpm") as u16
    }

    pub fn step_length(&self) -> u8 {
        self.payload.uint("step_length") as u8
    }

    pub fn step_resolution(&self) -> u8 {
        self.payload.uint("step_resolution") as u8
    }

    pub fn swing(&self) -> u8 {
        self.payload.uint("swing") as u8
    }

    /// 0~72, front panel 0%~100%.
    pub fn default_gate_time(&self) -> u8 {
        self.payload.uint("default_gate_time") as u8
    }

    pub fn step_on(&self, step: usize) -> bool {
        assert!(step < layout::STEP_COUNT);
        self.payload.flag(&format!("step{}_on", step + 1))
    }

    pub fn step_motion_on(&self, step: usize) -> bool {
        assert!(step < layout::STEP_COUNT);
        self.payload.flag(&format!("step{}_motion_on", step + 1))
    }

    pub fn motion_slot(&self, slot: usize) -> MotionSlot {
        assert!(slot < layout::MOTION_SLOT_COUNT);
        let base = format!("motion_slot{}", slot + 1);
        let code = self.payload.enum_code(&format!("{base}_parameter"));
        let parameter = match MotionParameterId::from_code(code) {
            Some(parameter) => parameter,
            // The decode step already rejected unmapped codes.
            None => panic!("motion slot parameter code {code} outside the enum table"),
        };
        MotionSlot {
            motion_on: self.payload.flag(&format!("{base}_motion_on")),
            smooth_on: self.payload.flag(&format!("{base}_smooth_on")),
            parameter,
        }
    }

    pub fn motion_slot_step_on(&self, slot: usize, step: usize) -> bool {
        assert!(slot < layout::MOTION_SLOT_COUNT && step < layout::STEP_COUNT);
        self.payload
            .flag(&format!("motion_slot{}_step{}_on", slot + 1, step + 1))
    }

    pub fn step_event(&self, step: usize) -> StepEvent<'_> {
        assert!(step < layout::STEP_COUNT);
        StepEvent {
            record: self.payload.record(&format!("step{}_event", step + 1)),
        }
    }
}

/// Typed view over one decoded step event record.
#[derive(Debug, Clone, Copy)]
pub struct StepEvent<'a> {
    record: &'a Record,
}

impl<'a> StepEvent<'a> {
    pub fn note(&self, index: usize) -> u8 {
        assert!(index < 8);
        self.record.uint(&format!("note{}", index + 1)) as u8
    }

    /// 0 marks no event, 1~127 is the velocity.
    pub fn velocity(&self, index: usize) -> u8 {
        assert!(index < 8);
        self.record.uint(&format!("velocity{}", index + 1)) as u8
    }

    /// 0~72 = 0%~100%, 73~127 = TIE.
    pub fn gate_time(&self, index: usize) -> u8 {
        assert!(index < 8);
        self.record.uint(&format!("gate_time{}", index + 1)) as u8
    }

    pub fn trigger_switch(&self, index: usize) -> bool {
        assert!(index < 8);
        self.record.flag(&format!("trigger_switch{}", index + 1))
    }

    pub fn motion(&self, slot: usize) -> Motion<'a> {
        assert!(slot < layout::MOTION_SLOT_COUNT);
        Motion {
            record: self.record.record(&format!("motion_slot{}", slot + 1)),
        }
    }
}

/// Typed view over one motion record.
#[derive(Debug, Clone, Copy)]
pub struct Motion<'a> {
    record: &'a Record,
}

impl Motion<'_> {
    /// Reassemble the 10-bit sample point `index` from its 8-bit high part
    /// and 2-bit low part.
    pub fn sample(&self, index: usize) -> u16 {
        assert!(index < layout::MOTION_POINT_COUNT);
        let high = self.record.uint(&format!("data{}_high", index + 1)) as u16;
        let low = self.record.uint(&format!("data{}_low", index + 1)) as u16;
        (high << 2) | low
    }
}
