use crate::records::enums::{ARP_RATE, MOTION_PARAMETER_ID};
use crate::schema::{Constraint, FieldDescriptor as F, Schema};

/// Offset of the sequencer format marker within the patch buffer.
pub const MARKER_OFFSET: usize = 160;
/// Firmware 1.x marker.
pub const LEGACY_MARKER: &[u8; 4] = b"SEQD";
/// Firmware 2.x marker; the freed two bytes hold the active step flags.
pub const CANONICAL_MARKER: &[u8; 2] = b"SQ";

pub const STEP_COUNT: usize = 16;
pub const STEP_STRIDE: usize = 52;
pub const MOTION_SLOT_COUNT: usize = 4;
pub const MOTION_POINT_COUNT: usize = 5;

/// Motion data for one slot of one step: five 10-bit sample points split
/// into an 8-bit high part and a 2-bit low part each.
pub static MOTION: Schema = Schema {
    name: "motion",
    fields: &[
        F::uint("data1_high", 0, 1),
        F::uint("data2_high", 1, 1),
        F::uint("data3_high", 2, 1),
        F::uint("data4_high", 3, 1),
        F::uint("data5_high", 4, 1),
        F::bit_range("data1_low", 5, 0, 1),
        F::bit_range("data2_low", 5, 2, 3),
        F::bit_range("data3_low", 5, 4, 5),
        F::bit_range("data4_low", 5, 6, 7),
        F::bit_range("data5_low", 6, 0, 1),
    ],
};

/// One sequencer step: 8 note/velocity/gate-time triplets plus 4 motion
/// slots. Gate times 0~72 map to 0%~100%; 73~127 mean TIE (the note holds
/// into the next step when its trigger switch is clear).
pub static STEP_EVENT: Schema = Schema {
    name: "step_event",
    fields: &[
        F::ranged("note1", 0, 1, 0, 127),
        F::ranged("note2", 1, 1, 0, 127),
        F::ranged("note3", 2, 1, 0, 127),
        F::ranged("note4", 3, 1, 0, 127),
        F::ranged("note5", 4, 1, 0, 127),
        F::ranged("note6", 5, 1, 0, 127),
        F::ranged("note7", 6, 1, 0, 127),
        F::ranged("note8", 7, 1, 0, 127),
        // 0 = no event, 1~127 = velocity
        F::ranged("velocity1", 8, 1, 0, 127),
        F::ranged("velocity2", 9, 1, 0, 127),
        F::ranged("velocity3", 10, 1, 0, 127),
        F::ranged("velocity4", 11, 1, 0, 127),
        F::ranged("velocity5", 12, 1, 0, 127),
        F::ranged("velocity6", 13, 1, 0, 127),
        F::ranged("velocity7", 14, 1, 0, 127),
        F::ranged("velocity8", 15, 1, 0, 127),
        F::bit_range("gate_time1", 16, 0, 6).with(Constraint::Range { min: 0, max: 127 }),
        F::bit("trigger_switch1", 16, 7),
        F::bit_range("gate_time2", 17, 0, 6).with(Constraint::Range { min: 0, max: 127 }),
        F::bit("trigger_switch2", 17, 7),
        F::bit_range("gate_time3", 18, 0, 6).with(Constraint::Range { min: 0, max: 127 }),
        F::bit("trigger_switch3", 18, 7),
        F::bit_range("gate_time4", 19, 0, 6).with(Constraint::Range { min: 0, max: 127 }),
        F::bit("trigger_switch4", 19, 7),
        F::bit_range("gate_time5", 20, 0, 6).with(Constraint::Range { min: 0, max: 127 }),
        F::bit("trigger_switch5", 20, 7),
        F::bit_range("gate_time6", 21, 0, 6).with(Constraint::Range { min: 0, max: 127 }),
        F::bit("trigger_switch6", 21, 7),
        F::bit_range("gate_time7", 22, 0, 6).with(Constraint::Range { min: 0, max: 127 }),
        F::bit("trigger_switch7", 22, 7),
        F::bit_range("gate_time8", 23, 0, 6).with(Constraint::Range { min: 0, max: 127 }),
        F::bit("trigger_switch8", 23, 7),
        F::record("motion_slot1", 24, &MOTION),
        F::record("motion_slot2", 31, &MOTION),
        F::record("motion_slot3", 38, &MOTION),
        F::record("motion_slot4", 45, &MOTION),
    ],
};

/// Sequencer payload shared by both on-disk shapes. Offsets are absolute
/// within the patch buffer (the wrappers decode this schema in overlay
/// mode), matching the implementation guide's SEQUENCER DATA table.
pub static SEQ_PAYLOAD: Schema = Schema {
    name: "sequencer_data",
    fields: &[
        // 100~3000 = 10.0~300.0 BPM
        F::ranged("bpm", 164, 2, 100, 3000),
        F::ranged("step_length", 166, 1, 1, 16),
        // 0~4 = 1/16,1/8,1/4,1/2,1/1
        F::ranged("step_resolution", 167, 1, 0, 4),
        // stored unsigned despite the -75~+75 front-panel range
        F::ranged("swing", 168, 1, 0, 150),
        // 0~72 = 0%~100%
        F::ranged("default_gate_time", 169, 1, 0, 72),
        F::bit("step1_on", 170, 0),
        F::bit("step2_on", 170, 1),
        F::bit("step3_on", 170, 2),
        F::bit("step4_on", 170, 3),
        F::bit("step5_on", 170, 4),
        F::bit("step6_on", 170, 5),
        F::bit("step7_on", 170, 6),
        F::bit("step8_on", 170, 7),
        F::bit("step9_on", 171, 0),
        F::bit("step10_on", 171, 1),
        F::bit("step11_on", 171, 2),
        F::bit("step12_on", 171, 3),
        F::bit("step13_on", 171, 4),
        F::bit("step14_on", 171, 5),
        F::bit("step15_on", 171, 6),
        F::bit("step16_on", 171, 7),
        F::bit("step1_motion_on", 172, 0),
        F::bit("step2_motion_on", 172, 1),
        F::bit("step3_motion_on", 172, 2),
        F::bit("step4_motion_on", 172, 3),
        F::bit("step5_motion_on", 172, 4),
        F::bit("step6_motion_on", 172, 5),
        F::bit("step7_motion_on", 172, 6),
        F::bit("step8_motion_on", 172, 7),
        F::bit("step9_motion_on", 173, 0),
        F::bit("step10_motion_on", 173, 1),
        F::bit("step11_motion_on", 173, 2),
        F::bit("step12_motion_on", 173, 3),
        F::bit("step13_motion_on", 173, 4),
        F::bit("step14_motion_on", 173, 5),
        F::bit("step15_motion_on", 173, 6),
        F::bit("step16_motion_on", 173, 7),
        F::bit("motion_slot1_motion_on", 174, 0),
        F::bit("motion_slot1_smooth_on", 174, 1),
        F::enumeration("motion_slot1_parameter", 175, &MOTION_PARAMETER_ID),
        F::bit("motion_slot2_motion_on", 176, 0),
        F::bit("motion_slot2_smooth_on", 176, 1),
        F::enumeration("motion_slot2_parameter", 177, &MOTION_PARAMETER_ID),
        F::bit("motion_slot3_motion_on", 178, 0),
        F::bit("motion_slot3_smooth_on", 178, 1),
        F::enumeration("motion_slot3_parameter", 179, &MOTION_PARAMETER_ID),
        F::bit("motion_slot4_motion_on", 180, 0),
        F::bit("motion_slot4_smooth_on", 180, 1),
        F::enumeration("motion_slot4_parameter", 181, &MOTION_PARAMETER_ID),
        F::bit("motion_slot1_step1_on", 182, 0),
        F::bit("motion_slot1_step2_on", 182, 1),
        F::bit("motion_slot1_step3_on", 182, 2),
        F::bit("motion_slot1_step4_on", 182, 3),
        F::bit("motion_slot1_step5_on", 182, 4),
        F::bit("motion_slot1_step6_on", 182, 5),
        F::bit("motion_slot1_step7_on", 182, 6),
        F::bit("motion_slot1_step8_on", 182, 7),
        F::bit("motion_slot1_step9_on", 183, 0),
        F::bit("motion_slot1_step10_on", 183, 1),
        F::bit("motion_slot1_step11_on", 183, 2),
        F::bit("motion_slot1_step12_on", 183, 3),
        F::bit("motion_slot1_step13_on", 183, 4),
        F::bit("motion_slot1_step14_on", 183, 5),
        F::bit("motion_slot1_step15_on", 183, 6),
        F::bit("motion_slot1_step16_on", 183, 7),
        F::bit("motion_slot2_step1_on", 184, 0),
        F::bit("motion_slot2_step2_on", 184, 1),
        F::bit("motion_slot2_step3_on", 184, 2),
        F::bit("motion_slot2_step4_on", 184, 3),
        F::bit("motion_slot2_step5_on", 184, 4),
        F::bit("motion_slot2_step6_on", 184, 5),
        F::bit("motion_slot2_step7_on", 184, 6),
        F::bit("motion_slot2_step8_on", 184, 7),
        F::bit("motion_slot2_step9_on", 185, 0),
        F::bit("motion_slot2_step10_on", 185, 1),
        F::bit("motion_slot2_step11_on", 185, 2),
        F::bit("motion_slot2_step12_on", 185, 3),
        F::bit("motion_slot2_step13_on", 185, 4),
        F::bit("motion_slot2_step14_on", 185, 5),
        F::bit("motion_slot2_step15_on", 185, 6),
        F::bit("motion_slot2_step16_on", 185, 7),
        F::bit("motion_slot3_step1_on", 186, 0),
        F::bit("motion_slot3_step2_on", 186, 1),
        F::bit("motion_slot3_step3_on", 186, 2),
        F::bit("motion_slot3_step4_on", 186, 3),
        F::bit("motion_slot3_step5_on", 186, 4),
        F::bit("motion_slot3_step6_on", 186, 5),
        F::bit("motion_slot3_step7_on", 186, 6),
        F::bit("motion_slot3_step8_on", 186, 7),
        F::bit("motion_slot3_step9_on", 187, 0),
        F::bit("motion_slot3_step10_on", 187, 1),
        F::bit("motion_slot3_step11_on", 187, 2),
        F::bit("motion_slot3_step12_on", 187, 3),
        F::bit("motion_slot3_step13_on", 187, 4),
        F::bit("motion_slot3_step14_on", 187, 5),
        F::bit("motion_slot3_step15_on", 187, 6),
        F::bit("motion_slot3_step16_on", 187, 7),
        F::bit("motion_slot4_step1_on", 188, 0),
        F::bit("motion_slot4_step2_on", 188, 1),
        F::bit("motion_slot4_step3_on", 188, 2),
        F::bit("motion_slot4_step4_on", 188, 3),
        F::bit("motion_slot4_step5_on", 188, 4),
        F::bit("motion_slot4_step6_on", 188, 5),
        F::bit("motion_slot4_step7_on", 188, 6),
        F::bit("motion_slot4_step8_on", 188, 7),
        F::bit("motion_slot4_step9_on", 189, 0),
        F::bit("motion_slot4_step10_on", 189, 1),
        F::bit("motion_slot4_step11_on", 189, 2),
        F::bit("motion_slot4_step12_on", 189, 3),
        F::bit("motion_slot4_step13_on", 189, 4),
        F::bit("motion_slot4_step14_on", 189, 5),
        F::bit("motion_slot4_step15_on", 189, 6),
        F::bit("motion_slot4_step16_on", 189, 7),
        F::record("step1_event", 190, &STEP_EVENT),
        F::record("step2_event", 242, &STEP_EVENT),
        F::record("step3_event", 294, &STEP_EVENT),
        F::record("step4_event", 346, &STEP_EVENT),
        F::record("step5_event", 398, &STEP_EVENT),
        F::record("step6_event", 450, &STEP_EVENT),
        F::record("step7_event", 502, &STEP_EVENT),
        F::record("step8_event", 554, &STEP_EVENT),
        F::record("step9_event", 606, &STEP_EVENT),
        F::record("step10_event", 658, &STEP_EVENT),
        F::record("step11_event", 710, &STEP_EVENT),
        F::record("step12_event", 762, &STEP_EVENT),
        F::record("step13_event", 814, &STEP_EVENT),
        F::record("step14_event", 866, &STEP_EVENT),
        F::record("step15_event", 918, &STEP_EVENT),
        F::record("step16_event", 970, &STEP_EVENT),
    ],
};

/// Firmware 1.x on-disk shape: 4-byte marker, no active step flags, no
/// arpeggiator fields.
pub static LEGACY_SEQUENCER: Schema = Schema {
    name: "sequencer_v1",
    fields: &[
        F::marker("header", MARKER_OFFSET, "SEQD"),
        F::overlay("sequencer_data", 164, &SEQ_PAYLOAD),
    ],
};

/// Firmware 2.x on-disk shape: 2-byte marker, active step flags in the two
/// freed bytes, arpeggiator gate time and rate at the buffer tail.
pub static CANONICAL_SEQUENCER: Schema = Schema {
    name: "sequencer_v2",
    fields: &[
        F::marker("header", MARKER_OFFSET, "SQ"),
        F::bit("step1_active", 162, 0),
        F::bit("step2_active", 162, 1),
        F::bit("step3_active", 162, 2),
        F::bit("step4_active", 162, 3),
        F::bit("step5_active", 162, 4),
        F::bit("step6_active", 162, 5),
        F::bit("step7_active", 162, 6),
        F::bit("step8_active", 162, 7),
        F::bit("step9_active", 163, 0),
        F::bit("step10_active", 163, 1),
        F::bit("step11_active", 163, 2),
        F::bit("step12_active", 163, 3),
        F::bit("step13_active", 163, 4),
        F::bit("step14_active", 163, 5),
        F::bit("step15_active", 163, 6),
        F::bit("step16_active", 163, 7),
        F::overlay("sequencer_data", 164, &SEQ_PAYLOAD),
        // the guide documents 0~72, hardware stores 1~73
        F::ranged("arp_gate_time", 1022, 1, 1, 73),
        F::enumeration("arp_rate", 1023, &ARP_RATE),
    ],
};
