use xdprog_core::records::enums::{
    ArpRate, DelaySubType, HwEnum, LfoMode, MotionParameterId, MultiOscType, VoiceModeType,
};
use xdprog_core::records::sequencer::layout::SEQ_PAYLOAD;
use xdprog_core::schema::decode;
use xdprog_core::{
    DecodeError, Program, SequencerFormat, UserUnitMappings, build_report, resolve_sequencer,
};

const PATCH_LEN: usize = 1024;

fn set_u16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

/// A complete, valid primary program region with the trailing sequencer
/// region left zeroed (no sequencer marker).
fn base_patch() -> Vec<u8> {
    let mut buf = vec![0u8; PATCH_LEN];
    buf[0..4].copy_from_slice(b"PROG");
    buf[4..14].copy_from_slice(b"Test Patch");
    buf[16] = 2; // octave, center
    buf[18] = 1; // key trig on
    set_u16(&mut buf, 19, 600); // voice mode depth
    buf[21] = 2; // Chord
    buf[22] = 2; // VCO1 SAW
    buf[23] = 1;
    set_u16(&mut buf, 24, 553); // VCO1 pitch
    set_u16(&mut buf, 30, 492); // VCO2 pitch, center
    buf[34] = 1; // sync on
    buf[38] = 2; // multi engine User
    buf[41] = 3; // user oscillator slot 4
    set_u16(&mut buf, 54, 1023); // VCO1 level
    set_u16(&mut buf, 56, 512);
    set_u16(&mut buf, 60, 500); // cutoff
    set_u16(&mut buf, 62, 100);
    buf[64] = 2;
    buf[65] = 1;
    set_u16(&mut buf, 78, 700); // EG int
    buf[81] = 1; // LFO TRI
    buf[82] = 2; // LFO BPM sync
    set_u16(&mut buf, 83, 800); // LFO rate -> 1/16
    buf[88] = 1; // mod FX on
    buf[89] = 1; // Chorus
    buf[90] = 2; // Deep
    buf[99] = 1; // delay on
    buf[100] = 12; // delay User1
    buf[106] = 4; // reverb Room
    buf[111] = 12;
    buf[112] = 2;
    buf[113] = 2;
    buf[114] = 150;
    buf[116] = 100;
    buf[119] = 100;
    buf[121] = 100;
    buf[123] = 12;
    buf[124] = 50;
    buf[128] = 64;
    buf[129] = 64;
    buf[130] = 1;
    buf[133] = 1; // portamento On
    buf[135] = 102; // program level, 0.0 dB
    for offset in 136..=141 {
        buf[offset] = 100; // VPM params, 0%
    }
    buf[148] = 0b0000_0110; // user params 5/6: Select, PercentBipolar
    buf[149] = 0b1110_0100; // user params 1..4: Percent..Count
    buf[150] = 13; // transpose, center
    set_u16(&mut buf, 151, 512);
    set_u16(&mut buf, 153, 512);
    buf[155] = 20; // aftertouch -> EGInt
    buf[156..160].copy_from_slice(b"PRED");
    buf
}

/// Base patch plus a firmware 2.x sequencer region.
fn canonical_patch() -> Vec<u8> {
    let mut buf = base_patch();
    buf[160..162].copy_from_slice(b"SQ");
    buf[162] = 0xFF; // steps 1..=8 active
    buf[163] = 0x00;
    set_u16(&mut buf, 164, 1200); // 120.0 BPM
    buf[166] = 16;
    buf[167] = 1;
    buf[168] = 75;
    buf[169] = 54; // default gate time -> 75%
    buf[170] = 0xFF;
    buf[171] = 0xFF;
    buf[172] = 0x01; // motion on step 1 only
    buf[174] = 0b11; // slot 1 motion + smooth
    buf[175] = 16; // slot 1 parameter: voice mode depth
    buf[182] = 0x01; // slot 1 runs on step 1
    // step 1 event
    buf[190] = 60; // note 1
    buf[198] = 100; // velocity 1
    buf[206] = 72 | 0x80; // gate time 72, trigger on
    buf[214..219].copy_from_slice(&[100, 101, 102, 103, 104]); // motion highs
    buf[219] = 0b1110_0100; // low bits for points 1..=4
    buf[220] = 0b10; // low bits for point 5
    buf[1022] = 55; // ARP gate time, 75%
    buf[1023] = 5; // ARP rate 1/16
    buf
}

/// Base patch plus the same sequencer payload under the firmware 1.x
/// marker. The canonical-only bytes stay zeroed, which would be invalid if
/// read through the canonical schema.
fn legacy_patch() -> Vec<u8> {
    let mut buf = canonical_patch();
    buf[160..164].copy_from_slice(b"SEQD");
    buf[1022] = 0;
    buf[1023] = 0;
    buf
}

#[test]
fn parses_the_full_program_region() {
    let buf = base_patch();
    let program = Program::parse(&buf).expect("parse program");

    assert_eq!(program.name(), "Test Patch");
    assert_eq!(program.voice_mode_type(), VoiceModeType::Chord);
    assert_eq!(program.voice_mode_depth(), 600);
    assert_eq!(program.vco1_pitch(), 553);
    assert_eq!(program.vco2_pitch(), 492);
    assert_eq!(program.eg_int(), 700);
    assert_eq!(program.lfo_mode(), LfoMode::Bpm);
    assert_eq!(program.lfo_rate(), 800);
    assert_eq!(program.program_level(), 102);
    assert_eq!(program.multi_osc_type(), MultiOscType::User);
    assert_eq!(program.selected_multi_osc_user(), 3);
    assert_eq!(program.delay_sub_type(), DelaySubType::User1);

    let record = program.record();
    assert!(record.flag("key_trig"));
    assert_eq!(record.enum_label("vco1_wave"), "SAW");
    assert_eq!(record.uint("joystick_range_plus"), 150);
    // bit sub-ranges over the packed user param type bytes
    assert_eq!(record.uint("user_param1234_type"), 0b1110_0100);
    assert_eq!(record.enum_label("user_param1_type"), "Percent");
    assert_eq!(record.enum_label("user_param3_type"), "Select");
    assert_eq!(record.enum_label("user_param4_type"), "Count");
    assert_eq!(record.enum_label("user_param5_type"), "Select");
}

#[test]
fn parses_a_minimum_length_buffer() {
    let buf = base_patch();
    let program = Program::parse(&buf[..160]).expect("parse 160-byte program");
    assert_eq!(program.name(), "Test Patch");
    assert_eq!(resolve_sequencer(&buf[..160]).unwrap(), None);
}

#[test]
fn rejects_a_wrong_header_marker() {
    let mut buf = base_patch();
    buf[0..4].copy_from_slice(b"PRXG");
    let err = Program::parse(&buf).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::ConstraintViolation { field: "header", .. }
    ));
}

#[test]
fn short_buffer_fails_on_the_first_overrunning_field() {
    let buf = base_patch();
    let err = Program::parse(&buf[..100]).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::OutOfBounds {
            field: "delay_sub_type",
            needed: 101,
            actual: 100,
        }
    ));
}

#[test]
fn decoding_is_deterministic() {
    let buf = canonical_patch();
    assert_eq!(
        Program::parse(&buf).unwrap(),
        Program::parse(&buf).unwrap()
    );
    assert_eq!(
        resolve_sequencer(&buf).unwrap(),
        resolve_sequencer(&buf).unwrap()
    );
}

#[test]
fn resolves_a_canonical_sequencer() {
    let buf = canonical_patch();
    let seq = resolve_sequencer(&buf).expect("resolve").expect("present");

    assert_eq!(seq.format(), SequencerFormat::Canonical);
    for step in 0..16 {
        assert_eq!(seq.active_step(step), step < 8, "step {step}");
        assert!(seq.step_on(step));
        assert_eq!(seq.step_motion_on(step), step == 0);
    }
    assert_eq!(seq.bpm(), 1200);
    assert_eq!(seq.step_length(), 16);
    assert_eq!(seq.step_resolution(), 1);
    assert_eq!(seq.swing(), 75);
    assert_eq!(seq.default_gate_time(), 54);
    assert_eq!(seq.arp_gate_time(), 55);
    assert_eq!(seq.arp_rate(), ArpRate::Sixteenth);

    let slot = seq.motion_slot(0);
    assert!(slot.motion_on);
    assert!(slot.smooth_on);
    assert_eq!(slot.parameter, MotionParameterId::VoiceModeDepth);
    assert!(seq.motion_slot_step_on(0, 0));
    assert!(!seq.motion_slot_step_on(0, 1));
    assert!(!seq.motion_slot(1).motion_on);

    let event = seq.step_event(0);
    assert_eq!(event.note(0), 60);
    assert_eq!(event.velocity(0), 100);
    assert_eq!(event.gate_time(0), 72);
    assert!(event.trigger_switch(0));
    assert!(!event.trigger_switch(1));

    // 10-bit points reassembled from 8-bit highs and 2-bit lows
    let motion = event.motion(0);
    assert_eq!(motion.sample(0), 400);
    assert_eq!(motion.sample(1), 405);
    assert_eq!(motion.sample(2), 410);
    assert_eq!(motion.sample(3), 415);
    assert_eq!(motion.sample(4), 418);

    assert_eq!(seq.step_event(8).note(0), 0);
}

#[test]
fn normalizes_a_legacy_sequencer_to_the_canonical_shape() {
    let legacy = legacy_patch();
    let seq = resolve_sequencer(&legacy).expect("resolve").expect("present");

    assert_eq!(seq.format(), SequencerFormat::Legacy);
    // the legacy format had no active step concept: all 16 are on
    assert!(seq.active_steps().iter().all(|&active| active));
    assert_eq!(seq.arp_gate_time(), 55);
    assert_eq!(seq.arp_rate(), ArpRate::Sixteenth);
    assert_eq!(seq.arp_rate().label(), "1/16");

    // the shared payload is carried over byte for byte
    let direct = decode(&legacy, &SEQ_PAYLOAD).expect("payload decode");
    assert_eq!(seq.payload(), &direct);
    let canonical = resolve_sequencer(&canonical_patch())
        .expect("resolve")
        .expect("present");
    assert_eq!(seq.payload(), canonical.payload());
}

#[test]
fn buffers_without_a_marker_have_no_sequencer() {
    assert_eq!(resolve_sequencer(&base_patch()).unwrap(), None);
}

#[test]
fn sequencer_decode_failures_stay_field_scoped() {
    let mut buf = canonical_patch();
    set_u16(&mut buf, 164, 5000); // BPM above 3000
    let err = resolve_sequencer(&buf).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::ConstraintViolation { field: "bpm", .. }
    ));
    // the program region is unaffected by the broken sequencer
    assert!(Program::parse(&buf).is_ok());
}

#[test]
fn report_renders_raw_codes_through_the_codecs() {
    let buf = canonical_patch();
    let program = Program::parse(&buf).expect("parse program");
    let sequencer = resolve_sequencer(&buf).expect("resolve");
    let mappings = UserUnitMappings {
        user_oscillators: vec![
            String::new(),
            String::new(),
            String::new(),
            "Waves".to_string(),
        ],
        user_delay_fx: vec!["Bucket Brigade".to_string()],
        ..UserUnitMappings::default()
    };

    let report = build_report(
        "Prog_000.prog_bin",
        buf.len() as u64,
        &program,
        sequencer.as_ref(),
        &mappings,
    )
    .expect("build report");
    let value = serde_json::to_value(&report).expect("report json");

    assert_eq!(value["source"]["name"], "Prog_000.prog_bin");
    assert_eq!(value["display"]["program_name"], "Test Patch");
    assert_eq!(value["display"]["voice_mode"], "Chord");
    assert_eq!(value["display"]["voice_mode_depth"], "Maj7");
    assert_eq!(value["display"]["vco1_pitch_cents"], "+26");
    assert_eq!(value["display"]["vco2_pitch_cents"], "0");
    assert_eq!(value["display"]["lfo_rate"], "1/16");
    assert_eq!(value["display"]["program_level"], "0.0 dB");
    assert_eq!(value["display"]["multi_engine"], "Waves (#4)");
    assert_eq!(value["display"]["mod_fx"], "Chorus Deep");
    assert_eq!(value["display"]["delay_fx"], "Bucket Brigade (#1)");
    assert_eq!(value["display"]["reverb_fx"], "Room");
    assert_eq!(value["display"]["joystick_range_plus_percent"], 50);
    assert_eq!(value["display"]["joystick_range_minus_percent"], 0);
    assert_eq!(value["display"]["default_gate_time_percent"], 75);

    assert_eq!(value["sequencer"]["format"], "canonical");
    assert_eq!(value["sequencer"]["arp_rate"], "1/16");
    assert_eq!(value["sequencer"]["arp_gate_time_percent"], 75);
    assert_eq!(value["sequencer"]["payload"]["bpm"], 1200);

    // the raw record tree serializes in catalog order with enum labels
    assert_eq!(value["program"]["header"], "PROG");
    assert_eq!(value["program"]["vco1_wave"], "SAW");
    assert_eq!(value["program"]["key_trig"], true);
    assert_eq!(value["program"]["user_param3_type"], "Select");
}

#[test]
fn report_without_a_sequencer_omits_the_section() {
    let buf = base_patch();
    let program = Program::parse(&buf).expect("parse program");
    let report = build_report(
        "Prog_001.prog_bin",
        buf.len() as u64,
        &program,
        None,
        &UserUnitMappings::default(),
    )
    .expect("build report");
    let value = serde_json::to_value(&report).expect("report json");
    assert!(value.get("sequencer").is_none());
    assert!(value["display"].get("default_gate_time_percent").is_none());
}
