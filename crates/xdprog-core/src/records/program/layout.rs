use crate::records::enums::{
    ASSIGN_TARGET, CV_IN_MODE, DELAY_SUB_TYPE, EG_TARGET, LFO_MODE, LFO_TARGET, LFO_TARGET_OSC,
    MICRO_TUNING, MOD_FX_CHORUS, MOD_FX_ENSEMBLE, MOD_FX_FLANGER, MOD_FX_PHASER, MOD_FX_TYPE,
    MULTI_OSC_NOISE, MULTI_OSC_TYPE, MULTI_OSC_VPM, MULTI_ROUTING, PORTAMENTO_MODE,
    REVERB_SUB_TYPE, USER_PARAM_TYPE, VCO_WAVE, VOICE_MODE_TYPE,
};
use crate::schema::{Constraint, FieldDescriptor as F, Schema};

pub const PROG_MARKER: &str = "PROG";
pub const PROG_END_MARKER: &str = "PRED";

/// Characters a program name may contain (12 ASCII characters, NUL padded).
pub const NAME_CHARSET: &str =
    " !#$%&'()*,.:?+/-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Bytes needed for the primary program region including both markers.
pub const MIN_LEN: usize = 160;

/// Primary program region, offsets per the minilogue xd MIDI implementation
/// guide rev. 1.01 (PROGRAM DATA DUMP, tables P1 through P24).
pub static PROGRAM: Schema = Schema {
    name: "program",
    fields: &[
        F::marker("header", 0, PROG_MARKER),
        F::text("program_name", 4, 12).with(Constraint::Charset(NAME_CHARSET)),
        // 0~4 = -2..+2 octaves
        F::ranged("octave", 16, 1, 0, 4),
        F::ranged("portamento", 17, 1, 0, 127),
        F::boolean("key_trig", 18),
        F::ranged("voice_mode_depth", 19, 2, 0, 1023),
        F::enumeration("voice_mode_type", 21, &VOICE_MODE_TYPE),
        F::enumeration("vco1_wave", 22, &VCO_WAVE),
        // 0~3 = 16',8',4',2'
        F::ranged("vco1_octave", 23, 1, 0, 3),
        F::ranged("vco1_pitch", 24, 2, 0, 1023),
        F::ranged("vco1_shape", 26, 2, 0, 1023),
        F::enumeration("vco2_wave", 28, &VCO_WAVE),
        F::ranged("vco2_octave", 29, 1, 0, 3),
        F::ranged("vco2_pitch", 30, 2, 0, 1023),
        F::ranged("vco2_shape", 32, 2, 0, 1023),
        F::boolean("oscillator_sync", 34),
        F::boolean("ring_mod", 35),
        F::ranged("cross_mod_depth", 36, 2, 0, 1023),
        F::enumeration("multi_osc_type", 38, &MULTI_OSC_TYPE),
        F::enumeration("selected_multi_osc_noise", 39, &MULTI_OSC_NOISE),
        F::enumeration("selected_multi_osc_vpm", 40, &MULTI_OSC_VPM),
        F::ranged("selected_multi_osc_user", 41, 1, 0, 15),
        F::ranged("shape_noise", 42, 2, 0, 1023),
        F::ranged("shape_vpm", 44, 2, 0, 1023),
        F::ranged("shape_user", 46, 2, 0, 1023),
        F::ranged("shift_shape_noise", 48, 2, 0, 1023),
        F::ranged("shift_shape_vpm", 50, 2, 0, 1023),
        F::ranged("shift_shape_user", 52, 2, 0, 1023),
        F::ranged("vco1_level", 54, 2, 0, 1023),
        F::ranged("vco2_level", 56, 2, 0, 1023),
        F::ranged("multi_level", 58, 2, 0, 1023),
        F::ranged("filter_cutoff", 60, 2, 0, 1023),
        F::ranged("filter_resonance", 62, 2, 0, 1023),
        F::ranged("filter_cutoff_drive", 64, 1, 0, 2),
        F::ranged("filter_cutoff_keyboard_track", 65, 1, 0, 2),
        F::ranged("amp_eg_attack", 66, 2, 0, 1023),
        F::ranged("amp_eg_decay", 68, 2, 0, 1023),
        F::ranged("amp_eg_sustain", 70, 2, 0, 1023),
        F::ranged("amp_eg_release", 72, 2, 0, 1023),
        F::ranged("eg_attack", 74, 2, 0, 1023),
        F::ranged("eg_decay", 76, 2, 0, 1023),
        F::ranged("eg_int", 78, 2, 0, 1023),
        F::enumeration("eg_target", 80, &EG_TARGET),
        F::enumeration("lfo_wave", 81, &VCO_WAVE),
        F::enumeration("lfo_mode", 82, &LFO_MODE),
        F::ranged("lfo_rate", 83, 2, 0, 1023),
        F::ranged("lfo_int", 85, 2, 0, 1023),
        F::enumeration("lfo_target", 87, &LFO_TARGET),
        F::boolean("mod_fx_on_off", 88),
        F::enumeration("mod_fx_type", 89, &MOD_FX_TYPE),
        F::enumeration("mod_fx_chorus", 90, &MOD_FX_CHORUS),
        F::enumeration("mod_fx_ensemble", 91, &MOD_FX_ENSEMBLE),
        F::enumeration("mod_fx_phaser", 92, &MOD_FX_PHASER),
        F::enumeration("mod_fx_flanger", 93, &MOD_FX_FLANGER),
        F::ranged("mod_fx_user", 94, 1, 0, 15),
        F::ranged("mod_fx_time", 95, 2, 0, 1023),
        F::ranged("mod_fx_depth", 97, 2, 0, 1023),
        F::boolean("delay_on_off", 99),
        F::enumeration("delay_sub_type", 100, &DELAY_SUB_TYPE),
        F::ranged("delay_time", 101, 2, 0, 1023),
        F::ranged("delay_depth", 103, 2, 0, 1023),
        F::boolean("reverb_on_off", 105),
        F::enumeration("reverb_sub_type", 106, &REVERB_SUB_TYPE),
        F::ranged("reverb_time", 107, 2, 0, 1023),
        F::ranged("reverb_depth", 109, 2, 0, 1023),
        // OFF~+12Note / OFF~-12Note
        F::ranged("bend_range_plus", 111, 1, 0, 12),
        F::ranged("bend_range_minus", 112, 1, 0, 12),
        F::enumeration("joystick_assign_plus", 113, &ASSIGN_TARGET),
        // 0~200 = -100%..+100%
        F::ranged("joystick_range_plus", 114, 1, 0, 200),
        F::enumeration("joystick_assign_minus", 115, &ASSIGN_TARGET),
        F::ranged("joystick_range_minus", 116, 1, 0, 200),
        F::enumeration("cv_in_mode", 117, &CV_IN_MODE),
        F::enumeration("cv_in1_assign", 118, &ASSIGN_TARGET),
        F::ranged("cv_in1_range", 119, 1, 0, 200),
        F::enumeration("cv_in2_assign", 120, &ASSIGN_TARGET),
        F::ranged("cv_in2_range", 121, 1, 0, 200),
        F::enumeration("micro_tuning", 122, &MICRO_TUNING),
        // 0~24 = -12Note..+12Note
        F::ranged("scale_key", 123, 1, 0, 24),
        // 0~100 = -50Cent..+50Cent
        F::ranged("program_tuning", 124, 1, 0, 100),
        F::boolean("lfo_key_sync", 125),
        F::boolean("lfo_voice_sync", 126),
        F::enumeration("lfo_target_osc", 127, &LFO_TARGET_OSC),
        F::ranged("cutoff_velocity", 128, 1, 0, 127),
        F::ranged("amp_velocity", 129, 1, 0, 127),
        F::ranged("multi_octave", 130, 1, 0, 3),
        F::enumeration("multi_routing", 131, &MULTI_ROUTING),
        F::boolean("eg_legato", 132),
        F::enumeration("portamento_mode", 133, &PORTAMENTO_MODE),
        F::boolean("portamento_bpm_sync", 134),
        // 12~132 = -18dB..+6dB
        F::ranged("program_level", 135, 1, 12, 132),
        F::ranged("vpm_param1_feedback", 136, 1, 0, 200),
        F::ranged("vpm_param2_noise_depth", 137, 1, 0, 200),
        F::ranged("vpm_param3_shape_mod_int", 138, 1, 0, 200),
        F::ranged("vpm_param4_mod_attack", 139, 1, 0, 200),
        F::ranged("vpm_param5_mod_decay", 140, 1, 0, 200),
        F::ranged("vpm_param6_mod_key_track", 141, 1, 0, 200),
        F::uint("user_param1", 142, 1),
        F::uint("user_param2", 143, 1),
        F::uint("user_param3", 144, 1),
        F::uint("user_param4", 145, 1),
        F::uint("user_param5", 146, 1),
        F::uint("user_param6", 147, 1),
        F::uint("user_param56_type", 148, 1),
        F::uint("user_param1234_type", 149, 1),
        F::enum_bits("user_param1_type", 149, 0, 1, &USER_PARAM_TYPE),
        F::enum_bits("user_param2_type", 149, 2, 3, &USER_PARAM_TYPE),
        F::enum_bits("user_param3_type", 149, 4, 5, &USER_PARAM_TYPE),
        F::enum_bits("user_param4_type", 149, 6, 7, &USER_PARAM_TYPE),
        F::enum_bits("user_param5_type", 148, 0, 1, &USER_PARAM_TYPE),
        F::enum_bits("user_param6_type", 148, 2, 3, &USER_PARAM_TYPE),
        // 1~25 = -12..+12 notes
        F::ranged("program_transpose", 150, 1, 1, 25),
        F::ranged("delay_dry_wet", 151, 2, 0, 1024),
        F::ranged("reverb_dry_wet", 153, 2, 0, 1024),
        F::enumeration("midi_aftertouch_assign", 155, &ASSIGN_TARGET),
        F::marker("program_end_marker", 156, PROG_END_MARKER),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_offsets_stay_inside_the_primary_region() {
        for field in PROGRAM.fields {
            assert!(field.offset < MIN_LEN, "{} out of region", field.name);
        }
    }

    #[test]
    fn catalog_names_are_unique() {
        for (index, field) in PROGRAM.fields.iter().enumerate() {
            assert!(
                PROGRAM.fields[index + 1..]
                    .iter()
                    .all(|other| other.name != field.name),
                "duplicate field name {}",
                field.name
            );
        }
    }
}
