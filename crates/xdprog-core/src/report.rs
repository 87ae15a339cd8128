//! JSON report assembly.
//!
//! Renders a decoded patch as one serializable tree: the raw validated
//! record, the resolved sequencer, and a display section that runs the raw
//! codes through the physical-value codecs. User-defined oscillator and
//! effect slots resolve through an optional caller-supplied mapping;
//! unnamed slots fall back to generic labels with their 1-based slot
//! number.

use serde::{Deserialize, Serialize};

use crate::records::enums::{HwEnum, ModFxType, MultiOscType};
use crate::records::program::Program;
use crate::records::sequencer::{Sequencer, SequencerFormat};
use crate::schema::Record;
use crate::units::{
    self, CodecError, arp_gate_time_percent, eg_int_percent, lfo_rate_label, pitch_cents,
    program_level_db, voice_mode_depth_label,
};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// The `(name, byte count)` identity of the decoded record, as handed over
/// by whatever extracted it from a library file.
#[derive(Debug, Clone, Serialize)]
pub struct SourceInfo {
    pub name: String,
    pub bytes: u64,
}

/// Complete report for one decoded patch.
#[derive(Debug, Clone, Serialize)]
pub struct PatchReport {
    pub report_version: u32,
    pub tool: ToolInfo,
    pub source: SourceInfo,
    /// Full program record tree in catalog order.
    pub program: Record,
    /// Resolved sequencer, absent when the buffer carries neither marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequencer: Option<SequencerReport>,
    pub display: DisplaySummary,
}

/// Canonical sequencer rendition.
#[derive(Debug, Clone, Serialize)]
pub struct SequencerReport {
    /// On-disk shape the data was resolved from.
    pub format: SequencerFormat,
    pub active_steps: Vec<bool>,
    pub arp_gate_time: u8,
    pub arp_gate_time_percent: u8,
    pub arp_rate: &'static str,
    pub payload: Record,
}

/// Human-unit values for the front panel parameters.
#[derive(Debug, Clone, Serialize)]
pub struct DisplaySummary {
    pub program_name: String,
    pub voice_mode: &'static str,
    pub voice_mode_depth: String,
    pub vco1_pitch_cents: String,
    pub vco2_pitch_cents: String,
    pub eg_int_percent: f64,
    pub lfo_rate: String,
    pub program_level: String,
    pub multi_engine: String,
    pub mod_fx: String,
    pub delay_fx: String,
    pub reverb_fx: String,
    pub joystick_range_plus_percent: i16,
    pub joystick_range_minus_percent: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_gate_time_percent: Option<u8>,
}

/// User-assigned names for the user oscillator and effect slots, usually
/// deserialized from a caller-maintained JSON file. Lists are 1-based by
/// slot; missing or empty entries leave the slot unnamed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserUnitMappings {
    pub user_oscillators: Vec<String>,
    pub user_mod_fx: Vec<String>,
    pub user_delay_fx: Vec<String>,
    pub user_reverb_fx: Vec<String>,
}

impl UserUnitMappings {
    fn slot(list: &[String], slot: u8) -> Option<&str> {
        let index = usize::from(slot).checked_sub(1)?;
        list.get(index)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn user_oscillator(&self, slot: u8) -> Option<&str> {
        Self::slot(&self.user_oscillators, slot)
    }

    pub fn user_mod_fx(&self, slot: u8) -> Option<&str> {
        Self::slot(&self.user_mod_fx, slot)
    }

    pub fn user_delay_fx(&self, slot: u8) -> Option<&str> {
        Self::slot(&self.user_delay_fx, slot)
    }

    pub fn user_reverb_fx(&self, slot: u8) -> Option<&str> {
        Self::slot(&self.user_reverb_fx, slot)
    }
}

fn user_slot_label(name: Option<&str>, fallback: &str, slot: u8) -> String {
    format!("{} (#{slot})", name.unwrap_or(fallback))
}

/// Assemble the report for one decoded patch.
///
/// All raw codes fed into the codecs were range-validated during decode, so
/// the only way to hit a `CodecError` here is a catalog whose constraints
/// disagree with a codec domain.
pub fn build_report(
    source_name: &str,
    source_bytes: u64,
    program: &Program,
    sequencer: Option<&Sequencer>,
    mappings: &UserUnitMappings,
) -> Result<PatchReport, CodecError> {
    let record = program.record();

    let multi_engine = match program.multi_osc_type() {
        MultiOscType::Noise => format!("Noise {}", record.enum_label("selected_multi_osc_noise")),
        MultiOscType::Vpm => format!("VPM {}", record.enum_label("selected_multi_osc_vpm")),
        MultiOscType::User => {
            let slot = program.selected_multi_osc_user() + 1;
            user_slot_label(mappings.user_oscillator(slot), "USER OSC", slot)
        }
    };

    let mod_fx = if !program.mod_fx_on() {
        "Off".to_string()
    } else {
        match program.mod_fx_type() {
            ModFxType::None => "None".to_string(),
            ModFxType::Chorus => format!("Chorus {}", record.enum_label("mod_fx_chorus")),
            ModFxType::Ensemble => format!("Ensemble {}", record.enum_label("mod_fx_ensemble")),
            ModFxType::Phaser => format!("Phaser {}", record.enum_label("mod_fx_phaser")),
            ModFxType::Flanger => format!("Flanger {}", record.enum_label("mod_fx_flanger")),
            ModFxType::User => {
                let slot = program.mod_fx_user() + 1;
                user_slot_label(mappings.user_mod_fx(slot), "USER MOD", slot)
            }
        }
    };

    let delay_fx = match program.delay_sub_type().user_slot() {
        Some(slot) => user_slot_label(mappings.user_delay_fx(slot), "USER DELAY", slot),
        None => program.delay_sub_type().label().to_string(),
    };

    let reverb_fx = match program.reverb_sub_type().user_slot() {
        Some(slot) => user_slot_label(mappings.user_reverb_fx(slot), "USER REV", slot),
        None => program.reverb_sub_type().label().to_string(),
    };

    let display = DisplaySummary {
        program_name: program.name().to_string(),
        voice_mode: program.voice_mode_type().label(),
        voice_mode_depth: voice_mode_depth_label(
            program.voice_mode_type(),
            program.voice_mode_depth(),
        )?,
        vco1_pitch_cents: pitch_cents(program.vco1_pitch())?,
        vco2_pitch_cents: pitch_cents(program.vco2_pitch())?,
        eg_int_percent: eg_int_percent(program.eg_int())?,
        lfo_rate: lfo_rate_label(program.lfo_rate(), program.lfo_mode())?,
        program_level: program_level_db(program.program_level())?,
        multi_engine,
        mod_fx,
        delay_fx,
        reverb_fx,
        joystick_range_plus_percent: units::signed_percent(
            record.uint("joystick_range_plus") as u8
        )?,
        joystick_range_minus_percent: units::signed_percent(
            record.uint("joystick_range_minus") as u8,
        )?,
        default_gate_time_percent: sequencer
            .map(|seq| units::seq_gate_time_percent(seq.default_gate_time()))
            .transpose()?,
    };

    let sequencer = sequencer
        .map(|seq| {
            Ok(SequencerReport {
                format: seq.format(),
                active_steps: seq.active_steps().to_vec(),
                arp_gate_time: seq.arp_gate_time(),
                arp_gate_time_percent: arp_gate_time_percent(seq.arp_gate_time())?,
                arp_rate: seq.arp_rate().label(),
                payload: seq.payload().clone(),
            })
        })
        .transpose()?;

    Ok(PatchReport {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "xdprog".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        source: SourceInfo {
            name: source_name.to_string(),
            bytes: source_bytes,
        },
        program: record.clone(),
        sequencer,
        display,
    })
}
