//! Physical-value codecs: raw hardware codes to human units.
//!
//! Pure functions, total over their declared domains; anything outside the
//! domain fails with `CodecError::OutOfDomain`. They are invoked by report
//! and display logic, never by the decode path, which only guarantees the
//! raw validated integers these functions consume.

use thiserror::Error;

use crate::records::enums::{LfoMode, VoiceModeType};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("{codec}: code {code} outside domain {min}..={max}")]
    OutOfDomain {
        codec: &'static str,
        code: u32,
        min: u32,
        max: u32,
    },
}

fn check_domain(codec: &'static str, code: u32, min: u32, max: u32) -> Result<(), CodecError> {
    if code < min || code > max {
        return Err(CodecError::OutOfDomain {
            codec,
            code,
            min,
            max,
        });
    }
    Ok(())
}

/// Shared gate time table. Sequencer gate times index it 0-based over 0~72;
/// the arpeggiator gate time is stored 1-based over 1~73 and shifts down
/// before the lookup. Both entry points must resolve through this one table
/// so the two displays never diverge.
const GATE_TIME_PERCENT: [u8; 73] = [
    0, 1, 2, 4, 5, 6, 8, 9, 11, 12, 13, 15, 16, 18, 19, 20, 22, 23, 25, 26, 27, 29, 30, 31, 33,
    34, 36, 37, 38, 40, 41, 43, 44, 45, 47, 48, 50, 51, 52, 54, 55, 56, 58, 59, 61, 62, 63, 65,
    66, 68, 69, 70, 72, 73, 75, 76, 77, 79, 80, 81, 83, 84, 86, 87, 88, 90, 91, 93, 94, 95, 97,
    98, 100,
];

/// Sequencer gate time (0~72) to percent.
///
/// # Examples
/// ```
/// use xdprog_core::units::seq_gate_time_percent;
///
/// assert_eq!(seq_gate_time_percent(54), Ok(75));
/// assert!(seq_gate_time_percent(73).is_err());
/// ```
pub fn seq_gate_time_percent(code: u8) -> Result<u8, CodecError> {
    check_domain("seq_gate_time_percent", u32::from(code), 0, 72)?;
    Ok(GATE_TIME_PERCENT[usize::from(code)])
}

/// Arpeggiator gate time (1~73) to percent.
pub fn arp_gate_time_percent(code: u8) -> Result<u8, CodecError> {
    check_domain("arp_gate_time_percent", u32::from(code), 1, 73)?;
    Ok(GATE_TIME_PERCENT[usize::from(code) - 1])
}

/// VCO pitch code (0~1023) to a cent string with an explicit sign.
///
/// Reproduces the breakpoint table of implementation guide note P5 exactly,
/// including the shared boundary codes between adjacent segments. The table
/// is known to disagree with the hardware display in places (code 553 shows
/// nearer +10 cents than the table's +26); the documented values are kept
/// for compatibility with existing tooling rather than corrected.
///
/// # Examples
/// ```
/// use xdprog_core::units::pitch_cents;
///
/// assert_eq!(pitch_cents(492).unwrap(), "0");
/// assert_eq!(pitch_cents(0).unwrap(), "-1200");
/// assert_eq!(pitch_cents(1023).unwrap(), "+1200");
/// ```
pub fn pitch_cents(code: u16) -> Result<String, CodecError> {
    check_domain("pitch_cents", u32::from(code), 0, 1023)?;
    let value = i32::from(code);
    Ok(match code {
        0..=4 => "-1200".to_string(),
        5..=356 => format!("{}", ((value - 356) * 944) as f32 / 352.0 - 256.0),
        357..=476 => format!("{}", (value - 476) * 2 - 16),
        477..=492 => format!("{}", value - 492),
        493..=532 => "0".to_string(),
        533..=548 => format!("+{}", value - 532),
        549..=668 => format!("+{}", (value - 548) * 2 + 16),
        669..=1020 => format!("+{}", ((value - 668) * 944) as f32 / 352.0 + 256.0),
        _ => "+1200".to_string(),
    })
}

/// EG intensity code (0~1023) to percent, per implementation guide note P10.
///
/// Quadratic falloff around the flat 0% band at 492~532; saturates at -100%
/// below 12 and +100% above 1012.
///
/// # Examples
/// ```
/// use xdprog_core::units::eg_int_percent;
///
/// assert_eq!(eg_int_percent(512).unwrap(), 0.0);
/// assert_eq!(eg_int_percent(11).unwrap(), -100.0);
/// ```
pub fn eg_int_percent(code: u16) -> Result<f64, CodecError> {
    check_domain("eg_int_percent", u32::from(code), 0, 1023)?;
    let value = f64::from(code);
    Ok(match code {
        0..=11 => -100.0,
        12..=491 => -((492.0 - value) * (492.0 - value) * 4641.0 * 100.0) / 1_073_741_824.0,
        492..=532 => 0.0,
        533..=1012 => ((value - 532.0) * (value - 532.0) * 4641.0 * 100.0) / 1_073_741_824.0,
        _ => 100.0,
    })
}

/// Tempo-synced LFO rate buckets, 64 codes per musical ratio.
const LFO_SYNC_LABELS: [&str; 16] = [
    "4", "2", "1", "3/4", "1/2", "3/8", "1/3", "1/4", "3/16", "1/6", "1/8", "1/12", "1/16",
    "1/24", "1/32", "1/36",
];

/// LFO rate code (0~1023) to its display label.
///
/// A plain number unless the LFO is BPM-synced; when synced, one of the 16
/// musical ratios of implementation guide note P11.
pub fn lfo_rate_label(code: u16, mode: LfoMode) -> Result<String, CodecError> {
    check_domain("lfo_rate_label", u32::from(code), 0, 1023)?;
    if mode != LfoMode::Bpm {
        return Ok(code.to_string());
    }
    Ok(LFO_SYNC_LABELS[usize::from(code) / 64].to_string())
}

/// Program level code (12~132) to decibels: 0.2 dB steps from -18.0 dB,
/// explicit sign, one decimal place.
///
/// # Examples
/// ```
/// use xdprog_core::units::program_level_db;
///
/// assert_eq!(program_level_db(102).unwrap(), "0.0 dB");
/// assert_eq!(program_level_db(132).unwrap(), "+6.0 dB");
/// ```
pub fn program_level_db(code: u8) -> Result<String, CodecError> {
    check_domain("program_level_db", u32::from(code), 12, 132)?;
    let tenths = (i32::from(code) - 12) * 2 - 180;
    let sign = if tenths > 0 { "+" } else { "" };
    Ok(format!("{sign}{:.1} dB", f64::from(tenths) / 10.0))
}

/// Voice mode depth (0~1023) to the front panel label for the active voice
/// mode.
///
/// Poly keeps the coarse two-state behavior the hardware exposes (Poly up
/// to 255, Duo above); no finer threshold table is known.
pub fn voice_mode_depth_label(mode: VoiceModeType, depth: u16) -> Result<String, CodecError> {
    check_domain("voice_mode_depth_label", u32::from(depth), 0, 1023)?;
    Ok(match mode {
        VoiceModeType::Poly => {
            if depth <= 255 {
                "Poly".to_string()
            } else {
                "Duo".to_string()
            }
        }
        VoiceModeType::Unison => {
            let detune = (f32::from(depth) * 50.0 / 1023.0).round();
            format!("Detune {detune} Cent")
        }
        VoiceModeType::Chord => match depth {
            951..=1023 => "Maj7b5",
            878..=950 => "mMaj7",
            805..=877 => "m7b5",
            732..=804 => "dim",
            659..=731 => "aug",
            586..=658 => "Maj7",
            512..=585 => "7sus4",
            439..=511 => "7",
            366..=438 => "m7",
            293..=365 => "sus4",
            220..=292 => "Maj",
            147..=219 => "m",
            74..=146 => "sus2",
            _ => "5th",
        }
        .to_string(),
        VoiceModeType::Arp => match depth {
            937..=1023 => "RANDOM 3",
            859..=936 => "RANDOM 2",
            781..=858 => "RANDOM 1",
            703..=780 => "POLY 2",
            625..=702 => "POLY 1",
            547..=624 => "RISE FALL 2",
            469..=546 => "RISE FALL 1",
            391..=468 => "FALL 2",
            313..=390 => "FALL 1",
            235..=312 => "RISE 2",
            157..=234 => "RISE 1",
            79..=156 => "MANUAL 2",
            _ => "MANUAL 1",
        }
        .to_string(),
        VoiceModeType::None => depth.to_string(),
    })
}

/// Bipolar percent code (0~200) to -100..=100.
pub fn signed_percent(code: u8) -> Result<i16, CodecError> {
    check_domain("signed_percent", u32::from(code), 0, 200)?;
    Ok(i16::from(code) - 100)
}
