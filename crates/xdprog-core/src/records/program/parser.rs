use crate::records::enums::{
    DelaySubType, HwEnum, LfoMode, ModFxType, MultiOscType, ReverbSubType, VoiceModeType,
};
use crate::schema::{DecodeError, Record, decode};

use super::layout;

/// A fully decoded, validated program record.
///
/// Wraps the generic record tree and exposes typed views for the fields the
/// display codecs branch on. Construction is all-or-nothing: any invalid
/// field fails the whole parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    record: Record,
}

impl Program {
    pub fn parse(buf: &[u8]) -> Result<Self, DecodeError> {
        let record = decode(buf, &layout::PROGRAM)?;
        Ok(Self { record })
    }

    /// The underlying value tree, one entry per catalog field.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Program name with NUL padding stripped and trailing blanks trimmed.
    pub fn name(&self) -> &str {
        self.record.text("program_name").trim_end()
    }

    pub fn voice_mode_type(&self) -> VoiceModeType {
        self.enum_field("voice_mode_type")
    }

    pub fn voice_mode_depth(&self) -> u16 {
        self.record.uint("voice_mode_depth") as u16
    }

    pub fn vco1_pitch(&self) -> u16 {
        self.record.uint("vco1_pitch") as u16
    }

    pub fn vco2_pitch(&self) -> u16 {
        self.record.uint("vco2_pitch") as u16
    }

    pub fn eg_int(&self) -> u16 {
        self.record.uint("eg_int") as u16
    }

    pub fn lfo_mode(&self) -> LfoMode {
        self.enum_field("lfo_mode")
    }

    pub fn lfo_rate(&self) -> u16 {
        self.record.uint("lfo_rate") as u16
    }

    pub fn program_level(&self) -> u8 {
        self.record.uint("program_level") as u8
    }

    pub fn multi_osc_type(&self) -> MultiOscType {
        self.enum_field("multi_osc_type")
    }

    /// 0-based user oscillator slot selector.
    pub fn selected_multi_osc_user(&self) -> u8 {
        self.record.uint("selected_multi_osc_user") as u8
    }

    pub fn mod_fx_on(&self) -> bool {
        self.record.flag("mod_fx_on_off")
    }

    pub fn mod_fx_type(&self) -> ModFxType {
        self.enum_field("mod_fx_type")
    }

    /// 0-based user mod FX slot selector.
    pub fn mod_fx_user(&self) -> u8 {
        self.record.uint("mod_fx_user") as u8
    }

    pub fn delay_on(&self) -> bool {
        self.record.flag("delay_on_off")
    }

    pub fn delay_sub_type(&self) -> DelaySubType {
        self.enum_field("delay_sub_type")
    }

    pub fn reverb_on(&self) -> bool {
        self.record.flag("reverb_on_off")
    }

    pub fn reverb_sub_type(&self) -> ReverbSubType {
        self.enum_field("reverb_sub_type")
    }

    fn enum_field<T: HwEnum>(&self, name: &str) -> T {
        match T::from_code(self.record.enum_code(name)) {
            Some(value) => value,
            // The decode step already rejected unmapped codes.
            None => panic!("field {name} holds a code outside its enum table"),
        }
    }
}
