use serde::Serialize;

use crate::schema::EnumSpec;

/// A closed hardware enumeration with an explicit code table.
///
/// Decoding rejects unmapped codes; `label` is the text used in reports and
/// matches the front-panel naming where the hardware displays one.
pub trait HwEnum: Copy {
    fn from_code(code: u64) -> Option<Self>
    where
        Self: Sized;
    fn label(self) -> &'static str;
}

/// Declares one hardware enum plus its schema-facing `EnumSpec` static.
macro_rules! hw_enum {
    (
        $(#[$meta:meta])*
        $name:ident / $spec:ident ($label:literal) {
            $($variant:ident = $code:literal => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
        pub enum $name {
            $($variant = $code,)+
        }

        impl $name {
            fn lookup(code: u64) -> Option<&'static str> {
                match code {
                    $($code => Some($text),)+
                    _ => None,
                }
            }
        }

        pub static $spec: EnumSpec = EnumSpec {
            name: $label,
            label: $name::lookup,
        };

        impl HwEnum for $name {
            fn from_code(code: u64) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }
    };
}

hw_enum! {
    VoiceModeType / VOICE_MODE_TYPE ("voice mode type") {
        None = 0 => "None",
        Arp = 1 => "Arp",
        Chord = 2 => "Chord",
        Unison = 3 => "Unison",
        Poly = 4 => "Poly",
    }
}

hw_enum! {
    /// Shared by VCO1 WAVE, VCO2 WAVE and LFO WAVE.
    VcoWave / VCO_WAVE ("wave") {
        Sqr = 0 => "SQR",
        Tri = 1 => "TRI",
        Saw = 2 => "SAW",
    }
}

hw_enum! {
    MultiOscType / MULTI_OSC_TYPE ("multi engine type") {
        Noise = 0 => "Noise",
        Vpm = 1 => "VPM",
        User = 2 => "User",
    }
}

hw_enum! {
    MultiOscNoise / MULTI_OSC_NOISE ("noise type") {
        High = 0 => "High",
        Low = 1 => "Low",
        Peak = 2 => "Peak",
        Decim = 3 => "Decim",
    }
}

hw_enum! {
    MultiOscVpm / MULTI_OSC_VPM ("VPM type") {
        Sin1 = 0 => "Sin1",
        Sin2 = 1 => "Sin2",
        Sin3 = 2 => "Sin3",
        Sin4 = 3 => "Sin4",
        Saw1 = 4 => "Saw1",
        Saw2 = 5 => "Saw2",
        Squ1 = 6 => "Squ1",
        Squ2 = 7 => "Squ2",
        Fat1 = 8 => "Fat1",
        Fat2 = 9 => "Fat2",
        Air1 = 10 => "Air1",
        Air2 = 11 => "Air2",
        Decay1 = 12 => "Decay1",
        Decay2 = 13 => "Decay2",
        Creep = 14 => "Creep",
        Throat = 15 => "Throat",
    }
}

hw_enum! {
    EgTarget / EG_TARGET ("EG target") {
        Cutoff = 0 => "Cutoff",
        Pitch2 = 1 => "Pitch2",
        Pitch = 2 => "Pitch",
    }
}

hw_enum! {
    ModFxType / MOD_FX_TYPE ("mod FX type") {
        None = 0 => "None",
        Chorus = 1 => "Chorus",
        Ensemble = 2 => "Ensemble",
        Phaser = 3 => "Phaser",
        Flanger = 4 => "Flanger",
        User = 5 => "User",
    }
}

hw_enum! {
    ModFxChorus / MOD_FX_CHORUS ("chorus type") {
        Stereo = 0 => "Stereo",
        Light = 1 => "Light",
        Deep = 2 => "Deep",
        Triphase = 3 => "Triphase",
        Harmonic = 4 => "Harmonic",
        Mono = 5 => "Mono",
        Feedback = 6 => "Feedback",
        Vibrato = 7 => "Vibrato",
    }
}

hw_enum! {
    ModFxEnsemble / MOD_FX_ENSEMBLE ("ensemble type") {
        Stereo = 0 => "Stereo",
        Light = 1 => "Light",
        Mono = 2 => "Mono",
    }
}

hw_enum! {
    ModFxPhaser / MOD_FX_PHASER ("phaser type") {
        Stereo = 0 => "Stereo",
        Fast = 1 => "Fast",
        Orange = 2 => "Orange",
        Small = 3 => "Small",
        SmallReso = 4 => "SmallReso",
        Black = 5 => "Black",
        Formant = 6 => "Formant",
        Twinkle = 7 => "Twinkle",
    }
}

hw_enum! {
    ModFxFlanger / MOD_FX_FLANGER ("flanger type") {
        Stereo = 0 => "Stereo",
        Light = 1 => "Light",
        Mono = 2 => "Mono",
        HighSweep = 3 => "HighSweep",
        MidSweep = 4 => "MidSweep",
        PanSweep = 5 => "PanSweep",
        MonoSweep = 6 => "MonoSweep",
        Triphase = 7 => "Triphase",
    }
}

hw_enum! {
    DelaySubType / DELAY_SUB_TYPE ("delay type") {
        Stereo = 0 => "Stereo",
        Mono = 1 => "Mono",
        PingPong = 2 => "PingPong",
        Hipass = 3 => "Hipass",
        Tape = 4 => "Tape",
        OneTap = 5 => "OneTap",
        StereoBpm = 6 => "StereoBPM",
        MonoBpm = 7 => "MonoBPM",
        PingBpm = 8 => "PingBPM",
        HipassBpm = 9 => "HipassBPM",
        TapeBpm = 10 => "TapeBPM",
        Doubling = 11 => "Doubling",
        User1 = 12 => "User1",
        User2 = 13 => "User2",
        User3 = 14 => "User3",
        User4 = 15 => "User4",
        User5 = 16 => "User5",
        User6 = 17 => "User6",
        User7 = 18 => "User7",
        User8 = 19 => "User8",
    }
}

hw_enum! {
    ReverbSubType / REVERB_SUB_TYPE ("reverb type") {
        Hall = 0 => "Hall",
        Smooth = 1 => "Smooth",
        Arena = 2 => "Arena",
        Plate = 3 => "Plate",
        Room = 4 => "Room",
        EarlyRef = 5 => "EarlyRef",
        Space = 6 => "Space",
        Riser = 7 => "Riser",
        Submarine = 8 => "Submarine",
        Horror = 9 => "Horror",
        User1 = 10 => "User1",
        User2 = 11 => "User2",
        User3 = 12 => "User3",
        User4 = 13 => "User4",
        User5 = 14 => "User5",
        User6 = 15 => "User6",
        User7 = 16 => "User7",
        User8 = 17 => "User8",
    }
}

hw_enum! {
    /// Shared by joystick, CV input and MIDI aftertouch assignments.
    AssignTarget / ASSIGN_TARGET ("assign target") {
        GateTime = 0 => "GateTime",
        Portamento = 1 => "Portamento",
        VmDepth = 2 => "VMDepth",
        Vco1Pitch = 3 => "Vco1Pitch",
        Vco1Shape = 4 => "Vco1Shape",
        Vco2Pitch = 5 => "Vco2Pitch",
        Vco2Shape = 6 => "Vco2Shape",
        CrossMod = 7 => "CrossMod",
        MultiShape = 8 => "MultiShape",
        Vco1Level = 9 => "Vco1Level",
        Vco2Level = 10 => "Vco2Level",
        MultiLevel = 11 => "MultiLevel",
        FilterCutoff = 12 => "FilterCutoff",
        FilterResonance = 13 => "FilterResonance",
        AmpEgAttack = 14 => "AmpEGAttack",
        AmpEgDecay = 15 => "AmpEGDecay",
        AmpEgSustain = 16 => "AmpEGSustain",
        AmpEgRelease = 17 => "AmpEGRelease",
        EgAttack = 18 => "EGAttack",
        EgDecay = 19 => "EGDecay",
        EgInt = 20 => "EGInt",
        LfoRate = 21 => "LFORate",
        LfoInt = 22 => "LFOInt",
        ModFxSpeed = 23 => "ModFxSpeed",
        ModFxDepth = 24 => "ModFxDepth",
        ReverbTime = 25 => "ReverbTime",
        ReverbDepth = 26 => "ReverbDepth",
        DelayTime = 27 => "DelayTime",
        DelayDepth = 28 => "DelayDepth",
    }
}

hw_enum! {
    CvInMode / CV_IN_MODE ("CV in mode") {
        Modulation = 0 => "Modulation",
        CvGatePlus = 1 => "CV/Gate(+)",
        CvGateMinus = 2 => "CV/Gate(-)",
    }
}

hw_enum! {
    MicroTuning / MICRO_TUNING ("micro tuning") {
        EqualTemp = 0 => "EqualTemp",
        PureMajor = 1 => "PureMajor",
        PureMinor = 2 => "PureMinor",
        Pythagorean = 3 => "Pythagorean",
        Werckmeister = 4 => "Werckmeister",
        Kirnburger = 5 => "Kirnburger",
        Slendro = 6 => "Slendro",
        Pelog = 7 => "Pelog",
        Ionian = 8 => "Ionian",
        Dorian = 9 => "Dorian",
        Aeolian = 10 => "Aeolian",
        MajorPenta = 11 => "MajorPenta",
        MinorPenta = 12 => "MinorPenta",
        Reverse = 13 => "Reverse",
        Afx001 = 14 => "AFX001",
        Afx002 = 15 => "AFX002",
        Afx003 = 16 => "AFX003",
        Afx004 = 17 => "AFX004",
        Afx005 = 18 => "AFX005",
        Afx006 = 19 => "AFX006",
        Dc001 = 20 => "DC001",
        Dc002 = 21 => "DC002",
        Dc003 = 22 => "DC003",
        UserScale1 = 128 => "UserScale1",
        UserScale2 = 129 => "UserScale2",
        UserScale3 = 130 => "UserScale3",
        UserScale4 = 131 => "UserScale4",
        UserScale5 = 132 => "UserScale5",
        UserScale6 = 133 => "UserScale6",
        UserOctave1 = 134 => "UserOctave1",
        UserOctave2 = 135 => "UserOctave2",
        UserOctave3 = 136 => "UserOctave3",
        UserOctave4 = 137 => "UserOctave4",
        UserOctave5 = 138 => "UserOctave5",
        UserOctave6 = 139 => "UserOctave6",
    }
}

hw_enum! {
    LfoTargetOsc / LFO_TARGET_OSC ("LFO target osc") {
        All = 0 => "All",
        Vco1And2 = 1 => "Vco1+2",
        Vco2 = 2 => "Vco2",
        Multi = 3 => "Multi",
    }
}

hw_enum! {
    LfoMode / LFO_MODE ("LFO mode") {
        OneShot = 0 => "OneShot",
        Normal = 1 => "Normal",
        Bpm = 2 => "BPM",
    }
}

hw_enum! {
    LfoTarget / LFO_TARGET ("LFO target") {
        Cutoff = 0 => "Cutoff",
        Shape = 1 => "Shape",
        Pitch = 2 => "Pitch",
    }
}

hw_enum! {
    MultiRouting / MULTI_ROUTING ("multi routing") {
        PreVcf = 0 => "PreVCF",
        PostVcf = 1 => "PostVCF",
    }
}

hw_enum! {
    PortamentoMode / PORTAMENTO_MODE ("portamento mode") {
        Auto = 0 => "Auto",
        On = 1 => "On",
    }
}

hw_enum! {
    UserParamType / USER_PARAM_TYPE ("user param type") {
        Percent = 0 => "Percent",
        PercentBipolar = 1 => "PercentBipolar",
        Select = 2 => "Select",
        Count = 3 => "Count",
    }
}

hw_enum! {
    /// The implementation guide documents these starting at 0, but hardware
    /// stores 1 for 1/64.
    ArpRate / ARP_RATE ("ARP rate") {
        SixtyFourth = 1 => "1/64",
        FortyEighth = 2 => "1/48",
        ThirtySecond = 3 => "1/32",
        TwentyFourth = 4 => "1/24",
        Sixteenth = 5 => "1/16",
        SixteenthDotted = 6 => "1/16.",
        Twelfth = 7 => "1/12",
        Eighth = 8 => "1/8",
        EighthDotted = 9 => "1/8.",
        Sixth = 10 => "1/6",
        Quarter = 11 => "1/4",
    }
}

hw_enum! {
    /// Assignable motion sequence parameters. Pitch bend was stored as 124 by
    /// firmware 1.x (two factory presets still carry it) and as 126 from
    /// firmware 2.x on; both codes stay mapped.
    MotionParameterId / MOTION_PARAMETER_ID ("motion parameter") {
        None = 0 => "None",
        Portamento = 15 => "Portamento",
        VoiceModeDepth = 16 => "VoiceModeDepth",
        VoiceModeType = 17 => "VoiceModeType",
        Vco1Wave = 18 => "Vco1Wave",
        Vco1Octave = 19 => "Vco1Octave",
        Vco1Pitch = 20 => "Vco1Pitch",
        Vco1Shape = 21 => "Vco1Shape",
        Vco2Wave = 22 => "Vco2Wave",
        Vco2Octave = 23 => "Vco2Octave",
        Vco2Pitch = 24 => "Vco2Pitch",
        Vco2Shape = 25 => "Vco2Shape",
        Sync = 26 => "Sync",
        RingMod = 27 => "RingMod",
        CrossModDepth = 28 => "CrossModDepth",
        MultiEngineType = 29 => "MultiEngineType",
        MultiEngineNoiseType = 30 => "MultiEngineNoiseType",
        MultiEngineVpmType = 31 => "MultiEngineVPMType",
        MultiShapeNoise = 33 => "MultiShapeNoise",
        MultiShapeVpm = 34 => "MultiShapeVPM",
        MultiShapeUser = 35 => "MultiShapeUser",
        MultiShiftShapeNoise = 36 => "MultiShiftShapeNoise",
        MultiShiftShapeVpm = 37 => "MultiShiftShapeVPM",
        MultiShiftShapeUser = 38 => "MultiShiftShapeUser",
        Vco1Level = 39 => "Vco1Level",
        Vco2Level = 40 => "Vco2Level",
        MultiEngineLevel = 41 => "MultiEngineLevel",
        Cutoff = 42 => "Cutoff",
        Resonance = 43 => "Resonance",
        KeyTrack = 45 => "KeyTrack",
        AmpEgAttack = 46 => "AmpEGAttack",
        AmpEgDecay = 47 => "AmpEGDecay",
        AmpEgSustain = 48 => "AmpEGSustain",
        AmpEgRelease = 49 => "AmpEGRelease",
        EgAttack = 50 => "EGAttack",
        EgDecay = 51 => "EGDecay",
        EgInt = 52 => "EGInt",
        EgTarget = 53 => "EGTarget",
        LfoWave = 54 => "LFOWave",
        LfoMode = 55 => "LFOMode",
        LfoRate = 56 => "LFORate",
        LfoInt = 57 => "LFOInt",
        LfoTarget = 58 => "LFOTarget",
        ModFxOnOff = 59 => "ModFxOnOff",
        ModFxTime = 66 => "ModFxTime",
        ModFxDepth = 67 => "ModFxDepth",
        DelayOnOff = 68 => "DelayOnOff",
        DelayTime = 70 => "DelayTime",
        DelayDepth = 71 => "DelayDepth",
        ReverbOnOff = 72 => "ReverbOnOff",
        ReverbTime = 74 => "ReverbTime",
        ReverbDepth = 75 => "ReverbDepth",
        PitchBendV1 = 124 => "PitchBend",
        PitchBend = 126 => "PitchBend",
        GateTime = 129 => "GateTime",
    }
}

impl DelaySubType {
    /// 1-based user slot number for the user delay effects.
    pub fn user_slot(self) -> Option<u8> {
        let code = self as u8;
        (code >= DelaySubType::User1 as u8).then(|| code - DelaySubType::User1 as u8 + 1)
    }
}

impl ReverbSubType {
    /// 1-based user slot number for the user reverb effects.
    pub fn user_slot(self) -> Option<u8> {
        let code = self as u8;
        (code >= ReverbSubType::User1 as u8).then(|| code - ReverbSubType::User1 as u8 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_the_table() {
        assert_eq!(VoiceModeType::from_code(4), Some(VoiceModeType::Poly));
        assert_eq!(VoiceModeType::from_code(5), None);
        assert_eq!(MicroTuning::from_code(139), Some(MicroTuning::UserOctave6));
        assert_eq!(MicroTuning::from_code(23), None);
        assert_eq!(ArpRate::from_code(0), None);
        assert_eq!(ArpRate::from_code(5), Some(ArpRate::Sixteenth));
    }

    #[test]
    fn spec_lookup_matches_labels() {
        assert_eq!((VCO_WAVE.label)(2), Some("SAW"));
        assert_eq!((VCO_WAVE.label)(3), None);
        assert_eq!(ArpRate::Sixteenth.label(), "1/16");
        assert_eq!((MOTION_PARAMETER_ID.label)(126), Some("PitchBend"));
    }

    #[test]
    fn user_effect_slots_are_one_based() {
        assert_eq!(DelaySubType::Stereo.user_slot(), None);
        assert_eq!(DelaySubType::User1.user_slot(), Some(1));
        assert_eq!(DelaySubType::User8.user_slot(), Some(8));
        assert_eq!(ReverbSubType::Horror.user_slot(), None);
        assert_eq!(ReverbSubType::User3.user_slot(), Some(3));
    }
}
