//! Effect-scoped property sets: ids, structs, ranges for the 13 effects.
//!
//! Property ids here are the low-range ids dispatched to a slot's loaded
//! effect (below [`super::FXSLOT_NONE`]). Every struct is the exact wire
//! layout of the corresponding `ALLPARAMETERS` payload.

use bytemuck::{Pod, Zeroable};
use smart_default::SmartDefault;

use super::Vector3;

// Reverb.

pub const REVERB_NONE: u32 = 0;
pub const REVERB_ALLPARAMETERS: u32 = 1;
pub const REVERB_ENVIRONMENT: u32 = 2;
pub const REVERB_ENVIRONMENTSIZE: u32 = 3;
pub const REVERB_ENVIRONMENTDIFFUSION: u32 = 4;
pub const REVERB_ROOM: u32 = 5;
pub const REVERB_ROOMHF: u32 = 6;
pub const REVERB_ROOMLF: u32 = 7;
pub const REVERB_DECAYTIME: u32 = 8;
pub const REVERB_DECAYHFRATIO: u32 = 9;
pub const REVERB_DECAYLFRATIO: u32 = 10;
pub const REVERB_REFLECTIONS: u32 = 11;
pub const REVERB_REFLECTIONSDELAY: u32 = 12;
pub const REVERB_REFLECTIONSPAN: u32 = 13;
pub const REVERB_REVERB: u32 = 14;
pub const REVERB_REVERBDELAY: u32 = 15;
pub const REVERB_REVERBPAN: u32 = 16;
pub const REVERB_ECHOTIME: u32 = 17;
pub const REVERB_ECHODEPTH: u32 = 18;
pub const REVERB_MODULATIONTIME: u32 = 19;
pub const REVERB_MODULATIONDEPTH: u32 = 20;
pub const REVERB_AIRABSORPTIONHF: u32 = 21;
pub const REVERB_HFREFERENCE: u32 = 22;
pub const REVERB_LFREFERENCE: u32 = 23;
pub const REVERB_ROOMROLLOFFFACTOR: u32 = 24;
pub const REVERB_FLAGS: u32 = 25;

/// Environment indices selecting a preset.
pub const ENVIRONMENT_GENERIC: u32 = 0;
pub const ENVIRONMENT_PADDED_CELL: u32 = 1;
pub const ENVIRONMENT_ROOM: u32 = 2;
pub const ENVIRONMENT_BATHROOM: u32 = 3;
pub const ENVIRONMENT_LIVING_ROOM: u32 = 4;
pub const ENVIRONMENT_STONE_ROOM: u32 = 5;
pub const ENVIRONMENT_AUDITORIUM: u32 = 6;
pub const ENVIRONMENT_CONCERT_HALL: u32 = 7;
pub const ENVIRONMENT_CAVE: u32 = 8;
pub const ENVIRONMENT_ARENA: u32 = 9;
pub const ENVIRONMENT_HANGAR: u32 = 10;
pub const ENVIRONMENT_CARPETED_HALLWAY: u32 = 11;
pub const ENVIRONMENT_HALLWAY: u32 = 12;
pub const ENVIRONMENT_STONE_CORRIDOR: u32 = 13;
pub const ENVIRONMENT_ALLEY: u32 = 14;
pub const ENVIRONMENT_FOREST: u32 = 15;
pub const ENVIRONMENT_CITY: u32 = 16;
pub const ENVIRONMENT_MOUNTAINS: u32 = 17;
pub const ENVIRONMENT_QUARRY: u32 = 18;
pub const ENVIRONMENT_PLAIN: u32 = 19;
pub const ENVIRONMENT_PARKING_LOT: u32 = 20;
pub const ENVIRONMENT_SEWER_PIPE: u32 = 21;
pub const ENVIRONMENT_UNDERWATER: u32 = 22;
pub const ENVIRONMENT_DRUGGED: u32 = 23;
pub const ENVIRONMENT_DIZZY: u32 = 24;
pub const ENVIRONMENT_PSYCHOTIC: u32 = 25;
/// v3 marker with no preset behind it; rejected on set, never produced by get.
pub const ENVIRONMENT_UNDEFINED: u32 = 26;
pub const ENVIRONMENT_COUNT: u32 = 27;

pub const REVERB_FLAG_DECAY_TIME_SCALE: u32 = 0x01;
pub const REVERB_FLAG_REFLECTIONS_SCALE: u32 = 0x02;
pub const REVERB_FLAG_REFLECTIONS_DELAY_SCALE: u32 = 0x04;
pub const REVERB_FLAG_REVERB_SCALE: u32 = 0x08;
pub const REVERB_FLAG_REVERB_DELAY_SCALE: u32 = 0x10;
pub const REVERB_FLAG_DECAY_HF_LIMIT: u32 = 0x20;
pub const REVERB_FLAG_ECHO_TIME_SCALE: u32 = 0x40;
pub const REVERB_FLAG_MODULATION_TIME_SCALE: u32 = 0x80;
pub const REVERB_FLAGS_RESERVED: u32 = 0xFFFF_FF00;

pub const REVERB_DEFAULT_FLAGS: u32 = REVERB_FLAG_DECAY_TIME_SCALE
    | REVERB_FLAG_REFLECTIONS_SCALE
    | REVERB_FLAG_REFLECTIONS_DELAY_SCALE
    | REVERB_FLAG_REVERB_SCALE
    | REVERB_FLAG_REVERB_DELAY_SCALE
    | REVERB_FLAG_DECAY_HF_LIMIT;

/// The full v3+ reverb block.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct ReverbProps {
    #[default(ENVIRONMENT_GENERIC)]
    pub environment: u32,
    #[default(ReverbProps::DEFAULT_ENVIRONMENT_SIZE)]
    pub environment_size: f32,
    #[default(ReverbProps::DEFAULT_ENVIRONMENT_DIFFUSION)]
    pub environment_diffusion: f32,
    #[default(ReverbProps::DEFAULT_ROOM)]
    pub room: i32,
    #[default(ReverbProps::DEFAULT_ROOM_HF)]
    pub room_hf: i32,
    #[default(ReverbProps::DEFAULT_ROOM_LF)]
    pub room_lf: i32,
    #[default(ReverbProps::DEFAULT_DECAY_TIME)]
    pub decay_time: f32,
    #[default(ReverbProps::DEFAULT_DECAY_HF_RATIO)]
    pub decay_hf_ratio: f32,
    #[default(ReverbProps::DEFAULT_DECAY_LF_RATIO)]
    pub decay_lf_ratio: f32,
    #[default(ReverbProps::DEFAULT_REFLECTIONS)]
    pub reflections: i32,
    #[default(ReverbProps::DEFAULT_REFLECTIONS_DELAY)]
    pub reflections_delay: f32,
    pub reflections_pan: Vector3,
    #[default(ReverbProps::DEFAULT_REVERB)]
    pub reverb: i32,
    #[default(ReverbProps::DEFAULT_REVERB_DELAY)]
    pub reverb_delay: f32,
    pub reverb_pan: Vector3,
    #[default(ReverbProps::DEFAULT_ECHO_TIME)]
    pub echo_time: f32,
    #[default(ReverbProps::DEFAULT_ECHO_DEPTH)]
    pub echo_depth: f32,
    #[default(ReverbProps::DEFAULT_MODULATION_TIME)]
    pub modulation_time: f32,
    #[default(ReverbProps::DEFAULT_MODULATION_DEPTH)]
    pub modulation_depth: f32,
    #[default(ReverbProps::DEFAULT_AIR_ABSORPTION_HF)]
    pub air_absorption_hf: f32,
    #[default(ReverbProps::DEFAULT_HF_REFERENCE)]
    pub hf_reference: f32,
    #[default(ReverbProps::DEFAULT_LF_REFERENCE)]
    pub lf_reference: f32,
    pub room_rolloff_factor: f32,
    #[default(REVERB_DEFAULT_FLAGS)]
    pub flags: u32,
}

impl ReverbProps {
    pub const MIN_ENVIRONMENT: u32 = 0;
    /// Highest index the legacy 2.0 dialect may select.
    pub const MAX_ENVIRONMENT_V2: u32 = ENVIRONMENT_COUNT - 2;
    /// Highest index backed by a preset; `UNDEFINED` fails validation.
    pub const MAX_ENVIRONMENT: u32 = ENVIRONMENT_UNDEFINED - 1;

    pub const MIN_ENVIRONMENT_SIZE: f32 = 1.0;
    pub const MAX_ENVIRONMENT_SIZE: f32 = 100.0;
    pub const DEFAULT_ENVIRONMENT_SIZE: f32 = 7.5;

    pub const MIN_ENVIRONMENT_DIFFUSION: f32 = 0.0;
    pub const MAX_ENVIRONMENT_DIFFUSION: f32 = 1.0;
    pub const DEFAULT_ENVIRONMENT_DIFFUSION: f32 = 1.0;

    pub const MIN_ROOM: i32 = -10_000;
    pub const MAX_ROOM: i32 = 0;
    pub const DEFAULT_ROOM: i32 = -1_000;

    pub const MIN_ROOM_HF: i32 = -10_000;
    pub const MAX_ROOM_HF: i32 = 0;
    pub const DEFAULT_ROOM_HF: i32 = -100;

    pub const MIN_ROOM_LF: i32 = -10_000;
    pub const MAX_ROOM_LF: i32 = 0;
    pub const DEFAULT_ROOM_LF: i32 = 0;

    pub const MIN_DECAY_TIME: f32 = 0.1;
    pub const MAX_DECAY_TIME: f32 = 20.0;
    pub const DEFAULT_DECAY_TIME: f32 = 1.49;

    pub const MIN_DECAY_HF_RATIO: f32 = 0.1;
    pub const MAX_DECAY_HF_RATIO: f32 = 2.0;
    pub const DEFAULT_DECAY_HF_RATIO: f32 = 0.83;

    pub const MIN_DECAY_LF_RATIO: f32 = 0.1;
    pub const MAX_DECAY_LF_RATIO: f32 = 2.0;
    pub const DEFAULT_DECAY_LF_RATIO: f32 = 1.0;

    pub const MIN_REFLECTIONS: i32 = -10_000;
    pub const MAX_REFLECTIONS: i32 = 1_000;
    pub const DEFAULT_REFLECTIONS: i32 = -2_602;

    pub const MIN_REFLECTIONS_DELAY: f32 = 0.0;
    pub const MAX_REFLECTIONS_DELAY: f32 = 0.3;
    pub const DEFAULT_REFLECTIONS_DELAY: f32 = 0.007;

    pub const MIN_REVERB: i32 = -10_000;
    pub const MAX_REVERB: i32 = 2_000;
    pub const DEFAULT_REVERB: i32 = 200;

    pub const MIN_REVERB_DELAY: f32 = 0.0;
    pub const MAX_REVERB_DELAY: f32 = 0.1;
    pub const DEFAULT_REVERB_DELAY: f32 = 0.011;

    pub const MIN_ECHO_TIME: f32 = 0.075;
    pub const MAX_ECHO_TIME: f32 = 0.25;
    pub const DEFAULT_ECHO_TIME: f32 = 0.25;

    pub const MIN_ECHO_DEPTH: f32 = 0.0;
    pub const MAX_ECHO_DEPTH: f32 = 1.0;
    pub const DEFAULT_ECHO_DEPTH: f32 = 0.0;

    pub const MIN_MODULATION_TIME: f32 = 0.04;
    pub const MAX_MODULATION_TIME: f32 = 4.0;
    pub const DEFAULT_MODULATION_TIME: f32 = 0.25;

    pub const MIN_MODULATION_DEPTH: f32 = 0.0;
    pub const MAX_MODULATION_DEPTH: f32 = 1.0;
    pub const DEFAULT_MODULATION_DEPTH: f32 = 0.0;

    pub const MIN_AIR_ABSORPTION_HF: f32 = -100.0;
    pub const MAX_AIR_ABSORPTION_HF: f32 = 0.0;
    pub const DEFAULT_AIR_ABSORPTION_HF: f32 = -5.0;

    pub const MIN_HF_REFERENCE: f32 = 1_000.0;
    pub const MAX_HF_REFERENCE: f32 = 20_000.0;
    pub const DEFAULT_HF_REFERENCE: f32 = 5_000.0;

    pub const MIN_LF_REFERENCE: f32 = 20.0;
    pub const MAX_LF_REFERENCE: f32 = 1_000.0;
    pub const DEFAULT_LF_REFERENCE: f32 = 250.0;

    pub const MIN_ROOM_ROLLOFF_FACTOR: f32 = 0.0;
    pub const MAX_ROOM_ROLLOFF_FACTOR: f32 = 10.0;
}

/// The legacy 2.0 listener block, accepted on v2 reverb `ALLPARAMETERS`.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct Listener20Props {
    #[default(ReverbProps::DEFAULT_ROOM)]
    pub room: i32,
    #[default(ReverbProps::DEFAULT_ROOM_HF)]
    pub room_hf: i32,
    pub room_rolloff_factor: f32,
    #[default(ReverbProps::DEFAULT_DECAY_TIME)]
    pub decay_time: f32,
    #[default(ReverbProps::DEFAULT_DECAY_HF_RATIO)]
    pub decay_hf_ratio: f32,
    #[default(ReverbProps::DEFAULT_REFLECTIONS)]
    pub reflections: i32,
    #[default(ReverbProps::DEFAULT_REFLECTIONS_DELAY)]
    pub reflections_delay: f32,
    #[default(ReverbProps::DEFAULT_REVERB)]
    pub reverb: i32,
    #[default(ReverbProps::DEFAULT_REVERB_DELAY)]
    pub reverb_delay: f32,
    #[default(ENVIRONMENT_GENERIC)]
    pub environment: u32,
    #[default(ReverbProps::DEFAULT_ENVIRONMENT_SIZE)]
    pub environment_size: f32,
    #[default(ReverbProps::DEFAULT_ENVIRONMENT_DIFFUSION)]
    pub environment_diffusion: f32,
    #[default(ReverbProps::DEFAULT_AIR_ABSORPTION_HF)]
    pub air_absorption_hf: f32,
    #[default(REVERB_DEFAULT_FLAGS)]
    pub flags: u32,
}

// AGC compressor.

pub const COMPRESSOR_NONE: u32 = 0;
pub const COMPRESSOR_ALLPARAMETERS: u32 = 1;
pub const COMPRESSOR_ONOFF: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct CompressorProps {
    #[default(CompressorProps::DEFAULT_ON_OFF)]
    pub on_off: u32,
}

impl CompressorProps {
    pub const MIN_ON_OFF: u32 = 0;
    pub const MAX_ON_OFF: u32 = 1;
    pub const DEFAULT_ON_OFF: u32 = 1;
}

// Autowah.

pub const AUTOWAH_NONE: u32 = 0;
pub const AUTOWAH_ALLPARAMETERS: u32 = 1;
pub const AUTOWAH_ATTACKTIME: u32 = 2;
pub const AUTOWAH_RELEASETIME: u32 = 3;
pub const AUTOWAH_RESONANCE: u32 = 4;
pub const AUTOWAH_PEAKLEVEL: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct AutoWahProps {
    #[default(AutoWahProps::DEFAULT_ATTACK_TIME)]
    pub attack_time: f32,
    #[default(AutoWahProps::DEFAULT_RELEASE_TIME)]
    pub release_time: f32,
    #[default(AutoWahProps::DEFAULT_RESONANCE)]
    pub resonance: i32,
    #[default(AutoWahProps::DEFAULT_PEAK_LEVEL)]
    pub peak_level: i32,
}

impl AutoWahProps {
    pub const MIN_ATTACK_TIME: f32 = 0.0001;
    pub const MAX_ATTACK_TIME: f32 = 1.0;
    pub const DEFAULT_ATTACK_TIME: f32 = 0.06;

    pub const MIN_RELEASE_TIME: f32 = 0.0001;
    pub const MAX_RELEASE_TIME: f32 = 1.0;
    pub const DEFAULT_RELEASE_TIME: f32 = 0.06;

    pub const MIN_RESONANCE: i32 = 600;
    pub const MAX_RESONANCE: i32 = 6_000;
    pub const DEFAULT_RESONANCE: i32 = 6_000;

    pub const MIN_PEAK_LEVEL: i32 = -9_000;
    pub const MAX_PEAK_LEVEL: i32 = 9_000;
    pub const DEFAULT_PEAK_LEVEL: i32 = 2_100;
}

// Chorus.

pub const CHORUS_NONE: u32 = 0;
pub const CHORUS_ALLPARAMETERS: u32 = 1;
pub const CHORUS_WAVEFORM: u32 = 2;
pub const CHORUS_PHASE: u32 = 3;
pub const CHORUS_RATE: u32 = 4;
pub const CHORUS_DEPTH: u32 = 5;
pub const CHORUS_FEEDBACK: u32 = 6;
pub const CHORUS_DELAY: u32 = 7;

pub const CHORUS_WAVEFORM_SINUSOID: u32 = 0;
pub const CHORUS_WAVEFORM_TRIANGLE: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct ChorusProps {
    #[default(CHORUS_WAVEFORM_TRIANGLE)]
    pub waveform: u32,
    #[default(ChorusProps::DEFAULT_PHASE)]
    pub phase: i32,
    #[default(ChorusProps::DEFAULT_RATE)]
    pub rate: f32,
    #[default(ChorusProps::DEFAULT_DEPTH)]
    pub depth: f32,
    #[default(ChorusProps::DEFAULT_FEEDBACK)]
    pub feedback: f32,
    #[default(ChorusProps::DEFAULT_DELAY)]
    pub delay: f32,
}

impl ChorusProps {
    pub const MIN_WAVEFORM: u32 = 0;
    pub const MAX_WAVEFORM: u32 = 1;

    pub const MIN_PHASE: i32 = -180;
    pub const MAX_PHASE: i32 = 180;
    pub const DEFAULT_PHASE: i32 = 90;

    pub const MIN_RATE: f32 = 0.0;
    pub const MAX_RATE: f32 = 10.0;
    pub const DEFAULT_RATE: f32 = 1.1;

    pub const MIN_DEPTH: f32 = 0.0;
    pub const MAX_DEPTH: f32 = 1.0;
    pub const DEFAULT_DEPTH: f32 = 0.1;

    pub const MIN_FEEDBACK: f32 = -1.0;
    pub const MAX_FEEDBACK: f32 = 1.0;
    pub const DEFAULT_FEEDBACK: f32 = 0.25;

    pub const MIN_DELAY: f32 = 0.0002;
    pub const MAX_DELAY: f32 = 0.016;
    pub const DEFAULT_DELAY: f32 = 0.016;
}

// Distortion.

pub const DISTORTION_NONE: u32 = 0;
pub const DISTORTION_ALLPARAMETERS: u32 = 1;
pub const DISTORTION_EDGE: u32 = 2;
pub const DISTORTION_GAIN: u32 = 3;
pub const DISTORTION_LOWPASSCUTOFF: u32 = 4;
pub const DISTORTION_EQCENTER: u32 = 5;
pub const DISTORTION_EQBANDWIDTH: u32 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct DistortionProps {
    #[default(DistortionProps::DEFAULT_EDGE)]
    pub edge: f32,
    #[default(DistortionProps::DEFAULT_GAIN)]
    pub gain: i32,
    #[default(DistortionProps::DEFAULT_LOW_PASS_CUT_OFF)]
    pub low_pass_cut_off: f32,
    #[default(DistortionProps::DEFAULT_EQ_CENTER)]
    pub eq_center: f32,
    #[default(DistortionProps::DEFAULT_EQ_BANDWIDTH)]
    pub eq_bandwidth: f32,
}

impl DistortionProps {
    pub const MIN_EDGE: f32 = 0.0;
    pub const MAX_EDGE: f32 = 1.0;
    pub const DEFAULT_EDGE: f32 = 0.2;

    pub const MIN_GAIN: i32 = -6_000;
    pub const MAX_GAIN: i32 = 0;
    pub const DEFAULT_GAIN: i32 = -2_600;

    pub const MIN_LOW_PASS_CUT_OFF: f32 = 80.0;
    pub const MAX_LOW_PASS_CUT_OFF: f32 = 24_000.0;
    pub const DEFAULT_LOW_PASS_CUT_OFF: f32 = 8_000.0;

    pub const MIN_EQ_CENTER: f32 = 80.0;
    pub const MAX_EQ_CENTER: f32 = 24_000.0;
    pub const DEFAULT_EQ_CENTER: f32 = 3_600.0;

    pub const MIN_EQ_BANDWIDTH: f32 = 80.0;
    pub const MAX_EQ_BANDWIDTH: f32 = 24_000.0;
    pub const DEFAULT_EQ_BANDWIDTH: f32 = 3_600.0;
}

// Echo.

pub const ECHO_NONE: u32 = 0;
pub const ECHO_ALLPARAMETERS: u32 = 1;
pub const ECHO_DELAY: u32 = 2;
pub const ECHO_LRDELAY: u32 = 3;
pub const ECHO_DAMPING: u32 = 4;
pub const ECHO_FEEDBACK: u32 = 5;
pub const ECHO_SPREAD: u32 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct EchoProps {
    #[default(EchoProps::DEFAULT_DELAY)]
    pub delay: f32,
    #[default(EchoProps::DEFAULT_LR_DELAY)]
    pub lr_delay: f32,
    #[default(EchoProps::DEFAULT_DAMPING)]
    pub damping: f32,
    #[default(EchoProps::DEFAULT_FEEDBACK)]
    pub feedback: f32,
    #[default(EchoProps::DEFAULT_SPREAD)]
    pub spread: f32,
}

impl EchoProps {
    pub const MIN_DELAY: f32 = 0.002;
    pub const MAX_DELAY: f32 = 0.207;
    pub const DEFAULT_DELAY: f32 = 0.1;

    pub const MIN_LR_DELAY: f32 = 0.0;
    pub const MAX_LR_DELAY: f32 = 0.404;
    pub const DEFAULT_LR_DELAY: f32 = 0.1;

    pub const MIN_DAMPING: f32 = 0.0;
    pub const MAX_DAMPING: f32 = 0.99;
    pub const DEFAULT_DAMPING: f32 = 0.5;

    pub const MIN_FEEDBACK: f32 = 0.0;
    pub const MAX_FEEDBACK: f32 = 1.0;
    pub const DEFAULT_FEEDBACK: f32 = 0.5;

    pub const MIN_SPREAD: f32 = -1.0;
    pub const MAX_SPREAD: f32 = 1.0;
    pub const DEFAULT_SPREAD: f32 = -1.0;
}

// Equalizer.

pub const EQUALIZER_NONE: u32 = 0;
pub const EQUALIZER_ALLPARAMETERS: u32 = 1;
pub const EQUALIZER_LOWGAIN: u32 = 2;
pub const EQUALIZER_LOWCUTOFF: u32 = 3;
pub const EQUALIZER_MID1GAIN: u32 = 4;
pub const EQUALIZER_MID1CENTER: u32 = 5;
pub const EQUALIZER_MID1WIDTH: u32 = 6;
pub const EQUALIZER_MID2GAIN: u32 = 7;
pub const EQUALIZER_MID2CENTER: u32 = 8;
pub const EQUALIZER_MID2WIDTH: u32 = 9;
pub const EQUALIZER_HIGHGAIN: u32 = 10;
pub const EQUALIZER_HIGHCUTOFF: u32 = 11;

#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct EqualizerProps {
    pub low_gain: i32,
    #[default(EqualizerProps::DEFAULT_LOW_CUT_OFF)]
    pub low_cut_off: f32,
    pub mid1_gain: i32,
    #[default(EqualizerProps::DEFAULT_MID1_CENTER)]
    pub mid1_center: f32,
    #[default(EqualizerProps::DEFAULT_MID1_WIDTH)]
    pub mid1_width: f32,
    pub mid2_gain: i32,
    #[default(EqualizerProps::DEFAULT_MID2_CENTER)]
    pub mid2_center: f32,
    #[default(EqualizerProps::DEFAULT_MID2_WIDTH)]
    pub mid2_width: f32,
    pub high_gain: i32,
    #[default(EqualizerProps::DEFAULT_HIGH_CUT_OFF)]
    pub high_cut_off: f32,
}

impl EqualizerProps {
    pub const MIN_GAIN: i32 = -1_800;
    pub const MAX_GAIN: i32 = 1_800;

    pub const MIN_LOW_CUT_OFF: f32 = 50.0;
    pub const MAX_LOW_CUT_OFF: f32 = 800.0;
    pub const DEFAULT_LOW_CUT_OFF: f32 = 200.0;

    pub const MIN_MID1_CENTER: f32 = 200.0;
    pub const MAX_MID1_CENTER: f32 = 3_000.0;
    pub const DEFAULT_MID1_CENTER: f32 = 500.0;

    pub const MIN_MID1_WIDTH: f32 = 0.01;
    pub const MAX_MID1_WIDTH: f32 = 1.0;
    pub const DEFAULT_MID1_WIDTH: f32 = 1.0;

    pub const MIN_MID2_CENTER: f32 = 1_000.0;
    pub const MAX_MID2_CENTER: f32 = 8_000.0;
    pub const DEFAULT_MID2_CENTER: f32 = 3_000.0;

    pub const MIN_MID2_WIDTH: f32 = 0.01;
    pub const MAX_MID2_WIDTH: f32 = 1.0;
    pub const DEFAULT_MID2_WIDTH: f32 = 1.0;

    pub const MIN_HIGH_CUT_OFF: f32 = 4_000.0;
    pub const MAX_HIGH_CUT_OFF: f32 = 16_000.0;
    pub const DEFAULT_HIGH_CUT_OFF: f32 = 6_000.0;
}

// Flanger.

pub const FLANGER_NONE: u32 = 0;
pub const FLANGER_ALLPARAMETERS: u32 = 1;
pub const FLANGER_WAVEFORM: u32 = 2;
pub const FLANGER_PHASE: u32 = 3;
pub const FLANGER_RATE: u32 = 4;
pub const FLANGER_DEPTH: u32 = 5;
pub const FLANGER_FEEDBACK: u32 = 6;
pub const FLANGER_DELAY: u32 = 7;

pub const FLANGER_WAVEFORM_SINUSOID: u32 = 0;
pub const FLANGER_WAVEFORM_TRIANGLE: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct FlangerProps {
    #[default(FLANGER_WAVEFORM_TRIANGLE)]
    pub waveform: u32,
    pub phase: i32,
    #[default(FlangerProps::DEFAULT_RATE)]
    pub rate: f32,
    #[default(FlangerProps::DEFAULT_DEPTH)]
    pub depth: f32,
    #[default(FlangerProps::DEFAULT_FEEDBACK)]
    pub feedback: f32,
    #[default(FlangerProps::DEFAULT_DELAY)]
    pub delay: f32,
}

impl FlangerProps {
    pub const MIN_WAVEFORM: u32 = 0;
    pub const MAX_WAVEFORM: u32 = 1;

    pub const MIN_PHASE: i32 = -180;
    pub const MAX_PHASE: i32 = 180;
    pub const DEFAULT_PHASE: i32 = 0;

    pub const MIN_RATE: f32 = 0.0;
    pub const MAX_RATE: f32 = 10.0;
    pub const DEFAULT_RATE: f32 = 0.27;

    pub const MIN_DEPTH: f32 = 0.0;
    pub const MAX_DEPTH: f32 = 1.0;
    pub const DEFAULT_DEPTH: f32 = 1.0;

    pub const MIN_FEEDBACK: f32 = -1.0;
    pub const MAX_FEEDBACK: f32 = 1.0;
    pub const DEFAULT_FEEDBACK: f32 = -0.5;

    pub const MIN_DELAY: f32 = 0.0002;
    pub const MAX_DELAY: f32 = 0.004;
    pub const DEFAULT_DELAY: f32 = 0.002;
}

// Frequency shifter.

pub const FREQUENCY_SHIFTER_NONE: u32 = 0;
pub const FREQUENCY_SHIFTER_ALLPARAMETERS: u32 = 1;
pub const FREQUENCY_SHIFTER_FREQUENCY: u32 = 2;
pub const FREQUENCY_SHIFTER_LEFTDIRECTION: u32 = 3;
pub const FREQUENCY_SHIFTER_RIGHTDIRECTION: u32 = 4;

pub const FREQUENCY_SHIFTER_DOWN: u32 = 0;
pub const FREQUENCY_SHIFTER_UP: u32 = 1;
pub const FREQUENCY_SHIFTER_OFF: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct FrequencyShifterProps {
    pub frequency: f32,
    #[default(FREQUENCY_SHIFTER_DOWN)]
    pub left_direction: u32,
    #[default(FREQUENCY_SHIFTER_DOWN)]
    pub right_direction: u32,
}

impl FrequencyShifterProps {
    pub const MIN_FREQUENCY: f32 = 0.0;
    pub const MAX_FREQUENCY: f32 = 24_000.0;
    pub const DEFAULT_FREQUENCY: f32 = 0.0;

    pub const MIN_DIRECTION: u32 = 0;
    pub const MAX_DIRECTION: u32 = 2;
}

// Vocal morpher.

pub const VOCAL_MORPHER_NONE: u32 = 0;
pub const VOCAL_MORPHER_ALLPARAMETERS: u32 = 1;
pub const VOCAL_MORPHER_PHONEMEA: u32 = 2;
pub const VOCAL_MORPHER_PHONEMEACOARSETUNING: u32 = 3;
pub const VOCAL_MORPHER_PHONEMEB: u32 = 4;
pub const VOCAL_MORPHER_PHONEMEBCOARSETUNING: u32 = 5;
pub const VOCAL_MORPHER_WAVEFORM: u32 = 6;
pub const VOCAL_MORPHER_RATE: u32 = 7;

pub const VOCAL_MORPHER_WAVEFORM_SINUSOID: u32 = 0;
pub const VOCAL_MORPHER_WAVEFORM_TRIANGLE: u32 = 1;
pub const VOCAL_MORPHER_WAVEFORM_SAWTOOTH: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct VocalMorpherProps {
    pub phoneme_a: u32,
    pub phoneme_a_coarse_tuning: i32,
    #[default(VocalMorpherProps::DEFAULT_PHONEME_B)]
    pub phoneme_b: u32,
    pub phoneme_b_coarse_tuning: i32,
    #[default(VOCAL_MORPHER_WAVEFORM_SINUSOID)]
    pub waveform: u32,
    #[default(VocalMorpherProps::DEFAULT_RATE)]
    pub rate: f32,
}

impl VocalMorpherProps {
    pub const MIN_PHONEME: u32 = 0;
    pub const MAX_PHONEME: u32 = 29;
    pub const DEFAULT_PHONEME_B: u32 = 10;

    pub const MIN_COARSE_TUNING: i32 = -24;
    pub const MAX_COARSE_TUNING: i32 = 24;

    pub const MIN_WAVEFORM: u32 = 0;
    pub const MAX_WAVEFORM: u32 = 2;

    pub const MIN_RATE: f32 = 0.0;
    pub const MAX_RATE: f32 = 10.0;
    pub const DEFAULT_RATE: f32 = 1.41;
}

// Pitch shifter.

pub const PITCH_SHIFTER_NONE: u32 = 0;
pub const PITCH_SHIFTER_ALLPARAMETERS: u32 = 1;
pub const PITCH_SHIFTER_COARSETUNE: u32 = 2;
pub const PITCH_SHIFTER_FINETUNE: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct PitchShifterProps {
    #[default(PitchShifterProps::DEFAULT_COARSE_TUNE)]
    pub coarse_tune: i32,
    pub fine_tune: i32,
}

impl PitchShifterProps {
    pub const MIN_COARSE_TUNE: i32 = -12;
    pub const MAX_COARSE_TUNE: i32 = 12;
    pub const DEFAULT_COARSE_TUNE: i32 = 12;

    pub const MIN_FINE_TUNE: i32 = -50;
    pub const MAX_FINE_TUNE: i32 = 50;
    pub const DEFAULT_FINE_TUNE: i32 = 0;
}

// Ring modulator.

pub const RING_MODULATOR_NONE: u32 = 0;
pub const RING_MODULATOR_ALLPARAMETERS: u32 = 1;
pub const RING_MODULATOR_FREQUENCY: u32 = 2;
pub const RING_MODULATOR_HIGHPASSCUTOFF: u32 = 3;
pub const RING_MODULATOR_WAVEFORM: u32 = 4;

pub const RING_MODULATOR_WAVEFORM_SINUSOID: u32 = 0;
pub const RING_MODULATOR_WAVEFORM_SAWTOOTH: u32 = 1;
pub const RING_MODULATOR_WAVEFORM_SQUARE: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct RingModulatorProps {
    #[default(RingModulatorProps::DEFAULT_FREQUENCY)]
    pub frequency: f32,
    #[default(RingModulatorProps::DEFAULT_HIGH_PASS_CUT_OFF)]
    pub high_pass_cut_off: f32,
    #[default(RING_MODULATOR_WAVEFORM_SINUSOID)]
    pub waveform: u32,
}

impl RingModulatorProps {
    pub const MIN_FREQUENCY: f32 = 0.0;
    pub const MAX_FREQUENCY: f32 = 8_000.0;
    pub const DEFAULT_FREQUENCY: f32 = 440.0;

    pub const MIN_HIGH_PASS_CUT_OFF: f32 = 0.0;
    pub const MAX_HIGH_PASS_CUT_OFF: f32 = 24_000.0;
    pub const DEFAULT_HIGH_PASS_CUT_OFF: f32 = 800.0;

    pub const MIN_WAVEFORM: u32 = 0;
    pub const MAX_WAVEFORM: u32 = 2;
}

static_assertions::assert_eq_size!(ReverbProps, [u8; 112]);
static_assertions::assert_eq_size!(Listener20Props, [u8; 56]);
static_assertions::assert_eq_size!(ChorusProps, [u8; 24]);
static_assertions::assert_eq_size!(EqualizerProps, [u8; 40]);
static_assertions::assert_eq_size!(VocalMorpherProps, [u8; 24]);
