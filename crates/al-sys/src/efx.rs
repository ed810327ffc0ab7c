//! EFX 1.0 constants: extension enums, effect/filter/slot parameters, and
//! the documented parameter ranges the conversion layer clamps against.

use crate::{ALCenum, ALenum, ALfloat, ALint};

pub const ALC_EXT_EFX_NAME: &std::ffi::CStr = c"ALC_EXT_EFX";

pub const ALC_EFX_MAJOR_VERSION: ALCenum = 0x20001;
pub const ALC_EFX_MINOR_VERSION: ALCenum = 0x20002;
pub const ALC_MAX_AUXILIARY_SENDS: ALCenum = 0x20003;

// Source properties.
pub const AL_DIRECT_FILTER: ALenum = 0x20005;
pub const AL_AUXILIARY_SEND_FILTER: ALenum = 0x20006;
pub const AL_AIR_ABSORPTION_FACTOR: ALenum = 0x20007;
pub const AL_ROOM_ROLLOFF_FACTOR: ALenum = 0x20008;
pub const AL_CONE_OUTER_GAINHF: ALenum = 0x20009;
pub const AL_DIRECT_FILTER_GAINHF_AUTO: ALenum = 0x2000A;
pub const AL_AUXILIARY_SEND_FILTER_GAIN_AUTO: ALenum = 0x2000B;
pub const AL_AUXILIARY_SEND_FILTER_GAINHF_AUTO: ALenum = 0x2000C;

// Effect object parameters.
pub const AL_EFFECT_FIRST_PARAMETER: ALenum = 0x0000;
pub const AL_EFFECT_LAST_PARAMETER: ALenum = 0x8000;
pub const AL_EFFECT_TYPE: ALenum = 0x8001;

// Effect types.
pub const AL_EFFECT_NULL: ALint = 0x0000;
pub const AL_EFFECT_REVERB: ALint = 0x0001;
pub const AL_EFFECT_CHORUS: ALint = 0x0002;
pub const AL_EFFECT_DISTORTION: ALint = 0x0003;
pub const AL_EFFECT_ECHO: ALint = 0x0004;
pub const AL_EFFECT_FLANGER: ALint = 0x0005;
pub const AL_EFFECT_FREQUENCY_SHIFTER: ALint = 0x0006;
pub const AL_EFFECT_VOCAL_MORPHER: ALint = 0x0007;
pub const AL_EFFECT_PITCH_SHIFTER: ALint = 0x0008;
pub const AL_EFFECT_RING_MODULATOR: ALint = 0x0009;
pub const AL_EFFECT_AUTOWAH: ALint = 0x000A;
pub const AL_EFFECT_COMPRESSOR: ALint = 0x000B;
pub const AL_EFFECT_EQUALIZER: ALint = 0x000C;
pub const AL_EFFECT_EAXREVERB: ALint = 0x8000;

// EAX reverb effect parameters.
pub const AL_EAXREVERB_DENSITY: ALenum = 0x0001;
pub const AL_EAXREVERB_DIFFUSION: ALenum = 0x0002;
pub const AL_EAXREVERB_GAIN: ALenum = 0x0003;
pub const AL_EAXREVERB_GAINHF: ALenum = 0x0004;
pub const AL_EAXREVERB_GAINLF: ALenum = 0x0005;
pub const AL_EAXREVERB_DECAY_TIME: ALenum = 0x0006;
pub const AL_EAXREVERB_DECAY_HFRATIO: ALenum = 0x0007;
pub const AL_EAXREVERB_DECAY_LFRATIO: ALenum = 0x0008;
pub const AL_EAXREVERB_REFLECTIONS_GAIN: ALenum = 0x0009;
pub const AL_EAXREVERB_REFLECTIONS_DELAY: ALenum = 0x000A;
pub const AL_EAXREVERB_REFLECTIONS_PAN: ALenum = 0x000B;
pub const AL_EAXREVERB_LATE_REVERB_GAIN: ALenum = 0x000C;
pub const AL_EAXREVERB_LATE_REVERB_DELAY: ALenum = 0x000D;
pub const AL_EAXREVERB_LATE_REVERB_PAN: ALenum = 0x000E;
pub const AL_EAXREVERB_ECHO_TIME: ALenum = 0x000F;
pub const AL_EAXREVERB_ECHO_DEPTH: ALenum = 0x0010;
pub const AL_EAXREVERB_MODULATION_TIME: ALenum = 0x0011;
pub const AL_EAXREVERB_MODULATION_DEPTH: ALenum = 0x0012;
pub const AL_EAXREVERB_AIR_ABSORPTION_GAINHF: ALenum = 0x0013;
pub const AL_EAXREVERB_HFREFERENCE: ALenum = 0x0014;
pub const AL_EAXREVERB_LFREFERENCE: ALenum = 0x0015;
pub const AL_EAXREVERB_ROOM_ROLLOFF_FACTOR: ALenum = 0x0016;
pub const AL_EAXREVERB_DECAY_HFLIMIT: ALenum = 0x0017;

// Chorus effect parameters.
pub const AL_CHORUS_WAVEFORM: ALenum = 0x0001;
pub const AL_CHORUS_PHASE: ALenum = 0x0002;
pub const AL_CHORUS_RATE: ALenum = 0x0003;
pub const AL_CHORUS_DEPTH: ALenum = 0x0004;
pub const AL_CHORUS_FEEDBACK: ALenum = 0x0005;
pub const AL_CHORUS_DELAY: ALenum = 0x0006;

// Distortion effect parameters.
pub const AL_DISTORTION_EDGE: ALenum = 0x0001;
pub const AL_DISTORTION_GAIN: ALenum = 0x0002;
pub const AL_DISTORTION_LOWPASS_CUTOFF: ALenum = 0x0003;
pub const AL_DISTORTION_EQCENTER: ALenum = 0x0004;
pub const AL_DISTORTION_EQBANDWIDTH: ALenum = 0x0005;

// Echo effect parameters.
pub const AL_ECHO_DELAY: ALenum = 0x0001;
pub const AL_ECHO_LRDELAY: ALenum = 0x0002;
pub const AL_ECHO_DAMPING: ALenum = 0x0003;
pub const AL_ECHO_FEEDBACK: ALenum = 0x0004;
pub const AL_ECHO_SPREAD: ALenum = 0x0005;

// Flanger effect parameters.
pub const AL_FLANGER_WAVEFORM: ALenum = 0x0001;
pub const AL_FLANGER_PHASE: ALenum = 0x0002;
pub const AL_FLANGER_RATE: ALenum = 0x0003;
pub const AL_FLANGER_DEPTH: ALenum = 0x0004;
pub const AL_FLANGER_FEEDBACK: ALenum = 0x0005;
pub const AL_FLANGER_DELAY: ALenum = 0x0006;

// Frequency shifter effect parameters.
pub const AL_FREQUENCY_SHIFTER_FREQUENCY: ALenum = 0x0001;
pub const AL_FREQUENCY_SHIFTER_LEFT_DIRECTION: ALenum = 0x0002;
pub const AL_FREQUENCY_SHIFTER_RIGHT_DIRECTION: ALenum = 0x0003;

// Vocal morpher effect parameters.
pub const AL_VOCAL_MORPHER_PHONEMEA: ALenum = 0x0001;
pub const AL_VOCAL_MORPHER_PHONEMEA_COARSE_TUNING: ALenum = 0x0002;
pub const AL_VOCAL_MORPHER_PHONEMEB: ALenum = 0x0003;
pub const AL_VOCAL_MORPHER_PHONEMEB_COARSE_TUNING: ALenum = 0x0004;
pub const AL_VOCAL_MORPHER_WAVEFORM: ALenum = 0x0005;
pub const AL_VOCAL_MORPHER_RATE: ALenum = 0x0006;

// Pitch shifter effect parameters.
pub const AL_PITCH_SHIFTER_COARSE_TUNE: ALenum = 0x0001;
pub const AL_PITCH_SHIFTER_FINE_TUNE: ALenum = 0x0002;

// Ring modulator effect parameters.
pub const AL_RING_MODULATOR_FREQUENCY: ALenum = 0x0001;
pub const AL_RING_MODULATOR_HIGHPASS_CUTOFF: ALenum = 0x0002;
pub const AL_RING_MODULATOR_WAVEFORM: ALenum = 0x0003;

// Autowah effect parameters.
pub const AL_AUTOWAH_ATTACK_TIME: ALenum = 0x0001;
pub const AL_AUTOWAH_RELEASE_TIME: ALenum = 0x0002;
pub const AL_AUTOWAH_RESONANCE: ALenum = 0x0003;
pub const AL_AUTOWAH_PEAK_GAIN: ALenum = 0x0004;

// Compressor effect parameters.
pub const AL_COMPRESSOR_ONOFF: ALenum = 0x0001;

// Equalizer effect parameters.
pub const AL_EQUALIZER_LOW_GAIN: ALenum = 0x0001;
pub const AL_EQUALIZER_LOW_CUTOFF: ALenum = 0x0002;
pub const AL_EQUALIZER_MID1_GAIN: ALenum = 0x0003;
pub const AL_EQUALIZER_MID1_CENTER: ALenum = 0x0004;
pub const AL_EQUALIZER_MID1_WIDTH: ALenum = 0x0005;
pub const AL_EQUALIZER_MID2_GAIN: ALenum = 0x0006;
pub const AL_EQUALIZER_MID2_CENTER: ALenum = 0x0007;
pub const AL_EQUALIZER_MID2_WIDTH: ALenum = 0x0008;
pub const AL_EQUALIZER_HIGH_GAIN: ALenum = 0x0009;
pub const AL_EQUALIZER_HIGH_CUTOFF: ALenum = 0x000A;

// Auxiliary effect slot parameters.
pub const AL_EFFECTSLOT_NULL: ALint = 0x0000;
pub const AL_EFFECTSLOT_EFFECT: ALenum = 0x0001;
pub const AL_EFFECTSLOT_GAIN: ALenum = 0x0002;
pub const AL_EFFECTSLOT_AUXILIARY_SEND_AUTO: ALenum = 0x0003;

// Filter object parameters.
pub const AL_FILTER_FIRST_PARAMETER: ALenum = 0x0000;
pub const AL_FILTER_LAST_PARAMETER: ALenum = 0x8000;
pub const AL_FILTER_TYPE: ALenum = 0x8001;

pub const AL_FILTER_NULL: ALint = 0x0000;
pub const AL_FILTER_LOWPASS: ALint = 0x0001;
pub const AL_FILTER_HIGHPASS: ALint = 0x0002;
pub const AL_FILTER_BANDPASS: ALint = 0x0003;

pub const AL_LOWPASS_GAIN: ALenum = 0x0001;
pub const AL_LOWPASS_GAINHF: ALenum = 0x0002;

// Parameter ranges.

pub const AL_LOWPASS_MIN_GAIN: ALfloat = 0.0;
pub const AL_LOWPASS_MAX_GAIN: ALfloat = 1.0;
pub const AL_LOWPASS_MIN_GAINHF: ALfloat = 0.0;
pub const AL_LOWPASS_MAX_GAINHF: ALfloat = 1.0;

pub const AL_EFFECTSLOT_MIN_GAIN: ALfloat = 0.0;
pub const AL_EFFECTSLOT_MAX_GAIN: ALfloat = 1.0;

pub const AL_EAXREVERB_MIN_DENSITY: ALfloat = 0.0;
pub const AL_EAXREVERB_MAX_DENSITY: ALfloat = 1.0;
pub const AL_EAXREVERB_MIN_DIFFUSION: ALfloat = 0.0;
pub const AL_EAXREVERB_MAX_DIFFUSION: ALfloat = 1.0;
pub const AL_EAXREVERB_MIN_GAIN: ALfloat = 0.0;
pub const AL_EAXREVERB_MAX_GAIN: ALfloat = 1.0;
pub const AL_EAXREVERB_MIN_GAINHF: ALfloat = 0.0;
pub const AL_EAXREVERB_MAX_GAINHF: ALfloat = 1.0;
pub const AL_EAXREVERB_MIN_GAINLF: ALfloat = 0.0;
pub const AL_EAXREVERB_MAX_GAINLF: ALfloat = 1.0;
pub const AL_EAXREVERB_MIN_DECAY_TIME: ALfloat = 0.1;
pub const AL_EAXREVERB_MAX_DECAY_TIME: ALfloat = 20.0;
pub const AL_EAXREVERB_MIN_DECAY_HFRATIO: ALfloat = 0.1;
pub const AL_EAXREVERB_MAX_DECAY_HFRATIO: ALfloat = 2.0;
pub const AL_EAXREVERB_MIN_DECAY_LFRATIO: ALfloat = 0.1;
pub const AL_EAXREVERB_MAX_DECAY_LFRATIO: ALfloat = 2.0;
pub const AL_EAXREVERB_MIN_REFLECTIONS_GAIN: ALfloat = 0.0;
pub const AL_EAXREVERB_MAX_REFLECTIONS_GAIN: ALfloat = 3.16;
pub const AL_EAXREVERB_MIN_REFLECTIONS_DELAY: ALfloat = 0.0;
pub const AL_EAXREVERB_MAX_REFLECTIONS_DELAY: ALfloat = 0.3;
pub const AL_EAXREVERB_MIN_LATE_REVERB_GAIN: ALfloat = 0.0;
pub const AL_EAXREVERB_MAX_LATE_REVERB_GAIN: ALfloat = 10.0;
pub const AL_EAXREVERB_MIN_LATE_REVERB_DELAY: ALfloat = 0.0;
pub const AL_EAXREVERB_MAX_LATE_REVERB_DELAY: ALfloat = 0.1;
pub const AL_EAXREVERB_MIN_ECHO_TIME: ALfloat = 0.075;
pub const AL_EAXREVERB_MAX_ECHO_TIME: ALfloat = 0.25;
pub const AL_EAXREVERB_MIN_ECHO_DEPTH: ALfloat = 0.0;
pub const AL_EAXREVERB_MAX_ECHO_DEPTH: ALfloat = 1.0;
pub const AL_EAXREVERB_MIN_MODULATION_TIME: ALfloat = 0.04;
pub const AL_EAXREVERB_MAX_MODULATION_TIME: ALfloat = 4.0;
pub const AL_EAXREVERB_MIN_MODULATION_DEPTH: ALfloat = 0.0;
pub const AL_EAXREVERB_MAX_MODULATION_DEPTH: ALfloat = 1.0;
pub const AL_EAXREVERB_MIN_AIR_ABSORPTION_GAINHF: ALfloat = 0.892;
pub const AL_EAXREVERB_MAX_AIR_ABSORPTION_GAINHF: ALfloat = 1.0;
pub const AL_EAXREVERB_MIN_HFREFERENCE: ALfloat = 1000.0;
pub const AL_EAXREVERB_MAX_HFREFERENCE: ALfloat = 20000.0;
pub const AL_EAXREVERB_MIN_LFREFERENCE: ALfloat = 20.0;
pub const AL_EAXREVERB_MAX_LFREFERENCE: ALfloat = 1000.0;
pub const AL_EAXREVERB_MIN_ROOM_ROLLOFF_FACTOR: ALfloat = 0.0;
pub const AL_EAXREVERB_MAX_ROOM_ROLLOFF_FACTOR: ALfloat = 10.0;

pub const AL_CHORUS_MIN_WAVEFORM: ALint = 0;
pub const AL_CHORUS_MAX_WAVEFORM: ALint = 1;
pub const AL_CHORUS_MIN_PHASE: ALint = -90;
pub const AL_CHORUS_MAX_PHASE: ALint = 90;
pub const AL_CHORUS_MIN_RATE: ALfloat = 0.0;
pub const AL_CHORUS_MAX_RATE: ALfloat = 10.0;
pub const AL_CHORUS_MIN_DEPTH: ALfloat = 0.0;
pub const AL_CHORUS_MAX_DEPTH: ALfloat = 1.0;
pub const AL_CHORUS_MIN_FEEDBACK: ALfloat = -1.0;
pub const AL_CHORUS_MAX_FEEDBACK: ALfloat = 1.0;
pub const AL_CHORUS_MIN_DELAY: ALfloat = 0.0;
pub const AL_CHORUS_MAX_DELAY: ALfloat = 0.016;

pub const AL_DISTORTION_MIN_EDGE: ALfloat = 0.0;
pub const AL_DISTORTION_MAX_EDGE: ALfloat = 1.0;
pub const AL_DISTORTION_MIN_GAIN: ALfloat = 0.01;
pub const AL_DISTORTION_MAX_GAIN: ALfloat = 1.0;
pub const AL_DISTORTION_MIN_LOWPASS_CUTOFF: ALfloat = 80.0;
pub const AL_DISTORTION_MAX_LOWPASS_CUTOFF: ALfloat = 24000.0;
pub const AL_DISTORTION_MIN_EQCENTER: ALfloat = 80.0;
pub const AL_DISTORTION_MAX_EQCENTER: ALfloat = 24000.0;
pub const AL_DISTORTION_MIN_EQBANDWIDTH: ALfloat = 80.0;
pub const AL_DISTORTION_MAX_EQBANDWIDTH: ALfloat = 24000.0;

pub const AL_ECHO_MIN_DELAY: ALfloat = 0.0;
pub const AL_ECHO_MAX_DELAY: ALfloat = 0.207;
pub const AL_ECHO_MIN_LRDELAY: ALfloat = 0.0;
pub const AL_ECHO_MAX_LRDELAY: ALfloat = 0.404;
pub const AL_ECHO_MIN_DAMPING: ALfloat = 0.0;
pub const AL_ECHO_MAX_DAMPING: ALfloat = 0.99;
pub const AL_ECHO_MIN_FEEDBACK: ALfloat = 0.0;
pub const AL_ECHO_MAX_FEEDBACK: ALfloat = 1.0;
pub const AL_ECHO_MIN_SPREAD: ALfloat = -1.0;
pub const AL_ECHO_MAX_SPREAD: ALfloat = 1.0;

pub const AL_FLANGER_MIN_WAVEFORM: ALint = 0;
pub const AL_FLANGER_MAX_WAVEFORM: ALint = 1;
pub const AL_FLANGER_MIN_PHASE: ALint = -90;
pub const AL_FLANGER_MAX_PHASE: ALint = 90;
pub const AL_FLANGER_MIN_RATE: ALfloat = 0.0;
pub const AL_FLANGER_MAX_RATE: ALfloat = 10.0;
pub const AL_FLANGER_MIN_DEPTH: ALfloat = 0.0;
pub const AL_FLANGER_MAX_DEPTH: ALfloat = 1.0;
pub const AL_FLANGER_MIN_FEEDBACK: ALfloat = -1.0;
pub const AL_FLANGER_MAX_FEEDBACK: ALfloat = 1.0;
pub const AL_FLANGER_MIN_DELAY: ALfloat = 0.0;
pub const AL_FLANGER_MAX_DELAY: ALfloat = 0.004;

pub const AL_FREQUENCY_SHIFTER_MIN_FREQUENCY: ALfloat = 0.0;
pub const AL_FREQUENCY_SHIFTER_MAX_FREQUENCY: ALfloat = 24000.0;
pub const AL_FREQUENCY_SHIFTER_MIN_LEFT_DIRECTION: ALint = 0;
pub const AL_FREQUENCY_SHIFTER_MAX_LEFT_DIRECTION: ALint = 2;
pub const AL_FREQUENCY_SHIFTER_MIN_RIGHT_DIRECTION: ALint = 0;
pub const AL_FREQUENCY_SHIFTER_MAX_RIGHT_DIRECTION: ALint = 2;

pub const AL_VOCAL_MORPHER_MIN_PHONEMEA: ALint = 0;
pub const AL_VOCAL_MORPHER_MAX_PHONEMEA: ALint = 29;
pub const AL_VOCAL_MORPHER_MIN_PHONEMEA_COARSE_TUNING: ALint = -24;
pub const AL_VOCAL_MORPHER_MAX_PHONEMEA_COARSE_TUNING: ALint = 24;
pub const AL_VOCAL_MORPHER_MIN_PHONEMEB: ALint = 0;
pub const AL_VOCAL_MORPHER_MAX_PHONEMEB: ALint = 29;
pub const AL_VOCAL_MORPHER_MIN_PHONEMEB_COARSE_TUNING: ALint = -24;
pub const AL_VOCAL_MORPHER_MAX_PHONEMEB_COARSE_TUNING: ALint = 24;
pub const AL_VOCAL_MORPHER_MIN_WAVEFORM: ALint = 0;
pub const AL_VOCAL_MORPHER_MAX_WAVEFORM: ALint = 2;
pub const AL_VOCAL_MORPHER_MIN_RATE: ALfloat = 0.0;
pub const AL_VOCAL_MORPHER_MAX_RATE: ALfloat = 10.0;

pub const AL_PITCH_SHIFTER_MIN_COARSE_TUNE: ALint = -12;
pub const AL_PITCH_SHIFTER_MAX_COARSE_TUNE: ALint = 12;
pub const AL_PITCH_SHIFTER_MIN_FINE_TUNE: ALint = -50;
pub const AL_PITCH_SHIFTER_MAX_FINE_TUNE: ALint = 50;

pub const AL_RING_MODULATOR_MIN_FREQUENCY: ALfloat = 0.0;
pub const AL_RING_MODULATOR_MAX_FREQUENCY: ALfloat = 8000.0;
pub const AL_RING_MODULATOR_MIN_HIGHPASS_CUTOFF: ALfloat = 0.0;
pub const AL_RING_MODULATOR_MAX_HIGHPASS_CUTOFF: ALfloat = 24000.0;
pub const AL_RING_MODULATOR_MIN_WAVEFORM: ALint = 0;
pub const AL_RING_MODULATOR_MAX_WAVEFORM: ALint = 2;

pub const AL_AUTOWAH_MIN_ATTACK_TIME: ALfloat = 0.0001;
pub const AL_AUTOWAH_MAX_ATTACK_TIME: ALfloat = 1.0;
pub const AL_AUTOWAH_MIN_RELEASE_TIME: ALfloat = 0.0001;
pub const AL_AUTOWAH_MAX_RELEASE_TIME: ALfloat = 1.0;
pub const AL_AUTOWAH_MIN_RESONANCE: ALfloat = 2.0;
pub const AL_AUTOWAH_MAX_RESONANCE: ALfloat = 1000.0;
pub const AL_AUTOWAH_MIN_PEAK_GAIN: ALfloat = 0.00003;
pub const AL_AUTOWAH_MAX_PEAK_GAIN: ALfloat = 31621.0;

pub const AL_COMPRESSOR_MIN_ONOFF: ALint = 0;
pub const AL_COMPRESSOR_MAX_ONOFF: ALint = 1;

pub const AL_EQUALIZER_MIN_LOW_GAIN: ALfloat = 0.126;
pub const AL_EQUALIZER_MAX_LOW_GAIN: ALfloat = 7.943;
pub const AL_EQUALIZER_MIN_LOW_CUTOFF: ALfloat = 50.0;
pub const AL_EQUALIZER_MAX_LOW_CUTOFF: ALfloat = 800.0;
pub const AL_EQUALIZER_MIN_MID1_GAIN: ALfloat = 0.126;
pub const AL_EQUALIZER_MAX_MID1_GAIN: ALfloat = 7.943;
pub const AL_EQUALIZER_MIN_MID1_CENTER: ALfloat = 200.0;
pub const AL_EQUALIZER_MAX_MID1_CENTER: ALfloat = 3000.0;
pub const AL_EQUALIZER_MIN_MID1_WIDTH: ALfloat = 0.01;
pub const AL_EQUALIZER_MAX_MID1_WIDTH: ALfloat = 1.0;
pub const AL_EQUALIZER_MIN_MID2_GAIN: ALfloat = 0.126;
pub const AL_EQUALIZER_MAX_MID2_GAIN: ALfloat = 7.943;
pub const AL_EQUALIZER_MIN_MID2_CENTER: ALfloat = 1000.0;
pub const AL_EQUALIZER_MAX_MID2_CENTER: ALfloat = 8000.0;
pub const AL_EQUALIZER_MIN_MID2_WIDTH: ALfloat = 0.01;
pub const AL_EQUALIZER_MAX_MID2_WIDTH: ALfloat = 1.0;
pub const AL_EQUALIZER_MIN_HIGH_GAIN: ALfloat = 0.126;
pub const AL_EQUALIZER_MAX_HIGH_GAIN: ALfloat = 7.943;
pub const AL_EQUALIZER_MIN_HIGH_CUTOFF: ALfloat = 4000.0;
pub const AL_EQUALIZER_MAX_HIGH_CUTOFF: ALfloat = 16000.0;
