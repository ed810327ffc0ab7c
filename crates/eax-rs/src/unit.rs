//! Pure numeric conversions from EAX units to EFX units.
//!
//! The legacy API measures levels in millibels (hundredths of a decibel);
//! EFX wants linear gains. `10^(mB/2000)` maps one to the other, and every
//! converter clamps the result to the EFX field it targets so a legal EAX
//! value can never produce an out-of-range EFX write.

use al_sys::*;

/// Millibels to linear gain, unclamped.
pub fn mb_to_gain(mb: f32) -> f32 {
    10.0f32.powf(mb / 2_000.0)
}

/// Millibels to linear gain for send/volume levels: the input is first
/// clamped to the ±10000 mB window those properties use, the output to the
/// unit interval.
pub fn level_mb_to_gain(mb: i32) -> f32 {
    let mb = mb.clamp(-10_000, 10_000) as f32;
    mb_to_gain(mb).clamp(0.0, 1.0)
}

fn clamped(mb_gain: f32, min: f32, max: f32) -> f32 {
    mb_gain.clamp(min, max)
}

/// Converters for the EAX reverb targets.
pub mod reverb {
    use super::*;

    /// Environment size to EFX density, per the documented large-room model.
    pub fn density(environment_size: f32) -> f32 {
        let density = (environment_size * environment_size * environment_size) / 16.0;
        clamped(density, AL_EAXREVERB_MIN_DENSITY, AL_EAXREVERB_MAX_DENSITY)
    }

    pub fn diffusion(environment_diffusion: f32) -> f32 {
        clamped(
            environment_diffusion,
            AL_EAXREVERB_MIN_DIFFUSION,
            AL_EAXREVERB_MAX_DIFFUSION,
        )
    }

    pub fn gain(room: i32) -> f32 {
        clamped(
            mb_to_gain(room as f32),
            AL_EAXREVERB_MIN_GAIN,
            AL_EAXREVERB_MAX_GAIN,
        )
    }

    pub fn gain_hf(room_hf: i32) -> f32 {
        clamped(
            mb_to_gain(room_hf as f32),
            AL_EAXREVERB_MIN_GAINHF,
            AL_EAXREVERB_MAX_GAINHF,
        )
    }

    pub fn gain_lf(room_lf: i32) -> f32 {
        clamped(
            mb_to_gain(room_lf as f32),
            AL_EAXREVERB_MIN_GAINLF,
            AL_EAXREVERB_MAX_GAINLF,
        )
    }

    pub fn decay_time(decay_time: f32) -> f32 {
        clamped(
            decay_time,
            AL_EAXREVERB_MIN_DECAY_TIME,
            AL_EAXREVERB_MAX_DECAY_TIME,
        )
    }

    pub fn decay_hf_ratio(ratio: f32) -> f32 {
        clamped(
            ratio,
            AL_EAXREVERB_MIN_DECAY_HFRATIO,
            AL_EAXREVERB_MAX_DECAY_HFRATIO,
        )
    }

    pub fn decay_lf_ratio(ratio: f32) -> f32 {
        clamped(
            ratio,
            AL_EAXREVERB_MIN_DECAY_LFRATIO,
            AL_EAXREVERB_MAX_DECAY_LFRATIO,
        )
    }

    pub fn reflections_gain(reflections: i32) -> f32 {
        clamped(
            mb_to_gain(reflections as f32),
            AL_EAXREVERB_MIN_REFLECTIONS_GAIN,
            AL_EAXREVERB_MAX_REFLECTIONS_GAIN,
        )
    }

    pub fn reflections_delay(delay: f32) -> f32 {
        clamped(
            delay,
            AL_EAXREVERB_MIN_REFLECTIONS_DELAY,
            AL_EAXREVERB_MAX_REFLECTIONS_DELAY,
        )
    }

    pub fn late_reverb_gain(reverb: i32) -> f32 {
        clamped(
            mb_to_gain(reverb as f32),
            AL_EAXREVERB_MIN_LATE_REVERB_GAIN,
            AL_EAXREVERB_MAX_LATE_REVERB_GAIN,
        )
    }

    pub fn late_reverb_delay(delay: f32) -> f32 {
        clamped(
            delay,
            AL_EAXREVERB_MIN_LATE_REVERB_DELAY,
            AL_EAXREVERB_MAX_LATE_REVERB_DELAY,
        )
    }

    pub fn echo_time(time: f32) -> f32 {
        clamped(time, AL_EAXREVERB_MIN_ECHO_TIME, AL_EAXREVERB_MAX_ECHO_TIME)
    }

    pub fn echo_depth(depth: f32) -> f32 {
        clamped(
            depth,
            AL_EAXREVERB_MIN_ECHO_DEPTH,
            AL_EAXREVERB_MAX_ECHO_DEPTH,
        )
    }

    pub fn modulation_time(time: f32) -> f32 {
        clamped(
            time,
            AL_EAXREVERB_MIN_MODULATION_TIME,
            AL_EAXREVERB_MAX_MODULATION_TIME,
        )
    }

    pub fn modulation_depth(depth: f32) -> f32 {
        clamped(
            depth,
            AL_EAXREVERB_MIN_MODULATION_DEPTH,
            AL_EAXREVERB_MAX_MODULATION_DEPTH,
        )
    }

    pub fn air_absorption_gain_hf(air_absorption_hf: f32) -> f32 {
        clamped(
            mb_to_gain(air_absorption_hf),
            AL_EAXREVERB_MIN_AIR_ABSORPTION_GAINHF,
            AL_EAXREVERB_MAX_AIR_ABSORPTION_GAINHF,
        )
    }

    pub fn hf_reference(reference: f32) -> f32 {
        clamped(
            reference,
            AL_EAXREVERB_MIN_HFREFERENCE,
            AL_EAXREVERB_MAX_HFREFERENCE,
        )
    }

    pub fn lf_reference(reference: f32) -> f32 {
        clamped(
            reference,
            AL_EAXREVERB_MIN_LFREFERENCE,
            AL_EAXREVERB_MAX_LFREFERENCE,
        )
    }

    pub fn room_rolloff_factor(factor: f32) -> f32 {
        clamped(
            factor,
            AL_EAXREVERB_MIN_ROOM_ROLLOFF_FACTOR,
            AL_EAXREVERB_MAX_ROOM_ROLLOFF_FACTOR,
        )
    }
}

/// Converters for the remaining effect targets, named per EFX field.
pub mod effect {
    use super::*;

    pub fn chorus_phase(phase: i32) -> i32 {
        phase.clamp(AL_CHORUS_MIN_PHASE, AL_CHORUS_MAX_PHASE)
    }

    pub fn chorus_rate(rate: f32) -> f32 {
        clamped(rate, AL_CHORUS_MIN_RATE, AL_CHORUS_MAX_RATE)
    }

    pub fn chorus_depth(depth: f32) -> f32 {
        clamped(depth, AL_CHORUS_MIN_DEPTH, AL_CHORUS_MAX_DEPTH)
    }

    pub fn chorus_feedback(feedback: f32) -> f32 {
        clamped(feedback, AL_CHORUS_MIN_FEEDBACK, AL_CHORUS_MAX_FEEDBACK)
    }

    pub fn chorus_delay(delay: f32) -> f32 {
        clamped(delay, AL_CHORUS_MIN_DELAY, AL_CHORUS_MAX_DELAY)
    }

    pub fn flanger_phase(phase: i32) -> i32 {
        phase.clamp(AL_FLANGER_MIN_PHASE, AL_FLANGER_MAX_PHASE)
    }

    pub fn flanger_rate(rate: f32) -> f32 {
        clamped(rate, AL_FLANGER_MIN_RATE, AL_FLANGER_MAX_RATE)
    }

    pub fn flanger_depth(depth: f32) -> f32 {
        clamped(depth, AL_FLANGER_MIN_DEPTH, AL_FLANGER_MAX_DEPTH)
    }

    pub fn flanger_feedback(feedback: f32) -> f32 {
        clamped(feedback, AL_FLANGER_MIN_FEEDBACK, AL_FLANGER_MAX_FEEDBACK)
    }

    pub fn flanger_delay(delay: f32) -> f32 {
        clamped(delay, AL_FLANGER_MIN_DELAY, AL_FLANGER_MAX_DELAY)
    }

    pub fn autowah_attack_time(time: f32) -> f32 {
        clamped(time, AL_AUTOWAH_MIN_ATTACK_TIME, AL_AUTOWAH_MAX_ATTACK_TIME)
    }

    pub fn autowah_release_time(time: f32) -> f32 {
        clamped(
            time,
            AL_AUTOWAH_MIN_RELEASE_TIME,
            AL_AUTOWAH_MAX_RELEASE_TIME,
        )
    }

    pub fn autowah_resonance(resonance: i32) -> f32 {
        clamped(
            mb_to_gain(resonance as f32),
            AL_AUTOWAH_MIN_RESONANCE,
            AL_AUTOWAH_MAX_RESONANCE,
        )
    }

    pub fn autowah_peak_gain(peak_level: i32) -> f32 {
        clamped(
            mb_to_gain(peak_level as f32),
            AL_AUTOWAH_MIN_PEAK_GAIN,
            AL_AUTOWAH_MAX_PEAK_GAIN,
        )
    }

    pub fn distortion_edge(edge: f32) -> f32 {
        clamped(edge, AL_DISTORTION_MIN_EDGE, AL_DISTORTION_MAX_EDGE)
    }

    pub fn distortion_gain(gain: i32) -> f32 {
        clamped(
            mb_to_gain(gain as f32),
            AL_DISTORTION_MIN_GAIN,
            AL_DISTORTION_MAX_GAIN,
        )
    }

    pub fn distortion_low_pass_cutoff(cutoff: f32) -> f32 {
        clamped(
            cutoff,
            AL_DISTORTION_MIN_LOWPASS_CUTOFF,
            AL_DISTORTION_MAX_LOWPASS_CUTOFF,
        )
    }

    pub fn distortion_eq_center(center: f32) -> f32 {
        clamped(
            center,
            AL_DISTORTION_MIN_EQCENTER,
            AL_DISTORTION_MAX_EQCENTER,
        )
    }

    pub fn distortion_eq_bandwidth(bandwidth: f32) -> f32 {
        clamped(
            bandwidth,
            AL_DISTORTION_MIN_EQBANDWIDTH,
            AL_DISTORTION_MAX_EQBANDWIDTH,
        )
    }

    pub fn echo_delay(delay: f32) -> f32 {
        clamped(delay, AL_ECHO_MIN_DELAY, AL_ECHO_MAX_DELAY)
    }

    pub fn echo_lr_delay(delay: f32) -> f32 {
        clamped(delay, AL_ECHO_MIN_LRDELAY, AL_ECHO_MAX_LRDELAY)
    }

    pub fn echo_damping(damping: f32) -> f32 {
        clamped(damping, AL_ECHO_MIN_DAMPING, AL_ECHO_MAX_DAMPING)
    }

    pub fn echo_feedback(feedback: f32) -> f32 {
        clamped(feedback, AL_ECHO_MIN_FEEDBACK, AL_ECHO_MAX_FEEDBACK)
    }

    pub fn echo_spread(spread: f32) -> f32 {
        clamped(spread, AL_ECHO_MIN_SPREAD, AL_ECHO_MAX_SPREAD)
    }

    // All three equalizer bands share the same gain window.
    pub fn equalizer_gain(gain_mb: i32) -> f32 {
        clamped(
            mb_to_gain(gain_mb as f32),
            AL_EQUALIZER_MIN_LOW_GAIN,
            AL_EQUALIZER_MAX_LOW_GAIN,
        )
    }

    pub fn equalizer_low_cutoff(cutoff: f32) -> f32 {
        clamped(
            cutoff,
            AL_EQUALIZER_MIN_LOW_CUTOFF,
            AL_EQUALIZER_MAX_LOW_CUTOFF,
        )
    }

    pub fn equalizer_mid1_center(center: f32) -> f32 {
        clamped(
            center,
            AL_EQUALIZER_MIN_MID1_CENTER,
            AL_EQUALIZER_MAX_MID1_CENTER,
        )
    }

    pub fn equalizer_mid1_width(width: f32) -> f32 {
        clamped(
            width,
            AL_EQUALIZER_MIN_MID1_WIDTH,
            AL_EQUALIZER_MAX_MID1_WIDTH,
        )
    }

    pub fn equalizer_mid2_center(center: f32) -> f32 {
        clamped(
            center,
            AL_EQUALIZER_MIN_MID2_CENTER,
            AL_EQUALIZER_MAX_MID2_CENTER,
        )
    }

    pub fn equalizer_mid2_width(width: f32) -> f32 {
        clamped(
            width,
            AL_EQUALIZER_MIN_MID2_WIDTH,
            AL_EQUALIZER_MAX_MID2_WIDTH,
        )
    }

    pub fn equalizer_high_cutoff(cutoff: f32) -> f32 {
        clamped(
            cutoff,
            AL_EQUALIZER_MIN_HIGH_CUTOFF,
            AL_EQUALIZER_MAX_HIGH_CUTOFF,
        )
    }

    pub fn frequency_shifter_frequency(frequency: f32) -> f32 {
        clamped(
            frequency,
            AL_FREQUENCY_SHIFTER_MIN_FREQUENCY,
            AL_FREQUENCY_SHIFTER_MAX_FREQUENCY,
        )
    }

    pub fn vocal_morpher_rate(rate: f32) -> f32 {
        clamped(rate, AL_VOCAL_MORPHER_MIN_RATE, AL_VOCAL_MORPHER_MAX_RATE)
    }

    pub fn ring_modulator_frequency(frequency: f32) -> f32 {
        clamped(
            frequency,
            AL_RING_MODULATOR_MIN_FREQUENCY,
            AL_RING_MODULATOR_MAX_FREQUENCY,
        )
    }

    pub fn ring_modulator_high_pass_cutoff(cutoff: f32) -> f32 {
        clamped(
            cutoff,
            AL_RING_MODULATOR_MIN_HIGHPASS_CUTOFF,
            AL_RING_MODULATOR_MAX_HIGHPASS_CUTOFF,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn zero_millibels_is_unity_gain() {
        assert_eq!(mb_to_gain(0.0), 1.0);
    }

    #[test]
    fn known_conversions() {
        assert!(close(mb_to_gain(-1_000.0), 0.31623));
        assert!(close(mb_to_gain(-2_000.0), 0.1));
        assert!(close(mb_to_gain(-6_000.0), 0.001));
        assert!(close(mb_to_gain(600.0), 1.99526));
    }

    #[test]
    fn level_conversion_clamps_both_ends() {
        assert_eq!(level_mb_to_gain(0), 1.0);
        assert_eq!(level_mb_to_gain(20_000), 1.0);
        assert!(level_mb_to_gain(-10_000) < 0.00011);
    }

    #[test]
    fn reverb_gain_clamps_to_efx_window() {
        // +2000 mB is legal for late reverb but 10x gain caps the EFX field.
        assert!(close(reverb::late_reverb_gain(2_000), 10.0));
        assert!(close(reverb::gain(-1_000), 0.31623));
        assert_eq!(reverb::gain(0), 1.0);
    }

    #[test]
    fn autowah_resonance_lands_in_efx_units() {
        // 6000 mB resonance is the EFX maximum of 1000.
        assert!(close(effect::autowah_resonance(6_000), 1_000.0));
        assert!(close(effect::autowah_resonance(600), 2.0));
    }

    #[test]
    fn density_saturates_for_large_rooms() {
        assert_eq!(reverb::density(100.0), 1.0);
        assert!(reverb::density(1.0) < 0.07);
    }
}
