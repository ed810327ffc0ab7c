//! The non-reverb effects: loading, defaults, unit conversion on the way
//! to the driver.

mod common;

use common::{boot, close, Harness};
use eax::api::*;
use eax::guid::*;

/// Boot and return the driver-side effect bound to slot 3 after loading
/// `effect_id`.
fn load_on_slot3(harness: &Harness, effect_id: Guid) {
    harness.set_ok(&EAX50_FX_SLOT3, FXSLOT_LOADEFFECT, 0, effect_id);
}

fn slot3_effect_param_f(harness: &Harness, param: al_sys::ALenum) -> f32 {
    let slot3 = harness.slot_name(3);
    eax::testing::with_driver(|driver| driver.slot_effect(slot3).expect("bound").params_f[&param])
}

fn slot3_effect_param_i(harness: &Harness, param: al_sys::ALenum) -> i32 {
    let slot3 = harness.slot_name(3);
    eax::testing::with_driver(|driver| driver.slot_effect(slot3).expect("bound").params_i[&param])
}

#[test]
fn every_effect_guid_loads_and_reports_back() {
    let harness = boot();
    harness.init_eax();

    let effects = [
        (EAX_AUTOWAH_EFFECT, al_sys::AL_EFFECT_AUTOWAH),
        (EAX_CHORUS_EFFECT, al_sys::AL_EFFECT_CHORUS),
        (EAX_AGC_COMPRESSOR_EFFECT, al_sys::AL_EFFECT_COMPRESSOR),
        (EAX_DISTORTION_EFFECT, al_sys::AL_EFFECT_DISTORTION),
        (EAX_ECHO_EFFECT, al_sys::AL_EFFECT_ECHO),
        (EAX_EQUALIZER_EFFECT, al_sys::AL_EFFECT_EQUALIZER),
        (EAX_FLANGER_EFFECT, al_sys::AL_EFFECT_FLANGER),
        (
            EAX_FREQUENCY_SHIFTER_EFFECT,
            al_sys::AL_EFFECT_FREQUENCY_SHIFTER,
        ),
        (EAX_PITCH_SHIFTER_EFFECT, al_sys::AL_EFFECT_PITCH_SHIFTER),
        (EAX_REVERB_EFFECT, al_sys::AL_EFFECT_EAXREVERB),
        (EAX_RING_MODULATOR_EFFECT, al_sys::AL_EFFECT_RING_MODULATOR),
        (EAX_VOCAL_MORPHER_EFFECT, al_sys::AL_EFFECT_VOCAL_MORPHER),
    ];

    let slot3 = harness.slot_name(3);
    for (effect_id, al_type) in effects {
        load_on_slot3(&harness, effect_id);
        let loaded: Guid = harness.get_value(&EAX50_FX_SLOT3, FXSLOT_LOADEFFECT, 0);
        assert_eq!(loaded, effect_id);
        eax::testing::with_driver(|driver| {
            assert_eq!(driver.slot_effect(slot3).expect("bound").effect_type, al_type);
        });
    }

    // Back to empty: the slot rebinds the null effect.
    load_on_slot3(&harness, Guid::NULL);
    eax::testing::with_driver(|driver| {
        assert_eq!(driver.slots[&slot3].effect, al_sys::AL_EFFECT_NULL);
    });
}

#[test]
fn chorus_defaults_land_on_the_dedicated_slot_one() {
    let harness = boot();
    harness.init_eax();

    let slot1 = harness.slot_name(1);
    eax::testing::with_driver(|driver| {
        let chorus = driver.slot_effect(slot1).expect("chorus bound");
        assert_eq!(chorus.params_i[&al_sys::AL_CHORUS_WAVEFORM], 1);
        assert_eq!(chorus.params_i[&al_sys::AL_CHORUS_PHASE], 90);
        assert!(close(chorus.params_f[&al_sys::AL_CHORUS_RATE], 1.1));
        assert!(close(chorus.params_f[&al_sys::AL_CHORUS_DEPTH], 0.1));
        assert!(close(chorus.params_f[&al_sys::AL_CHORUS_FEEDBACK], 0.25));
        assert!(close(chorus.params_f[&al_sys::AL_CHORUS_DELAY], 0.016));
    });
}

#[test]
fn chorus_phase_clamps_to_the_efx_window() {
    let harness = boot();
    harness.init_eax();
    load_on_slot3(&harness, EAX_CHORUS_EFFECT);

    // Legal at the wire level, beyond what the driver models.
    harness.set_ok(&EAX50_FX_SLOT3, CHORUS_PHASE, 0, 180i32);
    let read: i32 = harness.get_value(&EAX50_FX_SLOT3, CHORUS_PHASE, 0);
    assert_eq!(read, 180);
    assert_eq!(slot3_effect_param_i(&harness, al_sys::AL_CHORUS_PHASE), 90);
}

#[test]
fn distortion_gain_converts_from_millibels() {
    let harness = boot();
    harness.init_eax();
    load_on_slot3(&harness, EAX_DISTORTION_EFFECT);

    harness.set_ok(&EAX50_FX_SLOT3, DISTORTION_GAIN, 0, -2_000i32);
    assert!(close(
        slot3_effect_param_f(&harness, al_sys::AL_DISTORTION_GAIN),
        0.1
    ));

    // The legal floor exceeds the EFX window and clamps.
    harness.set_ok(&EAX50_FX_SLOT3, DISTORTION_GAIN, 0, -6_000i32);
    assert!(close(
        slot3_effect_param_f(&harness, al_sys::AL_DISTORTION_GAIN),
        0.01
    ));
}

#[test]
fn autowah_resonance_and_peak_convert_from_millibels() {
    let harness = boot();
    harness.init_eax();
    load_on_slot3(&harness, EAX_AUTOWAH_EFFECT);

    harness.set_ok(&EAX50_FX_SLOT3, AUTOWAH_RESONANCE, 0, 600i32);
    assert!(close(
        slot3_effect_param_f(&harness, al_sys::AL_AUTOWAH_RESONANCE),
        2.0
    ));

    harness.set_ok(&EAX50_FX_SLOT3, AUTOWAH_PEAKLEVEL, 0, 0i32);
    assert!(close(
        slot3_effect_param_f(&harness, al_sys::AL_AUTOWAH_PEAK_GAIN),
        1.0
    ));
}

#[test]
fn equalizer_band_gains_convert_from_millibels() {
    let harness = boot();
    harness.init_eax();
    load_on_slot3(&harness, EAX_EQUALIZER_EFFECT);

    harness.set_ok(&EAX50_FX_SLOT3, EQUALIZER_LOWGAIN, 0, 1_800i32);
    assert!(close(
        slot3_effect_param_f(&harness, al_sys::AL_EQUALIZER_LOW_GAIN),
        7.943
    ));

    harness.set_ok(&EAX50_FX_SLOT3, EQUALIZER_MID1GAIN, 0, -1_800i32);
    assert!(close(
        slot3_effect_param_f(&harness, al_sys::AL_EQUALIZER_MID1_GAIN),
        0.126
    ));

    let mut too_hot = 1_801i32;
    assert_eq!(
        harness.set(&EAX50_FX_SLOT3, EQUALIZER_HIGHGAIN, 0, &mut too_hot),
        EAXERR_INVALID_VALUE
    );
}

#[test]
fn pitch_shifter_tuning_passes_through_as_integers() {
    let harness = boot();
    harness.init_eax();
    load_on_slot3(&harness, EAX_PITCH_SHIFTER_EFFECT);

    harness.set_ok(&EAX50_FX_SLOT3, PITCH_SHIFTER_COARSETUNE, 0, -7i32);
    harness.set_ok(&EAX50_FX_SLOT3, PITCH_SHIFTER_FINETUNE, 0, 25i32);
    assert_eq!(
        slot3_effect_param_i(&harness, al_sys::AL_PITCH_SHIFTER_COARSE_TUNE),
        -7
    );
    assert_eq!(
        slot3_effect_param_i(&harness, al_sys::AL_PITCH_SHIFTER_FINE_TUNE),
        25
    );

    let all: PitchShifterProps =
        harness.get_value(&EAX50_FX_SLOT3, PITCH_SHIFTER_ALLPARAMETERS, 0);
    assert_eq!(
        all,
        PitchShifterProps {
            coarse_tune: -7,
            fine_tune: 25
        }
    );
}

#[test]
fn compressor_toggles() {
    let harness = boot();
    harness.init_eax();
    load_on_slot3(&harness, EAX_AGC_COMPRESSOR_EFFECT);

    // On by default.
    assert_eq!(slot3_effect_param_i(&harness, al_sys::AL_COMPRESSOR_ONOFF), 1);
    harness.set_ok(&EAX50_FX_SLOT3, COMPRESSOR_ONOFF, 0, 0u32);
    assert_eq!(slot3_effect_param_i(&harness, al_sys::AL_COMPRESSOR_ONOFF), 0);

    let mut bad = 2u32;
    assert_eq!(
        harness.set(&EAX50_FX_SLOT3, COMPRESSOR_ONOFF, 0, &mut bad),
        EAXERR_INVALID_VALUE
    );
}

#[test]
fn vocal_morpher_all_parameters_round_trip() {
    let harness = boot();
    harness.init_eax();
    load_on_slot3(&harness, EAX_VOCAL_MORPHER_EFFECT);

    let mut all = VocalMorpherProps {
        phoneme_a: 3,
        phoneme_a_coarse_tuning: -12,
        phoneme_b: 21,
        phoneme_b_coarse_tuning: 12,
        waveform: VOCAL_MORPHER_WAVEFORM_SAWTOOTH,
        rate: 4.5,
    };
    assert_eq!(
        harness.set(&EAX50_FX_SLOT3, VOCAL_MORPHER_ALLPARAMETERS, 0, &mut all),
        EAX_OK
    );
    let read: VocalMorpherProps =
        harness.get_value(&EAX50_FX_SLOT3, VOCAL_MORPHER_ALLPARAMETERS, 0);
    assert_eq!(read, all);

    let mut bad = all;
    bad.phoneme_a = 30;
    assert_eq!(
        harness.set(&EAX50_FX_SLOT3, VOCAL_MORPHER_ALLPARAMETERS, 0, &mut bad),
        EAXERR_INVALID_VALUE
    );
}

#[test]
fn frequency_shifter_directions_validate() {
    let harness = boot();
    harness.init_eax();
    load_on_slot3(&harness, EAX_FREQUENCY_SHIFTER_EFFECT);

    harness.set_ok(
        &EAX50_FX_SLOT3,
        FREQUENCY_SHIFTER_LEFTDIRECTION,
        0,
        FREQUENCY_SHIFTER_UP,
    );
    assert_eq!(
        slot3_effect_param_i(&harness, al_sys::AL_FREQUENCY_SHIFTER_LEFT_DIRECTION),
        1
    );

    let mut bad = 3u32;
    assert_eq!(
        harness.set(&EAX50_FX_SLOT3, FREQUENCY_SHIFTER_RIGHTDIRECTION, 0, &mut bad),
        EAXERR_INVALID_VALUE
    );
}

#[test]
fn echo_parameters_round_trip_and_reach_the_driver() {
    let harness = boot();
    harness.init_eax();
    load_on_slot3(&harness, EAX_ECHO_EFFECT);

    harness.set_ok(&EAX50_FX_SLOT3, ECHO_DELAY, 0, 0.2f32);
    harness.set_ok(&EAX50_FX_SLOT3, ECHO_SPREAD, 0, 0.5f32);
    assert!(close(slot3_effect_param_f(&harness, al_sys::AL_ECHO_DELAY), 0.2));
    assert!(close(slot3_effect_param_f(&harness, al_sys::AL_ECHO_SPREAD), 0.5));

    let all: EchoProps = harness.get_value(&EAX50_FX_SLOT3, ECHO_ALLPARAMETERS, 0);
    assert!(close(all.delay, 0.2));
    assert!(close(all.spread, 0.5));
    assert!(close(all.damping, EchoProps::DEFAULT_DAMPING));
}
