//! Reverb effect: presets, the deferred-apply discipline, and the legacy
//! listener compatibility path.

mod common;

use common::{boot, close};
use eax::api::*;
use eax::guid::*;
use eax::testing::{self, TraceEntry};
use eax::REVERB_PRESETS;

#[test]
fn environment_load_applies_the_preset_in_one_pass() {
    let harness = boot();
    harness.init_eax();
    let slot0 = harness.slot_name(0);

    testing::with_driver(|driver| driver.clear_trace());
    harness.set_ok(&EAX40_FX_SLOT0, REVERB_ENVIRONMENT, 0, ENVIRONMENT_CAVE);

    // The documented cave row, byte for byte.
    let all: ReverbProps = harness.get_value(&EAX40_FX_SLOT0, REVERB_ALLPARAMETERS, 0);
    let cave = REVERB_PRESETS[ENVIRONMENT_CAVE as usize];
    assert_eq!(all, cave);
    assert_eq!(bytemuck::bytes_of(&all), bytemuck::bytes_of(&cave));
    assert!(close(all.decay_time, 2.88));
    assert_eq!(all.room, -1_000);
    assert!(close(all.reflections_delay, 0.022));
    assert_eq!(all.flags, REVERB_DEFAULT_FLAGS);

    // One apply pass: every scalar field once, both pans, the flag bit,
    // and a single rebind of the slot's effect.
    testing::with_driver(|driver| {
        let floats = driver
            .trace
            .iter()
            .filter(|entry| matches!(entry, TraceEntry::EffectF { .. }))
            .count();
        let vectors = driver
            .trace
            .iter()
            .filter(|entry| matches!(entry, TraceEntry::EffectFv { .. }))
            .count();
        let ints = driver
            .trace
            .iter()
            .filter(|entry| matches!(entry, TraceEntry::EffectI { .. }))
            .count();
        let rebinds = driver
            .trace
            .iter()
            .filter(|entry| {
                matches!(
                    entry,
                    TraceEntry::SlotI {
                        slot,
                        param: al_sys::AL_EFFECTSLOT_EFFECT,
                        ..
                    } if *slot == slot0
                )
            })
            .count();
        assert_eq!(floats, 20);
        assert_eq!(vectors, 2);
        assert_eq!(ints, 1);
        assert_eq!(rebinds, 1);
    });

    // The driver-side values went through the millibel conversion.
    testing::with_driver(|driver| {
        let effect = driver.slot_effect(slot0).expect("reverb bound");
        assert!(close(
            effect.params_f[&al_sys::AL_EAXREVERB_GAIN],
            0.31623
        ));
        assert!(close(
            effect.params_f[&al_sys::AL_EAXREVERB_DECAY_TIME],
            2.88
        ));
    });
}

#[test]
fn identical_writes_produce_no_second_driver_traffic() {
    let harness = boot();
    harness.init_eax();

    harness.set_ok(&EAX40_FX_SLOT0, REVERB_DECAYTIME, 0, 5.0f32);

    testing::with_driver(|driver| driver.clear_trace());
    harness.set_ok(&EAX40_FX_SLOT0, REVERB_DECAYTIME, 0, 5.0f32);
    testing::with_driver(|driver| {
        assert!(driver.trace.is_empty(), "clean write repeated: {:?}", driver.trace);
    });

    // A genuinely new value reaches the driver again.
    harness.set_ok(&EAX40_FX_SLOT0, REVERB_DECAYTIME, 0, 6.0f32);
    testing::with_driver(|driver| assert!(!driver.trace.is_empty()));
}

#[test]
fn scalar_properties_round_trip_and_validate() {
    let harness = boot();
    harness.init_eax();

    harness.set_ok(&EAX40_FX_SLOT0, REVERB_ROOM, 0, -5_000i32);
    let room: i32 = harness.get_value(&EAX40_FX_SLOT0, REVERB_ROOM, 0);
    assert_eq!(room, -5_000);

    harness.set_ok(&EAX40_FX_SLOT0, REVERB_REVERB, 0, 1_500i32);
    let reverb: i32 = harness.get_value(&EAX40_FX_SLOT0, REVERB_REVERB, 0);
    assert_eq!(reverb, 1_500);

    let mut too_long = 21.0f32;
    assert_eq!(
        harness.set(&EAX40_FX_SLOT0, REVERB_DECAYTIME, 0, &mut too_long),
        EAXERR_INVALID_VALUE
    );

    let mut reserved = 0x100u32;
    assert_eq!(
        harness.set(&EAX40_FX_SLOT0, REVERB_FLAGS, 0, &mut reserved),
        EAXERR_INVALID_VALUE
    );

    // A failed write leaves the shadow untouched.
    let decay: f32 = harness.get_value(&EAX40_FX_SLOT0, REVERB_DECAYTIME, 0);
    assert!(close(decay, ReverbProps::DEFAULT_DECAY_TIME));
}

#[test]
fn all_parameters_is_atomic() {
    let harness = boot();
    harness.init_eax();

    let before: ReverbProps = harness.get_value(&EAX40_FX_SLOT0, REVERB_ALLPARAMETERS, 0);

    let mut bad = before;
    bad.decay_time = 3.0;
    bad.room_hf = 1; // above the maximum
    assert_eq!(
        harness.set(&EAX40_FX_SLOT0, REVERB_ALLPARAMETERS, 0, &mut bad),
        EAXERR_INVALID_VALUE
    );

    let after: ReverbProps = harness.get_value(&EAX40_FX_SLOT0, REVERB_ALLPARAMETERS, 0);
    assert_eq!(after, before);
}

#[test]
fn undefined_environment_never_validates_or_appears() {
    let harness = boot();
    harness.init_eax();

    let mut undefined = ENVIRONMENT_UNDEFINED;
    assert_eq!(
        harness.set(&EAX40_FX_SLOT0, REVERB_ENVIRONMENT, 0, &mut undefined),
        EAXERR_INVALID_VALUE
    );

    // The whole legal range loads; the index read back is always the one
    // written.
    for environment in 0..ENVIRONMENT_UNDEFINED {
        harness.set_ok(&EAX40_FX_SLOT0, REVERB_ENVIRONMENT, 0, environment);
        let read: u32 = harness.get_value(&EAX40_FX_SLOT0, REVERB_ENVIRONMENT, 0);
        assert_eq!(read, environment);
    }
}

#[test]
fn legacy_listener_calls_drive_the_slot_zero_reverb() {
    let harness = boot();
    harness.init_eax();

    // DSPROPERTY_EAX20LISTENER_DECAYTIME is id 5 in the 2.0 numbering.
    harness.set_ok(&EAX20_LISTENER_PROPERTIES, 5, 0, 3.5f32);
    let decay: f32 = harness.get_value(&EAX40_FX_SLOT0, REVERB_DECAYTIME, 0);
    assert!(close(decay, 3.5));

    // The v2 ALLPARAMETERS shape is the 14-field listener block,
    // default-extended into the full reverb struct.
    let mut legacy = Listener20Props {
        room: -2_000,
        decay_time: 2.5,
        environment: ENVIRONMENT_HANGAR,
        ..Listener20Props::default()
    };
    assert_eq!(
        harness.set(&EAX20_LISTENER_PROPERTIES, 1, 0, &mut legacy),
        EAX_OK
    );
    let all: ReverbProps = harness.get_value(&EAX40_FX_SLOT0, REVERB_ALLPARAMETERS, 0);
    assert_eq!(all.room, -2_000);
    assert!(close(all.decay_time, 2.5));
    assert_eq!(all.environment, ENVIRONMENT_HANGAR);
    assert_eq!(all.room_lf, ReverbProps::default().room_lf);
    assert!(close(all.lf_reference, ReverbProps::default().lf_reference));

    // And the v2 get shape folds the full struct back down.
    let read: Listener20Props = harness.get_value(&EAX20_LISTENER_PROPERTIES, 1, 0);
    assert_eq!(read.room, -2_000);
    assert!(close(read.decay_time, 2.5));
}

#[test]
fn effect_scoped_calls_on_an_empty_slot_report_no_effect() {
    let harness = boot();
    harness.init_eax();

    // Slot 2 boots without a loaded effect.
    let mut decay = 3.0f32;
    assert_eq!(
        harness.set(&EAX40_FX_SLOT2, REVERB_DECAYTIME, 0, &mut decay),
        EAXERR_NO_EFFECT_LOADED
    );
}

#[test]
fn small_buffers_are_rejected_without_state_changes() {
    let harness = boot();
    harness.init_eax();

    // A four-byte buffer cannot carry the full parameter block.
    let mut short = 0u32;
    assert_eq!(
        harness.set(&EAX40_FX_SLOT0, REVERB_ALLPARAMETERS, 0, &mut short),
        EAXERR_INVALID_VALUE
    );

    let all: ReverbProps = harness.get_value(&EAX40_FX_SLOT0, REVERB_ALLPARAMETERS, 0);
    assert_eq!(all, ReverbProps::default());
}
