//! FX slot property set: dedicated and lock rules, volume, flags, and the
//! slot/effect agreement invariant.

mod common;

use common::{boot, close};
use eax::api::*;
use eax::guid::*;
use eax::EffectKind;

/// Loaded effect and shadow GUID always agree, for every slot.
fn assert_slots_consistent(harness: &common::Harness) {
    harness
        .engine
        .with_current_context(|context| {
            let slots = context.fx_slots().expect("initialized");
            for index in 0..4 {
                let slot = slots.get(index);
                assert_eq!(
                    slot.loaded_effect().kind().guid(),
                    slot.props().slot.load_effect,
                    "slot {index} shadow and loaded effect disagree"
                );
            }
        })
        .unwrap();
}

#[test]
fn dedicated_slot_rejects_effect_changes() {
    let harness = boot();
    harness.init_eax();

    // Slot 0 is the dedicated reverb slot.
    let mut chorus = EAX_CHORUS_EFFECT;
    assert_eq!(
        harness.set(&EAX40_FX_SLOT0, FXSLOT_LOADEFFECT, 0, &mut chorus),
        EAXERR_INVALID_OPERATION
    );

    let loaded: Guid = harness.get_value(&EAX40_FX_SLOT0, FXSLOT_LOADEFFECT, 0);
    assert_eq!(loaded, EAX_REVERB_EFFECT);

    // The failure is latched until read, then clears.
    assert_eq!(harness.last_error(), EAXERR_INVALID_OPERATION);
    assert_eq!(harness.last_error(), EAX_OK);
    assert_slots_consistent(&harness);
}

#[test]
fn dedicated_slot_rejects_lock_and_all_parameters() {
    let harness = boot();
    harness.init_eax();

    let mut lock = FXSLOT_LOCKED;
    assert_eq!(
        harness.set(&EAX50_FX_SLOT1, FXSLOT_LOCK, 0, &mut lock),
        EAXERR_INVALID_OPERATION
    );

    let mut all: FxSlotProps50 = harness.get_value(&EAX50_FX_SLOT1, FXSLOT_ALLPARAMETERS, 0);
    assert_eq!(
        harness.set(&EAX50_FX_SLOT1, FXSLOT_ALLPARAMETERS, 0, &mut all),
        EAXERR_INVALID_OPERATION
    );
}

#[test]
fn general_slots_load_effects_and_keep_the_shadow_in_sync() {
    let harness = boot();
    harness.init_eax();

    let slot2 = harness.slot_name(2);
    harness.set_ok(&EAX50_FX_SLOT2, FXSLOT_LOADEFFECT, 0, EAX_ECHO_EFFECT);

    let loaded: Guid = harness.get_value(&EAX50_FX_SLOT2, FXSLOT_LOADEFFECT, 0);
    assert_eq!(loaded, EAX_ECHO_EFFECT);
    assert_eq!(
        EffectKind::from_guid(&loaded),
        Some(EffectKind::Echo)
    );
    eax::testing::with_driver(|driver| {
        assert_eq!(
            driver.slot_effect(slot2).expect("bound").effect_type,
            al_sys::AL_EFFECT_ECHO
        );
    });
    assert_slots_consistent(&harness);

    // Unknown GUIDs answer with the dedicated code.
    let mut bogus = Guid::new(0xABAD_1DEA, 0, 0, [1; 8]);
    assert_eq!(
        harness.set(&EAX50_FX_SLOT2, FXSLOT_LOADEFFECT, 0, &mut bogus),
        EAXERR_UNKNOWN_EFFECT
    );
    assert_slots_consistent(&harness);
}

#[test]
fn locked_slot_accepts_identical_effect_and_rejects_others() {
    let harness = boot();
    harness.init_eax();

    harness.set_ok(&EAX50_FX_SLOT2, FXSLOT_LOADEFFECT, 0, EAX_FLANGER_EFFECT);
    harness.set_ok(&EAX50_FX_SLOT2, FXSLOT_LOCK, 0, FXSLOT_LOCKED);

    // Reloading the identical effect is a no-op and allowed.
    harness.set_ok(&EAX50_FX_SLOT2, FXSLOT_LOADEFFECT, 0, EAX_FLANGER_EFFECT);

    let mut other = EAX_ECHO_EFFECT;
    assert_eq!(
        harness.set(&EAX50_FX_SLOT2, FXSLOT_LOADEFFECT, 0, &mut other),
        EAXERR_INVALID_OPERATION
    );
    let loaded: Guid = harness.get_value(&EAX50_FX_SLOT2, FXSLOT_LOADEFFECT, 0);
    assert_eq!(loaded, EAX_FLANGER_EFFECT);

    // Unlock and the change goes through.
    harness.set_ok(&EAX50_FX_SLOT2, FXSLOT_LOCK, 0, FXSLOT_UNLOCKED);
    harness.set_ok(&EAX50_FX_SLOT2, FXSLOT_LOADEFFECT, 0, EAX_ECHO_EFFECT);
    assert_slots_consistent(&harness);
}

#[test]
fn volume_drives_the_slot_gain() {
    let harness = boot();
    harness.init_eax();

    let slot0 = harness.slot_name(0);
    harness.set_ok(&EAX40_FX_SLOT0, FXSLOT_VOLUME, 0, -2_000i32);

    eax::testing::with_driver(|driver| {
        assert!(close(driver.slots[&slot0].gain, 0.1));
    });

    let volume: i32 = harness.get_value(&EAX40_FX_SLOT0, FXSLOT_VOLUME, 0);
    assert_eq!(volume, -2_000);

    let mut too_low = -10_001i32;
    assert_eq!(
        harness.set(&EAX40_FX_SLOT0, FXSLOT_VOLUME, 0, &mut too_low),
        EAXERR_INVALID_VALUE
    );
}

#[test]
fn flags_toggle_the_environmental_send_and_respect_the_version_mask() {
    let harness = boot();
    harness.init_eax();

    let slot3 = harness.slot_name(3);

    // Clearing the environment bit parks the slot's auto send.
    harness.set_ok(&EAX50_FX_SLOT3, FXSLOT_FLAGS, 0, 0u32);
    eax::testing::with_driver(|driver| {
        assert_eq!(driver.slots[&slot3].send_auto, 0);
    });
    harness.set_ok(&EAX50_FX_SLOT3, FXSLOT_FLAGS, 0, FXSLOT_FLAG_ENVIRONMENT);
    eax::testing::with_driver(|driver| {
        assert_eq!(driver.slots[&slot3].send_auto, 1);
    });

    // The upmix bit exists only in the v5 dialect.
    let mut upmix = FXSLOT_FLAG_ENVIRONMENT | FXSLOT_FLAG_UPMIX;
    assert_eq!(
        harness.set(&EAX40_FX_SLOT3, FXSLOT_FLAGS, 0, &mut upmix),
        EAXERR_INVALID_VALUE
    );
    harness.set_ok(&EAX50_FX_SLOT3, FXSLOT_FLAGS, 0, upmix);
}

#[test]
fn slot_occlusion_is_v5_only_and_round_trips() {
    let harness = boot();
    harness.init_eax();

    let mut occlusion = -1_200i32;
    assert_eq!(
        harness.set(&EAX40_FX_SLOT0, FXSLOT_OCCLUSION, 0, &mut occlusion),
        EAXERR_INCOMPATIBLE_EAX_VERSION
    );

    harness.set_ok(&EAX50_FX_SLOT0, FXSLOT_OCCLUSION, 0, -1_200i32);
    let read: i32 = harness.get_value(&EAX50_FX_SLOT0, FXSLOT_OCCLUSION, 0);
    assert_eq!(read, -1_200);

    harness.set_ok(&EAX50_FX_SLOT0, FXSLOT_OCCLUSIONLFRATIO, 0, 0.5f32);
    let ratio: f32 = harness.get_value(&EAX50_FX_SLOT0, FXSLOT_OCCLUSIONLFRATIO, 0);
    assert!(close(ratio, 0.5));
}

#[test]
fn all_parameters_round_trips_on_general_slots() {
    let harness = boot();
    harness.init_eax();

    let mut all = FxSlotProps50 {
        slot: FxSlotProps {
            load_effect: EAX_AUTOWAH_EFFECT,
            volume: -600,
            lock: FXSLOT_UNLOCKED,
            flags: FXSLOT_FLAG_ENVIRONMENT,
        },
        occlusion: -900,
        occlusion_lf_ratio: 0.75,
    };
    assert_eq!(
        harness.set(&EAX50_FX_SLOT3, FXSLOT_ALLPARAMETERS, 0, &mut all),
        EAX_OK
    );
    let read: FxSlotProps50 = harness.get_value(&EAX50_FX_SLOT3, FXSLOT_ALLPARAMETERS, 0);
    assert_eq!(read, all);

    // The v4 shape carries the first four fields only.
    let v4: FxSlotProps = harness.get_value(&EAX40_FX_SLOT3, FXSLOT_ALLPARAMETERS, 0);
    assert_eq!(v4, all.slot);
    assert_slots_consistent(&harness);
}
