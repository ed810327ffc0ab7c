//! Context property set: routing, session handling, the error latch.

mod common;

use common::{boot, close};
use eax::api::*;
use eax::guid::*;

#[test]
fn context_boots_with_documented_defaults() {
    let harness = boot();
    harness.init_eax();

    let all: ContextProps50 = harness.get_value(&EAX50_CONTEXT, CONTEXT_ALLPARAMETERS, 0);
    assert_eq!(all.context.primary_fx_slot_id, EAX40_FX_SLOT0);
    assert!(close(all.context.distance_factor, 1.0));
    assert!(close(all.context.air_absorption_hf, -5.0));
    assert!(close(all.context.hf_reference, 5_000.0));
    assert!(close(all.macro_fx_factor, 0.0));

    let session: SessionProps = harness.get_value(&EAX50_CONTEXT, CONTEXT_EAXSESSION, 0);
    assert_eq!(session.version, SESSION_VERSION_EAX40);
    assert_eq!(session.max_active_sends, 2);
}

#[test]
fn context_initialization_creates_the_efx_backbone() {
    let harness = boot();
    harness.init_eax();

    eax::testing::with_driver(|driver| {
        assert_eq!(driver.slots.len(), 4, "one auxiliary slot per FX slot");
    });

    // Slot 0 boots with reverb bound, slot 1 with chorus, 2/3 with nothing.
    let slot0 = harness.slot_name(0);
    let slot1 = harness.slot_name(1);
    let slot2 = harness.slot_name(2);
    eax::testing::with_driver(|driver| {
        assert_eq!(
            driver.slot_effect(slot0).expect("effect bound").effect_type,
            al_sys::AL_EFFECT_EAXREVERB
        );
        assert_eq!(
            driver.slot_effect(slot1).expect("effect bound").effect_type,
            al_sys::AL_EFFECT_CHORUS
        );
        assert_eq!(driver.slots[&slot2].effect, al_sys::AL_EFFECT_NULL);
    });
}

#[test]
fn scalar_context_properties_round_trip_with_validation() {
    let harness = boot();
    harness.init_eax();

    harness.set_ok(&EAX40_CONTEXT, CONTEXT_DISTANCEFACTOR, 0, 0.5f32);
    let factor: f32 = harness.get_value(&EAX40_CONTEXT, CONTEXT_DISTANCEFACTOR, 0);
    assert!(close(factor, 0.5));

    let mut bad = -1.0f32;
    assert_eq!(
        harness.set(&EAX40_CONTEXT, CONTEXT_DISTANCEFACTOR, 0, &mut bad),
        EAXERR_INVALID_VALUE
    );

    harness.set_ok(&EAX40_CONTEXT, CONTEXT_AIRABSORPTIONHF, 0, -20.0f32);
    harness.set_ok(&EAX40_CONTEXT, CONTEXT_HFREFERENCE, 0, 10_000.0f32);
    let mut low = 999.0f32;
    assert_eq!(
        harness.set(&EAX40_CONTEXT, CONTEXT_HFREFERENCE, 0, &mut low),
        EAXERR_INVALID_VALUE
    );
}

#[test]
fn v5_only_context_properties_gate_on_the_call_dialect() {
    let harness = boot();
    harness.init_eax();

    let mut config = SPEAKER_CONFIG_5POINT1;
    assert_eq!(
        harness.set(&EAX40_CONTEXT, CONTEXT_SPEAKERCONFIG, 0, &mut config),
        EAXERR_INCOMPATIBLE_EAX_VERSION
    );
    harness.set_ok(&EAX50_CONTEXT, CONTEXT_SPEAKERCONFIG, 0, SPEAKER_CONFIG_5POINT1);
    let config: u32 = harness.get_value(&EAX50_CONTEXT, CONTEXT_SPEAKERCONFIG, 0);
    assert_eq!(config, SPEAKER_CONFIG_5POINT1);

    harness.set_ok(&EAX50_CONTEXT, CONTEXT_MACROFXFACTOR, 0, 0.75f32);
    let factor: f32 = harness.get_value(&EAX50_CONTEXT, CONTEXT_MACROFXFACTOR, 0);
    assert!(close(factor, 0.75));
}

#[test]
fn session_rejects_unknown_versions_and_send_counts() {
    let harness = boot();
    harness.init_eax();

    harness.set_session(SESSION_VERSION_EAX50, 4);
    let session: SessionProps = harness.get_value(&EAX50_CONTEXT, CONTEXT_EAXSESSION, 0);
    assert_eq!(session.version, SESSION_VERSION_EAX50);
    assert_eq!(session.max_active_sends, 4);

    let mut bad_version = SessionProps {
        version: 7,
        max_active_sends: 2,
    };
    assert_eq!(
        harness.set(&EAX50_CONTEXT, CONTEXT_EAXSESSION, 0, &mut bad_version),
        EAXERR_INVALID_VALUE
    );

    let mut bad_sends = SessionProps {
        version: SESSION_VERSION_EAX50,
        max_active_sends: 5,
    };
    assert_eq!(
        harness.set(&EAX50_CONTEXT, CONTEXT_EAXSESSION, 0, &mut bad_sends),
        EAXERR_INVALID_VALUE
    );
}

#[test]
fn all_parameters_sets_the_primary_and_the_scalars_atomically() {
    let harness = boot();
    harness.init_eax();

    let mut all = ContextProps50 {
        context: ContextProps {
            primary_fx_slot_id: EAX50_FX_SLOT2,
            distance_factor: 2.0,
            air_absorption_hf: -10.0,
            hf_reference: 8_000.0,
        },
        macro_fx_factor: 0.25,
    };
    assert_eq!(
        harness.set(&EAX50_CONTEXT, CONTEXT_ALLPARAMETERS, 0, &mut all),
        EAX_OK
    );
    let read: ContextProps50 = harness.get_value(&EAX50_CONTEXT, CONTEXT_ALLPARAMETERS, 0);
    assert_eq!(read, all);

    // The v4 shape exposes the same state without the macro factor.
    let v4: ContextProps = harness.get_value(&EAX40_CONTEXT, CONTEXT_ALLPARAMETERS, 0);
    assert_eq!(v4, all.context);

    // An invalid field fails the whole write.
    let mut bad = all;
    bad.context.primary_fx_slot_id = EAX_REVERB_EFFECT;
    assert_eq!(
        harness.set(&EAX50_CONTEXT, CONTEXT_ALLPARAMETERS, 0, &mut bad),
        EAXERR_INVALID_VALUE
    );
    let read: ContextProps50 = harness.get_value(&EAX50_CONTEXT, CONTEXT_ALLPARAMETERS, 0);
    assert_eq!(read, all);
}

#[test]
fn last_error_latches_and_clears_on_read() {
    let harness = boot();
    harness.init_eax();

    // A failing write latches its code.
    let mut bad = -1.0f32;
    assert_eq!(
        harness.set(&EAX40_CONTEXT, CONTEXT_DISTANCEFACTOR, 0, &mut bad),
        EAXERR_INVALID_VALUE
    );
    assert_eq!(harness.last_error(), EAXERR_INVALID_VALUE);
    // Reading cleared the latch.
    assert_eq!(harness.last_error(), EAX_OK);
}

#[test]
fn calls_without_a_current_context_fail() {
    let harness = boot();
    assert_ne!(harness.engine.alc_make_context_current(std::ptr::null_mut()), 0);
    let mut value = 0i32;
    assert_eq!(
        harness.get(&EAX40_CONTEXT, CONTEXT_LASTERROR, 0, &mut value),
        EAXERR_INVALID_OPERATION
    );
}

#[test]
fn unknown_property_sets_are_rejected() {
    let harness = boot();
    harness.init_eax();
    let unknown = eax::guid::Guid::new(0x1234_5678, 0, 0, [9; 8]);
    let mut value = 0i32;
    assert_eq!(
        harness.set(&unknown, 0, 0, &mut value),
        EAXERR_INVALID_OPERATION
    );
}

#[test]
fn eax_extensions_are_advertised() {
    let harness = boot();
    assert_ne!(
        harness.engine.al_is_extension_present(c"EAX2.0".as_ptr()),
        0
    );
    assert_ne!(
        harness.engine.al_is_extension_present(c"EAX5.0".as_ptr()),
        0
    );
    assert_eq!(
        harness.engine.al_is_extension_present(c"EAX6.0".as_ptr()),
        0
    );

    let spliced = harness.engine.al_get_string(al_sys::AL_EXTENSIONS);
    let spliced = unsafe { std::ffi::CStr::from_ptr(spliced) };
    let text = spliced.to_str().unwrap();
    assert!(text.starts_with("EAX2.0 EAX3.0 EAX4.0 EAX5.0"));
    assert!(text.contains("ALC_EXT_EFX"));
}
