//! Source property set: routing, send budget, derived filters.

mod common;

use common::{boot, close, Harness};
use eax::api::*;
use eax::guid::*;
use eax::unit::mb_to_gain;

fn boot_with_source(name: u32) -> Harness {
    let harness = boot();
    harness.init_eax();
    harness.spawn_source(name);
    harness
}

#[test]
fn sources_boot_routed_through_the_primary_slot() {
    let harness = boot_with_source(1);

    // Default routing is [null, primary, null, null]; the primary boots on
    // slot 0.
    assert_eq!(harness.active_mask(1), [true, false, false, false]);

    let state = harness.source_state(1);
    assert_ne!(state.direct_filter, 0);
    assert_ne!(state.sends[0].0, 0, "send 0 targets slot 0's auxiliary slot");
    assert_eq!(state.sends[1], (0, 0));

    let slots: [Guid; 4] = harness.get_value(&EAX50_SOURCE, SOURCE_ACTIVEFXSLOTID, 1);
    assert_eq!(slots, [Guid::NULL, EAX_PRIMARY_FX_SLOT_ID, Guid::NULL, Guid::NULL]);
}

#[test]
fn primary_slot_switching_refreshes_routed_sources() {
    let harness = boot_with_source(1);

    let before = harness.source_state(1);
    let send0_gain = before.send_lowpass[0].expect("send 0 bound");

    // Move the primary designation to slot 2.
    harness.set_ok(&EAX50_CONTEXT, CONTEXT_PRIMARYFXSLOTID, 0, EAX50_FX_SLOT2);

    assert_eq!(harness.active_mask(1), [false, false, true, false]);
    let after = harness.source_state(1);
    assert_eq!(after.sends[0], (0, 0), "old send cleared to the null filter");
    assert_ne!(after.sends[2].0, 0, "send 2 picked up slot 2");
    let send2_gain = after.send_lowpass[2].expect("send 2 bound");
    assert!(close(send0_gain.0, send2_gain.0));
    assert!(close(send0_gain.1, send2_gain.1));
}

#[test]
fn active_slot_lists_above_the_send_budget_fail_whole() {
    let harness = boot_with_source(1);

    // The default session allows two simultaneous sends.
    let mask_before = harness.active_mask(1);
    let mut four = [EAX50_FX_SLOT0, EAX50_FX_SLOT1, EAX50_FX_SLOT2, EAX50_FX_SLOT3];
    assert_eq!(
        harness.set(&EAX50_SOURCE, SOURCE_ACTIVEFXSLOTID, 1, &mut four),
        EAXERR_INVALID_VALUE
    );
    assert_eq!(harness.active_mask(1), mask_before);

    // Raising the budget makes the same list legal.
    harness.set_session(SESSION_VERSION_EAX50, 4);
    assert_eq!(
        harness.set(&EAX50_SOURCE, SOURCE_ACTIVEFXSLOTID, 1, &mut four),
        EAX_OK
    );
    assert_eq!(harness.active_mask(1), [true; 4]);
}

#[test]
fn derived_filters_follow_the_documented_formulas() {
    let harness = boot_with_source(1);

    harness.set_ok(&EAX50_SOURCE, SOURCE_DIRECT, 1, -600i32);
    harness.set_ok(&EAX50_SOURCE, SOURCE_DIRECTHF, 1, -900i32);
    harness.set_ok(&EAX50_SOURCE, SOURCE_ROOM, 1, -400i32);
    harness.set_ok(&EAX50_SOURCE, SOURCE_ROOMHF, 1, -700i32);
    harness.set_ok(&EAX50_SOURCE, SOURCE_OBSTRUCTION, 1, -1_000i32);
    harness.set_ok(&EAX50_SOURCE, SOURCE_OBSTRUCTIONLFRATIO, 1, 0.5f32);
    harness.set_ok(
        &EAX50_SOURCE,
        SOURCE_OCCLUSIONPARAMETERS,
        1,
        OcclusionProps {
            occlusion: -2_000,
            occlusion_lf_ratio: 0.25,
            occlusion_room_ratio: 1.5,
            occlusion_direct_ratio: 1.0,
        },
    );

    let state = harness.source_state(1);
    let direct = state.direct_lowpass.expect("direct filter bound");
    let room = state.send_lowpass[0].expect("send 0 bound");

    let expected_direct = mb_to_gain(-600.0 + -1_000.0 * 0.5 + -2_000.0 * 1.0 * 0.25);
    let expected_direct_hf = mb_to_gain(-900.0 + -1_000.0 + -2_000.0 * 1.0);
    let expected_room = mb_to_gain(-400.0 + -2_000.0 * 1.5 * 0.25);
    let expected_room_hf = mb_to_gain(-700.0 + -2_000.0 * 1.5);

    assert!(close(direct.0, expected_direct));
    assert!(close(direct.1, expected_direct_hf));
    assert!(close(room.0, expected_room));
    assert!(close(room.1, expected_room_hf));
}

#[test]
fn scalar_and_struct_properties_round_trip() {
    let harness = boot_with_source(7);

    harness.set_ok(&EAX50_SOURCE, SOURCE_EXCLUSION, 7, -3_000i32);
    let exclusion: i32 = harness.get_value(&EAX50_SOURCE, SOURCE_EXCLUSION, 7);
    assert_eq!(exclusion, -3_000);

    let obstruction = ObstructionProps {
        obstruction: -1_500,
        obstruction_lf_ratio: 0.75,
    };
    harness.set_ok(&EAX50_SOURCE, SOURCE_OBSTRUCTIONPARAMETERS, 7, obstruction);
    let read: ObstructionProps =
        harness.get_value(&EAX50_SOURCE, SOURCE_OBSTRUCTIONPARAMETERS, 7);
    assert_eq!(read, obstruction);

    let mut all: SourceProps50 = harness.get_value(&EAX50_SOURCE, SOURCE_ALLPARAMETERS, 7);
    assert_eq!(all.source.obstruction, -1_500);
    all.source.doppler_factor = 2.0;
    all.macro_fx_factor = 0.5;
    assert_eq!(
        harness.set(&EAX50_SOURCE, SOURCE_ALLPARAMETERS, 7, &mut all),
        EAX_OK
    );
    let read: SourceProps50 = harness.get_value(&EAX50_SOURCE, SOURCE_ALLPARAMETERS, 7);
    assert_eq!(read, all);

    // Out-of-range values fail and leave the shadow alone.
    let mut bad = all;
    bad.source.direct = 1_001;
    assert_eq!(
        harness.set(&EAX50_SOURCE, SOURCE_ALLPARAMETERS, 7, &mut bad),
        EAXERR_INVALID_VALUE
    );
    let read: SourceProps50 = harness.get_value(&EAX50_SOURCE, SOURCE_ALLPARAMETERS, 7);
    assert_eq!(read, all);
}

#[test]
fn send_records_round_trip_per_receiving_slot() {
    let harness = boot_with_source(3);

    let mut sends = [
        SendProps {
            receiving_fx_slot_id: EAX50_FX_SLOT0,
            send: -1_000,
            send_hf: -500,
        },
        SendProps {
            receiving_fx_slot_id: EAX50_FX_SLOT1,
            send: -2_000,
            send_hf: -250,
        },
    ];
    assert_eq!(
        harness.set(&EAX50_SOURCE, SOURCE_SENDPARAMETERS, 3, &mut sends),
        EAX_OK
    );

    let mut read = [
        SendProps {
            receiving_fx_slot_id: EAX50_FX_SLOT1,
            ..SendProps::default()
        },
        SendProps {
            receiving_fx_slot_id: EAX50_FX_SLOT0,
            ..SendProps::default()
        },
    ];
    assert_eq!(
        harness.get(&EAX50_SOURCE, SOURCE_SENDPARAMETERS, 3, &mut read),
        EAX_OK
    );
    assert_eq!(read[0].send, -2_000);
    assert_eq!(read[0].send_hf, -250);
    assert_eq!(read[1].send, -1_000);
    assert_eq!(read[1].send_hf, -500);

    // A record naming no recognizable slot fails the whole write.
    let mut bad = [SendProps {
        receiving_fx_slot_id: EAX_REVERB_EFFECT,
        send: -100,
        send_hf: 0,
    }];
    assert_eq!(
        harness.set(&EAX50_SOURCE, SOURCE_SENDPARAMETERS, 3, &mut bad),
        EAXERR_INVALID_VALUE
    );
}

#[test]
fn speaker_levels_and_2d_parameters_gate_on_v5() {
    let harness = boot_with_source(4);

    let mut levels = [SpeakerLevelProps {
        speaker_id: SPEAKER_FRONT_CENTER,
        level: -1_200,
    }];
    assert_eq!(
        harness.set(&EAX40_SOURCE, SOURCE_SPEAKERLEVELS, 4, &mut levels),
        EAXERR_INCOMPATIBLE_EAX_VERSION
    );
    assert_eq!(
        harness.set(&EAX50_SOURCE, SOURCE_SPEAKERLEVELS, 4, &mut levels),
        EAX_OK
    );

    let mut read = [SpeakerLevelProps {
        speaker_id: SPEAKER_FRONT_CENTER,
        level: 0,
    }];
    assert_eq!(
        harness.get(&EAX50_SOURCE, SOURCE_SPEAKERLEVELS, 4, &mut read),
        EAX_OK
    );
    assert_eq!(read[0].level, -1_200);

    let two_d = Source2dProps {
        direct: -100,
        direct_hf: -200,
        room: -300,
        room_hf: -400,
        flags: SOURCE_DEFAULT_FLAGS,
    };
    harness.set_ok(&EAX50_SOURCE, SOURCE_ALL2DPARAMETERS, 4, two_d);
    let direct: i32 = harness.get_value(&EAX50_SOURCE, SOURCE_DIRECT, 4);
    assert_eq!(direct, -100);
}

#[test]
fn source_flag_mask_follows_the_session_version() {
    let harness = boot_with_source(9);

    // Below v5 only the three automation bits exist.
    let mut v5_flag = SOURCE_DEFAULT_FLAGS | SOURCE_FLAG_3D_ELEVATION_FILTER;
    assert_eq!(
        harness.set(&EAX50_SOURCE, SOURCE_FLAGS, 9, &mut v5_flag),
        EAXERR_INVALID_VALUE
    );

    harness.set_session(SESSION_VERSION_EAX50, 2);
    assert_eq!(
        harness.set(&EAX50_SOURCE, SOURCE_FLAGS, 9, &mut v5_flag),
        EAX_OK
    );
    let read: u32 = harness.get_value(&EAX50_SOURCE, SOURCE_FLAGS, 9);
    assert_eq!(read, v5_flag);
}

#[test]
fn flag_automation_bits_reach_the_driver_source() {
    let harness = boot_with_source(2);

    harness.set_ok(&EAX50_SOURCE, SOURCE_FLAGS, 2, 0u32);
    let state = harness.source_state(2);
    assert_eq!(state.params_i[&al_sys::AL_DIRECT_FILTER_GAINHF_AUTO], 0);
    assert_eq!(state.params_i[&al_sys::AL_AUXILIARY_SEND_FILTER_GAIN_AUTO], 0);
    assert_eq!(
        state.params_i[&al_sys::AL_AUXILIARY_SEND_FILTER_GAINHF_AUTO],
        0
    );

    harness.set_ok(&EAX50_SOURCE, SOURCE_FLAGS, 2, SOURCE_DEFAULT_FLAGS);
    let state = harness.source_state(2);
    assert_eq!(state.params_i[&al_sys::AL_DIRECT_FILTER_GAINHF_AUTO], 1);
}

#[test]
fn deleted_and_unknown_sources_answer_invalid_operation() {
    let harness = boot_with_source(5);

    let mut value = 0i32;
    assert_eq!(
        harness.get(&EAX50_SOURCE, SOURCE_DIRECT, 99, &mut value),
        EAXERR_INVALID_OPERATION
    );

    harness.delete_source(5);
    assert_eq!(
        harness.get(&EAX50_SOURCE, SOURCE_DIRECT, 5, &mut value),
        EAXERR_INVALID_OPERATION
    );
}

#[test]
fn sources_generated_before_the_first_property_call_are_adopted() {
    let harness = boot();
    // No property traffic yet: the engine parks the name.
    harness.spawn_source(11);
    harness.init_eax();

    let mut value = 0i32;
    assert_eq!(
        harness.get(&EAX50_SOURCE, SOURCE_DIRECT, 11, &mut value),
        EAX_OK
    );
    assert_eq!(harness.active_mask(11), [true, false, false, false]);
}
