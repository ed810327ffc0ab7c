//! Property-based coverage of the set/get round trip and the conversion
//! clamps.

mod common;

use common::boot;
use eax::api::*;
use eax::guid::*;
use eax::unit;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every legal scalar write reads back exactly (P4): the shadow, not
    /// the clamped driver value, answers gets.
    #[test]
    fn reverb_room_round_trips(room in -10_000i32..=0) {
        let harness = boot();
        harness.init_eax();
        harness.set_ok(&EAX40_FX_SLOT0, REVERB_ROOM, 0, room);
        let read: i32 = harness.get_value(&EAX40_FX_SLOT0, REVERB_ROOM, 0);
        prop_assert_eq!(read, room);
    }

    #[test]
    fn reverb_decay_round_trips(decay in 0.1f32..=20.0) {
        let harness = boot();
        harness.init_eax();
        harness.set_ok(&EAX40_FX_SLOT0, REVERB_DECAYTIME, 0, decay);
        let read: f32 = harness.get_value(&EAX40_FX_SLOT0, REVERB_DECAYTIME, 0);
        prop_assert_eq!(read, decay);
    }

    #[test]
    fn slot_volume_round_trips_and_gain_stays_normalized(volume in -10_000i32..=0) {
        let harness = boot();
        harness.init_eax();
        let slot0 = harness.slot_name(0);
        harness.set_ok(&EAX40_FX_SLOT0, FXSLOT_VOLUME, 0, volume);

        let read: i32 = harness.get_value(&EAX40_FX_SLOT0, FXSLOT_VOLUME, 0);
        prop_assert_eq!(read, volume);

        let gain = eax::testing::with_driver(|driver| driver.slots[&slot0].gain);
        prop_assert!((0.0..=1.0).contains(&gain));
    }

    #[test]
    fn source_direct_round_trips(direct in -10_000i32..=1_000) {
        let harness = boot();
        harness.init_eax();
        harness.spawn_source(1);
        harness.set_ok(&EAX50_SOURCE, SOURCE_DIRECT, 1, direct);
        let read: i32 = harness.get_value(&EAX50_SOURCE, SOURCE_DIRECT, 1);
        prop_assert_eq!(read, direct);
    }

    /// Out-of-range scalars never change the shadow.
    #[test]
    fn out_of_range_reverb_room_is_rejected(room in 1i32..=100_000) {
        let harness = boot();
        harness.init_eax();
        let mut value = room;
        prop_assert_eq!(
            harness.set(&EAX40_FX_SLOT0, REVERB_ROOM, 0, &mut value),
            EAXERR_INVALID_VALUE
        );
        let read: i32 = harness.get_value(&EAX40_FX_SLOT0, REVERB_ROOM, 0);
        prop_assert_eq!(read, ReverbProps::DEFAULT_ROOM);
    }

    // Converter clamps: any millibel input lands inside the target window.

    #[test]
    fn level_gain_is_always_normalized(mb in i32::MIN..=i32::MAX) {
        let gain = unit::level_mb_to_gain(mb);
        prop_assert!((0.0..=1.0).contains(&gain));
    }

    #[test]
    fn late_reverb_gain_stays_in_the_efx_window(mb in -10_000i32..=2_000) {
        let gain = unit::reverb::late_reverb_gain(mb);
        prop_assert!((0.0..=10.0).contains(&gain));
    }

    #[test]
    fn autowah_resonance_stays_in_the_efx_window(mb in 600i32..=6_000) {
        let resonance = unit::effect::autowah_resonance(mb);
        prop_assert!((2.0..=1_000.0).contains(&resonance));
    }

    #[test]
    fn equalizer_gain_stays_in_the_efx_window(mb in -1_800i32..=1_800) {
        let gain = unit::effect::equalizer_gain(mb);
        prop_assert!((0.126..=7.943).contains(&gain));
    }
}
