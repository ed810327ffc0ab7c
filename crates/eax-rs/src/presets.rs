//! Static reverb environment presets.
//!
//! One entry per selectable environment index. Loading an index behaves as
//! an `ALLPARAMETERS` write of the row with the standard scale-flag set, so
//! every row carries that flag set verbatim.

use crate::api::{ReverbProps, Vector3, ENVIRONMENT_UNDEFINED, REVERB_DEFAULT_FLAGS};

#[allow(clippy::too_many_arguments)]
const fn preset(
    environment: u32,
    environment_size: f32,
    environment_diffusion: f32,
    room: i32,
    room_hf: i32,
    room_lf: i32,
    decay_time: f32,
    decay_hf_ratio: f32,
    decay_lf_ratio: f32,
    reflections: i32,
    reflections_delay: f32,
    reverb: i32,
    reverb_delay: f32,
    echo_time: f32,
    echo_depth: f32,
    modulation_time: f32,
    modulation_depth: f32,
) -> ReverbProps {
    ReverbProps {
        environment,
        environment_size,
        environment_diffusion,
        room,
        room_hf,
        room_lf,
        decay_time,
        decay_hf_ratio,
        decay_lf_ratio,
        reflections,
        reflections_delay,
        reflections_pan: Vector3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        },
        reverb,
        reverb_delay,
        reverb_pan: Vector3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        },
        echo_time,
        echo_depth,
        modulation_time,
        modulation_depth,
        air_absorption_hf: -5.0,
        hf_reference: 5_000.0,
        lf_reference: 250.0,
        room_rolloff_factor: 0.0,
        flags: REVERB_DEFAULT_FLAGS,
    }
}

/// The preset table, indexed by environment number.
#[rustfmt::skip]
pub const REVERB_PRESETS: [ReverbProps; ENVIRONMENT_UNDEFINED as usize] = [
    // environment, size, diffusion, room, roomHF, roomLF, decay, decayHF, decayLF,
    // reflections, reflDelay, reverb, reverbDelay, echoTime, echoDepth, modTime, modDepth
    preset( 0,   7.5, 1.000, -1000,  -100, 0,  1.49, 0.83, 1.0,  -2602, 0.007,   200, 0.011, 0.250, 0.00, 0.25, 0.000), // generic
    preset( 1,   1.4, 1.000, -1000, -6000, 0,  0.17, 0.10, 1.0,  -1204, 0.001,   207, 0.002, 0.250, 0.00, 0.25, 0.000), // padded cell
    preset( 2,   1.9, 1.000, -1000,  -454, 0,  0.40, 0.83, 1.0,  -1646, 0.002,    53, 0.003, 0.250, 0.00, 0.25, 0.000), // room
    preset( 3,   1.4, 1.000, -1000, -1200, 0,  1.49, 0.54, 1.0,   -370, 0.007,  1030, 0.011, 0.250, 0.00, 0.25, 0.000), // bathroom
    preset( 4,   2.5, 1.000, -1000, -6000, 0,  0.50, 0.10, 1.0,  -1376, 0.003, -1104, 0.004, 0.250, 0.00, 0.25, 0.000), // living room
    preset( 5,  11.6, 1.000, -1000,  -300, 0,  2.31, 0.64, 1.0,   -711, 0.012,    83, 0.017, 0.250, 0.00, 0.25, 0.000), // stone room
    preset( 6,  21.6, 1.000, -1000,  -476, 0,  4.32, 0.59, 1.0,   -789, 0.020,  -289, 0.030, 0.250, 0.00, 0.25, 0.000), // auditorium
    preset( 7,  19.6, 1.000, -1000,  -500, 0,  3.92, 0.70, 1.0,  -1230, 0.020,    -2, 0.029, 0.250, 0.00, 0.25, 0.000), // concert hall
    preset( 8,  14.6, 1.000, -1000,  -602, 0,  2.88, 0.69, 1.0,   -602, 0.022,  -302, 0.025, 0.250, 0.00, 0.25, 0.000), // cave
    preset( 9,  36.2, 1.000, -1000,  -698, 0,  7.24, 0.33, 1.0,  -1166, 0.020,    16, 0.030, 0.250, 0.00, 0.25, 0.000), // arena
    preset(10,  50.3, 1.000, -1000, -1000, 0, 10.05, 0.23, 1.0,   -602, 0.020,   198, 0.030, 0.250, 0.00, 0.25, 0.000), // hangar
    preset(11,   1.9, 1.000, -1000, -4000, 0,  0.30, 0.10, 1.0,  -1831, 0.002, -1630, 0.030, 0.250, 0.00, 0.25, 0.000), // carpeted hallway
    preset(12,   1.8, 1.000, -1000,  -300, 0,  1.49, 0.59, 1.0,  -1219, 0.007,   441, 0.011, 0.250, 0.00, 0.25, 0.000), // hallway
    preset(13,  13.5, 1.000, -1000,  -237, 0,  2.70, 0.79, 1.0,  -1214, 0.013,   395, 0.020, 0.250, 0.00, 0.25, 0.000), // stone corridor
    preset(14,   7.5, 0.300, -1000,  -270, 0,  1.49, 0.86, 1.0,  -1204, 0.007,    -4, 0.011, 0.125, 0.95, 0.25, 0.000), // alley
    preset(15,  38.0, 0.300, -1000, -3300, 0,  1.49, 0.54, 1.0,  -2560, 0.162,  -613, 0.088, 0.125, 1.00, 0.25, 0.000), // forest
    preset(16,   7.5, 0.500, -1000,  -800, 0,  1.49, 0.67, 1.0,  -2273, 0.007, -2217, 0.011, 0.250, 0.00, 0.25, 0.000), // city
    preset(17, 100.0, 0.270, -1000, -2500, 0,  1.49, 0.21, 1.0,  -2780, 0.300, -1434, 0.100, 0.250, 1.00, 0.25, 0.000), // mountains
    preset(18,  17.5, 1.000, -1000, -1000, 0,  1.49, 0.83, 1.0, -10000, 0.061,   500, 0.025, 0.125, 0.70, 0.25, 0.000), // quarry
    preset(19,  42.5, 0.210, -1000, -2000, 0,  1.49, 0.50, 1.0,  -2466, 0.179, -1926, 0.100, 0.250, 1.00, 0.25, 0.000), // plain
    preset(20,   8.3, 1.000, -1000,     0, 0,  1.65, 1.50, 1.0,  -1363, 0.008, -1153, 0.012, 0.250, 0.00, 0.25, 0.000), // parking lot
    preset(21,   1.7, 0.800, -1000, -1000, 0,  2.81, 0.14, 1.0,    429, 0.014,   648, 0.021, 0.250, 0.00, 0.25, 0.000), // sewer pipe
    preset(22,   1.8, 1.000, -1000, -4000, 0,  1.49, 0.10, 1.0,   -449, 0.007,  1700, 0.011, 0.250, 0.00, 1.18, 0.348), // underwater
    preset(23,   1.9, 0.500, -1000,     0, 0,  8.39, 1.39, 1.0,   -115, 0.002,   985, 0.030, 0.250, 0.00, 0.25, 1.000), // drugged
    preset(24,   1.8, 0.600, -1000,  -400, 0, 17.23, 0.56, 1.0,  -1713, 0.020,  -613, 0.030, 0.250, 1.00, 0.81, 0.310), // dizzy
    preset(25,   1.0, 0.500, -1000,  -151, 0,  7.56, 0.91, 1.0,   -626, 0.020,   774, 0.030, 0.250, 0.00, 4.00, 1.000), // psychotic
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::*;

    #[test]
    fn indices_match_positions() {
        for (index, preset) in REVERB_PRESETS.iter().enumerate() {
            assert_eq!(preset.environment, index as u32);
            assert_eq!(preset.flags, REVERB_DEFAULT_FLAGS);
        }
    }

    #[test]
    fn generic_row_is_the_boot_state() {
        assert_eq!(REVERB_PRESETS[ENVIRONMENT_GENERIC as usize], ReverbProps::default());
    }

    #[test]
    fn cave_row() {
        let cave = &REVERB_PRESETS[ENVIRONMENT_CAVE as usize];
        assert_eq!(cave.decay_time, 2.88);
        assert_eq!(cave.room, -1_000);
        assert_eq!(cave.reflections_delay, 0.022);
        assert_eq!(cave.environment_size, 14.6);
    }

    #[test]
    fn every_row_is_in_documented_range() {
        for preset in &REVERB_PRESETS {
            assert!(preset.decay_time >= ReverbProps::MIN_DECAY_TIME);
            assert!(preset.decay_time <= ReverbProps::MAX_DECAY_TIME);
            assert!(preset.environment_size >= ReverbProps::MIN_ENVIRONMENT_SIZE);
            assert!(preset.environment_size <= ReverbProps::MAX_ENVIRONMENT_SIZE);
            assert!(preset.reflections >= ReverbProps::MIN_REFLECTIONS);
            assert!(preset.reflections <= ReverbProps::MAX_REFLECTIONS);
            assert!(preset.reverb >= ReverbProps::MIN_REVERB);
            assert!(preset.reverb <= ReverbProps::MAX_REVERB);
        }
    }
}
