//! Source property set: ids, structs, flags, ranges.

use bytemuck::{Pod, Zeroable};
use smart_default::SmartDefault;

use crate::guid::{Guid, EAX_PRIMARY_FX_SLOT_ID};

pub const SOURCE_NONE: u32 = 0;
pub const SOURCE_ALLPARAMETERS: u32 = 1;
pub const SOURCE_OBSTRUCTIONPARAMETERS: u32 = 2;
pub const SOURCE_OCCLUSIONPARAMETERS: u32 = 3;
pub const SOURCE_EXCLUSIONPARAMETERS: u32 = 4;
pub const SOURCE_DIRECT: u32 = 5;
pub const SOURCE_DIRECTHF: u32 = 6;
pub const SOURCE_ROOM: u32 = 7;
pub const SOURCE_ROOMHF: u32 = 8;
pub const SOURCE_OBSTRUCTION: u32 = 9;
pub const SOURCE_OBSTRUCTIONLFRATIO: u32 = 10;
pub const SOURCE_OCCLUSION: u32 = 11;
pub const SOURCE_OCCLUSIONLFRATIO: u32 = 12;
pub const SOURCE_OCCLUSIONROOMRATIO: u32 = 13;
pub const SOURCE_OCCLUSIONDIRECTRATIO: u32 = 14;
pub const SOURCE_EXCLUSION: u32 = 15;
pub const SOURCE_EXCLUSIONLFRATIO: u32 = 16;
pub const SOURCE_OUTSIDEVOLUMEHF: u32 = 17;
pub const SOURCE_DOPPLERFACTOR: u32 = 18;
pub const SOURCE_ROLLOFFFACTOR: u32 = 19;
pub const SOURCE_ROOMROLLOFFFACTOR: u32 = 20;
pub const SOURCE_AIRABSORPTIONFACTOR: u32 = 21;
pub const SOURCE_FLAGS: u32 = 22;
// v4 additions.
pub const SOURCE_SENDPARAMETERS: u32 = 23;
pub const SOURCE_ALLSENDPARAMETERS: u32 = 24;
pub const SOURCE_OCCLUSIONSENDPARAMETERS: u32 = 25;
pub const SOURCE_EXCLUSIONSENDPARAMETERS: u32 = 26;
pub const SOURCE_ACTIVEFXSLOTID: u32 = 27;
// v5 additions.
pub const SOURCE_MACROFXFACTOR: u32 = 28;
pub const SOURCE_SPEAKERLEVELS: u32 = 29;
pub const SOURCE_ALL2DPARAMETERS: u32 = 30;

/// Scale `direct_hf` with distance.
pub const SOURCE_FLAG_DIRECT_HF_AUTO: u32 = 0x01;
/// Scale `room` with distance.
pub const SOURCE_FLAG_ROOM_AUTO: u32 = 0x02;
/// Scale `room_hf` with distance.
pub const SOURCE_FLAG_ROOM_HF_AUTO: u32 = 0x04;
/// v5: defined but consumed by no path yet; carried verbatim.
pub const SOURCE_FLAG_3D_ELEVATION_FILTER: u32 = 0x08;
/// v5: upmix 2-D sources. Ignored for 3-D sources.
pub const SOURCE_FLAG_UPMIX: u32 = 0x10;
/// v5: apply the per-speaker level table.
pub const SOURCE_FLAG_APPLY_SPEAKER_LEVELS: u32 = 0x20;

/// Reserved mask enforced for sessions below v5 (three defined bits).
pub const SOURCE_FLAGS_RESERVED_LEGACY: u32 = 0xFFFF_FFF8;
/// Reserved mask enforced for v5 sessions (six defined bits).
pub const SOURCE_FLAGS_RESERVED_V5: u32 = 0xFFFF_FFC0;

pub const SOURCE_DEFAULT_FLAGS: u32 =
    SOURCE_FLAG_DIRECT_HF_AUTO | SOURCE_FLAG_ROOM_AUTO | SOURCE_FLAG_ROOM_HF_AUTO;

pub const SOURCE_DEFAULT_FLAGS_V5: u32 = SOURCE_DEFAULT_FLAGS | SOURCE_FLAG_UPMIX;

/// Speaker ids for [`SpeakerLevelProps`].
pub const SPEAKER_FRONT_LEFT: i32 = 1;
pub const SPEAKER_FRONT_CENTER: i32 = 2;
pub const SPEAKER_FRONT_RIGHT: i32 = 3;
pub const SPEAKER_SIDE_RIGHT: i32 = 4;
pub const SPEAKER_REAR_RIGHT: i32 = 5;
pub const SPEAKER_REAR_CENTER: i32 = 6;
pub const SPEAKER_REAR_LEFT: i32 = 7;
pub const SPEAKER_SIDE_LEFT: i32 = 8;
pub const SPEAKER_LOW_FREQUENCY: i32 = 9;
pub const SPEAKER_COUNT: usize = 9;

/// The scalar source block shared by v3/v4 `ALLPARAMETERS`.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct SourceProps {
    pub direct: i32,
    pub direct_hf: i32,
    pub room: i32,
    pub room_hf: i32,
    pub obstruction: i32,
    pub obstruction_lf_ratio: f32,
    pub occlusion: i32,
    #[default(SourceProps::DEFAULT_OCCLUSION_LF_RATIO)]
    pub occlusion_lf_ratio: f32,
    #[default(SourceProps::DEFAULT_OCCLUSION_ROOM_RATIO)]
    pub occlusion_room_ratio: f32,
    #[default(SourceProps::DEFAULT_OCCLUSION_DIRECT_RATIO)]
    pub occlusion_direct_ratio: f32,
    pub exclusion: i32,
    #[default(SourceProps::DEFAULT_EXCLUSION_LF_RATIO)]
    pub exclusion_lf_ratio: f32,
    pub outside_volume_hf: i32,
    #[default(SourceProps::DEFAULT_DOPPLER_FACTOR)]
    pub doppler_factor: f32,
    pub rolloff_factor: f32,
    pub room_rolloff_factor: f32,
    pub air_absorption_factor: f32,
    #[default(SOURCE_DEFAULT_FLAGS)]
    pub flags: u32,
}

/// The v5 source block: the scalar block plus the macro FX factor.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct SourceProps50 {
    pub source: SourceProps,
    #[default(SourceProps50::DEFAULT_MACRO_FX_FACTOR)]
    pub macro_fx_factor: f32,
}

impl SourceProps {
    pub const MIN_DIRECT: i32 = -10_000;
    pub const MAX_DIRECT: i32 = 1_000;

    pub const MIN_DIRECT_HF: i32 = -10_000;
    pub const MAX_DIRECT_HF: i32 = 0;

    pub const MIN_ROOM: i32 = -10_000;
    pub const MAX_ROOM: i32 = 1_000;

    pub const MIN_ROOM_HF: i32 = -10_000;
    pub const MAX_ROOM_HF: i32 = 0;

    pub const MIN_OBSTRUCTION: i32 = -10_000;
    pub const MAX_OBSTRUCTION: i32 = 0;

    pub const MIN_OBSTRUCTION_LF_RATIO: f32 = 0.0;
    pub const MAX_OBSTRUCTION_LF_RATIO: f32 = 1.0;

    pub const MIN_OCCLUSION: i32 = -10_000;
    pub const MAX_OCCLUSION: i32 = 0;

    pub const MIN_OCCLUSION_LF_RATIO: f32 = 0.0;
    pub const MAX_OCCLUSION_LF_RATIO: f32 = 1.0;
    pub const DEFAULT_OCCLUSION_LF_RATIO: f32 = 0.25;

    pub const MIN_OCCLUSION_ROOM_RATIO: f32 = 0.0;
    pub const MAX_OCCLUSION_ROOM_RATIO: f32 = 10.0;
    pub const DEFAULT_OCCLUSION_ROOM_RATIO: f32 = 1.5;

    pub const MIN_OCCLUSION_DIRECT_RATIO: f32 = 0.0;
    pub const MAX_OCCLUSION_DIRECT_RATIO: f32 = 10.0;
    pub const DEFAULT_OCCLUSION_DIRECT_RATIO: f32 = 1.0;

    pub const MIN_EXCLUSION: i32 = -10_000;
    pub const MAX_EXCLUSION: i32 = 0;

    pub const MIN_EXCLUSION_LF_RATIO: f32 = 0.0;
    pub const MAX_EXCLUSION_LF_RATIO: f32 = 1.0;
    pub const DEFAULT_EXCLUSION_LF_RATIO: f32 = 1.0;

    pub const MIN_OUTSIDE_VOLUME_HF: i32 = -10_000;
    pub const MAX_OUTSIDE_VOLUME_HF: i32 = 0;

    pub const MIN_DOPPLER_FACTOR: f32 = 0.0;
    pub const MAX_DOPPLER_FACTOR: f32 = 10.0;
    pub const DEFAULT_DOPPLER_FACTOR: f32 = 1.0;

    pub const MIN_ROLLOFF_FACTOR: f32 = 0.0;
    pub const MAX_ROLLOFF_FACTOR: f32 = 10.0;

    pub const MIN_ROOM_ROLLOFF_FACTOR: f32 = 0.0;
    pub const MAX_ROOM_ROLLOFF_FACTOR: f32 = 10.0;

    pub const MIN_AIR_ABSORPTION_FACTOR: f32 = 0.0;
    pub const MAX_AIR_ABSORPTION_FACTOR: f32 = 10.0;
}

impl SourceProps50 {
    pub const MIN_MACRO_FX_FACTOR: f32 = 0.0;
    pub const MAX_MACRO_FX_FACTOR: f32 = 1.0;
    pub const DEFAULT_MACRO_FX_FACTOR: f32 = 1.0;
}

/// `OBSTRUCTIONPARAMETERS` payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct ObstructionProps {
    pub obstruction: i32,
    pub obstruction_lf_ratio: f32,
}

/// `OCCLUSIONPARAMETERS` payload.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct OcclusionProps {
    pub occlusion: i32,
    #[default(SourceProps::DEFAULT_OCCLUSION_LF_RATIO)]
    pub occlusion_lf_ratio: f32,
    #[default(SourceProps::DEFAULT_OCCLUSION_ROOM_RATIO)]
    pub occlusion_room_ratio: f32,
    #[default(SourceProps::DEFAULT_OCCLUSION_DIRECT_RATIO)]
    pub occlusion_direct_ratio: f32,
}

/// `EXCLUSIONPARAMETERS` payload.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct ExclusionProps {
    pub exclusion: i32,
    #[default(SourceProps::DEFAULT_EXCLUSION_LF_RATIO)]
    pub exclusion_lf_ratio: f32,
}

/// `SENDPARAMETERS` payload, one per receiving slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct SendProps {
    pub receiving_fx_slot_id: Guid,
    pub send: i32,
    pub send_hf: i32,
}

/// `ALLSENDPARAMETERS` payload, one per receiving slot.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct AllSendProps {
    #[default(Guid::NULL)]
    pub receiving_fx_slot_id: Guid,
    pub send: i32,
    pub send_hf: i32,
    pub occlusion: i32,
    #[default(SourceProps::DEFAULT_OCCLUSION_LF_RATIO)]
    pub occlusion_lf_ratio: f32,
    #[default(SourceProps::DEFAULT_OCCLUSION_ROOM_RATIO)]
    pub occlusion_room_ratio: f32,
    #[default(SourceProps::DEFAULT_OCCLUSION_DIRECT_RATIO)]
    pub occlusion_direct_ratio: f32,
    pub exclusion: i32,
    #[default(SourceProps::DEFAULT_EXCLUSION_LF_RATIO)]
    pub exclusion_lf_ratio: f32,
}

/// `OCCLUSIONSENDPARAMETERS` payload.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct OcclusionSendProps {
    #[default(Guid::NULL)]
    pub receiving_fx_slot_id: Guid,
    pub occlusion: i32,
    #[default(SourceProps::DEFAULT_OCCLUSION_LF_RATIO)]
    pub occlusion_lf_ratio: f32,
    #[default(SourceProps::DEFAULT_OCCLUSION_ROOM_RATIO)]
    pub occlusion_room_ratio: f32,
    #[default(SourceProps::DEFAULT_OCCLUSION_DIRECT_RATIO)]
    pub occlusion_direct_ratio: f32,
}

/// `EXCLUSIONSENDPARAMETERS` payload.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct ExclusionSendProps {
    #[default(Guid::NULL)]
    pub receiving_fx_slot_id: Guid,
    pub exclusion: i32,
    #[default(SourceProps::DEFAULT_EXCLUSION_LF_RATIO)]
    pub exclusion_lf_ratio: f32,
}

impl SendProps {
    pub const MIN_SEND: i32 = -10_000;
    pub const MAX_SEND: i32 = 0;
    pub const DEFAULT_SEND: i32 = 0;

    pub const MIN_SEND_HF: i32 = -10_000;
    pub const MAX_SEND_HF: i32 = 0;
    pub const DEFAULT_SEND_HF: i32 = 0;
}

/// `ACTIVEFXSLOTID` payload: up to four slot GUIDs a source routes to.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct ActiveFxSlots {
    #[default([Guid::NULL, EAX_PRIMARY_FX_SLOT_ID, Guid::NULL, Guid::NULL])]
    pub slots: [Guid; super::EAX_MAX_FX_SLOTS],
}

impl ActiveFxSlots {
    /// Boot routing for a freshly generated source.
    pub const DEFAULT_3D: ActiveFxSlots = ActiveFxSlots {
        slots: [Guid::NULL, EAX_PRIMARY_FX_SLOT_ID, Guid::NULL, Guid::NULL],
    };

    /// 2-D sources boot with no sends at all.
    pub const DEFAULT_2D: ActiveFxSlots = ActiveFxSlots {
        slots: [Guid::NULL; super::EAX_MAX_FX_SLOTS],
    };
}

/// One `SPEAKERLEVELS` entry.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct SpeakerLevelProps {
    #[default(SPEAKER_FRONT_LEFT)]
    pub speaker_id: i32,
    #[default(SpeakerLevelProps::DEFAULT_LEVEL)]
    pub level: i32,
}

impl SpeakerLevelProps {
    pub const MIN_LEVEL: i32 = -10_000;
    pub const MAX_LEVEL: i32 = 0;
    pub const DEFAULT_LEVEL: i32 = -10_000;
}

/// `ALL2DPARAMETERS` payload.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct Source2dProps {
    pub direct: i32,
    pub direct_hf: i32,
    pub room: i32,
    pub room_hf: i32,
    #[default(SOURCE_DEFAULT_FLAGS_V5)]
    pub flags: u32,
}

/// The legacy 2.0 per-buffer block, accepted on v2 `ALLPARAMETERS`.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct Buffer20Props {
    pub direct: i32,
    pub direct_hf: i32,
    pub room: i32,
    pub room_hf: i32,
    pub room_rolloff_factor: f32,
    pub obstruction: i32,
    pub obstruction_lf_ratio: f32,
    pub occlusion: i32,
    #[default(SourceProps::DEFAULT_OCCLUSION_LF_RATIO)]
    pub occlusion_lf_ratio: f32,
    #[default(SourceProps::DEFAULT_OCCLUSION_ROOM_RATIO)]
    pub occlusion_room_ratio: f32,
    pub outside_volume_hf: i32,
    pub air_absorption_factor: f32,
    #[default(SOURCE_DEFAULT_FLAGS)]
    pub flags: u32,
}

static_assertions::assert_eq_size!(SourceProps, [u8; 72]);
static_assertions::assert_eq_size!(SourceProps50, [u8; 76]);
static_assertions::assert_eq_size!(SendProps, [u8; 24]);
static_assertions::assert_eq_size!(AllSendProps, [u8; 48]);
static_assertions::assert_eq_size!(ActiveFxSlots, [u8; 64]);
static_assertions::assert_eq_size!(Buffer20Props, [u8; 52]);
