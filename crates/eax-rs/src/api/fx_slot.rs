//! FX slot property set: ids, structs, flags, ranges.

use bytemuck::{Pod, Zeroable};
use smart_default::SmartDefault;

use crate::guid::Guid;

/// Property ids below this value are scoped to the slot's loaded effect.
pub const FXSLOT_PARAMETER: u32 = 0;

pub const FXSLOT_NONE: u32 = 0x10000;
pub const FXSLOT_ALLPARAMETERS: u32 = 0x10001;
pub const FXSLOT_LOADEFFECT: u32 = 0x10002;
pub const FXSLOT_VOLUME: u32 = 0x10003;
pub const FXSLOT_LOCK: u32 = 0x10004;
pub const FXSLOT_FLAGS: u32 = 0x10005;
// v5 additions.
pub const FXSLOT_OCCLUSION: u32 = 0x10006;
pub const FXSLOT_OCCLUSIONLFRATIO: u32 = 0x10007;

/// Route the slot's output through the environmental send.
pub const FXSLOT_FLAG_ENVIRONMENT: u32 = 0x1;
/// v5: allow upmixing the slot's input. Ignored for reverb.
pub const FXSLOT_FLAG_UPMIX: u32 = 0x2;

pub const FXSLOT_FLAGS_RESERVED_V4: u32 = 0xFFFF_FFFE;
pub const FXSLOT_FLAGS_RESERVED_V5: u32 = 0xFFFF_FFFC;

pub const FXSLOT_UNLOCKED: i32 = 0;
pub const FXSLOT_LOCKED: i32 = 1;

/// The v4 slot block.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct FxSlotProps {
    #[default(Guid::NULL)]
    pub load_effect: Guid,
    #[default(FxSlotProps::DEFAULT_VOLUME)]
    pub volume: i32,
    #[default(FXSLOT_UNLOCKED)]
    pub lock: i32,
    #[default(FxSlotProps::DEFAULT_FLAGS)]
    pub flags: u32,
}

/// The v5 slot block: the v4 fields plus slot-level occlusion.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct FxSlotProps50 {
    pub slot: FxSlotProps,
    #[default(FxSlotProps50::DEFAULT_OCCLUSION)]
    pub occlusion: i32,
    #[default(FxSlotProps50::DEFAULT_OCCLUSION_LF_RATIO)]
    pub occlusion_lf_ratio: f32,
}

impl FxSlotProps {
    pub const MIN_VOLUME: i32 = -10_000;
    pub const MAX_VOLUME: i32 = 0;
    pub const DEFAULT_VOLUME: i32 = 0;

    pub const MIN_LOCK: i32 = FXSLOT_UNLOCKED;
    pub const MAX_LOCK: i32 = FXSLOT_LOCKED;

    /// Both defined flags; the upmix bit is only writable from v5 but is
    /// part of the boot state.
    pub const DEFAULT_FLAGS: u32 = FXSLOT_FLAG_ENVIRONMENT | FXSLOT_FLAG_UPMIX;
}

impl FxSlotProps50 {
    pub const MIN_OCCLUSION: i32 = -10_000;
    pub const MAX_OCCLUSION: i32 = 0;
    pub const DEFAULT_OCCLUSION: i32 = 0;

    pub const MIN_OCCLUSION_LF_RATIO: f32 = 0.0;
    pub const MAX_OCCLUSION_LF_RATIO: f32 = 1.0;
    pub const DEFAULT_OCCLUSION_LF_RATIO: f32 = 0.25;
}

static_assertions::assert_eq_size!(FxSlotProps, [u8; 28]);
static_assertions::assert_eq_size!(FxSlotProps50, [u8; 36]);
