//! Wire-level surface of the legacy property protocol.
//!
//! Everything a game can put on the wire lives here: the `repr(C)` property
//! structs (all plain-old-data, layout checked at compile time), the
//! property-id numbering per property set, the documented parameter ranges
//! as associated constants, the reserved flag masks, and the transport
//! return codes. The engine modules own the behavior; this module owns the
//! bytes.

mod context;
mod effect_props;
mod fx_slot;
mod source;

pub use self::{context::*, effect_props::*, fx_slot::*, source::*};

use bytemuck::{Pod, Zeroable};
use smart_default::SmartDefault;

/// Slots per context.
pub const EAX_MAX_FX_SLOTS: usize = 4;

/// Transport codes returned by `EAXSet`/`EAXGet`.
pub const EAX_OK: i32 = 0;
pub const EAXERR_INVALID_OPERATION: i32 = -1;
pub const EAXERR_INVALID_VALUE: i32 = -2;
pub const EAXERR_NO_EFFECT_LOADED: i32 = -3;
pub const EAXERR_UNKNOWN_EFFECT: i32 = -4;
pub const EAXERR_INCOMPATIBLE_SOURCE_TYPE: i32 = -5;
pub const EAXERR_INCOMPATIBLE_EAX_VERSION: i32 = -6;

/// Session version numbers as they travel in [`SessionProps`].
pub const SESSION_VERSION_EAX40: u32 = 5;
pub const SESSION_VERSION_EAX50: u32 = 6;

/// Speaker configurations accepted by the v5 context `SPEAKERCONFIG`.
pub const SPEAKER_CONFIG_HEADPHONES: u32 = 0;
pub const SPEAKER_CONFIG_STEREO: u32 = 1;
pub const SPEAKER_CONFIG_QUAD: u32 = 2;
pub const SPEAKER_CONFIG_5POINT1: u32 = 3;
pub const SPEAKER_CONFIG_6POINT1: u32 = 4;
pub const SPEAKER_CONFIG_7POINT1: u32 = 5;

/// Per-context declaration of the active EAX level and send budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct SessionProps {
    #[default(SESSION_VERSION_EAX40)]
    pub version: u32,
    #[default(SessionProps::DEFAULT_MAX_ACTIVE_SENDS)]
    pub max_active_sends: u32,
}

impl SessionProps {
    pub const MIN_VERSION: u32 = SESSION_VERSION_EAX40;
    pub const MAX_VERSION: u32 = SESSION_VERSION_EAX50;

    pub const MIN_MAX_ACTIVE_SENDS: u32 = 2;
    pub const MAX_MAX_ACTIVE_SENDS: u32 = 4;
    pub const DEFAULT_MAX_ACTIVE_SENDS: u32 = 2;
}

/// Panning vector used by the reverb pan properties.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

static_assertions::assert_eq_size!(SessionProps, [u8; 8]);
static_assertions::assert_eq_size!(Vector3, [u8; 12]);
