//! Context property set: ids, structs, ranges.

use bytemuck::{Pod, Zeroable};
use smart_default::SmartDefault;

use crate::guid::{Guid, EAX_DEFAULT_PRIMARY_FX_SLOT_ID};

pub const CONTEXT_NONE: u32 = 0;
pub const CONTEXT_ALLPARAMETERS: u32 = 1;
pub const CONTEXT_PRIMARYFXSLOTID: u32 = 2;
pub const CONTEXT_DISTANCEFACTOR: u32 = 3;
pub const CONTEXT_AIRABSORPTIONHF: u32 = 4;
pub const CONTEXT_HFREFERENCE: u32 = 5;
pub const CONTEXT_LASTERROR: u32 = 6;
// v5 additions.
pub const CONTEXT_SPEAKERCONFIG: u32 = 7;
pub const CONTEXT_EAXSESSION: u32 = 8;
pub const CONTEXT_MACROFXFACTOR: u32 = 9;

/// The v4 context block.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, SmartDefault)]
#[repr(C)]
pub struct ContextProps {
    #[default(EAX_DEFAULT_PRIMARY_FX_SLOT_ID)]
    pub primary_fx_slot_id: Guid,
    #[default(ContextProps::DEFAULT_DISTANCE_FACTOR)]
    pub distance_factor: f32,
    #[default(ContextProps::DEFAULT_AIR_ABSORPTION_HF)]
    pub air_absorption_hf: f32,
    #[default(ContextProps::DEFAULT_HF_REFERENCE)]
    pub hf_reference: f32,
}

/// The v5 context block: the v4 fields plus the macro FX factor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct ContextProps50 {
    pub context: ContextProps,
    pub macro_fx_factor: f32,
}

impl ContextProps {
    pub const MIN_DISTANCE_FACTOR: f32 = f32::MIN_POSITIVE;
    pub const MAX_DISTANCE_FACTOR: f32 = f32::MAX;
    pub const DEFAULT_DISTANCE_FACTOR: f32 = 1.0;

    pub const MIN_AIR_ABSORPTION_HF: f32 = -100.0;
    pub const MAX_AIR_ABSORPTION_HF: f32 = 0.0;
    pub const DEFAULT_AIR_ABSORPTION_HF: f32 = -5.0;

    pub const MIN_HF_REFERENCE: f32 = 1_000.0;
    pub const MAX_HF_REFERENCE: f32 = 20_000.0;
    pub const DEFAULT_HF_REFERENCE: f32 = 5_000.0;
}

impl ContextProps50 {
    pub const MIN_MACRO_FX_FACTOR: f32 = 0.0;
    pub const MAX_MACRO_FX_FACTOR: f32 = 1.0;
    pub const DEFAULT_MACRO_FX_FACTOR: f32 = 0.0;
}

static_assertions::assert_eq_size!(ContextProps, [u8; 28]);
static_assertions::assert_eq_size!(ContextProps50, [u8; 32]);
