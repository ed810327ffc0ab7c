//! An EAX 2.0–5.0 property-set engine on top of the EFX audio extension.
//!
//! Games written against the legacy EAX property-set API issue `EAXSet` /
//! `EAXGet` calls carrying a property-set GUID, a property id, and a raw
//! parameter buffer. This crate interprets those calls and keeps a live EFX
//! object graph (four auxiliary effect slots, one loaded effect per slot,
//! per-source low-pass filters and auxiliary sends) in sync with a shadow
//! copy of the legacy state.
//!
//! The host shim is expected to forward ordinary playback calls straight to
//! the driver and route the property-set traffic, source/buffer lifecycle
//! notifications, and the handful of intercepted ALC calls through [`Eaxx`].
//! Driver entry points are resolved at runtime through `alGetProcAddress`
//! (see the `al-sys` crate); nothing is linked.
//!
//! State model in one sentence: the shadow is authoritative for every get,
//! writes validate into a deferred copy plus per-field dirty bits, and a
//! commit pass pushes the dirty fields through the EFX entry points so a
//! failed write never leaves half-updated state.

pub mod api;
pub mod guid;
pub mod testing;
pub mod unit;
pub mod xram;

mod al_object;
mod call;
mod context;
mod effects;
mod engine;
mod error;
mod fx_slot;
mod fx_slot_index;
mod fx_slots;
mod presets;
mod source;
mod validate;

pub use self::{
    al_object::{EfxEffect, EfxEffectSlot, EfxFilter},
    call::{EaxCall, EaxVersion, PropertyBuffer, PropertySetId},
    context::EaxContext,
    effects::{Effect, EffectKind},
    engine::{global, Eaxx},
    error::{EaxError, Result},
    fx_slot::FxSlot,
    fx_slot_index::FxSlotIndex,
    fx_slots::FxSlots,
    presets::REVERB_PRESETS,
    source::Source,
    xram::{XRam, XRamMode},
};
