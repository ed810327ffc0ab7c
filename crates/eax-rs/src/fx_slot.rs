//! One of the four auxiliary routing slots.
//!
//! A slot owns its driver-side auxiliary effect slot, the currently loaded
//! effect, and the slot-level shadow block. Slots 0 and 1 are dedicated:
//! their loaded effect and lock state cannot be changed by the game. The
//! v5 slot occlusion pair does not touch the driver directly; a change
//! reports "filters dirty" so the context can refresh every source.

use std::sync::Arc;

use al_sys::*;

use crate::api::*;
use crate::call::{EaxCall, EaxVersion, PropertySetId};
use crate::effects::{Effect, EffectKind};
use crate::error::{EaxError, Result};
use crate::guid::Guid;
use crate::unit::level_mb_to_gain;
use crate::validate;
use crate::al_object::EfxEffectSlot;

/// Slots below this index refuse effect/lock changes.
const DEDICATED_COUNT: usize = 2;

pub struct FxSlot {
    index: usize,
    effect_slot: EfxEffectSlot,
    effect: Effect,
    props: FxSlotProps50,
    api: Arc<AlApi>,
}

impl FxSlot {
    /// Create slot `index` with its boot effect: reverb on 0, chorus on 1,
    /// nothing on 2 and 3.
    pub fn new(index: usize, api: &Arc<AlApi>) -> Result<FxSlot> {
        assert!(index < EAX_MAX_FX_SLOTS);

        let effect_slot = EfxEffectSlot::new(api)?;
        let kind = match index {
            0 => EffectKind::Reverb,
            1 => EffectKind::Chorus,
            _ => EffectKind::Null,
        };
        let effect = Effect::new(kind, effect_slot.name(), api)?;

        let mut props = FxSlotProps50::default();
        props.slot.load_effect = kind.guid();

        let slot = FxSlot {
            index,
            effect_slot,
            effect,
            props,
            api: Arc::clone(api),
        };
        slot.set_efx_gain();
        slot.set_efx_send_auto();
        Ok(slot)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    fn is_dedicated(&self) -> bool {
        self.index < DEDICATED_COUNT
    }

    /// The driver-side auxiliary slot sources send to.
    pub fn efx_effect_slot(&self) -> ALuint {
        self.effect_slot.name()
    }

    pub fn props(&self) -> &FxSlotProps50 {
        &self.props
    }

    pub fn loaded_effect(&self) -> &Effect {
        &self.effect
    }

    /// Route a slot or effect-scoped call. Returns true when the write
    /// moved slot-level occlusion and source filters must be refreshed.
    pub fn dispatch(&mut self, call: &EaxCall) -> Result<bool> {
        match call.property_set() {
            PropertySetId::FxSlot => {
                if call.is_get() {
                    self.get(call)?;
                    Ok(false)
                } else {
                    self.set(call)
                }
            }
            PropertySetId::FxSlotEffect => {
                self.effect.dispatch(call)?;
                Ok(false)
            }
            _ => Err(EaxError::UnknownProperty {
                set: "fx slot",
                id: call.property_id(),
            }),
        }
    }

    fn get(&self, call: &EaxCall) -> Result {
        match call.property_id() {
            FXSLOT_NONE => Ok(()),
            FXSLOT_ALLPARAMETERS => match call.version() {
                EaxVersion::V5 => call.set_value(self.props),
                _ => call.set_value(self.props.slot),
            },
            FXSLOT_LOADEFFECT => call.set_value(self.props.slot.load_effect),
            FXSLOT_VOLUME => call.set_value(self.props.slot.volume),
            FXSLOT_LOCK => call.set_value(self.props.slot.lock),
            FXSLOT_FLAGS => call.set_value(self.props.slot.flags),
            FXSLOT_OCCLUSION => {
                call.require_v5()?;
                call.set_value(self.props.occlusion)
            }
            FXSLOT_OCCLUSIONLFRATIO => {
                call.require_v5()?;
                call.set_value(self.props.occlusion_lf_ratio)
            }
            other => Err(EaxError::UnknownProperty {
                set: "fx slot",
                id: other,
            }),
        }
    }

    fn set(&mut self, call: &EaxCall) -> Result<bool> {
        match call.property_id() {
            FXSLOT_NONE => Ok(false),
            FXSLOT_ALLPARAMETERS => {
                self.fail_set_if_dedicated("effect")?;
                self.set_all(call)
            }
            FXSLOT_LOADEFFECT => {
                self.fail_set_if_dedicated("effect")?;
                let effect_id: Guid = call.value()?;
                self.validate_lock_state(self.props.slot.lock, &effect_id)?;
                self.load_effect(&effect_id)?;
                Ok(false)
            }
            FXSLOT_VOLUME => {
                let volume: i32 = call.value()?;
                Self::validate_volume(volume)?;
                self.set_volume(volume);
                Ok(false)
            }
            FXSLOT_LOCK => {
                self.fail_set_if_dedicated("lock")?;
                let lock: i32 = call.value()?;
                Self::validate_lock(lock)?;
                self.props.slot.lock = lock;
                Ok(false)
            }
            FXSLOT_FLAGS => {
                let flags: u32 = call.value()?;
                Self::validate_flags(flags, call.version())?;
                self.set_flags(flags);
                Ok(false)
            }
            FXSLOT_OCCLUSION => {
                call.require_v5()?;
                let occlusion: i32 = call.value()?;
                Self::validate_occlusion(occlusion)?;
                Ok(self.set_occlusion(occlusion))
            }
            FXSLOT_OCCLUSIONLFRATIO => {
                call.require_v5()?;
                let ratio: f32 = call.value()?;
                Self::validate_occlusion_lf_ratio(ratio)?;
                Ok(self.set_occlusion_lf_ratio(ratio))
            }
            other => Err(EaxError::UnknownProperty {
                set: "fx slot",
                id: other,
            }),
        }
    }

    fn set_all(&mut self, call: &EaxCall) -> Result<bool> {
        match call.version() {
            EaxVersion::V5 => {
                let all: FxSlotProps50 = call.value()?;
                self.validate_all(&all.slot, call.version())?;
                Self::validate_occlusion(all.occlusion)?;
                Self::validate_occlusion_lf_ratio(all.occlusion_lf_ratio)?;

                self.apply_v4_block(&all.slot)?;
                let occlusion_moved = self.set_occlusion(all.occlusion);
                let ratio_moved = self.set_occlusion_lf_ratio(all.occlusion_lf_ratio);
                Ok(occlusion_moved || ratio_moved)
            }
            _ => {
                let all: FxSlotProps = call.value()?;
                self.validate_all(&all, call.version())?;
                self.apply_v4_block(&all)?;
                Ok(false)
            }
        }
    }

    fn apply_v4_block(&mut self, all: &FxSlotProps) -> Result {
        self.load_effect(&all.load_effect)?;
        self.set_volume(all.volume);
        self.props.slot.lock = all.lock;
        self.set_flags(all.flags);
        Ok(())
    }

    // Validation.

    fn validate_effect(effect_id: &Guid) -> Result {
        match EffectKind::from_guid(effect_id) {
            Some(_) => Ok(()),
            None => Err(EaxError::UnknownEffect(*effect_id)),
        }
    }

    fn validate_volume(volume: i32) -> Result {
        validate::range(
            "FX Slot Volume",
            volume,
            FxSlotProps::MIN_VOLUME,
            FxSlotProps::MAX_VOLUME,
        )
    }

    fn validate_lock(lock: i32) -> Result {
        validate::range(
            "FX Slot Lock",
            lock,
            FxSlotProps::MIN_LOCK,
            FxSlotProps::MAX_LOCK,
        )
    }

    fn validate_flags(flags: u32, version: EaxVersion) -> Result {
        let reserved = match version {
            EaxVersion::V5 => FXSLOT_FLAGS_RESERVED_V5,
            _ => FXSLOT_FLAGS_RESERVED_V4,
        };
        validate::flags("FX Slot Flags", flags, reserved)
    }

    fn validate_occlusion(occlusion: i32) -> Result {
        validate::range(
            "FX Slot Occlusion",
            occlusion,
            FxSlotProps50::MIN_OCCLUSION,
            FxSlotProps50::MAX_OCCLUSION,
        )
    }

    fn validate_occlusion_lf_ratio(ratio: f32) -> Result {
        validate::range(
            "FX Slot Occlusion LF Ratio",
            ratio,
            FxSlotProps50::MIN_OCCLUSION_LF_RATIO,
            FxSlotProps50::MAX_OCCLUSION_LF_RATIO,
        )
    }

    fn validate_all(&self, all: &FxSlotProps, version: EaxVersion) -> Result {
        Self::validate_effect(&all.load_effect)?;
        self.validate_lock_state(self.props.slot.lock, &all.load_effect)?;
        Self::validate_volume(all.volume)?;
        Self::validate_lock(all.lock)?;
        Self::validate_flags(all.flags, version)?;
        Ok(())
    }

    /// A locked slot keeps its effect: only a reload of the identical GUID
    /// passes.
    fn validate_lock_state(&self, lock: i32, effect_id: &Guid) -> Result {
        if lock == FXSLOT_LOCKED && *effect_id != self.props.slot.load_effect {
            return Err(EaxError::LockedSlot);
        }
        Ok(())
    }

    fn fail_set_if_dedicated(&self, what: &'static str) -> Result {
        if self.is_dedicated() {
            return Err(EaxError::DedicatedSlot(what));
        }
        Ok(())
    }

    // State changes.

    /// Install the effect named by `effect_id`. Reloading the current
    /// effect is a no-op so a locked slot can be handed its own GUID.
    fn load_effect(&mut self, effect_id: &Guid) -> Result {
        Self::validate_effect(effect_id)?;
        if self.props.slot.load_effect == *effect_id {
            return Ok(());
        }

        let kind = EffectKind::from_guid(effect_id).expect("validated above");
        self.effect = Effect::new(kind, self.effect_slot.name(), &self.api)?;
        self.props.slot.load_effect = *effect_id;
        Ok(())
    }

    fn set_volume(&mut self, volume: i32) {
        if self.props.slot.volume == volume {
            return;
        }
        self.props.slot.volume = volume;
        self.set_efx_gain();
    }

    fn set_flags(&mut self, flags: u32) {
        if self.props.slot.flags == flags {
            return;
        }
        self.props.slot.flags = flags;
        self.set_efx_send_auto();
    }

    fn set_occlusion(&mut self, occlusion: i32) -> bool {
        if self.props.occlusion == occlusion {
            return false;
        }
        self.props.occlusion = occlusion;
        true
    }

    fn set_occlusion_lf_ratio(&mut self, ratio: f32) -> bool {
        if self.props.occlusion_lf_ratio == ratio {
            return false;
        }
        self.props.occlusion_lf_ratio = ratio;
        true
    }

    fn set_efx_gain(&self) {
        let gain = level_mb_to_gain(
            self.props
                .slot
                .volume
                .clamp(FxSlotProps::MIN_VOLUME, FxSlotProps::MAX_VOLUME),
        );
        // SAFETY: resolved table, engine mutex held by the caller.
        unsafe {
            (self.api.efx.alAuxiliaryEffectSlotf)(
                self.effect_slot.name(),
                AL_EFFECTSLOT_GAIN,
                gain,
            )
        };
    }

    fn set_efx_send_auto(&self) {
        let send_auto = self.props.slot.flags & FXSLOT_FLAG_ENVIRONMENT != 0;
        unsafe {
            (self.api.efx.alAuxiliaryEffectSloti)(
                self.effect_slot.name(),
                AL_EFFECTSLOT_AUXILIARY_SEND_AUTO,
                send_auto as ALint,
            )
        };
    }
}
