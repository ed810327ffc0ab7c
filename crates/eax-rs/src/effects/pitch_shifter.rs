//! Pitch shifter effect.

use std::sync::Arc;

use al_sys::*;

use crate::api::*;
use crate::call::EaxCall;
use crate::error::{EaxError, Result};
use crate::validate;

use super::{dirty_bits, EffectCore, EffectKind};

dirty_bits! {
    pub(crate) struct PitchShifterDirty { coarse_tune, fine_tune }
}

pub struct PitchShifterEffect {
    core: EffectCore,
    props: PitchShifterProps,
    deferred: PitchShifterProps,
    dirty: PitchShifterDirty,
}

impl PitchShifterEffect {
    pub fn new(slot: ALuint, api: &Arc<AlApi>) -> Result<PitchShifterEffect> {
        let core = EffectCore::new(EffectKind::PitchShifter, slot, api)?;
        let props = PitchShifterProps::default();
        let mut effect = PitchShifterEffect {
            core,
            props,
            deferred: props,
            dirty: PitchShifterDirty::NONE,
        };
        effect.load();
        Ok(effect)
    }

    pub fn load(&mut self) {
        self.set_efx_coarse_tune();
        self.set_efx_fine_tune();
        self.core.attach();
    }

    pub fn dispatch(&mut self, call: &EaxCall) -> Result {
        if call.is_get() {
            self.get(call)
        } else {
            self.set(call)
        }
    }

    fn get(&self, call: &EaxCall) -> Result {
        match call.property_id() {
            PITCH_SHIFTER_NONE => Ok(()),
            PITCH_SHIFTER_ALLPARAMETERS => call.set_value(self.props),
            PITCH_SHIFTER_COARSETUNE => call.set_value(self.props.coarse_tune),
            PITCH_SHIFTER_FINETUNE => call.set_value(self.props.fine_tune),
            other => Err(EaxError::UnknownProperty {
                set: "pitch shifter",
                id: other,
            }),
        }
    }

    fn set(&mut self, call: &EaxCall) -> Result {
        match call.property_id() {
            PITCH_SHIFTER_NONE => {}
            PITCH_SHIFTER_ALLPARAMETERS => self.defer_all(call.value()?)?,
            PITCH_SHIFTER_COARSETUNE => self.defer_coarse_tune(call.value()?)?,
            PITCH_SHIFTER_FINETUNE => self.defer_fine_tune(call.value()?)?,
            other => {
                return Err(EaxError::UnknownProperty {
                    set: "pitch shifter",
                    id: other,
                })
            }
        }
        self.apply_deferred();
        Ok(())
    }

    fn validate_coarse_tune(coarse_tune: i32) -> Result {
        validate::range(
            "Pitch Shifter Coarse Tune",
            coarse_tune,
            PitchShifterProps::MIN_COARSE_TUNE,
            PitchShifterProps::MAX_COARSE_TUNE,
        )
    }

    fn validate_fine_tune(fine_tune: i32) -> Result {
        validate::range(
            "Pitch Shifter Fine Tune",
            fine_tune,
            PitchShifterProps::MIN_FINE_TUNE,
            PitchShifterProps::MAX_FINE_TUNE,
        )
    }

    fn defer_all(&mut self, all: PitchShifterProps) -> Result {
        Self::validate_coarse_tune(all.coarse_tune)?;
        Self::validate_fine_tune(all.fine_tune)?;
        self.deferred = all;
        self.dirty = PitchShifterDirty::ALL;
        Ok(())
    }

    fn defer_coarse_tune(&mut self, coarse_tune: i32) -> Result {
        Self::validate_coarse_tune(coarse_tune)?;
        self.deferred.coarse_tune = coarse_tune;
        self.dirty.update(
            PitchShifterDirty::COARSE_TUNE,
            self.props.coarse_tune != coarse_tune,
        );
        Ok(())
    }

    fn defer_fine_tune(&mut self, fine_tune: i32) -> Result {
        Self::validate_fine_tune(fine_tune)?;
        self.deferred.fine_tune = fine_tune;
        self.dirty.update(
            PitchShifterDirty::FINE_TUNE,
            self.props.fine_tune != fine_tune,
        );
        Ok(())
    }

    fn apply_deferred(&mut self) {
        if self.dirty.is_empty() {
            return;
        }
        self.props = self.deferred;
        if self.dirty.contains(PitchShifterDirty::COARSE_TUNE) {
            self.set_efx_coarse_tune();
        }
        if self.dirty.contains(PitchShifterDirty::FINE_TUNE) {
            self.set_efx_fine_tune();
        }
        self.dirty.clear();
        self.core.attach();
    }

    fn set_efx_coarse_tune(&self) {
        self.core
            .set_i(AL_PITCH_SHIFTER_COARSE_TUNE, self.props.coarse_tune);
    }

    fn set_efx_fine_tune(&self) {
        self.core
            .set_i(AL_PITCH_SHIFTER_FINE_TUNE, self.props.fine_tune);
    }
}
