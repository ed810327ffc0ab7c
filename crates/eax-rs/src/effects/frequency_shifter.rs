//! Frequency shifter effect.

use std::sync::Arc;

use al_sys::*;

use crate::api::*;
use crate::call::EaxCall;
use crate::error::{EaxError, Result};
use crate::unit::effect as convert;
use crate::validate;

use super::{dirty_bits, EffectCore, EffectKind};

dirty_bits! {
    pub(crate) struct FrequencyShifterDirty { frequency, left_direction, right_direction }
}

pub struct FrequencyShifterEffect {
    core: EffectCore,
    props: FrequencyShifterProps,
    deferred: FrequencyShifterProps,
    dirty: FrequencyShifterDirty,
}

impl FrequencyShifterEffect {
    pub fn new(slot: ALuint, api: &Arc<AlApi>) -> Result<FrequencyShifterEffect> {
        let core = EffectCore::new(EffectKind::FrequencyShifter, slot, api)?;
        let props = FrequencyShifterProps::default();
        let mut effect = FrequencyShifterEffect {
            core,
            props,
            deferred: props,
            dirty: FrequencyShifterDirty::NONE,
        };
        effect.load();
        Ok(effect)
    }

    pub fn load(&mut self) {
        self.set_efx_frequency();
        self.set_efx_left_direction();
        self.set_efx_right_direction();
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
            FREQUENCY_SHIFTER_NONE => Ok(()),
            FREQUENCY_SHIFTER_ALLPARAMETERS => call.set_value(self.props),
            FREQUENCY_SHIFTER_FREQUENCY => call.set_value(self.props.frequency),
            FREQUENCY_SHIFTER_LEFTDIRECTION => call.set_value(self.props.left_direction),
            FREQUENCY_SHIFTER_RIGHTDIRECTION => call.set_value(self.props.right_direction),
            other => Err(EaxError::UnknownProperty {
                set: "frequency shifter",
                id: other,
            }),
        }
    }

    fn set(&mut self, call: &EaxCall) -> Result {
        match call.property_id() {
            FREQUENCY_SHIFTER_NONE => {}
            FREQUENCY_SHIFTER_ALLPARAMETERS => self.defer_all(call.value()?)?,
            FREQUENCY_SHIFTER_FREQUENCY => self.defer_frequency(call.value()?)?,
            FREQUENCY_SHIFTER_LEFTDIRECTION => self.defer_left_direction(call.value()?)?,
            FREQUENCY_SHIFTER_RIGHTDIRECTION => self.defer_right_direction(call.value()?)?,
            other => {
                return Err(EaxError::UnknownProperty {
                    set: "frequency shifter",
                    id: other,
                })
            }
        }
        self.apply_deferred();
        Ok(())
    }

    fn validate_frequency(frequency: f32) -> Result {
        validate::range(
            "Frequency Shifter Frequency",
            frequency,
            FrequencyShifterProps::MIN_FREQUENCY,
            FrequencyShifterProps::MAX_FREQUENCY,
        )
    }

    fn validate_direction(field: &'static str, direction: u32) -> Result {
        validate::range(
            field,
            direction,
            FrequencyShifterProps::MIN_DIRECTION,
            FrequencyShifterProps::MAX_DIRECTION,
        )
    }

    fn defer_all(&mut self, all: FrequencyShifterProps) -> Result {
        Self::validate_frequency(all.frequency)?;
        Self::validate_direction("Frequency Shifter Left Direction", all.left_direction)?;
        Self::validate_direction("Frequency Shifter Right Direction", all.right_direction)?;
        self.deferred = all;
        self.dirty = FrequencyShifterDirty::ALL;
        Ok(())
    }

    fn defer_frequency(&mut self, frequency: f32) -> Result {
        Self::validate_frequency(frequency)?;
        self.deferred.frequency = frequency;
        self.dirty.update(
            FrequencyShifterDirty::FREQUENCY,
            self.props.frequency != frequency,
        );
        Ok(())
    }

    fn defer_left_direction(&mut self, direction: u32) -> Result {
        Self::validate_direction("Frequency Shifter Left Direction", direction)?;
        self.deferred.left_direction = direction;
        self.dirty.update(
            FrequencyShifterDirty::LEFT_DIRECTION,
            self.props.left_direction != direction,
        );
        Ok(())
    }

    fn defer_right_direction(&mut self, direction: u32) -> Result {
        Self::validate_direction("Frequency Shifter Right Direction", direction)?;
        self.deferred.right_direction = direction;
        self.dirty.update(
            FrequencyShifterDirty::RIGHT_DIRECTION,
            self.props.right_direction != direction,
        );
        Ok(())
    }

    fn apply_deferred(&mut self) {
        if self.dirty.is_empty() {
            return;
        }
        self.props = self.deferred;
        if self.dirty.contains(FrequencyShifterDirty::FREQUENCY) {
            self.set_efx_frequency();
        }
        if self.dirty.contains(FrequencyShifterDirty::LEFT_DIRECTION) {
            self.set_efx_left_direction();
        }
        if self.dirty.contains(FrequencyShifterDirty::RIGHT_DIRECTION) {
            self.set_efx_right_direction();
        }
        self.dirty.clear();
        self.core.attach();
    }

    fn set_efx_frequency(&self) {
        self.core.set_f(
            AL_FREQUENCY_SHIFTER_FREQUENCY,
            convert::frequency_shifter_frequency(self.props.frequency),
        );
    }

    fn set_efx_left_direction(&self) {
        self.core.set_i(
            AL_FREQUENCY_SHIFTER_LEFT_DIRECTION,
            self.props.left_direction as ALint,
        );
    }

    fn set_efx_right_direction(&self) {
        self.core.set_i(
            AL_FREQUENCY_SHIFTER_RIGHT_DIRECTION,
            self.props.right_direction as ALint,
        );
    }
}
