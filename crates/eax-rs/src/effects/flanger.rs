//! Flanger effect.

use std::sync::Arc;

use al_sys::*;

use crate::api::*;
use crate::call::EaxCall;
use crate::error::{EaxError, Result};
use crate::unit::effect as convert;
use crate::validate;

use super::{dirty_bits, EffectCore, EffectKind};

dirty_bits! {
    pub(crate) struct FlangerDirty { waveform, phase, rate, depth, feedback, delay }
}

pub struct FlangerEffect {
    core: EffectCore,
    props: FlangerProps,
    deferred: FlangerProps,
    dirty: FlangerDirty,
}

impl FlangerEffect {
    pub fn new(slot: ALuint, api: &Arc<AlApi>) -> Result<FlangerEffect> {
        let core = EffectCore::new(EffectKind::Flanger, slot, api)?;
        let props = FlangerProps::default();
        let mut effect = FlangerEffect {
            core,
            props,
            deferred: props,
            dirty: FlangerDirty::NONE,
        };
        effect.load();
        Ok(effect)
    }

    pub fn load(&mut self) {
        self.set_efx_waveform();
        self.set_efx_phase();
        self.set_efx_rate();
        self.set_efx_depth();
        self.set_efx_feedback();
        self.set_efx_delay();
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
            FLANGER_NONE => Ok(()),
            FLANGER_ALLPARAMETERS => call.set_value(self.props),
            FLANGER_WAVEFORM => call.set_value(self.props.waveform),
            FLANGER_PHASE => call.set_value(self.props.phase),
            FLANGER_RATE => call.set_value(self.props.rate),
            FLANGER_DEPTH => call.set_value(self.props.depth),
            FLANGER_FEEDBACK => call.set_value(self.props.feedback),
            FLANGER_DELAY => call.set_value(self.props.delay),
            other => Err(EaxError::UnknownProperty {
                set: "flanger",
                id: other,
            }),
        }
    }

    fn set(&mut self, call: &EaxCall) -> Result {
        match call.property_id() {
            FLANGER_NONE => {}
            FLANGER_ALLPARAMETERS => self.defer_all(call.value()?)?,
            FLANGER_WAVEFORM => self.defer_waveform(call.value()?)?,
            FLANGER_PHASE => self.defer_phase(call.value()?)?,
            FLANGER_RATE => self.defer_rate(call.value()?)?,
            FLANGER_DEPTH => self.defer_depth(call.value()?)?,
            FLANGER_FEEDBACK => self.defer_feedback(call.value()?)?,
            FLANGER_DELAY => self.defer_delay(call.value()?)?,
            other => {
                return Err(EaxError::UnknownProperty {
                    set: "flanger",
                    id: other,
                })
            }
        }
        self.apply_deferred();
        Ok(())
    }

    fn validate_waveform(waveform: u32) -> Result {
        validate::range(
            "Flanger Waveform",
            waveform,
            FlangerProps::MIN_WAVEFORM,
            FlangerProps::MAX_WAVEFORM,
        )
    }

    fn validate_phase(phase: i32) -> Result {
        validate::range(
            "Flanger Phase",
            phase,
            FlangerProps::MIN_PHASE,
            FlangerProps::MAX_PHASE,
        )
    }

    fn validate_rate(rate: f32) -> Result {
        validate::range(
            "Flanger Rate",
            rate,
            FlangerProps::MIN_RATE,
            FlangerProps::MAX_RATE,
        )
    }

    fn validate_depth(depth: f32) -> Result {
        validate::range(
            "Flanger Depth",
            depth,
            FlangerProps::MIN_DEPTH,
            FlangerProps::MAX_DEPTH,
        )
    }

    fn validate_feedback(feedback: f32) -> Result {
        validate::range(
            "Flanger Feedback",
            feedback,
            FlangerProps::MIN_FEEDBACK,
            FlangerProps::MAX_FEEDBACK,
        )
    }

    fn validate_delay(delay: f32) -> Result {
        validate::range(
            "Flanger Delay",
            delay,
            FlangerProps::MIN_DELAY,
            FlangerProps::MAX_DELAY,
        )
    }

    fn defer_all(&mut self, all: FlangerProps) -> Result {
        Self::validate_waveform(all.waveform)?;
        Self::validate_phase(all.phase)?;
        Self::validate_rate(all.rate)?;
        Self::validate_depth(all.depth)?;
        Self::validate_feedback(all.feedback)?;
        Self::validate_delay(all.delay)?;
        self.deferred = all;
        self.dirty = FlangerDirty::ALL;
        Ok(())
    }

    fn defer_waveform(&mut self, waveform: u32) -> Result {
        Self::validate_waveform(waveform)?;
        self.deferred.waveform = waveform;
        self.dirty
            .update(FlangerDirty::WAVEFORM, self.props.waveform != waveform);
        Ok(())
    }

    fn defer_phase(&mut self, phase: i32) -> Result {
        Self::validate_phase(phase)?;
        self.deferred.phase = phase;
        self.dirty
            .update(FlangerDirty::PHASE, self.props.phase != phase);
        Ok(())
    }

    fn defer_rate(&mut self, rate: f32) -> Result {
        Self::validate_rate(rate)?;
        self.deferred.rate = rate;
        self.dirty
            .update(FlangerDirty::RATE, self.props.rate != rate);
        Ok(())
    }

    fn defer_depth(&mut self, depth: f32) -> Result {
        Self::validate_depth(depth)?;
        self.deferred.depth = depth;
        self.dirty
            .update(FlangerDirty::DEPTH, self.props.depth != depth);
        Ok(())
    }

    fn defer_feedback(&mut self, feedback: f32) -> Result {
        Self::validate_feedback(feedback)?;
        self.deferred.feedback = feedback;
        self.dirty
            .update(FlangerDirty::FEEDBACK, self.props.feedback != feedback);
        Ok(())
    }

    fn defer_delay(&mut self, delay: f32) -> Result {
        Self::validate_delay(delay)?;
        self.deferred.delay = delay;
        self.dirty
            .update(FlangerDirty::DELAY, self.props.delay != delay);
        Ok(())
    }

    fn apply_deferred(&mut self) {
        if self.dirty.is_empty() {
            return;
        }
        self.props = self.deferred;
        if self.dirty.contains(FlangerDirty::WAVEFORM) {
            self.set_efx_waveform();
        }
        if self.dirty.contains(FlangerDirty::PHASE) {
            self.set_efx_phase();
        }
        if self.dirty.contains(FlangerDirty::RATE) {
            self.set_efx_rate();
        }
        if self.dirty.contains(FlangerDirty::DEPTH) {
            self.set_efx_depth();
        }
        if self.dirty.contains(FlangerDirty::FEEDBACK) {
            self.set_efx_feedback();
        }
        if self.dirty.contains(FlangerDirty::DELAY) {
            self.set_efx_delay();
        }
        self.dirty.clear();
        self.core.attach();
    }

    fn set_efx_waveform(&self) {
        self.core
            .set_i(AL_FLANGER_WAVEFORM, self.props.waveform as ALint);
    }

    fn set_efx_phase(&self) {
        self.core
            .set_i(AL_FLANGER_PHASE, convert::flanger_phase(self.props.phase));
    }

    fn set_efx_rate(&self) {
        self.core
            .set_f(AL_FLANGER_RATE, convert::flanger_rate(self.props.rate));
    }

    fn set_efx_depth(&self) {
        self.core
            .set_f(AL_FLANGER_DEPTH, convert::flanger_depth(self.props.depth));
    }

    fn set_efx_feedback(&self) {
        self.core.set_f(
            AL_FLANGER_FEEDBACK,
            convert::flanger_feedback(self.props.feedback),
        );
    }

    fn set_efx_delay(&self) {
        self.core
            .set_f(AL_FLANGER_DELAY, convert::flanger_delay(self.props.delay));
    }
}
