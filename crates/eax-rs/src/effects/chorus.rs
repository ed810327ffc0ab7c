//! Chorus effect.
//!
//! The legacy phase range is ±180 degrees while EFX only models ±90; the
//! shadow keeps the caller's value and the conversion clamps on the way to
//! the driver.

use std::sync::Arc;

use al_sys::*;

use crate::api::*;
use crate::call::EaxCall;
use crate::error::{EaxError, Result};
use crate::unit::effect as convert;
use crate::validate;

use super::{dirty_bits, EffectCore, EffectKind};

dirty_bits! {
    pub(crate) struct ChorusDirty { waveform, phase, rate, depth, feedback, delay }
}

pub struct ChorusEffect {
    core: EffectCore,
    props: ChorusProps,
    deferred: ChorusProps,
    dirty: ChorusDirty,
}

impl ChorusEffect {
    pub fn new(slot: ALuint, api: &Arc<AlApi>) -> Result<ChorusEffect> {
        let core = EffectCore::new(EffectKind::Chorus, slot, api)?;
        let props = ChorusProps::default();
        let mut effect = ChorusEffect {
            core,
            props,
            deferred: props,
            dirty: ChorusDirty::NONE,
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
            CHORUS_NONE => Ok(()),
            CHORUS_ALLPARAMETERS => call.set_value(self.props),
            CHORUS_WAVEFORM => call.set_value(self.props.waveform),
            CHORUS_PHASE => call.set_value(self.props.phase),
            CHORUS_RATE => call.set_value(self.props.rate),
            CHORUS_DEPTH => call.set_value(self.props.depth),
            CHORUS_FEEDBACK => call.set_value(self.props.feedback),
            CHORUS_DELAY => call.set_value(self.props.delay),
            other => Err(EaxError::UnknownProperty {
                set: "chorus",
                id: other,
            }),
        }
    }

    fn set(&mut self, call: &EaxCall) -> Result {
        match call.property_id() {
            CHORUS_NONE => {}
            CHORUS_ALLPARAMETERS => self.defer_all(call.value()?)?,
            CHORUS_WAVEFORM => self.defer_waveform(call.value()?)?,
            CHORUS_PHASE => self.defer_phase(call.value()?)?,
            CHORUS_RATE => self.defer_rate(call.value()?)?,
            CHORUS_DEPTH => self.defer_depth(call.value()?)?,
            CHORUS_FEEDBACK => self.defer_feedback(call.value()?)?,
            CHORUS_DELAY => self.defer_delay(call.value()?)?,
            other => {
                return Err(EaxError::UnknownProperty {
                    set: "chorus",
                    id: other,
                })
            }
        }
        self.apply_deferred();
        Ok(())
    }

    fn validate_waveform(waveform: u32) -> Result {
        validate::range(
            "Chorus Waveform",
            waveform,
            ChorusProps::MIN_WAVEFORM,
            ChorusProps::MAX_WAVEFORM,
        )
    }

    fn validate_phase(phase: i32) -> Result {
        validate::range(
            "Chorus Phase",
            phase,
            ChorusProps::MIN_PHASE,
            ChorusProps::MAX_PHASE,
        )
    }

    fn validate_rate(rate: f32) -> Result {
        validate::range(
            "Chorus Rate",
            rate,
            ChorusProps::MIN_RATE,
            ChorusProps::MAX_RATE,
        )
    }

    fn validate_depth(depth: f32) -> Result {
        validate::range(
            "Chorus Depth",
            depth,
            ChorusProps::MIN_DEPTH,
            ChorusProps::MAX_DEPTH,
        )
    }

    fn validate_feedback(feedback: f32) -> Result {
        validate::range(
            "Chorus Feedback",
            feedback,
            ChorusProps::MIN_FEEDBACK,
            ChorusProps::MAX_FEEDBACK,
        )
    }

    fn validate_delay(delay: f32) -> Result {
        validate::range(
            "Chorus Delay",
            delay,
            ChorusProps::MIN_DELAY,
            ChorusProps::MAX_DELAY,
        )
    }

    fn defer_all(&mut self, all: ChorusProps) -> Result {
        Self::validate_waveform(all.waveform)?;
        Self::validate_phase(all.phase)?;
        Self::validate_rate(all.rate)?;
        Self::validate_depth(all.depth)?;
        Self::validate_feedback(all.feedback)?;
        Self::validate_delay(all.delay)?;
        self.deferred = all;
        self.dirty = ChorusDirty::ALL;
        Ok(())
    }

    fn defer_waveform(&mut self, waveform: u32) -> Result {
        Self::validate_waveform(waveform)?;
        self.deferred.waveform = waveform;
        self.dirty
            .update(ChorusDirty::WAVEFORM, self.props.waveform != waveform);
        Ok(())
    }

    fn defer_phase(&mut self, phase: i32) -> Result {
        Self::validate_phase(phase)?;
        self.deferred.phase = phase;
        self.dirty
            .update(ChorusDirty::PHASE, self.props.phase != phase);
        Ok(())
    }

    fn defer_rate(&mut self, rate: f32) -> Result {
        Self::validate_rate(rate)?;
        self.deferred.rate = rate;
        self.dirty.update(ChorusDirty::RATE, self.props.rate != rate);
        Ok(())
    }

    fn defer_depth(&mut self, depth: f32) -> Result {
        Self::validate_depth(depth)?;
        self.deferred.depth = depth;
        self.dirty
            .update(ChorusDirty::DEPTH, self.props.depth != depth);
        Ok(())
    }

    fn defer_feedback(&mut self, feedback: f32) -> Result {
        Self::validate_feedback(feedback)?;
        self.deferred.feedback = feedback;
        self.dirty
            .update(ChorusDirty::FEEDBACK, self.props.feedback != feedback);
        Ok(())
    }

    fn defer_delay(&mut self, delay: f32) -> Result {
        Self::validate_delay(delay)?;
        self.deferred.delay = delay;
        self.dirty
            .update(ChorusDirty::DELAY, self.props.delay != delay);
        Ok(())
    }

    fn apply_deferred(&mut self) {
        if self.dirty.is_empty() {
            return;
        }
        self.props = self.deferred;
        if self.dirty.contains(ChorusDirty::WAVEFORM) {
            self.set_efx_waveform();
        }
        if self.dirty.contains(ChorusDirty::PHASE) {
            self.set_efx_phase();
        }
        if self.dirty.contains(ChorusDirty::RATE) {
            self.set_efx_rate();
        }
        if self.dirty.contains(ChorusDirty::DEPTH) {
            self.set_efx_depth();
        }
        if self.dirty.contains(ChorusDirty::FEEDBACK) {
            self.set_efx_feedback();
        }
        if self.dirty.contains(ChorusDirty::DELAY) {
            self.set_efx_delay();
        }
        self.dirty.clear();
        self.core.attach();
    }

    fn set_efx_waveform(&self) {
        self.core
            .set_i(AL_CHORUS_WAVEFORM, self.props.waveform as ALint);
    }

    fn set_efx_phase(&self) {
        self.core
            .set_i(AL_CHORUS_PHASE, convert::chorus_phase(self.props.phase));
    }

    fn set_efx_rate(&self) {
        self.core
            .set_f(AL_CHORUS_RATE, convert::chorus_rate(self.props.rate));
    }

    fn set_efx_depth(&self) {
        self.core
            .set_f(AL_CHORUS_DEPTH, convert::chorus_depth(self.props.depth));
    }

    fn set_efx_feedback(&self) {
        self.core
            .set_f(AL_CHORUS_FEEDBACK, convert::chorus_feedback(self.props.feedback));
    }

    fn set_efx_delay(&self) {
        self.core
            .set_f(AL_CHORUS_DELAY, convert::chorus_delay(self.props.delay));
    }
}
