//! Echo effect.

use std::sync::Arc;

use al_sys::*;

use crate::api::*;
use crate::call::EaxCall;
use crate::error::{EaxError, Result};
use crate::unit::effect as convert;
use crate::validate;

use super::{dirty_bits, EffectCore, EffectKind};

dirty_bits! {
    pub(crate) struct EchoDirty { delay, lr_delay, damping, feedback, spread }
}

pub struct EchoEffect {
    core: EffectCore,
    props: EchoProps,
    deferred: EchoProps,
    dirty: EchoDirty,
}

impl EchoEffect {
    pub fn new(slot: ALuint, api: &Arc<AlApi>) -> Result<EchoEffect> {
        let core = EffectCore::new(EffectKind::Echo, slot, api)?;
        let props = EchoProps::default();
        let mut effect = EchoEffect {
            core,
            props,
            deferred: props,
            dirty: EchoDirty::NONE,
        };
        effect.load();
        Ok(effect)
    }

    pub fn load(&mut self) {
        self.set_efx_delay();
        self.set_efx_lr_delay();
        self.set_efx_damping();
        self.set_efx_feedback();
        self.set_efx_spread();
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
            ECHO_NONE => Ok(()),
            ECHO_ALLPARAMETERS => call.set_value(self.props),
            ECHO_DELAY => call.set_value(self.props.delay),
            ECHO_LRDELAY => call.set_value(self.props.lr_delay),
            ECHO_DAMPING => call.set_value(self.props.damping),
            ECHO_FEEDBACK => call.set_value(self.props.feedback),
            ECHO_SPREAD => call.set_value(self.props.spread),
            other => Err(EaxError::UnknownProperty {
                set: "echo",
                id: other,
            }),
        }
    }

    fn set(&mut self, call: &EaxCall) -> Result {
        match call.property_id() {
            ECHO_NONE => {}
            ECHO_ALLPARAMETERS => self.defer_all(call.value()?)?,
            ECHO_DELAY => self.defer_delay(call.value()?)?,
            ECHO_LRDELAY => self.defer_lr_delay(call.value()?)?,
            ECHO_DAMPING => self.defer_damping(call.value()?)?,
            ECHO_FEEDBACK => self.defer_feedback(call.value()?)?,
            ECHO_SPREAD => self.defer_spread(call.value()?)?,
            other => {
                return Err(EaxError::UnknownProperty {
                    set: "echo",
                    id: other,
                })
            }
        }
        self.apply_deferred();
        Ok(())
    }

    fn validate_delay(delay: f32) -> Result {
        validate::range(
            "Echo Delay",
            delay,
            EchoProps::MIN_DELAY,
            EchoProps::MAX_DELAY,
        )
    }

    fn validate_lr_delay(lr_delay: f32) -> Result {
        validate::range(
            "Echo LR Delay",
            lr_delay,
            EchoProps::MIN_LR_DELAY,
            EchoProps::MAX_LR_DELAY,
        )
    }

    fn validate_damping(damping: f32) -> Result {
        validate::range(
            "Echo Damping",
            damping,
            EchoProps::MIN_DAMPING,
            EchoProps::MAX_DAMPING,
        )
    }

    fn validate_feedback(feedback: f32) -> Result {
        validate::range(
            "Echo Feedback",
            feedback,
            EchoProps::MIN_FEEDBACK,
            EchoProps::MAX_FEEDBACK,
        )
    }

    fn validate_spread(spread: f32) -> Result {
        validate::range(
            "Echo Spread",
            spread,
            EchoProps::MIN_SPREAD,
            EchoProps::MAX_SPREAD,
        )
    }

    fn defer_all(&mut self, all: EchoProps) -> Result {
        Self::validate_delay(all.delay)?;
        Self::validate_lr_delay(all.lr_delay)?;
        Self::validate_damping(all.damping)?;
        Self::validate_feedback(all.feedback)?;
        Self::validate_spread(all.spread)?;
        self.deferred = all;
        self.dirty = EchoDirty::ALL;
        Ok(())
    }

    fn defer_delay(&mut self, delay: f32) -> Result {
        Self::validate_delay(delay)?;
        self.deferred.delay = delay;
        self.dirty
            .update(EchoDirty::DELAY, self.props.delay != delay);
        Ok(())
    }

    fn defer_lr_delay(&mut self, lr_delay: f32) -> Result {
        Self::validate_lr_delay(lr_delay)?;
        self.deferred.lr_delay = lr_delay;
        self.dirty
            .update(EchoDirty::LR_DELAY, self.props.lr_delay != lr_delay);
        Ok(())
    }

    fn defer_damping(&mut self, damping: f32) -> Result {
        Self::validate_damping(damping)?;
        self.deferred.damping = damping;
        self.dirty
            .update(EchoDirty::DAMPING, self.props.damping != damping);
        Ok(())
    }

    fn defer_feedback(&mut self, feedback: f32) -> Result {
        Self::validate_feedback(feedback)?;
        self.deferred.feedback = feedback;
        self.dirty
            .update(EchoDirty::FEEDBACK, self.props.feedback != feedback);
        Ok(())
    }

    fn defer_spread(&mut self, spread: f32) -> Result {
        Self::validate_spread(spread)?;
        self.deferred.spread = spread;
        self.dirty
            .update(EchoDirty::SPREAD, self.props.spread != spread);
        Ok(())
    }

    fn apply_deferred(&mut self) {
        if self.dirty.is_empty() {
            return;
        }
        self.props = self.deferred;
        if self.dirty.contains(EchoDirty::DELAY) {
            self.set_efx_delay();
        }
        if self.dirty.contains(EchoDirty::LR_DELAY) {
            self.set_efx_lr_delay();
        }
        if self.dirty.contains(EchoDirty::DAMPING) {
            self.set_efx_damping();
        }
        if self.dirty.contains(EchoDirty::FEEDBACK) {
            self.set_efx_feedback();
        }
        if self.dirty.contains(EchoDirty::SPREAD) {
            self.set_efx_spread();
        }
        self.dirty.clear();
        self.core.attach();
    }

    fn set_efx_delay(&self) {
        self.core
            .set_f(AL_ECHO_DELAY, convert::echo_delay(self.props.delay));
    }

    fn set_efx_lr_delay(&self) {
        self.core
            .set_f(AL_ECHO_LRDELAY, convert::echo_lr_delay(self.props.lr_delay));
    }

    fn set_efx_damping(&self) {
        self.core
            .set_f(AL_ECHO_DAMPING, convert::echo_damping(self.props.damping));
    }

    fn set_efx_feedback(&self) {
        self.core
            .set_f(AL_ECHO_FEEDBACK, convert::echo_feedback(self.props.feedback));
    }

    fn set_efx_spread(&self) {
        self.core
            .set_f(AL_ECHO_SPREAD, convert::echo_spread(self.props.spread));
    }
}
