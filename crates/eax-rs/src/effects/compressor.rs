//! AGC compressor effect.

use std::sync::Arc;

use al_sys::*;

use crate::api::*;
use crate::call::EaxCall;
use crate::error::{EaxError, Result};
use crate::validate;

use super::{dirty_bits, EffectCore, EffectKind};

dirty_bits! {
    pub(crate) struct CompressorDirty { on_off }
}

pub struct CompressorEffect {
    core: EffectCore,
    props: CompressorProps,
    deferred: CompressorProps,
    dirty: CompressorDirty,
}

impl CompressorEffect {
    pub fn new(slot: ALuint, api: &Arc<AlApi>) -> Result<CompressorEffect> {
        let core = EffectCore::new(EffectKind::Compressor, slot, api)?;
        let props = CompressorProps::default();
        let mut effect = CompressorEffect {
            core,
            props,
            deferred: props,
            dirty: CompressorDirty::NONE,
        };
        effect.load();
        Ok(effect)
    }

    pub fn load(&mut self) {
        self.set_efx_on_off();
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
            COMPRESSOR_NONE => Ok(()),
            COMPRESSOR_ALLPARAMETERS => call.set_value(self.props),
            COMPRESSOR_ONOFF => call.set_value(self.props.on_off),
            other => Err(EaxError::UnknownProperty {
                set: "compressor",
                id: other,
            }),
        }
    }

    fn set(&mut self, call: &EaxCall) -> Result {
        match call.property_id() {
            COMPRESSOR_NONE => {}
            COMPRESSOR_ALLPARAMETERS => self.defer_all(call.value()?)?,
            COMPRESSOR_ONOFF => self.defer_on_off(call.value()?)?,
            other => {
                return Err(EaxError::UnknownProperty {
                    set: "compressor",
                    id: other,
                })
            }
        }
        self.apply_deferred();
        Ok(())
    }

    fn validate_on_off(on_off: u32) -> Result {
        validate::range(
            "Compressor On-Off",
            on_off,
            CompressorProps::MIN_ON_OFF,
            CompressorProps::MAX_ON_OFF,
        )
    }

    fn defer_all(&mut self, all: CompressorProps) -> Result {
        Self::validate_on_off(all.on_off)?;
        self.deferred = all;
        self.dirty = CompressorDirty::ALL;
        Ok(())
    }

    fn defer_on_off(&mut self, on_off: u32) -> Result {
        Self::validate_on_off(on_off)?;
        self.deferred.on_off = on_off;
        self.dirty
            .update(CompressorDirty::ON_OFF, self.props.on_off != on_off);
        Ok(())
    }

    fn apply_deferred(&mut self) {
        if self.dirty.is_empty() {
            return;
        }
        self.props = self.deferred;
        if self.dirty.contains(CompressorDirty::ON_OFF) {
            self.set_efx_on_off();
        }
        self.dirty.clear();
        self.core.attach();
    }

    fn set_efx_on_off(&self) {
        self.core
            .set_i(AL_COMPRESSOR_ONOFF, self.props.on_off as ALint);
    }
}
