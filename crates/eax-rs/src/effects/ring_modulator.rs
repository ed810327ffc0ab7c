//! Ring modulator effect.

use std::sync::Arc;

use al_sys::*;

use crate::api::*;
use crate::call::EaxCall;
use crate::error::{EaxError, Result};
use crate::unit::effect as convert;
use crate::validate;

use super::{dirty_bits, EffectCore, EffectKind};

dirty_bits! {
    pub(crate) struct RingModulatorDirty { frequency, high_pass_cut_off, waveform }
}

pub struct RingModulatorEffect {
    core: EffectCore,
    props: RingModulatorProps,
    deferred: RingModulatorProps,
    dirty: RingModulatorDirty,
}

impl RingModulatorEffect {
    pub fn new(slot: ALuint, api: &Arc<AlApi>) -> Result<RingModulatorEffect> {
        let core = EffectCore::new(EffectKind::RingModulator, slot, api)?;
        let props = RingModulatorProps::default();
        let mut effect = RingModulatorEffect {
            core,
            props,
            deferred: props,
            dirty: RingModulatorDirty::NONE,
        };
        effect.load();
        Ok(effect)
    }

    pub fn load(&mut self) {
        self.set_efx_frequency();
        self.set_efx_high_pass_cut_off();
        self.set_efx_waveform();
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
            RING_MODULATOR_NONE => Ok(()),
            RING_MODULATOR_ALLPARAMETERS => call.set_value(self.props),
            RING_MODULATOR_FREQUENCY => call.set_value(self.props.frequency),
            RING_MODULATOR_HIGHPASSCUTOFF => call.set_value(self.props.high_pass_cut_off),
            RING_MODULATOR_WAVEFORM => call.set_value(self.props.waveform),
            other => Err(EaxError::UnknownProperty {
                set: "ring modulator",
                id: other,
            }),
        }
    }

    fn set(&mut self, call: &EaxCall) -> Result {
        match call.property_id() {
            RING_MODULATOR_NONE => {}
            RING_MODULATOR_ALLPARAMETERS => self.defer_all(call.value()?)?,
            RING_MODULATOR_FREQUENCY => self.defer_frequency(call.value()?)?,
            RING_MODULATOR_HIGHPASSCUTOFF => self.defer_high_pass_cut_off(call.value()?)?,
            RING_MODULATOR_WAVEFORM => self.defer_waveform(call.value()?)?,
            other => {
                return Err(EaxError::UnknownProperty {
                    set: "ring modulator",
                    id: other,
                })
            }
        }
        self.apply_deferred();
        Ok(())
    }

    fn validate_frequency(frequency: f32) -> Result {
        validate::range(
            "Ring Modulator Frequency",
            frequency,
            RingModulatorProps::MIN_FREQUENCY,
            RingModulatorProps::MAX_FREQUENCY,
        )
    }

    fn validate_high_pass_cut_off(cut_off: f32) -> Result {
        validate::range(
            "Ring Modulator High-Pass Cut-Off",
            cut_off,
            RingModulatorProps::MIN_HIGH_PASS_CUT_OFF,
            RingModulatorProps::MAX_HIGH_PASS_CUT_OFF,
        )
    }

    fn validate_waveform(waveform: u32) -> Result {
        validate::range(
            "Ring Modulator Waveform",
            waveform,
            RingModulatorProps::MIN_WAVEFORM,
            RingModulatorProps::MAX_WAVEFORM,
        )
    }

    fn defer_all(&mut self, all: RingModulatorProps) -> Result {
        Self::validate_frequency(all.frequency)?;
        Self::validate_high_pass_cut_off(all.high_pass_cut_off)?;
        Self::validate_waveform(all.waveform)?;
        self.deferred = all;
        self.dirty = RingModulatorDirty::ALL;
        Ok(())
    }

    fn defer_frequency(&mut self, frequency: f32) -> Result {
        Self::validate_frequency(frequency)?;
        self.deferred.frequency = frequency;
        self.dirty.update(
            RingModulatorDirty::FREQUENCY,
            self.props.frequency != frequency,
        );
        Ok(())
    }

    fn defer_high_pass_cut_off(&mut self, cut_off: f32) -> Result {
        Self::validate_high_pass_cut_off(cut_off)?;
        self.deferred.high_pass_cut_off = cut_off;
        self.dirty.update(
            RingModulatorDirty::HIGH_PASS_CUT_OFF,
            self.props.high_pass_cut_off != cut_off,
        );
        Ok(())
    }

    fn defer_waveform(&mut self, waveform: u32) -> Result {
        Self::validate_waveform(waveform)?;
        self.deferred.waveform = waveform;
        self.dirty.update(
            RingModulatorDirty::WAVEFORM,
            self.props.waveform != waveform,
        );
        Ok(())
    }

    fn apply_deferred(&mut self) {
        if self.dirty.is_empty() {
            return;
        }
        self.props = self.deferred;
        if self.dirty.contains(RingModulatorDirty::FREQUENCY) {
            self.set_efx_frequency();
        }
        if self.dirty.contains(RingModulatorDirty::HIGH_PASS_CUT_OFF) {
            self.set_efx_high_pass_cut_off();
        }
        if self.dirty.contains(RingModulatorDirty::WAVEFORM) {
            self.set_efx_waveform();
        }
        self.dirty.clear();
        self.core.attach();
    }

    fn set_efx_frequency(&self) {
        self.core.set_f(
            AL_RING_MODULATOR_FREQUENCY,
            convert::ring_modulator_frequency(self.props.frequency),
        );
    }

    fn set_efx_high_pass_cut_off(&self) {
        self.core.set_f(
            AL_RING_MODULATOR_HIGHPASS_CUTOFF,
            convert::ring_modulator_high_pass_cutoff(self.props.high_pass_cut_off),
        );
    }

    fn set_efx_waveform(&self) {
        self.core
            .set_i(AL_RING_MODULATOR_WAVEFORM, self.props.waveform as ALint);
    }
}
