//! Auto-wah effect.

use std::sync::Arc;

use al_sys::*;

use crate::api::*;
use crate::call::EaxCall;
use crate::error::{EaxError, Result};
use crate::unit::effect as convert;
use crate::validate;

use super::{dirty_bits, EffectCore, EffectKind};

dirty_bits! {
    pub(crate) struct AutoWahDirty { attack_time, release_time, resonance, peak_level }
}

pub struct AutoWahEffect {
    core: EffectCore,
    props: AutoWahProps,
    deferred: AutoWahProps,
    dirty: AutoWahDirty,
}

impl AutoWahEffect {
    pub fn new(slot: ALuint, api: &Arc<AlApi>) -> Result<AutoWahEffect> {
        let core = EffectCore::new(EffectKind::AutoWah, slot, api)?;
        let props = AutoWahProps::default();
        let mut effect = AutoWahEffect {
            core,
            props,
            deferred: props,
            dirty: AutoWahDirty::NONE,
        };
        effect.load();
        Ok(effect)
    }

    pub fn load(&mut self) {
        self.set_efx_attack_time();
        self.set_efx_release_time();
        self.set_efx_resonance();
        self.set_efx_peak_level();
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
            AUTOWAH_NONE => Ok(()),
            AUTOWAH_ALLPARAMETERS => call.set_value(self.props),
            AUTOWAH_ATTACKTIME => call.set_value(self.props.attack_time),
            AUTOWAH_RELEASETIME => call.set_value(self.props.release_time),
            AUTOWAH_RESONANCE => call.set_value(self.props.resonance),
            AUTOWAH_PEAKLEVEL => call.set_value(self.props.peak_level),
            other => Err(EaxError::UnknownProperty {
                set: "auto-wah",
                id: other,
            }),
        }
    }

    fn set(&mut self, call: &EaxCall) -> Result {
        match call.property_id() {
            AUTOWAH_NONE => {}
            AUTOWAH_ALLPARAMETERS => self.defer_all(call.value()?)?,
            AUTOWAH_ATTACKTIME => self.defer_attack_time(call.value()?)?,
            AUTOWAH_RELEASETIME => self.defer_release_time(call.value()?)?,
            AUTOWAH_RESONANCE => self.defer_resonance(call.value()?)?,
            AUTOWAH_PEAKLEVEL => self.defer_peak_level(call.value()?)?,
            other => {
                return Err(EaxError::UnknownProperty {
                    set: "auto-wah",
                    id: other,
                })
            }
        }
        self.apply_deferred();
        Ok(())
    }

    fn validate_attack_time(attack_time: f32) -> Result {
        validate::range(
            "Auto-Wah Attack Time",
            attack_time,
            AutoWahProps::MIN_ATTACK_TIME,
            AutoWahProps::MAX_ATTACK_TIME,
        )
    }

    fn validate_release_time(release_time: f32) -> Result {
        validate::range(
            "Auto-Wah Release Time",
            release_time,
            AutoWahProps::MIN_RELEASE_TIME,
            AutoWahProps::MAX_RELEASE_TIME,
        )
    }

    fn validate_resonance(resonance: i32) -> Result {
        validate::range(
            "Auto-Wah Resonance",
            resonance,
            AutoWahProps::MIN_RESONANCE,
            AutoWahProps::MAX_RESONANCE,
        )
    }

    fn validate_peak_level(peak_level: i32) -> Result {
        validate::range(
            "Auto-Wah Peak Level",
            peak_level,
            AutoWahProps::MIN_PEAK_LEVEL,
            AutoWahProps::MAX_PEAK_LEVEL,
        )
    }

    fn defer_all(&mut self, all: AutoWahProps) -> Result {
        Self::validate_attack_time(all.attack_time)?;
        Self::validate_release_time(all.release_time)?;
        Self::validate_resonance(all.resonance)?;
        Self::validate_peak_level(all.peak_level)?;
        self.deferred = all;
        self.dirty = AutoWahDirty::ALL;
        Ok(())
    }

    fn defer_attack_time(&mut self, attack_time: f32) -> Result {
        Self::validate_attack_time(attack_time)?;
        self.deferred.attack_time = attack_time;
        self.dirty.update(
            AutoWahDirty::ATTACK_TIME,
            self.props.attack_time != attack_time,
        );
        Ok(())
    }

    fn defer_release_time(&mut self, release_time: f32) -> Result {
        Self::validate_release_time(release_time)?;
        self.deferred.release_time = release_time;
        self.dirty.update(
            AutoWahDirty::RELEASE_TIME,
            self.props.release_time != release_time,
        );
        Ok(())
    }

    fn defer_resonance(&mut self, resonance: i32) -> Result {
        Self::validate_resonance(resonance)?;
        self.deferred.resonance = resonance;
        self.dirty
            .update(AutoWahDirty::RESONANCE, self.props.resonance != resonance);
        Ok(())
    }

    fn defer_peak_level(&mut self, peak_level: i32) -> Result {
        Self::validate_peak_level(peak_level)?;
        self.deferred.peak_level = peak_level;
        self.dirty.update(
            AutoWahDirty::PEAK_LEVEL,
            self.props.peak_level != peak_level,
        );
        Ok(())
    }

    fn apply_deferred(&mut self) {
        if self.dirty.is_empty() {
            return;
        }
        self.props = self.deferred;
        if self.dirty.contains(AutoWahDirty::ATTACK_TIME) {
            self.set_efx_attack_time();
        }
        if self.dirty.contains(AutoWahDirty::RELEASE_TIME) {
            self.set_efx_release_time();
        }
        if self.dirty.contains(AutoWahDirty::RESONANCE) {
            self.set_efx_resonance();
        }
        if self.dirty.contains(AutoWahDirty::PEAK_LEVEL) {
            self.set_efx_peak_level();
        }
        self.dirty.clear();
        self.core.attach();
    }

    fn set_efx_attack_time(&self) {
        self.core.set_f(
            AL_AUTOWAH_ATTACK_TIME,
            convert::autowah_attack_time(self.props.attack_time),
        );
    }

    fn set_efx_release_time(&self) {
        self.core.set_f(
            AL_AUTOWAH_RELEASE_TIME,
            convert::autowah_release_time(self.props.release_time),
        );
    }

    fn set_efx_resonance(&self) {
        self.core.set_f(
            AL_AUTOWAH_RESONANCE,
            convert::autowah_resonance(self.props.resonance),
        );
    }

    fn set_efx_peak_level(&self) {
        self.core.set_f(
            AL_AUTOWAH_PEAK_GAIN,
            convert::autowah_peak_gain(self.props.peak_level),
        );
    }
}
