//! Distortion effect.

use std::sync::Arc;

use al_sys::*;

use crate::api::*;
use crate::call::EaxCall;
use crate::error::{EaxError, Result};
use crate::unit::effect as convert;
use crate::validate;

use super::{dirty_bits, EffectCore, EffectKind};

dirty_bits! {
    pub(crate) struct DistortionDirty { edge, gain, low_pass_cut_off, eq_center, eq_bandwidth }
}

pub struct DistortionEffect {
    core: EffectCore,
    props: DistortionProps,
    deferred: DistortionProps,
    dirty: DistortionDirty,
}

impl DistortionEffect {
    pub fn new(slot: ALuint, api: &Arc<AlApi>) -> Result<DistortionEffect> {
        let core = EffectCore::new(EffectKind::Distortion, slot, api)?;
        let props = DistortionProps::default();
        let mut effect = DistortionEffect {
            core,
            props,
            deferred: props,
            dirty: DistortionDirty::NONE,
        };
        effect.load();
        Ok(effect)
    }

    pub fn load(&mut self) {
        self.set_efx_edge();
        self.set_efx_gain();
        self.set_efx_low_pass_cut_off();
        self.set_efx_eq_center();
        self.set_efx_eq_bandwidth();
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
            DISTORTION_NONE => Ok(()),
            DISTORTION_ALLPARAMETERS => call.set_value(self.props),
            DISTORTION_EDGE => call.set_value(self.props.edge),
            DISTORTION_GAIN => call.set_value(self.props.gain),
            DISTORTION_LOWPASSCUTOFF => call.set_value(self.props.low_pass_cut_off),
            DISTORTION_EQCENTER => call.set_value(self.props.eq_center),
            DISTORTION_EQBANDWIDTH => call.set_value(self.props.eq_bandwidth),
            other => Err(EaxError::UnknownProperty {
                set: "distortion",
                id: other,
            }),
        }
    }

    fn set(&mut self, call: &EaxCall) -> Result {
        match call.property_id() {
            DISTORTION_NONE => {}
            DISTORTION_ALLPARAMETERS => self.defer_all(call.value()?)?,
            DISTORTION_EDGE => self.defer_edge(call.value()?)?,
            DISTORTION_GAIN => self.defer_gain(call.value()?)?,
            DISTORTION_LOWPASSCUTOFF => self.defer_low_pass_cut_off(call.value()?)?,
            DISTORTION_EQCENTER => self.defer_eq_center(call.value()?)?,
            DISTORTION_EQBANDWIDTH => self.defer_eq_bandwidth(call.value()?)?,
            other => {
                return Err(EaxError::UnknownProperty {
                    set: "distortion",
                    id: other,
                })
            }
        }
        self.apply_deferred();
        Ok(())
    }

    fn validate_edge(edge: f32) -> Result {
        validate::range(
            "Distortion Edge",
            edge,
            DistortionProps::MIN_EDGE,
            DistortionProps::MAX_EDGE,
        )
    }

    fn validate_gain(gain: i32) -> Result {
        validate::range(
            "Distortion Gain",
            gain,
            DistortionProps::MIN_GAIN,
            DistortionProps::MAX_GAIN,
        )
    }

    fn validate_low_pass_cut_off(cut_off: f32) -> Result {
        validate::range(
            "Distortion Low-Pass Cut-Off",
            cut_off,
            DistortionProps::MIN_LOW_PASS_CUT_OFF,
            DistortionProps::MAX_LOW_PASS_CUT_OFF,
        )
    }

    fn validate_eq_center(center: f32) -> Result {
        validate::range(
            "Distortion EQ Center",
            center,
            DistortionProps::MIN_EQ_CENTER,
            DistortionProps::MAX_EQ_CENTER,
        )
    }

    fn validate_eq_bandwidth(bandwidth: f32) -> Result {
        validate::range(
            "Distortion EQ Bandwidth",
            bandwidth,
            DistortionProps::MIN_EQ_BANDWIDTH,
            DistortionProps::MAX_EQ_BANDWIDTH,
        )
    }

    fn defer_all(&mut self, all: DistortionProps) -> Result {
        Self::validate_edge(all.edge)?;
        Self::validate_gain(all.gain)?;
        Self::validate_low_pass_cut_off(all.low_pass_cut_off)?;
        Self::validate_eq_center(all.eq_center)?;
        Self::validate_eq_bandwidth(all.eq_bandwidth)?;
        self.deferred = all;
        self.dirty = DistortionDirty::ALL;
        Ok(())
    }

    fn defer_edge(&mut self, edge: f32) -> Result {
        Self::validate_edge(edge)?;
        self.deferred.edge = edge;
        self.dirty
            .update(DistortionDirty::EDGE, self.props.edge != edge);
        Ok(())
    }

    fn defer_gain(&mut self, gain: i32) -> Result {
        Self::validate_gain(gain)?;
        self.deferred.gain = gain;
        self.dirty
            .update(DistortionDirty::GAIN, self.props.gain != gain);
        Ok(())
    }

    fn defer_low_pass_cut_off(&mut self, cut_off: f32) -> Result {
        Self::validate_low_pass_cut_off(cut_off)?;
        self.deferred.low_pass_cut_off = cut_off;
        self.dirty.update(
            DistortionDirty::LOW_PASS_CUT_OFF,
            self.props.low_pass_cut_off != cut_off,
        );
        Ok(())
    }

    fn defer_eq_center(&mut self, center: f32) -> Result {
        Self::validate_eq_center(center)?;
        self.deferred.eq_center = center;
        self.dirty
            .update(DistortionDirty::EQ_CENTER, self.props.eq_center != center);
        Ok(())
    }

    fn defer_eq_bandwidth(&mut self, bandwidth: f32) -> Result {
        Self::validate_eq_bandwidth(bandwidth)?;
        self.deferred.eq_bandwidth = bandwidth;
        self.dirty.update(
            DistortionDirty::EQ_BANDWIDTH,
            self.props.eq_bandwidth != bandwidth,
        );
        Ok(())
    }

    fn apply_deferred(&mut self) {
        if self.dirty.is_empty() {
            return;
        }
        self.props = self.deferred;
        if self.dirty.contains(DistortionDirty::EDGE) {
            self.set_efx_edge();
        }
        if self.dirty.contains(DistortionDirty::GAIN) {
            self.set_efx_gain();
        }
        if self.dirty.contains(DistortionDirty::LOW_PASS_CUT_OFF) {
            self.set_efx_low_pass_cut_off();
        }
        if self.dirty.contains(DistortionDirty::EQ_CENTER) {
            self.set_efx_eq_center();
        }
        if self.dirty.contains(DistortionDirty::EQ_BANDWIDTH) {
            self.set_efx_eq_bandwidth();
        }
        self.dirty.clear();
        self.core.attach();
    }

    fn set_efx_edge(&self) {
        self.core
            .set_f(AL_DISTORTION_EDGE, convert::distortion_edge(self.props.edge));
    }

    fn set_efx_gain(&self) {
        self.core
            .set_f(AL_DISTORTION_GAIN, convert::distortion_gain(self.props.gain));
    }

    fn set_efx_low_pass_cut_off(&self) {
        self.core.set_f(
            AL_DISTORTION_LOWPASS_CUTOFF,
            convert::distortion_low_pass_cutoff(self.props.low_pass_cut_off),
        );
    }

    fn set_efx_eq_center(&self) {
        self.core.set_f(
            AL_DISTORTION_EQCENTER,
            convert::distortion_eq_center(self.props.eq_center),
        );
    }

    fn set_efx_eq_bandwidth(&self) {
        self.core.set_f(
            AL_DISTORTION_EQBANDWIDTH,
            convert::distortion_eq_bandwidth(self.props.eq_bandwidth),
        );
    }
}
