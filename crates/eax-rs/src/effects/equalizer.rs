//! Four-band equalizer effect.

use std::sync::Arc;

use al_sys::*;

use crate::api::*;
use crate::call::EaxCall;
use crate::error::{EaxError, Result};
use crate::unit::effect as convert;
use crate::validate;

use super::{dirty_bits, EffectCore, EffectKind};

dirty_bits! {
    pub(crate) struct EqualizerDirty {
        low_gain, low_cut_off,
        mid1_gain, mid1_center, mid1_width,
        mid2_gain, mid2_center, mid2_width,
        high_gain, high_cut_off,
    }
}

pub struct EqualizerEffect {
    core: EffectCore,
    props: EqualizerProps,
    deferred: EqualizerProps,
    dirty: EqualizerDirty,
}

impl EqualizerEffect {
    pub fn new(slot: ALuint, api: &Arc<AlApi>) -> Result<EqualizerEffect> {
        let core = EffectCore::new(EffectKind::Equalizer, slot, api)?;
        let props = EqualizerProps::default();
        let mut effect = EqualizerEffect {
            core,
            props,
            deferred: props,
            dirty: EqualizerDirty::NONE,
        };
        effect.load();
        Ok(effect)
    }

    pub fn load(&mut self) {
        self.set_efx_low_gain();
        self.set_efx_low_cut_off();
        self.set_efx_mid1_gain();
        self.set_efx_mid1_center();
        self.set_efx_mid1_width();
        self.set_efx_mid2_gain();
        self.set_efx_mid2_center();
        self.set_efx_mid2_width();
        self.set_efx_high_gain();
        self.set_efx_high_cut_off();
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
            EQUALIZER_NONE => Ok(()),
            EQUALIZER_ALLPARAMETERS => call.set_value(self.props),
            EQUALIZER_LOWGAIN => call.set_value(self.props.low_gain),
            EQUALIZER_LOWCUTOFF => call.set_value(self.props.low_cut_off),
            EQUALIZER_MID1GAIN => call.set_value(self.props.mid1_gain),
            EQUALIZER_MID1CENTER => call.set_value(self.props.mid1_center),
            EQUALIZER_MID1WIDTH => call.set_value(self.props.mid1_width),
            EQUALIZER_MID2GAIN => call.set_value(self.props.mid2_gain),
            EQUALIZER_MID2CENTER => call.set_value(self.props.mid2_center),
            EQUALIZER_MID2WIDTH => call.set_value(self.props.mid2_width),
            EQUALIZER_HIGHGAIN => call.set_value(self.props.high_gain),
            EQUALIZER_HIGHCUTOFF => call.set_value(self.props.high_cut_off),
            other => Err(EaxError::UnknownProperty {
                set: "equalizer",
                id: other,
            }),
        }
    }

    fn set(&mut self, call: &EaxCall) -> Result {
        match call.property_id() {
            EQUALIZER_NONE => {}
            EQUALIZER_ALLPARAMETERS => self.defer_all(call.value()?)?,
            EQUALIZER_LOWGAIN => self.defer_low_gain(call.value()?)?,
            EQUALIZER_LOWCUTOFF => self.defer_low_cut_off(call.value()?)?,
            EQUALIZER_MID1GAIN => self.defer_mid1_gain(call.value()?)?,
            EQUALIZER_MID1CENTER => self.defer_mid1_center(call.value()?)?,
            EQUALIZER_MID1WIDTH => self.defer_mid1_width(call.value()?)?,
            EQUALIZER_MID2GAIN => self.defer_mid2_gain(call.value()?)?,
            EQUALIZER_MID2CENTER => self.defer_mid2_center(call.value()?)?,
            EQUALIZER_MID2WIDTH => self.defer_mid2_width(call.value()?)?,
            EQUALIZER_HIGHGAIN => self.defer_high_gain(call.value()?)?,
            EQUALIZER_HIGHCUTOFF => self.defer_high_cut_off(call.value()?)?,
            other => {
                return Err(EaxError::UnknownProperty {
                    set: "equalizer",
                    id: other,
                })
            }
        }
        self.apply_deferred();
        Ok(())
    }

    fn validate_gain(field: &'static str, gain: i32) -> Result {
        validate::range(
            field,
            gain,
            EqualizerProps::MIN_GAIN,
            EqualizerProps::MAX_GAIN,
        )
    }

    fn defer_all(&mut self, all: EqualizerProps) -> Result {
        Self::validate_gain("Equalizer Low Gain", all.low_gain)?;
        validate::range(
            "Equalizer Low Cut-Off",
            all.low_cut_off,
            EqualizerProps::MIN_LOW_CUT_OFF,
            EqualizerProps::MAX_LOW_CUT_OFF,
        )?;
        Self::validate_gain("Equalizer Mid1 Gain", all.mid1_gain)?;
        validate::range(
            "Equalizer Mid1 Center",
            all.mid1_center,
            EqualizerProps::MIN_MID1_CENTER,
            EqualizerProps::MAX_MID1_CENTER,
        )?;
        validate::range(
            "Equalizer Mid1 Width",
            all.mid1_width,
            EqualizerProps::MIN_MID1_WIDTH,
            EqualizerProps::MAX_MID1_WIDTH,
        )?;
        Self::validate_gain("Equalizer Mid2 Gain", all.mid2_gain)?;
        validate::range(
            "Equalizer Mid2 Center",
            all.mid2_center,
            EqualizerProps::MIN_MID2_CENTER,
            EqualizerProps::MAX_MID2_CENTER,
        )?;
        validate::range(
            "Equalizer Mid2 Width",
            all.mid2_width,
            EqualizerProps::MIN_MID2_WIDTH,
            EqualizerProps::MAX_MID2_WIDTH,
        )?;
        Self::validate_gain("Equalizer High Gain", all.high_gain)?;
        validate::range(
            "Equalizer High Cut-Off",
            all.high_cut_off,
            EqualizerProps::MIN_HIGH_CUT_OFF,
            EqualizerProps::MAX_HIGH_CUT_OFF,
        )?;
        self.deferred = all;
        self.dirty = EqualizerDirty::ALL;
        Ok(())
    }

    fn defer_low_gain(&mut self, gain: i32) -> Result {
        Self::validate_gain("Equalizer Low Gain", gain)?;
        self.deferred.low_gain = gain;
        self.dirty
            .update(EqualizerDirty::LOW_GAIN, self.props.low_gain != gain);
        Ok(())
    }

    fn defer_low_cut_off(&mut self, cut_off: f32) -> Result {
        validate::range(
            "Equalizer Low Cut-Off",
            cut_off,
            EqualizerProps::MIN_LOW_CUT_OFF,
            EqualizerProps::MAX_LOW_CUT_OFF,
        )?;
        self.deferred.low_cut_off = cut_off;
        self.dirty
            .update(EqualizerDirty::LOW_CUT_OFF, self.props.low_cut_off != cut_off);
        Ok(())
    }

    fn defer_mid1_gain(&mut self, gain: i32) -> Result {
        Self::validate_gain("Equalizer Mid1 Gain", gain)?;
        self.deferred.mid1_gain = gain;
        self.dirty
            .update(EqualizerDirty::MID1_GAIN, self.props.mid1_gain != gain);
        Ok(())
    }

    fn defer_mid1_center(&mut self, center: f32) -> Result {
        validate::range(
            "Equalizer Mid1 Center",
            center,
            EqualizerProps::MIN_MID1_CENTER,
            EqualizerProps::MAX_MID1_CENTER,
        )?;
        self.deferred.mid1_center = center;
        self.dirty
            .update(EqualizerDirty::MID1_CENTER, self.props.mid1_center != center);
        Ok(())
    }

    fn defer_mid1_width(&mut self, width: f32) -> Result {
        validate::range(
            "Equalizer Mid1 Width",
            width,
            EqualizerProps::MIN_MID1_WIDTH,
            EqualizerProps::MAX_MID1_WIDTH,
        )?;
        self.deferred.mid1_width = width;
        self.dirty
            .update(EqualizerDirty::MID1_WIDTH, self.props.mid1_width != width);
        Ok(())
    }

    fn defer_mid2_gain(&mut self, gain: i32) -> Result {
        Self::validate_gain("Equalizer Mid2 Gain", gain)?;
        self.deferred.mid2_gain = gain;
        self.dirty
            .update(EqualizerDirty::MID2_GAIN, self.props.mid2_gain != gain);
        Ok(())
    }

    fn defer_mid2_center(&mut self, center: f32) -> Result {
        validate::range(
            "Equalizer Mid2 Center",
            center,
            EqualizerProps::MIN_MID2_CENTER,
            EqualizerProps::MAX_MID2_CENTER,
        )?;
        self.deferred.mid2_center = center;
        self.dirty
            .update(EqualizerDirty::MID2_CENTER, self.props.mid2_center != center);
        Ok(())
    }

    fn defer_mid2_width(&mut self, width: f32) -> Result {
        validate::range(
            "Equalizer Mid2 Width",
            width,
            EqualizerProps::MIN_MID2_WIDTH,
            EqualizerProps::MAX_MID2_WIDTH,
        )?;
        self.deferred.mid2_width = width;
        self.dirty
            .update(EqualizerDirty::MID2_WIDTH, self.props.mid2_width != width);
        Ok(())
    }

    fn defer_high_gain(&mut self, gain: i32) -> Result {
        Self::validate_gain("Equalizer High Gain", gain)?;
        self.deferred.high_gain = gain;
        self.dirty
            .update(EqualizerDirty::HIGH_GAIN, self.props.high_gain != gain);
        Ok(())
    }

    fn defer_high_cut_off(&mut self, cut_off: f32) -> Result {
        validate::range(
            "Equalizer High Cut-Off",
            cut_off,
            EqualizerProps::MIN_HIGH_CUT_OFF,
            EqualizerProps::MAX_HIGH_CUT_OFF,
        )?;
        self.deferred.high_cut_off = cut_off;
        self.dirty.update(
            EqualizerDirty::HIGH_CUT_OFF,
            self.props.high_cut_off != cut_off,
        );
        Ok(())
    }

    fn apply_deferred(&mut self) {
        if self.dirty.is_empty() {
            return;
        }
        self.props = self.deferred;
        if self.dirty.contains(EqualizerDirty::LOW_GAIN) {
            self.set_efx_low_gain();
        }
        if self.dirty.contains(EqualizerDirty::LOW_CUT_OFF) {
            self.set_efx_low_cut_off();
        }
        if self.dirty.contains(EqualizerDirty::MID1_GAIN) {
            self.set_efx_mid1_gain();
        }
        if self.dirty.contains(EqualizerDirty::MID1_CENTER) {
            self.set_efx_mid1_center();
        }
        if self.dirty.contains(EqualizerDirty::MID1_WIDTH) {
            self.set_efx_mid1_width();
        }
        if self.dirty.contains(EqualizerDirty::MID2_GAIN) {
            self.set_efx_mid2_gain();
        }
        if self.dirty.contains(EqualizerDirty::MID2_CENTER) {
            self.set_efx_mid2_center();
        }
        if self.dirty.contains(EqualizerDirty::MID2_WIDTH) {
            self.set_efx_mid2_width();
        }
        if self.dirty.contains(EqualizerDirty::HIGH_GAIN) {
            self.set_efx_high_gain();
        }
        if self.dirty.contains(EqualizerDirty::HIGH_CUT_OFF) {
            self.set_efx_high_cut_off();
        }
        self.dirty.clear();
        self.core.attach();
    }

    fn set_efx_low_gain(&self) {
        self.core.set_f(
            AL_EQUALIZER_LOW_GAIN,
            convert::equalizer_gain(self.props.low_gain),
        );
    }

    fn set_efx_low_cut_off(&self) {
        self.core.set_f(
            AL_EQUALIZER_LOW_CUTOFF,
            convert::equalizer_low_cutoff(self.props.low_cut_off),
        );
    }

    fn set_efx_mid1_gain(&self) {
        self.core.set_f(
            AL_EQUALIZER_MID1_GAIN,
            convert::equalizer_gain(self.props.mid1_gain),
        );
    }

    fn set_efx_mid1_center(&self) {
        self.core.set_f(
            AL_EQUALIZER_MID1_CENTER,
            convert::equalizer_mid1_center(self.props.mid1_center),
        );
    }

    fn set_efx_mid1_width(&self) {
        self.core.set_f(
            AL_EQUALIZER_MID1_WIDTH,
            convert::equalizer_mid1_width(self.props.mid1_width),
        );
    }

    fn set_efx_mid2_gain(&self) {
        self.core.set_f(
            AL_EQUALIZER_MID2_GAIN,
            convert::equalizer_gain(self.props.mid2_gain),
        );
    }

    fn set_efx_mid2_center(&self) {
        self.core.set_f(
            AL_EQUALIZER_MID2_CENTER,
            convert::equalizer_mid2_center(self.props.mid2_center),
        );
    }

    fn set_efx_mid2_width(&self) {
        self.core.set_f(
            AL_EQUALIZER_MID2_WIDTH,
            convert::equalizer_mid2_width(self.props.mid2_width),
        );
    }

    fn set_efx_high_gain(&self) {
        self.core.set_f(
            AL_EQUALIZER_HIGH_GAIN,
            convert::equalizer_gain(self.props.high_gain),
        );
    }

    fn set_efx_high_cut_off(&self) {
        self.core.set_f(
            AL_EQUALIZER_HIGH_CUTOFF,
            convert::equalizer_high_cutoff(self.props.high_cut_off),
        );
    }
}
