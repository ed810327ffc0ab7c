//! Vocal morpher effect.

use std::sync::Arc;

use al_sys::*;

use crate::api::*;
use crate::call::EaxCall;
use crate::error::{EaxError, Result};
use crate::unit::effect as convert;
use crate::validate;

use super::{dirty_bits, EffectCore, EffectKind};

dirty_bits! {
    pub(crate) struct VocalMorpherDirty {
        phoneme_a, phoneme_a_coarse_tuning,
        phoneme_b, phoneme_b_coarse_tuning,
        waveform, rate,
    }
}

pub struct VocalMorpherEffect {
    core: EffectCore,
    props: VocalMorpherProps,
    deferred: VocalMorpherProps,
    dirty: VocalMorpherDirty,
}

impl VocalMorpherEffect {
    pub fn new(slot: ALuint, api: &Arc<AlApi>) -> Result<VocalMorpherEffect> {
        let core = EffectCore::new(EffectKind::VocalMorpher, slot, api)?;
        let props = VocalMorpherProps::default();
        let mut effect = VocalMorpherEffect {
            core,
            props,
            deferred: props,
            dirty: VocalMorpherDirty::NONE,
        };
        effect.load();
        Ok(effect)
    }

    pub fn load(&mut self) {
        self.set_efx_phoneme_a();
        self.set_efx_phoneme_a_coarse_tuning();
        self.set_efx_phoneme_b();
        self.set_efx_phoneme_b_coarse_tuning();
        self.set_efx_waveform();
        self.set_efx_rate();
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
            VOCAL_MORPHER_NONE => Ok(()),
            VOCAL_MORPHER_ALLPARAMETERS => call.set_value(self.props),
            VOCAL_MORPHER_PHONEMEA => call.set_value(self.props.phoneme_a),
            VOCAL_MORPHER_PHONEMEACOARSETUNING => {
                call.set_value(self.props.phoneme_a_coarse_tuning)
            }
            VOCAL_MORPHER_PHONEMEB => call.set_value(self.props.phoneme_b),
            VOCAL_MORPHER_PHONEMEBCOARSETUNING => {
                call.set_value(self.props.phoneme_b_coarse_tuning)
            }
            VOCAL_MORPHER_WAVEFORM => call.set_value(self.props.waveform),
            VOCAL_MORPHER_RATE => call.set_value(self.props.rate),
            other => Err(EaxError::UnknownProperty {
                set: "vocal morpher",
                id: other,
            }),
        }
    }

    fn set(&mut self, call: &EaxCall) -> Result {
        match call.property_id() {
            VOCAL_MORPHER_NONE => {}
            VOCAL_MORPHER_ALLPARAMETERS => self.defer_all(call.value()?)?,
            VOCAL_MORPHER_PHONEMEA => self.defer_phoneme_a(call.value()?)?,
            VOCAL_MORPHER_PHONEMEACOARSETUNING => {
                self.defer_phoneme_a_coarse_tuning(call.value()?)?
            }
            VOCAL_MORPHER_PHONEMEB => self.defer_phoneme_b(call.value()?)?,
            VOCAL_MORPHER_PHONEMEBCOARSETUNING => {
                self.defer_phoneme_b_coarse_tuning(call.value()?)?
            }
            VOCAL_MORPHER_WAVEFORM => self.defer_waveform(call.value()?)?,
            VOCAL_MORPHER_RATE => self.defer_rate(call.value()?)?,
            other => {
                return Err(EaxError::UnknownProperty {
                    set: "vocal morpher",
                    id: other,
                })
            }
        }
        self.apply_deferred();
        Ok(())
    }

    fn validate_phoneme(field: &'static str, phoneme: u32) -> Result {
        validate::range(
            field,
            phoneme,
            VocalMorpherProps::MIN_PHONEME,
            VocalMorpherProps::MAX_PHONEME,
        )
    }

    fn validate_coarse_tuning(field: &'static str, tuning: i32) -> Result {
        validate::range(
            field,
            tuning,
            VocalMorpherProps::MIN_COARSE_TUNING,
            VocalMorpherProps::MAX_COARSE_TUNING,
        )
    }

    fn validate_waveform(waveform: u32) -> Result {
        validate::range(
            "Vocal Morpher Waveform",
            waveform,
            VocalMorpherProps::MIN_WAVEFORM,
            VocalMorpherProps::MAX_WAVEFORM,
        )
    }

    fn validate_rate(rate: f32) -> Result {
        validate::range(
            "Vocal Morpher Rate",
            rate,
            VocalMorpherProps::MIN_RATE,
            VocalMorpherProps::MAX_RATE,
        )
    }

    fn defer_all(&mut self, all: VocalMorpherProps) -> Result {
        Self::validate_phoneme("Vocal Morpher Phoneme A", all.phoneme_a)?;
        Self::validate_coarse_tuning(
            "Vocal Morpher Phoneme A Coarse Tuning",
            all.phoneme_a_coarse_tuning,
        )?;
        Self::validate_phoneme("Vocal Morpher Phoneme B", all.phoneme_b)?;
        Self::validate_coarse_tuning(
            "Vocal Morpher Phoneme B Coarse Tuning",
            all.phoneme_b_coarse_tuning,
        )?;
        Self::validate_waveform(all.waveform)?;
        Self::validate_rate(all.rate)?;
        self.deferred = all;
        self.dirty = VocalMorpherDirty::ALL;
        Ok(())
    }

    fn defer_phoneme_a(&mut self, phoneme: u32) -> Result {
        Self::validate_phoneme("Vocal Morpher Phoneme A", phoneme)?;
        self.deferred.phoneme_a = phoneme;
        self.dirty.update(
            VocalMorpherDirty::PHONEME_A,
            self.props.phoneme_a != phoneme,
        );
        Ok(())
    }

    fn defer_phoneme_a_coarse_tuning(&mut self, tuning: i32) -> Result {
        Self::validate_coarse_tuning("Vocal Morpher Phoneme A Coarse Tuning", tuning)?;
        self.deferred.phoneme_a_coarse_tuning = tuning;
        self.dirty.update(
            VocalMorpherDirty::PHONEME_A_COARSE_TUNING,
            self.props.phoneme_a_coarse_tuning != tuning,
        );
        Ok(())
    }

    fn defer_phoneme_b(&mut self, phoneme: u32) -> Result {
        Self::validate_phoneme("Vocal Morpher Phoneme B", phoneme)?;
        self.deferred.phoneme_b = phoneme;
        self.dirty.update(
            VocalMorpherDirty::PHONEME_B,
            self.props.phoneme_b != phoneme,
        );
        Ok(())
    }

    fn defer_phoneme_b_coarse_tuning(&mut self, tuning: i32) -> Result {
        Self::validate_coarse_tuning("Vocal Morpher Phoneme B Coarse Tuning", tuning)?;
        self.deferred.phoneme_b_coarse_tuning = tuning;
        self.dirty.update(
            VocalMorpherDirty::PHONEME_B_COARSE_TUNING,
            self.props.phoneme_b_coarse_tuning != tuning,
        );
        Ok(())
    }

    fn defer_waveform(&mut self, waveform: u32) -> Result {
        Self::validate_waveform(waveform)?;
        self.deferred.waveform = waveform;
        self.dirty.update(
            VocalMorpherDirty::WAVEFORM,
            self.props.waveform != waveform,
        );
        Ok(())
    }

    fn defer_rate(&mut self, rate: f32) -> Result {
        Self::validate_rate(rate)?;
        self.deferred.rate = rate;
        self.dirty
            .update(VocalMorpherDirty::RATE, self.props.rate != rate);
        Ok(())
    }

    fn apply_deferred(&mut self) {
        if self.dirty.is_empty() {
            return;
        }
        self.props = self.deferred;
        if self.dirty.contains(VocalMorpherDirty::PHONEME_A) {
            self.set_efx_phoneme_a();
        }
        if self.dirty.contains(VocalMorpherDirty::PHONEME_A_COARSE_TUNING) {
            self.set_efx_phoneme_a_coarse_tuning();
        }
        if self.dirty.contains(VocalMorpherDirty::PHONEME_B) {
            self.set_efx_phoneme_b();
        }
        if self.dirty.contains(VocalMorpherDirty::PHONEME_B_COARSE_TUNING) {
            self.set_efx_phoneme_b_coarse_tuning();
        }
        if self.dirty.contains(VocalMorpherDirty::WAVEFORM) {
            self.set_efx_waveform();
        }
        if self.dirty.contains(VocalMorpherDirty::RATE) {
            self.set_efx_rate();
        }
        self.dirty.clear();
        self.core.attach();
    }

    fn set_efx_phoneme_a(&self) {
        self.core
            .set_i(AL_VOCAL_MORPHER_PHONEMEA, self.props.phoneme_a as ALint);
    }

    fn set_efx_phoneme_a_coarse_tuning(&self) {
        self.core.set_i(
            AL_VOCAL_MORPHER_PHONEMEA_COARSE_TUNING,
            self.props.phoneme_a_coarse_tuning,
        );
    }

    fn set_efx_phoneme_b(&self) {
        self.core
            .set_i(AL_VOCAL_MORPHER_PHONEMEB, self.props.phoneme_b as ALint);
    }

    fn set_efx_phoneme_b_coarse_tuning(&self) {
        self.core.set_i(
            AL_VOCAL_MORPHER_PHONEMEB_COARSE_TUNING,
            self.props.phoneme_b_coarse_tuning,
        );
    }

    fn set_efx_waveform(&self) {
        self.core
            .set_i(AL_VOCAL_MORPHER_WAVEFORM, self.props.waveform as ALint);
    }

    fn set_efx_rate(&self) {
        self.core.set_f(
            AL_VOCAL_MORPHER_RATE,
            convert::vocal_morpher_rate(self.props.rate),
        );
    }
}
