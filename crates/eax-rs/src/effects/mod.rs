//! The thirteen effects a slot can load.
//!
//! Every effect follows the same shape: a shadow copy of its property
//! struct (authoritative for gets), a deferred copy writes validate into,
//! and a dirty bitset naming the fields that still have to be pushed to the
//! driver. `apply_deferred` commits the deferred copy, walks the dirty bits
//! in declaration order, converts each value to its EFX unit, and rebinds
//! the effect to the owning slot. A write that fails validation therefore
//! never disturbs the shadow or the driver.

mod auto_wah;
mod chorus;
mod compressor;
mod distortion;
mod echo;
mod equalizer;
mod flanger;
mod frequency_shifter;
mod null;
mod pitch_shifter;
mod reverb;
mod ring_modulator;
mod vocal_morpher;

pub use self::{
    auto_wah::AutoWahEffect, chorus::ChorusEffect, compressor::CompressorEffect,
    distortion::DistortionEffect, echo::EchoEffect, equalizer::EqualizerEffect,
    flanger::FlangerEffect, frequency_shifter::FrequencyShifterEffect, null::NullEffect,
    pitch_shifter::PitchShifterEffect, reverb::ReverbEffect, ring_modulator::RingModulatorEffect,
    vocal_morpher::VocalMorpherEffect,
};

use std::sync::Arc;

use al_sys::*;

use crate::al_object::EfxEffect;
use crate::call::EaxCall;
use crate::error::Result;
use crate::guid::{self, Guid};

/// Per-field dirty bits, one bitset type per effect.
///
/// Field names are given in declaration order; the macro derives the
/// uppercase bit constants and the all-ones value from them.
macro_rules! dirty_bits {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident { $($field:ident),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
        $vis struct $Name(u32);

        #[allow(dead_code)]
        impl $Name {
            dirty_bits!(@bits 0u32; $($field),*);

            pub const NONE: Self = Self(0);
            pub const ALL: Self = paste::paste! { Self($(Self::[<$field:upper>].0)|*) };

            pub fn is_empty(self) -> bool {
                self.0 == 0
            }

            pub fn contains(self, bits: Self) -> bool {
                self.0 & bits.0 == bits.0
            }

            /// Set or clear `bits` according to `dirty`.
            pub fn update(&mut self, bits: Self, dirty: bool) {
                if dirty {
                    self.0 |= bits.0;
                } else {
                    self.0 &= !bits.0;
                }
            }

            pub fn clear(&mut self) {
                self.0 = 0;
            }
        }
    };
    (@bits $shift:expr; $first:ident $(, $rest:ident)*) => {
        paste::paste! {
            pub const [<$first:upper>]: Self = Self(1 << ($shift));
        }
        dirty_bits!(@bits $shift + 1; $($rest),*);
    };
    (@bits $shift:expr;) => {};
}
pub(crate) use dirty_bits;

/// The effect selected by a `LOADEFFECT` GUID.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    Null,
    AutoWah,
    Chorus,
    Compressor,
    Distortion,
    Echo,
    Equalizer,
    Flanger,
    FrequencyShifter,
    PitchShifter,
    Reverb,
    RingModulator,
    VocalMorpher,
}

impl EffectKind {
    /// Recognize a `LOADEFFECT` GUID.
    pub fn from_guid(id: &Guid) -> Option<EffectKind> {
        Some(match *id {
            guid::EAX_NULL_EFFECT => EffectKind::Null,
            guid::EAX_AUTOWAH_EFFECT => EffectKind::AutoWah,
            guid::EAX_CHORUS_EFFECT => EffectKind::Chorus,
            guid::EAX_AGC_COMPRESSOR_EFFECT => EffectKind::Compressor,
            guid::EAX_DISTORTION_EFFECT => EffectKind::Distortion,
            guid::EAX_ECHO_EFFECT => EffectKind::Echo,
            guid::EAX_EQUALIZER_EFFECT => EffectKind::Equalizer,
            guid::EAX_FLANGER_EFFECT => EffectKind::Flanger,
            guid::EAX_FREQUENCY_SHIFTER_EFFECT => EffectKind::FrequencyShifter,
            guid::EAX_PITCH_SHIFTER_EFFECT => EffectKind::PitchShifter,
            guid::EAX_REVERB_EFFECT => EffectKind::Reverb,
            guid::EAX_RING_MODULATOR_EFFECT => EffectKind::RingModulator,
            guid::EAX_VOCAL_MORPHER_EFFECT => EffectKind::VocalMorpher,
            _ => return None,
        })
    }

    pub fn guid(self) -> Guid {
        match self {
            EffectKind::Null => guid::EAX_NULL_EFFECT,
            EffectKind::AutoWah => guid::EAX_AUTOWAH_EFFECT,
            EffectKind::Chorus => guid::EAX_CHORUS_EFFECT,
            EffectKind::Compressor => guid::EAX_AGC_COMPRESSOR_EFFECT,
            EffectKind::Distortion => guid::EAX_DISTORTION_EFFECT,
            EffectKind::Echo => guid::EAX_ECHO_EFFECT,
            EffectKind::Equalizer => guid::EAX_EQUALIZER_EFFECT,
            EffectKind::Flanger => guid::EAX_FLANGER_EFFECT,
            EffectKind::FrequencyShifter => guid::EAX_FREQUENCY_SHIFTER_EFFECT,
            EffectKind::PitchShifter => guid::EAX_PITCH_SHIFTER_EFFECT,
            EffectKind::Reverb => guid::EAX_REVERB_EFFECT,
            EffectKind::RingModulator => guid::EAX_RING_MODULATOR_EFFECT,
            EffectKind::VocalMorpher => guid::EAX_VOCAL_MORPHER_EFFECT,
        }
    }

    /// The EFX effect type the driver-side object is set to.
    pub fn al_effect_type(self) -> ALint {
        match self {
            EffectKind::Null => AL_EFFECT_NULL,
            EffectKind::AutoWah => AL_EFFECT_AUTOWAH,
            EffectKind::Chorus => AL_EFFECT_CHORUS,
            EffectKind::Compressor => AL_EFFECT_COMPRESSOR,
            EffectKind::Distortion => AL_EFFECT_DISTORTION,
            EffectKind::Echo => AL_EFFECT_ECHO,
            EffectKind::Equalizer => AL_EFFECT_EQUALIZER,
            EffectKind::Flanger => AL_EFFECT_FLANGER,
            EffectKind::FrequencyShifter => AL_EFFECT_FREQUENCY_SHIFTER,
            EffectKind::PitchShifter => AL_EFFECT_PITCH_SHIFTER,
            EffectKind::Reverb => AL_EFFECT_EAXREVERB,
            EffectKind::RingModulator => AL_EFFECT_RING_MODULATOR,
            EffectKind::VocalMorpher => AL_EFFECT_VOCAL_MORPHER,
        }
    }
}

/// The driver-side half every non-null effect shares: the owned EFX effect
/// object, the auxiliary slot it feeds, and the resolved symbol table.
pub(crate) struct EffectCore {
    object: EfxEffect,
    slot: ALuint,
    api: Arc<AlApi>,
}

impl EffectCore {
    pub fn new(kind: EffectKind, slot: ALuint, api: &Arc<AlApi>) -> Result<EffectCore> {
        let object = EfxEffect::new(api)?;
        let core = EffectCore {
            object,
            slot,
            api: Arc::clone(api),
        };
        core.set_i(AL_EFFECT_TYPE, kind.al_effect_type());
        Ok(core)
    }

    pub fn set_i(&self, param: ALenum, value: ALint) {
        // SAFETY: resolved table, engine mutex held by the caller.
        unsafe { (self.api.efx.alEffecti)(self.object.name(), param, value) }
    }

    pub fn set_f(&self, param: ALenum, value: f32) {
        unsafe { (self.api.efx.alEffectf)(self.object.name(), param, value) }
    }

    pub fn set_fv(&self, param: ALenum, values: &[f32; 3]) {
        unsafe { (self.api.efx.alEffectfv)(self.object.name(), param, values.as_ptr()) }
    }

    /// Rebind the effect object to the owning slot so parameter changes
    /// reach the running graph.
    pub fn attach(&self) {
        unsafe {
            (self.api.efx.alAuxiliaryEffectSloti)(
                self.slot,
                AL_EFFECTSLOT_EFFECT,
                self.object.name() as ALint,
            )
        }
    }
}

/// A slot's loaded effect.
pub enum Effect {
    Null(NullEffect),
    AutoWah(AutoWahEffect),
    Chorus(ChorusEffect),
    Compressor(CompressorEffect),
    Distortion(DistortionEffect),
    Echo(EchoEffect),
    Equalizer(EqualizerEffect),
    Flanger(FlangerEffect),
    FrequencyShifter(FrequencyShifterEffect),
    PitchShifter(PitchShifterEffect),
    Reverb(ReverbEffect),
    RingModulator(RingModulatorEffect),
    VocalMorpher(VocalMorpherEffect),
}

impl Effect {
    /// Build the effect for `kind` with its documented defaults pushed to
    /// the driver and the EFX object bound to `slot`.
    pub fn new(kind: EffectKind, slot: ALuint, api: &Arc<AlApi>) -> Result<Effect> {
        Ok(match kind {
            EffectKind::Null => Effect::Null(NullEffect::new(slot, api)),
            EffectKind::AutoWah => Effect::AutoWah(AutoWahEffect::new(slot, api)?),
            EffectKind::Chorus => Effect::Chorus(ChorusEffect::new(slot, api)?),
            EffectKind::Compressor => Effect::Compressor(CompressorEffect::new(slot, api)?),
            EffectKind::Distortion => Effect::Distortion(DistortionEffect::new(slot, api)?),
            EffectKind::Echo => Effect::Echo(EchoEffect::new(slot, api)?),
            EffectKind::Equalizer => Effect::Equalizer(EqualizerEffect::new(slot, api)?),
            EffectKind::Flanger => Effect::Flanger(FlangerEffect::new(slot, api)?),
            EffectKind::FrequencyShifter => {
                Effect::FrequencyShifter(FrequencyShifterEffect::new(slot, api)?)
            }
            EffectKind::PitchShifter => Effect::PitchShifter(PitchShifterEffect::new(slot, api)?),
            EffectKind::Reverb => Effect::Reverb(ReverbEffect::new(slot, api)?),
            EffectKind::RingModulator => {
                Effect::RingModulator(RingModulatorEffect::new(slot, api)?)
            }
            EffectKind::VocalMorpher => Effect::VocalMorpher(VocalMorpherEffect::new(slot, api)?),
        })
    }

    pub fn kind(&self) -> EffectKind {
        match self {
            Effect::Null(_) => EffectKind::Null,
            Effect::AutoWah(_) => EffectKind::AutoWah,
            Effect::Chorus(_) => EffectKind::Chorus,
            Effect::Compressor(_) => EffectKind::Compressor,
            Effect::Distortion(_) => EffectKind::Distortion,
            Effect::Echo(_) => EffectKind::Echo,
            Effect::Equalizer(_) => EffectKind::Equalizer,
            Effect::Flanger(_) => EffectKind::Flanger,
            Effect::FrequencyShifter(_) => EffectKind::FrequencyShifter,
            Effect::PitchShifter(_) => EffectKind::PitchShifter,
            Effect::Reverb(_) => EffectKind::Reverb,
            Effect::RingModulator(_) => EffectKind::RingModulator,
            Effect::VocalMorpher(_) => EffectKind::VocalMorpher,
        }
    }

    /// Route an effect-scoped property call to the loaded effect.
    pub fn dispatch(&mut self, call: &EaxCall) -> Result {
        match self {
            Effect::Null(effect) => effect.dispatch(call),
            Effect::AutoWah(effect) => effect.dispatch(call),
            Effect::Chorus(effect) => effect.dispatch(call),
            Effect::Compressor(effect) => effect.dispatch(call),
            Effect::Distortion(effect) => effect.dispatch(call),
            Effect::Echo(effect) => effect.dispatch(call),
            Effect::Equalizer(effect) => effect.dispatch(call),
            Effect::Flanger(effect) => effect.dispatch(call),
            Effect::FrequencyShifter(effect) => effect.dispatch(call),
            Effect::PitchShifter(effect) => effect.dispatch(call),
            Effect::Reverb(effect) => effect.dispatch(call),
            Effect::RingModulator(effect) => effect.dispatch(call),
            Effect::VocalMorpher(effect) => effect.dispatch(call),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    dirty_bits! {
        struct ProbeDirty { alpha, beta, gamma }
    }

    #[test]
    fn bits_follow_declaration_order() {
        assert_eq!(ProbeDirty::ALPHA, ProbeDirty(1));
        assert_eq!(ProbeDirty::BETA, ProbeDirty(2));
        assert_eq!(ProbeDirty::GAMMA, ProbeDirty(4));
        assert_eq!(ProbeDirty::ALL, ProbeDirty(7));
    }

    #[test]
    fn update_sets_and_clears() {
        let mut dirty = ProbeDirty::NONE;
        dirty.update(ProbeDirty::BETA, true);
        assert!(dirty.contains(ProbeDirty::BETA));
        dirty.update(ProbeDirty::BETA, false);
        assert!(dirty.is_empty());
    }

    #[test]
    fn guid_round_trip() {
        for kind in [
            EffectKind::Null,
            EffectKind::AutoWah,
            EffectKind::Chorus,
            EffectKind::Compressor,
            EffectKind::Distortion,
            EffectKind::Echo,
            EffectKind::Equalizer,
            EffectKind::Flanger,
            EffectKind::FrequencyShifter,
            EffectKind::PitchShifter,
            EffectKind::Reverb,
            EffectKind::RingModulator,
            EffectKind::VocalMorpher,
        ] {
            assert_eq!(EffectKind::from_guid(&kind.guid()), Some(kind));
        }
    }
}
