//! The "no effect loaded" placeholder.
//!
//! Owns no driver-side effect object; loading it rebinds the slot to the
//! null effect, and any effect-scoped property traffic answers
//! `no_effect_loaded`.

use std::sync::Arc;

use al_sys::*;

use crate::call::EaxCall;
use crate::error::{EaxError, Result};

pub struct NullEffect {
    slot: ALuint,
    api: Arc<AlApi>,
}

impl NullEffect {
    pub fn new(slot: ALuint, api: &Arc<AlApi>) -> NullEffect {
        let mut effect = NullEffect {
            slot,
            api: Arc::clone(api),
        };
        effect.load();
        effect
    }

    pub fn load(&mut self) {
        // SAFETY: resolved table, engine mutex held by the caller.
        unsafe {
            (self.api.efx.alAuxiliaryEffectSloti)(self.slot, AL_EFFECTSLOT_EFFECT, AL_EFFECT_NULL)
        };
    }

    pub fn dispatch(&mut self, call: &EaxCall) -> Result {
        let _ = call;
        Err(EaxError::NoEffectLoaded)
    }
}
