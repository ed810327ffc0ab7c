//! Move-only owners for driver-side EFX objects.
//!
//! Each holder captures the resolved symbol table and deletes its object
//! through it on drop, so an effect, filter, or auxiliary slot can never
//! outlive the engine state that knows how to free it. Copies are not
//! available; ownership moves with the holder.

use std::sync::Arc;

use al_sys::*;

use crate::error::{EaxError, Result};

macro_rules! efx_object {
    ($(
        $(#[$meta:meta])*
        pub struct $Name:ident($label:literal) {
            gen: $gen:ident,
            delete: $delete:ident,
            is: $is:ident,
        }
    )*) => {$(
        $(#[$meta])*
        pub struct $Name {
            name: ALuint,
            api: Arc<AlApi>,
        }

        impl $Name {
            pub fn new(api: &Arc<AlApi>) -> Result<$Name> {
                let mut name: ALuint = 0;
                // SAFETY: the table was resolved against a live driver and
                // the engine mutex serializes every driver call.
                let ok = unsafe {
                    (api.efx.$gen)(1, &mut name);
                    name != 0 && (api.efx.$is)(name) != 0
                };
                if !ok {
                    return Err(EaxError::EfxUnavailable(concat!(
                        "failed to create ",
                        $label,
                        " object"
                    )
                    .into()));
                }
                log::trace!(concat!("Created ", $label, " object {}."), name);
                Ok($Name {
                    name,
                    api: Arc::clone(api),
                })
            }

            /// The driver-side object name.
            pub fn name(&self) -> ALuint {
                self.name
            }
        }

        impl Drop for $Name {
            fn drop(&mut self) {
                // SAFETY: exclusive owner; the driver outlives the engine.
                unsafe { (self.api.efx.$delete)(1, &self.name) };
                log::trace!(concat!("Released ", $label, " object {}."), self.name);
            }
        }

        impl std::fmt::Debug for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($Name)).field(&self.name).finish()
            }
        }
    )*};
}

efx_object! {
    /// An EFX effect object.
    pub struct EfxEffect("effect") {
        gen: alGenEffects,
        delete: alDeleteEffects,
        is: alIsEffect,
    }

    /// An EFX low-pass filter object.
    pub struct EfxFilter("filter") {
        gen: alGenFilters,
        delete: alDeleteFilters,
        is: alIsFilter,
    }

    /// An EFX auxiliary effect slot object.
    pub struct EfxEffectSlot("auxiliary effect slot") {
        gen: alGenAuxiliaryEffectSlots,
        delete: alDeleteAuxiliaryEffectSlots,
        is: alIsAuxiliaryEffectSlot,
    }
}
