//! Runtime-resolved driver entry-point tables.
//!
//! The shim never links against an OpenAL driver. Instead the host resolves
//! `alGetProcAddress` out of the driver's shared library and hands it to
//! [`AlApi::load`], which pulls every other entry point through it. A symbol
//! the driver does not export fails the load with the symbol's name.

use std::ffi::{c_void, CStr};

use crate::*;

/// `alGetProcAddress` as exported by the driver.
pub type LPALGETPROCADDRESS = unsafe extern "C" fn(fname: *const ALchar) -> *mut c_void;

pub type LPALCCREATECONTEXT =
    unsafe extern "C" fn(device: *mut ALCdevice, attrlist: *const ALCint) -> *mut ALCcontext;
pub type LPALCMAKECONTEXTCURRENT = unsafe extern "C" fn(context: *mut ALCcontext) -> ALCboolean;
pub type LPALCDESTROYCONTEXT = unsafe extern "C" fn(context: *mut ALCcontext);
pub type LPALCOPENDEVICE = unsafe extern "C" fn(devicename: *const ALCchar) -> *mut ALCdevice;
pub type LPALCCLOSEDEVICE = unsafe extern "C" fn(device: *mut ALCdevice) -> ALCboolean;
pub type LPALCISEXTENSIONPRESENT =
    unsafe extern "C" fn(device: *mut ALCdevice, extname: *const ALCchar) -> ALCboolean;
pub type LPALCGETSTRING =
    unsafe extern "C" fn(device: *mut ALCdevice, param: ALCenum) -> *const ALCchar;
pub type LPALCGETINTEGERV =
    unsafe extern "C" fn(device: *mut ALCdevice, param: ALCenum, size: ALCsizei, values: *mut ALCint);

pub type LPALGETSTRING = unsafe extern "C" fn(param: ALenum) -> *const ALchar;
pub type LPALISEXTENSIONPRESENT = unsafe extern "C" fn(extname: *const ALchar) -> ALboolean;
pub type LPALGETERROR = unsafe extern "C" fn() -> ALenum;
pub type LPALISSOURCE = unsafe extern "C" fn(source: ALuint) -> ALboolean;
pub type LPALSOURCEI = unsafe extern "C" fn(source: ALuint, param: ALenum, value: ALint);
pub type LPALSOURCE3I =
    unsafe extern "C" fn(source: ALuint, param: ALenum, v1: ALint, v2: ALint, v3: ALint);
pub type LPALGETSOURCEI =
    unsafe extern "C" fn(source: ALuint, param: ALenum, value: *mut ALint);

pub type LPALGENEFFECTS = unsafe extern "C" fn(n: ALsizei, effects: *mut ALuint);
pub type LPALDELETEEFFECTS = unsafe extern "C" fn(n: ALsizei, effects: *const ALuint);
pub type LPALISEFFECT = unsafe extern "C" fn(effect: ALuint) -> ALboolean;
pub type LPALEFFECTI = unsafe extern "C" fn(effect: ALuint, param: ALenum, value: ALint);
pub type LPALEFFECTF = unsafe extern "C" fn(effect: ALuint, param: ALenum, value: ALfloat);
pub type LPALEFFECTFV = unsafe extern "C" fn(effect: ALuint, param: ALenum, values: *const ALfloat);
pub type LPALGETEFFECTI = unsafe extern "C" fn(effect: ALuint, param: ALenum, value: *mut ALint);
pub type LPALGENFILTERS = unsafe extern "C" fn(n: ALsizei, filters: *mut ALuint);
pub type LPALDELETEFILTERS = unsafe extern "C" fn(n: ALsizei, filters: *const ALuint);
pub type LPALISFILTER = unsafe extern "C" fn(filter: ALuint) -> ALboolean;
pub type LPALFILTERI = unsafe extern "C" fn(filter: ALuint, param: ALenum, value: ALint);
pub type LPALFILTERF = unsafe extern "C" fn(filter: ALuint, param: ALenum, value: ALfloat);
pub type LPALGETFILTERI = unsafe extern "C" fn(filter: ALuint, param: ALenum, value: *mut ALint);
pub type LPALGENAUXILIARYEFFECTSLOTS = unsafe extern "C" fn(n: ALsizei, slots: *mut ALuint);
pub type LPALDELETEAUXILIARYEFFECTSLOTS = unsafe extern "C" fn(n: ALsizei, slots: *const ALuint);
pub type LPALISAUXILIARYEFFECTSLOT = unsafe extern "C" fn(slot: ALuint) -> ALboolean;
pub type LPALAUXILIARYEFFECTSLOTI =
    unsafe extern "C" fn(slot: ALuint, param: ALenum, value: ALint);
pub type LPALAUXILIARYEFFECTSLOTF =
    unsafe extern "C" fn(slot: ALuint, param: ALenum, value: ALfloat);
pub type LPALGETAUXILIARYEFFECTSLOTI =
    unsafe extern "C" fn(slot: ALuint, param: ALenum, value: *mut ALint);

/// A required entry point the driver did not export.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MissingSymbol(pub &'static CStr);

impl std::fmt::Debug for MissingSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("MissingSymbol").field(&self.0).finish()
    }
}

impl std::fmt::Display for MissingSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "missing driver symbol {:?}", self.0)
    }
}

impl std::error::Error for MissingSymbol {}

/// ALC 1.1 entry points.
#[derive(Clone, Copy)]
pub struct AlcSymbols {
    pub alcCreateContext: LPALCCREATECONTEXT,
    pub alcMakeContextCurrent: LPALCMAKECONTEXTCURRENT,
    pub alcDestroyContext: LPALCDESTROYCONTEXT,
    pub alcOpenDevice: LPALCOPENDEVICE,
    pub alcCloseDevice: LPALCCLOSEDEVICE,
    pub alcIsExtensionPresent: LPALCISEXTENSIONPRESENT,
    pub alcGetString: LPALCGETSTRING,
    pub alcGetIntegerv: LPALCGETINTEGERV,
}

/// AL 1.1 entry points (the subset the shim calls itself).
#[derive(Clone, Copy)]
pub struct AlSymbols {
    pub alGetString: LPALGETSTRING,
    pub alIsExtensionPresent: LPALISEXTENSIONPRESENT,
    pub alGetError: LPALGETERROR,
    pub alIsSource: LPALISSOURCE,
    pub alSourcei: LPALSOURCEI,
    pub alSource3i: LPALSOURCE3I,
    pub alGetSourcei: LPALGETSOURCEI,
}

/// EFX 1.0 entry points.
#[derive(Clone, Copy)]
pub struct EfxSymbols {
    pub alGenEffects: LPALGENEFFECTS,
    pub alDeleteEffects: LPALDELETEEFFECTS,
    pub alIsEffect: LPALISEFFECT,
    pub alEffecti: LPALEFFECTI,
    pub alEffectf: LPALEFFECTF,
    pub alEffectfv: LPALEFFECTFV,
    pub alGetEffecti: LPALGETEFFECTI,
    pub alGenFilters: LPALGENFILTERS,
    pub alDeleteFilters: LPALDELETEFILTERS,
    pub alIsFilter: LPALISFILTER,
    pub alFilteri: LPALFILTERI,
    pub alFilterf: LPALFILTERF,
    pub alGetFilteri: LPALGETFILTERI,
    pub alGenAuxiliaryEffectSlots: LPALGENAUXILIARYEFFECTSLOTS,
    pub alDeleteAuxiliaryEffectSlots: LPALDELETEAUXILIARYEFFECTSLOTS,
    pub alIsAuxiliaryEffectSlot: LPALISAUXILIARYEFFECTSLOT,
    pub alAuxiliaryEffectSloti: LPALAUXILIARYEFFECTSLOTI,
    pub alAuxiliaryEffectSlotf: LPALAUXILIARYEFFECTSLOTF,
    pub alGetAuxiliaryEffectSloti: LPALGETAUXILIARYEFFECTSLOTI,
}

/// The complete resolved driver surface.
#[derive(Clone, Copy)]
pub struct AlApi {
    pub alc: AlcSymbols,
    pub al: AlSymbols,
    pub efx: EfxSymbols,
}

impl AlApi {
    /// Resolve every entry point through the driver's `alGetProcAddress`.
    ///
    /// # Safety
    ///
    /// `get_proc` must be the driver's real `alGetProcAddress`, and the
    /// driver must stay loaded for as long as the returned table is used.
    pub unsafe fn load(get_proc: LPALGETPROCADDRESS) -> Result<Self, MissingSymbol> {
        Ok(Self {
            alc: AlcSymbols::load(get_proc)?,
            al: AlSymbols::load(get_proc)?,
            efx: EfxSymbols::load(get_proc)?,
        })
    }
}

macro_rules! symbol_loader {
    ($Table:ident { $($name:ident: $Ty:ty,)* }) => {
        impl $Table {
            /// Resolve this table's entry points through `get_proc`.
            ///
            /// # Safety
            ///
            /// See [`AlApi::load`].
            pub unsafe fn load(get_proc: LPALGETPROCADDRESS) -> Result<Self, MissingSymbol> {
                $(
                    let raw = get_proc(name_cstr(stringify!($name)).as_ptr());
                    if raw.is_null() {
                        return Err(MissingSymbol(name_cstr(stringify!($name))));
                    }
                    let $name = std::mem::transmute::<*mut c_void, $Ty>(raw);
                )*
                Ok(Self { $($name,)* })
            }
        }
    };
}

symbol_loader!(AlcSymbols {
    alcCreateContext: LPALCCREATECONTEXT,
    alcMakeContextCurrent: LPALCMAKECONTEXTCURRENT,
    alcDestroyContext: LPALCDESTROYCONTEXT,
    alcOpenDevice: LPALCOPENDEVICE,
    alcCloseDevice: LPALCCLOSEDEVICE,
    alcIsExtensionPresent: LPALCISEXTENSIONPRESENT,
    alcGetString: LPALCGETSTRING,
    alcGetIntegerv: LPALCGETINTEGERV,
});

symbol_loader!(AlSymbols {
    alGetString: LPALGETSTRING,
    alIsExtensionPresent: LPALISEXTENSIONPRESENT,
    alGetError: LPALGETERROR,
    alIsSource: LPALISSOURCE,
    alSourcei: LPALSOURCEI,
    alSource3i: LPALSOURCE3I,
    alGetSourcei: LPALGETSOURCEI,
});

symbol_loader!(EfxSymbols {
    alGenEffects: LPALGENEFFECTS,
    alDeleteEffects: LPALDELETEEFFECTS,
    alIsEffect: LPALISEFFECT,
    alEffecti: LPALEFFECTI,
    alEffectf: LPALEFFECTF,
    alEffectfv: LPALEFFECTFV,
    alGetEffecti: LPALGETEFFECTI,
    alGenFilters: LPALGENFILTERS,
    alDeleteFilters: LPALDELETEFILTERS,
    alIsFilter: LPALISFILTER,
    alFilteri: LPALFILTERI,
    alFilterf: LPALFILTERF,
    alGetFilteri: LPALGETFILTERI,
    alGenAuxiliaryEffectSlots: LPALGENAUXILIARYEFFECTSLOTS,
    alDeleteAuxiliaryEffectSlots: LPALDELETEAUXILIARYEFFECTSLOTS,
    alIsAuxiliaryEffectSlot: LPALISAUXILIARYEFFECTSLOT,
    alAuxiliaryEffectSloti: LPALAUXILIARYEFFECTSLOTI,
    alAuxiliaryEffectSlotf: LPALAUXILIARYEFFECTSLOTF,
    alGetAuxiliaryEffectSloti: LPALGETAUXILIARYEFFECTSLOTI,
});

/// Interned nul-terminated copies of the symbol names used by the loaders.
fn name_cstr(name: &'static str) -> &'static CStr {
    use std::collections::HashMap;
    use std::sync::{Mutex, OnceLock};

    static NAMES: OnceLock<Mutex<HashMap<&'static str, &'static CStr>>> = OnceLock::new();
    let mut names = NAMES.get_or_init(Default::default).lock().unwrap();
    names.entry(name).or_insert_with(|| {
        let owned = std::ffi::CString::new(name).expect("symbol names contain no nul");
        Box::leak(owned.into_boxed_c_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_interning_is_stable() {
        let a = name_cstr("alGenEffects");
        let b = name_cstr("alGenEffects");
        assert_eq!(a, b);
        assert_eq!(a.to_bytes(), b"alGenEffects");
    }
}
