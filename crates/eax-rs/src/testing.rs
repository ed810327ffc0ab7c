//! An in-process stand-in for an EFX-capable driver.
//!
//! The fake keeps the driver-side object model (effects, filters,
//! auxiliary slots, source routing) in thread-local state and records
//! every parameter write in a trace, so suites can assert both the final
//! driver state and the exact calls a property operation produced. Each
//! test thread gets its own driver; [`reset`] returns it to a fresh boot.
//!
//! The tables from [`api`] point at real `extern "C"` functions, and
//! [`get_proc_address`] resolves them by name, so the symbol loader can be
//! exercised end to end as well.

#![allow(non_snake_case)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::ffi::{c_void, CStr};

use al_sys::*;

/// One recorded driver call.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceEntry {
    EffectI {
        effect: ALuint,
        param: ALenum,
        value: ALint,
    },
    EffectF {
        effect: ALuint,
        param: ALenum,
        value: f32,
    },
    EffectFv {
        effect: ALuint,
        param: ALenum,
        values: [f32; 3],
    },
    FilterI {
        filter: ALuint,
        param: ALenum,
        value: ALint,
    },
    FilterF {
        filter: ALuint,
        param: ALenum,
        value: f32,
    },
    SlotI {
        slot: ALuint,
        param: ALenum,
        value: ALint,
    },
    SlotF {
        slot: ALuint,
        param: ALenum,
        value: f32,
    },
    SourceI {
        source: ALuint,
        param: ALenum,
        value: ALint,
    },
    Source3I {
        source: ALuint,
        param: ALenum,
        values: [ALint; 3],
    },
}

#[derive(Clone, Debug, Default)]
pub struct FakeEffect {
    pub effect_type: ALint,
    pub params_i: HashMap<ALenum, ALint>,
    pub params_f: HashMap<ALenum, f32>,
    pub params_fv: HashMap<ALenum, [f32; 3]>,
}

#[derive(Clone, Debug, Default)]
pub struct FakeFilter {
    pub filter_type: ALint,
    pub params_f: HashMap<ALenum, f32>,
}

#[derive(Clone, Debug, Default)]
pub struct FakeSlot {
    /// Name of the bound effect object, or 0.
    pub effect: ALint,
    pub gain: f32,
    pub send_auto: ALint,
}

#[derive(Clone, Debug, Default)]
pub struct FakeSource {
    pub direct_filter: ALint,
    /// Low-pass (gain, gain_hf) captured when the direct filter was bound,
    /// mirroring the copy-at-attach behavior of real EFX drivers.
    pub direct_lowpass: Option<(f32, f32)>,
    /// Per send index: (auxiliary slot name, filter name).
    pub sends: [(ALint, ALint); 4],
    /// Low-pass snapshot per send, captured at bind time.
    pub send_lowpass: [Option<(f32, f32)>; 4],
    pub params_i: HashMap<ALenum, ALint>,
}

/// The whole driver-side world of one test thread.
pub struct FakeDriver {
    next_name: ALuint,
    pub effects: HashMap<ALuint, FakeEffect>,
    pub filters: HashMap<ALuint, FakeFilter>,
    pub slots: HashMap<ALuint, FakeSlot>,
    pub sources: HashMap<ALuint, FakeSource>,
    live_sources: HashSet<ALuint>,
    pub trace: Vec<TraceEntry>,
    pub max_auxiliary_sends: ALCint,
    pub has_efx: bool,
}

impl FakeDriver {
    fn new() -> FakeDriver {
        FakeDriver {
            next_name: 1,
            effects: HashMap::new(),
            filters: HashMap::new(),
            slots: HashMap::new(),
            sources: HashMap::new(),
            live_sources: HashSet::new(),
            trace: Vec::new(),
            max_auxiliary_sends: 4,
            has_efx: true,
        }
    }

    fn allocate(&mut self) -> ALuint {
        let name = self.next_name;
        self.next_name += 1;
        name
    }

    /// Pretend the game generated a source with this name.
    pub fn spawn_source(&mut self, name: ALuint) {
        self.live_sources.insert(name);
        self.sources.entry(name).or_default();
    }

    /// Pretend the game deleted a source.
    pub fn kill_source(&mut self, name: ALuint) {
        self.live_sources.remove(&name);
    }

    pub fn clear_trace(&mut self) {
        self.trace.clear();
    }

    /// The effect object currently bound to `slot`, if any.
    pub fn slot_effect(&self, slot: ALuint) -> Option<&FakeEffect> {
        let bound = self.slots.get(&slot)?.effect;
        self.effects.get(&(bound as ALuint))
    }
}

thread_local! {
    static DRIVER: RefCell<FakeDriver> = RefCell::new(FakeDriver::new());
}

/// Run `f` against this thread's fake driver.
pub fn with_driver<R>(f: impl FnOnce(&mut FakeDriver) -> R) -> R {
    DRIVER.with(|driver| f(&mut driver.borrow_mut()))
}

/// Fresh driver state for the current thread.
pub fn reset() {
    DRIVER.with(|driver| *driver.borrow_mut() = FakeDriver::new());
}

// Entry points.

unsafe extern "C" fn alcCreateContext(
    _device: *mut ALCdevice,
    _attrs: *const ALCint,
) -> *mut ALCcontext {
    Box::into_raw(Box::new(0u64)).cast()
}

unsafe extern "C" fn alcMakeContextCurrent(_context: *mut ALCcontext) -> ALCboolean {
    ALC_TRUE as ALCboolean
}

unsafe extern "C" fn alcDestroyContext(_context: *mut ALCcontext) {}

unsafe extern "C" fn alcOpenDevice(_name: *const ALCchar) -> *mut ALCdevice {
    Box::into_raw(Box::new(0u64)).cast()
}

unsafe extern "C" fn alcCloseDevice(_device: *mut ALCdevice) -> ALCboolean {
    ALC_TRUE as ALCboolean
}

unsafe extern "C" fn alcIsExtensionPresent(
    _device: *mut ALCdevice,
    name: *const ALCchar,
) -> ALCboolean {
    let is_efx = !name.is_null() && CStr::from_ptr(name) == ALC_EXT_EFX_NAME;
    let present = is_efx && with_driver(|driver| driver.has_efx);
    present as ALCboolean
}

unsafe extern "C" fn alcGetString(_device: *mut ALCdevice, _param: ALCenum) -> *const ALCchar {
    c"".as_ptr()
}

unsafe extern "C" fn alcGetIntegerv(
    _device: *mut ALCdevice,
    param: ALCenum,
    size: ALCsizei,
    values: *mut ALCint,
) {
    if param == ALC_MAX_AUXILIARY_SENDS && size >= 1 && !values.is_null() {
        *values = with_driver(|driver| driver.max_auxiliary_sends);
    }
}

unsafe extern "C" fn alGetString(param: ALenum) -> *const ALchar {
    if param == AL_EXTENSIONS {
        c"ALC_EXT_EFX AL_EXT_OFFSET".as_ptr()
    } else {
        c"fake".as_ptr()
    }
}

unsafe extern "C" fn alIsExtensionPresent(_name: *const ALchar) -> ALboolean {
    0
}

unsafe extern "C" fn alGetError() -> ALenum {
    AL_NO_ERROR
}

unsafe extern "C" fn alIsSource(source: ALuint) -> ALboolean {
    with_driver(|driver| driver.live_sources.contains(&source)) as ALboolean
}

fn lowpass_snapshot(driver: &FakeDriver, filter: ALint) -> Option<(f32, f32)> {
    let record = driver.filters.get(&(filter as ALuint))?;
    Some((
        record.params_f.get(&AL_LOWPASS_GAIN).copied().unwrap_or(1.0),
        record
            .params_f
            .get(&AL_LOWPASS_GAINHF)
            .copied()
            .unwrap_or(1.0),
    ))
}

unsafe extern "C" fn alSourcei(source: ALuint, param: ALenum, value: ALint) {
    with_driver(|driver| {
        let snapshot = lowpass_snapshot(driver, value);
        let record = driver.sources.entry(source).or_default();
        if param == AL_DIRECT_FILTER {
            record.direct_filter = value;
            record.direct_lowpass = if value == AL_FILTER_NULL {
                None
            } else {
                snapshot
            };
        } else {
            record.params_i.insert(param, value);
        }
        driver.trace.push(TraceEntry::SourceI {
            source,
            param,
            value,
        });
    })
}

unsafe extern "C" fn alSource3i(source: ALuint, param: ALenum, v1: ALint, v2: ALint, v3: ALint) {
    with_driver(|driver| {
        let snapshot = lowpass_snapshot(driver, v3);
        let record = driver.sources.entry(source).or_default();
        if param == AL_AUXILIARY_SEND_FILTER && (0..4).contains(&v2) {
            record.sends[v2 as usize] = (v1, v3);
            record.send_lowpass[v2 as usize] = if v3 == AL_FILTER_NULL {
                None
            } else {
                snapshot
            };
        }
        driver.trace.push(TraceEntry::Source3I {
            source,
            param,
            values: [v1, v2, v3],
        });
    })
}

unsafe extern "C" fn alGetSourcei(_source: ALuint, param: ALenum, value: *mut ALint) {
    if param == AL_SOURCE_STATE && !value.is_null() {
        *value = AL_STOPPED;
    }
}

unsafe extern "C" fn alGenEffects(n: ALsizei, effects: *mut ALuint) {
    with_driver(|driver| {
        for index in 0..n as usize {
            let name = driver.allocate();
            driver.effects.insert(name, FakeEffect::default());
            *effects.add(index) = name;
        }
    })
}

unsafe extern "C" fn alDeleteEffects(n: ALsizei, effects: *const ALuint) {
    with_driver(|driver| {
        for index in 0..n as usize {
            driver.effects.remove(&*effects.add(index));
        }
    })
}

unsafe extern "C" fn alIsEffect(effect: ALuint) -> ALboolean {
    with_driver(|driver| driver.effects.contains_key(&effect)) as ALboolean
}

unsafe extern "C" fn alEffecti(effect: ALuint, param: ALenum, value: ALint) {
    with_driver(|driver| {
        if let Some(record) = driver.effects.get_mut(&effect) {
            if param == AL_EFFECT_TYPE {
                record.effect_type = value;
            } else {
                record.params_i.insert(param, value);
            }
        }
        driver.trace.push(TraceEntry::EffectI {
            effect,
            param,
            value,
        });
    })
}

unsafe extern "C" fn alEffectf(effect: ALuint, param: ALenum, value: ALfloat) {
    with_driver(|driver| {
        if let Some(record) = driver.effects.get_mut(&effect) {
            record.params_f.insert(param, value);
        }
        driver.trace.push(TraceEntry::EffectF {
            effect,
            param,
            value,
        });
    })
}

unsafe extern "C" fn alEffectfv(effect: ALuint, param: ALenum, values: *const ALfloat) {
    let values = [*values, *values.add(1), *values.add(2)];
    with_driver(|driver| {
        if let Some(record) = driver.effects.get_mut(&effect) {
            record.params_fv.insert(param, values);
        }
        driver.trace.push(TraceEntry::EffectFv {
            effect,
            param,
            values,
        });
    })
}

unsafe extern "C" fn alGetEffecti(effect: ALuint, param: ALenum, value: *mut ALint) {
    if param == AL_EFFECT_TYPE && !value.is_null() {
        *value = with_driver(|driver| {
            driver
                .effects
                .get(&effect)
                .map(|record| record.effect_type)
                .unwrap_or(AL_EFFECT_NULL)
        });
    }
}

unsafe extern "C" fn alGenFilters(n: ALsizei, filters: *mut ALuint) {
    with_driver(|driver| {
        for index in 0..n as usize {
            let name = driver.allocate();
            driver.filters.insert(name, FakeFilter::default());
            *filters.add(index) = name;
        }
    })
}

unsafe extern "C" fn alDeleteFilters(n: ALsizei, filters: *const ALuint) {
    with_driver(|driver| {
        for index in 0..n as usize {
            driver.filters.remove(&*filters.add(index));
        }
    })
}

unsafe extern "C" fn alIsFilter(filter: ALuint) -> ALboolean {
    with_driver(|driver| driver.filters.contains_key(&filter)) as ALboolean
}

unsafe extern "C" fn alFilteri(filter: ALuint, param: ALenum, value: ALint) {
    with_driver(|driver| {
        if let Some(record) = driver.filters.get_mut(&filter) {
            if param == AL_FILTER_TYPE {
                record.filter_type = value;
            }
        }
        driver.trace.push(TraceEntry::FilterI {
            filter,
            param,
            value,
        });
    })
}

unsafe extern "C" fn alFilterf(filter: ALuint, param: ALenum, value: ALfloat) {
    with_driver(|driver| {
        if let Some(record) = driver.filters.get_mut(&filter) {
            record.params_f.insert(param, value);
        }
        driver.trace.push(TraceEntry::FilterF {
            filter,
            param,
            value,
        });
    })
}

unsafe extern "C" fn alGetFilteri(filter: ALuint, param: ALenum, value: *mut ALint) {
    if param == AL_FILTER_TYPE && !value.is_null() {
        *value = with_driver(|driver| {
            driver
                .filters
                .get(&filter)
                .map(|record| record.filter_type)
                .unwrap_or(AL_FILTER_NULL)
        });
    }
}

unsafe extern "C" fn alGenAuxiliaryEffectSlots(n: ALsizei, slots: *mut ALuint) {
    with_driver(|driver| {
        for index in 0..n as usize {
            let name = driver.allocate();
            driver.slots.insert(name, FakeSlot::default());
            *slots.add(index) = name;
        }
    })
}

unsafe extern "C" fn alDeleteAuxiliaryEffectSlots(n: ALsizei, slots: *const ALuint) {
    with_driver(|driver| {
        for index in 0..n as usize {
            driver.slots.remove(&*slots.add(index));
        }
    })
}

unsafe extern "C" fn alIsAuxiliaryEffectSlot(slot: ALuint) -> ALboolean {
    with_driver(|driver| driver.slots.contains_key(&slot)) as ALboolean
}

unsafe extern "C" fn alAuxiliaryEffectSloti(slot: ALuint, param: ALenum, value: ALint) {
    with_driver(|driver| {
        if let Some(record) = driver.slots.get_mut(&slot) {
            match param {
                AL_EFFECTSLOT_EFFECT => record.effect = value,
                AL_EFFECTSLOT_AUXILIARY_SEND_AUTO => record.send_auto = value,
                _ => {}
            }
        }
        driver.trace.push(TraceEntry::SlotI { slot, param, value });
    })
}

unsafe extern "C" fn alAuxiliaryEffectSlotf(slot: ALuint, param: ALenum, value: ALfloat) {
    with_driver(|driver| {
        if let Some(record) = driver.slots.get_mut(&slot) {
            if param == AL_EFFECTSLOT_GAIN {
                record.gain = value;
            }
        }
        driver.trace.push(TraceEntry::SlotF { slot, param, value });
    })
}

unsafe extern "C" fn alGetAuxiliaryEffectSloti(_slot: ALuint, _param: ALenum, value: *mut ALint) {
    if !value.is_null() {
        *value = 0;
    }
}

/// A fake `alGetProcAddress` resolving the names the loader asks for.
pub unsafe extern "C" fn get_proc_address(name: *const ALchar) -> *mut c_void {
    if name.is_null() {
        return std::ptr::null_mut();
    }
    let name = CStr::from_ptr(name);

    macro_rules! table {
        ($($symbol:ident),* $(,)?) => {
            match name.to_bytes() {
                $(name_bytes if name_bytes == stringify!($symbol).as_bytes() => {
                    $symbol as *mut c_void
                })*
                _ => std::ptr::null_mut(),
            }
        };
    }

    table!(
        alcCreateContext,
        alcMakeContextCurrent,
        alcDestroyContext,
        alcOpenDevice,
        alcCloseDevice,
        alcIsExtensionPresent,
        alcGetString,
        alcGetIntegerv,
        alGetString,
        alIsExtensionPresent,
        alGetError,
        alIsSource,
        alSourcei,
        alSource3i,
        alGetSourcei,
        alGenEffects,
        alDeleteEffects,
        alIsEffect,
        alEffecti,
        alEffectf,
        alEffectfv,
        alGetEffecti,
        alGenFilters,
        alDeleteFilters,
        alIsFilter,
        alFilteri,
        alFilterf,
        alGetFilteri,
        alGenAuxiliaryEffectSlots,
        alDeleteAuxiliaryEffectSlots,
        alIsAuxiliaryEffectSlot,
        alAuxiliaryEffectSloti,
        alAuxiliaryEffectSlotf,
        alGetAuxiliaryEffectSloti,
    )
}

/// The resolved driver surface backed by this module.
pub fn api() -> AlApi {
    AlApi {
        alc: AlcSymbols {
            alcCreateContext,
            alcMakeContextCurrent,
            alcDestroyContext,
            alcOpenDevice,
            alcCloseDevice,
            alcIsExtensionPresent,
            alcGetString,
            alcGetIntegerv,
        },
        al: AlSymbols {
            alGetString,
            alIsExtensionPresent,
            alGetError,
            alIsSource,
            alSourcei,
            alSource3i,
            alGetSourcei,
        },
        efx: EfxSymbols {
            alGenEffects,
            alDeleteEffects,
            alIsEffect,
            alEffecti,
            alEffectf,
            alEffectfv,
            alGetEffecti,
            alGenFilters,
            alDeleteFilters,
            alIsFilter,
            alFilteri,
            alFilterf,
            alGetFilteri,
            alGenAuxiliaryEffectSlots,
            alDeleteAuxiliaryEffectSlots,
            alIsAuxiliaryEffectSlot,
            alAuxiliaryEffectSloti,
            alAuxiliaryEffectSlotf,
            alGetAuxiliaryEffectSloti,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_resolves_through_the_fake() {
        let api = unsafe { AlApi::load(get_proc_address) }.unwrap();
        reset();
        let mut name: ALuint = 0;
        unsafe { (api.efx.alGenEffects)(1, &mut name) };
        assert_ne!(name, 0);
        assert_eq!(unsafe { (api.efx.alIsEffect)(name) }, 1);
    }

    #[test]
    fn trace_records_parameter_writes() {
        reset();
        let api = api();
        let mut name: ALuint = 0;
        unsafe {
            (api.efx.alGenEffects)(1, &mut name);
            (api.efx.alEffectf)(name, AL_EAXREVERB_DECAY_TIME, 1.49);
        }
        with_driver(|driver| {
            assert_eq!(
                driver.trace,
                vec![TraceEntry::EffectF {
                    effect: name,
                    param: AL_EAXREVERB_DECAY_TIME,
                    value: 1.49,
                }]
            );
        });
    }
}
