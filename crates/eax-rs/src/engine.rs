//! The process-wide engine behind the shim entry points.
//!
//! Every public method takes the single engine mutex for its whole
//! duration; the driver is only ever called with that mutex held, which is
//! what makes the raw device/context pointers safe to keep around. The
//! global instance is created on first use and lives for the process.

use std::collections::HashMap;
use std::ffi::{c_void, CStr, CString};
use std::sync::{Arc, OnceLock};

use al_sys::*;
use cstr8::{cstr8, CStr8};
use parking_lot::Mutex;

use crate::api::EAX_OK;
use crate::call::{EaxCall, PropertyBuffer};
use crate::context::EaxContext;
use crate::error::{EaxError, Result};
use crate::guid::Guid;
use crate::xram::XRam;

/// The dialects spliced into the driver's extension string.
const EAX_EXTENSION_NAMES: [&CStr8; 4] = [
    cstr8!("EAX2.0"),
    cstr8!("EAX3.0"),
    cstr8!("EAX4.0"),
    cstr8!("EAX5.0"),
];

struct Device;

struct EaxxState {
    api: Arc<AlApi>,
    devices: HashMap<usize, Device>,
    contexts: HashMap<usize, EaxContext>,
    current: Option<usize>,
    xram: XRam,
    /// Spliced copy of the driver's extension string plus its source
    /// pointer, rebuilt when the driver hands out a different string.
    al_exts_buffer: CString,
    al_exts_source: usize,
    attr_buffer: Vec<ALCint>,
}

/// The engine. One per process, shared by every shim entry point.
pub struct Eaxx {
    state: Mutex<EaxxState>,
}

// SAFETY: the raw device/context pointers inside are owned by the driver
// and only dereferenced by driver calls made under the engine mutex.
unsafe impl Send for Eaxx {}
unsafe impl Sync for Eaxx {}

impl Eaxx {
    /// Resolve the whole driver surface through `alGetProcAddress` and
    /// build the engine.
    ///
    /// # Safety
    ///
    /// See [`AlApi::load`].
    pub unsafe fn load(get_proc: LPALGETPROCADDRESS) -> Result<Eaxx> {
        let api = AlApi::load(get_proc)
            .map_err(|missing| EaxError::EfxUnavailable(missing.to_string()))?;
        Ok(Eaxx::with_api(api))
    }

    /// Build the engine over an already-resolved driver surface.
    pub fn with_api(api: AlApi) -> Eaxx {
        Eaxx {
            state: Mutex::new(EaxxState {
                api: Arc::new(api),
                devices: HashMap::new(),
                contexts: HashMap::new(),
                current: None,
                xram: XRam::default(),
                al_exts_buffer: CString::default(),
                al_exts_source: 0,
                attr_buffer: Vec::new(),
            }),
        }
    }

    // Intercepted ALC surface.

    pub fn alc_open_device(&self, device_name: *const ALCchar) -> *mut ALCdevice {
        let mut state = self.state.lock();
        if device_name.is_null() {
            log::info!("Open default device.");
        } else {
            let name = unsafe { CStr::from_ptr(device_name) };
            log::info!("Open device {:?}.", name);
        }

        let device = unsafe { (state.api.alc.alcOpenDevice)(device_name) };
        if !device.is_null() {
            state.devices.insert(device as usize, Device);
        }
        device
    }

    pub fn alc_close_device(&self, device: *mut ALCdevice) -> ALCboolean {
        let mut state = self.state.lock();
        log::info!("Close device.");
        let result = unsafe { (state.api.alc.alcCloseDevice)(device) };
        if result != 0 {
            state.devices.remove(&(device as usize));
        }
        result
    }

    /// Create a context with the attribute list rewritten so the driver
    /// reserves at least four auxiliary sends.
    pub fn alc_create_context(
        &self,
        device: *mut ALCdevice,
        attr_list: *const ALCint,
    ) -> *mut ALCcontext {
        let mut state = self.state.lock();

        let attr_list = if device.is_null() {
            attr_list
        } else {
            state.attr_buffer = rewrite_context_attrs(attr_list);
            state.attr_buffer.as_ptr()
        };

        let context = unsafe { (state.api.alc.alcCreateContext)(device, attr_list) };
        if !context.is_null() {
            if state.devices.contains_key(&(device as usize)) {
                let eax_context = EaxContext::new(&state.api, device, context);
                state.contexts.insert(context as usize, eax_context);
            } else {
                log::error!("Context created on an unknown device.");
            }
        }
        context
    }

    pub fn alc_make_context_current(&self, context: *mut ALCcontext) -> ALCboolean {
        let mut state = self.state.lock();
        let result = unsafe { (state.api.alc.alcMakeContextCurrent)(context) };
        if result != 0 {
            state.current = state
                .contexts
                .contains_key(&(context as usize))
                .then_some(context as usize);
        }
        result
    }

    pub fn alc_destroy_context(&self, context: *mut ALCcontext) {
        let mut state = self.state.lock();
        let key = context as usize;
        if state.current == Some(key) {
            state.current = None;
        }
        state.contexts.remove(&key);
        unsafe { (state.api.alc.alcDestroyContext)(context) };
    }

    // Extension surface.

    /// Answer for the EAX dialect names, forward everything else.
    pub fn al_is_extension_present(&self, extension_name: *const ALchar) -> ALboolean {
        let state = self.state.lock();
        if !extension_name.is_null() {
            let name = unsafe { CStr::from_ptr(extension_name) };
            if EAX_EXTENSION_NAMES
                .iter()
                .any(|eax_name| eax_name.as_bytes() == name.to_bytes())
            {
                return AL_TRUE as ALboolean;
            }
        }
        unsafe { (state.api.al.alIsExtensionPresent)(extension_name) }
    }

    /// Forward, splicing the EAX dialect names into `AL_EXTENSIONS`.
    pub fn al_get_string(&self, param: ALenum) -> *const ALchar {
        let mut state = self.state.lock();
        let driver_string = unsafe { (state.api.al.alGetString)(param) };
        if param != AL_EXTENSIONS || driver_string.is_null() {
            return driver_string;
        }

        if state.al_exts_source != driver_string as usize {
            let driver_exts = unsafe { CStr::from_ptr(driver_string) };
            state.al_exts_buffer = splice_extensions(driver_exts);
            state.al_exts_source = driver_string as usize;
        }
        state.al_exts_buffer.as_ptr()
    }

    // Source lifecycle notifications from the wrapper.

    pub fn on_sources_generated(&self, names: &[ALuint]) {
        let mut state = self.state.lock();
        let Some(current) = state.current else {
            return;
        };
        let Some(context) = state.contexts.get_mut(&current) else {
            return;
        };
        if let Err(error) = context.add_sources(names) {
            log::error!("Failed to track generated sources: {error}");
        }
    }

    pub fn on_sources_deleted(&self, names: &[ALuint]) {
        let mut state = self.state.lock();
        let Some(current) = state.current else {
            return;
        };
        if let Some(context) = state.contexts.get_mut(&current) {
            context.remove_sources(names);
        }
    }

    // X-RAM surface.

    pub fn on_buffers_generated(&self, names: &[ALuint]) {
        self.state.lock().xram.add_buffers(names);
    }

    pub fn on_buffers_deleted(&self, names: &[ALuint]) {
        self.state.lock().xram.remove_buffers(names);
    }

    pub fn on_buffer_data(&self, name: ALuint, size: usize) {
        self.state.lock().xram.on_buffer_data(name, size);
    }

    pub fn eax_set_buffer_mode(&self, buffers: &[ALuint], mode: ALenum) -> ALboolean {
        let mut state = self.state.lock();
        match state.xram.set_buffer_mode(buffers, mode) {
            Ok(()) => AL_TRUE as ALboolean,
            Err(error) => {
                log::error!("EAXSetBufferMode failed: {error}");
                AL_FALSE as ALboolean
            }
        }
    }

    pub fn eax_get_buffer_mode(&self, buffer: ALuint) -> ALenum {
        let state = self.state.lock();
        match state.xram.buffer_mode(buffer) {
            Ok(mode) => mode,
            Err(error) => {
                log::error!("EAXGetBufferMode failed: {error}");
                0
            }
        }
    }

    // Property traffic.

    /// The `EAXSet` entry point.
    ///
    /// # Safety
    ///
    /// `property_set_id` must be null or a valid GUID pointer; `buffer`
    /// must be null or valid for reads and writes of `size` bytes for the
    /// duration of the call.
    pub unsafe fn eax_set(
        &self,
        property_set_id: *const Guid,
        property_id: u32,
        source_name: ALuint,
        buffer: *mut c_void,
        size: u32,
    ) -> ALenum {
        self.property_call(false, property_set_id, property_id, source_name, buffer, size)
    }

    /// The `EAXGet` entry point.
    ///
    /// # Safety
    ///
    /// Same contract as [`Eaxx::eax_set`].
    pub unsafe fn eax_get(
        &self,
        property_set_id: *const Guid,
        property_id: u32,
        source_name: ALuint,
        buffer: *mut c_void,
        size: u32,
    ) -> ALenum {
        self.property_call(true, property_set_id, property_id, source_name, buffer, size)
    }

    unsafe fn property_call(
        &self,
        is_get: bool,
        property_set_id: *const Guid,
        property_id: u32,
        source_name: ALuint,
        buffer: *mut c_void,
        size: u32,
    ) -> ALenum {
        let mut state = self.state.lock();
        match dispatch_property(
            &mut state,
            is_get,
            property_set_id,
            property_id,
            source_name,
            buffer,
            size,
        ) {
            Ok(()) => EAX_OK,
            Err(error) => {
                let code = error.code();
                let entry = if is_get { "EAXGet" } else { "EAXSet" };
                log::error!("{entry} failed: {error}");
                if let Some(current) = state.current {
                    if let Some(context) = state.contexts.get_mut(&current) {
                        context.latch_error(code);
                    }
                }
                code
            }
        }
    }

    /// Run `f` against the current context's state, for diagnostics and
    /// tests.
    pub fn with_current_context<R>(&self, f: impl FnOnce(&EaxContext) -> R) -> Option<R> {
        let state = self.state.lock();
        let current = state.current?;
        state.contexts.get(&current).map(f)
    }
}

unsafe fn dispatch_property(
    state: &mut EaxxState,
    is_get: bool,
    property_set_id: *const Guid,
    property_id: u32,
    source_name: ALuint,
    buffer: *mut c_void,
    size: u32,
) -> Result {
    let property_set_id = property_set_id
        .as_ref()
        .ok_or(EaxError::NullPropertySet)?;

    let current = state.current.ok_or(EaxError::NoCurrentContext)?;
    let context = state
        .contexts
        .get_mut(&current)
        .ok_or(EaxError::NoCurrentContext)?;
    context.ensure_initialized()?;

    let call = EaxCall::new(
        is_get,
        property_set_id,
        property_id,
        source_name,
        PropertyBuffer::from_raw(buffer, size as usize),
    )?;
    context.dispatch(&call)
}

/// Rewrite a context attribute list so `ALC_MAX_AUXILIARY_SENDS` requests
/// at least one send per FX slot, keeping a larger game request intact.
fn rewrite_context_attrs(attr_list: *const ALCint) -> Vec<ALCint> {
    let mut attrs = Vec::with_capacity(16);
    let mut max_sends = crate::api::EAX_MAX_FX_SLOTS as ALCint;

    if !attr_list.is_null() {
        let mut cursor = attr_list;
        loop {
            // SAFETY: ALC attribute lists are zero-terminated name/value
            // pairs by contract.
            let name = unsafe { *cursor };
            if name == 0 {
                break;
            }
            let value = unsafe { *cursor.add(1) };
            cursor = unsafe { cursor.add(2) };

            if name == ALC_MAX_AUXILIARY_SENDS {
                max_sends = max_sends.max(value);
            } else {
                attrs.push(name);
                attrs.push(value);
            }
        }
    }

    attrs.push(ALC_MAX_AUXILIARY_SENDS);
    attrs.push(max_sends);
    attrs.push(0);
    attrs
}

/// Prepend the EAX dialect names that the driver's extension string does
/// not already carry.
fn splice_extensions(driver_exts: &CStr) -> CString {
    let driver_bytes = driver_exts.to_bytes();
    let mut spliced = Vec::with_capacity(driver_bytes.len() + 32);

    for name in EAX_EXTENSION_NAMES {
        let name_bytes = name.as_bytes();
        let already_present = driver_bytes
            .windows(name_bytes.len())
            .any(|window| window == name_bytes);
        if !already_present {
            if !spliced.is_empty() {
                spliced.push(b' ');
            }
            spliced.extend_from_slice(name_bytes);
        }
    }

    if !driver_bytes.is_empty() {
        if !spliced.is_empty() {
            spliced.push(b' ');
        }
        spliced.extend_from_slice(driver_bytes);
    }

    CString::new(spliced).expect("extension strings contain no interior nul")
}

/// The process-wide engine slot.
pub mod global {
    use super::*;

    static EAXX: OnceLock<Eaxx> = OnceLock::new();

    /// Resolve the driver and install the engine; later calls return the
    /// existing instance.
    ///
    /// # Safety
    ///
    /// See [`Eaxx::load`].
    pub unsafe fn init(get_proc: LPALGETPROCADDRESS) -> Result<&'static Eaxx> {
        if let Some(existing) = EAXX.get() {
            return Ok(existing);
        }
        let engine = Eaxx::load(get_proc)?;
        Ok(EAXX.get_or_init(|| engine))
    }

    /// The installed engine, if any.
    pub fn get() -> Option<&'static Eaxx> {
        EAXX.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_rewrite_inserts_the_send_floor() {
        let attrs = rewrite_context_attrs(std::ptr::null());
        assert_eq!(attrs, vec![ALC_MAX_AUXILIARY_SENDS, 4, 0]);
    }

    #[test]
    fn attr_rewrite_keeps_other_attributes_and_larger_requests() {
        let input = [ALC_FREQUENCY, 48_000, ALC_MAX_AUXILIARY_SENDS, 2, 0];
        let attrs = rewrite_context_attrs(input.as_ptr());
        assert_eq!(
            attrs,
            vec![ALC_FREQUENCY, 48_000, ALC_MAX_AUXILIARY_SENDS, 4, 0]
        );

        let input = [ALC_MAX_AUXILIARY_SENDS, 6, 0];
        let attrs = rewrite_context_attrs(input.as_ptr());
        assert_eq!(attrs, vec![ALC_MAX_AUXILIARY_SENDS, 6, 0]);
    }

    #[test]
    fn extension_splice_prepends_missing_names_once() {
        let spliced = splice_extensions(c"AL_EXT_OFFSET ALC_EXT_EFX");
        assert_eq!(
            spliced.to_str().unwrap(),
            "EAX2.0 EAX3.0 EAX4.0 EAX5.0 AL_EXT_OFFSET ALC_EXT_EFX"
        );

        let spliced = splice_extensions(c"EAX2.0 EAX3.0 EAX4.0 EAX5.0");
        assert_eq!(spliced.to_str().unwrap(), "EAX2.0 EAX3.0 EAX4.0 EAX5.0");
    }

    #[test]
    fn session_version_constants_are_wire_values() {
        assert_eq!(crate::api::SESSION_VERSION_EAX40, 5);
        assert_eq!(crate::api::SESSION_VERSION_EAX50, 6);
    }
}
