//! Shared harness: an engine wired to the in-process fake driver.

#![allow(dead_code)]

use std::ffi::c_void;

use al_sys::*;
use bytemuck::Zeroable;
use eax::api::*;
use eax::guid::Guid;
use eax::{testing, Eaxx};

pub struct Harness {
    pub engine: Eaxx,
    pub device: *mut ALCdevice,
    pub context: *mut ALCcontext,
}

/// Fresh driver, fresh engine, one current context.
pub fn boot() -> Harness {
    testing::reset();
    let engine = Eaxx::with_api(testing::api());
    let device = engine.alc_open_device(std::ptr::null());
    assert!(!device.is_null());
    let context = engine.alc_create_context(device, std::ptr::null());
    assert!(!context.is_null());
    assert_ne!(engine.alc_make_context_current(context), 0);
    Harness {
        engine,
        device,
        context,
    }
}

pub fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

impl Harness {
    pub fn set<T: Copy>(&self, set: &Guid, id: u32, target: ALuint, value: &mut T) -> i32 {
        unsafe {
            self.engine.eax_set(
                set,
                id,
                target,
                (value as *mut T).cast::<c_void>(),
                std::mem::size_of::<T>() as u32,
            )
        }
    }

    pub fn get<T: Copy>(&self, set: &Guid, id: u32, target: ALuint, value: &mut T) -> i32 {
        unsafe {
            self.engine.eax_get(
                set,
                id,
                target,
                (value as *mut T).cast::<c_void>(),
                std::mem::size_of::<T>() as u32,
            )
        }
    }

    pub fn set_ok<T: Copy>(&self, set: &Guid, id: u32, target: ALuint, mut value: T) {
        assert_eq!(self.set(set, id, target, &mut value), EAX_OK);
    }

    pub fn get_value<T: Copy + Zeroable>(&self, set: &Guid, id: u32, target: ALuint) -> T {
        let mut value = T::zeroed();
        assert_eq!(self.get(set, id, target, &mut value), EAX_OK);
        value
    }

    /// Force context initialization with a benign get.
    pub fn init_eax(&self) {
        let _: i32 = self.get_value(&eax::guid::EAX40_CONTEXT, CONTEXT_LASTERROR, 0);
    }

    pub fn set_session(&self, version: u32, max_active_sends: u32) {
        self.set_ok(
            &eax::guid::EAX50_CONTEXT,
            CONTEXT_EAXSESSION,
            0,
            SessionProps {
                version,
                max_active_sends,
            },
        );
    }

    /// Register a source with the fake driver and the engine.
    pub fn spawn_source(&self, name: ALuint) {
        testing::with_driver(|driver| driver.spawn_source(name));
        self.engine.on_sources_generated(&[name]);
    }

    pub fn delete_source(&self, name: ALuint) {
        testing::with_driver(|driver| driver.kill_source(name));
        self.engine.on_sources_deleted(&[name]);
    }

    /// Driver-side name of the auxiliary slot behind slot `index`.
    pub fn slot_name(&self, index: usize) -> ALuint {
        self.engine
            .with_current_context(|context| {
                context.fx_slots().map(|slots| slots.get(index).efx_effect_slot())
            })
            .flatten()
            .expect("context initialized")
    }

    pub fn source_state(&self, name: ALuint) -> testing::FakeSource {
        testing::with_driver(|driver| driver.sources.get(&name).cloned().unwrap_or_default())
    }

    pub fn active_mask(&self, name: ALuint) -> [bool; 4] {
        self.engine
            .with_current_context(|context| {
                context.with_source(name, |source| source.active_mask())
            })
            .flatten()
            .expect("source tracked")
    }

    pub fn last_error(&self) -> i32 {
        self.get_value(&eax::guid::EAX40_CONTEXT, CONTEXT_LASTERROR, 0)
    }
}
