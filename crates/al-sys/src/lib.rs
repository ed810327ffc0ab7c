//! Raw OpenAL 1.1 / ALC 1.1 / EFX 1.0 surface.
//!
//! This crate does not link against any OpenAL implementation. Every entry
//! point is represented as a function pointer and resolved at runtime
//! through the driver's own `alGetProcAddress`, so the same tables work
//! against whichever driver the host process loaded.

#![allow(non_upper_case_globals, non_camel_case_types, non_snake_case)]

use std::ffi::{c_char, c_void};

mod al;
mod alc;
mod efx;
mod symbols;

pub use self::{al::*, alc::*, efx::*, symbols::*};

pub type ALboolean = i8;
pub type ALchar = c_char;
pub type ALbyte = i8;
pub type ALubyte = u8;
pub type ALshort = i16;
pub type ALushort = u16;
pub type ALint = i32;
pub type ALuint = u32;
pub type ALsizei = i32;
pub type ALenum = i32;
pub type ALfloat = f32;
pub type ALdouble = f64;
pub type ALvoid = c_void;

pub type ALCboolean = i8;
pub type ALCchar = c_char;
pub type ALCint = i32;
pub type ALCuint = u32;
pub type ALCsizei = i32;
pub type ALCenum = i32;
pub type ALCvoid = c_void;

/// Opaque device handle owned by the driver.
#[repr(C)]
pub struct ALCdevice {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

/// Opaque context handle owned by the driver.
#[repr(C)]
pub struct ALCcontext {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}
