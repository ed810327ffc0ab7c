//! X-RAM buffer-mode accounting.
//!
//! The legacy hardware-memory extension is bookkeeping only here: a mode
//! per buffer, a 64 MiB budget for the "hardware" pool, and the rule that
//! a buffer's mode is frozen once audio data has been written to it.

use std::collections::HashMap;

use al_sys::{ALenum, ALuint};

use crate::error::{EaxError, Result};

/// Capacity ceiling of the emulated hardware pool.
pub const XRAM_MAX_SIZE: usize = 64 * 1024 * 1024;

pub const AL_STORAGE_AUTOMATIC: ALenum = 0x20003;
pub const AL_STORAGE_HARDWARE: ALenum = 0x20004;
pub const AL_STORAGE_ACCESSIBLE: ALenum = 0x20005;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum XRamMode {
    /// Resident in hardware when it fits, spilled otherwise.
    #[default]
    Automatic,
    /// Must be resident; uploads fail when the pool is exhausted.
    Hardware,
    /// Never resident, always accessible to the host.
    Accessible,
}

impl XRamMode {
    pub fn from_al(value: ALenum) -> Option<XRamMode> {
        match value {
            AL_STORAGE_AUTOMATIC => Some(XRamMode::Automatic),
            AL_STORAGE_HARDWARE => Some(XRamMode::Hardware),
            AL_STORAGE_ACCESSIBLE => Some(XRamMode::Accessible),
            _ => None,
        }
    }

    pub fn to_al(self) -> ALenum {
        match self {
            XRamMode::Automatic => AL_STORAGE_AUTOMATIC,
            XRamMode::Hardware => AL_STORAGE_HARDWARE,
            XRamMode::Accessible => AL_STORAGE_ACCESSIBLE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct BufferRecord {
    size: usize,
    mode: XRamMode,
    is_hardware: bool,
    is_dirty: bool,
}

/// Process-wide X-RAM state, one record per live buffer name.
#[derive(Default)]
pub struct XRam {
    buffers: HashMap<ALuint, BufferRecord>,
    hardware_used: usize,
}

impl XRam {
    pub fn add_buffers(&mut self, names: &[ALuint]) {
        for name in names {
            self.buffers.insert(*name, BufferRecord::default());
        }
    }

    pub fn remove_buffers(&mut self, names: &[ALuint]) {
        for name in names {
            if let Some(record) = self.buffers.remove(name) {
                if record.is_hardware {
                    self.hardware_used -= record.size;
                }
            }
        }
    }

    /// Audio data landed in `name`. The first write freezes the mode; every
    /// write re-accounts the hardware pool.
    pub fn on_buffer_data(&mut self, name: ALuint, size: usize) {
        let Some(record) = self.buffers.get_mut(&name) else {
            return;
        };

        if record.is_hardware {
            self.hardware_used -= record.size;
            record.is_hardware = false;
        }
        record.size = size;
        record.is_dirty = true;

        let wants_hardware = matches!(record.mode, XRamMode::Automatic | XRamMode::Hardware);
        if wants_hardware && self.hardware_used + size <= XRAM_MAX_SIZE {
            record.is_hardware = true;
            self.hardware_used += size;
        }
    }

    /// Set the mode of every named buffer, atomically: an unknown name, an
    /// unknown mode, or any already-written buffer fails the whole call.
    pub fn set_buffer_mode(&mut self, names: &[ALuint], mode: ALenum) -> Result {
        let mode = XRamMode::from_al(mode).ok_or_else(|| EaxError::OutOfRange {
            field: "X-RAM Buffer Mode",
            value: format!("{mode:#x}"),
            min: format!("{AL_STORAGE_AUTOMATIC:#x}"),
            max: format!("{AL_STORAGE_ACCESSIBLE:#x}"),
        })?;

        for name in names {
            let record = self
                .buffers
                .get(name)
                .ok_or(EaxError::BufferNotFound(*name))?;
            if record.is_dirty {
                return Err(EaxError::BufferModeFrozen(*name));
            }
        }

        for name in names {
            if let Some(record) = self.buffers.get_mut(name) {
                record.mode = mode;
            }
        }
        Ok(())
    }

    pub fn buffer_mode(&self, name: ALuint) -> Result<ALenum> {
        self.buffers
            .get(&name)
            .map(|record| record.mode.to_al())
            .ok_or(EaxError::BufferNotFound(name))
    }

    pub fn hardware_used(&self) -> usize {
        self.hardware_used
    }

    pub fn is_hardware(&self, name: ALuint) -> Option<bool> {
        self.buffers.get(&name).map(|record| record.is_hardware)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_buffers_default_to_automatic() {
        let mut xram = XRam::default();
        xram.add_buffers(&[1, 2]);
        assert_eq!(xram.buffer_mode(1).unwrap(), AL_STORAGE_AUTOMATIC);
        assert_eq!(xram.buffer_mode(2).unwrap(), AL_STORAGE_AUTOMATIC);
        assert!(xram.buffer_mode(3).is_err());
    }

    #[test]
    fn mode_changes_freeze_after_first_upload() {
        let mut xram = XRam::default();
        xram.add_buffers(&[1]);
        xram.set_buffer_mode(&[1], AL_STORAGE_HARDWARE).unwrap();
        assert_eq!(xram.buffer_mode(1).unwrap(), AL_STORAGE_HARDWARE);

        xram.on_buffer_data(1, 4096);
        let error = xram.set_buffer_mode(&[1], AL_STORAGE_AUTOMATIC).unwrap_err();
        assert_eq!(error, EaxError::BufferModeFrozen(1));
        assert_eq!(xram.buffer_mode(1).unwrap(), AL_STORAGE_HARDWARE);
    }

    #[test]
    fn one_frozen_buffer_fails_the_whole_set() {
        let mut xram = XRam::default();
        xram.add_buffers(&[1, 2]);
        xram.on_buffer_data(2, 16);
        assert!(xram.set_buffer_mode(&[1, 2], AL_STORAGE_ACCESSIBLE).is_err());
        // The clean buffer keeps its old mode too.
        assert_eq!(xram.buffer_mode(1).unwrap(), AL_STORAGE_AUTOMATIC);
    }

    #[test]
    fn hardware_pool_accounting() {
        let mut xram = XRam::default();
        xram.add_buffers(&[1, 2]);
        xram.on_buffer_data(1, XRAM_MAX_SIZE - 8);
        assert_eq!(xram.is_hardware(1), Some(true));
        assert_eq!(xram.hardware_used(), XRAM_MAX_SIZE - 8);

        // No room left; the second buffer spills.
        xram.on_buffer_data(2, 64);
        assert_eq!(xram.is_hardware(2), Some(false));

        xram.remove_buffers(&[1]);
        assert_eq!(xram.hardware_used(), 0);
    }

    #[test]
    fn accessible_buffers_never_take_pool_space() {
        let mut xram = XRam::default();
        xram.add_buffers(&[7]);
        xram.set_buffer_mode(&[7], AL_STORAGE_ACCESSIBLE).unwrap();
        xram.on_buffer_data(7, 1024);
        assert_eq!(xram.is_hardware(7), Some(false));
        assert_eq!(xram.hardware_used(), 0);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let mut xram = XRam::default();
        xram.add_buffers(&[1]);
        assert!(xram.set_buffer_mode(&[1], 0x1234).is_err());
    }
}
