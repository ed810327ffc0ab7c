//! X-RAM buffer-mode surface on the engine.

mod common;

use common::boot;
use eax::xram::{AL_STORAGE_AUTOMATIC, AL_STORAGE_HARDWARE};

#[test]
fn buffer_mode_locks_after_the_first_upload() {
    let harness = boot();
    harness.engine.on_buffers_generated(&[1]);

    // No data yet: the mode is free to change.
    assert_ne!(harness.engine.eax_set_buffer_mode(&[1], AL_STORAGE_HARDWARE), 0);
    assert_eq!(harness.engine.eax_get_buffer_mode(1), AL_STORAGE_HARDWARE);

    // PCM data arrives; the mode is frozen from here on.
    harness.engine.on_buffer_data(1, 64 * 1024);
    assert_eq!(
        harness.engine.eax_set_buffer_mode(&[1], AL_STORAGE_AUTOMATIC),
        0
    );
    assert_eq!(harness.engine.eax_get_buffer_mode(1), AL_STORAGE_HARDWARE);
}

#[test]
fn unknown_buffers_and_modes_fail() {
    let harness = boot();
    harness.engine.on_buffers_generated(&[1]);

    assert_eq!(harness.engine.eax_set_buffer_mode(&[2], AL_STORAGE_HARDWARE), 0);
    assert_eq!(harness.engine.eax_set_buffer_mode(&[1], 0x999), 0);
    assert_eq!(harness.engine.eax_get_buffer_mode(2), 0);
}

#[test]
fn deleting_buffers_forgets_their_records() {
    let harness = boot();
    harness.engine.on_buffers_generated(&[1, 2]);
    harness.engine.on_buffers_deleted(&[1]);
    assert_eq!(harness.engine.eax_get_buffer_mode(1), 0);
    assert_eq!(harness.engine.eax_get_buffer_mode(2), AL_STORAGE_AUTOMATIC);
}
