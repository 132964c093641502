//! Input module - synthetic mouse and keyboard event injection.
//!
//! This module provides:
//! - Pure builders that shape flag/record batches (`batch`)
//! - The send façade that submits batches to the OS as one ordered array
//! - Cursor position queries
//!
//! Every call is synchronous and blocking on the caller's thread; records are
//! transient and discarded after submission.

pub mod batch;
mod flags;
pub mod keys;
mod record;

pub use flags::*;
pub use record::*;

#[cfg(target_os = "windows")]
use crate::error::{InputError, InputResult};
#[cfg(target_os = "windows")]
use crate::ffi;

/// Submit records as a single ordered batch. The OS reports how many it
/// processed; zero for a non-empty batch is the documented failure sentinel.
#[cfg(target_os = "windows")]
fn submit(records: &[InputRecord]) -> InputResult<u32> {
    let processed = ffi::send_input(records);
    if processed == 0 && !records.is_empty() {
        tracing::warn!(requested = records.len(), "SendInput processed no records");
        return Err(InputError::OsCallFailed("SendInput"));
    }
    tracing::trace!(requested = records.len(), processed, "input batch submitted");
    Ok(processed)
}

/// Move the mouse by `(x, y)`, or to `(x, y)` when `absolute` is set.
/// `virtual_desk` spans the coordinate space over all monitors.
#[cfg(target_os = "windows")]
pub fn send_mouse_move(x: i32, y: i32, absolute: bool, virtual_desk: bool) -> InputResult<u32> {
    let record = batch::mouse_move(x, y, absolute, virtual_desk, ffi::message_extra_info);
    submit(&[record])
}

/// Rotate the wheel by `delta` (positive away from the user, in multiples
/// of the OS wheel unit).
#[cfg(target_os = "windows")]
pub fn send_mouse_wheel(delta: i16) -> InputResult<u32> {
    let record = batch::mouse_wheel(delta, ffi::message_extra_info);
    submit(&[record])
}

/// Press, release or click a mouse button. Click variants submit the Down
/// record and its Up record in one batch.
#[cfg(target_os = "windows")]
pub fn send_mouse_button(action: MouseAction) -> InputResult<u32> {
    let records = batch::mouse_button(action, ffi::message_extra_info);
    submit(&records)
}

/// Combined move + wheel + button event; see [`batch::mouse_combined`] for
/// the flag composition rules.
#[cfg(target_os = "windows")]
pub fn send_mouse_event(
    x: i32,
    y: i32,
    wheel: i16,
    action: MouseAction,
    absolute: bool,
    virtual_desk: bool,
) -> InputResult<u32> {
    let records = batch::mouse_combined(
        x,
        y,
        wheel,
        action,
        absolute,
        virtual_desk,
        ffi::message_extra_info,
    );
    submit(&records)
}

/// Raw mouse event with a caller-supplied flag bitset. No button pairing is
/// applied; matching Down with Up is the caller's responsibility.
#[cfg(target_os = "windows")]
pub fn send_mouse_raw(x: i32, y: i32, wheel: i16, flags: MouseEventFlags) -> InputResult<u32> {
    let record = batch::mouse_raw(x, y, wheel, flags, ffi::message_extra_info);
    submit(&[record])
}

/// Inject a keyboard event from any key source, expanding `KeyState` into
/// one or two records.
#[cfg(target_os = "windows")]
pub fn send_key(key: KeyInput, state: KeyState) -> InputResult<u32> {
    let records = batch::keyboard(key, state, ffi::message_extra_info);
    submit(&records)
}

/// Submit caller-built records unchanged, including `Hardware` ones.
#[cfg(target_os = "windows")]
pub fn send_batch(records: &[InputRecord]) -> InputResult<u32> {
    submit(records)
}

/// Current cursor position in screen coordinates.
#[cfg(target_os = "windows")]
pub fn cursor_position() -> InputResult<(i32, i32)> {
    ffi::cursor_pos().ok_or(InputError::OsCallFailed("GetCursorPos"))
}

/// Warp the cursor to `(x, y)` in screen coordinates.
#[cfg(target_os = "windows")]
pub fn set_cursor_position(x: i32, y: i32) -> InputResult<()> {
    if ffi::set_cursor_pos(x, y) {
        Ok(())
    } else {
        Err(InputError::OsCallFailed("SetCursorPos"))
    }
}
