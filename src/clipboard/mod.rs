//! Clipboard text interop.
//!
//! The clipboard is desktop-global shared state. The scoped open -> mutate ->
//! close sequence here is the only mutual-exclusion discipline provided;
//! another process holding the clipboard open surfaces as
//! `ClipboardUnavailable`. Once a text block has been accepted by the OS it
//! owns the memory.

use serde::{Deserialize, Serialize};

use crate::error::InputError;
#[cfg(target_os = "windows")]
use crate::error::InputResult;
#[cfg(target_os = "windows")]
use crate::ffi;

/// Clipboard data formats understood by this crate (CF_* values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum ClipboardFormat {
    UnicodeText = 13,
}

impl TryFrom<u32> for ClipboardFormat {
    type Error = InputError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            13 => Ok(ClipboardFormat::UnicodeText),
            _ => Err(InputError::UnsupportedValue {
                what: "clipboard format",
                value,
            }),
        }
    }
}

/// Encode text as the NUL-terminated UTF-16 block the clipboard stores.
pub fn utf16z(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Holds the clipboard open for the current thread; closing is unconditional
/// on drop so no failure path leaves the clipboard acquired.
#[cfg(target_os = "windows")]
struct ClipboardGuard;

#[cfg(target_os = "windows")]
impl ClipboardGuard {
    fn open() -> InputResult<Self> {
        if ffi::open_clipboard() {
            Ok(ClipboardGuard)
        } else {
            Err(InputError::ClipboardUnavailable)
        }
    }
}

#[cfg(target_os = "windows")]
impl Drop for ClipboardGuard {
    fn drop(&mut self) {
        if !ffi::close_clipboard() {
            tracing::warn!("CloseClipboard failed");
        }
    }
}

/// Replace the clipboard contents with `text` as CF_UNICODETEXT.
///
/// An open failure reports `ClipboardUnavailable` with nothing mutated; any
/// later failure reports `ClipboardWriteFailed` naming the stage, with the
/// clipboard closed and the staging allocation freed.
#[cfg(target_os = "windows")]
pub fn set_unicode_text(text: &str) -> InputResult<()> {
    let _guard = ClipboardGuard::open()?;

    if !ffi::empty_clipboard() {
        return Err(InputError::ClipboardWriteFailed { stage: "empty" });
    }

    let handle = ffi::alloc_global_utf16(&utf16z(text))
        .ok_or(InputError::ClipboardWriteFailed { stage: "alloc" })?;

    if !ffi::set_clipboard_data(ClipboardFormat::UnicodeText as u32, handle) {
        // The OS refused the block, so ownership is still ours.
        ffi::free_global(handle);
        return Err(InputError::ClipboardWriteFailed { stage: "set" });
    }

    tracing::trace!(chars = text.len(), "clipboard text set");
    Ok(())
}

/// Read the clipboard as CF_UNICODETEXT; `Ok(None)` when no text is present.
#[cfg(target_os = "windows")]
pub fn get_unicode_text() -> InputResult<Option<String>> {
    if !ffi::clipboard_format_available(ClipboardFormat::UnicodeText as u32) {
        return Ok(None);
    }

    let _guard = ClipboardGuard::open()?;
    match ffi::get_clipboard_data(ClipboardFormat::UnicodeText as u32) {
        Some(handle) => Ok(ffi::read_global_utf16(handle)),
        None => Ok(None),
    }
}
