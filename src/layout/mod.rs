//! Keyboard layout management.
//!
//! Loading and activating a layout is a desktop-wide side effect, not scoped
//! to this process: concurrent callers racing to set different layouts race
//! at the OS level and this crate provides no serialization for that.

use serde::{Deserialize, Serialize};

#[cfg(target_os = "windows")]
use crate::error::{InputError, InputResult};
#[cfg(target_os = "windows")]
use crate::ffi;

#[cfg(target_os = "windows")]
const WM_INPUTLANGCHANGEREQUEST: u32 = 0x0050;
#[cfg(target_os = "windows")]
const KLF_ACTIVATE: usize = 0x0001;

/// Opaque OS layout handle (HKL). Zero is the failure sentinel and never
/// escapes the load path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutHandle(pub isize);

impl LayoutHandle {
    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// Format a numeric Windows language code as a keyboard layout identifier
/// string: 8 hex digits, lowercase, zero-padded (1033 -> "00000409").
pub fn klid(language_code: u32) -> String {
    format!("{language_code:08x}")
}

/// Load the layout for a numeric language code.
#[cfg(target_os = "windows")]
pub fn load(language_code: u32) -> InputResult<LayoutHandle> {
    load_id(&klid(language_code))
}

/// Load the layout for a pre-formatted KLID string.
#[cfg(target_os = "windows")]
pub fn load_id(klid: &str) -> InputResult<LayoutHandle> {
    let handle = ffi::load_keyboard_layout(klid);
    if handle == 0 {
        tracing::warn!(klid, "LoadKeyboardLayoutW returned a null handle");
        return Err(InputError::OsCallFailed("LoadKeyboardLayoutW"));
    }
    tracing::debug!(klid, handle, "keyboard layout loaded");
    Ok(LayoutHandle(handle))
}

/// Activate a loaded layout for the calling thread, then broadcast the
/// language-change request to every top-level window. The error reports the
/// broadcast not being accepted; the activation itself has already happened.
#[cfg(target_os = "windows")]
pub fn activate(handle: LayoutHandle) -> InputResult<()> {
    ffi::activate_keyboard_layout(handle.0);
    if ffi::post_broadcast(WM_INPUTLANGCHANGEREQUEST, KLF_ACTIVATE, handle.0) {
        tracing::debug!(handle = handle.0, "layout change broadcast");
        Ok(())
    } else {
        Err(InputError::OsCallFailed("PostMessageW"))
    }
}

/// Layout currently active for a thread; 0 means the calling thread.
#[cfg(target_os = "windows")]
pub fn current(thread_id: u32) -> LayoutHandle {
    LayoutHandle(ffi::keyboard_layout(thread_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_klid_pads_to_eight_hex_digits() {
        assert_eq!(klid(1033), "00000409");
        assert_eq!(klid(1049), "00000419");
        assert_eq!(klid(0), "00000000");
    }

    #[test]
    fn test_klid_is_lowercase() {
        assert_eq!(klid(0x040A0C0B), "040a0c0b");
    }

    #[test]
    fn test_null_handle_detection() {
        assert!(LayoutHandle(0).is_null());
        assert!(!LayoutHandle(0x04090409).is_null());
    }
}
