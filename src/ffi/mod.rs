//! Foreign call table - thin wrappers over the user32/kernel32 entry points.
//!
//! Stateless and context-free: every function forwards one OS call and hands
//! the raw result (count, handle, boolean) back to the façade unmodified. No
//! retries, no error translation; interpretation of sentinels happens one
//! layer up.

use windows::core::PCWSTR;
use windows::Win32::Foundation::{HANDLE, HGLOBAL, LPARAM, POINT, WPARAM};
use windows::Win32::System::DataExchange::{
    CloseClipboard, EmptyClipboard, GetClipboardData, IsClipboardFormatAvailable, OpenClipboard,
    SetClipboardData,
};
use windows::Win32::System::Memory::{GlobalAlloc, GlobalFree, GlobalLock, GlobalUnlock, GMEM_MOVEABLE};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    ActivateKeyboardLayout, GetKeyboardLayout, LoadKeyboardLayoutW, MapVirtualKeyW, SendInput,
    ACTIVATE_KEYBOARD_LAYOUT_FLAGS, HARDWAREINPUT, INPUT, INPUT_0, INPUT_HARDWARE, INPUT_KEYBOARD,
    INPUT_MOUSE, KEYBDINPUT, KEYBD_EVENT_FLAGS, MAP_VIRTUAL_KEY_TYPE, MOUSEINPUT, MOUSE_EVENT_FLAGS,
    VIRTUAL_KEY,
};
use windows::Win32::UI::TextServices::HKL;
use windows::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, GetMessageExtraInfo, PostMessageW, SetCursorPos, HWND_BROADCAST,
};

use crate::input::InputRecord;

/// Lower a record into the overlapping-memory layout the OS expects.
fn to_raw(record: &InputRecord) -> INPUT {
    match record {
        InputRecord::Mouse(m) => INPUT {
            r#type: INPUT_MOUSE,
            Anonymous: INPUT_0 {
                mi: MOUSEINPUT {
                    dx: m.dx,
                    dy: m.dy,
                    mouseData: m.data,
                    dwFlags: MOUSE_EVENT_FLAGS(m.flags.bits()),
                    time: m.time,
                    dwExtraInfo: m.extra_info as usize,
                },
            },
        },
        InputRecord::Keyboard(k) => INPUT {
            r#type: INPUT_KEYBOARD,
            Anonymous: INPUT_0 {
                ki: KEYBDINPUT {
                    wVk: VIRTUAL_KEY(k.vk),
                    wScan: k.scan,
                    dwFlags: KEYBD_EVENT_FLAGS(k.flags.bits()),
                    time: k.time,
                    dwExtraInfo: k.extra_info as usize,
                },
            },
        },
        InputRecord::Hardware(h) => INPUT {
            r#type: INPUT_HARDWARE,
            Anonymous: INPUT_0 {
                hi: HARDWAREINPUT {
                    uMsg: h.msg,
                    wParamL: h.param_l,
                    wParamH: h.param_h,
                },
            },
        },
    }
}

/// Submit an ordered batch; returns the count of records the OS processed.
pub(crate) fn send_input(records: &[InputRecord]) -> u32 {
    let raw: Vec<INPUT> = records.iter().map(to_raw).collect();
    unsafe { SendInput(&raw, std::mem::size_of::<INPUT>() as i32) }
}

pub(crate) fn message_extra_info() -> isize {
    unsafe { GetMessageExtraInfo().0 }
}

pub(crate) fn cursor_pos() -> Option<(i32, i32)> {
    let mut point = POINT::default();
    unsafe { GetCursorPos(&mut point).ok().map(|_| (point.x, point.y)) }
}

pub(crate) fn set_cursor_pos(x: i32, y: i32) -> bool {
    unsafe { SetCursorPos(x, y).is_ok() }
}

pub(crate) fn load_keyboard_layout(klid: &str) -> isize {
    let wide: Vec<u16> = klid.encode_utf16().chain(std::iter::once(0)).collect();
    unsafe {
        LoadKeyboardLayoutW(PCWSTR::from_raw(wide.as_ptr()), ACTIVATE_KEYBOARD_LAYOUT_FLAGS(0)).0
    }
}

pub(crate) fn activate_keyboard_layout(handle: isize) -> isize {
    unsafe { ActivateKeyboardLayout(HKL(handle), ACTIVATE_KEYBOARD_LAYOUT_FLAGS(0)).0 }
}

pub(crate) fn keyboard_layout(thread_id: u32) -> isize {
    unsafe { GetKeyboardLayout(thread_id).0 }
}

pub(crate) fn post_broadcast(msg: u32, wparam: usize, lparam: isize) -> bool {
    unsafe { PostMessageW(HWND_BROADCAST, msg, WPARAM(wparam), LPARAM(lparam)).is_ok() }
}

pub(crate) fn map_virtual_key(code: u32, map_type: u32) -> u32 {
    unsafe { MapVirtualKeyW(code, MAP_VIRTUAL_KEY_TYPE(map_type)) }
}

pub(crate) fn open_clipboard() -> bool {
    unsafe { OpenClipboard(None).is_ok() }
}

pub(crate) fn close_clipboard() -> bool {
    unsafe { CloseClipboard().is_ok() }
}

pub(crate) fn empty_clipboard() -> bool {
    unsafe { EmptyClipboard().is_ok() }
}

pub(crate) fn clipboard_format_available(format: u32) -> bool {
    unsafe { IsClipboardFormatAvailable(format).is_ok() }
}

pub(crate) fn get_clipboard_data(format: u32) -> Option<isize> {
    unsafe { GetClipboardData(format).ok().map(|handle| handle.0) }
}

pub(crate) fn set_clipboard_data(format: u32, handle: isize) -> bool {
    unsafe { SetClipboardData(format, HANDLE(handle)).is_ok() }
}

/// Copy a NUL-terminated UTF-16 block into a movable global allocation.
/// Ownership of the returned handle stays with the caller until it is
/// accepted by `set_clipboard_data`.
pub(crate) fn alloc_global_utf16(units: &[u16]) -> Option<isize> {
    unsafe {
        let bytes = std::mem::size_of_val(units);
        let hglobal = GlobalAlloc(GMEM_MOVEABLE, bytes).ok()?;
        let dst = GlobalLock(hglobal) as *mut u16;
        if dst.is_null() {
            let _ = GlobalFree(hglobal);
            return None;
        }
        std::ptr::copy_nonoverlapping(units.as_ptr(), dst, units.len());
        let _ = GlobalUnlock(hglobal);
        Some(hglobal.0 as isize)
    }
}

pub(crate) fn free_global(handle: isize) {
    unsafe {
        let _ = GlobalFree(HGLOBAL(handle as *mut core::ffi::c_void));
    }
}

/// Read a NUL-terminated UTF-16 string out of a clipboard-owned allocation.
/// The handle is borrowed; the clipboard keeps ownership.
pub(crate) fn read_global_utf16(handle: isize) -> Option<String> {
    unsafe {
        let hglobal = HGLOBAL(handle as *mut core::ffi::c_void);
        let src = GlobalLock(hglobal) as *const u16;
        if src.is_null() {
            return None;
        }
        let mut len = 0usize;
        while *src.add(len) != 0 {
            len += 1;
        }
        let text = String::from_utf16_lossy(std::slice::from_raw_parts(src, len));
        let _ = GlobalUnlock(hglobal);
        Some(text)
    }
}
