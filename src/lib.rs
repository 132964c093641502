//! WinSynth - synthetic input injection and clipboard interop for Windows.
//!
//! A thin, synchronous layer over the native user-interface subsystem:
//! - Mouse and keyboard event synthesis via `SendInput` batches
//! - Keyboard layout load / activate / query
//! - Scan-code / virtual-key / character mapping
//! - Clipboard Unicode text set and get
//! - Cursor position get/set
//!
//! There is no background machinery: every operation marshals its parameters
//! into the OS wire layout, makes one blocking call on the caller's thread
//! and interprets the returned sentinel. Record shaping (which flags a batch
//! carries, how Click expands into Down + Up) is pure code and compiles on
//! every platform; only the functions that cross into the OS are
//! Windows-only.
//!
//! ```no_run
//! # #[cfg(target_os = "windows")]
//! # fn demo() -> winsynth::InputResult<()> {
//! use winsynth::{KeyInput, KeyState, MouseAction};
//!
//! winsynth::input::send_mouse_button(MouseAction::LeftClick)?;
//! winsynth::input::send_key(KeyInput::Unicode('ж'), KeyState::Click)?;
//! winsynth::clipboard::set_unicode_text("hello")?;
//! # Ok(())
//! # }
//! ```

pub mod clipboard;
pub mod error;
pub mod input;
pub mod keymap;
pub mod layout;

#[cfg(target_os = "windows")]
mod ffi;

pub use clipboard::ClipboardFormat;
pub use error::{InputError, InputResult};
pub use input::{
    HardwarePayload, InputRecord, KeyEventFlags, KeyInput, KeyState, KeyboardPayload, MouseAction,
    MouseEventFlags, MousePayload,
};
pub use keymap::MapType;
pub use layout::LayoutHandle;
