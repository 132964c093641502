//! Input records - the crate-side view of the OS input event structures.
//!
//! `InputRecord` is an explicit sum type; the overlapping-memory union the OS
//! expects is produced only at the moment of crossing the FFI boundary. Records
//! are storage only: they carry no validation and no identity beyond the batch
//! they are submitted in.

use serde::{Deserialize, Serialize};

use super::flags::{KeyEventFlags, MouseEventFlags};

/// Payload of a synthetic mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MousePayload {
    /// Relative delta or normalized absolute coordinate, per `flags`.
    pub dx: i32,
    pub dy: i32,
    /// Wheel delta when `WHEEL`/`HWHEEL` is set, zero otherwise.
    pub data: i32,
    pub flags: MouseEventFlags,
    /// Zero lets the OS stamp the event time.
    pub time: u32,
    /// Opaque token attached to the injected event.
    pub extra_info: isize,
}

/// Payload of a synthetic keyboard event.
///
/// `vk` and `scan` are mutually exclusive: the `UNICODE` and `SCANCODE`
/// marker flags route the code through `scan` with `vk` zeroed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardPayload {
    pub vk: u16,
    pub scan: u16,
    pub flags: KeyEventFlags,
    pub time: u32,
    pub extra_info: isize,
}

/// Payload of a raw hardware event. Carried for layout completeness; the
/// façade never constructs one itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwarePayload {
    pub msg: u32,
    pub param_l: u16,
    pub param_h: u16,
}

/// One entry of a `SendInput` batch, tagged by device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRecord {
    Mouse(MousePayload),
    Keyboard(KeyboardPayload),
    Hardware(HardwarePayload),
}

impl InputRecord {
    pub fn is_mouse(&self) -> bool {
        matches!(self, InputRecord::Mouse(_))
    }

    pub fn is_keyboard(&self) -> bool {
        matches!(self, InputRecord::Keyboard(_))
    }

    /// Mouse flags of this record, empty for other device classes.
    pub fn mouse_flags(&self) -> MouseEventFlags {
        match self {
            InputRecord::Mouse(payload) => payload.flags,
            _ => MouseEventFlags::empty(),
        }
    }

    /// Keyboard flags of this record, empty for other device classes.
    pub fn key_flags(&self) -> KeyEventFlags {
        match self {
            InputRecord::Keyboard(payload) => payload.flags,
            _ => KeyEventFlags::empty(),
        }
    }
}

/// The three keyboard entry points collapsed into one source type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyInput {
    /// Layout-dependent virtual-key code.
    VirtualKey(u16),
    /// One UTF-16 code unit injected with the `UNICODE` marker. Code points
    /// outside the BMP are truncated to their low 16 bits.
    Unicode(char),
    /// Hardware scan code injected with the `SCANCODE` marker.
    ScanCode(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_accessors_ignore_other_classes() {
        let record = InputRecord::Hardware(HardwarePayload {
            msg: 0x0100,
            param_l: 1,
            param_h: 2,
        });
        assert_eq!(record.mouse_flags(), MouseEventFlags::empty());
        assert_eq!(record.key_flags(), KeyEventFlags::empty());
        assert!(!record.is_mouse());
        assert!(!record.is_keyboard());
    }

    #[test]
    fn test_key_input_serde_round_trip() {
        let inputs = [
            KeyInput::VirtualKey(0x0D),
            KeyInput::Unicode('ж'),
            KeyInput::ScanCode(0x1C),
        ];
        for input in inputs {
            let json = serde_json::to_string(&input).unwrap();
            let back: KeyInput = serde_json::from_str(&json).unwrap();
            assert_eq!(back, input);
        }
    }
}
