//! Flag and enum model for synthetic input.
//!
//! Every numeric value here is a binary contract with the OS: the bit flags
//! mirror the documented MOUSEEVENTF_* / KEYEVENTF_* constants and must never
//! drift. The closed enums (`MouseAction`, `KeyState`) are the crate-side
//! vocabulary; raw values coming from a wire or a caller-held integer enter
//! through `TryFrom` and fail with `UnsupportedValue` outside the set.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::InputError;

bitflags! {
    /// Mouse event flags (MOUSEEVENTF_*)
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct MouseEventFlags: u32 {
        const MOVE = 0x0001;
        const LEFT_DOWN = 0x0002;
        const LEFT_UP = 0x0004;
        const RIGHT_DOWN = 0x0008;
        const RIGHT_UP = 0x0010;
        const MIDDLE_DOWN = 0x0020;
        const MIDDLE_UP = 0x0040;
        const X_DOWN = 0x0080;
        const X_UP = 0x0100;
        const WHEEL = 0x0800;
        const HWHEEL = 0x1000;
        const MOVE_NOCOALESCE = 0x2000;
        const VIRTUAL_DESK = 0x4000;
        const ABSOLUTE = 0x8000;
    }
}

bitflags! {
    /// Keyboard event flags (KEYEVENTF_*). A key press carries no flag;
    /// `KEY_UP` marks the release.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct KeyEventFlags: u32 {
        const EXTENDED_KEY = 0x0001;
        const KEY_UP = 0x0002;
        const UNICODE = 0x0004;
        const SCANCODE = 0x0008;
    }
}

/// Logical mouse button actions.
///
/// The `*Click` variants expand into a Down record followed by an Up record;
/// `*Down` / `*Up` produce a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum MouseAction {
    None = 0,

    LeftClick = 1,
    RightClick = 2,
    MiddleClick = 3,
    XClick = 4,

    LeftDown = 5,
    RightDown = 6,
    MiddleDown = 7,
    XDown = 8,

    LeftUp = 9,
    RightUp = 10,
    MiddleUp = 11,
    XUp = 12,
}

impl MouseAction {
    /// Whether this action needs a second, Up-only record.
    pub fn is_click(self) -> bool {
        matches!(
            self,
            MouseAction::LeftClick
                | MouseAction::RightClick
                | MouseAction::MiddleClick
                | MouseAction::XClick
        )
    }

    /// Flags carried by the first record of this action.
    pub fn press_flags(self) -> MouseEventFlags {
        match self {
            MouseAction::None => MouseEventFlags::empty(),
            MouseAction::LeftClick | MouseAction::LeftDown => MouseEventFlags::LEFT_DOWN,
            MouseAction::RightClick | MouseAction::RightDown => MouseEventFlags::RIGHT_DOWN,
            MouseAction::MiddleClick | MouseAction::MiddleDown => MouseEventFlags::MIDDLE_DOWN,
            MouseAction::XClick | MouseAction::XDown => MouseEventFlags::X_DOWN,
            MouseAction::LeftUp => MouseEventFlags::LEFT_UP,
            MouseAction::RightUp => MouseEventFlags::RIGHT_UP,
            MouseAction::MiddleUp => MouseEventFlags::MIDDLE_UP,
            MouseAction::XUp => MouseEventFlags::X_UP,
        }
    }

    /// Flags carried by the follow-up record, empty for non-click actions.
    pub fn release_flags(self) -> MouseEventFlags {
        match self {
            MouseAction::LeftClick => MouseEventFlags::LEFT_UP,
            MouseAction::RightClick => MouseEventFlags::RIGHT_UP,
            MouseAction::MiddleClick => MouseEventFlags::MIDDLE_UP,
            MouseAction::XClick => MouseEventFlags::X_UP,
            _ => MouseEventFlags::empty(),
        }
    }
}

impl TryFrom<u8> for MouseAction {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let action = match value {
            0 => MouseAction::None,
            1 => MouseAction::LeftClick,
            2 => MouseAction::RightClick,
            3 => MouseAction::MiddleClick,
            4 => MouseAction::XClick,
            5 => MouseAction::LeftDown,
            6 => MouseAction::RightDown,
            7 => MouseAction::MiddleDown,
            8 => MouseAction::XDown,
            9 => MouseAction::LeftUp,
            10 => MouseAction::RightUp,
            11 => MouseAction::MiddleUp,
            12 => MouseAction::XUp,
            _ => {
                return Err(InputError::UnsupportedValue {
                    what: "mouse action",
                    value: value as u32,
                })
            }
        };
        Ok(action)
    }
}

/// Key transition applied to a keyboard or mouse button event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum KeyState {
    /// Down record followed by an Up record in one batch.
    Click = 0,
    Down = 1,
    Up = 2,
}

impl TryFrom<u8> for KeyState {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(KeyState::Click),
            1 => Ok(KeyState::Down),
            2 => Ok(KeyState::Up),
            _ => Err(InputError::UnsupportedValue {
                what: "key state",
                value: value as u32,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_flags_match_os_constants() {
        assert_eq!(MouseEventFlags::MOVE.bits(), 0x0001);
        assert_eq!(MouseEventFlags::LEFT_DOWN.bits(), 0x0002);
        assert_eq!(MouseEventFlags::LEFT_UP.bits(), 0x0004);
        assert_eq!(MouseEventFlags::RIGHT_DOWN.bits(), 0x0008);
        assert_eq!(MouseEventFlags::RIGHT_UP.bits(), 0x0010);
        assert_eq!(MouseEventFlags::MIDDLE_DOWN.bits(), 0x0020);
        assert_eq!(MouseEventFlags::MIDDLE_UP.bits(), 0x0040);
        assert_eq!(MouseEventFlags::X_DOWN.bits(), 0x0080);
        assert_eq!(MouseEventFlags::X_UP.bits(), 0x0100);
        assert_eq!(MouseEventFlags::WHEEL.bits(), 0x0800);
        assert_eq!(MouseEventFlags::HWHEEL.bits(), 0x1000);
        assert_eq!(MouseEventFlags::VIRTUAL_DESK.bits(), 0x4000);
        assert_eq!(MouseEventFlags::ABSOLUTE.bits(), 0x8000);
    }

    #[test]
    fn test_key_flags_match_os_constants() {
        assert_eq!(KeyEventFlags::EXTENDED_KEY.bits(), 0x0001);
        assert_eq!(KeyEventFlags::KEY_UP.bits(), 0x0002);
        assert_eq!(KeyEventFlags::UNICODE.bits(), 0x0004);
        assert_eq!(KeyEventFlags::SCANCODE.bits(), 0x0008);
    }

    #[test]
    fn test_click_variants_pair_down_with_up() {
        let pairs = [
            (MouseAction::LeftClick, MouseEventFlags::LEFT_DOWN, MouseEventFlags::LEFT_UP),
            (MouseAction::RightClick, MouseEventFlags::RIGHT_DOWN, MouseEventFlags::RIGHT_UP),
            (MouseAction::MiddleClick, MouseEventFlags::MIDDLE_DOWN, MouseEventFlags::MIDDLE_UP),
            (MouseAction::XClick, MouseEventFlags::X_DOWN, MouseEventFlags::X_UP),
        ];
        for (action, down, up) in pairs {
            assert!(action.is_click());
            assert_eq!(action.press_flags(), down);
            assert_eq!(action.release_flags(), up);
        }
    }

    #[test]
    fn test_non_click_variants_have_no_release() {
        let singles = [
            MouseAction::None,
            MouseAction::LeftDown,
            MouseAction::RightDown,
            MouseAction::MiddleDown,
            MouseAction::XDown,
            MouseAction::LeftUp,
            MouseAction::RightUp,
            MouseAction::MiddleUp,
            MouseAction::XUp,
        ];
        for action in singles {
            assert!(!action.is_click());
            assert_eq!(action.release_flags(), MouseEventFlags::empty());
        }
    }

    #[test]
    fn test_up_variants_map_to_up_flags() {
        assert_eq!(MouseAction::LeftUp.press_flags(), MouseEventFlags::LEFT_UP);
        assert_eq!(MouseAction::RightUp.press_flags(), MouseEventFlags::RIGHT_UP);
        assert_eq!(MouseAction::MiddleUp.press_flags(), MouseEventFlags::MIDDLE_UP);
        assert_eq!(MouseAction::XUp.press_flags(), MouseEventFlags::X_UP);
    }

    #[test]
    fn test_mouse_action_round_trip() {
        for raw in 0u8..=12 {
            let action = MouseAction::try_from(raw).unwrap();
            assert_eq!(action as u8, raw);
        }
    }

    #[test]
    fn test_out_of_set_values_rejected() {
        assert!(matches!(
            MouseAction::try_from(13),
            Err(InputError::UnsupportedValue { what: "mouse action", value: 13 })
        ));
        assert!(matches!(
            KeyState::try_from(3),
            Err(InputError::UnsupportedValue { what: "key state", value: 3 })
        ));
    }

    #[test]
    fn test_key_state_serde_round_trip() {
        for state in [KeyState::Click, KeyState::Down, KeyState::Up] {
            let json = serde_json::to_string(&state).unwrap();
            let back: KeyState = serde_json::from_str(&json).unwrap();
            assert_eq!(back, state);
        }
    }
}
