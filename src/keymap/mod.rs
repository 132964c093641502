//! Stateless code mapping queries between scan codes, virtual keys and
//! characters.
//!
//! Each query is a single delegation to the OS mapper with narrowing casts on
//! both sides. Zero is the OS "no mapping" sentinel throughout; the round
//! trip scan -> virtual key -> scan is best-effort and only holds for codes
//! the active layout actually maps.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Mapper mode selector (MAPVK_*). The numeric values are the OS contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum MapType {
    VirtualKeyToScanCode = 0,
    ScanCodeToVirtualKey = 1,
    VirtualKeyToChar = 2,
    ScanCodeToVirtualKeyEx = 3,
    VirtualKeyToScanCodeEx = 4,
}

impl TryFrom<u32> for MapType {
    type Error = InputError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MapType::VirtualKeyToScanCode),
            1 => Ok(MapType::ScanCodeToVirtualKey),
            2 => Ok(MapType::VirtualKeyToChar),
            3 => Ok(MapType::ScanCodeToVirtualKeyEx),
            4 => Ok(MapType::VirtualKeyToScanCodeEx),
            _ => Err(InputError::UnsupportedValue {
                what: "map type",
                value,
            }),
        }
    }
}

/// Scan code to virtual key, ignoring left/right distinctions.
#[cfg(target_os = "windows")]
pub fn scan_code_to_virtual_key(scan: u16) -> u16 {
    crate::ffi::map_virtual_key(scan as u32, MapType::ScanCodeToVirtualKey as u32) as u16
}

/// Virtual key to scan code; zero when the key has none in the active layout.
#[cfg(target_os = "windows")]
pub fn virtual_key_to_scan_code(vk: u16) -> u16 {
    crate::ffi::map_virtual_key(vk as u32, MapType::VirtualKeyToScanCode as u32) as u16
}

/// Layout-aware scan code to virtual key, distinguishing left/right keys.
#[cfg(target_os = "windows")]
pub fn scan_code_to_virtual_key_ex(scan: u16) -> u16 {
    crate::ffi::map_virtual_key(scan as u32, MapType::ScanCodeToVirtualKeyEx as u32) as u16
}

/// Layout-aware virtual key to scan code.
#[cfg(target_os = "windows")]
pub fn virtual_key_to_scan_code_ex(vk: u16) -> u16 {
    crate::ffi::map_virtual_key(vk as u32, MapType::VirtualKeyToScanCodeEx as u32) as u16
}

/// Unshifted character for a virtual key, `None` when the key produces none
/// (the OS zero sentinel) or only a dead-key diacritic.
#[cfg(target_os = "windows")]
pub fn virtual_key_to_char(vk: u16) -> Option<char> {
    let mapped = crate::ffi::map_virtual_key(vk as u32, MapType::VirtualKeyToChar as u32);
    if mapped == 0 {
        None
    } else {
        char::from_u32(mapped)
    }
}
